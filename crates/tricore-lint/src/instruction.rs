//! Instruction line encoding into classified operands.

use tricore_tables::{variants, GOT_SYMBOL, MAX_OPERANDS};

use crate::errors::LineError;
use crate::operand::{
    classify_expression, parse_memory, parse_register, ClassifiedOperand, ExpressionSite,
};

/// An instruction line reduced to its mnemonic and classified operands.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
pub struct ParsedInstruction {
    /// Lower-case mnemonic.
    pub name: String,
    /// Operands in order; a memory offset counts as its own operand.
    pub operands: Vec<ClassifiedOperand>,
    /// Index of the last operand written with an address qualifier.
    ///
    /// When set, only 32-bit variants can match.
    pub needs_prefix: Option<usize>,
    /// Symbols referenced by the operands, as written.
    pub labels: Vec<String>,
}

impl ParsedInstruction {
    fn new(name: String) -> Self {
        Self {
            name,
            operands: Vec::new(),
            needs_prefix: None,
            labels: Vec::new(),
        }
    }

    /// Number of operands.
    #[must_use]
    pub fn operand_count(&self) -> usize {
        self.operands.len()
    }

    /// Classification characters of all operands, in order.
    #[must_use]
    pub fn ops(&self) -> String {
        self.operands.iter().map(|operand| operand.class).collect()
    }

    fn push(&mut self, operand: ClassifiedOperand) -> Result<(), LineError> {
        if self.operands.len() >= MAX_OPERANDS {
            return Err(LineError::TooManyOperands);
        }
        self.operands.push(operand);
        Ok(())
    }

    fn push_expression(&mut self, text: &str, site: ExpressionSite<'_>) -> Result<(), LineError> {
        if self.operands.len() >= MAX_OPERANDS {
            return Err(LineError::TooManyOperands);
        }
        let expression = classify_expression(text, site)?;
        if expression.qualified {
            self.needs_prefix = Some(self.operands.len());
        }
        if let Some(label) = expression.label {
            if !label.eq_ignore_ascii_case(GOT_SYMBOL) {
                self.labels.push(label);
            }
        }
        self.push(expression.operand)
    }
}

/// Splits a line on whitespace and commas, keeping empty tokens between
/// adjacent separators. Each token carries its byte offset.
fn split_tokens(line: &str) -> Vec<(usize, &str)> {
    let mut tokens = Vec::new();
    let mut start = 0;
    for (index, c) in line.char_indices() {
        if c.is_whitespace() || c == ',' {
            tokens.push((start, &line[start..index]));
            start = index + c.len_utf8();
        }
    }
    tokens.push((start, &line[start..]));
    tokens
}

/// Parses a normalized instruction line (`mnemonic op1,op2,...`).
///
/// Matching is case-insensitive; symbol references keep their original case.
///
/// # Errors
///
/// Returns [`LineError::UnknownInstruction`] for mnemonics missing from the
/// opcode table, [`LineError::TooManyOperands`] past the operand limit, or
/// the first operand-level error.
pub fn parse_instruction(line: &str) -> Result<ParsedInstruction, LineError> {
    let lower = line.to_ascii_lowercase();
    let mut tokens = split_tokens(line).into_iter();

    let name = tokens
        .next()
        .map(|(_, mnemonic)| mnemonic.to_ascii_lowercase())
        .unwrap_or_default();
    if variants(&name).is_empty() {
        return Err(LineError::UnknownInstruction);
    }

    let mut instruction = ParsedInstruction::new(name);
    for (offset, token) in tokens {
        if instruction.operands.len() >= MAX_OPERANDS {
            return Err(LineError::TooManyOperands);
        }
        let token_lower = &lower[offset..offset + token.len()];
        match token_lower.as_bytes().first() {
            Some(b'%') => {
                let class = parse_register(token_lower)?;
                instruction.push(ClassifiedOperand::fixed(class))?;
            }
            Some(b'[') => {
                let memory = parse_memory(token_lower)?;
                instruction.push(ClassifiedOperand::fixed(memory.class))?;
                if let Some(at) = memory.offset_at {
                    let site = ExpressionSite {
                        line: &lower,
                        offset: offset + at,
                    };
                    instruction.push_expression(&token[at..], site)?;
                }
            }
            _ => {
                let site = ExpressionSite {
                    line: &lower,
                    offset,
                };
                instruction.push_expression(token, site)?;
            }
        }
    }

    Ok(instruction)
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::{parse_instruction, split_tokens};
    use crate::errors::LineError;

    #[test]
    fn splits_keeping_empty_tokens_and_offsets() {
        let tokens = split_tokens("abs %d1,,%a10");
        assert_eq!(tokens, [(0, "abs"), (4, "%d1"), (8, ""), (9, "%a10")]);
    }

    #[rstest]
    #[case("ld.w %d4,3026", "dq")]
    #[case("ld.w %d4,[%a14]-4", "d@4")]
    #[case("ld.w %d4,[%a4+c],16", "d*v")]
    #[case("st.a [%a5]+24+12,%a4", "@Ua")]
    #[case("mul.h %e0,%d3,%d4LL,1", "Dd-1")]
    #[case("jeq %d15,%d2,1b", "idU")]
    #[case("abs %d1,,%a10", "dUP")]
    #[case("debug", "")]
    fn encodes_operand_classes(#[case] line: &str, #[case] ops: &str) {
        let instruction = parse_instruction(line).expect("line should parse");
        assert_eq!(instruction.ops(), ops);
    }

    #[test]
    fn mnemonic_is_lower_cased() {
        let instruction = parse_instruction("MOV %D3,%D5").expect("upper-case line");
        assert_eq!(instruction.name, "mov");
        assert_eq!(instruction.ops(), "dd");
    }

    #[test]
    fn collects_label_references_with_original_case() {
        let instruction = parse_instruction("jeq %d5,6,LoopTop").expect("branch");
        assert_eq!(instruction.labels, ["LoopTop"]);
        let local = parse_instruction("jeq %d15,%d2,1b").expect("local branch");
        assert_eq!(local.labels, ["1"]);
    }

    #[test]
    fn got_pseudo_symbol_is_not_a_label_reference() {
        let instruction = parse_instruction("mov %d3,hi:_GLOBAL_OFFSET_TABLE_").expect("GOT");
        assert!(instruction.labels.is_empty());
        assert_eq!(instruction.needs_prefix, Some(1));
    }

    #[test]
    fn first_operand_prefix_is_tracked() {
        let instruction = parse_instruction("st.w lo:foo,%d2").expect("prefixed first operand");
        assert_eq!(instruction.needs_prefix, Some(0));
    }

    #[test]
    fn memory_offset_prefix_points_at_offset_operand() {
        let instruction = parse_instruction("ld.w %d4,[%a2]lo:foo").expect("prefixed offset");
        assert_eq!(instruction.needs_prefix, Some(2));
        assert_eq!(instruction.labels, ["foo"]);
    }

    #[rstest]
    #[case("move %d3,%d5", LineError::UnknownInstruction)]
    #[case("", LineError::UnknownInstruction)]
    #[case("abs %d3,%d5,%d2,%d1,%d6,%d7", LineError::TooManyOperands)]
    #[case("abs %d3,%d5,%d2,%d1,[%a4]8", LineError::TooManyOperands)]
    #[case("mov %d18, 32", LineError::InvalidRegisterNumber)]
    #[case("mov %d,32", LineError::MissingRegisterNumber)]
    #[case("st.a [,%a4", LineError::MissingAddressRegister)]
    fn reports_first_error(#[case] line: &str, #[case] expected: LineError) {
        assert_eq!(parse_instruction(line), Err(expected));
    }
}
