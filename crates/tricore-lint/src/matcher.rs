//! Opcode variant selection for parsed instructions.
//!
//! Variants are tried in table order, so the first compatible one (the
//! shortest encoding) wins.

use log::trace;
use tricore_tables::{
    is_displacement_code, position_accepts, variants, OpcodeVariant, EVEN_ALIAS_CODE,
    UNRESOLVED, WORD_ALIAS_CODE, WORD_KEY_ALIAS_CODE,
};

use crate::errors::LineError;
use crate::instruction::{parse_instruction, ParsedInstruction};
use crate::operand::{Aliases, ClassifiedOperand};

/// A parsed instruction together with the variant it matched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckedInstruction {
    /// The parsed line.
    pub instruction: ParsedInstruction,
    /// The selected encoding variant.
    pub variant: &'static OpcodeVariant,
}

fn operand_fits(code: char, operand: &ClassifiedOperand, wide: bool) -> bool {
    if !position_accepts(code, operand.class) {
        return false;
    }
    let gate = match code {
        EVEN_ALIAS_CODE => Aliases::EVEN,
        WORD_ALIAS_CODE => Aliases::MULTIPLE_OF_4,
        WORD_KEY_ALIAS_CODE => Aliases::WORD_KEY,
        _ => Aliases::NONE,
    };
    if !operand.aliases.contains(gate) {
        return false;
    }
    wide || operand.class != UNRESOLVED || is_displacement_code(code)
}

fn variant_fits(variant: &OpcodeVariant, instruction: &ParsedInstruction) -> bool {
    let wide = variant.is_32bit();
    variant.operand_count() == instruction.operand_count()
        && (wide || instruction.needs_prefix.is_none())
        && variant
            .args
            .chars()
            .zip(&instruction.operands)
            .all(|(code, operand)| operand_fits(code, operand, wide))
}

/// Returns the first variant of the instruction's mnemonic that accepts its
/// operands, or `None` if none does.
#[must_use]
pub fn find_opcode(instruction: &ParsedInstruction) -> Option<&'static OpcodeVariant> {
    variants(&instruction.name)
        .iter()
        .copied()
        .find(|variant| variant_fits(variant, instruction))
}

/// Parses and matches one normalized instruction line.
///
/// # Errors
///
/// Returns the parse error, [`LineError::OperandMismatch`] (naming the
/// lower-cased line) when no variant fits, or
/// [`LineError::OddDisplacement`] when the matched variant places an odd
/// literal in a branch displacement position.
pub fn check_instruction(line: &str) -> Result<CheckedInstruction, LineError> {
    let instruction = parse_instruction(line)?;
    let variant = find_opcode(&instruction)
        .ok_or_else(|| LineError::OperandMismatch(line.to_ascii_lowercase()))?;
    trace!(
        "{} {} matched {} {}",
        instruction.name,
        instruction.ops(),
        variant.args,
        variant.format
    );

    let odd_displacement = variant
        .args
        .chars()
        .zip(&instruction.operands)
        .any(|(code, operand)| is_displacement_code(code) && operand.odd);
    if odd_displacement {
        return Err(LineError::OddDisplacement);
    }

    Ok(CheckedInstruction {
        instruction,
        variant,
    })
}

#[cfg(test)]
mod tests {
    use rstest::rstest;
    use tricore_tables::InstructionFormat;

    use super::{check_instruction, find_opcode};
    use crate::errors::LineError;
    use crate::instruction::parse_instruction;

    #[rstest]
    #[case("mov %d3,%d5", "dd", InstructionFormat::Srr)]
    #[case("mov %d15,126", "i8", InstructionFormat::Sc)]
    #[case("mov %d3,60", "dw", InstructionFormat::Rlc)]
    #[case("ld.w %d4,[%a4+c],16", "d*0", InstructionFormat::Bo)]
    #[case("ld.w %d15,[%a2]8", "i@6", InstructionFormat::Sro)]
    #[case("ld.w %d15,[%a2]6", "d@w", InstructionFormat::Bol)]
    #[case("nop", "", InstructionFormat::Sr)]
    fn selects_first_compatible_variant(
        #[case] line: &str,
        #[case] args: &str,
        #[case] format: InstructionFormat,
    ) {
        let checked = check_instruction(line).expect("line should match");
        assert_eq!(checked.variant.args, args);
        assert_eq!(checked.variant.format, format);
    }

    #[test]
    fn prefix_forces_a_32_bit_variant() {
        let plain = check_instruction("mov %d15,foo").expect("plain label");
        assert_eq!(plain.variant.format, InstructionFormat::Rlc);

        let checked = check_instruction("ld.w %d15,[%a2]lo:foo").expect("prefixed offset");
        assert!(checked.variant.is_32bit());
        assert_eq!(checked.variant.args, "d@w");
    }

    #[test]
    fn unknown_qualifier_keeps_short_variants() {
        let checked = check_instruction("add %d2,xx:4").expect("qualified constant");
        assert_eq!(checked.variant.args, "d4");
        assert_eq!(checked.variant.format, InstructionFormat::Src);
        assert_eq!(checked.instruction.needs_prefix, None);

        let checked = check_instruction("mov %d15,xx:126").expect("qualified constant");
        assert_eq!(checked.variant.args, "i8");
        assert_eq!(checked.variant.format, InstructionFormat::Sc);
    }

    #[test]
    fn unresolved_operand_only_reaches_short_displacements() {
        let checked = check_instruction("j foo").expect("jump");
        assert_eq!(checked.variant.format, InstructionFormat::Sb);

        let instruction = parse_instruction("add %d2,%d3,foo").expect("parse");
        let variant = find_opcode(&instruction).expect("32-bit add");
        assert!(variant.is_32bit());
    }

    #[test]
    fn alias_gates_reject_misaligned_values() {
        let checked = check_instruction("ld.a %a4,[%a15]+6").expect("misaligned offset");
        assert_eq!(checked.variant.args, "a@w");
    }

    #[test]
    fn odd_displacement_is_rejected() {
        assert_eq!(
            check_instruction("jeq %d1,6,0x25"),
            Err(LineError::OddDisplacement)
        );
        assert!(check_instruction("jeq %d1,6,0x26").is_ok());
    }

    #[test]
    fn mismatch_names_the_lower_cased_line() {
        assert_eq!(
            check_instruction("ABS %d1,%a10"),
            Err(LineError::OperandMismatch("abs %d1,%a10".to_string()))
        );
    }

    #[test]
    fn parse_errors_take_precedence_over_matching() {
        assert_eq!(
            check_instruction("frobnicate %d1"),
            Err(LineError::UnknownInstruction)
        );
        assert_eq!(
            check_instruction("abs %d1,%x2"),
            Err(LineError::InvalidRegisterSpecification)
        );
    }
}
