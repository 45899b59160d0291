//! Operand token parsing: registers, memory references and expressions.
//!
//! Each operand is reduced to a single classification character from the
//! alphabet shared with the opcode table's position codes, plus the side
//! flags the matcher needs (alias gates and oddness).

use std::fmt;

use tricore_tables::{lookup_prefix, Prefix, PREFIXED_CONSTANT, UNRESOLVED};

use crate::errors::LineError;
use crate::numeric::{classify_numeric, parse_numeric_literal};

/// Narrower immediate positions a value also satisfies.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
pub struct Aliases(u8);

impl Aliases {
    /// No aliases.
    pub const NONE: Self = Self(0);
    /// Even value; satisfies the `v` position.
    pub const EVEN: Self = Self(1);
    /// Multiple of four; satisfies the `6` position.
    pub const MULTIPLE_OF_4: Self = Self(1 << 1);
    /// Word-scaled key; satisfies the `k` position.
    pub const WORD_KEY: Self = Self(1 << 2);
    /// Every alias, used for unresolved operands.
    pub const ALL: Self = Self(0b111);

    /// Returns true if every flag in `other` is set.
    #[must_use]
    pub const fn contains(self, other: Self) -> bool {
        self.0 & other.0 == other.0
    }

    /// Union of two flag sets.
    #[must_use]
    pub const fn union(self, other: Self) -> Self {
        Self(self.0 | other.0)
    }

    /// Returns true if no flag is set.
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }
}

impl fmt::Debug for Aliases {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let names: Vec<_> = [
            (Self::EVEN, "EVEN"),
            (Self::MULTIPLE_OF_4, "MULTIPLE_OF_4"),
            (Self::WORD_KEY, "WORD_KEY"),
        ]
        .into_iter()
        .filter_map(|(flag, name)| self.contains(flag).then_some(name))
        .collect();
        write!(f, "Aliases({})", names.join(" | "))
    }
}

/// One operand position of a parsed instruction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
pub struct ClassifiedOperand {
    /// Classification character.
    pub class: char,
    /// Alias gates; only meaningful for numeric and unresolved operands.
    pub aliases: Aliases,
    /// True if the operand is a literal with an odd value.
    pub odd: bool,
}

impl ClassifiedOperand {
    /// A register or memory operand.
    #[must_use]
    pub const fn fixed(class: char) -> Self {
        Self {
            class,
            aliases: Aliases::NONE,
            odd: false,
        }
    }

    /// An operand whose value is unknown; satisfies every alias gate.
    #[must_use]
    pub const fn unresolved() -> Self {
        Self {
            class: UNRESOLVED,
            aliases: Aliases::ALL,
            odd: false,
        }
    }

    /// A literal value, classified by range.
    ///
    /// With an address prefix the class is forced to the wide prefixed
    /// constant code and no aliases apply.
    #[must_use]
    pub const fn numeric(value: i64, prefixed: bool) -> Self {
        let odd = value & 1 != 0;
        if prefixed {
            return Self {
                class: PREFIXED_CONSTANT,
                aliases: Aliases::NONE,
                odd,
            };
        }

        let class = classify_numeric(value);
        let word_aligned = value & 3 == 0;
        let aliases = match class {
            'k' => Aliases::WORD_KEY,
            '6' => Aliases::MULTIPLE_OF_4.union(Aliases::WORD_KEY),
            '1' | '2' | '3' | 'f' | 'm' | 'x' | 'v' => {
                let even = if odd { Aliases::NONE } else { Aliases::EVEN };
                if word_aligned {
                    even.union(Aliases::MULTIPLE_OF_4).union(Aliases::WORD_KEY)
                } else {
                    even
                }
            }
            '5' | '8' | 'n' if word_aligned => Aliases::WORD_KEY,
            _ => Aliases::NONE,
        };
        Self {
            class,
            aliases,
            odd,
        }
    }
}

/// Reads a decimal register number (0..=15, at most two digits).
///
/// Returns the number and how many bytes were consumed.
fn read_register_number(text: &str) -> Result<(u8, usize), LineError> {
    let mut number: u8 = 0;
    let mut digits = 0;
    for byte in text.bytes().take_while(u8::is_ascii_digit) {
        number = number.saturating_mul(10).saturating_add(byte - b'0');
        digits += 1;
        if number > 15 || digits > 2 {
            return Err(LineError::InvalidRegisterNumber);
        }
    }
    if digits == 0 {
        return Err(LineError::MissingRegisterNumber);
    }
    Ok((number, digits))
}

/// Half-word selector written after a data register (`%d4ll`).
fn read_register_suffix(text: &str) -> Option<(char, usize)> {
    let bytes = text.as_bytes();
    match (bytes.first(), bytes.get(1)) {
        (Some(b'l'), Some(b'l')) => Some(('-', 2)),
        (Some(b'l'), Some(b'u')) => Some(('l', 2)),
        (Some(b'l'), _) => Some(('g', 1)),
        (Some(b'u'), Some(b'l')) => Some(('L', 2)),
        (Some(b'u'), Some(b'u')) => Some(('+', 2)),
        (Some(b'u'), _) => Some(('G', 1)),
        _ => None,
    }
}

/// Parses a lower-case register operand such as `%d4`, `%e2`, `%a15` or `%sp`.
///
/// # Errors
///
/// Returns the register-related [`LineError`] describing the first problem.
pub fn parse_register(token: &str) -> Result<char, LineError> {
    let body = token.strip_prefix('%').unwrap_or(token);
    if body == "sp" {
        return Ok('P');
    }

    let mut kind = match body.as_bytes().first() {
        Some(&kind @ (b'd' | b'e' | b'a')) => kind,
        _ => return Err(LineError::InvalidRegisterSpecification),
    };
    let (number, digits) = read_register_number(&body[1..])?;
    let mut rest = &body[1 + digits..];

    if kind == b'd' && rest == "+" {
        kind = b'e';
        rest = "";
    }

    let mut half_word = None;
    if kind == b'd' {
        if let Some((code, used)) = read_register_suffix(rest) {
            half_word = Some(code);
            rest = &rest[used..];
        }
    }
    if !rest.is_empty() {
        return Err(LineError::TrailingRegisterChars);
    }
    if let Some(code) = half_word {
        return Ok(code);
    }

    match kind {
        b'd' => Ok(if number == 15 { 'i' } else { 'd' }),
        b'e' if number & 1 != 0 => Err(LineError::InvalidExtendedRegister),
        b'e' => Ok('D'),
        _ => Ok(match number {
            10 => 'P',
            15 => 'I',
            n if n & 1 != 0 => 'a',
            _ => 'A',
        }),
    }
}

/// A parsed `[...]` memory reference.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MemoryOperand {
    /// Addressing-mode classification character.
    pub class: char,
    /// Byte offset within the token where a trailing offset expression starts.
    pub offset_at: Option<usize>,
}

/// Parses a lower-case memory operand such as `[%a4]`, `[+%a2]-4` or `[%a6+c]`.
///
/// # Errors
///
/// Returns the addressing-related [`LineError`] describing the first problem.
pub fn parse_memory(token: &str) -> Result<MemoryOperand, LineError> {
    let bytes = token.as_bytes();
    if bytes.len() <= 1 {
        return Err(LineError::MissingAddressRegister);
    }

    let mut at = 1;
    let pre_increment = bytes[at] == b'+';
    if pre_increment {
        at += 1;
    }
    if bytes.get(at) != Some(&b'%') {
        return Err(LineError::MissingAddressRegister);
    }
    at += 1;

    let register = if bytes[at..].starts_with(b"sp") {
        at += 2;
        10
    } else if bytes.get(at) == Some(&b'a') {
        at += 1;
        let (number, digits) = read_register_number(&token[at..])?;
        at += digits;
        number
    } else {
        return Err(LineError::InvalidAddressRegister);
    };

    let trailing = |end: usize| (end < bytes.len()).then_some(end);
    match bytes.get(at) {
        None => Err(LineError::MissingClosingBracket),
        Some(b']') => {
            let class = match register {
                _ if pre_increment => '<',
                15 => 'S',
                10 => '&',
                _ => '@',
            };
            Ok(MemoryOperand {
                class,
                offset_at: trailing(at + 1),
            })
        }
        Some(b'+') if pre_increment => Err(LineError::InvalidAddressMode),
        Some(b'+') => match bytes.get(at + 1) {
            None => Err(LineError::MissingClosingBracket),
            Some(b']') => Ok(MemoryOperand {
                class: '>',
                offset_at: trailing(at + 2),
            }),
            Some(&mode @ (b'c' | b'r' | b'i')) => {
                if register & 1 != 0 {
                    return Err(LineError::EvenAddressRegisterRequired);
                }
                if bytes.get(at + 2) != Some(&b']') {
                    return Err(LineError::MissingClosingBracket);
                }
                let offset_at = trailing(at + 3);
                match mode {
                    b'c' => Ok(MemoryOperand {
                        class: '*',
                        offset_at,
                    }),
                    _ if offset_at.is_some() => Err(LineError::NoOffsetAllowed),
                    b'r' => Ok(MemoryOperand {
                        class: '#',
                        offset_at: None,
                    }),
                    _ => Ok(MemoryOperand {
                        class: '?',
                        offset_at: None,
                    }),
                }
            }
            Some(_) => Err(LineError::InvalidAddressMode),
        },
        Some(_) => Err(LineError::InvalidAddressMode),
    }
}

/// A classified expression operand.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Expression {
    /// The classified operand.
    pub operand: ClassifiedOperand,
    /// Effective prefix after any GOT upgrade.
    pub prefix: Prefix,
    /// True if the qualifier restricts matching to 32-bit variants.
    pub qualified: bool,
    /// Symbol referenced by the expression, as written.
    pub label: Option<String>,
}

/// Where an expression sits in its instruction line.
#[derive(Debug, Clone, Copy)]
pub struct ExpressionSite<'a> {
    /// The whole instruction line, lower-cased.
    pub line: &'a str,
    /// Byte offset of the expression within `line`.
    pub offset: usize,
}

impl ExpressionSite<'_> {
    fn references_got(self) -> bool {
        self.line
            .get(self.offset..)
            .is_some_and(|rest| rest.contains("_global_offset_table_"))
    }
}

/// Classifies an expression operand, keeping the original case of any
/// referenced symbol.
///
/// # Errors
///
/// Returns a [`LineError`] for prefix misuse, out-of-range bit positions and
/// malformed numeric literals.
pub fn classify_expression(text: &str, site: ExpressionSite<'_>) -> Result<Expression, LineError> {
    let (qualifier, body) = match text.find(':') {
        Some(colon) => (Some(&text[..=colon]), &text[colon + 1..]),
        None => (None, text),
    };

    let mut prefix = Prefix::None;
    let mut bit_position = false;
    let mut qualified = false;
    if let Some(qualifier) = qualifier {
        match lookup_prefix(qualifier) {
            Some(Prefix::BitPos) => bit_position = true,
            Some(found) => {
                prefix = found;
                qualified = found.sets_needs_prefix();
            }
            None => {}
        }
    }

    if site.references_got() {
        prefix = prefix.got_upgrade().ok_or(LineError::IllegalGotPrefix)?;
    }

    let lower = body.to_ascii_lowercase();
    if let Some(value) = parse_numeric_literal(&lower) {
        let value = value?;
        if !prefix.allows_constant() {
            return Err(LineError::IllegalConstantPrefix);
        }
        if bit_position && !(0..=7).contains(&value) {
            return Err(LineError::IllegalBitPosition);
        }
        return Ok(Expression {
            operand: ClassifiedOperand::numeric(value, prefix != Prefix::None),
            prefix,
            qualified,
            label: None,
        });
    }

    let label = if is_identifier(body) {
        Some(body.to_string())
    } else {
        local_label_number(&lower).map(|number| number.to_string())
    };
    Ok(Expression {
        operand: ClassifiedOperand::unresolved(),
        prefix,
        qualified,
        label,
    })
}

fn is_identifier(text: &str) -> bool {
    let mut chars = text.chars();
    chars
        .next()
        .is_some_and(|first| first.is_ascii_alphabetic() || first == '_')
        && chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

/// Number of a local label reference such as `1b`, `12f` or `007p`.
fn local_label_number(text: &str) -> Option<u8> {
    let digits = text.strip_suffix(['p', 'n', 'b', 'f'])?;
    if !(1..=3).contains(&digits.len()) || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    digits.parse().ok()
}

#[cfg(test)]
mod tests {
    use rstest::rstest;
    use tricore_tables::Prefix;

    use super::{
        classify_expression, local_label_number, parse_memory, parse_register, Aliases,
        ClassifiedOperand, ExpressionSite,
    };
    use crate::errors::LineError;

    fn site(line: &str) -> ExpressionSite<'_> {
        ExpressionSite { line, offset: 0 }
    }

    #[rstest]
    #[case("%d3", 'd')]
    #[case("%d15", 'i')]
    #[case("%d4ll", '-')]
    #[case("%d4lu", 'l')]
    #[case("%d4l", 'g')]
    #[case("%d4ul", 'L')]
    #[case("%d4uu", '+')]
    #[case("%d4u", 'G')]
    #[case("%d2+", 'D')]
    #[case("%e2", 'D')]
    #[case("%a10", 'P')]
    #[case("%sp", 'P')]
    #[case("%a15", 'I')]
    #[case("%a3", 'a')]
    #[case("%a4", 'A')]
    #[case("%a0", 'A')]
    fn classifies_registers(#[case] token: &str, #[case] expected: char) {
        assert_eq!(parse_register(token), Ok(expected));
    }

    #[rstest]
    #[case("%x5", LineError::InvalidRegisterSpecification)]
    #[case("%", LineError::InvalidRegisterSpecification)]
    #[case("%spx", LineError::InvalidRegisterSpecification)]
    #[case("%d16", LineError::InvalidRegisterNumber)]
    #[case("%d18", LineError::InvalidRegisterNumber)]
    #[case("%d015", LineError::InvalidRegisterNumber)]
    #[case("%d", LineError::MissingRegisterNumber)]
    #[case("%d6x", LineError::TrailingRegisterChars)]
    #[case("%a4+", LineError::TrailingRegisterChars)]
    #[case("%d2++", LineError::TrailingRegisterChars)]
    #[case("%e3", LineError::InvalidExtendedRegister)]
    fn rejects_bad_registers(#[case] token: &str, #[case] expected: LineError) {
        assert_eq!(parse_register(token), Err(expected));
    }

    #[rstest]
    #[case("[%a4]", '@', None)]
    #[case("[%a15]", 'S', None)]
    #[case("[%sp]", '&', None)]
    #[case("[%a10]-8", '&', Some(6))]
    #[case("[+%a15]", '<', None)]
    #[case("[+%a14]-4", '<', Some(7))]
    #[case("[%a14+]-4", '>', Some(7))]
    #[case("[%sp+]", '>', None)]
    #[case("[%a4+c]", '*', None)]
    #[case("[%a4+c]16", '*', Some(7))]
    #[case("[%a4+r]", '#', None)]
    #[case("[%a4+i]", '?', None)]
    fn classifies_memory_operands(
        #[case] token: &str,
        #[case] class: char,
        #[case] offset_at: Option<usize>,
    ) {
        let memory = parse_memory(token).expect("valid memory operand");
        assert_eq!(memory.class, class);
        assert_eq!(memory.offset_at, offset_at);
    }

    #[rstest]
    #[case("[", LineError::MissingAddressRegister)]
    #[case("[a", LineError::MissingAddressRegister)]
    #[case("[+", LineError::MissingAddressRegister)]
    #[case("[%x5]", LineError::InvalidAddressRegister)]
    #[case("[%a18]-12", LineError::InvalidRegisterNumber)]
    #[case("[%a]", LineError::MissingRegisterNumber)]
    #[case("[%a5", LineError::MissingClosingBracket)]
    #[case("[%a5+", LineError::MissingClosingBracket)]
    #[case("[%a2+r", LineError::MissingClosingBracket)]
    #[case("[%a2+c", LineError::MissingClosingBracket)]
    #[case("[%a2+i", LineError::MissingClosingBracket)]
    #[case("[+%a5+]", LineError::InvalidAddressMode)]
    #[case("[%a4+x]", LineError::InvalidAddressMode)]
    #[case("[%a4-]", LineError::InvalidAddressMode)]
    #[case("[%a5+r]-4", LineError::EvenAddressRegisterRequired)]
    #[case("[%a5+c]-4", LineError::EvenAddressRegisterRequired)]
    #[case("[%a5+i]", LineError::EvenAddressRegisterRequired)]
    #[case("[%a4+r]4", LineError::NoOffsetAllowed)]
    #[case("[%a4+i]+8", LineError::NoOffsetAllowed)]
    fn rejects_bad_memory_operands(#[case] token: &str, #[case] expected: LineError) {
        assert_eq!(parse_memory(token), Err(expected));
    }

    #[test]
    fn numeric_aliases_follow_alignment() {
        let sixty = ClassifiedOperand::numeric(60, false);
        assert_eq!(sixty.class, '6');
        assert!(sixty.aliases.contains(Aliases::MULTIPLE_OF_4.union(Aliases::WORD_KEY)));
        assert!(!sixty.aliases.contains(Aliases::EVEN));

        let four = ClassifiedOperand::numeric(4, false);
        assert_eq!(four.class, '3');
        assert_eq!(
            four.aliases,
            Aliases::EVEN
                .union(Aliases::MULTIPLE_OF_4)
                .union(Aliases::WORD_KEY)
        );

        let six = ClassifiedOperand::numeric(6, false);
        assert_eq!(six.aliases, Aliases::EVEN);

        let two_hundred = ClassifiedOperand::numeric(200, false);
        assert_eq!(two_hundred.class, '8');
        assert_eq!(two_hundred.aliases, Aliases::WORD_KEY);

        let seven = ClassifiedOperand::numeric(7, false);
        assert!(seven.odd);
        assert!(seven.aliases.is_empty());

        let key = ClassifiedOperand::numeric(1020, false);
        assert_eq!(key.aliases, Aliases::WORD_KEY);
    }

    #[test]
    fn prefixed_numbers_are_forced_wide() {
        let operand = ClassifiedOperand::numeric(60, true);
        assert_eq!(operand.class, 'q');
        assert!(operand.aliases.is_empty());
    }

    #[test]
    fn unresolved_operand_passes_every_gate() {
        let operand = ClassifiedOperand::unresolved();
        assert_eq!(operand.class, 'U');
        assert!(operand.aliases.contains(Aliases::ALL));
    }

    #[test]
    fn expression_keeps_label_case() {
        let expression = classify_expression("FooBar", site("ld.w %d5,foobar")).expect("label");
        assert_eq!(expression.label.as_deref(), Some("FooBar"));
        assert_eq!(expression.operand.class, 'U');
        assert!(!expression.qualified);
    }

    #[test]
    fn hi_prefix_qualifies_label() {
        let expression = classify_expression("hi:.LC0", site("hi:.lc0")).expect("prefixed");
        assert_eq!(expression.prefix, Prefix::Hi);
        assert!(expression.qualified);
        assert_eq!(expression.label, None);
    }

    #[test]
    fn unknown_qualifier_is_ignored() {
        let expression = classify_expression("foo:bar", site("foo:bar")).expect("label");
        assert_eq!(expression.prefix, Prefix::None);
        assert!(!expression.qualified);
        assert_eq!(expression.label.as_deref(), Some("bar"));

        let numeric = classify_expression("xx:126", site("xx:126")).expect("numeric");
        assert_eq!(numeric.operand, ClassifiedOperand::numeric(126, false));
        assert!(!numeric.qualified);
    }

    #[test]
    fn sbreg_prefix_does_not_qualify() {
        let expression = classify_expression("sbreg:foo", site("sbreg:foo")).expect("sbreg");
        assert_eq!(expression.prefix, Prefix::SmallRegisterBank);
        assert!(!expression.qualified);
    }

    #[rstest]
    #[case("_GLOBAL_OFFSET_TABLE_", Prefix::GotPc)]
    #[case("hi:_GLOBAL_OFFSET_TABLE_", Prefix::GotPcHi)]
    #[case("lo:_GLOBAL_OFFSET_TABLE_", Prefix::GotPcLo)]
    #[case("up:_GLOBAL_OFFSET_TABLE_", Prefix::GotPcUp)]
    #[case("gotpc:_GLOBAL_OFFSET_TABLE_", Prefix::GotPc)]
    #[case("got:_GLOBAL_OFFSET_TABLE_", Prefix::Got)]
    fn got_references_upgrade_the_prefix(#[case] text: &str, #[case] expected: Prefix) {
        let line = text.to_ascii_lowercase();
        let expression = classify_expression(text, site(&line)).expect("GOT expression");
        assert_eq!(expression.prefix, expected);
    }

    #[test]
    fn got_search_starts_at_the_operand() {
        let line = "mov %d4,_global_offset_table_";
        let before = ExpressionSite { line, offset: 8 };
        let after = ExpressionSite { line, offset: 9 };
        assert_eq!(
            classify_expression("sm:x", before),
            Err(LineError::IllegalGotPrefix)
        );
        assert!(classify_expression("sm:x", after).is_ok());
    }

    #[rstest]
    #[case("sm:_GLOBAL_OFFSET_TABLE_", LineError::IllegalGotPrefix)]
    #[case("plt:_GLOBAL_OFFSET_TABLE_", LineError::IllegalGotPrefix)]
    #[case("sbreg:32", LineError::IllegalConstantPrefix)]
    #[case("got:4", LineError::IllegalConstantPrefix)]
    #[case("bpos:32", LineError::IllegalBitPosition)]
    #[case("bpos:-1", LineError::IllegalBitPosition)]
    #[case("1.33", LineError::BadNumericConstant)]
    fn rejects_bad_expressions(#[case] text: &str, #[case] expected: LineError) {
        let line = text.to_ascii_lowercase();
        assert_eq!(classify_expression(text, site(&line)), Err(expected));
    }

    #[test]
    fn bit_position_in_range_classifies_normally() {
        let expression = classify_expression("bpos:7", site("bpos:7")).expect("bit position");
        assert_eq!(expression.operand.class, '3');
        assert!(!expression.qualified);
        assert_eq!(expression.prefix, Prefix::None);
    }

    #[test]
    fn zero_is_numeric() {
        let expression = classify_expression("0", site("0")).expect("zero");
        assert_eq!(expression.operand.class, '1');
        assert_eq!(expression.label, None);
    }

    #[rstest]
    #[case("1b", Some(1))]
    #[case("12f", Some(12))]
    #[case("255p", Some(255))]
    #[case("199n", Some(199))]
    #[case("005b", Some(5))]
    #[case("000f", Some(0))]
    #[case("256b", None)]
    #[case("1234f", None)]
    #[case("b", None)]
    #[case("x1b", None)]
    fn recognizes_local_label_references(#[case] text: &str, #[case] expected: Option<u8>) {
        assert_eq!(local_label_number(text), expected);
    }

    #[test]
    fn complex_expressions_are_unresolved_without_label() {
        let expression = classify_expression("+24+12", site("+24+12")).expect("complex");
        assert_eq!(expression.operand, ClassifiedOperand::unresolved());
        assert_eq!(expression.label, None);

        let register_like = classify_expression("$pcxi", site("$pcxi")).expect("csfr");
        assert_eq!(register_like.label, None);
    }
}
