//! Cross-table consistency checks.

use std::collections::{HashMap, HashSet};

use crate::directives::DIRECTIVE_TABLE;
use crate::error::TableError;
use crate::opcodes::{OpcodeVariant, MAX_OPERANDS, OPCODE_TABLE};
use crate::operands::accepted_classes;
use crate::prefix::PREFIX_TABLE;

/// Verifies that the opcode, operand, prefix and directive tables agree.
///
/// # Errors
///
/// Returns the first [`TableError`] found, in table order.
pub fn validate_tables() -> Result<(), TableError> {
    validate_variants(OPCODE_TABLE)?;
    validate_keywords(PREFIX_TABLE.iter().map(|(text, _)| *text))?;
    validate_keywords(DIRECTIVE_TABLE.iter().map(|entry| entry.keyword))
}

/// Checks an ordered variant list.
///
/// # Errors
///
/// Returns the first inconsistent variant.
pub fn validate_variants(table: &[OpcodeVariant]) -> Result<(), TableError> {
    let mut seen: HashSet<(&str, &str, u8)> = HashSet::new();
    let mut widest: HashMap<&str, bool> = HashMap::new();

    for variant in table {
        if variant.name != variant.name.to_ascii_lowercase() {
            return Err(TableError::NotLowerCase(variant.name.to_string()));
        }
        if variant.operand_count() > MAX_OPERANDS {
            return Err(TableError::TooManyPositions {
                mnemonic: variant.name.to_string(),
                args: variant.args.to_string(),
                limit: MAX_OPERANDS,
            });
        }
        if let Some(code) = variant
            .args
            .chars()
            .find(|code| accepted_classes(*code).is_none())
        {
            return Err(TableError::UnknownPositionCode {
                mnemonic: variant.name.to_string(),
                args: variant.args.to_string(),
                code,
            });
        }
        if !seen.insert((variant.name, variant.args, variant.format_id())) {
            return Err(TableError::DuplicateVariant {
                mnemonic: variant.name.to_string(),
                args: variant.args.to_string(),
                format: variant.format.name().to_string(),
            });
        }
        let wide_seen = widest.entry(variant.name).or_insert(false);
        if *wide_seen && !variant.is_32bit() {
            return Err(TableError::NarrowAfterWide {
                mnemonic: variant.name.to_string(),
                args: variant.args.to_string(),
            });
        }
        *wide_seen |= variant.is_32bit();
    }
    Ok(())
}

fn validate_keywords<'a>(keywords: impl Iterator<Item = &'a str>) -> Result<(), TableError> {
    let mut seen = HashSet::new();
    for keyword in keywords {
        if keyword != keyword.to_ascii_lowercase() {
            return Err(TableError::NotLowerCase(keyword.to_string()));
        }
        if !seen.insert(keyword) {
            return Err(TableError::DuplicateKeyword(keyword.to_string()));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::{validate_tables, validate_variants};
    use crate::error::TableError;
    use crate::format::InstructionFormat;
    use crate::opcodes::OpcodeVariant;

    const fn variant(name: &'static str, args: &'static str, format: InstructionFormat) -> OpcodeVariant {
        OpcodeVariant { name, args, format }
    }

    #[test]
    fn shipped_tables_are_consistent() {
        assert_eq!(validate_tables(), Ok(()));
    }

    #[test]
    fn rejects_unknown_position_code() {
        let table = [variant("add", "ddZ", InstructionFormat::Rr)];
        assert!(matches!(
            validate_variants(&table),
            Err(TableError::UnknownPositionCode { code: 'Z', .. })
        ));
    }

    #[test]
    fn rejects_narrow_variant_after_wide_one() {
        let table = [
            variant("add", "ddd", InstructionFormat::Rr),
            variant("add", "dd", InstructionFormat::Srr),
        ];
        assert!(matches!(
            validate_variants(&table),
            Err(TableError::NarrowAfterWide { .. })
        ));
    }

    #[test]
    fn rejects_duplicate_variant() {
        let table = [
            variant("abs", "dd", InstructionFormat::Rr),
            variant("abs", "dd", InstructionFormat::Rr),
        ];
        assert!(matches!(
            validate_variants(&table),
            Err(TableError::DuplicateVariant { .. })
        ));
    }

    #[test]
    fn rejects_oversized_and_upper_case_variants() {
        let oversized = [variant("insert", "dddd55", InstructionFormat::Rrrw)];
        assert!(matches!(
            validate_variants(&oversized),
            Err(TableError::TooManyPositions { limit: 5, .. })
        ));
        let shouting = [variant("ABS", "dd", InstructionFormat::Rr)];
        assert_eq!(
            validate_variants(&shouting),
            Err(TableError::NotLowerCase("ABS".to_string()))
        );
    }
}
