//! Operand classification alphabet and the position-code compatibility matrix.
//!
//! A parsed operand is summarized by a single classification character. A
//! variant's argument pattern uses the same alphabet as position codes, and
//! [`OPERAND_MATRIX`] lists which operand classes each position accepts.

/// Class of an operand whose value is not known (labels, complex expressions).
pub const UNRESOLVED: char = 'U';

/// Class forced onto numeric operands written with an address prefix.
pub const PREFIXED_CONSTANT: char = 'q';

/// Position codes for relative branch displacements.
///
/// These are the only positions where a 16-bit variant may accept an
/// unresolved operand, and their values must be even.
pub const DISPLACEMENT_CODES: &str = "mxrRoO";

/// Position code satisfied only by even values.
pub const EVEN_ALIAS_CODE: char = 'v';

/// Position code satisfied only by multiples of four.
pub const WORD_ALIAS_CODE: char = '6';

/// Position code for word-scaled 8-bit offsets, satisfied only by multiples of four.
pub const WORD_KEY_ALIAS_CODE: char = 'k';

/// Position code to accepted operand classes.
pub const OPERAND_MATRIX: &[(char, &str)] = &[
    // data registers
    ('d', "di"),
    ('i', "i"),
    ('D', "D"),
    ('g', "g"),
    ('G', "G"),
    ('-', "-"),
    ('+', "+"),
    ('l', "l"),
    ('L', "L"),
    // address registers
    ('a', "aAIP"),
    ('A', "AP"),
    ('I', "I"),
    ('P', "P"),
    // memory
    ('@', "@&S"),
    ('&', "&"),
    ('S', "S"),
    ('<', "<"),
    ('>', ">"),
    ('*', "*"),
    ('#', "#"),
    ('?', "?"),
    // unsigned constants
    ('1', "1U"),
    ('2', "12U"),
    ('3', "123U"),
    ('f', "123fU"),
    ('5', "123f5vU"),
    ('v', "123fvU"),
    ('6', "123fv6U"),
    ('8', "123f5v6x8U"),
    ('n', "123f5v6x8nU"),
    ('k', "123f5v6x8nkU"),
    ('h', "123f5v6x8nkhU"),
    ('q', "123f5v6x8nkhqU"),
    ('W', "123f5v6x8nkhqWU"),
    // signed constants
    ('4', "1234U"),
    ('F', "1234fFU"),
    ('9', "1234fF5v6x8rR9U"),
    ('0', "1234fF5v6x8rR9n0U"),
    ('w', "1234fF5v6x8rR9n0khqwoU"),
    // relative displacements
    ('m', "123f5vU"),
    ('x', "6xU"),
    ('r', "4FrU"),
    ('R', "1234fF5v6x8rR9U"),
    ('o', "1234fF5v6x8rR9n0khqwoU"),
    ('O', "1234fF5v6x8rR9n0khqwoWOU"),
    // absolute addresses and bit patterns
    ('t', "123f5v6x8nkhqtU"),
    ('T', "123fv6x8nkhqWOtTU"),
    ('V', "123fv6x8nkhqWOtTVU"),
    ('M', "1234fF5v6x8rR9n0khqwoWOtTVMU"),
];

/// Returns the operand classes accepted at a variant position code.
#[must_use]
pub fn accepted_classes(position_code: char) -> Option<&'static str> {
    OPERAND_MATRIX
        .iter()
        .find_map(|(code, accepted)| (*code == position_code).then_some(*accepted))
}

/// Returns true if `class` may fill a variant position coded `position_code`.
///
/// Unknown position codes accept nothing.
#[must_use]
pub fn position_accepts(position_code: char, class: char) -> bool {
    accepted_classes(position_code).is_some_and(|accepted| accepted.contains(class))
}

/// Returns true if the position code belongs to the branch displacement family.
#[must_use]
pub fn is_displacement_code(position_code: char) -> bool {
    DISPLACEMENT_CODES.contains(position_code)
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::{
        accepted_classes, is_displacement_code, position_accepts, DISPLACEMENT_CODES,
        OPERAND_MATRIX, UNRESOLVED,
    };

    #[test]
    fn matrix_codes_are_unique() {
        let codes: HashSet<_> = OPERAND_MATRIX.iter().map(|(code, _)| *code).collect();
        assert_eq!(codes.len(), OPERAND_MATRIX.len());
    }

    #[test]
    fn every_position_accepts_its_own_class() {
        for (code, accepted) in OPERAND_MATRIX {
            assert!(accepted.contains(*code), "position {code} rejects itself");
        }
    }

    #[test]
    fn only_value_positions_accept_unresolved_operands() {
        for (code, accepted) in OPERAND_MATRIX {
            let register_or_memory = "diDgG-+lLaAIP@&S<>*#?".contains(*code);
            assert_eq!(accepted.contains(UNRESOLVED), !register_or_memory, "position {code}");
        }
    }

    #[test]
    fn data_position_accepts_implicit_data_register() {
        assert!(position_accepts('d', 'i'));
        assert!(!position_accepts('i', 'd'));
    }

    #[test]
    fn base_memory_position_accepts_stack_and_a15_forms() {
        assert_eq!(accepted_classes('@'), Some("@&S"));
        assert!(!position_accepts('@', '>'));
    }

    #[test]
    fn displacement_family_has_matrix_entries() {
        for code in DISPLACEMENT_CODES.chars() {
            assert!(is_displacement_code(code));
            assert!(accepted_classes(code).is_some());
        }
        assert!(!is_displacement_code('t'));
    }

    #[test]
    fn unknown_position_accepts_nothing() {
        assert_eq!(accepted_classes('Z'), None);
        assert!(!position_accepts('Z', 'd'));
    }
}
