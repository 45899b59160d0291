//! Static reference tables for the TriCore instruction set.

/// Instruction encoding formats and their stable ids.
pub mod format;
pub use format::{InstructionFormat, ALL_FORMATS};

/// Operand classification alphabet and position-code compatibility matrix.
pub mod operands;
pub use operands::{
    accepted_classes, is_displacement_code, position_accepts, DISPLACEMENT_CODES,
    EVEN_ALIAS_CODE, OPERAND_MATRIX, PREFIXED_CONSTANT, UNRESOLVED, WORD_ALIAS_CODE,
    WORD_KEY_ALIAS_CODE,
};

/// Ordered opcode variant table and mnemonic lookup.
pub mod opcodes;
pub use opcodes::{
    is_known_mnemonic, mnemonic_count, variants, OpcodeVariant, MAX_OPERANDS, OPCODE_TABLE,
};

/// Address prefix qualifiers.
pub mod prefix;
pub use prefix::{lookup_prefix, Prefix, GOT_SYMBOL, PREFIX_TABLE};

/// Directive classification per assembler dialect.
pub mod directives;
pub use directives::{
    lookup_directive, Availability, Dialect, DirectiveEntry, DirectiveKind, DIRECTIVE_TABLE,
};

/// Table consistency error type.
pub mod error;
pub use error::TableError;

/// Cross-table consistency validation.
pub mod validate;
pub use validate::{validate_tables, validate_variants};

#[cfg(test)]
use proptest as _;
