//! TriCore assembly syntax checker.
//!
//! [`check_document`] runs the whole pipeline over raw source text and
//! returns per-line diagnostics; [`check_instruction`] matches a single
//! normalized instruction line against the opcode table.

use env_logger as _;
#[cfg(test)]
use proptest as _;
#[cfg(test)]
use tempfile as _;

/// Checker configuration.
pub mod config;
pub use config::{parse_dialect, ConfigError, LintConfig};

/// Line-level errors and document diagnostics.
pub mod errors;
pub use errors::{Diagnostic, DiagnosticKind, DiagnosticReport, LineError};

/// Comment stripping and whitespace normalization.
pub mod preprocess;
pub use preprocess::preprocess;

/// Numeric literal parsing and range classification.
pub mod numeric;
pub use numeric::{classify_numeric, parse_numeric_literal};

/// Register, memory and expression operand parsing.
pub mod operand;
pub use operand::{Aliases, ClassifiedOperand};

/// Instruction line encoding.
pub mod instruction;
pub use instruction::{parse_instruction, ParsedInstruction};

/// Opcode variant selection.
pub mod matcher;
pub use matcher::{check_instruction, find_opcode, CheckedInstruction};

/// Defined, external and referenced symbols.
pub mod symbols;
pub use symbols::{PendingReference, SymbolTable};

/// Document scanning.
pub mod scanner;
pub use scanner::{check_document, scan_document};

pub use tricore_tables::Dialect;
