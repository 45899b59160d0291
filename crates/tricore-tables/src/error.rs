use thiserror::Error;

/// Inconsistency detected between the reference tables.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Error)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
pub enum TableError {
    /// A variant uses a position code missing from the operand matrix.
    #[error("variant `{mnemonic} {args}` uses position code '{code}' with no matrix entry")]
    UnknownPositionCode {
        /// Mnemonic of the offending variant.
        mnemonic: String,
        /// Argument pattern of the offending variant.
        args: String,
        /// Position code without a matrix entry.
        code: char,
    },
    /// A variant takes more operands than an instruction line may carry.
    #[error("variant `{mnemonic} {args}` exceeds the operand limit of {limit}")]
    TooManyPositions {
        /// Mnemonic of the offending variant.
        mnemonic: String,
        /// Argument pattern of the offending variant.
        args: String,
        /// Operand limit.
        limit: usize,
    },
    /// The same pattern and format appear twice for one mnemonic.
    #[error("variant `{mnemonic} {args}` ({format}) is declared twice")]
    DuplicateVariant {
        /// Mnemonic of the duplicated variant.
        mnemonic: String,
        /// Argument pattern of the duplicated variant.
        args: String,
        /// Format name of the duplicated variant.
        format: String,
    },
    /// A 16-bit variant is declared after a 32-bit variant of the same mnemonic.
    #[error("16-bit variant `{mnemonic} {args}` follows a 32-bit variant")]
    NarrowAfterWide {
        /// Mnemonic of the misplaced variant.
        mnemonic: String,
        /// Argument pattern of the misplaced variant.
        args: String,
    },
    /// A mnemonic, prefix or directive keyword contains upper-case letters.
    #[error("table keyword `{0}` is not lower case")]
    NotLowerCase(String),
    /// A prefix or directive keyword is declared twice.
    #[error("table keyword `{0}` is declared twice")]
    DuplicateKeyword(String),
}
