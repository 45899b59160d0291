//! Checker configuration.

use std::str::FromStr;

use thiserror::Error;
use tricore_tables::Dialect;

/// Invalid configuration value.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// Dialect name other than `gnu` or `tasking`.
    #[error("unknown dialect '{0}' (expected 'gnu' or 'tasking')")]
    UnknownDialect(String),
}

/// Options controlling a document check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
pub struct LintConfig {
    /// Assembler dialect whose directives are accepted.
    pub dialect: Dialect,
}

impl LintConfig {
    /// Configuration for `dialect`.
    #[must_use]
    pub const fn with_dialect(dialect: Dialect) -> Self {
        Self { dialect }
    }
}

/// Parses a dialect name.
///
/// # Errors
///
/// Returns [`ConfigError::UnknownDialect`] for names other than `gnu` and `tasking`.
pub fn parse_dialect(name: &str) -> Result<Dialect, ConfigError> {
    Dialect::from_name(name.trim()).ok_or_else(|| ConfigError::UnknownDialect(name.to_string()))
}

impl FromStr for LintConfig {
    type Err = ConfigError;

    /// Parses the dialect name into a configuration.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_dialect(s).map(Self::with_dialect)
    }
}
