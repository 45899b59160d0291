//! Diagnostic types for line-level and document-level problems.
//!
//! Every problem found while checking a document becomes a [`Diagnostic`]:
//! a zero-based line number paired with a [`DiagnosticKind`]. Diagnostics
//! are collected in discovery order into a [`DiagnosticReport`], which also
//! renders them in the usual compiler style:
//!
//! ```text
//! boot.S:12: error: invalid register number
//! ```

use std::fmt;
use std::path::Path;

use thiserror::Error;

/// Problem found while parsing or matching a single instruction line.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Error)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
pub enum LineError {
    /// Mnemonic not present in the opcode table.
    #[error("unknown instruction")]
    UnknownInstruction,
    /// More operands than any variant can take.
    #[error("too many operands")]
    TooManyOperands,
    /// `%` not followed by a register class letter or `sp`.
    #[error("invalid register specification")]
    InvalidRegisterSpecification,
    /// Register number above 15 or written with three or more digits.
    #[error("invalid register number")]
    InvalidRegisterNumber,
    /// Register class letter without digits.
    #[error("missing register number")]
    MissingRegisterNumber,
    /// Characters left over after a complete register.
    #[error("trailing chars after register specification")]
    TrailingRegisterChars,
    /// Odd extended register (`%e3`).
    #[error("invalid extended register specification")]
    InvalidExtendedRegister,
    /// `[` not followed by a register.
    #[error("missing address register")]
    MissingAddressRegister,
    /// `[%` followed by something other than an address register.
    #[error("invalid or missing address register")]
    InvalidAddressRegister,
    /// Memory operand without its closing bracket.
    #[error("missing ']'")]
    MissingClosingBracket,
    /// Unsupported combination of increment and mode markers.
    #[error("invalid address mode")]
    InvalidAddressMode,
    /// Circular or bit-reverse mode on an odd address register.
    #[error("even address register required")]
    EvenAddressRegisterRequired,
    /// Offset written after a bit-reverse or index mode operand.
    #[error("no offset allowed for this mode")]
    NoOffsetAllowed,
    /// GOT pseudo-symbol combined with a non-GOT qualifier.
    #[error("illegal prefix for GOT expression")]
    IllegalGotPrefix,
    /// Numeric constant combined with a qualifier other than `hi:`, `lo:` or `up:`.
    #[error("illegal prefix for constant expression")]
    IllegalConstantPrefix,
    /// `bpos:` value outside 0..=7.
    #[error("illegal constant bit position")]
    IllegalBitPosition,
    /// Literal with a fractional value or outside the supported range.
    #[error("bad numeric constant")]
    BadNumericConstant,
    /// No variant of the mnemonic accepts the operands.
    #[error("opcode/operand mismatch: {0}")]
    OperandMismatch(String),
    /// Odd value in a branch displacement position.
    #[error("displacement is not even")]
    OddDisplacement,
}

/// Kind of problem attached to a document line.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Error)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
pub enum DiagnosticKind {
    /// Instruction line rejected.
    #[error(transparent)]
    Line(#[from] LineError),
    /// Directive keyword not known in the active dialect.
    #[error("unknown pseudo-op")]
    UnknownPseudoOp,
    /// Symbol directive without a symbol name.
    #[error("expected symbol name")]
    ExpectedSymbolName,
    /// Character that cannot start a label, directive or instruction.
    #[error("junk at end of line, first unrecognized character is '{0}'")]
    Junk(char),
    /// Referenced symbol neither defined nor declared external.
    #[error("unknown symbol")]
    UnknownSymbol {
        /// The unresolved name.
        name: String,
    },
}

/// A problem attached to a zero-based document line.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
pub struct Diagnostic {
    /// Zero-based line number.
    pub line: usize,
    /// What went wrong.
    pub kind: DiagnosticKind,
}

impl Diagnostic {
    /// Creates a diagnostic for `line`.
    #[must_use]
    pub fn new(line: usize, kind: impl Into<DiagnosticKind>) -> Self {
        Self {
            line,
            kind: kind.into(),
        }
    }

    /// Human-readable message.
    #[must_use]
    pub fn message(&self) -> String {
        self.kind.to_string()
    }

    /// Formats the diagnostic for stderr, with a one-based line number.
    #[must_use]
    pub fn format_for_stderr(&self, file: &Path) -> String {
        format!("{}:{}: error: {}", file.display(), self.line + 1, self.kind)
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "line {}: {}", self.line, self.kind)
    }
}

/// Diagnostics of one document, in discovery order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
pub struct DiagnosticReport {
    diagnostics: Vec<Diagnostic>,
}

impl DiagnosticReport {
    /// Creates an empty report.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            diagnostics: Vec::new(),
        }
    }

    /// Appends a diagnostic.
    pub fn push(&mut self, diagnostic: Diagnostic) {
        self.diagnostics.push(diagnostic);
    }

    /// Appends a diagnostic for `line`.
    pub fn report(&mut self, line: usize, kind: impl Into<DiagnosticKind>) {
        self.push(Diagnostic::new(line, kind));
    }

    /// Returns true if no diagnostics were collected.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.diagnostics.is_empty()
    }

    /// Number of diagnostics.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.diagnostics.len()
    }

    /// Iterates over the diagnostics in discovery order.
    pub fn iter(&self) -> impl Iterator<Item = &Diagnostic> {
        self.diagnostics.iter()
    }

    /// Borrows the diagnostics as a slice.
    #[must_use]
    pub fn as_slice(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    /// Consumes the report, returning the diagnostics.
    #[must_use]
    pub fn into_vec(self) -> Vec<Diagnostic> {
        self.diagnostics
    }

    /// Formats every diagnostic for stderr, one per line.
    #[must_use]
    pub fn format_for_stderr(&self, file: &Path) -> String {
        self.diagnostics
            .iter()
            .map(|diagnostic| diagnostic.format_for_stderr(file))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl fmt::Display for DiagnosticReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, diagnostic) in self.diagnostics.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{diagnostic}")?;
        }
        Ok(())
    }
}

impl FromIterator<Diagnostic> for DiagnosticReport {
    fn from_iter<T: IntoIterator<Item = Diagnostic>>(iter: T) -> Self {
        Self {
            diagnostics: iter.into_iter().collect(),
        }
    }
}

impl IntoIterator for DiagnosticReport {
    type Item = Diagnostic;
    type IntoIter = std::vec::IntoIter<Diagnostic>;

    fn into_iter(self) -> Self::IntoIter {
        self.diagnostics.into_iter()
    }
}
