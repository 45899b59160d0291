//! Assembler directive (pseudo-op) classification for the GNU and TASKING dialects.

/// Assembler dialect whose directive set is accepted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Dialect {
    /// GNU `as` for TriCore.
    #[default]
    Gnu,
    /// TASKING `astc`.
    Tasking,
}

impl Dialect {
    /// Parses a lower-case dialect name (`"gnu"` or `"tasking"`).
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "gnu" => Some(Self::Gnu),
            "tasking" => Some(Self::Tasking),
            _ => None,
        }
    }

    /// Lower-case dialect name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Gnu => "gnu",
            Self::Tasking => "tasking",
        }
    }
}

/// What the document scanner does after reading a directive keyword.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
pub enum DirectiveKind {
    /// Discard the rest of the line.
    Ignore,
    /// Define the single symbol that follows.
    SingleSymbol,
    /// Define every symbol of a comma-separated list.
    MultiSymbol,
    /// Declare the symbol that follows as external.
    ExternSymbol,
}

/// Dialects in which a directive exists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
pub enum Availability {
    /// Accepted by both assemblers.
    Both,
    /// GNU only.
    Gnu,
    /// TASKING only.
    Tasking,
}

impl Availability {
    /// Returns true if the directive exists in `dialect`.
    #[must_use]
    pub const fn includes(self, dialect: Dialect) -> bool {
        matches!(
            (self, dialect),
            (Self::Both, _) | (Self::Gnu, Dialect::Gnu) | (Self::Tasking, Dialect::Tasking)
        )
    }
}

/// One directive keyword (without the leading dot).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct DirectiveEntry {
    /// Lower-case keyword.
    pub keyword: &'static str,
    /// Scanner behavior.
    pub kind: DirectiveKind,
    /// Dialects accepting the keyword.
    pub availability: Availability,
}

const fn entry(
    keyword: &'static str,
    kind: DirectiveKind,
    availability: Availability,
) -> DirectiveEntry {
    DirectiveEntry {
        keyword,
        kind,
        availability,
    }
}

use Availability::{Both, Gnu, Tasking};
use DirectiveKind::{ExternSymbol, Ignore, MultiSymbol, SingleSymbol};

/// Directive classification table.
pub const DIRECTIVE_TABLE: &[DirectiveEntry] = &[
    // data and alignment
    entry("align", Ignore, Both),
    entry("balign", Ignore, Gnu),
    entry("p2align", Ignore, Gnu),
    entry("ascii", Ignore, Both),
    entry("asciz", Ignore, Gnu),
    entry("asciiz", Ignore, Tasking),
    entry("string", Ignore, Gnu),
    entry("byte", Ignore, Both),
    entry("short", Ignore, Gnu),
    entry("half", Ignore, Both),
    entry("hword", Ignore, Gnu),
    entry("word", Ignore, Both),
    entry("int", Ignore, Gnu),
    entry("long", Ignore, Gnu),
    entry("quad", Ignore, Gnu),
    entry("dword", Ignore, Tasking),
    entry("uahalf", Ignore, Tasking),
    entry("uaword", Ignore, Tasking),
    entry("float", Ignore, Both),
    entry("double", Ignore, Both),
    entry("accum", Ignore, Tasking),
    entry("fract", Ignore, Tasking),
    entry("sfract", Ignore, Tasking),
    entry("space", Ignore, Both),
    entry("skip", Ignore, Gnu),
    entry("zero", Ignore, Gnu),
    entry("fill", Ignore, Gnu),
    entry("org", Ignore, Both),
    // sections
    entry("section", Ignore, Gnu),
    entry("pushsection", Ignore, Gnu),
    entry("popsection", Ignore, Gnu),
    entry("previous", Ignore, Gnu),
    entry("text", Ignore, Gnu),
    entry("data", Ignore, Gnu),
    entry("bss", Ignore, Gnu),
    entry("sdata", Ignore, Gnu),
    entry("zdata", Ignore, Gnu),
    entry("sbss", Ignore, Gnu),
    entry("zbss", Ignore, Gnu),
    entry("rodata", Ignore, Gnu),
    entry("sect", Ignore, Tasking),
    entry("sdecl", Ignore, Tasking),
    // symbol attributes and debug information
    entry("size", Ignore, Both),
    entry("type", Ignore, Both),
    entry("file", Ignore, Gnu),
    entry("ident", Ignore, Gnu),
    entry("version", Ignore, Gnu),
    entry("loc", Ignore, Gnu),
    entry("source", Ignore, Tasking),
    entry("calls", Ignore, Tasking),
    entry("compiler_invocation", Ignore, Tasking),
    entry("compiler_name", Ignore, Tasking),
    entry("compiler_version", Ignore, Tasking),
    entry("misrac", Ignore, Tasking),
    entry("optim", Ignore, Tasking),
    // assembly control
    entry("include", Ignore, Both),
    entry("end", Ignore, Both),
    entry("macro", Ignore, Both),
    entry("endm", Ignore, Both),
    entry("exitm", Ignore, Tasking),
    entry("pmacro", Ignore, Tasking),
    entry("dup", Ignore, Tasking),
    entry("rept", Ignore, Gnu),
    entry("irp", Ignore, Gnu),
    entry("endr", Ignore, Gnu),
    entry("if", Ignore, Both),
    entry("ifdef", Ignore, Gnu),
    entry("ifndef", Ignore, Gnu),
    entry("elif", Ignore, Both),
    entry("else", Ignore, Both),
    entry("endif", Ignore, Both),
    entry("define", Ignore, Tasking),
    entry("undef", Ignore, Tasking),
    entry("message", Ignore, Tasking),
    entry("warning", Ignore, Both),
    entry("fail", Ignore, Tasking),
    entry("error", Ignore, Both),
    // symbol definitions
    entry("set", SingleSymbol, Both),
    entry("equ", SingleSymbol, Both),
    entry("equiv", SingleSymbol, Gnu),
    entry("eqv", SingleSymbol, Gnu),
    entry("comm", SingleSymbol, Gnu),
    entry("lcomm", SingleSymbol, Gnu),
    entry("bcomm", SingleSymbol, Gnu),
    entry("blcomm", SingleSymbol, Gnu),
    entry("bit", SingleSymbol, Gnu),
    entry("alias", SingleSymbol, Tasking),
    entry("local", SingleSymbol, Both),
    entry("weak", MultiSymbol, Both),
    // external declarations
    entry("extern", ExternSymbol, Both),
    entry("global", ExternSymbol, Both),
    entry("globl", ExternSymbol, Gnu),
];

/// Classifies a directive keyword (without the leading dot) for `dialect`.
///
/// Matching is ASCII case-insensitive. `None` means an unknown pseudo-op.
#[must_use]
pub fn lookup_directive(keyword: &str, dialect: Dialect) -> Option<DirectiveKind> {
    DIRECTIVE_TABLE.iter().find_map(|entry| {
        (entry.keyword.eq_ignore_ascii_case(keyword) && entry.availability.includes(dialect))
            .then_some(entry.kind)
    })
}
