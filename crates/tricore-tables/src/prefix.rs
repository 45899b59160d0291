//! Address prefix qualifiers (`hi:`, `lo:`, `got:`, ...) accepted in expressions.

/// Relocation-style qualifier written in front of an expression operand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
pub enum Prefix {
    /// No qualifier.
    #[default]
    None,
    /// Upper 16 bits, adjusted for sign extension of the lower half.
    Hi,
    /// Lower 16 bits.
    Lo,
    /// Small data area relative.
    Sm,
    /// Upper 16 bits, unadjusted.
    Up,
    /// GOT entry.
    Got,
    /// GOT entry, adjusted upper half.
    GotHi,
    /// GOT entry, lower half.
    GotLo,
    /// GOT entry, upper half.
    GotUp,
    /// Offset from the GOT.
    GotOff,
    /// Offset from the GOT, adjusted upper half.
    GotOffHi,
    /// Offset from the GOT, lower half.
    GotOffLo,
    /// Offset from the GOT, upper half.
    GotOffUp,
    /// PC-relative GOT address.
    GotPc,
    /// PC-relative GOT address, adjusted upper half.
    GotPcHi,
    /// PC-relative GOT address, lower half.
    GotPcLo,
    /// PC-relative GOT address, upper half.
    GotPcUp,
    /// Procedure linkage table entry.
    Plt,
    /// Bit position qualifier (`bpos:`).
    BitPos,
    /// Small register bank qualifier (`sbreg:`).
    SmallRegisterBank,
}

/// Textual qualifiers, including the trailing colon, and their prefixes.
pub const PREFIX_TABLE: &[(&str, Prefix)] = &[
    ("hi:", Prefix::Hi),
    ("lo:", Prefix::Lo),
    ("sm:", Prefix::Sm),
    ("up:", Prefix::Up),
    ("got:", Prefix::Got),
    ("gothi:", Prefix::GotHi),
    ("gotlo:", Prefix::GotLo),
    ("gotup:", Prefix::GotUp),
    ("gotoff:", Prefix::GotOff),
    ("gotoffhi:", Prefix::GotOffHi),
    ("gotofflo:", Prefix::GotOffLo),
    ("gotoffup:", Prefix::GotOffUp),
    ("gotpc:", Prefix::GotPc),
    ("gotpchi:", Prefix::GotPcHi),
    ("gotpclo:", Prefix::GotPcLo),
    ("gotpcup:", Prefix::GotPcUp),
    ("plt:", Prefix::Plt),
    ("bpos:", Prefix::BitPos),
    ("sbreg:", Prefix::SmallRegisterBank),
];

/// Pseudo-symbol naming the global offset table.
pub const GOT_SYMBOL: &str = "_GLOBAL_OFFSET_TABLE_";

/// Looks up a qualifier such as `"hi:"`. Matching is ASCII case-insensitive.
#[must_use]
pub fn lookup_prefix(qualifier: &str) -> Option<Prefix> {
    PREFIX_TABLE
        .iter()
        .find_map(|(text, prefix)| text.eq_ignore_ascii_case(qualifier).then_some(*prefix))
}

impl Prefix {
    /// True for the GOT-, GOTOFF- and GOTPC-relative qualifiers.
    #[must_use]
    pub const fn is_got_relative(self) -> bool {
        matches!(
            self,
            Self::Got
                | Self::GotHi
                | Self::GotLo
                | Self::GotUp
                | Self::GotOff
                | Self::GotOffHi
                | Self::GotOffLo
                | Self::GotOffUp
                | Self::GotPc
                | Self::GotPcHi
                | Self::GotPcLo
                | Self::GotPcUp
        )
    }

    /// Prefix to use when the expression references the GOT pseudo-symbol.
    ///
    /// `None` means the combination is illegal.
    #[must_use]
    pub const fn got_upgrade(self) -> Option<Self> {
        match self {
            Self::None => Some(Self::GotPc),
            Self::Hi => Some(Self::GotPcHi),
            Self::Lo => Some(Self::GotPcLo),
            Self::Up => Some(Self::GotPcUp),
            other if other.is_got_relative() => Some(other),
            _ => None,
        }
    }

    /// Prefixes that may qualify a plain numeric constant.
    #[must_use]
    pub const fn allows_constant(self) -> bool {
        matches!(self, Self::None | Self::Hi | Self::Lo | Self::Up)
    }

    /// True if writing this qualifier restricts matching to 32-bit variants.
    #[must_use]
    pub const fn sets_needs_prefix(self) -> bool {
        !matches!(self, Self::None | Self::BitPos | Self::SmallRegisterBank)
    }
}
