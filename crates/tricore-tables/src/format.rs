//! TriCore instruction encoding formats.
//!
//! Format ids follow the order used by the GNU binutils TriCore port, so a
//! variant's `format_id` can be compared directly against assembler listings.

/// Encoding format of an opcode variant (`OP` layout family).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
#[repr(u8)]
#[allow(missing_docs)]
pub enum InstructionFormat {
    Abs = 0,
    Absb = 1,
    B = 2,
    Bit = 3,
    Bo = 4,
    Bol = 5,
    Brc = 6,
    Brn = 7,
    Brr = 8,
    Rc = 9,
    Rcpw = 10,
    Rcr = 11,
    Rcrr = 12,
    Rcrw = 13,
    Rlc = 14,
    Rr = 15,
    Rr1 = 16,
    Rr2 = 17,
    Rrpw = 18,
    Rrr = 19,
    Rrr1 = 20,
    Rrr2 = 21,
    Rrrr = 22,
    Rrrw = 23,
    Sys = 24,
    Sb = 25,
    Sbc = 26,
    Sbr = 27,
    Sbrn = 28,
    Sc = 29,
    Slr = 30,
    Slro = 31,
    Sr = 32,
    Src = 33,
    Sro = 34,
    Srr = 35,
    Srrs = 36,
    Ssr = 37,
    Ssro = 38,
}

/// Every format in id order.
pub const ALL_FORMATS: [InstructionFormat; 39] = [
    InstructionFormat::Abs,
    InstructionFormat::Absb,
    InstructionFormat::B,
    InstructionFormat::Bit,
    InstructionFormat::Bo,
    InstructionFormat::Bol,
    InstructionFormat::Brc,
    InstructionFormat::Brn,
    InstructionFormat::Brr,
    InstructionFormat::Rc,
    InstructionFormat::Rcpw,
    InstructionFormat::Rcr,
    InstructionFormat::Rcrr,
    InstructionFormat::Rcrw,
    InstructionFormat::Rlc,
    InstructionFormat::Rr,
    InstructionFormat::Rr1,
    InstructionFormat::Rr2,
    InstructionFormat::Rrpw,
    InstructionFormat::Rrr,
    InstructionFormat::Rrr1,
    InstructionFormat::Rrr2,
    InstructionFormat::Rrrr,
    InstructionFormat::Rrrw,
    InstructionFormat::Sys,
    InstructionFormat::Sb,
    InstructionFormat::Sbc,
    InstructionFormat::Sbr,
    InstructionFormat::Sbrn,
    InstructionFormat::Sc,
    InstructionFormat::Slr,
    InstructionFormat::Slro,
    InstructionFormat::Sr,
    InstructionFormat::Src,
    InstructionFormat::Sro,
    InstructionFormat::Srr,
    InstructionFormat::Srrs,
    InstructionFormat::Ssr,
    InstructionFormat::Ssro,
];

impl InstructionFormat {
    /// Stable numeric format id.
    #[must_use]
    pub const fn id(self) -> u8 {
        self as u8
    }

    /// Converts a numeric format id back into a format.
    #[must_use]
    pub const fn from_id(id: u8) -> Option<Self> {
        if (id as usize) < ALL_FORMATS.len() {
            Some(ALL_FORMATS[id as usize])
        } else {
            None
        }
    }

    /// Upper-case format name as used in the architecture manual.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Abs => "ABS",
            Self::Absb => "ABSB",
            Self::B => "B",
            Self::Bit => "BIT",
            Self::Bo => "BO",
            Self::Bol => "BOL",
            Self::Brc => "BRC",
            Self::Brn => "BRN",
            Self::Brr => "BRR",
            Self::Rc => "RC",
            Self::Rcpw => "RCPW",
            Self::Rcr => "RCR",
            Self::Rcrr => "RCRR",
            Self::Rcrw => "RCRW",
            Self::Rlc => "RLC",
            Self::Rr => "RR",
            Self::Rr1 => "RR1",
            Self::Rr2 => "RR2",
            Self::Rrpw => "RRPW",
            Self::Rrr => "RRR",
            Self::Rrr1 => "RRR1",
            Self::Rrr2 => "RRR2",
            Self::Rrrr => "RRRR",
            Self::Rrrw => "RRRW",
            Self::Sys => "SYS",
            Self::Sb => "SB",
            Self::Sbc => "SBC",
            Self::Sbr => "SBR",
            Self::Sbrn => "SBRN",
            Self::Sc => "SC",
            Self::Slr => "SLR",
            Self::Slro => "SLRO",
            Self::Sr => "SR",
            Self::Src => "SRC",
            Self::Sro => "SRO",
            Self::Srr => "SRR",
            Self::Srrs => "SRRS",
            Self::Ssr => "SSR",
            Self::Ssro => "SSRO",
        }
    }

    /// True for the 32-bit formats; the `S*` formats encode 16-bit instructions.
    #[must_use]
    pub const fn is_32bit(self) -> bool {
        (self as u8) <= (Self::Sys as u8)
    }
}

impl std::fmt::Display for InstructionFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
