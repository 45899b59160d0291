//! Ordered TriCore opcode variant table.
//!
//! A mnemonic may have several variants (operand-count and addressing-mode
//! overloads). Declaration order is match priority: for each mnemonic the
//! 16-bit variants come first, so the shortest encoding wins when operands
//! allow it.

use std::collections::HashMap;
use std::sync::OnceLock;

use crate::format::InstructionFormat::{
    self, Abs, Absb, Bit, Bo, Bol, Brc, Brn, Brr, Rc, Rcpw, Rcr, Rcrr, Rcrw, Rlc, Rr, Rr1, Rr2,
    Rrpw, Rrr, Rrr1, Rrr2, Rrrr, Rrrw, Sb, Sbc, Sbr, Sbrn, Sc, Slr, Slro, Sr, Src, Sro, Srr, Srrs,
    Ssr, Ssro, Sys, B,
};

/// Maximum number of operands an instruction line may carry.
pub const MAX_OPERANDS: usize = 5;

/// One encoding overload of a mnemonic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct OpcodeVariant {
    /// Lower-case mnemonic.
    pub name: &'static str,
    /// Position codes, one per operand.
    pub args: &'static str,
    /// Encoding format.
    pub format: InstructionFormat,
}

impl OpcodeVariant {
    /// Number of operands this variant takes.
    #[must_use]
    pub const fn operand_count(&self) -> usize {
        self.args.len()
    }

    /// True if the variant encodes a 32-bit instruction.
    #[must_use]
    pub const fn is_32bit(&self) -> bool {
        self.format.is_32bit()
    }

    /// Numeric encoding format id.
    #[must_use]
    pub const fn format_id(&self) -> u8 {
        self.format.id()
    }

    /// Position code of operand `index`, if the variant has that many operands.
    #[must_use]
    pub fn position_code(&self, index: usize) -> Option<char> {
        self.args.chars().nth(index)
    }
}

const fn v(name: &'static str, args: &'static str, format: InstructionFormat) -> OpcodeVariant {
    OpcodeVariant { name, args, format }
}

/// Every opcode variant, grouped by mnemonic in priority order.
pub const OPCODE_TABLE: &[OpcodeVariant] = &[
    v("abs", "dd", Rr),
    v("abs.b", "dd", Rr),
    v("abs.h", "dd", Rr),
    v("abss", "dd", Rr),
    v("abss.h", "dd", Rr),
    v("absdif", "dd9", Rc),
    v("absdif", "ddd", Rr),
    v("absdif.b", "ddd", Rr),
    v("absdif.h", "ddd", Rr),
    v("absdifs", "dd9", Rc),
    v("absdifs", "ddd", Rr),
    v("absdifs.h", "ddd", Rr),
    v("add", "d4", Src),
    v("add", "di4", Src),
    v("add", "id4", Src),
    v("add", "dd", Srr),
    v("add", "did", Srr),
    v("add", "idd", Srr),
    v("add", "dd9", Rc),
    v("add", "ddd", Rr),
    v("add.a", "a4", Src),
    v("add.a", "aa", Srr),
    v("add.a", "aaa", Rr),
    v("add.b", "ddd", Rr),
    v("add.f", "ddd", Rrr),
    v("add.h", "ddd", Rr),
    v("addc", "dd9", Rc),
    v("addc", "ddd", Rr),
    v("addi", "ddw", Rlc),
    v("addih", "ddW", Rlc),
    v("addih.a", "aaW", Rlc),
    v("adds", "dd", Srr),
    v("adds", "dd9", Rc),
    v("adds", "ddd", Rr),
    v("adds.h", "ddd", Rr),
    v("adds.hu", "ddd", Rr),
    v("adds.u", "dd9", Rc),
    v("adds.u", "ddd", Rr),
    v("addsc.a", "aai2", Srrs),
    v("addsc.a", "aad2", Rr),
    v("addsc.at", "aad", Rr),
    v("addx", "dd9", Rc),
    v("addx", "ddd", Rr),
    v("and", "i8", Sc),
    v("and", "dd", Srr),
    v("and", "ddn", Rc),
    v("and", "ddd", Rr),
    v("and.and.t", "dd5d5", Bit),
    v("and.andn.t", "dd5d5", Bit),
    v("and.eq", "dd9", Rc),
    v("and.eq", "ddd", Rr),
    v("and.ge", "dd9", Rc),
    v("and.ge", "ddd", Rr),
    v("and.ge.u", "ddn", Rc),
    v("and.ge.u", "ddd", Rr),
    v("and.lt", "dd9", Rc),
    v("and.lt", "ddd", Rr),
    v("and.lt.u", "ddn", Rc),
    v("and.lt.u", "ddd", Rr),
    v("and.ne", "dd9", Rc),
    v("and.ne", "ddd", Rr),
    v("and.nor.t", "dd5d5", Bit),
    v("and.or.t", "dd5d5", Bit),
    v("and.t", "dd5d5", Bit),
    v("andn", "ddn", Rc),
    v("andn", "ddd", Rr),
    v("andn.t", "dd5d5", Bit),
    v("bisr", "8", Sc),
    v("bisr", "n", Rc),
    v("bmerge", "ddd", Rr),
    v("bsplit", "Dd", Rr),
    v("cachea.i", "@0", Bo),
    v("cachea.i", ">0", Bo),
    v("cachea.i", "<0", Bo),
    v("cachea.i", "*0", Bo),
    v("cachea.i", "#", Bo),
    v("cachea.w", "@0", Bo),
    v("cachea.w", ">0", Bo),
    v("cachea.w", "<0", Bo),
    v("cachea.w", "*0", Bo),
    v("cachea.w", "#", Bo),
    v("cachea.wi", "@0", Bo),
    v("cachea.wi", ">0", Bo),
    v("cachea.wi", "<0", Bo),
    v("cachea.wi", "*0", Bo),
    v("cachea.wi", "#", Bo),
    v("cachei.i", "@0", Bo),
    v("cachei.i", ">0", Bo),
    v("cachei.i", "<0", Bo),
    v("cachei.w", "@0", Bo),
    v("cachei.w", ">0", Bo),
    v("cachei.w", "<0", Bo),
    v("cachei.wi", "@0", Bo),
    v("cachei.wi", ">0", Bo),
    v("cachei.wi", "<0", Bo),
    v("cadd", "di4", Src),
    v("cadd", "ddd9", Rcr),
    v("cadd", "dddd", Rrr),
    v("caddn", "di4", Src),
    v("caddn", "ddd9", Rcr),
    v("caddn", "dddd", Rrr),
    v("call", "R", Sb),
    v("call", "O", B),
    v("calla", "T", B),
    v("calli", "a", Rr),
    v("clo", "dd", Rr),
    v("clo.h", "dd", Rr),
    v("cls", "dd", Rr),
    v("cls.h", "dd", Rr),
    v("clz", "dd", Rr),
    v("clz.h", "dd", Rr),
    v("cmov", "di4", Src),
    v("cmov", "did", Srr),
    v("cmovn", "di4", Src),
    v("cmovn", "did", Srr),
    v("cmp.f", "ddd", Rr),
    v("csub", "dddd", Rrr),
    v("csubn", "dddd", Rrr),
    v("debug", "", Sr),
    v("debug", "", Sys),
    v("dextr", "ddd5", Rrpw),
    v("dextr", "dddd", Rrrr),
    v("disable", "", Sys),
    v("disable", "d", Sys),
    v("div", "Ddd", Rr),
    v("div.f", "ddd", Rr),
    v("div.u", "Ddd", Rr),
    v("dsync", "", Sys),
    v("dvadj", "DDd", Rrr),
    v("dvinit", "Ddd", Rr),
    v("dvinit.b", "Ddd", Rr),
    v("dvinit.bu", "Ddd", Rr),
    v("dvinit.h", "Ddd", Rr),
    v("dvinit.hu", "Ddd", Rr),
    v("dvinit.u", "Ddd", Rr),
    v("dvstep", "DDd", Rrr),
    v("dvstep.u", "DDd", Rrr),
    v("enable", "", Sys),
    v("eq", "id4", Src),
    v("eq", "idd", Srr),
    v("eq", "dd9", Rc),
    v("eq", "ddd", Rr),
    v("eq.a", "daa", Rr),
    v("eq.b", "ddd", Rr),
    v("eq.h", "ddd", Rr),
    v("eq.w", "ddd", Rr),
    v("eqany.b", "dd9", Rc),
    v("eqany.b", "ddd", Rr),
    v("eqany.h", "dd9", Rc),
    v("eqany.h", "ddd", Rr),
    v("eqz.a", "da", Rr),
    v("extr", "dd55", Rrpw),
    v("extr", "ddD", Rrrr),
    v("extr", "ddd5", Rrrw),
    v("extr.u", "dd55", Rrpw),
    v("extr.u", "ddD", Rrrr),
    v("extr.u", "ddd5", Rrrw),
    v("fcall", "O", B),
    v("fcalla", "T", B),
    v("fcalli", "a", Rr),
    v("fret", "", Sr),
    v("fret", "", Sys),
    v("ftoi", "dd", Rr),
    v("ftoq31", "ddd", Rr),
    v("ftou", "dd", Rr),
    v("ge", "dd9", Rc),
    v("ge", "ddd", Rr),
    v("ge.a", "daa", Rr),
    v("ge.u", "ddn", Rc),
    v("ge.u", "ddd", Rr),
    v("imask", "Df55", Rcpw),
    v("imask", "Dfd5", Rcrw),
    v("imask", "Dd55", Rrpw),
    v("imask", "Ddd5", Rrrw),
    v("ins.t", "dd5d5", Bit),
    v("insert", "ddf55", Rcpw),
    v("insert", "ddfD", Rcrr),
    v("insert", "ddfd5", Rcrw),
    v("insert", "ddd55", Rrpw),
    v("insert", "dddD", Rrrr),
    v("insert", "dddd5", Rrrw),
    v("insn.t", "dd5d5", Bit),
    v("isync", "", Sys),
    v("itof", "dd", Rr),
    v("ixmax", "DDd", Rrr),
    v("ixmax.u", "DDd", Rrr),
    v("ixmin", "DDd", Rrr),
    v("ixmin.u", "DDd", Rrr),
    v("j", "R", Sb),
    v("j", "O", B),
    v("ja", "T", B),
    v("jeq", "i4x", Sbc),
    v("jeq", "i4m", Sbc),
    v("jeq", "idx", Sbr),
    v("jeq", "idm", Sbr),
    v("jeq", "d4o", Brc),
    v("jeq", "ddo", Brr),
    v("jeq.a", "aao", Brr),
    v("jge", "d4o", Brc),
    v("jge", "ddo", Brr),
    v("jge.u", "dfo", Brc),
    v("jge.u", "ddo", Brr),
    v("jgez", "dm", Sbr),
    v("jgtz", "dm", Sbr),
    v("ji", "a", Sr),
    v("ji", "a", Rr),
    v("jl", "O", B),
    v("jla", "T", B),
    v("jlez", "dm", Sbr),
    v("jli", "a", Rr),
    v("jlt", "d4o", Brc),
    v("jlt", "ddo", Brr),
    v("jlt.u", "dfo", Brc),
    v("jlt.u", "ddo", Brr),
    v("jltz", "dm", Sbr),
    v("jne", "i4x", Sbc),
    v("jne", "i4m", Sbc),
    v("jne", "idx", Sbr),
    v("jne", "idm", Sbr),
    v("jne", "d4o", Brc),
    v("jne", "ddo", Brr),
    v("jne.a", "aao", Brr),
    v("jned", "d4o", Brc),
    v("jned", "ddo", Brr),
    v("jnei", "d4o", Brc),
    v("jnei", "ddo", Brr),
    v("jnz", "iR", Sb),
    v("jnz", "dm", Sbr),
    v("jnz.a", "am", Sbr),
    v("jnz.a", "ao", Brr),
    v("jnz.t", "ifm", Sbrn),
    v("jnz.t", "d5o", Brn),
    v("jz", "iR", Sb),
    v("jz", "dm", Sbr),
    v("jz.a", "am", Sbr),
    v("jz.a", "ao", Brr),
    v("jz.t", "ifm", Sbrn),
    v("jz.t", "d5o", Brn),
    v("ld.a", "a@", Slr),
    v("ld.a", "a>", Slr),
    v("ld.a", "aS6", Slro),
    v("ld.a", "I@6", Sro),
    v("ld.a", "I&k", Sc),
    v("ld.a", "at", Abs),
    v("ld.a", "a@w", Bol),
    v("ld.a", "a>0", Bo),
    v("ld.a", "a<0", Bo),
    v("ld.a", "a*0", Bo),
    v("ld.a", "a#", Bo),
    v("ld.b", "dt", Abs),
    v("ld.b", "d@w", Bol),
    v("ld.b", "d>0", Bo),
    v("ld.b", "d<0", Bo),
    v("ld.b", "d*0", Bo),
    v("ld.b", "d#", Bo),
    v("ld.bu", "d@", Slr),
    v("ld.bu", "d>", Slr),
    v("ld.bu", "dSf", Slro),
    v("ld.bu", "i@f", Sro),
    v("ld.bu", "dt", Abs),
    v("ld.bu", "d@w", Bol),
    v("ld.bu", "d>0", Bo),
    v("ld.bu", "d<0", Bo),
    v("ld.bu", "d*0", Bo),
    v("ld.bu", "d#", Bo),
    v("ld.d", "Dt", Abs),
    v("ld.d", "D@0", Bo),
    v("ld.d", "D>0", Bo),
    v("ld.d", "D<0", Bo),
    v("ld.d", "D*0", Bo),
    v("ld.d", "D#", Bo),
    v("ld.da", "At", Abs),
    v("ld.da", "A@0", Bo),
    v("ld.da", "A>0", Bo),
    v("ld.da", "A<0", Bo),
    v("ld.da", "A*0", Bo),
    v("ld.da", "A#", Bo),
    v("ld.h", "d@", Slr),
    v("ld.h", "d>", Slr),
    v("ld.h", "dSv", Slro),
    v("ld.h", "i@v", Sro),
    v("ld.h", "dt", Abs),
    v("ld.h", "d@w", Bol),
    v("ld.h", "d>0", Bo),
    v("ld.h", "d<0", Bo),
    v("ld.h", "d*0", Bo),
    v("ld.h", "d#", Bo),
    v("ld.hu", "dt", Abs),
    v("ld.hu", "d@w", Bol),
    v("ld.hu", "d>0", Bo),
    v("ld.hu", "d<0", Bo),
    v("ld.hu", "d*0", Bo),
    v("ld.hu", "d#", Bo),
    v("ld.q", "dt", Abs),
    v("ld.q", "d@0", Bo),
    v("ld.q", "d>0", Bo),
    v("ld.q", "d<0", Bo),
    v("ld.q", "d*0", Bo),
    v("ld.q", "d#", Bo),
    v("ld.w", "d@", Slr),
    v("ld.w", "d>", Slr),
    v("ld.w", "dS6", Slro),
    v("ld.w", "i@6", Sro),
    v("ld.w", "i&k", Sc),
    v("ld.w", "dt", Abs),
    v("ld.w", "d@w", Bol),
    v("ld.w", "d>0", Bo),
    v("ld.w", "d<0", Bo),
    v("ld.w", "d*0", Bo),
    v("ld.w", "d#", Bo),
    v("ldlcx", "t", Abs),
    v("ldlcx", "@0", Bo),
    v("ldmst", "tD", Abs),
    v("ldmst", "@0D", Bo),
    v("ldmst", ">0D", Bo),
    v("ldmst", "<0D", Bo),
    v("ldmst", "*0D", Bo),
    v("ldmst", "#D", Bo),
    v("lducx", "t", Abs),
    v("lducx", "@0", Bo),
    v("lea", "at", Abs),
    v("lea", "a@w", Bol),
    v("lea", "a@0", Bo),
    v("loop", "ar", Sbr),
    v("loop", "ao", Brr),
    v("loopu", "o", Brr),
    v("lt", "id4", Src),
    v("lt", "idd", Srr),
    v("lt", "dd9", Rc),
    v("lt", "ddd", Rr),
    v("lt.a", "daa", Rr),
    v("lt.b", "ddd", Rr),
    v("lt.bu", "ddd", Rr),
    v("lt.h", "ddd", Rr),
    v("lt.hu", "ddd", Rr),
    v("lt.u", "ddn", Rc),
    v("lt.u", "ddd", Rr),
    v("lt.w", "ddd", Rr),
    v("lt.wu", "ddd", Rr),
    v("madd", "ddd9", Rcr),
    v("madd", "DDd9", Rcr),
    v("madd", "dddd", Rrr2),
    v("madd", "DDdd", Rrr2),
    v("madd.f", "dddd", Rrr),
    v("madd.h", "DDd-1", Rrr1),
    v("madd.h", "DDdl1", Rrr1),
    v("madd.h", "DDdL1", Rrr1),
    v("madd.h", "DDd+1", Rrr1),
    v("madd.q", "dddd1", Rrr1),
    v("madd.q", "dddg1", Rrr1),
    v("madd.q", "dddG1", Rrr1),
    v("madd.q", "DDdd1", Rrr1),
    v("madd.q", "DDdg1", Rrr1),
    v("madd.q", "DDdG1", Rrr1),
    v("madd.q", "ddgg1", Rrr1),
    v("madd.q", "ddGG1", Rrr1),
    v("madd.q", "DDgg1", Rrr1),
    v("madd.q", "DDGG1", Rrr1),
    v("madd.u", "DDdn", Rcr),
    v("madd.u", "DDdd", Rrr2),
    v("maddm.h", "DDd-1", Rrr1),
    v("maddm.h", "DDdl1", Rrr1),
    v("maddm.h", "DDdL1", Rrr1),
    v("maddm.h", "DDd+1", Rrr1),
    v("maddms.h", "DDd-1", Rrr1),
    v("maddms.h", "DDdl1", Rrr1),
    v("maddms.h", "DDdL1", Rrr1),
    v("maddms.h", "DDd+1", Rrr1),
    v("maddr.h", "dDd-1", Rrr1),
    v("maddr.h", "dDdl1", Rrr1),
    v("maddr.h", "dDdL1", Rrr1),
    v("maddr.h", "dDd+1", Rrr1),
    v("maddr.q", "ddgg1", Rrr1),
    v("maddr.q", "ddGG1", Rrr1),
    v("maddrs.h", "dDd-1", Rrr1),
    v("maddrs.h", "dDdl1", Rrr1),
    v("maddrs.h", "dDdL1", Rrr1),
    v("maddrs.h", "dDd+1", Rrr1),
    v("maddrs.q", "ddgg1", Rrr1),
    v("maddrs.q", "ddGG1", Rrr1),
    v("madds", "ddd9", Rcr),
    v("madds", "DDd9", Rcr),
    v("madds", "dddd", Rrr2),
    v("madds", "DDdd", Rrr2),
    v("madds.h", "DDd-1", Rrr1),
    v("madds.h", "DDdl1", Rrr1),
    v("madds.h", "DDdL1", Rrr1),
    v("madds.h", "DDd+1", Rrr1),
    v("madds.q", "dddd1", Rrr1),
    v("madds.q", "dddg1", Rrr1),
    v("madds.q", "dddG1", Rrr1),
    v("madds.q", "DDdd1", Rrr1),
    v("madds.q", "DDdg1", Rrr1),
    v("madds.q", "DDdG1", Rrr1),
    v("madds.q", "ddgg1", Rrr1),
    v("madds.q", "ddGG1", Rrr1),
    v("madds.q", "DDgg1", Rrr1),
    v("madds.q", "DDGG1", Rrr1),
    v("madds.u", "dddn", Rcr),
    v("madds.u", "DDdn", Rcr),
    v("madds.u", "dddd", Rrr2),
    v("madds.u", "DDdd", Rrr2),
    v("max", "dd9", Rc),
    v("max", "ddd", Rr),
    v("max.b", "ddd", Rr),
    v("max.bu", "ddd", Rr),
    v("max.h", "ddd", Rr),
    v("max.hu", "ddd", Rr),
    v("max.u", "ddn", Rc),
    v("max.u", "ddd", Rr),
    v("mfcr", "dW", Rlc),
    v("min", "dd9", Rc),
    v("min", "ddd", Rr),
    v("min.b", "ddd", Rr),
    v("min.bu", "ddd", Rr),
    v("min.h", "ddd", Rr),
    v("min.hu", "ddd", Rr),
    v("min.u", "ddn", Rc),
    v("min.u", "ddd", Rr),
    v("mov", "i8", Sc),
    v("mov", "d4", Src),
    v("mov", "dd", Srr),
    v("mov", "dw", Rlc),
    v("mov", "Dw", Rlc),
    v("mov", "dd", Rr),
    v("mov", "Dd", Rr),
    v("mov", "Ddd", Rr),
    v("mov.a", "af", Src),
    v("mov.a", "ad", Srr),
    v("mov.a", "ad", Rr),
    v("mov.aa", "aa", Srr),
    v("mov.aa", "aa", Rr),
    v("mov.d", "da", Srr),
    v("mov.d", "da", Rr),
    v("mov.u", "dW", Rlc),
    v("movh", "dW", Rlc),
    v("movh.a", "aW", Rlc),
    v("msub", "ddd9", Rcr),
    v("msub", "DDd9", Rcr),
    v("msub", "dddd", Rrr2),
    v("msub", "DDdd", Rrr2),
    v("msub.f", "dddd", Rrr),
    v("msub.h", "DDd-1", Rrr1),
    v("msub.h", "DDdl1", Rrr1),
    v("msub.h", "DDdL1", Rrr1),
    v("msub.h", "DDd+1", Rrr1),
    v("msub.q", "dddd1", Rrr1),
    v("msub.q", "dddg1", Rrr1),
    v("msub.q", "dddG1", Rrr1),
    v("msub.q", "DDdd1", Rrr1),
    v("msub.q", "DDdg1", Rrr1),
    v("msub.q", "DDdG1", Rrr1),
    v("msub.q", "ddgg1", Rrr1),
    v("msub.q", "ddGG1", Rrr1),
    v("msub.q", "DDgg1", Rrr1),
    v("msub.q", "DDGG1", Rrr1),
    v("msub.u", "DDdn", Rcr),
    v("msub.u", "DDdd", Rrr2),
    v("msubs", "ddd9", Rcr),
    v("msubs", "DDd9", Rcr),
    v("msubs", "dddd", Rrr2),
    v("msubs", "DDdd", Rrr2),
    v("msubs.h", "DDd-1", Rrr1),
    v("msubs.h", "DDdl1", Rrr1),
    v("msubs.h", "DDdL1", Rrr1),
    v("msubs.h", "DDd+1", Rrr1),
    v("msubs.q", "dddd1", Rrr1),
    v("msubs.q", "dddg1", Rrr1),
    v("msubs.q", "dddG1", Rrr1),
    v("msubs.q", "DDdd1", Rrr1),
    v("msubs.q", "DDdg1", Rrr1),
    v("msubs.q", "DDdG1", Rrr1),
    v("msubs.q", "ddgg1", Rrr1),
    v("msubs.q", "ddGG1", Rrr1),
    v("msubs.q", "DDgg1", Rrr1),
    v("msubs.q", "DDGG1", Rrr1),
    v("msubs.u", "dddn", Rcr),
    v("msubs.u", "DDdn", Rcr),
    v("msubs.u", "dddd", Rrr2),
    v("msubs.u", "DDdd", Rrr2),
    v("mtcr", "Wd", Rlc),
    v("mul", "dd", Srr),
    v("mul", "dd9", Rc),
    v("mul", "Dd9", Rc),
    v("mul", "ddd", Rr2),
    v("mul", "Ddd", Rr2),
    v("mul.f", "ddd", Rr),
    v("mul.h", "Dd-1", Rr1),
    v("mul.h", "Ddl1", Rr1),
    v("mul.h", "DdL1", Rr1),
    v("mul.h", "Dd+1", Rr1),
    v("mul.q", "ddd1", Rr1),
    v("mul.q", "Ddd1", Rr1),
    v("mul.q", "ddg1", Rr1),
    v("mul.q", "ddG1", Rr1),
    v("mul.q", "Ddg1", Rr1),
    v("mul.q", "DdG1", Rr1),
    v("mul.q", "dgg1", Rr1),
    v("mul.q", "dGG1", Rr1),
    v("mul.u", "Ddn", Rc),
    v("mul.u", "Ddd", Rr2),
    v("mulm.h", "Dd-1", Rr1),
    v("mulm.h", "Ddl1", Rr1),
    v("mulm.h", "DdL1", Rr1),
    v("mulm.h", "Dd+1", Rr1),
    v("mulr.h", "dd-1", Rr1),
    v("mulr.h", "ddl1", Rr1),
    v("mulr.h", "ddL1", Rr1),
    v("mulr.h", "dd+1", Rr1),
    v("mulr.q", "dgg1", Rr1),
    v("mulr.q", "dGG1", Rr1),
    v("muls", "dd9", Rc),
    v("muls", "ddd", Rr2),
    v("muls.u", "ddn", Rc),
    v("muls.u", "ddd", Rr2),
    v("nand", "ddn", Rc),
    v("nand", "ddd", Rr),
    v("nand.t", "dd5d5", Bit),
    v("ne", "dd9", Rc),
    v("ne", "ddd", Rr),
    v("ne.a", "daa", Rr),
    v("nez.a", "da", Rr),
    v("nop", "", Sr),
    v("nop", "", Sys),
    v("nor", "ddn", Rc),
    v("nor", "ddd", Rr),
    v("nor.t", "dd5d5", Bit),
    v("not", "d", Sr),
    v("or", "i8", Sc),
    v("or", "dd", Srr),
    v("or", "ddn", Rc),
    v("or", "ddd", Rr),
    v("or.and.t", "dd5d5", Bit),
    v("or.andn.t", "dd5d5", Bit),
    v("or.eq", "dd9", Rc),
    v("or.eq", "ddd", Rr),
    v("or.ge", "dd9", Rc),
    v("or.ge", "ddd", Rr),
    v("or.ge.u", "ddn", Rc),
    v("or.ge.u", "ddd", Rr),
    v("or.lt", "dd9", Rc),
    v("or.lt", "ddd", Rr),
    v("or.lt.u", "ddn", Rc),
    v("or.lt.u", "ddd", Rr),
    v("or.ne", "dd9", Rc),
    v("or.ne", "ddd", Rr),
    v("or.nor.t", "dd5d5", Bit),
    v("or.or.t", "dd5d5", Bit),
    v("or.t", "dd5d5", Bit),
    v("orn", "ddn", Rc),
    v("orn", "ddd", Rr),
    v("orn.t", "dd5d5", Bit),
    v("pack", "dDd", Rrr),
    v("parity", "dd", Rr),
    v("q31tof", "ddd", Rr),
    v("qseed.f", "dd", Rr),
    v("restore", "d", Sys),
    v("ret", "", Sr),
    v("ret", "", Sys),
    v("rfe", "", Sr),
    v("rfe", "", Sys),
    v("rfm", "", Sys),
    v("rslcx", "", Sys),
    v("rsub", "d", Sr),
    v("rsub", "dd9", Rc),
    v("rsubs", "dd9", Rc),
    v("rsubs.u", "dd9", Rc),
    v("sat.b", "d", Sr),
    v("sat.b", "dd", Rr),
    v("sat.bu", "d", Sr),
    v("sat.bu", "dd", Rr),
    v("sat.h", "d", Sr),
    v("sat.h", "dd", Rr),
    v("sat.hu", "d", Sr),
    v("sat.hu", "dd", Rr),
    v("sel", "ddd9", Rcr),
    v("sel", "dddd", Rrr),
    v("seln", "ddd9", Rcr),
    v("seln", "dddd", Rrr),
    v("sh", "d4", Src),
    v("sh", "dd9", Rc),
    v("sh", "ddd", Rr),
    v("sh.and.t", "dd5d5", Bit),
    v("sh.andn.t", "dd5d5", Bit),
    v("sh.eq", "dd9", Rc),
    v("sh.eq", "ddd", Rr),
    v("sh.ge", "dd9", Rc),
    v("sh.ge", "ddd", Rr),
    v("sh.ge.u", "ddn", Rc),
    v("sh.ge.u", "ddd", Rr),
    v("sh.h", "dd9", Rc),
    v("sh.h", "ddd", Rr),
    v("sh.lt", "dd9", Rc),
    v("sh.lt", "ddd", Rr),
    v("sh.lt.u", "ddn", Rc),
    v("sh.lt.u", "ddd", Rr),
    v("sh.nand.t", "dd5d5", Bit),
    v("sh.ne", "dd9", Rc),
    v("sh.ne", "ddd", Rr),
    v("sh.nor.t", "dd5d5", Bit),
    v("sh.or.t", "dd5d5", Bit),
    v("sh.orn.t", "dd5d5", Bit),
    v("sh.xnor.t", "dd5d5", Bit),
    v("sh.xor.t", "dd5d5", Bit),
    v("sha", "d4", Src),
    v("sha", "dd9", Rc),
    v("sha", "ddd", Rr),
    v("sha.h", "dd9", Rc),
    v("sha.h", "ddd", Rr),
    v("shas", "dd9", Rc),
    v("shas", "ddd", Rr),
    v("st.a", "@a", Ssr),
    v("st.a", ">a", Ssr),
    v("st.a", "S6a", Ssro),
    v("st.a", "@6I", Sro),
    v("st.a", "&kI", Sc),
    v("st.a", "ta", Abs),
    v("st.a", "@wa", Bol),
    v("st.a", ">0a", Bo),
    v("st.a", "<0a", Bo),
    v("st.a", "*0a", Bo),
    v("st.a", "#a", Bo),
    v("st.b", "@d", Ssr),
    v("st.b", ">d", Ssr),
    v("st.b", "Sfd", Ssro),
    v("st.b", "@fi", Sro),
    v("st.b", "td", Abs),
    v("st.b", "@wd", Bol),
    v("st.b", ">0d", Bo),
    v("st.b", "<0d", Bo),
    v("st.b", "*0d", Bo),
    v("st.b", "#d", Bo),
    v("st.d", "tD", Abs),
    v("st.d", "@0D", Bo),
    v("st.d", ">0D", Bo),
    v("st.d", "<0D", Bo),
    v("st.d", "*0D", Bo),
    v("st.d", "#D", Bo),
    v("st.da", "tA", Abs),
    v("st.da", "@0A", Bo),
    v("st.da", ">0A", Bo),
    v("st.da", "<0A", Bo),
    v("st.da", "*0A", Bo),
    v("st.da", "#A", Bo),
    v("st.h", "@d", Ssr),
    v("st.h", ">d", Ssr),
    v("st.h", "Svd", Ssro),
    v("st.h", "@vi", Sro),
    v("st.h", "td", Abs),
    v("st.h", "@wd", Bol),
    v("st.h", ">0d", Bo),
    v("st.h", "<0d", Bo),
    v("st.h", "*0d", Bo),
    v("st.h", "#d", Bo),
    v("st.q", "td", Abs),
    v("st.q", "@0d", Bo),
    v("st.q", ">0d", Bo),
    v("st.q", "<0d", Bo),
    v("st.q", "*0d", Bo),
    v("st.q", "#d", Bo),
    v("st.t", "t31", Absb),
    v("st.w", "@d", Ssr),
    v("st.w", ">d", Ssr),
    v("st.w", "S6d", Ssro),
    v("st.w", "@6i", Sro),
    v("st.w", "&ki", Sc),
    v("st.w", "td", Abs),
    v("st.w", "@wd", Bol),
    v("st.w", ">0d", Bo),
    v("st.w", "<0d", Bo),
    v("st.w", "*0d", Bo),
    v("st.w", "#d", Bo),
    v("stlcx", "t", Abs),
    v("stlcx", "@0", Bo),
    v("stucx", "t", Abs),
    v("stucx", "@0", Bo),
    v("sub", "dd", Srr),
    v("sub", "did", Srr),
    v("sub", "idd", Srr),
    v("sub", "ddd", Rr),
    v("sub.a", "P8", Sc),
    v("sub.a", "aa", Srr),
    v("sub.a", "aaa", Rr),
    v("sub.b", "ddd", Rr),
    v("sub.f", "ddd", Rrr),
    v("sub.h", "ddd", Rr),
    v("subc", "ddd", Rr),
    v("subs", "dd", Srr),
    v("subs", "ddd", Rr),
    v("subs.h", "ddd", Rr),
    v("subs.hu", "ddd", Rr),
    v("subs.u", "ddd", Rr),
    v("subx", "ddd", Rr),
    v("svlcx", "", Sys),
    v("swap.w", "td", Abs),
    v("swap.w", "@0d", Bo),
    v("swap.w", ">0d", Bo),
    v("swap.w", "<0d", Bo),
    v("swap.w", "*0d", Bo),
    v("swap.w", "#d", Bo),
    v("syscall", "n", Rc),
    v("trapsv", "", Sys),
    v("trapv", "", Sys),
    v("unpack", "Dd", Rr),
    v("updfl", "d", Rr),
    v("utof", "dd", Rr),
    v("wait", "", Sys),
    v("xnor", "ddn", Rc),
    v("xnor", "ddd", Rr),
    v("xnor.t", "dd5d5", Bit),
    v("xor", "dd", Srr),
    v("xor", "ddn", Rc),
    v("xor", "ddd", Rr),
    v("xor.eq", "dd9", Rc),
    v("xor.eq", "ddd", Rr),
    v("xor.ge", "dd9", Rc),
    v("xor.ge", "ddd", Rr),
    v("xor.ge.u", "ddn", Rc),
    v("xor.ge.u", "ddd", Rr),
    v("xor.lt", "dd9", Rc),
    v("xor.lt", "ddd", Rr),
    v("xor.lt.u", "ddn", Rc),
    v("xor.lt.u", "ddd", Rr),
    v("xor.ne", "dd9", Rc),
    v("xor.ne", "ddd", Rr),
    v("xor.t", "dd5d5", Bit),
];

fn variant_index() -> &'static HashMap<&'static str, Vec<&'static OpcodeVariant>> {
    static INDEX: OnceLock<HashMap<&'static str, Vec<&'static OpcodeVariant>>> = OnceLock::new();
    INDEX.get_or_init(|| {
        let mut index: HashMap<&'static str, Vec<&'static OpcodeVariant>> = HashMap::new();
        for variant in OPCODE_TABLE {
            index.entry(variant.name).or_default().push(variant);
        }
        index
    })
}

/// Returns the variants of a lower-case mnemonic in priority order.
///
/// Unknown mnemonics yield an empty slice.
#[must_use]
pub fn variants(name: &str) -> &'static [&'static OpcodeVariant] {
    variant_index()
        .get(name)
        .map(Vec::as_slice)
        .unwrap_or_default()
}

/// Returns true if the lower-case mnemonic has at least one variant.
#[must_use]
pub fn is_known_mnemonic(name: &str) -> bool {
    variant_index().contains_key(name)
}

/// Number of distinct mnemonics in [`OPCODE_TABLE`].
#[must_use]
pub fn mnemonic_count() -> usize {
    variant_index().len()
}

#[cfg(test)]
mod tests {
    use super::{is_known_mnemonic, variants, InstructionFormat, MAX_OPERANDS, OPCODE_TABLE};

    #[test]
    fn variants_preserve_declaration_order() {
        let jeq: Vec<_> = variants("jeq").iter().map(|variant| variant.args).collect();
        assert_eq!(jeq, ["i4x", "i4m", "idx", "idm", "d4o", "ddo"]);
    }

    #[test]
    fn sixteen_bit_variants_precede_thirty_two_bit_variants() {
        for variant in OPCODE_TABLE {
            let list = variants(variant.name);
            let first_wide = list.iter().position(|candidate| candidate.is_32bit());
            if let Some(first_wide) = first_wide {
                assert!(
                    list[first_wide..].iter().all(|candidate| candidate.is_32bit()),
                    "{} mixes widths",
                    variant.name
                );
            }
        }
    }

    #[test]
    fn operand_counts_stay_within_maximum() {
        assert!(OPCODE_TABLE
            .iter()
            .all(|variant| variant.operand_count() <= MAX_OPERANDS));
    }

    #[test]
    fn mnemonics_are_lower_case() {
        for variant in OPCODE_TABLE {
            assert_eq!(variant.name, variant.name.to_ascii_lowercase());
        }
    }

    #[test]
    fn lookup_is_exact_and_unknown_names_are_empty() {
        assert!(is_known_mnemonic("ld.w"));
        assert!(!is_known_mnemonic("LD.W"));
        assert!(!is_known_mnemonic("move"));
        assert!(variants("move").is_empty());
    }

    #[test]
    fn absolute_load_is_format_zero() {
        let first_wide = variants("ld.w")
            .iter()
            .find(|variant| variant.is_32bit())
            .copied();
        match first_wide {
            Some(variant) => {
                assert_eq!(variant.args, "dt");
                assert_eq!(variant.format, InstructionFormat::Abs);
                assert_eq!(variant.format_id(), 0);
                assert_eq!(variant.position_code(1), Some('t'));
                assert_eq!(variant.position_code(2), None);
            }
            None => panic!("expected a 32-bit ld.w variant"),
        }
    }
}
