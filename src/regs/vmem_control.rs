//! Register access to the virtual memory control functional group
//!
//! # Usage examples
//! Read the current translation table
//! ```ignore
//!     TTBR0.get()
//! ```
//! Check whether the MMU is on
//! ```ignore
//!     SCTLR.is_set(SCTLR::MMU)
//! ```
//!
//! All registers here are read-only views: there is no `set`.
// Author: Moritz Doll
// License: MIT

use tock_registers::register_bitfields;

register_bitfields! {u32,
    pub SCTLR [
        MMU OFFSET(0) NUMBITS(1) [Enable = 1, Disable = 0],
        ALIGNCHECK OFFSET(1) NUMBITS(1) [Enable = 1, Disable = 0],
        CACHE OFFSET(2) NUMBITS(1) [Enable = 1, Disable = 0],
        BRANCHPRED OFFSET(11) NUMBITS(1) [Enable = 1, Disable = 0],
        INSTR OFFSET(12) NUMBITS(1) [Enable = 1, Disable = 0],
        VECTOR OFFSET(13) NUMBITS(1) [High = 1, Low = 0],
        ALIGN OFFSET(22) NUMBITS(1) [],
        VECENABLE OFFSET(24) NUMBITS(1) [UseVectorTable = 0, ImplementationDefined = 1],
        EXCENDIAN OFFSET(25) NUMBITS(1) [LittleEndian = 0, BigEndian = 1],
        NMFIQ OFFSET(27) NUMBITS(1) [AllowMaskedFIQ = 0, ForbidMaskedFIQ = 1],
        TEXREMAP OFFSET(28) NUMBITS(1) [Enable = 1, Disable = 0],
        ACCFLAG OFFSET(29) NUMBITS(1) [Enable = 1, Disable = 0],
        THUMBEXC OFFSET(30) NUMBITS(1) [Arm = 0, Thumb = 1]
    ]
}

sys_coproc_register! {
    /// System control register
    SystemControl<SCTLR::Register>, 15, 1, 0, 0, 0
}

sys_coproc_register! {
    /// Translation table base register 0
    TranslationTableBase0<()>, 15, 2, 0, 0, 0
}

sys_coproc_register! {
    /// Translation table base register 1
    TranslationTableBase1<()>, 15, 2, 0, 0, 1
}

/// Public interface for the SCTLR
pub static SCTLR: SystemControl = SystemControl {};

/// Public interface for the TTBR0
pub static TTBR0: TranslationTableBase0 = TranslationTableBase0 {};

/// Public interface for the TTBR1
pub static TTBR1: TranslationTableBase1 = TranslationTableBase1 {};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::regs::identification::*;
    use crate::regs::{Encoding, SystemRegister};

    // ARM ARM, B4.1: MIDR, SCTLR, TTBR0 and TTBR1
    #[test]
    fn encodings_match_the_architecture() {
        assert_eq!(MainId::ENCODING, Encoding::new(15, 0, 0, 0, 0));
        assert_eq!(SystemControl::ENCODING, Encoding::new(15, 0, 1, 0, 0));
        assert_eq!(TranslationTableBase0::ENCODING, Encoding::new(15, 0, 2, 0, 0));
        assert_eq!(TranslationTableBase1::ENCODING, Encoding::new(15, 0, 2, 0, 1));
    }

    #[test]
    fn instruction_templates() {
        assert_eq!(MainId::MRC, "mrc p15, 0, {reg}, c0, c0, 0");
        assert_eq!(SystemControl::MRC, "mrc p15, 0, {reg}, c1, c0, 0");
        assert_eq!(TranslationTableBase0::MRC, "mrc p15, 0, {reg}, c2, c0, 0");
        assert_eq!(TranslationTableBase1::MRC, "mrc p15, 0, {reg}, c2, c0, 1");
    }

    #[test]
    fn ttbr_banks_differ_only_in_opc2() {
        let ttbr0 = TranslationTableBase0::ENCODING;
        let ttbr1 = TranslationTableBase1::ENCODING;
        assert_eq!(
            (ttbr0.coproc, ttbr0.opc1, ttbr0.crn, ttbr0.crm),
            (ttbr1.coproc, ttbr1.opc1, ttbr1.crn, ttbr1.crm)
        );
        assert_eq!((ttbr0.opc2, ttbr1.opc2), (0, 1));
    }
}
