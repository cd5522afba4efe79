//! Register access to the identification registers
//!
//! Functional group according to the ARM ARM
//!
//! # Usage examples
//! Read the part number of the core
//! ```ignore
//!     MIDR.read(MIDR::PARTNUM)
//! ```

use core::fmt;
use tock_registers::register_bitfields;

register_bitfields! {u32,
    pub MIDR [
        REVISION OFFSET(0) NUMBITS(4) [],
        PARTNUM OFFSET(4) NUMBITS(12) [],
        ARCHITECTURE OFFSET(16) NUMBITS(4) [
            Armv4 = 0x1,
            Armv4T = 0x2,
            Armv5 = 0x3,
            Armv5T = 0x4,
            Armv5TE = 0x5,
            Armv5TEJ = 0x6,
            Armv6 = 0x7,
            Cpuid = 0xf
        ],
        VARIANT OFFSET(20) NUMBITS(4) [],
        IMPLEMENTER OFFSET(24) NUMBITS(8) [
            Arm = 0x41,
            Broadcom = 0x42,
            Cavium = 0x43,
            Dec = 0x44,
            Nvidia = 0x4e,
            Apm = 0x50,
            Qualcomm = 0x51,
            Marvell = 0x56,
            Intel = 0x69
        ]
    ]
}

impl fmt::Display for MIDR::IMPLEMENTER::Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let string = match &self {
            MIDR::IMPLEMENTER::Value::Arm => "ARM Limited",
            MIDR::IMPLEMENTER::Value::Broadcom => "Broadcom",
            MIDR::IMPLEMENTER::Value::Cavium => "Cavium",
            MIDR::IMPLEMENTER::Value::Dec => "Digital Equipment Corporation",
            MIDR::IMPLEMENTER::Value::Nvidia => "NVIDIA",
            MIDR::IMPLEMENTER::Value::Apm => "Applied Micro",
            MIDR::IMPLEMENTER::Value::Qualcomm => "Qualcomm",
            MIDR::IMPLEMENTER::Value::Marvell => "Marvell",
            MIDR::IMPLEMENTER::Value::Intel => "Intel",
        };
        f.write_str(string)
    }
}

impl fmt::Display for MIDR::ARCHITECTURE::Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let string = match &self {
            MIDR::ARCHITECTURE::Value::Armv4 => "ARMv4",
            MIDR::ARCHITECTURE::Value::Armv4T => "ARMv4T",
            MIDR::ARCHITECTURE::Value::Armv5 => "ARMv5",
            MIDR::ARCHITECTURE::Value::Armv5T => "ARMv5T",
            MIDR::ARCHITECTURE::Value::Armv5TE => "ARMv5TE",
            MIDR::ARCHITECTURE::Value::Armv5TEJ => "ARMv5TEJ",
            MIDR::ARCHITECTURE::Value::Armv6 => "ARMv6",
            MIDR::ARCHITECTURE::Value::Cpuid => "CPUID scheme",
        };
        f.write_str(string)
    }
}

sys_coproc_register! {
    /// Main ID register
    MainId<MIDR::Register>, 15, 0, 0, 0, 0
}

/// Public interface for the MIDR
pub static MIDR: MainId = MainId {};
