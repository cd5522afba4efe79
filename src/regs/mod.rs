//! Processor registers

// The naming scheme and the submodules are according to the ARM Architecture Reference manual.
// The name of the struct is the description in ARM ARM and the static instance is name
// The submodules are given by the functional group
#[macro_use]
mod macros;

pub mod identification;
pub mod vmem_control;

use core::fmt;

/// Architectural address of a system coprocessor register, as written in an `MRC`
///
/// `MRC p<coproc>, <opc1>, <Rt>, c<crn>, c<crm>, <opc2>`
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Encoding {
    pub coproc: u8,
    pub opc1: u8,
    pub crn: u8,
    pub crm: u8,
    pub opc2: u8,
}

impl Encoding {
    /// Create a new encoding, arguments in `MRC` operand order
    pub const fn new(coproc: u8, opc1: u8, crn: u8, crm: u8, opc2: u8) -> Encoding {
        Encoding {
            coproc,
            opc1,
            crn,
            crm,
            opc2,
        }
    }
}

impl fmt::Display for Encoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "p{}, {}, c{}, c{}, {}",
            self.coproc, self.opc1, self.crn, self.crm, self.opc2
        )
    }
}

/// A register that is read with a single `MRC`
pub trait SystemRegister {
    /// Where the register lives in the coprocessor
    const ENCODING: Encoding;
    /// The instruction template handed to `asm!`
    const MRC: &'static str;

    /// Reads the register.
    ///
    /// The caller must execute at PL1 or higher.
    fn read_raw() -> u32;
}
