//! Read-only probe of the armv7 MMU configuration
//!
//! Dumps the Main ID register, the system control register and both translation table base
//! registers, one `mrc` each, and reports every value through a [`report::Sink`].
//!
//! ```ignore
//!     use mmu_peek::{coproc::Cp15, probe, report::LogSink};
//!
//!     // Must run at PL1, e.g. from a kernel module init routine
//!     probe::attach(&mut Cp15, &mut LogSink);
//!     // ...
//!     probe::detach(&mut LogSink);
//! ```

#![cfg_attr(not(test), no_std)]

use core::fmt;

pub mod catalog;
pub mod coproc;
#[cfg(feature = "decode")]
pub mod decode;
#[cfg(feature = "hooks")]
pub mod hooks;
pub mod probe;
pub mod regs;
pub mod report;

/// Snapshot of a 32 bit register
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[repr(transparent)]
pub struct RegisterValue(u32);

impl RegisterValue {
    /// Create a new register value
    pub const fn new(value: u32) -> RegisterValue {
        RegisterValue(value)
    }
    /// Converts the value to an unsigned integer
    pub const fn as_u32(self) -> u32 {
        self.0
    }
}

impl From<u32> for RegisterValue {
    fn from(value: u32) -> Self {
        RegisterValue::new(value)
    }
}

impl fmt::LowerHex for RegisterValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let val = self.0;
        fmt::LowerHex::fmt(&val, f)
    }
}

/// Renders as `0x%08x`
impl fmt::Display for RegisterValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:#010x}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::RegisterValue;

    #[test]
    fn zero_keeps_all_digits() {
        assert_eq!(RegisterValue::new(0).to_string(), "0x00000000");
    }

    #[test]
    fn all_ones_is_lowercase() {
        assert_eq!(RegisterValue::new(0xffff_ffff).to_string(), "0xffffffff");
    }

    #[test]
    fn small_values_are_padded() {
        assert_eq!(RegisterValue::new(0x6a).to_string(), "0x0000006a");
        assert_eq!(RegisterValue::new(0x410f_b767).to_string(), "0x410fb767");
    }

    #[test]
    fn lower_hex_is_unpadded() {
        assert_eq!(format!("{:x}", RegisterValue::new(0x6a)), "6a");
    }
}
