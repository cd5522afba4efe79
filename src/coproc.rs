//! Where register values come from
//!
//! [`Cp15`] executes the real `mrc`, [`SimulatedCp15`] answers from a table so the probe can
//! run on any host.

use crate::catalog::Descriptor;
use crate::regs::Encoding;

/// Source of coprocessor register values
pub trait RegisterSource {
    /// Read the current contents of `reg`
    fn read(&mut self, reg: &Descriptor) -> u32;
}

/// The system control coprocessor of the running core
///
/// Every read executes one privileged `mrc`. The caller must run at PL1 or higher, otherwise
/// the core takes an undefined instruction exception; that fault belongs to the host.
#[derive(Copy, Clone, Debug, Default)]
pub struct Cp15;

impl RegisterSource for Cp15 {
    #[inline]
    fn read(&mut self, reg: &Descriptor) -> u32 {
        (reg.read)()
    }
}

const SLOTS: usize = 8;

/// An emulated CP15 with a handful of registers
///
/// Unseeded registers read as zero.
#[derive(Clone, Debug, Default)]
pub struct SimulatedCp15 {
    slots: [Option<(Encoding, u32)>; SLOTS],
    reads: usize,
}

impl SimulatedCp15 {
    pub fn new() -> SimulatedCp15 {
        SimulatedCp15::default()
    }

    /// Builder form of [`store`](Self::store)
    pub fn with(mut self, encoding: Encoding, value: u32) -> SimulatedCp15 {
        self.store(encoding, value);
        self
    }

    /// Set the contents of the register at `encoding`
    ///
    /// # Panics
    /// If all slots hold other registers.
    pub fn store(&mut self, encoding: Encoding, value: u32) {
        let slot = match self.position(encoding) {
            Some(index) => index,
            None => self
                .slots
                .iter()
                .position(Option::is_none)
                .expect("simulated coprocessor is full"),
        };
        self.slots[slot] = Some((encoding, value));
    }

    /// Contents of the register at `encoding`, without counting a read
    pub fn load(&self, encoding: Encoding) -> u32 {
        self.position(encoding)
            .and_then(|index| self.slots[index])
            .map_or(0, |(_, value)| value)
    }

    /// Number of reads performed through [`RegisterSource::read`]
    pub fn reads(&self) -> usize {
        self.reads
    }

    fn position(&self, encoding: Encoding) -> Option<usize> {
        self.slots
            .iter()
            .position(|slot| matches!(slot, Some((enc, _)) if *enc == encoding))
    }
}

impl RegisterSource for SimulatedCp15 {
    fn read(&mut self, reg: &Descriptor) -> u32 {
        self.reads += 1;
        self.load(reg.encoding)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{MAIN_ID, TTBR0, TTBR1};

    #[test]
    fn unseeded_reads_as_zero() {
        let mut cp15 = SimulatedCp15::new();
        assert_eq!(cp15.read(&MAIN_ID), 0);
        assert_eq!(cp15.reads(), 1);
    }

    #[test]
    fn store_overwrites() {
        let mut cp15 = SimulatedCp15::new().with(TTBR0.encoding, 1);
        cp15.store(TTBR0.encoding, 2);
        assert_eq!(cp15.load(TTBR0.encoding), 2);
        assert_eq!(cp15.load(TTBR1.encoding), 0);
    }

    #[test]
    #[cfg(not(target_arch = "arm"))]
    #[should_panic(expected = "only accessible on arm")]
    fn hardware_read_off_target_is_fatal() {
        Cp15.read(&MAIN_ID);
    }

    #[test]
    #[should_panic(expected = "full")]
    fn store_past_capacity_panics() {
        let mut cp15 = SimulatedCp15::new();
        for crm in 0..=SLOTS as u8 {
            cp15.store(Encoding::new(15, 0, 15, crm, 0), crm as u32);
        }
    }
}
