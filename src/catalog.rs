//! The registers the probe reports, in report order

use crate::regs::identification::MainId;
use crate::regs::vmem_control::{SystemControl, TranslationTableBase0, TranslationTableBase1};
use crate::regs::{Encoding, SystemRegister};

/// A cataloged register: its label, its address and the accessor that reads it
#[derive(Copy, Clone, Debug)]
pub struct Descriptor {
    pub label: &'static str,
    pub encoding: Encoding,
    /// Executes the register's `mrc`. Needs PL1.
    pub read: fn() -> u32,
}

impl Descriptor {
    /// Describe the register `R` under `label`
    pub const fn of<R: SystemRegister>(label: &'static str) -> Descriptor {
        Descriptor {
            label,
            encoding: R::ENCODING,
            read: R::read_raw,
        }
    }
}

pub const MAIN_ID: Descriptor = Descriptor::of::<MainId>("Main ID register CP15:c0");
pub const MMU_CONTROL: Descriptor = Descriptor::of::<SystemControl>("MMU control register CP15:c1");
pub const TTBR0: Descriptor = Descriptor::of::<TranslationTableBase0>("TTBR0");
pub const TTBR1: Descriptor = Descriptor::of::<TranslationTableBase1>("TTBR1");

/// Every register the probe reads
pub static CATALOG: [Descriptor; 4] = [MAIN_ID, MMU_CONTROL, TTBR0, TTBR1];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_order() {
        let labels: Vec<_> = CATALOG.iter().map(|reg| reg.label).collect();
        assert_eq!(
            labels,
            [
                "Main ID register CP15:c0",
                "MMU control register CP15:c1",
                "TTBR0",
                "TTBR1"
            ]
        );
    }

    #[test]
    fn encodings_are_distinct() {
        for (i, a) in CATALOG.iter().enumerate() {
            for b in &CATALOG[i + 1..] {
                assert_ne!(a.encoding, b.encoding, "{} and {}", a.label, b.label);
            }
        }
    }

    #[test]
    fn encodings_render_like_the_manual() {
        assert_eq!(MAIN_ID.encoding.to_string(), "p15, 0, c0, c0, 0");
        assert_eq!(MMU_CONTROL.encoding.to_string(), "p15, 0, c1, c0, 0");
        assert_eq!(TTBR0.encoding.to_string(), "p15, 0, c2, c0, 0");
        assert_eq!(TTBR1.encoding.to_string(), "p15, 0, c2, c0, 1");
    }
}
