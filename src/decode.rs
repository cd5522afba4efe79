//! Field level view of the identification and control registers
//!
//! Handed to [`Sink::detail`](crate::report::Sink::detail) after the raw report; sinks that do
//! not override `detail` never see it.

use core::fmt;
use tock_registers::LocalRegisterCopy;

use crate::catalog::{Descriptor, MAIN_ID, MMU_CONTROL};
use crate::regs::identification::MIDR;
use crate::regs::vmem_control::SCTLR;

/// The fields of a Main ID register value
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct MainIdFields {
    pub implementer: u8,
    pub variant: u8,
    pub architecture: u8,
    pub part_number: u16,
    pub revision: u8,
}

impl MainIdFields {
    pub fn decode(value: u32) -> MainIdFields {
        let midr = LocalRegisterCopy::<u32, MIDR::Register>::new(value);
        MainIdFields {
            implementer: midr.read(MIDR::IMPLEMENTER) as u8,
            variant: midr.read(MIDR::VARIANT) as u8,
            architecture: midr.read(MIDR::ARCHITECTURE) as u8,
            part_number: midr.read(MIDR::PARTNUM) as u16,
            revision: midr.read(MIDR::REVISION) as u8,
        }
    }

    /// Implementer name, if it is a known one
    pub fn implementer_name(&self) -> Option<MIDR::IMPLEMENTER::Value> {
        LocalRegisterCopy::<u32, MIDR::Register>::new((self.implementer as u32) << 24)
            .read_as_enum(MIDR::IMPLEMENTER)
    }

    /// Architecture name, if the code is a known one
    pub fn architecture_name(&self) -> Option<MIDR::ARCHITECTURE::Value> {
        LocalRegisterCopy::<u32, MIDR::Register>::new((self.architecture as u32) << 16)
            .read_as_enum(MIDR::ARCHITECTURE)
    }
}

impl fmt::Display for MainIdFields {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.implementer_name() {
            Some(name) => write!(f, "implementer={}", name)?,
            None => write!(f, "implementer={:#04x}", self.implementer)?,
        }
        // r<variant>p<revision> as in the TRMs
        write!(
            f,
            " part={:#05x} r{}p{}",
            self.part_number, self.variant, self.revision
        )?;
        match self.architecture_name() {
            Some(name) => write!(f, " architecture={}", name),
            None => write!(f, " architecture={:#x}", self.architecture),
        }
    }
}

/// The MMU relevant bits of a system control register value
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct ControlFlags {
    pub mmu: bool,
    pub alignment_check: bool,
    pub data_cache: bool,
    pub branch_prediction: bool,
    pub instruction_cache: bool,
    pub high_vectors: bool,
    pub tex_remap: bool,
    pub access_flag: bool,
}

impl ControlFlags {
    pub fn decode(value: u32) -> ControlFlags {
        let sctlr = LocalRegisterCopy::<u32, SCTLR::Register>::new(value);
        ControlFlags {
            mmu: sctlr.is_set(SCTLR::MMU),
            alignment_check: sctlr.is_set(SCTLR::ALIGNCHECK),
            data_cache: sctlr.is_set(SCTLR::CACHE),
            branch_prediction: sctlr.is_set(SCTLR::BRANCHPRED),
            instruction_cache: sctlr.is_set(SCTLR::INSTR),
            high_vectors: sctlr.is_set(SCTLR::VECTOR),
            tex_remap: sctlr.is_set(SCTLR::TEXREMAP),
            access_flag: sctlr.is_set(SCTLR::ACCFLAG),
        }
    }
}

impl fmt::Display for ControlFlags {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let flags = [
            ("M", self.mmu),
            ("A", self.alignment_check),
            ("C", self.data_cache),
            ("Z", self.branch_prediction),
            ("I", self.instruction_cache),
            ("V", self.high_vectors),
            ("TRE", self.tex_remap),
            ("AFE", self.access_flag),
        ];
        let mut first = true;
        for (name, set) in flags.iter() {
            if !first {
                f.write_str(" ")?;
            }
            first = false;
            write!(f, "{}={}", name, *set as u8)?;
        }
        Ok(())
    }
}

/// Decoded view of a cataloged register
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Detail {
    MainId(MainIdFields),
    Control(ControlFlags),
}

impl fmt::Display for Detail {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Detail::MainId(fields) => fmt::Display::fmt(fields, f),
            Detail::Control(flags) => fmt::Display::fmt(flags, f),
        }
    }
}

/// The decoded fields of `reg`, if it has any
pub fn details(reg: &Descriptor, value: u32) -> Option<Detail> {
    if reg.encoding == MAIN_ID.encoding {
        Some(Detail::MainId(MainIdFields::decode(value)))
    } else if reg.encoding == MMU_CONTROL.encoding {
        Some(Detail::Control(ControlFlags::decode(value)))
    } else {
        None
    }
}
