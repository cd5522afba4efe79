// Module adapted from the Cortex-A crate by Andre Richter

/// Instruction template of a read from a system coprocessor register.
/// Arguments are the coprocessor, CRn, CRm, Opcode1, Opcode2
macro_rules! mrc {
    ($cp:literal, $crn:literal, $crm:literal, $opc1:literal, $opc2:literal) => {
        // MRC<c> <coproc>, <opc1>, <Rt>, <CRn>, <CRm>{, <opc2>}
        concat!("mrc p", $cp, ", ", $opc1, ", {reg}, c", $crn, ", c", $crm, ", ", $opc2)
    };
}

/// Raw read from system coprocessor registers.
/// Arguments are the coprocessor, CRn, CRm, Opcode1, Opcode2
macro_rules! sys_coproc_read_raw {
    ($width:ty, $cp:literal, $crn:literal, $crm:literal, $opc1:literal, $opc2:literal) => {
        /// Reads the raw bits of the CPU register.
        ///
        /// The read is privileged: executed below PL1 the `mrc` raises an
        /// undefined instruction exception which is not caught here.
        #[inline]
        fn get(&self) -> $width {
            match () {
                #[cfg(target_arch = "arm")]
                () => {
                    let reg;
                    // Not `pure`: two reads must stay two reads, the register may change
                    // under us.
                    unsafe {
                        core::arch::asm!(
                            mrc!($cp, $crn, $crm, $opc1, $opc2),
                            reg = out(reg) reg,
                            options(nomem, nostack, preserves_flags)
                        );
                    }
                    reg
                }

                #[cfg(not(target_arch = "arm"))]
                () => unimplemented!("CP15 is only accessible on arm targets"),
            }
        }
    };
}

/// Declares a read-only system coprocessor register.
/// Arguments after the name and bitfield type are the coprocessor, CRn, CRm, Opcode1, Opcode2
macro_rules! sys_coproc_register {
    (
        $(#[$attr:meta])*
        $name:ident<$fields:ty>, $cp:literal, $crn:literal, $crm:literal, $opc1:literal, $opc2:literal
    ) => {
        $(#[$attr])*
        #[derive(Copy, Clone, Debug, Default)]
        pub struct $name;

        impl tock_registers::interfaces::Readable for $name {
            type T = u32;
            type R = $fields;

            sys_coproc_read_raw!(u32, $cp, $crn, $crm, $opc1, $opc2);
        }

        impl $crate::regs::SystemRegister for $name {
            const ENCODING: $crate::regs::Encoding =
                $crate::regs::Encoding::new($cp, $opc1, $crn, $crm, $opc2);
            const MRC: &'static str = mrc!($cp, $crn, $crm, $opc1, $opc2);

            #[inline]
            fn read_raw() -> u32 {
                tock_registers::interfaces::Readable::get(&$name)
            }
        }
    };
}
