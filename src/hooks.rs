//! C entry points for the host's module loader
//!
//! The loader calls `mmu_peek_init` once when the probe is loaded and `mmu_peek_exit` once
//! when it is removed. Neither keeps state.

use core::ffi::c_int;

use crate::coproc::Cp15;
use crate::probe;
use crate::report::LogSink;

/// Load hook: dump the registers.
///
/// Must be called at PL1 (kernel mode); the reads fault otherwise.
#[no_mangle]
pub extern "C" fn mmu_peek_init() -> c_int {
    probe::attach(&mut Cp15, &mut LogSink)
}

/// Unload hook
#[no_mangle]
pub extern "C" fn mmu_peek_exit() {
    probe::detach(&mut LogSink);
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use log::{LevelFilter, Log, Metadata, Record};

    use super::mmu_peek_exit;

    struct CapturingLogger {
        lines: Mutex<Vec<String>>,
    }

    impl Log for CapturingLogger {
        fn enabled(&self, metadata: &Metadata) -> bool {
            metadata.target() == "mmu_peek"
        }

        fn log(&self, record: &Record) {
            if self.enabled(record.metadata()) {
                self.lines.lock().unwrap().push(record.args().to_string());
            }
        }

        fn flush(&self) {}
    }

    static LOGGER: CapturingLogger = CapturingLogger {
        lines: Mutex::new(Vec::new()),
    };

    // Only test in the library that installs a logger
    #[test]
    fn exit_hook_logs_unloaded_once() {
        log::set_logger(&LOGGER).unwrap();
        log::set_max_level(LevelFilter::Trace);

        mmu_peek_exit();

        assert_eq!(*LOGGER.lines.lock().unwrap(), ["mmu_peek_lkm: unloaded"]);
    }
}
