//! Where register values go

use core::fmt;

use crate::RegisterValue;

/// Prefix of every line, the name the probe is loaded under
pub const MODNAME: &str = "mmu_peek_lkm";

/// Receiver of the probe's reports
///
/// Reports are fire and forget: a sink cannot fail the probe.
pub trait Sink {
    /// One register value, rendered as `<label>=0x%08x`
    fn report(&mut self, label: &str, value: RegisterValue);
    /// Decoded fields of the register just reported. Dropped unless overridden.
    fn detail(&mut self, _label: &str, _detail: &dyn fmt::Display) {}
    /// The probe is detached
    fn completed(&mut self);
}

impl<S: Sink + ?Sized> Sink for &mut S {
    fn report(&mut self, label: &str, value: RegisterValue) {
        (**self).report(label, value)
    }

    fn detail(&mut self, label: &str, detail: &dyn fmt::Display) {
        (**self).detail(label, detail)
    }

    fn completed(&mut self) {
        (**self).completed()
    }
}

/// Sends the reports to the `log` facade at info level, details at debug level
///
/// Whoever hosts the probe installs the logger.
#[derive(Copy, Clone, Debug, Default)]
pub struct LogSink;

impl Sink for LogSink {
    fn report(&mut self, label: &str, value: RegisterValue) {
        log::info!(target: "mmu_peek", "{}: mmu_peek: {}={}", MODNAME, label, value);
    }

    fn detail(&mut self, label: &str, detail: &dyn fmt::Display) {
        log::debug!(target: "mmu_peek", "{}: {}", label, detail);
    }

    fn completed(&mut self) {
        log::info!(target: "mmu_peek", "{}: unloaded", MODNAME);
    }
}
