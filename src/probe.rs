//! Sequencing of the reads and the attach/detach lifecycle
//!
//! [`attach`] and [`detach`] are the two entry points a host calls, once each and in that
//! order. [`Probe`] additionally tracks the lifecycle for callers that cannot guarantee it.

use core::ffi::c_int;
use core::fmt;

use crate::catalog::CATALOG;
use crate::coproc::RegisterSource;
use crate::report::Sink;
use crate::RegisterValue;

/// Read every cataloged register and report it
///
/// Each value is reported before the next register is read. Returns `0`, the host's success
/// code; a privilege fault during a read never returns here.
pub fn attach<R, S>(source: &mut R, sink: &mut S) -> c_int
where
    R: RegisterSource + ?Sized,
    S: Sink + ?Sized,
{
    for reg in CATALOG.iter() {
        let value = source.read(reg);
        sink.report(reg.label, RegisterValue::new(value));
        #[cfg(feature = "decode")]
        if let Some(detail) = crate::decode::details(reg, value) {
            sink.detail(reg.label, &detail);
        }
    }
    0
}

/// Report that the probe is done. Reads nothing.
pub fn detach<S: Sink + ?Sized>(sink: &mut S) {
    sink.completed();
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum State {
    Unattached,
    Attached,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum LifecycleError {
    /// `attach` without a `detach` since the last `attach`
    AlreadyAttached,
    /// `detach` before `attach`
    NotAttached,
}

impl fmt::Display for LifecycleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let string = match self {
            LifecycleError::AlreadyAttached => "probe is already attached",
            LifecycleError::NotAttached => "probe is not attached",
        };
        f.write_str(string)
    }
}

/// A probe bound to a register source and a sink
pub struct Probe<R, S> {
    source: R,
    sink: S,
    state: State,
}

impl<R: RegisterSource, S: Sink> Probe<R, S> {
    pub fn new(source: R, sink: S) -> Probe<R, S> {
        Probe {
            source,
            sink,
            state: State::Unattached,
        }
    }

    pub fn state(&self) -> State {
        self.state
    }

    /// See [`attach`]. Refused without any read if already attached.
    pub fn attach(&mut self) -> Result<(), LifecycleError> {
        if self.state == State::Attached {
            return Err(LifecycleError::AlreadyAttached);
        }
        attach(&mut self.source, &mut self.sink);
        self.state = State::Attached;
        Ok(())
    }

    /// See [`detach`]. Refused without any report if not attached.
    pub fn detach(&mut self) -> Result<(), LifecycleError> {
        if self.state == State::Unattached {
            return Err(LifecycleError::NotAttached);
        }
        detach(&mut self.sink);
        self.state = State::Unattached;
        Ok(())
    }

    pub fn into_parts(self) -> (R, S) {
        (self.source, self.sink)
    }
}
