//! `log` facade interception with forward-to-previous semantics
//!
//! The interceptor claims the process-wide `log` facade once and keeps it.
//! What comes and goes is the single capture listener: [`install`] fills
//! the listener slot and returns a guard, dropping the guard empties it
//! again. With the slot empty the interceptor is a transparent pass-through
//! to the handler the facade had before (the facade itself cannot be
//! un-set), so observable logging behavior returns to its pre-install
//! state. Every facade call is forwarded exactly once, captured or not.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Mutex, Once, OnceLock};

use log::{LevelFilter, Log, Metadata, Record};

use crate::buffer::LogBuffer;
use crate::error::{Error, Result};
use crate::record::{LogRecord, RecordKind};

static INTERCEPTOR: Interceptor = Interceptor {
    forward: OnceLock::new(),
    slot: Mutex::new(None),
};

static WIRE: Once = Once::new();
static WIRED: AtomicBool = AtomicBool::new(false);

struct Interceptor {
    /// Where records go after capture. Fixed at wire time, never replaced.
    forward: OnceLock<Box<dyn Log>>,
    /// The single registered capture listener. Empty means pass-through.
    slot: Mutex<Option<LogBuffer>>,
}

impl Interceptor {
    fn capturing(&self) -> bool {
        self.slot.lock().map(|slot| slot.is_some()).unwrap_or(false)
    }
}

impl Log for Interceptor {
    fn enabled(&self, metadata: &Metadata) -> bool {
        if self.capturing() {
            return true;
        }
        self.forward
            .get()
            .map(|previous| previous.enabled(metadata))
            .unwrap_or(false)
    }

    fn log(&self, record: &Record) {
        let listener = self.slot.lock().ok().and_then(|slot| slot.clone());
        if let Some(buffer) = listener {
            buffer.push(LogRecord::now(
                RecordKind::from(record.level()),
                record.args().to_string(),
            ));
        }

        // Forward exactly once, captured or not. Skipped appends (no
        // listener, poisoned lock) must not suppress or duplicate this.
        if let Some(previous) = self.forward.get() {
            previous.log(record);
        }
    }

    fn flush(&self) {
        if let Some(previous) = self.forward.get() {
            previous.flush();
        }
    }
}

/// Handler the facade had before the interceptor took over.
struct PriorLogger(&'static dyn Log);

impl Log for PriorLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        self.0.enabled(metadata)
    }

    fn log(&self, record: &Record) {
        self.0.log(record);
    }

    fn flush(&self) {
        self.0.flush();
    }
}

/// Uninstall handle returned by [`install`].
///
/// Dropping it ends capture: the listener slot is emptied and the facade's
/// max level goes back to its pre-install value. Forwarding to the prior
/// handler continues unchanged.
#[derive(Debug)]
pub struct InterceptGuard {
    prior_max_level: LevelFilter,
}

impl Drop for InterceptGuard {
    fn drop(&mut self) {
        if let Ok(mut slot) = INTERCEPTOR.slot.lock() {
            *slot = None;
        }
        log::set_max_level(self.prior_max_level);
    }
}

/// Start capturing facade calls into `buffer`.
///
/// Wires the facade on first use (saving the currently installed handler
/// as the forward target), registers `buffer` as the capture listener and
/// raises the max level to `Trace` so every call reaches the interceptor.
/// Fails with [`Error::AlreadyInstalled`] while another listener is live.
pub fn install(buffer: LogBuffer) -> Result<InterceptGuard> {
    wire_facade(None)?;
    register(buffer)
}

/// Like [`install`], but chain an explicit downstream handler.
///
/// For embedders that build their logging backend without installing it
/// (e.g. `env_logger::Builder::build`): the interceptor takes the facade
/// slot and forwards every record to `forward`. The forward target is
/// fixed by whichever call first wires the facade; later installs reuse
/// it and their `forward` argument is dropped.
pub fn install_with_forward(
    buffer: LogBuffer,
    forward: impl Log + 'static,
) -> Result<InterceptGuard> {
    wire_facade(Some(Box::new(forward)))?;
    register(buffer)
}

/// Point the facade at the interceptor. Happens at most once per process.
fn wire_facade(forward: Option<Box<dyn Log>>) -> Result<()> {
    WIRE.call_once(|| {
        let previous = forward.unwrap_or_else(|| Box::new(PriorLogger(log::logger())));
        if log::set_logger(&INTERCEPTOR).is_ok() {
            let _ = INTERCEPTOR.forward.set(previous);
            WIRED.store(true, Ordering::Release);
        }
    });

    if WIRED.load(Ordering::Acquire) {
        Ok(())
    } else {
        Err(Error::facade(
            "the global logger is already claimed by another handler",
        ))
    }
}

/// Claim the listener slot and raise the max level, remembering the prior
/// filter for the guard to restore.
fn register(buffer: LogBuffer) -> Result<InterceptGuard> {
    let mut slot = INTERCEPTOR
        .slot
        .lock()
        .map_err(|_| Error::facade("listener slot poisoned"))?;
    if slot.is_some() {
        return Err(Error::AlreadyInstalled);
    }

    let prior_max_level = log::max_level();
    *slot = Some(buffer);
    log::set_max_level(LevelFilter::Trace);

    Ok(InterceptGuard { prior_max_level })
}
