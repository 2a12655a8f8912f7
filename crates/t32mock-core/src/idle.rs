//! # Idle
//!
//! The `ld` stand-in only has to be alive: the client checks for a process
//! by that name and nothing else.

use std::thread;
use std::time::Duration;

use tracing::trace;

/// Block the calling thread forever, waking up every `interval`.
///
/// Performs no I/O and installs no signal handlers, so the only way out is
/// an external kill.
pub fn idle_forever(interval: Duration) -> !
{
    loop {
        thread::sleep(interval);
        trace!(interval_secs = interval.as_secs(), "Idle wake-up");
    }
}
