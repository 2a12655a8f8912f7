//! Stand-in for the Lauterbach `ld` background daemon.
//!
//! Takes no arguments, prints nothing and never exits on its own. The
//! detection client only checks that a process with this name is alive.

use t32mock_core::constants::IDLE_INTERVAL;
use t32mock_core::idle_forever;
use t32mock_utils::{debug, init_logging};

fn main()
{
    if let Err(e) = init_logging() {
        eprintln!("{e}");
    }

    debug!(pid = std::process::id(), interval_secs = IDLE_INTERVAL.as_secs(), "Idling");
    idle_forever(IDLE_INTERVAL)
}
