//! Fixed values that make up the contract of both mocks.
//!
//! The client under test is configured against exactly these values, so
//! changing any of them changes what the mocks accept or produce.

use std::time::Duration;

/// Number of command line tokens `t32rem` accepts, program name included.
pub const EXPECTED_ARGUMENT_COUNT: usize = 4;

/// First positional argument: the host running the TRACE32 remote API.
pub const EXPECTED_HOST: &str = "localhost";

/// Second positional argument: the remote API port selector.
pub const EXPECTED_PORT: &str = "port=20000";

/// Third positional argument: the PRACTICE command to execute.
pub const EXPECTED_COMMAND: &str = "VERSION.HARDWARE";

/// Guidance printed after an argument count failure.
pub const USAGE: &str =
    "The mock is meant to be called with the following arguments: localhost port=20000 VERSION.HARDWARE";

/// Lower bound of the simulated probe latency, in whole seconds.
pub const MIN_DELAY_SECS: u64 = 1;

/// Upper bound of the simulated probe latency, in whole seconds (inclusive).
pub const MAX_DELAY_SECS: u64 = 10;

/// Report file, relative to the working directory of the process.
pub const OUTPUT_FILE_NAME: &str = "output.txt";

/// How long the `ld` mock blocks between wake-ups.
pub const IDLE_INTERVAL: Duration = Duration::from_secs(10);

/// Canned answer to `VERSION.HARDWARE`.
pub const DEBUGGER_INFO: &str = concat!(
    "B::version.hardware\n",
    "PowerDebug USB 3.0 via USB 3.0\n",
    "   Serial Number: C21070308132\n",
    "   Firmware R.2021.02 (136263)\n",
    "   Instance: 1.\n",
    "   Automotive Debug Cable\n",
    "      Serial Number: C17040231820\n",
);
