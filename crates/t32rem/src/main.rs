//! Stand-in for the TRACE32 `t32rem` remote-control tool.
//!
//! Accepts exactly `t32rem localhost port=20000 VERSION.HARDWARE`, waits
//! 1-10 seconds like a real probe round trip, then writes the canned
//! hardware report to `output.txt` in the working directory.

use std::env;
use std::process::ExitCode;

use t32mock_core::constants::USAGE;
use t32mock_core::ProbeMock;
use t32mock_utils::{debug, info, init_logging};

fn main() -> ExitCode
{
    // Logging is optional here: a failure must not change the exit code
    if let Err(e) = init_logging() {
        eprintln!("{e}");
    }

    match ProbeMock::new().run(env::args_os()) {
        Ok(path) => {
            debug!(path = %path.display(), "Done");
            ExitCode::SUCCESS
        }
        Err(e) => {
            info!(error = %e, exit_code = e.exit_code(), "Probe request rejected");
            println!("{e}");
            if e.wants_usage() {
                println!("{USAGE}");
            }
            ExitCode::from(e.exit_code())
        }
    }
}
