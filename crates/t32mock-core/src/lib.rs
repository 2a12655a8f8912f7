//! # t32mock-core
//!
//! Behaviour shared by the stand-ins for the Lauterbach TRACE32 tools that
//! the debugger detection client talks to during integration tests.
//!
//! This crate provides:
//! - The fixed contract values (expected arguments, delay bounds, report text)
//! - Validation of the `t32rem localhost port=20000 VERSION.HARDWARE` command line
//! - The simulated probe latency
//! - Writing the canned hardware report to `output.txt`
//! - The idle loop behind the `ld` daemon mock
//!
//! ## Exit codes
//!
//! | Code | Meaning                         |
//! |------|---------------------------------|
//! | 0    | report written                  |
//! | 1    | wrong number of arguments       |
//! | 2    | an argument did not match       |
//! | 3    | the report could not be written |

pub mod constants;
pub mod error;
pub mod idle;
pub mod invocation;
pub mod latency;
pub mod probe;
pub mod report;

pub use error::{ProbeError, ProbeResult};
pub use idle::idle_forever;
pub use invocation::ProbeInvocation;
pub use latency::LatencyRange;
pub use probe::ProbeMock;
pub use report::ProbeReport;
