//! # Probe
//!
//! The single-shot `t32rem` pipeline:
//!
//! ```text
//! Start -> validate args -> Fail(1 | 2)
//!                        -> delay -> write report -> Fail(3)
//!                                                 -> Exit(0)
//! ```
//!
//! Nothing survives between runs except the report file itself, which is
//! overwritten with identical content every time.

use std::ffi::OsString;
use std::path::{Path, PathBuf};

use tracing::{info, instrument};

use crate::constants::OUTPUT_FILE_NAME;
use crate::error::ProbeResult;
use crate::invocation::ProbeInvocation;
use crate::latency::LatencyRange;
use crate::report::ProbeReport;

/// Configured `t32rem` stand-in.
///
/// The default instance behaves exactly like the shipped binary: a 1-10 s
/// delay and `output.txt` in the working directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProbeMock
{
    latency: LatencyRange,
    output_path: PathBuf,
}

impl ProbeMock
{
    /// Mock with the shipped latency and report location.
    #[must_use]
    pub fn new() -> Self
    {
        Self {
            latency: LatencyRange::DEFAULT,
            output_path: PathBuf::from(OUTPUT_FILE_NAME),
        }
    }

    /// Replace the simulated latency range.
    #[must_use]
    pub const fn with_latency(mut self, latency: LatencyRange) -> Self
    {
        self.latency = latency;
        self
    }

    /// Replace the report location.
    #[must_use]
    pub fn with_output_path(mut self, path: impl Into<PathBuf>) -> Self
    {
        self.output_path = path.into();
        self
    }

    /// Latency range used by [`ProbeMock::run`].
    #[must_use]
    pub const fn latency(&self) -> LatencyRange
    {
        self.latency
    }

    /// Where [`ProbeMock::run`] writes the report.
    #[must_use]
    pub fn output_path(&self) -> &Path
    {
        &self.output_path
    }

    /// Validate `args`, wait out the simulated latency, write the report.
    ///
    /// Returns the path of the written report. A validation failure
    /// returns before any delay or file access.
    ///
    /// ## Errors
    ///
    /// Any [`ProbeError`](crate::error::ProbeError) from validation, or
    /// [`ProbeError::OutputWrite`](crate::error::ProbeError::OutputWrite)
    /// when the report cannot be written.
    #[instrument(level = "debug", skip_all, fields(output = %self.output_path.display()))]
    pub fn run<I, T>(&self, args: I) -> ProbeResult<&Path>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString>,
    {
        let invocation = ProbeInvocation::parse(args)?;
        info!(program = %invocation.program().to_string_lossy(), "Invocation accepted");

        let delay = self.latency.simulate();
        info!(delay_secs = delay.as_secs(), "Probe answered");

        ProbeReport.write_to(&self.output_path)?;
        Ok(&self.output_path)
    }
}

impl Default for ProbeMock
{
    fn default() -> Self
    {
        Self::new()
    }
}
