//! # Probe Report
//!
//! The canned `VERSION.HARDWARE` answer and the file it is written to.

use std::fmt;
use std::fs::File;
use std::io::Write;
use std::path::Path;

use tracing::{debug, info};

use crate::constants::DEBUGGER_INFO;
use crate::error::{ProbeError, ProbeResult};

/// Marker preceding each serial number in the report.
const SERIAL_NUMBER_MARKER: &str = "Serial Number: ";

/// Hardware identification report of the simulated PowerDebug probe.
///
/// The text is compiled in and never changes: vendor line, probe serial
/// number, firmware, instance index and the attached debug cable.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ProbeReport;

impl ProbeReport
{
    /// Full report text.
    #[must_use]
    pub const fn text(self) -> &'static str
    {
        DEBUGGER_INFO
    }

    /// Full report text as bytes, exactly as written to disk.
    #[must_use]
    pub const fn as_bytes(self) -> &'static [u8]
    {
        DEBUGGER_INFO.as_bytes()
    }

    /// Head (probe) and body (cable) serial numbers.
    ///
    /// Extracted the way the detection client does it: whatever follows
    /// `Serial Number: ` on a line, with exactly two occurrences expected.
    /// Returns `None` if the report would not satisfy that client.
    #[must_use]
    pub fn serial_numbers(self) -> Option<(&'static str, &'static str)>
    {
        let mut serials = self
            .text()
            .lines()
            .filter_map(|line| line.split_once(SERIAL_NUMBER_MARKER).map(|(_, serial)| serial));

        match (serials.next(), serials.next(), serials.next()) {
            (Some(head), Some(body), None) => Some((head, body)),
            _ => None,
        }
    }

    /// Write the report to `path`, creating or truncating it.
    ///
    /// The handle is dropped before returning on every path. If the file
    /// cannot be opened nothing is written.
    ///
    /// ## Errors
    ///
    /// Returns [`ProbeError::OutputWrite`] if the file cannot be opened,
    /// written or flushed.
    pub fn write_to(self, path: &Path) -> ProbeResult<()>
    {
        let to_error = |source| ProbeError::OutputWrite {
            path: path.to_path_buf(),
            source,
        };

        debug!(path = %path.display(), "Opening report file");
        let mut file = File::create(path).map_err(to_error)?;
        file.write_all(self.as_bytes()).map_err(to_error)?;
        file.flush().map_err(to_error)?;

        info!(path = %path.display(), bytes = DEBUGGER_INFO.len(), "Report written");
        Ok(())
    }
}

impl fmt::Display for ProbeReport
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result
    {
        f.write_str(self.text())
    }
}
