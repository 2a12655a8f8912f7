//! # Error Types
//!
//! Everything that can make a probe invocation fail.
//!
//! We use `thiserror` to generate the `Error` implementations. The `Display`
//! output of each variant is the exact line the `t32rem` mock prints before
//! exiting, so it names both what was received and what was expected.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::constants::{EXPECTED_ARGUMENT_COUNT, EXPECTED_COMMAND, EXPECTED_HOST, EXPECTED_PORT};

/// Main error type for probe operations
///
/// ## Error Categories
///
/// 1. **Invocation errors**: `ArgumentCount` (exit code 1)
/// 2. **Token errors**: `InvalidHost`, `InvalidPort`, `InvalidCommand` (exit code 2)
/// 3. **I/O errors**: `OutputWrite` (exit code 3)
#[derive(Error, Debug)]
pub enum ProbeError
{
    /// Wrong number of command line tokens (program name included)
    #[error("Invalid number of arguments (expected {expected}, got {found})", expected = EXPECTED_ARGUMENT_COUNT)]
    ArgumentCount
    {
        /// Number of tokens received, program name included
        found: usize,
    },

    /// First positional argument is not the expected host
    #[error("Invalid first argument '{0}' (expected '{expected}')", expected = EXPECTED_HOST)]
    InvalidHost(String),

    /// Second positional argument is not the expected port selector
    #[error("Invalid second argument '{0}' (expected '{expected}')", expected = EXPECTED_PORT)]
    InvalidPort(String),

    /// Third positional argument is not the expected PRACTICE command
    #[error("Invalid third argument '{0}' (expected '{expected}')", expected = EXPECTED_COMMAND)]
    InvalidCommand(String),

    /// The report file could not be opened or written
    ///
    /// When the open itself fails nothing is written, so whatever the
    /// filesystem held before stays untouched.
    #[error("Failed to write the output file {}: {source}", .path.display())]
    OutputWrite
    {
        /// Path of the report file
        path: PathBuf,
        /// Underlying I/O failure
        #[source]
        source: io::Error,
    },
}

impl ProbeError
{
    /// Process exit code reported to the invoking harness.
    #[must_use]
    pub const fn exit_code(&self) -> u8
    {
        match self {
            Self::ArgumentCount { .. } => 1,
            Self::InvalidHost(_) | Self::InvalidPort(_) | Self::InvalidCommand(_) => 2,
            Self::OutputWrite { .. } => 3,
        }
    }

    /// Whether the usage line should follow the error message.
    #[must_use]
    pub const fn wants_usage(&self) -> bool
    {
        matches!(self, Self::ArgumentCount { .. })
    }
}

/// Convenience type alias for `Result<T, ProbeError>`
///
/// ```rust
/// use t32mock_core::error::ProbeResult;
/// fn foo() -> ProbeResult<()>
/// {
///     Ok(())
/// }
/// ```
pub type ProbeResult<T> = std::result::Result<T, ProbeError>;
