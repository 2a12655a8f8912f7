//! # Invocation
//!
//! Validation of the `t32rem` command line.
//!
//! The real tool is driven as `t32rem localhost port=20000 VERSION.HARDWARE`.
//! There is no flag parsing: every token is compared byte-for-byte against
//! its expected literal, in order, and the first mismatch wins.

use std::ffi::{OsStr, OsString};

use tracing::debug;

use crate::constants::{EXPECTED_ARGUMENT_COUNT, EXPECTED_COMMAND, EXPECTED_HOST, EXPECTED_PORT};
use crate::error::{ProbeError, ProbeResult};

/// A command line that passed validation.
///
/// Holding one is proof that the host, port and command tokens all matched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProbeInvocation
{
    program: OsString,
}

impl ProbeInvocation
{
    /// Validate a full argument list, program name first.
    ///
    /// ## Errors
    ///
    /// Checks run in this order and stop at the first failure:
    /// 1. [`ProbeError::ArgumentCount`] unless there are exactly
    ///    [`EXPECTED_ARGUMENT_COUNT`] tokens
    /// 2. [`ProbeError::InvalidHost`] unless token 1 is [`EXPECTED_HOST`]
    /// 3. [`ProbeError::InvalidPort`] unless token 2 is [`EXPECTED_PORT`]
    /// 4. [`ProbeError::InvalidCommand`] unless token 3 is [`EXPECTED_COMMAND`]
    pub fn parse<I, T>(args: I) -> ProbeResult<Self>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString>,
    {
        let args: Vec<OsString> = args.into_iter().map(Into::into).collect();
        debug!(count = args.len(), "Validating invocation");

        let [program, host, port, command] = <[OsString; EXPECTED_ARGUMENT_COUNT]>::try_from(args)
            .map_err(|args| ProbeError::ArgumentCount { found: args.len() })?;

        expect_token(&host, EXPECTED_HOST, ProbeError::InvalidHost)?;
        expect_token(&port, EXPECTED_PORT, ProbeError::InvalidPort)?;
        expect_token(&command, EXPECTED_COMMAND, ProbeError::InvalidCommand)?;

        Ok(Self { program })
    }

    /// Name the process was started under (`argv[0]`).
    #[must_use]
    pub fn program(&self) -> &OsStr
    {
        &self.program
    }
}

fn expect_token(token: &OsStr, expected: &str, error: fn(String) -> ProbeError) -> ProbeResult<()>
{
    if token == expected {
        Ok(())
    } else {
        Err(error(token.to_string_lossy().into_owned()))
    }
}

#[cfg(test)]
mod tests
{
    use super::*;

    #[test]
    fn test_program_name_is_kept()
    {
        let invocation = ProbeInvocation::parse(["/opt/t32/t32rem", "localhost", "port=20000", "VERSION.HARDWARE"]).unwrap();
        assert_eq!(invocation.program(), "/opt/t32/t32rem");
    }

    #[test]
    fn test_no_tokens_at_all()
    {
        let result = ProbeInvocation::parse(Vec::<OsString>::new());
        assert!(matches!(result, Err(ProbeError::ArgumentCount { found: 0 })));
    }

    #[test]
    fn test_trailing_whitespace_is_not_trimmed()
    {
        let result = ProbeInvocation::parse(["prog", "localhost ", "port=20000", "VERSION.HARDWARE"]);
        assert!(matches!(result, Err(ProbeError::InvalidHost(ref host)) if host == "localhost "));
    }

    #[cfg(unix)]
    #[test]
    fn test_non_utf8_token_is_reported_lossily()
    {
        use std::os::unix::ffi::OsStringExt;

        let bad = OsString::from_vec(vec![b'l', 0xFF, b'c']);
        let result = ProbeInvocation::parse([OsString::from("prog"), bad, "port=20000".into(), "VERSION.HARDWARE".into()]);
        match result {
            Err(ProbeError::InvalidHost(host)) => assert_eq!(host, "l\u{FFFD}c"),
            other => panic!("Expected InvalidHost, got {other:?}"),
        }
    }
}
