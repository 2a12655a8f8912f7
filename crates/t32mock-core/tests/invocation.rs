//! Tests for command line validation

use t32mock_core::constants::USAGE;
use t32mock_core::{ProbeError, ProbeInvocation};

const VALID: [&str; 4] = ["t32rem", "localhost", "port=20000", "VERSION.HARDWARE"];

#[test]
fn test_valid_invocation()
{
    assert!(ProbeInvocation::parse(VALID).is_ok());
}

#[test]
fn test_too_few_arguments()
{
    let result = ProbeInvocation::parse(["t32rem", "localhost"]);
    assert!(matches!(result, Err(ProbeError::ArgumentCount { found: 2 })));
}

#[test]
fn test_too_many_arguments()
{
    let result = ProbeInvocation::parse(["t32rem", "localhost", "port=20000", "VERSION.HARDWARE", "extra"]);
    assert!(matches!(result, Err(ProbeError::ArgumentCount { found: 5 })));
}

#[test]
fn test_count_is_checked_before_tokens()
{
    // Wrong host too, but the count failure wins
    let result = ProbeInvocation::parse(["t32rem", "remotehost", "port=20000"]);
    assert!(matches!(result, Err(ProbeError::ArgumentCount { found: 3 })));
}

#[test]
fn test_host_is_case_sensitive()
{
    let result = ProbeInvocation::parse(["t32rem", "LOCALHOST", "port=20000", "VERSION.HARDWARE"]);
    match result {
        Err(ProbeError::InvalidHost(host)) => assert_eq!(host, "LOCALHOST"),
        other => panic!("Expected InvalidHost, got {other:?}"),
    }
}

#[test]
fn test_wrong_port()
{
    let result = ProbeInvocation::parse(["t32rem", "localhost", "port=20001", "VERSION.HARDWARE"]);
    assert!(matches!(result, Err(ProbeError::InvalidPort(ref port)) if port == "port=20001"));
}

#[test]
fn test_wrong_command()
{
    let result = ProbeInvocation::parse(["t32rem", "localhost", "port=20000", "version.hardware"]);
    assert!(matches!(result, Err(ProbeError::InvalidCommand(_))));
}

#[test]
fn test_first_mismatch_wins()
{
    let result = ProbeInvocation::parse(["t32rem", "localhost", "port=1", "NOPE"]);
    assert!(matches!(result, Err(ProbeError::InvalidPort(_))));

    let result = ProbeInvocation::parse(["t32rem", "host", "port=1", "NOPE"]);
    assert!(matches!(result, Err(ProbeError::InvalidHost(_))));
}

#[test]
fn test_flags_are_not_interpreted()
{
    let result = ProbeInvocation::parse(["t32rem", "--help", "port=20000", "VERSION.HARDWARE"]);
    assert!(matches!(result, Err(ProbeError::InvalidHost(ref host)) if host == "--help"));
}

#[test]
fn test_usage_names_every_expected_token()
{
    for token in &VALID[1..] {
        assert!(USAGE.contains(token), "usage is missing {token}");
    }
}
