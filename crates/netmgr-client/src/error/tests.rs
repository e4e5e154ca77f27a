// crates/netmgr-client/src/error/tests.rs
// ============================================================================
// Module: Client Error Unit Tests
// Description: Name-resolution classification and error chaining.
// Purpose: Ensure DNS failures are recognized and keep their cause.
// Dependencies: netmgr-client, thiserror
// ============================================================================

#![allow(
    clippy::panic,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::missing_docs_in_private_items,
    reason = "Test-only assertions use panic-based helpers for clarity."
)]

use std::error::Error as StdError;

use thiserror::Error;

use super::ServiceError;
use super::is_name_resolution_failure;

#[derive(Debug, Error)]
#[error("dns error: failed to lookup address information")]
struct LookupFailure;

#[derive(Debug, Error)]
#[error("error sending request")]
struct SendFailure(#[source] LookupFailure);

#[derive(Debug, Error)]
#[error("connection refused")]
struct Refused;

#[test]
fn nested_dns_failure_is_detected() {
    assert!(is_name_resolution_failure(&SendFailure(LookupFailure)));
}

#[test]
fn other_connect_failures_are_not_name_resolution() {
    assert!(!is_name_resolution_failure(&Refused));
}

#[test]
fn wrapped_failure_keeps_original_cause() {
    let error = ServiceError::NameResolution {
        host: "networkmanager.nowhere-1.amazonaws.com".to_string(),
        source: Box::new(SendFailure(LookupFailure)),
    };
    assert!(error.to_string().contains("networkmanager.nowhere-1.amazonaws.com"));
    assert_eq!(error.kind(), "name_resolution");
    let cause = error.source().unwrap();
    assert_eq!(cause.to_string(), "error sending request");
    assert!(cause.source().unwrap().to_string().contains("dns error"));
}

#[test]
fn only_rejections_carry_request_ids() {
    let rejected = ServiceError::Rejected {
        status: 404,
        code: "ResourceNotFoundException".to_string(),
        message: "missing".to_string(),
        request_id: Some("req-7".to_string()),
    };
    assert_eq!(rejected.request_id(), Some("req-7"));
    assert!(!rejected.is_throttling());
    assert_eq!(ServiceError::Timeout(5).request_id(), None);
}
