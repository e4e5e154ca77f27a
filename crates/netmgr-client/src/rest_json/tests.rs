// crates/netmgr-client/src/rest_json/tests.rs
// ============================================================================
// Module: REST-JSON Transport Unit Tests
// Description: URL expansion, error decoding, and body parsing.
// Purpose: Pin wire rendering without a network round trip.
// Dependencies: netmgr-client, netmgr-core, serde_json, url
// ============================================================================

#![allow(
    clippy::panic,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::missing_docs_in_private_items,
    reason = "Test-only assertions use panic-based helpers for clarity."
)]

use std::collections::BTreeMap;

use netmgr_core::HttpMethod;
use netmgr_core::Request;
use serde_json::Map;
use url::Url;

use super::build_url;
use super::normalize_error_code;
use super::parse_body;
use super::rejected;
use super::resolve_endpoint;
use crate::error::ServiceError;

fn request(uri: &str, labels: &[(&str, &str)], query: &[(&str, &[&str])]) -> Request {
    Request {
        operation: "Test".to_string(),
        method: HttpMethod::Get,
        uri: uri.to_string(),
        labels: labels.iter().map(|(k, v)| ((*k).to_string(), (*v).to_string())).collect(),
        query: query
            .iter()
            .map(|(k, values)| ((*k).to_string(), values.iter().map(ToString::to_string).collect()))
            .collect::<BTreeMap<_, _>>(),
        body: Map::new(),
    }
}

#[test]
fn default_endpoint_is_regional() {
    let url = resolve_endpoint(None, "eu-west-1").unwrap();
    assert_eq!(url.as_str(), "https://networkmanager.eu-west-1.amazonaws.com/");
}

#[test]
fn endpoint_override_wins() {
    let url = resolve_endpoint(Some("http://127.0.0.1:4566"), "eu-west-1").unwrap();
    assert_eq!(url.host_str(), Some("127.0.0.1"));
    assert_eq!(url.port(), Some(4566));
}

#[test]
fn path_labels_are_encoded_per_segment() {
    let endpoint = Url::parse("https://example.test").unwrap();
    let request = request(
        "/tags/{resourceArn}",
        &[("resourceArn", "arn:aws:networkmanager::1:global-network/gn-1")],
        &[],
    );
    let url = build_url(&endpoint, &request).unwrap();
    assert_eq!(url.path(), "/tags/arn:aws:networkmanager::1:global-network%2Fgn-1");
}

#[test]
fn dot_segment_labels_are_refused() {
    let endpoint = Url::parse("https://example.test").unwrap();
    let request = request(
        "/global-networks/{globalNetworkId}/sites/{siteId}",
        &[("globalNetworkId", "global-network-1"), ("siteId", "..")],
        &[],
    );
    let err = build_url(&endpoint, &request).unwrap_err();
    assert!(matches!(err, ServiceError::Config(_)), "{err}");
}

#[test]
fn endpoint_base_path_is_preserved() {
    let endpoint = Url::parse("http://localhost:9000/proxy/").unwrap();
    let request =
        request("/global-networks/{globalNetworkId}", &[("globalNetworkId", "gn-1")], &[]);
    let url = build_url(&endpoint, &request).unwrap();
    assert_eq!(url.path(), "/proxy/global-networks/gn-1");
}

#[test]
fn query_lists_repeat_the_key_with_strict_encoding() {
    let endpoint = Url::parse("https://example.test").unwrap();
    let request = request(
        "/global-networks/{globalNetworkId}/sites",
        &[("globalNetworkId", "gn-1")],
        &[("siteIds", &["site-1", "site 2"]), ("nextToken", &["a+b/c"])],
    );
    let url = build_url(&endpoint, &request).unwrap();
    assert_eq!(url.query(), Some("nextToken=a%2Bb%2Fc&siteIds=site-1&siteIds=site%202"));
}

#[test]
fn unbound_label_is_a_config_error() {
    let endpoint = Url::parse("https://example.test").unwrap();
    let request = request("/global-networks/{globalNetworkId}", &[], &[]);
    assert!(matches!(build_url(&endpoint, &request), Err(ServiceError::Config(_))));
}

#[test]
fn error_codes_drop_namespace_and_url() {
    assert_eq!(
        normalize_error_code("aws.protocoljson#ValidationException:http://internal.amazon.com/"),
        "ValidationException"
    );
    assert_eq!(normalize_error_code("ResourceNotFoundException"), "ResourceNotFoundException");
}

#[test]
fn rejection_prefers_header_code_and_reads_message() {
    let body = br#"{"__type":"Other","Message":"Global network gn-9 not found"}"#;
    let error = rejected(
        404,
        Some("ResourceNotFoundException".to_string()),
        body,
        Some("req-1".to_string()),
    );
    match error {
        ServiceError::Rejected {
            status,
            code,
            message,
            request_id,
        } => {
            assert_eq!(status, 404);
            assert_eq!(code, "ResourceNotFoundException");
            assert_eq!(message, "Global network gn-9 not found");
            assert_eq!(request_id.as_deref(), Some("req-1"));
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn rejection_falls_back_to_body_type_then_status() {
    let error = rejected(400, None, br#"{"__type":"x#ValidationException","message":"bad"}"#, None);
    assert!(matches!(
        error,
        ServiceError::Rejected { ref code, .. } if code == "ValidationException"
    ));
    let error = rejected(502, None, b"upstream failure", None);
    match error {
        ServiceError::Rejected {
            code,
            message,
            ..
        } => {
            assert_eq!(code, "Http502");
            assert_eq!(message, "upstream failure");
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn throttling_is_recognized() {
    let error = rejected(400, Some("ThrottlingException".to_string()), b"{}", None);
    assert!(error.is_throttling());
    assert_eq!(error.kind(), "service_rejected");
}

#[test]
fn empty_success_body_is_an_empty_object() {
    assert!(parse_body(b"").unwrap().is_empty());
    assert!(parse_body(b"  \n").unwrap().is_empty());
}

#[test]
fn success_body_must_be_an_object() {
    assert_eq!(parse_body(br#"{"Site":{"SiteId":"s-1"}}"#).unwrap().len(), 1);
    assert!(matches!(parse_body(b"[1,2]"), Err(ServiceError::Protocol(_))));
    assert!(matches!(parse_body(b"{not json"), Err(ServiceError::Protocol(_))));
}
