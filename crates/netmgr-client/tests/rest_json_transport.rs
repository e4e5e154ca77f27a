// crates/netmgr-client/tests/rest_json_transport.rs
// ============================================================================
// Module: REST-JSON Transport Integration Tests
// Description: Signed calls against a local fake Network Manager endpoint.
// Purpose: Verify wire rendering, signing, error mapping, and size limits.
// ============================================================================

//! ## Overview
//! Each test starts a `tiny_http` server on a loopback port, points the
//! transport at it through the endpoint override, and inspects what arrives.

#![allow(
    clippy::panic,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::use_debug,
    clippy::panic_in_result_fn,
    clippy::unwrap_in_result,
    reason = "Test-only assertions and helpers are permitted."
)]

use std::collections::BTreeMap;
use std::io::Read;
use std::sync::Arc;
use std::sync::mpsc;
use std::thread;
use std::time::Duration;

use aws_credential_types::Credentials;
use netmgr_client::CancellationSignal;
use netmgr_client::InvokeError;
use netmgr_client::RestJsonTransport;
use netmgr_client::ServiceClient;
use netmgr_client::ServiceError;
use netmgr_client::TransportSettings;
use netmgr_core::HttpMethod;
use netmgr_core::Request;
use netmgr_core::Response;
use serde_json::Map;
use serde_json::Value;
use serde_json::json;
use tiny_http::Header;
use tiny_http::Server;

// ============================================================================
// SECTION: Fixtures
// ============================================================================

struct Captured {
    method: String,
    url: String,
    headers: BTreeMap<String, String>,
    body: String,
}

fn settings(endpoint: &str, max_response_bytes: usize) -> TransportSettings {
    TransportSettings {
        region: Some("us-west-2".to_string()),
        endpoint: Some(endpoint.to_string()),
        profile: None,
        timeout: Duration::from_secs(10),
        max_response_bytes,
    }
}

fn client(endpoint: &str, max_response_bytes: usize) -> ServiceClient {
    let credentials = Credentials::new("AKIDEXAMPLE", "secret", None, None, "test");
    let transport =
        RestJsonTransport::with_credentials(settings(endpoint, max_response_bytes), credentials)
            .unwrap();
    ServiceClient::with_transport(Arc::new(transport))
}

/// Serves one request with the given status, headers, and body.
fn serve_once(
    status: u16,
    headers: &[(&'static str, &'static str)],
    body: String,
) -> (String, mpsc::Receiver<Captured>, thread::JoinHandle<()>) {
    let server = Server::http("127.0.0.1:0").unwrap();
    let addr = server.server_addr().to_ip().unwrap();
    let (tx, rx) = mpsc::channel();
    let headers = headers.to_vec();
    let handle = thread::spawn(move || {
        if let Ok(mut request) = server.recv() {
            let mut payload = String::new();
            let _ = request.as_reader().read_to_string(&mut payload);
            let captured = Captured {
                method: request.method().as_str().to_string(),
                url: request.url().to_string(),
                headers: request
                    .headers()
                    .iter()
                    .map(|header| {
                        (
                            header.field.as_str().as_str().to_ascii_lowercase(),
                            header.value.as_str().to_string(),
                        )
                    })
                    .collect(),
                body: payload,
            };
            let _ = tx.send(captured);
            let mut response = tiny_http::Response::from_string(body).with_status_code(status);
            for (name, value) in headers {
                response = response.with_header(Header::from_bytes(name, value).unwrap());
            }
            let _ = request.respond(response);
        }
    });
    (format!("http://{addr}"), rx, handle)
}

fn request(method: HttpMethod, uri: &str, labels: &[(&str, &str)], body: &Value) -> Request {
    Request {
        operation: "TestOperation".to_string(),
        method,
        uri: uri.to_string(),
        labels: labels.iter().map(|(k, v)| ((*k).to_string(), (*v).to_string())).collect(),
        query: BTreeMap::new(),
        body: body.as_object().cloned().unwrap_or_else(Map::new),
    }
}

fn invoke(client: &ServiceClient, request: Request) -> Result<Response, InvokeError> {
    client.invoker().invoke(request, &CancellationSignal::never())
}

// ============================================================================
// SECTION: Tests
// ============================================================================

#[test]
fn signed_post_carries_json_body_and_sigv4_headers() {
    let (endpoint, rx, handle) = serve_once(
        200,
        &[("Content-Type", "application/json"), ("x-amzn-RequestId", "req-123")],
        json!({"GlobalNetwork": {"GlobalNetworkId": "gn-1", "Description": "prod"}}).to_string(),
    );
    let client = client(&endpoint, 1024 * 1024);
    let response = invoke(
        &client,
        request(HttpMethod::Post, "/global-networks", &[], &json!({"Description": "prod"})),
    )
    .unwrap();
    handle.join().unwrap();
    let captured = rx.recv().unwrap();

    assert_eq!(captured.method, "POST");
    assert_eq!(captured.url, "/global-networks");
    let body = serde_json::from_str::<Value>(&captured.body).unwrap();
    assert_eq!(body, json!({"Description": "prod"}));
    assert_eq!(captured.headers.get("content-type").map(String::as_str), Some("application/json"));
    let authorization = captured.headers.get("authorization").unwrap();
    assert!(authorization.starts_with("AWS4-HMAC-SHA256 Credential=AKIDEXAMPLE/"));
    assert!(authorization.contains("/us-west-2/networkmanager/aws4_request"));
    assert!(captured.headers.contains_key("x-amz-date"));

    assert_eq!(response.request_id.as_deref(), Some("req-123"));
    assert_eq!(response.body["GlobalNetwork"]["GlobalNetworkId"], json!("gn-1"));
}

#[test]
fn get_sends_encoded_path_and_query_without_body() {
    let (endpoint, rx, handle) = serve_once(200, &[], json!({"Sites": []}).to_string());
    let client = client(&endpoint, 1024 * 1024);
    let mut get = request(
        HttpMethod::Get,
        "/global-networks/{globalNetworkId}/sites",
        &[("globalNetworkId", "gn-1")],
        &json!({}),
    );
    get.query.insert("siteIds".to_string(), vec!["site-1".to_string(), "site-2".to_string()]);
    invoke(&client, get).unwrap();
    handle.join().unwrap();
    let captured = rx.recv().unwrap();

    assert_eq!(captured.method, "GET");
    assert_eq!(captured.url, "/global-networks/gn-1/sites?siteIds=site-1&siteIds=site-2");
    assert!(captured.body.is_empty());
    assert!(!captured.headers.contains_key("content-type"));
}

#[test]
fn empty_success_body_is_an_empty_response() {
    let (endpoint, _rx, handle) = serve_once(200, &[], String::new());
    let client = client(&endpoint, 1024 * 1024);
    let response = invoke(
        &client,
        request(
            HttpMethod::Delete,
            "/tags/{resourceArn}",
            &[("resourceArn", "arn:aws:networkmanager::1:global-network/gn-1")],
            &json!({}),
        ),
    )
    .unwrap();
    handle.join().unwrap();
    assert!(response.body.is_empty());
}

#[test]
fn error_status_maps_to_rejection() {
    let (endpoint, _rx, handle) = serve_once(
        404,
        &[
            ("x-amzn-ErrorType", "ResourceNotFoundException:http://internal.amazon.com/"),
            ("x-amzn-RequestId", "req-404"),
        ],
        json!({"Message": "Attachment attachment-1 not found"}).to_string(),
    );
    let client = client(&endpoint, 1024 * 1024);
    let result = invoke(
        &client,
        request(
            HttpMethod::Delete,
            "/attachments/{attachmentId}",
            &[("attachmentId", "attachment-1")],
            &json!({}),
        ),
    );
    handle.join().unwrap();
    match result {
        Err(InvokeError::Service(ServiceError::Rejected {
            status,
            code,
            message,
            request_id,
        })) => {
            assert_eq!(status, 404);
            assert_eq!(code, "ResourceNotFoundException");
            assert_eq!(message, "Attachment attachment-1 not found");
            assert_eq!(request_id.as_deref(), Some("req-404"));
        }
        other => panic!("unexpected result: {other:?}"),
    }
}

#[test]
fn oversized_response_is_rejected() {
    let padded = format!("{{\"Pad\":\"{}\"}}", "x".repeat(4096));
    let (endpoint, _rx, handle) = serve_once(200, &[], padded);
    let client = client(&endpoint, 1024);
    let result = invoke(&client, request(HttpMethod::Get, "/global-networks", &[], &json!({})));
    handle.join().unwrap();
    assert!(matches!(
        result,
        Err(InvokeError::Service(ServiceError::ResponseTooLarge { limit: 1024, .. }))
    ));
}

#[test]
fn unresolvable_endpoint_is_wrapped_with_cause() {
    let client = client("http://netmgr-endpoint.invalid", 1024 * 1024);
    let result = invoke(&client, request(HttpMethod::Get, "/global-networks", &[], &json!({})));
    match result {
        Err(InvokeError::Service(error @ ServiceError::NameResolution { .. })) => {
            assert!(error.to_string().contains("netmgr-endpoint.invalid"));
            assert!(std::error::Error::source(&error).is_some());
        }
        other => panic!("unexpected result: {other:?}"),
    }
}
