// crates/netmgr-cli/src/output/tests.rs
// ============================================================================
// Module: Output Rendering Unit Tests
// Description: Stream routing and document formats.
// Purpose: Ensure objects reach stdout and errors reach stderr as JSON.
// Dependencies: netmgr-cli, netmgr-config, serde_json
// ============================================================================

#![allow(
    clippy::panic,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::missing_docs_in_private_items,
    reason = "Test-only assertions use panic-based helpers for clarity."
)]

use netmgr_client::ServiceError;
use netmgr_config::OutputFormat;
use netmgr_core::BindingError;
use serde_json::Value;
use serde_json::json;

use super::emit_outcome;
use super::render;
use super::write_document;
use crate::dispatch::InvocationOutcome;

fn emit(outcome: &InvocationOutcome, format: OutputFormat) -> (String, String) {
    let mut out = Vec::new();
    let mut err = Vec::new();
    emit_outcome(outcome, "DeleteAttachment", format, &mut out, &mut err).unwrap();
    (String::from_utf8(out).unwrap(), String::from_utf8(err).unwrap())
}

#[test]
fn json_rendering_is_canonical() {
    let text = render(&json!({"b": 1, "a": [true, null]}), OutputFormat::Json).unwrap();
    assert_eq!(text, r#"{"a":[true,null],"b":1}"#);
}

#[test]
fn pretty_rendering_is_indented() {
    let text = render(&json!({"a": 1}), OutputFormat::Pretty).unwrap();
    assert_eq!(text, "{\n  \"a\": 1\n}");
}

#[test]
fn write_document_appends_newline() {
    let mut out = Vec::new();
    write_document(&mut out, &json!("gn-1"), OutputFormat::Json).unwrap();
    assert_eq!(out, b"\"gn-1\"\n");
}

#[test]
fn emitted_object_goes_to_stdout_only() {
    let outcome = InvocationOutcome::Emitted {
        output: Some(json!({"AttachmentId": "a-1"})),
        request_id: None,
    };
    let (out, err) = emit(&outcome, OutputFormat::Json);
    assert_eq!(out, "{\"AttachmentId\":\"a-1\"}\n");
    assert!(err.is_empty());
}

#[test]
fn null_selection_writes_nothing() {
    let outcome = InvocationOutcome::Emitted {
        output: None,
        request_id: Some("req-1".to_string()),
    };
    let (out, err) = emit(&outcome, OutputFormat::Pretty);
    assert!(out.is_empty());
    assert!(err.is_empty());
}

#[test]
fn declined_writes_notice_to_stderr() {
    let (out, err) = emit(&InvocationOutcome::Declined, OutputFormat::Json);
    assert!(out.is_empty());
    assert!(err.contains("DeleteAttachment"));
}

#[test]
fn binding_failure_is_a_json_error_object_on_stderr() {
    let outcome = InvocationOutcome::BindingFailed(BindingError::MissingRequired {
        command: "DeleteAttachment".to_string(),
        parameter: "AttachmentId".to_string(),
    });
    let (out, err) = emit(&outcome, OutputFormat::Pretty);
    assert!(out.is_empty());
    assert_eq!(err.lines().count(), 1);
    let value: Value = serde_json::from_str(err.trim()).unwrap();
    assert_eq!(value["error"]["category"], "binding");
    assert_eq!(value["error"]["kind"], "missing_required");
    assert_eq!(value["error"]["parameter"], "AttachmentId");
    assert_eq!(value["error"]["command"], "DeleteAttachment");
    assert!(value["error"].get("status").is_none());
}

#[test]
fn service_failure_carries_status_and_code() {
    let outcome = InvocationOutcome::ServiceFailed(ServiceError::Rejected {
        status: 409,
        code: "ConflictException".to_string(),
        message: "busy".to_string(),
        request_id: Some("req-9".to_string()),
    });
    let (_, err) = emit(&outcome, OutputFormat::Json);
    let value: Value = serde_json::from_str(err.trim()).unwrap();
    assert_eq!(value["error"]["status"], 409);
    assert_eq!(value["error"]["code"], "ConflictException");
    assert_eq!(value["error"]["request_id"], "req-9");
}

#[test]
fn cancellation_is_reported() {
    let (_, err) = emit(&InvocationOutcome::Cancelled, OutputFormat::Json);
    let value: Value = serde_json::from_str(err.trim()).unwrap();
    assert_eq!(value["error"]["kind"], "cancelled");
}
