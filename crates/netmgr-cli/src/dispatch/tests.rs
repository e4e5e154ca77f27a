// crates/netmgr-cli/src/dispatch/tests.rs
// ============================================================================
// Module: Command Dispatcher Unit Tests
// Description: End-to-end invocation flow against a fake transport.
// Purpose: Ensure confirmation, binding, and selection gate service calls.
// Dependencies: netmgr-cli test fixtures, netmgr-client, netmgr-core
// ============================================================================

#![allow(
    clippy::panic,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::missing_docs_in_private_items,
    reason = "Test-only assertions use panic-based helpers for clarity."
)]

use netmgr_client::CancellationSource;
use netmgr_client::ServiceError;
use netmgr_core::BindingError;
use netmgr_core::RawInvocation;
use serde_json::json;

use super::BatchStatus;
use super::EXIT_CANCELLED;
use super::EXIT_FAILURE;
use super::EXIT_SUCCESS;
use super::InvocationOutcome;
use crate::confirm::Confirmation;
use crate::test_support::CountingConfirmer;
use crate::test_support::Harness;
use crate::test_support::RecordingTransport;

// ============================================================================
// SECTION: Confirmation
// ============================================================================

#[test]
fn declined_mutation_sends_nothing_and_is_not_a_failure() {
    let harness = Harness::new(RecordingTransport::ok(json!({})), Confirmation::Declined);
    let raw = RawInvocation::default().with("AttachmentId", "attachment-1");
    let outcome = harness.dispatch("DeleteAttachment", &raw, false);

    assert!(matches!(outcome, InvocationOutcome::Declined));
    assert!(!outcome.is_failure());
    assert_eq!(harness.transport.calls(), 0);
    assert_eq!(harness.confirmer.prompts(), 1);
    let event = harness.last_event();
    assert_eq!(event.outcome, "declined");
    assert_eq!(event.network_calls, 0);
}

#[test]
fn forced_mutation_skips_prompt_and_calls_once() {
    let transport = RecordingTransport::ok(json!({"Attachment": {"AttachmentId": "attachment-1"}}));
    let harness = Harness::new(transport, Confirmation::Declined);
    let raw = RawInvocation::default().with("AttachmentId", "attachment-1");
    let outcome = harness.dispatch("DeleteAttachment", &raw, true);

    match outcome {
        InvocationOutcome::Emitted {
            output,
            request_id,
        } => {
            assert_eq!(output, Some(json!({"AttachmentId": "attachment-1"})));
            assert_eq!(request_id.as_deref(), Some("req-1"));
        }
        other => panic!("unexpected outcome: {other:?}"),
    }
    assert_eq!(harness.transport.calls(), 1);
    assert_eq!(harness.confirmer.prompts(), 0);
    let event = harness.last_event();
    assert!(event.forced);
    assert_eq!(event.network_calls, 1);
    assert_eq!(event.selector.as_deref(), Some("Attachment"));
}

#[test]
fn non_mutating_command_never_prompts() {
    let transport = RecordingTransport::ok(json!({"Attachments": [], "NextToken": null}));
    let harness = Harness::new(transport, Confirmation::Declined);
    let outcome = harness.dispatch("ListAttachments", &RawInvocation::default(), false);

    assert!(matches!(outcome, InvocationOutcome::Emitted { .. }));
    assert_eq!(harness.confirmer.prompts(), 0);
    assert_eq!(harness.transport.calls(), 1);
    assert!(!harness.last_event().forced);
}

#[test]
fn accepted_confirmation_proceeds() {
    let transport = RecordingTransport::ok(json!({"GlobalNetwork": {"Description": "prod"}}));
    let harness = Harness::new(transport, Confirmation::Accepted);
    let raw = RawInvocation::default().with("Description", "prod");
    let outcome = harness.dispatch("CreateGlobalNetwork", &raw, false);

    match outcome {
        InvocationOutcome::Emitted {
            output, ..
        } => assert_eq!(output, Some(json!({"Description": "prod"}))),
        other => panic!("unexpected outcome: {other:?}"),
    }
    let requests = harness.transport.requests();
    assert_eq!(requests[0].body.get("Description"), Some(&json!("prod")));
    assert_eq!(harness.confirmer.prompts(), 1);
}

// ============================================================================
// SECTION: Binding and Selection
// ============================================================================

#[test]
fn missing_required_parameter_fails_before_any_call() {
    let harness = Harness::new(RecordingTransport::ok(json!({})), Confirmation::Accepted);
    let outcome = harness.dispatch("DeleteAttachment", &RawInvocation::default(), true);

    match &outcome {
        InvocationOutcome::BindingFailed(BindingError::MissingRequired {
            parameter, ..
        }) => assert_eq!(parameter, "AttachmentId"),
        other => panic!("unexpected outcome: {other:?}"),
    }
    assert!(outcome.is_failure());
    assert_eq!(harness.transport.calls(), 0);
    assert_eq!(harness.confirmer.prompts(), 0);
    let event = harness.last_event();
    assert_eq!(event.error_kind, Some("missing_required"));
    assert_eq!(event.selector, None);
}

#[test]
fn invalid_selector_fails_before_any_call() {
    let harness = Harness::new(RecordingTransport::ok(json!({})), Confirmation::Accepted);
    let raw = RawInvocation::default()
        .with("GlobalNetworkId", "gn-1")
        .with("RouteAnalysisId", "ra-1")
        .select("NoSuchField");
    let outcome = harness.dispatch("GetRouteAnalysis", &raw, false);

    assert!(matches!(outcome, InvocationOutcome::ConfigurationFailed(_)));
    assert_eq!(harness.transport.calls(), 0);
}

#[test]
fn wildcard_selector_emits_whole_response() {
    let body = json!({"RouteAnalysis": {"Status": "COMPLETED"}});
    let harness = Harness::new(RecordingTransport::ok(body.clone()), Confirmation::Accepted);
    let raw = RawInvocation::default()
        .with("GlobalNetworkId", "gn-1")
        .with("RouteAnalysisId", "ra-1")
        .select("*");
    match harness.dispatch("GetRouteAnalysis", &raw, false) {
        InvocationOutcome::Emitted {
            output, ..
        } => assert_eq!(output, Some(body)),
        other => panic!("unexpected outcome: {other:?}"),
    }
}

#[test]
fn pass_through_emits_bound_parameter() {
    let harness = Harness::new(RecordingTransport::ok(json!({})), Confirmation::Accepted);
    let mut raw = RawInvocation::default().with("AttachmentId", "attachment-9");
    raw.pass_thru = true;
    match harness.dispatch("DeleteAttachment", &raw, true) {
        InvocationOutcome::Emitted {
            output, ..
        } => assert_eq!(output, Some(json!("attachment-9"))),
        other => panic!("unexpected outcome: {other:?}"),
    }
}

#[test]
fn absent_response_field_emits_nothing() {
    let harness = Harness::new(RecordingTransport::ok(json!({})), Confirmation::Accepted);
    let raw = RawInvocation::default().with("AttachmentId", "attachment-1");
    match harness.dispatch("DeleteAttachment", &raw, true) {
        InvocationOutcome::Emitted {
            output, ..
        } => assert_eq!(output, None),
        other => panic!("unexpected outcome: {other:?}"),
    }
}

#[test]
fn piped_object_binds_by_property_name() {
    let transport = RecordingTransport::ok(json!({"Attachment": {}}));
    let harness = Harness::new(transport, Confirmation::Accepted);
    let raw = RawInvocation::default().piped(json!({"AttachmentId": "attachment-7"}));
    let outcome = harness.dispatch("DeleteAttachment", &raw, true);

    assert!(matches!(outcome, InvocationOutcome::Emitted { .. }));
    let requests = harness.transport.requests();
    assert_eq!(requests[0].labels.get("attachmentId").map(String::as_str), Some("attachment-7"));
}

// ============================================================================
// SECTION: Service Failures and Cancellation
// ============================================================================

#[test]
fn service_rejection_is_reported_with_code_and_status() {
    let transport = RecordingTransport::rejecting(404, "ResourceNotFoundException");
    let harness = Harness::new(transport, Confirmation::Accepted);
    let raw = RawInvocation::default()
        .with("GlobalNetworkId", "gn-1")
        .with("RouteAnalysisId", "ra-1");
    let outcome = harness.dispatch("GetRouteAnalysis", &raw, false);

    assert!(matches!(outcome, InvocationOutcome::ServiceFailed(_)));
    let report = outcome.error_report("GetRouteAnalysis").unwrap();
    assert_eq!(report.category, "service");
    assert_eq!(report.code.as_deref(), Some("ResourceNotFoundException"));
    assert_eq!(report.status, Some(404));
    assert!(!report.throttled);
    assert_eq!(report.request_id.as_deref(), Some("req-2"));
    assert_eq!(harness.last_event().request_id.as_deref(), Some("req-2"));
}

#[test]
fn throttling_rejection_is_flagged_in_the_report() {
    let transport = RecordingTransport::rejecting(429, "ThrottlingException");
    let harness = Harness::new(transport, Confirmation::Accepted);
    let outcome = harness.dispatch("ListAttachments", &RawInvocation::default(), false);

    let report = outcome.error_report("ListAttachments").unwrap();
    assert!(report.throttled);
    assert_eq!(serde_json::to_value(&report).unwrap()["throttled"], json!(true));
}

#[test]
fn cancelled_run_issues_no_call() {
    let harness = Harness::new(RecordingTransport::ok(json!({})), Confirmation::Accepted);
    let source = CancellationSource::new();
    source.cancel();
    let raw = RawInvocation::default().with("AttachmentId", "attachment-1");
    let outcome = harness.dispatch_with("DeleteAttachment", &raw, true, source.signal());

    assert!(matches!(outcome, InvocationOutcome::Cancelled));
    assert!(!outcome.is_failure());
    assert_eq!(harness.transport.calls(), 0);
    assert_eq!(harness.last_event().network_calls, 0);
}

#[test]
fn interrupt_while_prompting_cancels_instead_of_declining() {
    let source = CancellationSource::new();
    let confirmer = CountingConfirmer::interrupting(Confirmation::Declined, 1, source.clone());
    let harness = Harness::with_confirmer(RecordingTransport::ok(json!({})), confirmer);
    let raw = RawInvocation::default().with("AttachmentId", "attachment-1");
    let outcome = harness.dispatch_with("DeleteAttachment", &raw, false, source.signal());

    assert_eq!(outcome.label(), "cancelled");
    assert_eq!(harness.transport.calls(), 0);
    assert_eq!(harness.last_event().outcome, "cancelled");
}

#[test]
fn interrupted_prompt_answer_is_cancelled() {
    let harness = Harness::new(RecordingTransport::ok(json!({})), Confirmation::Interrupted);
    let raw = RawInvocation::default().with("AttachmentId", "attachment-1");
    let outcome = harness.dispatch("DeleteAttachment", &raw, false);

    assert!(matches!(outcome, InvocationOutcome::Cancelled));
    assert_eq!(harness.transport.calls(), 0);
}

#[test]
fn raised_cancellation_skips_the_prompt() {
    let harness = Harness::new(RecordingTransport::ok(json!({})), Confirmation::Accepted);
    let source = CancellationSource::new();
    source.cancel();
    let raw = RawInvocation::default().with("AttachmentId", "attachment-1");
    let outcome = harness.dispatch_with("DeleteAttachment", &raw, false, source.signal());

    assert!(matches!(outcome, InvocationOutcome::Cancelled));
    assert_eq!(harness.confirmer.prompts(), 0);
}

#[test]
fn binding_report_names_parameter() {
    let outcome = InvocationOutcome::BindingFailed(BindingError::MissingRequired {
        command: "DeleteAttachment".to_string(),
        parameter: "AttachmentId".to_string(),
    });
    let report = outcome.error_report("DeleteAttachment").unwrap();
    assert_eq!(report.category, "binding");
    assert_eq!(report.kind, "missing_required");
    assert_eq!(report.parameter.as_deref(), Some("AttachmentId"));
    assert_eq!(report.code, None);
}

#[test]
fn success_and_decline_have_no_report() {
    let emitted = InvocationOutcome::Emitted {
        output: None,
        request_id: None,
    };
    assert!(emitted.error_report("ListAttachments").is_none());
    assert!(InvocationOutcome::Declined.error_report("DeleteAttachment").is_none());
}

// ============================================================================
// SECTION: Batch Status
// ============================================================================

#[test]
fn batch_status_exit_codes() {
    let mut status = BatchStatus::default();
    status.record(&InvocationOutcome::Declined);
    assert_eq!(status.exit_code(), EXIT_SUCCESS);

    status.record(&InvocationOutcome::ServiceFailed(ServiceError::Timeout(10)));
    assert_eq!(status.exit_code(), EXIT_FAILURE);

    status.record(&InvocationOutcome::Cancelled);
    assert!(status.is_cancelled());
    assert_eq!(status.exit_code(), EXIT_CANCELLED);
}
