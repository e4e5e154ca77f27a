// crates/netmgr-cli/src/dispatch.rs
// ============================================================================
// Module: Command Dispatcher
// Description: Generic orchestration of one command invocation.
// Purpose: Resolve, confirm, bind, invoke, and select for any CommandSpec.
// Dependencies: netmgr-client, netmgr-core, serde, serde_json, tracing
// ============================================================================

//! ## Overview
//! One [`Dispatcher`] serves every operation in the command table. Each call
//! to [`Dispatcher::dispatch`] runs the five sequential steps and reports an
//! [`InvocationOutcome`]; failures are returned as data so a batch of piped
//! invocations can continue.
//!
//! ## Invariants
//! - Binding and selector failures happen before any service call.
//! - A declined confirmation issues no service call and is not a failure.
//! - Cancellation raised before or during the prompt yields
//!   [`InvocationOutcome::Cancelled`].
//! - At most one service call per invocation.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::time::Instant;

use netmgr_client::CancellationSignal;
use netmgr_client::InvokeError;
use netmgr_client::ServiceClient;
use netmgr_client::ServiceError;
use netmgr_core::BindingError;
use netmgr_core::CommandSpec;
use netmgr_core::ConfigurationError;
use netmgr_core::RawInvocation;
use netmgr_core::ResolutionError;
use netmgr_core::bind_request;
use netmgr_core::resolve;
use serde::Serialize;
use serde_json::Value;

use crate::audit::InvocationAuditEvent;
use crate::audit::InvocationAuditEventParams;
use crate::audit::InvocationAuditSink;
use crate::confirm::Confirmation;
use crate::confirm::ConfirmationPrompt;
use crate::confirm::Confirmer;
use crate::t;

// ============================================================================
// SECTION: Exit Codes
// ============================================================================

/// Every invocation succeeded or was declined.
pub const EXIT_SUCCESS: u8 = 0;
/// At least one invocation failed.
pub const EXIT_FAILURE: u8 = 1;
/// The run was interrupted.
pub const EXIT_CANCELLED: u8 = 130;

// ============================================================================
// SECTION: Outcomes
// ============================================================================

/// Result of one dispatched invocation.
#[derive(Debug)]
pub enum InvocationOutcome {
    /// The call succeeded; `output` is `None` when the selection is null.
    Emitted {
        /// Selected pipeline output.
        output: Option<Value>,
        /// Service request identifier.
        request_id: Option<String>,
    },
    /// Confirmation was declined; nothing was sent.
    Declined,
    /// Parameter binding failed.
    BindingFailed(BindingError),
    /// The selector was invalid.
    ConfigurationFailed(ConfigurationError),
    /// The service call failed.
    ServiceFailed(ServiceError),
    /// The invocation was interrupted.
    Cancelled,
}

impl InvocationOutcome {
    /// Returns the stable outcome label.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Emitted {
                ..
            } => "succeeded",
            Self::Declined => "declined",
            Self::BindingFailed(_) => "binding_failed",
            Self::ConfigurationFailed(_) => "configuration_failed",
            Self::ServiceFailed(_) => "service_failed",
            Self::Cancelled => "cancelled",
        }
    }

    /// Returns the error kind for failed outcomes.
    #[must_use]
    pub const fn error_kind(&self) -> Option<&'static str> {
        match self {
            Self::BindingFailed(error) => Some(error.kind()),
            Self::ConfigurationFailed(error) => Some(error.kind()),
            Self::ServiceFailed(error) => Some(error.kind()),
            Self::Cancelled => Some("cancelled"),
            Self::Emitted {
                ..
            }
            | Self::Declined => None,
        }
    }

    /// Returns true when the outcome counts as a failure for the exit code.
    #[must_use]
    pub const fn is_failure(&self) -> bool {
        matches!(
            self,
            Self::BindingFailed(_) | Self::ConfigurationFailed(_) | Self::ServiceFailed(_)
        )
    }

    /// Builds the structured error object for failed or cancelled outcomes.
    #[must_use]
    pub fn error_report(&self, command: &str) -> Option<ErrorReport> {
        let mut report = ErrorReport {
            category: "",
            kind: self.error_kind()?,
            command: command.to_string(),
            parameter: None,
            message: String::new(),
            code: None,
            status: None,
            throttled: false,
            request_id: None,
        };
        match self {
            Self::BindingFailed(error) => {
                report.category = "binding";
                report.parameter = error.parameter().map(str::to_string);
                report.message = error.to_string();
            }
            Self::ConfigurationFailed(error) => {
                report.category = "configuration";
                report.message = error.to_string();
            }
            Self::ServiceFailed(error) => {
                report.category = "service";
                report.message = error.to_string();
                report.request_id = error.request_id().map(str::to_string);
                report.throttled = error.is_throttling();
                if let ServiceError::Rejected {
                    status,
                    code,
                    ..
                } = error
                {
                    report.status = Some(*status);
                    report.code = Some(code.clone());
                }
            }
            Self::Cancelled => {
                report.category = "cancelled";
                report.message = t!("dispatch.cancelled", operation = command);
            }
            Self::Emitted {
                ..
            }
            | Self::Declined => return None,
        }
        Some(report)
    }
}

/// Structured error object emitted for a failed invocation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ErrorReport {
    /// Error category (`binding`, `configuration`, `service`, `cancelled`).
    pub category: &'static str,
    /// Stable error kind.
    pub kind: &'static str,
    /// Operation name.
    pub command: String,
    /// Offending parameter, when known.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parameter: Option<String>,
    /// Human-readable message.
    pub message: String,
    /// Service error code.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    /// HTTP status of a service rejection.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<u16>,
    /// The service rejected the call for exceeding its request rate.
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub throttled: bool,
    /// Service request identifier.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub request_id: Option<String>,
}

// ============================================================================
// SECTION: Dispatcher
// ============================================================================

/// Generic dispatcher shared by every operation.
pub struct Dispatcher<'a> {
    /// Shared client handle.
    client: &'a ServiceClient,
    /// Confirmation source for mutating operations.
    confirmer: &'a dyn Confirmer,
    /// Audit sink.
    audit: &'a dyn InvocationAuditSink,
    /// Process-wide cancellation signal.
    cancel: CancellationSignal,
}

impl<'a> Dispatcher<'a> {
    /// Creates a dispatcher.
    #[must_use]
    pub fn new(
        client: &'a ServiceClient,
        confirmer: &'a dyn Confirmer,
        audit: &'a dyn InvocationAuditSink,
        cancel: CancellationSignal,
    ) -> Self {
        Self {
            client,
            confirmer,
            audit,
            cancel,
        }
    }

    /// Runs one invocation of `command`.
    #[must_use]
    pub fn dispatch(
        &self,
        command: &CommandSpec,
        raw: &RawInvocation,
        force: bool,
    ) -> InvocationOutcome {
        let span = tracing::info_span!("invocation", command = %command.name);
        let _entered = span.enter();
        let started = Instant::now();
        let mut trace = DispatchTrace::default();
        let outcome = self.run(command, raw, force, &mut trace);
        let duration_ms = u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX);
        tracing::debug!(outcome = outcome.label(), duration_ms, "invocation finished");

        let request_id = match &outcome {
            InvocationOutcome::Emitted {
                request_id, ..
            } => request_id.clone(),
            InvocationOutcome::ServiceFailed(error) => error.request_id().map(str::to_string),
            _ => None,
        };
        self.audit.record(&InvocationAuditEvent::new(InvocationAuditEventParams {
            command: command.name.clone(),
            outcome: outcome.label(),
            error_kind: outcome.error_kind(),
            network_calls: trace.network_calls,
            forced: force && command.mutation,
            selector: trace.selector,
            request_id,
            duration_ms,
        }));
        outcome
    }

    /// Executes the sequential steps of one invocation.
    fn run(
        &self,
        command: &CommandSpec,
        raw: &RawInvocation,
        force: bool,
        trace: &mut DispatchTrace,
    ) -> InvocationOutcome {
        let context = match resolve(command, raw) {
            Ok(context) => context,
            Err(ResolutionError::Binding(error)) => {
                tracing::debug!(error = %error, "binding failed");
                return InvocationOutcome::BindingFailed(error);
            }
            Err(ResolutionError::Configuration(error)) => {
                tracing::debug!(error = %error, "selector rejected");
                return InvocationOutcome::ConfigurationFailed(error);
            }
        };
        trace.selector = Some(context.selector().expression());

        if self.cancel.is_cancelled() {
            return InvocationOutcome::Cancelled;
        }
        if command.mutation && !force {
            let prompt = ConfirmationPrompt::new(command, context.targets());
            let answer = self.confirmer.confirm(&prompt, &self.cancel);
            if answer == Confirmation::Interrupted || self.cancel.is_cancelled() {
                tracing::info!("confirmation interrupted");
                return InvocationOutcome::Cancelled;
            }
            if answer == Confirmation::Declined {
                tracing::info!("confirmation declined");
                return InvocationOutcome::Declined;
            }
        }

        let request = bind_request(&context);
        if self.cancel.is_cancelled() {
            return InvocationOutcome::Cancelled;
        }
        trace.network_calls += 1;
        let mut invoker = self.client.invoker();
        match invoker.invoke(request, &self.cancel) {
            Ok(response) => {
                let selected = context.selector().apply(context.values(), &response);
                InvocationOutcome::Emitted {
                    output: (!selected.is_null()).then_some(selected),
                    request_id: response.request_id,
                }
            }
            Err(InvokeError::Cancelled) => InvocationOutcome::Cancelled,
            Err(InvokeError::Service(error)) => InvocationOutcome::ServiceFailed(error),
            Err(error @ InvokeError::Reused) => {
                InvocationOutcome::ServiceFailed(ServiceError::Config(error.to_string()))
            }
        }
    }
}

/// Facts gathered while running one invocation.
#[derive(Debug, Default)]
struct DispatchTrace {
    /// Service calls issued.
    network_calls: u32,
    /// Active selector expression.
    selector: Option<String>,
}

// ============================================================================
// SECTION: Batch Status
// ============================================================================

/// Aggregates outcomes of a batch into an exit code.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BatchStatus {
    /// At least one invocation failed.
    failed: bool,
    /// The batch was interrupted.
    cancelled: bool,
}

impl BatchStatus {
    /// Folds an outcome into the status.
    pub const fn record(&mut self, outcome: &InvocationOutcome) {
        if outcome.is_failure() {
            self.failed = true;
        }
        if matches!(outcome, InvocationOutcome::Cancelled) {
            self.cancelled = true;
        }
    }

    /// Returns true once an invocation was cancelled.
    #[must_use]
    pub const fn is_cancelled(&self) -> bool {
        self.cancelled
    }

    /// Returns the process exit code for the batch.
    #[must_use]
    pub const fn exit_code(&self) -> u8 {
        if self.cancelled {
            EXIT_CANCELLED
        } else if self.failed {
            EXIT_FAILURE
        } else {
            EXIT_SUCCESS
        }
    }
}

// ============================================================================
// SECTION: Tests
// ============================================================================

#[cfg(test)]
mod tests;
