// crates/netmgr-cli/src/test_support.rs
// ============================================================================
// Module: CLI Test Fixtures
// Description: Fake transport, confirmer, and audit sink for unit tests.
// Purpose: Drive the dispatcher and batch runner without a network.
// Dependencies: async-trait, netmgr-client, netmgr-contract, netmgr-core
// ============================================================================

#![allow(
    clippy::panic,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::missing_docs_in_private_items,
    reason = "Test-only fixtures use panic-based helpers for clarity."
)]

use std::cell::Cell;
use std::sync::Arc;
use std::sync::Mutex;

use async_trait::async_trait;
use netmgr_client::CancellationSignal;
use netmgr_client::CancellationSource;
use netmgr_client::ServiceClient;
use netmgr_client::ServiceError;
use netmgr_client::ServiceTransport;
use netmgr_core::CommandSpec;
use netmgr_core::RawInvocation;
use netmgr_core::Request;
use netmgr_core::Response;
use serde_json::Value;

use crate::audit::InvocationAuditEvent;
use crate::audit::InvocationAuditSink;
use crate::confirm::Confirmation;
use crate::confirm::ConfirmationPrompt;
use crate::confirm::Confirmer;
use crate::dispatch::Dispatcher;
use crate::dispatch::InvocationOutcome;

pub struct RecordingTransport {
    reply: Result<Value, (u16, &'static str)>,
    requests: Mutex<Vec<Request>>,
}

impl RecordingTransport {
    pub fn ok(body: Value) -> Arc<Self> {
        Arc::new(Self {
            reply: Ok(body),
            requests: Mutex::new(Vec::new()),
        })
    }

    pub fn rejecting(status: u16, code: &'static str) -> Arc<Self> {
        Arc::new(Self {
            reply: Err((status, code)),
            requests: Mutex::new(Vec::new()),
        })
    }

    pub fn calls(&self) -> usize {
        self.requests.lock().unwrap().len()
    }

    pub fn requests(&self) -> Vec<Request> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl ServiceTransport for RecordingTransport {
    async fn send(&self, request: &Request) -> Result<Response, ServiceError> {
        self.requests.lock().unwrap().push(request.clone());
        match &self.reply {
            Ok(body) => Ok(Response::new(&request.operation, body.as_object().cloned().unwrap())
                .with_request_id(Some("req-1".to_string()))),
            Err((status, code)) => Err(ServiceError::Rejected {
                status: *status,
                code: (*code).to_string(),
                message: "rejected by fake".to_string(),
                request_id: Some("req-2".to_string()),
            }),
        }
    }
}

/// Confirmer with a fixed answer that counts prompts.
///
/// When `interrupts_on` is set, the prompt with that 1-based number raises
/// cancellation before answering, like Ctrl-C pressed at the terminal.
pub struct CountingConfirmer {
    answer: Confirmation,
    prompts: Cell<usize>,
    interrupts_on: Option<(usize, CancellationSource)>,
}

impl CountingConfirmer {
    pub const fn new(answer: Confirmation) -> Self {
        Self {
            answer,
            prompts: Cell::new(0),
            interrupts_on: None,
        }
    }

    pub fn interrupting(answer: Confirmation, prompt: usize, source: CancellationSource) -> Self {
        Self {
            answer,
            prompts: Cell::new(0),
            interrupts_on: Some((prompt, source)),
        }
    }

    pub fn prompts(&self) -> usize {
        self.prompts.get()
    }
}

impl Confirmer for CountingConfirmer {
    fn confirm(&self, _prompt: &ConfirmationPrompt, _cancel: &CancellationSignal) -> Confirmation {
        self.prompts.set(self.prompts.get() + 1);
        if let Some((number, source)) = &self.interrupts_on {
            if *number == self.prompts.get() {
                source.cancel();
            }
        }
        self.answer
    }
}

#[derive(Default)]
pub struct RecordingAudit {
    events: Mutex<Vec<InvocationAuditEvent>>,
}

impl RecordingAudit {
    pub fn events(&self) -> Vec<InvocationAuditEvent> {
        self.events.lock().unwrap().clone()
    }
}

impl InvocationAuditSink for RecordingAudit {
    fn record(&self, event: &InvocationAuditEvent) {
        self.events.lock().unwrap().push(event.clone());
    }
}

pub fn spec(name: &str) -> &'static CommandSpec {
    netmgr_contract::registry().unwrap().get(name).unwrap()
}

pub struct Harness {
    pub transport: Arc<RecordingTransport>,
    pub client: ServiceClient,
    pub confirmer: CountingConfirmer,
    pub audit: RecordingAudit,
}

impl Harness {
    pub fn new(transport: Arc<RecordingTransport>, answer: Confirmation) -> Self {
        Self::with_confirmer(transport, CountingConfirmer::new(answer))
    }

    pub fn with_confirmer(
        transport: Arc<RecordingTransport>,
        confirmer: CountingConfirmer,
    ) -> Self {
        let client = ServiceClient::with_transport(transport.clone());
        Self {
            transport,
            client,
            confirmer,
            audit: RecordingAudit::default(),
        }
    }

    pub fn dispatcher(&self, cancel: CancellationSignal) -> Dispatcher<'_> {
        Dispatcher::new(&self.client, &self.confirmer, &self.audit, cancel)
    }

    pub fn dispatch(&self, command: &str, raw: &RawInvocation, force: bool) -> InvocationOutcome {
        self.dispatch_with(command, raw, force, CancellationSignal::never())
    }

    pub fn dispatch_with(
        &self,
        command: &str,
        raw: &RawInvocation,
        force: bool,
        cancel: CancellationSignal,
    ) -> InvocationOutcome {
        self.dispatcher(cancel).dispatch(spec(command), raw, force)
    }

    pub fn last_event(&self) -> InvocationAuditEvent {
        self.audit.events().last().cloned().unwrap()
    }
}
