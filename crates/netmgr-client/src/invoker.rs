// crates/netmgr-client/src/invoker.rs
// ============================================================================
// Module: Service Invoker
// Description: Blocking boundary between the dispatcher and the async transport.
// Purpose: Run exactly one call per invoker and surface cancellation distinctly.
// Dependencies: netmgr-config, netmgr-core, tokio, tracing
// ============================================================================

//! ## Overview
//! [`ServiceClient`] owns the process-wide transport. Calls run on the
//! caller's multi-thread runtime when there is one, otherwise on a runtime the
//! client builds on first use. Each invocation takes a fresh [`ServiceInvoker`], which blocks
//! the calling thread until the call completes or the cancellation signal is
//! raised. Cancellation drops the in-flight future and yields
//! [`InvokeError::Cancelled`].
//!
//! ## Invariants
//! - States move `Idle -> Calling -> {Succeeded, Failed, Cancelled}` only.
//! - An invoker that left `Idle` rejects further calls with [`InvokeError::Reused`].
//! - Invokers never retry.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::sync::Arc;
use std::sync::OnceLock;
use std::time::Instant;

use netmgr_config::ClientConfig;
use netmgr_core::Request;
use netmgr_core::Response;
use tokio::runtime::Handle;
use tokio::runtime::Runtime;
use tokio::runtime::RuntimeFlavor;

use crate::cancel::CancellationSignal;
use crate::error::InvokeError;
use crate::error::ServiceError;
use crate::rest_json::RestJsonTransport;
use crate::rest_json::TransportSettings;
use crate::transport::ServiceTransport;

// ============================================================================
// SECTION: Runtime Helpers
// ============================================================================

/// Blocks on an invocation future using a compatible runtime.
///
/// The caller's multi-thread runtime is used when there is one; the client's
/// own runtime is only built when no runtime is current.
fn block_on_with_runtime<F, T>(client: &ServiceClient, future: F) -> Result<T, InvokeError>
where
    F: Future<Output = Result<T, InvokeError>> + Send + 'static,
    T: Send + 'static,
{
    if let Ok(handle) = Handle::try_current() {
        if matches!(handle.runtime_flavor(), RuntimeFlavor::MultiThread) {
            return tokio::task::block_in_place(|| handle.block_on(future));
        }
        let (tx, rx) = std::sync::mpsc::sync_channel(1);
        std::thread::spawn(move || {
            let result = Runtime::new()
                .map_err(|err| InvokeError::Service(ServiceError::Transport(err.to_string())))
                .and_then(|runtime| runtime.block_on(future));
            let _ = tx.send(result);
        });
        return rx.recv().unwrap_or_else(|_| {
            Err(InvokeError::Service(ServiceError::Transport(
                "invoker thread join failed".to_string(),
            )))
        });
    }

    client.runtime()?.block_on(future)
}

// ============================================================================
// SECTION: Client Handle
// ============================================================================

/// Reusable client handle shared by sequential invocations.
pub struct ServiceClient {
    /// Wire transport.
    transport: Arc<dyn ServiceTransport>,
    /// Runtime driving transport futures outside an existing runtime.
    runtime: OnceLock<Arc<Runtime>>,
}

impl Drop for ServiceClient {
    fn drop(&mut self) {
        if let Some(runtime) = self.runtime.take() {
            let _ = std::thread::spawn(move || drop(runtime));
        }
    }
}

impl std::fmt::Debug for ServiceClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServiceClient").finish_non_exhaustive()
    }
}

impl ServiceClient {
    /// Creates a client backed by the signed REST-JSON transport.
    ///
    /// Credentials are not touched until the first call.
    ///
    /// # Errors
    ///
    /// Returns [`ServiceError`] when the transport cannot be built.
    pub fn new(config: &ClientConfig) -> Result<Self, ServiceError> {
        let transport = RestJsonTransport::new(TransportSettings::from_config(config))?;
        Ok(Self::with_transport(Arc::new(transport)))
    }

    /// Creates a client over an arbitrary transport.
    #[must_use]
    pub fn with_transport(transport: Arc<dyn ServiceTransport>) -> Self {
        Self {
            transport,
            runtime: OnceLock::new(),
        }
    }

    /// Returns a fresh invoker for one call.
    #[must_use]
    pub const fn invoker(&self) -> ServiceInvoker<'_> {
        ServiceInvoker {
            client: self,
            state: InvokerState::Idle,
        }
    }

    /// Returns the client runtime, building it on first use.
    fn runtime(&self) -> Result<&Runtime, ServiceError> {
        if self.runtime.get().is_none() {
            let runtime = tokio::runtime::Builder::new_multi_thread()
                .worker_threads(2)
                .thread_name("netmgr-invoker")
                .enable_all()
                .build()
                .map_err(|err| ServiceError::Config(err.to_string()))?;
            let _ = self.runtime.set(Arc::new(runtime));
        }
        self.runtime
            .get()
            .map(AsRef::as_ref)
            .ok_or_else(|| ServiceError::Config("service client runtime closed".to_string()))
    }

    /// Returns true once the client built its own runtime.
    #[cfg(test)]
    fn owns_runtime(&self) -> bool {
        self.runtime.get().is_some()
    }
}

// ============================================================================
// SECTION: Invoker
// ============================================================================

/// Lifecycle of one invoker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvokerState {
    /// No call attempted yet.
    Idle,
    /// Call in flight.
    Calling,
    /// Call returned a response.
    Succeeded,
    /// Call failed.
    Failed,
    /// Call was cancelled.
    Cancelled,
}

/// Single-use invoker bound to a [`ServiceClient`].
#[derive(Debug)]
pub struct ServiceInvoker<'a> {
    /// Owning client.
    client: &'a ServiceClient,
    /// Current state.
    state: InvokerState,
}

impl ServiceInvoker<'_> {
    /// Returns the current state.
    #[must_use]
    pub const fn state(&self) -> InvokerState {
        self.state
    }

    /// Sends `request` and blocks until it completes or `cancel` is raised.
    ///
    /// # Errors
    ///
    /// Returns [`InvokeError::Reused`] when this invoker already ran,
    /// [`InvokeError::Cancelled`] on cancellation, and
    /// [`InvokeError::Service`] when the call fails.
    pub fn invoke(
        &mut self,
        request: Request,
        cancel: &CancellationSignal,
    ) -> Result<Response, InvokeError> {
        if self.state != InvokerState::Idle {
            return Err(InvokeError::Reused);
        }
        if cancel.is_cancelled() {
            self.state = InvokerState::Cancelled;
            return Err(InvokeError::Cancelled);
        }
        self.state = InvokerState::Calling;
        let operation = request.operation.clone();
        let started = Instant::now();
        let transport = Arc::clone(&self.client.transport);
        let mut cancel = cancel.clone();
        let result = block_on_with_runtime(self.client, async move {
            tokio::select! {
                biased;
                () = cancel.cancelled() => Err(InvokeError::Cancelled),
                result = transport.send(&request) => result.map_err(InvokeError::from),
            }
        });
        self.state = match &result {
            Ok(_) => InvokerState::Succeeded,
            Err(InvokeError::Cancelled) => InvokerState::Cancelled,
            Err(_) => InvokerState::Failed,
        };
        let elapsed_ms = u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX);
        match &result {
            Ok(_) => tracing::debug!(operation = %operation, elapsed_ms, "service call succeeded"),
            Err(InvokeError::Cancelled) => {
                tracing::info!(operation = %operation, elapsed_ms, "service call cancelled");
            }
            Err(err) => {
                tracing::debug!(
                    operation = %operation,
                    elapsed_ms,
                    error = %err,
                    "service call failed"
                );
            }
        }
        result
    }
}

// ============================================================================
// SECTION: Tests
// ============================================================================
