// crates/netmgr-client/src/transport.rs
// ============================================================================
// Module: Service Transport
// Description: Asynchronous seam between the invoker and the wire.
// Purpose: Allow the invoker to drive real and fake service endpoints alike.
// Dependencies: async-trait, netmgr-core
// ============================================================================

use async_trait::async_trait;
use netmgr_core::Request;
use netmgr_core::Response;

use crate::error::ServiceError;

/// Asynchronous client handle executing one request per call.
///
/// # Invariants
/// - Implementations never retry on their own.
/// - Dropping the returned future abandons the call.
#[async_trait]
pub trait ServiceTransport: Send + Sync {
    /// Sends `request` and returns the decoded response.
    ///
    /// # Errors
    ///
    /// Returns [`ServiceError`] when the call fails at any layer.
    async fn send(&self, request: &Request) -> Result<Response, ServiceError>;
}
