// crates/netmgr-core/src/response.rs
// ============================================================================
// Module: Service Response
// Description: Transport-level response consumed by the output selector.
// Purpose: Hold the decoded JSON body of a successful operation call.
// Dependencies: serde_json
// ============================================================================

use serde_json::Map;
use serde_json::Value;

/// Decoded response of a successful operation call.
///
/// # Invariants
/// - Read-only once constructed; consumed by the output selector.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Response {
    /// Operation name.
    pub operation: String,
    /// Top-level response members.
    pub body: Map<String, Value>,
    /// Service request identifier, when reported.
    pub request_id: Option<String>,
}

impl Response {
    /// Creates a response for `operation` with the given body.
    #[must_use]
    pub fn new(operation: &str, body: Map<String, Value>) -> Self {
        Self {
            operation: operation.to_string(),
            body,
            request_id: None,
        }
    }

    /// Attaches a service request identifier.
    #[must_use]
    pub fn with_request_id(mut self, request_id: Option<String>) -> Self {
        self.request_id = request_id;
        self
    }
}
