// crates/netmgr-client/src/lib.rs
// ============================================================================
// Module: Netmgr Client Library
// Description: Service invoker and signed transport for Network Manager.
// Purpose: Turn bound requests into service calls with cancellation support.
// Dependencies: async-trait, aws-config, aws-sigv4, reqwest, tokio
// ============================================================================

//! ## Overview
//! The client crate is the only part of netmgr that performs I/O against the
//! service:
//! - [`ServiceTransport`] is the asynchronous seam to the wire,
//! - [`RestJsonTransport`] implements it over signed HTTPS,
//! - [`ServiceInvoker`] blocks on one call and honours a
//!   [`CancellationSignal`].

// ============================================================================
// SECTION: Modules
// ============================================================================

pub mod cancel;
pub mod error;
pub mod invoker;
pub mod rest_json;
pub mod transport;

// ============================================================================
// SECTION: Re-Exports
// ============================================================================

pub use cancel::CancellationSignal;
pub use cancel::CancellationSource;
pub use error::InvokeError;
pub use error::ServiceError;
pub use invoker::InvokerState;
pub use invoker::ServiceClient;
pub use invoker::ServiceInvoker;
pub use rest_json::RestJsonTransport;
pub use rest_json::TransportSettings;
pub use transport::ServiceTransport;
