// crates/netmgr-core/src/lib.rs
// ============================================================================
// Module: Netmgr Core Library
// Description: Generic command engine for the Network Manager CLI.
// Purpose: Bind CLI input to typed requests and project responses to output.
// Dependencies: serde, serde_json, thiserror, tracing
// ============================================================================

//! ## Overview
//! Netmgr Core holds the data-driven half of the command engine:
//! - [`CommandSpec`] and [`ParameterSpec`] describe operations as data,
//! - [`resolve`] binds raw arguments and piped input into an
//!   [`InvocationContext`],
//! - [`bind_request`] maps a context onto a transport [`Request`],
//! - [`OutputSelector`] projects a [`Response`] into pipeline output.
//!
//! Invariants:
//! - Descriptors are validated once by [`CommandRegistry::new`] and never mutated.
//! - Unset optional parameters never reach the request.
//! - Every failure in this crate happens before any network call.

// ============================================================================
// SECTION: Modules
// ============================================================================

pub mod binding;
pub mod error;
pub mod naming;
pub mod registry;
pub mod request;
pub mod response;
pub mod selector;
pub mod spec;
pub mod value;

// ============================================================================
// SECTION: Re-Exports
// ============================================================================

pub use binding::InvocationContext;
pub use binding::NamedArgument;
pub use binding::RawInvocation;
pub use binding::resolve;
pub use error::BindingError;
pub use error::ConfigurationError;
pub use error::RegistryError;
pub use error::ResolutionError;
pub use registry::CommandRegistry;
pub use request::Request;
pub use request::bind_request;
pub use response::Response;
pub use selector::OutputSelector;
pub use spec::CommandSpec;
pub use spec::ConfirmImpact;
pub use spec::HttpBinding;
pub use spec::HttpMethod;
pub use spec::ParameterLocation;
pub use spec::ParameterSpec;
pub use spec::PipelineBinding;
pub use spec::SemanticType;
pub use value::ParamValue;
pub use value::Tag;

#[cfg(test)]
mod test_support;
