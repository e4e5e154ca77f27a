// crates/netmgr-client/src/error.rs
// ============================================================================
// Module: Client Errors
// Description: Service call and invocation failure types.
// Purpose: Normalize transport, protocol, and service failures into one taxonomy.
// Dependencies: thiserror
// ============================================================================

//! ## Overview
//! [`ServiceError`] covers everything that can go wrong once a request leaves
//! the binder. Name-resolution failures are re-wrapped with a clarified
//! message and keep the original failure as their [`std::error::Error::source`].
//! [`InvokeError`] adds the invoker-level outcomes (cancellation and reuse).

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::error::Error as StdError;

use thiserror::Error;

// ============================================================================
// SECTION: Service Errors
// ============================================================================

/// Boxed underlying failure kept as an error source.
pub type BoxError = Box<dyn StdError + Send + Sync + 'static>;

/// Failure of a single service call.
#[derive(Debug, Error)]
pub enum ServiceError {
    /// The service answered with a non-success status.
    #[error("{code} (HTTP {status}): {message}")]
    Rejected {
        /// HTTP status code.
        status: u16,
        /// Service error code.
        code: String,
        /// Service error message.
        message: String,
        /// Service request identifier.
        request_id: Option<String>,
    },
    /// The endpoint host name could not be resolved.
    #[error(
        "could not resolve service endpoint host {host}; check the region, endpoint override, \
         and network connectivity"
    )]
    NameResolution {
        /// Host name that failed to resolve.
        host: String,
        /// Original transport failure.
        #[source]
        source: BoxError,
    },
    /// The call exceeded its timeout.
    #[error("service call timed out after {0} ms")]
    Timeout(u64),
    /// Transport-level failure.
    #[error("service transport error: {0}")]
    Transport(String),
    /// Response could not be interpreted.
    #[error("service protocol error: {0}")]
    Protocol(String),
    /// Credentials could not be resolved or used for signing.
    #[error("credentials error: {0}")]
    Credentials(String),
    /// Response size exceeds limits.
    #[error("service response exceeds size limit ({actual} > {limit})")]
    ResponseTooLarge {
        /// Actual size in bytes.
        actual: usize,
        /// Maximum allowed size in bytes.
        limit: usize,
    },
    /// Client configuration is invalid.
    #[error("service client config error: {0}")]
    Config(String),
}

impl ServiceError {
    /// Returns a stable kind label for structured error output.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Rejected {
                ..
            } => "service_rejected",
            Self::NameResolution {
                ..
            } => "name_resolution",
            Self::Timeout(_) => "timeout",
            Self::Transport(_) => "transport",
            Self::Protocol(_) => "protocol",
            Self::Credentials(_) => "credentials",
            Self::ResponseTooLarge {
                ..
            } => "response_too_large",
            Self::Config(_) => "client_config",
        }
    }

    /// Returns true when the service throttled the call.
    #[must_use]
    pub fn is_throttling(&self) -> bool {
        match self {
            Self::Rejected {
                status,
                code,
                ..
            } => {
                *status == 429
                    || code.contains("Throttling")
                    || code == "TooManyRequestsException"
            }
            _ => false,
        }
    }

    /// Returns the service request identifier, when known.
    #[must_use]
    pub fn request_id(&self) -> Option<&str> {
        match self {
            Self::Rejected {
                request_id, ..
            } => request_id.as_deref(),
            _ => None,
        }
    }
}

// ============================================================================
// SECTION: Invocation Errors
// ============================================================================

/// Failure of one invoker call.
#[derive(Debug, Error)]
pub enum InvokeError {
    /// The call was cancelled before it completed.
    #[error("invocation cancelled")]
    Cancelled,
    /// The invoker already left the idle state.
    #[error("service invoker cannot be reused")]
    Reused,
    /// The service call failed.
    #[error(transparent)]
    Service(#[from] ServiceError),
}

// ============================================================================
// SECTION: Classification
// ============================================================================

/// Returns true when an error chain describes a DNS lookup failure.
#[must_use]
pub fn is_name_resolution_failure(error: &(dyn StdError + 'static)) -> bool {
    let mut current = Some(error);
    while let Some(err) = current {
        let text = err.to_string().to_ascii_lowercase();
        if text.contains("dns error")
            || text.contains("failed to lookup address")
            || text.contains("name or service not known")
            || text.contains("no such host")
        {
            return true;
        }
        current = err.source();
    }
    false
}

// ============================================================================
// SECTION: Tests
// ============================================================================

#[cfg(test)]
mod tests;
