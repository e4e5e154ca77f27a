// crates/netmgr-client/src/cancel.rs
// ============================================================================
// Module: Cancellation Signal
// Description: Cooperative cancellation shared between the CLI and invokers.
// Purpose: Let an interrupt stop the in-flight call instead of hanging.
// Dependencies: tokio
// ============================================================================

//! ## Overview
//! A [`CancellationSource`] is held by whoever observes interrupts; every
//! invocation receives a [`CancellationSignal`] subscribed to it. Once raised,
//! the signal stays raised for the rest of the process.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::sync::Arc;

use tokio::sync::watch;

// ============================================================================
// SECTION: Types
// ============================================================================

/// Raises cancellation for all subscribed signals.
#[derive(Debug, Clone)]
pub struct CancellationSource {
    /// Shared flag sender.
    sender: Arc<watch::Sender<bool>>,
}

impl Default for CancellationSource {
    fn default() -> Self {
        Self::new()
    }
}

impl CancellationSource {
    /// Creates a source in the not-cancelled state.
    #[must_use]
    pub fn new() -> Self {
        let (sender, _receiver) = watch::channel(false);
        Self {
            sender: Arc::new(sender),
        }
    }

    /// Returns a signal observing this source.
    #[must_use]
    pub fn signal(&self) -> CancellationSignal {
        CancellationSignal {
            receiver: self.sender.subscribe(),
        }
    }

    /// Raises cancellation.
    pub fn cancel(&self) {
        self.sender.send_replace(true);
    }

    /// Returns true once cancellation has been raised.
    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        *self.sender.borrow()
    }
}

/// Observes a [`CancellationSource`].
#[derive(Debug, Clone)]
pub struct CancellationSignal {
    /// Flag receiver.
    receiver: watch::Receiver<bool>,
}

impl CancellationSignal {
    /// Returns a signal that is never raised.
    #[must_use]
    pub fn never() -> Self {
        CancellationSource::new().signal()
    }

    /// Returns true once cancellation has been raised.
    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        *self.receiver.borrow()
    }

    /// Completes when cancellation is raised.
    ///
    /// Never completes if the source is dropped without cancelling.
    pub async fn cancelled(&mut self) {
        if self.receiver.wait_for(|cancelled| *cancelled).await.is_err() {
            std::future::pending::<()>().await;
        }
    }
}
