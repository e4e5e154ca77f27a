// crates/netmgr-cli/src/confirm.rs
// ============================================================================
// Module: Confirmation Protocol
// Description: Interactive confirmation for mutating operations.
// Purpose: Describe affected resources and obtain an explicit answer.
// Dependencies: netmgr-client, netmgr-core, tracing
// ============================================================================

//! ## Overview
//! Mutating commands ask a [`Confirmer`] before any request is built. The
//! terminal confirmer talks to the controlling terminal rather than stdin so
//! that piped input stays available for pipeline binding.
//!
//! ## Invariants
//! - Only an explicit affirmative answer accepts.
//! - No terminal, an I/O error, or end of input means [`Confirmation::Declined`].
//! - A cancellation raised while the prompt is pending means
//!   [`Confirmation::Interrupted`] without waiting for the answer.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::fs::OpenOptions;
use std::io::BufRead;
use std::io::BufReader;
use std::io::Write;
use std::sync::mpsc;
use std::thread;
use std::time::Duration;

use netmgr_client::CancellationSignal;
use netmgr_core::CommandSpec;
use netmgr_core::ConfirmImpact;

use crate::t;

// ============================================================================
// SECTION: Constants
// ============================================================================

/// Controlling terminal device.
const TTY_PATH: &str = "/dev/tty";
/// Interval between cancellation checks while waiting for an answer.
const ANSWER_POLL_INTERVAL: Duration = Duration::from_millis(50);

// ============================================================================
// SECTION: Types
// ============================================================================

/// Answer to a confirmation prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Confirmation {
    /// Proceed with the operation.
    Accepted,
    /// Stop without side effects.
    Declined,
    /// Cancellation was raised before an answer arrived.
    Interrupted,
}

/// Description of a pending mutating operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfirmationPrompt {
    /// Operation name.
    pub operation: String,
    /// Impact classification.
    pub impact: ConfirmImpact,
    /// Affected resources as `Name=value` pairs.
    pub targets: Vec<(String, String)>,
}

impl ConfirmationPrompt {
    /// Builds a prompt for `command` and its resolved targets.
    #[must_use]
    pub fn new(command: &CommandSpec, targets: Vec<(String, String)>) -> Self {
        Self {
            operation: command.name.clone(),
            impact: command.impact,
            targets,
        }
    }

    /// Renders the localized prompt text.
    #[must_use]
    pub fn render(&self) -> String {
        let targets = if self.targets.is_empty() {
            t!("confirm.targets.none")
        } else {
            self.targets
                .iter()
                .map(|(name, value)| format!("{name}={value}"))
                .collect::<Vec<_>>()
                .join(", ")
        };
        t!(
            "confirm.prompt",
            operation = self.operation,
            targets = targets,
            impact = self.impact.as_str()
        )
    }
}

/// Source of confirmation answers.
pub trait Confirmer {
    /// Asks whether the described operation may proceed.
    ///
    /// Implementations that block must return [`Confirmation::Interrupted`]
    /// once `cancel` is raised.
    fn confirm(&self, prompt: &ConfirmationPrompt, cancel: &CancellationSignal) -> Confirmation;
}

/// Returns true for an affirmative answer in any supported locale.
#[must_use]
pub fn is_affirmative(answer: &str) -> bool {
    matches!(answer.trim().to_lowercase().as_str(), "y" | "yes" | "s" | "si" | "sí")
}

// ============================================================================
// SECTION: Terminal Confirmer
// ============================================================================

/// Confirmer reading answers from the controlling terminal.
#[derive(Debug, Clone, Copy, Default)]
pub struct TerminalConfirmer;

impl Confirmer for TerminalConfirmer {
    fn confirm(&self, prompt: &ConfirmationPrompt, cancel: &CancellationSignal) -> Confirmation {
        let Ok(tty) = OpenOptions::new().read(true).write(true).open(TTY_PATH) else {
            tracing::debug!(operation = %prompt.operation, "no controlling terminal; declining");
            return Confirmation::Declined;
        };
        let mut writer = &tty;
        if writer.write_all(prompt.render().as_bytes()).is_err() || writer.flush().is_err() {
            return Confirmation::Declined;
        }
        let (sender, receiver) = mpsc::channel();
        let spawned = thread::Builder::new().name("netmgr-confirm".to_string()).spawn(move || {
            let mut line = String::new();
            let answer = match BufReader::new(&tty).read_line(&mut line) {
                Ok(read) if read > 0 => Some(line),
                _ => None,
            };
            let _ = sender.send(answer);
        });
        if spawned.is_err() {
            return Confirmation::Declined;
        }
        await_answer(&receiver, cancel)
    }
}

/// Waits for a terminal answer while watching for cancellation.
///
/// The reader thread is left blocked when cancellation wins; the batch stops
/// and the process exits shortly after.
pub(crate) fn await_answer(
    answers: &mpsc::Receiver<Option<String>>,
    cancel: &CancellationSignal,
) -> Confirmation {
    loop {
        if cancel.is_cancelled() {
            return Confirmation::Interrupted;
        }
        match answers.recv_timeout(ANSWER_POLL_INTERVAL) {
            Ok(Some(answer)) if is_affirmative(&answer) => return Confirmation::Accepted,
            Ok(_) | Err(mpsc::RecvTimeoutError::Disconnected) => return Confirmation::Declined,
            Err(mpsc::RecvTimeoutError::Timeout) => {}
        }
    }
}

// ============================================================================
// SECTION: Tests
// ============================================================================
