// crates/netmgr-cli/src/batch.rs
// ============================================================================
// Module: Invocation Batch
// Description: Runs a command once per piped value and folds the outcomes.
// Purpose: Keep per-item failures local while cancellation stops the batch.
// Dependencies: netmgr-config, netmgr-core, serde_json
// ============================================================================

//! ## Overview
//! A batch is the single command-line invocation, or one invocation per value
//! read with `--pipeline`. Every outcome is written as it arrives; a failed
//! item does not stop the next one.
//!
//! ## Invariants
//! - A cancelled outcome stops the batch before the next item.
//! - Items skipped by a cancellation are counted in a stderr notice.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::io;
use std::io::Write;

use netmgr_config::OutputFormat;
use netmgr_core::CommandSpec;
use netmgr_core::RawInvocation;
use serde_json::Value;

use crate::dispatch::BatchStatus;
use crate::dispatch::Dispatcher;
use crate::output::emit_outcome;
use crate::t;

// ============================================================================
// SECTION: Types
// ============================================================================

/// One command applied to its command-line arguments and optional input.
#[derive(Debug, Clone)]
pub struct Batch<'a> {
    /// Command being run.
    pub command: &'a CommandSpec,
    /// Command-line arguments shared by every item.
    pub raw: RawInvocation,
    /// Skip confirmation for mutating commands.
    pub force: bool,
    /// Piped values; `None` runs the command once without pipeline input.
    pub inputs: Option<Vec<Value>>,
}

// ============================================================================
// SECTION: Execution
// ============================================================================

/// Dispatches every item of `batch` and writes each outcome.
///
/// # Errors
///
/// Returns an I/O error when writing an outcome fails.
pub fn run_batch<O: Write, E: Write>(
    dispatcher: &Dispatcher<'_>,
    batch: Batch<'_>,
    format: OutputFormat,
    out: &mut O,
    err: &mut E,
) -> io::Result<BatchStatus> {
    let mut status = BatchStatus::default();
    let items: Vec<Option<Value>> = match batch.inputs {
        Some(values) => values.into_iter().map(Some).collect(),
        None => vec![None],
    };
    let total = items.len();
    for (index, piped) in items.into_iter().enumerate() {
        let mut invocation = batch.raw.clone();
        invocation.piped = piped;
        let outcome = dispatcher.dispatch(batch.command, &invocation, batch.force);
        emit_outcome(&outcome, &batch.command.name, format, out, err)?;
        status.record(&outcome);
        if status.is_cancelled() {
            let remaining = total - index - 1;
            if remaining > 0 {
                writeln!(err, "{}", t!("dispatch.batch_stopped", remaining = remaining))?;
            }
            break;
        }
    }
    Ok(status)
}

// ============================================================================
// SECTION: Tests
// ============================================================================
