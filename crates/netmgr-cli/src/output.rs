// crates/netmgr-cli/src/output.rs
// ============================================================================
// Module: Output Rendering
// Description: Emission of pipeline objects and structured error objects.
// Purpose: Keep stdout machine-readable and route failures to stderr.
// Dependencies: netmgr-config, serde, serde_jcs, serde_json
// ============================================================================

//! ## Overview
//! Selected objects go to stdout, one JSON document per line in `json` mode
//! (canonical JSON via `serde_jcs`) or indented in `pretty` mode. Failures are
//! written to stderr as `{"error": {...}}` objects so a batch keeps running.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::io;
use std::io::Write;

use netmgr_config::OutputFormat;
use serde::Serialize;

use crate::dispatch::ErrorReport;
use crate::dispatch::InvocationOutcome;
use crate::t;

// ============================================================================
// SECTION: Rendering
// ============================================================================

/// Renders `value` in the requested format without a trailing newline.
///
/// # Errors
///
/// Returns [`serde_json::Error`] when the value cannot be serialized.
pub fn render<T: Serialize>(value: &T, format: OutputFormat) -> Result<String, serde_json::Error> {
    match format {
        OutputFormat::Json => serde_jcs::to_string(value),
        OutputFormat::Pretty => serde_json::to_string_pretty(value),
    }
}

/// Error object wrapper.
#[derive(Serialize)]
struct ErrorEnvelope<'a> {
    /// Error payload.
    error: &'a ErrorReport,
}

/// Writes `value` as one document followed by a newline.
///
/// # Errors
///
/// Returns an I/O error when rendering or writing fails.
pub fn write_document<T: Serialize, W: Write>(
    out: &mut W,
    value: &T,
    format: OutputFormat,
) -> io::Result<()> {
    let text = render(value, format)
        .map_err(|err| io::Error::other(t!("output.render_failed", error = err)))?;
    writeln!(out, "{text}")
}

/// Writes the visible result of one invocation.
///
/// Emitted objects go to `out`; error objects and notices go to `err`.
///
/// # Errors
///
/// Returns an I/O error when writing fails.
pub fn emit_outcome<O: Write, E: Write>(
    outcome: &InvocationOutcome,
    command: &str,
    format: OutputFormat,
    out: &mut O,
    err: &mut E,
) -> io::Result<()> {
    match outcome {
        InvocationOutcome::Emitted {
            output: Some(value),
            ..
        } => write_document(out, value, format),
        InvocationOutcome::Emitted {
            output: None,
            ..
        } => Ok(()),
        InvocationOutcome::Declined => {
            writeln!(err, "{}", t!("confirm.declined", operation = command))
        }
        InvocationOutcome::BindingFailed(_)
        | InvocationOutcome::ConfigurationFailed(_)
        | InvocationOutcome::ServiceFailed(_)
        | InvocationOutcome::Cancelled => match outcome.error_report(command) {
            Some(report) => write_document(
                err,
                &ErrorEnvelope {
                    error: &report,
                },
                OutputFormat::Json,
            ),
            None => Ok(()),
        },
    }
}

// ============================================================================
// SECTION: Tests
// ============================================================================

#[cfg(test)]
mod tests;
