// crates/netmgr-cli/src/pipeline.rs
// ============================================================================
// Module: Pipeline Input
// Description: Reads piped objects for batch invocations.
// Purpose: Turn stdin into the sequence of objects fed to the binder.
// Dependencies: serde_json, thiserror
// ============================================================================

//! ## Overview
//! Pipeline input is a JSON array, newline-delimited JSON, or plain text.
//! In the line-oriented forms each non-empty line is one piped value. Lines
//! that look like a JSON object, array, or string are parsed as JSON; every
//! other line is kept verbatim as a string scalar, so `1e5` or `007` reach
//! the binder exactly as typed.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::io::Read;

use serde_json::Value;
use thiserror::Error;

// ============================================================================
// SECTION: Constants
// ============================================================================

/// Maximum accepted pipeline input size.
pub const MAX_PIPELINE_BYTES: usize = 16 * 1024 * 1024;

// ============================================================================
// SECTION: Errors
// ============================================================================

/// Pipeline input failure.
#[derive(Debug, Error)]
pub enum PipelineError {
    /// Reading the input failed.
    #[error("{0}")]
    Io(#[from] std::io::Error),
    /// Input exceeds [`MAX_PIPELINE_BYTES`].
    #[error("pipeline input exceeds {0} bytes")]
    TooLarge(usize),
    /// Input is not UTF-8.
    #[error("pipeline input is not valid utf-8")]
    NotUtf8,
    /// Input starts like a JSON array but does not parse as one.
    #[error("{0}")]
    Json(#[from] serde_json::Error),
}

// ============================================================================
// SECTION: Parsing
// ============================================================================

/// Reads and parses all pipeline input from `reader`.
///
/// # Errors
///
/// Returns [`PipelineError`] when reading fails, the input is too large, or
/// is not UTF-8.
pub fn read_pipeline<R: Read>(reader: R) -> Result<Vec<Value>, PipelineError> {
    let limit = u64::try_from(MAX_PIPELINE_BYTES).unwrap_or(u64::MAX).saturating_add(1);
    let mut bytes = Vec::new();
    reader.take(limit).read_to_end(&mut bytes)?;
    if bytes.len() > MAX_PIPELINE_BYTES {
        return Err(PipelineError::TooLarge(MAX_PIPELINE_BYTES));
    }
    let text = String::from_utf8(bytes).map_err(|_| PipelineError::NotUtf8)?;
    parse_pipeline(&text)
}

/// Parses pipeline text into piped values.
///
/// # Errors
///
/// Returns [`PipelineError::Json`] when input starting with `[` is not a
/// JSON array.
pub fn parse_pipeline(text: &str) -> Result<Vec<Value>, PipelineError> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Ok(Vec::new());
    }
    if trimmed.starts_with('[') {
        return match serde_json::from_str::<Value>(trimmed)? {
            Value::Array(items) => Ok(items),
            other => Ok(vec![other]),
        };
    }
    Ok(trimmed
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(parse_line)
        .collect())
}

/// Parses one line of line-oriented pipeline input.
fn parse_line(line: &str) -> Value {
    if line.starts_with(['{', '[', '"']) {
        if let Ok(value) = serde_json::from_str::<Value>(line) {
            return value;
        }
    }
    Value::String(line.to_string())
}

// ============================================================================
// SECTION: Tests
// ============================================================================
