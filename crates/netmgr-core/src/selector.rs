// crates/netmgr-core/src/selector.rs
// ============================================================================
// Module: Output Selector
// Description: Selector expressions projecting a response into pipeline output.
// Purpose: Let one dispatcher serve every operation with a uniform override.
// Dependencies: serde_json
// ============================================================================

//! ## Overview
//! A selector expression is one of:
//! - `*`: the whole response body,
//! - `^Name`: the bound value of parameter `Name` (pass-through),
//! - a response field name: that field.
//!
//! Expressions are parsed and validated against the command descriptor before
//! any network call, so [`OutputSelector::apply`] itself cannot fail.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::collections::BTreeMap;

use serde_json::Value;

use crate::error::ConfigurationError;
use crate::naming::normalize_key;
use crate::response::Response;
use crate::spec::CommandSpec;
use crate::value::ParamValue;

// ============================================================================
// SECTION: Constants
// ============================================================================

/// Selector token returning the whole response.
pub const WILDCARD: &str = "*";
/// Prefix marking a pass-through selector.
pub const PASS_THROUGH_MARKER: char = '^';

// ============================================================================
// SECTION: Types
// ============================================================================

/// Resolved output selector.
///
/// # Invariants
/// - `PassThrough` names a declared parameter by its canonical name.
/// - `Field` names a declared response field by its canonical name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutputSelector {
    /// Whole response body.
    Whole,
    /// Bound value of the named parameter.
    PassThrough(String),
    /// Named response field.
    Field(String),
}

impl OutputSelector {
    /// Parses `expression` against `command`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigurationError`] when the expression is empty or names an
    /// undeclared parameter or response field.
    pub fn parse(command: &CommandSpec, expression: &str) -> Result<Self, ConfigurationError> {
        let expression = expression.trim();
        if expression.is_empty() {
            return Err(ConfigurationError::EmptySelector {
                command: command.name.clone(),
            });
        }
        if expression == WILDCARD {
            return Ok(Self::Whole);
        }
        if let Some(name) = expression.strip_prefix(PASS_THROUGH_MARKER) {
            let parameter =
                command.parameter(name.trim()).ok_or_else(|| ConfigurationError::UnknownParameter {
                    command: command.name.clone(),
                    selector: expression.to_string(),
                    parameter: name.trim().to_string(),
                })?;
            return Ok(Self::PassThrough(parameter.name.clone()));
        }
        command.response_field(expression).map_or_else(
            || {
                Err(ConfigurationError::UnknownField {
                    command: command.name.clone(),
                    selector: expression.to_string(),
                    field: expression.to_string(),
                })
            },
            |field| Ok(Self::Field(field.to_string())),
        )
    }

    /// Resolves the active selector for one invocation.
    ///
    /// An explicit `select` expression wins; `pass_thru` is rewritten to the
    /// command's pass-through selector; otherwise the default selector applies.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigurationError`] when both overrides are given, when
    /// `pass_thru` is requested for a command without a pass-through
    /// parameter, or when the chosen expression is invalid.
    pub fn resolve(
        command: &CommandSpec,
        select: Option<&str>,
        pass_thru: bool,
    ) -> Result<Self, ConfigurationError> {
        match (select, pass_thru) {
            (Some(_), true) => Err(ConfigurationError::ConflictingSelectors {
                command: command.name.clone(),
            }),
            (Some(expression), false) => Self::parse(command, expression),
            (None, true) => {
                let parameter = command.pass_through.as_deref().ok_or_else(|| {
                    ConfigurationError::MissingPassThrough {
                        command: command.name.clone(),
                    }
                })?;
                Self::parse(command, &format!("{PASS_THROUGH_MARKER}{parameter}"))
            }
            (None, false) => Self::parse(command, &command.default_selector),
        }
    }

    /// Projects `response` into the pipeline output value.
    ///
    /// A declared field that is absent from the concrete response yields
    /// `null`, as does a pass-through parameter that was never bound.
    #[must_use]
    pub fn apply(&self, values: &BTreeMap<String, ParamValue>, response: &Response) -> Value {
        match self {
            Self::Whole => Value::Object(response.body.clone()),
            Self::PassThrough(name) => values.get(name).map_or(Value::Null, ParamValue::to_output),
            Self::Field(name) => response
                .body
                .get(name)
                .or_else(|| {
                    let key = normalize_key(name);
                    response
                        .body
                        .iter()
                        .find(|(field, _)| normalize_key(field) == key)
                        .map(|(_, value)| value)
                })
                .cloned()
                .unwrap_or(Value::Null),
        }
    }

    /// Renders the selector back into expression form.
    #[must_use]
    pub fn expression(&self) -> String {
        match self {
            Self::Whole => WILDCARD.to_string(),
            Self::PassThrough(name) => format!("{PASS_THROUGH_MARKER}{name}"),
            Self::Field(name) => name.clone(),
        }
    }
}

// ============================================================================
// SECTION: Tests
// ============================================================================

#[cfg(test)]
mod tests;
