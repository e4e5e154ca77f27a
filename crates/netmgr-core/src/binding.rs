// crates/netmgr-core/src/binding.rs
// ============================================================================
// Module: Parameter Binding
// Description: Resolves raw CLI arguments and piped input into typed values.
// Purpose: Build the immutable invocation context consumed by the dispatcher.
// Dependencies: serde_json, tracing
// ============================================================================

//! ## Overview
//! [`resolve`] turns a [`RawInvocation`] into an [`InvocationContext`].
//! Each parameter is taken from, in order of precedence:
//! 1. an explicit named argument,
//! 2. a positional argument at the parameter's position,
//! 3. the piped object (by value for scalars, by property name or alias for
//!    objects),
//!
//! and is otherwise left unset. Resolution is pure: it performs no I/O and
//! fails before any network call.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::collections::BTreeMap;

use serde_json::Value;

use crate::error::BindingError;
use crate::error::ResolutionError;
use crate::naming::normalize_key;
use crate::selector::OutputSelector;
use crate::spec::CommandSpec;
use crate::spec::ParameterLocation;
use crate::spec::ParameterSpec;
use crate::spec::PipelineBinding;
use crate::spec::SemanticType;
use crate::value::ParamValue;
use crate::value::Tag;

// ============================================================================
// SECTION: Raw Input
// ============================================================================

/// Named argument as received from the command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NamedArgument {
    /// Name as typed (canonical name, alias, or flag spelling).
    pub name: String,
    /// Raw values in the order given.
    pub values: Vec<String>,
}

impl NamedArgument {
    /// Creates a named argument with a single value.
    #[must_use]
    pub fn single(name: &str, value: &str) -> Self {
        Self {
            name: name.to_string(),
            values: vec![value.to_string()],
        }
    }

    /// Creates a named argument with several values.
    #[must_use]
    pub fn many(name: &str, values: &[&str]) -> Self {
        Self {
            name: name.to_string(),
            values: values.iter().map(|value| (*value).to_string()).collect(),
        }
    }
}

/// Unresolved arguments for one invocation.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawInvocation {
    /// Named arguments.
    pub named: Vec<NamedArgument>,
    /// Positional arguments in order.
    pub positional: Vec<String>,
    /// Piped-in object, when the invocation is fed from a pipeline.
    pub piped: Option<Value>,
    /// Explicit selector expression.
    pub select: Option<String>,
    /// Legacy pass-through switch.
    pub pass_thru: bool,
}

impl RawInvocation {
    /// Adds a single-valued named argument.
    #[must_use]
    pub fn with(mut self, name: &str, value: &str) -> Self {
        self.named.push(NamedArgument::single(name, value));
        self
    }

    /// Adds a multi-valued named argument.
    #[must_use]
    pub fn with_many(mut self, name: &str, values: &[&str]) -> Self {
        self.named.push(NamedArgument::many(name, values));
        self
    }

    /// Adds a positional argument.
    #[must_use]
    pub fn positional(mut self, value: &str) -> Self {
        self.positional.push(value.to_string());
        self
    }

    /// Sets the piped object.
    #[must_use]
    pub fn piped(mut self, value: Value) -> Self {
        self.piped = Some(value);
        self
    }

    /// Sets the selector expression.
    #[must_use]
    pub fn select(mut self, expression: &str) -> Self {
        self.select = Some(expression.to_string());
        self
    }
}

// ============================================================================
// SECTION: Invocation Context
// ============================================================================

/// Resolved, validated inputs for one invocation.
///
/// # Invariants
/// - Every required parameter of `command` has a value.
/// - Keys of `values` are canonical parameter names.
/// - Exactly one selector is active.
#[derive(Debug, Clone, PartialEq)]
pub struct InvocationContext<'a> {
    /// Command descriptor.
    command: &'a CommandSpec,
    /// Bound values keyed by canonical parameter name.
    values: BTreeMap<String, ParamValue>,
    /// Active output selector.
    selector: OutputSelector,
}

impl<'a> InvocationContext<'a> {
    /// Returns the command descriptor.
    #[must_use]
    pub const fn command(&self) -> &'a CommandSpec {
        self.command
    }

    /// Returns the bound values keyed by canonical parameter name.
    #[must_use]
    pub const fn values(&self) -> &BTreeMap<String, ParamValue> {
        &self.values
    }

    /// Returns the bound value of a parameter.
    #[must_use]
    pub fn value(&self, name: &str) -> Option<&ParamValue> {
        self.values.get(name)
    }

    /// Returns the active output selector.
    #[must_use]
    pub const fn selector(&self) -> &OutputSelector {
        &self.selector
    }

    /// Describes the confirmation targets as `Name=value` pairs.
    #[must_use]
    pub fn targets(&self) -> Vec<(String, String)> {
        self.command
            .target_parameters
            .iter()
            .filter_map(|name| {
                self.values.get(name).map(|value| (name.clone(), value.display()))
            })
            .collect()
    }
}

// ============================================================================
// SECTION: Resolution
// ============================================================================

/// Resolves `raw` against `command` into an invocation context.
///
/// Binding errors are reported before selector errors.
///
/// # Errors
///
/// Returns [`ResolutionError::Binding`] when an argument is unknown, repeated,
/// invalid, or a required parameter remains unset, and
/// [`ResolutionError::Configuration`] when the selector is invalid.
pub fn resolve<'a>(
    command: &'a CommandSpec,
    raw: &RawInvocation,
) -> Result<InvocationContext<'a>, ResolutionError> {
    let mut values: BTreeMap<String, ParamValue> = BTreeMap::new();

    for argument in &raw.named {
        let parameter =
            command.parameter(&argument.name).ok_or_else(|| BindingError::UnknownParameter {
                command: command.name.clone(),
                parameter: argument.name.clone(),
            })?;
        if values.contains_key(&parameter.name) {
            return Err(BindingError::DuplicateParameter {
                command: command.name.clone(),
                parameter: parameter.name.clone(),
            }
            .into());
        }
        let value = convert_cli(command, parameter, &argument.values)?;
        values.insert(parameter.name.clone(), value);
    }

    let positional = command.positional_parameters();
    for (index, raw_value) in raw.positional.iter().enumerate() {
        let Some(parameter) = positional.get(index) else {
            return Err(BindingError::UnexpectedPositional {
                command: command.name.clone(),
                value: raw_value.clone(),
            }
            .into());
        };
        if values.contains_key(&parameter.name) {
            tracing::debug!(
                command = %command.name,
                parameter = %parameter.name,
                "positional argument ignored; parameter bound by name"
            );
            continue;
        }
        let value = convert_cli(command, parameter, std::slice::from_ref(raw_value))?;
        values.insert(parameter.name.clone(), value);
    }

    if let Some(piped) = &raw.piped {
        bind_piped(command, piped, &mut values)?;
    }

    if let Some(missing) = command
        .parameters
        .iter()
        .find(|parameter| parameter.required && !values.contains_key(&parameter.name))
    {
        return Err(BindingError::MissingRequired {
            command: command.name.clone(),
            parameter: missing.name.clone(),
        }
        .into());
    }

    let selector = OutputSelector::resolve(command, raw.select.as_deref(), raw.pass_thru)?;

    Ok(InvocationContext {
        command,
        values,
        selector,
    })
}

/// Fills unset pipeline-bindable parameters from a piped value.
fn bind_piped(
    command: &CommandSpec,
    piped: &Value,
    values: &mut BTreeMap<String, ParamValue>,
) -> Result<(), BindingError> {
    if let Value::Object(object) = piped {
        for parameter in &command.parameters {
            if parameter.pipeline == PipelineBinding::None || values.contains_key(&parameter.name)
            {
                continue;
            }
            let property = object.iter().find(|(key, _)| parameter.matches(key));
            if let Some((_, value)) = property
                && let Some(bound) = convert_json(command, parameter, value)?
            {
                values.insert(parameter.name.clone(), bound);
            }
        }
        return Ok(());
    }

    let target = command.parameters.iter().find(|parameter| {
        parameter.pipeline == PipelineBinding::ByValue && !values.contains_key(&parameter.name)
    });
    match target {
        Some(parameter) => {
            if let Some(bound) = convert_json(command, parameter, piped)? {
                values.insert(parameter.name.clone(), bound);
            }
        }
        None => {
            tracing::debug!(command = %command.name, "piped scalar has no by-value parameter");
        }
    }
    Ok(())
}

// ============================================================================
// SECTION: Conversion
// ============================================================================

/// Converts raw CLI strings into a typed value for `parameter`.
///
/// A single empty string expresses an explicit empty value; for list types it
/// binds an empty list.
///
/// # Errors
///
/// Returns [`BindingError`] when the values violate the parameter's type,
/// arity, or emptiness rules.
pub fn convert_cli(
    command: &CommandSpec,
    parameter: &ParameterSpec,
    raw: &[String],
) -> Result<ParamValue, BindingError> {
    let explicit_empty = raw.is_empty() || (raw.len() == 1 && raw[0].is_empty());
    if parameter.semantic_type.is_repeated() {
        if explicit_empty {
            return empty_value(command, parameter);
        }
        if raw.iter().any(String::is_empty) {
            return Err(empty_error(command, parameter));
        }
        return match parameter.semantic_type {
            SemanticType::Tags => raw
                .iter()
                .map(|entry| parse_tag(command, parameter, entry))
                .collect::<Result<Vec<_>, _>>()
                .map(ParamValue::Tags),
            _ => Ok(ParamValue::List(raw.to_vec())),
        };
    }

    if raw.len() > 1 {
        return Err(BindingError::TooManyValues {
            command: command.name.clone(),
            parameter: parameter.name.clone(),
        });
    }
    if explicit_empty {
        return empty_value(command, parameter);
    }
    convert_scalar(command, parameter, &raw[0])
}

/// Converts a piped JSON value into a typed value for `parameter`.
///
/// Returns `Ok(None)` when the value should be ignored (a `null` for a
/// parameter that does not accept null).
///
/// # Errors
///
/// Returns [`BindingError`] when the value cannot represent the parameter's
/// semantic type.
pub fn convert_json(
    command: &CommandSpec,
    parameter: &ParameterSpec,
    value: &Value,
) -> Result<Option<ParamValue>, BindingError> {
    match (value, &parameter.semantic_type) {
        (Value::Null, _) => Ok(parameter.allow_null.then_some(ParamValue::Null)),
        (Value::String(text), SemanticType::Document) => {
            convert_scalar(command, parameter, text).map(Some)
        }
        (other, SemanticType::Document) => Ok(Some(ParamValue::Document(other.clone()))),
        (Value::Array(items), SemanticType::StringList) => {
            if items.is_empty() {
                return empty_value(command, parameter).map(Some);
            }
            items
                .iter()
                .map(|item| {
                    scalar_text(item)
                        .ok_or_else(|| invalid(command, parameter, "expected a list of strings"))
                })
                .collect::<Result<Vec<_>, _>>()
                .map(|list| Some(ParamValue::List(list)))
        }
        (Value::Array(items), SemanticType::Tags) => {
            if items.is_empty() {
                return empty_value(command, parameter).map(Some);
            }
            items
                .iter()
                .map(|item| json_tag(command, parameter, item))
                .collect::<Result<Vec<_>, _>>()
                .map(|tags| Some(ParamValue::Tags(tags)))
        }
        (Value::Object(map), SemanticType::Tags) => {
            if map.is_empty() {
                return empty_value(command, parameter).map(Some);
            }
            map.iter()
                .map(|(key, value)| {
                    scalar_text(value)
                        .map(|value| Tag {
                            key: key.clone(),
                            value,
                        })
                        .ok_or_else(|| invalid(command, parameter, "tag values must be strings"))
                })
                .collect::<Result<Vec<_>, _>>()
                .map(|tags| Some(ParamValue::Tags(tags)))
        }
        (Value::Number(number), SemanticType::Integer {
            ..
        }) => {
            let parsed = number
                .as_i64()
                .ok_or_else(|| invalid(command, parameter, "expected an integer"))?;
            check_range(command, parameter, parsed).map(Some)
        }
        (Value::Bool(flag), SemanticType::Boolean) => Ok(Some(ParamValue::Boolean(*flag))),
        (Value::Array(_) | Value::Object(_), _) => Err(invalid(
            command,
            parameter,
            &format!("expected a {}", parameter.semantic_type.label()),
        )),
        (scalar, _) => {
            let text = scalar_text(scalar).unwrap_or_default();
            convert_cli(command, parameter, &[text]).map(Some)
        }
    }
}

/// Converts one non-empty CLI string into a scalar value.
fn convert_scalar(
    command: &CommandSpec,
    parameter: &ParameterSpec,
    raw: &str,
) -> Result<ParamValue, BindingError> {
    match &parameter.semantic_type {
        SemanticType::String if is_dot_segment(parameter, raw) => Err(invalid(
            command,
            parameter,
            &format!("{raw:?} cannot be used as a path segment"),
        )),
        SemanticType::String => Ok(ParamValue::String(raw.to_string())),
        SemanticType::Integer {
            ..
        } => {
            let parsed = raw
                .trim()
                .parse::<i64>()
                .map_err(|_| invalid(command, parameter, &format!("{raw:?} is not an integer")))?;
            check_range(command, parameter, parsed)
        }
        SemanticType::Boolean => match raw.trim().to_ascii_lowercase().as_str() {
            "true" | "yes" | "1" => Ok(ParamValue::Boolean(true)),
            "false" | "no" | "0" => Ok(ParamValue::Boolean(false)),
            _ => Err(invalid(command, parameter, &format!("{raw:?} is not a boolean"))),
        },
        SemanticType::Enum {
            allowed,
        } => allowed
            .iter()
            .find(|candidate| candidate.eq_ignore_ascii_case(raw.trim()))
            .map(|candidate| ParamValue::String(candidate.clone()))
            .ok_or_else(|| {
                invalid(
                    command,
                    parameter,
                    &format!("{raw:?} is not one of {}", allowed.join(", ")),
                )
            }),
        SemanticType::Document => serde_json::from_str::<Value>(raw)
            .map(ParamValue::Document)
            .map_err(|err| invalid(command, parameter, &format!("invalid json document: {err}"))),
        SemanticType::StringList => Ok(ParamValue::List(vec![raw.to_string()])),
        SemanticType::Tags => {
            parse_tag(command, parameter, raw).map(|tag| ParamValue::Tags(vec![tag]))
        }
    }
}

/// Returns true when `raw` would be read as `.` or `..` in a URI path.
fn is_dot_segment(parameter: &ParameterSpec, raw: &str) -> bool {
    matches!(parameter.location, ParameterLocation::Path { .. }) && matches!(raw, "." | "..")
}

/// Checks an integer against the parameter's inclusive bounds.
fn check_range(
    command: &CommandSpec,
    parameter: &ParameterSpec,
    value: i64,
) -> Result<ParamValue, BindingError> {
    if let SemanticType::Integer {
        min,
        max,
    } = &parameter.semantic_type
    {
        if min.is_some_and(|min| value < min) || max.is_some_and(|max| value > max) {
            let lower = min.map_or_else(|| "-inf".to_string(), |min| min.to_string());
            let upper = max.map_or_else(|| "+inf".to_string(), |max| max.to_string());
            return Err(invalid(
                command,
                parameter,
                &format!("{value} is outside the range {lower}..={upper}"),
            ));
        }
    }
    Ok(ParamValue::Integer(value))
}

/// Parses a `Key=Value` tag; the value may be empty, the key may not.
fn parse_tag(
    command: &CommandSpec,
    parameter: &ParameterSpec,
    raw: &str,
) -> Result<Tag, BindingError> {
    match raw.split_once('=') {
        Some((key, value)) if !key.trim().is_empty() => Ok(Tag {
            key: key.trim().to_string(),
            value: value.to_string(),
        }),
        _ => Err(invalid(command, parameter, &format!("{raw:?} is not a Key=Value tag"))),
    }
}

/// Converts a piped tag entry, either `{"Key": .., "Value": ..}` or `"Key=Value"`.
fn json_tag(
    command: &CommandSpec,
    parameter: &ParameterSpec,
    item: &Value,
) -> Result<Tag, BindingError> {
    match item {
        Value::String(text) => parse_tag(command, parameter, text),
        Value::Object(map) => {
            let field = |name: &str| {
                map.iter()
                    .find(|(key, _)| normalize_key(key) == name)
                    .and_then(|(_, value)| scalar_text(value))
            };
            match (field("key"), field("value")) {
                (Some(key), value) if !key.is_empty() => Ok(Tag {
                    key,
                    value: value.unwrap_or_default(),
                }),
                _ => Err(invalid(command, parameter, "tag objects need a non-empty Key")),
            }
        }
        _ => Err(invalid(command, parameter, "expected tag objects or Key=Value strings")),
    }
}

/// Renders a scalar JSON value as text.
fn scalar_text(value: &Value) -> Option<String> {
    match value {
        Value::String(text) => Some(text.clone()),
        Value::Number(number) => Some(number.to_string()),
        Value::Bool(flag) => Some(flag.to_string()),
        _ => None,
    }
}

/// Produces the explicit empty value for `parameter`, when allowed.
fn empty_value(
    command: &CommandSpec,
    parameter: &ParameterSpec,
) -> Result<ParamValue, BindingError> {
    if !parameter.allow_empty {
        return Err(empty_error(command, parameter));
    }
    match parameter.semantic_type {
        SemanticType::StringList => Ok(ParamValue::List(Vec::new())),
        SemanticType::Tags => Ok(ParamValue::Tags(Vec::new())),
        SemanticType::String => Ok(ParamValue::String(String::new())),
        _ => Err(invalid(command, parameter, "empty value")),
    }
}

/// Builds an empty-value error.
fn empty_error(command: &CommandSpec, parameter: &ParameterSpec) -> BindingError {
    BindingError::EmptyValue {
        command: command.name.clone(),
        parameter: parameter.name.clone(),
    }
}

/// Builds an invalid-value error.
fn invalid(command: &CommandSpec, parameter: &ParameterSpec, reason: &str) -> BindingError {
    BindingError::InvalidValue {
        command: command.name.clone(),
        parameter: parameter.name.clone(),
        reason: reason.to_string(),
    }
}

// ============================================================================
// SECTION: Tests
// ============================================================================
