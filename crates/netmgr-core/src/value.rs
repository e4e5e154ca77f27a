// crates/netmgr-core/src/value.rs
// ============================================================================
// Module: Parameter Values
// Description: Typed values bound to command parameters.
// Purpose: Carry resolved parameter values from binding to request construction.
// Dependencies: serde, serde_json
// ============================================================================

//! ## Overview
//! A [`ParamValue`] is the typed form of one bound parameter. Absence is
//! modelled by the parameter not appearing in the invocation context at all,
//! so `Null`, an empty `String`, and an empty `List` are all explicit values.

// ============================================================================
// SECTION: Imports
// ============================================================================

use serde::Serialize;
use serde_json::Map;
use serde_json::Value;

// ============================================================================
// SECTION: Types
// ============================================================================

/// Resource tag pair.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Serialize)]
pub struct Tag {
    /// Tag key.
    #[serde(rename = "Key")]
    pub key: String,
    /// Tag value.
    #[serde(rename = "Value")]
    pub value: String,
}

/// Typed value bound to a parameter.
#[derive(Debug, Clone, PartialEq)]
pub enum ParamValue {
    /// Explicit null.
    Null,
    /// String value (possibly empty).
    String(String),
    /// Integer value.
    Integer(i64),
    /// Boolean value.
    Boolean(bool),
    /// String list (possibly empty).
    List(Vec<String>),
    /// Tag list (possibly empty).
    Tags(Vec<Tag>),
    /// Parsed JSON document.
    Document(Value),
}

impl ParamValue {
    /// Renders the value as it appears in a JSON request body.
    ///
    /// Documents are sent as their compact JSON text, matching the service
    /// model which declares policy documents as strings.
    #[must_use]
    pub fn to_json(&self) -> Value {
        match self {
            Self::Null => Value::Null,
            Self::String(value) => Value::String(value.clone()),
            Self::Integer(value) => Value::from(*value),
            Self::Boolean(value) => Value::Bool(*value),
            Self::List(values) => Value::Array(values.iter().cloned().map(Value::String).collect()),
            Self::Tags(tags) => Value::Array(
                tags.iter()
                    .map(|tag| {
                        let mut entry = Map::new();
                        entry.insert("Key".to_string(), Value::String(tag.key.clone()));
                        entry.insert("Value".to_string(), Value::String(tag.value.clone()));
                        Value::Object(entry)
                    })
                    .collect(),
            ),
            Self::Document(document) => Value::String(document.to_string()),
        }
    }

    /// Renders the value as pipeline output for pass-through selection.
    #[must_use]
    pub fn to_output(&self) -> Value {
        match self {
            Self::Document(document) => document.clone(),
            other => other.to_json(),
        }
    }

    /// Renders the value as query string or path segment values.
    ///
    /// Lists expand to one value per element; null and tag lists have no
    /// query form.
    #[must_use]
    pub fn to_query_values(&self) -> Vec<String> {
        match self {
            Self::Null | Self::Tags(_) => Vec::new(),
            Self::String(value) => vec![value.clone()],
            Self::Integer(value) => vec![value.to_string()],
            Self::Boolean(value) => vec![value.to_string()],
            Self::List(values) => values.clone(),
            Self::Document(document) => vec![document.to_string()],
        }
    }

    /// Returns a short human-readable rendering used in confirmation prompts.
    #[must_use]
    pub fn display(&self) -> String {
        match self {
            Self::Null => "null".to_string(),
            Self::String(value) => value.clone(),
            Self::Integer(value) => value.to_string(),
            Self::Boolean(value) => value.to_string(),
            Self::List(values) => values.join(", "),
            Self::Tags(tags) => tags
                .iter()
                .map(|tag| format!("{}={}", tag.key, tag.value))
                .collect::<Vec<_>>()
                .join(", "),
            Self::Document(document) => document.to_string(),
        }
    }
}
