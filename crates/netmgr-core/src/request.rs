// crates/netmgr-core/src/request.rs
// ============================================================================
// Module: Request Binder
// Description: Maps a resolved invocation context onto a transport request.
// Purpose: Copy exactly the bound parameters into their wire locations.
// Dependencies: serde_json
// ============================================================================

//! ## Overview
//! [`bind_request`] walks the command's parameters in declaration order and
//! copies each bound value into its path label, query key, or body member.
//! Unset parameters never appear in the request, and a nested body object is
//! only created once one of its members is bound.
//!
//! Binding is deterministic: equal contexts produce structurally equal
//! requests.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::collections::BTreeMap;

use serde_json::Map;
use serde_json::Value;

use crate::binding::InvocationContext;
use crate::spec::HttpMethod;
use crate::spec::ParameterLocation;

// ============================================================================
// SECTION: Types
// ============================================================================

/// Transport-level request for one operation.
///
/// # Invariants
/// - Contains a member, label, or query key only for bound parameters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Request {
    /// Operation name.
    pub operation: String,
    /// HTTP method.
    pub method: HttpMethod,
    /// URI template with `{label}` placeholders.
    pub uri: String,
    /// Raw (unencoded) URI label values.
    pub labels: BTreeMap<String, String>,
    /// Query parameters; list values repeat the key.
    pub query: BTreeMap<String, Vec<String>>,
    /// JSON body members.
    pub body: Map<String, Value>,
}

impl Request {
    /// Returns the path segments with labels substituted by their raw values.
    ///
    /// Callers percent-encode each returned segment. Returns `None` when the
    /// template references a label that has no value.
    #[must_use]
    pub fn path_segments(&self) -> Option<Vec<String>> {
        self.uri
            .split('/')
            .filter(|segment| !segment.is_empty())
            .map(|segment| {
                segment.strip_prefix('{').and_then(|rest| rest.strip_suffix('}')).map_or_else(
                    || Some(segment.to_string()),
                    |label| self.labels.get(label.trim_end_matches('+')).cloned(),
                )
            })
            .collect()
    }

    /// Returns true when the request carries a JSON body.
    #[must_use]
    pub fn has_body(&self) -> bool {
        !self.body.is_empty()
            || matches!(self.method, HttpMethod::Post | HttpMethod::Put | HttpMethod::Patch)
    }
}

// ============================================================================
// SECTION: Binding
// ============================================================================

/// Builds the transport request for a resolved invocation.
#[must_use]
pub fn bind_request(context: &InvocationContext<'_>) -> Request {
    let command = context.command();
    let mut request = Request {
        operation: command.name.clone(),
        method: command.http.method,
        uri: command.http.uri.clone(),
        labels: BTreeMap::new(),
        query: BTreeMap::new(),
        body: Map::new(),
    };

    for parameter in &command.parameters {
        let Some(value) = context.value(&parameter.name) else {
            continue;
        };
        match &parameter.location {
            ParameterLocation::Path {
                label,
            } => {
                request.labels.insert(label.clone(), value.display());
            }
            ParameterLocation::Query {
                key,
            } => {
                let values = value.to_query_values();
                if !values.is_empty() {
                    request.query.insert(key.clone(), values);
                }
            }
            ParameterLocation::Body {
                member,
            } => insert_member(&mut request.body, member, value.to_json()),
        }
    }
    request
}

/// Inserts `value` at `path`, creating intermediate objects as needed.
fn insert_member(body: &mut Map<String, Value>, path: &[String], value: Value) {
    let Some((last, parents)) = path.split_last() else {
        return;
    };
    let mut cursor = body;
    for parent in parents {
        let entry = cursor.entry(parent.clone()).or_insert_with(|| Value::Object(Map::new()));
        if !entry.is_object() {
            *entry = Value::Object(Map::new());
        }
        let Value::Object(next) = entry else {
            return;
        };
        cursor = next;
    }
    cursor.insert(last.clone(), value);
}

// ============================================================================
// SECTION: Tests
// ============================================================================
