// crates/netmgr-core/src/spec.rs
// ============================================================================
// Module: Command Descriptors
// Description: Static command and parameter descriptors for API operations.
// Purpose: Express per-operation differences as data for the generic engine.
// Dependencies: serde
// ============================================================================

//! ## Overview
//! A [`CommandSpec`] describes one backend operation: its parameters, HTTP
//! binding, declared response fields, default output selector, and whether it
//! mutates remote state. Descriptors are built once at startup and are never
//! mutated afterwards.

// ============================================================================
// SECTION: Imports
// ============================================================================

use serde::Serialize;

use crate::naming::kebab_case;
use crate::naming::normalize_key;

// ============================================================================
// SECTION: Enumerations
// ============================================================================

/// Semantic type of a command parameter.
///
/// # Invariants
/// - `Enum` values are canonical spellings; input matching is case-insensitive.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SemanticType {
    /// Free-form string.
    String,
    /// Signed integer with optional inclusive bounds.
    Integer {
        /// Inclusive lower bound.
        min: Option<i64>,
        /// Inclusive upper bound.
        max: Option<i64>,
    },
    /// Boolean switch.
    Boolean,
    /// One value out of a closed set.
    Enum {
        /// Allowed canonical values.
        allowed: Vec<String>,
    },
    /// Repeated string values.
    StringList,
    /// Repeated `Key=Value` tag pairs.
    Tags,
    /// JSON document text, validated at bind time and sent as a string.
    Document,
}

impl SemanticType {
    /// Returns a stable label used in help text and error messages.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::String => "string",
            Self::Integer {
                ..
            } => "integer",
            Self::Boolean => "boolean",
            Self::Enum {
                ..
            } => "enum",
            Self::StringList => "string list",
            Self::Tags => "tag list",
            Self::Document => "json document",
        }
    }

    /// Returns true when the type accepts repeated CLI values.
    #[must_use]
    pub const fn is_repeated(&self) -> bool {
        matches!(self, Self::StringList | Self::Tags)
    }
}

/// Pipeline binding mode for a parameter.
///
/// # Invariants
/// - `ByValue` parameters also bind by property name when an object is piped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PipelineBinding {
    /// Not bindable from piped input.
    None,
    /// Binds a piped scalar value directly.
    ByValue,
    /// Binds a property of a piped object matching the name or an alias.
    ByPropertyName,
}

/// Confirmation impact classification for mutating operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ConfirmImpact {
    /// Low impact.
    Low,
    /// Medium impact.
    Medium,
    /// High impact.
    High,
}

impl ConfirmImpact {
    /// Returns the display label for the impact level.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Low => "Low",
            Self::Medium => "Medium",
            Self::High => "High",
        }
    }
}

/// HTTP method used by an operation binding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum HttpMethod {
    /// GET request.
    Get,
    /// POST request.
    Post,
    /// PUT request.
    Put,
    /// PATCH request.
    Patch,
    /// DELETE request.
    Delete,
}

impl HttpMethod {
    /// Returns the canonical method token.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Put => "PUT",
            Self::Patch => "PATCH",
            Self::Delete => "DELETE",
        }
    }
}

/// Wire location of a parameter within the transport request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "in", rename_all = "snake_case")]
pub enum ParameterLocation {
    /// URI template label (`{label}`).
    Path {
        /// Label name inside the URI template.
        label: String,
    },
    /// Query string key.
    Query {
        /// Query key.
        key: String,
    },
    /// JSON body member, addressed by a member path.
    Body {
        /// Member path from the body root (for example `["Location", "Address"]`).
        member: Vec<String>,
    },
}

// ============================================================================
// SECTION: Parameter Descriptor
// ============================================================================

/// Descriptor for one command parameter.
///
/// # Invariants
/// - `name` is unique within its command, including aliases (case-insensitive).
/// - `position`, when set, is unique within its command and positions are contiguous from zero.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ParameterSpec {
    /// Canonical parameter name (`PascalCase`).
    pub name: String,
    /// Short help text.
    pub description: String,
    /// Semantic type.
    #[serde(rename = "type")]
    pub semantic_type: SemanticType,
    /// Whether a value must be bound before request construction.
    pub required: bool,
    /// Whether an explicit null may be bound.
    pub allow_null: bool,
    /// Whether an explicit empty value may be bound.
    pub allow_empty: bool,
    /// Pipeline binding mode.
    pub pipeline: PipelineBinding,
    /// Zero-based positional index.
    pub position: Option<usize>,
    /// Alternate names accepted on the CLI and for pipeline property matching.
    pub aliases: Vec<String>,
    /// Wire location.
    pub location: ParameterLocation,
}

impl ParameterSpec {
    /// Creates an optional, non-pipeline parameter bound to `location`.
    #[must_use]
    pub fn new(name: &str, semantic_type: SemanticType, location: ParameterLocation) -> Self {
        Self {
            name: name.to_string(),
            description: String::new(),
            semantic_type,
            required: false,
            allow_null: false,
            allow_empty: false,
            pipeline: PipelineBinding::None,
            position: None,
            aliases: Vec::new(),
            location,
        }
    }

    /// Creates a string parameter bound to a URI label.
    #[must_use]
    pub fn path(name: &str, label: &str) -> Self {
        Self::new(
            name,
            SemanticType::String,
            ParameterLocation::Path {
                label: label.to_string(),
            },
        )
        .required()
    }

    /// Creates a parameter bound to a query key.
    #[must_use]
    pub fn query(name: &str, key: &str, semantic_type: SemanticType) -> Self {
        Self::new(
            name,
            semantic_type,
            ParameterLocation::Query {
                key: key.to_string(),
            },
        )
    }

    /// Creates a parameter bound to a body member path written as `A.B.C`.
    #[must_use]
    pub fn body(name: &str, member: &str, semantic_type: SemanticType) -> Self {
        Self::new(
            name,
            semantic_type,
            ParameterLocation::Body {
                member: member.split('.').map(str::to_string).collect(),
            },
        )
    }

    /// Marks the parameter as required.
    #[must_use]
    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    /// Allows an explicit null value.
    #[must_use]
    pub fn allow_null(mut self) -> Self {
        self.allow_null = true;
        self
    }

    /// Allows an explicit empty value.
    #[must_use]
    pub fn allow_empty(mut self) -> Self {
        self.allow_empty = true;
        self
    }

    /// Sets the pipeline binding mode.
    #[must_use]
    pub fn pipeline(mut self, pipeline: PipelineBinding) -> Self {
        self.pipeline = pipeline;
        self
    }

    /// Sets the zero-based positional index.
    #[must_use]
    pub fn position(mut self, position: usize) -> Self {
        self.position = Some(position);
        self
    }

    /// Adds an alternate name.
    #[must_use]
    pub fn alias(mut self, alias: &str) -> Self {
        self.aliases.push(alias.to_string());
        self
    }

    /// Sets the help text.
    #[must_use]
    pub fn describe(mut self, description: &str) -> Self {
        self.description = description.to_string();
        self
    }

    /// Returns the long CLI flag name (without dashes).
    #[must_use]
    pub fn flag(&self) -> String {
        kebab_case(&self.name)
    }

    /// Returns true when `name` matches the canonical name or an alias.
    #[must_use]
    pub fn matches(&self, name: &str) -> bool {
        let key = normalize_key(name);
        normalize_key(&self.name) == key
            || self.aliases.iter().any(|alias| normalize_key(alias) == key)
    }
}

// ============================================================================
// SECTION: Command Descriptor
// ============================================================================

/// HTTP binding of an operation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HttpBinding {
    /// HTTP method.
    pub method: HttpMethod,
    /// URI template with `{label}` placeholders.
    pub uri: String,
}

impl HttpBinding {
    /// Creates a new HTTP binding.
    #[must_use]
    pub fn new(method: HttpMethod, uri: &str) -> Self {
        Self {
            method,
            uri: uri.to_string(),
        }
    }

    /// Returns the labels referenced by the URI template, in order.
    #[must_use]
    pub fn labels(&self) -> Vec<&str> {
        let mut labels = Vec::new();
        let mut rest = self.uri.as_str();
        while let Some(start) = rest.find('{') {
            let after = &rest[start + 1 ..];
            let Some(end) = after.find('}') else {
                break;
            };
            labels.push(after[.. end].trim_end_matches('+'));
            rest = &after[end + 1 ..];
        }
        labels
    }
}

/// Static descriptor for one backend operation.
///
/// # Invariants
/// - Validated by [`crate::CommandRegistry::new`] before use.
/// - Never mutated after registry construction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CommandSpec {
    /// Operation name (`PascalCase`).
    pub name: String,
    /// Short description.
    pub description: String,
    /// HTTP binding.
    pub http: HttpBinding,
    /// Parameters in declaration order.
    pub parameters: Vec<ParameterSpec>,
    /// Top-level response fields declared by the service model.
    pub response_fields: Vec<String>,
    /// Default output selector expression.
    pub default_selector: String,
    /// Whether the operation mutates remote state and requires confirmation.
    pub mutation: bool,
    /// Confirmation impact classification.
    pub impact: ConfirmImpact,
    /// Parameters identifying the resources described in confirmation prompts.
    pub target_parameters: Vec<String>,
    /// Parameter echoed by the legacy `--pass-thru` switch.
    pub pass_through: Option<String>,
}

impl CommandSpec {
    /// Creates a read-only command with no parameters.
    #[must_use]
    pub fn new(name: &str, description: &str, http: HttpBinding) -> Self {
        Self {
            name: name.to_string(),
            description: description.to_string(),
            http,
            parameters: Vec::new(),
            response_fields: Vec::new(),
            default_selector: "*".to_string(),
            mutation: false,
            impact: ConfirmImpact::Low,
            target_parameters: Vec::new(),
            pass_through: None,
        }
    }

    /// Appends a parameter.
    #[must_use]
    pub fn param(mut self, parameter: ParameterSpec) -> Self {
        self.parameters.push(parameter);
        self
    }

    /// Declares the response fields and the default selector.
    #[must_use]
    pub fn returns(mut self, fields: &[&str], default_selector: &str) -> Self {
        self.response_fields = fields.iter().map(|field| (*field).to_string()).collect();
        self.default_selector = default_selector.to_string();
        self
    }

    /// Marks the command as mutating with the given impact and targets.
    #[must_use]
    pub fn mutating(mut self, impact: ConfirmImpact, targets: &[&str]) -> Self {
        self.mutation = true;
        self.impact = impact;
        self.target_parameters = targets.iter().map(|target| (*target).to_string()).collect();
        self
    }

    /// Declares the parameter echoed by `--pass-thru`.
    #[must_use]
    pub fn pass_through(mut self, parameter: &str) -> Self {
        self.pass_through = Some(parameter.to_string());
        self
    }

    /// Returns the CLI subcommand name.
    #[must_use]
    pub fn cli_name(&self) -> String {
        kebab_case(&self.name)
    }

    /// Looks up a parameter by canonical name or alias (case-insensitive).
    #[must_use]
    pub fn parameter(&self, name: &str) -> Option<&ParameterSpec> {
        self.parameters.iter().find(|parameter| parameter.matches(name))
    }

    /// Returns the positional parameters ordered by position.
    #[must_use]
    pub fn positional_parameters(&self) -> Vec<&ParameterSpec> {
        let mut positional: Vec<&ParameterSpec> =
            self.parameters.iter().filter(|parameter| parameter.position.is_some()).collect();
        positional.sort_by_key(|parameter| parameter.position);
        positional
    }

    /// Returns the canonical response field matching `name` (case-insensitive).
    #[must_use]
    pub fn response_field(&self, name: &str) -> Option<&str> {
        let key = normalize_key(name);
        self.response_fields
            .iter()
            .find(|field| normalize_key(field) == key)
            .map(String::as_str)
    }
}
