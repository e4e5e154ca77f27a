// crates/netmgr-core/src/error.rs
// ============================================================================
// Module: Core Errors
// Description: Binding, selector configuration, and registry error types.
// Purpose: Report invocation failures detected before any network call.
// Dependencies: thiserror
// ============================================================================

//! ## Overview
//! [`BindingError`] and [`ConfigurationError`] are raised while building an
//! invocation context and always name the command they belong to.
//! [`RegistryError`] is raised when a command table violates the descriptor
//! rules at startup.

// ============================================================================
// SECTION: Imports
// ============================================================================

use thiserror::Error;

// ============================================================================
// SECTION: Binding Errors
// ============================================================================

/// Parameter binding failure.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BindingError {
    /// A required parameter remained unset after resolution.
    #[error("{command}: missing required parameter {parameter}")]
    MissingRequired {
        /// Command name.
        command: String,
        /// Parameter name.
        parameter: String,
    },
    /// A named argument does not match any parameter.
    #[error("{command}: unknown parameter {parameter}")]
    UnknownParameter {
        /// Command name.
        command: String,
        /// Supplied parameter name.
        parameter: String,
    },
    /// A parameter was named more than once.
    #[error("{command}: parameter {parameter} supplied more than once")]
    DuplicateParameter {
        /// Command name.
        command: String,
        /// Parameter name.
        parameter: String,
    },
    /// More positional arguments than positional parameters.
    #[error("{command}: unexpected positional argument {value:?}")]
    UnexpectedPositional {
        /// Command name.
        command: String,
        /// Offending value.
        value: String,
    },
    /// A value failed type or format validation.
    #[error("{command}: invalid value for {parameter}: {reason}")]
    InvalidValue {
        /// Command name.
        command: String,
        /// Parameter name.
        parameter: String,
        /// Validation failure detail.
        reason: String,
    },
    /// An empty value was supplied for a parameter that does not allow it.
    #[error("{command}: parameter {parameter} does not accept an empty value")]
    EmptyValue {
        /// Command name.
        command: String,
        /// Parameter name.
        parameter: String,
    },
    /// A null value was supplied for a parameter that does not allow it.
    #[error("{command}: parameter {parameter} does not accept null")]
    NullValue {
        /// Command name.
        command: String,
        /// Parameter name.
        parameter: String,
    },
    /// Several values were supplied for a single-valued parameter.
    #[error("{command}: parameter {parameter} accepts a single value")]
    TooManyValues {
        /// Command name.
        command: String,
        /// Parameter name.
        parameter: String,
    },
}

impl BindingError {
    /// Returns a stable kind label for structured error output.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::MissingRequired {
                ..
            } => "missing_required",
            Self::UnknownParameter {
                ..
            } => "unknown_parameter",
            Self::DuplicateParameter {
                ..
            } => "duplicate_parameter",
            Self::UnexpectedPositional {
                ..
            } => "unexpected_positional",
            Self::InvalidValue {
                ..
            } => "invalid_value",
            Self::EmptyValue {
                ..
            } => "empty_value",
            Self::NullValue {
                ..
            } => "null_value",
            Self::TooManyValues {
                ..
            } => "too_many_values",
        }
    }

    /// Returns the parameter named by the error, when there is one.
    #[must_use]
    pub fn parameter(&self) -> Option<&str> {
        match self {
            Self::MissingRequired {
                parameter, ..
            }
            | Self::UnknownParameter {
                parameter, ..
            }
            | Self::DuplicateParameter {
                parameter, ..
            }
            | Self::InvalidValue {
                parameter, ..
            }
            | Self::EmptyValue {
                parameter, ..
            }
            | Self::NullValue {
                parameter, ..
            }
            | Self::TooManyValues {
                parameter, ..
            } => Some(parameter),
            Self::UnexpectedPositional {
                ..
            } => None,
        }
    }

    /// Returns the command named by the error.
    #[must_use]
    pub fn command(&self) -> &str {
        match self {
            Self::MissingRequired {
                command, ..
            }
            | Self::UnknownParameter {
                command, ..
            }
            | Self::DuplicateParameter {
                command, ..
            }
            | Self::UnexpectedPositional {
                command, ..
            }
            | Self::InvalidValue {
                command, ..
            }
            | Self::EmptyValue {
                command, ..
            }
            | Self::NullValue {
                command, ..
            }
            | Self::TooManyValues {
                command, ..
            } => command,
        }
    }
}

// ============================================================================
// SECTION: Configuration Errors
// ============================================================================

/// Output selector configuration failure.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigurationError {
    /// Selector expression is empty.
    #[error("{command}: selector expression is empty")]
    EmptySelector {
        /// Command name.
        command: String,
    },
    /// Selector names a field the response does not declare.
    #[error("{command}: invalid selector {selector:?}: no response field named {field}")]
    UnknownField {
        /// Command name.
        command: String,
        /// Selector expression.
        selector: String,
        /// Field name.
        field: String,
    },
    /// Pass-through selector names a parameter the command does not declare.
    #[error("{command}: invalid selector {selector:?}: no parameter named {parameter}")]
    UnknownParameter {
        /// Command name.
        command: String,
        /// Selector expression.
        selector: String,
        /// Parameter name.
        parameter: String,
    },
    /// Both an explicit selector and the legacy pass-through switch were given.
    #[error("{command}: --select and --pass-thru cannot be combined")]
    ConflictingSelectors {
        /// Command name.
        command: String,
    },
    /// The legacy pass-through switch was given for a command without a pass-through parameter.
    #[error("{command}: --pass-thru is not supported by this command")]
    MissingPassThrough {
        /// Command name.
        command: String,
    },
}

impl ConfigurationError {
    /// Returns a stable kind label for structured error output.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::EmptySelector {
                ..
            } => "empty_selector",
            Self::UnknownField {
                ..
            } => "unknown_field",
            Self::UnknownParameter {
                ..
            } => "unknown_selector_parameter",
            Self::ConflictingSelectors {
                ..
            } => "conflicting_selectors",
            Self::MissingPassThrough {
                ..
            } => "missing_pass_through",
        }
    }

    /// Returns the command named by the error.
    #[must_use]
    pub fn command(&self) -> &str {
        match self {
            Self::EmptySelector {
                command,
            }
            | Self::UnknownField {
                command, ..
            }
            | Self::UnknownParameter {
                command, ..
            }
            | Self::ConflictingSelectors {
                command,
            }
            | Self::MissingPassThrough {
                command,
            } => command,
        }
    }
}

// ============================================================================
// SECTION: Registry Errors
// ============================================================================

/// Command table validation failure.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
    /// Two commands normalize to the same name.
    #[error("duplicate command name: {0}")]
    DuplicateCommand(String),
    /// A command descriptor violates a descriptor rule.
    #[error("invalid command {command}: {reason}")]
    InvalidCommand {
        /// Command name.
        command: String,
        /// Violated rule.
        reason: String,
    },
}

// ============================================================================
// SECTION: Resolution Errors
// ============================================================================

/// Failure while resolving an invocation context.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ResolutionError {
    /// Parameter binding failed.
    #[error(transparent)]
    Binding(#[from] BindingError),
    /// Output selector configuration failed.
    #[error(transparent)]
    Configuration(#[from] ConfigurationError),
}
