// crates/netmgr-core/src/registry.rs
// ============================================================================
// Module: Command Registry
// Description: Validated, read-only table of command descriptors.
// Purpose: Reject malformed descriptors at startup and resolve command names.
// Dependencies: none
// ============================================================================

//! ## Overview
//! [`CommandRegistry::new`] checks every descriptor once, so the binder and
//! selector can rely on descriptor invariants without re-checking them per
//! invocation. Lookups accept the model name (`CreateGlobalNetwork`) or the
//! CLI spelling (`create-global-network`).

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::collections::BTreeMap;
use std::collections::BTreeSet;

use crate::error::RegistryError;
use crate::naming::normalize_key;
use crate::selector::OutputSelector;
use crate::spec::CommandSpec;
use crate::spec::ParameterLocation;
use crate::spec::SemanticType;

// ============================================================================
// SECTION: Registry
// ============================================================================

/// Validated command table.
///
/// # Invariants
/// - Command names are unique after normalization.
/// - Every descriptor satisfies the rules checked by [`validate_command`].
#[derive(Debug, Clone)]
pub struct CommandRegistry {
    /// Descriptors in table order.
    commands: Vec<CommandSpec>,
    /// Normalized name to index.
    index: BTreeMap<String, usize>,
}

impl CommandRegistry {
    /// Validates `commands` and builds the registry.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError`] when a name is duplicated or a descriptor is
    /// malformed.
    pub fn new(commands: Vec<CommandSpec>) -> Result<Self, RegistryError> {
        let mut index = BTreeMap::new();
        for (position, command) in commands.iter().enumerate() {
            validate_command(command)?;
            if index.insert(normalize_key(&command.name), position).is_some() {
                return Err(RegistryError::DuplicateCommand(command.name.clone()));
            }
        }
        Ok(Self {
            commands,
            index,
        })
    }

    /// Looks up a command by model name or CLI spelling.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&CommandSpec> {
        self.index.get(&normalize_key(name)).and_then(|position| self.commands.get(*position))
    }

    /// Returns all descriptors in table order.
    #[must_use]
    pub fn commands(&self) -> &[CommandSpec] {
        &self.commands
    }

    /// Returns the number of commands.
    #[must_use]
    pub fn len(&self) -> usize {
        self.commands.len()
    }

    /// Returns true when the registry holds no commands.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }
}

// ============================================================================
// SECTION: Validation
// ============================================================================

/// Checks one descriptor against the descriptor rules.
///
/// # Errors
///
/// Returns [`RegistryError::InvalidCommand`] naming the violated rule.
pub fn validate_command(command: &CommandSpec) -> Result<(), RegistryError> {
    let fail = |reason: String| RegistryError::InvalidCommand {
        command: command.name.clone(),
        reason,
    };

    if command.name.trim().is_empty() {
        return Err(fail("command name is empty".to_string()));
    }

    let mut names = BTreeSet::new();
    let mut flags = BTreeSet::new();
    let mut positions = Vec::new();
    for parameter in &command.parameters {
        for name in std::iter::once(&parameter.name).chain(parameter.aliases.iter()) {
            if !names.insert(normalize_key(name)) {
                return Err(fail(format!("parameter name {name} is not unique")));
            }
        }
        if !flags.insert(parameter.flag()) {
            return Err(fail(format!("flag for {} is not unique", parameter.name)));
        }
        if let Some(position) = parameter.position {
            positions.push(position);
        }
        match (&parameter.semantic_type, parameter.allow_empty) {
            (
                SemanticType::String | SemanticType::StringList | SemanticType::Tags,
                _,
            )
            | (_, false) => {}
            _ => {
                return Err(fail(format!(
                    "{} cannot allow an empty {}",
                    parameter.name,
                    parameter.semantic_type.label()
                )));
            }
        }
        if let SemanticType::Enum {
            allowed,
        } = &parameter.semantic_type
            && allowed.is_empty()
        {
            return Err(fail(format!("{} has no allowed values", parameter.name)));
        }
        match &parameter.location {
            ParameterLocation::Path {
                label,
            } => {
                if !command.http.labels().contains(&label.as_str()) {
                    return Err(fail(format!("label {label} is not in the uri")));
                }
                if !parameter.required || parameter.allow_empty || parameter.allow_null {
                    return Err(fail(format!(
                        "path parameter {} must be required, non-empty, and non-null",
                        parameter.name
                    )));
                }
                if parameter.semantic_type != SemanticType::String {
                    return Err(fail(format!("path parameter {} must be a string", parameter.name)));
                }
            }
            ParameterLocation::Query {
                key,
            } => {
                if key.is_empty() {
                    return Err(fail(format!("query key for {} is empty", parameter.name)));
                }
                if matches!(parameter.semantic_type, SemanticType::Tags | SemanticType::Document)
                    || parameter.allow_null
                {
                    return Err(fail(format!(
                        "query parameter {} must be a non-null scalar or list",
                        parameter.name
                    )));
                }
            }
            ParameterLocation::Body {
                member,
            } => {
                if member.is_empty() || member.iter().any(String::is_empty) {
                    return Err(fail(format!("body member for {} is empty", parameter.name)));
                }
            }
        }
    }

    for label in command.http.labels() {
        let bound = command.parameters.iter().any(|parameter| match &parameter.location {
            ParameterLocation::Path {
                label: bound,
            } => bound == label,
            _ => false,
        });
        if !bound {
            return Err(fail(format!("uri label {label} has no parameter")));
        }
    }

    positions.sort_unstable();
    if positions.iter().enumerate().any(|(expected, actual)| expected != *actual) {
        return Err(fail("positions must be unique and contiguous from zero".to_string()));
    }

    OutputSelector::parse(command, &command.default_selector)
        .map_err(|err| fail(format!("default selector: {err}")))?;

    for target in &command.target_parameters {
        if command.parameter(target).is_none_or(|parameter| &parameter.name != target) {
            return Err(fail(format!("target parameter {target} is not declared")));
        }
    }
    if command.mutation && command.target_parameters.is_empty() {
        return Err(fail("mutating command declares no target parameters".to_string()));
    }
    if let Some(pass_through) = &command.pass_through
        && command.parameter(pass_through).is_none()
    {
        return Err(fail(format!("pass-through parameter {pass_through} is not declared")));
    }
    Ok(())
}

// ============================================================================
// SECTION: Tests
// ============================================================================

#[cfg(test)]
mod tests;
