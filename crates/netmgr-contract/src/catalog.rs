// crates/netmgr-contract/src/catalog.rs
// ============================================================================
// Module: Command Catalog
// Description: Compact listing of the command table.
// Purpose: Back the `list-commands` meta command.
// Dependencies: netmgr-core, serde
// ============================================================================

// ============================================================================
// SECTION: Imports
// ============================================================================

use netmgr_core::CommandRegistry;
use netmgr_core::ConfirmImpact;
use serde::Serialize;

// ============================================================================
// SECTION: Types
// ============================================================================

/// One catalog row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CommandSummary {
    /// CLI subcommand name.
    pub command: String,
    /// Operation name.
    pub operation: String,
    /// Short description.
    pub description: String,
    /// Whether the command asks for confirmation.
    pub mutation: bool,
    /// Confirmation impact, for mutating commands.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub impact: Option<ConfirmImpact>,
    /// Default selector expression.
    pub default_selector: String,
}

// ============================================================================
// SECTION: Rendering
// ============================================================================

/// Summarizes every command in table order.
#[must_use]
pub fn catalog(registry: &CommandRegistry) -> Vec<CommandSummary> {
    registry
        .commands()
        .iter()
        .map(|command| CommandSummary {
            command: command.cli_name(),
            operation: command.name.clone(),
            description: command.description.clone(),
            mutation: command.mutation,
            impact: command.mutation.then_some(command.impact),
            default_selector: command.default_selector.clone(),
        })
        .collect()
}
