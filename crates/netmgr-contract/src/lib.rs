// crates/netmgr-contract/src/lib.rs
// ============================================================================
// Module: Netmgr Contract Library
// Description: Network Manager command table and catalog rendering.
// Purpose: Provide the process-wide, read-only command registry.
// Dependencies: netmgr-core, serde
// ============================================================================

//! ## Overview
//! The contract crate owns the static operation table consumed by the CLI.
//! [`registry`] validates the table once per process and hands out a shared
//! reference; [`catalog`] renders the compact command listing.
//! Invariants:
//! - The registry is built at most once and never mutated.
//! - Catalog order follows the table order.

// ============================================================================
// SECTION: Modules
// ============================================================================

pub mod catalog;
pub mod operations;
pub mod params;

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::sync::OnceLock;

use netmgr_core::CommandRegistry;
use netmgr_core::RegistryError;

// ============================================================================
// SECTION: Re-Exports
// ============================================================================

pub use catalog::CommandSummary;
pub use catalog::catalog;
pub use operations::command_specs;

// ============================================================================
// SECTION: Registry
// ============================================================================

/// Process-wide validated registry.
static REGISTRY: OnceLock<Result<CommandRegistry, RegistryError>> = OnceLock::new();

/// Returns the validated Network Manager command registry.
///
/// # Errors
///
/// Returns [`RegistryError`] when the built-in table violates a descriptor
/// rule.
pub fn registry() -> Result<&'static CommandRegistry, RegistryError> {
    REGISTRY.get_or_init(|| CommandRegistry::new(command_specs())).as_ref().map_err(Clone::clone)
}
