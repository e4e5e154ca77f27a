// crates/netmgr-config/src/lib.rs
// ============================================================================
// Module: Netmgr Config Library
// Description: Configuration model and loader for the netmgr CLI.
// Purpose: Provide fail-closed TOML configuration with explicit limits.
// Dependencies: serde, thiserror, toml, url
// ============================================================================

//! ## Overview
//! Netmgr Config loads `netmgr.toml` (or the file named by `--config` /
//! `NETMGR_CONFIG`), applies command-line overrides, and validates the result
//! before any client is built.

// ============================================================================
// SECTION: Modules
// ============================================================================

pub mod config;

// ============================================================================
// SECTION: Re-Exports
// ============================================================================

pub use config::AuditConfig;
pub use config::ClientConfig;
pub use config::ConfigError;
pub use config::ConfigOverrides;
pub use config::NetmgrConfig;
pub use config::OutputConfig;
pub use config::OutputFormat;
