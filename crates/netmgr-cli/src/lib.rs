// crates/netmgr-cli/src/lib.rs
// ============================================================================
// Module: Netmgr CLI Library
// Description: Building blocks of the netmgr command-line front end.
// Purpose: Expose the dispatcher, surface, and output helpers to the binary.
// Dependencies: clap, netmgr-client, netmgr-config, netmgr-contract, netmgr-core
// ============================================================================

//! ## Overview
//! The library half of the CLI holds everything the binary wires together:
//! the clap surface generated from the command table, the generic
//! [`dispatch::Dispatcher`] and the batch runner around it, confirmation,
//! pipeline input, audit sinks, and output rendering. Keeping these in a
//! library lets unit tests drive a full invocation against a fake transport.

// ============================================================================
// SECTION: Modules
// ============================================================================

pub mod audit;
pub mod batch;
pub mod confirm;
pub mod dispatch;
pub mod i18n;
pub mod output;
pub mod pipeline;
pub mod surface;

#[cfg(test)]
mod test_support;
