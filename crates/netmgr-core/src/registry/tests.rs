// crates/netmgr-core/src/registry/tests.rs
// ============================================================================
// Module: Command Registry Unit Tests
// Description: Descriptor validation and name lookup.
// Purpose: Ensure malformed command tables are rejected at startup.
// Dependencies: netmgr-core
// ============================================================================

#![allow(
    clippy::panic,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::missing_docs_in_private_items,
    reason = "Test-only assertions use panic-based helpers for clarity."
)]

use super::CommandRegistry;
use super::validate_command;
use crate::error::RegistryError;
use crate::spec::CommandSpec;
use crate::spec::HttpBinding;
use crate::spec::HttpMethod;
use crate::spec::ParameterSpec;
use crate::spec::SemanticType;
use crate::test_support::create_site;
use crate::test_support::get_sites;
use crate::test_support::put_policy;

fn reason(command: &CommandSpec) -> String {
    match validate_command(command) {
        Err(RegistryError::InvalidCommand {
            reason, ..
        }) => reason,
        other => panic!("expected invalid command, got {other:?}"),
    }
}

#[test]
fn lookup_accepts_model_and_cli_spellings() {
    let registry = CommandRegistry::new(vec![create_site(), get_sites(), put_policy()]).unwrap();
    assert_eq!(registry.len(), 3);
    assert_eq!(registry.get("CreateSite").map(|c| c.name.as_str()), Some("CreateSite"));
    assert_eq!(registry.get("create-site").map(|c| c.name.as_str()), Some("CreateSite"));
    assert!(registry.get("delete-site").is_none());
}

#[test]
fn duplicate_command_names_are_rejected() {
    let err = CommandRegistry::new(vec![create_site(), create_site()]).unwrap_err();
    assert_eq!(err, RegistryError::DuplicateCommand("CreateSite".to_string()));
}

#[test]
fn uri_label_without_parameter_is_rejected() {
    let command = CommandSpec::new(
        "GetThing",
        "",
        HttpBinding::new(HttpMethod::Get, "/things/{thingId}"),
    );
    assert!(reason(&command).contains("thingId"));
}

#[test]
fn optional_path_parameter_is_rejected() {
    let mut command = get_sites();
    command.parameters[0].required = false;
    assert!(reason(&command).contains("path parameter"));
}

#[test]
fn duplicate_alias_is_rejected() {
    let command = get_sites().param(
        ParameterSpec::query("Other", "other", SemanticType::String).alias("siteid"),
    );
    assert!(reason(&command).contains("not unique"));
}

#[test]
fn non_contiguous_positions_are_rejected() {
    let command = get_sites().param(
        ParameterSpec::query("Other", "other", SemanticType::String).position(2),
    );
    assert!(reason(&command).contains("contiguous"));
}

#[test]
fn invalid_default_selector_is_rejected() {
    let command = get_sites().returns(&["Sites"], "Site");
    assert!(reason(&command).contains("default selector"));
}

#[test]
fn mutating_command_needs_declared_targets() {
    let mut command = create_site();
    command.target_parameters = vec!["Nope".to_string()];
    assert!(reason(&command).contains("Nope"));
    command.target_parameters.clear();
    assert!(reason(&command).contains("no target"));
}

#[test]
fn allow_empty_is_limited_to_text_and_lists() {
    let command = get_sites().param(
        ParameterSpec::query("Count", "count", SemanticType::Integer {
            min: None,
            max: None,
        })
        .allow_empty(),
    );
    assert!(reason(&command).contains("empty"));
}

#[test]
fn tag_lists_cannot_bind_to_query() {
    let command =
        get_sites().param(ParameterSpec::query("Tag", "tags", SemanticType::Tags));
    assert!(reason(&command).contains("query parameter"));
}
