// crates/netmgr-core/src/selector/tests.rs
// ============================================================================
// Module: Output Selector Unit Tests
// Description: Parsing, resolution, and projection of selector expressions.
// Purpose: Ensure selectors are total over valid forms and fail closed otherwise.
// Dependencies: netmgr-core, serde_json
// ============================================================================

#![allow(
    clippy::panic,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::missing_docs_in_private_items,
    reason = "Test-only assertions use panic-based helpers for clarity."
)]

use std::collections::BTreeMap;

use serde_json::Value;
use serde_json::json;

use super::OutputSelector;
use crate::error::ConfigurationError;
use crate::response::Response;
use crate::test_support::create_site;
use crate::test_support::get_sites;
use crate::value::ParamValue;

fn response(body: &Value) -> Response {
    Response::new("CreateSite", body.as_object().cloned().unwrap_or_default())
}

#[test]
fn wildcard_returns_whole_response() {
    let command = create_site();
    let selector = OutputSelector::parse(&command, "*").unwrap();
    let body = json!({"Site": {"SiteId": "site-1"}, "Extra": 1});
    assert_eq!(selector.apply(&BTreeMap::new(), &response(&body)), body);
}

#[test]
fn field_selector_returns_field_case_insensitively() {
    let command = create_site();
    let selector = OutputSelector::parse(&command, "site").unwrap();
    assert_eq!(selector, OutputSelector::Field("Site".to_string()));
    let body = json!({"Site": {"SiteId": "site-1"}});
    assert_eq!(selector.apply(&BTreeMap::new(), &response(&body)), json!({"SiteId": "site-1"}));
}

#[test]
fn declared_field_absent_from_response_is_null() {
    let command = get_sites();
    let selector = OutputSelector::parse(&command, "NextToken").unwrap();
    let body = json!({"Sites": []});
    assert_eq!(selector.apply(&BTreeMap::new(), &response(&body)), Value::Null);
}

#[test]
fn pass_through_returns_bound_parameter() {
    let command = create_site();
    let selector = OutputSelector::parse(&command, "^globalNetworkId").unwrap();
    assert_eq!(selector, OutputSelector::PassThrough("GlobalNetworkId".to_string()));
    let mut values = BTreeMap::new();
    values.insert("GlobalNetworkId".to_string(), ParamValue::String("gn-1".to_string()));
    assert_eq!(selector.apply(&values, &response(&json!({}))), json!("gn-1"));
}

#[test]
fn pass_through_of_unbound_parameter_is_null() {
    let command = create_site();
    let selector = OutputSelector::parse(&command, "^Description").unwrap();
    assert_eq!(selector.apply(&BTreeMap::new(), &response(&json!({}))), Value::Null);
}

#[test]
fn invalid_expressions_fail_with_configuration_error() {
    let command = create_site();
    assert!(matches!(
        OutputSelector::parse(&command, "Sites"),
        Err(ConfigurationError::UnknownField { field, .. }) if field == "Sites"
    ));
    assert!(matches!(
        OutputSelector::parse(&command, "^Nope"),
        Err(ConfigurationError::UnknownParameter { parameter, .. }) if parameter == "Nope"
    ));
    assert!(matches!(
        OutputSelector::parse(&command, "  "),
        Err(ConfigurationError::EmptySelector { .. })
    ));
}

#[test]
fn resolve_prefers_explicit_then_pass_thru_then_default() {
    let command = create_site();
    assert_eq!(
        OutputSelector::resolve(&command, Some("*"), false).unwrap(),
        OutputSelector::Whole
    );
    assert_eq!(
        OutputSelector::resolve(&command, None, true).unwrap(),
        OutputSelector::PassThrough("GlobalNetworkId".to_string())
    );
    assert_eq!(
        OutputSelector::resolve(&command, None, false).unwrap(),
        OutputSelector::Field("Site".to_string())
    );
}

#[test]
fn resolve_rejects_conflicting_or_unsupported_pass_thru() {
    let command = create_site();
    assert!(matches!(
        OutputSelector::resolve(&command, Some("Site"), true),
        Err(ConfigurationError::ConflictingSelectors { .. })
    ));
    let command = get_sites();
    assert!(matches!(
        OutputSelector::resolve(&command, None, true),
        Err(ConfigurationError::MissingPassThrough { .. })
    ));
}

#[test]
fn expression_round_trips_resolved_forms() {
    assert_eq!(OutputSelector::Whole.expression(), "*");
    assert_eq!(OutputSelector::PassThrough("A".to_string()).expression(), "^A");
    assert_eq!(OutputSelector::Field("Site".to_string()).expression(), "Site");
}
