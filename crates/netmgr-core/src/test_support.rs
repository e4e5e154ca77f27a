// crates/netmgr-core/src/test_support.rs
// ============================================================================
// Module: Core Test Fixtures
// Description: Shared command descriptors for unit tests.
// Purpose: Keep unit tests focused on behavior rather than descriptor setup.
// Dependencies: netmgr-core
// ============================================================================

#![allow(
    clippy::missing_docs_in_private_items,
    reason = "Test-only fixtures are self-describing."
)]

use crate::spec::CommandSpec;
use crate::spec::ConfirmImpact;
use crate::spec::HttpBinding;
use crate::spec::HttpMethod;
use crate::spec::ParameterSpec;
use crate::spec::PipelineBinding;
use crate::spec::SemanticType;

pub fn create_site() -> CommandSpec {
    CommandSpec::new(
        "CreateSite",
        "Creates a site.",
        HttpBinding::new(HttpMethod::Post, "/global-networks/{globalNetworkId}/sites"),
    )
    .param(
        ParameterSpec::path("GlobalNetworkId", "globalNetworkId")
            .position(0)
            .pipeline(PipelineBinding::ByPropertyName),
    )
    .param(
        ParameterSpec::body("Description", "Description", SemanticType::String)
            .allow_empty()
            .pipeline(PipelineBinding::ByPropertyName),
    )
    .param(
        ParameterSpec::body("LocationAddress", "Location.Address", SemanticType::String)
            .alias("Address"),
    )
    .param(ParameterSpec::body("LocationLatitude", "Location.Latitude", SemanticType::String))
    .param(ParameterSpec::body("Tag", "Tags", SemanticType::Tags).alias("Tags").allow_empty())
    .returns(&["Site"], "Site")
    .mutating(ConfirmImpact::Medium, &["GlobalNetworkId"])
    .pass_through("GlobalNetworkId")
}

pub fn get_sites() -> CommandSpec {
    CommandSpec::new(
        "GetSites",
        "Lists sites.",
        HttpBinding::new(HttpMethod::Get, "/global-networks/{globalNetworkId}/sites"),
    )
    .param(
        ParameterSpec::path("GlobalNetworkId", "globalNetworkId")
            .position(0)
            .pipeline(PipelineBinding::ByValue),
    )
    .param(ParameterSpec::query("SiteId", "siteIds", SemanticType::StringList).allow_empty())
    .param(ParameterSpec::query(
        "MaxResult",
        "maxResults",
        SemanticType::Integer {
            min: Some(1),
            max: Some(500),
        },
    ))
    .param(ParameterSpec::query(
        "State",
        "state",
        SemanticType::Enum {
            allowed: vec!["PENDING".to_string(), "AVAILABLE".to_string()],
        },
    ))
    .param(ParameterSpec::query("Verbose", "verbose", SemanticType::Boolean))
    .returns(&["Sites", "NextToken"], "Sites")
}

pub fn put_policy() -> CommandSpec {
    CommandSpec::new(
        "PutCoreNetworkPolicy",
        "Stores a policy.",
        HttpBinding::new(HttpMethod::Post, "/core-networks/{coreNetworkId}/core-network-policy"),
    )
    .param(ParameterSpec::path("CoreNetworkId", "coreNetworkId"))
    .param(
        ParameterSpec::body("PolicyDocument", "PolicyDocument", SemanticType::Document).required(),
    )
    .param(
        ParameterSpec::body("LatestVersionId", "LatestVersionId", SemanticType::Integer {
            min: None,
            max: None,
        })
        .allow_null()
        .pipeline(PipelineBinding::ByPropertyName),
    )
    .returns(&["CoreNetworkPolicy"], "CoreNetworkPolicy")
    .mutating(ConfirmImpact::Medium, &["CoreNetworkId"])
}
