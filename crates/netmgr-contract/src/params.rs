// crates/netmgr-contract/src/params.rs
// ============================================================================
// Module: Shared Parameters
// Description: Parameter descriptors reused across Network Manager operations.
// Purpose: Keep identifier, paging, and tag parameters consistent across commands.
// Dependencies: netmgr-core
// ============================================================================

//! ## Overview
//! Builders for parameters that recur across the operation table. Resource
//! identifiers bind by property name so objects emitted by one command can be
//! piped into the next.

// ============================================================================
// SECTION: Imports
// ============================================================================

use netmgr_core::ParameterSpec;
use netmgr_core::PipelineBinding;
use netmgr_core::SemanticType;

// ============================================================================
// SECTION: Identifiers
// ============================================================================

/// Path identifier bound positionally and by property name.
pub fn id_path(name: &str, label: &str, position: usize, description: &str) -> ParameterSpec {
    ParameterSpec::path(name, label)
        .position(position)
        .pipeline(PipelineBinding::ByPropertyName)
        .describe(description)
}

/// The `GlobalNetworkId` URI label, first positional argument.
pub fn global_network_id() -> ParameterSpec {
    id_path("GlobalNetworkId", "globalNetworkId", 0, "ID of the global network.")
}

/// The `CoreNetworkId` URI label, first positional argument.
pub fn core_network_id() -> ParameterSpec {
    id_path("CoreNetworkId", "coreNetworkId", 0, "ID of the core network.")
}

/// The `AttachmentId` URI label, first positional argument.
pub fn attachment_id() -> ParameterSpec {
    id_path("AttachmentId", "attachmentId", 0, "ID of the attachment.")
}

/// The `PolicyVersionId` URI label, second positional argument.
pub fn policy_version_id() -> ParameterSpec {
    id_path("PolicyVersionId", "policyVersionId", 1, "ID of the policy version.")
}

/// The `ResourceArn` URI label, first positional argument.
pub fn resource_arn() -> ParameterSpec {
    id_path("ResourceArn", "resourceArn", 0, "ARN of the resource.")
        .pipeline(PipelineBinding::ByValue)
        .alias("Arn")
}

// ============================================================================
// SECTION: Body Members
// ============================================================================

/// Optional string body member.
pub fn text(name: &str, member: &str, description: &str) -> ParameterSpec {
    ParameterSpec::body(name, member, SemanticType::String).describe(description)
}

/// Required string body member, bindable by property name.
pub fn required_text(name: &str, member: &str, description: &str) -> ParameterSpec {
    text(name, member, description).required().pipeline(PipelineBinding::ByPropertyName)
}

/// Optional boolean body member.
pub fn flag(name: &str, member: &str, description: &str) -> ParameterSpec {
    ParameterSpec::body(name, member, SemanticType::Boolean).describe(description)
}

/// Optional free-text description that may be cleared with an empty value.
pub fn description() -> ParameterSpec {
    text("Description", "Description", "A description of the resource.").allow_empty()
}

/// Resource tags as repeated `Key=Value` pairs.
pub fn tags() -> ParameterSpec {
    ParameterSpec::body("Tag", "Tags", SemanticType::Tags)
        .alias("Tags")
        .allow_empty()
        .describe("Key=Value tags to apply; repeat for several tags.")
}

/// Idempotency token for create-style calls.
pub fn client_token() -> ParameterSpec {
    text("ClientToken", "ClientToken", "Idempotency token for the request.")
}

/// Policy document as JSON text.
pub fn policy_document() -> ParameterSpec {
    ParameterSpec::body("PolicyDocument", "PolicyDocument", SemanticType::Document)
        .describe("Core network policy as a JSON document.")
}

/// Flattened `Location` structure members.
pub fn location() -> [ParameterSpec; 3] {
    [
        text("LocationAddress", "Location.Address", "Physical address.").alias("Address"),
        text("LocationLatitude", "Location.Latitude", "Latitude.").alias("Latitude"),
        text("LocationLongitude", "Location.Longitude", "Longitude.").alias("Longitude"),
    ]
}

// ============================================================================
// SECTION: Query Members
// ============================================================================

/// Optional string query parameter.
pub fn query_text(name: &str, key: &str, description: &str) -> ParameterSpec {
    ParameterSpec::query(name, key, SemanticType::String).describe(description)
}

/// Repeated string query parameter.
pub fn query_list(name: &str, key: &str, description: &str) -> ParameterSpec {
    ParameterSpec::query(name, key, SemanticType::StringList).describe(description)
}

/// Enumerated query parameter.
pub fn query_enum(name: &str, key: &str, allowed: &[&str], description: &str) -> ParameterSpec {
    ParameterSpec::query(name, key, SemanticType::Enum {
        allowed: allowed.iter().map(|value| (*value).to_string()).collect(),
    })
    .describe(description)
}

/// Page size limit.
pub fn max_results() -> ParameterSpec {
    ParameterSpec::query("MaxResult", "maxResults", SemanticType::Integer {
        min: Some(1),
        max: Some(500),
    })
    .alias("MaxResults")
    .describe("Maximum number of results to return (1-500).")
}

/// Continuation token from a previous page.
pub fn next_token() -> ParameterSpec {
    query_text("NextToken", "nextToken", "Token for the next page of results.")
}
