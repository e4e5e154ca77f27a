// crates/netmgr-contract/src/operations.rs
// ============================================================================
// Module: Network Manager Operations
// Description: Command descriptors for the Network Manager REST-JSON API.
// Purpose: Express every supported operation as data for the generic engine.
// Dependencies: netmgr-core
// ============================================================================

//! ## Overview
//! [`command_specs`] returns one [`CommandSpec`] per Network Manager
//! operation. Each builder records the HTTP binding from the service model,
//! the flattened parameters, the declared top-level response members, and the
//! confirmation classification for mutating calls.

// ============================================================================
// SECTION: Imports
// ============================================================================

use netmgr_core::CommandSpec;
use netmgr_core::ConfirmImpact;
use netmgr_core::HttpBinding;
use netmgr_core::HttpMethod;
use netmgr_core::ParameterSpec;
use netmgr_core::PipelineBinding;
use netmgr_core::SemanticType;

use crate::params::attachment_id;
use crate::params::client_token;
use crate::params::core_network_id;
use crate::params::description;
use crate::params::flag;
use crate::params::global_network_id;
use crate::params::id_path;
use crate::params::location;
use crate::params::max_results;
use crate::params::next_token;
use crate::params::policy_document;
use crate::params::policy_version_id;
use crate::params::query_enum;
use crate::params::query_list;
use crate::params::query_text;
use crate::params::required_text;
use crate::params::resource_arn;
use crate::params::tags;
use crate::params::text;

// ============================================================================
// SECTION: Constants
// ============================================================================

/// Attachment types accepted by `ListAttachments`.
const ATTACHMENT_TYPES: &[&str] =
    &["CONNECT", "SITE_TO_SITE_VPN", "VPC", "TRANSIT_GATEWAY_ROUTE_TABLE"];

/// Attachment states accepted by `ListAttachments`.
const ATTACHMENT_STATES: &[&str] = &[
    "REJECTED",
    "PENDING_ATTACHMENT_ACCEPTANCE",
    "CREATING",
    "FAILED",
    "AVAILABLE",
    "UPDATING",
    "PENDING_NETWORK_UPDATE",
    "PENDING_TAG_ACCEPTANCE",
    "DELETING",
];

/// Policy aliases accepted by `GetCoreNetworkPolicy`.
const POLICY_ALIASES: &[&str] = &["LIVE", "LATEST"];

// ============================================================================
// SECTION: Command Table
// ============================================================================

/// Returns the Network Manager command descriptors.
///
/// The order is grouped by resource and preserved in `list-commands` output.
/// Append new operations within their resource group.
#[must_use]
pub fn command_specs() -> Vec<CommandSpec> {
    vec![
        create_global_network(),
        delete_global_network(),
        describe_global_networks(),
        update_global_network(),
        create_site(),
        delete_site(),
        get_sites(),
        update_site(),
        create_device(),
        delete_device(),
        get_devices(),
        create_link(),
        delete_link(),
        get_links(),
        create_connection(),
        delete_connection(),
        register_transit_gateway(),
        deregister_transit_gateway(),
        create_core_network(),
        delete_core_network(),
        get_core_network(),
        update_core_network(),
        list_core_networks(),
        get_core_network_policy(),
        put_core_network_policy(),
        delete_core_network_policy_version(),
        restore_core_network_policy_version(),
        get_core_network_change_set(),
        execute_core_network_change_set(),
        create_vpc_attachment(),
        get_vpc_attachment(),
        update_vpc_attachment(),
        accept_attachment(),
        reject_attachment(),
        delete_attachment(),
        list_attachments(),
        start_route_analysis(),
        get_route_analysis(),
        tag_resource(),
        untag_resource(),
        list_tags_for_resource(),
    ]
}

/// Builds a command header from an HTTP binding.
fn command(name: &str, summary: &str, method: HttpMethod, uri: &str) -> CommandSpec {
    CommandSpec::new(name, summary, HttpBinding::new(method, uri))
}

// ============================================================================
// SECTION: Global Networks
// ============================================================================

/// `CreateGlobalNetwork`.
fn create_global_network() -> CommandSpec {
    command(
        "CreateGlobalNetwork",
        "Creates a new, empty global network.",
        HttpMethod::Post,
        "/global-networks",
    )
    .param(description().pipeline(PipelineBinding::ByPropertyName))
    .param(tags())
    .returns(&["GlobalNetwork"], "GlobalNetwork")
    .mutating(ConfirmImpact::Medium, &["Description"])
}

/// `DeleteGlobalNetwork`.
fn delete_global_network() -> CommandSpec {
    command(
        "DeleteGlobalNetwork",
        "Deletes an existing global network.",
        HttpMethod::Delete,
        "/global-networks/{globalNetworkId}",
    )
    .param(global_network_id())
    .returns(&["GlobalNetwork"], "GlobalNetwork")
    .mutating(ConfirmImpact::High, &["GlobalNetworkId"])
    .pass_through("GlobalNetworkId")
}

/// `DescribeGlobalNetworks`.
fn describe_global_networks() -> CommandSpec {
    command(
        "DescribeGlobalNetworks",
        "Describes one or more global networks.",
        HttpMethod::Get,
        "/global-networks",
    )
    .param(
        query_list("GlobalNetworkId", "globalNetworkIds", "IDs of the global networks.")
            .position(0)
            .pipeline(PipelineBinding::ByPropertyName),
    )
    .param(max_results())
    .param(next_token())
    .returns(&["GlobalNetworks", "NextToken"], "GlobalNetworks")
}

/// `UpdateGlobalNetwork`.
fn update_global_network() -> CommandSpec {
    command(
        "UpdateGlobalNetwork",
        "Updates an existing global network.",
        HttpMethod::Patch,
        "/global-networks/{globalNetworkId}",
    )
    .param(global_network_id())
    .param(description())
    .returns(&["GlobalNetwork"], "GlobalNetwork")
    .mutating(ConfirmImpact::Medium, &["GlobalNetworkId"])
    .pass_through("GlobalNetworkId")
}

// ============================================================================
// SECTION: Sites
// ============================================================================

/// `SiteId` URI label, second positional argument.
fn site_id_path() -> ParameterSpec {
    id_path("SiteId", "siteId", 1, "ID of the site.")
}

/// `CreateSite`.
fn create_site() -> CommandSpec {
    let [address, latitude, longitude] = location();
    command(
        "CreateSite",
        "Creates a new site in a global network.",
        HttpMethod::Post,
        "/global-networks/{globalNetworkId}/sites",
    )
    .param(global_network_id())
    .param(description())
    .param(address)
    .param(latitude)
    .param(longitude)
    .param(tags())
    .returns(&["Site"], "Site")
    .mutating(ConfirmImpact::Medium, &["GlobalNetworkId"])
    .pass_through("GlobalNetworkId")
}

/// `DeleteSite`.
fn delete_site() -> CommandSpec {
    command(
        "DeleteSite",
        "Deletes an existing site.",
        HttpMethod::Delete,
        "/global-networks/{globalNetworkId}/sites/{siteId}",
    )
    .param(global_network_id())
    .param(site_id_path())
    .returns(&["Site"], "Site")
    .mutating(ConfirmImpact::High, &["GlobalNetworkId", "SiteId"])
    .pass_through("SiteId")
}

/// `GetSites`.
fn get_sites() -> CommandSpec {
    command(
        "GetSites",
        "Gets information about one or more sites.",
        HttpMethod::Get,
        "/global-networks/{globalNetworkId}/sites",
    )
    .param(global_network_id())
    .param(query_list("SiteId", "siteIds", "IDs of the sites."))
    .param(max_results())
    .param(next_token())
    .returns(&["Sites", "NextToken"], "Sites")
}

/// `UpdateSite`.
fn update_site() -> CommandSpec {
    let [address, latitude, longitude] = location();
    command(
        "UpdateSite",
        "Updates the information for an existing site.",
        HttpMethod::Patch,
        "/global-networks/{globalNetworkId}/sites/{siteId}",
    )
    .param(global_network_id())
    .param(site_id_path())
    .param(description())
    .param(address)
    .param(latitude)
    .param(longitude)
    .returns(&["Site"], "Site")
    .mutating(ConfirmImpact::Medium, &["GlobalNetworkId", "SiteId"])
    .pass_through("SiteId")
}

// ============================================================================
// SECTION: Devices
// ============================================================================

/// `CreateDevice`.
fn create_device() -> CommandSpec {
    let [address, latitude, longitude] = location();
    command(
        "CreateDevice",
        "Creates a new device in a global network.",
        HttpMethod::Post,
        "/global-networks/{globalNetworkId}/devices",
    )
    .param(global_network_id())
    .param(text("AWSLocationZone", "AWSLocation.Zone", "Zone the device is located in."))
    .param(text("AWSLocationSubnetArn", "AWSLocation.SubnetArn", "ARN of the subnet."))
    .param(description())
    .param(text("Type", "Type", "Type of the device."))
    .param(text("Vendor", "Vendor", "Vendor of the device."))
    .param(text("Model", "Model", "Model of the device."))
    .param(text("SerialNumber", "SerialNumber", "Serial number of the device."))
    .param(address)
    .param(latitude)
    .param(longitude)
    .param(text("SiteId", "SiteId", "ID of the site.").pipeline(PipelineBinding::ByPropertyName))
    .param(tags())
    .returns(&["Device"], "Device")
    .mutating(ConfirmImpact::Medium, &["GlobalNetworkId"])
    .pass_through("GlobalNetworkId")
}

/// `DeleteDevice`.
fn delete_device() -> CommandSpec {
    command(
        "DeleteDevice",
        "Deletes an existing device.",
        HttpMethod::Delete,
        "/global-networks/{globalNetworkId}/devices/{deviceId}",
    )
    .param(global_network_id())
    .param(id_path("DeviceId", "deviceId", 1, "ID of the device."))
    .returns(&["Device"], "Device")
    .mutating(ConfirmImpact::High, &["GlobalNetworkId", "DeviceId"])
    .pass_through("DeviceId")
}

/// `GetDevices`.
fn get_devices() -> CommandSpec {
    command(
        "GetDevices",
        "Gets information about one or more devices.",
        HttpMethod::Get,
        "/global-networks/{globalNetworkId}/devices",
    )
    .param(global_network_id())
    .param(query_list("DeviceId", "deviceIds", "IDs of the devices."))
    .param(query_text("SiteId", "siteId", "ID of the site."))
    .param(max_results())
    .param(next_token())
    .returns(&["Devices", "NextToken"], "Devices")
}

// ============================================================================
// SECTION: Links
// ============================================================================

/// Bandwidth member in Mbps.
fn bandwidth(name: &str, member: &str, description: &str) -> ParameterSpec {
    ParameterSpec::body(name, member, SemanticType::Integer {
        min: Some(0),
        max: None,
    })
    .describe(description)
}

/// `CreateLink`.
fn create_link() -> CommandSpec {
    command(
        "CreateLink",
        "Creates a new link for a specified site.",
        HttpMethod::Post,
        "/global-networks/{globalNetworkId}/links",
    )
    .param(global_network_id())
    .param(description())
    .param(text("Type", "Type", "Type of the link."))
    .param(bandwidth("BandwidthUploadSpeed", "Bandwidth.UploadSpeed", "Upload speed in Mbps."))
    .param(bandwidth(
        "BandwidthDownloadSpeed",
        "Bandwidth.DownloadSpeed",
        "Download speed in Mbps.",
    ))
    .param(text("Provider", "Provider", "Provider of the link."))
    .param(required_text("SiteId", "SiteId", "ID of the site."))
    .param(tags())
    .returns(&["Link"], "Link")
    .mutating(ConfirmImpact::Medium, &["GlobalNetworkId", "SiteId"])
    .pass_through("SiteId")
}

/// `DeleteLink`.
fn delete_link() -> CommandSpec {
    command(
        "DeleteLink",
        "Deletes an existing link.",
        HttpMethod::Delete,
        "/global-networks/{globalNetworkId}/links/{linkId}",
    )
    .param(global_network_id())
    .param(id_path("LinkId", "linkId", 1, "ID of the link."))
    .returns(&["Link"], "Link")
    .mutating(ConfirmImpact::High, &["GlobalNetworkId", "LinkId"])
    .pass_through("LinkId")
}

/// `GetLinks`.
fn get_links() -> CommandSpec {
    command(
        "GetLinks",
        "Gets information about one or more links.",
        HttpMethod::Get,
        "/global-networks/{globalNetworkId}/links",
    )
    .param(global_network_id())
    .param(query_list("LinkId", "linkIds", "IDs of the links."))
    .param(query_text("SiteId", "siteId", "ID of the site."))
    .param(query_text("Type", "type", "Link type."))
    .param(query_text("Provider", "provider", "Link provider."))
    .param(max_results())
    .param(next_token())
    .returns(&["Links", "NextToken"], "Links")
}

// ============================================================================
// SECTION: Connections
// ============================================================================

/// `CreateConnection`.
fn create_connection() -> CommandSpec {
    command(
        "CreateConnection",
        "Creates a connection between two devices.",
        HttpMethod::Post,
        "/global-networks/{globalNetworkId}/connections",
    )
    .param(global_network_id())
    .param(required_text("DeviceId", "DeviceId", "ID of the first device."))
    .param(required_text("ConnectedDeviceId", "ConnectedDeviceId", "ID of the second device."))
    .param(text("LinkId", "LinkId", "ID of the link for the first device."))
    .param(text("ConnectedLinkId", "ConnectedLinkId", "ID of the link for the second device."))
    .param(description())
    .param(tags())
    .returns(&["Connection"], "Connection")
    .mutating(ConfirmImpact::Medium, &["GlobalNetworkId", "DeviceId", "ConnectedDeviceId"])
}

/// `DeleteConnection`.
fn delete_connection() -> CommandSpec {
    command(
        "DeleteConnection",
        "Deletes the specified connection in your global network.",
        HttpMethod::Delete,
        "/global-networks/{globalNetworkId}/connections/{connectionId}",
    )
    .param(global_network_id())
    .param(id_path("ConnectionId", "connectionId", 1, "ID of the connection."))
    .returns(&["Connection"], "Connection")
    .mutating(ConfirmImpact::High, &["GlobalNetworkId", "ConnectionId"])
    .pass_through("ConnectionId")
}

// ============================================================================
// SECTION: Transit Gateways
// ============================================================================

/// `RegisterTransitGateway`.
fn register_transit_gateway() -> CommandSpec {
    command(
        "RegisterTransitGateway",
        "Registers a transit gateway in your global network.",
        HttpMethod::Post,
        "/global-networks/{globalNetworkId}/transit-gateway-registrations",
    )
    .param(global_network_id())
    .param(
        required_text("TransitGatewayArn", "TransitGatewayArn", "ARN of the transit gateway.")
            .position(1),
    )
    .returns(&["TransitGatewayRegistration"], "TransitGatewayRegistration")
    .mutating(ConfirmImpact::Medium, &["GlobalNetworkId", "TransitGatewayArn"])
    .pass_through("TransitGatewayArn")
}

/// `DeregisterTransitGateway`.
fn deregister_transit_gateway() -> CommandSpec {
    command(
        "DeregisterTransitGateway",
        "Deregisters a transit gateway from your global network.",
        HttpMethod::Delete,
        "/global-networks/{globalNetworkId}/transit-gateway-registrations/{transitGatewayArn}",
    )
    .param(global_network_id())
    .param(id_path("TransitGatewayArn", "transitGatewayArn", 1, "ARN of the transit gateway."))
    .returns(&["TransitGatewayRegistration"], "TransitGatewayRegistration")
    .mutating(ConfirmImpact::High, &["GlobalNetworkId", "TransitGatewayArn"])
    .pass_through("TransitGatewayArn")
}

// ============================================================================
// SECTION: Core Networks
// ============================================================================

/// `CreateCoreNetwork`.
fn create_core_network() -> CommandSpec {
    command("CreateCoreNetwork", "Creates a core network.", HttpMethod::Post, "/core-networks")
        .param(
            required_text("GlobalNetworkId", "GlobalNetworkId", "ID of the global network.")
                .position(0),
        )
        .param(description())
        .param(tags())
        .param(policy_document())
        .param(client_token())
        .returns(&["CoreNetwork"], "CoreNetwork")
        .mutating(ConfirmImpact::Medium, &["GlobalNetworkId"])
        .pass_through("GlobalNetworkId")
}

/// `DeleteCoreNetwork`.
fn delete_core_network() -> CommandSpec {
    command(
        "DeleteCoreNetwork",
        "Deletes a core network along with all core network policies.",
        HttpMethod::Delete,
        "/core-networks/{coreNetworkId}",
    )
    .param(core_network_id())
    .returns(&["CoreNetwork"], "CoreNetwork")
    .mutating(ConfirmImpact::High, &["CoreNetworkId"])
    .pass_through("CoreNetworkId")
}

/// `GetCoreNetwork`.
fn get_core_network() -> CommandSpec {
    command(
        "GetCoreNetwork",
        "Returns information about a core network.",
        HttpMethod::Get,
        "/core-networks/{coreNetworkId}",
    )
    .param(core_network_id())
    .returns(&["CoreNetwork"], "CoreNetwork")
}

/// `UpdateCoreNetwork`.
fn update_core_network() -> CommandSpec {
    command(
        "UpdateCoreNetwork",
        "Updates the description of a core network.",
        HttpMethod::Patch,
        "/core-networks/{coreNetworkId}",
    )
    .param(core_network_id())
    .param(description())
    .returns(&["CoreNetwork"], "CoreNetwork")
    .mutating(ConfirmImpact::Medium, &["CoreNetworkId"])
    .pass_through("CoreNetworkId")
}

/// `ListCoreNetworks`.
fn list_core_networks() -> CommandSpec {
    command(
        "ListCoreNetworks",
        "Returns a list of owned and shared core networks.",
        HttpMethod::Get,
        "/core-networks",
    )
    .param(max_results())
    .param(next_token())
    .returns(&["CoreNetworks", "NextToken"], "CoreNetworks")
}

/// `GetCoreNetworkPolicy`.
fn get_core_network_policy() -> CommandSpec {
    command(
        "GetCoreNetworkPolicy",
        "Returns details about a core network policy.",
        HttpMethod::Get,
        "/core-networks/{coreNetworkId}/core-network-policy",
    )
    .param(core_network_id())
    .param(
        ParameterSpec::query("PolicyVersionId", "policyVersionId", SemanticType::Integer {
            min: Some(1),
            max: None,
        })
        .pipeline(PipelineBinding::ByPropertyName)
        .describe("ID of the policy version."),
    )
    .param(query_enum("Alias", "alias", POLICY_ALIASES, "Alias of the policy version."))
    .returns(&["CoreNetworkPolicy"], "CoreNetworkPolicy")
}

/// `PutCoreNetworkPolicy`.
fn put_core_network_policy() -> CommandSpec {
    command(
        "PutCoreNetworkPolicy",
        "Creates a new, immutable version of a core network policy.",
        HttpMethod::Post,
        "/core-networks/{coreNetworkId}/core-network-policy",
    )
    .param(core_network_id())
    .param(policy_document().required())
    .param(description())
    .param(ParameterSpec::body("LatestVersionId", "LatestVersionId", SemanticType::Integer {
        min: Some(1),
        max: None,
    })
    .describe("ID of the latest policy version, for optimistic locking."))
    .param(client_token())
    .returns(&["CoreNetworkPolicy"], "CoreNetworkPolicy")
    .mutating(ConfirmImpact::Medium, &["CoreNetworkId"])
    .pass_through("CoreNetworkId")
}

/// `DeleteCoreNetworkPolicyVersion`.
fn delete_core_network_policy_version() -> CommandSpec {
    command(
        "DeleteCoreNetworkPolicyVersion",
        "Deletes a policy version from a core network.",
        HttpMethod::Delete,
        "/core-networks/{coreNetworkId}/core-network-policy-versions/{policyVersionId}",
    )
    .param(core_network_id())
    .param(policy_version_id())
    .returns(&["CoreNetworkPolicy"], "CoreNetworkPolicy")
    .mutating(ConfirmImpact::High, &["CoreNetworkId", "PolicyVersionId"])
    .pass_through("PolicyVersionId")
}

/// `RestoreCoreNetworkPolicyVersion`.
fn restore_core_network_policy_version() -> CommandSpec {
    command(
        "RestoreCoreNetworkPolicyVersion",
        "Restores a previous policy version as a new, immutable version.",
        HttpMethod::Post,
        "/core-networks/{coreNetworkId}/core-network-policy-versions/{policyVersionId}/restore",
    )
    .param(core_network_id())
    .param(policy_version_id())
    .returns(&["CoreNetworkPolicy"], "CoreNetworkPolicy")
    .mutating(ConfirmImpact::Medium, &["CoreNetworkId", "PolicyVersionId"])
    .pass_through("CoreNetworkId")
}

/// `GetCoreNetworkChangeSet`.
fn get_core_network_change_set() -> CommandSpec {
    command(
        "GetCoreNetworkChangeSet",
        "Returns a change set between the live policy and a submitted policy version.",
        HttpMethod::Get,
        "/core-networks/{coreNetworkId}/core-network-change-sets/{policyVersionId}",
    )
    .param(core_network_id())
    .param(policy_version_id())
    .param(max_results())
    .param(next_token())
    .returns(&["CoreNetworkChanges", "NextToken"], "CoreNetworkChanges")
}

/// `ExecuteCoreNetworkChangeSet`.
fn execute_core_network_change_set() -> CommandSpec {
    command(
        "ExecuteCoreNetworkChangeSet",
        "Executes a change set on a core network.",
        HttpMethod::Post,
        "/core-networks/{coreNetworkId}/core-network-change-sets/{policyVersionId}/execute",
    )
    .param(core_network_id())
    .param(policy_version_id())
    .mutating(ConfirmImpact::Medium, &["CoreNetworkId", "PolicyVersionId"])
    .pass_through("CoreNetworkId")
}

// ============================================================================
// SECTION: Attachments
// ============================================================================

/// Flattened VPC attachment `Options` members.
fn vpc_options() -> [ParameterSpec; 2] {
    [
        flag("OptionsIpv6Support", "Options.Ipv6Support", "Enable IPv6 on the attachment.")
            .alias("Ipv6Support"),
        flag(
            "OptionsApplianceModeSupport",
            "Options.ApplianceModeSupport",
            "Enable appliance mode on the attachment.",
        )
        .alias("ApplianceModeSupport"),
    ]
}

/// `CreateVpcAttachment`.
fn create_vpc_attachment() -> CommandSpec {
    let [ipv6, appliance] = vpc_options();
    command(
        "CreateVpcAttachment",
        "Creates a VPC attachment on an edge location of a core network.",
        HttpMethod::Post,
        "/vpc-attachments",
    )
    .param(
        required_text("CoreNetworkId", "CoreNetworkId", "ID of the core network.").position(0),
    )
    .param(required_text("VpcArn", "VpcArn", "ARN of the VPC.").position(1))
    .param(
        ParameterSpec::body("SubnetArn", "SubnetArns", SemanticType::StringList)
            .required()
            .alias("SubnetArns")
            .describe("Subnet ARNs in the VPC attachment; repeat for several subnets."),
    )
    .param(ipv6)
    .param(appliance)
    .param(tags())
    .param(client_token())
    .returns(&["VpcAttachment"], "VpcAttachment")
    .mutating(ConfirmImpact::Medium, &["CoreNetworkId", "VpcArn"])
    .pass_through("CoreNetworkId")
}

/// `GetVpcAttachment`.
fn get_vpc_attachment() -> CommandSpec {
    command(
        "GetVpcAttachment",
        "Returns information about a VPC attachment.",
        HttpMethod::Get,
        "/vpc-attachments/{attachmentId}",
    )
    .param(attachment_id())
    .returns(&["VpcAttachment"], "VpcAttachment")
}

/// `UpdateVpcAttachment`.
fn update_vpc_attachment() -> CommandSpec {
    let [ipv6, appliance] = vpc_options();
    command(
        "UpdateVpcAttachment",
        "Updates a VPC attachment.",
        HttpMethod::Patch,
        "/vpc-attachments/{attachmentId}",
    )
    .param(attachment_id())
    .param(
        ParameterSpec::body("AddSubnetArn", "AddSubnetArns", SemanticType::StringList)
            .alias("AddSubnetArns")
            .describe("Subnet ARNs to add to the attachment."),
    )
    .param(
        ParameterSpec::body("RemoveSubnetArn", "RemoveSubnetArns", SemanticType::StringList)
            .alias("RemoveSubnetArns")
            .describe("Subnet ARNs to remove from the attachment."),
    )
    .param(ipv6)
    .param(appliance)
    .returns(&["VpcAttachment"], "VpcAttachment")
    .mutating(ConfirmImpact::Medium, &["AttachmentId"])
    .pass_through("AttachmentId")
}

/// `AcceptAttachment`.
fn accept_attachment() -> CommandSpec {
    command(
        "AcceptAttachment",
        "Accepts a core network attachment request.",
        HttpMethod::Post,
        "/attachments/{attachmentId}/accept",
    )
    .param(attachment_id())
    .returns(&["Attachment"], "Attachment")
    .mutating(ConfirmImpact::Medium, &["AttachmentId"])
    .pass_through("AttachmentId")
}

/// `RejectAttachment`.
fn reject_attachment() -> CommandSpec {
    command(
        "RejectAttachment",
        "Rejects a core network attachment request.",
        HttpMethod::Post,
        "/attachments/{attachmentId}/reject",
    )
    .param(attachment_id())
    .returns(&["Attachment"], "Attachment")
    .mutating(ConfirmImpact::High, &["AttachmentId"])
    .pass_through("AttachmentId")
}

/// `DeleteAttachment`.
fn delete_attachment() -> CommandSpec {
    command(
        "DeleteAttachment",
        "Deletes an attachment.",
        HttpMethod::Delete,
        "/attachments/{attachmentId}",
    )
    .param(attachment_id())
    .returns(&["Attachment"], "Attachment")
    .mutating(ConfirmImpact::High, &["AttachmentId"])
    .pass_through("AttachmentId")
}

/// `ListAttachments`.
fn list_attachments() -> CommandSpec {
    command(
        "ListAttachments",
        "Returns a list of core network attachments.",
        HttpMethod::Get,
        "/attachments",
    )
    .param(
        query_text("CoreNetworkId", "coreNetworkId", "ID of the core network.")
            .pipeline(PipelineBinding::ByPropertyName),
    )
    .param(query_enum("AttachmentType", "attachmentType", ATTACHMENT_TYPES, "Attachment type."))
    .param(query_text("EdgeLocation", "edgeLocation", "Region where the edge is located."))
    .param(query_enum("State", "state", ATTACHMENT_STATES, "Attachment state."))
    .param(max_results())
    .param(next_token())
    .returns(&["Attachments", "NextToken"], "Attachments")
}

// ============================================================================
// SECTION: Route Analysis
// ============================================================================

/// `StartRouteAnalysis`.
fn start_route_analysis() -> CommandSpec {
    command(
        "StartRouteAnalysis",
        "Starts analyzing the routing path between a source and destination.",
        HttpMethod::Post,
        "/global-networks/{globalNetworkId}/route-analyses",
    )
    .param(global_network_id())
    .param(text(
        "SourceTransitGatewayAttachmentArn",
        "Source.TransitGatewayAttachmentArn",
        "ARN of the source transit gateway attachment.",
    ))
    .param(text("SourceIpAddress", "Source.IpAddress", "Source IP address."))
    .param(text(
        "DestinationTransitGatewayAttachmentArn",
        "Destination.TransitGatewayAttachmentArn",
        "ARN of the destination transit gateway attachment.",
    ))
    .param(text("DestinationIpAddress", "Destination.IpAddress", "Destination IP address."))
    .param(flag("IncludeReturnPath", "IncludeReturnPath", "Analyze the return path too."))
    .param(
        flag("UseMiddlebox", "UseMiddleboxes", "Include middlebox appliances in the analysis.")
            .alias("UseMiddleboxes"),
    )
    .returns(&["RouteAnalysis"], "RouteAnalysis")
    .mutating(ConfirmImpact::Medium, &["GlobalNetworkId"])
    .pass_through("GlobalNetworkId")
}

/// `GetRouteAnalysis`.
fn get_route_analysis() -> CommandSpec {
    command(
        "GetRouteAnalysis",
        "Gets information about the specified route analysis.",
        HttpMethod::Get,
        "/global-networks/{globalNetworkId}/route-analyses/{routeAnalysisId}",
    )
    .param(global_network_id())
    .param(id_path("RouteAnalysisId", "routeAnalysisId", 1, "ID of the route analysis."))
    .returns(&["RouteAnalysis"], "RouteAnalysis")
}

// ============================================================================
// SECTION: Tags
// ============================================================================

/// `TagResource`.
fn tag_resource() -> CommandSpec {
    command("TagResource", "Tags a specified resource.", HttpMethod::Post, "/tags/{resourceArn}")
        .param(resource_arn())
        .param(
            ParameterSpec::body("Tag", "Tags", SemanticType::Tags)
                .required()
                .alias("Tags")
                .describe("Key=Value tags to apply; repeat for several tags."),
        )
        .mutating(ConfirmImpact::Medium, &["ResourceArn"])
        .pass_through("ResourceArn")
}

/// `UntagResource`.
fn untag_resource() -> CommandSpec {
    command(
        "UntagResource",
        "Removes tags from a specified resource.",
        HttpMethod::Delete,
        "/tags/{resourceArn}",
    )
    .param(resource_arn())
    .param(
        query_list("TagKey", "tagKeys", "Tag keys to remove; repeat for several keys.")
            .required()
            .alias("TagKeys"),
    )
    .mutating(ConfirmImpact::High, &["ResourceArn"])
    .pass_through("ResourceArn")
}

/// `ListTagsForResource`.
fn list_tags_for_resource() -> CommandSpec {
    command(
        "ListTagsForResource",
        "Lists the tags for a specified resource.",
        HttpMethod::Get,
        "/tags/{resourceArn}",
    )
    .param(resource_arn())
    .returns(&["TagList"], "TagList")
}

// ============================================================================
// SECTION: Tests
// ============================================================================
