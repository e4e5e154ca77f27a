// crates/netmgr-cli/src/surface.rs
// ============================================================================
// Module: Command-Line Surface
// Description: Builds the clap command tree from the command table.
// Purpose: Expose one subcommand per operation with flags mirroring parameters.
// Dependencies: clap, netmgr-config, netmgr-core
// ============================================================================

//! ## Overview
//! Global flags are declared with clap derive ([`GlobalArgs`]); operation
//! subcommands are generated at runtime from each [`CommandSpec`]:
//! - every parameter becomes `--kebab-name` with its aliases as visible aliases,
//! - positional parameters also accept a bare positional value,
//! - the universal `--select`, `--pass-thru`, `--force` and `--pipeline`
//!   flags are added to every operation.
//!
//! Required parameters are not enforced by clap; the binder reports them
//! after pipeline input has been considered.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::path::PathBuf;

use clap::Arg;
use clap::ArgAction;
use clap::ArgMatches;
use clap::Args;
use clap::Command;
use clap::ValueEnum;
use netmgr_config::ConfigOverrides;
use netmgr_config::OutputFormat;
use netmgr_core::CommandRegistry;
use netmgr_core::CommandSpec;
use netmgr_core::NamedArgument;
use netmgr_core::ParameterSpec;
use netmgr_core::RawInvocation;
use netmgr_core::SemanticType;
use netmgr_core::naming::kebab_case;

// ============================================================================
// SECTION: Constants
// ============================================================================

/// Binary name.
pub const BIN_NAME: &str = "netmgr";
/// Meta command listing the command table.
pub const LIST_COMMANDS: &str = "list-commands";
/// Meta command describing one command.
pub const DESCRIBE_COMMAND: &str = "describe-command";
/// Argument id of `--select`.
const SELECT_ID: &str = "select";
/// Argument id of `--pass-thru`.
const PASS_THRU_ID: &str = "pass-thru";
/// Argument id of `--force`.
const FORCE_ID: &str = "force";
/// Argument id of `--pipeline`.
const PIPELINE_ID: &str = "pipeline";
/// Argument id of the `describe-command` name.
const NAME_ID: &str = "name";

// ============================================================================
// SECTION: Global Arguments
// ============================================================================

/// Flags accepted by every command.
#[derive(Args, Debug, Clone, Default)]
pub struct GlobalArgs {
    /// Config file path (defaults to netmgr.toml or `NETMGR_CONFIG`).
    #[arg(long, value_name = "PATH", global = true)]
    pub config: Option<PathBuf>,
    /// Signing region override.
    #[arg(long, value_name = "REGION", global = true)]
    pub region: Option<String>,
    /// Service endpoint override.
    #[arg(long = "endpoint-url", value_name = "URL", global = true)]
    pub endpoint_url: Option<String>,
    /// Named AWS profile.
    #[arg(long, value_name = "PROFILE", global = true)]
    pub profile: Option<String>,
    /// Per-call timeout in milliseconds.
    #[arg(long = "timeout-ms", value_name = "MS", global = true)]
    pub timeout_ms: Option<u64>,
    /// Output format.
    #[arg(long, value_enum, value_name = "FORMAT", global = true)]
    pub output: Option<OutputArg>,
    /// Append invocation audit events to this file.
    #[arg(long = "audit-log", value_name = "PATH", global = true)]
    pub audit_log: Option<PathBuf>,
    /// Raise diagnostic logging (repeat for trace).
    #[arg(long, action = ArgAction::Count, global = true)]
    pub debug: u8,
    /// Preferred output language (overrides `NETMGR_LANG`).
    #[arg(long, value_enum, value_name = "LANG", global = true)]
    pub lang: Option<LangArg>,
    /// Print version information and exit.
    #[arg(long = "version", action = ArgAction::SetTrue, global = true)]
    pub show_version: bool,
}

impl GlobalArgs {
    /// Returns the configuration overrides carried by the flags.
    #[must_use]
    pub fn overrides(&self) -> ConfigOverrides {
        ConfigOverrides {
            region: self.region.clone(),
            endpoint: self.endpoint_url.clone(),
            profile: self.profile.clone(),
            timeout_ms: self.timeout_ms,
            output: self.output.map(Into::into),
            audit_log: self.audit_log.clone(),
        }
    }
}

/// Supported output formats.
#[derive(ValueEnum, Copy, Clone, Debug, PartialEq, Eq)]
pub enum OutputArg {
    /// Canonical single-line JSON.
    Json,
    /// Indented JSON.
    Pretty,
}

impl From<OutputArg> for OutputFormat {
    fn from(value: OutputArg) -> Self {
        match value {
            OutputArg::Json => Self::Json,
            OutputArg::Pretty => Self::Pretty,
        }
    }
}

/// Supported CLI language selections.
#[derive(ValueEnum, Copy, Clone, Debug, PartialEq, Eq)]
pub enum LangArg {
    /// English.
    En,
    /// Catalan.
    Ca,
}

// ============================================================================
// SECTION: Command Tree
// ============================================================================

/// Builds the root command with one subcommand per operation.
#[must_use]
pub fn root_command(registry: &CommandRegistry) -> Command {
    let root = Command::new(BIN_NAME)
        .about("Command-line interface for AWS Network Manager")
        .disable_help_subcommand(true)
        .disable_version_flag(true)
        .subcommand(Command::new(LIST_COMMANDS).about("List every available command as JSON"))
        .subcommand(
            Command::new(DESCRIBE_COMMAND)
                .about("Describe one command, its parameters and bindings, as JSON")
                .arg(Arg::new(NAME_ID).value_name("COMMAND").required(true)),
        )
        .subcommands(registry.commands().iter().map(operation_command));
    GlobalArgs::augment_args(root)
}

/// Builds the subcommand for one operation.
#[must_use]
pub fn operation_command(spec: &CommandSpec) -> Command {
    let mut command = Command::new(spec.cli_name())
        .about(spec.description.clone())
        .alias(spec.name.clone());
    for parameter in &spec.parameters {
        command = command.arg(parameter_arg(parameter));
        if let Some(position) = parameter.position {
            command = command.arg(
                Arg::new(positional_id(parameter))
                    .index(position + 1)
                    .value_name(kebab_case(&parameter.name).to_ascii_uppercase())
                    .help(format!("Positional form of --{}", parameter.flag())),
            );
        }
    }
    command
        .arg(
            Arg::new(SELECT_ID)
                .long("select")
                .value_name("EXPR")
                .help("Output selector: '*', a response field, or '^Parameter'"),
        )
        .arg(
            Arg::new(PASS_THRU_ID)
                .long("pass-thru")
                .action(ArgAction::SetTrue)
                .help("Emit the pass-through parameter value instead of the response"),
        )
        .arg(
            Arg::new(FORCE_ID)
                .long("force")
                .action(ArgAction::SetTrue)
                .help("Skip confirmation for mutating operations"),
        )
        .arg(
            Arg::new(PIPELINE_ID)
                .long("pipeline")
                .action(ArgAction::SetTrue)
                .help("Run once per object read from stdin (JSON array, NDJSON, or lines)"),
        )
}

/// Builds the flag for one parameter.
fn parameter_arg(parameter: &ParameterSpec) -> Arg {
    let mut arg = Arg::new(parameter.name.clone())
        .long(parameter.flag())
        .value_name(value_name(&parameter.semantic_type))
        .help(help_text(parameter));
    for alias in &parameter.aliases {
        arg = arg.visible_alias(kebab_case(alias));
    }
    match &parameter.semantic_type {
        SemanticType::StringList | SemanticType::Tags => {
            arg = arg.action(ArgAction::Append).allow_hyphen_values(true);
        }
        SemanticType::Boolean => {
            arg = arg.num_args(0 ..= 1).default_missing_value("true");
        }
        SemanticType::String
        | SemanticType::Integer {
            ..
        }
        | SemanticType::Enum {
            ..
        }
        | SemanticType::Document => {
            arg = arg.action(ArgAction::Set).allow_hyphen_values(true);
        }
    }
    arg
}

/// Returns the clap id of a parameter's positional form.
fn positional_id(parameter: &ParameterSpec) -> String {
    format!("{}#position", parameter.name)
}

/// Returns the placeholder shown in help for a semantic type.
fn value_name(semantic_type: &SemanticType) -> &'static str {
    match semantic_type {
        SemanticType::String => "STRING",
        SemanticType::Integer {
            ..
        } => "INT",
        SemanticType::Boolean => "BOOL",
        SemanticType::Enum {
            ..
        } => "VALUE",
        SemanticType::StringList => "STRING",
        SemanticType::Tags => "KEY=VALUE",
        SemanticType::Document => "JSON",
    }
}

/// Returns the help line for a parameter.
fn help_text(parameter: &ParameterSpec) -> String {
    let mut help = parameter.description.clone();
    if let SemanticType::Enum {
        allowed,
    } = &parameter.semantic_type
    {
        help.push_str(&format!(" [{}]", allowed.join(", ")));
    }
    if parameter.required {
        help.push_str(" (required)");
    }
    help.trim().to_string()
}

// ============================================================================
// SECTION: Matches
// ============================================================================

/// Arguments of one operation invocation.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct OperationArgs {
    /// Raw binder input.
    pub raw: RawInvocation,
    /// Skip confirmation.
    pub force: bool,
    /// Read piped objects from stdin.
    pub pipeline: bool,
}

/// Converts parsed matches of an operation subcommand into binder input.
#[must_use]
pub fn operation_args(spec: &CommandSpec, matches: &ArgMatches) -> OperationArgs {
    let mut raw = RawInvocation::default();
    for parameter in &spec.parameters {
        if let Some(values) = matches.get_many::<String>(parameter.name.as_str()) {
            raw.named.push(NamedArgument {
                name: parameter.name.clone(),
                values: values.cloned().collect(),
            });
        }
    }
    for parameter in spec.positional_parameters() {
        if let Some(value) = matches.get_one::<String>(positional_id(parameter).as_str()) {
            raw.positional.push(value.clone());
        }
    }
    raw.select = matches.get_one::<String>(SELECT_ID).cloned();
    raw.pass_thru = matches.get_flag(PASS_THRU_ID);
    OperationArgs {
        raw,
        force: matches.get_flag(FORCE_ID),
        pipeline: matches.get_flag(PIPELINE_ID),
    }
}

/// Returns the command name passed to `describe-command`.
#[must_use]
pub fn describe_target(matches: &ArgMatches) -> Option<&str> {
    matches.get_one::<String>(NAME_ID).map(String::as_str)
}

// ============================================================================
// SECTION: Tests
// ============================================================================
