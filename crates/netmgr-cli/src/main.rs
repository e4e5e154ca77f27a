// crates/netmgr-cli/src/main.rs
// ============================================================================
// Module: Netmgr CLI Entry Point
// Description: Process entry for the AWS Network Manager command line.
// Purpose: Wire config, logging, cancellation, and the generic dispatcher.
// Dependencies: clap, netmgr-cli, netmgr-client, netmgr-config, tokio, tracing
// ============================================================================

//! ## Overview
//! `netmgr` exposes every operation in the command table as a subcommand.
//! One invocation runs once, or once per piped object with `--pipeline`.
//! Selected objects are written to stdout; failures are written to stderr as
//! JSON error objects and folded into the exit code:
//! - `0` every invocation succeeded or was declined,
//! - `1` at least one invocation failed,
//! - `2` the command line itself was invalid,
//! - `130` the run was interrupted.

// ============================================================================
// SECTION: Modules
// ============================================================================


// ============================================================================
// SECTION: Imports
// ============================================================================

use std::io::Write;
use std::process::ExitCode;

use clap::ArgMatches;
use clap::FromArgMatches;
use netmgr_cli::audit::FileAuditSink;
use netmgr_cli::audit::InvocationAuditSink;
use netmgr_cli::audit::NoopAuditSink;
use netmgr_cli::audit::StderrAuditSink;
use netmgr_cli::batch::Batch;
use netmgr_cli::batch::run_batch;
use netmgr_cli::confirm::TerminalConfirmer;
use netmgr_cli::dispatch::Dispatcher;
use netmgr_cli::i18n::Locale;
use netmgr_cli::i18n::set_locale;
use netmgr_cli::output::write_document;
use netmgr_cli::pipeline::PipelineError;
use netmgr_cli::pipeline::read_pipeline;
use netmgr_cli::surface;
use netmgr_cli::surface::DESCRIBE_COMMAND;
use netmgr_cli::surface::GlobalArgs;
use netmgr_cli::surface::LIST_COMMANDS;
use netmgr_cli::surface::LangArg;
use netmgr_cli::t;
use netmgr_client::CancellationSource;
use netmgr_client::ServiceClient;
use netmgr_config::AuditConfig;
use netmgr_config::NetmgrConfig;
use netmgr_config::OutputFormat;
use netmgr_core::CommandRegistry;
use netmgr_core::CommandSpec;
use serde_json::Value;
use thiserror::Error;
use tracing_subscriber::filter::EnvFilter;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::fmt;
use tracing_subscriber::prelude::*;

// ============================================================================
// SECTION: Constants
// ============================================================================

/// Environment variable selecting the CLI language.
const LANG_ENV: &str = "NETMGR_LANG";
/// Environment variable holding tracing filter directives.
const LOG_ENV: &str = "NETMGR_LOG";

// ============================================================================
// SECTION: Errors
// ============================================================================

/// CLI error wrapper for localized error messages.
#[derive(Debug, Error)]
#[error("{message}")]
struct CliError {
    /// Human-readable error message.
    message: String,
}

impl CliError {
    /// Constructs a new [`CliError`] from a localized message.
    const fn new(message: String) -> Self {
        Self {
            message,
        }
    }
}

/// CLI result alias for fallible operations.
type CliResult<T> = Result<T, CliError>;

// ============================================================================
// SECTION: Entry Point
// ============================================================================

/// CLI entry point returning an exit code.
#[tokio::main(flavor = "multi_thread")]
async fn main() -> ExitCode {
    match run().await {
        Ok(code) => code,
        Err(err) => emit_error(&err.to_string()),
    }
}

/// Parses the command line and runs the selected command.
async fn run() -> CliResult<ExitCode> {
    let registry = netmgr_contract::registry()
        .map_err(|err| CliError::new(t!("registry.invalid", error = err)))?;
    let matches = surface::root_command(registry).get_matches();
    let globals =
        GlobalArgs::from_arg_matches(&matches).map_err(|err| CliError::new(err.to_string()))?;

    let env_lang = std::env::var(LANG_ENV).ok();
    let locale = resolve_locale(globals.lang, env_lang.as_deref())?;
    set_locale(locale);
    if locale != Locale::En {
        write_stderr_line(&t!("i18n.disclaimer.machine_translated"))
            .map_err(|err| CliError::new(output_error("stderr", &err)))?;
    }

    if globals.show_version {
        let version = env!("CARGO_PKG_VERSION");
        write_stdout_line(&t!("main.version", version = version))
            .map_err(|err| CliError::new(output_error("stdout", &err)))?;
        return Ok(ExitCode::SUCCESS);
    }

    init_tracing(globals.debug)?;

    let Some((name, sub_matches)) = matches.subcommand() else {
        show_help(registry)?;
        return Ok(ExitCode::SUCCESS);
    };
    let format = globals.output.map_or_else(OutputFormat::default, Into::into);
    match name {
        LIST_COMMANDS => command_list(registry, format),
        DESCRIBE_COMMAND => command_describe(registry, sub_matches, format),
        _ => {
            let Some(spec) = registry.get(name) else {
                show_help(registry)?;
                return Ok(ExitCode::from(2));
            };
            command_operation(&globals, spec, sub_matches).await
        }
    }
}

/// Resolves the CLI locale from flags or environment.
fn resolve_locale(lang: Option<LangArg>, env_lang: Option<&str>) -> CliResult<Locale> {
    if let Some(lang) = lang {
        return Ok(match lang {
            LangArg::En => Locale::En,
            LangArg::Ca => Locale::Ca,
        });
    }
    if let Some(value) = env_lang {
        return Locale::parse(value).ok_or_else(|| {
            CliError::new(t!("i18n.lang.invalid_env", env = LANG_ENV, value = value))
        });
    }
    Ok(Locale::En)
}

/// Installs the stderr tracing subscriber.
///
/// Defaults to warnings only; `--debug` raises to debug and `--debug --debug`
/// to trace. `NETMGR_LOG` directives apply on top.
fn init_tracing(debug: u8) -> CliResult<()> {
    let mut env_filter = EnvFilter::builder()
        .with_default_directive(LevelFilter::WARN.into())
        .with_env_var(LOG_ENV)
        .from_env_lossy();
    if debug != 0 {
        env_filter = env_filter.add_directive(
            match debug {
                1 => LevelFilter::DEBUG,
                _ => LevelFilter::TRACE,
            }
            .into(),
        );
    }
    tracing_subscriber::registry()
        .with(fmt::Layer::default().compact().with_writer(std::io::stderr))
        .with(env_filter)
        .try_init()
        .map_err(|err| CliError::new(t!("logging.init_failed", error = err)))
}

// ============================================================================
// SECTION: Meta Commands
// ============================================================================

/// Prints the command catalog.
fn command_list(registry: &CommandRegistry, format: OutputFormat) -> CliResult<ExitCode> {
    let catalog = netmgr_contract::catalog(registry);
    write_document(&mut std::io::stdout(), &catalog, format)
        .map_err(|err| CliError::new(output_error("stdout", &err)))?;
    Ok(ExitCode::SUCCESS)
}

/// Prints the full descriptor of one command.
fn command_describe(
    registry: &CommandRegistry,
    matches: &ArgMatches,
    format: OutputFormat,
) -> CliResult<ExitCode> {
    let name = surface::describe_target(matches).unwrap_or_default();
    let spec = registry
        .get(name)
        .ok_or_else(|| CliError::new(t!("describe.unknown_command", name = name)))?;
    write_document(&mut std::io::stdout(), spec, format)
        .map_err(|err| CliError::new(output_error("stdout", &err)))?;
    Ok(ExitCode::SUCCESS)
}

// ============================================================================
// SECTION: Operations
// ============================================================================

/// Runs one operation subcommand, once or once per piped value.
async fn command_operation(
    globals: &GlobalArgs,
    spec: &CommandSpec,
    matches: &ArgMatches,
) -> CliResult<ExitCode> {
    let mut config = NetmgrConfig::load(globals.config.as_deref())
        .map_err(|err| CliError::new(t!("config.load_failed", error = err)))?;
    config
        .apply_overrides(globals.overrides())
        .map_err(|err| CliError::new(t!("config.load_failed", error = err)))?;

    let args = surface::operation_args(spec, matches);
    let inputs = if args.pipeline { read_stdin_pipeline()? } else { Vec::new() };
    let audit = open_audit_sink(&config.audit)?;
    let client = ServiceClient::new(&config.client)
        .map_err(|err| CliError::new(t!("client.init_failed", error = err)))?;

    let source = CancellationSource::new();
    let cancel = source.signal();
    let interrupt = tokio::spawn(async move {
        match tokio::signal::ctrl_c().await {
            Ok(()) => source.cancel(),
            Err(err) => tracing::warn!("{}", t!("signal.install_failed", error = err)),
        }
    });

    let confirmer = TerminalConfirmer;
    let format = config.output.format;
    let batch = Batch {
        command: spec,
        raw: args.raw,
        force: args.force,
        inputs: args.pipeline.then_some(inputs),
    };
    let status = tokio::task::block_in_place(|| {
        let dispatcher = Dispatcher::new(&client, &confirmer, &*audit, cancel);
        run_batch(&dispatcher, batch, format, &mut std::io::stdout(), &mut std::io::stderr())
    });
    interrupt.abort();
    let status = status.map_err(|err| CliError::new(output_error("output", &err)))?;
    Ok(ExitCode::from(status.exit_code()))
}

/// Reads piped values from stdin.
fn read_stdin_pipeline() -> CliResult<Vec<Value>> {
    read_pipeline(std::io::stdin().lock()).map_err(|err| {
        let message = match &err {
            PipelineError::TooLarge(limit) => t!("pipeline.too_large", limit = limit),
            PipelineError::Json(source) => t!("pipeline.parse_failed", error = source),
            PipelineError::Io(_) | PipelineError::NotUtf8 => {
                t!("pipeline.read_failed", error = err)
            }
        };
        CliError::new(message)
    })
}

/// Opens the configured audit sink.
fn open_audit_sink(config: &AuditConfig) -> CliResult<Box<dyn InvocationAuditSink>> {
    if !config.enabled {
        return Ok(Box::new(NoopAuditSink));
    }
    match &config.path {
        Some(path) => FileAuditSink::new(path)
            .map(|sink| Box::new(sink) as Box<dyn InvocationAuditSink>)
            .map_err(|err| {
                CliError::new(t!("audit.open_failed", path = path.display(), error = err))
            }),
        None => Ok(Box::new(StderrAuditSink)),
    }
}

// ============================================================================
// SECTION: Output Helpers
// ============================================================================

/// Prints top-level help.
fn show_help(registry: &CommandRegistry) -> CliResult<()> {
    surface::root_command(registry)
        .print_help()
        .map_err(|err| CliError::new(output_error("stdout", &err)))
}

/// Writes a single line to stdout.
fn write_stdout_line(message: &str) -> std::io::Result<()> {
    let mut stdout = std::io::stdout();
    writeln!(&mut stdout, "{message}")
}

/// Writes a single line to stderr.
fn write_stderr_line(message: &str) -> std::io::Result<()> {
    let mut stderr = std::io::stderr();
    writeln!(&mut stderr, "{message}")
}

/// Formats a localized output error message.
fn output_error(stream: &str, error: &std::io::Error) -> String {
    let stream_label = match stream {
        "stdout" => t!("output.stream.stdout"),
        "stderr" => t!("output.stream.stderr"),
        _ => t!("output.stream.unknown"),
    };
    t!("output.write_failed", stream = stream_label, error = error)
}

/// Emits an error message to stderr and returns a failure exit code.
fn emit_error(message: &str) -> ExitCode {
    let _ = write_stderr_line(message);
    ExitCode::FAILURE
}
