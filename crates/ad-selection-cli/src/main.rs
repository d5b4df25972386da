// crates/ad-selection-cli/src/main.rs
// ============================================================================
// Module: Ad Selection CLI Entry Point
// Description: Command dispatcher for local ad selection and config checks.
// Purpose: Run selection against catalog fixtures from the command line.
// Dependencies: ad-selection-config, ad-selection-core, clap, serde_json, thiserror
// ============================================================================

//! ## Overview
//! `ad-select` loads configuration and a catalog fixture, seeds in-memory
//! stores, and prints the selected advertisement as JSON. Audit events go to
//! the configured sink; errors go to stderr with a failing exit code.

// ============================================================================
// SECTION: Modules
// ============================================================================


// ============================================================================
// SECTION: Imports
// ============================================================================

use std::io::Write;
use std::path::PathBuf;
use std::process::ExitCode;

use ad_selection_config::AdSelectionConfig;
use ad_selection_config::Catalog;
use ad_selection_core::LogicMode;
use clap::Args;
use clap::Parser;
use clap::Subcommand;
use clap::ValueEnum;
use thiserror::Error;

// ============================================================================
// SECTION: CLI Types
// ============================================================================

/// Top-level CLI definition.
#[derive(Parser, Debug)]
#[command(name = "ad-select", version, disable_help_subcommand = true)]
struct Cli {
    /// Selected subcommand to execute.
    #[command(subcommand)]
    command: Commands,
}

/// Supported CLI subcommands.
#[derive(Subcommand, Debug)]
enum Commands {
    /// Select the advertisement for one request.
    Select(SelectCommand),
    /// Configuration utilities.
    Config {
        /// Selected config subcommand.
        #[command(subcommand)]
        command: ConfigCommand,
    },
}

/// Config subcommands.
#[derive(Subcommand, Debug)]
enum ConfigCommand {
    /// Validate an ad selection configuration file and its catalog.
    Validate(ConfigValidateCommand),
}

/// Arguments for a selection run.
#[derive(Args, Debug)]
struct SelectCommand {
    /// Marketplace the request comes from.
    #[arg(long, value_name = "ID")]
    marketplace: Option<String>,
    /// Customer making the request (omit for an unrecognized customer).
    #[arg(long, value_name = "ID")]
    customer: Option<String>,
    /// Optional config file path (defaults to ad-selection.toml or env override).
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,
    /// Catalog fixture path (overrides `catalog.path`).
    #[arg(long, value_name = "PATH")]
    catalog: Option<PathBuf>,
    /// Logic mode override.
    #[arg(long, value_enum, value_name = "MODE")]
    logic: Option<LogicArg>,
    /// Print every group evaluation alongside the selection.
    #[arg(long)]
    report: bool,
}

/// Arguments for config validation.
#[derive(Args, Debug)]
struct ConfigValidateCommand {
    /// Optional config file path (defaults to ad-selection.toml or env override).
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,
}

/// Logic mode arguments.
#[derive(ValueEnum, Copy, Clone, Debug, PartialEq, Eq)]
enum LogicArg {
    /// Indeterminate verdicts block eligibility.
    Strict,
    /// Only false verdicts block eligibility.
    Permissive,
}

impl From<LogicArg> for LogicMode {
    fn from(value: LogicArg) -> Self {
        match value {
            LogicArg::Strict => Self::Strict,
            LogicArg::Permissive => Self::Permissive,
        }
    }
}

// ============================================================================
// SECTION: Errors
// ============================================================================

/// CLI error wrapper for user-facing messages.
#[derive(Debug, Error)]
#[error("{message}")]
struct CliError {
    /// Human-readable error message.
    message: String,
}

impl CliError {
    /// Constructs a new [`CliError`].
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
fn main() -> ExitCode {
    match run(Cli::parse()) {
        Ok(code) => code,
        Err(err) => emit_error(&err.to_string()),
    }
}

/// Executes the CLI command dispatcher.
fn run(cli: Cli) -> CliResult<ExitCode> {
    let output = match cli.command {
        Commands::Select(command) => command_select(&command)?,
        Commands::Config {
            command: ConfigCommand::Validate(command),
        } => command_config_validate(&command)?,
    };
    write_stdout_line(&output)
        .map_err(|err| CliError::new(format!("failed to write stdout: {err}")))?;
    Ok(ExitCode::SUCCESS)
}

// ============================================================================
// SECTION: Select Command
// ============================================================================

/// Executes the `select` command and returns its JSON output.
fn command_select(command: &SelectCommand) -> CliResult<String> {
    let config = AdSelectionConfig::load_or_default(command.config.as_deref())
        .map_err(|err| CliError::new(format!("failed to load config: {err}")))?;
    let mut selector_config = config.selector_config();
    if let Some(logic) = command.logic {
        selector_config.logic_mode = logic.into();
    }

    let catalog_path = command.catalog.clone().or_else(|| config.catalog_path()).ok_or_else(|| {
        CliError::new("no catalog configured; pass --catalog or set catalog.path".to_string())
    })?;
    let stores = Catalog::load(&catalog_path)
        .and_then(Catalog::into_stores)
        .map_err(|err| CliError::new(format!("failed to load catalog: {err}")))?;
    let audit = config
        .audit_sink()
        .map_err(|err| CliError::new(format!("failed to open audit sink: {err}")))?;
    let selector = stores.into_selector(selector_config).with_audit_sink(audit);

    let customer = command.customer.as_deref();
    let marketplace = command.marketplace.as_deref();
    let rendered = if command.report {
        let report = selector
            .select_with_report(customer, marketplace)
            .map_err(|err| CliError::new(err.to_string()))?;
        serde_json::to_string_pretty(&report)
    } else {
        let advertisement = selector
            .select_advertisement(customer, marketplace)
            .map_err(|err| CliError::new(err.to_string()))?;
        serde_json::to_string_pretty(&advertisement)
    };
    rendered.map_err(|err| CliError::new(format!("failed to render output: {err}")))
}

// ============================================================================
// SECTION: Config Command
// ============================================================================

/// Executes `config validate` and returns its summary line.
fn command_config_validate(command: &ConfigValidateCommand) -> CliResult<String> {
    let config = AdSelectionConfig::load(command.config.as_deref())
        .map_err(|err| CliError::new(format!("failed to load config: {err}")))?;
    let Some(catalog_path) = config.catalog_path() else {
        return Ok(format!("config ok (logic_mode={})", config.selection.logic_mode));
    };
    let catalog = Catalog::load(&catalog_path)
        .map_err(|err| CliError::new(format!("failed to load catalog: {err}")))?;
    Ok(format!(
        "config ok (logic_mode={}, contents={}, targeting_groups={}, spend_records={})",
        config.selection.logic_mode,
        catalog.contents.len(),
        catalog.targeting_groups.len(),
        catalog.spend.len()
    ))
}

// ============================================================================
// SECTION: Output Helpers
// ============================================================================

/// Writes a line to stdout.
fn write_stdout_line(message: &str) -> std::io::Result<()> {
    let mut stdout = std::io::stdout();
    writeln!(&mut stdout, "{message}")
}

/// Writes a line to stderr.
fn write_stderr_line(message: &str) -> std::io::Result<()> {
    let mut stderr = std::io::stderr();
    writeln!(&mut stderr, "{message}")
}

/// Emits an error message to stderr and returns a failure exit code.
fn emit_error(message: &str) -> ExitCode {
    let _ = write_stderr_line(message);
    ExitCode::FAILURE
}
