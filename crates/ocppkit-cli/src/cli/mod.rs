//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, aliases,
//! help text, and value enums.  No business logic lives here.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

pub mod global;
pub use global::GlobalArgs;

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name    = "ocppkit",
    bin_name = "ocppkit",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "\u{26a1} Check OCPP documents against a self-validating model",
    long_about = "ocppkit decodes OCPP message structures (Component, EVSE, \
                  ChargingSchedule, ...) and reports every constraint they break.",
    after_help = "EXAMPLES:\n\
        \x20 ocppkit check component.json\n\
        \x20 ocppkit check messages/ --kind schedule --fail-fast\n\
        \x20 ocppkit describe component\n\
        \x20 ocppkit sample charging-schedule > schedule.json",
    arg_required_else_help = true,
    subcommand_required    = true,
)]
pub struct Cli {
    /// Flags available on every subcommand.
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

// ── Subcommands ───────────────────────────────────────────────────────────────

/// All available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Validate documents.
    #[command(
        visible_alias = "c",
        about = "Validate JSON documents",
        after_help = "EXAMPLES:\n\
            \x20 ocppkit check component.json\n\
            \x20 ocppkit check a.json b.json --kind evse\n\
            \x20 ocppkit check messages/ --fail-fast --format json"
    )]
    Check(CheckArgs),

    /// List entity kinds.
    #[command(
        visible_alias = "ls",
        about = "List supported entity kinds",
        after_help = "EXAMPLES:\n\
            \x20 ocppkit kinds\n\
            \x20 ocppkit kinds --format json"
    )]
    Kinds(KindsArgs),

    /// Show the fields and constraints of one kind.
    #[command(
        about = "Describe an entity kind",
        after_help = "EXAMPLES:\n\
            \x20 ocppkit describe component\n\
            \x20 ocppkit describe period"
    )]
    Describe(DescribeArgs),

    /// Print a valid sample document.
    #[command(
        about = "Print a valid sample document",
        after_help = "EXAMPLES:\n\
            \x20 ocppkit sample component\n\
            \x20 ocppkit sample schedule --compact"
    )]
    Sample(SampleArgs),

    /// Initialise an ocppkit configuration file.
    #[command(
        about = "Initialise configuration",
        after_help = "EXAMPLES:\n\
            \x20 ocppkit init           # user config directory\n\
            \x20 ocppkit init --local   # .ocppkit.toml in CWD"
    )]
    Init(InitArgs),

    /// Manage the ocppkit configuration.
    #[command(
        about = "Configuration management",
        subcommand,
        after_help = "EXAMPLES:\n\
            \x20 ocppkit config get check.default_kind\n\
            \x20 ocppkit config list\n\
            \x20 ocppkit config path"
    )]
    Config(ConfigCommands),

    /// Generate shell completion scripts.
    #[command(
        about = "Generate shell completions",
        after_help = "EXAMPLES:\n\
            \x20 ocppkit completions bash > ~/.local/share/bash-completion/completions/ocppkit\n\
            \x20 ocppkit completions zsh  > ~/.zfunc/_ocppkit"
    )]
    Completions(CompletionsArgs),
}

// ── check ─────────────────────────────────────────────────────────────────────

/// Arguments for `ocppkit check`.
#[derive(Debug, Args)]
pub struct CheckArgs {
    /// Files or directories; directories are searched for `*.json`.
    #[arg(value_name = "PATH", required = true, num_args = 1..)]
    pub paths: Vec<PathBuf>,

    /// Entity kind of every document (default: `check.default_kind`).
    #[arg(short = 'k', long = "kind", value_name = "KIND")]
    pub kind: Option<String>,

    /// Stop at the first document that is not valid.
    #[arg(long = "fail-fast", help = "Stop at the first invalid document")]
    pub fail_fast: bool,

    /// Print each decoded entity's diagnostic rendering.
    #[arg(long = "render", help = "Show the decoded entity for each document")]
    pub render: bool,

    /// Output format (default: `check.format`).
    #[arg(long = "format", value_enum, help = "Output format")]
    pub format: Option<CheckFormat>,
}

/// Output format for the `check` command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum CheckFormat {
    /// One line per document plus its violations.
    Human,
    /// JSON array of reports.
    Json,
}

// ── kinds ─────────────────────────────────────────────────────────────────────

/// Arguments for `ocppkit kinds`.
#[derive(Debug, Args)]
pub struct KindsArgs {
    /// Output format.
    #[arg(
        long = "format",
        value_enum,
        default_value = "table",
        help = "Output format"
    )]
    pub format: KindsFormat,
}

/// Output format for the `kinds` command.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum KindsFormat {
    /// Human-readable table.
    Table,
    /// One kind per line.
    List,
    /// JSON array.
    Json,
}

// ── describe / sample ─────────────────────────────────────────────────────────

/// Arguments for `ocppkit describe`.
#[derive(Debug, Args)]
pub struct DescribeArgs {
    /// Entity kind, e.g. `component` or `charging-schedule`.
    #[arg(value_name = "KIND")]
    pub kind: String,
}

/// Arguments for `ocppkit sample`.
#[derive(Debug, Args)]
pub struct SampleArgs {
    /// Entity kind, e.g. `component` or `charging-schedule`.
    #[arg(value_name = "KIND")]
    pub kind: String,

    /// Single-line JSON regardless of `codec.pretty`.
    #[arg(long = "compact", help = "Print compact JSON")]
    pub compact: bool,
}

// ── init ──────────────────────────────────────────────────────────────────────

/// Arguments for `ocppkit init`.
#[derive(Debug, Args)]
pub struct InitArgs {
    /// Write `.ocppkit.toml` in the current directory.
    #[arg(
        long = "local",
        help = "Create local configuration in current directory"
    )]
    pub local: bool,

    /// Overwrite an existing config file.
    #[arg(short = 'f', long = "force", help = "Overwrite existing configuration")]
    pub force: bool,
}

// ── completions ───────────────────────────────────────────────────────────────

/// Arguments for `ocppkit completions`.
#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Target shell.
    #[arg(value_enum, help = "Shell to generate completions for")]
    pub shell: Shell,
}

/// Supported shells for completion generation.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
    Elvish,
}

// ── config subcommands ────────────────────────────────────────────────────────

/// Subcommands for `ocppkit config`.
#[derive(Debug, Subcommand)]
pub enum ConfigCommands {
    /// Print the value of a configuration key.
    Get {
        /// Dotted key path, e.g. `check.default_kind`.
        key: String,
    },
    /// Print all configuration values.
    List,
    /// Print the path to the active configuration file.
    Path,
}

// ── tests ─────────────────────────────────────────────────────────────────────
