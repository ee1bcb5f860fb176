//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, aliases
//! and help text.  Choice values (framework, logger, ...) are kept as strings
//! here and parsed by the core value objects, so the accepted spellings and
//! error messages live in one place.

use std::path::PathBuf;

use clap::{ArgAction, Args, Parser, Subcommand, ValueEnum};

pub mod global;
pub use global::{GlobalArgs, OutputFormat};

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name    = "goscaff",
    bin_name = "goscaff",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "\u{26a1} Production-ready Go service scaffolding",
    long_about = "goscaff generates runnable Go microservices: HTTP server, \
                  configuration, storage clients, observability, Docker and CI.",
    after_help = "EXAMPLES:\n\
        \x20 goscaff new order-api\n\
        \x20 goscaff new order-api --framework chi --database postgres,redis\n\
        \x20 goscaff new billing --config-format yaml --ci github --dry-run\n\
        \x20 goscaff completions bash > /usr/share/bash-completion/completions/goscaff",
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
    /// Generate a new Go service.
    #[command(
        visible_alias = "n",
        about = "Create a new Go service",
        after_help = "EXAMPLES:\n\
            \x20 goscaff new order-api --yes\n\
            \x20 goscaff new order-api -f gin -d postgres -d redis -l zap\n\
            \x20 goscaff new order-api --config-format toml --tracing false\n\
            \x20 goscaff new order-api -o ~/src --module github.com/acme/order-api"
    )]
    New(NewArgs),

    /// Show the version and every supported choice.
    #[command(about = "Show version and supported choices")]
    Version,

    /// Initialise a goscaff configuration file.
    #[command(
        about = "Initialise configuration",
        after_help = "EXAMPLES:\n\
            \x20 goscaff init           # user config directory\n\
            \x20 goscaff init --local   # .goscaff.toml in the current directory"
    )]
    Init(InitArgs),

    /// Generate shell completion scripts.
    #[command(
        about = "Generate shell completions",
        after_help = "EXAMPLES:\n\
            \x20 goscaff completions bash > ~/.local/share/bash-completion/completions/goscaff\n\
            \x20 goscaff completions zsh  > ~/.zfunc/_goscaff\n\
            \x20 goscaff completions fish > ~/.config/fish/completions/goscaff.fish"
    )]
    Completions(CompletionsArgs),

    /// Inspect the goscaff configuration.
    #[command(
        about = "Configuration management",
        subcommand,
        after_help = "EXAMPLES:\n\
            \x20 goscaff config get defaults.framework\n\
            \x20 goscaff config list\n\
            \x20 goscaff config path"
    )]
    Config(ConfigCommands),
}

// ── new ───────────────────────────────────────────────────────────────────────

/// Arguments for `goscaff new`.
///
/// Every selection flag is optional; an omitted flag falls back to the
/// `[defaults]` section of the app config.
#[derive(Debug, Clone, Default, Args)]
pub struct NewArgs {
    /// Project name; becomes the directory and the binary name.
    #[arg(value_name = "NAME", help = "Project name (lowercase, digits, '-' or '_')")]
    pub name: String,

    #[arg(
        short = 'o',
        long = "output",
        value_name = "DIR",
        help = "Directory to create the project in [default: .]"
    )]
    pub output: Option<PathBuf>,

    #[arg(
        short = 'm',
        long = "module",
        value_name = "PATH",
        help = "Go module path [default: github.com/user/<NAME>]"
    )]
    pub module: Option<String>,

    #[arg(
        long = "go-version",
        value_name = "VERSION",
        help = "Go version: 1.21, 1.22, 1.23, 1.24 [default: 1.23]"
    )]
    pub go_version: Option<String>,

    #[arg(
        short = 'f',
        long = "framework",
        value_name = "FRAMEWORK",
        help = "HTTP framework: stdlib, chi, gin, echo, fiber [default: stdlib]"
    )]
    pub framework: Option<String>,

    /// Repeat the flag or pass a comma separated list.
    #[arg(
        short = 'd',
        long = "database",
        value_name = "DB",
        value_delimiter = ',',
        action = ArgAction::Append,
        help = "Storage: postgres, mysql, mongodb, redis (repeatable)"
    )]
    pub databases: Vec<String>,

    #[arg(
        short = 'l',
        long = "logger",
        value_name = "LOGGER",
        help = "Logger: slog, zap, zerolog [default: slog]"
    )]
    pub logger: Option<String>,

    #[arg(
        long = "config-format",
        value_name = "FORMAT",
        help = "Runtime config format: env, yaml, json, toml [default: env]"
    )]
    pub config_format: Option<String>,

    /// `none` disables CI even when the app config selects a provider.
    #[arg(
        long = "ci",
        value_name = "PROVIDER",
        help = "CI pipeline: github, gitlab, none [default: none]"
    )]
    pub ci: Option<String>,

    #[arg(
        long = "tracing",
        value_name = "BOOL",
        num_args = 0..=1,
        default_missing_value = "true",
        help = "Generate OpenTelemetry tracing [default: true]"
    )]
    pub tracing: Option<bool>,

    #[arg(
        long = "metrics",
        value_name = "BOOL",
        num_args = 0..=1,
        default_missing_value = "true",
        help = "Generate Prometheus metrics [default: true]"
    )]
    pub metrics: Option<bool>,

    #[arg(
        long = "docker",
        value_name = "BOOL",
        num_args = 0..=1,
        default_missing_value = "true",
        help = "Generate Dockerfile and docker-compose.yml [default: true]"
    )]
    pub docker: Option<bool>,

    #[arg(
        long = "env-sample",
        value_name = "BOOL",
        num_args = 0..=1,
        default_missing_value = "true",
        help = "Document every variable in .env.example [default: true]"
    )]
    pub env_sample: Option<bool>,

    /// Preview what would be created without writing any files.
    #[arg(long = "dry-run", help = "Show what would be created without creating")]
    pub dry_run: bool,

    /// Skip the confirmation prompt.
    #[arg(
        short = 'y',
        long = "yes",
        help = "Skip confirmation and create immediately"
    )]
    pub yes: bool,

    /// Write into an existing project directory.
    #[arg(long = "force", help = "Overwrite files in an existing directory")]
    pub force: bool,
}

// ── init ──────────────────────────────────────────────────────────────────────

/// Arguments for `goscaff init`.
#[derive(Debug, Args)]
pub struct InitArgs {
    /// Write to `.goscaff.toml` in the current directory.
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

/// Arguments for `goscaff completions`.
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

/// Subcommands for `goscaff config`.
#[derive(Debug, Subcommand)]
pub enum ConfigCommands {
    /// Print the value of a configuration key.
    Get {
        /// Dotted key path, e.g. `defaults.framework`.
        key: String,
    },
    /// Print all configuration values.
    List,
    /// Print the path to the active configuration file.
    Path,
}

// ── tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use clap::{CommandFactory, Parser};

    fn new_args(argv: &[&str]) -> NewArgs {
        let mut full = vec!["goscaff", "new"];
        full.extend_from_slice(argv);
        match Cli::parse_from(full).command {
            Commands::New(args) => args,
            other => panic!("expected New command, got {other:?}"),
        }
    }

    #[test]
    fn verify_cli_structure() {
        Cli::command().debug_assert();
    }

    #[test]
    fn bare_new_leaves_every_choice_to_config() {
        let args = new_args(&["order-api"]);
        assert_eq!(args.name, "order-api");
        assert!(args.framework.is_none());
        assert!(args.databases.is_empty());
        assert!(args.tracing.is_none());
        assert!(!args.dry_run);
    }

    #[test]
    fn databases_accept_repeats_and_commas() {
        let args = new_args(&["svc", "-d", "postgres,redis", "--database", "mongodb"]);
        assert_eq!(args.databases, ["postgres", "redis", "mongodb"]);
    }

    #[test]
    fn feature_toggles_take_optional_values() {
        let args = new_args(&["svc", "--tracing", "false", "--docker", "--metrics=false"]);
        assert_eq!(args.tracing, Some(false));
        assert_eq!(args.docker, Some(true));
        assert_eq!(args.metrics, Some(false));
        assert_eq!(args.env_sample, None);
    }

    #[test]
    fn short_flags_map_to_selections() {
        let args = new_args(&["svc", "-f", "chi", "-l", "zap", "-m", "example.com/x/svc", "-y"]);
        assert_eq!(args.framework.as_deref(), Some("chi"));
        assert_eq!(args.logger.as_deref(), Some("zap"));
        assert_eq!(args.module.as_deref(), Some("example.com/x/svc"));
        assert!(args.yes);
    }

    #[test]
    fn new_alias_is_accepted() {
        let cli = Cli::parse_from(["goscaff", "n", "svc"]);
        assert!(matches!(cli.command, Commands::New(_)));
    }

    #[test]
    fn quiet_and_verbose_conflict() {
        let result = Cli::try_parse_from(["goscaff", "--quiet", "--verbose", "version"]);
        assert!(result.is_err());
    }

    #[test]
    fn config_get_takes_a_key() {
        let cli = Cli::parse_from(["goscaff", "config", "get", "defaults.logger"]);
        assert!(matches!(
            cli.command,
            Commands::Config(ConfigCommands::Get { ref key }) if key == "defaults.logger"
        ));
    }
}
