//! `goscaff`: generate production-ready Go services.
//!
//! Exit status is 0 on success, 2 for bad input, 3 when something named
//! does not exist, 4 for configuration problems and 1 otherwise.

mod cli;
mod commands;
mod config;
mod error;
mod logging;
mod output;

use std::io::IsTerminal as _;
use std::process::ExitCode;

use clap::Parser;
use tracing::{debug, info, instrument};

use crate::{
    cli::{Cli, Commands},
    config::AppConfig,
    error::{CliError, CliResult},
    logging::init_logging,
    output::OutputManager,
};

fn main() -> ExitCode {
    let _ = dotenvy::dotenv();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        // --help and --version also land here, on stdout.
        Err(e) => {
            let _ = e.print();
            return ExitCode::from(if e.use_stderr() { 2 } else { 0 });
        }
    };

    // Flushes --log-file on drop.
    let _log_guard = match init_logging(&cli.global) {
        Ok(guard) => guard,
        Err(e) => {
            eprintln!("goscaff: cannot set up logging: {e:#}");
            return ExitCode::from(1);
        }
    };

    let verbose = cli.global.verbose > 0;
    let config = match AppConfig::load(cli.global.config.as_ref()) {
        Ok(config) => config,
        Err(e) => return report(CliError::from(e), verbose),
    };
    debug!(?config, "configuration loaded");

    let output = OutputManager::new(&cli.global, &config);
    match run(cli, config, output) {
        Ok(()) => {
            info!("done");
            ExitCode::SUCCESS
        }
        Err(e) => report(e, verbose),
    }
}

#[instrument(skip_all)]
fn run(cli: Cli, config: AppConfig, output: OutputManager) -> CliResult<()> {
    match cli.command {
        Commands::New(cmd) => commands::new::execute(cmd, cli.global, config, output),
        Commands::Version => commands::version::execute(output),
        Commands::Init(cmd) => commands::init::execute(cmd, output),
        Commands::Completions(cmd) => commands::completions::execute(cmd),
        Commands::Config(cmd) => commands::config::execute(cmd, config, output),
    }
}

/// Logs `err`, prints the report on stderr and picks the exit status.
fn report(err: CliError, verbose: bool) -> ExitCode {
    err.log();

    eprint!("{}", err.render(verbose, std::io::stderr().is_terminal()));

    ExitCode::from(err.exit_code())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn command_metadata_comes_from_the_manifest() {
        let cmd = Cli::command();
        assert_eq!(cmd.get_name(), "goscaff");
        assert_eq!(cmd.get_version(), Some(env!("CARGO_PKG_VERSION")));
    }

    #[test]
    fn every_subcommand_is_dispatched() {
        let names: Vec<_> = Cli::command()
            .get_subcommands()
            .map(|c| c.get_name().to_owned())
            .collect();
        assert_eq!(names, ["new", "version", "init", "completions", "config"]);
    }
}
