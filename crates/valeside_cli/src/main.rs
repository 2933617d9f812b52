//! valeside CLI
//!
//! Runs Vale over a file, serves the LSP front end and manages styles.

mod cli;
mod commands;
mod output;

use std::process::ExitCode;

use clap::Parser;
use miette::{IntoDiagnostic, Result};
use tracing::error;
use tracing_subscriber::EnvFilter;

use valeside_core::ValeSettings;

use crate::cli::{Cli, Commands};

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.verbose || debug_requested(&cli) {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    match run(&cli) {
        Ok(has_errors) => {
            if has_errors {
                ExitCode::from(1)
            } else {
                ExitCode::SUCCESS
            }
        }
        Err(e) => {
            error!("{:?}", e);
            ExitCode::from(2)
        }
    }
}

fn run(cli: &Cli) -> Result<bool> {
    match &cli.command {
        Commands::Lint {
            file,
            caret,
            from_load,
            format,
        } => commands::run_lint(cli, file, *caret, *from_load, *format),
        Commands::Lsp => commands::run_lsp().map(|_| false),
        Commands::NewRule { point } => commands::run_new_rule(cli, point).map(|_| false),
        Commands::Styles { style, dir } => {
            commands::run_styles(cli, style.as_deref(), dir.as_deref()).map(|_| false)
        }
        Commands::Init { force } => commands::run_init(*force).map(|_| false),
    }
}

/// Whether the settings that apply to the working directory turn on debug
/// logging. Unreadable settings are reported by the command itself.
fn debug_requested(cli: &Cli) -> bool {
    let cwd = std::env::current_dir().ok();
    load_settings(cli, cwd.as_deref())
        .map(|settings| settings.vale_debug)
        .unwrap_or(false)
}

/// Loads the settings named on the command line, or the ones that apply to
/// `dir`.
pub(crate) fn load_settings(cli: &Cli, dir: Option<&std::path::Path>) -> Result<ValeSettings> {
    match &cli.settings {
        Some(path) => ValeSettings::from_file(path).into_diagnostic(),
        None => ValeSettings::resolve(dir).into_diagnostic(),
    }
}
