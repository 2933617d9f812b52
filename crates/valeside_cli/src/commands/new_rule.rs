//! New-rule command implementation

use miette::{IntoDiagnostic, Result};
use valeside_core::ValeContext;

use crate::cli::Cli;
use crate::load_settings;

pub fn run_new_rule(cli: &Cli, point: &str) -> Result<()> {
    let cwd = std::env::current_dir().into_diagnostic()?;
    let context = ValeContext::new(load_settings(cli, Some(&cwd))?).into_diagnostic()?;
    let template = context.new_rule(point).into_diagnostic()?;
    print!("{}", template);
    Ok(())
}
