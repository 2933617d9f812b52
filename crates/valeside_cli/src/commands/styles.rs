//! Styles command implementation

use std::path::Path;

use miette::{IntoDiagnostic, Result};
use valeside_core::ValeContext;

use crate::cli::Cli;
use crate::load_settings;

pub fn run_styles(cli: &Cli, style: Option<&str>, dir: Option<&Path>) -> Result<()> {
    let dir = match dir {
        Some(dir) => dir.to_path_buf(),
        None => std::env::current_dir().into_diagnostic()?,
    };
    let context = ValeContext::new(load_settings(cli, Some(&dir))?).into_diagnostic()?;

    match style {
        Some(style) => {
            for rule in context.list_rules(Some(&dir), style).into_diagnostic()? {
                println!("{}", rule.display());
            }
        }
        None => {
            for name in context.list_styles(Some(&dir)).into_diagnostic()? {
                println!("{}", name);
            }
        }
    }
    Ok(())
}
