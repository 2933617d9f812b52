//! Init command implementation

use std::io::Write;
use std::path::Path;

use miette::{IntoDiagnostic, Result};
use tracing::info;
use valeside_core::ValeSettings;

const DEFAULT_SETTINGS: &str = r#"{
  // Path or name of the vale executable.
  "vale_binary": "vale",
  // When to lint: "off", "background", "load_and_save" or "save".
  "vale_mode": "load_and_save",
  // Files with more lines than this are linted one paragraph at a time.
  // 0 disables the limit.
  "vale_threshold": 0,
  // "hover_popup" or "hover_status_bar".
  "vale_alert_location": "hover_popup"
}
"#;

pub fn run_init(force: bool) -> Result<()> {
    write_settings(Path::new(ValeSettings::CONFIG_FILES[0]), force)
}

/// Writes the default settings to `target`.
///
/// The content goes to a temporary file next to `target` which is then
/// renamed into place. A symlink at `target` is replaced, never followed.
fn write_settings(target: &Path, force: bool) -> Result<()> {
    let dir = match target.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut staged = tempfile::Builder::new()
        .prefix(".valeside-init")
        .tempfile_in(dir)
        .into_diagnostic()?;
    staged
        .write_all(DEFAULT_SETTINGS.as_bytes())
        .into_diagnostic()?;

    let persisted = if force {
        staged.persist(target)
    } else {
        staged.persist_noclobber(target)
    };
    match persisted {
        Ok(_) => {
            info!("Created {}", target.display());
            Ok(())
        }
        Err(e) if e.error.kind() == std::io::ErrorKind::AlreadyExists => Err(miette::miette!(
            "{} already exists. Use --force to overwrite.",
            target.display()
        )),
        Err(e) => Err(e.error).into_diagnostic(),
    }
}
