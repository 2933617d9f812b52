//! Lint command implementation

use std::fs;
use std::path::{Path, PathBuf};

use miette::{IntoDiagnostic, Result};
use thiserror::Error;
use tracing::{debug, info};
use valeside_core::{
    BufferView, CycleOutcome, RecordingHost, Severity, ValeContext, View, ViewId,
};

use crate::cli::{Cli, OutputFormat};
use crate::load_settings;
use crate::output::output_alerts;

#[derive(Debug, Error)]
enum LintCommandError {
    #[error("Failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Syntax '{0}' is not linted; add it to vale_syntaxes")]
    UnsupportedSyntax(String),
}

pub fn run_lint(
    cli: &Cli,
    file: &Path,
    caret: Option<usize>,
    from_load: bool,
    format: OutputFormat,
) -> Result<bool> {
    let path = std::path::absolute(file).into_diagnostic()?;
    let text = fs::read_to_string(&path)
        .map_err(|source| LintCommandError::Read {
            path: path.clone(),
            source,
        })
        .into_diagnostic()?;

    let settings = load_settings(cli, path.parent())?;
    let syntax = syntax_for(&path);
    if !settings.is_supported(&syntax) {
        return Err(LintCommandError::UnsupportedSyntax(syntax)).into_diagnostic();
    }

    let context = ValeContext::new(settings).into_diagnostic()?;
    let mut view = BufferView::new(ViewId(1), text)
        .with_path(path.clone())
        .with_syntax(syntax);
    if let Some(line) = caret {
        let point = view.buffer().text_point(line.saturating_sub(1), 0);
        view.set_caret(point);
    }

    let host = RecordingHost::new();
    let outcome = context.run_lint(&view, &host, from_load).into_diagnostic()?;
    debug!("Lint cycle finished: {:?}", outcome);
    if outcome == CycleOutcome::Discarded {
        info!("Only the caret's paragraph was checked; results are not shown on load");
    }

    let alerts = context.registry().alerts_for(view.id());
    output_alerts(&path, view.buffer(), &alerts, format)?;

    Ok(alerts.iter().any(|a| a.severity() == Severity::Error))
}

/// Maps a file extension to the syntax name an editor would report.
fn syntax_for(path: &Path) -> String {
    let ext = path
        .extension()
        .map(|e| e.to_string_lossy().to_lowercase())
        .unwrap_or_default();
    match ext.as_str() {
        "md" | "markdown" | "mdown" | "mkd" => "Markdown".to_string(),
        "txt" | "text" => "Plain Text".to_string(),
        "rst" | "rest" => "reStructuredText".to_string(),
        "adoc" | "asciidoc" | "asc" => "AsciiDoc".to_string(),
        "html" | "htm" => "HTML".to_string(),
        _ => ext,
    }
}
