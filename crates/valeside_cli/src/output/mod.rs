//! Output formatting module

mod json;
mod text;

use std::path::Path;

use miette::Result;
use valeside_core::{MappedAlert, TextBuffer};

use crate::cli::OutputFormat;

pub fn output_alerts(
    path: &Path,
    buffer: &TextBuffer,
    alerts: &[MappedAlert],
    format: OutputFormat,
) -> Result<()> {
    match format {
        OutputFormat::Json => json::output_json(buffer, alerts)?,
        OutputFormat::Text => text::output_text(path, buffer, alerts),
    }
    Ok(())
}

/// 1-based line and column of `point`.
fn line_col(buffer: &TextBuffer, point: usize) -> (usize, usize) {
    let (row, col) = buffer.rowcol(point);
    (row + 1, col + 1)
}
