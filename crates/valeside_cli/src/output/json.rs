//! JSON output formatter

use miette::{IntoDiagnostic, Result};
use serde::Serialize;
use valeside_core::{MappedAlert, Severity, TextBuffer};

use super::line_col;

#[derive(Serialize)]
struct JsonAlert<'a> {
    line: usize,
    column: usize,
    end_line: usize,
    end_column: usize,
    severity: Severity,
    check: &'a str,
    message: &'a str,
    #[serde(skip_serializing_if = "str::is_empty")]
    description: &'a str,
    #[serde(skip_serializing_if = "str::is_empty")]
    link: &'a str,
}

pub fn output_json(buffer: &TextBuffer, alerts: &[MappedAlert]) -> Result<()> {
    let output: Vec<_> = alerts
        .iter()
        .map(|mapped| {
            let (line, column) = line_col(buffer, mapped.region.begin());
            let (end_line, end_column) = line_col(buffer, mapped.region.end());
            let alert = &mapped.alert;
            JsonAlert {
                line,
                column,
                end_line,
                end_column,
                severity: alert.severity,
                check: &alert.check,
                message: &alert.message,
                description: &alert.description,
                link: &alert.link,
            }
        })
        .collect();
    println!(
        "{}",
        serde_json::to_string_pretty(&output).into_diagnostic()?
    );
    Ok(())
}
