//! Text output formatter

use std::path::Path;

use valeside_core::{MappedAlert, Severity, TextBuffer};

use super::line_col;

pub fn output_text(path: &Path, buffer: &TextBuffer, alerts: &[MappedAlert]) {
    if !alerts.is_empty() {
        println!("\n{}:", path.display());
        for mapped in alerts {
            let (line, column) = line_col(buffer, mapped.region.begin());
            let alert = &mapped.alert;
            println!(
                "  {}:{} {} [{}]: {}",
                line, column, alert.severity, alert.check, alert.message
            );
        }
    }

    let errors = alerts
        .iter()
        .filter(|a| a.severity() == Severity::Error)
        .count();
    println!();
    println!("Found {} alerts ({} errors)", alerts.len(), errors);
}
