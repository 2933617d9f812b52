//! LSP type conversion utilities.
//!
//! Buffers are addressed by character offsets while LSP positions count
//! UTF-16 code units within a line.

use tower_lsp::lsp_types::{
    CodeDescription, Diagnostic, DiagnosticSeverity, Hover, HoverContents, MarkupContent,
    MarkupKind, NumberOrString, Position, Range, Url,
};

use valeside_core::{HoverReply, MappedAlert, Region, Severity, TextBuffer};

/// Diagnostic source reported to clients.
pub const DIAGNOSTIC_SOURCE: &str = "vale";

/// Converts a character offset to an LSP position.
pub fn point_to_position(buffer: &TextBuffer, point: usize) -> Position {
    let (row, col) = buffer.rowcol(point);
    let character: usize = buffer
        .line_text(row)
        .unwrap_or_default()
        .chars()
        .take(col)
        .map(char::len_utf16)
        .sum();
    Position::new(row as u32, character as u32)
}

/// Converts an LSP position to a character offset, clamping to the buffer.
pub fn position_to_point(buffer: &TextBuffer, position: Position) -> usize {
    let row = position.line as usize;
    let Some(line) = buffer.line_text(row) else {
        return buffer.size();
    };

    let mut units = 0usize;
    let mut col = 0usize;
    for ch in line.chars() {
        if units >= position.character as usize {
            break;
        }
        units += ch.len_utf16();
        col += 1;
    }
    buffer.text_point(row, col)
}

/// Converts a region to an LSP range.
pub fn region_to_range(buffer: &TextBuffer, region: Region) -> Range {
    Range::new(
        point_to_position(buffer, region.begin()),
        point_to_position(buffer, region.end()),
    )
}

/// Converts an LSP range to a region.
pub fn range_to_region(buffer: &TextBuffer, range: Range) -> Region {
    Region::new(
        position_to_point(buffer, range.start),
        position_to_point(buffer, range.end),
    )
}

/// Converts a mapped alert to an LSP diagnostic.
pub fn to_lsp_diagnostic(buffer: &TextBuffer, mapped: &MappedAlert) -> Diagnostic {
    let alert = &mapped.alert;
    let severity = match alert.severity {
        Severity::Error => DiagnosticSeverity::ERROR,
        Severity::Warning => DiagnosticSeverity::WARNING,
        Severity::Suggestion | Severity::Info => DiagnosticSeverity::INFORMATION,
    };

    Diagnostic {
        range: region_to_range(buffer, mapped.region),
        severity: Some(severity),
        code: Some(NumberOrString::String(alert.check.clone())),
        code_description: Url::parse(&alert.link)
            .ok()
            .map(|href| CodeDescription { href }),
        source: Some(DIAGNOSTIC_SOURCE.to_string()),
        message: alert.message.clone(),
        ..Default::default()
    }
}

/// Converts a hover reply to an LSP hover.
///
/// Popups carry the rendered HTML, which Markdown clients display inline.
pub fn to_lsp_hover(reply: HoverReply) -> Hover {
    let contents = match reply {
        HoverReply::Popup(popup) => MarkupContent {
            kind: MarkupKind::Markdown,
            value: popup.html,
        },
        HoverReply::Status(line) => MarkupContent {
            kind: MarkupKind::PlainText,
            value: line,
        },
    };
    Hover {
        contents: HoverContents::Markup(contents),
        range: None,
    }
}
