//! Alert records decoded from Vale's JSON output.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::ValeError;
use crate::region::{Region, ViewId};

/// Severity level reported by Vale.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Error - must be fixed.
    Error,
    /// Warning - should be reviewed.
    Warning,
    /// Suggestion - optional improvement.
    Suggestion,
    /// Info, or anything Vale adds later.
    #[default]
    #[serde(other)]
    Info,
}

impl Severity {
    /// Lower-case name, as Vale spells it.
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Error => "error",
            Severity::Warning => "warning",
            Severity::Suggestion => "suggestion",
            Severity::Info => "info",
        }
    }

    /// Capitalised name used in popup headers.
    pub fn label(&self) -> &'static str {
        match self {
            Severity::Error => "Error",
            Severity::Warning => "Warning",
            Severity::Suggestion => "Suggestion",
            Severity::Info => "Info",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One finding reported by Vale.
///
/// `line` and `span` are 1-based and relative to the text that was piped to
/// Vale, which may be a single paragraph rather than the whole buffer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Alert {
    pub line: usize,
    /// Start and end columns; the end column is inclusive.
    pub span: [usize; 2],
    pub severity: Severity,
    pub message: String,
    /// Empty when the rule has no description.
    #[serde(default)]
    pub description: String,
    pub check: String,
    /// Empty when the rule has no documentation link.
    #[serde(default)]
    pub link: String,
}

/// Vale's response: alerts grouped by file identifier.
pub type AlertMap = BTreeMap<String, Vec<Alert>>;

/// Parses the output of `vale --output=JSON`.
///
/// Empty or malformed output is a decode error.
pub fn decode_alerts(output: &str) -> Result<AlertMap, ValeError> {
    serde_json::from_str(output).map_err(|e| ValeError::decode(e.to_string()))
}

/// An alert placed on a view, ready for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MappedAlert {
    pub alert: Alert,
    pub region: Region,
    pub view: ViewId,
    /// Popup markup rendered from the severity's template.
    pub html: String,
}

impl MappedAlert {
    pub fn severity(&self) -> Severity {
        self.alert.severity
    }

    /// The one-line summary shown in the status bar.
    pub fn status_line(&self) -> String {
        format!("vale:{}:{}", self.alert.severity, self.alert.message)
    }
}
