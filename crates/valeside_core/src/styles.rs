//! Style and rule discovery.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use walkdir::WalkDir;

use crate::ValeError;

/// Rule kinds accepted by `vale new`.
pub const EXTENSION_POINTS: &[&str] = &[
    "conditional",
    "consistency",
    "existence",
    "occurrence",
    "repetition",
    "substitution",
];

/// The subset of `vale ls-config` output used here.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ValeConfig {
    #[serde(rename = "StylesPath", default)]
    pub styles_path: String,
    #[serde(rename = "GBaseStyles", default)]
    pub base_styles: Vec<String>,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl ValeConfig {
    /// Parses `vale ls-config` output.
    pub fn parse(output: &str) -> Result<Self, ValeError> {
        Ok(serde_json::from_str(output)?)
    }

    /// Returns the styles directory, which must exist.
    pub fn styles_dir(&self) -> Result<PathBuf, ValeError> {
        let path = Path::new(&self.styles_path);
        if self.styles_path.is_empty() || !path.is_dir() {
            return Err(ValeError::config(format!(
                "Invalid StylesPath: '{}'",
                self.styles_path
            )));
        }
        Ok(path.to_path_buf())
    }
}

/// Returns true if `point` is a known extension point.
pub fn is_extension_point(point: &str) -> bool {
    EXTENSION_POINTS.contains(&point)
}

/// Lists the styles (sub-directories) of `styles_dir`, sorted by name.
pub fn list_styles(styles_dir: &Path) -> Result<Vec<String>, ValeError> {
    let mut styles = Vec::new();
    for entry in WalkDir::new(styles_dir).min_depth(1).max_depth(1) {
        let entry = entry.map_err(|e| ValeError::config(e.to_string()))?;
        if entry.file_type().is_dir() {
            styles.push(entry.file_name().to_string_lossy().into_owned());
        }
    }
    styles.sort();
    Ok(styles)
}

/// Lists the `*.yml` rule files of `style` in `styles_dir`, sorted by name.
pub fn list_rules(styles_dir: &Path, style: &str) -> Result<Vec<PathBuf>, ValeError> {
    let dir = styles_dir.join(style);
    if !dir.is_dir() {
        return Err(ValeError::config(format!("Unknown style: '{}'", style)));
    }

    let mut rules = Vec::new();
    for entry in WalkDir::new(&dir).min_depth(1).max_depth(1) {
        let entry = entry.map_err(|e| ValeError::config(e.to_string()))?;
        let is_rule = entry.path().extension().is_some_and(|ext| ext == "yml");
        if entry.file_type().is_file() && is_rule {
            rules.push(entry.into_path());
        }
    }
    rules.sort();
    Ok(rules)
}
