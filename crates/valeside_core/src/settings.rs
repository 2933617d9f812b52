//! Adapter settings.

use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

use jsonc_parser::ParseOptions;
use jsonschema::Validator;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::ValeError;
use crate::host::RegionStyle;
use crate::trigger::LintMode;

// Embed the schema
const SCHEMA_JSON: &str = include_str!("../../../schemas/v1/settings.json");
static SETTINGS_SCHEMA: OnceLock<Validator> = OnceLock::new();

/// Shown once when the Vale binary cannot be found.
pub const NO_VALE_ERR: &str = "vale executable not found.\n\n\
     Install vale and/or update your system path. \
     Make sure to restart your editor after install.\n\n\
     See https://vale.sh/docs/install";

/// How alert regions are drawn.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AlertStyle {
    SolidUnderline,
    StippledUnderline,
    #[default]
    SquigglyUnderline,
    /// Any unrecognised value draws an outline.
    #[serde(other)]
    Outline,
}

/// Where the hovered alert is shown.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AlertLocation {
    #[default]
    HoverPopup,
    HoverStatusBar,
}

/// Settings for the Vale adapter.
///
/// Key names match the original editor package so existing settings files
/// keep working.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ValeSettings {
    /// Path or name of the vale executable.
    pub vale_binary: String,
    /// Syntaxes that are linted.
    pub vale_syntaxes: Vec<String>,
    /// Line count at which linting is restricted to the caret's paragraph.
    pub vale_threshold: i64,
    pub vale_mode: LintMode,
    pub vale_highlight_scope: String,
    pub vale_icon: String,
    pub vale_alert_style: AlertStyle,
    pub vale_popup_width: u32,
    pub vale_alert_location: AlertLocation,
    pub vale_debug: bool,
    /// Template paths; `None` selects the built-in resource.
    pub vale_error_template: Option<PathBuf>,
    pub vale_warning_template: Option<PathBuf>,
    pub vale_info_template: Option<PathBuf>,
    pub vale_css: Option<PathBuf>,
}

/// Name of the binary looked up on `PATH` when nothing else is configured.
pub fn default_binary() -> &'static str {
    if cfg!(windows) { "vale.exe" } else { "vale" }
}

impl Default for ValeSettings {
    fn default() -> Self {
        Self {
            vale_binary: default_binary().to_string(),
            vale_syntaxes: [
                "Markdown",
                "Plain Text",
                "plaintext",
                "reStructuredText",
                "AsciiDoc",
                "HTML",
            ]
            .into_iter()
            .map(String::from)
            .collect(),
            vale_threshold: 0,
            vale_mode: LintMode::LoadAndSave,
            vale_highlight_scope: "comment".to_string(),
            vale_icon: String::new(),
            vale_alert_style: AlertStyle::default(),
            vale_popup_width: 450,
            vale_alert_location: AlertLocation::default(),
            vale_debug: false,
            vale_error_template: None,
            vale_warning_template: None,
            vale_info_template: None,
            vale_css: None,
        }
    }
}

impl ValeSettings {
    /// Settings file names searched for by [`ValeSettings::discover`].
    pub const CONFIG_FILES: &'static [&'static str] = &[".valeside.jsonc", ".valeside.json"];

    /// Finds a settings file in `dir`.
    pub fn discover(dir: impl AsRef<Path>) -> Option<PathBuf> {
        let dir = dir.as_ref();
        Self::CONFIG_FILES
            .iter()
            .map(|name| dir.join(name))
            .find(|path| path.is_file())
    }

    /// Per-user settings file, `<config dir>/valeside/settings.jsonc`.
    pub fn user_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join("valeside").join("settings.jsonc"))
    }

    /// Loads the settings that apply to `dir`.
    ///
    /// A settings file in `dir` wins over the per-user file; with neither,
    /// defaults are used.
    pub fn resolve(dir: Option<&Path>) -> Result<Self, ValeError> {
        if let Some(path) = dir.and_then(Self::discover) {
            debug!("Using settings: {}", path.display());
            return Self::from_file(&path);
        }

        if let Some(path) = Self::user_config_path().filter(|p| p.is_file()) {
            debug!("Using user settings: {}", path.display());
            return Self::from_file(&path);
        }

        Ok(Self::default())
    }

    /// Loads settings from a JSON or JSONC file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ValeError> {
        let content = fs::read_to_string(path.as_ref())
            .map_err(|e| ValeError::config(format!("Failed to read settings: {}", e)))?;
        Self::from_jsonc(&content)
    }

    /// Parses settings from JSONC text.
    pub fn from_jsonc(content: &str) -> Result<Self, ValeError> {
        let value: serde_json::Value =
            jsonc_parser::parse_to_serde_value(content, &ParseOptions::default())
                .map_err(|e| ValeError::config(format!("Invalid JSON: {}", e)))?
                .unwrap_or(serde_json::Value::Object(serde_json::Map::new()));
        Self::from_value(value)
    }

    /// Validates and deserializes a settings object.
    pub fn from_value(value: serde_json::Value) -> Result<Self, ValeError> {
        let schema = SETTINGS_SCHEMA.get_or_init(|| {
            let schema_json: serde_json::Value =
                serde_json::from_str(SCHEMA_JSON).expect("Invalid embedded settings schema");
            Validator::new(&schema_json).expect("Invalid settings schema compilation")
        });

        if let Err(e) = schema.validate(&value) {
            let error_msg = format!("{} at {}", e, e.instance_path());
            return Err(ValeError::config(format!(
                "Settings validation failed: {}",
                error_msg
            )));
        }

        serde_json::from_value(value)
            .map_err(|e| ValeError::config(format!("Invalid settings: {}", e)))
    }

    /// Returns true if `syntax` contains one of the configured syntaxes.
    pub fn is_supported(&self, syntax: &str) -> bool {
        let syntax = syntax.to_lowercase();
        self.vale_syntaxes
            .iter()
            .any(|s| !s.is_empty() && syntax.contains(&s.to_lowercase()))
    }

    /// Locates the Vale binary.
    ///
    /// A configured path is used as is; a bare name is looked up on `PATH`,
    /// falling back to the platform default name.
    pub fn resolve_binary(&self) -> Option<PathBuf> {
        let configured = Path::new(&self.vale_binary);
        if configured.is_absolute() || configured.components().count() > 1 {
            return configured.is_file().then(|| configured.to_path_buf());
        }

        if !self.vale_binary.is_empty()
            && let Some(path) = find_in_path(&self.vale_binary)
        {
            return Some(path);
        }
        find_in_path(default_binary())
    }

    /// Returns true if the Vale binary can be found.
    pub fn vale_exists(&self) -> bool {
        self.resolve_binary().is_some()
    }

    /// Region style for the alert layer.
    pub fn region_style(&self) -> RegionStyle {
        RegionStyle {
            scope: self.vale_highlight_scope.clone(),
            icon: self.vale_icon.clone(),
            draw: self.vale_alert_style,
        }
    }
}

fn find_in_path(name: &str) -> Option<PathBuf> {
    let paths = env::var_os("PATH")?;
    env::split_paths(&paths).find_map(|dir| {
        let candidate = dir.join(name);
        if candidate.is_file() {
            return Some(candidate);
        }
        if cfg!(windows) && candidate.extension().is_none() {
            let exe = candidate.with_extension("exe");
            if exe.is_file() {
                return Some(exe);
            }
        }
        None
    })
}
