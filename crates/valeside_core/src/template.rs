//! Popup templates.
//!
//! Templates are format strings with the named fields `{CSS}`, `{header}`,
//! `{body}` and `{source}`. Literal braces are written `{{` and `}}`.

use std::fs;
use std::path::Path;

use crate::ValeError;
use crate::alert::{Alert, Severity};
use crate::settings::ValeSettings;

const ERROR_HTML: &str = include_str!("../../../static/error.html");
const WARNING_HTML: &str = include_str!("../../../static/warning.html");
const INFO_HTML: &str = include_str!("../../../static/info.html");
const UI_CSS: &str = include_str!("../../../static/ui.css");

/// Text of the documentation link appended to popups.
pub const READ_MORE: &str = "Read more ...";

/// Loaded popup templates and stylesheet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Templates {
    pub error: String,
    pub warning: String,
    pub info: String,
    pub css: String,
}

impl Default for Templates {
    fn default() -> Self {
        Self::builtin()
    }
}

impl Templates {
    /// The templates shipped with the crate.
    pub fn builtin() -> Self {
        Self {
            error: ERROR_HTML.to_string(),
            warning: WARNING_HTML.to_string(),
            info: INFO_HTML.to_string(),
            css: UI_CSS.to_string(),
        }
    }

    /// Loads the templates named in `settings`, using the built-in resource
    /// for any path that is not set.
    pub fn load(settings: &ValeSettings) -> Result<Self, ValeError> {
        let templates = Self {
            error: load_resource(settings.vale_error_template.as_deref(), ERROR_HTML)?,
            warning: load_resource(settings.vale_warning_template.as_deref(), WARNING_HTML)?,
            info: load_resource(settings.vale_info_template.as_deref(), INFO_HTML)?,
            css: load_resource(settings.vale_css.as_deref(), UI_CSS)?,
        };
        templates.validate()?;
        Ok(templates)
    }

    /// Returns the template used for `severity`.
    pub fn for_severity(&self, severity: Severity) -> &str {
        match severity {
            Severity::Error => &self.error,
            Severity::Warning => &self.warning,
            Severity::Suggestion | Severity::Info => &self.info,
        }
    }

    /// Renders the popup content for `alert`.
    ///
    /// Without a description, the header names the check and the body is the
    /// message; otherwise the message moves to the header and the body is the
    /// description.
    pub fn render(&self, alert: &Alert) -> Result<String, ValeError> {
        let level = alert.severity.label();
        let source = if alert.link.is_empty() {
            String::new()
        } else {
            make_link(&alert.link, READ_MORE)
        };

        let (header, body) = if alert.description.is_empty() {
            (format!("{}: {}", level, alert.check), alert.message.as_str())
        } else {
            (format!("{}: {}", level, alert.message), alert.description.as_str())
        };

        format_template(
            self.for_severity(alert.severity),
            &[
                ("CSS", &self.css),
                ("header", &header),
                ("body", body),
                ("source", &source),
            ],
        )
    }

    fn validate(&self) -> Result<(), ValeError> {
        let fields = [("CSS", ""), ("header", ""), ("body", ""), ("source", "")];
        for template in [&self.error, &self.warning, &self.info] {
            format_template(template, &fields)?;
        }
        Ok(())
    }
}

fn load_resource(path: Option<&Path>, builtin: &str) -> Result<String, ValeError> {
    match path {
        Some(path) => fs::read_to_string(path).map_err(|e| {
            ValeError::config(format!("Failed to read {}: {}", path.display(), e))
        }),
        None => Ok(builtin.to_string()),
    }
}

/// Returns an HTML anchor pointing at `url`.
pub fn make_link(url: &str, text: &str) -> String {
    format!("<a href={}>{}</a>", url, text)
}

/// Substitutes named `{field}`s in `template`.
pub fn format_template(template: &str, values: &[(&str, &str)]) -> Result<String, ValeError> {
    let mut out = String::with_capacity(template.len());
    let mut chars = template.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            '{' if chars.peek() == Some(&'{') => {
                chars.next();
                out.push('{');
            }
            '{' => {
                let mut name = String::new();
                loop {
                    match chars.next() {
                        Some('}') => break,
                        Some(c) => name.push(c),
                        None => {
                            return Err(ValeError::template(format!(
                                "unterminated field '{{{}'",
                                name
                            )));
                        }
                    }
                }
                let value = values
                    .iter()
                    .find(|(key, _)| *key == name)
                    .map(|(_, value)| *value)
                    .ok_or_else(|| ValeError::template(format!("unknown field '{}'", name)))?;
                out.push_str(value);
            }
            '}' if chars.peek() == Some(&'}') => {
                chars.next();
                out.push('}');
            }
            '}' => return Err(ValeError::template("single '}' encountered")),
            c => out.push(c),
        }
    }

    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn alert(severity: Severity, description: &str, link: &str) -> Alert {
        Alert {
            line: 1,
            span: [1, 4],
            severity,
            message: "Avoid 'very'.".to_string(),
            description: description.to_string(),
            check: "Style.Very".to_string(),
            link: link.to_string(),
        }
    }

    fn plain() -> Templates {
        Templates {
            error: "E|{header}|{body}|{source}".to_string(),
            warning: "W|{header}|{body}|{source}".to_string(),
            info: "I|{header}|{body}|{source}".to_string(),
            css: String::new(),
        }
    }

    #[test]
    fn test_format_template_fields_and_escapes() {
        let out = format_template("{{a}} {x}-{y}}}", &[("x", "1"), ("y", "2")]).unwrap();
        assert_eq!(out, "{a} 1-2}");
    }

    #[test]
    fn test_format_template_unknown_field() {
        let err = format_template("{nope}", &[]).unwrap_err();
        assert!(matches!(err, ValeError::Template(_)));
    }

    #[test]
    fn test_format_template_unbalanced() {
        assert!(format_template("{open", &[("open", "")]).is_err());
        assert!(format_template("close}", &[]).is_err());
    }

    #[test]
    fn test_render_without_description_uses_check() {
        let out = plain().render(&alert(Severity::Warning, "", "")).unwrap();
        assert_eq!(out, "W|Warning: Style.Very|Avoid 'very'.|");
    }

    #[test]
    fn test_render_with_description_uses_message() {
        let out = plain()
            .render(&alert(Severity::Error, "Use a stronger word.", ""))
            .unwrap();
        assert_eq!(out, "E|Error: Avoid 'very'.|Use a stronger word.|");
    }

    #[test]
    fn test_render_link() {
        let out = plain()
            .render(&alert(Severity::Info, "", "https://vale.sh"))
            .unwrap();
        assert_eq!(
            out,
            "I|Info: Style.Very|Avoid 'very'.|<a href=https://vale.sh>Read more ...</a>"
        );
    }

    #[test]
    fn test_suggestion_uses_info_template() {
        let out = plain().render(&alert(Severity::Suggestion, "", "")).unwrap();
        assert_eq!(out, "I|Suggestion: Style.Very|Avoid 'very'.|");
    }

    #[test]
    fn test_builtin_templates_render() {
        let templates = Templates::builtin();
        let out = templates.render(&alert(Severity::Error, "", "")).unwrap();
        assert!(out.contains("Error: Style.Very"));
        assert!(out.contains(".header"), "stylesheet should be inlined");
        assert!(templates.validate().is_ok());
    }

    #[test]
    fn test_load_custom_template() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("error.html");
        std::fs::write(&path, "<b>{header}</b>{body}{source}{CSS}").unwrap();

        let settings = ValeSettings {
            vale_error_template: Some(path),
            ..Default::default()
        };
        let templates = Templates::load(&settings).unwrap();
        assert_eq!(templates.error, "<b>{header}</b>{body}{source}{CSS}");
        assert_eq!(templates.warning, WARNING_HTML);
    }

    #[test]
    fn test_load_rejects_bad_template() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("info.html");
        std::fs::write(&path, "<style>body { color: red; }</style>").unwrap();

        let settings = ValeSettings {
            vale_info_template: Some(path),
            ..Default::default()
        };
        assert!(matches!(
            Templates::load(&settings),
            Err(ValeError::Template(_))
        ));
    }

    #[test]
    fn test_load_missing_template_is_config_error() {
        let settings = ValeSettings {
            vale_css: Some("/definitely/not/here.css".into()),
            ..Default::default()
        };
        assert!(matches!(
            Templates::load(&settings),
            Err(ValeError::Config(_))
        ));
    }
}
