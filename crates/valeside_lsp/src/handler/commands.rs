//! `workspace/executeCommand` parsing.

use serde_json::Value;
use tower_lsp::lsp_types::{ExecuteCommandParams, Url};

/// Lints a document: `[uri, from_load?]`.
pub const LINT: &str = "vale.lint";
/// Returns a rule template: `[extension point]`.
pub const NEW_RULE: &str = "vale.newRule";
/// Lists styles: `[uri?]`.
pub const LIST_STYLES: &str = "vale.listStyles";
/// Lists a style's rule files: `[style, uri?]`.
pub const LIST_RULES: &str = "vale.listRules";

/// Commands announced to the client.
pub const COMMANDS: &[&str] = &[LINT, NEW_RULE, LIST_STYLES, LIST_RULES];

/// A parsed command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValeCommand {
    /// `from_load` defaults to false.
    Lint { uri: Url, from_load: bool },
    NewRule(String),
    /// The optional URI selects the directory Vale's configuration is read from.
    ListStyles(Option<Url>),
    ListRules { style: String, uri: Option<Url> },
}

/// Parses the command and its arguments.
pub fn parse_command(params: &ExecuteCommandParams) -> Result<ValeCommand, String> {
    let args = &params.arguments;
    match params.command.as_str() {
        LINT => Ok(ValeCommand::Lint {
            uri: uri_arg(args.first())?.ok_or("vale.lint expects a document URI")?,
            from_load: match args.get(1) {
                None | Some(Value::Null) => false,
                Some(value) => value
                    .as_bool()
                    .ok_or("vale.lint expects a boolean from-load flag")?,
            },
        }),
        NEW_RULE => Ok(ValeCommand::NewRule(
            string_arg(args.first()).ok_or("vale.newRule expects an extension point")?,
        )),
        LIST_STYLES => Ok(ValeCommand::ListStyles(uri_arg(args.first())?)),
        LIST_RULES => Ok(ValeCommand::ListRules {
            style: string_arg(args.first()).ok_or("vale.listRules expects a style name")?,
            uri: uri_arg(args.get(1))?,
        }),
        other => Err(format!("Unknown command: {}", other)),
    }
}

fn string_arg(value: Option<&Value>) -> Option<String> {
    value.and_then(Value::as_str).map(str::to_string)
}

fn uri_arg(value: Option<&Value>) -> Result<Option<Url>, String> {
    match string_arg(value) {
        Some(s) => Url::parse(&s)
            .map(Some)
            .map_err(|e| format!("Invalid URI '{}': {}", s, e)),
        None => Ok(None),
    }
}
