//! Replays host calls recorded during a lint cycle as LSP messages.

use tower_lsp::Client;
use tower_lsp::lsp_types::{Diagnostic, MessageType, Url};
use tracing::debug;

use valeside_core::{HostCommand, View};

use crate::conversion::to_lsp_diagnostic;
use crate::state::{BackendState, DocumentData};

/// Sends `commands` to the client.
///
/// Drawn regions become published diagnostics and erased regions an empty
/// diagnostic list. `source` is the document snapshot the cycle ran on; its
/// text is used to convert offsets when it matches the drawn view.
pub async fn replay(
    client: &Client,
    state: &BackendState,
    commands: Vec<HostCommand>,
    source: Option<(&Url, &DocumentData)>,
) {
    for command in commands {
        match command {
            HostCommand::AddRegions { view, alerts, .. } => {
                let target = match source {
                    Some((uri, doc)) if doc.view.id() == view => {
                        Some((uri.clone(), doc.clone()))
                    }
                    _ => state
                        .uri_of(view)
                        .and_then(|uri| state.snapshot(&uri).map(|doc| (uri, doc))),
                };
                let Some((uri, doc)) = target else {
                    debug!("No document for {}, dropping {} alerts", view, alerts.len());
                    continue;
                };

                let diagnostics: Vec<Diagnostic> = alerts
                    .iter()
                    .map(|alert| to_lsp_diagnostic(doc.view.buffer(), alert))
                    .collect();
                client
                    .publish_diagnostics(uri, diagnostics, Some(doc.version))
                    .await;
            }
            HostCommand::EraseRegions { view, .. } => {
                if let Some(uri) = state.uri_of(view) {
                    client.publish_diagnostics(uri, vec![], None).await;
                }
            }
            HostCommand::ErrorMessage(message) => {
                client.show_message(MessageType::ERROR, message).await;
            }
            // Hover replies carry popups and status lines.
            HostCommand::ShowPopup { .. } | HostCommand::StatusMessage(_) => {}
        }
    }
}
