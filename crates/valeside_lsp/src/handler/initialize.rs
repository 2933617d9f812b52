//! Initialize and shutdown handlers.

use std::sync::atomic::Ordering;

use tower_lsp::jsonrpc::Result;
use tower_lsp::lsp_types::*;
use tracing::{error, info};

use valeside_core::RecordingHost;

use super::commands::COMMANDS;
use super::render::replay;
use crate::config::{reload_config, set_client_settings};
use crate::state::BackendState;

/// Handles the `initialize` LSP request.
pub async fn handle_initialize(
    state: &BackendState,
    params: InitializeParams,
) -> Result<InitializeResult> {
    info!("Vale LSP server initializing...");

    #[allow(deprecated)]
    let root = params
        .root_uri
        .or_else(|| {
            params
                .workspace_folders
                .as_ref()
                .and_then(|folders| folders.first())
                .map(|folder| folder.uri.clone())
        })
        .and_then(|u| u.to_file_path().ok());

    if let Some(path) = root {
        match state.workspace_root.write() {
            Ok(mut root) => {
                *root = Some(path);
            }
            Err(e) => {
                error!("Workspace root lock poisoned: {}", e);
                return Ok(InitializeResult::default());
            }
        }
    }

    let will_save = params
        .capabilities
        .text_document
        .as_ref()
        .and_then(|t| t.synchronization.as_ref())
        .and_then(|s| s.will_save)
        .unwrap_or(false);
    state.will_save.store(will_save, Ordering::Relaxed);

    set_client_settings(state, params.initialization_options);
    reload_config(state);

    Ok(InitializeResult {
        capabilities: ServerCapabilities {
            text_document_sync: Some(TextDocumentSyncCapability::Options(
                TextDocumentSyncOptions {
                    open_close: Some(true),
                    change: Some(TextDocumentSyncKind::INCREMENTAL),
                    will_save: Some(true),
                    save: Some(TextDocumentSyncSaveOptions::SaveOptions(SaveOptions {
                        include_text: Some(false),
                    })),
                    ..Default::default()
                },
            )),
            hover_provider: Some(HoverProviderCapability::Simple(true)),
            execute_command_provider: Some(ExecuteCommandOptions {
                commands: COMMANDS.iter().map(|c| c.to_string()).collect(),
                work_done_progress_options: Default::default(),
            }),
            ..Default::default()
        },
        server_info: Some(ServerInfo {
            name: "valeside".to_string(),
            version: Some(env!("CARGO_PKG_VERSION").to_string()),
        }),
    })
}

/// Handles the `initialized` LSP notification.
///
/// A missing Vale binary is reported to the user here, once.
pub async fn handle_initialized(client: &tower_lsp::Client, state: &BackendState) {
    client
        .log_message(MessageType::INFO, "Vale LSP server initialized!")
        .await;

    let host = RecordingHost::new();
    if !state.context.check_environment(&host) {
        replay(client, state, host.take(), None).await;
    }
}

/// Handles the `shutdown` LSP request.
pub async fn handle_shutdown() -> Result<()> {
    info!("Vale LSP server shutting down...");
    Ok(())
}
