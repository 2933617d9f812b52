//! Vale LSP Server
//!
//! Language Server Protocol front end for the Vale prose linter.
//! Alerts are published as diagnostics and shown on hover.

mod config;
mod conversion;
mod debounce;
mod handler;
mod state;

use std::path::PathBuf;
use std::sync::Arc;

use serde::Serialize;
use serde_json::Value;
use tower_lsp::jsonrpc::{Error, Result};
use tower_lsp::lsp_types::*;
use tower_lsp::{Client, LanguageServer, LspService, Server};
use tracing::{debug, error, info};

use valeside_core::{
    CycleOutcome, EditorEvent, EventOutcome, RecordingHost, ValeContext, ValeError, dispatch,
};

use crate::config::{reload_config, set_client_settings};
use crate::debounce::spawn_debounced_lint;
use crate::handler::ValeCommand;
use crate::state::BackendState;

pub use crate::conversion::DIAGNOSTIC_SOURCE;
pub use crate::handler::COMMANDS;

/// The LSP backend for Vale.
#[derive(Clone)]
pub struct Backend {
    /// LSP client for sending notifications.
    client: Client,
    /// Shared state
    state: Arc<BackendState>,
}

impl Backend {
    /// Creates a new backend with the given client.
    ///
    /// Real settings are loaded during `initialize`.
    pub fn new(client: Client) -> Self {
        Self::with_context(client, Arc::new(ValeContext::default()))
    }

    /// Creates a backend around an existing lint engine.
    pub fn with_context(client: Client, context: Arc<ValeContext>) -> Self {
        Self {
            client,
            state: Arc::new(BackendState::new(context)),
        }
    }

    /// The lint engine.
    pub fn context(&self) -> &Arc<ValeContext> {
        &self.state.context
    }

    /// Feeds `event` for the document at `uri` to the lint engine.
    ///
    /// The engine runs on a blocking thread; its host calls are replayed to
    /// the client afterwards.
    async fn dispatch_event(&self, uri: &Url, event: EditorEvent) -> Option<EventOutcome> {
        let doc = self.state.snapshot(uri)?;
        let context = self.state.context.clone();
        let view = doc.view.clone();

        let result = tokio::task::spawn_blocking(move || {
            let host = RecordingHost::new();
            let outcome = context.handle_event(&view, &host, event);
            (outcome, host.take())
        })
        .await;

        match result {
            Ok((outcome, commands)) => {
                handler::replay(&self.client, &self.state, commands, Some((uri, &doc))).await;
                Some(outcome)
            }
            Err(e) => {
                error!("Event handler for {} failed: {}", uri, e);
                None
            }
        }
    }

    /// Runs one lint cycle for the document at `uri`.
    ///
    /// Does nothing for unsupported syntaxes or without a Vale binary.
    async fn lint_document(&self, uri: &Url, from_load: bool) -> Option<CycleOutcome> {
        let doc = self.state.snapshot(uri)?;
        if !self.state.context.is_enabled(&doc.view) {
            debug!("Linting disabled for {}", uri);
            return None;
        }

        let context = self.state.context.clone();
        let view = doc.view.clone();
        let result = tokio::task::spawn_blocking(move || {
            let host = RecordingHost::new();
            let outcome = context.lint(&view, &host, from_load);
            (outcome, host.take())
        })
        .await;

        match result {
            Ok((outcome, commands)) => {
                handler::replay(&self.client, &self.state, commands, Some((uri, &doc))).await;
                outcome
            }
            Err(e) => {
                error!("Lint task for {} failed: {}", uri, e);
                None
            }
        }
    }

    /// Clears every displayed alert.
    async fn clear_alerts(&self) {
        let host = RecordingHost::new();
        self.state.context.clear(&host);
        handler::replay(&self.client, &self.state, host.take(), None).await;
    }

    /// Directory Vale's configuration is read from for `uri`.
    fn config_dir(&self, uri: Option<&Url>) -> Option<PathBuf> {
        uri.and_then(|u| u.to_file_path().ok())
            .and_then(|p| p.parent().map(|d| d.to_path_buf()))
            .or_else(|| match self.state.workspace_root.read() {
                Ok(root) => root.clone(),
                Err(e) => {
                    error!("Workspace root lock poisoned: {}", e);
                    None
                }
            })
    }

    /// Runs a blocking engine query and converts its answer to JSON.
    ///
    /// Failures are logged and answered with `null`.
    async fn query<T, F>(&self, name: &'static str, query: F) -> Option<Value>
    where
        T: Serialize + Send + 'static,
        F: FnOnce(&ValeContext) -> std::result::Result<T, ValeError> + Send + 'static,
    {
        let context = self.state.context.clone();
        match tokio::task::spawn_blocking(move || query(&context)).await {
            Ok(Ok(answer)) => match serde_json::to_value(answer) {
                Ok(value) => Some(value),
                Err(e) => {
                    error!("{}: failed to encode result: {}", name, e);
                    None
                }
            },
            Ok(Err(e)) => {
                error!("{} failed: {}", name, e);
                None
            }
            Err(e) => {
                error!("{} task failed: {}", name, e);
                None
            }
        }
    }
}

#[tower_lsp::async_trait]
impl LanguageServer for Backend {
    async fn initialize(&self, params: InitializeParams) -> Result<InitializeResult> {
        handler::handle_initialize(&self.state, params).await
    }

    async fn initialized(&self, _: InitializedParams) {
        handler::handle_initialized(&self.client, &self.state).await;
    }

    async fn shutdown(&self) -> Result<()> {
        handler::handle_shutdown().await
    }

    async fn did_open(&self, params: DidOpenTextDocumentParams) {
        let uri = handler::handle_did_open(&self.state, params).await;
        self.dispatch_event(&uri, EditorEvent::Loaded).await;
    }

    async fn did_change(&self, params: DidChangeTextDocumentParams) {
        let Some((uri, version)) = handler::handle_did_change(&self.state, params).await else {
            return;
        };

        let mode = self.state.context.settings().vale_mode;
        let reaction = dispatch(mode, EditorEvent::Modified);
        if reaction.clear {
            self.clear_alerts().await;
        }

        if let Some(request) = reaction.lint {
            let backend = self.clone();
            spawn_debounced_lint(self.state.clone(), uri, version, move |uri| async move {
                backend.lint_document(&uri, request.from_load).await;
            });
        }
    }

    async fn will_save(&self, params: WillSaveTextDocumentParams) {
        let uri = handler::handle_will_save(params).await;
        self.dispatch_event(&uri, EditorEvent::PreSave).await;
    }

    async fn did_save(&self, params: DidSaveTextDocumentParams) {
        if let Some(uri) = handler::handle_did_save(&self.state, params).await {
            self.dispatch_event(&uri, EditorEvent::PreSave).await;
        }
    }

    async fn did_close(&self, params: DidCloseTextDocumentParams) {
        let uri = handler::handle_did_close(&self.state, params).await;

        // Clear diagnostics
        self.client.publish_diagnostics(uri, vec![], None).await;
    }

    async fn did_change_configuration(&self, params: DidChangeConfigurationParams) {
        info!("Client configuration changed, reloading...");
        set_client_settings(&self.state, Some(params.settings));
        reload_config(&self.state);
    }

    async fn did_change_watched_files(&self, params: DidChangeWatchedFilesParams) {
        handler::handle_did_change_watched_files(&self.state, params).await;
    }

    async fn hover(&self, params: HoverParams) -> Result<Option<Hover>> {
        let Some((uri, point)) = handler::handle_hover(&self.state, &params) else {
            return Ok(None);
        };

        let outcome = self
            .dispatch_event(&uri, EditorEvent::HoverQueried(point))
            .await;
        Ok(outcome
            .and_then(|o| o.hover)
            .map(conversion::to_lsp_hover))
    }

    async fn execute_command(&self, params: ExecuteCommandParams) -> Result<Option<Value>> {
        debug!("Execute command: {}", params.command);

        let command = handler::parse_command(&params).map_err(Error::invalid_params)?;
        let result = match command {
            ValeCommand::Lint { uri, from_load } => self
                .lint_document(&uri, from_load)
                .await
                .and_then(|outcome| serde_json::to_value(outcome).ok()),
            ValeCommand::NewRule(point) => {
                self.query("vale.newRule", move |ctx| ctx.new_rule(&point))
                    .await
            }
            ValeCommand::ListStyles(uri) => {
                let dir = self.config_dir(uri.as_ref());
                self.query("vale.listStyles", move |ctx| ctx.list_styles(dir.as_deref()))
                    .await
            }
            ValeCommand::ListRules { style, uri } => {
                let dir = self.config_dir(uri.as_ref());
                self.query("vale.listRules", move |ctx| {
                    ctx.list_rules(dir.as_deref(), &style)
                })
                .await
            }
        };

        Ok(result)
    }
}

/// Starts the LSP server.
///
/// This function does not return unless an error occurs or the server shuts down.
pub async fn run() {
    info!("Vale LSP server starting...");

    let stdin = tokio::io::stdin();
    let stdout = tokio::io::stdout();

    let (service, socket) = LspService::new(Backend::new);
    Server::new(stdin, stdout, socket).serve(service).await;
}
