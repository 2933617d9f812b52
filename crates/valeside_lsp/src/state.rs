//! LSP Backend state management.

use std::collections::HashMap;
use std::fmt;
use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::{Arc, RwLock};

use tower_lsp::lsp_types::Url;
use tracing::error;

use valeside_core::{BufferView, ValeContext, View, ViewId};

/// An open document.
#[derive(Debug, Clone)]
pub(crate) struct DocumentData {
    pub view: BufferView,
    pub version: i32,
}

/// Shared backend state.
pub(crate) struct BackendState {
    /// Open documents.
    pub documents: RwLock<HashMap<Url, DocumentData>>,
    /// Lint engine shared by all documents.
    pub context: Arc<ValeContext>,
    /// Workspace root path.
    pub workspace_root: RwLock<Option<PathBuf>>,
    /// Settings object sent by the client, if any.
    pub client_settings: RwLock<Option<serde_json::Value>>,
    /// Whether the client sends `textDocument/willSave`.
    pub will_save: AtomicBool,
    next_view: AtomicU64,
}

impl fmt::Debug for BackendState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BackendState")
            .field("documents", &"<HashMap<Url, DocumentData>>")
            .field("context", &self.context)
            .field("workspace_root", &self.workspace_root)
            .finish()
    }
}

impl BackendState {
    pub fn new(context: Arc<ValeContext>) -> Self {
        Self {
            documents: RwLock::new(HashMap::new()),
            context,
            workspace_root: RwLock::new(None),
            client_settings: RwLock::new(None),
            will_save: AtomicBool::new(false),
            next_view: AtomicU64::new(1),
        }
    }

    /// Allocates an id for a newly opened document.
    pub fn next_view_id(&self) -> ViewId {
        ViewId(self.next_view.fetch_add(1, Ordering::Relaxed))
    }

    /// Returns a copy of the document at `uri`.
    pub fn snapshot(&self, uri: &Url) -> Option<DocumentData> {
        match self.documents.read() {
            Ok(docs) => docs.get(uri).cloned(),
            Err(e) => {
                error!("Documents lock poisoned: {}", e);
                None
            }
        }
    }

    /// Finds the URI of the document shown in `view`.
    pub fn uri_of(&self, view: ViewId) -> Option<Url> {
        let docs = match self.documents.read() {
            Ok(g) => g,
            Err(e) => {
                error!("Documents lock poisoned: {}", e);
                return None;
            }
        };
        docs.iter()
            .find(|(_, doc)| doc.view.id() == view)
            .map(|(uri, _)| uri.clone())
    }
}

/// Type alias for shared state.
pub(crate) type SharedState = Arc<BackendState>;
