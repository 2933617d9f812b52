//! Document lifecycle handlers (open, change, save, close).

use tower_lsp::lsp_types::*;
use tracing::{debug, error};

use valeside_core::BufferView;

use crate::conversion::range_to_region;
use crate::state::{BackendState, DocumentData};

/// Handles the `textDocument/didOpen` notification.
///
/// The document's language id is used as its syntax.
pub async fn handle_did_open(state: &BackendState, params: DidOpenTextDocumentParams) -> Url {
    let document = params.text_document;
    debug!("Document opened: {}", document.uri);

    let mut view = BufferView::new(state.next_view_id(), document.text)
        .with_syntax(document.language_id);
    if let Ok(path) = document.uri.to_file_path() {
        view = view.with_path(path);
    }

    match state.documents.write() {
        Ok(mut docs) => {
            docs.insert(
                document.uri.clone(),
                DocumentData {
                    view,
                    version: document.version,
                },
            );
        }
        Err(e) => error!("Documents lock poisoned: {}", e),
    }

    document.uri
}

/// Handles the `textDocument/didChange` notification.
///
/// Edits are applied in order; the caret follows the last one. Returns the
/// URI and new version.
pub async fn handle_did_change(
    state: &BackendState,
    params: DidChangeTextDocumentParams,
) -> Option<(Url, i32)> {
    debug!("Document changed: {}", params.text_document.uri);

    let uri = params.text_document.uri;
    let version = params.text_document.version;

    let mut docs = match state.documents.write() {
        Ok(guard) => guard,
        Err(e) => {
            error!("Documents lock poisoned: {}", e);
            return None;
        }
    };
    let Some(doc) = docs.get_mut(&uri) else {
        debug!("Change for unknown document: {}", uri);
        return None;
    };

    for change in params.content_changes {
        match change.range {
            Some(range) => {
                let region = range_to_region(doc.view.buffer(), range);
                doc.view.apply_edit(region, &change.text);
            }
            None => doc.view.set_text(change.text),
        }
    }
    doc.version = version;

    Some((uri, version))
}

/// Handles the `textDocument/willSave` notification.
pub async fn handle_will_save(params: WillSaveTextDocumentParams) -> Url {
    debug!(
        "Document about to be saved: {} ({:?})",
        params.text_document.uri, params.reason
    );
    params.text_document.uri
}

/// Handles the `textDocument/didSave` notification.
///
/// Returns the URI when the save should trigger the pre-save event, which
/// only happens for clients that do not send `willSave`.
pub async fn handle_did_save(
    state: &BackendState,
    params: DidSaveTextDocumentParams,
) -> Option<Url> {
    debug!("Document saved: {}", params.text_document.uri);
    let will_save = state.will_save.load(std::sync::atomic::Ordering::Relaxed);
    (!will_save).then_some(params.text_document.uri)
}

/// Handles the `textDocument/didClose` notification.
pub async fn handle_did_close(state: &BackendState, params: DidCloseTextDocumentParams) -> Url {
    debug!("Document closed: {}", params.text_document.uri);

    match state.documents.write() {
        Ok(mut docs) => {
            docs.remove(&params.text_document.uri);
        }
        Err(e) => error!("Documents lock poisoned: {}", e),
    }

    params.text_document.uri
}
