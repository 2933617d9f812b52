//! Hover handler.

use tower_lsp::lsp_types::{HoverParams, Url};
use tracing::debug;

use crate::conversion::position_to_point;
use crate::state::BackendState;

/// Handles the `textDocument/hover` request.
///
/// Returns the document and the character offset under the pointer.
pub fn handle_hover(state: &BackendState, params: &HoverParams) -> Option<(Url, usize)> {
    let position = &params.text_document_position_params;
    let uri = position.text_document.uri.clone();
    let Some(doc) = state.snapshot(&uri) else {
        debug!("Hover for unknown document: {}", uri);
        return None;
    };

    let point = position_to_point(doc.view.buffer(), position.position);
    Some((uri, point))
}
