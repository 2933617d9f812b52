//! Debouncing for background linting.

use std::future::Future;
use std::time::Duration;

use tower_lsp::lsp_types::Url;

use crate::state::{BackendState, SharedState};

/// Default debounce delay in milliseconds.
pub const DEFAULT_DEBOUNCE_MS: u64 = 300;

/// Runs `lint` after the debounce period unless the document changed again.
pub fn spawn_debounced_lint<F, Fut>(state: SharedState, uri: Url, version: i32, lint: F)
where
    F: FnOnce(Url) -> Fut + Send + 'static,
    Fut: Future<Output = ()> + Send + 'static,
{
    tokio::spawn(async move {
        tokio::time::sleep(Duration::from_millis(DEFAULT_DEBOUNCE_MS)).await;

        if is_current(&state, &uri, version) {
            lint(uri).await;
        }
    });
}

/// Checks if the document version is still current.
fn is_current(state: &BackendState, uri: &Url, version: i32) -> bool {
    state
        .snapshot(uri)
        .is_some_and(|doc| doc.version == version)
}
