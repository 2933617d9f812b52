//! Watched files handler.

use std::path::Path;

use tower_lsp::lsp_types::{DidChangeWatchedFilesParams, Url};
use tracing::{debug, info};

use valeside_core::ValeSettings;

use crate::config::reload_config;
use crate::state::BackendState;

/// Handles the `workspace/didChangeWatchedFiles` notification.
///
/// Settings are reloaded when one of the settings files was touched.
pub async fn handle_did_change_watched_files(
    state: &BackendState,
    params: DidChangeWatchedFilesParams,
) {
    debug!("Watched files changed: {:?}", params.changes);

    if params.changes.iter().any(|change| is_settings_file(&change.uri)) {
        info!("Settings file changed, reloading...");
        reload_config(state);
    }
}

fn is_settings_file(uri: &Url) -> bool {
    let path = uri.path();
    Path::new(path)
        .file_name()
        .and_then(|name| name.to_str())
        .is_some_and(|name| ValeSettings::CONFIG_FILES.contains(&name))
}
