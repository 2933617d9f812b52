//! Configuration management for LSP server.

use tracing::{error, info};

use valeside_core::{ValeError, ValeSettings};

use crate::state::BackendState;

/// Picks the settings for the workspace.
///
/// A settings object sent by the client wins; otherwise the settings file in
/// the workspace root (or the per-user file) is used.
fn load_settings(state: &BackendState) -> Result<ValeSettings, ValeError> {
    let client = match state.client_settings.read() {
        Ok(g) => g.clone(),
        Err(e) => {
            error!("Client settings lock poisoned: {}", e);
            None
        }
    };

    if let Some(value) = client.filter(|v| v.as_object().is_some_and(|o| !o.is_empty())) {
        info!("Using settings sent by the client");
        return ValeSettings::from_value(value);
    }

    let root = match state.workspace_root.read() {
        Ok(g) => g.clone(),
        Err(e) => {
            error!("Workspace root lock poisoned: {}", e);
            None
        }
    };
    ValeSettings::resolve(root.as_deref())
}

/// Reloads configuration into the lint engine.
///
/// Invalid settings are logged and the previous ones stay in effect.
pub fn reload_config(state: &BackendState) {
    match load_settings(state).and_then(|settings| state.context.reload(settings)) {
        Ok(()) => info!("Configuration loaded"),
        Err(e) => error!("Failed to load config: {}", e),
    }
}

/// Stores a settings object sent by the client.
///
/// Clients may nest the object under a `vale` key.
pub fn set_client_settings(state: &BackendState, value: Option<serde_json::Value>) {
    let value = value.map(|v| match v {
        serde_json::Value::Object(mut map) if map.contains_key("vale") => {
            map.remove("vale").unwrap_or_default()
        }
        other => other,
    });

    match state.client_settings.write() {
        Ok(mut g) => *g = value,
        Err(e) => error!("Client settings lock poisoned: {}", e),
    }
}
