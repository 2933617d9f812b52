//! Rendering surface provided by the host editor.

use parking_lot::Mutex;

use crate::alert::MappedAlert;
use crate::region::ViewId;
use crate::settings::AlertStyle;

/// Logical layer that owns every region drawn by this crate.
pub const REGION_LAYER: &str = "Vale Alerts";

/// How a layer's regions are drawn.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegionStyle {
    /// Scope name used to color the regions.
    pub scope: String,
    /// Gutter icon; empty for none.
    pub icon: String,
    pub draw: AlertStyle,
}

/// A hover popup request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Popup {
    pub html: String,
    /// Point the popup is anchored to.
    pub location: usize,
    pub max_width: u32,
}

/// Editor operations used to display alerts.
///
/// Every call names a layer so that only regions owned by that layer are
/// touched.
pub trait Host {
    fn add_regions(&self, view: ViewId, layer: &str, alerts: &[MappedAlert], style: &RegionStyle);

    fn erase_regions(&self, view: ViewId, layer: &str);

    fn show_popup(&self, view: ViewId, popup: &Popup);

    fn status_message(&self, message: &str);

    /// Blocking notice for conditions the user must fix.
    fn error_message(&self, message: &str);
}

/// A host call captured by [`RecordingHost`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HostCommand {
    AddRegions {
        view: ViewId,
        layer: String,
        alerts: Vec<MappedAlert>,
        style: RegionStyle,
    },
    EraseRegions {
        view: ViewId,
        layer: String,
    },
    ShowPopup {
        view: ViewId,
        popup: Popup,
    },
    StatusMessage(String),
    ErrorMessage(String),
}

/// A [`Host`] that queues its calls for later replay.
///
/// Lint cycles run on blocking threads; asynchronous front ends record the
/// host calls there and replay them once back on their own task.
#[derive(Debug, Default)]
pub struct RecordingHost {
    commands: Mutex<Vec<HostCommand>>,
}

impl RecordingHost {
    pub fn new() -> Self {
        Self::default()
    }

    /// Takes every command recorded so far.
    pub fn take(&self) -> Vec<HostCommand> {
        std::mem::take(&mut *self.commands.lock())
    }

    fn push(&self, command: HostCommand) {
        self.commands.lock().push(command);
    }
}

impl Host for RecordingHost {
    fn add_regions(&self, view: ViewId, layer: &str, alerts: &[MappedAlert], style: &RegionStyle) {
        self.push(HostCommand::AddRegions {
            view,
            layer: layer.to_string(),
            alerts: alerts.to_vec(),
            style: style.clone(),
        });
    }

    fn erase_regions(&self, view: ViewId, layer: &str) {
        self.push(HostCommand::EraseRegions {
            view,
            layer: layer.to_string(),
        });
    }

    fn show_popup(&self, view: ViewId, popup: &Popup) {
        self.push(HostCommand::ShowPopup {
            view,
            popup: popup.clone(),
        });
    }

    fn status_message(&self, message: &str) {
        self.push(HostCommand::StatusMessage(message.to_string()));
    }

    fn error_message(&self, message: &str) {
        self.push(HostCommand::ErrorMessage(message.to_string()));
    }
}
