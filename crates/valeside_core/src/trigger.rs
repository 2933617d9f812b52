//! Maps editor lifecycle events to lint actions.

use serde::{Deserialize, Serialize};

/// When linting runs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LintMode {
    /// Never lint automatically.
    Off,
    /// Lint after every modification.
    Background,
    /// Lint when a view loads and before it is saved.
    #[default]
    LoadAndSave,
    /// Lint before a view is saved.
    Save,
}

/// An editor lifecycle event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditorEvent {
    Modified,
    Loaded,
    PreSave,
    /// The pointer rests on `point`.
    HoverQueried(usize),
}

/// A lint cycle requested by an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LintRequest {
    /// Set when the cycle was triggered by the view finishing loading.
    pub from_load: bool,
}

/// What to do in response to one event.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Reaction {
    /// Clear the alert registry before anything else.
    pub clear: bool,
    pub lint: Option<LintRequest>,
    /// Answer a hover at this point.
    pub hover: Option<usize>,
}

/// Decides the reaction to `event` under `mode`.
///
/// Modifications always clear displayed alerts so nothing stale survives an
/// edit, even when linting is off. Hover handling does not depend on the mode.
pub fn dispatch(mode: LintMode, event: EditorEvent) -> Reaction {
    match event {
        EditorEvent::Modified => Reaction {
            clear: true,
            lint: (mode == LintMode::Background).then_some(LintRequest { from_load: false }),
            hover: None,
        },
        EditorEvent::Loaded => Reaction {
            lint: (mode == LintMode::LoadAndSave).then_some(LintRequest { from_load: true }),
            ..Reaction::default()
        },
        EditorEvent::PreSave => Reaction {
            lint: matches!(mode, LintMode::LoadAndSave | LintMode::Save)
                .then_some(LintRequest { from_load: false }),
            ..Reaction::default()
        },
        EditorEvent::HoverQueried(point) => Reaction {
            hover: Some(point),
            ..Reaction::default()
        },
    }
}
