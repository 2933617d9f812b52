//! Process-wide collection of displayed alerts.
//!
//! All state sits behind one lock so readers never see a half-cleared or
//! half-populated registry. Each view carries a generation number: starting a
//! lint cycle or clearing the registry moves it forward, and a cycle whose
//! generation is no longer current has its results dropped instead of
//! overwriting newer ones.

use std::collections::{BTreeSet, HashMap};

use parking_lot::Mutex;
use tracing::debug;

use crate::alert::MappedAlert;
use crate::host::{Host, REGION_LAYER, RegionStyle};
use crate::region::ViewId;

/// Ticket identifying one lint cycle of one view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Generation {
    view: ViewId,
    value: u64,
}

impl Generation {
    pub fn view(&self) -> ViewId {
        self.view
    }
}

#[derive(Debug, Default)]
struct RegistryState {
    alerts: Vec<MappedAlert>,
    generations: HashMap<ViewId, u64>,
}

impl RegistryState {
    /// Empties the registry and erases every view that had alerts.
    fn drain(&mut self, host: &dyn Host) {
        let views: BTreeSet<ViewId> = self.alerts.iter().map(|a| a.view).collect();
        for view in views {
            host.erase_regions(view, REGION_LAYER);
        }
        self.alerts.clear();
    }
}

/// Alerts currently shown, across all views.
#[derive(Debug, Default)]
pub struct AlertRegistry {
    state: Mutex<RegistryState>,
}

impl AlertRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Empties the registry for all views and erases their regions.
    ///
    /// In-flight cycles of every view become stale.
    pub fn clear(&self, host: &dyn Host) {
        let mut state = self.state.lock();
        state.drain(host);
        for value in state.generations.values_mut() {
            *value += 1;
        }
    }

    /// Appends one alert.
    pub fn register(&self, alert: MappedAlert) {
        self.state.lock().alerts.push(alert);
    }

    /// Starts a lint cycle for `view`, making earlier cycles stale.
    pub fn begin_cycle(&self, view: ViewId) -> Generation {
        let mut state = self.state.lock();
        let value = state.generations.entry(view).or_default();
        *value += 1;
        Generation {
            view,
            value: *value,
        }
    }

    /// Returns true if no newer cycle or clear happened since `generation`.
    pub fn is_current(&self, generation: Generation) -> bool {
        self.state.lock().generations.get(&generation.view) == Some(&generation.value)
    }

    /// Replaces the displayed alerts with the results of one cycle.
    ///
    /// The registry is cleared, `alerts` are registered, and the host is
    /// asked to draw them. Returns false, changing nothing, if the cycle is
    /// stale.
    pub fn commit(
        &self,
        generation: Generation,
        alerts: Vec<MappedAlert>,
        host: &dyn Host,
        style: &RegionStyle,
    ) -> bool {
        let mut state = self.state.lock();
        if state.generations.get(&generation.view) != Some(&generation.value) {
            debug!(
                "Dropping results of a stale lint cycle for {}",
                generation.view
            );
            return false;
        }

        state.drain(host);
        host.add_regions(generation.view, REGION_LAYER, &alerts, style);
        state.alerts.extend(alerts);
        true
    }

    /// Returns the first alert of `view` whose region contains `point`.
    pub fn find_at(&self, view: ViewId, point: usize) -> Option<MappedAlert> {
        self.state
            .lock()
            .alerts
            .iter()
            .find(|a| a.view == view && a.region.contains(point))
            .cloned()
    }

    /// Returns the alerts of `view` in registration order.
    pub fn alerts_for(&self, view: ViewId) -> Vec<MappedAlert> {
        self.state
            .lock()
            .alerts
            .iter()
            .filter(|a| a.view == view)
            .cloned()
            .collect()
    }

    pub fn len(&self) -> usize {
        self.state.lock().alerts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.state.lock().alerts.is_empty()
    }
}
