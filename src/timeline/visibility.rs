//! Staged visibility toggling across progress windows.
//!
//! One ordered list of layers turns off one at a time within an off-window;
//! a second, independently ordered list turns back on in a later window.
//! The off-order is data, not the reverse of the on-order — the two lists
//! are preserved exactly as supplied.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// One staged on-or-off pass over an ordered layer list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ToggleWindow {
    /// Layers in the exact order they toggle.
    pub order: Vec<String>,
    /// Progress window (start, end) in sequence-normalized units.
    pub window: (f64, f64),
}

impl ToggleWindow {
    /// How many layers have toggled at sequence progress `t`.
    ///
    /// Sub-thresholds are evenly spaced within the window: with `n` layers
    /// and window progress `k/n`, exactly `k` layers have toggled.
    pub fn toggled_count(&self, t: f64) -> usize {
        let (start, end) = self.window;
        if t < start || end <= start {
            return 0;
        }
        if t >= end {
            return self.order.len();
        }
        let wp = (t - start) / (end - start);
        // A crossing lands exactly on k/n for progress values written as
        // fractions of the window; the epsilon keeps those inclusive under
        // floating-point division.
        let count = (wp * self.order.len() as f64 + 1e-9).floor() as usize;
        count.min(self.order.len())
    }

    /// The layers toggled so far at progress `t`, in toggle order.
    pub fn toggled_at(&self, t: f64) -> &[String] {
        &self.order[..self.toggled_count(t)]
    }
}

/// The full staged-visibility plan: an off pass and a later on pass.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VisibilityStaging {
    pub off: ToggleWindow,
    pub on: ToggleWindow,
}

impl VisibilityStaging {
    /// Apply the staging to a visibility map at sequence progress `t`.
    ///
    /// Layers in the off pass are hidden as their sub-thresholds are
    /// crossed; layers in the on pass are re-shown likewise. Layers absent
    /// from the map are inserted, matching the configurator's behavior of
    /// treating unknown flags as freshly set.
    pub fn apply(&self, t: f64, visibility: &mut BTreeMap<String, bool>) {
        for layer in self.off.toggled_at(t) {
            visibility.insert(layer.clone(), false);
        }
        for layer in self.on.toggled_at(t) {
            visibility.insert(layer.clone(), true);
        }
    }
}
