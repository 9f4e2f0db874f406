//! Panel resize controller: pointer-drag sizing plus maximize/restore.

use super::PanelCommand;
use serde::{Deserialize, Serialize};

/// Width/height clamp bounds for the panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResizeBounds {
    pub min_width: u32,
    pub max_width: u32,
    pub min_height: u32,
    pub max_height: u32,
}

impl Default for ResizeBounds {
    fn default() -> Self {
        Self {
            min_width: 280,
            max_width: 720,
            min_height: 320,
            max_height: 900,
        }
    }
}

impl ResizeBounds {
    fn clamp(&self, width: f64, height: f64) -> (u32, u32) {
        let w = width.round().clamp(f64::from(self.min_width), f64::from(self.max_width));
        let h = height
            .round()
            .clamp(f64::from(self.min_height), f64::from(self.max_height));
        (w as u32, h as u32)
    }
}

/// The drag state machine. Exactly one drag can be active: pointer-down in
/// `Dragging` is ignored, which is the explicit form of the original's
/// "only the active handle produces move events" exclusivity.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DragState {
    Idle,
    Dragging {
        /// Pointer position at pointer-down.
        anchor: (f64, f64),
        /// Panel size at pointer-down.
        start: (u32, u32),
    },
}

/// Owns the panel's size, the drag state, and the maximize snapshot.
#[derive(Debug)]
pub struct ResizeController {
    bounds: ResizeBounds,
    size: (u32, u32),
    state: DragState,
    /// Size snapshotted at maximize time; restored on the next toggle.
    saved: Option<(u32, u32)>,
}

impl ResizeController {
    pub fn new(initial: (u32, u32), bounds: ResizeBounds) -> Self {
        Self {
            bounds,
            size: initial,
            state: DragState::Idle,
            saved: None,
        }
    }

    pub fn size(&self) -> (u32, u32) {
        self.size
    }

    pub fn state(&self) -> DragState {
        self.state
    }

    pub fn is_maximized(&self) -> bool {
        self.saved.is_some()
    }

    /// Pointer-down on the resize handle. Ignored while already dragging.
    pub fn pointer_down(&mut self, x: f64, y: f64) {
        if matches!(self.state, DragState::Idle) {
            self.state = DragState::Dragging {
                anchor: (x, y),
                start: self.size,
            };
        }
    }

    /// Pointer movement. Only meaningful in `Dragging`; returns the sizing
    /// command to apply, clamped to bounds.
    pub fn pointer_move(&mut self, x: f64, y: f64) -> Option<PanelCommand> {
        let DragState::Dragging { anchor, start } = self.state else {
            return None;
        };
        let (w, h) = self.bounds.clamp(
            f64::from(start.0) + (x - anchor.0),
            f64::from(start.1) + (y - anchor.1),
        );
        self.size = (w, h);
        Some(PanelCommand::SetSize {
            width: w,
            height: h,
        })
    }

    /// Pointer-up ends the drag. A drag also discards any maximize
    /// snapshot — the user has chosen an explicit size.
    pub fn pointer_up(&mut self) {
        if matches!(self.state, DragState::Dragging { .. }) {
            self.state = DragState::Idle;
            self.saved = None;
        }
    }

    /// Toggle maximize: snapshot the current explicit size and jump to the
    /// bounds maximum, or restore the snapshot.
    pub fn toggle_maximize(&mut self) -> PanelCommand {
        match self.saved.take() {
            Some(previous) => {
                self.size = previous;
            }
            None => {
                self.saved = Some(self.size);
                self.size = (self.bounds.max_width, self.bounds.max_height);
            }
        }
        PanelCommand::SetSize {
            width: self.size.0,
            height: self.size.1,
        }
    }
}
