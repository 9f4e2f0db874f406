//! Per-frame sequence generation: named phases over a frame range producing
//! one scene state and one camera pose per frame.

pub mod morph;
pub mod style;
pub mod visibility;

pub use morph::DimensionMorph;
pub use style::StyleSchedule;
pub use visibility::{ToggleWindow, VisibilityStaging};

use crate::camera::{self, CameraPose, PathParams};
use crate::scene::SceneState;
use serde::{Deserialize, Serialize};

/// Frame-index normalization conventions.
///
/// The capture scripts never agreed on one: some divide by the total, some
/// by `total - 1`, one by a fixed 180. The off-by-one differences decide
/// whether the first and last frame coincide exactly, so each convention is
/// kept under its own name and scenarios pick one explicitly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FrameNorm {
    /// `frame / total` — the final frame lands exactly on 1, frame 0 on 0.
    ZeroBased,
    /// `(frame - 1) / (total - 1)` — 1-based frames; frame 1 maps to 0 and
    /// the final frame to 1, so a 2π orbit loops onto its first frame.
    EndInclusive,
    /// `frame / 180` — the fixed-denominator variant, clamped to 1.
    HalfTurn,
}

impl FrameNorm {
    /// Normalized progress of `frame` within a `total`-frame sequence,
    /// clamped to `[0, 1]`.
    pub fn progress(self, frame: u32, total: u32) -> f64 {
        let p = match self {
            Self::ZeroBased => {
                if total == 0 {
                    0.0
                } else {
                    f64::from(frame) / f64::from(total)
                }
            }
            Self::EndInclusive => {
                if total <= 1 {
                    0.0
                } else {
                    f64::from(frame.saturating_sub(1)) / f64::from(total - 1)
                }
            }
            Self::HalfTurn => f64::from(frame) / 180.0,
        };
        p.clamp(0.0, 1.0)
    }
}

/// Frame span, inclusive on both ends.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Span {
    pub start: u32,
    pub end: u32,
}

impl Span {
    /// Local progress of `frame` within the span, clamped to `[0, 1]`.
    /// Frames past the end stay at 1 so a finished phase holds its result.
    pub fn local_progress(self, frame: u32) -> f64 {
        if frame <= self.start || self.end <= self.start {
            return if frame >= self.end { 1.0 } else { 0.0 };
        }
        let p = f64::from(frame - self.start) / f64::from(self.end - self.start);
        p.clamp(0.0, 1.0)
    }
}

/// What a phase does to the scene.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PhaseKind {
    /// Stationary hold — the scene carries through unchanged.
    Hold,
    /// Eased width/depth morph across the phase span.
    Morph(DimensionMorph),
    /// Discrete style switching; triggers are absolute frame indices.
    StyleSwitch {
        schedule: StyleSchedule,
        /// Insert an extra hold after each switch frame.
        pause_on_switch: bool,
    },
    /// Staged visibility toggling; windows are in sequence progress units.
    Visibility(VisibilityStaging),
}

/// One named phase of a timeline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Phase {
    pub name: String,
    pub span: Span,
    #[serde(flatten)]
    pub kind: PhaseKind,
}

/// A complete capture timeline: base scene, phases, and the camera path.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Timeline {
    pub total_frames: u32,
    pub norm: FrameNorm,
    pub base: SceneState,
    pub path: PathParams,
    pub phases: Vec<Phase>,
}

impl Timeline {
    /// Sequence-normalized progress of a frame.
    pub fn progress(&self, frame: u32) -> f64 {
        self.norm.progress(frame, self.total_frames)
    }

    /// Camera pose for a frame.
    pub fn pose_at(&self, frame: u32) -> CameraPose {
        camera::compute_pose(self.progress(frame), &self.path)
    }

    /// Scene state for a frame: the base state with every phase applied in
    /// declaration order. Phases whose span has not started contribute
    /// their start values; finished phases hold their end values.
    pub fn scene_at(&self, frame: u32) -> SceneState {
        let mut scene = self.base.clone();
        let t = self.progress(frame);
        for phase in &self.phases {
            match &phase.kind {
                PhaseKind::Hold => {}
                PhaseKind::Morph(m) => {
                    let (w, d) = m.at(phase.span.local_progress(frame));
                    scene.width = w;
                    scene.depth = d;
                }
                PhaseKind::StyleSwitch { schedule, .. } => {
                    if let Some(style) = schedule.style_at(frame) {
                        scene.roof_style = style;
                    }
                }
                PhaseKind::Visibility(staging) => {
                    staging.apply(t, &mut scene.visibility);
                }
            }
        }
        scene
    }

    /// Whether any style-switch phase triggers exactly at `frame` with
    /// hold-and-pause requested.
    pub fn pause_at(&self, frame: u32) -> bool {
        self.phases.iter().any(|p| match &p.kind {
            PhaseKind::StyleSwitch {
                schedule,
                pause_on_switch,
            } => *pause_on_switch && schedule.switches_at(frame),
            _ => false,
        })
    }
}
