//! Built-in capture scenarios, one per original capture script.

use crate::camera::{Easing, Modulation, PathParams};
use crate::scene::{RoofStyle, SceneState};
use crate::sequence::FrameFileStyle;
use crate::timeline::{
    DimensionMorph, FrameNorm, Phase, PhaseKind, Span, StyleSchedule, Timeline, ToggleWindow,
    VisibilityStaging,
};
use serde::{Deserialize, Serialize};
use std::f64::consts::TAU;

/// How scene state reaches the page on each frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DriveMode {
    /// Re-navigate with the state base64-encoded in the `state=` parameter.
    /// The page rebuilds the scene from scratch each frame.
    NavigateState,
    /// Apply the state in-page through a single evaluate call.
    EvaluateState,
}

/// A named capture plan.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scenario {
    pub name: String,
    pub timeline: Timeline,
    pub drive: DriveMode,
    pub file_style: FrameFileStyle,
    /// Per-frame settle delay before the screenshot, milliseconds.
    pub settle_ms: u64,
    /// Extra hold after a style switch, milliseconds.
    pub style_pause_ms: u64,
}

/// Names of the built-in scenarios, in presentation order.
pub fn builtin_names() -> &'static [&'static str] {
    &["orbit", "morph", "roof-showcase", "walkthrough"]
}

/// Look up a built-in scenario by name.
pub fn builtin(name: &str) -> Option<Scenario> {
    match name {
        "orbit" => Some(orbit()),
        "morph" => Some(morph()),
        "roof-showcase" => Some(roof_showcase()),
        "walkthrough" => Some(walkthrough()),
        _ => None,
    }
}

/// Full 360-frame looping revolution. End-inclusive normalization so frame
/// 360 lands exactly one turn past frame 1.
fn orbit() -> Scenario {
    Scenario {
        name: "orbit".to_string(),
        timeline: Timeline {
            total_frames: 360,
            norm: FrameNorm::EndInclusive,
            base: SceneState::default(),
            path: PathParams {
                start_alpha: -2.15,
                alpha_delta: TAU,
                beta_range: (0.95, 1.25),
                radius_range: (10.0, 14.0),
                target: None,
                easing: Easing::TrapezoidalB,
                modulation: Modulation::InPhase,
            },
            phases: vec![Phase {
                name: "hold".to_string(),
                span: Span { start: 1, end: 360 },
                kind: PhaseKind::Hold,
            }],
        },
        drive: DriveMode::NavigateState,
        file_style: FrameFileStyle::Hyphen,
        settle_ms: 250,
        style_pause_ms: 0,
    }
}

/// Grow the shed from 2400×1800 to 3600×2400 mid-sequence while the camera
/// sweeps a half revolution pulled in close at the extremes.
fn morph() -> Scenario {
    Scenario {
        name: "morph".to_string(),
        timeline: Timeline {
            total_frames: 180,
            norm: FrameNorm::ZeroBased,
            base: SceneState::default(),
            path: PathParams {
                start_alpha: -2.15,
                alpha_delta: TAU / 2.0,
                beta_range: (1.0, 1.2),
                radius_range: (9.0, 12.0),
                target: None,
                easing: Easing::TrapezoidalA,
                modulation: Modulation::Inverted,
            },
            phases: vec![
                Phase {
                    name: "lead-in".to_string(),
                    span: Span { start: 1, end: 30 },
                    kind: PhaseKind::Hold,
                },
                Phase {
                    name: "grow".to_string(),
                    span: Span { start: 30, end: 150 },
                    kind: PhaseKind::Morph(DimensionMorph {
                        width: (2400, 3600),
                        depth: (1800, 2400),
                        easing: Easing::QuadraticInOut,
                    }),
                },
            ],
        },
        drive: DriveMode::NavigateState,
        file_style: FrameFileStyle::Hyphen,
        settle_ms: 300,
        style_pause_ms: 0,
    }
}

/// Step through the roof variants on fixed frame triggers, pausing after
/// each switch so the rebuild settles before the next screenshot.
fn roof_showcase() -> Scenario {
    Scenario {
        name: "roof-showcase".to_string(),
        timeline: Timeline {
            total_frames: 360,
            norm: FrameNorm::ZeroBased,
            base: SceneState::default(),
            path: PathParams {
                start_alpha: -2.15,
                alpha_delta: TAU,
                beta_range: (1.1, 1.1),
                radius_range: (12.0, 12.0),
                target: None,
                easing: Easing::QuadraticInOut,
                modulation: Modulation::InPhase,
            },
            phases: vec![Phase {
                name: "roof-styles".to_string(),
                span: Span { start: 1, end: 360 },
                kind: PhaseKind::StyleSwitch {
                    schedule: StyleSchedule {
                        breakpoints: vec![
                            (0, RoofStyle::Apex),
                            (90, RoofStyle::Pent),
                            (180, RoofStyle::Hipped),
                            (240, RoofStyle::Apex),
                        ],
                    },
                    pause_on_switch: true,
                },
            }],
        },
        drive: DriveMode::EvaluateState,
        file_style: FrameFileStyle::Underscore,
        settle_ms: 200,
        style_pause_ms: 500,
    }
}

/// Peel the build layers off one at a time, then restore them in assembly
/// order. The off-order and on-order are independent data — the restore is
/// deliberately not the reverse of the teardown.
fn walkthrough() -> Scenario {
    let layers = [
        "roof", "trusses", "cladding", "frame", "floor", "base", "ground",
    ];
    Scenario {
        name: "walkthrough".to_string(),
        timeline: Timeline {
            total_frames: 360,
            norm: FrameNorm::HalfTurn,
            base: SceneState::with_layers(layers),
            path: PathParams {
                start_alpha: 0.4,
                alpha_delta: TAU,
                beta_range: (0.9, 1.3),
                radius_range: (8.0, 13.0),
                target: Some([0.0, 1.1, 0.0]),
                easing: Easing::QuadraticInOut,
                modulation: Modulation::Inverted,
            },
            phases: vec![Phase {
                name: "layer-staging".to_string(),
                span: Span { start: 1, end: 360 },
                kind: PhaseKind::Visibility(VisibilityStaging {
                    off: ToggleWindow {
                        order: layers.iter().map(|s| s.to_string()).collect(),
                        window: (0.15, 0.55),
                    },
                    on: ToggleWindow {
                        // Assembly order, ground up.
                        order: ["ground", "base", "floor", "frame", "cladding", "trusses", "roof"]
                            .iter()
                            .map(|s| s.to_string())
                            .collect(),
                        window: (0.65, 0.95),
                    },
                }),
            }],
        },
        drive: DriveMode::EvaluateState,
        file_style: FrameFileStyle::Hyphen,
        settle_ms: 150,
        style_pause_ms: 0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_builtin_resolves() {
        for name in builtin_names() {
            let scenario = builtin(name).unwrap();
            assert_eq!(&scenario.name, name);
            assert!(scenario.timeline.total_frames > 0);
        }
    }

    #[test]
    fn unknown_name_is_none() {
        assert!(builtin("no-such-scenario").is_none());
    }

    #[test]
    fn scenarios_round_trip_through_json() {
        let scenario = builtin("walkthrough").unwrap();
        let text = serde_json::to_string(&scenario).unwrap();
        let back: Scenario = serde_json::from_str(&text).unwrap();
        assert_eq!(back, scenario);
    }
}
