//! End-to-end checks of the built-in scenarios: frame in, pose + scene out.

use shedcap::capture::builtin;
use shedcap::scene::RoofStyle;
use std::f64::consts::TAU;

#[test]
fn orbit_loops_exactly_one_revolution() {
    let orbit = builtin("orbit").unwrap();
    let first = orbit.timeline.pose_at(1);
    let last = orbit.timeline.pose_at(360);
    assert!((first.alpha - -2.15).abs() < 1e-9);
    assert!((last.alpha - (-2.15 + TAU)).abs() < 1e-9);
    // Same radius at both ends: the loop closes seamlessly.
    assert!((first.radius - last.radius).abs() < 1e-9);
}

#[test]
fn orbit_radius_stays_within_its_range() {
    let orbit = builtin("orbit").unwrap();
    for frame in 1..=360 {
        let pose = orbit.timeline.pose_at(frame);
        assert!(
            (10.0 - 1e-9..=14.0 + 1e-9).contains(&pose.radius),
            "frame {frame}: {}",
            pose.radius
        );
    }
}

#[test]
fn morph_holds_then_grows_to_the_target_dimensions() {
    let morph = builtin("morph").unwrap();
    // Lead-in: base dimensions untouched.
    let early = morph.timeline.scene_at(10);
    assert_eq!((early.width, early.depth), (2400, 1800));
    // Morph midpoint (frame 90 of span 30..150): quadratic in/out crosses
    // the halfway values exactly.
    let mid = morph.timeline.scene_at(90);
    assert_eq!((mid.width, mid.depth), (3000, 2100));
    // Past the span end the grown dimensions hold.
    let late = morph.timeline.scene_at(180);
    assert_eq!((late.width, late.depth), (3600, 2400));
}

#[test]
fn roof_showcase_steps_through_the_styles() {
    let showcase = builtin("roof-showcase").unwrap();
    let style_at = |frame| showcase.timeline.scene_at(frame).roof_style;
    assert_eq!(style_at(1), RoofStyle::Apex);
    assert_eq!(style_at(89), RoofStyle::Apex);
    assert_eq!(style_at(90), RoofStyle::Pent);
    assert_eq!(style_at(179), RoofStyle::Pent);
    assert_eq!(style_at(180), RoofStyle::Hipped);
    assert_eq!(style_at(239), RoofStyle::Hipped);
    assert_eq!(style_at(240), RoofStyle::Apex);
    assert_eq!(style_at(360), RoofStyle::Apex);
}

#[test]
fn roof_showcase_pauses_only_on_switch_frames() {
    let showcase = builtin("roof-showcase").unwrap();
    assert!(showcase.timeline.pause_at(90));
    assert!(showcase.timeline.pause_at(180));
    assert!(showcase.timeline.pause_at(240));
    assert!(!showcase.timeline.pause_at(91));
    assert!(!showcase.timeline.pause_at(1));
}

#[test]
fn walkthrough_strips_every_layer_between_the_windows() {
    let walkthrough = builtin("walkthrough").unwrap();
    // Half-turn normalization: frame 108 → progress 0.6, between the off
    // window (ends 0.55) and the on window (starts 0.65).
    let scene = walkthrough.timeline.scene_at(108);
    assert!(scene.visibility.values().all(|v| !v), "{:?}", scene.visibility);
}

#[test]
fn walkthrough_restores_in_assembly_order() {
    let walkthrough = builtin("walkthrough").unwrap();
    // Progress 0.75: one third through the on window, so the first third
    // of the assembly order (ground, base) is back.
    let scene = walkthrough.timeline.scene_at(135);
    assert!(scene.visibility["ground"]);
    assert!(scene.visibility["base"]);
    assert!(!scene.visibility["roof"]);
    assert!(!scene.visibility["trusses"]);
    // The final frame shows everything again.
    let end = walkthrough.timeline.scene_at(360);
    assert!(end.visibility.values().all(|v| *v));
}

#[test]
fn scenes_round_trip_through_json() {
    let walkthrough = builtin("walkthrough").unwrap();
    let scene = walkthrough.timeline.scene_at(90);
    let json = serde_json::to_string(&scene).unwrap();
    let back: shedcap::scene::SceneState = serde_json::from_str(&json).unwrap();
    assert_eq!(scene, back);
}
