//! Page-side expressions for the configurator's scripting surface.
//!
//! The configurator exposes `window.configurator` with apply/read entry
//! points; every expression guards on its presence the way the page's own
//! glue does.

use crate::camera::CameraPose;
use crate::scene::SceneState;

/// Apply a scene state in-page.
pub fn apply_state(state: &SceneState) -> Result<String, serde_json::Error> {
    let json = serde_json::to_string(state)?;
    Ok(format!(
        "window.configurator ? (window.configurator.applyState({json}), true) : false"
    ))
}

/// Read the current scene state document back.
pub fn read_state() -> &'static str {
    "window.configurator ? window.configurator.getState() : null"
}

/// Position the orbit camera.
pub fn set_camera(pose: &CameraPose) -> String {
    let base = format!(
        "window.configurator ? (window.configurator.setCamera({:.6}, {:.6}, {:.6}) , true) : false",
        pose.alpha, pose.beta, pose.radius
    );
    match pose.target {
        None => base,
        Some([x, y, z]) => format!(
            "window.configurator ? (window.configurator.setCamera({:.6}, {:.6}, {:.6}, \
             [{x:.6}, {y:.6}, {z:.6}]), true) : false",
            pose.alpha, pose.beta, pose.radius
        ),
    }
}

/// Read the current camera pose back.
pub fn read_camera() -> &'static str {
    "window.configurator ? window.configurator.getCamera() : null"
}
