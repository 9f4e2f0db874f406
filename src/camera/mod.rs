//! Camera-path interpolation: normalized progress in, camera pose out.
//!
//! Pure computation — no I/O, no mutation. A pose is computed fresh per
//! frame and has no identity across frames.

pub mod easing;

pub use easing::Easing;

use serde::{Deserialize, Serialize};
use std::f64::consts::TAU;

/// One camera pose in the configurator's orbit-camera terms.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CameraPose {
    /// Yaw, radians.
    pub alpha: f64,
    /// Elevation, radians.
    pub beta: f64,
    /// Distance from the target, scene units.
    pub radius: f64,
    /// Optional look-at point; `None` leaves the scene's own target alone.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target: Option<[f64; 3]>,
}

/// Polarity of the cosine modulation applied to elevation and radius.
///
/// Both polarities appear across the capture variants, so the sign is a
/// parameter rather than a convention.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Modulation {
    /// Wide and high at the sequence extremes, close and low at the midpoint.
    InPhase,
    /// Close and low at the extremes, wide and high at the midpoint.
    Inverted,
}

/// Parameters describing one camera path.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PathParams {
    /// Yaw at progress 0, radians.
    pub start_alpha: f64,
    /// Total yaw sweep, radians. `TAU` for a full looping revolution.
    pub alpha_delta: f64,
    /// Elevation range (min, max), radians.
    pub beta_range: (f64, f64),
    /// Radius range (min, max), scene units. Equal values pin the radius.
    pub radius_range: (f64, f64),
    /// Look-at point carried into every pose.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub target: Option<[f64; 3]>,
    /// Which easing law remaps progress before the pose math.
    pub easing: Easing,
    /// Polarity of the elevation/radius modulation.
    pub modulation: Modulation,
}

impl PathParams {
    /// A full looping orbit with a fixed radius and elevation.
    pub fn orbit(start_alpha: f64, beta: f64, radius: f64, easing: Easing) -> Self {
        Self {
            start_alpha,
            alpha_delta: TAU,
            beta_range: (beta, beta),
            radius_range: (radius, radius),
            target: None,
            easing,
            modulation: Modulation::InPhase,
        }
    }
}

/// Compute the camera pose for a normalized progress value.
///
/// `progress` is expected in `[0, 1]`; callers clamp. The eased time drives
/// the yaw linearly and modulates elevation/radius through `cos(t'·2π)` —
/// the orbit angle, which is distinct from the yaw itself.
pub fn compute_pose(progress: f64, params: &PathParams) -> CameraPose {
    let eased = params.easing.apply(progress);
    let alpha = params.start_alpha + eased * params.alpha_delta;

    let phase = (eased * TAU).cos();
    let m = match params.modulation {
        Modulation::InPhase => phase,
        Modulation::Inverted => -phase,
    };

    CameraPose {
        alpha,
        beta: span_at(params.beta_range, m),
        radius: span_at(params.radius_range, m),
        target: params.target,
    }
}

/// Map a modulation value in `[-1, 1]` onto a (min, max) span:
/// −1 → min, +1 → max.
fn span_at((min, max): (f64, f64), m: f64) -> f64 {
    let mid = (min + max) / 2.0;
    let half = (max - min) / 2.0;
    mid + half * m
}
