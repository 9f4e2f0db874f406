//! Easing laws for camera-path progress.
//!
//! The capture scripts shipped two families of curves: a three-phase
//! trapezoidal law (ease-in / linear / ease-out) and a symmetric quadratic
//! in/out law. The trapezoidal middle phase drifted across script variants;
//! both wordings are preserved here as independently named variants and are
//! never unified.

use serde::{Deserialize, Serialize};

/// A progress-remapping curve: normalized time in, eased time out.
///
/// Every law maps 0 → 0 and 1 → 1. Callers are responsible for clamping the
/// input to `[0, 1]`; the functions are total over that domain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Easing {
    /// No remapping.
    Linear,
    /// Three equal phases; middle phase `0.5 + (t - 0.333) / 0.334 * 0.334`.
    ///
    /// Continuous with the ease-in endpoint (`t'(0.333) = 0.5`) but steps
    /// down to the ease-out start at the second boundary.
    TrapezoidalA,
    /// Three equal phases; middle phase `0.333 + (t - 0.333)`.
    ///
    /// Continuous with the ease-out start (`t'(0.667) ≈ 0.667`) but steps
    /// down from the ease-in endpoint at the first boundary.
    TrapezoidalB,
    /// `2t²` below the midpoint, `1 - 2(1-t)²` above — C¹ at `t = 0.5`.
    QuadraticInOut,
}

impl Easing {
    /// Apply the easing law to a normalized time value.
    pub fn apply(self, t: f64) -> f64 {
        match self {
            Self::Linear => t,
            Self::TrapezoidalA => trapezoid(t, MiddleVariant::A),
            Self::TrapezoidalB => trapezoid(t, MiddleVariant::B),
            Self::QuadraticInOut => {
                if t < 0.5 {
                    2.0 * t * t
                } else {
                    1.0 - 2.0 * (1.0 - t) * (1.0 - t)
                }
            }
        }
    }
}

enum MiddleVariant {
    A,
    B,
}

/// Three-phase trapezoidal curve over `[0, 0.333)`, `[0.333, 0.667)`,
/// `[0.667, 1]`.
///
/// Phase 1 is a quadratic ease-in reaching ~0.5, phase 3 a quadratic
/// ease-out from 0.667 to 1. The middle phase is the variant-specific
/// linear segment; the source scripts disagreed on its intercept and the
/// disagreement is preserved (see `Easing::TrapezoidalA` / `B`).
fn trapezoid(t: f64, middle: MiddleVariant) -> f64 {
    if t < 0.333 {
        1.5 * t * t / 0.333
    } else if t < 0.667 {
        match middle {
            MiddleVariant::A => 0.5 + (t - 0.333) / 0.334 * 0.334,
            MiddleVariant::B => 0.333 + (t - 0.333),
        }
    } else {
        let u = (t - 0.667) / 0.333;
        0.667 + 0.333 * (2.0 * u - u * u)
    }
}
