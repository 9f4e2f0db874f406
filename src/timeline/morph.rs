//! Eased interpolation of the integer dimension fields.

use crate::camera::Easing;
use serde::{Deserialize, Serialize};

/// Morphs width/depth between two keyframe values.
///
/// Values are interpolated with the configured easing law and rounded to the
/// nearest integer per frame. Progress 0 yields exactly the start values and
/// progress 1 exactly the end values.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DimensionMorph {
    /// Width (from, to), scene units.
    pub width: (u32, u32),
    /// Depth (from, to), scene units.
    pub depth: (u32, u32),
    pub easing: Easing,
}

impl DimensionMorph {
    /// Width and depth at local progress `t` in `[0, 1]`.
    pub fn at(&self, t: f64) -> (u32, u32) {
        let e = self.easing.apply(t.clamp(0.0, 1.0));
        (lerp_round(self.width, e), lerp_round(self.depth, e))
    }
}

fn lerp_round((from, to): (u32, u32), t: f64) -> u32 {
    let v = f64::from(from) + (f64::from(to) - f64::from(from)) * t;
    v.round() as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    fn morph() -> DimensionMorph {
        DimensionMorph {
            width: (2400, 3600),
            depth: (1800, 2400),
            easing: Easing::QuadraticInOut,
        }
    }

    #[test]
    fn endpoints_are_exact() {
        assert_eq!(morph().at(0.0), (2400, 1800));
        assert_eq!(morph().at(1.0), (3600, 2400));
    }

    #[test]
    fn midpoint_is_halfway_for_symmetric_easing() {
        // QuadraticInOut maps 0.5 to 0.5.
        assert_eq!(morph().at(0.5), (3000, 2100));
    }

    #[test]
    fn shrinking_morph_is_monotone_down() {
        let m = DimensionMorph {
            width: (3600, 2400),
            depth: (2400, 2400),
            easing: Easing::Linear,
        };
        let mut prev = m.at(0.0).0;
        for i in 1..=10 {
            let w = m.at(f64::from(i) / 10.0).0;
            assert!(w <= prev);
            prev = w;
        }
        assert_eq!(m.at(1.0), (2400, 2400));
    }
}
