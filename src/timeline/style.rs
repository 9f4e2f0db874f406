//! Discrete roof-style switching — a step function over frame index.

use crate::scene::RoofStyle;
use serde::{Deserialize, Serialize};

/// Ordered `(trigger frame, style)` breakpoints.
///
/// The style at a frame is the last breakpoint whose trigger has been
/// reached. No validation is performed: unsorted or overlapping breakpoints
/// step through whatever data was supplied.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StyleSchedule {
    pub breakpoints: Vec<(u32, RoofStyle)>,
}

impl StyleSchedule {
    /// Style in effect at `frame`, or `None` when no trigger has been
    /// reached yet (a schedule starting after frame 0).
    pub fn style_at(&self, frame: u32) -> Option<RoofStyle> {
        self.breakpoints
            .iter()
            .filter(|(trigger, _)| *trigger <= frame)
            .last()
            .map(|(_, style)| *style)
    }

    /// Whether a breakpoint triggers exactly at `frame`.
    ///
    /// The capture runner uses this to insert the optional hold-and-pause
    /// after a style switch.
    pub fn switches_at(&self, frame: u32) -> bool {
        frame != 0 && self.breakpoints.iter().any(|(trigger, _)| *trigger == frame)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn showcase() -> StyleSchedule {
        StyleSchedule {
            breakpoints: vec![
                (0, RoofStyle::Apex),
                (90, RoofStyle::Pent),
                (180, RoofStyle::Hipped),
                (240, RoofStyle::Apex),
            ],
        }
    }

    #[test]
    fn last_reached_trigger_wins() {
        let s = showcase();
        assert_eq!(s.style_at(0), Some(RoofStyle::Apex));
        assert_eq!(s.style_at(89), Some(RoofStyle::Apex));
        assert_eq!(s.style_at(90), Some(RoofStyle::Pent));
        assert_eq!(s.style_at(239), Some(RoofStyle::Hipped));
        assert_eq!(s.style_at(240), Some(RoofStyle::Apex));
        assert_eq!(s.style_at(359), Some(RoofStyle::Apex));
    }

    #[test]
    fn switch_detection_skips_frame_zero() {
        let s = showcase();
        assert!(!s.switches_at(0));
        assert!(s.switches_at(90));
        assert!(!s.switches_at(91));
    }

    #[test]
    fn empty_schedule_has_no_style() {
        let s = StyleSchedule { breakpoints: vec![] };
        assert_eq!(s.style_at(100), None);
    }
}
