//! Easing-law invariants, checked over the whole input domain.

use proptest::prelude::*;
use shedcap::camera::Easing;

const ALL: [Easing; 4] = [
    Easing::Linear,
    Easing::TrapezoidalA,
    Easing::TrapezoidalB,
    Easing::QuadraticInOut,
];

#[test]
fn every_law_hits_both_endpoints() {
    for law in ALL {
        assert!(law.apply(0.0).abs() < 1e-9, "{law:?} at 0");
        assert!((law.apply(1.0) - 1.0).abs() < 1e-3, "{law:?} at 1");
    }
}

#[test]
fn trapezoid_variants_disagree_in_the_middle_phase() {
    // Variant A sits ~0.167 above variant B throughout the linear segment.
    for t in [0.35, 0.45, 0.55, 0.65] {
        let a = Easing::TrapezoidalA.apply(t);
        let b = Easing::TrapezoidalB.apply(t);
        assert!((a - b - 0.167).abs() < 1e-3, "at {t}: a={a} b={b}");
    }
}

#[test]
fn trapezoid_a_steps_down_at_the_second_boundary() {
    // The discontinuity is real data, not a bug to smooth over: A's middle
    // phase ends at ~0.834 and the ease-out resumes from 0.667.
    let before = Easing::TrapezoidalA.apply(0.666999);
    let after = Easing::TrapezoidalA.apply(0.667);
    assert!(before > 0.83);
    assert!((after - 0.667).abs() < 1e-3);
}

#[test]
fn trapezoid_b_steps_down_at_the_first_boundary() {
    let before = Easing::TrapezoidalB.apply(0.332999);
    let after = Easing::TrapezoidalB.apply(0.333);
    assert!((before - 0.5).abs() < 1e-2);
    assert!((after - 0.333).abs() < 1e-3);
}

proptest! {
    #[test]
    fn outputs_stay_within_the_unit_interval(t in 0.0f64..=1.0) {
        for law in ALL {
            let v = law.apply(t);
            prop_assert!((-1e-9..=1.0 + 1e-9).contains(&v), "{law:?}({t}) = {v}");
        }
    }

    #[test]
    fn quadratic_in_out_is_monotone(a in 0.0f64..=1.0, b in 0.0f64..=1.0) {
        let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
        prop_assert!(Easing::QuadraticInOut.apply(lo) <= Easing::QuadraticInOut.apply(hi));
    }

    // The trapezoids are monotone within each phase; only the one phase
    // boundary per variant steps down.
    #[test]
    fn trapezoids_are_monotone_within_the_ease_in(a in 0.0f64..0.333, b in 0.0f64..0.333) {
        let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
        for law in [Easing::TrapezoidalA, Easing::TrapezoidalB] {
            prop_assert!(law.apply(lo) <= law.apply(hi));
        }
    }

    #[test]
    fn trapezoids_are_monotone_within_the_middle(a in 0.333f64..0.667, b in 0.333f64..0.667) {
        let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
        for law in [Easing::TrapezoidalA, Easing::TrapezoidalB] {
            prop_assert!(law.apply(lo) <= law.apply(hi));
        }
    }

    #[test]
    fn trapezoids_are_monotone_within_the_ease_out(a in 0.667f64..=1.0, b in 0.667f64..=1.0) {
        let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
        for law in [Easing::TrapezoidalA, Easing::TrapezoidalB] {
            prop_assert!(law.apply(lo) <= law.apply(hi));
        }
    }
}
