//! Closed-form easing curves (Penner definitions).
//!
//! Each function maps raw progress `k` in [0,1] to eased progress with
//! `f(0) == 0` and `f(1) == 1`. Back and Elastic overshoot [0,1] between the
//! endpoints. Inputs outside [0,1] extrapolate the formula; the result is not
//! otherwise defined.
//!
//! InOut variants scale `k` into [0,2], run the In shape on the first half
//! and the mirrored Out shape on the second, then halve:
//! `cubic_in_out(0.25) == 0.5 * (2.0 * 0.25)^3 == 0.0625`.

use std::f32::consts::PI;

/// Back overshoot amount (~10% past the target).
pub const BACK_OVERSHOOT: f32 = 1.70158;
/// Back overshoot used by the InOut variant.
pub const BACK_OVERSHOOT_IN_OUT: f32 = BACK_OVERSHOOT * 1.525;

const ELASTIC_PERIOD: f32 = 0.4;
const ELASTIC_SHIFT: f32 = 0.1;

const BOUNCE_SCALE: f32 = 7.5625;
const BOUNCE_SPAN: f32 = 2.75;

#[inline]
pub fn linear(k: f32) -> f32 {
    k
}

// Quadratic

#[inline]
pub fn quadratic_in(k: f32) -> f32 {
    k * k
}

#[inline]
pub fn quadratic_out(k: f32) -> f32 {
    k * (2.0 - k)
}

#[inline]
pub fn quadratic_in_out(k: f32) -> f32 {
    let k = k * 2.0;
    if k < 1.0 {
        0.5 * k * k
    } else {
        let k = k - 1.0;
        -0.5 * (k * (k - 2.0) - 1.0)
    }
}

// Cubic

#[inline]
pub fn cubic_in(k: f32) -> f32 {
    k * k * k
}

#[inline]
pub fn cubic_out(k: f32) -> f32 {
    let k = k - 1.0;
    1.0 + k * k * k
}

#[inline]
pub fn cubic_in_out(k: f32) -> f32 {
    let k = k * 2.0;
    if k < 1.0 {
        0.5 * k * k * k
    } else {
        let k = k - 2.0;
        0.5 * (k * k * k + 2.0)
    }
}

// Quartic

#[inline]
pub fn quartic_in(k: f32) -> f32 {
    k * k * k * k
}

#[inline]
pub fn quartic_out(k: f32) -> f32 {
    let k = k - 1.0;
    1.0 - k * k * k * k
}

#[inline]
pub fn quartic_in_out(k: f32) -> f32 {
    let k = k * 2.0;
    if k < 1.0 {
        0.5 * k * k * k * k
    } else {
        let k = k - 2.0;
        -0.5 * (k * k * k * k - 2.0)
    }
}

// Quintic

#[inline]
pub fn quintic_in(k: f32) -> f32 {
    k * k * k * k * k
}

#[inline]
pub fn quintic_out(k: f32) -> f32 {
    let k = k - 1.0;
    1.0 + k * k * k * k * k
}

#[inline]
pub fn quintic_in_out(k: f32) -> f32 {
    let k = k * 2.0;
    if k < 1.0 {
        0.5 * k * k * k * k * k
    } else {
        let k = k - 2.0;
        0.5 * (k * k * k * k * k + 2.0)
    }
}

// Circular

/// `sqrt(1 - k^2)` with the radicand floored at zero so `k` drifting just
/// past ±1 stays finite.
#[inline]
fn unit_circle(k: f32) -> f32 {
    (1.0 - k * k).max(0.0).sqrt()
}

#[inline]
pub fn circular_in(k: f32) -> f32 {
    1.0 - unit_circle(k)
}

#[inline]
pub fn circular_out(k: f32) -> f32 {
    let k = k - 1.0;
    unit_circle(k)
}

#[inline]
pub fn circular_in_out(k: f32) -> f32 {
    let k = k * 2.0;
    if k < 1.0 {
        -0.5 * (unit_circle(k) - 1.0)
    } else {
        let k = k - 2.0;
        0.5 * (unit_circle(k) + 1.0)
    }
}

// Exponential: 2^(10(k-1)) never reaches 0 on its own, so the boundaries are explicit.

#[inline]
pub fn exponential_in(k: f32) -> f32 {
    if k == 0.0 {
        0.0
    } else {
        2f32.powf(10.0 * (k - 1.0))
    }
}

#[inline]
pub fn exponential_out(k: f32) -> f32 {
    if k == 1.0 {
        1.0
    } else {
        1.0 - 2f32.powf(-10.0 * k)
    }
}

#[inline]
pub fn exponential_in_out(k: f32) -> f32 {
    if k == 0.0 {
        return 0.0;
    }
    if k == 1.0 {
        return 1.0;
    }
    let k = k * 2.0;
    if k < 1.0 {
        0.5 * 2f32.powf(10.0 * (k - 1.0))
    } else {
        0.5 * (2.0 - 2f32.powf(-10.0 * (k - 1.0)))
    }
}

// Elastic

#[inline]
fn elastic_wave(k: f32) -> f32 {
    ((k - ELASTIC_SHIFT) * 2.0 * PI / ELASTIC_PERIOD).sin()
}

#[inline]
pub fn elastic_in(k: f32) -> f32 {
    if k == 0.0 {
        return 0.0;
    }
    if k == 1.0 {
        return 1.0;
    }
    let k = k - 1.0;
    -2f32.powf(10.0 * k) * elastic_wave(k)
}

#[inline]
pub fn elastic_out(k: f32) -> f32 {
    if k == 0.0 {
        return 0.0;
    }
    if k == 1.0 {
        return 1.0;
    }
    2f32.powf(-10.0 * k) * elastic_wave(k) + 1.0
}

#[inline]
pub fn elastic_in_out(k: f32) -> f32 {
    if k == 0.0 {
        return 0.0;
    }
    if k == 1.0 {
        return 1.0;
    }
    let k = k * 2.0 - 1.0;
    if k < 0.0 {
        -0.5 * 2f32.powf(10.0 * k) * elastic_wave(k)
    } else {
        0.5 * 2f32.powf(-10.0 * k) * elastic_wave(k) + 1.0
    }
}

// Back

#[inline]
pub fn back_in(k: f32) -> f32 {
    let s = BACK_OVERSHOOT;
    k * k * ((s + 1.0) * k - s)
}

#[inline]
pub fn back_out(k: f32) -> f32 {
    let s = BACK_OVERSHOOT;
    let k = k - 1.0;
    k * k * ((s + 1.0) * k + s) + 1.0
}

#[inline]
pub fn back_in_out(k: f32) -> f32 {
    let s = BACK_OVERSHOOT_IN_OUT;
    let k = k * 2.0;
    if k < 1.0 {
        0.5 * (k * k * ((s + 1.0) * k - s))
    } else {
        let k = k - 2.0;
        0.5 * (k * k * ((s + 1.0) * k + s) + 2.0)
    }
}

// Bounce: four parabolic arcs, never below zero.

#[inline]
pub fn bounce_out(k: f32) -> f32 {
    if k < 1.0 / BOUNCE_SPAN {
        BOUNCE_SCALE * k * k
    } else if k < 2.0 / BOUNCE_SPAN {
        let k = k - 1.5 / BOUNCE_SPAN;
        BOUNCE_SCALE * k * k + 0.75
    } else if k < 2.5 / BOUNCE_SPAN {
        let k = k - 2.25 / BOUNCE_SPAN;
        BOUNCE_SCALE * k * k + 0.9375
    } else {
        let k = k - 2.625 / BOUNCE_SPAN;
        BOUNCE_SCALE * k * k + 0.984375
    }
}

#[inline]
pub fn bounce_in(k: f32) -> f32 {
    1.0 - bounce_out(1.0 - k)
}

#[inline]
pub fn bounce_in_out(k: f32) -> f32 {
    if k < 0.5 {
        bounce_in(k * 2.0) * 0.5
    } else {
        bounce_out(k * 2.0 - 1.0) * 0.5 + 0.5
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f32 = 1e-5;

    #[test]
    fn back_in_dips_below_zero() {
        // 0.25 * (2.70158 * 0.5 - 1.70158)
        assert!((back_in(0.5) + 0.087_697_5).abs() < EPS);
        assert!((back_out(0.5) - 1.087_697_5).abs() < EPS);
    }

    #[test]
    fn exponential_boundaries_are_exact() {
        assert_eq!(exponential_in(0.0), 0.0);
        assert_eq!(exponential_out(1.0), 1.0);
        assert_eq!(exponential_in_out(0.0), 0.0);
        assert_eq!(exponential_in_out(1.0), 1.0);
        // Without the special case 2^-10 would leak through.
        assert!(exponential_in(1e-6) > 0.0 && exponential_in(1e-6) < 1e-3);
    }

    #[test]
    fn bounce_never_negative() {
        for i in 0..=1000 {
            let k = i as f32 / 1000.0;
            assert!(bounce_in(k) >= -EPS, "bounce_in({k}) = {}", bounce_in(k));
            assert!(bounce_out(k) >= -EPS, "bounce_out({k}) = {}", bounce_out(k));
            assert!(bounce_in_out(k) >= -EPS);
        }
    }

    #[test]
    fn circular_stays_finite_past_the_ends() {
        let over = 1.0 + f32::EPSILON;
        let under = -f32::EPSILON;
        assert_eq!(circular_in(over), 1.0);
        assert_eq!(circular_out(under), 0.0);
        assert!(circular_in_out(over).is_finite());
        assert!(circular_in_out(under).is_finite());
        assert!((circular_in(0.5) - 0.133_974_6).abs() < EPS);
    }

    #[test]
    fn bounce_arc_joins() {
        assert!((bounce_out(0.5) - 0.765_625).abs() < EPS);
        assert!((bounce_in_out(0.5) - 0.5).abs() < EPS);
    }

    #[test]
    fn elastic_amplitude_decays() {
        // Peaks of the out curve shrink as k grows.
        let early = (elastic_out(0.2) - 1.0).abs();
        let late = (elastic_out(0.8) - 1.0).abs();
        assert!(late < early);
        assert!((elastic_out(0.5) - 1.0).abs() < 1e-4);
    }

    #[test]
    fn in_out_midpoints() {
        assert!((quadratic_in_out(0.5) - 0.5).abs() < EPS);
        assert!((cubic_in_out(0.5) - 0.5).abs() < EPS);
        assert!((quartic_in_out(0.5) - 0.5).abs() < EPS);
        assert!((quintic_in_out(0.5) - 0.5).abs() < EPS);
        assert!((circular_in_out(0.5) - 0.5).abs() < EPS);
        assert!((exponential_in_out(0.5) - 0.5).abs() < EPS);
        assert!((back_in_out(0.5) - 0.5).abs() < EPS);
        assert!((elastic_in_out(0.5) - 0.5).abs() < 1e-4);
    }

    #[test]
    fn cubic_in_out_quarter() {
        assert!((cubic_in_out(0.25) - 0.0625).abs() < 1e-7);
    }
}
