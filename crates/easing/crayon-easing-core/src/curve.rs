//! Resolved easing selection.
//!
//! Tween helpers take an `(Easing, cubic_bezier)` pair where the string only
//! matters for `Easing::Custom`. [`EasingCurve::resolve`] turns that pair into
//! a single value up front so a malformed curve fails before any frame is
//! sampled.

use serde::{Deserialize, Serialize};

use crate::bezier::CubicBezier;
use crate::easing::{evaluate, Easing};
use crate::error::EasingError;
use crate::Result;

/// Either a closed-form easing or a cubic-bezier curve.
///
/// JSON form is untagged: `"CubicInOut"` or `[0.25, 0.1, 0.25, 1.0]`.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum EasingCurve {
    Named(Easing),
    Bezier(CubicBezier),
}

impl EasingCurve {
    /// Resolve an easing and its optional control-point string.
    ///
    /// `Custom` requires `cubic_bezier` to hold four comma-separated numbers;
    /// every other member ignores it.
    pub fn resolve(easing: Easing, cubic_bezier: &str) -> Result<Self> {
        match easing {
            Easing::Custom => cubic_bezier.parse().map(EasingCurve::Bezier),
            named => Ok(EasingCurve::Named(named)),
        }
    }

    /// Parse either a member name or a control-point string.
    pub fn parse(input: &str) -> Result<Self> {
        if input.contains(',') {
            return input.parse().map(EasingCurve::Bezier);
        }
        match input.parse::<Easing>()? {
            Easing::Custom => Err(EasingError::curve_spec(
                input,
                "Custom needs control points",
            )),
            named => Ok(EasingCurve::Named(named)),
        }
    }

    /// Eased progress at raw progress `t`.
    #[inline]
    pub fn sample(&self, t: f32) -> f32 {
        match self {
            EasingCurve::Named(easing) => evaluate(*easing, t),
            EasingCurve::Bezier(curve) => curve.solve(t),
        }
    }

    /// The selector this curve was resolved from.
    pub fn easing(&self) -> Easing {
        match self {
            EasingCurve::Named(easing) => *easing,
            EasingCurve::Bezier(_) => Easing::Custom,
        }
    }
}

impl Default for EasingCurve {
    fn default() -> Self {
        EasingCurve::Named(Easing::Linear)
    }
}

/// `Easing::Custom` has no control points to carry and samples as `Linear`;
/// that conversion is logged as a warning. Use [`EasingCurve::resolve`] to
/// attach a curve.
impl From<Easing> for EasingCurve {
    fn from(easing: Easing) -> Self {
        if easing.is_custom() {
            log::warn!("Easing::Custom used without control points, sampling as Linear");
        }
        EasingCurve::Named(easing)
    }
}

impl From<CubicBezier> for EasingCurve {
    fn from(curve: CubicBezier) -> Self {
        EasingCurve::Bezier(curve)
    }
}
