//! Named easings and the dispatch table from [`Easing`] to curve function.

pub mod functions;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::EasingError;

/// Plain easing function: raw progress in, eased progress out.
pub type EasingFn = fn(f32) -> f32;

/// Easing selector. 28 closed-form members plus `Custom`, which needs a
/// cubic-bezier curve supplied separately (see [`crate::EasingCurve`]).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Easing {
    BackIn,
    BackOut,
    BackInOut,
    BounceIn,
    BounceOut,
    BounceInOut,
    CircularIn,
    CircularOut,
    CircularInOut,
    CubicIn,
    CubicOut,
    CubicInOut,
    ElasticIn,
    ElasticOut,
    ElasticInOut,
    ExponentialIn,
    ExponentialOut,
    ExponentialInOut,
    #[default]
    Linear,
    QuadraticIn,
    QuadraticOut,
    QuadraticInOut,
    QuarticIn,
    QuarticOut,
    QuarticInOut,
    QuinticIn,
    QuinticOut,
    QuinticInOut,
    Custom,
}

/// Curve family, independent of phase.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EasingFamily {
    Back,
    Bounce,
    Circular,
    Cubic,
    Elastic,
    Exponential,
    Linear,
    Quadratic,
    Quartic,
    Quintic,
}

/// Which part of a family's shape applies.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EasingPhase {
    In,
    Out,
    InOut,
}

impl Easing {
    /// Every member with a closed-form curve, in declaration order.
    pub const ALL_NAMED: [Easing; 28] = [
        Easing::BackIn,
        Easing::BackOut,
        Easing::BackInOut,
        Easing::BounceIn,
        Easing::BounceOut,
        Easing::BounceInOut,
        Easing::CircularIn,
        Easing::CircularOut,
        Easing::CircularInOut,
        Easing::CubicIn,
        Easing::CubicOut,
        Easing::CubicInOut,
        Easing::ElasticIn,
        Easing::ElasticOut,
        Easing::ElasticInOut,
        Easing::ExponentialIn,
        Easing::ExponentialOut,
        Easing::ExponentialInOut,
        Easing::Linear,
        Easing::QuadraticIn,
        Easing::QuadraticOut,
        Easing::QuadraticInOut,
        Easing::QuarticIn,
        Easing::QuarticOut,
        Easing::QuarticInOut,
        Easing::QuinticIn,
        Easing::QuinticOut,
        Easing::QuinticInOut,
    ];

    /// Closed-form curve for this member; `None` for `Custom`.
    pub fn function(self) -> Option<EasingFn> {
        use functions::*;
        let f: EasingFn = match self {
            Easing::BackIn => back_in,
            Easing::BackOut => back_out,
            Easing::BackInOut => back_in_out,
            Easing::BounceIn => bounce_in,
            Easing::BounceOut => bounce_out,
            Easing::BounceInOut => bounce_in_out,
            Easing::CircularIn => circular_in,
            Easing::CircularOut => circular_out,
            Easing::CircularInOut => circular_in_out,
            Easing::CubicIn => cubic_in,
            Easing::CubicOut => cubic_out,
            Easing::CubicInOut => cubic_in_out,
            Easing::ElasticIn => elastic_in,
            Easing::ElasticOut => elastic_out,
            Easing::ElasticInOut => elastic_in_out,
            Easing::ExponentialIn => exponential_in,
            Easing::ExponentialOut => exponential_out,
            Easing::ExponentialInOut => exponential_in_out,
            Easing::Linear => linear,
            Easing::QuadraticIn => quadratic_in,
            Easing::QuadraticOut => quadratic_out,
            Easing::QuadraticInOut => quadratic_in_out,
            Easing::QuarticIn => quartic_in,
            Easing::QuarticOut => quartic_out,
            Easing::QuarticInOut => quartic_in_out,
            Easing::QuinticIn => quintic_in,
            Easing::QuinticOut => quintic_out,
            Easing::QuinticInOut => quintic_in_out,
            Easing::Custom => return None,
        };
        Some(f)
    }

    #[inline]
    pub fn is_custom(self) -> bool {
        matches!(self, Easing::Custom)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Easing::BackIn => "BackIn",
            Easing::BackOut => "BackOut",
            Easing::BackInOut => "BackInOut",
            Easing::BounceIn => "BounceIn",
            Easing::BounceOut => "BounceOut",
            Easing::BounceInOut => "BounceInOut",
            Easing::CircularIn => "CircularIn",
            Easing::CircularOut => "CircularOut",
            Easing::CircularInOut => "CircularInOut",
            Easing::CubicIn => "CubicIn",
            Easing::CubicOut => "CubicOut",
            Easing::CubicInOut => "CubicInOut",
            Easing::ElasticIn => "ElasticIn",
            Easing::ElasticOut => "ElasticOut",
            Easing::ElasticInOut => "ElasticInOut",
            Easing::ExponentialIn => "ExponentialIn",
            Easing::ExponentialOut => "ExponentialOut",
            Easing::ExponentialInOut => "ExponentialInOut",
            Easing::Linear => "Linear",
            Easing::QuadraticIn => "QuadraticIn",
            Easing::QuadraticOut => "QuadraticOut",
            Easing::QuadraticInOut => "QuadraticInOut",
            Easing::QuarticIn => "QuarticIn",
            Easing::QuarticOut => "QuarticOut",
            Easing::QuarticInOut => "QuarticInOut",
            Easing::QuinticIn => "QuinticIn",
            Easing::QuinticOut => "QuinticOut",
            Easing::QuinticInOut => "QuinticInOut",
            Easing::Custom => "Custom",
        }
    }

    /// Family of a named member; `None` for `Custom`.
    pub fn family(self) -> Option<EasingFamily> {
        use EasingFamily as F;
        let family = match self {
            Easing::BackIn | Easing::BackOut | Easing::BackInOut => F::Back,
            Easing::BounceIn | Easing::BounceOut | Easing::BounceInOut => F::Bounce,
            Easing::CircularIn | Easing::CircularOut | Easing::CircularInOut => F::Circular,
            Easing::CubicIn | Easing::CubicOut | Easing::CubicInOut => F::Cubic,
            Easing::ElasticIn | Easing::ElasticOut | Easing::ElasticInOut => F::Elastic,
            Easing::ExponentialIn | Easing::ExponentialOut | Easing::ExponentialInOut => {
                F::Exponential
            }
            Easing::Linear => F::Linear,
            Easing::QuadraticIn | Easing::QuadraticOut | Easing::QuadraticInOut => F::Quadratic,
            Easing::QuarticIn | Easing::QuarticOut | Easing::QuarticInOut => F::Quartic,
            Easing::QuinticIn | Easing::QuinticOut | Easing::QuinticInOut => F::Quintic,
            Easing::Custom => return None,
        };
        Some(family)
    }

    /// Phase of a named member; `None` for `Linear` and `Custom`.
    pub fn phase(self) -> Option<EasingPhase> {
        match self {
            Easing::Linear | Easing::Custom => None,
            Easing::BackIn
            | Easing::BounceIn
            | Easing::CircularIn
            | Easing::CubicIn
            | Easing::ElasticIn
            | Easing::ExponentialIn
            | Easing::QuadraticIn
            | Easing::QuarticIn
            | Easing::QuinticIn => Some(EasingPhase::In),
            Easing::BackOut
            | Easing::BounceOut
            | Easing::CircularOut
            | Easing::CubicOut
            | Easing::ElasticOut
            | Easing::ExponentialOut
            | Easing::QuadraticOut
            | Easing::QuarticOut
            | Easing::QuinticOut => Some(EasingPhase::Out),
            _ => Some(EasingPhase::InOut),
        }
    }

    /// Rebuild a member from family and phase. `Linear` ignores the phase.
    pub fn from_parts(family: EasingFamily, phase: EasingPhase) -> Easing {
        use EasingFamily as F;
        use EasingPhase as P;
        match (family, phase) {
            (F::Linear, _) => Easing::Linear,
            (F::Back, P::In) => Easing::BackIn,
            (F::Back, P::Out) => Easing::BackOut,
            (F::Back, P::InOut) => Easing::BackInOut,
            (F::Bounce, P::In) => Easing::BounceIn,
            (F::Bounce, P::Out) => Easing::BounceOut,
            (F::Bounce, P::InOut) => Easing::BounceInOut,
            (F::Circular, P::In) => Easing::CircularIn,
            (F::Circular, P::Out) => Easing::CircularOut,
            (F::Circular, P::InOut) => Easing::CircularInOut,
            (F::Cubic, P::In) => Easing::CubicIn,
            (F::Cubic, P::Out) => Easing::CubicOut,
            (F::Cubic, P::InOut) => Easing::CubicInOut,
            (F::Elastic, P::In) => Easing::ElasticIn,
            (F::Elastic, P::Out) => Easing::ElasticOut,
            (F::Elastic, P::InOut) => Easing::ElasticInOut,
            (F::Exponential, P::In) => Easing::ExponentialIn,
            (F::Exponential, P::Out) => Easing::ExponentialOut,
            (F::Exponential, P::InOut) => Easing::ExponentialInOut,
            (F::Quadratic, P::In) => Easing::QuadraticIn,
            (F::Quadratic, P::Out) => Easing::QuadraticOut,
            (F::Quadratic, P::InOut) => Easing::QuadraticInOut,
            (F::Quartic, P::In) => Easing::QuarticIn,
            (F::Quartic, P::Out) => Easing::QuarticOut,
            (F::Quartic, P::InOut) => Easing::QuarticInOut,
            (F::Quintic, P::In) => Easing::QuinticIn,
            (F::Quintic, P::Out) => Easing::QuinticOut,
            (F::Quintic, P::InOut) => Easing::QuinticInOut,
        }
    }

    /// Shorthand lookup by family name (`"cubic"` -> `CubicInOut`).
    ///
    /// Case-insensitive. Unknown names fall back to `Linear`, matching the
    /// string overloads of the tween helpers.
    pub fn from_family_name(name: &str) -> Easing {
        let family = match name.trim().to_ascii_lowercase().as_str() {
            "back" => EasingFamily::Back,
            "bounce" => EasingFamily::Bounce,
            "circular" => EasingFamily::Circular,
            "cubic" => EasingFamily::Cubic,
            "elastic" => EasingFamily::Elastic,
            "exponential" => EasingFamily::Exponential,
            "linear" => EasingFamily::Linear,
            "quadratic" => EasingFamily::Quadratic,
            "quartic" => EasingFamily::Quartic,
            "quintic" => EasingFamily::Quintic,
            _ => {
                log::debug!("unknown easing shorthand {name:?}, using Linear");
                EasingFamily::Linear
            }
        };
        Easing::from_parts(family, EasingPhase::InOut)
    }
}

impl fmt::Display for Easing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Easing {
    type Err = EasingError;

    /// Parses a member name, case-insensitively (`"cubicinout"` works).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        Easing::ALL_NAMED
            .iter()
            .chain(std::iter::once(&Easing::Custom))
            .copied()
            .find(|e| e.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| EasingError::UnknownEasing { name: s.to_string() })
    }
}

/// Eased progress for a named member.
///
/// `Custom` carries no control points here and evaluates as `Linear`.
/// Resolve custom curves once with [`crate::EasingCurve::resolve`] (or call
/// [`crate::evaluate_custom`]) so a missing or malformed curve is reported
/// before any frame is sampled.
#[inline]
pub fn evaluate(easing: Easing, t: f32) -> f32 {
    match easing.function() {
        Some(f) => f(t),
        None => {
            log::debug!("Easing::Custom evaluated without control points, using Linear");
            t
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_is_total_for_named() {
        for e in Easing::ALL_NAMED {
            assert!(e.function().is_some(), "{e} has no function");
            assert!(e.family().is_some());
        }
        assert!(Easing::Custom.function().is_none());
    }

    #[test]
    fn parts_round_trip() {
        for e in Easing::ALL_NAMED {
            let family = e.family().unwrap();
            let rebuilt = match e.phase() {
                Some(phase) => Easing::from_parts(family, phase),
                None => Easing::from_parts(family, EasingPhase::In),
            };
            assert_eq!(rebuilt, e);
        }
    }

    #[test]
    fn names_parse_case_insensitively() {
        assert_eq!("CubicInOut".parse::<Easing>().unwrap(), Easing::CubicInOut);
        assert_eq!(" backout ".parse::<Easing>().unwrap(), Easing::BackOut);
        assert_eq!("custom".parse::<Easing>().unwrap(), Easing::Custom);
        assert!(matches!(
            "wobble".parse::<Easing>(),
            Err(EasingError::UnknownEasing { .. })
        ));
    }

    #[test]
    fn display_matches_parse() {
        for e in Easing::ALL_NAMED {
            assert_eq!(e.to_string().parse::<Easing>().unwrap(), e);
        }
    }

    #[test]
    fn family_shorthand() {
        assert_eq!(Easing::from_family_name("Cubic"), Easing::CubicInOut);
        assert_eq!(Easing::from_family_name("bounce"), Easing::BounceInOut);
        assert_eq!(Easing::from_family_name("linear"), Easing::Linear);
        assert_eq!(Easing::from_family_name("spring"), Easing::Linear);
    }

    #[test]
    fn default_is_linear() {
        assert_eq!(Easing::default(), Easing::Linear);
    }

    #[test]
    fn custom_without_curve_is_identity() {
        assert_eq!(evaluate(Easing::Custom, 0.3), 0.3);
    }

    #[test]
    fn serde_uses_member_names() {
        let json = serde_json::to_string(&Easing::QuinticOut).unwrap();
        assert_eq!(json, "\"QuinticOut\"");
        let back: Easing = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Easing::QuinticOut);
    }
}
