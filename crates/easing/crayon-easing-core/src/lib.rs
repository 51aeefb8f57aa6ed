//! Crayon Easing Core (engine-agnostic)
//!
//! Time remapping for tweens: a raw progress fraction `t` in [0,1] goes in,
//! eased progress comes out, and the host blends its property with that
//! value. Two sources of curves are provided:
//!
//! - 28 closed-form easings selected by [`Easing`] ([`evaluate`])
//! - CSS-style cubic-bezier timing curves solved numerically
//!   ([`CubicBezier`], [`evaluate_custom`])
//!
//! [`EasingCurve`] resolves an `(Easing, control points)` pair up front and
//! [`Tween`] is a small frame-stepped driver that snaps to the exact end
//! value on its last step. Everything here is pure and allocation-free per
//! sample; curves are `Copy` and safe to share across threads.

pub mod bezier;
pub mod config;
pub mod curve;
pub mod easing;
pub mod error;
pub mod tween;
pub mod value;

// Re-exports for consumers (adapters)
pub use bezier::{evaluate_custom, evaluate_custom_str, CubicBezier, Solve, SolveMethod};
pub use config::{Config, SolverConfig, TweenConfig};
pub use curve::EasingCurve;
pub use easing::{evaluate, Easing, EasingFamily, EasingFn, EasingPhase};
pub use error::EasingError;
pub use tween::{FadeDirection, Tween, TweenStep};
pub use value::{Animatable, Quat};

/// Result type for fallible curve construction.
pub type Result<T> = core::result::Result<T, EasingError>;
