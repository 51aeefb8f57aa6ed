//! Solver and tween configuration.

use serde::{Deserialize, Serialize};

use crate::error::EasingError;
use crate::Result;

/// Top-level configuration; every field falls back to its default when
/// missing from a serialized object.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub solver: SolverConfig,
    pub tween: TweenConfig,
}

impl Config {
    pub fn validate(&self) -> Result<()> {
        self.solver.validate()?;
        self.tween.validate()
    }
}

/// Cubic-bezier root finder settings.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SolverConfig {
    /// Accepted |x(t) - x| error, also the flat-tangent cutoff for Newton steps.
    pub epsilon: f32,
    /// Newton-Raphson steps tried before falling back to bisection.
    pub newton_iterations: u32,
    /// Hard cap on bisection steps.
    pub max_bisection_iterations: u32,
}

impl SolverConfig {
    pub const DEFAULT: SolverConfig = SolverConfig {
        epsilon: 1e-5,
        newton_iterations: 8,
        max_bisection_iterations: 100,
    };

    pub fn validate(&self) -> Result<()> {
        if !(self.epsilon.is_finite() && self.epsilon > 0.0) {
            return Err(EasingError::InvalidConfig {
                reason: format!("solver epsilon must be positive, got {}", self.epsilon),
            });
        }
        if self.newton_iterations == 0 && self.max_bisection_iterations == 0 {
            return Err(EasingError::InvalidConfig {
                reason: "solver needs at least one Newton or bisection iteration".into(),
            });
        }
        Ok(())
    }
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Tween stepping settings.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TweenConfig {
    /// Durations below this snap straight to the end value.
    pub snap_duration: f32,
}

impl TweenConfig {
    pub const DEFAULT: TweenConfig = TweenConfig {
        snap_duration: 1e-4,
    };

    pub fn validate(&self) -> Result<()> {
        if !(self.snap_duration.is_finite() && self.snap_duration >= 0.0) {
            return Err(EasingError::InvalidConfig {
                reason: format!(
                    "snap_duration must be finite and non-negative, got {}",
                    self.snap_duration
                ),
            });
        }
        Ok(())
    }
}

impl Default for TweenConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}
