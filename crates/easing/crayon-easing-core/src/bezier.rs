//! CSS-style cubic-bezier timing curves.
//!
//! Endpoints are fixed at (0,0) and (1,1); the two interior control points
//! `(p1x, p1y)` and `(p2x, p2y)` shape the curve. Solving for an input `x`
//! means finding the curve parameter `t` with `X(t) == x` and returning
//! `Y(t)`. The root finder tries Newton-Raphson from `t = x` and falls back
//! to bisection over [0,1] when Newton stalls on a flat tangent or runs out
//! of steps.
//!
//! Curves whose X is not monotonic (control x outside [0,1]) are solved
//! best-effort: the result is whatever root the search lands on.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::config::SolverConfig;
use crate::error::EasingError;
use crate::Result;

/// Cubic-bezier timing curve with precomputed polynomial coefficients.
///
/// Serializes as `[p1x, p1y, p2x, p2y]`; the solver settings are not part of
/// the serialized form. Deserializing rejects non-finite control points.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "[f32; 4]", into = "[f32; 4]")]
pub struct CubicBezier {
    p1x: f32,
    p1y: f32,
    p2x: f32,
    p2y: f32,

    ax: f32,
    bx: f32,
    cx: f32,
    ay: f32,
    by: f32,
    cy: f32,

    solver: SolverConfig,
}

/// Which search produced the root.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SolveMethod {
    Newton,
    Bisection,
    /// `x` was outside [0,1] after Newton failed; the root is the nearest bound.
    Clamped,
}

/// Diagnostic result of a single solve.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Solve {
    /// Curve parameter found for the input x.
    pub t: f32,
    /// Eased output, `Y(t)`.
    pub y: f32,
    pub method: SolveMethod,
    /// Steps spent in the method that produced `t`.
    pub iterations: u32,
    /// False when bisection gave up before reaching the tolerance.
    pub converged: bool,
}

#[derive(Clone, Copy, Debug)]
struct Root {
    t: f32,
    method: SolveMethod,
    iterations: u32,
    converged: bool,
}

impl CubicBezier {
    pub const LINEAR: CubicBezier = CubicBezier::new(0.0, 0.0, 1.0, 1.0);
    pub const EASE: CubicBezier = CubicBezier::new(0.25, 0.1, 0.25, 1.0);
    pub const EASE_IN: CubicBezier = CubicBezier::new(0.42, 0.0, 1.0, 1.0);
    pub const EASE_OUT: CubicBezier = CubicBezier::new(0.0, 0.0, 0.58, 1.0);
    pub const EASE_IN_OUT: CubicBezier = CubicBezier::new(0.42, 0.0, 0.58, 1.0);

    /// Build a curve and precompute its coefficients.
    pub const fn new(p1x: f32, p1y: f32, p2x: f32, p2y: f32) -> Self {
        Self::with_config(p1x, p1y, p2x, p2y, SolverConfig::DEFAULT)
    }

    pub const fn with_config(p1x: f32, p1y: f32, p2x: f32, p2y: f32, solver: SolverConfig) -> Self {
        let cx = 3.0 * p1x;
        let bx = 3.0 * (p2x - p1x) - cx;
        let ax = 1.0 - cx - bx;

        let cy = 3.0 * p1y;
        let by = 3.0 * (p2y - p1y) - cy;
        let ay = 1.0 - cy - by;

        Self {
            p1x,
            p1y,
            p2x,
            p2y,
            ax,
            bx,
            cx,
            ay,
            by,
            cy,
            solver,
        }
    }

    /// Same control points, different solver settings.
    pub fn solver_config(self, solver: SolverConfig) -> Self {
        Self { solver, ..self }
    }

    /// `(p1x, p1y, p2x, p2y)`.
    #[inline]
    pub fn control_points(&self) -> [f32; 4] {
        [self.p1x, self.p1y, self.p2x, self.p2y]
    }

    /// `(ax, bx, cx, ay, by, cy)` so that `X(t) = ((ax t + bx) t + cx) t`.
    #[inline]
    pub fn coefficients(&self) -> [f32; 6] {
        [self.ax, self.bx, self.cx, self.ay, self.by, self.cy]
    }

    /// Whether X is non-decreasing on [0,1], which the solver needs for a
    /// unique answer. Holds whenever both control x lie in [0,1].
    pub fn is_monotonic(&self) -> bool {
        (0.0..=1.0).contains(&self.p1x) && (0.0..=1.0).contains(&self.p2x)
    }

    #[inline]
    pub fn sample_curve_x(&self, t: f32) -> f32 {
        ((self.ax * t + self.bx) * t + self.cx) * t
    }

    #[inline]
    pub fn sample_curve_y(&self, t: f32) -> f32 {
        ((self.ay * t + self.by) * t + self.cy) * t
    }

    #[inline]
    pub fn sample_curve_derivative_x(&self, t: f32) -> f32 {
        (3.0 * self.ax * t + 2.0 * self.bx) * t + self.cx
    }

    /// Curve parameter `t` with `X(t) ≈ x`.
    #[inline]
    pub fn solve_curve_x(&self, x: f32) -> f32 {
        self.find_root(x).t
    }

    /// Eased output for elapsed fraction `x`.
    #[inline]
    pub fn solve(&self, x: f32) -> f32 {
        self.sample_curve_y(self.solve_curve_x(x))
    }

    /// Like [`CubicBezier::solve`] but reports how the root was found.
    pub fn solve_with_report(&self, x: f32) -> Solve {
        let root = self.find_root(x);
        Solve {
            t: root.t,
            y: self.sample_curve_y(root.t),
            method: root.method,
            iterations: root.iterations,
            converged: root.converged,
        }
    }

    fn find_root(&self, x: f32) -> Root {
        let SolverConfig {
            epsilon,
            newton_iterations,
            max_bisection_iterations,
        } = self.solver;

        // Newton-Raphson; usually done in two or three steps.
        let mut t2 = x;
        for i in 0..newton_iterations {
            let x2 = self.sample_curve_x(t2) - x;
            if x2.abs() < epsilon {
                return Root {
                    t: t2,
                    method: SolveMethod::Newton,
                    iterations: i + 1,
                    converged: true,
                };
            }
            let d2 = self.sample_curve_derivative_x(t2);
            if d2.abs() < epsilon {
                break;
            }
            t2 -= x2 / d2;
        }

        let mut t0 = 0.0f32;
        let mut t1 = 1.0f32;
        let mut t2 = x;

        if t2 < t0 || t2 > t1 {
            return Root {
                t: t2.clamp(t0, t1),
                method: SolveMethod::Clamped,
                iterations: 0,
                converged: true,
            };
        }

        let mut iterations = 0;
        while t0 < t1 && iterations < max_bisection_iterations {
            iterations += 1;
            let x2 = self.sample_curve_x(t2);
            if (x2 - x).abs() < epsilon {
                return Root {
                    t: t2,
                    method: SolveMethod::Bisection,
                    iterations,
                    converged: true,
                };
            }
            if x > x2 {
                t0 = t2;
            } else {
                t1 = t2;
            }
            t2 = (t1 - t0) * 0.5 + t0;
        }

        log::debug!(
            "cubic-bezier {:?}: no root within {epsilon} for x={x} after {iterations} bisection steps, using t={t2}",
            self.control_points()
        );
        Root {
            t: t2,
            method: SolveMethod::Bisection,
            iterations,
            converged: false,
        }
    }
}

impl Default for CubicBezier {
    fn default() -> Self {
        Self::LINEAR
    }
}

impl CubicBezier {
    /// Builds a curve from control points that came from outside the crate.
    /// `input` is echoed back in the error.
    fn checked(p: [f32; 4], input: &str) -> Result<Self> {
        if let Some(i) = p.iter().position(|v| !v.is_finite()) {
            return Err(EasingError::curve_spec(
                input,
                format!("control value {i} ({}) is not finite", p[i]),
            ));
        }
        Ok(CubicBezier::new(p[0], p[1], p[2], p[3]))
    }
}

impl TryFrom<[f32; 4]> for CubicBezier {
    type Error = EasingError;

    fn try_from(p: [f32; 4]) -> Result<Self> {
        CubicBezier::checked(p, &format!("{p:?}"))
    }
}

impl From<CubicBezier> for [f32; 4] {
    fn from(curve: CubicBezier) -> Self {
        curve.control_points()
    }
}

impl fmt::Display for CubicBezier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{},{},{}", self.p1x, self.p1y, self.p2x, self.p2y)
    }
}

impl FromStr for CubicBezier {
    type Err = EasingError;

    /// Parses `"p1x,p1y,p2x,p2y"`. Whitespace around each number is ignored;
    /// anything other than four finite numbers is rejected.
    fn from_str(s: &str) -> Result<Self> {
        let tokens: Vec<&str> = s.split(',').collect();
        if tokens.len() != 4 {
            return Err(EasingError::curve_spec(
                s,
                format!("expected 4 comma-separated values, got {}", tokens.len()),
            ));
        }
        let mut points = [0.0f32; 4];
        for (slot, token) in points.iter_mut().zip(&tokens) {
            let token = token.trim();
            *slot = token
                .parse()
                .map_err(|_| EasingError::curve_spec(s, format!("{token:?} is not a number")))?;
        }
        CubicBezier::checked(points, s)
    }
}

/// Eased output of `curve` at elapsed fraction `t`.
#[inline]
pub fn evaluate_custom(curve: &CubicBezier, t: f32) -> f32 {
    curve.solve(t)
}

/// Parse `"p1x,p1y,p2x,p2y"` and evaluate it at `t`.
pub fn evaluate_custom_str(spec: &str, t: f32) -> Result<f32> {
    let curve: CubicBezier = spec.parse()?;
    Ok(curve.solve(t))
}
