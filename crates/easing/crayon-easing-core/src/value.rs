//! Tweenable value kinds and their blend helpers.
//!
//! - scalars and 2/3/4-component vectors blend component-wise
//! - `[f32; 4]` doubles as RGBA colour
//! - [`Quat`] blends with NLERP and shortest-arc sign correction

use serde::{Deserialize, Serialize};

/// A value a tween can interpolate.
///
/// `t` is eased progress and may leave [0,1] for overshooting curves; the
/// blend extrapolates accordingly.
pub trait Animatable: Copy {
    fn lerp(a: &Self, b: &Self, t: f32) -> Self;

    /// Target reached by moving `self` by `by`, for relative tweens.
    fn offset(self, by: Self) -> Self;
}

#[inline]
pub fn lerp_f32(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

#[inline]
fn lerp_array<const N: usize>(a: &[f32; N], b: &[f32; N], t: f32) -> [f32; N] {
    let mut out = *a;
    for (o, (x, y)) in out.iter_mut().zip(a.iter().zip(b)) {
        *o = lerp_f32(*x, *y, t);
    }
    out
}

impl Animatable for f32 {
    #[inline]
    fn lerp(a: &Self, b: &Self, t: f32) -> Self {
        lerp_f32(*a, *b, t)
    }

    #[inline]
    fn offset(self, by: Self) -> Self {
        self + by
    }
}

impl<const N: usize> Animatable for [f32; N] {
    #[inline]
    fn lerp(a: &Self, b: &Self, t: f32) -> Self {
        lerp_array(a, b, t)
    }

    #[inline]
    fn offset(mut self, by: Self) -> Self {
        for (v, d) in self.iter_mut().zip(by) {
            *v += d;
        }
        self
    }
}

/// Rotation quaternion (x, y, z, w).
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(from = "[f32; 4]", into = "[f32; 4]")]
pub struct Quat(pub [f32; 4]);

impl Quat {
    pub const IDENTITY: Quat = Quat([0.0, 0.0, 0.0, 1.0]);

    /// Rotation of `angle` radians about the unit vector `axis`.
    pub fn from_axis_angle(axis: [f32; 3], angle: f32) -> Self {
        let (s, c) = (angle * 0.5).sin_cos();
        Quat([axis[0] * s, axis[1] * s, axis[2] * s, c])
    }

    #[inline]
    pub fn dot(&self, other: &Quat) -> f32 {
        let (a, b) = (self.0, other.0);
        a[0] * b[0] + a[1] * b[1] + a[2] * b[2] + a[3] * b[3]
    }

    /// Unit-length copy; a zero quaternion is returned unchanged.
    #[inline]
    pub fn normalize(self) -> Self {
        let len2 = self.dot(&self);
        if len2 > 0.0 {
            let inv_len = len2.sqrt().recip();
            let q = self.0;
            Quat([q[0] * inv_len, q[1] * inv_len, q[2] * inv_len, q[3] * inv_len])
        } else {
            self
        }
    }

    /// Hamilton product `self * rhs` (apply `rhs` first, then `self`).
    pub fn compose(&self, rhs: &Quat) -> Quat {
        let [x1, y1, z1, w1] = self.0;
        let [x2, y2, z2, w2] = rhs.0;
        Quat([
            w1 * x2 + x1 * w2 + y1 * z2 - z1 * y2,
            w1 * y2 - x1 * z2 + y1 * w2 + z1 * x2,
            w1 * z2 + x1 * y2 - y1 * x2 + z1 * w2,
            w1 * w2 - x1 * x2 - y1 * y2 - z1 * z2,
        ])
    }

    /// NLERP with shortest-arc correction: if dot < 0 the second
    /// quaternion is negated first. The result is normalized.
    pub fn nlerp(a: &Quat, b: &Quat, t: f32) -> Quat {
        let mut b = b.0;
        if a.dot(&Quat(b)) < 0.0 {
            b = [-b[0], -b[1], -b[2], -b[3]];
        }
        Quat(lerp_array(&a.0, &b, t)).normalize()
    }
}

impl Default for Quat {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl From<[f32; 4]> for Quat {
    fn from(q: [f32; 4]) -> Self {
        Quat(q)
    }
}

impl From<Quat> for [f32; 4] {
    fn from(q: Quat) -> Self {
        q.0
    }
}

impl Animatable for Quat {
    #[inline]
    fn lerp(a: &Self, b: &Self, t: f32) -> Self {
        Quat::nlerp(a, b, t)
    }

    /// Rotates by `by` in the local frame: `self * by`.
    #[inline]
    fn offset(self, by: Self) -> Self {
        self.compose(&by).normalize()
    }
}
