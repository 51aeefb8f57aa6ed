//! Frame-stepped tween driver.
//!
//! A [`Tween`] owns its start/end values, duration and resolved curve, and
//! is advanced by the caller's frame delta. Each running frame samples the
//! curve at the elapsed time *before* adding `dt`, so the first frame shows
//! the start value. Once elapsed reaches the duration the tween reports the
//! exact end value, never an eased approximation of it.

use serde::{Deserialize, Serialize};

use crate::config::TweenConfig;
use crate::curve::EasingCurve;
use crate::value::Animatable;

/// Fade direction for opacity tweens.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FadeDirection {
    /// From `opacity` alpha up to the colour's own alpha.
    #[default]
    In,
    /// From the colour's own alpha down to `opacity`.
    Out,
}

/// Result of one [`Tween::advance`] call.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum TweenStep<T> {
    Running(T),
    /// Exact end value; every later call returns this too.
    Finished(T),
}

impl<T: Copy> TweenStep<T> {
    #[inline]
    pub fn value(&self) -> T {
        match self {
            TweenStep::Running(v) | TweenStep::Finished(v) => *v,
        }
    }

    #[inline]
    pub fn is_finished(&self) -> bool {
        matches!(self, TweenStep::Finished(_))
    }
}

#[derive(Clone, Debug)]
pub struct Tween<T> {
    start: T,
    end: T,
    duration: f32,
    curve: EasingCurve,
    config: TweenConfig,
    elapsed: f32,
    finished: bool,
}

impl<T: Animatable> Tween<T> {
    pub fn new(start: T, end: T, duration: f32, curve: impl Into<EasingCurve>) -> Self {
        Self {
            start,
            end,
            duration,
            curve: curve.into(),
            config: TweenConfig::default(),
            elapsed: 0.0,
            finished: false,
        }
    }

    /// Tween from `start` to `start` moved by `delta`.
    pub fn relative(start: T, delta: T, duration: f32, curve: impl Into<EasingCurve>) -> Self {
        Self::new(start, start.offset(delta), duration, curve)
    }

    pub fn with_config(mut self, config: TweenConfig) -> Self {
        self.config = config;
        self
    }

    #[inline]
    pub fn start(&self) -> T {
        self.start
    }

    #[inline]
    pub fn end(&self) -> T {
        self.end
    }

    #[inline]
    pub fn duration(&self) -> f32 {
        self.duration
    }

    #[inline]
    pub fn curve(&self) -> &EasingCurve {
        &self.curve
    }

    #[inline]
    pub fn elapsed(&self) -> f32 {
        self.elapsed
    }

    /// Durations under the snap threshold, non-positive or NaN jump
    /// straight to the end.
    #[inline]
    pub fn is_instant(&self) -> bool {
        !(self.duration > 0.0 && self.duration >= self.config.snap_duration)
    }

    /// Raw (un-eased) progress in [0,1].
    pub fn progress(&self) -> f32 {
        if self.is_instant() {
            1.0
        } else {
            (self.elapsed / self.duration).clamp(0.0, 1.0)
        }
    }

    #[inline]
    pub fn is_finished(&self) -> bool {
        self.finished
    }

    /// Value at `elapsed` seconds, independent of the stepping state.
    /// Negative times sample the start.
    pub fn sample(&self, elapsed: f32) -> T {
        if self.is_instant() || elapsed >= self.duration {
            return self.end;
        }
        let t = elapsed.max(0.0) / self.duration;
        T::lerp(&self.start, &self.end, self.curve.sample(t))
    }

    /// Step by `dt` seconds. Negative deltas are treated as zero.
    pub fn advance(&mut self, dt: f32) -> TweenStep<T> {
        if self.finished || self.is_instant() || self.elapsed >= self.duration {
            self.finished = true;
            return TweenStep::Finished(self.end);
        }
        let value = self.sample(self.elapsed);
        self.elapsed += dt.max(0.0);
        TweenStep::Running(value)
    }

    /// Rewind to the start.
    pub fn reset(&mut self) {
        self.elapsed = 0.0;
        self.finished = false;
    }
}

impl Tween<[f32; 4]> {
    /// Opacity tween on an RGBA colour; only alpha changes.
    pub fn fade(
        color: [f32; 4],
        direction: FadeDirection,
        opacity: f32,
        duration: f32,
        curve: impl Into<EasingCurve>,
    ) -> Self {
        let faded = [color[0], color[1], color[2], opacity];
        match direction {
            FadeDirection::In => Self::new(faded, color, duration, curve),
            FadeDirection::Out => Self::new(color, faded, duration, curve),
        }
    }
}
