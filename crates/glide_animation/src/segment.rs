//! Ease-in-ease-out segments
//!
//! A [`Segment`] interpolates from `val0` to `val1` over `duration` seconds of local time
//! using the cosine ease curve, and can build a replacement segment that takes over
//! mid-flight (a detour).

use crate::easing::{ease_fraction, ease_slope, time_for_slope};
use crate::error::{AnimationError, Result};

/// One eased interpolation span
///
/// Immutable once built. Local time `0` is the start of the span.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Segment {
    val0: f32,
    val1: f32,
    duration: f64,
}

impl Segment {
    /// Create a segment from `val0` to `val1` lasting `duration` seconds
    pub fn new(val0: f32, val1: f32, duration: f64) -> Result<Self> {
        if !val0.is_finite() || !val1.is_finite() {
            return Err(AnimationError::NonFiniteValue { val0, val1 });
        }
        if !is_valid_duration(duration) {
            return Err(AnimationError::InvalidDuration(duration));
        }
        Ok(Self {
            val0,
            val1,
            duration,
        })
    }

    pub fn val0(&self) -> f32 {
        self.val0
    }

    pub fn val1(&self) -> f32 {
        self.val1
    }

    pub fn duration(&self) -> f64 {
        self.duration
    }

    /// Whether local time `t` falls in `[0, duration)`
    pub fn contains(&self, t: f64) -> bool {
        0.0 <= t && t < self.duration
    }

    /// Eased value at local time `t`, held at `val0` before the span and `val1` after it
    pub fn value(&self, t: f64) -> f32 {
        if t < 0.0 {
            return self.val0;
        }
        if t >= self.duration {
            return self.val1;
        }
        let u = ease_fraction(t, self.duration) as f32;
        self.val0 + u * (self.val1 - self.val0)
    }

    /// Normalized slope of the ease fraction at local time `t`
    ///
    /// This is `du/dt`, not the slope of [`value`](Self::value): the `val1 - val0` amplitude
    /// is left out. Detours match this quantity, so a detour whose amplitude differs from the
    /// original is only velocity-matched in this normalized sense.
    pub fn derivative(&self, t: f64) -> f64 {
        if !self.contains(t) {
            return 0.0;
        }
        ease_slope(t, self.duration)
    }

    /// Hand the value at local time `t` to `on_evaluate`
    pub fn evaluate<F: FnOnce(f32)>(&self, t: f64, on_evaluate: F) {
        on_evaluate(self.value(t));
    }

    /// Build a segment that takes over from this one at local time `t`
    ///
    /// The returned segment lasts `duration` seconds and ends at `val1_magnitude`, negated
    /// when this segment is heading down and the magnitude lies above the current value.
    /// Its normalized slope and value at the returned offset match this segment's slope and
    /// value at `t`. Start the replacement at absolute time `now - offset`.
    ///
    /// When no time in the new span is as steep as this one, the new span's midpoint is used.
    pub fn detour(&self, t: f64, val1_magnitude: f32, duration: f64) -> Option<(Segment, f64)> {
        if !is_valid_duration(duration) {
            tracing::warn!("Rejected detour with invalid duration {}", duration);
            return None;
        }

        let deriv = self.derivative(t);
        let t_detour = match time_for_slope(deriv, duration) {
            Some(t_detour) => t_detour,
            None => {
                tracing::trace!(
                    "Detour slope {} unattainable over {}s, using midpoint",
                    deriv,
                    duration
                );
                duration / 2.0
            }
        };

        let val = self.value(t);
        let val1_detour = if self.val1 < val && val1_magnitude > val {
            -val1_magnitude
        } else {
            val1_magnitude
        };

        let u = ease_fraction(t_detour, duration);

        // u reaches 1 only at t_detour == duration, and asin keeps t_detour <= duration / 2
        if u == 1.0 {
            return None;
        }

        let val0_detour = ((f64::from(val) - u * f64::from(val1_detour)) / (1.0 - u)) as f32;

        match Segment::new(val0_detour, val1_detour, duration) {
            Ok(segment) => Some((segment, t_detour)),
            Err(err) => {
                tracing::warn!("Rejected detour: {}", err);
                None
            }
        }
    }
}

fn is_valid_duration(duration: f64) -> bool {
    duration.is_finite() && duration > 0.0
}
