//! Cosine ease curve
//!
//! `u(p) = (1 - cos(p·π)) / 2` maps progress `p ∈ [0, 1]` to an eased fraction with zero slope
//! at both ends and the steepest slope at the midpoint. Computed in f64; callers narrow to f32
//! only when mixing with values.

use std::f64::consts::PI;

/// Eased fraction for local time `t` within a span of `duration` seconds
///
/// Callers are expected to clamp `t` to `[0, duration)` first.
#[inline]
pub fn ease_fraction(t: f64, duration: f64) -> f64 {
    (1.0 - (t / duration * PI).cos()) / 2.0
}

/// Rate of change of [`ease_fraction`] with respect to `t`
#[inline]
pub fn ease_slope(t: f64, duration: f64) -> f64 {
    0.5 * (t / duration * PI).sin() * (PI / duration)
}

/// Earliest local time in a span of `duration` whose [`ease_slope`] equals `slope`
///
/// Uses the principal branch of `asin`, so the result lies in `[-duration/2, duration/2]`.
/// Returns `None` when no time in the span is that steep.
pub fn time_for_slope(slope: f64, duration: f64) -> Option<f64> {
    let s = 2.0 * duration * slope / PI;
    if (-1.0..=1.0).contains(&s) {
        Some(duration / PI * s.asin())
    } else {
        None
    }
}
