//! Time sources
//!
//! All animation times are seconds on a monotonic timeline. Operations take explicit time
//! arguments; the `*_now` conveniences on [`Animation`](crate::Animation) read a [`Clock`]
//! instead, so tests can substitute a [`ManualClock`].

use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Instant;

/// A monotonic source of the current time, in seconds
pub trait Clock {
    fn now(&self) -> f64;
}

impl<C: Clock + ?Sized> Clock for &C {
    fn now(&self) -> f64 {
        (**self).now()
    }
}

/// Wall-clock time measured from when the clock was created
///
/// Backed by [`Instant`], so it is unaffected by system clock adjustments.
#[derive(Clone, Copy, Debug)]
pub struct SystemClock {
    origin: Instant,
}

impl SystemClock {
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
        }
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for SystemClock {
    fn now(&self) -> f64 {
        self.origin.elapsed().as_secs_f64()
    }
}

/// A clock that only moves when told to
///
/// The time is stored as raw `f64` bits in an atomic so a shared reference can be handed to
/// several animations and still be advanced.
#[derive(Debug, Default)]
pub struct ManualClock {
    bits: AtomicU64,
}

impl ManualClock {
    pub fn new(now: f64) -> Self {
        Self {
            bits: AtomicU64::new(now.to_bits()),
        }
    }

    /// Jump to an absolute time
    pub fn set(&self, now: f64) {
        self.bits.store(now.to_bits(), Ordering::Relaxed);
    }

    /// Move forward by `dt` seconds and return the new time
    pub fn advance(&self, dt: f64) -> f64 {
        let now = self.now() + dt;
        self.set(now);
        now
    }
}

impl Clock for ManualClock {
    fn now(&self) -> f64 {
        f64::from_bits(self.bits.load(Ordering::Relaxed))
    }
}
