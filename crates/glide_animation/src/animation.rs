//! Segment timelines
//!
//! An [`Animation`] plays its segments back to back starting at absolute time `t0`, either
//! once (holding the last value afterwards) or looping forever. It never changes after
//! construction; [`Animation::detour`] returns a new animation to switch to instead.
//!
//! Nothing here ticks. Call [`Animation::evaluate`] from your own update loop and apply the
//! result. Animations are plain data and can be read from several threads; a handler given
//! to [`Animation::evaluate_with`] runs on the calling thread and any synchronization it
//! needs is up to the caller.

use smallvec::SmallVec;

use crate::clock::Clock;
use crate::error::{AnimationError, Result};
use crate::segment::Segment;

/// Inline capacity for segment lists; detours always have exactly one
type Segments = SmallVec<[Segment; 4]>;

/// A sequence of eased segments on an absolute timeline
#[derive(Clone, Debug, PartialEq)]
pub struct Animation {
    segments: Segments,
    t0: f64,
    duration: f64,
    repeating: bool,
}

impl Animation {
    /// Create an animation whose first segment starts at `t0`
    pub fn new(
        segments: impl IntoIterator<Item = Segment>,
        repeating: bool,
        t0: f64,
    ) -> Result<Self> {
        let segments: Segments = segments.into_iter().collect();
        if segments.is_empty() {
            return Err(AnimationError::EmptySegments);
        }
        if !t0.is_finite() {
            return Err(AnimationError::NonFiniteStart(t0));
        }
        let duration = segments.iter().map(Segment::duration).sum();
        Ok(Self {
            segments,
            t0,
            duration,
            repeating,
        })
    }

    /// Create an animation that starts at the clock's current time
    pub fn starting_now(
        segments: impl IntoIterator<Item = Segment>,
        repeating: bool,
        clock: &impl Clock,
    ) -> Result<Self> {
        Self::new(segments, repeating, clock.now())
    }

    /// Create a new builder
    pub fn builder() -> AnimationBuilder {
        AnimationBuilder::new()
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Absolute start time of the first segment
    pub fn t0(&self) -> f64 {
        self.t0
    }

    /// Total length of one pass through all segments
    pub fn duration(&self) -> f64 {
        self.duration
    }

    /// Absolute time at which the first pass ends
    pub fn end_time(&self) -> f64 {
        self.t0 + self.duration
    }

    pub fn is_repeating(&self) -> bool {
        self.repeating
    }

    /// Whether a one-shot animation has run past its end; repeating animations never finish
    pub fn finished(&self, t: f64) -> bool {
        if self.repeating {
            return false;
        }
        t > self.end_time()
    }

    pub fn finished_now(&self, clock: &impl Clock) -> bool {
        self.finished(clock.now())
    }

    /// Value at absolute time `t`
    ///
    /// `None` before `t0` on a one-shot animation. After the end, a one-shot animation holds
    /// the last segment's `val1`.
    pub fn evaluate(&self, t: f64) -> Option<f32> {
        self.segment_containing(t).map(|(segment, local)| segment.value(local))
    }

    /// Pass the value at `t` to `on_evaluate`, if there is one
    ///
    /// Returns whether the handler was called.
    pub fn evaluate_with<F: FnOnce(f32)>(&self, t: f64, on_evaluate: F) -> bool {
        match self.segment_containing(t) {
            Some((segment, local)) => {
                segment.evaluate(local, on_evaluate);
                true
            }
            None => false,
        }
    }

    pub fn evaluate_now(&self, clock: &impl Clock) -> Option<f32> {
        self.evaluate(clock.now())
    }

    /// Build a one-shot animation that takes over from this one at absolute time `t`
    ///
    /// The detour ends at `end_magnitude` (sign-corrected to keep moving in the current
    /// direction) after `duration` seconds, and evaluates to this animation's value at `t`.
    /// Returns `None` when nothing is playing at `t` or no detour segment can be built;
    /// keep evaluating this animation in that case.
    pub fn detour(&self, t: f64, end_magnitude: f32, duration: f64) -> Option<Animation> {
        let (segment, local) = self.segment_containing(t)?;
        let (detour, offset) = segment.detour(local, end_magnitude, duration)?;

        tracing::debug!(
            "Detour at t={}: {} -> {} over {}s, offset {}",
            t,
            detour.val0(),
            detour.val1(),
            duration,
            offset
        );

        let mut segments = Segments::new();
        segments.push(detour);
        Some(Animation {
            segments,
            t0: t - offset,
            duration: detour.duration(),
            repeating: false,
        })
    }

    pub fn detour_now(
        &self,
        clock: &impl Clock,
        end_magnitude: f32,
        duration: f64,
    ) -> Option<Animation> {
        self.detour(clock.now(), end_magnitude, duration)
    }

    /// Active segment and local time for absolute time `t`
    fn segment_containing(&self, t: f64) -> Option<(&Segment, f64)> {
        let mut t_eval = t - self.t0;
        if self.repeating {
            t_eval = t_eval.rem_euclid(self.duration);
            // rem_euclid can round up to the divisor for tiny negative inputs
            if t_eval >= self.duration {
                t_eval = 0.0;
            }
        } else if t >= self.end_time() {
            let last = self.segments.last()?;
            return Some((last, last.duration()));
        }

        let mut segment_start = 0.0;
        for segment in &self.segments {
            let local = t_eval - segment_start;
            if segment.contains(local) {
                return Some((segment, local));
            }
            segment_start += segment.duration();
        }

        // Past the end of a one-shot: the last segment clamps to its val1
        if !self.repeating && t_eval > 0.0 {
            let last = self.segments.last()?;
            return Some((last, t_eval - (segment_start - last.duration())));
        }

        None
    }
}

/// Fluent construction of an [`Animation`]
///
/// Defaults to a repeating animation that starts at the clock's time when built.
#[derive(Clone, Debug)]
pub struct AnimationBuilder {
    segments: Vec<Segment>,
    repeating: bool,
    t0: Option<f64>,
    error: Option<AnimationError>,
}

impl Default for AnimationBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl AnimationBuilder {
    pub fn new() -> Self {
        Self {
            segments: Vec::new(),
            repeating: true,
            t0: None,
            error: None,
        }
    }

    /// Append a segment from `val0` to `val1` over `duration` seconds
    ///
    /// An invalid segment is reported by [`build`](Self::build).
    pub fn segment(mut self, val0: f32, val1: f32, duration: f64) -> Self {
        match Segment::new(val0, val1, duration) {
            Ok(segment) => self.segments.push(segment),
            Err(err) => {
                self.error.get_or_insert(err);
            }
        }
        self
    }

    /// Append a segment that starts where the previous one ended
    ///
    /// Starts from `0.0` when there is no previous segment.
    pub fn then(self, val1: f32, duration: f64) -> Self {
        let val0 = self.segments.last().map_or(0.0, Segment::val1);
        self.segment(val0, val1, duration)
    }

    /// Append an already-built segment
    pub fn push(mut self, segment: Segment) -> Self {
        self.segments.push(segment);
        self
    }

    pub fn repeating(mut self, repeating: bool) -> Self {
        self.repeating = repeating;
        self
    }

    /// Play once and hold the final value
    pub fn once(self) -> Self {
        self.repeating(false)
    }

    /// Fix the start time instead of reading the clock at build time
    pub fn start_at(mut self, t0: f64) -> Self {
        self.t0 = Some(t0);
        self
    }

    pub fn build(self, clock: &impl Clock) -> Result<Animation> {
        if let Some(err) = self.error {
            return Err(err);
        }
        let t0 = self.t0.unwrap_or_else(|| clock.now());
        Animation::new(self.segments, self.repeating, t0)
    }
}
