//! Glide Animation
//!
//! Cosine ease-in-ease-out segments, segment timelines, and detours.
//!
//! # Features
//!
//! - **Eased Segments**: `(1 - cos)` interpolation with zero slope at both ends
//! - **Timelines**: Segments played back to back, once or looping forever
//! - **Detours**: Redirect a playing animation to a new target without a jump in value or slope
//! - **Injectable Time**: Explicit time arguments, or any [`Clock`] for "now"
//!
//! ```
//! use glide_animation::{Animation, ManualClock};
//!
//! let clock = ManualClock::new(0.0);
//! let anim = Animation::builder()
//!     .segment(0.0, 9.0, 10.0)
//!     .once()
//!     .build(&clock)
//!     .unwrap();
//!
//! clock.set(5.0);
//! let value = anim.evaluate_now(&clock).unwrap();
//! assert!((value - 4.5).abs() < 1e-5);
//!
//! // Head for 20.0 over the next 3 seconds instead
//! let detour = anim.detour_now(&clock, 20.0, 3.0).unwrap();
//! assert!((detour.evaluate(5.0).unwrap() - value).abs() < 1e-4);
//! ```

pub mod animation;
pub mod clock;
pub mod config;
pub mod easing;
pub mod error;
pub mod segment;

pub use animation::{Animation, AnimationBuilder};
pub use clock::{Clock, ManualClock, SystemClock};
pub use config::{AnimationConfig, SegmentConfig};
pub use error::{AnimationError, ConfigError, Result};
pub use segment::Segment;
