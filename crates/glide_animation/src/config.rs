//! Animation descriptions (TOML)
//!
//! ```toml
//! repeating = false
//! t0 = 0.0
//!
//! [[segments]]
//! from = 0.0
//! to = 9.0
//! duration = 10.0
//! ```
//!
//! `repeating` defaults to `true`. Without `t0` the animation starts at the clock's time when
//! it is built.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::animation::Animation;
use crate::clock::Clock;
use crate::error::ConfigError;
use crate::segment::Segment;

/// Serializable form of an [`Animation`]
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct AnimationConfig {
    #[serde(default = "default_true")]
    pub repeating: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub t0: Option<f64>,
    pub segments: Vec<SegmentConfig>,
}

/// Serializable form of a [`Segment`]
#[derive(Clone, Copy, Debug, PartialEq, Deserialize, Serialize)]
pub struct SegmentConfig {
    pub from: f32,
    pub to: f32,
    /// Seconds
    pub duration: f64,
}

fn default_true() -> bool {
    true
}

impl AnimationConfig {
    pub fn from_toml_str(source: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(source)?)
    }

    /// Read a description from disk
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let source = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_toml_str(&source)?;
        tracing::debug!(
            "Loaded animation config from {} ({} segments)",
            path.display(),
            config.segments.len()
        );
        Ok(config)
    }

    pub fn to_toml_string(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string(self)?)
    }

    /// Validate and build the animation, reading `clock` only when `t0` is unset
    pub fn build(&self, clock: &impl Clock) -> Result<Animation, ConfigError> {
        let segments = self
            .segments
            .iter()
            .map(|s| Segment::new(s.from, s.to, s.duration))
            .collect::<Result<Vec<_>, _>>()?;
        let t0 = self.t0.unwrap_or_else(|| clock.now());
        Ok(Animation::new(segments, self.repeating, t0)?)
    }
}

impl From<&Segment> for SegmentConfig {
    fn from(segment: &Segment) -> Self {
        Self {
            from: segment.val0(),
            to: segment.val1(),
            duration: segment.duration(),
        }
    }
}

impl From<&Animation> for AnimationConfig {
    fn from(animation: &Animation) -> Self {
        Self {
            repeating: animation.is_repeating(),
            t0: Some(animation.t0()),
            segments: animation.segments().iter().map(SegmentConfig::from).collect(),
        }
    }
}

impl Animation {
    /// Describe this animation, including its start time
    pub fn to_config(&self) -> AnimationConfig {
        AnimationConfig::from(self)
    }
}
