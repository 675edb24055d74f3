//! Sampling animations over a time range

use glide_animation::Animation;
use serde::Serialize;
use std::fmt::Write;

/// One evaluated point; `value` is `None` before a one-shot animation starts
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct Sample {
    pub t: f64,
    pub value: Option<f32>,
}

/// `steps + 1` evenly spaced times from `from` to `to` inclusive
pub fn sample_times(from: f64, to: f64, steps: usize) -> Vec<f64> {
    if steps == 0 {
        return vec![from];
    }
    (0..=steps)
        .map(|i| from + (to - from) * i as f64 / steps as f64)
        .collect()
}

pub fn sample(animation: &Animation, from: f64, to: f64, steps: usize) -> Vec<Sample> {
    sample_times(from, to, steps)
        .into_iter()
        .map(|t| Sample {
            t,
            value: animation.evaluate(t),
        })
        .collect()
}

/// Two-column text table
pub fn render_table(samples: &[Sample]) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{:>12}  {:>12}", "t", "value");
    for s in samples {
        match s.value {
            Some(v) => {
                let _ = writeln!(out, "{:>12.4}  {:>12.4}", s.t, v);
            }
            None => {
                let _ = writeln!(out, "{:>12.4}  {:>12}", s.t, "-");
            }
        }
    }
    out
}
