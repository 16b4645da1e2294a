//! Event overlay
//!
//! Drawing and applying are split: [`EventPlan::draw`] consumes randomness,
//! [`apply_event_overlay`] is a pure function over a base channel.

use std::ops::Range;

use rand::Rng;
use rand_distr::{Distribution, Uniform};

use crate::config::{EventConfig, UniformRange};

/// Channel touched by an event window
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OverlayChannel {
    Speed,
    HeartRate,
    Acceleration,
    EmgQuadriceps,
}

/// Values for one window, one entry per sample of the window
#[derive(Debug, Clone, PartialEq)]
pub struct EventDraw {
    pub range: Range<usize>,
    pub speed_kmh: Vec<f64>,
    pub heart_rate: Vec<f64>,
    pub acceleration: Vec<f64>,
    pub emg_quadriceps: Vec<f64>,
}

impl EventDraw {
    pub fn values(&self, channel: OverlayChannel) -> &[f64] {
        match channel {
            OverlayChannel::Speed => &self.speed_kmh,
            OverlayChannel::HeartRate => &self.heart_rate,
            OverlayChannel::Acceleration => &self.acceleration,
            OverlayChannel::EmgQuadriceps => &self.emg_quadriceps,
        }
    }
}

/// Every window of a session with its drawn values
#[derive(Debug, Clone, PartialEq, Default)]
pub struct EventPlan {
    pub draws: Vec<EventDraw>,
}

impl EventPlan {
    /// Per window, draws speed, heart rate, acceleration then EMG. Windows
    /// must already be resolved against the series length.
    pub fn draw<R: Rng + ?Sized>(cfg: &EventConfig, windows: &[Range<usize>], rng: &mut R) -> Self {
        let speed = uniform(cfg.speed);
        let heart_rate = uniform(cfg.heart_rate);
        let acceleration = uniform(cfg.acceleration);
        let emg = uniform(cfg.emg_quadriceps);

        let draws = windows
            .iter()
            .map(|range| {
                let len = range.len();
                EventDraw {
                    range: range.clone(),
                    speed_kmh: sample_n(&speed, len, rng),
                    heart_rate: sample_n(&heart_rate, len, rng),
                    acceleration: sample_n(&acceleration, len, rng),
                    emg_quadriceps: sample_n(&emg, len, rng),
                }
            })
            .collect();

        Self { draws }
    }

    pub fn windows(&self) -> impl Iterator<Item = &Range<usize>> {
        self.draws.iter().map(|d| &d.range)
    }
}

/// New channel with every window of `plan` stamped over `base`.
///
/// Window samples past the end of `base` are ignored. Later windows win where
/// windows overlap.
pub fn apply_event_overlay(base: &[f64], plan: &EventPlan, channel: OverlayChannel) -> Vec<f64> {
    let mut out = base.to_vec();
    for draw in &plan.draws {
        let values = draw.values(channel);
        for (idx, value) in draw.range.clone().zip(values) {
            if let Some(slot) = out.get_mut(idx) {
                *slot = *value;
            }
        }
    }
    out
}

fn uniform(range: UniformRange) -> Uniform<f64> {
    Uniform::new(range.low, range.high)
}

fn sample_n<R: Rng + ?Sized>(dist: &Uniform<f64>, n: usize, rng: &mut R) -> Vec<f64> {
    (0..n).map(|_| dist.sample(rng)).collect()
}
