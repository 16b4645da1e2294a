//! Key event detection
//!
//! A key event is a run of consecutive samples at or above sprint speed.

use chrono::NaiveDateTime;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::models::TimeSeriesSample;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct EventDetectionConfig {
    /// Sprint speed threshold (기본: 20 km/h)
    pub sprint_speed_kmh: f64,
    /// Shortest run reported (기본: 3 samples)
    pub min_samples: usize,
}

impl Default for EventDetectionConfig {
    fn default() -> Self {
        Self { sprint_speed_kmh: 20.0, min_samples: 3 }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct KeyEvent {
    /// Index of the first sample, relative to the analysed slice
    pub start_index: usize,
    /// Exclusive end index
    pub end_index: usize,
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
    pub peak_speed_kmh: f64,
    pub peak_heart_rate: f64,
    pub peak_acceleration: f64,
    pub peak_emg_quadriceps: f64,
}

impl KeyEvent {
    pub fn sample_count(&self) -> usize {
        self.end_index - self.start_index
    }

    fn from_run(samples: &[TimeSeriesSample], start_index: usize) -> Self {
        fn peak(samples: &[TimeSeriesSample], f: impl Fn(&TimeSeriesSample) -> f64) -> f64 {
            samples.iter().map(f).fold(f64::MIN, f64::max)
        }

        Self {
            start_index,
            end_index: start_index + samples.len(),
            start: samples[0].timestamp,
            end: samples[samples.len() - 1].timestamp,
            peak_speed_kmh: peak(samples, |s| s.speed_kmh),
            peak_heart_rate: peak(samples, |s| s.heart_rate),
            peak_acceleration: peak(samples, |s| s.acceleration),
            peak_emg_quadriceps: peak(samples, |s| s.emg_quadriceps),
        }
    }
}

/// Sprint runs in time order.
pub fn detect_key_events(samples: &[TimeSeriesSample], cfg: &EventDetectionConfig) -> Vec<KeyEvent> {
    let min_len = cfg.min_samples.max(1);
    let mut events = Vec::new();
    let mut run_start: Option<usize> = None;

    for (i, s) in samples.iter().enumerate() {
        let sprinting = s.speed_kmh >= cfg.sprint_speed_kmh;
        match (sprinting, run_start) {
            (true, None) => run_start = Some(i),
            (false, Some(start)) => {
                if i - start >= min_len {
                    events.push(KeyEvent::from_run(&samples[start..i], start));
                }
                run_start = None;
            }
            _ => {}
        }
    }

    if let Some(start) = run_start {
        if samples.len() - start >= min_len {
            events.push(KeyEvent::from_run(&samples[start..], start));
        }
    }

    events
}
