//! Event Overlay Configuration

use std::ops::Range;

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::error::{Result, TelemetryError};

/// Half-open uniform range `[low, high)`
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct UniformRange {
    pub low: f64,
    pub high: f64,
}

impl UniformRange {
    pub const fn new(low: f64, high: f64) -> Self {
        Self { low, high }
    }

    pub fn is_valid(&self) -> bool {
        self.low.is_finite()
            && self.high.is_finite()
            && self.low < self.high
            && (self.high - self.low).is_finite()
    }

    #[inline]
    pub fn contains(&self, value: f64) -> bool {
        value >= self.low && value <= self.high
    }
}

/// What to do with a window that runs past the end of the series
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum EventWindowPolicy {
    /// Fail with a configuration error
    #[default]
    Reject,
    /// Truncate at the series end, drop windows that start past it
    Clamp,
}

/// Sprint/tackle windows stamped over the baseline channels
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct EventConfig {
    /// Window start indices (기본: 30, 100, 180, 250, 320)
    pub start_indices: Vec<usize>,
    /// Samples per window (기본: 5)
    pub window_len: usize,
    pub policy: EventWindowPolicy,

    // === Overlay ranges ===
    /// km/h (기본: 20..28)
    pub speed: UniformRange,
    /// bpm (기본: 170..195)
    pub heart_rate: UniformRange,
    /// m/s² (기본: 3.0..4.5)
    pub acceleration: UniformRange,
    /// (기본: 2.5..3.5)
    pub emg_quadriceps: UniformRange,
}

impl Default for EventConfig {
    fn default() -> Self {
        Self {
            start_indices: vec![30, 100, 180, 250, 320],
            window_len: 5,
            policy: EventWindowPolicy::Reject,

            speed: UniformRange::new(20.0, 28.0),
            heart_rate: UniformRange::new(170.0, 195.0),
            acceleration: UniformRange::new(3.0, 4.5),
            emg_quadriceps: UniformRange::new(2.5, 3.5),
        }
    }
}

impl EventConfig {
    pub(crate) fn ranges(&self) -> [(&'static str, UniformRange); 4] {
        [
            ("speed", self.speed),
            ("heart_rate", self.heart_rate),
            ("acceleration", self.acceleration),
            ("emg_quadriceps", self.emg_quadriceps),
        ]
    }

    /// Index ranges of every window inside a series of `sample_count` samples.
    ///
    /// Under `Reject` any window past the end is an error; under `Clamp` it is
    /// truncated (or dropped when it starts past the end).
    pub fn resolve_windows(&self, sample_count: usize) -> Result<Vec<Range<usize>>> {
        let mut windows = Vec::with_capacity(self.start_indices.len());

        for &start in &self.start_indices {
            let end = start.saturating_add(self.window_len);
            if end <= sample_count {
                windows.push(start..end);
                continue;
            }

            match self.policy {
                EventWindowPolicy::Reject => {
                    return Err(TelemetryError::Configuration(format!(
                        "event window {}..{} exceeds sample count {}",
                        start, end, sample_count
                    )));
                }
                EventWindowPolicy::Clamp if start < sample_count => {
                    warn!(start, end, sample_count, "event window truncated at series end");
                    windows.push(start..sample_count);
                }
                EventWindowPolicy::Clamp => {
                    warn!(start, sample_count, "event window starts past series end, dropped");
                }
            }
        }

        Ok(windows)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_windows_fit() {
        let cfg = EventConfig::default();
        let windows = cfg.resolve_windows(360).unwrap();
        assert_eq!(windows.len(), 5);
        assert_eq!(windows[0], 30..35);
        assert_eq!(windows[4], 320..325);
    }

    #[test]
    fn test_reject_out_of_bounds_window() {
        let cfg = EventConfig::default();
        let err = cfg.resolve_windows(322).unwrap_err();
        assert!(matches!(err, TelemetryError::Configuration(_)));
    }

    #[test]
    fn test_window_ending_exactly_at_bound_is_accepted() {
        let cfg = EventConfig::default();
        let windows = cfg.resolve_windows(325).unwrap();
        assert_eq!(windows.last(), Some(&(320..325)));
    }

    #[test]
    fn test_clamp_truncates_and_drops() {
        let cfg = EventConfig { policy: EventWindowPolicy::Clamp, ..EventConfig::default() };

        let windows = cfg.resolve_windows(322).unwrap();
        assert_eq!(windows.len(), 5);
        assert_eq!(windows[4], 320..322);

        let windows = cfg.resolve_windows(200).unwrap();
        assert_eq!(windows, vec![30..35, 100..105, 180..185]);
    }

    #[test]
    fn test_uniform_range_validity() {
        assert!(UniformRange::new(20.0, 28.0).is_valid());
        assert!(!UniformRange::new(28.0, 20.0).is_valid());
        assert!(!UniformRange::new(1.0, 1.0).is_valid());
        assert!(!UniformRange::new(f64::NAN, 1.0).is_valid());
    }
}
