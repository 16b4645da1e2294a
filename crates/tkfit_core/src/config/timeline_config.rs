//! Timeline Configuration

use chrono::{Duration, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

/// Sample grid of the session
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct TimelineConfig {
    /// Number of samples (기본: 360 = 90 min at 15 s)
    pub sample_count: usize,
    /// Spacing between samples in seconds (기본: 15)
    pub step_seconds: u32,
    /// Kick-off instant of sample 0 (기본: 2023-11-15T15:00:00)
    pub start: NaiveDateTime,
}

impl Default for TimelineConfig {
    fn default() -> Self {
        Self {
            sample_count: 360,
            step_seconds: 15,
            start: NaiveDate::from_ymd_opt(2023, 11, 15)
                .and_then(|d| d.and_hms_opt(15, 0, 0))
                .unwrap_or_default(),
        }
    }
}

impl TimelineConfig {
    pub fn step(&self) -> Duration {
        Duration::seconds(i64::from(self.step_seconds))
    }

    /// Only defined for `index < sample_count` of a validated timeline.
    pub fn timestamp_at(&self, index: usize) -> NaiveDateTime {
        self.start + Duration::seconds(i64::from(self.step_seconds) * index as i64)
    }

    /// Timestamp of the last sample; `None` when the grid leaves chrono's range.
    pub fn last_timestamp(&self) -> Option<NaiveDateTime> {
        let last = i64::try_from(self.sample_count.checked_sub(1)?).ok()?;
        let secs = i64::from(self.step_seconds).checked_mul(last)?;
        self.start.checked_add_signed(Duration::try_seconds(secs)?)
    }

    pub fn duration_minutes(&self) -> f64 {
        self.sample_count as f64 * f64::from(self.step_seconds) / 60.0
    }
}
