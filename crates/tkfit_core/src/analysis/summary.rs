//! Headline performance metrics over a window of samples

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::{Result, TelemetryError};
use crate::models::TimeSeriesSample;

/// Thresholds used by the summary
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct SummaryConfig {
    /// Maximum heart rate for zone computation (기본: 200 bpm)
    pub heart_rate_max: f64,
    /// Acceleration above which a sample counts as high intensity (기본: 2.0 m/s²)
    pub high_intensity_accel: f64,
}

impl Default for SummaryConfig {
    fn default() -> Self {
        Self { heart_rate_max: 200.0, high_intensity_accel: 2.0 }
    }
}

/// Five-zone model on percentage of maximum heart rate
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum HeartRateZone {
    /// < 60 %
    Recovery,
    /// 60-70 %
    Endurance,
    /// 70-80 %
    Tempo,
    /// 80-90 %
    Threshold,
    /// >= 90 %
    Maximal,
}

impl HeartRateZone {
    pub fn from_heart_rate(bpm: f64, heart_rate_max: f64) -> Self {
        let pct = bpm / heart_rate_max;
        if pct < 0.60 {
            HeartRateZone::Recovery
        } else if pct < 0.70 {
            HeartRateZone::Endurance
        } else if pct < 0.80 {
            HeartRateZone::Tempo
        } else if pct < 0.90 {
            HeartRateZone::Threshold
        } else {
            HeartRateZone::Maximal
        }
    }

    /// 1-based zone number
    pub fn number(&self) -> u8 {
        *self as u8 + 1
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct SessionSummary {
    pub samples: usize,
    pub duration_minutes: f64,
    pub total_distance_km: f64,
    pub max_speed_kmh: f64,
    pub mean_heart_rate: f64,
    pub peak_heart_rate: f64,
    pub heart_rate_zone: HeartRateZone,
    pub mean_emg_quadriceps: f64,
    pub mean_emg_hamstring: f64,
    /// Hamstring:quadriceps activation ratio, `None` when the quadriceps are silent
    pub hamstring_quadriceps_ratio: Option<f64>,
    pub high_intensity_accelerations: usize,
    pub load_accumulated: f64,
}

impl SessionSummary {
    pub fn from_samples(samples: &[TimeSeriesSample], cfg: &SummaryConfig) -> Result<Self> {
        let (first, last) = match (samples.first(), samples.last()) {
            (Some(f), Some(l)) => (f, l),
            _ => return Err(TelemetryError::EmptySeries),
        };
        if !cfg.heart_rate_max.is_finite() || cfg.heart_rate_max <= 0.0 {
            return Err(TelemetryError::config(format!(
                "heart_rate_max must be positive, got {}",
                cfg.heart_rate_max
            )));
        }

        // speed held constant over each interval
        let total_distance_km = samples
            .windows(2)
            .map(|w| {
                let dt_h = (w[1].timestamp - w[0].timestamp).num_milliseconds() as f64 / 3_600_000.0;
                w[0].speed_kmh * dt_h
            })
            .sum();

        let max_speed_kmh = samples.iter().map(|s| s.speed_kmh).fold(f64::MIN, f64::max);
        let peak_heart_rate = samples.iter().map(|s| s.heart_rate).fold(f64::MIN, f64::max);
        let mean_heart_rate = mean_of(samples, |s| s.heart_rate);
        let mean_emg_quadriceps = mean_of(samples, |s| s.emg_quadriceps);
        let mean_emg_hamstring = mean_of(samples, |s| s.emg_hamstring);

        let hamstring_quadriceps_ratio =
            (mean_emg_quadriceps > 0.0).then(|| mean_emg_hamstring / mean_emg_quadriceps);

        let high_intensity_accelerations =
            samples.iter().filter(|s| s.acceleration > cfg.high_intensity_accel).count();

        let duration_minutes = (last.timestamp - first.timestamp).num_seconds() as f64 / 60.0;

        Ok(Self {
            samples: samples.len(),
            duration_minutes,
            total_distance_km,
            max_speed_kmh,
            mean_heart_rate,
            peak_heart_rate,
            heart_rate_zone: HeartRateZone::from_heart_rate(mean_heart_rate, cfg.heart_rate_max),
            mean_emg_quadriceps,
            mean_emg_hamstring,
            hamstring_quadriceps_ratio,
            high_intensity_accelerations,
            load_accumulated: last.player_load - first.player_load,
        })
    }
}

fn mean_of(samples: &[TimeSeriesSample], f: impl Fn(&TimeSeriesSample) -> f64) -> f64 {
    samples.iter().map(f).sum::<f64>() / samples.len() as f64
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::TimelineConfig;

    fn flat_samples(n: usize, speed: f64, hr: f64) -> Vec<TimeSeriesSample> {
        let timeline = TimelineConfig::default();
        (0..n)
            .map(|i| TimeSeriesSample {
                timestamp: timeline.timestamp_at(i),
                heart_rate: hr,
                speed_kmh: speed,
                acceleration: if i % 2 == 0 { 2.5 } else { -1.0 },
                emg_quadriceps: 1.0,
                emg_hamstring: 0.6,
                player_load: i as f64,
                gps_lat: 0.0,
                gps_lon: 0.0,
            })
            .collect()
    }

    #[test]
    fn test_constant_speed_distance() {
        // 241 samples = 60 minutes of intervals at 12 km/h = 12 km
        let samples = flat_samples(241, 12.0, 150.0);
        let summary = SessionSummary::from_samples(&samples, &SummaryConfig::default()).unwrap();

        assert!((summary.total_distance_km - 12.0).abs() < 1e-9);
        assert!((summary.duration_minutes - 60.0).abs() < 1e-9);
        assert_eq!(summary.max_speed_kmh, 12.0);
        assert_eq!(summary.heart_rate_zone, HeartRateZone::Tempo);
        assert_eq!(summary.heart_rate_zone.number(), 3);
        assert_eq!(summary.high_intensity_accelerations, 121);
        assert!((summary.hamstring_quadriceps_ratio.unwrap() - 0.6).abs() < 1e-12);
        assert_eq!(summary.load_accumulated, 240.0);
    }

    #[test]
    fn test_single_sample() {
        let samples = flat_samples(1, 10.0, 100.0);
        let summary = SessionSummary::from_samples(&samples, &SummaryConfig::default()).unwrap();
        assert_eq!(summary.total_distance_km, 0.0);
        assert_eq!(summary.duration_minutes, 0.0);
        assert_eq!(summary.heart_rate_zone, HeartRateZone::Recovery);
    }

    #[test]
    fn test_silent_quadriceps() {
        let mut samples = flat_samples(3, 10.0, 100.0);
        for s in samples.iter_mut() {
            s.emg_quadriceps = 0.0;
        }
        let summary = SessionSummary::from_samples(&samples, &SummaryConfig::default()).unwrap();
        assert_eq!(summary.hamstring_quadriceps_ratio, None);
    }

    #[test]
    fn test_empty_rejected() {
        let err = SessionSummary::from_samples(&[], &SummaryConfig::default()).unwrap_err();
        assert!(matches!(err, TelemetryError::EmptySeries));
    }

    #[test]
    fn test_zone_boundaries() {
        assert_eq!(HeartRateZone::from_heart_rate(119.9, 200.0), HeartRateZone::Recovery);
        assert_eq!(HeartRateZone::from_heart_rate(120.0, 200.0), HeartRateZone::Endurance);
        assert_eq!(HeartRateZone::from_heart_rate(170.0, 200.0), HeartRateZone::Threshold);
        assert_eq!(HeartRateZone::from_heart_rate(180.0, 200.0), HeartRateZone::Maximal);
    }
}
