//! # Generator Configuration
//!
//! Every constant of the synthetic session lives here so that a run is fully
//! described by one value (and one seed).
//!
//! ```rust
//! use tkfit_core::config::GeneratorConfig;
//!
//! let config = GeneratorConfig::default();
//! assert_eq!(config.seed, 42);
//! assert!(config.validate().is_ok());
//! ```

mod channel_config;
mod event_config;
mod projection_config;
mod timeline_config;
mod trajectory_config;

pub use channel_config::{ChannelConfig, NormalParams};
pub use event_config::{EventConfig, EventWindowPolicy, UniformRange};
pub use projection_config::ProjectionConfig;
pub use timeline_config::TimelineConfig;
pub use trajectory_config::TrajectoryConfig;

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{Result, TelemetryError};
use crate::models::HotSpotSpec;

/// Default seed of the reference session
pub const DEFAULT_SEED: u64 = 42;

/// A session always carries this many hot spots
pub const HOT_SPOT_COUNT: usize = 3;

/// Full description of one synthetic session
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct GeneratorConfig {
    pub seed: u64,
    pub timeline: TimelineConfig,
    pub trajectory: TrajectoryConfig,
    pub channels: ChannelConfig,
    pub events: EventConfig,
    pub hot_spots: Vec<HotSpotSpec>,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            seed: DEFAULT_SEED,
            timeline: TimelineConfig::default(),
            trajectory: TrajectoryConfig::default(),
            channels: ChannelConfig::default(),
            events: EventConfig::default(),
            hot_spots: default_hot_spots(),
        }
    }
}

/// The three activity zones around the reference center
pub fn default_hot_spots() -> Vec<HotSpotSpec> {
    vec![
        HotSpotSpec::new(0.0003, -0.0003, 0.9),
        HotSpotSpec::new(-0.0002, 0.0004, 0.7),
        HotSpotSpec::new(0.0001, 0.0001, 0.8),
    ]
}

impl GeneratorConfig {
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    pub fn from_yaml_str(src: &str) -> Result<Self> {
        let config: Self = serde_yaml::from_str(src)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_json_str(src: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(src)?;
        config.validate()?;
        Ok(config)
    }

    /// Load from a `.json` file, anything else is read as YAML.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let src = std::fs::read_to_string(path)?;
        debug!(path = %path.display(), "loading generator config");

        let is_json = path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

        if is_json {
            Self::from_json_str(&src)
        } else {
            Self::from_yaml_str(&src)
        }
    }

    /// Check every constant; the first violation is reported.
    pub fn validate(&self) -> Result<()> {
        let timeline = &self.timeline;
        if timeline.sample_count == 0 {
            return Err(TelemetryError::config("sample_count must be at least 1"));
        }
        if timeline.step_seconds == 0 {
            return Err(TelemetryError::config("step_seconds must be at least 1"));
        }
        if timeline.last_timestamp().is_none() {
            return Err(TelemetryError::config(format!(
                "{} samples at {} s from {} overflow the timestamp range",
                timeline.sample_count, timeline.step_seconds, timeline.start
            )));
        }

        let trajectory = &self.trajectory;
        let trajectory_values = [
            ("center.lat", trajectory.center.lat),
            ("center.lon", trajectory.center.lon),
            ("length_deg", trajectory.length_deg),
            ("width_deg", trajectory.width_deg),
            ("lon_amplitude", trajectory.lon_amplitude),
            ("lat_amplitude", trajectory.lat_amplitude),
            ("sweep_radians", trajectory.sweep_radians),
        ];
        for (name, value) in trajectory_values {
            if !value.is_finite() {
                return Err(TelemetryError::config(format!("trajectory.{name} must be finite")));
            }
        }
        let divisors = [("lon_divisor", trajectory.lon_divisor), ("lat_divisor", trajectory.lat_divisor)];
        for (name, divisor) in divisors {
            if !divisor.is_finite() || divisor == 0.0 {
                return Err(TelemetryError::config(format!(
                    "trajectory.{name} must be finite and non-zero"
                )));
            }
        }
        let jitters =
            [("lon_jitter_std", trajectory.lon_jitter_std), ("lat_jitter_std", trajectory.lat_jitter_std)];
        for (name, std) in jitters {
            if !std.is_finite() || std < 0.0 {
                return Err(TelemetryError::config(format!(
                    "trajectory.{name} must be finite and >= 0, got {std}"
                )));
            }
        }

        let channels = &self.channels;
        for (name, params) in channels.normals() {
            if !params.is_valid() {
                return Err(TelemetryError::config(format!(
                    "channels.{name}: invalid normal parameters {:?}",
                    params
                )));
            }
        }
        if !channels.heart_rate_baseline.is_finite() {
            return Err(TelemetryError::config("channels.heart_rate_baseline must be finite"));
        }
        if !channels.heart_rate_min.is_finite()
            || !channels.heart_rate_max.is_finite()
            || channels.heart_rate_min >= channels.heart_rate_max
        {
            return Err(TelemetryError::config(format!(
                "heart rate bounds inverted: min {} >= max {}",
                channels.heart_rate_min, channels.heart_rate_max
            )));
        }

        let events = &self.events;
        if events.window_len == 0 {
            return Err(TelemetryError::config("events.window_len must be at least 1"));
        }
        for (name, range) in events.ranges() {
            if !range.is_valid() {
                return Err(TelemetryError::config(format!(
                    "events.{name}: empty or inverted range {}..{}",
                    range.low, range.high
                )));
            }
        }
        if events.heart_rate.low < channels.heart_rate_min
            || events.heart_rate.high > channels.heart_rate_max
        {
            return Err(TelemetryError::config(format!(
                "events.heart_rate {}..{} outside clip bounds {}..{}",
                events.heart_rate.low,
                events.heart_rate.high,
                channels.heart_rate_min,
                channels.heart_rate_max
            )));
        }
        if events.speed.low < 0.0 || events.emg_quadriceps.low < 0.0 {
            return Err(TelemetryError::config("event speed and EMG ranges must be non-negative"));
        }
        events.resolve_windows(timeline.sample_count)?;

        if self.hot_spots.len() != HOT_SPOT_COUNT {
            return Err(TelemetryError::config(format!(
                "expected {} hot spots, got {}",
                HOT_SPOT_COUNT,
                self.hot_spots.len()
            )));
        }
        for (i, spot) in self.hot_spots.iter().enumerate() {
            if !spot.is_valid_intensity() {
                return Err(TelemetryError::config(format!(
                    "hot_spots[{i}].intensity must be in (0, 1], got {}",
                    spot.intensity
                )));
            }
            if !spot.d_lat.is_finite() || !spot.d_lon.is_finite() {
                return Err(TelemetryError::config(format!("hot_spots[{i}] offset must be finite")));
            }
        }

        Ok(())
    }
}

// ========== Tests ==========
