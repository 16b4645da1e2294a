//! Channel Configuration

use serde::{Deserialize, Serialize};

/// Parameters of a normal distribution
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct NormalParams {
    pub mean: f64,
    pub std_dev: f64,
}

impl NormalParams {
    pub const fn new(mean: f64, std_dev: f64) -> Self {
        Self { mean, std_dev }
    }

    pub fn is_valid(&self) -> bool {
        self.mean.is_finite() && self.std_dev.is_finite() && self.std_dev >= 0.0
    }
}

/// Baseline noise for every physiological channel
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ChannelConfig {
    // === Heart rate (random walk) ===
    /// Per-sample increment of the walk (기본: N(0, 2))
    pub heart_rate_step: NormalParams,
    /// Offset added to the walk (기본: 80 bpm)
    pub heart_rate_baseline: f64,
    /// Lower clip (기본: 60 bpm)
    pub heart_rate_min: f64,
    /// Upper clip (기본: 200 bpm)
    pub heart_rate_max: f64,

    // === Absolute-valued noise ===
    /// |N(0, 8)| km/h
    pub speed: NormalParams,
    /// |N(0, 0.8)|
    pub emg_quadriceps: NormalParams,
    /// |N(0, 0.6)|
    pub emg_hamstring: NormalParams,

    // === Signed noise ===
    /// N(0, 1.5) m/s²
    pub acceleration: NormalParams,

    // === Load ===
    /// cumsum(|N(1, 0.3)|)
    pub load_increment: NormalParams,
}

impl Default for ChannelConfig {
    fn default() -> Self {
        Self {
            heart_rate_step: NormalParams::new(0.0, 2.0),
            heart_rate_baseline: 80.0,
            heart_rate_min: 60.0,
            heart_rate_max: 200.0,

            speed: NormalParams::new(0.0, 8.0),
            emg_quadriceps: NormalParams::new(0.0, 0.8),
            emg_hamstring: NormalParams::new(0.0, 0.6),

            acceleration: NormalParams::new(0.0, 1.5),

            load_increment: NormalParams::new(1.0, 0.3),
        }
    }
}

impl ChannelConfig {
    /// All normal parameter sets, labelled for error messages
    pub(crate) fn normals(&self) -> [(&'static str, NormalParams); 6] {
        [
            ("heart_rate_step", self.heart_rate_step),
            ("speed", self.speed),
            ("acceleration", self.acceleration),
            ("emg_quadriceps", self.emg_quadriceps),
            ("emg_hamstring", self.emg_hamstring),
            ("load_increment", self.load_increment),
        ]
    }
}
