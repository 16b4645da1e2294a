//! Trajectory Configuration

use serde::{Deserialize, Serialize};

use crate::models::GeoPoint;

/// Looping GPS path around the stadium center
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct TrajectoryConfig {
    /// Reference center of the pitch (기본: 14.7140, -17.1850)
    pub center: GeoPoint,

    // === Pitch extent in degrees ===
    /// ~105 m in longitude degrees (기본: 0.00095)
    pub length_deg: f64,
    /// ~68 m in latitude degrees (기본: 0.00060)
    pub width_deg: f64,

    // === Loop shape ===
    /// Fraction of `length_deg` used as longitude amplitude (기본: 0.4)
    pub lon_amplitude: f64,
    /// Fraction of `width_deg` used as latitude amplitude (기본: 0.3)
    pub lat_amplitude: f64,
    /// x = sin(t / lon_divisor) (기본: 3.0)
    pub lon_divisor: f64,
    /// y = cos(t / lat_divisor) (기본: 2.0)
    pub lat_divisor: f64,
    /// Parameter range swept over the session, radians (기본: 10π)
    pub sweep_radians: f64,

    // === Jitter ===
    /// Normal jitter std-dev on longitude (기본: 0.0001)
    pub lon_jitter_std: f64,
    /// Normal jitter std-dev on latitude (기본: 0.00007)
    pub lat_jitter_std: f64,
}

impl Default for TrajectoryConfig {
    fn default() -> Self {
        Self {
            center: GeoPoint::new(14.7140, -17.1850),
            length_deg: 0.00095,
            width_deg: 0.00060,
            lon_amplitude: 0.4,
            lat_amplitude: 0.3,
            lon_divisor: 3.0,
            lat_divisor: 2.0,
            sweep_radians: 10.0 * std::f64::consts::PI,
            lon_jitter_std: 0.0001,
            lat_jitter_std: 0.00007,
        }
    }
}
