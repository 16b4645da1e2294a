//! Projection Configuration

use serde::{Deserialize, Serialize};

use crate::pitch::field;

/// Degree-to-meter scaling for the pitch overlay
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ProjectionConfig {
    /// Pitch length mapped onto `scale_lon` degrees (기본: 105 m)
    pub field_length_m: f64,
    /// Pitch width mapped onto `scale_lat` degrees (기본: 68 m)
    pub field_width_m: f64,
    /// Longitude degrees spanning the pitch length (기본: 0.00095)
    pub scale_lon: f64,
    /// Latitude degrees spanning the pitch width (기본: 0.00061)
    pub scale_lat: f64,
    /// Hot-spot marker size at intensity 1.0 (기본: 20)
    pub marker_base_size: f64,
}

impl Default for ProjectionConfig {
    fn default() -> Self {
        Self {
            field_length_m: field::LENGTH_M,
            field_width_m: field::WIDTH_M,
            scale_lon: 0.00095,
            scale_lat: 0.00061,
            marker_base_size: 20.0,
        }
    }
}

impl ProjectionConfig {
    /// Meters per longitude degree
    #[inline]
    pub fn meters_per_deg_lon(&self) -> f64 {
        self.field_length_m / self.scale_lon
    }

    /// Meters per latitude degree
    #[inline]
    pub fn meters_per_deg_lat(&self) -> f64 {
        self.field_width_m / self.scale_lat
    }
}
