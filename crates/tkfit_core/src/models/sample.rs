use chrono::NaiveDateTime;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// One timestamped row of the session series.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, JsonSchema)]
pub struct TimeSeriesSample {
    pub timestamp: NaiveDateTime,
    /// Beats per minute, clipped into the configured bounds
    pub heart_rate: f64,
    pub speed_kmh: f64,
    /// m/s², signed
    pub acceleration: f64,
    pub emg_quadriceps: f64,
    pub emg_hamstring: f64,
    /// Running sum, never decreases
    pub player_load: f64,
    pub gps_lat: f64,
    pub gps_lon: f64,
}

impl TimeSeriesSample {
    #[inline]
    pub fn position(&self) -> GeoPoint {
        GeoPoint { lat: self.gps_lat, lon: self.gps_lon }
    }
}

/// Latitude/longitude pair in decimal degrees.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, JsonSchema)]
pub struct GeoPoint {
    pub lat: f64,
    pub lon: f64,
}

impl GeoPoint {
    pub const fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }

    #[inline]
    pub fn offset(self, d_lat: f64, d_lon: f64) -> Self {
        Self { lat: self.lat + d_lat, lon: self.lon + d_lon }
    }
}
