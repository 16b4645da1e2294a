use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::sample::GeoPoint;

/// Zone of concentrated activity, independent of the time series.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, JsonSchema)]
pub struct HotSpot {
    pub lat: f64,
    pub lon: f64,
    /// Weight in (0, 1]
    pub intensity: f64,
}

impl HotSpot {
    #[inline]
    pub fn position(&self) -> GeoPoint {
        GeoPoint { lat: self.lat, lon: self.lon }
    }
}

/// Hot spot as configured: an offset in degrees from the reference center.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
pub struct HotSpotSpec {
    pub d_lat: f64,
    pub d_lon: f64,
    pub intensity: f64,
}

impl HotSpotSpec {
    pub const fn new(d_lat: f64, d_lon: f64, intensity: f64) -> Self {
        Self { d_lat, d_lon, intensity }
    }

    pub fn is_valid_intensity(&self) -> bool {
        self.intensity > 0.0 && self.intensity <= 1.0
    }

    pub fn resolve(&self, center: GeoPoint) -> HotSpot {
        let pos = center.offset(self.d_lat, self.d_lon);
        HotSpot { lat: pos.lat, lon: pos.lon, intensity: self.intensity }
    }
}
