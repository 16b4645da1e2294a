use chrono::NaiveDateTime;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use super::hot_spot::HotSpot;
use super::sample::{GeoPoint, TimeSeriesSample};
use crate::error::Result;

/// Immutable output of one generator run.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, JsonSchema)]
pub struct SessionData {
    pub seed: u64,
    pub step_seconds: u32,
    pub samples: Vec<TimeSeriesSample>,
    pub hot_spots: Vec<HotSpot>,
}

impl SessionData {
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn start(&self) -> Option<NaiveDateTime> {
        self.samples.first().map(|s| s.timestamp)
    }

    /// Covered span in minutes, counting the last sample's interval.
    pub fn duration_minutes(&self) -> f64 {
        self.samples.len() as f64 * self.step_seconds as f64 / 60.0
    }

    /// Elapsed minutes from kick-off to the last sample.
    pub fn last_sample_minute(&self) -> f64 {
        match (self.samples.first(), self.samples.last()) {
            (Some(first), Some(last)) => {
                (last.timestamp - first.timestamp).num_milliseconds() as f64 / 60_000.0
            }
            _ => 0.0,
        }
    }

    pub fn trajectory(&self) -> Vec<GeoPoint> {
        self.samples.iter().map(TimeSeriesSample::position).collect()
    }

    /// SHA-256 hex digest over samples and hot spots.
    pub fn fingerprint(&self) -> Result<String> {
        let bytes = serde_json::to_vec(&(&self.samples, &self.hot_spots))?;
        let digest = Sha256::digest(&bytes);
        let mut out = String::with_capacity(digest.len() * 2);
        for b in digest {
            out.push_str(&format!("{:02x}", b));
        }
        Ok(out)
    }
}
