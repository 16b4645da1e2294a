//! Match period / position filters
//!
//! The period window is a real constraint: it selects the samples that every
//! downstream view (summary, events, projection) works on.

use std::fmt;
use std::str::FromStr;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::{Result, TelemetryError};
use crate::models::{SessionData, TimeSeriesSample};

/// Position of the tracked player
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema, Default)]
#[serde(rename_all = "snake_case")]
pub enum PlayerPosition {
    #[default]
    Midfielder,
    Forward,
    Defender,
    Goalkeeper,
}

impl PlayerPosition {
    pub fn label(&self) -> &'static str {
        match self {
            PlayerPosition::Midfielder => "Midfielder",
            PlayerPosition::Forward => "Forward",
            PlayerPosition::Defender => "Defender",
            PlayerPosition::Goalkeeper => "Goalkeeper",
        }
    }
}

impl fmt::Display for PlayerPosition {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for PlayerPosition {
    type Err = TelemetryError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "midfielder" | "mf" | "cm" => Ok(PlayerPosition::Midfielder),
            "forward" | "fw" | "st" => Ok(PlayerPosition::Forward),
            "defender" | "df" | "cb" => Ok(PlayerPosition::Defender),
            "goalkeeper" | "gk" => Ok(PlayerPosition::Goalkeeper),
            other => Err(TelemetryError::InvalidFilter(format!("unknown position: {other}"))),
        }
    }
}

/// Dashboard filter state
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct SessionFilter {
    /// Inclusive window in elapsed match minutes (기본: 15..=75)
    pub period_minutes: (f64, f64),
    pub position: PlayerPosition,
}

impl Default for SessionFilter {
    fn default() -> Self {
        Self { period_minutes: (15.0, 75.0), position: PlayerPosition::Midfielder }
    }
}

impl SessionFilter {
    /// Whole session, whatever its length.
    pub fn full_match() -> Self {
        Self { period_minutes: (0.0, f64::INFINITY), ..Self::default() }
    }

    pub fn with_period(mut self, from_min: f64, to_min: f64) -> Self {
        self.period_minutes = (from_min, to_min);
        self
    }

    pub fn with_position(mut self, position: PlayerPosition) -> Self {
        self.position = position;
        self
    }

    pub fn validate(&self) -> Result<()> {
        let (from, to) = self.period_minutes;
        if from.is_nan() || to.is_nan() || from < 0.0 {
            return Err(TelemetryError::InvalidFilter(format!(
                "period must start at or after minute 0, got {from}..{to}"
            )));
        }
        if from > to {
            return Err(TelemetryError::InvalidFilter(format!("period inverted: {from} > {to}")));
        }
        Ok(())
    }

    /// Samples whose elapsed time since kick-off lies in the period.
    ///
    /// An empty selection is an error: nothing downstream is defined on it.
    pub fn apply<'a>(&self, session: &'a SessionData) -> Result<&'a [TimeSeriesSample]> {
        self.validate()?;
        let Some(kickoff) = session.start() else {
            return Err(TelemetryError::EmptySeries);
        };

        let (from, to) = self.period_minutes;
        let elapsed_min =
            |s: &TimeSeriesSample| (s.timestamp - kickoff).num_milliseconds() as f64 / 60_000.0;

        // samples are time ordered, so both bounds are partition points
        let lo = session.samples.partition_point(|s| elapsed_min(s) < from);
        let hi = session.samples.partition_point(|s| elapsed_min(s) <= to);

        if lo >= hi {
            return Err(TelemetryError::EmptySeries);
        }
        Ok(&session.samples[lo..hi])
    }
}
