//! # tkfit_core - Synthetic Football Session Telemetry
//!
//! Data layer of the TKFIT performance dashboard: a seeded synthetic 90-minute
//! session for one player and its projection onto a schematic pitch.
//!
//! ## Features
//! - 100% deterministic generation (same seed = same bytes)
//! - Heart rate, speed, acceleration, EMG, cumulative load and GPS channels
//! - Sprint/tackle event windows stamped over the baseline
//! - Mean-centered GPS → pitch projection with hot-spot markers
//! - Period filters, headline metrics and key-event detection
//! - JSON API for the presentation layer

// Doc formatting lints - purely cosmetic
#![allow(clippy::doc_lazy_continuation)]
// Loop style
#![allow(clippy::needless_range_loop)]

pub mod analysis;
pub mod api;
pub mod config;
pub mod error;
pub mod filter;
pub mod generator;
pub mod models;
pub mod pitch;
pub mod projection;

// Re-export main API functions
pub use api::{build_dashboard_json, DashboardRequest, DashboardResponse};
pub use config::{GeneratorConfig, ProjectionConfig};
pub use error::{Result, TelemetryError};
pub use filter::{PlayerPosition, SessionFilter};
pub use generator::{generate_series, SeriesGenerator};
pub use models::{GeoPoint, HotSpot, SessionData, TimeSeriesSample};
pub use pitch::FieldGeometry;
pub use projection::{project_to_field, FieldProjection, FieldProjector};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const SCHEMA_VERSION: u8 = 1;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reference_scenario() {
        let session = generate_series().unwrap();

        assert_eq!(session.seed, 42);
        assert_eq!(session.len(), 360);
        assert_eq!(session.samples[0].timestamp.to_string(), "2023-11-15 15:00:00");
        assert_eq!(session.samples[359].timestamp.to_string(), "2023-11-15 16:29:45");
        for s in &session.samples[30..35] {
            assert!((170.0..=195.0).contains(&s.heart_rate));
        }
    }

    #[test]
    fn test_fingerprint_determinism_sha256() {
        let h1 = generate_series().unwrap().fingerprint().unwrap();
        let h2 = generate_series().unwrap().fingerprint().unwrap();

        assert_eq!(h1.len(), 64);
        assert!(h1.chars().all(|c| c.is_ascii_hexdigit()));
        assert_eq!(h1, h2, "Same seed should produce identical session sha256");

        let other = SeriesGenerator::new(GeneratorConfig::default().with_seed(1))
            .unwrap()
            .generate()
            .unwrap()
            .fingerprint()
            .unwrap();
        assert_ne!(h1, other);
    }

    #[test]
    fn test_generate_then_project() {
        let session = generate_series().unwrap();
        let trajectory = session.trajectory();
        let out = project_to_field(&trajectory, &session.hot_spots, 105.0, 68.0, 0.00095, 0.00061)
            .unwrap();

        assert_eq!(out.trajectory.len(), 360);
        assert_eq!(out.hot_spots.len(), 3);
        assert!((out.hot_spots[0].size - 18.0).abs() < 1e-12);
        assert_eq!(out, FieldProjector::default().project_session(&session).unwrap());
    }

    #[test]
    fn test_session_is_shareable() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<SessionData>();
        assert_send_sync::<FieldProjector>();
    }
}
