//! GPS → pitch projection
//!
//! Origin-centered affine map from degrees to meters:
//!
//! ```text
//! x = (lon - mean_lon) * field_length_m / scale_lon
//! y = (lat - mean_lat) * field_width_m  / scale_lat
//! ```
//!
//! The origin is the mean of the trajectory, so the projected path is always
//! centered on the diagram. No curvature correction: the extent is a single
//! pitch, where fixed per-axis scale factors are accurate enough.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::ProjectionConfig;
use crate::error::{Result, TelemetryError};
use crate::models::{GeoPoint, HotSpot, SessionData};

/// Position on the diagram in meters from its center
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, JsonSchema)]
pub struct PitchPoint {
    pub x: f64,
    pub y: f64,
}

/// Hot spot on the diagram with its marker size
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, JsonSchema)]
pub struct ProjectedHotSpot {
    pub x: f64,
    pub y: f64,
    pub size: f64,
}

/// Result of one projection pass
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, JsonSchema)]
pub struct FieldProjection {
    /// Mean lat/lon used as the local origin
    pub origin: GeoPoint,
    /// Same length and order as the input trajectory
    pub trajectory: Vec<PitchPoint>,
    /// Same length and order as the input hot spots
    pub hot_spots: Vec<ProjectedHotSpot>,
}

impl FieldProjection {
    /// Every `stride`-th trajectory point, starting with the first.
    pub fn every_nth(&self, stride: usize) -> Result<Vec<PitchPoint>> {
        if stride == 0 {
            return Err(TelemetryError::InvalidProjection("stride must be at least 1".into()));
        }
        Ok(self.trajectory.iter().step_by(stride).copied().collect())
    }
}

/// Stateless projector bound to one set of scale constants
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FieldProjector {
    config: ProjectionConfig,
}

impl Default for FieldProjector {
    fn default() -> Self {
        Self { config: ProjectionConfig::default() }
    }
}

impl FieldProjector {
    pub fn new(config: ProjectionConfig) -> Result<Self> {
        let values = [
            ("field_length_m", config.field_length_m),
            ("field_width_m", config.field_width_m),
            ("scale_lon", config.scale_lon),
            ("scale_lat", config.scale_lat),
        ];
        for (name, value) in values {
            if !value.is_finite() || value <= 0.0 {
                return Err(TelemetryError::InvalidProjection(format!(
                    "{name} must be finite and > 0, got {value}"
                )));
            }
        }
        if !config.marker_base_size.is_finite() || config.marker_base_size < 0.0 {
            return Err(TelemetryError::InvalidProjection(format!(
                "marker_base_size must be finite and >= 0, got {}",
                config.marker_base_size
            )));
        }
        Ok(Self { config })
    }

    pub fn config(&self) -> &ProjectionConfig {
        &self.config
    }

    /// Mean lat/lon of a trajectory.
    pub fn origin(trajectory: &[GeoPoint]) -> Result<GeoPoint> {
        if trajectory.is_empty() {
            return Err(TelemetryError::EmptySeries);
        }
        let n = trajectory.len() as f64;
        let (sum_lat, sum_lon) =
            trajectory.iter().fold((0.0, 0.0), |(la, lo), p| (la + p.lat, lo + p.lon));
        Ok(GeoPoint::new(sum_lat / n, sum_lon / n))
    }

    #[inline]
    pub fn project_point(&self, origin: GeoPoint, point: GeoPoint) -> PitchPoint {
        PitchPoint {
            x: (point.lon - origin.lon) * self.config.meters_per_deg_lon(),
            y: (point.lat - origin.lat) * self.config.meters_per_deg_lat(),
        }
    }

    /// Project around the trajectory's own mean.
    pub fn project(&self, trajectory: &[GeoPoint], hot_spots: &[HotSpot]) -> Result<FieldProjection> {
        let origin = Self::origin(trajectory)?;
        Ok(self.project_with_origin(origin, trajectory, hot_spots))
    }

    /// Project around a fixed origin, e.g. the full-session mean when only a
    /// period of the trajectory is shown.
    pub fn project_with_origin(
        &self,
        origin: GeoPoint,
        trajectory: &[GeoPoint],
        hot_spots: &[HotSpot],
    ) -> FieldProjection {
        let projected: Vec<PitchPoint> =
            trajectory.iter().map(|p| self.project_point(origin, *p)).collect();

        let spots = hot_spots
            .iter()
            .map(|spot| {
                let p = self.project_point(origin, spot.position());
                ProjectedHotSpot { x: p.x, y: p.y, size: self.config.marker_base_size * spot.intensity }
            })
            .collect();

        debug!(points = projected.len(), origin_lat = origin.lat, origin_lon = origin.lon, "trajectory projected");

        FieldProjection { origin, trajectory: projected, hot_spots: spots }
    }

    pub fn project_session(&self, session: &SessionData) -> Result<FieldProjection> {
        self.project(&session.trajectory(), &session.hot_spots)
    }
}

/// Free-function form of [`FieldProjector::project`] with explicit constants.
pub fn project_to_field(
    trajectory: &[GeoPoint],
    hot_spots: &[HotSpot],
    field_length_m: f64,
    field_width_m: f64,
    scale_lon: f64,
    scale_lat: f64,
) -> Result<FieldProjection> {
    let config = ProjectionConfig {
        field_length_m,
        field_width_m,
        scale_lon,
        scale_lat,
        ..ProjectionConfig::default()
    };
    FieldProjector::new(config)?.project(trajectory, hot_spots)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generator::generate_series;

    fn square() -> Vec<GeoPoint> {
        vec![
            GeoPoint::new(10.0, 20.0),
            GeoPoint::new(10.0, 20.001),
            GeoPoint::new(10.001, 20.001),
            GeoPoint::new(10.001, 20.0),
        ]
    }

    #[test]
    fn test_origin_is_mean() {
        let origin = FieldProjector::origin(&square()).unwrap();
        assert!((origin.lat - 10.0005).abs() < 1e-12);
        assert!((origin.lon - 20.0005).abs() < 1e-12);
    }

    #[test]
    fn test_projection_scales_each_axis() {
        let out = project_to_field(&square(), &[], 105.0, 68.0, 0.00095, 0.00061).unwrap();
        assert_eq!(out.trajectory.len(), 4);

        let p = out.trajectory[2];
        assert!((p.x - 0.0005 * 105.0 / 0.00095).abs() < 1e-6);
        assert!((p.y - 0.0005 * 68.0 / 0.00061).abs() < 1e-6);

        let sum_x: f64 = out.trajectory.iter().map(|p| p.x).sum();
        assert!(sum_x.abs() < 1e-6);
    }

    #[test]
    fn test_hot_spot_size_and_position() {
        let spot = HotSpot { lat: 10.0005, lon: 20.0005, intensity: 0.7 };
        let out = FieldProjector::default().project(&square(), &[spot]).unwrap();
        let h = out.hot_spots[0];
        assert!(h.x.abs() < 1e-6);
        assert!(h.y.abs() < 1e-6);
        assert!((h.size - 14.0).abs() < 1e-12);
    }

    #[test]
    fn test_empty_trajectory_rejected() {
        let spot = HotSpot { lat: 1.0, lon: 1.0, intensity: 1.0 };
        let err = FieldProjector::default().project(&[], &[spot]).unwrap_err();
        assert!(matches!(err, TelemetryError::EmptySeries));
    }

    #[test]
    fn test_degenerate_scale_rejected() {
        let err = project_to_field(&square(), &[], 105.0, 68.0, 0.0, 0.00061).unwrap_err();
        assert!(matches!(err, TelemetryError::InvalidProjection(_)));
        assert!(project_to_field(&square(), &[], f64::NAN, 68.0, 0.00095, 0.00061).is_err());
    }

    #[test]
    fn test_negative_dimensions_rejected() {
        let mirrored = [
            (-105.0, 68.0, 0.00095, 0.00061),
            (105.0, -68.0, 0.00095, 0.00061),
            (105.0, 68.0, -0.00095, 0.00061),
            (105.0, 68.0, 0.00095, -0.00061),
        ];
        for (len, wid, s_lon, s_lat) in mirrored {
            let err = project_to_field(&square(), &[], len, wid, s_lon, s_lat).unwrap_err();
            assert!(matches!(err, TelemetryError::InvalidProjection(_)));
        }
    }

    #[test]
    fn test_fixed_origin_keeps_hot_spots_in_place() {
        let session = generate_series().unwrap();
        let projector = FieldProjector::default();
        let full = projector.project_session(&session).unwrap();

        let origin = FieldProjector::origin(&session.trajectory()).unwrap();
        let early: Vec<GeoPoint> = session.samples[..80].iter().map(|s| s.position()).collect();
        let part = projector.project_with_origin(origin, &early, &session.hot_spots);

        assert_eq!(part.origin, full.origin);
        assert_eq!(part.hot_spots, full.hot_spots);
        assert_eq!(part.trajectory[..], full.trajectory[..80]);
    }

    #[test]
    fn test_every_nth() {
        let out = FieldProjector::default().project(&square(), &[]).unwrap();
        let thinned = out.every_nth(3).unwrap();
        assert_eq!(thinned, vec![out.trajectory[0], out.trajectory[3]]);
        assert!(out.every_nth(0).is_err());
    }

    #[test]
    fn test_session_projection_stays_on_pitch() {
        let session = generate_series().unwrap();
        let projector = FieldProjector::default();
        let out = projector.project_session(&session).unwrap();

        assert_eq!(out.trajectory.len(), session.len());
        assert_eq!(out.hot_spots.len(), 3);
        // the loop spans 0.8 x 0.6 of the pitch; only jitter at the turns leaves it
        let geo = crate::pitch::FieldGeometry::standard();
        let inside = out.trajectory.iter().filter(|p| geo.contains(p.x, p.y)).count();
        assert!(inside as f64 >= 0.8 * out.trajectory.len() as f64);
        assert!(out.trajectory.iter().all(|p| p.x.abs() < 120.0 && p.y.abs() < 80.0));
    }

    #[test]
    fn test_projection_does_not_mutate_input() {
        let input = square();
        let copy = input.clone();
        let _ = FieldProjector::default().project(&input, &[]).unwrap();
        assert_eq!(input, copy);
    }

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        fn trajectory_strategy() -> impl Strategy<Value = Vec<GeoPoint>> {
            prop::collection::vec(
                (14.70f64..14.73, -17.20f64..-17.17).prop_map(|(lat, lon)| GeoPoint::new(lat, lon)),
                1..64,
            )
        }

        proptest! {
            /// Property: projecting twice yields identical output
            #[test]
            fn prop_projection_idempotent(traj in trajectory_strategy()) {
                let projector = FieldProjector::default();
                let a = projector.project(&traj, &[]).unwrap();
                let b = projector.project(&traj, &[]).unwrap();
                prop_assert_eq!(a, b);
            }

            /// Property: scaling a point's offset from the origin scales its projection
            #[test]
            fn prop_projection_linear(
                traj in trajectory_strategy(),
                idx in any::<prop::sample::Index>(),
                k in -5.0f64..5.0,
            ) {
                let projector = FieldProjector::default();
                let origin = FieldProjector::origin(&traj).unwrap();
                let p = traj[idx.index(traj.len())];

                let scaled = GeoPoint::new(
                    origin.lat + k * (p.lat - origin.lat),
                    origin.lon + k * (p.lon - origin.lon),
                );
                let base = projector.project_point(origin, p);
                let moved = projector.project_point(origin, scaled);

                prop_assert!((moved.x - k * base.x).abs() < 1e-6);
                prop_assert!((moved.y - k * base.y).abs() < 1e-6);
            }

            /// Property: output length always matches input length
            #[test]
            fn prop_projection_preserves_length(traj in trajectory_strategy()) {
                let out = FieldProjector::default().project(&traj, &[]).unwrap();
                prop_assert_eq!(out.trajectory.len(), traj.len());
            }
        }
    }
}
