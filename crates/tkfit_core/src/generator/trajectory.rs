//! Looping GPS trajectory
//!
//! The path is a Lissajous-like loop in degree offsets around the reference
//! center, with independent normal jitter per axis.

use rand::Rng;

use super::draw_normal;
use crate::config::{NormalParams, TrajectoryConfig};
use crate::error::Result;
use crate::models::GeoPoint;

/// Curve parameter of sample `i`, evenly spread over `[0, sweep]` (endpoints included).
#[inline]
pub fn loop_parameter(i: usize, n: usize, sweep: f64) -> f64 {
    if n <= 1 {
        0.0
    } else {
        sweep * i as f64 / (n - 1) as f64
    }
}

/// Noise-free `(d_lon, d_lat)` offsets in degrees.
pub fn base_loop(cfg: &TrajectoryConfig, n: usize) -> Vec<(f64, f64)> {
    let lon_amp = cfg.lon_amplitude * cfg.length_deg;
    let lat_amp = cfg.lat_amplitude * cfg.width_deg;

    (0..n)
        .map(|i| {
            let t = loop_parameter(i, n, cfg.sweep_radians);
            (lon_amp * (t / cfg.lon_divisor).sin(), lat_amp * (t / cfg.lat_divisor).cos())
        })
        .collect()
}

/// Full trajectory: loop + jitter, anchored at the reference center.
///
/// Longitude jitter is drawn before latitude jitter.
pub fn generate_trajectory<R: Rng + ?Sized>(
    cfg: &TrajectoryConfig,
    n: usize,
    rng: &mut R,
) -> Result<Vec<GeoPoint>> {
    let lon_jitter = draw_normal(rng, NormalParams::new(0.0, cfg.lon_jitter_std), n)?;
    let lat_jitter = draw_normal(rng, NormalParams::new(0.0, cfg.lat_jitter_std), n)?;

    Ok(base_loop(cfg, n)
        .into_iter()
        .zip(lon_jitter.into_iter().zip(lat_jitter))
        .map(|((dx, dy), (jx, jy))| cfg.center.offset(dy + jy, dx + jx))
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn test_loop_parameter_endpoints() {
        let sweep = 10.0 * std::f64::consts::PI;
        assert_eq!(loop_parameter(0, 360, sweep), 0.0);
        assert!((loop_parameter(359, 360, sweep) - sweep).abs() < 1e-12);
        assert_eq!(loop_parameter(0, 1, sweep), 0.0);
    }

    #[test]
    fn test_base_loop_stays_inside_amplitudes() {
        let cfg = TrajectoryConfig::default();
        let lon_amp = cfg.lon_amplitude * cfg.length_deg;
        let lat_amp = cfg.lat_amplitude * cfg.width_deg;

        let points = base_loop(&cfg, 360);
        assert_eq!(points.len(), 360);
        assert_eq!(points[0].0, 0.0);
        assert!((points[0].1 - lat_amp).abs() < 1e-15);
        for (dx, dy) in points {
            assert!(dx.abs() <= lon_amp + 1e-15);
            assert!(dy.abs() <= lat_amp + 1e-15);
        }
    }

    #[test]
    fn test_zero_jitter_matches_base_loop() {
        let cfg = TrajectoryConfig { lon_jitter_std: 0.0, lat_jitter_std: 0.0, ..Default::default() };
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let points = generate_trajectory(&cfg, 50, &mut rng).unwrap();

        for (p, (dx, dy)) in points.iter().zip(base_loop(&cfg, 50)) {
            assert!((p.lon - (cfg.center.lon + dx)).abs() < 1e-12);
            assert!((p.lat - (cfg.center.lat + dy)).abs() < 1e-12);
        }
    }

    #[test]
    fn test_trajectory_stays_near_center() {
        let cfg = TrajectoryConfig::default();
        let mut rng = ChaCha8Rng::seed_from_u64(42);
        let points = generate_trajectory(&cfg, 360, &mut rng).unwrap();

        // loop amplitude plus a generous 8-sigma jitter allowance
        for p in points {
            assert!((p.lon - cfg.center.lon).abs() < 0.00038 + 0.0008);
            assert!((p.lat - cfg.center.lat).abs() < 0.00018 + 0.00056);
        }
    }
}
