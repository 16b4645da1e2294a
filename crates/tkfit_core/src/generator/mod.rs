//! # Series Generator
//!
//! Builds the synthetic session in a fixed order so that one seed always maps
//! to the same bytes:
//!
//! 1. timestamps `start + i * step`
//! 2. trajectory (longitude jitter, then latitude jitter)
//! 3. baseline channels
//! 4. event plan, then pure overlay onto speed / heart rate / acceleration / EMG
//! 5. hot spots from fixed offsets
//!
//! All randomness comes from the generator's own `ChaCha8Rng`.

pub mod channels;
pub mod overlay;
pub mod trajectory;

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use rand_distr::{Distribution, Normal};
use tracing::debug;

use crate::config::{GeneratorConfig, NormalParams};
use crate::error::{Result, TelemetryError};
use crate::models::{HotSpot, SessionData, TimeSeriesSample};

pub use channels::{generate_base_channels, BaseChannels};
pub use overlay::{apply_event_overlay, EventDraw, EventPlan, OverlayChannel};
pub use trajectory::generate_trajectory;

/// One-shot generator owning its config and random stream
#[derive(Debug, Clone)]
pub struct SeriesGenerator {
    config: GeneratorConfig,
    rng: ChaCha8Rng,
}

impl SeriesGenerator {
    /// Validates `config` and seeds the stream from `config.seed`.
    pub fn new(config: GeneratorConfig) -> Result<Self> {
        let rng = ChaCha8Rng::seed_from_u64(config.seed);
        Self::with_rng(config, rng)
    }

    /// Use an externally constructed stream; `config.seed` is only recorded.
    pub fn with_rng(config: GeneratorConfig, rng: ChaCha8Rng) -> Result<Self> {
        config.validate()?;
        Ok(Self { config, rng })
    }

    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Consume the generator and produce the session.
    pub fn generate(mut self) -> Result<SessionData> {
        let cfg = &self.config;
        let n = cfg.timeline.sample_count;
        let rng = &mut self.rng;

        let trajectory = generate_trajectory(&cfg.trajectory, n, rng)?;
        let base = generate_base_channels(&cfg.channels, n, rng)?;

        let windows = cfg.events.resolve_windows(n)?;
        let plan = EventPlan::draw(&cfg.events, &windows, rng);
        debug!(samples = n, windows = plan.draws.len(), seed = cfg.seed, "event plan drawn");

        let speed = apply_event_overlay(&base.speed_kmh, &plan, OverlayChannel::Speed);
        let heart_rate = apply_event_overlay(&base.heart_rate, &plan, OverlayChannel::HeartRate);
        let acceleration =
            apply_event_overlay(&base.acceleration, &plan, OverlayChannel::Acceleration);
        let emg_quadriceps =
            apply_event_overlay(&base.emg_quadriceps, &plan, OverlayChannel::EmgQuadriceps);

        let samples: Vec<TimeSeriesSample> = (0..n)
            .map(|i| TimeSeriesSample {
                timestamp: cfg.timeline.timestamp_at(i),
                heart_rate: heart_rate[i],
                speed_kmh: speed[i],
                acceleration: acceleration[i],
                emg_quadriceps: emg_quadriceps[i],
                emg_hamstring: base.emg_hamstring[i],
                player_load: base.player_load[i],
                gps_lat: trajectory[i].lat,
                gps_lon: trajectory[i].lon,
            })
            .collect();

        let hot_spots: Vec<HotSpot> =
            cfg.hot_spots.iter().map(|spec| spec.resolve(cfg.trajectory.center)).collect();

        debug!(samples = samples.len(), hot_spots = hot_spots.len(), "session generated");

        Ok(SessionData {
            seed: cfg.seed,
            step_seconds: cfg.timeline.step_seconds,
            samples,
            hot_spots,
        })
    }
}

/// Reference session: seed 42, 360 samples from 2023-11-15T15:00:00.
pub fn generate_series() -> Result<SessionData> {
    SeriesGenerator::new(GeneratorConfig::default())?.generate()
}

pub(crate) fn draw_normal<R: Rng + ?Sized>(
    rng: &mut R,
    params: NormalParams,
    n: usize,
) -> Result<Vec<f64>> {
    let normal = Normal::new(params.mean, params.std_dev).map_err(|e| {
        TelemetryError::Configuration(format!("normal({}, {}): {}", params.mean, params.std_dev, e))
    })?;
    Ok((0..n).map(|_| normal.sample(rng)).collect())
}
