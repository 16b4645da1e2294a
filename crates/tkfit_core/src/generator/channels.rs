//! Baseline physiological channels

use rand::Rng;

use super::draw_normal;
use crate::config::ChannelConfig;
use crate::error::Result;

/// Channels before any event overlay
#[derive(Debug, Clone, PartialEq)]
pub struct BaseChannels {
    pub heart_rate: Vec<f64>,
    pub speed_kmh: Vec<f64>,
    pub acceleration: Vec<f64>,
    pub emg_quadriceps: Vec<f64>,
    pub emg_hamstring: Vec<f64>,
    pub player_load: Vec<f64>,
}

/// Running sum.
pub fn cumulative_sum(values: &[f64]) -> Vec<f64> {
    values
        .iter()
        .scan(0.0, |acc, v| {
            *acc += v;
            Some(*acc)
        })
        .collect()
}

/// Draw every baseline channel. Draw order: heart rate, speed, acceleration,
/// EMG quadriceps, EMG hamstring, load.
pub fn generate_base_channels<R: Rng + ?Sized>(
    cfg: &ChannelConfig,
    n: usize,
    rng: &mut R,
) -> Result<BaseChannels> {
    let hr_steps = draw_normal(rng, cfg.heart_rate_step, n)?;
    let heart_rate = cumulative_sum(&hr_steps)
        .into_iter()
        .map(|walk| (walk + cfg.heart_rate_baseline).clamp(cfg.heart_rate_min, cfg.heart_rate_max))
        .collect();

    let speed_kmh = abs_all(draw_normal(rng, cfg.speed, n)?);
    let acceleration = draw_normal(rng, cfg.acceleration, n)?;
    let emg_quadriceps = abs_all(draw_normal(rng, cfg.emg_quadriceps, n)?);
    let emg_hamstring = abs_all(draw_normal(rng, cfg.emg_hamstring, n)?);

    let load_increments = abs_all(draw_normal(rng, cfg.load_increment, n)?);
    let player_load = cumulative_sum(&load_increments);

    Ok(BaseChannels { heart_rate, speed_kmh, acceleration, emg_quadriceps, emg_hamstring, player_load })
}

fn abs_all(mut values: Vec<f64>) -> Vec<f64> {
    for v in values.iter_mut() {
        *v = v.abs();
    }
    values
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn test_cumulative_sum() {
        assert_eq!(cumulative_sum(&[1.0, 2.0, 3.0]), vec![1.0, 3.0, 6.0]);
        assert!(cumulative_sum(&[]).is_empty());
    }

    #[test]
    fn test_heart_rate_clipped_even_with_wild_walk() {
        let mut cfg = ChannelConfig::default();
        cfg.heart_rate_step.std_dev = 50.0;
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        let base = generate_base_channels(&cfg, 1000, &mut rng).unwrap();

        assert!(base.heart_rate.iter().all(|hr| (60.0..=200.0).contains(hr)));
        assert!(base.heart_rate.iter().any(|&hr| hr == 60.0 || hr == 200.0));
    }

    #[test]
    fn test_non_negative_channels_and_monotonic_load() {
        let mut rng = ChaCha8Rng::seed_from_u64(42);
        let base = generate_base_channels(&ChannelConfig::default(), 360, &mut rng).unwrap();

        assert!(base.speed_kmh.iter().all(|v| *v >= 0.0));
        assert!(base.emg_quadriceps.iter().all(|v| *v >= 0.0));
        assert!(base.emg_hamstring.iter().all(|v| *v >= 0.0));
        assert!(base.player_load.windows(2).all(|w| w[0] <= w[1]));
        assert!(base.acceleration.iter().any(|v| *v < 0.0));
    }
}
