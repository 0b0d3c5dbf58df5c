//! Reproducible per-date jitter for day series.

use chrono::{Datelike, NaiveDate};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Day noise lies in [-NOISE_AMPLITUDE, NOISE_AMPLITUDE)
pub const NOISE_AMPLITUDE: f64 = 4.0;

/// Deterministic value in [0, 1) for a seed
pub fn seeded_unit(seed: u64) -> f64 {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    rng.gen::<f64>()
}

/// Sum of the char codes of `YYYY-MM` plus the day of month
pub fn date_seed(date: NaiveDate) -> u64 {
    let year_month = date.format("%Y-%m").to_string();
    year_month.bytes().map(u64::from).sum::<u64>() + u64::from(date.day())
}

/// Noise offset for a calendar date
pub fn day_noise(date: NaiveDate) -> f64 {
    (seeded_unit(date_seed(date)) - 0.5) * 2.0 * NOISE_AMPLITUDE
}
