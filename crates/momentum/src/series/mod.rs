pub mod generator;
pub mod noise;
pub mod types;

pub use generator::{calculate_series, mean_score, INITIAL_PREV_SCORE};
pub use noise::{date_seed, day_noise, seeded_unit, NOISE_AMPLITUDE};
pub use types::{MomentumPoint, Timeframe, Volatility};
