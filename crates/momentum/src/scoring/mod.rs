pub mod pillar;
pub mod scorer;

pub use pillar::Pillar;
pub use scorer::{calculate_score, raw_score, ScoreResult, MAX_SCORE, SCORE_MODERATE, SCORE_STRONG};
