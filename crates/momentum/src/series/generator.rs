use crate::ephemeris::ChartSnapshot;
use crate::scoring::{calculate_score, Pillar, MAX_SCORE};
use crate::series::noise::day_noise;
use crate::series::types::{MomentumPoint, Timeframe, Volatility};

/// Score before the first point, used for its volatility
pub const INITIAL_PREV_SCORE: f64 = 50.0;

fn clamp_score(score: f64) -> f64 {
    score.clamp(0.0, MAX_SCORE)
}

/// Build a momentum series from time-ordered transits.
///
/// Day series get per-date noise. With `target_score`, every point is
/// shifted by `target - mean` so the series averages back to the target,
/// then rounded and clamped. Tags always come from the unperturbed score.
pub fn calculate_series(
    natal: &ChartSnapshot,
    transits: &[ChartSnapshot],
    timeframe: Timeframe,
    pillar: Pillar,
    target_score: Option<f64>,
) -> Vec<MomentumPoint> {
    if transits.is_empty() {
        return Vec::new();
    }

    // Pass 1: base scores
    let mut sum = 0.0;
    let mut scored: Vec<(f64, Vec<String>)> = transits
        .iter()
        .map(|transit| {
            let result = calculate_score(natal, transit, pillar);
            let mut score = result.score;
            if timeframe == Timeframe::Day {
                score = clamp_score(score + day_noise(transit.timestamp.date_naive()));
            }
            sum += score;
            (score, result.tags)
        })
        .collect();

    // Pass 2: shift toward the target mean
    if let Some(target) = target_score {
        let offset = target - sum / scored.len() as f64;
        log::debug!(
            "Normalizing {} {} points by {:.2} toward {}",
            scored.len(),
            timeframe,
            offset,
            target
        );
        for (score, _) in scored.iter_mut() {
            *score = clamp_score((*score + offset).round());
        }
    }

    // Pass 3: labels and volatility
    let mut prev_score = INITIAL_PREV_SCORE;
    transits
        .iter()
        .zip(scored)
        .map(|(transit, (score, tags))| {
            let volatility = Volatility::classify(score - prev_score);
            prev_score = score;
            MomentumPoint {
                date: timeframe.label(transit.timestamp),
                score,
                volatility,
                tags,
            }
        })
        .collect()
}

/// Arithmetic mean of a series' scores; `None` when empty
pub fn mean_score(points: &[MomentumPoint]) -> Option<f64> {
    if points.is_empty() {
        return None;
    }
    Some(points.iter().map(|p| p.score).sum::<f64>() / points.len() as f64)
}
