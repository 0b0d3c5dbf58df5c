use crate::aspects::{calculate_aspect, HitStrength};
use crate::ephemeris::ChartSnapshot;
use crate::scoring::pillar::Pillar;
use serde::{Deserialize, Serialize};

/// Points for a strong hit, before weighting
pub const SCORE_STRONG: f64 = 5.0;
/// Points for a moderate hit, before weighting
pub const SCORE_MODERATE: f64 = 3.0;
pub const MAX_SCORE: f64 = 100.0;

/// Score of one transit against the natal chart
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreResult {
    /// Rounded, capped at 100
    pub score: f64,
    /// "{transit}-{natal} {aspect}" for each strong hit, first occurrence order
    pub tags: Vec<String>,
}

/// Scores every (transit body, natal body) pair, self-pairs included.
pub fn calculate_score(natal: &ChartSnapshot, transit: &ChartSnapshot, pillar: Pillar) -> ScoreResult {
    let mut total = 0.0;
    let mut tags: Vec<String> = Vec::new();

    for t in transit.planets() {
        for n in natal.planets() {
            let Some(hit) = calculate_aspect(t.longitude, n.longitude) else {
                continue;
            };
            let weight = pillar.weight(t.body) * pillar.weight(n.body);
            match hit.strength {
                HitStrength::Strong => {
                    total += SCORE_STRONG * weight;
                    let tag = format!("{}-{} {}", t.body, n.body, hit.aspect);
                    if !tags.contains(&tag) {
                        tags.push(tag);
                    }
                }
                HitStrength::Moderate => total += SCORE_MODERATE * weight,
            }
        }
    }

    ScoreResult {
        score: total.round().min(MAX_SCORE),
        tags,
    }
}

/// The unnormalized score of a single transit.
///
/// This is what a panel shows. For days it can differ from the value in a
/// day series, which is noised and shifted toward the month anchor (see
/// `anchors::AnchorBuilder::normalized_series_score`).
pub fn raw_score(natal: &ChartSnapshot, transit: &ChartSnapshot, pillar: Pillar) -> f64 {
    calculate_score(natal, transit, pillar).score
}
