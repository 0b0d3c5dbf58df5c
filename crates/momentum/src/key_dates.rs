use crate::aspects::Aspect;
use crate::ephemeris::{ChartSnapshot, PositionProvider};
use crate::error::Result;
use crate::scoring::{calculate_score, Pillar};
use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

/// Next day on which a new major aspect becomes exact
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KeyDate {
    pub date: String,
    pub tag: String,
}

fn is_major(tag: &str) -> bool {
    [Aspect::Conjunction, Aspect::Opposition]
        .iter()
        .any(|a| tag.ends_with(&format!(" {}", a.name())))
}

/// Scan days `1..days` after `start` for the first strong Conjunction or
/// Opposition tag that was not already present on `start`.
pub fn find_next_key_date<P: PositionProvider>(
    provider: &P,
    natal: &ChartSnapshot,
    start: DateTime<Utc>,
    days: u32,
    pillar: Pillar,
) -> Result<Option<KeyDate>> {
    let baseline = calculate_score(natal, &provider.snapshot(start)?, pillar).tags;

    for offset in 1..days {
        let at = start + Duration::days(i64::from(offset));
        let tags = calculate_score(natal, &provider.snapshot(at)?, pillar).tags;
        if let Some(tag) = tags
            .into_iter()
            .find(|t| is_major(t) && !baseline.contains(t))
        {
            return Ok(Some(KeyDate {
                date: at.format("%Y-%m-%d").to_string(),
                tag,
            }));
        }
    }
    Ok(None)
}
