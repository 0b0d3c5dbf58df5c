use crate::aspects::Aspect;
use crate::ephemeris::{Body, ChartSnapshot};
use crate::panel::templates;
use crate::panel::types::{Advice, How, Overview, PanelData, What, WhyItem};
use crate::scoring::{calculate_score, Pillar, ScoreResult};
use crate::series::Timeframe;

const MAX_DRIVERS: usize = 2;
const MAX_KEYWORDS: usize = 6;

/// Participants of a "{transit}-{natal} {aspect}" tag
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TagParts {
    pub transit: Body,
    pub natal: Body,
    pub aspect: Aspect,
}

pub fn parse_tag(tag: &str) -> Option<TagParts> {
    let (pair, aspect) = tag.split_once(' ')?;
    let (transit, natal) = pair.split_once('-')?;
    Some(TagParts {
        transit: Body::from_name(transit)?,
        natal: Body::from_name(natal)?,
        aspect: Aspect::from_name(aspect)?,
    })
}

/// Score the transit and build its panel
pub fn generate_panel_data(
    natal: &ChartSnapshot,
    transit: &ChartSnapshot,
    pillar: Pillar,
    timeframe: Timeframe,
) -> PanelData {
    let result = calculate_score(natal, transit, pillar);
    synthesize(&result, pillar, timeframe)
}

/// Template selection only: the same inputs always give the same panel.
pub fn synthesize(result: &ScoreResult, pillar: Pillar, timeframe: Timeframe) -> PanelData {
    let score = result.score;
    let period = templates::period_noun(timeframe);

    let title = match pillar {
        Pillar::Overall => templates::band_title(score).to_string(),
        other => format!("{}: {}", other, templates::band_title(score)),
    };
    let summary = format!(
        "This {} scores {:.0}/100 for {}. {}",
        period,
        score,
        pillar.name().to_lowercase(),
        templates::band_summary(score)
    );

    let why = result
        .tags
        .iter()
        .filter_map(|tag| parse_tag(tag).map(|parts| (tag, parts)))
        .take(MAX_DRIVERS)
        .zip(templates::WHY_CONFIDENCE)
        .map(|((tag, parts), confidence)| WhyItem {
            driver: format!("Transit {}", parts.transit),
            evidence: tag.clone(),
            impact: format!(
                "{} {} your natal {}, {} in {} this {}.",
                parts.transit,
                aspect_verb(parts.aspect),
                parts.natal,
                templates::aspect_effect(parts.aspect),
                pillar.name().to_lowercase(),
                period
            ),
            confidence,
        })
        .collect();

    let keywords = result
        .tags
        .iter()
        .filter_map(|tag| tag.split_whitespace().next())
        .take(MAX_KEYWORDS)
        .map(str::to_string)
        .collect();

    let domain = pillar.name().to_string();
    let advice = |text: &str| Advice {
        domain: domain.clone(),
        text: text.to_string(),
    };

    PanelData {
        overview: Overview { title, summary },
        why,
        what: What {
            themes: templates::themes(pillar).iter().map(|s| s.to_string()).collect(),
            keywords,
        },
        how: How {
            do_: templates::do_templates(pillar).into_iter().map(|t| advice(t)).collect(),
            avoid: templates::avoid_templates(score).into_iter().map(|t| advice(t)).collect(),
        },
    }
}

fn aspect_verb(aspect: Aspect) -> &'static str {
    match aspect {
        Aspect::Conjunction => "meets",
        Aspect::Sextile => "supports",
        Aspect::Square => "challenges",
        Aspect::Trine => "harmonizes with",
        Aspect::Opposition => "opposes",
    }
}
