//! Static text pools for panel synthesis.

use crate::aspects::Aspect;
use crate::scoring::Pillar;
use crate::series::Timeframe;

pub fn themes(pillar: Pillar) -> &'static [&'static str] {
    match pillar {
        Pillar::Overall => &["Alignment", "Personal direction", "Momentum"],
        Pillar::Career => &["Ambition", "Recognition", "Structure"],
        Pillar::Money => &["Resources", "Value", "Stability"],
        Pillar::Relationships => &["Connection", "Harmony", "Emotional exchange"],
        Pillar::Energy => &["Vitality", "Drive", "Initiative"],
    }
}

pub fn do_templates(pillar: Pillar) -> [&'static str; 4] {
    match pillar {
        Pillar::Overall => [
            "Pick one priority and give it your best hours.",
            "Review where you are headed before committing to anything new.",
            "Say yes to opportunities that match your long-term direction.",
            "Close open loops so fresh momentum has room to land.",
        ],
        Pillar::Career => [
            "Put your work in front of the people who decide.",
            "Ask for the responsibility you have been preparing for.",
            "Tighten one process that slows your team down.",
            "Write down the next milestone and the date you will hit it.",
        ],
        Pillar::Money => [
            "Review recurring expenses and cut one you no longer use.",
            "Move a fixed amount into savings before spending.",
            "Research before committing to a large purchase.",
            "Follow up on money you are owed.",
        ],
        Pillar::Relationships => [
            "Reach out first to someone you have been missing.",
            "Listen fully before offering an answer.",
            "Make a small, concrete plan with someone close.",
            "Say the appreciation you usually keep to yourself.",
        ],
        Pillar::Energy => [
            "Schedule demanding tasks for your peak hours.",
            "Move your body before the day gets busy.",
            "Protect your sleep window.",
            "Start the task you have been putting off while drive is high.",
        ],
    }
}

/// Two cautions, picked by score band (< 40, < 50, otherwise)
pub fn avoid_templates(score: f64) -> [&'static str; 2] {
    if score < 40.0 {
        [
            "Forcing outcomes that need more time.",
            "Making irreversible decisions while momentum is low.",
        ]
    } else if score < 50.0 {
        [
            "Spreading yourself across too many fronts.",
            "Waiting for perfect conditions before acting.",
        ]
    } else {
        [
            "Overcommitting because everything feels possible.",
            "Skipping the details in the rush to move fast.",
        ]
    }
}

pub fn band_title(score: f64) -> &'static str {
    if score >= 70.0 {
        "Surging Momentum"
    } else if score >= 50.0 {
        "Building Momentum"
    } else if score >= 40.0 {
        "Steady Ground"
    } else {
        "Low Tide"
    }
}

pub fn band_summary(score: f64) -> &'static str {
    if score >= 70.0 {
        "Strong alignments favor bold moves."
    } else if score >= 50.0 {
        "Supportive contacts reward steady effort."
    } else if score >= 40.0 {
        "Conditions are balanced; consistency beats intensity."
    } else {
        "Few supportive contacts; consolidate rather than push."
    }
}

pub fn period_noun(timeframe: Timeframe) -> &'static str {
    match timeframe {
        Timeframe::Day => "day",
        Timeframe::Month => "month",
        Timeframe::Year => "year",
    }
}

pub fn aspect_effect(aspect: Aspect) -> &'static str {
    match aspect {
        Aspect::Conjunction => "fusing their energies",
        Aspect::Sextile => "opening an easy opportunity",
        Aspect::Square => "creating friction that demands action",
        Aspect::Trine => "letting things flow with little resistance",
        Aspect::Opposition => "pulling in opposite directions until balance is found",
    }
}

/// Confidence for the first and second driver
pub const WHY_CONFIDENCE: [f64; 2] = [0.9, 0.75];
