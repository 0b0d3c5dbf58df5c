//! Life-domain lenses and their per-body weights.

use crate::ephemeris::Body;
use crate::error::MomentumError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Pillar {
    #[default]
    Overall,
    Career,
    Money,
    Relationships,
    Energy,
}

type BodyWeight = (Body, f64);

const OVERALL_WEIGHTS: &[BodyWeight] = &[
    (Body::Sun, 1.0),
    (Body::Moon, 1.0),
    (Body::Jupiter, 1.0),
    (Body::Saturn, 1.0),
    (Body::Venus, 1.0),
    (Body::Mars, 1.0),
];
const CAREER_WEIGHTS: &[BodyWeight] = &[
    (Body::Sun, 2.0),
    (Body::Saturn, 2.0),
    (Body::Jupiter, 1.5),
    (Body::Mars, 1.5),
];
const MONEY_WEIGHTS: &[BodyWeight] = &[
    (Body::Venus, 2.0),
    (Body::Jupiter, 2.0),
    (Body::Saturn, 1.0),
    (Body::Mercury, 1.5),
];
const RELATIONSHIP_WEIGHTS: &[BodyWeight] = &[
    (Body::Moon, 2.0),
    (Body::Venus, 2.0),
    (Body::Mars, 1.5),
    (Body::Neptune, 1.0),
];
const ENERGY_WEIGHTS: &[BodyWeight] = &[
    (Body::Sun, 2.0),
    (Body::Mars, 2.0),
    (Body::Moon, 1.5),
    (Body::Uranus, 1.0),
];

impl Pillar {
    pub const ALL: [Pillar; 5] = [
        Pillar::Overall,
        Pillar::Career,
        Pillar::Money,
        Pillar::Relationships,
        Pillar::Energy,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Pillar::Overall => "Overall",
            Pillar::Career => "Career",
            Pillar::Money => "Money",
            Pillar::Relationships => "Relationships",
            Pillar::Energy => "Energy",
        }
    }

    fn weights(self) -> &'static [BodyWeight] {
        match self {
            Pillar::Overall => OVERALL_WEIGHTS,
            Pillar::Career => CAREER_WEIGHTS,
            Pillar::Money => MONEY_WEIGHTS,
            Pillar::Relationships => RELATIONSHIP_WEIGHTS,
            Pillar::Energy => ENERGY_WEIGHTS,
        }
    }

    /// Multiplier for `body`; bodies the pillar does not list weigh 1.0
    pub fn weight(self, body: Body) -> f64 {
        self.weights()
            .iter()
            .find(|(b, _)| *b == body)
            .map(|(_, w)| *w)
            .unwrap_or(1.0)
    }

    /// Parse a pillar name, falling back to `Overall` for anything unknown
    pub fn from_name_lossy(name: &str) -> Pillar {
        name.parse().unwrap_or_else(|_| {
            log::warn!("Unknown pillar '{}', using Overall", name);
            Pillar::Overall
        })
    }
}

impl FromStr for Pillar {
    type Err = MomentumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Pillar::ALL
            .iter()
            .copied()
            .find(|p| p.name() == s)
            .ok_or_else(|| MomentumError::UnknownPillar {
                name: s.to_string(),
                valid: Pillar::ALL.iter().map(|p| p.name().to_string()).collect(),
            })
    }
}

impl fmt::Display for Pillar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
