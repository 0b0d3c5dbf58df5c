use serde::{Deserialize, Serialize};
use std::fmt;

/// Orb (degrees) for a strong hit
pub const ORB_STRONG: f64 = 2.0;
/// Orb (degrees) for a moderate hit
pub const ORB_MODERATE: f64 = 4.0;

/// Named angular relationship between two bodies
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Aspect {
    Conjunction,
    Sextile,
    Square,
    Trine,
    Opposition,
}

/// Scan order for matching. At most one entry can match a given separation
/// while the smallest spacing between angles exceeds `2 * ORB_MODERATE`.
pub const ASPECTS: [Aspect; 5] = [
    Aspect::Conjunction,
    Aspect::Sextile,
    Aspect::Square,
    Aspect::Trine,
    Aspect::Opposition,
];

impl Aspect {
    pub fn name(self) -> &'static str {
        match self {
            Aspect::Conjunction => "Conjunction",
            Aspect::Sextile => "Sextile",
            Aspect::Square => "Square",
            Aspect::Trine => "Trine",
            Aspect::Opposition => "Opposition",
        }
    }

    /// Exact angle in degrees
    pub fn angle(self) -> f64 {
        match self {
            Aspect::Conjunction => 0.0,
            Aspect::Sextile => 60.0,
            Aspect::Square => 90.0,
            Aspect::Trine => 120.0,
            Aspect::Opposition => 180.0,
        }
    }

    pub fn from_name(name: &str) -> Option<Aspect> {
        ASPECTS.iter().copied().find(|a| a.name() == name)
    }
}

impl fmt::Display for Aspect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HitStrength {
    /// Within `ORB_STRONG`
    Strong,
    /// Within `ORB_MODERATE` but outside `ORB_STRONG`
    Moderate,
}

/// A matched aspect for one separation
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AspectHit {
    pub aspect: Aspect,
    /// Deviation from the exact angle, in degrees
    pub delta: f64,
    pub strength: HitStrength,
}
