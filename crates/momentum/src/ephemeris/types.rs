use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Celestial bodies tracked by every snapshot
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Body {
    Sun,
    Moon,
    Mercury,
    Venus,
    Mars,
    Jupiter,
    Saturn,
    Uranus,
    Neptune,
    Pluto,
}

impl Body {
    /// Fixed body order used for snapshots and tag output
    pub const ALL: [Body; 10] = [
        Body::Sun,
        Body::Moon,
        Body::Mercury,
        Body::Venus,
        Body::Mars,
        Body::Jupiter,
        Body::Saturn,
        Body::Uranus,
        Body::Neptune,
        Body::Pluto,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Body::Sun => "Sun",
            Body::Moon => "Moon",
            Body::Mercury => "Mercury",
            Body::Venus => "Venus",
            Body::Mars => "Mars",
            Body::Jupiter => "Jupiter",
            Body::Saturn => "Saturn",
            Body::Uranus => "Uranus",
            Body::Neptune => "Neptune",
            Body::Pluto => "Pluto",
        }
    }

    pub fn from_name(name: &str) -> Option<Body> {
        Body::ALL.iter().copied().find(|b| b.name() == name)
    }
}

impl fmt::Display for Body {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

const SIGN_NAMES: &[&str] = &[
    "Aries", "Taurus", "Gemini", "Cancer", "Leo", "Virgo",
    "Libra", "Scorpio", "Sagittarius", "Capricorn", "Aquarius", "Pisces",
];

/// Reduce any angle to [0, 360)
pub fn normalize_degrees(deg: f64) -> f64 {
    let r = deg.rem_euclid(360.0);
    // rem_euclid can round up to exactly 360.0 for tiny negative inputs
    if r >= 360.0 {
        0.0
    } else {
        r
    }
}

/// Zodiac sign name for an ecliptic longitude
pub fn sign_for_longitude(lon: f64) -> &'static str {
    let idx = (normalize_degrees(lon) / 30.0).floor() as usize;
    SIGN_NAMES[idx % 12]
}

/// Ecliptic longitude of one body
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlanetPosition {
    pub body: Body,
    /// Longitude in degrees (0-360)
    pub longitude: f64,
}

impl PlanetPosition {
    pub fn new(body: Body, longitude: f64) -> Self {
        Self {
            body,
            longitude: normalize_degrees(longitude),
        }
    }

    pub fn sign(&self) -> &'static str {
        sign_for_longitude(self.longitude)
    }
}

/// All body positions at one instant.
///
/// Built through [`ChartSnapshot::new`], which guarantees exactly one
/// position per [`Body`], in [`Body::ALL`] order. Deserialization goes
/// through the same check and also rejects longitudes outside [0, 360).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawChartSnapshot")]
pub struct ChartSnapshot {
    pub timestamp: DateTime<Utc>,
    planets: Vec<PlanetPosition>,
}

#[derive(Deserialize)]
struct RawChartSnapshot {
    timestamp: DateTime<Utc>,
    planets: Vec<PlanetPosition>,
}

impl TryFrom<RawChartSnapshot> for ChartSnapshot {
    type Error = String;

    fn try_from(raw: RawChartSnapshot) -> Result<Self, Self::Error> {
        if let Some(bad) = raw
            .planets
            .iter()
            .find(|p| !(0.0..360.0).contains(&p.longitude))
        {
            return Err(format!(
                "{} longitude {} is outside [0, 360)",
                bad.body, bad.longitude
            ));
        }
        let count = raw.planets.len();
        ChartSnapshot::new(raw.timestamp, raw.planets).ok_or_else(|| {
            format!(
                "snapshot needs exactly one position for each of {} bodies, got {}",
                Body::ALL.len(),
                count
            )
        })
    }
}

impl ChartSnapshot {
    /// Returns `None` unless every body appears exactly once.
    pub fn new(timestamp: DateTime<Utc>, positions: Vec<PlanetPosition>) -> Option<Self> {
        if positions.len() != Body::ALL.len() {
            return None;
        }
        let mut planets = Vec::with_capacity(Body::ALL.len());
        for body in Body::ALL {
            let mut matching = positions.iter().filter(|p| p.body == body);
            let pos = matching.next()?;
            if matching.next().is_some() {
                return None;
            }
            planets.push(PlanetPosition::new(body, pos.longitude));
        }
        Some(Self { timestamp, planets })
    }

    pub fn planets(&self) -> &[PlanetPosition] {
        &self.planets
    }

    pub fn longitude(&self, body: Body) -> f64 {
        self.planets
            .iter()
            .find(|p| p.body == body)
            .map(|p| p.longitude)
            .unwrap_or_default()
    }
}
