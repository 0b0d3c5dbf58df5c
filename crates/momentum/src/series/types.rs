use crate::error::MomentumError;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Granularity of a series
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Timeframe {
    #[default]
    Day,
    Month,
    Year,
}

impl Timeframe {
    pub fn name(self) -> &'static str {
        match self {
            Timeframe::Day => "Day",
            Timeframe::Month => "Month",
            Timeframe::Year => "Year",
        }
    }

    /// Calendar label for an instant at this granularity
    pub fn label(self, at: DateTime<Utc>) -> String {
        match self {
            Timeframe::Year => at.format("%Y-01-01").to_string(),
            Timeframe::Month => at.format("%Y-%m-01").to_string(),
            Timeframe::Day => at.format("%Y-%m-%d").to_string(),
        }
    }
}

impl FromStr for Timeframe {
    type Err = MomentumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Day" => Ok(Timeframe::Day),
            "Month" => Ok(Timeframe::Month),
            "Year" => Ok(Timeframe::Year),
            other => Err(MomentumError::UnknownTimeframe {
                name: other.to_string(),
            }),
        }
    }
}

impl fmt::Display for Timeframe {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Volatility {
    Calm,
    Dynamic,
    Intense,
}

impl Volatility {
    /// Classify the absolute change from the previous point
    pub fn classify(delta: f64) -> Volatility {
        let delta = delta.abs();
        if delta > 15.0 {
            Volatility::Intense
        } else if delta > 7.0 {
            Volatility::Dynamic
        } else {
            Volatility::Calm
        }
    }
}

/// One point of a momentum series
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MomentumPoint {
    /// `YYYY-MM-DD`, `YYYY-MM-01` or `YYYY-01-01` depending on timeframe
    pub date: String,
    /// Always within [0, 100]
    pub score: f64,
    pub volatility: Volatility,
    #[serde(rename = "signal_tags")]
    pub tags: Vec<String>,
}
