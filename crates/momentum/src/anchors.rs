//! Multi-decade year/month anchor grids and month-to-day expansion.
//!
//! A day expansion is normalized to the month's own score, so zooming from a
//! month into its days changes the decomposition but not the headline number.

use crate::ephemeris::{ChartSnapshot, PositionProvider};
use crate::error::{MomentumError, Result};
use crate::scoring::{raw_score, Pillar};
use crate::series::{calculate_series, MomentumPoint, Timeframe};
use chrono::{DateTime, Datelike, NaiveDate, TimeZone, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

pub const DEFAULT_ANCHOR_YEARS: u32 = 100;

/// Year and month series per pillar
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Anchors {
    pub years: HashMap<Pillar, Vec<MomentumPoint>>,
    pub months: HashMap<Pillar, Vec<MomentumPoint>>,
}

pub struct AnchorBuilder<P> {
    provider: P,
    span_years: u32,
}

impl<P: PositionProvider> AnchorBuilder<P> {
    pub fn new(provider: P) -> Self {
        Self {
            provider,
            span_years: DEFAULT_ANCHOR_YEARS,
        }
    }

    pub fn with_span_years(mut self, span_years: u32) -> Self {
        self.span_years = span_years;
        self
    }

    pub fn provider(&self) -> &P {
        &self.provider
    }

    /// Year grid (one Jan 1 per year) and month grid (every month start) for
    /// `span_years` years from `start_year`, scored once per pillar.
    pub fn generate_anchors(&self, natal: &ChartSnapshot, start_year: i32) -> Result<Anchors> {
        let year_transits = self.provider.snapshots(&year_starts(start_year, self.span_years)?)?;
        let month_transits = self.provider.snapshots(&month_starts(start_year, self.span_years)?)?;
        log::debug!(
            "Anchors from {}: {} year / {} month transits",
            start_year,
            year_transits.len(),
            month_transits.len()
        );

        let mut years = HashMap::new();
        let mut months = HashMap::new();
        for pillar in Pillar::ALL {
            years.insert(
                pillar,
                calculate_series(natal, &year_transits, Timeframe::Year, pillar, None),
            );
            months.insert(
                pillar,
                calculate_series(natal, &month_transits, Timeframe::Month, pillar, None),
            );
        }
        Ok(Anchors { years, months })
    }

    /// Direct score of the month-start transit
    pub fn month_anchor_score(
        &self,
        natal: &ChartSnapshot,
        year: i32,
        month: u32,
        pillar: Pillar,
    ) -> Result<f64> {
        let transit = self.provider.snapshot(month_start(year, month)?)?;
        Ok(raw_score(natal, &transit, pillar))
    }

    /// One point per calendar day of the month, normalized to the month anchor
    pub fn expand_days(
        &self,
        natal: &ChartSnapshot,
        year: i32,
        month: u32,
        pillar: Pillar,
    ) -> Result<Vec<MomentumPoint>> {
        let target = self.month_anchor_score(natal, year, month, pillar)?;
        let transits = self.provider.snapshots(&days_of_month(year, month)?)?;
        Ok(calculate_series(
            natal,
            &transits,
            Timeframe::Day,
            pillar,
            Some(target),
        ))
    }

    /// Score of `date` as it appears in its month's day expansion.
    ///
    /// Noised and normalized, so it generally differs from
    /// `scoring::raw_score` for the same day.
    pub fn normalized_series_score(
        &self,
        natal: &ChartSnapshot,
        date: NaiveDate,
        pillar: Pillar,
    ) -> Result<f64> {
        let days = self.expand_days(natal, date.year(), date.month(), pillar)?;
        let label = date.format("%Y-%m-%d").to_string();
        days.iter()
            .find(|p| p.date == label)
            .map(|p| p.score)
            .ok_or(MomentumError::InvalidAnchorId { id: label })
    }
}

fn invalid_month(year: i32, month: u32) -> MomentumError {
    MomentumError::InvalidMonth {
        value: format!("{:04}-{:02}", year, month),
    }
}

fn midnight(date: NaiveDate) -> DateTime<Utc> {
    Utc.from_utc_datetime(&date.and_time(chrono::NaiveTime::MIN))
}

/// 00:00 UTC on the first of the month
pub fn month_start(year: i32, month: u32) -> Result<DateTime<Utc>> {
    NaiveDate::from_ymd_opt(year, month, 1)
        .map(midnight)
        .ok_or_else(|| invalid_month(year, month))
}

/// Jan 1 of each year in `start_year..start_year + count`
pub fn year_starts(start_year: i32, count: u32) -> Result<Vec<DateTime<Utc>>> {
    (0..count as i32)
        .map(|i| month_start(start_year + i, 1))
        .collect()
}

/// Every month start across `years` years from `start_year`
pub fn month_starts(start_year: i32, years: u32) -> Result<Vec<DateTime<Utc>>> {
    let mut out = Vec::with_capacity(years as usize * 12);
    for year in start_year..start_year + years as i32 {
        for month in 1..=12 {
            out.push(month_start(year, month)?);
        }
    }
    Ok(out)
}

/// Midnight of every day in the month, honoring leap years
pub fn days_of_month(year: i32, month: u32) -> Result<Vec<DateTime<Utc>>> {
    let first = NaiveDate::from_ymd_opt(year, month, 1).ok_or_else(|| invalid_month(year, month))?;
    Ok(first
        .iter_days()
        .take_while(|d| d.month() == month)
        .map(midnight)
        .collect())
}

/// Parse `YYYY-MM` into (year, month)
pub fn parse_month(value: &str) -> Result<(i32, u32)> {
    let invalid = || MomentumError::InvalidMonth {
        value: value.to_string(),
    };
    let (y, m) = value.split_once('-').ok_or_else(invalid)?;
    let year: i32 = y.parse().map_err(|_| invalid())?;
    let month: u32 = m.parse().map_err(|_| invalid())?;
    if !(1..=12).contains(&month) {
        return Err(invalid());
    }
    Ok((year, month))
}

/// Parse an anchor id (`YYYY-MM-DD`) into its midnight instant
pub fn parse_anchor_id(id: &str) -> Result<DateTime<Utc>> {
    NaiveDate::parse_from_str(id, "%Y-%m-%d")
        .map(midnight)
        .map_err(|_| MomentumError::InvalidAnchorId { id: id.to_string() })
}
