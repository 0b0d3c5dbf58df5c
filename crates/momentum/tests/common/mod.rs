#![allow(dead_code)]

use chrono::{DateTime, NaiveDate, TimeZone, Utc};
use momentum::ephemeris::{Body, ChartSnapshot, EphemerisError, PlanetPosition, PositionProvider};

pub fn at(year: i32, month: u32, day: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, month, day, 0, 0, 0).unwrap()
}

/// Every body at `rest`, except the listed overrides
pub fn positions(overrides: &[(Body, f64)], rest: f64) -> Vec<PlanetPosition> {
    Body::ALL
        .iter()
        .map(|&body| {
            let lon = overrides
                .iter()
                .find(|(b, _)| *b == body)
                .map(|(_, l)| *l)
                .unwrap_or(rest);
            PlanetPosition::new(body, lon)
        })
        .collect()
}

pub fn snapshot(at: DateTime<Utc>, overrides: &[(Body, f64)], rest: f64) -> ChartSnapshot {
    ChartSnapshot::new(at, positions(overrides, rest)).unwrap()
}

/// Returns the same positions for every instant
pub struct FixedProvider {
    pub overrides: Vec<(Body, f64)>,
    pub rest: f64,
}

impl PositionProvider for FixedProvider {
    fn positions(&self, _at: DateTime<Utc>) -> Result<Vec<PlanetPosition>, EphemerisError> {
        Ok(positions(&self.overrides, self.rest))
    }
}

/// Transit Sun advances 10° a day from 30° on 2024-01-01; other bodies sit at 250°
pub struct MovingSunProvider;

impl PositionProvider for MovingSunProvider {
    fn positions(&self, at: DateTime<Utc>) -> Result<Vec<PlanetPosition>, EphemerisError> {
        let epoch = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        let days = (at.date_naive() - epoch).num_days() as f64;
        Ok(positions(&[(Body::Sun, 30.0 + 10.0 * days)], 250.0))
    }
}

pub struct FailingProvider;

impl PositionProvider for FailingProvider {
    fn positions(&self, at: DateTime<Utc>) -> Result<Vec<PlanetPosition>, EphemerisError> {
        Err(EphemerisError::UnsupportedDate {
            datetime: at,
            min_year: 0,
            max_year: 0,
        })
    }
}

/// Natal chart with every body at 0°
pub fn natal_at_zero() -> ChartSnapshot {
    snapshot(at(1990, 1, 1), &[], 0.0)
}

/// Transits where only the Sun (at 0°) touches `natal_at_zero`: ten strong conjunctions
pub fn sun_only_provider() -> FixedProvider {
    FixedProvider {
        overrides: vec![(Body::Sun, 0.0)],
        rest: 30.0,
    }
}
