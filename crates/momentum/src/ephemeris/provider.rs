use crate::ephemeris::types::{ChartSnapshot, PlanetPosition};
use chrono::{DateTime, Utc};
use thiserror::Error;

/// Errors that can occur during ephemeris calculations
#[derive(Error, Debug)]
pub enum EphemerisError {
    #[error("Ephemeris file not found at path: {path}. {message}")]
    FileNotFound { path: String, message: String },
    #[error("Date {datetime} is outside the supported range ({min_year}..={max_year})")]
    UnsupportedDate {
        datetime: DateTime<Utc>,
        min_year: i32,
        max_year: i32,
    },
    #[error("Failed to calculate position for {planet_id} at {datetime}: {message}")]
    CalculationFailed {
        planet_id: String,
        datetime: DateTime<Utc>,
        message: String,
    },
    #[error("Provider returned an incomplete snapshot for {datetime}")]
    IncompleteSnapshot { datetime: DateTime<Utc> },
}

/// Source of geocentric ecliptic longitudes.
///
/// Implementations only supply raw positions; [`PositionProvider::snapshot`]
/// enforces the one-position-per-body invariant.
pub trait PositionProvider: Send + Sync {
    fn positions(&self, at: DateTime<Utc>) -> Result<Vec<PlanetPosition>, EphemerisError>;

    fn snapshot(&self, at: DateTime<Utc>) -> Result<ChartSnapshot, EphemerisError> {
        let positions = self.positions(at)?;
        ChartSnapshot::new(at, positions)
            .ok_or(EphemerisError::IncompleteSnapshot { datetime: at })
    }

    /// Snapshots for each instant, failing on the first provider error
    fn snapshots(&self, instants: &[DateTime<Utc>]) -> Result<Vec<ChartSnapshot>, EphemerisError> {
        instants.iter().map(|at| self.snapshot(*at)).collect()
    }
}

impl<P: PositionProvider + ?Sized> PositionProvider for &P {
    fn positions(&self, at: DateTime<Utc>) -> Result<Vec<PlanetPosition>, EphemerisError> {
        (**self).positions(at)
    }
}

impl<P: PositionProvider + ?Sized> PositionProvider for Box<P> {
    fn positions(&self, at: DateTime<Utc>) -> Result<Vec<PlanetPosition>, EphemerisError> {
        (**self).positions(at)
    }
}

impl<P: PositionProvider + ?Sized> PositionProvider for std::sync::Arc<P> {
    fn positions(&self, at: DateTime<Utc>) -> Result<Vec<PlanetPosition>, EphemerisError> {
        (**self).positions(at)
    }
}

/// Convert UTC datetime to Julian Day
pub fn datetime_to_julian_day(dt: DateTime<Utc>) -> f64 {
    let seconds = dt.timestamp() as f64 + f64::from(dt.timestamp_subsec_nanos()) / 1e9;
    seconds / 86_400.0 + 2_440_587.5
}
