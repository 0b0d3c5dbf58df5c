use crate::ephemeris::provider::{EphemerisError, PositionProvider};
use crate::ephemeris::types::{Body, PlanetPosition};
use chrono::{DateTime, Datelike, Timelike, Utc};
use std::env;
use std::path::PathBuf;
use swisseph::swe::{calc_ut, julday};

// Swiss Ephemeris body codes: SUN=0 .. PLUTO=9
fn swiss_code(body: Body) -> u32 {
    match body {
        Body::Sun => 0,
        Body::Moon => 1,
        Body::Mercury => 2,
        Body::Venus => 3,
        Body::Mars => 4,
        Body::Jupiter => 5,
        Body::Saturn => 6,
        Body::Uranus => 7,
        Body::Neptune => 8,
        Body::Pluto => 9,
    }
}

/// FLG_SWIEPH: read the Swiss Ephemeris data files
const FLAGS: u32 = 2;

/// Swiss Ephemeris backed provider
pub struct SwissEphemerisAdapter;

impl SwissEphemerisAdapter {
    /// Create a new adapter with optional ephemeris path
    pub fn new(ephemeris_path: Option<PathBuf>) -> Result<Self, EphemerisError> {
        let path = ephemeris_path.unwrap_or_else(|| {
            env::var("SWISS_EPHEMERIS_PATH")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from("/usr/local/share/swisseph"))
        });

        if !path.exists() {
            return Err(EphemerisError::FileNotFound {
                path: path.display().to_string(),
                message: "Ephemeris path does not exist. Please ensure Swiss Ephemeris data files are installed.".to_string(),
            });
        }

        log::info!("Swiss Ephemeris data at {}", path.display());
        Ok(Self)
    }
}

impl PositionProvider for SwissEphemerisAdapter {
    fn positions(&self, at: DateTime<Utc>) -> Result<Vec<PlanetPosition>, EphemerisError> {
        let jd = datetime_to_julian_day(at);
        Body::ALL
            .iter()
            .map(|&body| -> Result<PlanetPosition, EphemerisError> {
                let result = calc_ut(jd, swiss_code(body), FLAGS).map_err(|e| {
                    EphemerisError::CalculationFailed {
                        planet_id: body.to_string(),
                        datetime: at,
                        message: format!("Swiss Ephemeris error: {}", e),
                    }
                })?;
                Ok(PlanetPosition::new(body, result.out[0]))
            })
            .collect()
    }
}

/// Julian Day through the Swiss Ephemeris calendar routine
fn datetime_to_julian_day(dt: DateTime<Utc>) -> f64 {
    let hour_decimal =
        dt.hour() as f64 + dt.minute() as f64 / 60.0 + dt.second() as f64 / 3600.0;
    // GREG_CAL = 1
    julday(dt.year(), dt.month() as i32, dt.day() as i32, hour_decimal, 1)
}
