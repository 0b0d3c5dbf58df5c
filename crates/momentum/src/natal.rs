use crate::ephemeris::{ChartSnapshot, PositionProvider};
use crate::error::{MomentumError, Result};
use chrono::{DateTime, NaiveDate, NaiveTime, TimeZone, Utc};

/// Birth time used when none is given
pub const DEFAULT_BIRTH_TIME: &str = "12:00";

/// Birth instant from `YYYY-MM-DD` and optional `HH:MM`, taken as UTC
pub fn birth_instant(date: &str, time: Option<&str>) -> Result<DateTime<Utc>> {
    let time = time.filter(|t| !t.is_empty()).unwrap_or(DEFAULT_BIRTH_TIME);
    let invalid = || MomentumError::InvalidBirthDate {
        value: format!("{}T{}", date, time),
    };
    let day = NaiveDate::parse_from_str(date, "%Y-%m-%d").map_err(|_| invalid())?;
    let clock = NaiveTime::parse_from_str(time, "%H:%M").map_err(|_| invalid())?;
    Ok(Utc.from_utc_datetime(&day.and_time(clock)))
}

/// Natal snapshot for a birth date and optional time
pub fn natal_chart<P: PositionProvider>(
    provider: &P,
    date: &str,
    time: Option<&str>,
) -> Result<ChartSnapshot> {
    let at = birth_instant(date, time)?;
    Ok(provider.snapshot(at)?)
}
