use crate::ephemeris::EphemerisError;
use thiserror::Error;

/// Errors surfaced by the momentum engine
#[derive(Error, Debug)]
pub enum MomentumError {
    #[error(transparent)]
    Ephemeris(#[from] EphemerisError),
    #[error("Invalid anchor id: {id} (expected YYYY-MM-DD)")]
    InvalidAnchorId { id: String },
    #[error("Invalid month: {value} (expected YYYY-MM)")]
    InvalidMonth { value: String },
    #[error("Invalid birth date/time: {value}")]
    InvalidBirthDate { value: String },
    #[error("Unknown pillar: {name}. Valid pillars: {valid:?}")]
    UnknownPillar { name: String, valid: Vec<String> },
    #[error("Unknown timeframe: {name}. Valid timeframes: Day, Month, Year")]
    UnknownTimeframe { name: String },
}

pub type Result<T> = std::result::Result<T, MomentumError>;
