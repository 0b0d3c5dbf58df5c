pub mod keplerian;
pub mod provider;
pub mod types;

#[cfg(feature = "swiss-ephemeris")]
pub mod adapter;

#[cfg(feature = "swiss-ephemeris")]
pub use adapter::SwissEphemerisAdapter;
pub use keplerian::KeplerianProvider;
pub use provider::{datetime_to_julian_day, EphemerisError, PositionProvider};
pub use types::{normalize_degrees, sign_for_longitude, Body, ChartSnapshot, PlanetPosition};
