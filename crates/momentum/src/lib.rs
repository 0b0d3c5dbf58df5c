//! Momentum scoring of transit charts against a natal chart.
//!
//! Positions come from a [`PositionProvider`]; everything downstream of it
//! (scoring, series, anchors, panels) is pure arithmetic over snapshots.

pub mod anchors;
pub mod aspects;
pub mod cache;
pub mod ephemeris;
pub mod error;
pub mod key_dates;
pub mod natal;
pub mod panel;
pub mod scoring;
pub mod series;

pub use anchors::{AnchorBuilder, Anchors};
pub use cache::{PanelCache, PanelCacheKey, PanelResponse};
pub use ephemeris::{Body, ChartSnapshot, KeplerianProvider, PlanetPosition, PositionProvider};
pub use error::{MomentumError, Result};
pub use panel::{generate_panel_data, PanelData};
pub use scoring::{calculate_score, raw_score, Pillar, ScoreResult};
pub use series::{calculate_series, MomentumPoint, Timeframe, Volatility};
