//! Natal chart computation downstream of raw ephemeris output.
//!
//! The pipeline: a civil birth moment is geocoded and normalized to a
//! Julian Day, body positions and house cusps are fetched from the
//! ephemeris collaborator, and the assembled chart carries zodiac
//! placements, house assignments and aspects.

pub mod aspects;
pub mod bodies;
pub mod chart;
pub mod config;
pub mod ephemeris;
pub mod error;
pub mod geocoding;
pub mod houses;
pub mod positions;
pub mod time;
pub mod zodiac;

pub use chart::{Chart, ChartAssembler, ChartRequest, ChartSettings};
pub use config::AstraeaConfig;
pub use error::ChartError;
