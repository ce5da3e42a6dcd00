//! Request-level error taxonomy for chart computation.

use thiserror::Error;

use crate::ephemeris::EphemerisError;
use crate::geocoding::GeocodeError;

/// Errors that abort a chart request.
///
/// Per-body calculation failures are deliberately absent here: they are
/// soft and live inside the body sequence (see [`crate::positions`]).
#[derive(Error, Debug)]
pub enum ChartError {
    #[error("invalid date/time format: {detail}")]
    InvalidDateTimeFormat { detail: String },

    #[error("birth year {year} outside supported range [1800, 2400]")]
    DateOutOfRange { year: i32 },

    #[error("local time {datetime} does not exist in timezone {timezone}")]
    InvalidLocalTime { datetime: String, timezone: String },

    #[error("unknown timezone identifier: {timezone}")]
    UnknownTimezone { timezone: String },

    #[error("location not found: {query}")]
    LocationNotFound { query: String },

    #[error("provider unavailable: {message}")]
    ProviderUnavailable { message: String },

    #[error("house calculation failed: {message}")]
    HouseCalculation { message: String },

    #[error("invalid orb configuration: {message}")]
    InvalidOrb { message: String },
}

impl ChartError {
    /// Stable machine-readable tag used on the wire.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::InvalidDateTimeFormat { .. } => "invalid_datetime_format",
            Self::DateOutOfRange { .. } => "date_out_of_range",
            Self::InvalidLocalTime { .. } => "invalid_local_time",
            Self::UnknownTimezone { .. } => "unknown_timezone",
            Self::LocationNotFound { .. } => "location_not_found",
            Self::ProviderUnavailable { .. } => "provider_unavailable",
            Self::HouseCalculation { .. } => "house_calculation_error",
            Self::InvalidOrb { .. } => "invalid_orb",
        }
    }
}

impl From<GeocodeError> for ChartError {
    fn from(err: GeocodeError) -> Self {
        match err {
            GeocodeError::NotFound { query } => Self::LocationNotFound { query },
            GeocodeError::Unavailable { message } => Self::ProviderUnavailable { message },
        }
    }
}

impl From<EphemerisError> for ChartError {
    fn from(err: EphemerisError) -> Self {
        match err {
            EphemerisError::HouseCalculationFailed { message } => {
                Self::HouseCalculation { message }
            }
            other => Self::ProviderUnavailable {
                message: other.to_string(),
            },
        }
    }
}
