pub mod opencage;

pub use opencage::OpenCageGeocoder;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Timezone identifier used when the provider omits one.
pub const FALLBACK_TIMEZONE: &str = "UTC";

/// Errors surfaced by a geocoding provider.
#[derive(Error, Debug)]
pub enum GeocodeError {
    #[error("location not found: {query}")]
    NotFound { query: String },

    #[error("geocoding provider unavailable: {message}")]
    Unavailable { message: String },
}

/// A place resolved from the caller's free-text location.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResolvedLocation {
    /// Degrees, signed, north positive.
    pub latitude: f64,
    /// Degrees, signed, east positive.
    pub longitude: f64,
    /// IANA timezone identifier, [`FALLBACK_TIMEZONE`] when the provider
    /// had none.
    pub timezone: String,
}

/// Geocoding collaborator seam. Queries may be Arabic or Latin script.
#[async_trait]
pub trait GeocodingProvider: Send + Sync {
    async fn resolve(&self, query: &str) -> Result<ResolvedLocation, GeocodeError>;
}
