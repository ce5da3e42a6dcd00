pub mod adapter;
pub mod types;

pub use adapter::SwissEphemerisAdapter;
pub use types::{EphemerisError, HouseSystem, RawHouses};

use crate::bodies::CelestialBody;

/// Ephemeris collaborator seam.
///
/// The raw planetary-longitude and house-cusp computation is consumed as
/// an oracle behind this trait; the engine never reimplements it. Returned
/// longitudes are raw degrees, not yet normalized.
pub trait EphemerisSource: Send + Sync {
    /// Ecliptic longitude of a body at the given instant.
    fn body_longitude(&self, jd_ut: f64, body: CelestialBody) -> Result<f64, EphemerisError>;

    /// Raw cusp longitudes and ascendant for the given instant and place.
    fn houses(
        &self,
        jd_ut: f64,
        latitude: f64,
        longitude: f64,
        system: HouseSystem,
    ) -> Result<RawHouses, EphemerisError>;
}
