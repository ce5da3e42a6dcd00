use std::env;
use std::path::PathBuf;

use swisseph::swe::{calc_ut, houses_ex};
use swisseph::{AscMc, Cusp};

use crate::bodies::CelestialBody;
use crate::ephemeris::types::{EphemerisError, HouseSystem, RawHouses};
use crate::ephemeris::EphemerisSource;

/// FLG_SWIEPH: read positions from Swiss Ephemeris data files.
const CALC_FLAGS: u32 = 2;

/// Swiss Ephemeris backed implementation of [`EphemerisSource`].
pub struct SwissEphemerisAdapter {
    _ephemeris_path: PathBuf,
}

impl SwissEphemerisAdapter {
    /// Create an adapter, resolving the data path from the argument, the
    /// `SWISS_EPHEMERIS_PATH` variable, or the conventional install
    /// location, in that order.
    pub fn new(ephemeris_path: Option<PathBuf>) -> Result<Self, EphemerisError> {
        let path = ephemeris_path.unwrap_or_else(|| {
            env::var("SWISS_EPHEMERIS_PATH")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from("/usr/local/share/swisseph"))
        });
        if !path.exists() {
            return Err(EphemerisError::DataNotFound {
                path: path.display().to_string(),
                message: "Swiss Ephemeris data files are not installed".to_string(),
            });
        }
        Ok(Self {
            _ephemeris_path: path,
        })
    }
}

impl EphemerisSource for SwissEphemerisAdapter {
    fn body_longitude(&self, jd_ut: f64, body: CelestialBody) -> Result<f64, EphemerisError> {
        let result = calc_ut(jd_ut, body.swiss_code() as u32, CALC_FLAGS).map_err(|e| {
            EphemerisError::CalculationFailed {
                body: body.name(),
                message: format!("Swiss Ephemeris error: {e}"),
            }
        })?;
        // out[0] is the ecliptic longitude; normalization happens upstream
        Ok(result.out[0])
    }

    fn houses(
        &self,
        jd_ut: f64,
        latitude: f64,
        longitude: f64,
        system: HouseSystem,
    ) -> Result<RawHouses, EphemerisError> {
        let (c, a) = houses_ex(
            jd_ut,
            CALC_FLAGS as i32,
            latitude,
            longitude,
            system.swiss_code() as i32,
        );
        let cusps = Cusp::from_array(c);
        let ascmc = AscMc::from_array(a);
        Ok(RawHouses {
            cusps: vec![
                cusps.first,
                cusps.second,
                cusps.third,
                cusps.fourth,
                cusps.fifth,
                cusps.sixth,
                cusps.seventh,
                cusps.eighth,
                cusps.ninth,
                cusps.tenth,
                cusps.eleventh,
                cusps.twelfth,
            ],
            ascendant: ascmc.ascendant,
        })
    }
}
