//! House cusps, ascendant, and body-to-house assignment.
//!
//! The 12 cusps define 12 circular intervals `[cusp[i], cusp[i+1])` in
//! house order. Cusps wrap through 360 to 0 between house 12 and house 1
//! (and anywhere else the system places the wrap), so containment is
//! computed on the circle rather than by plain comparison.

use serde::{Deserialize, Serialize};

use crate::bodies::CelestialBody;
use crate::ephemeris::{EphemerisSource, HouseSystem, RawHouses};
use crate::error::ChartError;
use crate::geocoding::ResolvedLocation;
use crate::positions::BodyPosition;
use crate::time::AstronomicalTime;
use crate::zodiac::{normalize_degrees, SignPosition, ZodiacSign};

/// A single house cusp with its zodiac annotation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HouseCusp {
    /// House number, 1 through 12.
    pub house: u8,
    /// Cusp longitude, [0, 360).
    pub longitude: f64,
    pub sign: ZodiacSign,
    pub degree_in_sign: f64,
}

/// The rising degree, reported independently of the cusps.
///
/// Quadrant systems place it on the first cusp, but not every system
/// does; callers must not rely on the coincidence.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Ascendant {
    pub longitude: f64,
    pub sign: ZodiacSign,
    pub degree_in_sign: f64,
}

/// The twelve cusps and ascendant for one chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HouseWheel {
    pub system: HouseSystem,
    pub cusps: [HouseCusp; 12],
    pub ascendant: Ascendant,
}

impl HouseWheel {
    /// Fetch and validate the wheel for the given instant and place.
    pub fn resolve(
        ephemeris: &dyn EphemerisSource,
        time: &AstronomicalTime,
        location: &ResolvedLocation,
        system: HouseSystem,
    ) -> Result<Self, ChartError> {
        let raw = ephemeris.houses(
            time.julian_day_ut,
            location.latitude,
            location.longitude,
            system,
        )?;
        Self::from_raw(raw, system)
    }

    /// Validate raw collaborator output and annotate with signs.
    ///
    /// Rejects short output, coinciding cusps, and cusp sequences whose
    /// spans do not partition the circle.
    pub fn from_raw(raw: RawHouses, system: HouseSystem) -> Result<Self, ChartError> {
        if raw.cusps.len() < 12 {
            return Err(ChartError::HouseCalculation {
                message: format!("expected 12 cusps, got {}", raw.cusps.len()),
            });
        }

        let mut cusps = [HouseCusp {
            house: 0,
            longitude: 0.0,
            sign: ZodiacSign::Aries,
            degree_in_sign: 0.0,
        }; 12];
        for (i, cusp) in cusps.iter_mut().enumerate() {
            let longitude = normalize_degrees(raw.cusps[i]);
            let SignPosition {
                sign,
                degree_in_sign,
            } = SignPosition::from_longitude(longitude);
            *cusp = HouseCusp {
                house: (i + 1) as u8,
                longitude,
                sign,
                degree_in_sign,
            };
        }

        let mut total_span = 0.0;
        for i in 0..12 {
            let next = (i + 1) % 12;
            let span = arc_forward(cusps[i].longitude, cusps[next].longitude);
            if span == 0.0 {
                return Err(ChartError::HouseCalculation {
                    message: format!(
                        "degenerate wheel: cusps {} and {} coincide",
                        cusps[i].house, cusps[next].house
                    ),
                });
            }
            total_span += span;
        }
        if (total_span - 360.0).abs() > 1e-6 {
            return Err(ChartError::HouseCalculation {
                message: format!("cusps do not partition the circle (spans sum to {total_span:.6})"),
            });
        }

        let asc_longitude = normalize_degrees(raw.ascendant);
        let SignPosition {
            sign,
            degree_in_sign,
        } = SignPosition::from_longitude(asc_longitude);
        Ok(Self {
            system,
            cusps,
            ascendant: Ascendant {
                longitude: asc_longitude,
                sign,
                degree_in_sign,
            },
        })
    }

    /// House containing the given longitude.
    ///
    /// A longitude lies in house `i` when, walking forward from cusp `i`
    /// (wrapping through 360 to 0), it is reached before cusp `i + 1`. A
    /// body exactly on a cusp belongs to the house that cusp opens.
    pub fn house_of(&self, longitude: f64) -> u8 {
        let longitude = normalize_degrees(longitude);
        for i in 0..12 {
            let start = self.cusps[i].longitude;
            let end = self.cusps[(i + 1) % 12].longitude;
            if arc_forward(start, longitude) < arc_forward(start, end) {
                return self.cusps[i].house;
            }
        }
        // a validated wheel partitions the circle; the walk cannot miss
        self.cusps[11].house
    }
}

/// Degrees walked forward along the zodiac from `from` to `to`, [0, 360).
fn arc_forward(from: f64, to: f64) -> f64 {
    normalize_degrees(to - from)
}

/// A body placed in its house.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HouseAssignment {
    pub body: CelestialBody,
    pub house: u8,
    /// Longitude and sign copied from the placement for presentation.
    pub longitude: f64,
    pub sign: ZodiacSign,
}

/// Assign every resolved body to exactly one house.
///
/// Never originates errors: a degenerate wheel is rejected upstream by
/// [`HouseWheel::from_raw`].
pub fn assign_houses(wheel: &HouseWheel, positions: &[BodyPosition]) -> Vec<HouseAssignment> {
    positions
        .iter()
        .map(|pos| HouseAssignment {
            body: pos.body,
            house: wheel.house_of(pos.longitude),
            longitude: pos.longitude,
            sign: pos.sign,
        })
        .collect()
}
