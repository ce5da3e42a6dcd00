//! Per-body position resolution.

use log::warn;
use serde::{Deserialize, Serialize};

use crate::bodies::{CelestialBody, ALL_BODIES};
use crate::ephemeris::EphemerisSource;
use crate::time::AstronomicalTime;
use crate::zodiac::{normalize_degrees, SignPosition, ZodiacSign};

/// A successfully resolved body placement.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BodyPosition {
    pub body: CelestialBody,
    /// Ecliptic longitude, [0, 360).
    pub longitude: f64,
    pub sign: ZodiacSign,
    /// Degree within the sign, [0, 30).
    pub degree_in_sign: f64,
}

impl BodyPosition {
    /// Normalize a raw collaborator longitude and attach the sign.
    pub fn new(body: CelestialBody, longitude: f64) -> Self {
        let longitude = normalize_degrees(longitude);
        let SignPosition {
            sign,
            degree_in_sign,
        } = SignPosition::from_longitude(longitude);
        Self {
            body,
            longitude,
            sign,
            degree_in_sign,
        }
    }
}

/// One slot per body: either a placement or the reason it failed.
///
/// A failed body never aborts the chart; the other slots keep their
/// results.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum BodyRecord {
    Resolved(BodyPosition),
    Failed { body: CelestialBody, reason: String },
}

impl BodyRecord {
    pub fn position(&self) -> Option<&BodyPosition> {
        match self {
            Self::Resolved(pos) => Some(pos),
            Self::Failed { .. } => None,
        }
    }
}

/// Resolve all ten bodies in [`ALL_BODIES`] order.
pub fn resolve_positions(
    ephemeris: &dyn EphemerisSource,
    time: &AstronomicalTime,
) -> Vec<BodyRecord> {
    ALL_BODIES
        .iter()
        .map(
            |&body| match ephemeris.body_longitude(time.julian_day_ut, body) {
                Ok(longitude) => BodyRecord::Resolved(BodyPosition::new(body, longitude)),
                Err(err) => {
                    warn!("position for {} failed: {err}", body.name());
                    BodyRecord::Failed {
                        body,
                        reason: err.to_string(),
                    }
                }
            },
        )
        .collect()
}
