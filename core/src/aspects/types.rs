use serde::{Deserialize, Serialize};

use crate::bodies::CelestialBody;
use crate::error::ChartError;

/// The five major aspects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AspectKind {
    Conjunction,
    Sextile,
    Square,
    Trine,
    Opposition,
}

/// All aspect kinds in reference-angle order.
pub const ALL_ASPECT_KINDS: [AspectKind; 5] = [
    AspectKind::Conjunction,
    AspectKind::Sextile,
    AspectKind::Square,
    AspectKind::Trine,
    AspectKind::Opposition,
];

impl AspectKind {
    /// Exact reference angle, degrees.
    pub const fn reference_angle(self) -> f64 {
        match self {
            Self::Conjunction => 0.0,
            Self::Sextile => 60.0,
            Self::Square => 90.0,
            Self::Trine => 120.0,
            Self::Opposition => 180.0,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::Conjunction => "conjunction",
            Self::Sextile => "sextile",
            Self::Square => "square",
            Self::Trine => "trine",
            Self::Opposition => "opposition",
        }
    }
}

/// Minimum spacing between any two reference angles, degrees.
const MIN_REFERENCE_SPACING: f64 = 30.0;

/// Default orb, degrees.
pub const DEFAULT_ORB: f64 = 5.0;

/// Allowed deviation from an exact reference angle.
///
/// A separation classifies as an aspect when its deviation is strictly
/// below the orb. Construction rejects orbs at or above half the minimum
/// reference spacing, so a separation can never match two reference
/// angles at once.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrbPolicy {
    degrees: f64,
}

impl OrbPolicy {
    pub fn new(degrees: f64) -> Result<Self, ChartError> {
        if !degrees.is_finite() || degrees <= 0.0 || degrees >= MIN_REFERENCE_SPACING / 2.0 {
            return Err(ChartError::InvalidOrb {
                message: format!(
                    "orb must lie in (0, {}), got {degrees}",
                    MIN_REFERENCE_SPACING / 2.0
                ),
            });
        }
        Ok(Self { degrees })
    }

    pub const fn degrees(self) -> f64 {
        self.degrees
    }
}

impl Default for OrbPolicy {
    fn default() -> Self {
        Self {
            degrees: DEFAULT_ORB,
        }
    }
}

/// A classified angular relationship between two bodies.
///
/// `first` always precedes `second` in chart order, so each unordered
/// pair appears at most once.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Aspect {
    pub first: CelestialBody,
    pub second: CelestialBody,
    pub kind: AspectKind,
    /// True angular separation, [0, 180].
    pub separation: f64,
    /// Deviation from the exact reference angle.
    pub orb: f64,
}
