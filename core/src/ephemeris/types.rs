use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors surfaced by an ephemeris source.
#[derive(Error, Debug)]
pub enum EphemerisError {
    #[error("ephemeris data not found at {path}: {message}")]
    DataNotFound { path: String, message: String },

    #[error("failed to calculate position for {body}: {message}")]
    CalculationFailed { body: &'static str, message: String },

    #[error("house calculation failed: {message}")]
    HouseCalculationFailed { message: String },
}

/// Supported house division systems.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HouseSystem {
    #[default]
    Placidus,
    Koch,
    Equal,
    WholeSign,
    Regiomontanus,
    Campanus,
    Alcabitius,
    Morinus,
}

impl HouseSystem {
    /// Swiss Ephemeris one-letter system code.
    pub const fn swiss_code(self) -> u8 {
        match self {
            Self::Placidus => b'P',
            Self::Koch => b'K',
            Self::Equal => b'E',
            Self::WholeSign => b'W',
            Self::Regiomontanus => b'R',
            Self::Campanus => b'C',
            Self::Alcabitius => b'A',
            Self::Morinus => b'M',
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::Placidus => "placidus",
            Self::Koch => "koch",
            Self::Equal => "equal",
            Self::WholeSign => "whole_sign",
            Self::Regiomontanus => "regiomontanus",
            Self::Campanus => "campanus",
            Self::Alcabitius => "alcabitius",
            Self::Morinus => "morinus",
        }
    }
}

impl FromStr for HouseSystem {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "placidus" => Ok(Self::Placidus),
            "koch" => Ok(Self::Koch),
            "equal" => Ok(Self::Equal),
            "whole_sign" => Ok(Self::WholeSign),
            "regiomontanus" => Ok(Self::Regiomontanus),
            "campanus" => Ok(Self::Campanus),
            "alcabitius" => Ok(Self::Alcabitius),
            "morinus" => Ok(Self::Morinus),
            other => Err(format!("unknown house system: {other}")),
        }
    }
}

/// Raw house output from the collaborator, not yet validated.
///
/// The cusp count and value ranges are checked by the house resolver
/// before anything indexes into this.
#[derive(Debug, Clone)]
pub struct RawHouses {
    /// Cusp longitudes in house order, degrees.
    pub cusps: Vec<f64>,
    /// Ascendant longitude, degrees.
    pub ascendant: f64,
}
