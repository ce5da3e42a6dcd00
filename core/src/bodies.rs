//! The fixed set of celestial bodies carried in a natal chart.

use serde::{Deserialize, Serialize};

/// The ten bodies of a natal chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CelestialBody {
    Sun,
    Moon,
    Mercury,
    Venus,
    Mars,
    Jupiter,
    Saturn,
    Uranus,
    Neptune,
    Pluto,
}

/// All ten bodies in chart order. Output sequences and aspect pairing
/// follow this order.
pub const ALL_BODIES: [CelestialBody; 10] = [
    CelestialBody::Sun,
    CelestialBody::Moon,
    CelestialBody::Mercury,
    CelestialBody::Venus,
    CelestialBody::Mars,
    CelestialBody::Jupiter,
    CelestialBody::Saturn,
    CelestialBody::Uranus,
    CelestialBody::Neptune,
    CelestialBody::Pluto,
];

impl CelestialBody {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Sun => "Sun",
            Self::Moon => "Moon",
            Self::Mercury => "Mercury",
            Self::Venus => "Venus",
            Self::Mars => "Mars",
            Self::Jupiter => "Jupiter",
            Self::Saturn => "Saturn",
            Self::Uranus => "Uranus",
            Self::Neptune => "Neptune",
            Self::Pluto => "Pluto",
        }
    }

    /// Arabic display name.
    pub const fn arabic_name(self) -> &'static str {
        match self {
            Self::Sun => "الشمس",
            Self::Moon => "القمر",
            Self::Mercury => "عطارد",
            Self::Venus => "الزهرة",
            Self::Mars => "المريخ",
            Self::Jupiter => "المشتري",
            Self::Saturn => "زحل",
            Self::Uranus => "أورانوس",
            Self::Neptune => "نبتون",
            Self::Pluto => "بلوتو",
        }
    }

    /// Swiss Ephemeris body number.
    pub const fn swiss_code(self) -> i32 {
        match self {
            Self::Sun => 0,
            Self::Moon => 1,
            Self::Mercury => 2,
            Self::Venus => 3,
            Self::Mars => 4,
            Self::Jupiter => 5,
            Self::Saturn => 6,
            Self::Uranus => 7,
            Self::Neptune => 8,
            Self::Pluto => 9,
        }
    }

    /// Position in [`ALL_BODIES`].
    pub const fn index(self) -> usize {
        self as usize
    }
}
