//! Zodiac sign mapping over ecliptic longitudes.
//!
//! The ecliptic circle divides into 12 equal signs of 30 degrees each,
//! starting from Aries at 0 degrees.

use serde::{Deserialize, Serialize};

/// The 12 zodiac signs in ecliptic order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ZodiacSign {
    Aries,
    Taurus,
    Gemini,
    Cancer,
    Leo,
    Virgo,
    Libra,
    Scorpio,
    Sagittarius,
    Capricorn,
    Aquarius,
    Pisces,
}

/// All 12 signs in order, index 0 = Aries.
pub const ALL_SIGNS: [ZodiacSign; 12] = [
    ZodiacSign::Aries,
    ZodiacSign::Taurus,
    ZodiacSign::Gemini,
    ZodiacSign::Cancer,
    ZodiacSign::Leo,
    ZodiacSign::Virgo,
    ZodiacSign::Libra,
    ZodiacSign::Scorpio,
    ZodiacSign::Sagittarius,
    ZodiacSign::Capricorn,
    ZodiacSign::Aquarius,
    ZodiacSign::Pisces,
];

impl ZodiacSign {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Aries => "Aries",
            Self::Taurus => "Taurus",
            Self::Gemini => "Gemini",
            Self::Cancer => "Cancer",
            Self::Leo => "Leo",
            Self::Virgo => "Virgo",
            Self::Libra => "Libra",
            Self::Scorpio => "Scorpio",
            Self::Sagittarius => "Sagittarius",
            Self::Capricorn => "Capricorn",
            Self::Aquarius => "Aquarius",
            Self::Pisces => "Pisces",
        }
    }

    /// Arabic display name.
    pub const fn arabic_name(self) -> &'static str {
        match self {
            Self::Aries => "الحمل",
            Self::Taurus => "الثور",
            Self::Gemini => "الجوزاء",
            Self::Cancer => "السرطان",
            Self::Leo => "الأسد",
            Self::Virgo => "العذراء",
            Self::Libra => "الميزان",
            Self::Scorpio => "العقرب",
            Self::Sagittarius => "القوس",
            Self::Capricorn => "الجدي",
            Self::Aquarius => "الدلو",
            Self::Pisces => "الحوت",
        }
    }

    /// Position in [`ALL_SIGNS`], 0 through 11.
    pub const fn index(self) -> usize {
        self as usize
    }

    pub const fn from_index(index: usize) -> Self {
        ALL_SIGNS[index % 12]
    }
}

/// Reduce a longitude into [0, 360). Never negative.
pub fn normalize_degrees(degrees: f64) -> f64 {
    degrees.rem_euclid(360.0)
}

/// A longitude expressed as a sign plus the degree within that sign.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SignPosition {
    pub sign: ZodiacSign,
    /// Degree within the sign, [0, 30).
    pub degree_in_sign: f64,
}

impl SignPosition {
    /// Map an ecliptic longitude to its sign.
    ///
    /// The longitude must already be reduced into [0, 360); callers
    /// normalize with [`normalize_degrees`] first.
    pub fn from_longitude(longitude: f64) -> Self {
        // values rounding up against 360 can floor to index 12
        let index = ((longitude / 30.0).floor() as usize).min(11);
        Self {
            sign: ZodiacSign::from_index(index),
            degree_in_sign: longitude - index as f64 * 30.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_longitude_is_first_degree_of_aries() {
        let pos = SignPosition::from_longitude(0.0);
        assert_eq!(pos.sign, ZodiacSign::Aries);
        assert_eq!(pos.degree_in_sign, 0.0);
    }

    #[test]
    fn last_fraction_of_circle_is_pisces() {
        let pos = SignPosition::from_longitude(359.999);
        assert_eq!(pos.sign, ZodiacSign::Pisces);
        assert!(pos.degree_in_sign < 30.0);
    }

    #[test]
    fn every_sign_spans_thirty_degrees() {
        for (i, sign) in ALL_SIGNS.iter().enumerate() {
            let lon = i as f64 * 30.0 + 15.0;
            let pos = SignPosition::from_longitude(lon);
            assert_eq!(pos.sign, *sign);
            assert!((pos.degree_in_sign - 15.0).abs() < 1e-12);
        }
    }

    #[test]
    fn normalize_handles_negative_and_oversized_input() {
        assert_eq!(normalize_degrees(-30.0), 330.0);
        assert_eq!(normalize_degrees(360.0), 0.0);
        assert_eq!(normalize_degrees(725.0), 5.0);
        assert!(normalize_degrees(-0.5) >= 0.0);
    }
}
