//! Civil birth time to astronomical time reference.
//!
//! A birth instant is entered as a civil local date and time. The timezone
//! rules (via `chrono-tz`) turn it into a UTC instant, which is then
//! expressed as a fractional Julian Day in Universal Time, the time axis
//! the ephemeris collaborator works on.

use chrono::{DateTime, Datelike, LocalResult, NaiveDate, NaiveTime, TimeZone, Timelike, Utc};
use chrono_tz::Tz;
use serde::{Deserialize, Serialize};

use crate::error::ChartError;

/// Supported civil year range, inclusive.
pub const MIN_YEAR: i32 = 1800;
pub const MAX_YEAR: i32 = 2400;

/// A birth instant as entered by the caller: civil date, civil time and
/// the free-text birth place. Immutable once parsed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BirthMoment {
    pub date: NaiveDate,
    pub time: NaiveTime,
    pub location: String,
}

impl BirthMoment {
    /// Parse `YYYY-MM-DD` and `HH:MM` strings.
    pub fn parse(date: &str, time: &str, location: impl Into<String>) -> Result<Self, ChartError> {
        let parsed_date = NaiveDate::parse_from_str(date.trim(), "%Y-%m-%d").map_err(|e| {
            ChartError::InvalidDateTimeFormat {
                detail: format!("birth date `{date}`: {e}"),
            }
        })?;
        let parsed_time = NaiveTime::parse_from_str(time.trim(), "%H:%M").map_err(|e| {
            ChartError::InvalidDateTimeFormat {
                detail: format!("birth time `{time}`: {e}"),
            }
        })?;
        let year = parsed_date.year();
        if !(MIN_YEAR..=MAX_YEAR).contains(&year) {
            return Err(ChartError::DateOutOfRange { year });
        }
        Ok(Self {
            date: parsed_date,
            time: parsed_time,
            location: location.into(),
        })
    }
}

/// The disambiguated astronomical time reference for a chart.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AstronomicalTime {
    /// Fractional Julian Day, Universal Time.
    pub julian_day_ut: f64,
    /// The UTC instant the Julian Day was derived from, kept for
    /// diagnostics.
    pub utc: DateTime<Utc>,
}

impl AstronomicalTime {
    /// Resolve a civil birth moment under the named timezone's rules.
    ///
    /// An ambiguous local time (fall-back overlap) resolves to the earlier
    /// UTC instant, i.e. the pre-transition offset. A local time skipped
    /// by a spring-forward transition is an error, never shifted.
    pub fn normalize(moment: &BirthMoment, timezone: &str) -> Result<Self, ChartError> {
        let tz: Tz = timezone.parse().map_err(|_| ChartError::UnknownTimezone {
            timezone: timezone.to_string(),
        })?;
        let naive = moment.date.and_time(moment.time);
        let local = match tz.from_local_datetime(&naive) {
            LocalResult::Single(dt) => dt,
            LocalResult::Ambiguous(earlier, _later) => earlier,
            LocalResult::None => {
                return Err(ChartError::InvalidLocalTime {
                    datetime: naive.to_string(),
                    timezone: timezone.to_string(),
                })
            }
        };
        let utc = local.with_timezone(&Utc);
        Ok(Self {
            julian_day_ut: julian_day(utc),
            utc,
        })
    }
}

/// Julian Day (UT) for a UTC instant, Gregorian calendar.
///
/// Fractional day is `hour/24 + minute/1440 + second/86400`.
pub fn julian_day(utc: DateTime<Utc>) -> f64 {
    let mut year = f64::from(utc.year());
    let mut month = f64::from(utc.month());
    if month <= 2.0 {
        year -= 1.0;
        month += 12.0;
    }
    let century = (year / 100.0).floor();
    let gregorian = 2.0 - century + (century / 4.0).floor();
    let day_number = (365.25 * (year + 4716.0)).floor()
        + (30.6001 * (month + 1.0)).floor()
        + f64::from(utc.day())
        + gregorian
        - 1524.5;
    day_number
        + f64::from(utc.hour()) / 24.0
        + f64::from(utc.minute()) / 1440.0
        + f64::from(utc.second()) / 86_400.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn j2000_epoch() {
        let utc = Utc.with_ymd_and_hms(2000, 1, 1, 12, 0, 0).unwrap();
        assert!((julian_day(utc) - 2_451_545.0).abs() < 1e-9);
    }

    #[test]
    fn fractional_day_components() {
        let midnight = Utc.with_ymd_and_hms(1990, 6, 15, 0, 0, 0).unwrap();
        let afternoon = Utc.with_ymd_and_hms(1990, 6, 15, 12, 30, 0).unwrap();
        assert!((julian_day(midnight) - 2_448_057.5).abs() < 1e-9);
        assert!((julian_day(afternoon) - julian_day(midnight) - 12.5 / 24.0).abs() < 1e-9);
    }
}
