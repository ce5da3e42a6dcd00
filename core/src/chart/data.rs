use serde::{Deserialize, Serialize};

use crate::aspects::Aspect;
use crate::geocoding::ResolvedLocation;
use crate::houses::{HouseAssignment, HouseWheel};
use crate::positions::BodyRecord;
use crate::time::{AstronomicalTime, BirthMoment};

/// Incoming chart request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartRequest {
    /// Display name echoed back on the chart.
    pub name: String,
    /// `YYYY-MM-DD`
    pub birth_date: String,
    /// `HH:MM`
    pub birth_time: String,
    /// Free-text birth place, Arabic or Latin script.
    pub location: String,
}

/// A fully assembled natal chart.
///
/// Immutable once built, owned by the request/response cycle; nothing is
/// persisted or cached.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Chart {
    pub name: String,
    pub moment: BirthMoment,
    pub location: ResolvedLocation,
    pub time: AstronomicalTime,
    /// One record per body, chart order.
    pub bodies: Vec<BodyRecord>,
    pub houses: HouseWheel,
    /// One assignment per resolved body.
    pub assignments: Vec<HouseAssignment>,
    pub aspects: Vec<Aspect>,
}
