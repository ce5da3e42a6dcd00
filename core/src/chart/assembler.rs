use std::sync::Arc;

use log::{debug, info};

use crate::aspects::{AspectDetector, OrbPolicy};
use crate::chart::data::{Chart, ChartRequest};
use crate::ephemeris::{EphemerisSource, HouseSystem};
use crate::error::ChartError;
use crate::geocoding::GeocodingProvider;
use crate::houses::{assign_houses, HouseWheel};
use crate::positions::{resolve_positions, BodyPosition};
use crate::time::{AstronomicalTime, BirthMoment};

/// Per-process chart computation settings.
#[derive(Debug, Clone, Copy, Default)]
pub struct ChartSettings {
    pub house_system: HouseSystem,
    pub orb: OrbPolicy,
}

/// Orchestrates the chart pipeline; the only component that knows every
/// other component.
pub struct ChartAssembler {
    geocoder: Arc<dyn GeocodingProvider>,
    ephemeris: Arc<dyn EphemerisSource>,
    settings: ChartSettings,
}

impl ChartAssembler {
    pub fn new(
        geocoder: Arc<dyn GeocodingProvider>,
        ephemeris: Arc<dyn EphemerisSource>,
        settings: ChartSettings,
    ) -> Self {
        Self {
            geocoder,
            ephemeris,
            settings,
        }
    }

    /// Compute one chart.
    ///
    /// Pure per request: no shared mutable state, no caching. The same
    /// inputs and collaborator responses yield the same chart. Parse and
    /// geocoding failures, time normalization failures and house
    /// calculation failures abort the request; per-body failures stay
    /// embedded in the body sequence.
    pub async fn assemble(&self, request: &ChartRequest) -> Result<Chart, ChartError> {
        let moment = BirthMoment::parse(
            &request.birth_date,
            &request.birth_time,
            request.location.clone(),
        )?;
        let location = self.geocoder.resolve(&request.location).await?;
        let time = AstronomicalTime::normalize(&moment, &location.timezone)?;
        debug!(
            "normalized {} {} ({}) to JD {}",
            request.birth_date, request.birth_time, location.timezone, time.julian_day_ut
        );

        let bodies = resolve_positions(self.ephemeris.as_ref(), &time);
        let houses = HouseWheel::resolve(
            self.ephemeris.as_ref(),
            &time,
            &location,
            self.settings.house_system,
        )?;

        let resolved: Vec<BodyPosition> =
            bodies.iter().filter_map(|r| r.position().copied()).collect();
        let assignments = assign_houses(&houses, &resolved);
        let aspects = AspectDetector::new(self.settings.orb).detect(&resolved);

        info!(
            "chart for `{}`: {} of {} bodies resolved, {} aspects",
            request.name,
            resolved.len(),
            bodies.len(),
            aspects.len()
        );
        Ok(Chart {
            name: request.name.clone(),
            moment,
            location,
            time,
            bodies,
            houses,
            assignments,
            aspects,
        })
    }
}
