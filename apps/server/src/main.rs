mod api;

use std::sync::Arc;

use astraea_core::chart::{ChartAssembler, ChartSettings};
use astraea_core::config::AstraeaConfig;
use astraea_core::ephemeris::SwissEphemerisAdapter;
use astraea_core::geocoding::OpenCageGeocoder;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::init();
    let config = AstraeaConfig::load()?;

    let geocoder = Arc::new(OpenCageGeocoder::new(config.opencage_api_key.clone()));
    let ephemeris = Arc::new(SwissEphemerisAdapter::new(config.ephemeris_path.clone())?);
    let settings = ChartSettings {
        house_system: config.house_system,
        orb: config.orb,
    };
    let assembler = Arc::new(ChartAssembler::new(geocoder, ephemeris, settings));

    let router = api::router(assembler, &config);
    log::info!("listening on {}", config.listen_addr);
    let listener = tokio::net::TcpListener::bind(&config.listen_addr).await?;
    axum::serve(listener, router).await?;
    Ok(())
}
