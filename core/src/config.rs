//! Process configuration, built once at startup.
//!
//! There is no ambient global lookup: the loaded config is passed
//! explicitly to the components that need it and never mutated afterward.

use std::env;
use std::fs;
use std::path::PathBuf;

use anyhow::Context;
use serde::Deserialize;

use crate::aspects::OrbPolicy;
use crate::ephemeris::HouseSystem;

/// Read-only configuration shared by every request.
#[derive(Debug, Clone)]
pub struct AstraeaConfig {
    /// OpenCage geocoding credential.
    pub opencage_api_key: String,
    /// Swiss Ephemeris data directory; `None` lets the adapter resolve it.
    pub ephemeris_path: Option<PathBuf>,
    pub house_system: HouseSystem,
    pub orb: OrbPolicy,
    /// Origins allowed by the HTTP surface; empty means any.
    pub allowed_origins: Vec<String>,
    pub listen_addr: String,
}

#[derive(Debug, Default, Deserialize)]
struct ConfigToml {
    #[serde(default)]
    opencage_api_key: Option<String>,
    #[serde(default)]
    ephemeris_path: Option<PathBuf>,
    #[serde(default)]
    house_system: Option<String>,
    #[serde(default)]
    orb_degrees: Option<f64>,
    #[serde(default)]
    allowed_origins: Option<Vec<String>>,
    #[serde(default)]
    listen_addr: Option<String>,
}

impl AstraeaConfig {
    /// Load configuration from the environment, with an optional TOML
    /// file (`ASTRAEA_CONFIG`) underneath. Environment variables win.
    pub fn load() -> anyhow::Result<Self> {
        let file = match env::var("ASTRAEA_CONFIG") {
            Ok(path) => {
                let text = fs::read_to_string(&path)
                    .with_context(|| format!("could not read config file {path}"))?;
                toml::from_str(&text)
                    .with_context(|| format!("could not parse config file {path}"))?
            }
            Err(_) => ConfigToml::default(),
        };

        let opencage_api_key = env::var("OPENCAGE_API_KEY")
            .ok()
            .or(file.opencage_api_key)
            .context("OPENCAGE_API_KEY is not set")?;

        let ephemeris_path = env::var("SWISS_EPHEMERIS_PATH")
            .ok()
            .map(PathBuf::from)
            .or(file.ephemeris_path);

        let house_system = match env::var("ASTRAEA_HOUSE_SYSTEM").ok().or(file.house_system) {
            Some(name) => name
                .parse::<HouseSystem>()
                .map_err(|e| anyhow::anyhow!(e))?,
            None => HouseSystem::default(),
        };

        let orb_degrees = match env::var("ASTRAEA_ORB").ok() {
            Some(raw) => Some(
                raw.parse::<f64>()
                    .with_context(|| format!("ASTRAEA_ORB `{raw}` is not a number"))?,
            ),
            None => file.orb_degrees,
        };
        let orb = match orb_degrees {
            Some(degrees) => OrbPolicy::new(degrees)?,
            None => OrbPolicy::default(),
        };

        let allowed_origins = env::var("ASTRAEA_ALLOWED_ORIGINS")
            .ok()
            .map(|raw| split_origins(&raw))
            .or(file.allowed_origins)
            .unwrap_or_default();

        let listen_addr = env::var("ASTRAEA_LISTEN_ADDR")
            .ok()
            .or(file.listen_addr)
            .unwrap_or_else(|| "0.0.0.0:8000".to_string());

        Ok(Self {
            opencage_api_key,
            ephemeris_path,
            house_system,
            orb,
            allowed_origins,
            listen_addr,
        })
    }
}

fn split_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}
