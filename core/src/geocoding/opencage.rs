//! OpenCage forward-geocoding client.

use std::time::Duration;

use async_trait::async_trait;
use log::warn;
use reqwest::Client;
use serde::Deserialize;

use crate::geocoding::{GeocodeError, GeocodingProvider, ResolvedLocation, FALLBACK_TIMEZONE};

const BASE_URL: &str = "https://api.opencagedata.com/geocode/v1/json";

/// Bounded request timeout; a hung provider surfaces as an error, not a
/// stalled request.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Debug, Deserialize)]
struct OpenCageResponse {
    #[serde(default)]
    results: Vec<OpenCageResult>,
}

#[derive(Debug, Deserialize)]
struct OpenCageResult {
    geometry: Geometry,
    #[serde(default)]
    annotations: Option<Annotations>,
}

#[derive(Debug, Deserialize)]
struct Geometry {
    lat: f64,
    lng: f64,
}

#[derive(Debug, Deserialize)]
struct Annotations {
    #[serde(default)]
    timezone: Option<TimezoneAnnotation>,
}

#[derive(Debug, Deserialize)]
struct TimezoneAnnotation {
    name: String,
}

/// OpenCage implementation of [`GeocodingProvider`].
///
/// The request pins `language=ar` so Arabic place names resolve
/// consistently; Latin-script queries are unaffected.
pub struct OpenCageGeocoder {
    client: Client,
    api_key: String,
}

impl OpenCageGeocoder {
    pub fn new(api_key: String) -> Self {
        let client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .unwrap_or_else(|_| Client::new());
        Self { client, api_key }
    }
}

#[async_trait]
impl GeocodingProvider for OpenCageGeocoder {
    async fn resolve(&self, query: &str) -> Result<ResolvedLocation, GeocodeError> {
        let url = format!(
            "{BASE_URL}?q={}&language=ar&limit=1&key={}",
            urlencoding::encode(query),
            self.api_key
        );
        let response =
            self.client
                .get(&url)
                .send()
                .await
                .map_err(|e| GeocodeError::Unavailable {
                    message: e.to_string(),
                })?;
        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| GeocodeError::Unavailable {
                message: e.to_string(),
            })?;
        if !status.is_success() {
            return Err(GeocodeError::Unavailable {
                message: format!("OpenCage returned {status}"),
            });
        }
        let parsed: OpenCageResponse =
            serde_json::from_str(&body).map_err(|e| GeocodeError::Unavailable {
                message: format!("malformed OpenCage response: {e}"),
            })?;
        let first = parsed
            .results
            .into_iter()
            .next()
            .ok_or_else(|| GeocodeError::NotFound {
                query: query.to_string(),
            })?;
        let timezone = first
            .annotations
            .and_then(|a| a.timezone)
            .map(|tz| tz.name)
            .unwrap_or_else(|| {
                warn!("no timezone annotation for `{query}`, falling back to {FALLBACK_TIMEZONE}");
                FALLBACK_TIMEZONE.to_string()
            });
        Ok(ResolvedLocation {
            latitude: first.geometry.lat,
            longitude: first.geometry.lng,
            timezone,
        })
    }
}
