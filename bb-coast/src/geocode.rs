//! Free-text geocoding against a Nominatim-style search endpoint.
//!
//! One GET per query, first candidate only, no retry. Every failure is
//! reported to callers as [`CoastError::CouldNotLocate`]; the cause is
//! logged.

use crate::error::{CoastError, Result};
use crate::geo::GeoPoint;
use log::{debug, warn};
use serde::{Deserialize, Serialize};
use std::time::Duration;

#[cfg(feature = "api")]
use log::info;
#[cfg(feature = "api")]
use reqwest::{Client, StatusCode};

pub const DEFAULT_SEARCH_URL: &str = "https://nominatim.openstreetmap.org/search";
pub const DEFAULT_COUNTRY_CODE: &str = "in";

/// Where and how to query the geocoder.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeocoderConfig {
    pub base_url: String,
    /// ISO 3166-1 alpha-2 code the search is restricted to
    pub country_code: String,
    pub user_agent: String,
    pub timeout: Duration,
}

impl Default for GeocoderConfig {
    fn default() -> Self {
        GeocoderConfig {
            base_url: DEFAULT_SEARCH_URL.to_string(),
            country_code: DEFAULT_COUNTRY_CODE.to_string(),
            user_agent: concat!("bluebarrier/", env!("CARGO_PKG_VERSION")).to_string(),
            timeout: Duration::from_secs(60),
        }
    }
}

/// A single candidate in the search response.
#[derive(Debug, Clone, Deserialize)]
struct SearchHit {
    lat: String,
    lon: String,
    #[serde(default)]
    display_name: Option<String>,
}

/// Parse a search response body and return the first candidate's position.
pub fn parse_search_response(query: &str, body: &str) -> Result<GeoPoint> {
    let could_not_locate = || CoastError::CouldNotLocate(query.to_string());
    let hits: Vec<SearchHit> = serde_json::from_str(body).map_err(|e| {
        warn!("Malformed geocoder response for {}: {}", query, e);
        could_not_locate()
    })?;
    let Some(first) = hits.into_iter().next() else {
        warn!("Geocoder returned no results for {}", query);
        return Err(could_not_locate());
    };
    let latitude = first.lat.trim().parse::<f64>();
    let longitude = first.lon.trim().parse::<f64>();
    match (latitude, longitude) {
        (Ok(latitude), Ok(longitude)) => {
            if let Some(name) = &first.display_name {
                debug!("{} resolved to {}", query, name);
            }
            Ok(GeoPoint::new(latitude, longitude))
        }
        _ => {
            warn!(
                "Geocoder returned unparseable coordinates for {}: {}, {}",
                query, first.lat, first.lon
            );
            Err(could_not_locate())
        }
    }
}

/// HTTP geocoding client.
#[cfg(feature = "api")]
#[derive(Debug, Clone)]
pub struct Geocoder {
    client: Client,
    config: GeocoderConfig,
}

#[cfg(feature = "api")]
impl Geocoder {
    pub fn new(config: GeocoderConfig) -> Result<Geocoder> {
        let client = Client::builder()
            .timeout(config.timeout)
            .user_agent(config.user_agent.clone())
            .build()
            .map_err(|e| {
                warn!("Failed to build geocoder client: {}", e);
                CoastError::CouldNotLocate(config.base_url.clone())
            })?;
        Ok(Geocoder { client, config })
    }

    pub fn config(&self) -> &GeocoderConfig {
        &self.config
    }

    /// Look up a free-text query (PIN code or place name).
    pub async fn search(&self, query: &str) -> Result<GeoPoint> {
        let could_not_locate = || CoastError::CouldNotLocate(query.to_string());
        info!(
            "Geocoding '{}' (country {})",
            query, self.config.country_code
        );
        let response = self
            .client
            .get(&self.config.base_url)
            .query(&[
                ("format", "json"),
                ("limit", "1"),
                ("countrycodes", self.config.country_code.as_str()),
                ("q", query),
            ])
            .send()
            .await
            .map_err(|e| {
                warn!("Geocoder request failed for {}: {}", query, e);
                could_not_locate()
            })?;
        if response.status() != StatusCode::OK {
            warn!(
                "Bad geocoder response status for {}: {}",
                query,
                response.status()
            );
            return Err(could_not_locate());
        }
        let body = response.text().await.map_err(|e| {
            warn!("Failed to read geocoder body for {}: {}", query, e);
            could_not_locate()
        })?;
        parse_search_response(query, &body)
    }
}
