//! Geocoding port and its Nominatim-backed implementation.
//!
//! The [`Geocoder`] trait is the seam for tests and alternative providers:
//! absence is the normal failure mode, so transport and parsing errors never
//! cross it. [`NominatimClient`] keeps typed errors internally and logs them
//! at the boundary.

use std::collections::HashMap;
use std::sync::Mutex;
use std::time::Duration;

use reqwest::{Client, Url};
use serde::Deserialize;

use imodex_core::{AppConfig, Coordinates, ResolvedLocation};

use crate::cache::GeocodeCache;
use crate::error::GeoError;
use crate::normalize::normalize_name;

/// Fallible external place lookup: free text in, best-guess location out.
///
/// Implementations must never surface errors — a failed or empty lookup is
/// `None`, and callers treat that as an expected outcome.
#[allow(async_fn_in_trait)]
pub trait Geocoder {
    async fn geocode(&self, query: &str) -> Option<ResolvedLocation>;
}

/// First (best) candidate returned by a Nominatim text search.
#[derive(Debug, Deserialize)]
struct NominatimPlace {
    lat: String,
    lon: String,
    #[serde(default)]
    address: HashMap<String, String>,
}

/// Client for a Nominatim-compatible search endpoint.
///
/// Issues a single query-by-text request per lookup (no retry) and uses only
/// the first candidate. Use [`NominatimClient::new`] for production or
/// [`NominatimClient::with_base_url`] to point at a mock server in tests.
pub struct NominatimClient {
    client: Client,
    base_url: Url,
}

impl NominatimClient {
    /// Creates a client from application configuration.
    ///
    /// # Errors
    ///
    /// Returns [`GeoError::Http`] if the underlying `reqwest::Client` cannot
    /// be constructed, or [`GeoError::InvalidBaseUrl`] for a malformed URL.
    pub fn new(config: &AppConfig) -> Result<Self, GeoError> {
        Self::with_base_url(
            &config.nominatim_base_url,
            config.request_timeout_secs,
            &config.geocoder_user_agent,
        )
    }

    /// Creates a client with a custom base URL (for testing with wiremock).
    ///
    /// # Errors
    ///
    /// Returns [`GeoError::Http`] if the underlying `reqwest::Client` cannot
    /// be constructed, or [`GeoError::InvalidBaseUrl`] for a malformed URL.
    pub fn with_base_url(
        base_url: &str,
        timeout_secs: u64,
        user_agent: &str,
    ) -> Result<Self, GeoError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent(user_agent)
            .build()?;

        // Ensure exactly one trailing slash so `join` appends the search path
        // instead of replacing the last path segment.
        let normalised = format!("{}/", base_url.trim_end_matches('/'));
        let base_url = Url::parse(&normalised).map_err(|e| GeoError::InvalidBaseUrl {
            base_url: normalised.clone(),
            reason: e.to_string(),
        })?;

        Ok(Self { client, base_url })
    }

    /// Performs one text search, returning the parsed first candidate or
    /// `None` when the service has no match.
    ///
    /// # Errors
    ///
    /// - [`GeoError::Http`] on network failure or non-2xx HTTP status.
    /// - [`GeoError::Deserialize`] if the response body is not the expected
    ///   candidate list.
    pub async fn search(&self, query: &str) -> Result<Option<ResolvedLocation>, GeoError> {
        let mut url = self
            .base_url
            .join("search")
            .map_err(|e| GeoError::InvalidBaseUrl {
                base_url: self.base_url.to_string(),
                reason: e.to_string(),
            })?;
        {
            let mut pairs = url.query_pairs_mut();
            pairs.append_pair("q", &format!("{query}, Portugal"));
            pairs.append_pair("format", "json");
            pairs.append_pair("addressdetails", "1");
            pairs.append_pair("limit", "1");
        }

        let response = self.client.get(url.clone()).send().await?;
        let response = response.error_for_status()?;
        let body = response.text().await?;
        let places: Vec<NominatimPlace> =
            serde_json::from_str(&body).map_err(|e| GeoError::Deserialize {
                context: url.to_string(),
                source: e,
            })?;

        Ok(places.first().and_then(candidate_to_location))
    }
}

impl Geocoder for NominatimClient {
    async fn geocode(&self, query: &str) -> Option<ResolvedLocation> {
        match self.search(query).await {
            Ok(result) => result,
            Err(error) => {
                tracing::warn!(query, %error, "geocoding failed, treating as absent");
                None
            }
        }
    }
}

/// Maps a Nominatim candidate onto the administrative hierarchy: state or
/// region becomes the district, city/town/municipality the municipality,
/// suburb/village/neighbourhood the parish. A candidate with unparseable
/// coordinates is discarded.
fn candidate_to_location(place: &NominatimPlace) -> Option<ResolvedLocation> {
    let lat = place.lat.parse::<f64>().ok()?;
    let lng = place.lon.parse::<f64>().ok()?;
    let pick = |keys: &[&str]| keys.iter().find_map(|key| place.address.get(*key).cloned());
    Some(ResolvedLocation {
        district: pick(&["state", "region"]),
        municipality: pick(&["city", "town", "municipality"]),
        parish: pick(&["suburb", "village", "neighbourhood"]),
        coordinates: Some(Coordinates { lat, lng }),
    })
}

/// Wraps a [`Geocoder`] with a bounded LRU cache keyed by normalized query
/// text. Both hits and misses are cached.
///
/// The cache lock is held only around lookups and inserts, never across the
/// inner call. Identical queries issued concurrently can therefore both
/// reach the inner geocoder; callers introducing parallelism need their own
/// per-key coalescing.
pub struct CachedGeocoder<G> {
    inner: G,
    cache: Mutex<GeocodeCache>,
}

impl<G: Geocoder> CachedGeocoder<G> {
    pub fn new(inner: G, capacity: usize) -> Self {
        Self {
            inner,
            cache: Mutex::new(GeocodeCache::new(capacity)),
        }
    }
}

impl<G: Geocoder + Sync> Geocoder for CachedGeocoder<G> {
    async fn geocode(&self, query: &str) -> Option<ResolvedLocation> {
        let key = normalize_name(query);
        if let Some(cached) = self
            .cache
            .lock()
            .expect("geocode cache lock poisoned")
            .get(&key)
        {
            tracing::debug!(query, "geocode cache hit");
            return cached;
        }

        let result = self.inner.geocode(query).await;
        self.cache
            .lock()
            .expect("geocode cache lock poisoned")
            .insert(key, result.clone());
        result
    }
}
