//! Weather and Geocoding Providers
//!
//! The live HTTP transport is an external collaborator; this module
//! defines the seams the game core consumes: query types, the provider
//! traits, the error taxonomy, and deterministic fixture
//! implementations used by tests and the demo binary.
//!
//! Failures are recovered at this boundary. The session only ever
//! receives validated observations.

use std::collections::BTreeMap;
use std::future::Future;

use thiserror::Error;

use crate::weather::observation::{ConditionEntry, ProviderResponse, Thermals};

/// Label substituted when reverse geocoding degrades.
pub const GENERIC_LOCATION_LABEL: &str = "Your Location";

/// Weather lookup failures.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum WeatherError {
    /// City text was empty; blocked before any fetch.
    #[error("city name is empty")]
    EmptyCity,

    /// No provider credential configured; blocked before any fetch.
    #[error("weather API key is missing")]
    MissingApiKey,

    /// Provider reported an unsuccessful lookup.
    #[error("location not found, try another")]
    NotFound,

    /// Provider unreachable.
    #[error("weather load failed: {0}")]
    Transport(String),

    /// Provider reachable but the payload was unusable.
    #[error("malformed weather response: {0}")]
    Malformed(String),
}

/// Reverse-geocode failures. Always non-fatal: callers degrade to
/// [`GENERIC_LOCATION_LABEL`].
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum GeocodeError {
    /// Geocoder unreachable.
    #[error("reverse geocode failed: {0}")]
    Transport(String),

    /// Lookup succeeded but returned no usable place name.
    #[error("no place name for coordinates")]
    NoPlaceName,
}

/// A weather lookup request.
#[derive(Clone, Debug, PartialEq)]
pub enum WeatherQuery {
    /// Lookup by city name.
    City(String),
    /// Lookup by geolocation.
    Coords {
        /// Latitude, degrees.
        lat: f64,
        /// Longitude, degrees.
        lon: f64,
    },
}

impl WeatherQuery {
    /// Input validation run before any fetch is dispatched.
    pub fn validate(&self) -> Result<(), WeatherError> {
        match self {
            WeatherQuery::City(name) if name.trim().is_empty() => Err(WeatherError::EmptyCity),
            _ => Ok(()),
        }
    }

    /// The label a city query carries; coordinate queries resolve theirs
    /// through a geocoder.
    pub fn city_label(&self) -> Option<&str> {
        match self {
            WeatherQuery::City(name) => Some(name.trim()),
            WeatherQuery::Coords { .. } => None,
        }
    }
}

/// Provider credential, validated at construction.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiKey(String);

impl ApiKey {
    /// Validate raw credential text. Empty or whitespace-only input is
    /// rejected before any request can be attempted.
    pub fn new(raw: &str) -> Result<Self, WeatherError> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(WeatherError::MissingApiKey);
        }
        Ok(Self(trimmed.to_string()))
    }

    /// The credential text.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Source of weather observations.
///
/// Implementations must be cheap to call concurrently; the service
/// layer dispatches fetches onto background tasks.
pub trait WeatherProvider: Send + Sync {
    /// Fetch the raw payload for a query.
    fn fetch(
        &self,
        query: WeatherQuery,
    ) -> impl Future<Output = Result<ProviderResponse, WeatherError>> + Send;
}

/// Reverse lookup from coordinates to a human-readable place label.
pub trait Geocoder: Send + Sync {
    /// Resolve coordinates to a place label.
    fn reverse(&self, lat: f64, lon: f64)
        -> impl Future<Output = Result<String, GeocodeError>> + Send;
}

// =============================================================================
// FIXTURES
// =============================================================================

/// Canned weather provider for tests and the demo binary.
///
/// City lookups are keyed case-insensitively; unknown cities produce a
/// 404-shaped payload, exercising the same failure path a live
/// provider would.
#[derive(Clone, Debug, Default)]
pub struct FixtureProvider {
    cities: BTreeMap<String, ProviderResponse>,
    coords: Option<ProviderResponse>,
}

impl FixtureProvider {
    /// Empty fixture; every lookup fails.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a canned response for a city.
    pub fn with_city(mut self, name: &str, response: ProviderResponse) -> Self {
        self.cities.insert(name.trim().to_lowercase(), response);
        self
    }

    /// Register the canned response for coordinate lookups.
    pub fn with_coords(mut self, response: ProviderResponse) -> Self {
        self.coords = Some(response);
        self
    }

    /// Build a well-formed payload. `local_hour` is encoded as an epoch
    /// offset with a zero UTC offset, so the observation's local hour
    /// comes out exactly as given.
    pub fn response(condition: &str, temp: f32, humidity: f32, local_hour: u32) -> ProviderResponse {
        ProviderResponse {
            cod: 200,
            name: None,
            dt: i64::from(local_hour) * 3600,
            timezone: 0,
            weather: vec![ConditionEntry {
                main: condition.to_string(),
                description: String::new(),
            }],
            main: Thermals {
                temp,
                humidity,
            },
        }
    }

    fn not_found() -> ProviderResponse {
        ProviderResponse {
            cod: 404,
            ..ProviderResponse::default()
        }
    }
}

impl WeatherProvider for FixtureProvider {
    async fn fetch(&self, query: WeatherQuery) -> Result<ProviderResponse, WeatherError> {
        match query {
            WeatherQuery::City(name) => Ok(self
                .cities
                .get(&name.trim().to_lowercase())
                .cloned()
                .unwrap_or_else(Self::not_found)),
            WeatherQuery::Coords { .. } => {
                Ok(self.coords.clone().unwrap_or_else(Self::not_found))
            }
        }
    }
}

/// Canned geocoder. A fixture without a label fails every lookup,
/// which is how the degraded-label path is tested.
#[derive(Clone, Debug, Default)]
pub struct FixtureGeocoder {
    label: Option<String>,
}

impl FixtureGeocoder {
    /// Geocoder that always resolves to `label`.
    pub fn resolving(label: &str) -> Self {
        Self {
            label: Some(label.to_string()),
        }
    }

    /// Geocoder that always fails.
    pub fn failing() -> Self {
        Self { label: None }
    }
}

impl Geocoder for FixtureGeocoder {
    async fn reverse(&self, _lat: f64, _lon: f64) -> Result<String, GeocodeError> {
        self.label.clone().ok_or(GeocodeError::NoPlaceName)
    }
}
