//! Weather Observations
//!
//! Serde model of the provider payload and the validated observation
//! the rest of the crate consumes. Only the fields the game reads are
//! modeled: condition main-category, temperature, humidity, timestamp
//! and UTC offset, and the status code.

use chrono::{FixedOffset, TimeZone, Timelike};
use serde::{Deserialize, Serialize};

use crate::weather::provider::WeatherError;

/// Status code a successful provider response carries.
const STATUS_OK: i64 = 200;

/// One condition entry in a provider payload.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct ConditionEntry {
    /// Main category, e.g. "Rain", "Clouds", "Clear".
    pub main: String,
    /// Free-text detail, unused by classification.
    #[serde(default)]
    pub description: String,
}

/// Thermal readings in a provider payload.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct Thermals {
    /// Temperature, degrees Celsius.
    #[serde(default)]
    pub temp: f32,
    /// Relative humidity, percent.
    #[serde(default)]
    pub humidity: f32,
}

/// Raw weather-provider payload (OpenWeatherMap-shaped JSON).
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ProviderResponse {
    /// HTTP-style status code; anything but 200 is a lookup failure.
    pub cod: i64,
    /// Place name as reported by the provider.
    #[serde(default)]
    pub name: Option<String>,
    /// Observation timestamp, unix seconds (UTC).
    #[serde(default)]
    pub dt: i64,
    /// UTC offset of the observed location, seconds.
    #[serde(default)]
    pub timezone: i32,
    /// Condition entries; the first one drives classification.
    #[serde(default)]
    pub weather: Vec<ConditionEntry>,
    /// Thermal readings.
    #[serde(default)]
    pub main: Thermals,
}

impl Default for ProviderResponse {
    fn default() -> Self {
        Self {
            cod: STATUS_OK,
            name: None,
            dt: 0,
            timezone: 0,
            weather: Vec::new(),
            main: Thermals::default(),
        }
    }
}

/// A validated weather observation.
///
/// Read-only input to theme classification; produced only from a
/// successful provider response.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct WeatherObservation {
    /// Condition main-category text.
    pub condition: String,
    /// Temperature, degrees Celsius.
    pub temperature_c: f32,
    /// Relative humidity, percent.
    pub humidity_pct: f32,
    /// Hour of day `[0, 24)` at the observed location.
    pub local_hour: u32,
}

impl WeatherObservation {
    /// Validate a provider response into an observation.
    ///
    /// A non-200 status is a lookup failure; a payload without a
    /// condition entry or with an out-of-range offset is malformed.
    pub fn from_response(response: &ProviderResponse) -> Result<Self, WeatherError> {
        if response.cod != STATUS_OK {
            return Err(WeatherError::NotFound);
        }

        let entry = response
            .weather
            .first()
            .ok_or_else(|| WeatherError::Malformed("missing condition entry".to_string()))?;

        let offset = FixedOffset::east_opt(response.timezone)
            .ok_or_else(|| WeatherError::Malformed("UTC offset out of range".to_string()))?;
        let local = offset
            .timestamp_opt(response.dt, 0)
            .single()
            .ok_or_else(|| WeatherError::Malformed("timestamp out of range".to_string()))?;

        Ok(Self {
            condition: entry.main.clone(),
            temperature_c: response.main.temp,
            humidity_pct: response.main.humidity,
            local_hour: local.hour(),
        })
    }

    /// One-line display summary shown alongside the score.
    pub fn summary(&self) -> String {
        format!(
            "Condition: {}  Temp: {}°C  Humidity: {}%",
            self.condition,
            self.temperature_c.round(),
            self.humidity_pct.round()
        )
    }
}
