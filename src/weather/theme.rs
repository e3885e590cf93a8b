//! Weather Theme Classification
//!
//! Maps an observation to one of five environmental presets. The theme
//! decides the difficulty profile, the backdrop, and which power-up (if
//! any) the session can spawn.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::weather::observation::WeatherObservation;

/// First hour of the day considered daylight.
const DAYLIGHT_START_HOUR: u32 = 6;

/// Last hour of the day considered daylight.
const DAYLIGHT_END_HOUR: u32 = 19;

/// Environmental preset derived from a weather observation.
///
/// Derived once per weather fetch; immutable until re-fetched.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[repr(u8)]
pub enum Theme {
    /// Clear daytime sky
    Clear = 0,
    /// Overcast
    Clouds = 1,
    /// Rainfall
    Rain = 2,
    /// Snowfall
    Snow = 3,
    /// Night-time, regardless of condition
    Night = 4,
}

impl Theme {
    /// All themes, in classification order.
    pub const ALL: [Theme; 5] = [
        Theme::Clear,
        Theme::Clouds,
        Theme::Rain,
        Theme::Snow,
        Theme::Night,
    ];

    /// Classify an observation into a theme.
    ///
    /// Rules apply in order, first match wins:
    /// 1. local hour outside daylight -> `Night` (time dominates condition)
    /// 2. condition contains "rain" -> `Rain`
    /// 3. condition contains "snow" -> `Snow`
    /// 4. condition contains "cloud" -> `Clouds`
    /// 5. condition contains "clear" -> `Clear`
    /// 6. anything else -> `Clouds`
    ///
    /// Pure and total: unrecognized condition text falls through to the
    /// default rather than erroring.
    pub fn classify(observation: &WeatherObservation) -> Theme {
        if observation.local_hour < DAYLIGHT_START_HOUR
            || observation.local_hour > DAYLIGHT_END_HOUR
        {
            return Theme::Night;
        }

        let condition = observation.condition.to_lowercase();
        if condition.contains("rain") {
            Theme::Rain
        } else if condition.contains("snow") {
            Theme::Snow
        } else if condition.contains("cloud") {
            Theme::Clouds
        } else if condition.contains("clear") {
            Theme::Clear
        } else {
            Theme::Clouds
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Theme::Clear => "clear",
            Theme::Clouds => "clouds",
            Theme::Rain => "rain",
            Theme::Snow => "snow",
            Theme::Night => "night",
        };
        write!(f, "{name}")
    }
}
