use std::fmt;

use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Deserializer, Serialize};

use crate::perception::temperature_perception;

/// A caller-supplied latitude/longitude pair, in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coordinate {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinate {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self { latitude, longitude }
    }
}

/// Formats as the `points` path segment, e.g. `47.600,-122.300`.
impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.3},{:.3}", self.latitude, self.longitude)
    }
}

/// A single forecast window ("Today", "Tonight", ...).
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ForecastPeriod {
    #[serde(default)]
    pub number: i32,
    #[serde(default)]
    pub name: String,
    /// Fahrenheit.
    pub temperature: i32,
    #[serde(rename = "shortForecast")]
    pub short_forecast: String,
    #[serde(rename = "startTime", default)]
    pub start_time: Option<DateTime<FixedOffset>>,
    #[serde(rename = "endTime", default)]
    pub end_time: Option<DateTime<FixedOffset>>,
    #[serde(rename = "isDaytime", default)]
    pub is_daytime: Option<bool>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ForecastProperties {
    #[serde(alias = "Periods", default, deserialize_with = "null_as_default")]
    pub periods: Vec<ForecastPeriod>,
}

/// Decoded body of the forecast resource.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ForecastResponse {
    #[serde(default, deserialize_with = "null_as_default")]
    pub properties: ForecastProperties,
}

impl ForecastResponse {
    /// The soonest period, if the provider returned any.
    pub fn first_period(&self) -> Option<&ForecastPeriod> {
        self.properties.periods.first()
    }
}

/// Treats an explicit JSON `null` like a missing field.
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Response body served to callers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimplifiedForecast {
    pub perception: String,
    pub temperature: i32,
    #[serde(rename = "shortForecast")]
    pub short_forecast: String,
}

impl SimplifiedForecast {
    pub fn from_period(period: &ForecastPeriod) -> Self {
        Self {
            perception: temperature_perception(period.temperature).to_string(),
            temperature: period.temperature,
            short_forecast: period.short_forecast.clone(),
        }
    }
}

/// Summarise the first period of a forecast. `None` when there are no periods.
pub fn summarize(forecast: &ForecastResponse) -> Option<SimplifiedForecast> {
    forecast.first_period().map(SimplifiedForecast::from_period)
}
