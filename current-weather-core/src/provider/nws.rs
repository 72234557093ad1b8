//! National Weather Service (api.weather.gov) forecast provider.
//!
//! A forecast takes two requests: `/points/{lat},{long}` names the gridpoint
//! forecast resource, which is then fetched as-is.

use async_trait::async_trait;
use log::debug;
use reqwest::{Client, Response};
use serde::Deserialize;

use crate::{Config, Coordinate, ForecastError, ForecastResponse, model::null_as_default};

use super::ForecastProvider;

#[derive(Debug, Clone)]
pub struct NwsProvider {
    base_url: String,
    http: Client,
}

impl NwsProvider {
    pub fn new(config: &Config) -> Result<Self, ForecastError> {
        let http = Client::builder()
            .timeout(config.request_timeout())
            .user_agent(config.user_agent.as_str())
            .build()
            .map_err(ForecastError::Client)?;

        Ok(Self { base_url: config.base_url().to_string(), http })
    }

    async fn get(&self, url: &str) -> Result<Response, reqwest::Error> {
        debug!("GET {url}");
        self.http.get(url).send().await
    }
}

#[derive(Debug, Default, Deserialize)]
struct PointsProperties {
    #[serde(alias = "Forecast", default, deserialize_with = "null_as_default")]
    forecast: String,
}

#[derive(Debug, Deserialize)]
struct PointsResponse {
    #[serde(default, deserialize_with = "null_as_default")]
    properties: PointsProperties,
}

#[async_trait]
impl ForecastProvider for NwsProvider {
    async fn resolve_forecast_location(
        &self,
        coordinate: Coordinate,
    ) -> Result<String, ForecastError> {
        let url = format!("{}/points/{}", self.base_url, coordinate);

        let request_failed = |source| ForecastError::Request { url: url.clone(), source };

        let res = self.get(&url).await.map_err(request_failed)?;
        let status = res.status();
        if !status.is_success() {
            return Err(ForecastError::Status { url, status });
        }

        let body = res.text().await.map_err(request_failed)?;
        let parsed: PointsResponse =
            serde_json::from_str(&body).map_err(ForecastError::DecodePoints)?;

        let location = parsed.properties.forecast;
        if location.is_empty() {
            return Err(ForecastError::MissingForecastLocation { url });
        }

        debug!("{coordinate} resolved to {location}");
        Ok(location)
    }

    async fn get_forecast(&self, coordinate: Coordinate) -> Result<ForecastResponse, ForecastError> {
        let location = self
            .resolve_forecast_location(coordinate)
            .await
            .map_err(|e| ForecastError::Gridpoint(Box::new(e)))?;

        // Only the points call is status-checked; an error page here surfaces as a decode failure.
        let request_failed =
            |source| ForecastError::ForecastRequest { url: location.clone(), source };

        let res = self.get(&location).await.map_err(request_failed)?;
        let body = res.text().await.map_err(request_failed)?;

        let forecast: ForecastResponse =
            serde_json::from_str(&body).map_err(ForecastError::DecodeForecast)?;

        debug!("{} forecast periods from {location}", forecast.properties.periods.len());
        if let Some(first) = forecast.first_period() {
            match (first.start_time, first.end_time) {
                (Some(start), Some(end)) => debug!(
                    "first period \"{}\" runs {start} to {end}, daytime: {:?}",
                    first.name, first.is_daytime
                ),
                _ => debug!("first period \"{}\" has no time window", first.name),
            }
        }
        Ok(forecast)
    }
}
