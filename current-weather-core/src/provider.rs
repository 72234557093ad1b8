use crate::{Config, Coordinate, ForecastError, ForecastResponse, provider::nws::NwsProvider};
use async_trait::async_trait;
use std::{fmt::Debug, sync::Arc};

pub mod nws;

/// Something that can turn a coordinate into forecast data.
#[async_trait]
pub trait ForecastProvider: Send + Sync + Debug {
    /// Look up the location of the forecast resource covering `coordinate`.
    async fn resolve_forecast_location(
        &self,
        coordinate: Coordinate,
    ) -> Result<String, ForecastError>;

    /// Resolve the forecast location, then fetch and decode the forecast from it.
    async fn get_forecast(&self, coordinate: Coordinate) -> Result<ForecastResponse, ForecastError>;
}

/// Construct the provider described by `config`.
pub fn provider_from_config(config: &Config) -> Result<Arc<dyn ForecastProvider>, ForecastError> {
    let provider = NwsProvider::new(config)?;
    Ok(Arc::new(provider))
}
