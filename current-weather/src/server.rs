use std::sync::Arc;

use anyhow::Context;
use axum::{
    Json, Router,
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
};
use current_weather_core::{
    Config, Coordinate, ForecastError, ForecastProvider, SimplifiedForecast, summarize,
};
use log::{debug, error, info, warn};
use thiserror::Error;
use tokio::net::TcpListener;

pub const LATITUDE_KEYWORD: &str = "lat";
pub const LONGITUDE_KEYWORD: &str = "long";

// Anything that goes in here must be a handle or pointer that can be cloned.
#[derive(Clone)]
pub struct AppState {
    pub provider: Arc<dyn ForecastProvider>,
}

#[derive(Debug, Error)]
pub enum AppError {
    #[error("invalid latitude {0}")]
    InvalidLatitude(String),

    #[error("invalid longitude {0}")]
    InvalidLongitude(String),

    #[error("getting forecast: {0}")]
    Forecast(#[from] ForecastError),

    #[error("no forecast data")]
    NoForecastData,
}

impl AppError {
    fn status(&self) -> StatusCode {
        match self {
            AppError::InvalidLatitude(_) | AppError::InvalidLongitude(_) => StatusCode::BAD_REQUEST,
            AppError::Forecast(_) | AppError::NoForecastData => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        if matches!(&self, AppError::Forecast(e) if e.is_decode()) {
            error!("Forecast provider sent a body we could not decode: {self}");
        } else if status.is_server_error() {
            error!("Error encountered while processing request: {self}");
        } else {
            warn!("Rejected request: {self}");
        }
        (status, self.to_string()).into_response()
    }
}

pub fn routes(provider: Arc<dyn ForecastProvider>) -> Router {
    Router::new()
        .route("/", get(get_current_weather))
        .with_state(AppState { provider })
}

/// Bind to `config.listen_addr` and serve until ctrl-c.
pub async fn serve(config: &Config, provider: Arc<dyn ForecastProvider>) -> anyhow::Result<()> {
    let listener = TcpListener::bind(config.listen_addr)
        .await
        .with_context(|| format!("Failed to bind {}", config.listen_addr))?;

    info!("listening on {}", listener.local_addr()?);
    info!("forecasts from {}", config.base_url());

    axum::serve(listener, routes(provider))
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("HTTP server failed")?;

    info!("server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        error!("failed to listen for ctrl-c: {e}");
        return;
    }
    info!("shutting down");
}

async fn get_current_weather(
    State(state): State<AppState>,
    Query(params): Query<Vec<(String, String)>>,
) -> Result<Json<SimplifiedForecast>, AppError> {
    let coordinate = parse_coordinate(&params)?;
    debug!("forecast requested for {coordinate}");

    let forecast = state.provider.get_forecast(coordinate).await?;
    let summary = summarize(&forecast).ok_or(AppError::NoForecastData)?;

    Ok(Json(summary))
}

/// First value given for `key`, or the empty string.
fn query_value<'a>(params: &'a [(String, String)], key: &str) -> &'a str {
    params
        .iter()
        .find(|(k, _)| k == key)
        .map(|(_, v)| v.as_str())
        .unwrap_or_default()
}

fn parse_coordinate(params: &[(String, String)]) -> Result<Coordinate, AppError> {
    let raw_lat = query_value(params, LATITUDE_KEYWORD);
    let latitude: f64 =
        raw_lat.parse().map_err(|_| AppError::InvalidLatitude(raw_lat.to_string()))?;

    let raw_long = query_value(params, LONGITUDE_KEYWORD);
    let longitude: f64 =
        raw_long.parse().map_err(|_| AppError::InvalidLongitude(raw_long.to_string()))?;

    Ok(Coordinate::new(latitude, longitude))
}
