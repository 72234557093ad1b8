//! Core library for the `current-weather` service.
//!
//! This crate defines:
//! - Configuration handling
//! - The forecast provider abstraction and its NWS implementation
//! - Shared domain models (coordinates, forecast periods, summaries)
//! - Temperature perception labels
//!
//! It is used by the `current-weather` binary, but can also be reused by other binaries or services.

pub mod config;
pub mod error;
pub mod model;
pub mod perception;
pub mod provider;

pub use config::Config;
pub use error::ForecastError;
pub use model::{
    Coordinate, ForecastPeriod, ForecastProperties, ForecastResponse, SimplifiedForecast,
    summarize,
};
pub use perception::temperature_perception;
pub use provider::{ForecastProvider, nws::NwsProvider, provider_from_config};
