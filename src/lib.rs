//! Hawaii Climate - read-only JSON API over the Hawaii climate
//! observation dataset.
//!
//! This library provides the HTTP surface, the query layer and the
//! database bootstrap for serving date-stamped precipitation and
//! temperature readings per weather station.

pub mod api;
pub mod config;
pub mod db;
pub mod error;
pub mod models;
pub mod queries;
pub mod server;

// Re-export core types for public API
pub use config::ClimateConfig;
pub use error::ClimateError;
pub use models::{
    DailyPrecipitation, DailyTemperatureStats, Station, StationActivity, TemperatureObservation,
};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Core result type used throughout the library
pub type Result<T> = std::result::Result<T, ClimateError>;
