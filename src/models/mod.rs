//! Row and projection types shared by the query layer and the HTTP surface.

pub mod measurement;
pub mod station;

pub use measurement::{DailyPrecipitation, DailyTemperatureStats, TemperatureObservation};
pub use station::{Station, StationActivity};
