//! Forecast module - score projection with confidence bands and
//! what-if scenario adjustment.

mod engine;
mod errors;
mod model;

pub use engine::ForecastService;
pub use errors::ForecastError;
pub use model::{
    ConfidenceBand, Forecast, ForecastConfig, ForecastResponse, Scenario, ScenarioCatalog,
    ScorePoint,
};
