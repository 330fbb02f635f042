//! Financial health module - key profile metrics with status and trend.

mod model;
mod service;

pub use model::{HealthMetric, HealthOverview, MetricStatus, Trend};
pub use service::HealthService;
