//! CreditSight Core - Domain entities, services, and traits.
//!
//! This crate contains the domain logic for the CreditSight dashboard:
//! score classification, credit factor analysis, financial health metrics,
//! expense breakdowns, and the score forecasting engine with scenario
//! adjustment. All data sources are mock/local; the provider traits define
//! where a real backend would plug in.

pub mod analysis;
pub mod constants;
pub mod dashboard;
pub mod errors;
pub mod expenses;
pub mod forecast;
pub mod health;
pub mod profile;
pub mod score;

// Re-export the forecast engine types, which form the primary API surface
pub use forecast::*;

// Re-export error types
pub use errors::Error;
pub use errors::Result;
