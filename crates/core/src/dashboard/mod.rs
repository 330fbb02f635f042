//! Dashboard module - provider seam and snapshot assembly.
//!
//! This is the boundary the UI layer talks to: it fetches data through the
//! provider trait and degrades to locally generated payloads whenever a
//! provider path fails, so consumers never see an error state.

mod model;
mod service;
mod traits;

pub use model::DashboardSnapshot;
pub use service::{DashboardService, LocalDataProvider};
pub use traits::{DashboardProviderTrait, DashboardServiceTrait};
