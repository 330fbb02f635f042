//! Dashboard traits.
//!
//! `DashboardProviderTrait` is the seam where a real backend would plug in:
//! one method per conceptual endpoint. Every method may fail; the dashboard
//! service treats any failure as "use the local fallback" rather than
//! surfacing it.

use async_trait::async_trait;

use crate::analysis::CreditAnalysis;
use crate::dashboard::model::DashboardSnapshot;
use crate::errors::Result;
use crate::expenses::ExpenseBreakdown;
use crate::forecast::ForecastResponse;
use crate::profile::CreditProfile;

/// Data source for the dashboard payloads.
#[async_trait]
pub trait DashboardProviderTrait: Send + Sync {
    /// Fetches the user's credit profile.
    async fn fetch_profile(&self) -> Result<CreditProfile>;

    /// Fetches the baseline forecast and scenario catalog for a score.
    async fn fetch_forecast(&self, current_score: i32) -> Result<ForecastResponse>;

    /// Fetches the credit factor analysis for a profile.
    async fn fetch_analysis(&self, profile: &CreditProfile) -> Result<CreditAnalysis>;

    /// Fetches the expense breakdown.
    async fn fetch_expenses(&self) -> Result<ExpenseBreakdown>;
}

/// Trait for dashboard service operations.
#[async_trait]
pub trait DashboardServiceTrait: Send + Sync {
    /// Assembles the dashboard snapshot under the named scenario.
    ///
    /// Never fails: provider errors degrade to locally generated data and
    /// unknown scenario names fall back to the baseline.
    async fn snapshot(&self, scenario_name: &str) -> DashboardSnapshot;

    /// Returns the most recently assembled snapshot, if any.
    async fn cached_snapshot(&self) -> Option<DashboardSnapshot>;
}
