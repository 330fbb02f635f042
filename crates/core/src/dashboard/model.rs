//! Dashboard payload model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::analysis::CreditAnalysis;
use crate::expenses::ExpenseBreakdown;
use crate::forecast::ForecastResponse;
use crate::health::HealthOverview;
use crate::profile::CreditProfile;
use crate::score::ScoreSummary;

/// The fully assembled dashboard payload.
///
/// Everything the UI renders in one place: the profile, the derived
/// overviews, and the scenario-adjusted forecast with its headline numbers.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DashboardSnapshot {
    /// The underlying credit profile
    pub profile: CreditProfile,

    /// Headline score summary (rating, change, gauge)
    pub score: ScoreSummary,

    /// Financial health metric cards
    pub health: HealthOverview,

    /// Credit factor analysis and suggestions
    pub analysis: CreditAnalysis,

    /// Scenario-adjusted forecast plus the available scenarios
    pub forecast: ForecastResponse,

    /// Name of the scenario the forecast reflects
    pub selected_scenario: String,

    /// Predicted score at the end of the horizon
    pub final_score: i32,

    /// `final_score` minus the current score
    pub total_change: i32,

    /// Expense breakdown
    pub expenses: ExpenseBreakdown,

    /// When this snapshot was assembled
    pub generated_at: DateTime<Utc>,
}
