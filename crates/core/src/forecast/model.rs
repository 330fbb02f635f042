//! Forecast domain models.
//!
//! This module contains the data structures for score forecasting:
//! - Score points with confidence bands over the fixed monthly horizon
//! - Named what-if scenarios and the validated scenario catalog
//! - Forecast configuration (growth curve and variance parameters)

use serde::{Deserialize, Serialize};

use crate::constants::{BASELINE_SCENARIO, FORECAST_MONTH_LABELS, SCORE_MIN};
use crate::forecast::errors::ForecastError;

// =============================================================================
// Score Point
// =============================================================================

/// The `[lower, upper]` interval expressing forecast uncertainty around a
/// predicted score. Both bounds lie within the credit score scale.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ConfidenceBand {
    pub lower: i32,
    pub upper: i32,
}

impl ConfidenceBand {
    /// Band width in points.
    pub fn width(&self) -> i32 {
        self.upper - self.lower
    }
}

/// One point of a score forecast.
///
/// `actual` is only set for the "Current" point; projected months carry a
/// prediction and its confidence band. Invariant:
/// `300 <= lower <= predicted <= upper <= 850`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ScorePoint {
    /// Month label ("Current", "Jan" .. "Jun")
    pub month: String,

    /// Observed score, set only for the current point
    #[serde(skip_serializing_if = "Option::is_none")]
    pub actual: Option<i32>,

    /// Projected score for this month
    pub predicted: i32,

    /// Confidence interval around the prediction
    pub confidence: ConfidenceBand,
}

// =============================================================================
// Forecast
// =============================================================================

/// An immutable score forecast over the fixed 7-point horizon.
///
/// The first point is always the current month with the actual score; the
/// remaining six points are projections. Forecasts are computed fresh from
/// their inputs and never mutated in place - scenario adjustment returns a
/// new value.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(transparent)]
pub struct Forecast {
    points: Vec<ScorePoint>,
}

impl Forecast {
    pub(crate) fn from_points(points: Vec<ScorePoint>) -> Self {
        Self { points }
    }

    /// The forecast points in horizon order.
    pub fn points(&self) -> &[ScorePoint] {
        &self.points
    }

    /// The current (observed) score the forecast starts from.
    pub fn current_score(&self) -> i32 {
        self.points
            .first()
            .map(|p| p.actual.unwrap_or(p.predicted))
            .unwrap_or(SCORE_MIN)
    }

    /// The headline predicted score: the last point of the horizon ("Jun").
    pub fn final_score(&self) -> i32 {
        self.points
            .last()
            .map(|p| p.predicted)
            .unwrap_or_else(|| self.current_score())
    }

    /// Total projected change over the horizon.
    pub fn total_change(&self) -> i32 {
        self.final_score() - self.current_score()
    }
}

// =============================================================================
// Scenario
// =============================================================================

/// A named what-if adjustment applied to a baseline forecast.
///
/// The impact is an additive point delta applied to every non-current month.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Scenario {
    /// Unique identifier within the catalog (e.g. "improved")
    pub name: String,

    /// Short description shown on the scenario selector
    pub description: String,

    /// Additive point delta applied to projected months
    pub impact: i32,

    /// Display color token for the scenario's chart line
    pub color: String,
}

impl Scenario {
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        impact: i32,
        color: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            impact,
            color: color.into(),
        }
    }

    /// True for the zero-impact baseline scenario.
    pub fn is_baseline(&self) -> bool {
        self.name == BASELINE_SCENARIO && self.impact == 0
    }
}

// =============================================================================
// Scenario Catalog
// =============================================================================

/// The validated, ordered set of scenarios available to a forecast.
///
/// Invariants enforced at construction: the catalog is non-empty, scenario
/// names are unique, and the first entry is the single baseline scenario
/// with zero impact.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScenarioCatalog {
    scenarios: Vec<Scenario>,
}

impl ScenarioCatalog {
    /// Builds a catalog from the given scenarios, validating its invariants.
    pub fn new(scenarios: Vec<Scenario>) -> Result<Self, ForecastError> {
        if scenarios.is_empty() {
            return Err(ForecastError::InvalidCatalog(
                "catalog must not be empty".to_string(),
            ));
        }
        if !scenarios[0].is_baseline() {
            return Err(ForecastError::InvalidCatalog(format!(
                "first scenario must be '{}' with zero impact",
                BASELINE_SCENARIO
            )));
        }
        let baseline_count = scenarios.iter().filter(|s| s.is_baseline()).count();
        if baseline_count != 1 {
            return Err(ForecastError::InvalidCatalog(format!(
                "expected exactly one baseline scenario, found {}",
                baseline_count
            )));
        }
        let mut seen = std::collections::HashSet::new();
        for scenario in &scenarios {
            if !seen.insert(scenario.name.as_str()) {
                return Err(ForecastError::InvalidCatalog(format!(
                    "duplicate scenario name '{}'",
                    scenario.name
                )));
            }
        }
        Ok(Self { scenarios })
    }

    /// The built-in catalog shipped with the dashboard.
    pub fn default_catalog() -> Self {
        // Constructed directly: the entries below satisfy the invariants.
        Self {
            scenarios: vec![
                Scenario::new(
                    BASELINE_SCENARIO,
                    "Current financial habits continue",
                    0,
                    "#3b82f6",
                ),
                Scenario::new("improved", "Following improvement suggestions", 15, "#10b981"),
                Scenario::new(
                    "aggressive",
                    "Major debt paydown and credit optimization",
                    35,
                    "#059669",
                ),
                Scenario::new("declined", "Missed payments or increased debt", -25, "#ef4444"),
            ],
        }
    }

    /// Looks up a scenario by name.
    pub fn get(&self, name: &str) -> Option<&Scenario> {
        self.scenarios.iter().find(|s| s.name == name)
    }

    /// The baseline scenario.
    pub fn baseline(&self) -> &Scenario {
        // The catalog is validated non-empty with the baseline first.
        &self.scenarios[0]
    }

    /// True when the exact scenario (name and impact) is in the catalog.
    pub fn contains(&self, scenario: &Scenario) -> bool {
        self.get(&scenario.name) == Some(scenario)
    }

    /// All scenarios in catalog order.
    pub fn scenarios(&self) -> &[Scenario] {
        &self.scenarios
    }
}

impl Default for ScenarioCatalog {
    fn default() -> Self {
        Self::default_catalog()
    }
}

// =============================================================================
// Forecast Config
// =============================================================================

/// Configuration for forecast generation.
///
/// The growth curve and variance parameters are product assumptions, not
/// algorithmic invariants, so they are kept adjustable here.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ForecastConfig {
    /// Additive growth applied to the current score per horizon month.
    /// Index 0 is the current point and must be zero.
    pub growth_deltas: [i32; FORECAST_MONTH_LABELS.len()],

    /// Band half-width as a fraction of the predicted score (default: 0.05)
    pub variance_ratio: f64,

    /// Minimum band half-width in points (default: 10)
    pub variance_floor: f64,
}

impl Default for ForecastConfig {
    fn default() -> Self {
        Self {
            growth_deltas: [0, 5, 8, 12, 15, 18, 20],
            variance_ratio: 0.05,
            variance_floor: 10.0,
        }
    }
}

// =============================================================================
// Forecast Response
// =============================================================================

/// The forecast payload handed to the dashboard: the baseline projection
/// plus the scenario catalog to choose from.
///
/// This is the shape a forecast backend would return for
/// `{ currentScore }`; the local fallback produces it identically.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ForecastResponse {
    pub forecast: Forecast,
    pub scenarios: Vec<Scenario>,
}
