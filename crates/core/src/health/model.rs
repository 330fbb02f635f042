//! Financial health domain models.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

// =============================================================================
// Metric Status
// =============================================================================

/// Status of a health metric against its thresholds.
///
/// Ratio metrics where lower is better (debt-to-income, utilization) degrade
/// to `High`; coverage metrics (payment history, credit mix) degrade to
/// `Poor`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MetricStatus {
    Excellent,
    Good,
    High,
    Poor,
}

impl MetricStatus {
    /// Returns a human-friendly label for this status.
    pub fn label(&self) -> &'static str {
        match self {
            MetricStatus::Excellent => "Excellent",
            MetricStatus::Good => "Good",
            MetricStatus::High => "High",
            MetricStatus::Poor => "Poor",
        }
    }

    /// True when the metric needs the user's attention.
    pub fn needs_attention(&self) -> bool {
        matches!(self, MetricStatus::High | MetricStatus::Poor)
    }
}

impl std::fmt::Display for MetricStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

// =============================================================================
// Trend
// =============================================================================

/// Direction a metric is pushing the score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Trend {
    Up,
    Down,
}

// =============================================================================
// Health Metric
// =============================================================================

/// One key metric of the financial health overview.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct HealthMetric {
    /// Metric title (e.g. "Credit Utilization")
    pub title: String,

    /// Formatted current value (e.g. "35%")
    pub value: String,

    /// Threshold status
    pub status: MetricStatus,

    /// Whether the metric currently helps or hurts the score
    pub trend: Trend,

    /// Short guidance line shown under the metric
    pub description: String,
}

// =============================================================================
// Health Overview
// =============================================================================

/// The financial health overview: metric cards plus headline summary values.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct HealthOverview {
    pub metrics: Vec<HealthMetric>,
    pub monthly_income: Decimal,
    pub total_debt: Decimal,
    pub credit_age_years: f64,
}

impl HealthOverview {
    /// Looks up a metric by title.
    pub fn metric(&self, title: &str) -> Option<&HealthMetric> {
        self.metrics.iter().find(|m| m.title == title)
    }

    /// Number of metrics needing attention.
    pub fn attention_count(&self) -> usize {
        self.metrics
            .iter()
            .filter(|m| m.status.needs_attention())
            .count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_labels() {
        assert_eq!(MetricStatus::Excellent.label(), "Excellent");
        assert_eq!(MetricStatus::High.label(), "High");
        assert!(MetricStatus::High.needs_attention());
        assert!(MetricStatus::Poor.needs_attention());
        assert!(!MetricStatus::Good.needs_attention());
    }

    #[test]
    fn test_status_serialization() {
        assert_eq!(
            serde_json::to_string(&MetricStatus::Excellent).unwrap(),
            "\"EXCELLENT\""
        );
        assert_eq!(serde_json::to_string(&Trend::Up).unwrap(), "\"UP\"");
    }
}
