//! Financial health service.
//!
//! Evaluates the four key profile metrics against their thresholds. Ratio
//! metrics (debt-to-income, utilization) are judged directly; coverage
//! metrics (payment history, credit mix) are judged on their shortfall from
//! 100%.

use log::debug;

use crate::health::model::{HealthMetric, HealthOverview, MetricStatus, Trend};
use crate::profile::CreditProfile;

/// Service deriving the financial health overview from a profile.
pub struct HealthService;

impl HealthService {
    pub fn new() -> Self {
        Self
    }

    /// Evaluates all health metrics for the given profile.
    pub fn evaluate(&self, profile: &CreditProfile) -> HealthOverview {
        let metrics = vec![
            HealthMetric {
                title: "Debt-to-Income Ratio".to_string(),
                value: format!("{}%", profile.debt_to_income_ratio),
                status: grade(profile.debt_to_income_ratio, 20.0, 35.0, MetricStatus::High),
                trend: trend_when(profile.debt_to_income_ratio <= 20.0),
                description: "Lower is better for creditworthiness".to_string(),
            },
            HealthMetric {
                title: "Credit Utilization".to_string(),
                value: format!("{}%", profile.credit_utilization),
                status: grade(profile.credit_utilization, 10.0, 30.0, MetricStatus::High),
                trend: trend_when(profile.credit_utilization <= 10.0),
                description: "Keep below 30% for optimal scores".to_string(),
            },
            HealthMetric {
                title: "Payment History".to_string(),
                value: format!("{}%", profile.payment_history),
                status: grade(100.0 - profile.payment_history, 5.0, 15.0, MetricStatus::Poor),
                trend: trend_when(profile.payment_history >= 95.0),
                description: "Most important factor for credit score".to_string(),
            },
            HealthMetric {
                title: "Credit Mix Score".to_string(),
                value: format!("{}%", profile.credit_mix),
                status: grade(100.0 - profile.credit_mix, 10.0, 30.0, MetricStatus::Poor),
                trend: trend_when(profile.credit_mix >= 80.0),
                description: "Variety of credit types helps".to_string(),
            },
        ];

        let overview = HealthOverview {
            metrics,
            monthly_income: profile.monthly_income,
            total_debt: profile.total_debt,
            credit_age_years: profile.credit_age,
        };
        debug!(
            "Health overview: {} of {} metrics need attention",
            overview.attention_count(),
            overview.metrics.len()
        );
        overview
    }
}

impl Default for HealthService {
    fn default() -> Self {
        Self::new()
    }
}

/// Grades a lower-is-better value: excellent up to the first threshold, good
/// up to the second, otherwise the metric's worst status.
fn grade(value: f64, excellent_max: f64, good_max: f64, worst: MetricStatus) -> MetricStatus {
    if value <= excellent_max {
        MetricStatus::Excellent
    } else if value <= good_max {
        MetricStatus::Good
    } else {
        worst
    }
}

fn trend_when(helping: bool) -> Trend {
    if helping {
        Trend::Up
    } else {
        Trend::Down
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_demo_profile_metrics() {
        let overview = HealthService::new().evaluate(&CreditProfile::demo());
        assert_eq!(overview.metrics.len(), 4);

        let status_of = |title: &str| overview.metric(title).map(|m| m.status).unwrap();
        assert_eq!(status_of("Debt-to-Income Ratio"), MetricStatus::Good);
        assert_eq!(status_of("Credit Utilization"), MetricStatus::High);
        assert_eq!(status_of("Payment History"), MetricStatus::Excellent);
        assert_eq!(status_of("Credit Mix Score"), MetricStatus::Good);
    }

    #[test]
    fn test_demo_profile_trends() {
        let overview = HealthService::new().evaluate(&CreditProfile::demo());
        let trend_of = |title: &str| overview.metric(title).map(|m| m.trend).unwrap();
        assert_eq!(trend_of("Debt-to-Income Ratio"), Trend::Down);
        assert_eq!(trend_of("Credit Utilization"), Trend::Down);
        assert_eq!(trend_of("Payment History"), Trend::Up);
        assert_eq!(trend_of("Credit Mix Score"), Trend::Up);
    }

    #[test]
    fn test_summary_values_come_from_profile() {
        let overview = HealthService::new().evaluate(&CreditProfile::demo());
        assert_eq!(overview.monthly_income, dec!(6500));
        assert_eq!(overview.total_debt, dec!(18200));
        assert!((overview.credit_age_years - 7.5).abs() < f64::EPSILON);
    }

    #[test]
    fn test_attention_count_for_demo_profile() {
        let overview = HealthService::new().evaluate(&CreditProfile::demo());
        // Only utilization (35%) is out of range for the demo profile.
        assert_eq!(overview.attention_count(), 1);
    }

    #[test]
    fn test_coverage_metrics_degrade_to_poor() {
        let mut profile = CreditProfile::demo();
        profile.payment_history = 70.0;
        profile.credit_mix = 40.0;

        let overview = HealthService::new().evaluate(&profile);
        assert_eq!(
            overview.metric("Payment History").map(|m| m.status),
            Some(MetricStatus::Poor)
        );
        assert_eq!(
            overview.metric("Credit Mix Score").map(|m| m.status),
            Some(MetricStatus::Poor)
        );
    }
}
