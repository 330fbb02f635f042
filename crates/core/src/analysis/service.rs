//! Credit analysis service.
//!
//! Derives the weighted factor breakdown and improvement suggestions from a
//! credit profile. All rules are simple threshold comparisons; the factor
//! weights mirror the standard scoring model weighting.

use log::debug;

use crate::analysis::model::{CreditAnalysis, CreditFactor, FactorImpact, Suggestion};
use crate::profile::CreditProfile;

/// Service deriving credit factors and suggestions from a profile.
pub struct AnalysisService;

impl AnalysisService {
    pub fn new() -> Self {
        Self
    }

    /// Analyzes a profile into factors and suggestions.
    pub fn evaluate(&self, profile: &CreditProfile) -> CreditAnalysis {
        let factors = self.evaluate_factors(profile);
        let suggestions = self.build_suggestions(profile);
        debug!(
            "Credit analysis produced {} factors and {} suggestions",
            factors.len(),
            suggestions.len()
        );
        CreditAnalysis::new(factors, suggestions)
    }

    /// Scores each factor against its thresholds.
    fn evaluate_factors(&self, profile: &CreditProfile) -> Vec<CreditFactor> {
        vec![
            CreditFactor {
                name: "Payment History".to_string(),
                impact: impact_when_high(profile.payment_history, 95.0, 85.0),
                weight: 35,
                description: "Your track record of making payments on time".to_string(),
                current_value: format!("{}%", profile.payment_history),
                ideal_value: "100%".to_string(),
            },
            CreditFactor {
                name: "Credit Utilization".to_string(),
                impact: impact_when_low(profile.credit_utilization, 10.0, 30.0),
                weight: 30,
                description: "Percentage of available credit you're using".to_string(),
                current_value: format!("{}%", profile.credit_utilization),
                ideal_value: "< 10%".to_string(),
            },
            CreditFactor {
                name: "Credit Age".to_string(),
                impact: impact_when_high(profile.credit_age, 10.0, 5.0),
                weight: 15,
                description: "Average age of your credit accounts".to_string(),
                current_value: format!("{} years", profile.credit_age),
                ideal_value: "> 10 years".to_string(),
            },
            CreditFactor {
                name: "Credit Mix".to_string(),
                impact: impact_when_high(profile.credit_mix, 80.0, 60.0),
                weight: 10,
                description: "Variety of credit types you manage".to_string(),
                current_value: format!("{}%", profile.credit_mix),
                ideal_value: "> 80%".to_string(),
            },
            CreditFactor {
                name: "Debt-to-Income".to_string(),
                impact: impact_when_low(profile.debt_to_income_ratio, 20.0, 35.0),
                weight: 10,
                description: "Monthly debt payments relative to income".to_string(),
                current_value: format!("{}%", profile.debt_to_income_ratio),
                ideal_value: "< 20%".to_string(),
            },
        ]
    }

    /// Emits suggestions for every threshold the profile misses, plus the
    /// standing recommendation to monitor credit reports.
    fn build_suggestions(&self, profile: &CreditProfile) -> Vec<Suggestion> {
        let mut suggestions = Vec::new();

        if profile.credit_utilization > 30.0 {
            suggestions.push(Suggestion::reduce_utilization());
        }
        if profile.payment_history < 95.0 {
            suggestions.push(Suggestion::improve_payment_history());
        }
        if profile.debt_to_income_ratio > 35.0 {
            suggestions.push(Suggestion::lower_debt_to_income());
        }
        if profile.credit_mix < 70.0 {
            suggestions.push(Suggestion::diversify_credit_mix());
        }

        suggestions.push(Suggestion::monitor_credit_reports());
        suggestions
    }
}

impl Default for AnalysisService {
    fn default() -> Self {
        Self::new()
    }
}

/// Positive when the value reaches `positive_min`, neutral at `neutral_min`.
fn impact_when_high(value: f64, positive_min: f64, neutral_min: f64) -> FactorImpact {
    if value >= positive_min {
        FactorImpact::Positive
    } else if value >= neutral_min {
        FactorImpact::Neutral
    } else {
        FactorImpact::Negative
    }
}

/// Positive when the value stays at or below `positive_max`, neutral up to
/// `neutral_max`.
fn impact_when_low(value: f64, positive_max: f64, neutral_max: f64) -> FactorImpact {
    if value <= positive_max {
        FactorImpact::Positive
    } else if value <= neutral_max {
        FactorImpact::Neutral
    } else {
        FactorImpact::Negative
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::model::SuggestionImpact;

    #[test]
    fn test_demo_profile_factors() {
        let analysis = AnalysisService::new().evaluate(&CreditProfile::demo());

        let impact_of = |name: &str| {
            analysis
                .factors
                .iter()
                .find(|f| f.name == name)
                .map(|f| f.impact)
                .unwrap()
        };
        assert_eq!(impact_of("Payment History"), FactorImpact::Positive);
        assert_eq!(impact_of("Credit Utilization"), FactorImpact::Negative);
        assert_eq!(impact_of("Credit Age"), FactorImpact::Neutral);
        assert_eq!(impact_of("Credit Mix"), FactorImpact::Positive);
        assert_eq!(impact_of("Debt-to-Income"), FactorImpact::Neutral);
    }

    #[test]
    fn test_factor_weights_sum_to_100() {
        let analysis = AnalysisService::new().evaluate(&CreditProfile::demo());
        let total: u32 = analysis.factors.iter().map(|f| u32::from(f.weight)).sum();
        assert_eq!(total, 100);
    }

    #[test]
    fn test_factor_values_are_formatted() {
        let analysis = AnalysisService::new().evaluate(&CreditProfile::demo());
        let factor = |name: &str| analysis.factors.iter().find(|f| f.name == name).unwrap();
        assert_eq!(factor("Payment History").current_value, "98%");
        assert_eq!(factor("Credit Age").current_value, "7.5 years");
    }

    #[test]
    fn test_demo_profile_suggestions() {
        let analysis = AnalysisService::new().evaluate(&CreditProfile::demo());
        let titles: Vec<&str> = analysis.suggestions.iter().map(|s| s.title.as_str()).collect();
        // Utilization at 35% trips the threshold; everything else is in range.
        assert_eq!(
            titles,
            vec!["Reduce Credit Utilization", "Monitor Credit Reports"]
        );
    }

    #[test]
    fn test_struggling_profile_gets_all_suggestions() {
        let mut profile = CreditProfile::demo();
        profile.credit_utilization = 60.0;
        profile.payment_history = 80.0;
        profile.debt_to_income_ratio = 45.0;
        profile.credit_mix = 50.0;

        let analysis = AnalysisService::new().evaluate(&profile);
        assert_eq!(analysis.suggestions.len(), 5);
        let high_impact = analysis
            .suggestions
            .iter()
            .filter(|s| s.impact == SuggestionImpact::High)
            .count();
        assert_eq!(high_impact, 2);
    }

    #[test]
    fn test_monitor_reports_always_present() {
        let analysis = AnalysisService::new().evaluate(&CreditProfile::demo());
        assert!(analysis
            .suggestions
            .iter()
            .any(|s| s.title == "Monitor Credit Reports"));
    }

    #[test]
    fn test_worst_factor_for_demo_profile() {
        let analysis = AnalysisService::new().evaluate(&CreditProfile::demo());
        assert_eq!(
            analysis.worst_factor().map(|f| f.name.as_str()),
            Some("Credit Utilization")
        );
    }
}
