//! Credit analysis domain models.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// =============================================================================
// Factor Impact
// =============================================================================

/// How a factor currently affects the credit score.
///
/// Serialized lowercase to match the analysis payload shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FactorImpact {
    Negative,
    Neutral,
    Positive,
}

impl FactorImpact {
    pub fn as_str(&self) -> &'static str {
        match self {
            FactorImpact::Negative => "negative",
            FactorImpact::Neutral => "neutral",
            FactorImpact::Positive => "positive",
        }
    }
}

// =============================================================================
// Credit Factor
// =============================================================================

/// A weighted component of the credit score with its current standing.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CreditFactor {
    /// Factor name (e.g. "Payment History")
    pub name: String,

    /// Current effect on the score
    pub impact: FactorImpact,

    /// Scoring weight in percent (all factors sum to 100)
    pub weight: u8,

    /// Short explanation of the factor
    pub description: String,

    /// Formatted current value (e.g. "98%", "7.5 years")
    pub current_value: String,

    /// Formatted target value (e.g. "< 10%")
    pub ideal_value: String,
}

// =============================================================================
// Suggestion
// =============================================================================

/// Expected payoff of following a suggestion.
///
/// Ordered from lowest to highest: Low < Medium < High.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SuggestionImpact {
    Low,
    Medium,
    High,
}

/// An actionable improvement suggestion derived from the profile.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Suggestion {
    pub title: String,
    pub description: String,
    pub impact: SuggestionImpact,
    pub timeframe: String,
    pub actionable: bool,
}

impl Suggestion {
    fn new(
        title: &str,
        description: &str,
        impact: SuggestionImpact,
        timeframe: &str,
    ) -> Self {
        Self {
            title: title.to_string(),
            description: description.to_string(),
            impact,
            timeframe: timeframe.to_string(),
            actionable: true,
        }
    }

    /// Suggestion for profiles with high credit utilization.
    pub fn reduce_utilization() -> Self {
        Self::new(
            "Reduce Credit Utilization",
            "Pay down existing balances or request credit limit increases to lower your utilization ratio.",
            SuggestionImpact::High,
            "1-2 months",
        )
    }

    /// Suggestion for profiles with missed or late payments.
    pub fn improve_payment_history() -> Self {
        Self::new(
            "Improve Payment History",
            "Set up automatic payments to ensure all bills are paid on time every month.",
            SuggestionImpact::High,
            "3-6 months",
        )
    }

    /// Suggestion for profiles with a high debt-to-income ratio.
    pub fn lower_debt_to_income() -> Self {
        Self::new(
            "Lower Debt-to-Income Ratio",
            "Focus on paying down high-interest debt or consider debt consolidation options.",
            SuggestionImpact::Medium,
            "6-12 months",
        )
    }

    /// Suggestion for profiles with a narrow mix of credit types.
    pub fn diversify_credit_mix() -> Self {
        Self::new(
            "Diversify Credit Mix",
            "Consider adding different types of credit accounts (installment loans, credit cards) responsibly.",
            SuggestionImpact::Low,
            "3-6 months",
        )
    }

    /// General suggestion included in every analysis.
    pub fn monitor_credit_reports() -> Self {
        Self::new(
            "Monitor Credit Reports",
            "Check all three credit reports regularly for errors and dispute any inaccuracies you find.",
            SuggestionImpact::Medium,
            "Ongoing",
        )
    }
}

// =============================================================================
// Credit Analysis
// =============================================================================

/// The full analysis payload: weighted factors plus derived suggestions.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CreditAnalysis {
    pub factors: Vec<CreditFactor>,
    pub suggestions: Vec<Suggestion>,
    pub generated_at: DateTime<Utc>,
}

impl CreditAnalysis {
    /// Creates an analysis from its parts, stamped with the current time.
    pub fn new(factors: Vec<CreditFactor>, suggestions: Vec<Suggestion>) -> Self {
        Self {
            factors,
            suggestions,
            generated_at: Utc::now(),
        }
    }

    /// Returns factors filtered by impact.
    pub fn factors_by_impact(&self, impact: FactorImpact) -> Vec<&CreditFactor> {
        self.factors.iter().filter(|f| f.impact == impact).collect()
    }

    /// The negative factor with the highest scoring weight, if any.
    pub fn worst_factor(&self) -> Option<&CreditFactor> {
        self.factors
            .iter()
            .filter(|f| f.impact == FactorImpact::Negative)
            .max_by_key(|f| f.weight)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_impact_serialization() {
        assert_eq!(
            serde_json::to_string(&FactorImpact::Positive).unwrap(),
            "\"positive\""
        );
        assert_eq!(
            serde_json::to_string(&SuggestionImpact::High).unwrap(),
            "\"high\""
        );
    }

    #[test]
    fn test_suggestion_impact_ordering() {
        assert!(SuggestionImpact::Low < SuggestionImpact::Medium);
        assert!(SuggestionImpact::Medium < SuggestionImpact::High);
    }

    #[test]
    fn test_canned_suggestions_are_actionable() {
        for suggestion in [
            Suggestion::reduce_utilization(),
            Suggestion::improve_payment_history(),
            Suggestion::lower_debt_to_income(),
            Suggestion::diversify_credit_mix(),
            Suggestion::monitor_credit_reports(),
        ] {
            assert!(suggestion.actionable);
            assert!(!suggestion.title.is_empty());
        }
    }

    #[test]
    fn test_worst_factor_picks_highest_weight_negative() {
        let factor = |name: &str, impact, weight| CreditFactor {
            name: name.to_string(),
            impact,
            weight,
            description: String::new(),
            current_value: String::new(),
            ideal_value: String::new(),
        };
        let analysis = CreditAnalysis::new(
            vec![
                factor("Payment History", FactorImpact::Positive, 35),
                factor("Credit Utilization", FactorImpact::Negative, 30),
                factor("Debt-to-Income", FactorImpact::Negative, 10),
            ],
            vec![],
        );
        assert_eq!(analysis.worst_factor().map(|f| f.name.as_str()), Some("Credit Utilization"));
        assert_eq!(analysis.factors_by_impact(FactorImpact::Negative).len(), 2);
    }
}
