//! Credit profile domain model.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::constants::{SCORE_MAX, SCORE_MIN};
use crate::errors::{Result, ValidationError};

/// A user's credit profile as supplied by the dashboard data source.
///
/// Field names serialize to the exact payload shape the dashboard consumes,
/// so locally generated data is indistinguishable from a backend response.
/// Ratio fields (`debt_to_income_ratio`, `credit_utilization`,
/// `payment_history`, `credit_mix`) are percentages in `[0, 100]`;
/// `credit_age` is in years.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CreditProfile {
    pub credit_score: i32,
    pub debt_to_income_ratio: f64,
    pub credit_utilization: f64,
    pub monthly_income: Decimal,
    pub total_debt: Decimal,
    pub payment_history: f64,
    pub credit_age: f64,
    pub credit_mix: f64,
}

impl CreditProfile {
    /// Returns the built-in demo profile.
    ///
    /// This is the local fallback used whenever no backend supplies a
    /// profile; the values mirror the canonical demo dataset.
    pub fn demo() -> Self {
        Self {
            credit_score: 742,
            debt_to_income_ratio: 28.0,
            credit_utilization: 35.0,
            monthly_income: dec!(6500),
            total_debt: dec!(18200),
            payment_history: 98.0,
            credit_age: 7.5,
            credit_mix: 85.0,
        }
    }

    /// Validates the profile strictly.
    ///
    /// The forecast path clamps out-of-range scores instead of failing;
    /// this method is for callers that want to reject bad provider data
    /// up front.
    pub fn validate(&self) -> Result<()> {
        if self.credit_score < SCORE_MIN || self.credit_score > SCORE_MAX {
            return Err(ValidationError::ScoreOutOfRange(self.credit_score).into());
        }
        for (field, value) in [
            ("debtToIncomeRatio", self.debt_to_income_ratio),
            ("creditUtilization", self.credit_utilization),
            ("paymentHistory", self.payment_history),
            ("creditMix", self.credit_mix),
        ] {
            if !(0.0..=100.0).contains(&value) {
                return Err(ValidationError::PercentageOutOfRange {
                    field: field.to_string(),
                    value,
                }
                .into());
            }
        }
        Ok(())
    }
}
