//! Expense analysis domain models.

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

// =============================================================================
// Expense Trend
// =============================================================================

/// Month-over-month movement of a spending category.
///
/// Serialized lowercase to match the expense payload shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExpenseTrend {
    Up,
    Down,
    Stable,
}

// =============================================================================
// Expense Category
// =============================================================================

/// One spending category with its share of the monthly total.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ExpenseCategory {
    /// Category name (e.g. "Food & Dining")
    pub name: String,

    /// Amount spent this month
    pub amount: Decimal,

    /// Share of the monthly total, in whole percent (derived from amounts)
    pub percentage: u8,

    /// Display color token for the category
    pub color: String,

    /// Month-over-month movement
    pub trend: ExpenseTrend,

    /// Movement magnitude in percent (signed)
    pub trend_value: i32,
}

/// Total spending for one month of the trailing window.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct MonthlyExpense {
    pub month: String,
    pub amount: Decimal,
}

// =============================================================================
// Expense Breakdown
// =============================================================================

/// The expense analysis payload: category shares plus the monthly series.
///
/// `total` is the sum of the category amounts and category percentages are
/// derived from it, so the parts always reconcile.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ExpenseBreakdown {
    pub categories: Vec<ExpenseCategory>,
    pub monthly: Vec<MonthlyExpense>,
    pub total: Decimal,
}

impl ExpenseBreakdown {
    /// Average spending per month over the trailing window.
    pub fn monthly_average(&self) -> Decimal {
        if self.monthly.is_empty() {
            return Decimal::ZERO;
        }
        let sum: Decimal = self.monthly.iter().map(|m| m.amount).sum();
        (sum / Decimal::from(self.monthly.len())).round_dp(2)
    }

    /// The category with the highest spend, if any.
    pub fn largest_category(&self) -> Option<&ExpenseCategory> {
        self.categories.iter().max_by_key(|c| c.amount)
    }

    /// Sum of the category percentage shares.
    pub fn percentage_total(&self) -> u32 {
        self.categories
            .iter()
            .map(|c| u32::from(c.percentage))
            .sum()
    }
}

/// Derives a whole-percent share of `amount` against `total`.
pub(crate) fn percentage_of(amount: Decimal, total: Decimal) -> u8 {
    if total.is_zero() {
        return 0;
    }
    (amount / total * Decimal::ONE_HUNDRED)
        .round()
        .to_u8()
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_trend_serialization() {
        assert_eq!(serde_json::to_string(&ExpenseTrend::Up).unwrap(), "\"up\"");
        assert_eq!(
            serde_json::to_string(&ExpenseTrend::Stable).unwrap(),
            "\"stable\""
        );
    }

    #[test]
    fn test_percentage_of() {
        assert_eq!(percentage_of(dec!(1250), dec!(4440)), 28);
        assert_eq!(percentage_of(dec!(1100), dec!(4440)), 25);
        assert_eq!(percentage_of(dec!(0), dec!(4440)), 0);
        assert_eq!(percentage_of(dec!(10), dec!(0)), 0);
    }

    #[test]
    fn test_monthly_average() {
        let breakdown = ExpenseBreakdown {
            categories: vec![],
            monthly: vec![
                MonthlyExpense {
                    month: "Jan".to_string(),
                    amount: dec!(4000),
                },
                MonthlyExpense {
                    month: "Feb".to_string(),
                    amount: dec!(5000),
                },
            ],
            total: Decimal::ZERO,
        };
        assert_eq!(breakdown.monthly_average(), dec!(4500));

        let empty = ExpenseBreakdown {
            categories: vec![],
            monthly: vec![],
            total: Decimal::ZERO,
        };
        assert_eq!(empty.monthly_average(), Decimal::ZERO);
    }
}
