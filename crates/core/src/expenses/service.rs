//! Expense analysis service.
//!
//! Builds the expense breakdown from the demo spending dataset. Only the
//! raw category amounts and the monthly series are stored; the total and
//! per-category shares are derived so the payload is internally consistent.

use log::debug;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::expenses::model::{
    percentage_of, ExpenseBreakdown, ExpenseCategory, ExpenseTrend, MonthlyExpense,
};

/// Raw category row of the demo dataset.
struct CategoryRow {
    name: &'static str,
    amount: Decimal,
    color: &'static str,
    trend: ExpenseTrend,
    trend_value: i32,
}

/// Service producing the expense analysis payload.
pub struct ExpenseService;

impl ExpenseService {
    pub fn new() -> Self {
        Self
    }

    /// Returns the demo expense breakdown.
    ///
    /// This is the local fallback for the expenses endpoint; a backend
    /// response deserializes into the same `ExpenseBreakdown` shape.
    pub fn demo_breakdown(&self) -> ExpenseBreakdown {
        let rows = [
            CategoryRow {
                name: "Shopping",
                amount: dec!(1250),
                color: "#3b82f6",
                trend: ExpenseTrend::Up,
                trend_value: 15,
            },
            CategoryRow {
                name: "Transportation",
                amount: dec!(890),
                color: "#10b981",
                trend: ExpenseTrend::Down,
                trend_value: -8,
            },
            CategoryRow {
                name: "Housing",
                amount: dec!(1100),
                color: "#f59e0b",
                trend: ExpenseTrend::Stable,
                trend_value: 2,
            },
            CategoryRow {
                name: "Food & Dining",
                amount: dec!(680),
                color: "#ef4444",
                trend: ExpenseTrend::Up,
                trend_value: 12,
            },
            CategoryRow {
                name: "Entertainment",
                amount: dec!(340),
                color: "#8b5cf6",
                trend: ExpenseTrend::Down,
                trend_value: -5,
            },
            CategoryRow {
                name: "Other",
                amount: dec!(180),
                color: "#6b7280",
                trend: ExpenseTrend::Stable,
                trend_value: 1,
            },
        ];

        let total: Decimal = rows.iter().map(|row| row.amount).sum();
        let categories = rows
            .iter()
            .map(|row| ExpenseCategory {
                name: row.name.to_string(),
                amount: row.amount,
                percentage: percentage_of(row.amount, total),
                color: row.color.to_string(),
                trend: row.trend,
                trend_value: row.trend_value,
            })
            .collect();

        let monthly = [
            ("Jan", dec!(4200)),
            ("Feb", dec!(3800)),
            ("Mar", dec!(4100)),
            ("Apr", dec!(4400)),
            ("May", dec!(4600)),
            ("Jun", dec!(4440)),
        ]
        .into_iter()
        .map(|(month, amount)| MonthlyExpense {
            month: month.to_string(),
            amount,
        })
        .collect();

        let breakdown = ExpenseBreakdown {
            categories,
            monthly,
            total,
        };
        debug!(
            "Expense breakdown: {} categories totaling {}",
            breakdown.categories.len(),
            breakdown.total
        );
        breakdown
    }
}

impl Default for ExpenseService {
    fn default() -> Self {
        Self::new()
    }
}
