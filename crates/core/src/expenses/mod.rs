//! Expense analysis module - category breakdown and monthly spending.

mod model;
mod service;

pub use model::{ExpenseBreakdown, ExpenseCategory, ExpenseTrend, MonthlyExpense};
pub use service::ExpenseService;
