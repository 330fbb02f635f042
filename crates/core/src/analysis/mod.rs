//! Credit analysis module - weighted score factors and improvement
//! suggestions derived from a credit profile.

mod model;
mod service;

pub use model::{CreditAnalysis, CreditFactor, FactorImpact, Suggestion, SuggestionImpact};
pub use service::AnalysisService;
