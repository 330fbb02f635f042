//! Credit profile module - the input data every other module derives from.

mod model;

pub use model::CreditProfile;
