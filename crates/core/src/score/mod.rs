//! Score classification module - rating bands and headline summary.

mod model;

pub use model::{ScoreRating, ScoreSummary};
