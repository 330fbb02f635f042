//! Score classification models.
//!
//! Maps a raw credit score onto the rating bands the dashboard displays
//! and derives the headline summary (rating, month-over-month change,
//! gauge fill fraction).

use serde::{Deserialize, Serialize};

use crate::constants::SCORE_MAX;

// Rating band floors: Excellent >= 750, Good >= 700, Fair >= 650.
const EXCELLENT_MIN: i32 = 750;
const GOOD_MIN: i32 = 700;
const FAIR_MIN: i32 = 650;

/// Assumed score delta when the previous month's score is unknown.
const DEFAULT_MONTHLY_DELTA: i32 = 12;

// =============================================================================
// Score Rating
// =============================================================================

/// Rating bands for a credit score.
///
/// Ordered from lowest to highest: Poor < Fair < Good < Excellent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ScoreRating {
    Poor,
    Fair,
    Good,
    Excellent,
}

impl ScoreRating {
    /// Classifies a score into its rating band.
    pub fn from_score(score: i32) -> Self {
        if score >= EXCELLENT_MIN {
            ScoreRating::Excellent
        } else if score >= GOOD_MIN {
            ScoreRating::Good
        } else if score >= FAIR_MIN {
            ScoreRating::Fair
        } else {
            ScoreRating::Poor
        }
    }

    /// Returns the string representation of this rating.
    pub fn as_str(&self) -> &'static str {
        match self {
            ScoreRating::Poor => "POOR",
            ScoreRating::Fair => "FAIR",
            ScoreRating::Good => "GOOD",
            ScoreRating::Excellent => "EXCELLENT",
        }
    }

    /// Returns a human-friendly label for this rating.
    pub fn label(&self) -> &'static str {
        match self {
            ScoreRating::Poor => "Poor",
            ScoreRating::Fair => "Fair",
            ScoreRating::Good => "Good",
            ScoreRating::Excellent => "Excellent",
        }
    }
}

impl std::fmt::Display for ScoreRating {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

// =============================================================================
// Score Summary
// =============================================================================

/// Headline score summary shown at the top of the dashboard.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ScoreSummary {
    /// Current credit score
    pub score: i32,

    /// Score one month ago
    pub previous_score: i32,

    /// Month-over-month change (`score - previous_score`)
    pub change: i32,

    /// Rating band for the current score
    pub rating: ScoreRating,

    /// Fill fraction of the score gauge (0.0 to 1.0, against the 850 maximum)
    pub gauge_fraction: f64,
}

impl ScoreSummary {
    /// Builds a summary from the current score and an optional previous score.
    ///
    /// When the previous score is unknown a fixed delta is assumed, matching
    /// the dashboard's display default.
    pub fn new(score: i32, previous_score: Option<i32>) -> Self {
        let previous_score = previous_score.unwrap_or(score - DEFAULT_MONTHLY_DELTA);
        Self {
            score,
            previous_score,
            change: score - previous_score,
            rating: ScoreRating::from_score(score),
            gauge_fraction: f64::from(score) / f64::from(SCORE_MAX),
        }
    }

    /// True when the score improved since last month.
    pub fn is_improving(&self) -> bool {
        self.change > 0
    }
}
