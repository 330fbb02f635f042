/// Lowest score on the credit score scale
pub const SCORE_MIN: i32 = 300;

/// Highest score on the credit score scale
pub const SCORE_MAX: i32 = 850;

/// Number of projected months in a forecast (excluding the current point)
pub const FORECAST_HORIZON_MONTHS: usize = 6;

/// Month labels for the forecast horizon, current point first
pub const FORECAST_MONTH_LABELS: [&str; FORECAST_HORIZON_MONTHS + 1] =
    ["Current", "Jan", "Feb", "Mar", "Apr", "May", "Jun"];

/// Name of the baseline scenario every catalog must contain
pub const BASELINE_SCENARIO: &str = "baseline";

/// Minutes after which a cached dashboard snapshot is considered stale
pub const SNAPSHOT_STALE_MINUTES: i64 = 5;
