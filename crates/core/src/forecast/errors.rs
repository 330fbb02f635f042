//! Forecast error types.

use thiserror::Error;

/// Errors specific to forecast operations.
///
/// Note that the name-keyed dashboard path never surfaces
/// `UnknownScenario`: it falls back to the baseline scenario instead.
/// The error is returned by the strict `apply_scenario` API.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ForecastError {
    /// A scenario was passed that is not part of the active catalog.
    #[error("Scenario '{0}' is not part of the active catalog")]
    UnknownScenario(String),

    /// A scenario catalog failed validation at construction.
    #[error("Invalid scenario catalog: {0}")]
    InvalidCatalog(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = ForecastError::UnknownScenario("windfall".to_string());
        assert_eq!(
            err.to_string(),
            "Scenario 'windfall' is not part of the active catalog"
        );

        let err = ForecastError::InvalidCatalog("missing baseline".to_string());
        assert_eq!(err.to_string(), "Invalid scenario catalog: missing baseline");
    }
}
