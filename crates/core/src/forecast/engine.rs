//! Forecast engine.
//!
//! Generates baseline score projections over the fixed monthly horizon and
//! applies scenario adjustments. Every operation is pure: forecasts are
//! computed fresh from their inputs, never cached or mutated, so concurrent
//! calls are fully independent.

use log::warn;

use crate::constants::{FORECAST_MONTH_LABELS, SCORE_MAX, SCORE_MIN};
use crate::forecast::errors::ForecastError;
use crate::forecast::model::{
    ConfidenceBand, Forecast, ForecastConfig, ForecastResponse, Scenario, ScenarioCatalog,
    ScorePoint,
};

/// Clamps a score onto the credit score scale.
fn clamp_score(score: i32) -> i32 {
    score.clamp(SCORE_MIN, SCORE_MAX)
}

/// The forecast engine: baseline projection plus scenario adjustment.
///
/// Holds the growth/variance configuration and the active scenario catalog;
/// it carries no other state.
pub struct ForecastService {
    config: ForecastConfig,
    catalog: ScenarioCatalog,
}

impl ForecastService {
    /// Creates an engine with the default configuration and catalog.
    pub fn new() -> Self {
        Self {
            config: ForecastConfig::default(),
            catalog: ScenarioCatalog::default_catalog(),
        }
    }

    /// Creates an engine with custom configuration and catalog.
    pub fn with_config(config: ForecastConfig, catalog: ScenarioCatalog) -> Self {
        Self { config, catalog }
    }

    /// The active scenario catalog.
    pub fn catalog(&self) -> &ScenarioCatalog {
        &self.catalog
    }

    /// The scenarios available for selection, in catalog order.
    pub fn scenarios(&self) -> &[Scenario] {
        self.catalog.scenarios()
    }

    /// Generates the baseline forecast for the given current score.
    ///
    /// Out-of-range scores are clamped onto the scale rather than rejected;
    /// a degraded input still produces a usable forecast.
    pub fn generate_baseline(&self, current_score: i32) -> Forecast {
        let score = clamp_score(current_score);
        if score != current_score {
            warn!(
                "Current score {} outside {}-{}, clamped to {}",
                current_score, SCORE_MIN, SCORE_MAX, score
            );
        }

        let points = FORECAST_MONTH_LABELS
            .iter()
            .zip(self.config.growth_deltas.iter())
            .enumerate()
            .map(|(index, (month, delta))| {
                let predicted = if index == 0 {
                    score
                } else {
                    clamp_score(score + delta)
                };
                ScorePoint {
                    month: (*month).to_string(),
                    actual: (index == 0).then_some(score),
                    predicted,
                    confidence: self.band(predicted),
                }
            })
            .collect();

        Forecast::from_points(points)
    }

    /// Applies a scenario to a forecast, returning the adjusted forecast.
    ///
    /// The "Current" point is never modified, so the actual score is stable
    /// under every scenario. Fails if the scenario is not a member of the
    /// active catalog.
    pub fn apply_scenario(
        &self,
        forecast: &Forecast,
        scenario: &Scenario,
    ) -> Result<Forecast, ForecastError> {
        if !self.catalog.contains(scenario) {
            return Err(ForecastError::UnknownScenario(scenario.name.clone()));
        }
        Ok(self.shifted(forecast, scenario))
    }

    /// Computes the forecast for a score under a scenario selected by name.
    ///
    /// Unknown names fall back to the baseline scenario instead of failing,
    /// matching the dashboard's degrade-to-default behavior.
    pub fn forecast_for(&self, current_score: i32, scenario_name: &str) -> Forecast {
        let scenario = match self.catalog.get(scenario_name) {
            Some(scenario) => scenario,
            None => {
                warn!(
                    "Unknown scenario '{}', falling back to '{}'",
                    scenario_name,
                    self.catalog.baseline().name
                );
                self.catalog.baseline()
            }
        };
        let baseline = self.generate_baseline(current_score);
        self.shifted(&baseline, scenario)
    }

    /// Builds the full forecast payload for the given score: the baseline
    /// projection plus the scenario catalog.
    pub fn baseline_response(&self, current_score: i32) -> ForecastResponse {
        ForecastResponse {
            forecast: self.generate_baseline(current_score),
            scenarios: self.catalog.scenarios().to_vec(),
        }
    }

    /// Confidence band around a predicted score: half-width is 5% of the
    /// prediction with a 10-point floor, clamped onto the scale.
    fn band(&self, predicted: i32) -> ConfidenceBand {
        let variance =
            (f64::from(predicted) * self.config.variance_ratio).max(self.config.variance_floor);
        let lower = ((f64::from(predicted) - variance).round() as i32).max(SCORE_MIN);
        let upper = ((f64::from(predicted) + variance).round() as i32).min(SCORE_MAX);
        ConfidenceBand { lower, upper }
    }

    /// Shifts every non-current point by the scenario impact. The band moves
    /// by the same delta and stays ordered around the clamped prediction.
    fn shifted(&self, forecast: &Forecast, scenario: &Scenario) -> Forecast {
        let points = forecast
            .points()
            .iter()
            .enumerate()
            .map(|(index, point)| {
                if index == 0 {
                    return point.clone();
                }
                let predicted = clamp_score(point.predicted + scenario.impact);
                let lower = (point.confidence.lower + scenario.impact)
                    .max(SCORE_MIN)
                    .min(predicted);
                let upper = (point.confidence.upper + scenario.impact)
                    .min(SCORE_MAX)
                    .max(predicted);
                ScorePoint {
                    month: point.month.clone(),
                    actual: point.actual,
                    predicted,
                    confidence: ConfidenceBand { lower, upper },
                }
            })
            .collect();

        Forecast::from_points(points)
    }
}

impl Default for ForecastService {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::BASELINE_SCENARIO;

    fn engine() -> ForecastService {
        ForecastService::new()
    }

    #[test]
    fn test_baseline_has_full_horizon() {
        let forecast = engine().generate_baseline(742);
        let months: Vec<&str> = forecast.points().iter().map(|p| p.month.as_str()).collect();
        assert_eq!(months, FORECAST_MONTH_LABELS);
    }

    #[test]
    fn test_baseline_current_point() {
        let forecast = engine().generate_baseline(742);
        let current = &forecast.points()[0];
        assert_eq!(current.predicted, 742);
        assert_eq!(current.actual, Some(742));
        // The band uses the same variance formula as projected months:
        // 742 * 0.05 = 37.1, rounded outward to [705, 779].
        assert_eq!(current.confidence, ConfidenceBand { lower: 705, upper: 779 });
    }

    #[test]
    fn test_baseline_projection_values() {
        let forecast = engine().generate_baseline(742);
        let predicted: Vec<i32> = forecast.points().iter().map(|p| p.predicted).collect();
        assert_eq!(predicted, vec![742, 747, 750, 754, 757, 760, 762]);
        assert_eq!(forecast.final_score(), 762);
        assert_eq!(forecast.total_change(), 20);
    }

    #[test]
    fn test_baseline_clamps_high_scores() {
        let forecast = engine().generate_baseline(840);
        let last = &forecast.points()[6];
        // Raw projection would be 860; prediction and band clamp to scale.
        assert_eq!(last.predicted, 850);
        assert_eq!(last.confidence.upper, 850);
        assert_eq!(last.confidence.lower, 808);
    }

    #[test]
    fn test_baseline_clamps_out_of_range_input() {
        let forecast = engine().generate_baseline(900);
        assert_eq!(forecast.current_score(), 850);

        let forecast = engine().generate_baseline(100);
        assert_eq!(forecast.current_score(), 300);
    }

    #[test]
    fn test_apply_scenario_shifts_projected_months() {
        let service = engine();
        let baseline = service.generate_baseline(742);
        let improved = service.catalog().get("improved").unwrap().clone();

        let adjusted = service.apply_scenario(&baseline, &improved).unwrap();
        assert_eq!(adjusted.final_score(), 777);
        for (base, shifted) in baseline.points().iter().zip(adjusted.points()).skip(1) {
            assert_eq!(shifted.predicted, base.predicted + 15);
            assert_eq!(shifted.confidence.lower, base.confidence.lower + 15);
            assert_eq!(shifted.confidence.upper, base.confidence.upper + 15);
        }
    }

    #[test]
    fn test_apply_scenario_never_touches_current_point() {
        let service = engine();
        let baseline = service.generate_baseline(742);
        for scenario in service.scenarios() {
            let adjusted = service.apply_scenario(&baseline, scenario).unwrap();
            assert_eq!(adjusted.points()[0], baseline.points()[0]);
            assert_eq!(adjusted.current_score(), 742);
        }
    }

    #[test]
    fn test_apply_baseline_scenario_is_identity() {
        let service = engine();
        let baseline = service.generate_baseline(680);
        let adjusted = service
            .apply_scenario(&baseline, &service.catalog().baseline().clone())
            .unwrap();
        assert_eq!(adjusted, baseline);
    }

    #[test]
    fn test_apply_scenario_rejects_foreign_scenario() {
        let service = engine();
        let baseline = service.generate_baseline(742);
        let foreign = Scenario::new("windfall", "Unexpected inheritance", 50, "#8b5cf6");
        let result = service.apply_scenario(&baseline, &foreign);
        assert_eq!(
            result,
            Err(ForecastError::UnknownScenario("windfall".to_string()))
        );
    }

    #[test]
    fn test_apply_then_revert_restores_projection() {
        let catalog = ScenarioCatalog::new(vec![
            Scenario::new(BASELINE_SCENARIO, "steady", 0, "#3b82f6"),
            Scenario::new("up", "better habits", 15, "#10b981"),
            Scenario::new("down", "revert", -15, "#ef4444"),
        ])
        .unwrap();
        let service = ForecastService::with_config(ForecastConfig::default(), catalog);

        // Mid-range score: no clamp engages, so the shift is exactly undone.
        let baseline = service.generate_baseline(600);
        let up = service.catalog().get("up").unwrap().clone();
        let down = service.catalog().get("down").unwrap().clone();
        let shifted = service.apply_scenario(&baseline, &up).unwrap();
        let restored = service.apply_scenario(&shifted, &down).unwrap();
        assert_eq!(restored, baseline);
    }

    #[test]
    fn test_forecast_for_falls_back_to_baseline() {
        let service = engine();
        let baseline = service.generate_baseline(742);
        let fallback = service.forecast_for(742, "windfall");
        assert_eq!(fallback, baseline);

        let improved = service.forecast_for(742, "improved");
        assert_eq!(improved.final_score(), 777);
    }

    #[test]
    fn test_scenario_shift_keeps_band_ordered_at_scale_edges() {
        let service = engine();
        let aggressive = service.catalog().get("aggressive").unwrap().clone();
        let declined = service.catalog().get("declined").unwrap().clone();

        for score in [300, 320, 820, 850] {
            let baseline = service.generate_baseline(score);
            for scenario in [&aggressive, &declined] {
                let adjusted = service.apply_scenario(&baseline, scenario).unwrap();
                for point in adjusted.points() {
                    assert!(point.confidence.lower >= SCORE_MIN);
                    assert!(point.confidence.upper <= SCORE_MAX);
                    assert!(point.confidence.lower <= point.predicted);
                    assert!(point.predicted <= point.confidence.upper);
                }
            }
        }
    }

    #[test]
    fn test_baseline_response_payload() {
        let service = engine();
        let response = service.baseline_response(742);
        assert_eq!(response.forecast.current_score(), 742);
        assert_eq!(response.scenarios.len(), 4);
        assert_eq!(response.scenarios[0].name, BASELINE_SCENARIO);
    }
}
