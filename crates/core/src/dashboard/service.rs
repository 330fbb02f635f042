//! Dashboard service implementation.
//!
//! `DashboardService` gathers the payloads through a provider and assembles
//! the snapshot. Scenario adjustment is always computed by the local
//! forecast engine - the service is the explicit call site that recomputes
//! the forecast whenever the score or the selected scenario changes.

use async_trait::async_trait;
use chrono::{DateTime, Duration, Utc};
use log::{debug, info, warn};
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::analysis::{AnalysisService, CreditAnalysis};
use crate::constants::SNAPSHOT_STALE_MINUTES;
use crate::dashboard::model::DashboardSnapshot;
use crate::dashboard::traits::{DashboardProviderTrait, DashboardServiceTrait};
use crate::errors::Result;
use crate::expenses::{ExpenseBreakdown, ExpenseService};
use crate::forecast::{ForecastResponse, ForecastService};
use crate::health::HealthService;
use crate::profile::CreditProfile;
use crate::score::ScoreSummary;

// =============================================================================
// Local provider
// =============================================================================

/// The always-available data provider backed by local generation.
///
/// Its payloads are shape-identical to what a backend would return, so the
/// rest of the system cannot tell which path supplied the data.
pub struct LocalDataProvider {
    forecast: ForecastService,
    analysis: AnalysisService,
    expenses: ExpenseService,
}

impl LocalDataProvider {
    pub fn new() -> Self {
        Self {
            forecast: ForecastService::new(),
            analysis: AnalysisService::new(),
            expenses: ExpenseService::new(),
        }
    }
}

impl Default for LocalDataProvider {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl DashboardProviderTrait for LocalDataProvider {
    async fn fetch_profile(&self) -> Result<CreditProfile> {
        Ok(CreditProfile::demo())
    }

    async fn fetch_forecast(&self, current_score: i32) -> Result<ForecastResponse> {
        Ok(self.forecast.baseline_response(current_score))
    }

    async fn fetch_analysis(&self, profile: &CreditProfile) -> Result<CreditAnalysis> {
        Ok(self.analysis.evaluate(profile))
    }

    async fn fetch_expenses(&self) -> Result<ExpenseBreakdown> {
        Ok(self.expenses.demo_breakdown())
    }
}

// =============================================================================
// Dashboard service
// =============================================================================

/// Cache entry for an assembled snapshot.
struct CachedSnapshot {
    snapshot: DashboardSnapshot,
    cached_at: DateTime<Utc>,
}

/// Service assembling the dashboard snapshot.
pub struct DashboardService {
    provider: Arc<dyn DashboardProviderTrait>,

    /// Local engines used both for derived payloads and as fallbacks
    forecast: ForecastService,
    analysis: AnalysisService,
    health: HealthService,
    expenses: ExpenseService,

    /// Most recent snapshot, reused while fresh
    cached: RwLock<Option<CachedSnapshot>>,
}

impl DashboardService {
    /// Creates a dashboard service over the given provider.
    pub fn new(provider: Arc<dyn DashboardProviderTrait>) -> Self {
        Self {
            provider,
            forecast: ForecastService::new(),
            analysis: AnalysisService::new(),
            health: HealthService::new(),
            expenses: ExpenseService::new(),
            cached: RwLock::new(None),
        }
    }

    /// Creates a dashboard service backed entirely by local generation.
    pub fn local() -> Self {
        Self::new(Arc::new(LocalDataProvider::new()))
    }

    /// Assembles the snapshot for the named scenario.
    pub async fn snapshot(&self, scenario_name: &str) -> DashboardSnapshot {
        if let Some(snapshot) = self.fresh_cached(scenario_name).await {
            debug!("Serving cached dashboard snapshot for '{}'", scenario_name);
            return snapshot;
        }

        let profile = match self.provider.fetch_profile().await {
            Ok(profile) => profile,
            Err(err) => {
                warn!("Profile fetch failed ({err}), falling back to demo profile");
                CreditProfile::demo()
            }
        };
        let current_score = profile.credit_score;

        let baseline = match self.provider.fetch_forecast(current_score).await {
            Ok(response) => response,
            Err(err) => {
                warn!("Forecast fetch failed ({err}), generating locally");
                self.forecast.baseline_response(current_score)
            }
        };

        // The adjusted forecast is always recomputed by the local engine;
        // unknown names fall back to the baseline scenario inside.
        let adjusted = self.forecast.forecast_for(current_score, scenario_name);
        let final_score = adjusted.final_score();
        let total_change = adjusted.total_change();

        let analysis = match self.provider.fetch_analysis(&profile).await {
            Ok(analysis) => analysis,
            Err(err) => {
                warn!("Analysis fetch failed ({err}), evaluating locally");
                self.analysis.evaluate(&profile)
            }
        };

        let expenses = match self.provider.fetch_expenses().await {
            Ok(expenses) => expenses,
            Err(err) => {
                warn!("Expense fetch failed ({err}), using local breakdown");
                self.expenses.demo_breakdown()
            }
        };

        let snapshot = DashboardSnapshot {
            score: ScoreSummary::new(current_score, None),
            health: self.health.evaluate(&profile),
            analysis,
            forecast: ForecastResponse {
                forecast: adjusted,
                scenarios: baseline.scenarios,
            },
            selected_scenario: scenario_name.to_string(),
            final_score,
            total_change,
            expenses,
            profile,
            generated_at: Utc::now(),
        };

        info!(
            "Assembled dashboard snapshot: score {} -> {} under '{}'",
            current_score, final_score, scenario_name
        );

        *self.cached.write().await = Some(CachedSnapshot {
            snapshot: snapshot.clone(),
            cached_at: Utc::now(),
        });

        snapshot
    }

    /// Returns the cached snapshot when it is fresh and matches the scenario.
    async fn fresh_cached(&self, scenario_name: &str) -> Option<DashboardSnapshot> {
        let cache = self.cached.read().await;
        let entry = cache.as_ref()?;
        let fresh = Utc::now() - entry.cached_at < Duration::minutes(SNAPSHOT_STALE_MINUTES);
        if fresh && entry.snapshot.selected_scenario == scenario_name {
            Some(entry.snapshot.clone())
        } else {
            None
        }
    }
}

#[async_trait]
impl DashboardServiceTrait for DashboardService {
    async fn snapshot(&self, scenario_name: &str) -> DashboardSnapshot {
        DashboardService::snapshot(self, scenario_name).await
    }

    async fn cached_snapshot(&self) -> Option<DashboardSnapshot> {
        self.cached
            .read()
            .await
            .as_ref()
            .map(|entry| entry.snapshot.clone())
    }
}
