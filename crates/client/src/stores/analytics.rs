//! Analytics store.
//!
//! Read-only projections for the dashboard. Nothing here is ever mutated
//! locally; each fetch replaces the previous snapshot wholesale.

use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use tracing::error;

use kasira_core::{AnalyticsSummary, DailySalesPoint};

use crate::api::ApiClient;

const SUMMARY_PATH: &str = "/analytics/summary";
const DAILY_SALES_PATH: &str = "/analytics/daily-sales";

#[derive(Default)]
struct AnalyticsState {
    summary: AnalyticsSummary,
    daily_sales: Vec<DailySalesPoint>,
}

/// Cache of the dashboard projections.
#[derive(Clone)]
pub struct AnalyticsStore {
    inner: Arc<AnalyticsStoreInner>,
}

struct AnalyticsStoreInner {
    api: ApiClient,
    state: RwLock<AnalyticsState>,
}

impl AnalyticsStore {
    #[must_use]
    pub fn new(api: ApiClient) -> Self {
        Self {
            inner: Arc::new(AnalyticsStoreInner {
                api,
                state: RwLock::new(AnalyticsState::default()),
            }),
        }
    }

    /// Snapshot of the aggregate figures.
    #[must_use]
    pub fn summary(&self) -> AnalyticsSummary {
        self.state().summary.clone()
    }

    /// Snapshot of the per-day sales series.
    #[must_use]
    pub fn daily_sales(&self) -> Vec<DailySalesPoint> {
        self.state().daily_sales.clone()
    }

    /// Refresh the aggregate figures. Failures are logged only.
    pub async fn fetch_summary(&self) {
        match self.inner.api.get::<AnalyticsSummary>(SUMMARY_PATH).await {
            Ok(summary) => self.state_mut().summary = summary,
            Err(err) => error!("failed to fetch analytics summary: {err}"),
        }
    }

    /// Refresh the per-day sales series. Failures are logged only.
    pub async fn fetch_daily_sales(&self) {
        match self
            .inner
            .api
            .get::<Vec<DailySalesPoint>>(DAILY_SALES_PATH)
            .await
        {
            Ok(points) => self.state_mut().daily_sales = points,
            Err(err) => error!("failed to fetch daily sales: {err}"),
        }
    }

    fn state(&self) -> RwLockReadGuard<'_, AnalyticsState> {
        self.inner.state.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn state_mut(&self) -> RwLockWriteGuard<'_, AnalyticsState> {
        self.inner.state.write().unwrap_or_else(PoisonError::into_inner)
    }
}
