//! Dashboard analytics commands.

use kasira_client::AppState;
use kasira_client::router::Route;

use super::{CliError, ensure_route};

/// Show the aggregate figures.
pub async fn summary(state: &AppState) -> Result<(), CliError> {
    ensure_route(state, Route::Dashboard)?;

    let analytics = state.analytics();
    analytics.fetch_summary().await;

    let summary = analytics.summary();
    tracing::info!("Revenue:      {}", summary.total_revenue);
    tracing::info!("Transactions: {}", summary.transaction_count);
    tracing::info!("Products:     {}", summary.product_count);
    tracing::info!("Low stock:    {}", summary.low_stock_count);
    Ok(())
}

/// Show the per-day sales series.
pub async fn daily(state: &AppState) -> Result<(), CliError> {
    ensure_route(state, Route::Dashboard)?;

    let analytics = state.analytics();
    analytics.fetch_daily_sales().await;

    for point in analytics.daily_sales() {
        tracing::info!("{}  {}", point.date, point.total);
    }
    Ok(())
}
