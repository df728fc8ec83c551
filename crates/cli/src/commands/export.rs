//! Report export commands.

use kasira_client::AppState;
use kasira_client::report::{Report, ReportBranding};
use kasira_client::router::Route;

use super::{CliError, ensure_route};

/// Export the inventory report over the product catalog.
pub async fn products(state: &AppState) -> Result<(), CliError> {
    ensure_route(state, Route::Inventory)?;

    // Branding comes from the settings record the backend holds.
    state.settings().fetch_settings().await;

    let store = state.products();
    store.fetch_products().await;
    if let Some(message) = store.error() {
        return Err(CliError::Store(message));
    }

    let rows = store
        .products()
        .into_iter()
        .map(|product| {
            vec![
                product.id.to_string(),
                product.name,
                product.category.unwrap_or_else(|| "-".to_string()),
                product.price.to_string(),
                product.stock.to_string(),
            ]
        })
        .collect();

    let report = Report {
        filename: "inventory".to_string(),
        title: "Inventory Report".to_string(),
        columns: vec![
            "ID".to_string(),
            "Name".to_string(),
            "Category".to_string(),
            "Price".to_string(),
            "Stock".to_string(),
        ],
        rows,
        footer_text: None,
    };
    let branding = ReportBranding::from(&state.settings().settings());
    state.exporter().export(&report, &branding, state.shell());
    Ok(())
}

/// Export the daily sales report.
pub async fn daily_sales(state: &AppState) -> Result<(), CliError> {
    ensure_route(state, Route::Dashboard)?;

    state.settings().fetch_settings().await;

    let analytics = state.analytics();
    analytics.fetch_daily_sales().await;

    let rows = analytics
        .daily_sales()
        .into_iter()
        .map(|point| vec![point.date.to_string(), point.total.to_string()])
        .collect();

    let report = Report {
        filename: "daily-sales".to_string(),
        title: "Daily Sales Report".to_string(),
        columns: vec!["Date".to_string(), "Total".to_string()],
        rows,
        footer_text: None,
    };
    let branding = ReportBranding::from(&state.settings().settings());
    state.exporter().export(&report, &branding, state.shell());
    Ok(())
}
