//! Store settings commands.

use kasira_client::AppState;
use kasira_client::router::Route;

use super::{CliError, ensure_route};

/// Show the deployment settings.
pub async fn show(state: &AppState) -> Result<(), CliError> {
    ensure_route(state, Route::Settings)?;

    state.settings().fetch_settings().await;
    let settings = state.settings().settings();
    tracing::info!("Store:               {}", settings.store_name);
    tracing::info!("Address:             {}", settings.store_address);
    tracing::info!("Low-stock threshold: {}", settings.default_low_stock_threshold);
    tracing::info!("PIC:                 {}", settings.pic_name);
    Ok(())
}

/// Update the deployment settings; unset fields keep their current value.
pub async fn set(
    state: &AppState,
    store_name: Option<String>,
    store_address: Option<String>,
    low_stock_threshold: Option<i32>,
    pic_name: Option<String>,
) -> Result<(), CliError> {
    ensure_route(state, Route::Settings)?;

    let store = state.settings();
    store.fetch_settings().await;

    let mut settings = store.settings();
    if let Some(name) = store_name {
        settings.store_name = name;
    }
    if let Some(address) = store_address {
        settings.store_address = address;
    }
    if let Some(threshold) = low_stock_threshold {
        settings.default_low_stock_threshold = threshold;
    }
    if let Some(pic) = pic_name {
        settings.pic_name = pic;
    }

    // The settings resource reports success as a boolean, not an error.
    if store.update_settings(&settings).await {
        tracing::info!("Settings saved");
        Ok(())
    } else {
        Err(CliError::Store("settings were not saved".to_string()))
    }
}
