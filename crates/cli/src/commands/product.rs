//! Product catalog commands.

use std::path::Path;

use kasira_client::AppState;
use kasira_client::router::Route;
use kasira_core::{ProductDraft, ProductId};

use super::{CliError, ensure_route};

/// List the catalog.
pub async fn list(state: &AppState) -> Result<(), CliError> {
    ensure_route(state, Route::Inventory)?;

    let store = state.products();
    store.fetch_products().await;
    if let Some(message) = store.error() {
        return Err(CliError::Store(message));
    }

    let products = store.products();
    tracing::info!("{} products", products.len());
    for product in products {
        tracing::info!(
            "#{} {} [{}] price={} stock={}",
            product.id,
            product.name,
            product.category.as_deref().unwrap_or("-"),
            product.price,
            product.stock
        );
    }
    Ok(())
}

/// Create a product.
pub async fn add(state: &AppState, draft: &ProductDraft) -> Result<(), CliError> {
    ensure_route(state, Route::Inventory)?;
    let product = state.products().add_product(draft).await?;
    tracing::info!("Created #{} {}", product.id, product.name);
    Ok(())
}

/// Replace a product by ID.
pub async fn set(state: &AppState, id: i32, draft: &ProductDraft) -> Result<(), CliError> {
    ensure_route(state, Route::Inventory)?;
    let product = state
        .products()
        .update_product(ProductId::new(id), draft)
        .await?;
    tracing::info!("Updated #{} {}", product.id, product.name);
    Ok(())
}

/// Delete a product by ID.
pub async fn rm(state: &AppState, id: i32) -> Result<(), CliError> {
    ensure_route(state, Route::Inventory)?;

    let store = state.products();
    store.delete_product(ProductId::new(id)).await;
    match store.error() {
        Some(message) => Err(CliError::Store(message)),
        None => {
            tracing::info!("Deleted #{id}");
            Ok(())
        }
    }
}

/// Bulk-create products from a JSON file holding an array of drafts.
pub async fn import(state: &AppState, file: &Path) -> Result<(), CliError> {
    ensure_route(state, Route::Inventory)?;

    let raw = std::fs::read_to_string(file)?;
    let drafts: Vec<ProductDraft> = serde_json::from_str(&raw)?;
    let products = state.products().add_products_bulk(&drafts).await?;
    tracing::info!("Imported {} products", products.len());
    Ok(())
}

/// List categories.
pub async fn categories(state: &AppState) -> Result<(), CliError> {
    ensure_route(state, Route::Inventory)?;

    let store = state.products();
    store.fetch_categories().await;
    for category in store.categories() {
        tracing::info!("#{} {}", category.id, category.name);
    }
    Ok(())
}

/// Create a category.
pub async fn add_category(state: &AppState, name: &str) -> Result<(), CliError> {
    ensure_route(state, Route::Inventory)?;

    let store = state.products();
    store.add_category(name).await;
    match store.error() {
        Some(message) => Err(CliError::Store(message)),
        None => {
            tracing::info!("Created category {name}");
            Ok(())
        }
    }
}
