//! Product catalog store.

use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use tracing::error;

use kasira_core::{Category, Product, ProductDraft, ProductId};

use crate::api::{ApiClient, ApiError};

// Collection endpoints keep their trailing slash: the stripped form answers
// with a redirect that rewrites the write method.
const PRODUCTS_PATH: &str = "/products/";
const BULK_PATH: &str = "/products/bulk";
const CATEGORIES_PATH: &str = "/products/categories";

#[derive(Default)]
struct ProductState {
    products: Vec<Product>,
    categories: Vec<Category>,
    loading: bool,
    error: Option<String>,
}

/// Cache of the product catalog plus the actions that mutate it.
///
/// Cheaply cloneable; clones share state.
#[derive(Clone)]
pub struct ProductStore {
    inner: Arc<ProductStoreInner>,
}

struct ProductStoreInner {
    api: ApiClient,
    state: RwLock<ProductState>,
}

impl ProductStore {
    #[must_use]
    pub fn new(api: ApiClient) -> Self {
        Self {
            inner: Arc::new(ProductStoreInner {
                api,
                state: RwLock::new(ProductState::default()),
            }),
        }
    }

    /// Snapshot of the cached products, in server response order.
    #[must_use]
    pub fn products(&self) -> Vec<Product> {
        self.state().products.clone()
    }

    /// Snapshot of the cached categories.
    #[must_use]
    pub fn categories(&self) -> Vec<Category> {
        self.state().categories.clone()
    }

    /// Whether a product fetch is in flight.
    #[must_use]
    pub fn loading(&self) -> bool {
        self.state().loading
    }

    /// The last recorded error message, if any.
    #[must_use]
    pub fn error(&self) -> Option<String> {
        self.state().error.clone()
    }

    /// Replace the cached collection with the server's.
    ///
    /// Swallow-and-record: failures set [`Self::error`], nothing is
    /// returned. `loading` is raised for the call's duration and reset on
    /// both outcomes.
    pub async fn fetch_products(&self) {
        self.state_mut().loading = true;
        let result = self.inner.api.get::<Vec<Product>>(PRODUCTS_PATH).await;

        let mut state = self.state_mut();
        state.loading = false;
        match result {
            Ok(products) => state.products = products,
            Err(err) => state.error = Some(err.to_string()),
        }
    }

    /// Replace the cached category set with the server's.
    ///
    /// Failures are logged only; the cached set stays as it was.
    pub async fn fetch_categories(&self) {
        match self.inner.api.get::<Vec<Category>>(CATEGORIES_PATH).await {
            Ok(categories) => self.state_mut().categories = categories,
            Err(err) => error!("failed to fetch categories: {err}"),
        }
    }

    /// Create a product and append the server's authoritative record to the
    /// cache.
    ///
    /// Throw-and-record: the failure is recorded on the store *and*
    /// returned, so calling UI code can react.
    ///
    /// # Errors
    ///
    /// Returns the underlying [`ApiError`].
    pub async fn add_product(&self, draft: &ProductDraft) -> Result<Product, ApiError> {
        match self.inner.api.post::<_, Product>(PRODUCTS_PATH, draft).await {
            Ok(product) => {
                self.state_mut().products.push(product.clone());
                Ok(product)
            }
            Err(err) => {
                self.state_mut().error = Some(err.to_string());
                Err(err)
            }
        }
    }

    /// Create a batch of products in one request and append all returned
    /// records.
    ///
    /// Same contract as [`Self::add_product`].
    ///
    /// # Errors
    ///
    /// Returns the underlying [`ApiError`].
    pub async fn add_products_bulk(
        &self,
        drafts: &[ProductDraft],
    ) -> Result<Vec<Product>, ApiError> {
        match self.inner.api.post::<_, Vec<Product>>(BULK_PATH, drafts).await {
            Ok(products) => {
                self.state_mut().products.extend(products.iter().cloned());
                Ok(products)
            }
            Err(err) => {
                self.state_mut().error = Some(err.to_string());
                Err(err)
            }
        }
    }

    /// Replace a product server-side, then patch the matching cache entry.
    ///
    /// When no cache entry has this `id` the collection is left untouched
    /// even though the server was updated; callers that populated the entity
    /// elsewhere re-fetch.
    ///
    /// # Errors
    ///
    /// Returns the underlying [`ApiError`] (throw-and-record).
    pub async fn update_product(
        &self,
        id: ProductId,
        draft: &ProductDraft,
    ) -> Result<Product, ApiError> {
        let path = format!("/products/{id}");
        match self.inner.api.put::<_, Product>(&path, draft).await {
            Ok(product) => {
                let mut state = self.state_mut();
                if let Some(entry) = state.products.iter_mut().find(|p| p.id == id) {
                    *entry = product.clone();
                }
                Ok(product)
            }
            Err(err) => {
                self.state_mut().error = Some(err.to_string());
                Err(err)
            }
        }
    }

    /// Delete a product.
    ///
    /// The cache entry is dropped only after the server confirms. On failure
    /// the collection is left unchanged and the error recorded, not
    /// returned.
    pub async fn delete_product(&self, id: ProductId) {
        let path = format!("/products/{id}");
        match self.inner.api.delete(&path).await {
            Ok(()) => self.state_mut().products.retain(|p| p.id != id),
            Err(err) => self.state_mut().error = Some(err.to_string()),
        }
    }

    /// Create a category and append it to the cache.
    ///
    /// Failures are recorded, not returned - this resource's callers poll
    /// the error field.
    pub async fn add_category(&self, name: &str) {
        let payload = serde_json::json!({ "name": name });
        match self
            .inner
            .api
            .post::<_, Category>(CATEGORIES_PATH, &payload)
            .await
        {
            Ok(category) => self.state_mut().categories.push(category),
            Err(err) => self.state_mut().error = Some(err.to_string()),
        }
    }

    fn state(&self) -> RwLockReadGuard<'_, ProductState> {
        self.inner.state.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn state_mut(&self) -> RwLockWriteGuard<'_, ProductState> {
        self.inner.state.write().unwrap_or_else(PoisonError::into_inner)
    }
}
