//! Domain stores: one in-memory cache per backend resource.
//!
//! Every store follows the same shape - fetch replaces the cache wholesale,
//! writes go to the server first and patch the cache from the authoritative
//! response. What differs per resource is the error convention, and those
//! differences are deliberate (existing callers depend on them): product
//! writes return the error after recording it, fetches and deletes only
//! record, and the settings write reports a boolean. Each method documents
//! its own contract.
//!
//! There is no cross-store coordination, no request deduplication, and no
//! cancellation: overlapping fetches race and the last response to arrive
//! wins.

mod analytics;
mod product;
mod settings;

pub use analytics::AnalyticsStore;
pub use product::ProductStore;
pub use settings::SettingsStore;
