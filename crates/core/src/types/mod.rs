//! Core types for Kasira.
//!
//! Domain entities as the backend serves them, plus type-safe ID wrappers.

pub mod analytics;
pub mod id;
pub mod product;
pub mod settings;
pub mod user;

pub use analytics::{AnalyticsSummary, DailySalesPoint};
pub use id::*;
pub use product::{Category, Product, ProductDraft};
pub use settings::StoreSettings;
pub use user::UserProfile;
