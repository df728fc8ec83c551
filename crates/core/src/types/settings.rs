//! Store settings singleton.

use serde::{Deserialize, Serialize};

/// Deployment-wide store settings.
///
/// Exactly one record exists per deployment. The client holds a cached copy
/// with last-fetched-wins semantics - no versioning, no conflict detection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoreSettings {
    /// Store display name, shown on receipts and report headers.
    pub store_name: String,
    /// Physical store address. The first comma-segment doubles as the
    /// signature place line on exported reports.
    pub store_address: String,
    /// Stock level at or below which a product counts as low-stock.
    pub default_low_stock_threshold: i32,
    /// Person in charge, shown on reports.
    pub pic_name: String,
}

impl Default for StoreSettings {
    fn default() -> Self {
        Self {
            store_name: "My Store".to_string(),
            store_address: "Jakarta, Indonesia".to_string(),
            default_low_stock_threshold: 10,
            pic_name: "Manager".to_string(),
        }
    }
}
