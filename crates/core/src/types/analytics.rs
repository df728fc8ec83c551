//! Analytics projections.
//!
//! Read-only, computed server-side. The client never mutates these locally;
//! each fetch replaces the previous snapshot wholesale.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Aggregate figures for the dashboard.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct AnalyticsSummary {
    /// Gross revenue over the reporting window.
    pub total_revenue: Decimal,
    /// Number of completed transactions.
    pub transaction_count: i64,
    /// Number of products in the catalog.
    pub product_count: i64,
    /// Number of products at or below their low-stock threshold.
    pub low_stock_count: i64,
}

/// One day of sales totals.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailySalesPoint {
    /// Calendar day.
    pub date: NaiveDate,
    /// Gross sales for that day.
    pub total: Decimal,
}
