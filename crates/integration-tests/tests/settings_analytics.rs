//! Settings and analytics store contracts.

use serde_json::json;
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use kasira_core::StoreSettings;
use kasira_integration_tests::test_app;
use rust_decimal::Decimal;

fn settings_json() -> serde_json::Value {
    json!({
        "store_name": "Warung Ayu",
        "store_address": "Bandung, Jawa Barat",
        "default_low_stock_threshold": 5,
        "pic_name": "Ayu"
    })
}

#[tokio::test]
async fn test_fetch_settings_replaces_cached_record() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/settings/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(settings_json()))
        .mount(&server)
        .await;

    let app = test_app(&server.uri());
    let store = app.state.settings();

    // Before the first fetch the cache carries the seed record.
    assert_eq!(store.settings().store_name, "My Store");

    store.fetch_settings().await;
    assert!(!store.loading());
    let settings = store.settings();
    assert_eq!(settings.store_name, "Warung Ayu");
    assert_eq!(settings.default_low_stock_threshold, 5);
}

#[tokio::test]
async fn test_fetch_settings_failure_keeps_cached_record() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/settings/"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let app = test_app(&server.uri());
    let store = app.state.settings();
    store.fetch_settings().await;

    assert!(!store.loading(), "loading resets on the failure path too");
    assert_eq!(store.settings().store_name, "My Store");
}

#[tokio::test]
async fn test_update_settings_reports_boolean_success() {
    let server = MockServer::start().await;
    Mock::given(method("PUT"))
        .and(path("/api/settings/"))
        .and(body_json(settings_json()))
        .respond_with(ResponseTemplate::new(200).set_body_json(settings_json()))
        .mount(&server)
        .await;

    let app = test_app(&server.uri());
    let updated = StoreSettings {
        store_name: "Warung Ayu".to_string(),
        store_address: "Bandung, Jawa Barat".to_string(),
        default_low_stock_threshold: 5,
        pic_name: "Ayu".to_string(),
    };

    assert!(app.state.settings().update_settings(&updated).await);
    assert_eq!(app.state.settings().settings(), updated);
}

#[tokio::test]
async fn test_update_settings_failure_reports_false_and_keeps_cache() {
    let server = MockServer::start().await;
    Mock::given(method("PUT"))
        .and(path("/api/settings/"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let app = test_app(&server.uri());
    let store = app.state.settings();
    let before = store.settings();

    let updated = StoreSettings {
        store_name: "Warung Ayu".to_string(),
        ..StoreSettings::default()
    };
    assert!(!store.update_settings(&updated).await);
    assert_eq!(store.settings(), before);
}

#[tokio::test]
async fn test_fetch_summary_replaces_snapshot() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/analytics/summary"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "total_revenue": "125000",
            "transaction_count": 12,
            "product_count": 40,
            "low_stock_count": 3
        })))
        .mount(&server)
        .await;

    let app = test_app(&server.uri());
    let analytics = app.state.analytics();
    analytics.fetch_summary().await;

    let summary = analytics.summary();
    assert_eq!(summary.total_revenue, Decimal::new(125_000, 0));
    assert_eq!(summary.transaction_count, 12);
    assert_eq!(summary.low_stock_count, 3);
}

#[tokio::test]
async fn test_fetch_daily_sales_replaces_series() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/analytics/daily-sales"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            { "date": "2024-01-01", "total": "100" },
            { "date": "2024-01-02", "total": "250" }
        ])))
        .mount(&server)
        .await;

    let app = test_app(&server.uri());
    let analytics = app.state.analytics();
    analytics.fetch_daily_sales().await;

    let series = analytics.daily_sales();
    assert_eq!(series.len(), 2);
    assert_eq!(series.first().map(|p| p.total), Some(Decimal::new(100, 0)));
}

#[tokio::test]
async fn test_analytics_fetch_failure_keeps_previous_snapshot() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/analytics/summary"))
        .respond_with(ResponseTemplate::new(502))
        .mount(&server)
        .await;

    let app = test_app(&server.uri());
    let analytics = app.state.analytics();
    analytics.fetch_summary().await;

    assert_eq!(analytics.summary().transaction_count, 0);
}
