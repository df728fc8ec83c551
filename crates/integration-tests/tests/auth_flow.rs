//! Session lifecycle: login, logout, registration, restore.

use std::sync::Arc;

use serde_json::json;
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use kasira_client::router::{NavigationDecision, Route, check_navigation};
use kasira_client::storage::{MemoryStorage, SessionStorage, keys};
use kasira_integration_tests::{test_app, test_app_with_storage};

fn login_body() -> serde_json::Value {
    json!({
        "token": "tok-123",
        "user": { "id": 1, "username": "ayu", "email": "ayu@example.com" }
    })
}

async fn mount_login(server: &MockServer) {
    Mock::given(method("POST"))
        .and(path("/api/auth/login"))
        .and(body_json(json!({ "username": "ayu", "password": "rahasia" })))
        .respond_with(ResponseTemplate::new(200).set_body_json(login_body()))
        .mount(server)
        .await;
}

#[tokio::test]
async fn test_login_persists_session_and_redirects_to_root() {
    let server = MockServer::start().await;
    mount_login(&server).await;

    let app = test_app(&server.uri());
    app.state
        .session()
        .login("ayu", "rahasia")
        .await
        .expect("login succeeds");

    assert!(app.state.session().is_authenticated());
    assert_eq!(app.storage.get(keys::TOKEN).as_deref(), Some("tok-123"));

    let stored_user = app.storage.get(keys::USER).expect("user persisted");
    let user: serde_json::Value = serde_json::from_str(&stored_user).expect("user is JSON");
    assert_eq!(user["username"], "ayu");

    assert_eq!(app.shell.navigations(), vec![Route::Dashboard]);
    assert!(app.state.session().handle().error().is_none());
}

#[tokio::test]
async fn test_login_failure_records_server_message() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/auth/login"))
        .respond_with(
            ResponseTemplate::new(401).set_body_json(json!({ "error": "Invalid credentials" })),
        )
        .mount(&server)
        .await;

    let app = test_app(&server.uri());
    let err = app
        .state
        .session()
        .login("ayu", "wrong")
        .await
        .expect_err("login fails");

    assert_eq!(err.to_string(), "Invalid credentials");
    assert_eq!(
        app.state.session().handle().error().as_deref(),
        Some("Invalid credentials")
    );
    assert!(!app.state.session().is_authenticated());
    assert!(app.storage.get(keys::TOKEN).is_none());
    assert!(app.shell.navigations().is_empty());
}

#[tokio::test]
async fn test_login_failure_without_body_uses_default_message() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/auth/login"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let app = test_app(&server.uri());
    let err = app
        .state
        .session()
        .login("ayu", "rahasia")
        .await
        .expect_err("login fails");

    assert_eq!(err.to_string(), "Login failed");
}

#[tokio::test]
async fn test_logout_is_idempotent() {
    let server = MockServer::start().await;
    mount_login(&server).await;

    let app = test_app(&server.uri());
    app.state
        .session()
        .login("ayu", "rahasia")
        .await
        .expect("login succeeds");

    app.state.session().logout();
    assert!(!app.state.session().is_authenticated());
    assert!(app.storage.get(keys::TOKEN).is_none());
    assert!(app.storage.get(keys::USER).is_none());

    // A second logout observes identical state.
    app.state.session().logout();
    assert!(!app.state.session().is_authenticated());
    assert!(app.storage.get(keys::TOKEN).is_none());
    assert!(app.storage.get(keys::USER).is_none());

    assert_eq!(
        app.shell.navigations(),
        vec![Route::Dashboard, Route::Login, Route::Login]
    );
}

#[tokio::test]
async fn test_registration_does_not_authenticate() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/auth/register"))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({ "id": 2 })))
        .mount(&server)
        .await;

    let app = test_app(&server.uri());
    let created = app
        .state
        .session()
        .register("budi", "budi@example.com", "rahasia")
        .await
        .expect("registration succeeds");
    assert!(created);

    // A dashboard visit straight after registering bounces to login.
    assert!(!app.state.session().is_authenticated());
    assert_eq!(
        check_navigation(Route::Dashboard, app.state.session().handle()),
        NavigationDecision::RedirectToLogin
    );
}

#[tokio::test]
async fn test_registration_failure_records_message() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/auth/register"))
        .respond_with(
            ResponseTemplate::new(409).set_body_json(json!({ "error": "Username taken" })),
        )
        .mount(&server)
        .await;

    let app = test_app(&server.uri());
    let err = app
        .state
        .session()
        .register("ayu", "ayu@example.com", "rahasia")
        .await
        .expect_err("registration fails");

    assert_eq!(err.to_string(), "Username taken");
    assert_eq!(
        app.state.session().handle().error().as_deref(),
        Some("Username taken")
    );
}

#[tokio::test]
async fn test_session_restores_across_restarts() {
    let server = MockServer::start().await;
    mount_login(&server).await;

    let storage = Arc::new(MemoryStorage::default());
    let first = test_app_with_storage(&server.uri(), Arc::clone(&storage));
    first
        .state
        .session()
        .login("ayu", "rahasia")
        .await
        .expect("login succeeds");

    // A fresh process over the same durable storage starts authenticated.
    let second = test_app_with_storage(&server.uri(), storage);
    assert!(second.state.session().is_authenticated());
    assert_eq!(
        second
            .state
            .session()
            .handle()
            .user()
            .map(|user| user.username),
        Some("ayu".to_string())
    );
}

#[tokio::test]
async fn test_malformed_stored_session_fails_open() {
    let storage = Arc::new(MemoryStorage::default());
    storage.set(keys::TOKEN, "tok-123");
    storage.set(keys::USER, "{not json");

    let server = MockServer::start().await;
    let app = test_app_with_storage(&server.uri(), storage);
    assert!(!app.state.session().is_authenticated());
}
