//! Integration tests for registration and login views.

use std::time::Duration;

use murmur::adapters::mock::InMemoryStorage;
use murmur::adapters::ReqwestHttpClient;
use murmur::api::ApiClient;
use murmur::session::SessionStore;
use murmur::views::{LoginView, Redirect, RegisterView, Route, REGISTER_SUCCESS};
use serde_json::json;
use wiremock::matchers::{any, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn api(server: &MockServer) -> ApiClient<ReqwestHttpClient> {
    ApiClient::new(server.uri(), ReqwestHttpClient::new())
}

async fn register(server: &MockServer, password: &str) -> RegisterView<ReqwestHttpClient> {
    let mut view = RegisterView::new(api(server)).with_redirect_delay(Duration::ZERO);
    view.username = "ana".to_string();
    view.email = "ana@example.com".to_string();
    view.password = password.to_string();
    view.confirm_password = password.to_string();
    view.submit().await;
    view
}

#[tokio::test]
async fn test_policy_violations_never_reach_backend() {
    let server = MockServer::start().await;
    Mock::given(any())
        .respond_with(ResponseTemplate::new(201))
        .expect(0)
        .mount(&server)
        .await;

    for (password, message) in [
        ("abc123", "Password must contain at least one capital letter"),
        ("Abcdef", "Password must contain at least one number"),
        ("Ab1", "Password must be at least 6 characters"),
    ] {
        let view = register(&server, password).await;
        assert_eq!(view.error(), Some(message));
        assert!(view.success().is_none());
    }
}

#[tokio::test]
async fn test_valid_password_registers_once() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/auth/register"))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({"id": 1})))
        .expect(1)
        .mount(&server)
        .await;

    let mut view = RegisterView::new(api(&server)).with_redirect_delay(Duration::from_millis(20));
    view.username = "ana".to_string();
    view.email = "ana@example.com".to_string();
    view.password = "Abc123".to_string();
    view.confirm_password = "Abc123".to_string();

    let redirect = view.submit().await;

    assert_eq!(
        redirect,
        Some(Redirect::new(Route::Login, Duration::from_millis(20)))
    );
    assert_eq!(view.success(), Some(REGISTER_SUCCESS));
    assert_eq!(redirect.unwrap().wait().await, Route::Login);
}

#[tokio::test]
async fn test_duplicate_username_message_shown() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/auth/register"))
        .respond_with(
            ResponseTemplate::new(409).set_body_json(json!({"message": "Username already exists"})),
        )
        .mount(&server)
        .await;

    let view = register(&server, "Abc123").await;

    assert_eq!(view.error(), Some("Username already exists"));
}

#[tokio::test]
async fn test_login_then_session_is_available() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/auth/login"))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "access_token": "jwt",
            "user": {"id": 3, "username": "ana"},
        })))
        .mount(&server)
        .await;
    let session = SessionStore::new(InMemoryStorage::new());
    let mut updates = session.subscribe();

    let mut view = LoginView::new(api(&server), session.clone());
    view.username = "ana".to_string();
    view.password = "Abc123".to_string();

    assert_eq!(view.submit().await, Some(Route::Feed));
    assert!(updates.has_changed().unwrap());
    assert_eq!(updates.borrow_and_update().token(), Some("jwt"));
    assert_eq!(session.user().unwrap().id, 3);
}

#[tokio::test]
async fn test_login_failure_falls_back_to_generic_message() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/auth/login"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;
    let session = SessionStore::new(InMemoryStorage::new());

    let mut view = LoginView::new(api(&server), session.clone());
    view.username = "ana".to_string();
    view.password = "Abc123".to_string();

    assert_eq!(view.submit().await, None);
    assert_eq!(view.error(), Some("Login failed"));
    assert!(!session.is_authenticated());
}
