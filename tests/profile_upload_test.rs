//! Integration tests for the profile views against a wiremock backend.

use std::path::PathBuf;

use murmur::adapters::mock::InMemoryStorage;
use murmur::adapters::ReqwestHttpClient;
use murmur::api::ApiClient;
use murmur::models::Identity;
use murmur::session::SessionStore;
use murmur::views::{OwnProfileView, Picture, PublicProfileView};
use serde_json::json;
use tempfile::TempDir;
use wiremock::matchers::{body_string_contains, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn api(server: &MockServer) -> ApiClient<ReqwestHttpClient> {
    ApiClient::new(server.uri(), ReqwestHttpClient::new())
}

fn signed_in() -> SessionStore {
    let session = SessionStore::new(InMemoryStorage::new());
    session.login("tok", Identity::new(1, "ana")).unwrap();
    session
}

fn write_picture(dir: &TempDir, name: &str) -> PathBuf {
    let path = dir.path().join(name);
    std::fs::write(&path, b"jpeg-bytes").unwrap();
    path
}

async fn mount_own_profile(server: &MockServer, pic: Option<&str>) {
    Mock::given(method("GET"))
        .and(path("/users/ana"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": 1,
            "username": "ana",
            "email": "ana@example.com",
            "profilePic": pic,
            "posts": [],
        })))
        .expect(1)
        .mount(server)
        .await;
}

#[tokio::test]
async fn test_own_profile_loads_session_user() {
    let server = MockServer::start().await;
    mount_own_profile(&server, Some("/uploads/a.png")).await;

    let mut view = OwnProfileView::new(api(&server), signed_in());
    assert_eq!(view.refresh().await, None);
    assert_eq!(view.refresh().await, None);

    assert_eq!(view.profile().unwrap().email.as_deref(), Some("ana@example.com"));
    assert_eq!(view.picture(), &Picture::Remote("/uploads/a.png".to_string()));
}

#[tokio::test]
async fn test_upload_confirms_backend_reference() {
    let dir = TempDir::new().unwrap();
    let file = write_picture(&dir, "face.jpg");
    let server = MockServer::start().await;
    mount_own_profile(&server, None).await;
    Mock::given(method("POST"))
        .and(path("/users/upload-profile-pic"))
        .and(header("authorization", "Bearer tok"))
        .and(body_string_contains("Content-Type: image/jpeg"))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "id": 1,
            "username": "ana",
            "profilePic": "/uploads/face-1.jpg",
        })))
        .expect(1)
        .mount(&server)
        .await;
    let session = signed_in();

    let mut view = OwnProfileView::new(api(&server), session.clone());
    view.refresh().await;

    assert!(view.upload_picture(&file).await);
    assert_eq!(view.picture(), &Picture::Remote("/uploads/face-1.jpg".to_string()));
    assert_eq!(
        session.user().unwrap().profile_pic.as_deref(),
        Some("/uploads/face-1.jpg")
    );
}

#[tokio::test]
async fn test_rejected_upload_restores_previous_picture() {
    let dir = TempDir::new().unwrap();
    let file = write_picture(&dir, "huge.jpg");
    let server = MockServer::start().await;
    mount_own_profile(&server, Some("/uploads/old.png")).await;
    Mock::given(method("POST"))
        .and(path("/users/upload-profile-pic"))
        .respond_with(
            ResponseTemplate::new(413).set_body_json(json!({"message": "File too large"})),
        )
        .mount(&server)
        .await;
    let session = signed_in();

    let mut view = OwnProfileView::new(api(&server), session.clone());
    view.refresh().await;

    assert!(!view.upload_picture(&file).await);
    assert_eq!(view.picture(), &Picture::Remote("/uploads/old.png".to_string()));
    assert_eq!(
        view.profile().unwrap().profile_pic.as_deref(),
        Some("/uploads/old.png")
    );
    assert!(session.user().unwrap().profile_pic.is_none());
}

#[tokio::test]
async fn test_public_profile_reloads_on_username_change() {
    let server = MockServer::start().await;
    for name in ["ana", "ben"] {
        Mock::given(method("GET"))
            .and(path(format!("/users/{}", name)))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "id": 1,
                "username": name,
                "posts": [{"id": 1, "content": "hi", "createdAt": "2025-03-01T10:00:00.000Z"}],
            })))
            .expect(1)
            .mount(&server)
            .await;
    }

    let mut view = PublicProfileView::new(api(&server));
    view.show("ana").await;
    view.show("ana").await;
    view.show("ben").await;
    view.show("ben").await;

    assert_eq!(view.profile().unwrap().username, "ben");
    assert_eq!(view.profile().unwrap().posts.len(), 1);
}
