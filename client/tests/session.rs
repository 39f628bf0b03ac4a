//! # Session Persistence Tests
//!
//! The session file written by one `App` is restored by the next.

mod common;

use std::sync::Arc;

use banking_client::session::FileStorage;
use serde_json::json;
use shared::LoginRequest;
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

async fn mount_backend(server: &MockServer) {
    Mock::given(method("POST"))
        .and(path("/api/auth/login"))
        .respond_with(ResponseTemplate::new(200).set_body_json(common::envelope(json!({
            "access_token": "persisted-token",
            "user": common::user_json()
        }))))
        .mount(server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/auth/profile"))
        .and(header("authorization", "Bearer persisted-token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(common::envelope(common::user_json())))
        .mount(server)
        .await;
}

#[tokio::test]
async fn test_session_survives_restart() {
    // Arrange
    let server = MockServer::start().await;
    mount_backend(&server).await;
    let dir = tempfile::tempdir().unwrap();
    let session_file = dir.path().join("session.json");

    let first = common::app(&server, Arc::new(FileStorage::new(&session_file)));
    first
        .login(LoginRequest {
            email_or_phone: "ada@example.com".to_string(),
            password: "Password123".to_string(),
        })
        .unwrap()
        .await
        .unwrap();
    drop(first);

    // Act
    let second = common::app(&server, Arc::new(FileStorage::new(&session_file)));
    let restored = second.start().await;

    // Assert
    assert!(restored.is_authenticated());
    let auth = second.store().auth();
    assert_eq!(auth.token.as_deref(), Some("persisted-token"));
    assert_eq!(auth.user.map(|u| u.full_name()).as_deref(), Some("Ada Obi"));
}

#[tokio::test]
async fn test_restart_after_logout_is_unauthenticated() {
    let server = MockServer::start().await;
    mount_backend(&server).await;
    let dir = tempfile::tempdir().unwrap();
    let session_file = dir.path().join("session.json");

    let first = common::app(&server, Arc::new(FileStorage::new(&session_file)));
    first
        .login(LoginRequest {
            email_or_phone: "ada@example.com".to_string(),
            password: "Password123".to_string(),
        })
        .unwrap()
        .await
        .unwrap();
    first.logout().await;

    let second = common::app(&server, Arc::new(FileStorage::new(&session_file)));
    let restored = second.start().await;

    assert!(!restored.is_authenticated());
    let auth = second.store().auth();
    assert!(auth.token.is_none());
    assert_eq!(auth.user.map(|u| u.id), Some("42".to_string()));
}

#[tokio::test]
async fn test_corrupt_session_file_starts_clean() {
    let server = MockServer::start().await;
    let dir = tempfile::tempdir().unwrap();
    let session_file = dir.path().join("session.json");
    std::fs::write(&session_file, b"{\"auth_token\": ").unwrap();

    let app = common::app(&server, Arc::new(FileStorage::new(&session_file)));
    let restored = app.start().await;

    assert!(!restored.is_authenticated());
    assert!(server.received_requests().await.unwrap_or_default().is_empty());
}
