mod common;

use common::spawn_app_with;
use employee_server::ServerState;
use http::StatusCode;
use serde_json::json;

#[tokio::test]
async fn test_login_with_bootstrap_admin() {
    let app = spawn_app_with(|config| {
        config.admin_username = Some("admin".to_string());
        config.admin_password = Some("correct horse".to_string());
    })
    .await;

    let response = app
        .post_json(
            "/api/auth/login",
            json!({"username": "admin", "password": "correct horse"}),
        )
        .await;
    assert_eq!(response.status, StatusCode::OK);
    let body = response.json();
    assert_eq!(body["user"]["username"], "admin");
    assert_eq!(body["user"]["role"], "Admin");
    assert!(body["user"].get("hash_pass").is_none());

    // The issued token grants admin access
    let token = body["token"].as_str().unwrap();
    let response = app.get("/api/employees/create", Some(token)).await;
    assert_eq!(response.status, StatusCode::OK);
}

#[tokio::test]
async fn test_bootstrap_keeps_existing_admin() {
    let app = spawn_app_with(|config| {
        config.admin_username = Some("admin".to_string());
        config.admin_password = Some("correct horse".to_string());
    })
    .await;

    // Restart against the same database with a different configured password
    let mut config = app.state.config.clone();
    config.admin_password = Some("battery staple".to_string());
    ServerState::with_pool(&config, app.state.db.clone()).await.unwrap();

    let original = app
        .post_json(
            "/api/auth/login",
            json!({"username": "admin", "password": "correct horse"}),
        )
        .await;
    let replaced = app
        .post_json(
            "/api/auth/login",
            json!({"username": "admin", "password": "battery staple"}),
        )
        .await;
    assert_eq!(original.status, StatusCode::OK);
    assert_eq!(replaced.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_login_failures_look_the_same() {
    let app = spawn_app_with(|config| {
        config.admin_username = Some("admin".to_string());
        config.admin_password = Some("correct horse".to_string());
    })
    .await;

    let wrong_password = app
        .post_json("/api/auth/login", json!({"username": "admin", "password": "nope"}))
        .await;
    let unknown_user = app
        .post_json("/api/auth/login", json!({"username": "ghost", "password": "nope"}))
        .await;

    assert_eq!(wrong_password.status, StatusCode::UNAUTHORIZED);
    assert_eq!(unknown_user.status, StatusCode::UNAUTHORIZED);
    assert_eq!(wrong_password.json(), unknown_user.json());
    assert_eq!(wrong_password.json()["code"], 1002);
}

#[tokio::test]
async fn test_login_rejects_oversized_credentials() {
    let app = spawn_app_with(|config| {
        config.admin_username = Some("admin".to_string());
        config.admin_password = Some("correct horse".to_string());
    })
    .await;

    let long_password = app
        .post_json(
            "/api/auth/login",
            json!({"username": "admin", "password": "x".repeat(129)}),
        )
        .await;
    let long_username = app
        .post_json(
            "/api/auth/login",
            json!({"username": "a".repeat(65), "password": "correct horse"}),
        )
        .await;
    let wrong_password = app
        .post_json("/api/auth/login", json!({"username": "admin", "password": "nope"}))
        .await;

    assert_eq!(long_password.status, StatusCode::UNAUTHORIZED);
    assert_eq!(long_username.status, StatusCode::UNAUTHORIZED);
    assert_eq!(long_password.json(), wrong_password.json());
    assert_eq!(long_username.json(), wrong_password.json());
}

#[tokio::test]
async fn test_health() {
    let app = spawn_app_with(|_| {}).await;
    let response = app.get("/health", None).await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.json()["status"], "ok");
}
