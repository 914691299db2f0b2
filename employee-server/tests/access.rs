mod common;

use common::{Multipart, spawn_app};
use http::StatusCode;

fn ann() -> Multipart {
    Multipart::new()
        .text("Name", "Ann")
        .text("Email", "a@x.com")
        .text("Department", "HR")
}

#[tokio::test]
async fn test_anonymous_cannot_create_or_edit() {
    let app = spawn_app().await;

    let response = app.get("/api/employees/create", None).await;
    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    assert_eq!(response.json()["code"], 1001);

    let response = app.post_form("/api/employees/create", None, ann()).await;
    assert_eq!(response.status, StatusCode::UNAUTHORIZED);

    let response = app.get("/api/employees/edit/1", None).await;
    assert_eq!(response.status, StatusCode::UNAUTHORIZED);

    let response = app
        .post_form("/api/employees/edit", None, ann().text("Id", "1"))
        .await;
    assert_eq!(response.status, StatusCode::UNAUTHORIZED);

    let response = app.post_empty("/api/employees/delete/1", None).await;
    assert_eq!(response.status, StatusCode::UNAUTHORIZED);

    assert_eq!(app.get("/api/employees", None).await.json(), serde_json::json!([]));
}

#[tokio::test]
async fn test_non_admin_is_forbidden_from_create_and_edit() {
    let app = spawn_app().await;
    let user = app.token("User");

    let response = app.get("/api/employees/create", Some(&user)).await;
    assert_eq!(response.status, StatusCode::FORBIDDEN);
    assert_eq!(response.json()["code"], 2003);

    let response = app.post_form("/api/employees/create", Some(&user), ann()).await;
    assert_eq!(response.status, StatusCode::FORBIDDEN);

    let id = app.create_employee("Ann", "HR", None).await;
    let response = app
        .post_form(
            "/api/employees/edit",
            Some(&user),
            ann().text("Id", &id.to_string()),
        )
        .await;
    assert_eq!(response.status, StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn test_non_admin_may_delete() {
    let app = spawn_app().await;
    let id = app.create_employee("Ann", "HR", None).await;

    let response = app
        .post_empty(&format!("/api/employees/delete/{}", id), Some(&app.token("User")))
        .await;
    assert_eq!(response.status, StatusCode::SEE_OTHER);
}

#[tokio::test]
async fn test_admin_role_is_case_insensitive() {
    let app = spawn_app().await;
    let response = app.get("/api/employees/create", Some(&app.token("admin"))).await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.json()["name"], "");
}

#[tokio::test]
async fn test_public_reads_need_no_token() {
    let app = spawn_app().await;
    let id = app.create_employee("Ann", "HR", None).await;

    assert_eq!(app.get("/api/employees", None).await.status, StatusCode::OK);
    assert_eq!(
        app.get(&format!("/api/employees/details/{}", id), None).await.status,
        StatusCode::OK
    );
}

#[tokio::test]
async fn test_public_reads_ignore_bad_tokens() {
    let app = spawn_app().await;
    let id = app.create_employee("Ann", "HR", None).await;

    assert_eq!(app.get("/api/employees", Some("not.a.jwt")).await.status, StatusCode::OK);
    assert_eq!(
        app.get(&format!("/api/employees/details/{}", id), Some("not.a.jwt"))
            .await
            .status,
        StatusCode::OK
    );
    assert_eq!(
        app.get("/api/employees/details", Some("not.a.jwt")).await.status,
        StatusCode::NOT_FOUND
    );
}

#[tokio::test]
async fn test_garbage_token_is_rejected() {
    let app = spawn_app().await;
    let response = app.get("/api/employees/create", Some("not.a.jwt")).await;
    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    assert_eq!(response.json()["code"], 1004);
}
