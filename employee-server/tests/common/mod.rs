//! Shared fixtures for the integration tests
#![allow(dead_code)]

use std::io::Cursor;

use axum::Router;
use axum::body::{Body, Bytes};
use employee_server::auth::JwtConfig;
use employee_server::db::DbService;
use employee_server::{Config, ServerState, api};
use http::{HeaderMap, Method, Request, StatusCode, header};
use http_body_util::BodyExt;
use serde_json::Value;
use tempfile::TempDir;
use tower::ServiceExt;

pub const SECRET: &str = "integration-test-secret-0123456789abcdef";
pub const BOUNDARY: &str = "----employee-test-boundary";

pub struct TestApp {
    pub app: Router,
    pub state: ServerState,
    // Dropped with the app
    pub web_root: TempDir,
}

pub struct TestResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: Bytes,
}

impl TestResponse {
    pub fn json(&self) -> Value {
        serde_json::from_slice(&self.body).expect("response body is not JSON")
    }

    pub fn location(&self) -> &str {
        self.headers
            .get(header::LOCATION)
            .and_then(|v| v.to_str().ok())
            .expect("missing Location header")
    }
}

pub async fn spawn_app() -> TestApp {
    spawn_app_with(|_| {}).await
}

pub async fn spawn_app_with(configure: impl FnOnce(&mut Config)) -> TestApp {
    let web_root = tempfile::tempdir().unwrap();
    let mut config = Config::with_overrides(web_root.path(), JwtConfig::for_secret(SECRET));
    configure(&mut config);

    let db = DbService::in_memory().await.unwrap();
    let state = ServerState::with_pool(&config, db.pool).await.unwrap();
    let app = api::build_app(state.clone());

    TestApp {
        app,
        state,
        web_root,
    }
}

impl TestApp {
    pub fn token(&self, role: &str) -> String {
        self.state
            .get_jwt_service()
            .generate_token(1, &format!("{}-user", role.to_lowercase()), role)
            .unwrap()
    }

    pub fn admin(&self) -> String {
        self.token("Admin")
    }

    pub async fn send(&self, request: Request<Body>) -> TestResponse {
        let response = self.app.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let headers = response.headers().clone();
        let body = response.into_body().collect().await.unwrap().to_bytes();
        TestResponse {
            status,
            headers,
            body,
        }
    }

    pub async fn get(&self, uri: &str, token: Option<&str>) -> TestResponse {
        self.send(request(Method::GET, uri, token).body(Body::empty()).unwrap())
            .await
    }

    pub async fn post_empty(&self, uri: &str, token: Option<&str>) -> TestResponse {
        self.send(request(Method::POST, uri, token).body(Body::empty()).unwrap())
            .await
    }

    pub async fn post_form(&self, uri: &str, token: Option<&str>, form: Multipart) -> TestResponse {
        let request = request(Method::POST, uri, token)
            .header(
                header::CONTENT_TYPE,
                format!("multipart/form-data; boundary={}", BOUNDARY),
            )
            .body(Body::from(form.finish()))
            .unwrap();
        self.send(request).await
    }

    pub async fn post_json(&self, uri: &str, body: Value) -> TestResponse {
        let request = request(Method::POST, uri, None)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap();
        self.send(request).await
    }

    /// Create an employee as admin and return its id
    pub async fn create_employee(&self, name: &str, department: &str, photo: Option<(&str, Vec<u8>)>) -> i64 {
        let mut form = Multipart::new()
            .text("Name", name)
            .text("Email", &format!("{}@x.com", name.to_lowercase()))
            .text("Department", department);
        if let Some((file_name, data)) = photo {
            form = form.file("Photo", file_name, &data);
        }

        let response = self.post_form("/api/employees/create", Some(&self.admin()), form).await;
        assert_eq!(response.status, StatusCode::SEE_OTHER);
        response
            .location()
            .rsplit('/')
            .next()
            .unwrap()
            .parse()
            .unwrap()
    }

    pub async fn employee(&self, id: i64) -> Value {
        let response = self.get(&format!("/api/employees/details/{}", id), None).await;
        assert_eq!(response.status, StatusCode::OK);
        response.json()["employee"].clone()
    }

    pub fn photo_exists(&self, file_name: &str) -> bool {
        self.web_root.path().join("images").join(file_name).exists()
    }

    /// File names under `<web_root>/images`, sorted
    pub fn image_files(&self) -> Vec<String> {
        let mut names: Vec<String> = std::fs::read_dir(self.web_root.path().join("images"))
            .unwrap()
            .map(|entry| entry.unwrap().file_name().to_string_lossy().into_owned())
            .collect();
        names.sort();
        names
    }
}

fn request(method: Method, uri: &str, token: Option<&str>) -> http::request::Builder {
    let builder = Request::builder().method(method).uri(uri);
    match token {
        Some(token) => builder.header(header::AUTHORIZATION, format!("Bearer {}", token)),
        None => builder,
    }
}

/// Hand-built `multipart/form-data` body
#[derive(Default)]
pub struct Multipart {
    body: Vec<u8>,
}

impl Multipart {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn text(mut self, name: &str, value: &str) -> Self {
        self.body.extend_from_slice(
            format!(
                "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"{name}\"\r\n\r\n{value}\r\n"
            )
            .as_bytes(),
        );
        self
    }

    pub fn file(mut self, name: &str, file_name: &str, data: &[u8]) -> Self {
        self.body.extend_from_slice(
            format!(
                "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"{name}\"; filename=\"{file_name}\"\r\nContent-Type: application/octet-stream\r\n\r\n"
            )
            .as_bytes(),
        );
        self.body.extend_from_slice(data);
        self.body.extend_from_slice(b"\r\n");
        self
    }

    pub fn finish(mut self) -> Vec<u8> {
        self.body
            .extend_from_slice(format!("--{BOUNDARY}--\r\n").as_bytes());
        self.body
    }
}

/// A small valid PNG
pub fn png_bytes(shade: u8) -> Vec<u8> {
    let img = image::RgbImage::from_pixel(4, 4, image::Rgb([shade, 40, 90]));
    let mut buf = Cursor::new(Vec::new());
    img.write_to(&mut buf, image::ImageFormat::Png).unwrap();
    buf.into_inner()
}
