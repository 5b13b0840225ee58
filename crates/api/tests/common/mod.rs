use std::path::Path;
use std::sync::Arc;

use axum::body::Body;
use axum::http::{Request, Response};
use axum::Router;
use http_body_util::BodyExt;
use sqlx::SqlitePool;
use tower::ServiceExt;

use skyport_api::auth::jwt::{generate_access_token, JwtConfig};
use skyport_api::config::ServerConfig;
use skyport_api::media::MediaStore;
use skyport_api::router::build_app_router;
use skyport_api::state::AppState;
use skyport_core::roles::{ROLE_STAFF, ROLE_USER};

/// Signing secret shared by test tokens and the test server config.
pub const TEST_JWT_SECRET: &str = "integration-test-secret";

/// Boundary for hand-assembled multipart request bodies.
pub const MULTIPART_BOUNDARY: &str = "skyport-test-boundary";

pub fn test_jwt_config() -> JwtConfig {
    JwtConfig {
        secret: TEST_JWT_SECRET.to_string(),
        access_token_expiry_mins: 15,
    }
}

/// Build a test `ServerConfig` with safe defaults and the given media root.
pub fn test_config(media_root: &Path) -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        media_root: media_root.to_path_buf(),
        jwt: test_jwt_config(),
    }
}

/// Build the full application router with all middleware layers, using the
/// given database pool and media root.
///
/// Uses the shared [`build_app_router`] so integration tests exercise the
/// same middleware stack (CORS, request ID, timeout, tracing, panic
/// recovery) that production uses.
pub fn build_test_app(pool: SqlitePool, media_root: &Path) -> Router {
    let config = test_config(media_root);
    let state = AppState {
        pool,
        config: Arc::new(config.clone()),
        media: MediaStore::new(media_root),
    };
    build_app_router(state, &config)
}

/// Access token for an authenticated regular (non-staff) caller.
pub fn user_token() -> String {
    generate_access_token(1, ROLE_USER, &test_jwt_config()).expect("token generation")
}

/// Access token for an authenticated staff caller.
pub fn staff_token() -> String {
    generate_access_token(2, ROLE_STAFF, &test_jwt_config()).expect("token generation")
}

// ---------------------------------------------------------------------------
// Request helpers (tower::ServiceExt::oneshot, no TCP listener)
// ---------------------------------------------------------------------------

pub async fn get(app: Router, uri: &str) -> Response<Body> {
    let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
    app.oneshot(request).await.unwrap()
}

pub async fn get_auth(app: Router, uri: &str, token: &str) -> Response<Body> {
    let request = Request::builder()
        .uri(uri)
        .header("authorization", format!("Bearer {token}"))
        .body(Body::empty())
        .unwrap();
    app.oneshot(request).await.unwrap()
}

pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    let request = Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    app.oneshot(request).await.unwrap()
}

pub async fn post_json_auth(
    app: Router,
    uri: &str,
    body: serde_json::Value,
    token: &str,
) -> Response<Body> {
    let request = Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .header("authorization", format!("Bearer {token}"))
        .body(Body::from(body.to_string()))
        .unwrap();
    app.oneshot(request).await.unwrap()
}

pub async fn delete_auth(app: Router, uri: &str, token: &str) -> Response<Body> {
    let request = Request::builder()
        .method("DELETE")
        .uri(uri)
        .header("authorization", format!("Bearer {token}"))
        .body(Body::empty())
        .unwrap();
    app.oneshot(request).await.unwrap()
}

pub async fn post_multipart_auth(
    app: Router,
    uri: &str,
    body: Vec<u8>,
    token: &str,
) -> Response<Body> {
    let request = Request::builder()
        .method("POST")
        .uri(uri)
        .header(
            "content-type",
            format!("multipart/form-data; boundary={MULTIPART_BOUNDARY}"),
        )
        .header("authorization", format!("Bearer {token}"))
        .body(Body::from(body))
        .unwrap();
    app.oneshot(request).await.unwrap()
}

/// Collect a response body and parse it as JSON.
pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

// ---------------------------------------------------------------------------
// Multipart body builders
// ---------------------------------------------------------------------------

/// A multipart body carrying a single file part.
pub fn multipart_file_body(
    field: &str,
    filename: &str,
    content_type: &str,
    data: &[u8],
) -> Vec<u8> {
    let mut body = Vec::new();
    body.extend_from_slice(
        format!(
            "--{MULTIPART_BOUNDARY}\r\n\
             Content-Disposition: form-data; name=\"{field}\"; filename=\"{filename}\"\r\n\
             Content-Type: {content_type}\r\n\r\n"
        )
        .as_bytes(),
    );
    body.extend_from_slice(data);
    body.extend_from_slice(format!("\r\n--{MULTIPART_BOUNDARY}--\r\n").as_bytes());
    body
}

/// A multipart body carrying a single plain-text part (no filename).
pub fn multipart_text_body(field: &str, value: &str) -> Vec<u8> {
    format!(
        "--{MULTIPART_BOUNDARY}\r\n\
         Content-Disposition: form-data; name=\"{field}\"\r\n\r\n\
         {value}\r\n--{MULTIPART_BOUNDARY}--\r\n"
    )
    .into_bytes()
}

/// Encode a blank RGB image as PNG bytes, like the fixtures the API expects.
pub fn encoded_png(width: u32, height: u32) -> Vec<u8> {
    let img = image::RgbImage::new(width, height);
    let mut buf = std::io::Cursor::new(Vec::new());
    image::DynamicImage::ImageRgb8(img)
        .write_to(&mut buf, image::ImageFormat::Png)
        .expect("encoding a blank PNG cannot fail");
    buf.into_inner()
}
