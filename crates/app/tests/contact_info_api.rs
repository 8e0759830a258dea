use axum::{
    body::{to_bytes, Body},
    http::{Request, StatusCode},
    response::Response,
    Router,
};
use sqlx::SqlitePool;
use tempfile::TempDir;
use tower::ServiceExt; // oneshot

use app::{router, state::AppState};

const ADMIN_TOKEN: &str = "test-admin-token";
const USER_TOKEN: &str = "test-user-token";

// === Fixtures ===

fn sha256_hex(bytes: &[u8]) -> String {
    use sha2::{Digest, Sha256};
    let mut h = Sha256::new();
    h.update(bytes);
    hex::encode(h.finalize())
}

fn write_session_file(auth_dir: &std::path::Path, token: &str, role: &str) {
    std::fs::create_dir_all(auth_dir).unwrap();
    std::fs::write(
        auth_dir.join(format!("{}.toml", sha256_hex(token.as_bytes()))),
        format!("role = \"{role}\"\nname = \"test\"\n"),
    )
    .unwrap();
}

/// Migrated database + session records for an admin and a plain user.
/// The state is marked ready unless a test needs the boot fallback.
async fn test_app(ready: bool) -> (TempDir, Router, SqlitePool) {
    let tmp = TempDir::new().unwrap();
    let url = format!("sqlite://{}", tmp.path().join("site.db").to_string_lossy());
    let pool = infra::db::connect(&url).await.unwrap();
    infra::db::migrate::run(&pool).await.unwrap();

    let auth_dir = tmp.path().join("auth");
    write_session_file(&auth_dir, ADMIN_TOKEN, "ADMIN");
    write_session_file(&auth_dir, USER_TOKEN, "USER");

    let state = AppState::new(pool.clone(), auth_dir);
    if ready {
        state.set_ready();
    }
    (tmp, router::build(state), pool)
}

// === Small IO helpers ===

async fn read(resp: Response) -> (StatusCode, String) {
    let status = resp.status();
    let bytes = to_bytes(resp.into_body(), 1024 * 1024).await.unwrap();
    (status, String::from_utf8_lossy(&bytes).into_owned())
}

async fn get(app: &Router, path: &str, token: Option<&str>) -> (StatusCode, String) {
    let mut req = Request::get(path);
    if let Some(t) = token {
        req = req.header("authorization", format!("Bearer {t}"));
    }
    let resp = app.clone().oneshot(req.body(Body::empty()).unwrap()).await.unwrap();
    read(resp).await
}

async fn put_json(app: &Router, path: &str, body: &str, token: Option<&str>) -> (StatusCode, String) {
    let mut req = Request::put(path).header("content-type", "application/json");
    if let Some(t) = token {
        req = req.header("authorization", format!("Bearer {t}"));
    }
    let resp = app
        .clone()
        .oneshot(req.body(Body::from(body.to_string())).unwrap())
        .await
        .unwrap();
    read(resp).await
}

async fn post_form(app: &Router, path: &str, form: &[(&str, &str)], token: &str) -> (StatusCode, String) {
    let body = serde_urlencoded::to_string(form).unwrap();
    let req = Request::post(path)
        .header("content-type", "application/x-www-form-urlencoded")
        .header("authorization", format!("Bearer {token}"))
        .body(Body::from(body))
        .unwrap();
    let resp = app.clone().oneshot(req).await.unwrap();
    read(resp).await
}

async fn contact_info_rows(pool: &SqlitePool) -> i64 {
    sqlx::query_scalar("SELECT COUNT(*) FROM contact_info")
        .fetch_one(pool)
        .await
        .unwrap()
}

// ===================== TESTS =====================

#[tokio::test]
async fn get_without_session_is_401_with_no_side_effect() {
    let (_tmp, app, pool) = test_app(true).await;

    let (status, body) = get(&app, "/api/admin/contact-info", None).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert!(body.contains("Unauthorized"));

    // The lazy create must not run for rejected callers.
    assert_eq!(contact_info_rows(&pool).await, 0);
}

#[tokio::test]
async fn insufficient_role_is_401() {
    let (_tmp, app, pool) = test_app(true).await;

    let (status, body) = get(&app, "/api/admin/contact-info", Some(USER_TOKEN)).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert!(body.contains("Unauthorized"));
    assert_eq!(contact_info_rows(&pool).await, 0);
}

#[tokio::test]
async fn unknown_token_is_401() {
    let (_tmp, app, _pool) = test_app(true).await;

    let (status, _) = get(&app, "/api/admin/contact-info", Some("not-a-session")).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn authorized_get_lazily_creates_and_is_stable() {
    let (_tmp, app, _pool) = test_app(true).await;

    let (status, body) = get(&app, "/api/admin/contact-info", Some(ADMIN_TOKEN)).await;
    assert_eq!(status, StatusCode::OK);
    let first: serde_json::Value = serde_json::from_str(&body).unwrap();
    assert_eq!(first["id"], "contact-info");
    assert!(first["email"].is_null());
    assert!(first["titleFr"].is_null());

    let (status, body) = get(&app, "/api/admin/contact-info", Some(ADMIN_TOKEN)).await;
    assert_eq!(status, StatusCode::OK);
    let second: serde_json::Value = serde_json::from_str(&body).unwrap();
    assert_eq!(first, second);
}

#[tokio::test]
async fn put_merges_partial_payload() {
    let (_tmp, app, _pool) = test_app(true).await;

    let (status, _) = put_json(
        &app,
        "/api/admin/contact-info",
        r#"{ "titleFr": "Contactez-nous", "email": "contact@example.org" }"#,
        Some(ADMIN_TOKEN),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let (status, body) = put_json(
        &app,
        "/api/admin/contact-info",
        r#"{ "email": "new@example.org" }"#,
        Some(ADMIN_TOKEN),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let info: serde_json::Value = serde_json::from_str(&body).unwrap();
    assert_eq!(info["email"], "new@example.org");
    assert_eq!(info["titleFr"], "Contactez-nous");
}

#[tokio::test]
async fn put_rejects_unknown_fields() {
    let (_tmp, app, pool) = test_app(true).await;

    let (status, _) = put_json(
        &app,
        "/api/admin/contact-info",
        r#"{ "email": "x@y.z", "role": "SUPER_ADMIN" }"#,
        Some(ADMIN_TOKEN),
    )
    .await;
    assert!(status.is_client_error(), "unknown keys must be rejected, got {status}");
    assert_eq!(contact_info_rows(&pool).await, 0);
}

#[tokio::test]
async fn put_without_session_is_401() {
    let (_tmp, app, pool) = test_app(true).await;

    let (status, _) = put_json(
        &app,
        "/api/admin/contact-info",
        r#"{ "email": "x@y.z" }"#,
        None,
    )
    .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(contact_info_rows(&pool).await, 0);
}

#[tokio::test]
async fn readiness_gate_serves_fallback_until_ready() {
    let (_tmp, app, _pool) = test_app(false).await;

    let (status, body) = get(&app, "/api/admin/contact-info", Some(ADMIN_TOKEN)).await;
    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    assert!(body.contains("maintenance"));

    // The health probe passes through the gate.
    let (status, _) = get(&app, "/healthz", None).await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn ready_state_routes_normally() {
    let tmp = TempDir::new().unwrap();
    let url = format!("sqlite://{}", tmp.path().join("site.db").to_string_lossy());
    let pool = infra::db::connect(&url).await.unwrap();
    infra::db::migrate::run(&pool).await.unwrap();

    let auth_dir = tmp.path().join("auth");
    write_session_file(&auth_dir, ADMIN_TOKEN, "SUPER_ADMIN");

    let state = AppState::new(pool, auth_dir);
    let app = router::build(state.clone());

    let (status, _) = get(&app, "/api/admin/contact-info", Some(ADMIN_TOKEN)).await;
    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);

    // One-way transition: after this, the same router serves for real.
    state.set_ready();
    let (status, _) = get(&app, "/api/admin/contact-info", Some(ADMIN_TOKEN)).await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn admin_view_renders_and_saves() {
    let (_tmp, app, _pool) = test_app(true).await;

    let (status, body) = get(&app, "/admin/contact-info", Some(ADMIN_TOKEN)).await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("name=\"title_fr\""));
    assert!(body.contains("name=\"map_embed_url\""));

    let form = [
        ("title_fr", "Contactez-nous"),
        ("title_en", "Contact us"),
        ("description_fr", ""),
        ("description_en", ""),
        ("address", "123 Rue Example"),
        ("email", "contact@example.org"),
        ("phone", "+33 1 23 45 67 89"),
        ("phone2", ""),
        ("working_hours_fr", ""),
        ("working_hours_en", ""),
        ("map_embed_url", ""),
    ];
    let (status, _) = post_form(&app, "/admin/contact-info", &form, ADMIN_TOKEN).await;
    assert!(status.is_redirection(), "expected redirect, got {status}");

    // The follow-up read reflects server state and shows the notice.
    let (status, body) = get(&app, "/admin/contact-info?saved=1", Some(ADMIN_TOKEN)).await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("mises à jour"));
    assert!(body.contains("contact@example.org"));
}

#[tokio::test]
async fn admin_view_requires_session() {
    let (_tmp, app, _pool) = test_app(true).await;

    let (status, _) = get(&app, "/admin/contact-info", None).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}
