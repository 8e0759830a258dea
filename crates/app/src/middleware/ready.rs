//! Defer the whole admin surface until startup has finished its first pass.
//!
//! Two states, not-ready then ready, one transition, no way back and no
//! error state. While not ready every route except the health probe renders
//! the fallback (a 503 maintenance page, so proxies don't cache it as
//! success); once the flag flips, wrapped routes render normally.

use crate::state::AppState;
use askama::Template;
use axum::{
    body::Body,
    http::{Request, StatusCode},
    middleware::Next,
    response::{Html, IntoResponse, Response},
};

#[derive(Template)]
#[template(path = "page/maint.html")]
struct Maint;

pub async fn gate(
    axum::extract::State(app): axum::extract::State<AppState>,
    req: Request<Body>,
    next: Next,
) -> Response {
    if app.is_ready() {
        return next.run(req).await;
    }
    if req.uri().path() == "/healthz" {
        return next.run(req).await;
    }

    let html = Maint
        .render()
        .unwrap_or_else(|e| format!("<h1>Maintenance</h1><p>Template error: {e}</p>"));
    let mut resp = Html(html).into_response();
    *resp.status_mut() = StatusCode::SERVICE_UNAVAILABLE;
    resp
}
