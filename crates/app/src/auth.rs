//! Session gate for the admin surface.
//!
//! The session collaborator is opaque to this service: a bearer token is
//! fingerprinted and resolved against `<auth_dir>/<sha256>.toml`, whose
//! record names the caller's role. Issuing those records is someone else's
//! job. Missing, unknown, and under-privileged sessions all map to a 401
//! with a generic body.

use crate::error::ApiError;
use axum::{
    body::Body,
    extract::State,
    http::{header, HeaderMap, Request},
    middleware::Next,
    response::{IntoResponse, Response},
};
use domain::content::Role;
use serde::Deserialize;
use sha2::{Digest, Sha256};
use std::{
    fs,
    path::{Path, PathBuf},
};

#[allow(dead_code)]
#[derive(Debug, Deserialize)]
pub struct SessionRecord {
    pub role: Option<String>,
    pub name: Option<String>,
    pub email: Option<String>,
}

#[tracing::instrument(skip_all)]
pub async fn gate(
    State(app): State<crate::state::AppState>,
    req: Request<Body>,
    next: Next,
) -> Response {
    let token = match bearer_token(req.headers()) {
        Some(t) => t,
        None => return ApiError::Unauthorized.into_response(),
    };

    let fp = sha256_hex(token.as_bytes());
    let rec = match read_session(app.auth_dir(), &fp) {
        Ok(Some(r)) => r,
        Ok(None) => return ApiError::Unauthorized.into_response(),
        Err(err) => {
            tracing::debug!(error = %err, "session record unreadable");
            return ApiError::Unauthorized.into_response();
        }
    };

    let role = rec.role.as_deref().and_then(|r| r.parse::<Role>().ok());
    match role {
        Some(r) if r.can_manage_settings() => next.run(req).await,
        _ => ApiError::Unauthorized.into_response(),
    }
}

// ---------- helpers ----------

fn bearer_token(headers: &HeaderMap) -> Option<String> {
    let value = headers.get(header::AUTHORIZATION)?.to_str().ok()?;
    let token = value.strip_prefix("Bearer ")?.trim();
    if token.is_empty() {
        return None;
    }
    Some(token.to_string())
}

fn sha256_hex(bytes: &[u8]) -> String {
    let mut h = Sha256::new();
    h.update(bytes);
    hex::encode(h.finalize())
}

#[tracing::instrument(skip_all)]
fn read_session(dir: &Path, fp_hex: &str) -> anyhow::Result<Option<SessionRecord>> {
    let path: PathBuf = dir.join(format!("{fp_hex}.toml"));
    if !path.exists() {
        return Ok(None);
    }
    let text = fs::read_to_string(path)?;
    let rec: SessionRecord = toml::from_str(&text)?;
    Ok(Some(rec))
}
