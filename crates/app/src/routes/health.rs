use crate::state::AppState;
use axum::{extract::State, http::StatusCode};

#[tracing::instrument(skip_all)]
pub async fn get_healthz(State(app): State<AppState>) -> (StatusCode, &'static str) {
    match infra::db::health::ready(&app.pool).await {
        Ok(()) => (StatusCode::OK, "ok"),
        Err(err) => {
            tracing::error!(error = %err, "health probe failed");
            (StatusCode::INTERNAL_SERVER_ERROR, "db unavailable")
        }
    }
}
