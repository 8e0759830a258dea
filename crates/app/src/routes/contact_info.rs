//! The contact-info settings resource: a single record behind a fixed key,
//! lazily created on first authorized read, merged on update.

use crate::{error::ApiError, state::AppState};
use axum::{extract::State, Json};
use domain::content::{ContactInfo, ContactInfoPatch};

#[tracing::instrument(skip_all)]
pub async fn get_contact_info(
    State(app): State<AppState>,
) -> Result<Json<ContactInfo>, ApiError> {
    let info = app.store.fetch_or_create().await?;
    Ok(Json(info))
}

#[tracing::instrument(skip_all)]
pub async fn put_contact_info(
    State(app): State<AppState>,
    Json(patch): Json<ContactInfoPatch>,
) -> Result<Json<ContactInfo>, ApiError> {
    let info = app.store.apply(&patch).await?;
    Ok(Json(info))
}
