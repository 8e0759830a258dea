//! Server-rendered settings form. Reads through the same store as the JSON
//! resource, submits every field in one payload, and reports the result as
//! a notice on the follow-up page load, so the view always reflects server
//! state after a write. Last write wins; no conflict detection.

use crate::state::AppState;
use askama::Template;
use axum::{
    extract::{Query, State},
    response::{Html, IntoResponse, Redirect, Response},
};
use domain::content::{ContactInfo, ContactInfoPatch};
use serde::Deserialize;

#[derive(Template)]
#[template(path = "page/contact_info.html")]
struct ContactInfoPage {
    info: ContactInfo,
    saved: bool,
    error: bool,
}

#[derive(Deserialize)]
pub struct NoticeQuery {
    saved: Option<String>,
    error: Option<String>,
}

#[derive(Deserialize)]
pub struct ContactInfoForm {
    pub title_fr: String,
    pub title_en: String,
    pub description_fr: String,
    pub description_en: String,
    pub address: String,
    pub email: String,
    pub phone: String,
    pub phone2: String,
    pub working_hours_fr: String,
    pub working_hours_en: String,
    pub map_embed_url: String,
}

impl From<ContactInfoForm> for ContactInfoPatch {
    fn from(f: ContactInfoForm) -> Self {
        ContactInfoPatch {
            title_fr: Some(f.title_fr),
            title_en: Some(f.title_en),
            description_fr: Some(f.description_fr),
            description_en: Some(f.description_en),
            address: Some(f.address),
            email: Some(f.email),
            phone: Some(f.phone),
            phone2: Some(f.phone2),
            working_hours_fr: Some(f.working_hours_fr),
            working_hours_en: Some(f.working_hours_en),
            map_embed_url: Some(f.map_embed_url),
        }
    }
}

#[tracing::instrument(skip_all)]
pub async fn get_contact_info_page(
    State(app): State<AppState>,
    Query(notice): Query<NoticeQuery>,
) -> Response {
    let info = match app.store.fetch_or_create().await {
        Ok(info) => info,
        Err(err) => {
            tracing::error!(error = %err, "loading contact info for admin view failed");
            return crate::error::ApiError::Internal(err).into_response();
        }
    };

    let page = ContactInfoPage {
        info,
        saved: notice.saved.is_some(),
        error: notice.error.is_some(),
    };
    let html = page
        .render()
        .unwrap_or_else(|e| format!("<h1>Contact</h1><p>Template error: {e}</p>"));
    Html(html).into_response()
}

/// Any failure surfaces as the same generic notice; the caller cannot tell
/// a storage fault from anything else, matching the JSON resource.
#[tracing::instrument(skip_all)]
pub async fn post_contact_info_page(
    State(app): State<AppState>,
    axum::Form(form): axum::Form<ContactInfoForm>,
) -> Redirect {
    match app.store.apply(&form.into()).await {
        Ok(_) => Redirect::to("/admin/contact-info?saved=1"),
        Err(err) => {
            tracing::error!(error = %err, "updating contact info from admin view failed");
            Redirect::to("/admin/contact-info?error=1")
        }
    }
}
