use crate::routes::{
    admin::{get_contact_info_page, post_contact_info_page},
    contact_info::{get_contact_info, put_contact_info},
    health::get_healthz,
};
use crate::state::AppState;
use axum::{middleware::from_fn_with_state, routing::get, Router};

/// Route table: the admin surface (JSON + HTML) sits behind the session
/// gate; everything sits behind the readiness gate except the health probe,
/// which the gate lets through explicitly.
pub fn build(app: AppState) -> Router {
    Router::new()
        .route(
            "/api/admin/contact-info",
            get(get_contact_info).put(put_contact_info),
        )
        .route(
            "/admin/contact-info",
            get(get_contact_info_page).post(post_contact_info_page),
        )
        .layer(from_fn_with_state(app.clone(), crate::auth::gate))
        .route("/healthz", get(get_healthz))
        .layer(from_fn_with_state(app.clone(), crate::middleware::ready::gate))
        .with_state(app)
}
