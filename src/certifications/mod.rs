pub mod dto;
pub mod handlers;
pub mod repo;

use axum::{routing::get, Router};

use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new().route(
        "/certifications",
        get(handlers::list_certifications).post(handlers::create_certification),
    )
}
