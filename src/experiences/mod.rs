pub mod dto;
pub mod handlers;
pub mod repo;

use axum::{routing::get, Router};

use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new().route(
        "/experiences",
        get(handlers::list_experiences).post(handlers::create_experience),
    )
}
