pub mod dto;
pub mod extractors;
pub mod google;
pub mod handlers;
pub mod jwt;
pub mod repo;

use axum::{
    routing::{get, post},
    Router,
};

use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/auth/google/login", get(handlers::google_login))
        .route("/auth/google/callback", post(handlers::google_callback))
        .route("/auth/me", get(handlers::me))
}
