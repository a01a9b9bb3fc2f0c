pub mod dto;
pub mod handlers;
pub mod repo;

use axum::{routing::get, Router};

use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/learnings",
            get(handlers::list_learnings).post(handlers::create_learning),
        )
        .route(
            "/learnings/:id",
            axum::routing::delete(handlers::delete_learning),
        )
}
