pub mod dto;
pub mod handlers;
pub mod repo;

use axum::{routing::get, Router};

use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/interview-questions",
            get(handlers::list_questions).post(handlers::create_question),
        )
        .route(
            "/interview-questions/:id",
            axum::routing::delete(handlers::delete_question),
        )
}
