pub mod dto;
pub mod handlers;
pub mod repo;

use axum::{routing::get, Router};

use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/problems",
            get(handlers::list_problems).post(handlers::create_problem),
        )
        .route(
            "/problems/:id",
            get(handlers::get_problem)
                .put(handlers::update_problem)
                .delete(handlers::delete_problem),
        )
}
