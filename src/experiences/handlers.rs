use axum::{
    extract::{Query, State},
    http::StatusCode,
    Json,
};
use tracing::instrument;

use super::dto::{CreateExperience, ListExperiencesQuery};
use super::repo::Experience;
use crate::auth::extractors::CurrentUser;
use crate::error::ApiError;
use crate::listing::{Page, PageResponse};
use crate::state::AppState;

#[instrument(skip(state, user))]
pub async fn list_experiences(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Query(query): Query<ListExperiencesQuery>,
) -> Result<Json<PageResponse<Experience>>, ApiError> {
    let page = Page::new(query.page, query.size);
    let (items, total) = Experience::list(&state.db, user.id, &query, page).await?;
    Ok(Json(PageResponse {
        items,
        total,
        page: page.page,
        size: page.size,
    }))
}

#[instrument(skip(state, user, payload))]
pub async fn create_experience(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Json(payload): Json<CreateExperience>,
) -> Result<(StatusCode, Json<Experience>), ApiError> {
    let experience = Experience::create(&state.db, user.id, payload).await?;
    Ok((StatusCode::CREATED, Json(experience)))
}
