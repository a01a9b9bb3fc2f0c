use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use tracing::instrument;
use uuid::Uuid;

use super::dto::{CreateLearning, ListLearningsQuery};
use super::repo::Learning;
use crate::auth::extractors::CurrentUser;
use crate::error::ApiError;
use crate::listing::{Page, PageResponse};
use crate::state::AppState;

#[instrument(skip(state, user))]
pub async fn list_learnings(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Query(query): Query<ListLearningsQuery>,
) -> Result<Json<PageResponse<Learning>>, ApiError> {
    let page = Page::new(query.page, query.size);
    let (items, total) = Learning::list(&state.db, user.id, &query, page).await?;
    Ok(Json(PageResponse {
        items,
        total,
        page: page.page,
        size: page.size,
    }))
}

#[instrument(skip(state, user, payload))]
pub async fn create_learning(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Json(payload): Json<CreateLearning>,
) -> Result<(StatusCode, Json<Learning>), ApiError> {
    let learning = Learning::create(&state.db, user.id, payload).await?;
    Ok((StatusCode::CREATED, Json(learning)))
}

#[instrument(skip(state, user))]
pub async fn delete_learning(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, ApiError> {
    if !Learning::delete(&state.db, user.id, id).await? {
        return Err(ApiError::NotFound("Learning"));
    }
    Ok(StatusCode::NO_CONTENT)
}
