use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use tracing::instrument;
use uuid::Uuid;

use super::dto::{validate_difficulty, CreateProblem, ListProblemsQuery, UpdateProblem};
use super::repo::Problem;
use crate::auth::extractors::CurrentUser;
use crate::error::ApiError;
use crate::listing::{Page, PageResponse};
use crate::state::AppState;

#[instrument(skip(state, user))]
pub async fn list_problems(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Query(query): Query<ListProblemsQuery>,
) -> Result<Json<PageResponse<Problem>>, ApiError> {
    let page = Page::new(query.page, query.size);
    let (items, total) = Problem::list(&state.db, user.id, &query, page).await?;
    Ok(Json(PageResponse {
        items,
        total,
        page: page.page,
        size: page.size,
    }))
}

#[instrument(skip(state, user, payload))]
pub async fn create_problem(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Json(payload): Json<CreateProblem>,
) -> Result<(StatusCode, Json<Problem>), ApiError> {
    validate_difficulty(&payload.difficulty)?;
    let problem = Problem::create(&state.db, user.id, payload).await?;
    Ok((StatusCode::CREATED, Json(problem)))
}

#[instrument(skip(state, user))]
pub async fn get_problem(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Path(id): Path<Uuid>,
) -> Result<Json<Problem>, ApiError> {
    let problem = Problem::get(&state.db, user.id, id)
        .await?
        .ok_or(ApiError::NotFound("Problem"))?;
    Ok(Json(problem))
}

#[instrument(skip(state, user, payload))]
pub async fn update_problem(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Path(id): Path<Uuid>,
    Json(payload): Json<UpdateProblem>,
) -> Result<Json<Problem>, ApiError> {
    if let Some(difficulty) = &payload.difficulty {
        validate_difficulty(difficulty)?;
    }
    let problem = Problem::update(&state.db, user.id, id, payload)
        .await?
        .ok_or(ApiError::NotFound("Problem"))?;
    Ok(Json(problem))
}

#[instrument(skip(state, user))]
pub async fn delete_problem(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, ApiError> {
    if !Problem::delete(&state.db, user.id, id).await? {
        return Err(ApiError::NotFound("Problem"));
    }
    Ok(StatusCode::NO_CONTENT)
}
