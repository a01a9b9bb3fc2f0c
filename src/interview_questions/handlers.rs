use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use tracing::instrument;
use uuid::Uuid;

use super::dto::{CreateInterviewQuestion, ListInterviewQuestionsQuery};
use super::repo::InterviewQuestion;
use crate::auth::extractors::CurrentUser;
use crate::error::ApiError;
use crate::listing::{Page, PageResponse};
use crate::state::AppState;

#[instrument(skip(state, user))]
pub async fn list_questions(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Query(query): Query<ListInterviewQuestionsQuery>,
) -> Result<Json<PageResponse<InterviewQuestion>>, ApiError> {
    let page = Page::new(query.page, query.size);
    let (items, total) = InterviewQuestion::list(&state.db, user.id, &query, page).await?;
    Ok(Json(PageResponse {
        items,
        total,
        page: page.page,
        size: page.size,
    }))
}

#[instrument(skip(state, user, payload))]
pub async fn create_question(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Json(payload): Json<CreateInterviewQuestion>,
) -> Result<(StatusCode, Json<InterviewQuestion>), ApiError> {
    let question = InterviewQuestion::create(&state.db, user.id, payload).await?;
    Ok((StatusCode::CREATED, Json(question)))
}

#[instrument(skip(state, user))]
pub async fn delete_question(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, ApiError> {
    if !InterviewQuestion::delete(&state.db, user.id, id).await? {
        return Err(ApiError::NotFound("Question"));
    }
    Ok(StatusCode::NO_CONTENT)
}
