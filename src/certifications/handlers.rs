use axum::{
    extract::{Query, State},
    http::StatusCode,
    Json,
};
use tracing::instrument;

use super::dto::{CreateCertification, ListCertificationsQuery};
use super::repo::Certification;
use crate::auth::extractors::CurrentUser;
use crate::error::ApiError;
use crate::listing::{Page, PageResponse};
use crate::state::AppState;

#[instrument(skip(state, user))]
pub async fn list_certifications(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Query(query): Query<ListCertificationsQuery>,
) -> Result<Json<PageResponse<Certification>>, ApiError> {
    let page = Page::new(query.page, query.size);
    let (items, total) = Certification::list(&state.db, user.id, &query, page).await?;
    Ok(Json(PageResponse {
        items,
        total,
        page: page.page,
        size: page.size,
    }))
}

#[instrument(skip(state, user, payload))]
pub async fn create_certification(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Json(payload): Json<CreateCertification>,
) -> Result<(StatusCode, Json<Certification>), ApiError> {
    let certification = Certification::create(&state.db, user.id, payload).await?;
    Ok((StatusCode::CREATED, Json(certification)))
}
