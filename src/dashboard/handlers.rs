use std::collections::HashMap;

use axum::{extract::State, Json};
use tracing::instrument;

use super::dto::DashboardStats;
use crate::auth::extractors::CurrentUser;
use crate::error::ApiError;
use crate::listing::count_owned;
use crate::problems::repo::{Problem, COLUMNS as PROBLEM_COLUMNS};
use crate::state::AppState;

/// Informational snapshot: each count reads independently, no cross-entity
/// transaction.
#[instrument(skip(state, user))]
pub async fn stats(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
) -> Result<Json<DashboardStats>, ApiError> {
    let db = &state.db;

    let total_problems = count_owned(db, "problems", user.id).await?;
    let total_experiences = count_owned(db, "experiences", user.id).await?;
    let total_certifications = count_owned(db, "certifications", user.id).await?;
    let total_interview_questions = count_owned(db, "interview_questions", user.id).await?;
    let total_learnings = count_owned(db, "learnings", user.id).await?;

    let difficulty_rows: Vec<(String, i64)> = sqlx::query_as(
        "SELECT difficulty, COUNT(*) FROM problems WHERE user_id = $1 GROUP BY difficulty",
    )
    .bind(user.id)
    .fetch_all(db)
    .await
    .map_err(ApiError::from)?;
    let problems_by_difficulty: HashMap<String, i64> = difficulty_rows.into_iter().collect();

    let recent_problems = sqlx::query_as::<_, Problem>(&format!(
        "SELECT {PROBLEM_COLUMNS} FROM problems WHERE user_id = $1 \
         ORDER BY created_at DESC LIMIT 5"
    ))
    .bind(user.id)
    .fetch_all(db)
    .await
    .map_err(ApiError::from)?;

    Ok(Json(DashboardStats {
        total_problems,
        total_experiences,
        total_certifications,
        total_interview_questions,
        total_learnings,
        problems_by_difficulty,
        recent_problems,
    }))
}
