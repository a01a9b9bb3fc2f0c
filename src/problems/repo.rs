use serde::{Deserialize, Serialize};
use sqlx::{types::Json, FromRow, PgPool};
use time::{Date, OffsetDateTime};
use uuid::Uuid;

use super::dto::{CreateProblem, ListProblemsQuery, UpdateProblem};
use crate::listing::{paginate, Filter, Page};

pub(crate) const COLUMNS: &str = "id, user_id, title, company_context, difficulty, \
     situation, task, action, result, tags, solved_at, created_at";

/// A behavioral-interview write-up in STAR form. The stored row carries
/// exactly the public fields, so it doubles as the shaped response.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Problem {
    pub id: Uuid,
    pub user_id: Uuid,
    pub title: String,
    pub company_context: Option<String>,
    pub difficulty: String,
    pub situation: String,
    pub task: String,
    pub action: String,
    pub result: String,
    pub tags: Json<Vec<String>>,
    pub solved_at: Date,
    pub created_at: OffsetDateTime,
}

impl Problem {
    pub async fn list(
        db: &PgPool,
        user_id: Uuid,
        query: &ListProblemsQuery,
        page: Page,
    ) -> anyhow::Result<(Vec<Problem>, i64)> {
        let mut filters = Vec::new();
        if let Some(difficulty) = &query.difficulty {
            filters.push(Filter::Eq("difficulty", difficulty.clone()));
        }
        if let Some(search) = &query.search {
            filters.push(Filter::Contains("title", search.clone()));
        }
        if let Some(tag) = &query.tag {
            filters.push(Filter::HasTag("tags", tag.clone()));
        }
        paginate(
            db,
            "problems",
            COLUMNS,
            user_id,
            &filters,
            "created_at DESC",
            page,
        )
        .await
    }

    pub async fn create(
        db: &PgPool,
        user_id: Uuid,
        payload: CreateProblem,
    ) -> anyhow::Result<Problem> {
        let solved_at = payload
            .solved_at
            .unwrap_or_else(|| OffsetDateTime::now_utc().date());
        let problem = sqlx::query_as::<_, Problem>(&format!(
            "INSERT INTO problems \
             (user_id, title, company_context, difficulty, situation, task, action, result, tags, solved_at) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10) \
             RETURNING {COLUMNS}"
        ))
        .bind(user_id)
        .bind(payload.title)
        .bind(payload.company_context)
        .bind(payload.difficulty)
        .bind(payload.situation)
        .bind(payload.task)
        .bind(payload.action)
        .bind(payload.result)
        .bind(Json(payload.tags))
        .bind(solved_at)
        .fetch_one(db)
        .await?;
        Ok(problem)
    }

    pub async fn get(db: &PgPool, user_id: Uuid, id: Uuid) -> anyhow::Result<Option<Problem>> {
        let problem = sqlx::query_as::<_, Problem>(&format!(
            "SELECT {COLUMNS} FROM problems WHERE id = $1 AND user_id = $2"
        ))
        .bind(id)
        .bind(user_id)
        .fetch_optional(db)
        .await?;
        Ok(problem)
    }

    /// Fetch-modify-write partial update; last write wins. Returns `None`
    /// when the row is absent or owned by someone else.
    pub async fn update(
        db: &PgPool,
        user_id: Uuid,
        id: Uuid,
        payload: UpdateProblem,
    ) -> anyhow::Result<Option<Problem>> {
        let Some(mut row) = Self::get(db, user_id, id).await? else {
            return Ok(None);
        };

        if let Some(title) = payload.title {
            row.title = title;
        }
        if let Some(company_context) = payload.company_context {
            // Some(None) is an explicit null and clears the column.
            row.company_context = company_context;
        }
        if let Some(difficulty) = payload.difficulty {
            row.difficulty = difficulty;
        }
        if let Some(situation) = payload.situation {
            row.situation = situation;
        }
        if let Some(task) = payload.task {
            row.task = task;
        }
        if let Some(action) = payload.action {
            row.action = action;
        }
        if let Some(result) = payload.result {
            row.result = result;
        }
        if let Some(tags) = payload.tags {
            row.tags = Json(tags);
        }
        if let Some(solved_at) = payload.solved_at {
            row.solved_at = solved_at;
        }

        let updated = sqlx::query_as::<_, Problem>(&format!(
            "UPDATE problems SET title = $3, company_context = $4, difficulty = $5, \
             situation = $6, task = $7, action = $8, result = $9, tags = $10, solved_at = $11 \
             WHERE id = $1 AND user_id = $2 RETURNING {COLUMNS}"
        ))
        .bind(id)
        .bind(user_id)
        .bind(row.title)
        .bind(row.company_context)
        .bind(row.difficulty)
        .bind(row.situation)
        .bind(row.task)
        .bind(row.action)
        .bind(row.result)
        .bind(row.tags)
        .bind(row.solved_at)
        .fetch_optional(db)
        .await?;
        Ok(updated)
    }

    /// Returns false when nothing was deleted; a second delete of the same
    /// id reports NotFound upstream rather than succeeding silently.
    pub async fn delete(db: &PgPool, user_id: Uuid, id: Uuid) -> anyhow::Result<bool> {
        let result = sqlx::query("DELETE FROM problems WHERE id = $1 AND user_id = $2")
            .bind(id)
            .bind(user_id)
            .execute(db)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn row_serializes_tags_as_plain_array() {
        let problem = Problem {
            id: Uuid::new_v4(),
            user_id: Uuid::new_v4(),
            title: "Outage postmortem".into(),
            company_context: None,
            difficulty: "Hard".into(),
            situation: "s".into(),
            task: "t".into(),
            action: "a".into(),
            result: "r".into(),
            tags: Json(vec!["oncall".into(), "postgres".into()]),
            solved_at: time::macros::date!(2024 - 06 - 01),
            created_at: OffsetDateTime::now_utc(),
        };
        let json = serde_json::to_value(&problem).unwrap();
        assert_eq!(json["tags"], serde_json::json!(["oncall", "postgres"]));
        assert_eq!(json["difficulty"], "Hard");
        assert_eq!(json["solved_at"], "2024-06-01");
    }
}
