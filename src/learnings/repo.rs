use serde::{Deserialize, Serialize};
use sqlx::{types::Json, FromRow, PgPool};
use time::{Date, OffsetDateTime};
use uuid::Uuid;

use super::dto::{CreateLearning, ListLearningsQuery};
use crate::listing::{paginate, Filter, Page};

const COLUMNS: &str = "id, user_id, topic, learned_date, tags, created_at";

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Learning {
    pub id: Uuid,
    pub user_id: Uuid,
    pub topic: String,
    pub learned_date: Date,
    pub tags: Json<Vec<String>>,
    pub created_at: OffsetDateTime,
}

impl Learning {
    pub async fn list(
        db: &PgPool,
        user_id: Uuid,
        query: &ListLearningsQuery,
        page: Page,
    ) -> anyhow::Result<(Vec<Learning>, i64)> {
        let mut filters = Vec::new();
        if let Some(search) = &query.search {
            filters.push(Filter::Contains("topic", search.clone()));
        }
        if let Some(tag) = &query.tag {
            filters.push(Filter::HasTag("tags", tag.clone()));
        }
        paginate(
            db,
            "learnings",
            COLUMNS,
            user_id,
            &filters,
            "learned_date DESC, created_at DESC",
            page,
        )
        .await
    }

    pub async fn create(
        db: &PgPool,
        user_id: Uuid,
        payload: CreateLearning,
    ) -> anyhow::Result<Learning> {
        let learned_date = payload
            .learned_date
            .unwrap_or_else(|| OffsetDateTime::now_utc().date());
        let learning = sqlx::query_as::<_, Learning>(&format!(
            "INSERT INTO learnings (user_id, topic, learned_date, tags) \
             VALUES ($1, $2, $3, $4) RETURNING {COLUMNS}"
        ))
        .bind(user_id)
        .bind(payload.topic)
        .bind(learned_date)
        .bind(Json(payload.tags))
        .fetch_one(db)
        .await?;
        Ok(learning)
    }

    pub async fn delete(db: &PgPool, user_id: Uuid, id: Uuid) -> anyhow::Result<bool> {
        let result = sqlx::query("DELETE FROM learnings WHERE id = $1 AND user_id = $2")
            .bind(id)
            .bind(user_id)
            .execute(db)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
