use serde::{Deserialize, Serialize};
use sqlx::{FromRow, PgPool};
use time::{Date, OffsetDateTime};
use uuid::Uuid;

use super::dto::{CreateExperience, ListExperiencesQuery};
use crate::listing::{paginate, Filter, Page};

const COLUMNS: &str = "id, user_id, company, role, start_date, end_date, description, created_at";

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Experience {
    pub id: Uuid,
    pub user_id: Uuid,
    pub company: String,
    pub role: String,
    pub start_date: Date,
    pub end_date: Option<Date>,
    pub description: Option<String>,
    pub created_at: OffsetDateTime,
}

impl Experience {
    pub async fn list(
        db: &PgPool,
        user_id: Uuid,
        query: &ListExperiencesQuery,
        page: Page,
    ) -> anyhow::Result<(Vec<Experience>, i64)> {
        let mut filters = Vec::new();
        if let Some(company) = &query.company {
            filters.push(Filter::Contains("company", company.clone()));
        }
        paginate(
            db,
            "experiences",
            COLUMNS,
            user_id,
            &filters,
            "start_date DESC, created_at DESC",
            page,
        )
        .await
    }

    pub async fn create(
        db: &PgPool,
        user_id: Uuid,
        payload: CreateExperience,
    ) -> anyhow::Result<Experience> {
        let experience = sqlx::query_as::<_, Experience>(&format!(
            "INSERT INTO experiences (user_id, company, role, start_date, end_date, description) \
             VALUES ($1, $2, $3, $4, $5, $6) RETURNING {COLUMNS}"
        ))
        .bind(user_id)
        .bind(payload.company)
        .bind(payload.role)
        .bind(payload.start_date)
        .bind(payload.end_date)
        .bind(payload.description)
        .fetch_one(db)
        .await?;
        Ok(experience)
    }
}
