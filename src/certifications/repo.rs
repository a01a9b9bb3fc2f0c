use serde::{Deserialize, Serialize};
use sqlx::{FromRow, PgPool};
use time::{Date, OffsetDateTime};
use uuid::Uuid;

use super::dto::{CreateCertification, ListCertificationsQuery};
use crate::listing::{paginate, Filter, Page};

const COLUMNS: &str =
    "id, user_id, name, issuer, issue_date, expiry_date, credential_url, created_at";

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Certification {
    pub id: Uuid,
    pub user_id: Uuid,
    pub name: String,
    pub issuer: String,
    pub issue_date: Date,
    pub expiry_date: Option<Date>,
    pub credential_url: Option<String>,
    pub created_at: OffsetDateTime,
}

impl Certification {
    pub async fn list(
        db: &PgPool,
        user_id: Uuid,
        query: &ListCertificationsQuery,
        page: Page,
    ) -> anyhow::Result<(Vec<Certification>, i64)> {
        let mut filters = Vec::new();
        if let Some(search) = &query.search {
            filters.push(Filter::Contains("name", search.clone()));
        }
        paginate(
            db,
            "certifications",
            COLUMNS,
            user_id,
            &filters,
            "issue_date DESC, created_at DESC",
            page,
        )
        .await
    }

    pub async fn create(
        db: &PgPool,
        user_id: Uuid,
        payload: CreateCertification,
    ) -> anyhow::Result<Certification> {
        let certification = sqlx::query_as::<_, Certification>(&format!(
            "INSERT INTO certifications (user_id, name, issuer, issue_date, expiry_date, credential_url) \
             VALUES ($1, $2, $3, $4, $5, $6) RETURNING {COLUMNS}"
        ))
        .bind(user_id)
        .bind(payload.name)
        .bind(payload.issuer)
        .bind(payload.issue_date)
        .bind(payload.expiry_date)
        .bind(payload.credential_url)
        .fetch_one(db)
        .await?;
        Ok(certification)
    }
}
