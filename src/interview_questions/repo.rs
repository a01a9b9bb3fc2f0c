use serde::{Deserialize, Serialize};
use sqlx::{FromRow, PgPool};
use time::{Date, OffsetDateTime};
use uuid::Uuid;

use super::dto::{CreateInterviewQuestion, ListInterviewQuestionsQuery};
use crate::listing::{paginate, Filter, Page};

const COLUMNS: &str = "id, user_id, question, answer, company, asked_date, created_at";

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct InterviewQuestion {
    pub id: Uuid,
    pub user_id: Uuid,
    pub question: String,
    pub answer: String,
    pub company: String,
    pub asked_date: Date,
    pub created_at: OffsetDateTime,
}

impl InterviewQuestion {
    pub async fn list(
        db: &PgPool,
        user_id: Uuid,
        query: &ListInterviewQuestionsQuery,
        page: Page,
    ) -> anyhow::Result<(Vec<InterviewQuestion>, i64)> {
        let mut filters = Vec::new();
        if let Some(company) = &query.company {
            filters.push(Filter::Contains("company", company.clone()));
        }
        if let Some(date_from) = query.date_from {
            filters.push(Filter::From("asked_date", date_from));
        }
        if let Some(date_to) = query.date_to {
            filters.push(Filter::To("asked_date", date_to));
        }
        paginate(
            db,
            "interview_questions",
            COLUMNS,
            user_id,
            &filters,
            "asked_date DESC, created_at DESC",
            page,
        )
        .await
    }

    pub async fn create(
        db: &PgPool,
        user_id: Uuid,
        payload: CreateInterviewQuestion,
    ) -> anyhow::Result<InterviewQuestion> {
        let question = sqlx::query_as::<_, InterviewQuestion>(&format!(
            "INSERT INTO interview_questions (user_id, question, answer, company, asked_date) \
             VALUES ($1, $2, $3, $4, $5) RETURNING {COLUMNS}"
        ))
        .bind(user_id)
        .bind(payload.question)
        .bind(payload.answer)
        .bind(payload.company)
        .bind(payload.asked_date)
        .fetch_one(db)
        .await?;
        Ok(question)
    }

    pub async fn delete(db: &PgPool, user_id: Uuid, id: Uuid) -> anyhow::Result<bool> {
        let result = sqlx::query("DELETE FROM interview_questions WHERE id = $1 AND user_id = $2")
            .bind(id)
            .bind(user_id)
            .execute(db)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
