use serde::{Deserialize, Serialize};
use sqlx::{FromRow, PgPool};
use time::OffsetDateTime;
use uuid::Uuid;

const COLUMNS: &str = "id, email, full_name, hashed_password, google_id, is_active, created_at";

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct User {
    pub id: Uuid,
    pub email: String,
    pub full_name: String,
    #[serde(skip_serializing)]
    pub hashed_password: Option<String>,
    #[serde(skip_serializing)]
    pub google_id: Option<String>,
    pub is_active: bool,
    pub created_at: OffsetDateTime,
}

impl User {
    pub async fn find_by_id(db: &PgPool, id: Uuid) -> anyhow::Result<Option<User>> {
        let user = sqlx::query_as::<_, User>(&format!(
            "SELECT {COLUMNS} FROM users WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(db)
        .await?;
        Ok(user)
    }

    /// Look a user up by either identity the provider gives us.
    pub async fn find_by_email_or_google_id(
        db: &PgPool,
        email: &str,
        google_id: &str,
    ) -> anyhow::Result<Option<User>> {
        let user = sqlx::query_as::<_, User>(&format!(
            "SELECT {COLUMNS} FROM users WHERE email = $1 OR google_id = $2"
        ))
        .bind(email)
        .bind(google_id)
        .fetch_optional(db)
        .await?;
        Ok(user)
    }

    /// Create an account from a Google profile. No local password.
    pub async fn create_oauth(
        db: &PgPool,
        email: &str,
        full_name: &str,
        google_id: &str,
    ) -> anyhow::Result<User> {
        let user = sqlx::query_as::<_, User>(&format!(
            "INSERT INTO users (email, full_name, google_id) \
             VALUES ($1, $2, $3) RETURNING {COLUMNS}"
        ))
        .bind(email)
        .bind(full_name)
        .bind(google_id)
        .fetch_one(db)
        .await?;
        Ok(user)
    }

    /// Backfill the provider id on an account that predates Google sign-in.
    pub async fn set_google_id(db: &PgPool, id: Uuid, google_id: &str) -> anyhow::Result<User> {
        let user = sqlx::query_as::<_, User>(&format!(
            "UPDATE users SET google_id = $2 WHERE id = $1 RETURNING {COLUMNS}"
        ))
        .bind(id)
        .bind(google_id)
        .fetch_one(db)
        .await?;
        Ok(user)
    }
}
