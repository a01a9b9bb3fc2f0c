use std::sync::Arc;

use anyhow::Context;
use sqlx::{postgres::PgPoolOptions, PgPool};

use crate::config::AppConfig;
use crate::storage::{LocalStore, UploadStore};

#[derive(Clone)]
pub struct AppState {
    pub db: PgPool,
    pub config: Arc<AppConfig>,
    pub storage: Arc<dyn UploadStore>,
    /// Shared outbound client; reqwest pools connections internally.
    pub http: reqwest::Client,
}

impl AppState {
    pub async fn init() -> anyhow::Result<Self> {
        let config = Arc::new(AppConfig::from_env()?);
        let db = PgPoolOptions::new()
            .max_connections(10)
            .connect(&config.database_url)
            .await
            .context("connect to database")?;
        let storage = Arc::new(LocalStore::new(config.upload.dir.clone())) as Arc<dyn UploadStore>;
        Ok(Self {
            db,
            config,
            storage,
            http: reqwest::Client::new(),
        })
    }

}
