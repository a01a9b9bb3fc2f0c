mod app;
mod auth;
mod certifications;
mod config;
mod dashboard;
mod error;
mod experiences;
mod interview_questions;
mod learnings;
mod listing;
mod problems;
mod state;
mod storage;
mod uploads;

use crate::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let env_filter = std::env::var("RUST_LOG")
        .unwrap_or_else(|_| "careerlog=debug,axum=info,tower_http=info".to_string());
    let json_logs = std::env::var("LOG_FORMAT")
        .map(|v| v == "json")
        .unwrap_or(false);

    if json_logs {
        tracing_subscriber::fmt()
            .with_env_filter(env_filter)
            .with_target(false)
            .json()
            .init();
    } else {
        tracing_subscriber::fmt().with_env_filter(env_filter).init();
    }

    let state = AppState::init().await?;

    // Run migrations if present
    if let Err(e) = sqlx::migrate!("./migrations").run(&state.db).await {
        tracing::warn!(error = %e, "migrations folder not found or migration failed; continuing");
    }

    // Uploads are served from this directory, make sure it exists
    tokio::fs::create_dir_all(&state.config.upload.dir).await?;

    let app = app::build_app(state);
    app::serve(app).await
}
