use axum::{
    extract::{Multipart, State},
    Json,
};
use serde::Serialize;
use tracing::{info, instrument};
use uuid::Uuid;

use crate::auth::extractors::CurrentUser;
use crate::error::ApiError;
use crate::state::AppState;
use crate::storage::file_extension;

pub const ALLOWED_IMAGE_TYPES: [&str; 4] =
    ["image/jpeg", "image/png", "image/gif", "image/webp"];

#[derive(Debug, Serialize)]
pub struct UploadResponse {
    pub url: String,
}

/// Declared content type is trusted; there is no content sniffing.
pub(crate) fn ensure_allowed_type(content_type: &str) -> Result<(), ApiError> {
    if ALLOWED_IMAGE_TYPES.contains(&content_type) {
        return Ok(());
    }
    Err(ApiError::BadRequest(format!(
        "File type '{}' not allowed. Allowed: {}",
        content_type,
        ALLOWED_IMAGE_TYPES.join(", ")
    )))
}

/// Exactly the boundary size is still accepted.
pub(crate) fn ensure_within_limit(size: usize, max_bytes: usize) -> Result<(), ApiError> {
    if size > max_bytes {
        return Err(ApiError::BadRequest(format!(
            "File too large. Maximum size is {}MB.",
            max_bytes / (1024 * 1024)
        )));
    }
    Ok(())
}

#[instrument(skip(state, user, multipart))]
pub async fn upload_file(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    mut multipart: Multipart,
) -> Result<Json<UploadResponse>, ApiError> {
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| ApiError::BadRequest(e.to_string()))?
    {
        if field.name() != Some("file") {
            continue;
        }

        let content_type = field
            .content_type()
            .unwrap_or("application/octet-stream")
            .to_string();
        ensure_allowed_type(&content_type)?;

        let filename = field.file_name().map(str::to_string);
        let data = field
            .bytes()
            .await
            .map_err(|e| ApiError::BadRequest(e.to_string()))?;
        ensure_within_limit(data.len(), state.config.upload.max_bytes())?;

        let name = format!(
            "{}{}",
            Uuid::new_v4().simple(),
            file_extension(filename.as_deref())
        );
        state.storage.put(&name, data).await?;

        info!(user_id = %user.id, name = %name, "file uploaded");
        return Ok(Json(UploadResponse {
            url: format!("/uploads/{name}"),
        }));
    }

    Err(ApiError::BadRequest("file field is required".into()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_disallowed_content_type() {
        let err = ensure_allowed_type("application/pdf").unwrap_err();
        assert_eq!(err.status(), axum::http::StatusCode::BAD_REQUEST);
        assert!(err.to_string().contains("application/pdf"));
        assert!(err.to_string().contains("image/jpeg"));
    }

    #[test]
    fn accepts_every_allowed_type() {
        for ct in ALLOWED_IMAGE_TYPES {
            assert!(ensure_allowed_type(ct).is_ok());
        }
    }

    #[test]
    fn size_limit_is_inclusive() {
        let max = 5 * 1024 * 1024;
        assert!(ensure_within_limit(max, max).is_ok());
        let err = ensure_within_limit(max + 1, max).unwrap_err();
        assert!(err.to_string().contains("Maximum size is 5MB"));
    }
}
