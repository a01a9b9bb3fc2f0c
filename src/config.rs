use std::path::PathBuf;

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct JwtConfig {
    pub secret: String,
    pub ttl_minutes: i64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GoogleConfig {
    pub client_id: String,
    pub client_secret: String,
    pub redirect_uri: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct UploadConfig {
    pub dir: PathBuf,
    pub max_size_mb: usize,
}

impl UploadConfig {
    pub fn max_bytes(&self) -> usize {
        self.max_size_mb * 1024 * 1024
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub database_url: String,
    pub jwt: JwtConfig,
    pub google: GoogleConfig,
    pub upload: UploadConfig,
}

impl AppConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        let database_url = std::env::var("DATABASE_URL")?;
        let jwt = JwtConfig {
            secret: std::env::var("JWT_SECRET")?,
            ttl_minutes: std::env::var("JWT_TTL_MINUTES")
                .ok()
                .and_then(|v| v.parse::<i64>().ok())
                .unwrap_or(1440),
        };
        let google = GoogleConfig {
            client_id: std::env::var("GOOGLE_CLIENT_ID").unwrap_or_default(),
            client_secret: std::env::var("GOOGLE_CLIENT_SECRET").unwrap_or_default(),
            redirect_uri: std::env::var("GOOGLE_REDIRECT_URI")
                .unwrap_or_else(|_| "http://localhost:5173/auth/callback".into()),
        };
        let upload = UploadConfig {
            dir: std::env::var("UPLOAD_DIR")
                .unwrap_or_else(|_| "uploads".into())
                .into(),
            max_size_mb: std::env::var("MAX_UPLOAD_SIZE_MB")
                .ok()
                .and_then(|v| v.parse::<usize>().ok())
                .unwrap_or(5),
        };
        Ok(Self {
            database_url,
            jwt,
            google,
            upload,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn max_bytes_scales_megabytes() {
        let upload = UploadConfig {
            dir: "uploads".into(),
            max_size_mb: 5,
        };
        assert_eq!(upload.max_bytes(), 5 * 1024 * 1024);
    }
}
