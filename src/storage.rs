use std::path::PathBuf;

use anyhow::Context;
use async_trait::async_trait;
use bytes::Bytes;

#[async_trait]
pub trait UploadStore: Send + Sync {
    async fn put(&self, name: &str, body: Bytes) -> anyhow::Result<()>;
}

/// Stores uploads in a server-local directory.
pub struct LocalStore {
    dir: PathBuf,
}

impl LocalStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }
}

#[async_trait]
impl UploadStore for LocalStore {
    async fn put(&self, name: &str, body: Bytes) -> anyhow::Result<()> {
        tokio::fs::create_dir_all(&self.dir)
            .await
            .context("create upload dir")?;
        tokio::fs::write(self.dir.join(name), &body)
            .await
            .with_context(|| format!("write upload {name}"))?;
        Ok(())
    }
}

/// Lower-cased extension of the declared filename, dot included. Empty when
/// the filename is missing or has no extension.
pub fn file_extension(filename: Option<&str>) -> String {
    match filename.and_then(|name| name.rsplit_once('.')) {
        Some((_, ext)) if !ext.is_empty() => format!(".{}", ext.to_ascii_lowercase()),
        _ => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    #[test]
    fn extension_is_lowercased() {
        assert_eq!(file_extension(Some("photo.JPG")), ".jpg");
        assert_eq!(file_extension(Some("a.b.PNG")), ".png");
    }

    #[test]
    fn missing_extension_yields_empty() {
        assert_eq!(file_extension(Some("noext")), "");
        assert_eq!(file_extension(Some("trailing.")), "");
        assert_eq!(file_extension(None), "");
    }

    #[tokio::test]
    async fn local_store_writes_bytes() {
        let dir = std::env::temp_dir().join(format!("careerlog-test-{}", Uuid::new_v4()));
        let store = LocalStore::new(dir.clone());
        store
            .put("pic.png", Bytes::from_static(b"\x89PNG"))
            .await
            .expect("put should succeed");

        let written = tokio::fs::read(dir.join("pic.png")).await.expect("read back");
        assert_eq!(written, b"\x89PNG");

        tokio::fs::remove_dir_all(dir).await.ok();
    }
}
