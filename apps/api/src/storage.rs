//! Local persistence of generated images.
//!
//! Layout: `{root}/{username}_generated_images/image_{i}.png`, 1-based.
//! References handed back to clients are relative to `root`, and the same
//! `root` is served under `/images`.

use std::path::{Path, PathBuf};

use base64::{engine::general_purpose::STANDARD, Engine};
use tracing::info;

use crate::errors::AppError;

const DIR_SUFFIX: &str = "_generated_images";

/// Writes decoded image payloads under a per-username directory.
#[derive(Debug, Clone)]
pub struct ImageStore {
    root: PathBuf,
}

impl ImageStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Directory name for a username. Rejects names that would not stay a
    /// single path component under the root.
    pub fn user_dir_name(username: &str) -> Result<String, AppError> {
        if username.is_empty()
            || username == "."
            || username == ".."
            || username.contains(['/', '\\', '\0'])
        {
            return Err(AppError::Validation(format!(
                "username {username:?} cannot be used as an output directory"
            )));
        }
        Ok(format!("{username}{DIR_SUFFIX}"))
    }

    /// Decodes and writes each base64 payload in order, overwriting files from
    /// earlier requests by the same user. Returns root-relative references.
    pub async fn save_images(
        &self,
        username: &str,
        payloads: &[String],
    ) -> Result<Vec<String>, AppError> {
        let dir_name = Self::user_dir_name(username)?;
        let dir = self.root.join(&dir_name);
        tokio::fs::create_dir_all(&dir).await?;

        let mut references = Vec::with_capacity(payloads.len());
        for (i, payload) in payloads.iter().enumerate() {
            let bytes = STANDARD.decode(payload.trim()).map_err(|e| {
                AppError::Internal(anyhow::anyhow!("image {} is not valid base64: {e}", i + 1))
            })?;

            let file_name = format!("image_{}.png", i + 1);
            tokio::fs::write(dir.join(&file_name), &bytes).await?;
            references.push(format!("{dir_name}/{file_name}"));
        }

        info!("Saved {} images to {}", references.len(), dir.display());
        Ok(references)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_dir_name_is_deterministic() {
        assert_eq!(
            ImageStore::user_dir_name("acme").unwrap(),
            "acme_generated_images"
        );
        assert_eq!(
            ImageStore::user_dir_name("acme").unwrap(),
            ImageStore::user_dir_name("acme").unwrap()
        );
    }

    #[test]
    fn test_user_dir_name_rejects_path_escapes() {
        for bad in ["", ".", "..", "../etc", "a/b", "a\\b"] {
            let err = ImageStore::user_dir_name(bad).unwrap_err();
            assert!(matches!(err, AppError::Validation(_)), "{bad:?}");
        }
    }

    #[tokio::test]
    async fn test_save_images_writes_sequential_files() {
        let root = tempfile::tempdir().unwrap();
        let store = ImageStore::new(root.path());

        let payloads = vec![STANDARD.encode(b"first"), STANDARD.encode(b"second")];
        let refs = store.save_images("acme", &payloads).await.unwrap();

        assert_eq!(
            refs,
            vec![
                "acme_generated_images/image_1.png",
                "acme_generated_images/image_2.png"
            ]
        );
        let first = std::fs::read(root.path().join(&refs[0])).unwrap();
        let second = std::fs::read(root.path().join(&refs[1])).unwrap();
        assert_eq!(first, b"first");
        assert_eq!(second, b"second");
    }

    #[tokio::test]
    async fn test_save_images_overwrites_previous_run() {
        let root = tempfile::tempdir().unwrap();
        let store = ImageStore::new(root.path());

        store
            .save_images("acme", &[STANDARD.encode(b"old")])
            .await
            .unwrap();
        store
            .save_images("acme", &[STANDARD.encode(b"new")])
            .await
            .unwrap();

        let bytes =
            std::fs::read(root.path().join("acme_generated_images/image_1.png")).unwrap();
        assert_eq!(bytes, b"new");
    }

    #[tokio::test]
    async fn test_save_images_rejects_bad_base64() {
        let root = tempfile::tempdir().unwrap();
        let store = ImageStore::new(root.path());

        let err = store
            .save_images("acme", &["not base64!!".to_string()])
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Internal(_)));
    }
}
