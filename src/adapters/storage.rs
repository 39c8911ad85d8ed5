use crate::domain::ports::Storage;
use crate::utils::error::Result;
use std::path::PathBuf;

/// Writes under a base directory, creating parents as needed.
#[derive(Debug, Clone)]
pub struct LocalStorage {
    base_path: PathBuf,
}

impl LocalStorage {
    pub fn new<P: Into<PathBuf>>(base_path: P) -> Self {
        Self {
            base_path: base_path.into(),
        }
    }
}

impl Storage for LocalStorage {
    async fn write_file(&self, path: &str, data: &[u8]) -> Result<()> {
        let full_path = self.base_path.join(path);

        if let Some(parent) = full_path.parent() {
            tokio::fs::create_dir_all(parent).await?;
        }

        tokio::fs::write(full_path, data).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_write_creates_missing_directories() {
        let temp_dir = TempDir::new().unwrap();
        let storage = LocalStorage::new(temp_dir.path().join("nested/dist"));

        storage.write_file("index.html", b"<p>hi</p>").await.unwrap();

        let written = std::fs::read(temp_dir.path().join("nested/dist/index.html")).unwrap();
        assert_eq!(written, b"<p>hi</p>");
    }

    #[test]
    fn test_write_under_a_file_is_io_error() {
        let temp_dir = TempDir::new().unwrap();
        std::fs::write(temp_dir.path().join("blocker"), b"").unwrap();
        let storage = LocalStorage::new(temp_dir.path().join("blocker"));

        let result = tokio_test::block_on(storage.write_file("index.html", b"x"));
        assert!(matches!(
            result,
            Err(crate::utils::error::SiteError::IoError(_))
        ));
    }
}
