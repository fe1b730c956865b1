//! Flat-file page store module
//!
//! One file per page, `<title>.txt` under the configured data directory.
//! Titles arrive pre-validated as `Title` values, so the joined path can
//! never escape the data directory.

use std::path::{Path, PathBuf};
use thiserror::Error;
use tokio::io::AsyncWriteExt;

use super::page::Page;
use super::title::Title;

/// Owner-only permissions for page files
#[cfg(unix)]
const PAGE_FILE_MODE: u32 = 0o600;

/// Page storage failure
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("page not found: {0}")]
    NotFound(String),
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Filesystem-backed page store
pub struct PageStore {
    data_dir: PathBuf,
}

impl PageStore {
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    fn page_path(&self, title: &Title) -> PathBuf {
        self.data_dir.join(format!("{title}.txt"))
    }

    /// Load a page by title
    ///
    /// # Returns
    /// * `Ok(Page)` - the stored page with its full body
    /// * `Err(StoreError::NotFound)` - no file for this title
    /// * `Err(StoreError::Io)` - any other read failure
    pub async fn load(&self, title: &Title) -> Result<Page, StoreError> {
        let path = self.page_path(title);
        match tokio::fs::read(&path).await {
            Ok(body) => Ok(Page::new(title.clone(), body)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                Err(StoreError::NotFound(title.to_string()))
            }
            Err(e) => Err(StoreError::Io(e)),
        }
    }

    /// Persist a page, overwriting any previous body (last writer wins)
    pub async fn save(&self, page: &Page) -> Result<(), StoreError> {
        let path = self.page_path(&page.title);
        let mut options = tokio::fs::OpenOptions::new();
        options.write(true).create(true).truncate(true);
        #[cfg(unix)]
        options.mode(PAGE_FILE_MODE);

        let mut file = options.open(&path).await?;
        file.write_all(&page.body).await?;
        file.flush().await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wiki::title::TitleValidator;

    fn title(s: &str) -> Title {
        TitleValidator::new().validate(s).unwrap()
    }

    #[tokio::test]
    async fn test_save_then_load_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let store = PageStore::new(dir.path());
        let page = Page::new(title("TestPage"), b"This is a sample Page.".to_vec());

        store.save(&page).await.unwrap();
        let loaded = store.load(&title("TestPage")).await.unwrap();
        assert_eq!(loaded.body, b"This is a sample Page.");
        assert_eq!(loaded.title.as_str(), "TestPage");
    }

    #[tokio::test]
    async fn test_load_missing_is_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let store = PageStore::new(dir.path());

        let err = store.load(&title("Nope")).await.unwrap_err();
        assert!(matches!(err, StoreError::NotFound(t) if t == "Nope"));
    }

    #[tokio::test]
    async fn test_last_write_wins() {
        let dir = tempfile::tempdir().unwrap();
        let store = PageStore::new(dir.path());

        store
            .save(&Page::new(title("Race"), b"first".to_vec()))
            .await
            .unwrap();
        store
            .save(&Page::new(title("Race"), b"second".to_vec()))
            .await
            .unwrap();

        let loaded = store.load(&title("Race")).await.unwrap();
        assert_eq!(loaded.body, b"second");
    }

    #[tokio::test]
    async fn test_overwrite_truncates_longer_body() {
        let dir = tempfile::tempdir().unwrap();
        let store = PageStore::new(dir.path());

        store
            .save(&Page::new(title("Shrink"), b"a much longer body".to_vec()))
            .await
            .unwrap();
        store
            .save(&Page::new(title("Shrink"), b"short".to_vec()))
            .await
            .unwrap();

        let loaded = store.load(&title("Shrink")).await.unwrap();
        assert_eq!(loaded.body, b"short");
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_page_file_is_owner_only() {
        use std::os::unix::fs::PermissionsExt;

        let dir = tempfile::tempdir().unwrap();
        let store = PageStore::new(dir.path());
        store
            .save(&Page::new(title("Secret"), b"data".to_vec()))
            .await
            .unwrap();

        let meta = std::fs::metadata(dir.path().join("Secret.txt")).unwrap();
        assert_eq!(meta.permissions().mode() & 0o777, 0o600);
    }

    #[tokio::test]
    async fn test_pages_are_stored_as_title_txt() {
        let dir = tempfile::tempdir().unwrap();
        let store = PageStore::new(dir.path());
        store
            .save(&Page::new(title("Layout"), b"x".to_vec()))
            .await
            .unwrap();

        assert!(dir.path().join("Layout.txt").is_file());
    }
}
