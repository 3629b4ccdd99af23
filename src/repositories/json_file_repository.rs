use crate::error::StorageResult;
use crate::models::AddressBook;
use crate::repositories::traits::AddressBookRepository;
use async_trait::async_trait;
use std::ffi::OsString;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

/// Data file used when no other path is configured.
pub const DEFAULT_DATA_FILE: &str = "address_book.json";

/// Address book repository backed by a single JSON file.
///
/// Saves go to a temporary sibling file that is then renamed over the
/// target, so an interrupted save never leaves a truncated book behind.
#[derive(Debug, Clone)]
pub struct JsonFileRepository {
    path: PathBuf,
}

impl JsonFileRepository {
    /// Create a repository reading and writing `path`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(OsString::from)
            .unwrap_or_else(|| OsString::from(DEFAULT_DATA_FILE));
        name.push(".tmp");
        self.path.with_file_name(name)
    }
}

impl Default for JsonFileRepository {
    fn default() -> Self {
        Self::new(DEFAULT_DATA_FILE)
    }
}

#[async_trait]
impl AddressBookRepository for JsonFileRepository {
    async fn load(&self) -> StorageResult<AddressBook> {
        let bytes = match tokio::fs::read(&self.path).await {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                info!(path = %self.path.display(), "No address book file yet, starting empty");
                return Ok(AddressBook::new());
            }
            Err(e) => return Err(e.into()),
        };

        let book: AddressBook = serde_json::from_slice(&bytes)?;
        info!(path = %self.path.display(), contacts = book.len(), "Loaded address book");
        Ok(book)
    }

    async fn save(&self, book: &AddressBook) -> StorageResult<()> {
        let json = serde_json::to_vec_pretty(book)?;

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            tokio::fs::create_dir_all(parent).await?;
        }

        let temp_path = self.temp_path();
        tokio::fs::write(&temp_path, json).await?;
        tokio::fs::rename(&temp_path, &self.path).await?;

        info!(path = %self.path.display(), contacts = book.len(), "Saved address book");
        Ok(())
    }
}

/// Load the book, falling back to an empty one on any storage error.
///
/// The failure is logged; whatever was in the unreadable file is lost on
/// the next save.
pub async fn load_or_empty(repository: &dyn AddressBookRepository) -> AddressBook {
    match repository.load().await {
        Ok(book) => book,
        Err(e) => {
            warn!("Error loading address book, starting empty: {}", e);
            AddressBook::new()
        }
    }
}
