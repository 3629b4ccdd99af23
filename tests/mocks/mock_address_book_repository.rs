use async_trait::async_trait;
use contact_book::error::{StorageError, StorageResult};
use contact_book::models::AddressBook;
use contact_book::repositories::AddressBookRepository;
use std::collections::HashMap;
use std::io;
use std::sync::{Arc, Mutex};

/// Mock address book repository for testing.
///
/// Keeps the "stored" book in memory, can be told to fail loads or saves,
/// and tracks method calls for verification.
#[allow(dead_code)]
#[derive(Clone)]
pub struct MockAddressBookRepository {
    stored: Arc<Mutex<Option<AddressBook>>>,
    fail_load: Arc<Mutex<bool>>,
    fail_save: Arc<Mutex<bool>>,
    call_counts: Arc<Mutex<HashMap<String, usize>>>,
}

#[allow(dead_code)]
impl MockAddressBookRepository {
    /// Create a repository with nothing stored yet.
    pub fn new() -> Self {
        Self {
            stored: Arc::new(Mutex::new(None)),
            fail_load: Arc::new(Mutex::new(false)),
            fail_save: Arc::new(Mutex::new(false)),
            call_counts: Arc::new(Mutex::new(HashMap::new())),
        }
    }

    /// Create a repository that already holds `book`.
    pub fn with_book(book: AddressBook) -> Self {
        let repo = Self::new();
        *repo.stored.lock().unwrap() = Some(book);
        repo
    }

    /// Make every subsequent load fail.
    pub fn fail_loads(&self) {
        *self.fail_load.lock().unwrap() = true;
    }

    /// Make every subsequent save fail.
    pub fn fail_saves(&self) {
        *self.fail_save.lock().unwrap() = true;
    }

    /// The last saved book, if any.
    pub fn stored(&self) -> Option<AddressBook> {
        self.stored.lock().unwrap().clone()
    }

    /// Get the number of times a method was called.
    pub fn get_call_count(&self, method: &str) -> usize {
        let counts = self.call_counts.lock().unwrap();
        *counts.get(method).unwrap_or(&0)
    }

    fn track_call(&self, method: &str) {
        let mut counts = self.call_counts.lock().unwrap();
        *counts.entry(method.to_string()).or_insert(0) += 1;
    }
}

impl Default for MockAddressBookRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl AddressBookRepository for MockAddressBookRepository {
    async fn load(&self) -> StorageResult<AddressBook> {
        self.track_call("load");

        if *self.fail_load.lock().unwrap() {
            return Err(StorageError::Io(io::Error::new(
                io::ErrorKind::PermissionDenied,
                "mock load failure",
            )));
        }

        Ok(self.stored.lock().unwrap().clone().unwrap_or_default())
    }

    async fn save(&self, book: &AddressBook) -> StorageResult<()> {
        self.track_call("save");

        if *self.fail_save.lock().unwrap() {
            return Err(StorageError::Io(io::Error::new(
                io::ErrorKind::Other,
                "mock save failure",
            )));
        }

        *self.stored.lock().unwrap() = Some(book.clone());
        Ok(())
    }
}
