use crate::error::StorageResult;
use crate::models::AddressBook;
use async_trait::async_trait;

/// Repository for persisting the address book.
///
/// The whole book is read and written as one unit, enabling different
/// implementations (JSON file, in-memory mock).
#[async_trait]
pub trait AddressBookRepository: Send + Sync {
    /// Load the stored book. Nothing stored yet yields an empty book.
    async fn load(&self) -> StorageResult<AddressBook>;

    /// Replace the stored book with `book`.
    async fn save(&self, book: &AddressBook) -> StorageResult<()>;
}
