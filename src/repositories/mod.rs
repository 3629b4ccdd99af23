mod json_file_repository;
mod traits;

pub use json_file_repository::{load_or_empty, JsonFileRepository, DEFAULT_DATA_FILE};
pub use traits::AddressBookRepository;
