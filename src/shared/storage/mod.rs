pub mod local_storage;

pub use local_storage::{FileLocalStorage, LocalStorage, MemoryLocalStorage, StorageError};
