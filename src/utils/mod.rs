// Shared helpers

pub mod constants;
pub mod lifetime;
pub mod storage;

pub use constants::*;
pub use lifetime::Lifetime;
pub use storage::{BrowserStorage, KeyValueStorage, MemoryStorage, StorageError};
