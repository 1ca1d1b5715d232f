mod config;
pub mod database;
pub mod memory;

pub use config::Config;
pub use database::Database;
pub use memory::MemoryStorage;

use std::path::PathBuf;

use crate::error::StorageError;

/// Durable string key-value storage.
///
/// The history store takes a boxed `Storage` at construction, so tests swap
/// in [`MemoryStorage`] while the application uses the SQLite-backed
/// [`Database`].
pub trait Storage: Send {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;
    fn remove(&self, key: &str) -> Result<(), StorageError>;
}

impl<S: Storage + Sync> Storage for std::sync::Arc<S> {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        self.as_ref().get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.as_ref().set(key, value)
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        self.as_ref().remove(key)
    }
}

/// Returns `~/.config/bubbletimer[-dev]/` based on BUBBLETIMER_ENV.
///
/// Set BUBBLETIMER_ENV=dev to use the development data directory, or
/// BUBBLETIMER_DATA_DIR to point somewhere else entirely (test isolation).
///
/// # Errors
/// Returns an error if the directory cannot be created.
pub fn data_dir() -> Result<PathBuf, Box<dyn std::error::Error>> {
    let dir = match std::env::var("BUBBLETIMER_DATA_DIR") {
        Ok(explicit) => PathBuf::from(explicit),
        Err(_) => {
            let base_dir = dirs::home_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join(".config");
            let env = std::env::var("BUBBLETIMER_ENV").unwrap_or_else(|_| "production".to_string());
            if env == "dev" {
                base_dir.join("bubbletimer-dev")
            } else {
                base_dir.join("bubbletimer")
            }
        }
    };

    std::fs::create_dir_all(&dir)?;
    Ok(dir)
}
