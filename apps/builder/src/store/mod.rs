// Key-value persistence backends: one string value per key.
//
// `AppState` carries an `Arc<dyn KeyValueStore>`, chosen at startup from
// `STORE_BACKEND`.

pub mod file;
pub mod memory;
pub mod redis;

use async_trait::async_trait;
use thiserror::Error;

pub use file::FileStore;
pub use memory::MemoryStore;
pub use self::redis::RedisStore;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Redis error: {0}")]
    Redis(#[from] ::redis::RedisError),

    #[error("Invalid storage key '{0}'")]
    InvalidKey(String),
}

/// Host key-value storage. `get` of a key never written returns `None`.
#[async_trait]
pub trait KeyValueStore: Send + Sync {
    async fn get(&self, key: &str) -> Result<Option<String>, StoreError>;

    async fn set(&self, key: &str, value: &str) -> Result<(), StoreError>;

    /// Short backend name, reported by `/health`.
    fn backend(&self) -> &'static str;
}
