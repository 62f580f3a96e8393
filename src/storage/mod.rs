mod file;
mod memory;

pub use file::FileStore;
pub use memory::MemoryStore;

use thiserror::Error;

// Blob keys shared with the mobile app's local storage.
pub const SESSION_KEY: &str = "bustrack_user";
pub const USERS_KEY: &str = "bustrack_users";
pub const BUSES_KEY: &str = "bustrack_buses";
pub const ASSIGNMENTS_KEY: &str = "bustrack_assignments";

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("storage I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("serialization error: {0}")]
    Serde(#[from] serde_json::Error),
}

/// Opaque key-value persistence for JSON blobs. Each read and write is a
/// discrete, completed operation; there is no partial or streamed state.
pub trait BlobStore {
    fn read(&self, key: &str) -> Result<Option<String>, StorageError>;

    fn write(&self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Removing an absent key is a no-op, not an error.
    fn remove(&self, key: &str) -> Result<(), StorageError>;
}
