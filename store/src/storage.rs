use thiserror::Error;

use crate::Task;

/// Key the serialized task list lives under in the backing key-value store.
pub const STORAGE_KEY: &str = "tasks";

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("failed to serialize task list: {0}")]
    Serialize(#[from] serde_json::Error),
    #[error("storage backend rejected the write: {0}")]
    Backend(String),
}

/// The persistence contract between the store and whatever actually holds the
/// bytes (browser local storage in the app, [`MemoryStore`] in tests).
pub trait Storage {
    /// Reads the persisted task list. Absent or malformed data loads as an
    /// empty list; this never fails.
    fn load(&self) -> Vec<Task>;

    /// Writes the whole task list. Persistence is fire-and-forget for
    /// callers — a failed save loses at most the latest change.
    fn save(&mut self, tasks: &[Task]) -> Result<(), StorageError>;
}

/// Serializes a task list into the stored JSON form.
pub fn encode(tasks: &[Task]) -> Result<String, StorageError> {
    Ok(serde_json::to_string(tasks)?)
}

/// Parses a stored blob. Anything that is not a well-formed task array comes
/// back as an empty list — stored data is best-effort, not repaired.
pub fn decode(raw: &str) -> Vec<Task> {
    serde_json::from_str(raw).unwrap_or_default()
}

/// In-memory [`Storage`] backend. Holds the raw blob exactly as a real
/// backend would, so load/save round-trips exercise the same encode/decode
/// path as production.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    blob: Option<String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts from a pre-existing raw blob, as if written by an earlier
    /// session.
    pub fn with_blob(raw: impl Into<String>) -> Self {
        Self {
            blob: Some(raw.into()),
        }
    }
}

impl Storage for MemoryStore {
    fn load(&self) -> Vec<Task> {
        self.blob.as_deref().map(decode).unwrap_or_default()
    }

    fn save(&mut self, tasks: &[Task]) -> Result<(), StorageError> {
        self.blob = Some(encode(tasks)?);
        Ok(())
    }
}
