use store::{decode, encode, Storage, StorageError, Task, STORAGE_KEY};
use web_sys::window;

/// Task list persistence over the browser's `localStorage`.
///
/// When the window or its storage is unavailable (blocked storage, non-DOM
/// host) loads come back empty and saves fail; the app keeps running on
/// in-memory state either way.
pub struct LocalStore {
    backend: Option<web_sys::Storage>,
    key: &'static str,
}

impl LocalStore {
    pub fn new() -> Self {
        Self::with_key(STORAGE_KEY)
    }

    pub fn with_key(key: &'static str) -> Self {
        let backend = window().and_then(|w| w.local_storage().ok()).flatten();
        Self { backend, key }
    }
}

impl Default for LocalStore {
    fn default() -> Self {
        Self::new()
    }
}

impl Storage for LocalStore {
    fn load(&self) -> Vec<Task> {
        match self.backend.as_ref().map(|b| b.get_item(self.key)) {
            Some(Ok(Some(raw))) => decode(&raw),
            _ => Vec::new(),
        }
    }

    fn save(&mut self, tasks: &[Task]) -> Result<(), StorageError> {
        let Some(backend) = self.backend.as_ref() else {
            return Err(StorageError::Backend("local storage is unavailable".into()));
        };
        let blob = encode(tasks)?;
        backend
            .set_item(self.key, &blob)
            .map_err(|_| StorageError::Backend("local storage write was rejected".into()))
    }
}
