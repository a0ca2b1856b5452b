use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One to-do entry.
///
/// `details` and `complete` default when absent so blobs written before
/// either field existed still deserialize.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    pub id: Uuid,
    pub title: String,
    #[serde(default)]
    pub details: String,
    #[serde(default)]
    pub complete: bool,
}

impl Task {
    pub fn new(id: Uuid, title: String, details: String) -> Self {
        Self {
            id,
            title,
            details,
            complete: false,
        }
    }
}

/// Source of fresh task ids. Injected into the [`crate::Store`] so callers
/// control determinism.
pub trait IdSource {
    fn next_id(&mut self) -> Uuid;
}

/// Production id source: random v4 UUIDs.
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomIds;

impl IdSource for RandomIds {
    fn next_id(&mut self) -> Uuid {
        Uuid::new_v4()
    }
}

/// Deterministic id source: 1, 2, 3, ... encoded as UUIDs. Meant for tests.
#[derive(Debug, Clone, Default)]
pub struct SequentialIds(u128);

impl IdSource for SequentialIds {
    fn next_id(&mut self) -> Uuid {
        self.0 += 1;
        Uuid::from_u128(self.0)
    }
}
