//! Task list store: the data model, the action reducer, and the persistence
//! contract shared by every task list frontend.
//!
//! The store itself never touches the browser or the filesystem. State is
//! threaded explicitly through [`Store::apply`], and persistence happens
//! through whatever [`Storage`] implementation the embedding layer injects.

mod action;
mod apply;
mod storage;
mod task;

pub use action::Action;
pub use apply::{InsertOrder, Store};
pub use storage::{decode, encode, MemoryStore, Storage, StorageError, STORAGE_KEY};
pub use task::{IdSource, RandomIds, SequentialIds, Task};
