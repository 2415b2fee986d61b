use async_trait::async_trait;
use thiserror::Error;

use crate::types::{NewTask, Task, TaskId};

mod memory;
mod remote;

pub use memory::MemoryTaskStore;
pub use remote::DocStoreTaskStore;

/// Errors that can occur when talking to the task store.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("task not found: {0}")]
    NotFound(TaskId),
    #[error("not authorized to access the task store: {0}")]
    Unauthorized(String),
    #[error("task store unavailable: {0}")]
    Unavailable(String),
    #[error("malformed task document: {0}")]
    Malformed(String),
}

/// The system of record for tasks.
///
/// Implementations only ever see validated input; ids are assigned here and
/// nowhere else.
#[async_trait]
pub trait TaskStore: Send + Sync + 'static {
    /// Persist a new task with `completed = false` and return it with its id.
    async fn create(&self, task: &NewTask) -> Result<Task, StoreError>;

    /// Every stored task, in no particular order.
    async fn list_all(&self) -> Result<Vec<Task>, StoreError>;

    /// Set `completed = true`. Fails with [`StoreError::NotFound`] for unknown ids.
    async fn mark_complete(&self, id: &TaskId) -> Result<(), StoreError>;
}
