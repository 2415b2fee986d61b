use async_trait::async_trait;
use std::sync::{Arc, Mutex, MutexGuard};
use time::OffsetDateTime;

use super::{StoreError, TaskStore};
use crate::types::{NewTask, Priority, Task, TaskId};

/// In-memory task store for dev mode and tests.
#[derive(Debug, Clone, Default)]
pub struct MemoryTaskStore {
    inner: Arc<Mutex<Inner>>,
}

#[derive(Debug, Default)]
struct Inner {
    tasks: Vec<Task>,
    next_id: u64,
    fail_next_write: Option<String>,
}

impl MemoryTaskStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store pre-filled with a few sample tasks.
    pub fn seeded() -> Self {
        let store = Self::new();
        {
            let mut inner = store.lock();
            for (title, description, priority, minutes, completed) in seed_tasks() {
                let id = inner.assign_id();
                inner.tasks.push(Task {
                    id,
                    title: title.to_string(),
                    description: description.to_string(),
                    priority,
                    completed,
                    reminder_minutes: minutes,
                    created_at: Some(OffsetDateTime::now_utc()),
                });
            }
        }
        store
    }

    /// Make the next `create` or `mark_complete` fail as if the network dropped.
    #[cfg(test)]
    pub fn fail_next_write(&self, message: impl Into<String>) {
        self.lock().fail_next_write = Some(message.into());
    }

    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.lock().tasks.len()
    }

    /// Snapshot of all stored tasks (for test assertions).
    #[cfg(test)]
    pub fn all_tasks(&self) -> Vec<Task> {
        self.lock().tasks.clone()
    }

    fn lock(&self) -> MutexGuard<'_, Inner> {
        self.inner
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl Inner {
    fn assign_id(&mut self) -> TaskId {
        self.next_id += 1;
        TaskId::new(format!("dev-task-{}", self.next_id))
    }

    fn take_failure(&mut self) -> Result<(), StoreError> {
        match self.fail_next_write.take() {
            Some(message) => Err(StoreError::Unavailable(message)),
            None => Ok(()),
        }
    }
}

#[async_trait]
impl TaskStore for MemoryTaskStore {
    async fn create(&self, task: &NewTask) -> Result<Task, StoreError> {
        let mut inner = self.lock();
        inner.take_failure()?;
        let id = inner.assign_id();
        let stored = task.clone().into_task(id, Some(OffsetDateTime::now_utc()));
        inner.tasks.push(stored.clone());
        Ok(stored)
    }

    async fn list_all(&self) -> Result<Vec<Task>, StoreError> {
        Ok(self.lock().tasks.clone())
    }

    async fn mark_complete(&self, id: &TaskId) -> Result<(), StoreError> {
        let mut inner = self.lock();
        inner.take_failure()?;
        match inner.tasks.iter_mut().find(|task| &task.id == id) {
            Some(task) => {
                task.completed = true;
                Ok(())
            }
            None => Err(StoreError::NotFound(id.clone())),
        }
    }
}

fn seed_tasks() -> Vec<(&'static str, &'static str, Priority, u32, bool)> {
    vec![
        ("Water the plants", "Balcony and kitchen", Priority::Low, 30, false),
        ("Finish quarterly report", "Send draft to Anna", Priority::High, 15, false),
        ("Book dentist appointment", "", Priority::Medium, 60, false),
        ("Renew library card", "Bring ID", Priority::Low, 5, true),
    ]
}
