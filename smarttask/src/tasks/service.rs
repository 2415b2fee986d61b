use std::sync::Arc;

use crate::reminder::ReminderScheduler;
use crate::store::{StoreError, TaskStore};
use crate::types::{NewTask, Task, TaskFilter, TaskId};

/// The operations the screens call. Wraps the store and the reminder
/// scheduler; holds no task state of its own.
#[derive(Clone)]
pub struct TaskService {
    store: Arc<dyn TaskStore>,
    reminders: Arc<dyn ReminderScheduler>,
}

impl TaskService {
    pub fn new(store: Arc<dyn TaskStore>, reminders: Arc<dyn ReminderScheduler>) -> Self {
        Self { store, reminders }
    }

    /// Persist a task, then schedule its reminder. A reminder failure is
    /// logged and never affects the stored task.
    pub async fn create(&self, task: &NewTask) -> Result<Task, StoreError> {
        let stored = self.store.create(task).await.inspect_err(|e| {
            tracing::error!("Failed to create task: {}", e);
        })?;

        if let Err(e) = self
            .reminders
            .schedule_one_shot(stored.reminder_minutes, &stored.title)
        {
            tracing::warn!(task = %stored.id, "Could not schedule reminder: {}", e);
        }

        tracing::info!(task = %stored.id, "task created");
        Ok(stored)
    }

    pub async fn list_all(&self) -> Result<Vec<Task>, StoreError> {
        self.store.list_all().await.inspect_err(|e| {
            tracing::error!("Failed to list tasks: {}", e);
        })
    }

    pub async fn list(&self, filter: TaskFilter) -> Result<Vec<Task>, StoreError> {
        Ok(self
            .list_all()
            .await?
            .into_iter()
            .filter(|task| filter.matches(task))
            .collect())
    }

    /// Mark a task complete. An id the store no longer knows is treated as
    /// already done.
    pub async fn mark_complete(&self, id: &TaskId) -> Result<(), StoreError> {
        match self.store.mark_complete(id).await {
            Ok(()) => {
                tracing::info!(task = %id, "task completed");
                Ok(())
            }
            Err(StoreError::NotFound(_)) => {
                tracing::debug!(task = %id, "complete on unknown task ignored");
                Ok(())
            }
            Err(e) => {
                tracing::error!(task = %id, "Failed to complete task: {}", e);
                Err(e)
            }
        }
    }
}
