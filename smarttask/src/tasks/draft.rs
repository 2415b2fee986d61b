use thiserror::Error;

use crate::types::{NewTask, Priority, DEFAULT_REMINDER_MINUTES};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DraftError {
    #[error("Title cannot be empty")]
    EmptyTitle,
    #[error("Reminder must be a whole number of minutes greater than zero")]
    InvalidReminder,
}

/// Snapshot of the add-task form at the moment Save is pressed.
#[derive(Debug, Clone, PartialEq)]
pub struct TaskDraft {
    pub title: String,
    pub description: String,
    pub priority: Priority,
    pub reminder_minutes: String,
}

impl Default for TaskDraft {
    fn default() -> Self {
        Self {
            title: String::new(),
            description: String::new(),
            priority: Priority::default(),
            reminder_minutes: DEFAULT_REMINDER_MINUTES.to_string(),
        }
    }
}

impl TaskDraft {
    /// Turn the draft into a creation request. Title and description are kept
    /// verbatim; whitespace only matters for the emptiness check.
    pub fn validate(&self) -> Result<NewTask, DraftError> {
        if self.title.trim().is_empty() {
            return Err(DraftError::EmptyTitle);
        }

        Ok(NewTask {
            title: self.title.clone(),
            description: self.description.clone(),
            priority: self.priority,
            reminder_minutes: parse_reminder_minutes(&self.reminder_minutes)?,
        })
    }
}

fn parse_reminder_minutes(raw: &str) -> Result<u32, DraftError> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Ok(DEFAULT_REMINDER_MINUTES);
    }

    match raw.parse::<u32>() {
        Ok(minutes) if minutes > 0 => Ok(minutes),
        _ => Err(DraftError::InvalidReminder),
    }
}
