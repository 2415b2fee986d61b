use std::fmt;

use strum::{Display, EnumString};
use time::OffsetDateTime;

/// Reminder delay used when the form field is left empty.
pub const DEFAULT_REMINDER_MINUTES: u32 = 5;

/// A task identifier assigned by the task store.
///
/// Wraps the store's document key; never generated on the client.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TaskId(String);

impl TaskId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for TaskId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<String> for TaskId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Display, EnumString)]
#[strum(ascii_case_insensitive)]
pub enum Priority {
    High,
    #[default]
    Medium,
    Low,
}

impl Priority {
    pub fn next(self) -> Self {
        match self {
            Priority::High => Priority::Medium,
            Priority::Medium => Priority::Low,
            Priority::Low => Priority::High,
        }
    }

    pub fn previous(self) -> Self {
        match self {
            Priority::High => Priority::Low,
            Priority::Medium => Priority::High,
            Priority::Low => Priority::Medium,
        }
    }
}

/// A persisted task.
#[derive(Debug, Clone, PartialEq)]
pub struct Task {
    pub id: TaskId,
    pub title: String,
    pub description: String,
    pub priority: Priority,
    pub completed: bool,
    pub reminder_minutes: u32,
    /// Store metadata, used for display ordering only.
    pub created_at: Option<OffsetDateTime>,
}

/// A validated creation request. Becomes a [`Task`] once the store assigns an id.
#[derive(Debug, Clone, PartialEq)]
pub struct NewTask {
    pub title: String,
    pub description: String,
    pub priority: Priority,
    pub reminder_minutes: u32,
}

impl NewTask {
    pub fn into_task(self, id: TaskId, created_at: Option<OffsetDateTime>) -> Task {
        Task {
            id,
            title: self.title,
            description: self.description,
            priority: self.priority,
            completed: false,
            reminder_minutes: self.reminder_minutes,
            created_at,
        }
    }
}

/// Which side of the `completed` flag a screen shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskFilter {
    Incomplete,
    Completed,
}

impl TaskFilter {
    pub fn matches(self, task: &Task) -> bool {
        match self {
            TaskFilter::Incomplete => !task.completed,
            TaskFilter::Completed => task.completed,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn priority_parses_case_insensitively() {
        assert_eq!("low".parse::<Priority>().unwrap(), Priority::Low);
        assert_eq!("HIGH".parse::<Priority>().unwrap(), Priority::High);
        assert!("urgent".parse::<Priority>().is_err());
    }

    #[test]
    fn priority_cycles_both_ways() {
        assert_eq!(Priority::Medium.next(), Priority::Low);
        assert_eq!(Priority::Low.next(), Priority::High);
        assert_eq!(Priority::High.previous(), Priority::Low);
        assert_eq!(Priority::default(), Priority::Medium);
    }

    #[test]
    fn new_task_starts_incomplete() {
        let task = NewTask {
            title: "Buy milk".to_string(),
            description: "2%".to_string(),
            priority: Priority::Low,
            reminder_minutes: 10,
        }
        .into_task(TaskId::from("t1"), None);

        assert!(!task.completed);
        assert!(TaskFilter::Incomplete.matches(&task));
        assert!(!TaskFilter::Completed.matches(&task));
    }
}
