use std::cmp::Reverse;

use crate::types::{NewTask, Task, TaskFilter, TaskId};

/// Handle for a create that has been shown but not yet confirmed by the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PendingTicket(u64);

#[derive(Debug, Clone, PartialEq)]
pub struct PendingTask {
    pub ticket: PendingTicket,
    pub task: NewTask,
}

/// A task that was optimistically hidden, with enough context to put it back.
#[derive(Debug, Clone, PartialEq)]
pub struct HiddenTask {
    pub task: Task,
    index: usize,
}

/// One screen's local copy of the task list.
///
/// Refreshed wholesale from the store; optimistic edits are layered on top
/// and either confirmed by the next refresh or reverted explicitly.
#[derive(Debug, Clone)]
pub struct TaskSnapshot {
    filter: TaskFilter,
    tasks: Vec<Task>,
    pending: Vec<PendingTask>,
    next_ticket: u64,
    loaded: bool,
}

impl TaskSnapshot {
    pub fn new(filter: TaskFilter) -> Self {
        Self {
            filter,
            tasks: Vec::new(),
            pending: Vec::new(),
            next_ticket: 0,
            loaded: false,
        }
    }

    /// Replace the list with a fresh read of the whole collection. Keeps only
    /// tasks matching this screen's filter, newest first.
    pub fn replace(&mut self, all: Vec<Task>) {
        let mut tasks: Vec<Task> = all
            .into_iter()
            .filter(|task| self.filter.matches(task))
            .collect();
        tasks.sort_by_key(|task| Reverse(task.created_at));
        self.tasks = tasks;
        self.loaded = true;
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn pending(&self) -> &[PendingTask] {
        &self.pending
    }

    pub fn is_loaded(&self) -> bool {
        self.loaded
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty() && self.pending.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Task> {
        self.tasks.get(index)
    }

    pub fn contains(&self, id: &TaskId) -> bool {
        self.tasks.iter().any(|task| &task.id == id)
    }

    /// Optimistically drop a task from view (it is being completed).
    pub fn hide(&mut self, id: &TaskId) -> Option<HiddenTask> {
        let index = self.tasks.iter().position(|task| &task.id == id)?;
        let task = self.tasks.remove(index);
        Some(HiddenTask { task, index })
    }

    /// Undo [`hide`](Self::hide) after the store rejected the write.
    pub fn restore(&mut self, hidden: HiddenTask) {
        if self.contains(&hidden.task.id) {
            return;
        }
        let index = hidden.index.min(self.tasks.len());
        self.tasks.insert(index, hidden.task);
    }

    /// Show a task that is still being written to the store.
    pub fn add_pending(&mut self, task: NewTask) -> PendingTicket {
        self.next_ticket += 1;
        let ticket = PendingTicket(self.next_ticket);
        self.pending.insert(0, PendingTask { ticket, task });
        ticket
    }

    /// Drop a pending row once its write has either landed or failed.
    pub fn resolve_pending(&mut self, ticket: PendingTicket) -> Option<NewTask> {
        let index = self.pending.iter().position(|p| p.ticket == ticket)?;
        Some(self.pending.remove(index).task)
    }
}
