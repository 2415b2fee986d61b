use crate::reminder::Reminder;
use crate::tasks::{HiddenTask, PendingTicket, TaskSnapshot};
use crate::types::{NewTask, Task};

mod navigation;
mod state;
pub use state::{AddTaskForm, FormField, Screen, StatusKind, StatusMessage, TextInput};

pub struct App {
    pub running: bool,
    pub current_screen: Screen,

    // Per-screen snapshots and selection
    pub tasks: TaskSnapshot,
    pub completed: TaskSnapshot,
    pub selected_task: usize,
    pub selected_completed: usize,

    // Add-task modal, Some(_) while open
    pub form: Option<AddTaskForm>,

    pub status: Option<StatusMessage>,
    pub reminder_banner: Option<Reminder>,

    // Loading indicator
    pub is_loading: bool,
    pub throbber_state: throbber_widgets_tui::ThrobberState,
}

impl App {
    pub fn new() -> Self {
        Self {
            running: true,
            current_screen: Screen::Tasks,
            tasks: TaskSnapshot::new(Screen::Tasks.filter()),
            completed: TaskSnapshot::new(Screen::Completed.filter()),
            selected_task: 0,
            selected_completed: 0,
            form: None,
            status: None,
            reminder_banner: None,
            is_loading: false,
            throbber_state: throbber_widgets_tui::ThrobberState::default(),
        }
    }

    pub fn quit(&mut self) {
        self.running = false;
    }

    pub fn snapshot(&self, screen: Screen) -> &TaskSnapshot {
        match screen {
            Screen::Tasks => &self.tasks,
            Screen::Completed => &self.completed,
        }
    }

    pub fn snapshot_mut(&mut self, screen: Screen) -> &mut TaskSnapshot {
        match screen {
            Screen::Tasks => &mut self.tasks,
            Screen::Completed => &mut self.completed,
        }
    }

    /// Replace a screen's snapshot with a fresh read of the store.
    pub fn apply_refresh(&mut self, screen: Screen, tasks: Vec<Task>) {
        self.snapshot_mut(screen).replace(tasks);
        self.clamp_selection(screen);
    }

    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status = Some(StatusMessage {
            kind: StatusKind::Info,
            text: message.into(),
        });
    }

    pub fn set_error(&mut self, message: impl Into<String>) {
        self.status = Some(StatusMessage {
            kind: StatusKind::Error,
            text: message.into(),
        });
    }

    pub fn clear_status(&mut self) {
        self.status = None;
    }

    pub fn show_reminder(&mut self, reminder: Reminder) {
        self.reminder_banner = Some(reminder);
    }

    pub fn dismiss_reminder(&mut self) -> bool {
        self.reminder_banner.take().is_some()
    }

    pub fn open_form(&mut self) {
        self.form = Some(AddTaskForm::default());
    }

    pub fn close_form(&mut self) {
        self.form = None;
    }

    /// Validate the open form. An invalid draft keeps the modal open with the
    /// message; a valid one closes it and shows a pending row.
    pub fn submit_form(&mut self) -> Option<(PendingTicket, NewTask)> {
        let form = self.form.as_mut()?;
        match form.draft().validate() {
            Ok(task) => {
                self.form = None;
                let ticket = self.tasks.add_pending(task.clone());
                Some((ticket, task))
            }
            Err(e) => {
                form.error = Some(e.to_string());
                None
            }
        }
    }

    pub fn selected_task(&self) -> Option<&Task> {
        self.tasks.get(self.selected_task)
    }

    /// Optimistically remove the selected task from the Tasks list.
    pub fn begin_complete(&mut self) -> Option<HiddenTask> {
        let id = self.selected_task()?.id.clone();
        let hidden = self.tasks.hide(&id)?;
        self.clamp_selection(Screen::Tasks);
        Some(hidden)
    }

    /// Put back a task whose completion the store rejected.
    pub fn revert_complete(&mut self, hidden: HiddenTask) {
        self.tasks.restore(hidden);
        self.clamp_selection(Screen::Tasks);
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Priority, TaskId};

    fn task(id: &str) -> Task {
        Task {
            id: TaskId::from(id),
            title: id.to_string(),
            description: String::new(),
            priority: Priority::Medium,
            completed: false,
            reminder_minutes: 5,
            created_at: None,
        }
    }

    #[test]
    fn invalid_submit_keeps_form_open_with_message() {
        let mut app = App::new();
        app.open_form();

        assert!(app.submit_form().is_none());

        let form = app.form.as_ref().unwrap();
        assert_eq!(form.error.as_deref(), Some("Title cannot be empty"));
        assert!(app.tasks.pending().is_empty());
    }

    #[test]
    fn valid_submit_closes_form_and_adds_pending_row() {
        let mut app = App::new();
        app.open_form();
        app.form.as_mut().unwrap().title = TextInput::from_str("Buy milk");

        let (ticket, task) = app.submit_form().unwrap();

        assert!(app.form.is_none());
        assert_eq!(task.title, "Buy milk");
        assert_eq!(app.tasks.pending()[0].ticket, ticket);
    }

    #[test]
    fn begin_and_revert_complete_keep_selection_in_range() {
        let mut app = App::new();
        app.apply_refresh(Screen::Tasks, vec![task("a"), task("b")]);
        app.selected_task = 1;

        let hidden = app.begin_complete().unwrap();
        assert_eq!(hidden.task.id.as_str(), "b");
        assert_eq!(app.selected_task, 0);

        app.revert_complete(hidden);
        assert_eq!(app.tasks.tasks().len(), 2);
    }
}
