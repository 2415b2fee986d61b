use crate::tasks::TaskDraft;
use crate::types::{Priority, TaskFilter, DEFAULT_REMINDER_MINUTES};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Tasks,
    Completed,
}

impl Screen {
    pub const ALL: [Screen; 2] = [Screen::Tasks, Screen::Completed];

    pub fn title(self) -> &'static str {
        match self {
            Screen::Tasks => "Tasks",
            Screen::Completed => "Completed",
        }
    }

    pub fn filter(self) -> TaskFilter {
        match self {
            Screen::Tasks => TaskFilter::Incomplete,
            Screen::Completed => TaskFilter::Completed,
        }
    }

    pub fn index(self) -> usize {
        match self {
            Screen::Tasks => 0,
            Screen::Completed => 1,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusKind {
    Info,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusMessage {
    pub kind: StatusKind,
    pub text: String,
}

/// A text input with mid-string cursor support.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TextInput {
    pub value: String,
    pub cursor: usize,
}

impl TextInput {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_str(s: &str) -> Self {
        Self {
            value: s.to_string(),
            cursor: s.len(),
        }
    }

    /// Insert a character at the cursor position.
    pub fn insert(&mut self, c: char) {
        self.value.insert(self.cursor, c);
        self.cursor += c.len_utf8();
    }

    /// Delete the character immediately before the cursor (backspace).
    pub fn backspace(&mut self) {
        if self.cursor == 0 {
            return;
        }
        let new_cursor = self.prev_boundary(self.cursor);
        self.value.drain(new_cursor..self.cursor);
        self.cursor = new_cursor;
    }

    pub fn move_left(&mut self) {
        if self.cursor > 0 {
            self.cursor = self.prev_boundary(self.cursor);
        }
    }

    pub fn move_right(&mut self) {
        if self.cursor < self.value.len() {
            self.cursor = self.next_boundary(self.cursor);
        }
    }

    pub fn home(&mut self) {
        self.cursor = 0;
    }
    pub fn end(&mut self) {
        self.cursor = self.value.len();
    }

    /// Returns the string split at the cursor: (before, after).
    pub fn split_at_cursor(&self) -> (&str, &str) {
        (&self.value[..self.cursor], &self.value[self.cursor..])
    }

    fn prev_boundary(&self, pos: usize) -> usize {
        let mut p = pos;
        loop {
            p -= 1;
            if self.value.is_char_boundary(p) {
                return p;
            }
        }
    }
    fn next_boundary(&self, pos: usize) -> usize {
        let mut p = pos + 1;
        while p <= self.value.len() && !self.value.is_char_boundary(p) {
            p += 1;
        }
        p
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    Title,
    Description,
    Priority,
    Reminder,
    Save,
    Cancel,
}

impl FormField {
    fn next(self) -> Self {
        match self {
            FormField::Title => FormField::Description,
            FormField::Description => FormField::Priority,
            FormField::Priority => FormField::Reminder,
            FormField::Reminder => FormField::Save,
            FormField::Save => FormField::Cancel,
            FormField::Cancel => FormField::Title,
        }
    }

    fn previous(self) -> Self {
        match self {
            FormField::Title => FormField::Cancel,
            FormField::Description => FormField::Title,
            FormField::Priority => FormField::Description,
            FormField::Reminder => FormField::Priority,
            FormField::Save => FormField::Reminder,
            FormField::Cancel => FormField::Save,
        }
    }
}

/// Transient state of the add-task modal.
#[derive(Debug, Clone, PartialEq)]
pub struct AddTaskForm {
    pub title: TextInput,
    pub description: TextInput,
    pub priority: Priority,
    pub reminder: TextInput,
    pub focused: FormField,
    pub error: Option<String>,
}

impl Default for AddTaskForm {
    fn default() -> Self {
        Self {
            title: TextInput::new(),
            description: TextInput::new(),
            priority: Priority::default(),
            reminder: TextInput::from_str(&DEFAULT_REMINDER_MINUTES.to_string()),
            focused: FormField::Title,
            error: None,
        }
    }
}

impl AddTaskForm {
    pub fn focus_next(&mut self) {
        self.focused = self.focused.next();
    }

    pub fn focus_previous(&mut self) {
        self.focused = self.focused.previous();
    }

    /// The text input under focus, if the focused field takes text.
    pub fn focused_input(&mut self) -> Option<&mut TextInput> {
        match self.focused {
            FormField::Title => Some(&mut self.title),
            FormField::Description => Some(&mut self.description),
            FormField::Reminder => Some(&mut self.reminder),
            FormField::Priority | FormField::Save | FormField::Cancel => None,
        }
    }

    pub fn input_char(&mut self, c: char) {
        if self.focused == FormField::Reminder && !c.is_ascii_digit() {
            return;
        }
        if let Some(input) = self.focused_input() {
            input.insert(c);
            self.error = None;
        }
    }

    pub fn backspace(&mut self) {
        if let Some(input) = self.focused_input() {
            input.backspace();
            self.error = None;
        }
    }

    pub fn draft(&self) -> TaskDraft {
        TaskDraft {
            title: self.title.value.clone(),
            description: self.description.value.clone(),
            priority: self.priority,
            reminder_minutes: self.reminder.value.clone(),
        }
    }
}
