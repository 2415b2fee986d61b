use crate::app::{App, FormField};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::super::action_queue::{Action, ActionTx};
use super::enqueue_action;

fn submit(app: &mut App, action_tx: &ActionTx) {
    if let Some((ticket, task)) = app.submit_form() {
        enqueue_action(action_tx, Action::CreateTask { ticket, task });
    }
}

pub(super) fn handle_add_task_key(key: KeyEvent, app: &mut App, action_tx: &ActionTx) {
    if key.code == KeyCode::Char('s') && key.modifiers.contains(KeyModifiers::CONTROL) {
        submit(app, action_tx);
        return;
    }

    let Some(form) = app.form.as_mut() else {
        return;
    };

    let focused = form.focused;
    match key.code {
        KeyCode::Esc => app.close_form(),
        KeyCode::Tab | KeyCode::Down => form.focus_next(),
        KeyCode::BackTab | KeyCode::Up => form.focus_previous(),
        KeyCode::Enter => match focused {
            FormField::Save => submit(app, action_tx),
            FormField::Cancel => app.close_form(),
            FormField::Priority => form.priority = form.priority.next(),
            FormField::Title | FormField::Description | FormField::Reminder => form.focus_next(),
        },
        KeyCode::Left => {
            if form.focused == FormField::Priority {
                form.priority = form.priority.previous();
            } else if let Some(input) = form.focused_input() {
                input.move_left();
            }
        }
        KeyCode::Right => {
            if form.focused == FormField::Priority {
                form.priority = form.priority.next();
            } else if let Some(input) = form.focused_input() {
                input.move_right();
            }
        }
        KeyCode::Home => {
            if let Some(input) = form.focused_input() {
                input.home();
            }
        }
        KeyCode::End => {
            if let Some(input) = form.focused_input() {
                input.end();
            }
        }
        KeyCode::Backspace => form.backspace(),
        KeyCode::Char(' ') if focused == FormField::Priority => {
            form.priority = form.priority.next();
        }
        KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => form.input_char(c),
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Priority;

    use super::super::super::action_queue::channel;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn ctrl_s() -> KeyEvent {
        KeyEvent::new(KeyCode::Char('s'), KeyModifiers::CONTROL)
    }

    fn type_text(app: &mut App, tx: &ActionTx, text: &str) {
        for c in text.chars() {
            handle_add_task_key(press(KeyCode::Char(c)), app, tx);
        }
    }

    fn open_app() -> App {
        let mut app = App::new();
        app.open_form();
        app
    }

    #[test]
    fn whitespace_title_queues_nothing_and_shows_error() {
        let mut app = open_app();
        let (tx, mut rx) = channel();

        type_text(&mut app, &tx, "   ");
        handle_add_task_key(ctrl_s(), &mut app, &tx);

        assert!(rx.try_recv().is_err());
        assert!(app.tasks.pending().is_empty());
        let form = app.form.as_ref().unwrap();
        assert_eq!(form.error.as_deref(), Some("Title cannot be empty"));
    }

    #[test]
    fn filled_form_queues_create_with_verbatim_fields() {
        let mut app = open_app();
        let (tx, mut rx) = channel();

        type_text(&mut app, &tx, "Buy milk");
        handle_add_task_key(press(KeyCode::Tab), &mut app, &tx);
        type_text(&mut app, &tx, "2%");
        handle_add_task_key(press(KeyCode::Tab), &mut app, &tx);
        handle_add_task_key(press(KeyCode::Right), &mut app, &tx);
        handle_add_task_key(press(KeyCode::Tab), &mut app, &tx);
        handle_add_task_key(press(KeyCode::Backspace), &mut app, &tx);
        type_text(&mut app, &tx, "10");
        handle_add_task_key(press(KeyCode::Tab), &mut app, &tx);
        handle_add_task_key(press(KeyCode::Enter), &mut app, &tx);

        match rx.try_recv() {
            Ok(Action::CreateTask { task, .. }) => {
                assert_eq!(task.title, "Buy milk");
                assert_eq!(task.description, "2%");
                assert_eq!(task.priority, Priority::Low);
                assert_eq!(task.reminder_minutes, 10);
            }
            other => panic!("unexpected action: {other:?}"),
        }
        assert!(app.form.is_none());
        assert_eq!(app.tasks.pending().len(), 1);
    }

    #[test]
    fn escape_discards_form() {
        let mut app = open_app();
        let (tx, mut rx) = channel();

        type_text(&mut app, &tx, "draft");
        handle_add_task_key(press(KeyCode::Esc), &mut app, &tx);

        assert!(app.form.is_none());
        assert!(rx.try_recv().is_err());
    }

    #[test]
    fn enter_on_cancel_closes_form() {
        let mut app = open_app();
        let (tx, _rx) = channel();

        handle_add_task_key(press(KeyCode::BackTab), &mut app, &tx);
        handle_add_task_key(press(KeyCode::Enter), &mut app, &tx);

        assert!(app.form.is_none());
    }
}
