use crate::app::{App, Screen};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::action_queue::{Action, ActionTx};

mod add_task;
mod completed;
mod tasks;

fn enqueue_action(action_tx: &ActionTx, action: Action) {
    let _ = action_tx.send(action);
}

fn switch_to(screen: Screen, app: &mut App, action_tx: &ActionTx) {
    if app.navigate_to(screen) {
        enqueue_action(action_tx, Action::Refresh(screen));
    }
}

pub(super) fn handle_key(key: KeyEvent, app: &mut App, action_tx: &ActionTx) {
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        app.quit();
        return;
    }

    // First key after a reminder only dismisses the banner
    if app.dismiss_reminder() {
        return;
    }

    if app.form.is_some() {
        add_task::handle_add_task_key(key, app, action_tx);
        return;
    }

    match key.code {
        KeyCode::Char('q') | KeyCode::Char('Q') => app.quit(),
        KeyCode::Tab => {
            let screen = app.next_screen();
            enqueue_action(action_tx, Action::Refresh(screen));
        }
        KeyCode::BackTab => {
            let screen = app.previous_screen();
            enqueue_action(action_tx, Action::Refresh(screen));
        }
        KeyCode::Char('1') => switch_to(Screen::Tasks, app, action_tx),
        KeyCode::Char('2') => switch_to(Screen::Completed, app, action_tx),
        KeyCode::Char('r') | KeyCode::Char('R') => {
            enqueue_action(action_tx, Action::Refresh(app.current_screen));
        }
        KeyCode::Up | KeyCode::Char('k') => app.select_previous(),
        KeyCode::Down | KeyCode::Char('j') => app.select_next(),
        _ => match app.current_screen {
            Screen::Tasks => tasks::handle_tasks_key(key, app, action_tx),
            Screen::Completed => completed::handle_completed_key(key, app),
        },
    }
}
