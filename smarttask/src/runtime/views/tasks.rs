use crate::app::App;
use crossterm::event::{KeyCode, KeyEvent};

use super::super::action_queue::{Action, ActionTx};
use super::enqueue_action;

pub(super) fn handle_tasks_key(key: KeyEvent, app: &mut App, action_tx: &ActionTx) {
    match key.code {
        KeyCode::Char('a') | KeyCode::Char('A') => {
            app.clear_status();
            app.open_form();
        }
        KeyCode::Enter | KeyCode::Char('d') | KeyCode::Char('D') => {
            if let Some(hidden) = app.begin_complete() {
                enqueue_action(action_tx, Action::CompleteTask { hidden });
            }
        }
        KeyCode::Home => app.selected_task = 0,
        KeyCode::End => {
            app.selected_task = app.tasks.tasks().len().saturating_sub(1);
        }
        _ => {}
    }
}
