use crate::app::App;
use crossterm::event::{KeyCode, KeyEvent};

pub(super) fn handle_completed_key(key: KeyEvent, app: &mut App) {
    match key.code {
        KeyCode::Home => app.selected_completed = 0,
        KeyCode::End => {
            app.selected_completed = app.completed.tasks().len().saturating_sub(1);
        }
        _ => {}
    }
}
