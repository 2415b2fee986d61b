use crate::app::{App, Screen};
use crate::runtime::refresh_screen;
use crate::tasks::TaskService;

/// Load both screens before the first frame. Failures land in the status line.
pub async fn initialize_app_state(app: &mut App, service: &TaskService) {
    app.is_loading = true;

    for screen in Screen::ALL {
        refresh_screen(app, service, screen).await;
    }

    app.is_loading = false;
}
