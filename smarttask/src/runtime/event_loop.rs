use crate::app::App;
use crate::reminder::ReminderRx;
use crate::tasks::TaskService;
use crate::ui;
use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{self, Write};
use std::time::Duration;

use super::action_queue::channel;
use super::actions::run_action;
use super::views::handle_key;

pub async fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    service: &TaskService,
    mut reminders: ReminderRx,
) -> Result<()> {
    let (action_tx, mut action_rx) = channel();

    loop {
        terminal.draw(|f| ui::render(f, app))?;

        if app.is_loading {
            app.throbber_state.calc_next();
        }

        if event::poll(Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    handle_key(key, app, &action_tx);
                }
            }
        }

        while let Ok(reminder) = reminders.try_recv() {
            tracing::info!(body = %reminder.body, "reminder fired");
            app.show_reminder(reminder);
            ring_bell(terminal)?;
        }

        while let Ok(action) = action_rx.try_recv() {
            // Draw first so optimistic edits show while the store call runs.
            app.is_loading = true;
            terminal.draw(|f| ui::render(f, app))?;
            run_action(action, app, service).await;
            app.is_loading = false;
        }

        if !app.running {
            break;
        }
    }

    Ok(())
}

fn ring_bell(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>) -> Result<()> {
    let out = terminal.backend_mut();
    out.write_all(b"\x07")?;
    out.flush()?;
    Ok(())
}
