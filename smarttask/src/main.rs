mod app;
mod bootstrap;
mod cli;
mod config;
mod logging;
mod reminder;
mod runtime;
mod store;
mod tasks;
mod types;
mod ui;

use anyhow::{Context, Result};
use app::App;
use clap::Parser;
use config::SmartTaskConfig;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use reminder::{LocalScheduler, NoopScheduler, PermissionStatus, ReminderScheduler};
use std::io;
use std::sync::Arc;
use store::{DocStoreTaskStore, MemoryTaskStore, TaskStore};
use tasks::TaskService;

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::from_filename(".env.smarttask").ok();
    let cli = cli::Cli::parse();

    match cli.command {
        cli::Commands::ConfigPath => {
            let path = SmartTaskConfig::ensure_config_file()?;
            println!("{}", path.display());
            Ok(())
        }
        cli::Commands::Run => {
            let cfg = SmartTaskConfig::load()?;
            let store = DocStoreTaskStore::from_config(&cfg.store)
                .context("Task store is not configured. Run `smarttask config-path` to find the config file")?;
            run_tui(&cfg, Arc::new(store)).await
        }
        cli::Commands::Dev => {
            let cfg = SmartTaskConfig::load()?;
            println!("Dev mode: using in-memory tasks, nothing is saved");
            run_tui(&cfg, Arc::new(MemoryTaskStore::seeded())).await
        }
    }
}

async fn run_tui(cfg: &SmartTaskConfig, store: Arc<dyn TaskStore>) -> Result<()> {
    logging::init(&SmartTaskConfig::log_path()?)?;

    let (reminder_tx, reminder_rx) = reminder::channel();
    let scheduler: Arc<dyn ReminderScheduler> = if cfg.reminders.enabled {
        Arc::new(LocalScheduler::new(reminder_tx))
    } else {
        Arc::new(NoopScheduler)
    };

    match scheduler.request_permission() {
        PermissionStatus::Granted => tracing::info!("reminders enabled"),
        PermissionStatus::Denied => tracing::warn!("reminders unavailable: not a terminal"),
        PermissionStatus::Unsupported => tracing::info!("reminders disabled by config"),
    }

    let service = TaskService::new(store, scheduler);
    let mut app = App::new();
    bootstrap::initialize_app_state(&mut app, &service).await;

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = runtime::run_app(&mut terminal, &mut app, &service, reminder_rx).await;

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = &res {
        tracing::error!("TUI exited with error: {:?}", err);
    }

    res
}
