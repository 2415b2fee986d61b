use clap::{Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(name = "smarttask")]
#[command(about = "Terminal task manager with local reminders")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Run against the configured remote task store
    Run,
    /// Run in dev mode with local in-memory data
    Dev,
    /// Print config path and create default file if missing
    ConfigPath,
}
