pub mod args;
pub mod canvas;
pub mod config;
pub mod handlers;
pub mod views;

pub use args::{Cli, Commands, IndexCommand, OutputFormat};

use anyhow::{Context, Result};
use scry_index::Database;

pub fn run(cli: Cli) -> Result<()> {
    let data_dir = config::resolve_data_dir(cli.data_dir.as_deref())?;
    std::fs::create_dir_all(&data_dir)
        .with_context(|| format!("Failed to create data directory: {}", data_dir.display()))?;

    let config = config::Config::load_from(&data_dir.join("config.toml"))?;
    let db = Database::open(&data_dir.join("index.db"))?;

    match cli.command {
        Commands::Query { prompt } => {
            handlers::query::handle(&db, &prompt.join(" "), cli.format, &config)
        }
        Commands::Docs => handlers::docs::handle(&db, cli.format, &config),
        Commands::Index { command } => match command {
            IndexCommand::Rebuild => handlers::index::rebuild(&db),
            IndexCommand::Stats => handlers::index::stats(&db),
        },
    }
}
