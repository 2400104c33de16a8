use crate::args::OutputFormat;
use crate::canvas;
use crate::config::Config;
use crate::views::{self, ViewOpts};
use anyhow::Result;
use owo_colors::OwoColorize;
use scry_index::Database;
use scry_types::Intent;

pub fn handle(db: &Database, prompt: &str, format: OutputFormat, config: &Config) -> Result<()> {
    let response = scry_engine::run_query(db, prompt, config.search.max_results);

    if format == OutputFormat::Json {
        println!("{}", serde_json::to_string_pretty(&response)?);
        return Ok(());
    }

    let opts = ViewOpts::detect();

    if response.intent == Intent::Error {
        let message = response.error.as_deref().unwrap_or("query failed");
        for line in views::error::format_error_panel(message, &opts) {
            println!("{line}");
        }
        return Ok(());
    }

    let intent_line = format!("intent: {}", response.intent);
    if opts.enable_color {
        println!("{}", intent_line.bright_black());
    } else {
        println!("{intent_line}");
    }

    let results_json = match &response.results {
        Some(results) => serde_json::to_value(results)?,
        None => serde_json::Value::Null,
    };
    let canvas = canvas::render_results(&results_json);
    for line in views::canvas::format_canvas(&canvas, &opts) {
        println!("{line}");
    }

    Ok(())
}
