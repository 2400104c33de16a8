use crate::args::OutputFormat;
use crate::config::Config;
use crate::views::{self, ViewOpts};
use anyhow::{Context, Result};
use scry_index::Database;

pub fn handle(db: &Database, format: OutputFormat, config: &Config) -> Result<()> {
    let records = db.list_documents(config.search.max_results)?;

    let mut docs = Vec::with_capacity(records.len());
    for record in &records {
        let doc: serde_json::Value = serde_json::from_str(&record.body)
            .with_context(|| format!("Stored document {} is not valid JSON", record.id))?;
        docs.push(doc);
    }

    if format == OutputFormat::Json {
        println!("{}", serde_json::to_string_pretty(&docs)?);
        return Ok(());
    }

    let opts = ViewOpts::detect();
    for line in views::docs::format_docs(&docs, &opts) {
        println!("{line}");
    }

    Ok(())
}
