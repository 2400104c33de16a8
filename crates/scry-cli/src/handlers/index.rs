use anyhow::{Context, Result};
use scry_index::Database;

pub fn rebuild(db: &Database) -> Result<()> {
    println!("Rebuilding index from the seed corpus...");
    let report = scry_index::rebuild(db).context("Failed to rebuild index")?;
    println!(
        "Indexed {} documents ({} schema fields).",
        report.documents, report.schema_fields
    );
    Ok(())
}

pub fn stats(db: &Database) -> Result<()> {
    let count = db.count_documents()?;
    println!("Documents: {count}");

    match db.schema()? {
        Some(schema) => {
            println!("Schema fields ({}):", schema.fields.len());
            for field in &schema.fields {
                println!("  {field}");
            }
        }
        None => println!("Schema: not built yet (run `scry index rebuild`)"),
    }

    Ok(())
}
