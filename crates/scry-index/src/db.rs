use crate::error::Result;
use rusqlite::{params, Connection, OptionalExtension};
use std::path::Path;

// NOTE: Storage design
//
// Documents are stored whole, as serialized JSON, and searched as text. The
// corpus is small and its shape is deliberately unconstrained (the renderer
// downstream accepts anything), so a parsed column layout would only pin a
// schema the documents don't promise to keep. The `schema` table is derived
// data: the union of field paths across the corpus, refreshed on rebuild.

/// One stored document. `body` is the raw JSON source.
#[derive(Debug, Clone)]
pub struct DocumentRecord {
    pub id: String,
    pub doc_type: String,
    pub body: String,
    pub indexed_at: Option<String>,
}

/// The derived schema row: unique field paths across all documents.
#[derive(Debug, Clone)]
pub struct SchemaRecord {
    pub fields: Vec<String>,
    pub doc_count: usize,
}

pub struct Database {
    conn: Connection,
}

impl Database {
    pub fn open(db_path: &Path) -> Result<Self> {
        let conn = Connection::open(db_path)?;
        let db = Self { conn };
        db.init_schema()?;
        Ok(db)
    }

    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        let db = Self { conn };
        db.init_schema()?;
        Ok(db)
    }

    fn init_schema(&self) -> Result<()> {
        self.conn.execute_batch(
            r#"
            CREATE TABLE IF NOT EXISTS documents (
                id TEXT PRIMARY KEY,
                doc_type TEXT NOT NULL,
                body TEXT NOT NULL,
                indexed_at TEXT
            );

            CREATE TABLE IF NOT EXISTS schema (
                id TEXT PRIMARY KEY,
                fields TEXT NOT NULL,
                doc_count INTEGER NOT NULL
            );

            CREATE INDEX IF NOT EXISTS idx_documents_type ON documents(doc_type);
            "#,
        )?;

        Ok(())
    }

    /// Drops all documents and the derived schema row. Used by rebuild.
    pub fn reset(&self) -> Result<()> {
        self.conn.execute_batch(
            r#"
            DELETE FROM documents;
            DELETE FROM schema;
            "#,
        )?;
        Ok(())
    }

    pub fn insert_document(&self, doc: &DocumentRecord) -> Result<()> {
        self.conn.execute(
            r#"
            INSERT INTO documents (id, doc_type, body, indexed_at)
            VALUES (?1, ?2, ?3, ?4)
            ON CONFLICT(id) DO UPDATE SET
                doc_type = excluded.doc_type,
                body = excluded.body,
                indexed_at = excluded.indexed_at
            "#,
            params![doc.id, doc.doc_type, doc.body, doc.indexed_at],
        )?;
        Ok(())
    }

    pub fn get_document(&self, id: &str) -> Result<Option<DocumentRecord>> {
        let record = self
            .conn
            .query_row(
                "SELECT id, doc_type, body, indexed_at FROM documents WHERE id = ?1",
                params![id],
                row_to_document,
            )
            .optional()?;
        Ok(record)
    }

    /// All documents in insertion order, capped at `limit`.
    pub fn list_documents(&self, limit: usize) -> Result<Vec<DocumentRecord>> {
        let mut stmt = self.conn.prepare(
            "SELECT id, doc_type, body, indexed_at FROM documents ORDER BY rowid LIMIT ?1",
        )?;
        let rows = stmt.query_map(params![limit as i64], row_to_document)?;
        collect_documents(rows)
    }

    pub fn count_documents(&self) -> Result<usize> {
        let count: i64 = self
            .conn
            .query_row("SELECT COUNT(*) FROM documents", [], |row| row.get(0))?;
        Ok(count as usize)
    }

    /// Case-insensitive substring match over document bodies.
    pub fn search_term(&self, term: &str, limit: usize) -> Result<Vec<DocumentRecord>> {
        let pattern = format!("%{}%", escape_like(term));
        let mut stmt = self.conn.prepare(
            r#"
            SELECT id, doc_type, body, indexed_at FROM documents
            WHERE body LIKE ?1 ESCAPE '\'
            ORDER BY rowid LIMIT ?2
            "#,
        )?;
        let rows = stmt.query_map(params![pattern, limit as i64], row_to_document)?;
        collect_documents(rows)
    }

    /// Identifier lookup: exact id match, or the identifier appearing
    /// anywhere in a body (advisories reference each other in nested fields).
    pub fn search_id(&self, id: &str, limit: usize) -> Result<Vec<DocumentRecord>> {
        let pattern = format!("%{}%", escape_like(id));
        let mut stmt = self.conn.prepare(
            r#"
            SELECT id, doc_type, body, indexed_at FROM documents
            WHERE id = ?1 COLLATE NOCASE OR body LIKE ?2 ESCAPE '\'
            ORDER BY rowid LIMIT ?3
            "#,
        )?;
        let rows = stmt.query_map(params![id, pattern, limit as i64], row_to_document)?;
        collect_documents(rows)
    }

    pub fn update_schema(&self, fields: &[String], doc_count: usize) -> Result<()> {
        let fields_json = serde_json::to_string(fields)?;
        self.conn.execute(
            r#"
            INSERT INTO schema (id, fields, doc_count)
            VALUES ('current', ?1, ?2)
            ON CONFLICT(id) DO UPDATE SET
                fields = excluded.fields,
                doc_count = excluded.doc_count
            "#,
            params![fields_json, doc_count as i64],
        )?;
        Ok(())
    }

    pub fn schema(&self) -> Result<Option<SchemaRecord>> {
        let row = self
            .conn
            .query_row(
                "SELECT fields, doc_count FROM schema WHERE id = 'current'",
                [],
                |row| {
                    let fields: String = row.get(0)?;
                    let doc_count: i64 = row.get(1)?;
                    Ok((fields, doc_count))
                },
            )
            .optional()?;

        match row {
            Some((fields_json, doc_count)) => {
                let fields: Vec<String> = serde_json::from_str(&fields_json)?;
                Ok(Some(SchemaRecord {
                    fields,
                    doc_count: doc_count as usize,
                }))
            }
            None => Ok(None),
        }
    }
}

fn row_to_document(row: &rusqlite::Row<'_>) -> rusqlite::Result<DocumentRecord> {
    Ok(DocumentRecord {
        id: row.get(0)?,
        doc_type: row.get(1)?,
        body: row.get(2)?,
        indexed_at: row.get(3)?,
    })
}

fn collect_documents(
    rows: impl Iterator<Item = rusqlite::Result<DocumentRecord>>,
) -> Result<Vec<DocumentRecord>> {
    let mut documents = Vec::new();
    for row in rows {
        documents.push(row?);
    }
    Ok(documents)
}

/// Escapes LIKE wildcards so user terms match literally.
fn escape_like(term: &str) -> String {
    term.replace('\\', "\\\\")
        .replace('%', "\\%")
        .replace('_', "\\_")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn doc(id: &str, doc_type: &str, body: &str) -> DocumentRecord {
        DocumentRecord {
            id: id.to_string(),
            doc_type: doc_type.to_string(),
            body: body.to_string(),
            indexed_at: Some("2026-08-01T00:00:00Z".to_string()),
        }
    }

    #[test]
    fn test_schema_initialization() {
        let db = Database::open_in_memory().unwrap();
        assert_eq!(db.count_documents().unwrap(), 0);
        assert!(db.schema().unwrap().is_none());
    }

    #[test]
    fn test_insert_and_get_document() {
        let db = Database::open_in_memory().unwrap();
        db.insert_document(&doc("c-1", "component", r#"{"name":"log4j-core"}"#))
            .unwrap();

        let retrieved = db.get_document("c-1").unwrap().unwrap();
        assert_eq!(retrieved.doc_type, "component");
        assert!(retrieved.body.contains("log4j-core"));
    }

    #[test]
    fn test_insert_is_an_upsert() {
        let db = Database::open_in_memory().unwrap();
        db.insert_document(&doc("c-1", "component", r#"{"v":1}"#))
            .unwrap();
        db.insert_document(&doc("c-1", "component", r#"{"v":2}"#))
            .unwrap();

        assert_eq!(db.count_documents().unwrap(), 1);
        let retrieved = db.get_document("c-1").unwrap().unwrap();
        assert!(retrieved.body.contains("\"v\":2"));
    }

    #[test]
    fn test_list_preserves_insertion_order_and_limit() {
        let db = Database::open_in_memory().unwrap();
        for i in 0..5 {
            db.insert_document(&doc(&format!("d-{i}"), "component", "{}"))
                .unwrap();
        }

        let all = db.list_documents(100).unwrap();
        assert_eq!(all.len(), 5);
        assert_eq!(all[0].id, "d-0");
        assert_eq!(all[4].id, "d-4");

        let capped = db.list_documents(2).unwrap();
        assert_eq!(capped.len(), 2);
    }

    #[test]
    fn test_search_term_is_case_insensitive() {
        let db = Database::open_in_memory().unwrap();
        db.insert_document(&doc("c-1", "component", r#"{"name":"Log4jScanner"}"#))
            .unwrap();
        db.insert_document(&doc("c-2", "component", r#"{"name":"jackson"}"#))
            .unwrap();

        let hits = db.search_term("log4jscanner", 10).unwrap();
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].id, "c-1");
    }

    #[test]
    fn test_search_term_escapes_wildcards() {
        let db = Database::open_in_memory().unwrap();
        db.insert_document(&doc("c-1", "component", r#"{"name":"100%cpu"}"#))
            .unwrap();
        db.insert_document(&doc("c-2", "component", r#"{"name":"100acpu"}"#))
            .unwrap();

        let hits = db.search_term("100%cpu", 10).unwrap();
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].id, "c-1");
    }

    #[test]
    fn test_search_id_matches_nested_references() {
        let db = Database::open_in_memory().unwrap();
        db.insert_document(&doc("CVE-2021-44228", "cve", r#"{"id":"CVE-2021-44228"}"#))
            .unwrap();
        db.insert_document(&doc(
            "adv-9",
            "cve",
            r#"{"related":["CVE-2021-44228","CVE-2021-45046"]}"#,
        ))
        .unwrap();
        db.insert_document(&doc("c-1", "component", r#"{"name":"log4j-core"}"#))
            .unwrap();

        let hits = db.search_id("CVE-2021-44228", 10).unwrap();
        assert_eq!(hits.len(), 2);
        assert_eq!(hits[0].id, "CVE-2021-44228");
    }

    #[test]
    fn test_schema_round_trip() {
        let db = Database::open_in_memory().unwrap();
        let fields = vec!["id".to_string(), "package.name".to_string()];
        db.update_schema(&fields, 3).unwrap();

        let schema = db.schema().unwrap().unwrap();
        assert_eq!(schema.fields, fields);
        assert_eq!(schema.doc_count, 3);

        db.update_schema(&["id".to_string()], 1).unwrap();
        let schema = db.schema().unwrap().unwrap();
        assert_eq!(schema.fields.len(), 1);
        assert_eq!(schema.doc_count, 1);
    }

    #[test]
    fn test_open_creates_file_backed_database() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("index.db");

        {
            let db = Database::open(&path).unwrap();
            db.insert_document(&doc("c-1", "component", "{}")).unwrap();
        }

        let db = Database::open(&path).unwrap();
        assert_eq!(db.count_documents().unwrap(), 1);
    }
}
