pub mod db;
pub mod error;
pub mod schema;
pub mod seed;

pub use db::{Database, DocumentRecord, SchemaRecord};
pub use error::{Error, Result};
pub use schema::{extract_field_paths, field_paths};
pub use seed::{rebuild, RebuildReport};
