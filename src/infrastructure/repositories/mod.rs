// src/infrastructure/repositories/mod.rs
mod error;
mod postgres_document;

use error::map_sqlx;
pub use postgres_document::PostgresDocumentRepository;
