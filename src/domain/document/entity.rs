use crate::domain::document::value_objects::{EntityId, FileId, StoredFileName};
use chrono::{DateTime, Utc};
use std::path::PathBuf;

/// A holding, publication or project as far as slugging is concerned.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NamedEntity {
    pub id: EntityId,
    pub name: String,
}

/// A document row joined with the name of the entity owning it.
#[derive(Debug, Clone)]
pub struct AttachedFile {
    pub id: FileId,
    pub owner_id: EntityId,
    pub owner_name: Option<String>,
    pub title_en: Option<String>,
    pub title_fr: Option<String>,
    pub description_en: Option<String>,
    pub description_fr: Option<String>,
    pub display_name: String,
    pub stored_file_name: String,
    pub active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// The two columns the `file_name` rewrite needs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileNameRecord {
    pub id: FileId,
    pub display_name: String,
}

/// Where one document is read from and written to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileCopyPlan {
    pub file_id: FileId,
    pub source: PathBuf,
    pub destination_dir: PathBuf,
    pub destination: PathBuf,
    pub new_file_name: StoredFileName,
}
