use crate::domain::document::kind::DocumentKind;
use crate::domain::document::value_objects::EntityId;
use std::path::{Path, PathBuf};

/// Roots of the legacy tree (`{kind}/{owner_id}/{file}`) and of the new tree
/// (`{kind}-documents/{slug}-{owner_id}/{file}`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentLayout {
    source_root: PathBuf,
    destination_root: PathBuf,
}

impl DocumentLayout {
    pub fn new(source_root: impl Into<PathBuf>, destination_root: impl Into<PathBuf>) -> Self {
        Self {
            source_root: source_root.into(),
            destination_root: destination_root.into(),
        }
    }

    pub fn source_root(&self) -> &Path {
        &self.source_root
    }

    pub fn destination_root(&self) -> &Path {
        &self.destination_root
    }

    pub fn source_file(&self, kind: DocumentKind, owner_id: EntityId, stored: &str) -> PathBuf {
        self.source_root
            .join(kind.legacy_dir())
            .join(owner_id.to_string())
            .join(stored)
    }

    pub fn documents_root(&self, kind: DocumentKind) -> PathBuf {
        self.destination_root.join(kind.documents_dir())
    }

    pub fn destination_dir(&self, kind: DocumentKind, dir_name: &str) -> PathBuf {
        self.documents_root(kind).join(dir_name)
    }
}
