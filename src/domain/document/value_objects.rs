use crate::domain::errors::{DomainError, DomainResult};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EntityId(pub i64);

impl EntityId {
    pub fn new(id: i64) -> DomainResult<Self> {
        if id <= 0 {
            Err(DomainError::Validation("entity id must be positive".into()))
        } else {
            Ok(Self(id))
        }
    }
}

impl From<EntityId> for i64 {
    fn from(value: EntityId) -> Self {
        value.0
    }
}

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FileId(pub i64);

impl FileId {
    pub fn new(id: i64) -> DomainResult<Self> {
        if id <= 0 {
            Err(DomainError::Validation("file id must be positive".into()))
        } else {
            Ok(Self(id))
        }
    }
}

impl From<FileId> for i64 {
    fn from(value: FileId) -> Self {
        value.0
    }
}

impl fmt::Display for FileId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// `{slugified name}-{id}`. The base part may be empty, leaving only the
/// `-{id}` suffix.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct EntitySlug(String);

impl EntitySlug {
    pub fn from_parts(base: &str, id: EntityId) -> Self {
        Self(format!("{base}-{id}"))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EntitySlug {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<EntitySlug> for String {
    fn from(value: EntitySlug) -> Self {
        value.0
    }
}

/// Name of a document on disk and in the `file_name` column.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct StoredFileName(String);

impl StoredFileName {
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into();
        if value.trim().is_empty() {
            return Err(DomainError::Validation("file name cannot be empty".into()));
        }
        if value == "." || value == ".." || value.contains('/') || value.contains('\\') {
            return Err(DomainError::Validation(format!(
                "file name {value:?} cannot contain path separators"
            )));
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for StoredFileName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<StoredFileName> for String {
    fn from(value: StoredFileName) -> Self {
        value.0
    }
}
