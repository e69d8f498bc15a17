// src/application/ports/storage.rs
use async_trait::async_trait;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("cannot read {}: {source}", path.display())]
    SourceUnreadable { path: PathBuf, source: io::Error },
    #[error("cannot create directory {}: {source}", path.display())]
    CreateDir { path: PathBuf, source: io::Error },
    #[error("cannot write {}: {source}", path.display())]
    DestinationUnwritable { path: PathBuf, source: io::Error },
}

/// Filesystem side of the migration.
#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// Creates `path` and its parents; succeeds when it already exists.
    async fn ensure_dir(&self, path: &Path) -> Result<(), StorageError>;

    /// Copies `source` to `destination`, replacing any existing file, and
    /// returns the number of bytes written.
    async fn copy_file(&self, source: &Path, destination: &Path) -> Result<u64, StorageError>;
}
