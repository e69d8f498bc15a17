// src/infrastructure/storage.rs
use crate::application::ports::storage::{DocumentStore, StorageError};
use async_trait::async_trait;
use std::path::Path;
use tokio::fs::{self, File};
use tokio::io::{AsyncReadExt, AsyncWriteExt};

const COPY_BUFFER: usize = 64 * 1024;

/// Document store backed by the local filesystem.
#[derive(Default, Clone)]
pub struct LocalDocumentStore;

#[async_trait]
impl DocumentStore for LocalDocumentStore {
    async fn ensure_dir(&self, path: &Path) -> Result<(), StorageError> {
        fs::create_dir_all(path)
            .await
            .map_err(|source| StorageError::CreateDir {
                path: path.to_path_buf(),
                source,
            })
    }

    async fn copy_file(&self, source: &Path, destination: &Path) -> Result<u64, StorageError> {
        let unreadable = |err: std::io::Error| StorageError::SourceUnreadable {
            path: source.to_path_buf(),
            source: err,
        };
        let unwritable = |err: std::io::Error| StorageError::DestinationUnwritable {
            path: destination.to_path_buf(),
            source: err,
        };

        // Open the source first so a missing source never leaves an empty destination.
        let mut reader = File::open(source).await.map_err(unreadable)?;
        let mut writer = File::create(destination).await.map_err(unwritable)?;

        let mut buf = vec![0u8; COPY_BUFFER];
        let mut copied = 0u64;
        loop {
            let n = reader.read(&mut buf).await.map_err(unreadable)?;
            if n == 0 {
                break;
            }
            writer.write_all(&buf[..n]).await.map_err(unwritable)?;
            copied += n as u64;
        }
        writer.flush().await.map_err(unwritable)?;

        Ok(copied)
    }
}
