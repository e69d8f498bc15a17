// tests/support/mocks/store.rs
use std::collections::HashSet;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use async_trait::async_trait;
use docs_migrator::application::ports::storage::{DocumentStore, StorageError};

#[derive(Default)]
struct State {
    dirs: Vec<PathBuf>,
    copies: Vec<(PathBuf, PathBuf)>,
    missing_sources: HashSet<PathBuf>,
    read_only_dirs: HashSet<PathBuf>,
}

/// 呼び出しを記録するドキュメントストア
#[derive(Default)]
pub struct RecordingStore {
    inner: Mutex<State>,
}

impl RecordingStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn missing_source(self, path: impl Into<PathBuf>) -> Self {
        self.inner.lock().unwrap().missing_sources.insert(path.into());
        self
    }

    pub fn read_only_dir(self, path: impl Into<PathBuf>) -> Self {
        self.inner.lock().unwrap().read_only_dirs.insert(path.into());
        self
    }

    pub fn dirs(&self) -> Vec<PathBuf> {
        self.inner.lock().unwrap().dirs.clone()
    }

    pub fn copies(&self) -> Vec<(PathBuf, PathBuf)> {
        self.inner.lock().unwrap().copies.clone()
    }
}

#[async_trait]
impl DocumentStore for RecordingStore {
    async fn ensure_dir(&self, path: &Path) -> Result<(), StorageError> {
        let mut state = self.inner.lock().unwrap();
        if state.read_only_dirs.contains(path) {
            return Err(StorageError::CreateDir {
                path: path.to_path_buf(),
                source: io::Error::new(io::ErrorKind::PermissionDenied, "read-only"),
            });
        }
        state.dirs.push(path.to_path_buf());
        Ok(())
    }

    async fn copy_file(&self, source: &Path, destination: &Path) -> Result<u64, StorageError> {
        let mut state = self.inner.lock().unwrap();
        if state.missing_sources.contains(source) {
            return Err(StorageError::SourceUnreadable {
                path: source.to_path_buf(),
                source: io::Error::new(io::ErrorKind::NotFound, "no such file"),
            });
        }
        state
            .copies
            .push((source.to_path_buf(), destination.to_path_buf()));
        Ok(0)
    }
}
