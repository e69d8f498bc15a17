// tests/support/mocks/repo.rs
use std::collections::{BTreeMap, HashMap, HashSet};
use std::sync::Mutex;

use async_trait::async_trait;
use docs_migrator::domain::document::{
    AttachedFile, DocumentKind, DocumentRepository, EntityId, EntitySlug, FileId, FileNameRecord,
    NamedEntity, StoredFileName,
};
use docs_migrator::domain::errors::{DomainError, DomainResult};

#[derive(Default)]
struct State {
    entities: HashMap<DocumentKind, BTreeMap<i64, String>>,
    slugs: HashMap<(DocumentKind, i64), String>,
    files: HashMap<DocumentKind, BTreeMap<i64, AttachedFile>>,
    stored_names: HashMap<(DocumentKind, i64), String>,
    failing_reads: HashSet<DocumentKind>,
    failing_file_listings: HashSet<DocumentKind>,
    failing_slug_columns: HashSet<DocumentKind>,
    failing_slug_updates: HashSet<(DocumentKind, i64)>,
    failing_name_updates: HashSet<(DocumentKind, i64)>,
    slug_update_order: Vec<(DocumentKind, i64)>,
}

/// インメモリの文書リポジトリ（失敗注入つき）
#[derive(Default)]
pub struct InMemoryDocumentRepo {
    inner: Mutex<State>,
}

impl InMemoryDocumentRepo {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_entity(self, kind: DocumentKind, id: i64, name: &str) -> Self {
        self.inner
            .lock()
            .unwrap()
            .entities
            .entry(kind)
            .or_default()
            .insert(id, name.to_string());
        self
    }

    pub fn with_file(self, kind: DocumentKind, file: AttachedFile) -> Self {
        self.inner
            .lock()
            .unwrap()
            .files
            .entry(kind)
            .or_default()
            .insert(file.id.0, file);
        self
    }

    pub fn failing_reads(self, kind: DocumentKind) -> Self {
        self.inner.lock().unwrap().failing_reads.insert(kind);
        self
    }

    /// Only the joined file listing fails; the narrow name listing still works.
    pub fn failing_file_listing(self, kind: DocumentKind) -> Self {
        self.inner.lock().unwrap().failing_file_listings.insert(kind);
        self
    }

    pub fn failing_slug_column(self, kind: DocumentKind) -> Self {
        self.inner.lock().unwrap().failing_slug_columns.insert(kind);
        self
    }

    pub fn failing_slug_update(self, kind: DocumentKind, id: i64) -> Self {
        self.inner
            .lock()
            .unwrap()
            .failing_slug_updates
            .insert((kind, id));
        self
    }

    pub fn failing_name_update(self, kind: DocumentKind, id: i64) -> Self {
        self.inner
            .lock()
            .unwrap()
            .failing_name_updates
            .insert((kind, id));
        self
    }

    pub fn slug_of(&self, kind: DocumentKind, id: i64) -> Option<String> {
        self.inner.lock().unwrap().slugs.get(&(kind, id)).cloned()
    }

    pub fn stored_name_of(&self, kind: DocumentKind, id: i64) -> Option<String> {
        self.inner
            .lock()
            .unwrap()
            .stored_names
            .get(&(kind, id))
            .cloned()
    }

    pub fn slug_update_order(&self) -> Vec<(DocumentKind, i64)> {
        self.inner.lock().unwrap().slug_update_order.clone()
    }
}

fn read_failure(kind: DocumentKind) -> DomainError {
    DomainError::Persistence(format!("relation for {kind} is unavailable"))
}

#[async_trait]
impl DocumentRepository for InMemoryDocumentRepo {
    async fn ensure_slug_column(&self, kind: DocumentKind) -> DomainResult<()> {
        if self.inner.lock().unwrap().failing_slug_columns.contains(&kind) {
            return Err(DomainError::Persistence(format!(
                "must be owner of table {}",
                kind.entity_table()
            )));
        }
        Ok(())
    }

    async fn list_entities(&self, kind: DocumentKind) -> DomainResult<Vec<NamedEntity>> {
        let state = self.inner.lock().unwrap();
        if state.failing_reads.contains(&kind) {
            return Err(read_failure(kind));
        }
        Ok(state
            .entities
            .get(&kind)
            .map(|rows| {
                rows.iter()
                    .map(|(id, name)| NamedEntity {
                        id: EntityId(*id),
                        name: name.clone(),
                    })
                    .collect()
            })
            .unwrap_or_default())
    }

    async fn update_entity_slug(
        &self,
        kind: DocumentKind,
        id: EntityId,
        slug: &EntitySlug,
    ) -> DomainResult<()> {
        let mut state = self.inner.lock().unwrap();
        if state.failing_slug_updates.contains(&(kind, id.0)) {
            return Err(DomainError::Persistence("update rejected".into()));
        }
        state.slug_update_order.push((kind, id.0));
        state.slugs.insert((kind, id.0), slug.as_str().to_string());
        Ok(())
    }

    async fn list_attached_files(&self, kind: DocumentKind) -> DomainResult<Vec<AttachedFile>> {
        let state = self.inner.lock().unwrap();
        if state.failing_reads.contains(&kind) || state.failing_file_listings.contains(&kind) {
            return Err(read_failure(kind));
        }
        Ok(state
            .files
            .get(&kind)
            .map(|rows| rows.values().cloned().collect())
            .unwrap_or_default())
    }

    async fn list_file_names(&self, kind: DocumentKind) -> DomainResult<Vec<FileNameRecord>> {
        let state = self.inner.lock().unwrap();
        if state.failing_reads.contains(&kind) {
            return Err(read_failure(kind));
        }
        Ok(state
            .files
            .get(&kind)
            .map(|rows| {
                rows.values()
                    .map(|file| FileNameRecord {
                        id: file.id,
                        display_name: file.display_name.clone(),
                    })
                    .collect()
            })
            .unwrap_or_default())
    }

    async fn update_stored_file_name(
        &self,
        kind: DocumentKind,
        id: FileId,
        name: &StoredFileName,
    ) -> DomainResult<()> {
        let mut state = self.inner.lock().unwrap();
        if state.failing_name_updates.contains(&(kind, id.0)) {
            return Err(DomainError::Persistence("update rejected".into()));
        }
        state
            .stored_names
            .insert((kind, id.0), name.as_str().to_string());
        Ok(())
    }
}
