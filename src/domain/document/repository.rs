use crate::domain::document::entity::{AttachedFile, FileNameRecord, NamedEntity};
use crate::domain::document::kind::DocumentKind;
use crate::domain::document::value_objects::{EntityId, EntitySlug, FileId, StoredFileName};
use crate::domain::errors::DomainResult;
use async_trait::async_trait;

#[async_trait]
pub trait DocumentRepository: Send + Sync {
    /// Adds the `slug` column to the entity table when it is missing.
    async fn ensure_slug_column(&self, kind: DocumentKind) -> DomainResult<()>;

    /// Entities ordered by ascending id.
    async fn list_entities(&self, kind: DocumentKind) -> DomainResult<Vec<NamedEntity>>;

    async fn update_entity_slug(
        &self,
        kind: DocumentKind,
        id: EntityId,
        slug: &EntitySlug,
    ) -> DomainResult<()>;

    /// Attached files ordered by ascending id, joined with their owner's name.
    async fn list_attached_files(&self, kind: DocumentKind) -> DomainResult<Vec<AttachedFile>>;

    /// Id and display name of every attached file, ordered by ascending id.
    async fn list_file_names(&self, kind: DocumentKind) -> DomainResult<Vec<FileNameRecord>>;

    async fn update_stored_file_name(
        &self,
        kind: DocumentKind,
        id: FileId,
        name: &StoredFileName,
    ) -> DomainResult<()>;
}
