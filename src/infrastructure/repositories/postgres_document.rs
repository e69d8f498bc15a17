// src/infrastructure/repositories/postgres_document.rs
use super::map_sqlx;
use crate::domain::document::{
    AttachedFile, DocumentKind, DocumentRepository, EntityId, EntitySlug, FileId, FileNameRecord,
    NamedEntity, StoredFileName,
};
use crate::domain::errors::{DomainError, DomainResult};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool};
use std::future::Future;
use std::time::Duration;

/// Reads and updates the entity and file tables of every document kind.
/// Table and column names come from [`DocumentKind`], never from user input.
#[derive(Clone)]
pub struct PostgresDocumentRepository {
    pool: PgPool,
    query_timeout: Duration,
}

impl PostgresDocumentRepository {
    pub fn new(pool: PgPool, query_timeout: Duration) -> Self {
        Self {
            pool,
            query_timeout,
        }
    }

    async fn bounded<T>(
        &self,
        query: impl Future<Output = Result<T, sqlx::Error>>,
    ) -> DomainResult<T> {
        match tokio::time::timeout(self.query_timeout, query).await {
            Ok(result) => result.map_err(map_sqlx),
            Err(_) => Err(DomainError::Persistence(format!(
                "query timed out after {}s",
                self.query_timeout.as_secs_f32()
            ))),
        }
    }
}

#[derive(Debug, FromRow)]
struct NamedEntityRow {
    id: i64,
    name: String,
}

impl TryFrom<NamedEntityRow> for NamedEntity {
    type Error = DomainError;

    fn try_from(row: NamedEntityRow) -> Result<Self, Self::Error> {
        Ok(NamedEntity {
            id: EntityId::new(row.id)?,
            name: row.name,
        })
    }
}

#[derive(Debug, FromRow)]
struct AttachedFileRow {
    id: i64,
    owner_id: i64,
    owner_name: Option<String>,
    title_en: Option<String>,
    title_fr: Option<String>,
    description_en: Option<String>,
    description_fr: Option<String>,
    display_name: String,
    stored_file_name: String,
    active: bool,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl TryFrom<AttachedFileRow> for AttachedFile {
    type Error = DomainError;

    fn try_from(row: AttachedFileRow) -> Result<Self, Self::Error> {
        Ok(AttachedFile {
            id: FileId::new(row.id)?,
            owner_id: EntityId::new(row.owner_id)?,
            owner_name: row.owner_name,
            title_en: row.title_en,
            title_fr: row.title_fr,
            description_en: row.description_en,
            description_fr: row.description_fr,
            display_name: row.display_name,
            stored_file_name: row.stored_file_name,
            active: row.active,
            created_at: row.created_at,
            updated_at: row.updated_at,
        })
    }
}

#[derive(Debug, FromRow)]
struct FileNameRow {
    id: i64,
    display_name: String,
}

impl TryFrom<FileNameRow> for FileNameRecord {
    type Error = DomainError;

    fn try_from(row: FileNameRow) -> Result<Self, Self::Error> {
        Ok(FileNameRecord {
            id: FileId::new(row.id)?,
            display_name: row.display_name,
        })
    }
}

fn add_slug_column_sql(kind: DocumentKind) -> String {
    format!(
        "ALTER TABLE {} ADD COLUMN IF NOT EXISTS slug VARCHAR(255)",
        kind.entity_table()
    )
}

fn list_entities_sql(kind: DocumentKind) -> String {
    format!(
        "SELECT id::bigint AS id, COALESCE({name}, '') AS name FROM {table} ORDER BY id",
        name = kind.name_column(),
        table = kind.entity_table(),
    )
}

fn update_slug_sql(kind: DocumentKind) -> String {
    format!("UPDATE {} SET slug = $1 WHERE id = $2", kind.entity_table())
}

fn list_files_sql(kind: DocumentKind) -> String {
    format!(
        "SELECT f.id::bigint AS id, f.{owner}::bigint AS owner_id, o.{name} AS owner_name,
                f.display_name_en AS title_en, f.display_name_fr AS title_fr,
                f.file_description_en AS description_en, f.file_description_fr AS description_fr,
                COALESCE(f.file_name_display, '') AS display_name,
                COALESCE(f.file_name, '') AS stored_file_name,
                (f.active::int <> 0) AS active,
                f.created_at::timestamptz AS created_at, f.updated_at::timestamptz AS updated_at
         FROM {files} f
         LEFT JOIN {table} o ON o.id = f.{owner}
         ORDER BY f.id",
        owner = kind.owner_column(),
        name = kind.name_column(),
        files = kind.file_table(),
        table = kind.entity_table(),
    )
}

fn list_file_names_sql(kind: DocumentKind) -> String {
    format!(
        "SELECT id::bigint AS id, COALESCE(file_name_display, '') AS display_name \
         FROM {} ORDER BY id",
        kind.file_table()
    )
}

fn update_file_name_sql(kind: DocumentKind) -> String {
    format!("UPDATE {} SET file_name = $1 WHERE id = $2", kind.file_table())
}

#[async_trait]
impl DocumentRepository for PostgresDocumentRepository {
    async fn ensure_slug_column(&self, kind: DocumentKind) -> DomainResult<()> {
        let sql = add_slug_column_sql(kind);
        self.bounded(sqlx::query(&sql).execute(&self.pool)).await?;
        Ok(())
    }

    async fn list_entities(&self, kind: DocumentKind) -> DomainResult<Vec<NamedEntity>> {
        let sql = list_entities_sql(kind);
        let rows = self
            .bounded(sqlx::query_as::<_, NamedEntityRow>(&sql).fetch_all(&self.pool))
            .await?;

        rows.into_iter().map(NamedEntity::try_from).collect()
    }

    async fn update_entity_slug(
        &self,
        kind: DocumentKind,
        id: EntityId,
        slug: &EntitySlug,
    ) -> DomainResult<()> {
        let sql = update_slug_sql(kind);
        let result = self
            .bounded(
                sqlx::query(&sql)
                    .bind(slug.as_str())
                    .bind(i64::from(id))
                    .execute(&self.pool),
            )
            .await?;
        if result.rows_affected() == 0 {
            return Err(DomainError::NotFound(format!("{kind} {id}")));
        }
        Ok(())
    }

    async fn list_attached_files(&self, kind: DocumentKind) -> DomainResult<Vec<AttachedFile>> {
        let sql = list_files_sql(kind);
        let rows = self
            .bounded(sqlx::query_as::<_, AttachedFileRow>(&sql).fetch_all(&self.pool))
            .await?;

        rows.into_iter().map(AttachedFile::try_from).collect()
    }

    async fn list_file_names(&self, kind: DocumentKind) -> DomainResult<Vec<FileNameRecord>> {
        let sql = list_file_names_sql(kind);
        let rows = self
            .bounded(sqlx::query_as::<_, FileNameRow>(&sql).fetch_all(&self.pool))
            .await?;

        rows.into_iter().map(FileNameRecord::try_from).collect()
    }

    async fn update_stored_file_name(
        &self,
        kind: DocumentKind,
        id: FileId,
        name: &StoredFileName,
    ) -> DomainResult<()> {
        let sql = update_file_name_sql(kind);
        let result = self
            .bounded(
                sqlx::query(&sql)
                    .bind(name.as_str())
                    .bind(i64::from(id))
                    .execute(&self.pool),
            )
            .await?;
        if result.rows_affected() == 0 {
            return Err(DomainError::NotFound(format!("{kind} file {id}")));
        }
        Ok(())
    }
}
