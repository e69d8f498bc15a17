// src/application/commands/migration/assign_slugs.rs
use super::MigrationService;
use crate::{
    application::dto::{MigrationPhase, PhaseReport},
    domain::document::DocumentKind,
};

impl MigrationService {
    /// Persists `{slug}-{id}` on every entity of `kind`, in id order. The
    /// first failed update ends the phase for this kind. Adding the `slug`
    /// column needs table ownership; without it the updates still run against
    /// an existing column.
    pub async fn assign_slugs(&self, kind: DocumentKind) -> PhaseReport {
        let mut report = PhaseReport::new(kind, MigrationPhase::AssignSlugs);

        if let Err(err) = self.repo.ensure_slug_column(kind).await {
            tracing::warn!(%kind, error = %err, "cannot add slug column, assuming it exists");
        }

        let entities = match self.repo.list_entities(kind).await {
            Ok(entities) => entities,
            Err(err) => {
                tracing::error!(%kind, error = %err, "cannot list entities");
                report.query_failed(err.to_string());
                Vec::new()
            }
        };

        for entity in entities {
            let slug = self.naming.entity_slug(&entity.name, entity.id);
            match self.repo.update_entity_slug(kind, entity.id, &slug).await {
                Ok(()) => {
                    tracing::debug!(%kind, id = %entity.id, %slug, "slug assigned");
                    report.succeeded(entity.id);
                }
                Err(err) => {
                    tracing::error!(%kind, id = %entity.id, error = %err, "slug update failed");
                    report.failed(entity.id, err.to_string());
                    report.abort();
                    break;
                }
            }
        }

        report
    }
}
