// src/application/commands/migration/copy_documents.rs
use super::MigrationService;
use crate::{
    application::dto::{MigrationPhase, PhaseReport},
    domain::document::DocumentKind,
};

impl MigrationService {
    /// Copies every attached file of `kind` into the slug-based layout.
    /// Unplannable rows are skipped and copy failures recorded; neither stops
    /// the loop.
    pub async fn copy_documents(&self, kind: DocumentKind) -> PhaseReport {
        let mut report = PhaseReport::new(kind, MigrationPhase::CopyDocuments);

        let files = match self.repo.list_attached_files(kind).await {
            Ok(files) => files,
            Err(err) => {
                tracing::error!(%kind, error = %err, "cannot list attached files");
                report.query_failed(err.to_string());
                Vec::new()
            }
        };

        for file in files {
            let plan = match self.naming.plan_copy(kind, &file, &self.layout) {
                Ok(plan) => plan,
                Err(err) => {
                    tracing::warn!(%kind, id = %file.id, error = %err, "skipping file");
                    report.skipped(file.id, err.to_string());
                    continue;
                }
            };

            if let Err(err) = self.store.ensure_dir(&plan.destination_dir).await {
                tracing::error!(%kind, id = %file.id, error = %err, "copy failed");
                report.failed(file.id, err.to_string());
                continue;
            }

            match self.store.copy_file(&plan.source, &plan.destination).await {
                Ok(bytes) => {
                    tracing::debug!(
                        %kind,
                        id = %file.id,
                        bytes,
                        destination = %plan.destination.display(),
                        "file copied"
                    );
                    report.succeeded(file.id);
                }
                Err(err) => {
                    tracing::error!(%kind, id = %file.id, error = %err, "copy failed");
                    report.failed(file.id, err.to_string());
                }
            }
        }

        report
    }
}
