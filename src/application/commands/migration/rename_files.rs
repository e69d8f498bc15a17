// src/application/commands/migration/rename_files.rs
use super::MigrationService;
use crate::{
    application::dto::{MigrationPhase, PhaseReport},
    domain::document::DocumentKind,
};

impl MigrationService {
    /// Rewrites `file_name` from the display name for every attached file of
    /// `kind`. Malformed display names are skipped; the first failed update
    /// ends the phase for this kind.
    pub async fn rename_stored_files(&self, kind: DocumentKind) -> PhaseReport {
        let mut report = PhaseReport::new(kind, MigrationPhase::RenameStoredFiles);

        let files = match self.repo.list_file_names(kind).await {
            Ok(files) => files,
            Err(err) => {
                tracing::error!(%kind, error = %err, "cannot list file names");
                report.query_failed(err.to_string());
                Vec::new()
            }
        };

        for file in files {
            let name = match self.naming.file_name(&file.display_name) {
                Ok(name) => name,
                Err(err) => {
                    tracing::warn!(%kind, id = %file.id, error = %err, "skipping file");
                    report.skipped(file.id, err.to_string());
                    continue;
                }
            };

            match self.repo.update_stored_file_name(kind, file.id, &name).await {
                Ok(()) => report.succeeded(file.id),
                Err(err) => {
                    tracing::error!(%kind, id = %file.id, error = %err, "file name update failed");
                    report.failed(file.id, err.to_string());
                    report.abort();
                    break;
                }
            }
        }

        report
    }
}
