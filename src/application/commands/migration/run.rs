// src/application/commands/migration/run.rs
use super::MigrationService;
use crate::{
    application::{dto::MigrationReport, error::ApplicationResult},
    domain::document::DocumentKind,
};

impl MigrationService {
    /// Creates the `{kind}-documents` roots. Any failure here is fatal.
    pub async fn prepare_layout(&self) -> ApplicationResult<()> {
        for kind in DocumentKind::ALL {
            self.store
                .ensure_dir(&self.layout.documents_root(kind))
                .await?;
        }
        Ok(())
    }

    /// Runs every phase for every kind: all slugs, then all copies, then all
    /// file name rewrites.
    pub async fn run(&self) -> ApplicationResult<MigrationReport> {
        let started_at = self.clock.now();
        self.prepare_layout().await?;

        let mut phases = Vec::with_capacity(DocumentKind::ALL.len() * 3);

        for kind in DocumentKind::ALL {
            phases.push(self.assign_slugs(kind).await);
        }

        for kind in DocumentKind::ALL {
            tracing::info!(%kind, "starting document copy");
            let report = self.copy_documents(kind).await;
            tracing::info!(
                %kind,
                copied = report.succeeded_count(),
                skipped = report.skipped_count(),
                failed = report.failed_count(),
                "done copying documents"
            );
            phases.push(report);
        }

        for kind in DocumentKind::ALL {
            phases.push(self.rename_stored_files(kind).await);
        }

        Ok(MigrationReport {
            started_at,
            finished_at: self.clock.now(),
            phases,
        })
    }
}
