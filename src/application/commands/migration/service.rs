// src/application/commands/migration/service.rs
use std::sync::Arc;

use crate::{
    application::ports::{ClockPort, DocumentStorePort},
    domain::document::{DocumentLayout, DocumentNamingService, DocumentRepository},
};

/// Drives the slug, copy and rename phases over every document kind.
pub struct MigrationService {
    pub(super) repo: Arc<dyn DocumentRepository>,
    pub(super) store: Arc<DocumentStorePort>,
    pub(super) naming: Arc<DocumentNamingService>,
    pub(super) layout: DocumentLayout,
    pub(super) clock: Arc<ClockPort>,
}

impl MigrationService {
    pub fn new(
        repo: Arc<dyn DocumentRepository>,
        store: Arc<DocumentStorePort>,
        naming: Arc<DocumentNamingService>,
        layout: DocumentLayout,
        clock: Arc<ClockPort>,
    ) -> Self {
        Self {
            repo,
            store,
            naming,
            layout,
            clock,
        }
    }

    pub fn layout(&self) -> &DocumentLayout {
        &self.layout
    }
}
