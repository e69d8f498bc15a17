// tests/support/builders.rs
use docs_migrator::domain::document::{AttachedFile, EntityId, FileId};

use crate::support::mocks::fixed_now;

pub struct AttachedFileBuilder {
    id: i64,
    owner_id: i64,
    owner_name: Option<String>,
    display_name: String,
    stored_file_name: String,
}

impl AttachedFileBuilder {
    pub fn new(id: i64, owner_id: i64) -> Self {
        Self {
            id,
            owner_id,
            owner_name: Some("Test Owner".into()),
            display_name: "Test Document.pdf".into(),
            stored_file_name: format!("upload-{id}.pdf"),
        }
    }

    pub fn owner_name(mut self, name: impl Into<String>) -> Self {
        self.owner_name = Some(name.into());
        self
    }

    pub fn orphan(mut self) -> Self {
        self.owner_name = None;
        self
    }

    pub fn display_name(mut self, name: impl Into<String>) -> Self {
        self.display_name = name.into();
        self
    }

    pub fn stored_file_name(mut self, name: impl Into<String>) -> Self {
        self.stored_file_name = name.into();
        self
    }

    pub fn build(self) -> AttachedFile {
        let now = fixed_now();
        AttachedFile {
            id: FileId(self.id),
            owner_id: EntityId(self.owner_id),
            owner_name: self.owner_name,
            title_en: Some(self.display_name.clone()),
            title_fr: None,
            description_en: None,
            description_fr: None,
            display_name: self.display_name,
            stored_file_name: self.stored_file_name,
            active: true,
            created_at: now,
            updated_at: now,
        }
    }
}
