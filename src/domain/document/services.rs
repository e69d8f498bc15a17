// src/domain/document/services.rs
use std::sync::Arc;

use crate::application::ports::util::SlugGenerator;
use crate::domain::document::entity::{AttachedFile, FileCopyPlan};
use crate::domain::document::kind::DocumentKind;
use crate::domain::document::layout::DocumentLayout;
use crate::domain::document::value_objects::{EntityId, EntitySlug, StoredFileName};
use crate::domain::errors::{DomainError, DomainResult};

/// Splits a display name at its last `.`, returning `(root, extension)` with
/// the dot kept on the extension.
pub fn split_extension(display_name: &str) -> DomainResult<(&str, &str)> {
    let dot = display_name
        .rfind('.')
        .ok_or_else(|| DomainError::MalformedFileName(display_name.to_string()))?;
    Ok(display_name.split_at(dot))
}

/// Derives entity slugs, document file names and copy plans.
pub struct DocumentNamingService {
    generator: Arc<dyn SlugGenerator>,
}

impl DocumentNamingService {
    pub fn new(generator: Arc<dyn SlugGenerator>) -> Self {
        Self { generator }
    }

    pub fn entity_slug(&self, name: &str, id: EntityId) -> EntitySlug {
        EntitySlug::from_parts(&self.generator.slugify(name), id)
    }

    /// Slugifies the root of `display_name` and re-attaches its extension
    /// untouched.
    pub fn file_name(&self, display_name: &str) -> DomainResult<StoredFileName> {
        let (root, extension) = split_extension(display_name)?;
        StoredFileName::new(format!("{}{}", self.generator.slugify(root), extension))
    }

    pub fn plan_copy(
        &self,
        kind: DocumentKind,
        file: &AttachedFile,
        layout: &DocumentLayout,
    ) -> DomainResult<FileCopyPlan> {
        let owner_name = file.owner_name.as_deref().ok_or_else(|| {
            DomainError::NotFound(format!("{kind} {} owning file {}", file.owner_id, file.id))
        })?;
        let new_file_name = self.file_name(&file.display_name)?;
        let dir_name = self.entity_slug(owner_name, file.owner_id);
        let destination_dir = layout.destination_dir(kind, dir_name.as_str());

        Ok(FileCopyPlan {
            file_id: file.id,
            source: layout.source_file(kind, file.owner_id, &file.stored_file_name),
            destination: destination_dir.join(new_file_name.as_str()),
            destination_dir,
            new_file_name,
        })
    }
}
