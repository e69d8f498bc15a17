pub mod entity;
pub mod kind;
pub mod layout;
pub mod repository;
pub mod services;
pub mod value_objects;

pub use entity::{AttachedFile, FileCopyPlan, FileNameRecord, NamedEntity};
pub use kind::DocumentKind;
pub use layout::DocumentLayout;
pub use repository::DocumentRepository;
pub use services::DocumentNamingService;
pub use value_objects::{EntityId, EntitySlug, FileId, StoredFileName};
