// src/application/commands/migration/mod.rs
mod assign_slugs;
mod copy_documents;
mod rename_files;
mod run;
mod service;

pub use service::MigrationService;
