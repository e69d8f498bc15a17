// src/domain/document/kind.rs
use std::fmt;

/// The three entity families that own documents. They share one table shape
/// and differ only by table, column and directory names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DocumentKind {
    Holding,
    Publication,
    Project,
}

impl DocumentKind {
    pub const ALL: [DocumentKind; 3] = [
        DocumentKind::Holding,
        DocumentKind::Publication,
        DocumentKind::Project,
    ];

    pub fn entity_table(self) -> &'static str {
        match self {
            Self::Holding => "holdings",
            Self::Publication => "publications",
            Self::Project => "projects",
        }
    }

    pub fn name_column(self) -> &'static str {
        match self {
            Self::Holding => "holding_name_en",
            Self::Publication => "publication_name_en",
            Self::Project => "project_name_en",
        }
    }

    pub fn file_table(self) -> &'static str {
        match self {
            Self::Holding => "holding_files",
            Self::Publication => "publication_files",
            Self::Project => "project_files",
        }
    }

    pub fn owner_column(self) -> &'static str {
        match self {
            Self::Holding => "holding_id",
            Self::Publication => "publication_id",
            Self::Project => "project_id",
        }
    }

    /// Directory holding the legacy `{owner_id}/{file}` tree.
    pub fn legacy_dir(self) -> &'static str {
        self.entity_table()
    }

    /// Directory holding the slug-based `{slug}-{owner_id}/{file}` tree.
    pub fn documents_dir(self) -> &'static str {
        match self {
            Self::Holding => "holding-documents",
            Self::Publication => "publication-documents",
            Self::Project => "project-documents",
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Holding => "holding",
            Self::Publication => "publication",
            Self::Project => "project",
        }
    }
}

impl fmt::Display for DocumentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
