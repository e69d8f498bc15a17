// src/application/dto/report.rs
use crate::domain::document::DocumentKind;
use chrono::{DateTime, Utc};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MigrationPhase {
    AssignSlugs,
    CopyDocuments,
    RenameStoredFiles,
}

impl fmt::Display for MigrationPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::AssignSlugs => "assign-slugs",
            Self::CopyDocuments => "copy-documents",
            Self::RenameStoredFiles => "rename-stored-files",
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RowStatus {
    Succeeded,
    Skipped(String),
    Failed(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowOutcome {
    pub id: i64,
    pub status: RowStatus,
}

/// Per-row outcomes of one phase for one kind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PhaseReport {
    pub kind: DocumentKind,
    pub phase: MigrationPhase,
    pub outcomes: Vec<RowOutcome>,
    /// Set when the rows could not be read; the phase then ran on nothing.
    pub query_error: Option<String>,
    /// Set when a row update failed and the remaining rows were not visited.
    pub aborted: bool,
}

impl PhaseReport {
    pub fn new(kind: DocumentKind, phase: MigrationPhase) -> Self {
        Self {
            kind,
            phase,
            outcomes: Vec::new(),
            query_error: None,
            aborted: false,
        }
    }

    pub fn succeeded(&mut self, id: impl Into<i64>) {
        self.push(id.into(), RowStatus::Succeeded);
    }

    pub fn skipped(&mut self, id: impl Into<i64>, reason: impl Into<String>) {
        self.push(id.into(), RowStatus::Skipped(reason.into()));
    }

    pub fn failed(&mut self, id: impl Into<i64>, reason: impl Into<String>) {
        self.push(id.into(), RowStatus::Failed(reason.into()));
    }

    pub fn query_failed(&mut self, reason: impl Into<String>) {
        self.query_error = Some(reason.into());
    }

    pub fn abort(&mut self) {
        self.aborted = true;
    }

    fn push(&mut self, id: i64, status: RowStatus) {
        self.outcomes.push(RowOutcome { id, status });
    }

    pub fn succeeded_count(&self) -> usize {
        self.count(|s| matches!(s, RowStatus::Succeeded))
    }

    pub fn skipped_count(&self) -> usize {
        self.count(|s| matches!(s, RowStatus::Skipped(_)))
    }

    pub fn failed_count(&self) -> usize {
        self.count(|s| matches!(s, RowStatus::Failed(_)))
    }

    fn count(&self, pred: impl Fn(&RowStatus) -> bool) -> usize {
        self.outcomes.iter().filter(|o| pred(&o.status)).count()
    }

    /// No failed or skipped row, no unreadable query and no abort.
    pub fn is_clean(&self) -> bool {
        self.query_error.is_none() && !self.aborted && self.succeeded_count() == self.outcomes.len()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MigrationReport {
    pub started_at: DateTime<Utc>,
    pub finished_at: DateTime<Utc>,
    pub phases: Vec<PhaseReport>,
}

impl MigrationReport {
    pub fn phase(&self, kind: DocumentKind, phase: MigrationPhase) -> Option<&PhaseReport> {
        self.phases
            .iter()
            .find(|p| p.kind == kind && p.phase == phase)
    }

    pub fn succeeded_count(&self) -> usize {
        self.phases.iter().map(PhaseReport::succeeded_count).sum()
    }

    pub fn skipped_count(&self) -> usize {
        self.phases.iter().map(PhaseReport::skipped_count).sum()
    }

    pub fn failed_count(&self) -> usize {
        self.phases.iter().map(PhaseReport::failed_count).sum()
    }

    pub fn is_clean(&self) -> bool {
        self.phases.iter().all(PhaseReport::is_clean)
    }
}
