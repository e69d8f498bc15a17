pub mod report;

pub use report::{MigrationPhase, MigrationReport, PhaseReport, RowOutcome, RowStatus};
