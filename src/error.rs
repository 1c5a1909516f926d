use std::path::PathBuf;
use thiserror::Error;

/// Errors surfaced by the reporting core. Every failure is terminal for the
/// current request; callers render them, they never retry.
#[derive(Debug, Error)]
pub enum ReportError {
    #[error("CSV file not found at: {}", .path.display())]
    NotFound { path: PathBuf },

    /// Missing column, unknown show-time label, or a mis-typed value.
    /// Raised once at the load boundary instead of deep inside an aggregation.
    #[error("malformed booking data: {0}")]
    MalformedData(String),

    #[error("invalid city selection {input:?}: expected a number between 1 and {count}")]
    InvalidSelection { input: String, count: usize },

    #[error("chart rendering failed: {0}")]
    Chart(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
