//! Errors for grounding map loading, building and normalization.

use std::path::PathBuf;

pub type Result<T> = std::result::Result<T, GroundingError>;

#[derive(Debug, thiserror::Error)]
pub enum GroundingError {
    /// The grounding map file is missing or could not be read.
    #[error("cannot read grounding map {}: {source}", path.display())]
    FileNotFound {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("parse error on line {line}: {message}")]
    Parse { line: u64, message: String },

    /// Row index is 0-based, in file order.
    #[error("row {row} is empty, no entity name available")]
    EmptyRow { row: usize },

    #[error("row {row} has {found} columns, expected {expected}")]
    RaggedRow {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("row {row} has an even width ({width}), leaving an unpaired field")]
    UnpairedField { row: usize, width: usize },

    #[error("cannot write grounding map: {source}")]
    Write {
        #[source]
        source: std::io::Error,
    },
}

// ============================================================================
// Conversions
// ============================================================================

impl From<csv::Error> for GroundingError {
    fn from(err: csv::Error) -> Self {
        let line = err.position().map(|p| p.line()).unwrap_or(0);
        let message = err.to_string();
        match err.into_kind() {
            csv::ErrorKind::Io(source) => GroundingError::Write { source },
            _ => GroundingError::Parse { line, message },
        }
    }
}
