//! Error types for loading and exporting airport tables.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that make a data source unreadable.
///
/// All variants are recovered the same way: the caller substitutes an empty
/// table and shows the message.
#[derive(Error, Debug)]
pub enum LoadError {
    /// The source file does not exist.
    #[error("Data file not found: {path}")]
    FileNotFound { path: PathBuf },

    /// IO error while opening or reading the source.
    #[error("IO error reading {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Malformed CSV or an unparsable cell.
    #[error("Invalid CSV data: {0}")]
    Csv(#[from] csv::Error),

    /// The header lacks a column every row needs.
    #[error("Missing required column: {column}")]
    MissingColumn { column: &'static str },

    /// A row has no region code, so no state can be derived.
    ///
    /// Every loaded airport must carry a state, so one such row rejects the
    /// whole source (and the caller falls back to an empty table). Region
    /// codes are trimmed first, and a code ending in `-` (e.g. `US-`) counts
    /// as missing rather than yielding an empty state.
    #[error("Row {row}: missing iso_region, cannot derive state")]
    MissingRegion { row: usize },
}

/// Errors writing the filtered rows out.
#[derive(Error, Debug)]
pub enum ExportError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// The target path has an extension we cannot write.
    #[error("Unsupported export extension: .{0}")]
    UnsupportedExtension(String),
}

/// Result type alias using [`LoadError`].
pub type Result<T> = std::result::Result<T, LoadError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = LoadError::FileNotFound {
            path: PathBuf::from("new_england_airports.csv"),
        };
        assert!(err.to_string().contains("new_england_airports.csv"));

        let err = LoadError::MissingColumn { column: "iso_region" };
        assert!(err.to_string().contains("iso_region"));

        let err = LoadError::MissingRegion { row: 7 };
        assert!(err.to_string().contains("Row 7"));

        let err = ExportError::UnsupportedExtension("xlsx".to_string());
        assert!(err.to_string().contains(".xlsx"));
    }
}
