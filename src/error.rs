use chrono::NaiveDateTime;
use std::path::PathBuf;
use thiserror::Error;

/// Main error type for the accuse application
#[derive(Error, Debug)]
pub enum AccuseError {
    /// Invalid or contradictory run configuration
    #[error("Configuration error: {0}")]
    Config(String),

    /// Unparseable date literal
    #[error("Unparseable date `{input}`: expected ISO 8601 or month/day/year")]
    DateParse { input: String },

    /// Resolved time window is inverted
    #[error("End date {end} precedes start date {start}")]
    InvalidWindow {
        start: NaiveDateTime,
        end: NaiveDateTime,
    },

    /// Malformed blame metadata for a specific file and section
    #[error("Malformed blame output for {file}: section {section} is missing `{field}`")]
    BlameParse {
        file: PathBuf,
        section: usize,
        field: &'static str,
    },

    /// Invalid include/exclude file pattern
    #[error("Invalid file pattern `{pattern}`: {message}")]
    Pattern { pattern: String, message: String },

    /// Regex compilation errors
    #[error("Regex error: {0}")]
    Regex(#[from] regex::Error),

    /// IO errors
    #[error("IO error: {context}: {source}")]
    Io {
        source: std::io::Error,
        context: String,
    },

    /// JSON errors
    #[error("JSON error: {context}: {source}")]
    Json {
        source: serde_json::Error,
        context: String,
    },

    /// Generic errors
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type for accuse operations
pub type Result<T> = std::result::Result<T, AccuseError>;
