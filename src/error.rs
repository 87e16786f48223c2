//! Error types for the Workforce Tracking Engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all error conditions that can occur while tracking workers.

use thiserror::Error;
use uuid::Uuid;

/// The main error type for the Workforce Tracking Engine.
///
/// All fallible operations in the engine return this error type, making it
/// easy to handle errors consistently throughout the application.
///
/// # Example
///
/// ```
/// use worker_tracker::error::TrackerError;
///
/// let error = TrackerError::ConfigNotFound {
///     path: "/missing/file.yaml".to_string(),
/// };
/// assert_eq!(error.to_string(), "Configuration file not found: /missing/file.yaml");
/// ```
#[derive(Debug, Error)]
pub enum TrackerError {
    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// No worker exists with the given id.
    #[error("Worker not found: {id}")]
    WorkerNotFound {
        /// The id that was not found in the store.
        id: Uuid,
    },

    /// A worker record was invalid or contained inconsistent data.
    #[error("Invalid worker field '{field}': {message}")]
    InvalidWorker {
        /// The field that was invalid.
        field: String,
        /// A description of what made the field invalid.
        message: String,
    },

    /// An export document could not be produced.
    #[error("Export failed: {message}")]
    ExportError {
        /// A description of the export error.
        message: String,
    },
}

/// A type alias for Results that return TrackerError.
pub type TrackerResult<T> = Result<T, TrackerError>;
