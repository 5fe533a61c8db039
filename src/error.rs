//! Unified error types for chatsift.
//!
//! This module provides a single [`ChatsiftError`] enum that covers every
//! failure the library can report. Note what is *not* here: a transcript line
//! that does not look like `[timestamp] sender: content` is never an error.
//! Such lines are dropped by the pipeline without a trace.
//!
//! # Error Handling Philosophy
//!
//! - **Library users** get typed errors they can match on
//! - **Application users** get the same short messages the upload form showed
//! - **Developers** get source error chains for debugging

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// A specialized [`Result`] type for chatsift operations.
///
/// # Example
///
/// ```rust
/// use chatsift::error::Result;
/// use chatsift::CategoryBuckets;
///
/// fn my_function() -> Result<CategoryBuckets> {
///     Ok(chatsift::parse(""))
/// }
/// ```
pub type Result<T> = std::result::Result<T, ChatsiftError>;

/// The error type for all chatsift operations.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ChatsiftError {
    /// An I/O error occurred while reading a transcript.
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// The transcript file does not carry the expected extension.
    #[error("Please upload a .{expected} file. (file: {})", path.display())]
    InvalidExtension {
        /// The rejected file
        path: PathBuf,
        /// Extension that was required, without the dot
        expected: String,
    },

    /// The transcript file has no content.
    #[error("The file is empty. (file: {})", path.display())]
    EmptyFile {
        /// The rejected file
        path: PathBuf,
    },

    /// The transcript file exceeds the configured size limit.
    #[error("File size should not exceed {}. (file: {}, {size} bytes)", human_size(*max_size), path.display())]
    FileTooLarge {
        /// The rejected file
        path: PathBuf,
        /// Actual size in bytes
        size: u64,
        /// Maximum allowed size in bytes
        max_size: u64,
    },

    /// The transcript is not valid UTF-8 text.
    #[error("Error parsing the chat file: {} is not valid UTF-8 ({source})", path.display())]
    Encoding {
        /// The file that failed to decode
        path: PathBuf,
        /// The underlying UTF-8 error
        #[source]
        source: std::string::FromUtf8Error,
    },

    /// JSON serialization error.
    #[cfg(feature = "json-output")]
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// CSV writing error.
    #[cfg(feature = "csv-output")]
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// Invalid date in filter configuration.
    ///
    /// Date filters expect YYYY-MM-DD format.
    #[error("Invalid date '{input}'. Expected format: {expected}")]
    InvalidDate {
        /// The invalid date string that was provided
        input: String,
        /// Expected format description
        expected: &'static str,
    },

    /// A category name could not be recognized.
    #[error("Unknown category '{input}'. Expected one of: {expected}")]
    UnknownCategory {
        /// The string that was provided
        input: String,
        /// Accepted names
        expected: &'static str,
    },

    /// An output format name could not be recognized.
    #[error("Unknown output format '{input}'. Expected one of: {expected}")]
    UnknownFormat {
        /// The string that was provided
        input: String,
        /// Accepted names
        expected: &'static str,
    },
}

/// Formats a byte count the way the upload form phrased its limit ("10MB").
fn human_size(bytes: u64) -> String {
    const MIB: u64 = 1024 * 1024;
    const KIB: u64 = 1024;
    if bytes >= MIB && bytes % MIB == 0 {
        format!("{}MB", bytes / MIB)
    } else if bytes >= KIB && bytes % KIB == 0 {
        format!("{}KB", bytes / KIB)
    } else {
        format!("{bytes} bytes")
    }
}

// ============================================================================
// Convenience constructors
// ============================================================================

impl ChatsiftError {
    /// Creates an invalid extension error.
    pub fn invalid_extension(path: impl Into<PathBuf>, expected: impl Into<String>) -> Self {
        ChatsiftError::InvalidExtension {
            path: path.into(),
            expected: expected.into(),
        }
    }

    /// Creates an empty file error.
    pub fn empty_file(path: impl Into<PathBuf>) -> Self {
        ChatsiftError::EmptyFile { path: path.into() }
    }

    /// Creates a file-too-large error.
    pub fn file_too_large(path: impl Into<PathBuf>, size: u64, max_size: u64) -> Self {
        ChatsiftError::FileTooLarge {
            path: path.into(),
            size,
            max_size,
        }
    }

    /// Creates an encoding error.
    pub fn encoding(path: impl Into<PathBuf>, source: std::string::FromUtf8Error) -> Self {
        ChatsiftError::Encoding {
            path: path.into(),
            source,
        }
    }

    /// Creates an invalid date error.
    pub fn invalid_date(input: impl Into<String>) -> Self {
        ChatsiftError::InvalidDate {
            input: input.into(),
            expected: "YYYY-MM-DD",
        }
    }

    /// Creates an unknown category error.
    pub fn unknown_category(input: impl Into<String>) -> Self {
        ChatsiftError::UnknownCategory {
            input: input.into(),
            expected: "links, quotes, reading, notes",
        }
    }

    /// Creates an unknown output format error.
    pub fn unknown_format(input: impl Into<String>) -> Self {
        ChatsiftError::UnknownFormat {
            input: input.into(),
            expected: "text, json, jsonl, csv",
        }
    }

    /// Returns `true` if this is an IO error.
    pub fn is_io(&self) -> bool {
        matches!(self, ChatsiftError::Io(_))
    }

    /// Returns `true` if the file was rejected before parsing
    /// (wrong extension, empty, or too large).
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            ChatsiftError::InvalidExtension { .. }
                | ChatsiftError::EmptyFile { .. }
                | ChatsiftError::FileTooLarge { .. }
        )
    }

    /// Returns `true` if this is a date-related error.
    pub fn is_invalid_date(&self) -> bool {
        matches!(self, ChatsiftError::InvalidDate { .. })
    }

    /// Returns `true` if the file could not be decoded as UTF-8.
    pub fn is_encoding(&self) -> bool {
        matches!(self, ChatsiftError::Encoding { .. })
    }
}

// ============================================================================
// Tests
// ============================================================================
