//! Output format selection.
//!
//! [`OutputFormat`] names a renderer from [`crate::output`] and [`render`]
//! dispatches to it. The type has no CLI framework dependencies, so the
//! binary and library callers share it.
//!
//! # Example
//!
//! ```rust
//! # #[cfg(feature = "json-output")]
//! # fn example() -> chatsift::Result<()> {
//! use chatsift::config::OutputConfig;
//! use chatsift::format::{OutputFormat, render};
//!
//! let buckets = chatsift::parse("[1/1/24, 9:00 AM] Alice: Book: Dune");
//! let format: OutputFormat = "ndjson".parse()?;
//! assert_eq!(format, OutputFormat::Jsonl);
//!
//! let jsonl = render(&buckets, format, &OutputConfig::new())?;
//! assert!(jsonl.contains("\"Reading Lists\""));
//! # Ok(())
//! # }
//! ```

use serde::{Deserialize, Serialize};

use crate::buckets::CategoryBuckets;
use crate::config::OutputConfig;
use crate::error::ChatsiftError;

/// How classified buckets are rendered.
///
/// - [`Text`](OutputFormat::Text) - readable report for the terminal
/// - [`Json`](OutputFormat::Json) - object keyed by category label
/// - [`Jsonl`](OutputFormat::Jsonl) - one JSON object per message
/// - [`Csv`](OutputFormat::Csv) - semicolon-delimited table
///
/// # Example
///
/// ```rust
/// use chatsift::format::OutputFormat;
/// use std::str::FromStr;
///
/// let format = OutputFormat::from_str("jsonl").unwrap();
/// assert_eq!(format, OutputFormat::Jsonl);
/// assert_eq!(format.extension(), "jsonl");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[non_exhaustive]
pub enum OutputFormat {
    /// Plain-text report (default)
    #[default]
    Text,

    /// Pretty-printed JSON object
    Json,

    /// JSON Lines, also known as NDJSON
    Jsonl,

    /// CSV with semicolon delimiter
    Csv,
}

impl OutputFormat {
    /// Returns the file extension for this format (without dot).
    ///
    /// # Example
    ///
    /// ```rust
    /// use chatsift::format::OutputFormat;
    ///
    /// assert_eq!(OutputFormat::Text.extension(), "txt");
    /// assert_eq!(OutputFormat::Csv.extension(), "csv");
    /// ```
    pub fn extension(&self) -> &'static str {
        match self {
            OutputFormat::Text => "txt",
            OutputFormat::Json => "json",
            OutputFormat::Jsonl => "jsonl",
            OutputFormat::Csv => "csv",
        }
    }

    /// Returns all available formats.
    pub fn all() -> &'static [OutputFormat] {
        &[
            OutputFormat::Text,
            OutputFormat::Json,
            OutputFormat::Jsonl,
            OutputFormat::Csv,
        ]
    }

    /// Feature that must be enabled for this format, if any.
    fn required_feature(self) -> Option<&'static str> {
        match self {
            OutputFormat::Text => None,
            OutputFormat::Json | OutputFormat::Jsonl => Some("json-output"),
            OutputFormat::Csv => Some("csv-output"),
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Text => write!(f, "Text"),
            OutputFormat::Json => write!(f, "JSON"),
            OutputFormat::Jsonl => write!(f, "JSONL"),
            OutputFormat::Csv => write!(f, "CSV"),
        }
    }
}

impl std::str::FromStr for OutputFormat {
    type Err = ChatsiftError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" | "txt" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            "jsonl" | "ndjson" => Ok(OutputFormat::Jsonl),
            "csv" => Ok(OutputFormat::Csv),
            _ => Err(ChatsiftError::unknown_format(s)),
        }
    }
}

/// Renders buckets in the given format.
///
/// # Errors
///
/// Returns [`ChatsiftError::UnknownFormat`] if the format's feature is not
/// enabled, or a serialization error from the renderer.
pub fn render(
    buckets: &CategoryBuckets,
    format: OutputFormat,
    config: &OutputConfig,
) -> Result<String, ChatsiftError> {
    tracing::debug!(%format, messages = buckets.len(), "rendering");
    match format {
        OutputFormat::Text => Ok(crate::output::to_text(buckets, config)),
        #[cfg(feature = "json-output")]
        OutputFormat::Json => crate::output::to_json(buckets, config),
        #[cfg(feature = "json-output")]
        OutputFormat::Jsonl => crate::output::to_jsonl(buckets, config),
        #[cfg(feature = "csv-output")]
        OutputFormat::Csv => crate::output::to_csv(buckets, config),
        #[allow(unreachable_patterns)]
        _ => Err(ChatsiftError::unknown_format(format!(
            "{} (requires the '{}' feature)",
            format.extension(),
            format.required_feature().unwrap_or_default()
        ))),
    }
}
