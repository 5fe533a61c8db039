//! Command-line interface definition using clap.
//!
//! This module defines:
//! - [`Args`] - CLI argument structure (for use with clap)
//! - [`Format`] - output format options, convertible to
//!   [`format::OutputFormat`](crate::format::OutputFormat)
//!
//! [`Args`] also knows how to turn itself into the library's configuration
//! types, so the binary stays a thin pipeline:
//!
//! ```rust
//! use chatsift::cli::Args;
//! use clap::Parser;
//!
//! let args = Args::try_parse_from(["chatsift", "chat.txt", "--no-sender", "-c", "links"]).unwrap();
//! let output = args.output_config();
//! assert!(!output.include_sender);
//! assert!(!output.includes(chatsift::Category::PersonalNote));
//! ```

use std::path::PathBuf;

use clap::{ArgAction, Parser, ValueEnum};
use serde::{Deserialize, Serialize};

use crate::category::Category;
use crate::config::{DEFAULT_MAX_FILE_SIZE, OutputConfig, UploadLimits};
use crate::error::Result;
use crate::filter::FilterConfig;

/// Sort a WhatsApp chat export into links, quotes, reading lists and
/// personal notes.
#[derive(Parser, Debug, Clone)]
#[command(name = "chatsift")]
#[command(version, about, long_about = None)]
#[command(after_help = "EXAMPLES:
    chatsift \"WhatsApp Chat with Alice.txt\"
    chatsift chat.txt -f json > sorted.json
    chatsift chat.txt -c links -c reading --from Alice
    chatsift chat.txt -f csv --after 2024-01-01 --iso-timestamps
    chatsift chat.txt --stats -v")]
pub struct Args {
    /// Path to the exported chat (.txt)
    pub input: PathBuf,

    /// Output format
    #[arg(short, long, value_enum, default_value = "text")]
    pub format: Format,

    /// Only show this category (repeatable): links, quotes, reading, notes
    #[arg(short = 'c', long = "category", value_name = "CATEGORY", action = ArgAction::Append)]
    pub categories: Vec<Category>,

    /// Only keep messages from this sender (case-insensitive)
    #[arg(long, value_name = "USER")]
    pub from: Option<String>,

    /// Only keep messages on or after this date (YYYY-MM-DD)
    #[arg(long, value_name = "DATE")]
    pub after: Option<String>,

    /// Only keep messages on or before this date (YYYY-MM-DD)
    #[arg(long, value_name = "DATE")]
    pub before: Option<String>,

    /// Leave timestamps out of the output
    #[arg(long)]
    pub no_timestamps: bool,

    /// Leave sender names out of the output
    #[arg(long)]
    pub no_sender: bool,

    /// Print recognizable timestamps as YYYY-MM-DDTHH:MM:SS
    #[arg(long)]
    pub iso_timestamps: bool,

    /// Largest accepted input file in bytes
    #[arg(long, value_name = "BYTES", default_value_t = DEFAULT_MAX_FILE_SIZE)]
    pub max_size: u64,

    /// Print line statistics to stderr
    #[arg(long)]
    pub stats: bool,

    /// Enable debug logging on stderr
    #[arg(short, long)]
    pub verbose: bool,
}

impl Args {
    /// Upload limits implied by the flags.
    pub fn upload_limits(&self) -> UploadLimits {
        UploadLimits::new().with_max_file_size(self.max_size)
    }

    /// Output configuration implied by the flags.
    pub fn output_config(&self) -> OutputConfig {
        OutputConfig::new()
            .with_timestamps(!self.no_timestamps)
            .with_sender(!self.no_sender)
            .with_iso_timestamps(self.iso_timestamps)
            .with_categories(self.categories.iter().copied())
    }

    /// Filter configuration implied by the flags.
    ///
    /// # Errors
    ///
    /// Returns [`ChatsiftError::InvalidDate`](crate::ChatsiftError::InvalidDate)
    /// if `--after` or `--before` is not `YYYY-MM-DD`.
    pub fn filter_config(&self) -> Result<FilterConfig> {
        let mut config = FilterConfig::new();
        if let Some(ref after) = self.after {
            config = config.with_date_from(after)?;
        }
        if let Some(ref before) = self.before {
            config = config.with_date_to(before)?;
        }
        if let Some(ref from) = self.from {
            config = config.with_sender(from.clone());
        }
        Ok(config)
    }
}

/// Output format options.
///
/// # Example
///
/// ```rust
/// use chatsift::cli::Format;
///
/// let format: chatsift::format::OutputFormat = Format::Jsonl.into();
/// assert_eq!(format.extension(), "jsonl");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Format {
    /// Readable report (default)
    #[default]
    Text,

    /// JSON object keyed by category
    Json,

    /// One JSON object per message
    #[value(alias = "ndjson")]
    Jsonl,

    /// CSV with semicolon delimiter
    Csv,
}

impl std::fmt::Display for Format {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", crate::format::OutputFormat::from(*self))
    }
}

// Conversion to library format type
impl From<Format> for crate::format::OutputFormat {
    fn from(format: Format) -> crate::format::OutputFormat {
        match format {
            Format::Text => crate::format::OutputFormat::Text,
            Format::Json => crate::format::OutputFormat::Json,
            Format::Jsonl => crate::format::OutputFormat::Jsonl,
            Format::Csv => crate::format::OutputFormat::Csv,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Args {
        Args::try_parse_from(std::iter::once("chatsift").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn test_defaults() {
        let args = parse(&["chat.txt"]);
        assert_eq!(args.input, PathBuf::from("chat.txt"));
        assert_eq!(args.format, Format::Text);
        assert!(args.categories.is_empty());
        assert_eq!(args.max_size, 10 * 1024 * 1024);
        assert_eq!(args.output_config(), OutputConfig::new());
        assert!(!args.filter_config().unwrap().is_active());
    }

    #[test]
    fn test_format_and_alias() {
        assert_eq!(parse(&["a.txt", "-f", "csv"]).format, Format::Csv);
        assert_eq!(parse(&["a.txt", "--format", "ndjson"]).format, Format::Jsonl);
        assert!(Args::try_parse_from(["chatsift", "a.txt", "-f", "xml"]).is_err());
    }

    #[test]
    fn test_repeated_categories() {
        let args = parse(&["a.txt", "-c", "links", "--category", "Reading Lists"]);
        assert_eq!(args.categories, vec![Category::Links, Category::ReadingList]);
        assert!(Args::try_parse_from(["chatsift", "a.txt", "-c", "videos"]).is_err());
    }

    #[test]
    fn test_output_flags() {
        let args = parse(&["a.txt", "--no-timestamps", "--no-sender", "--iso-timestamps"]);
        let config = args.output_config();
        assert!(!config.include_timestamps);
        assert!(!config.include_sender);
        assert!(config.iso_timestamps);
    }

    #[test]
    fn test_filter_flags() {
        let args = parse(&["a.txt", "--from", "Alice", "--after", "2024-01-01"]);
        let config = args.filter_config().unwrap();
        assert_eq!(config.from.as_deref(), Some("Alice"));
        assert!(config.after.is_some());
        assert!(config.before.is_none());

        let bad = parse(&["a.txt", "--before", "yesterday"]);
        assert!(bad.filter_config().unwrap_err().is_invalid_date());
    }

    #[test]
    fn test_max_size() {
        let args = parse(&["a.txt", "--max-size", "2048"]);
        assert_eq!(args.upload_limits().max_file_size, 2048);
    }

    #[test]
    fn test_format_conversion() {
        for format in [Format::Text, Format::Json, Format::Jsonl, Format::Csv] {
            let lib: crate::format::OutputFormat = format.into();
            assert_eq!(format.to_string(), lib.to_string());
        }
    }
}
