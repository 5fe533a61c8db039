//! # chatsift
//!
//! A Rust library that sorts exported WhatsApp chat transcripts into four
//! fixed buckets: **links**, **quotes**, **reading lists** and **personal
//! notes**.
//!
//! ## Overview
//!
//! Every line of an export looks like `[timestamp] sender: content`. chatsift
//! tokenizes each line, classifies the content with an ordered rule chain and
//! groups the results:
//!
//! 1. any `http://` or `https://` URL → [`Category::Links`]
//! 2. any `"double-quoted"` span → [`Category::Quotes`]
//! 3. a `Book:` / `article:` / `paper:` keyword → [`Category::ReadingList`]
//! 4. everything else → [`Category::PersonalNote`]
//!
//! The first matching rule wins. Lines that do not follow the line shape
//! (system notices, wrapped continuations) are skipped silently.
//!
//! ## Quick Start
//!
//! ```rust
//! use chatsift::prelude::*;
//!
//! let buckets = parse("[1/15/24, 10:30 AM] Alice: Book: The Pragmatic Programmer");
//! let item = &buckets.get(Category::ReadingList)[0];
//! assert_eq!(item.sender(), "Alice");
//! assert_eq!(item.display_text(), "The Pragmatic Programmer");
//! ```
//!
//! ## From a File
//!
//! ```rust,no_run
//! use chatsift::prelude::*;
//!
//! fn main() -> Result<()> {
//!     let text = read_transcript("WhatsApp Chat.txt", &UploadLimits::default())?;
//!     let (buckets, stats) = parse_with_stats(&text);
//!     let buckets = apply_filters(buckets, &FilterConfig::new().with_sender("Alice"));
//!
//!     print!("{}", render(&buckets, OutputFormat::Text, &OutputConfig::new())?);
//!     eprintln!("skipped {} lines", stats.skipped_lines);
//!     Ok(())
//! }
//! ```
//!
//! ## Module Structure
//!
//! - [`tokenizer`] - [`tokenize`] a line into a [`Message`]
//! - [`classifier`] - [`classify`] a [`Message`] into a [`ClassifiedMessage`]
//! - [`parser`] - [`parse`] / [`parse_with_stats`] whole transcripts
//! - [`buckets`] - [`CategoryBuckets`], the four-bucket result
//! - [`category`] - [`Category`] and its [`Payload`]
//! - [`message`] - [`Message`] and [`ClassifiedMessage`]
//! - [`source`] - validate and read transcript files
//! - [`timestamp`] - per-transcript date layout detection
//! - [`filter`] - narrow results by date and sender
//! - [`format`] / [`output`] - render as text, JSON, JSONL or CSV
//! - [`config`] - [`UploadLimits`](config::UploadLimits), [`OutputConfig`](config::OutputConfig)
//! - `cli` - clap argument types (`cli` feature)
//! - [`error`] - [`ChatsiftError`], [`Result`]
//! - [`prelude`] - convenient re-exports

pub mod buckets;
pub mod category;
pub mod classifier;
#[cfg(feature = "cli")]
pub mod cli;
pub mod config;
pub mod error;
pub mod filter;
pub mod format;
pub mod message;
pub mod output;
pub mod parser;
pub mod source;
pub mod timestamp;
pub mod tokenizer;

// Re-export the main types at the crate root for convenience
pub use buckets::CategoryBuckets;
pub use category::{Category, Payload};
pub use classifier::classify;
pub use error::{ChatsiftError, Result};
pub use message::{ClassifiedMessage, Message};
pub use parser::{ParseStats, parse, parse_with_stats};
pub use tokenizer::tokenize;

/// Convenient re-exports for common usage.
///
/// Import everything you need with a single line:
///
/// ```rust
/// use chatsift::prelude::*;
/// ```
pub mod prelude {
    // Pipeline
    pub use crate::classifier::{categorize, classify};
    pub use crate::parser::{ParseStats, parse, parse_with_stats};
    pub use crate::tokenizer::tokenize;

    // Data model
    pub use crate::buckets::CategoryBuckets;
    pub use crate::category::{Category, Payload};
    pub use crate::message::{ClassifiedMessage, Message};

    // Error types
    pub use crate::error::{ChatsiftError, Result};

    // Files, filtering, rendering
    pub use crate::config::{OutputConfig, UploadLimits};
    pub use crate::filter::{FilterConfig, apply_filters};
    pub use crate::format::{OutputFormat, render};
    pub use crate::source::{parse_file, read_transcript, validate_upload};
    pub use crate::timestamp::DateLayout;
}
