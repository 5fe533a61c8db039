//! Filter classified messages by date range and sender.
//!
//! Filtering happens after classification and never changes a message's
//! category; it only removes entries. All four buckets stay present.
//!
//! # Filter Types
//!
//! | Filter | Method | Description |
//! |--------|--------|-------------|
//! | Date from | [`with_date_from`](FilterConfig::with_date_from) | Messages on or after date |
//! | Date to | [`with_date_to`](FilterConfig::with_date_to) | Messages on or before date |
//! | Sender | [`with_sender`](FilterConfig::with_sender) | Messages from specific user |
//!
//! # Example
//!
//! ```
//! use chatsift::filter::{FilterConfig, apply_filters};
//! use chatsift::{Category, parse};
//!
//! # fn main() -> chatsift::Result<()> {
//! let buckets = parse(
//!     "[1/10/24, 9:00 AM] Alice: old note\n\
//!      [6/15/24, 9:00 AM] Alice: Book: Dune\n\
//!      [6/16/24, 9:00 AM] Bob: Book: Neuromancer",
//! );
//!
//! let config = FilterConfig::new()
//!     .with_sender("alice")
//!     .with_date_from("2024-06-01")?;
//!
//! let filtered = apply_filters(buckets, &config);
//! assert_eq!(filtered.len(), 1);
//! assert_eq!(filtered.get(Category::ReadingList)[0].values(), vec!["Dune"]);
//! # Ok(())
//! # }
//! ```
//!
//! # Behavior Notes
//!
//! - Messages whose timestamp cannot be interpreted are **excluded** when a
//!   date filter is active
//! - Sender matching is case-insensitive
//! - Multiple filters are combined with AND logic

use chrono::{NaiveDate, NaiveDateTime};

use crate::buckets::CategoryBuckets;
use crate::error::ChatsiftError;
use crate::message::ClassifiedMessage;
use crate::timestamp::DateLayout;

/// Configuration for filtering messages by date and sender.
#[derive(Debug, Clone, Default)]
pub struct FilterConfig {
    /// Include only messages on or after this moment.
    pub after: Option<NaiveDateTime>,

    /// Include only messages on or before this moment.
    pub before: Option<NaiveDateTime>,

    /// Include only messages from this sender (case-insensitive).
    pub from: Option<String>,
}

impl FilterConfig {
    /// Creates a new empty filter configuration.
    ///
    /// No filters are active by default; all messages pass through.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the start date filter (inclusive). Date format: `YYYY-MM-DD`.
    ///
    /// # Errors
    ///
    /// Returns [`ChatsiftError::InvalidDate`] if the format is invalid.
    pub fn with_date_from(mut self, date_str: &str) -> Result<Self, ChatsiftError> {
        let date = parse_date(date_str)?;
        self.after = date.and_hms_opt(0, 0, 0);
        Ok(self)
    }

    /// Sets the end date filter (inclusive). Date format: `YYYY-MM-DD`.
    ///
    /// # Errors
    ///
    /// Returns [`ChatsiftError::InvalidDate`] if the format is invalid.
    pub fn with_date_to(mut self, date_str: &str) -> Result<Self, ChatsiftError> {
        let date = parse_date(date_str)?;
        // End of the day to include the full day
        self.before = date.and_hms_opt(23, 59, 59);
        Ok(self)
    }

    /// Sets the sender filter. Matching is case-insensitive.
    #[must_use]
    pub fn with_sender(mut self, sender: impl Into<String>) -> Self {
        self.from = Some(sender.into());
        self
    }

    /// Returns `true` if any filter is active.
    pub fn is_active(&self) -> bool {
        self.has_date_filter() || self.from.is_some()
    }

    /// Returns `true` if date filters are active.
    pub fn has_date_filter(&self) -> bool {
        self.after.is_some() || self.before.is_some()
    }

    /// Returns `true` if the message passes every active filter.
    ///
    /// `layout` is the date layout of the transcript the message came from;
    /// without one, no message passes a date filter.
    pub fn matches(&self, message: &ClassifiedMessage, layout: Option<DateLayout>) -> bool {
        if let Some(ref from) = self.from {
            if message.sender().to_lowercase() != from.to_lowercase() {
                return false;
            }
        }

        if self.has_date_filter() {
            let Some(when) = layout.and_then(|layout| message.message().datetime(layout)) else {
                return false;
            };
            if self.after.is_some_and(|after| when < after) {
                return false;
            }
            if self.before.is_some_and(|before| when > before) {
                return false;
            }
        }

        true
    }
}

fn parse_date(date_str: &str) -> Result<NaiveDate, ChatsiftError> {
    NaiveDate::parse_from_str(date_str, "%Y-%m-%d")
        .map_err(|_| ChatsiftError::invalid_date(date_str))
}

/// Removes every message that does not match the filter.
///
/// Returns the buckets unchanged when no filter is active.
pub fn apply_filters(mut buckets: CategoryBuckets, config: &FilterConfig) -> CategoryBuckets {
    if !config.is_active() {
        return buckets;
    }
    let layout = buckets.date_layout();
    buckets.retain(|message| config.matches(message, layout));
    buckets
}
