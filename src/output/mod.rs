//! Renderers for classified buckets.
//!
//! Every renderer returns a `String`; the caller decides where it goes.
//! - [`to_text`] - human-readable report, always available
//! - [`to_json`] - pretty JSON object keyed by category label - requires `json-output`
//! - [`to_jsonl`] - one JSON object per message - requires `json-output`
//! - [`to_csv`] - semicolon-delimited table - requires `csv-output`
//!
//! All renderers honor [`OutputConfig`]: disabled fields are left out and
//! buckets not selected by [`OutputConfig::includes`] are skipped.
//!
//! # Example
//!
//! ```rust
//! use chatsift::config::OutputConfig;
//! use chatsift::output::to_text;
//!
//! let buckets = chatsift::parse("[1/1/24, 9:00 AM] Alice: https://example.com");
//! let report = to_text(&buckets, &OutputConfig::new().with_sender(false));
//! assert!(report.contains("Links/URLs (1)"));
//! assert!(!report.contains("Alice"));
//! ```

#[cfg(feature = "csv-output")]
mod csv_writer;
#[cfg(feature = "json-output")]
mod json_writer;
#[cfg(feature = "json-output")]
mod jsonl_writer;
mod text;

#[cfg(feature = "csv-output")]
pub use csv_writer::to_csv;
#[cfg(feature = "json-output")]
pub use json_writer::to_json;
#[cfg(feature = "json-output")]
pub use jsonl_writer::to_jsonl;
pub use text::to_text;

use crate::config::OutputConfig;
use crate::message::ClassifiedMessage;
use crate::timestamp::DateLayout;

/// Layout used when timestamps are normalized.
pub const ISO_TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

/// Timestamp of a message as it should be rendered, or `None` when
/// timestamps are disabled.
///
/// With `iso_timestamps`, timestamps that fit the transcript's date layout
/// are rewritten; anything else is passed through verbatim.
pub(crate) fn rendered_timestamp(
    msg: &ClassifiedMessage,
    layout: Option<DateLayout>,
    config: &OutputConfig,
) -> Option<String> {
    if !config.include_timestamps {
        return None;
    }
    let iso = layout
        .filter(|_| config.iso_timestamps)
        .and_then(|layout| msg.message().datetime(layout))
        .map(|dt| dt.format(ISO_TIMESTAMP_FORMAT).to_string());
    Some(iso.unwrap_or_else(|| msg.timestamp().to_string()))
}

/// Sender of a message, or `None` when senders are disabled.
pub(crate) fn rendered_sender<'a>(
    msg: &'a ClassifiedMessage,
    config: &OutputConfig,
) -> Option<&'a str> {
    config.include_sender.then(|| msg.sender())
}

/// Serializable view of one message shared by the JSON renderers.
#[cfg(feature = "json-output")]
#[derive(serde::Serialize)]
pub(crate) struct JsonEntry<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    timestamp: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    sender: Option<&'a str>,
    content: &'a str,
    category: crate::category::Category,
    #[serde(skip_serializing_if = "Option::is_none")]
    data: Option<&'a crate::category::Payload>,
}

#[cfg(feature = "json-output")]
impl<'a> JsonEntry<'a> {
    pub(crate) fn new(
        msg: &'a ClassifiedMessage,
        layout: Option<DateLayout>,
        config: &OutputConfig,
    ) -> Self {
        Self {
            timestamp: rendered_timestamp(msg, layout, config),
            sender: rendered_sender(msg, config),
            content: msg.content(),
            category: msg.category(),
            data: msg.data(),
        }
    }
}
