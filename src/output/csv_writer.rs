//! CSV output writer.

use std::io;

use crate::buckets::CategoryBuckets;
use crate::config::OutputConfig;
use crate::error::Result;
use crate::message::ClassifiedMessage;
use crate::timestamp::DateLayout;

use super::{rendered_sender, rendered_timestamp};

/// Separator between multiple payload values in the `Data` column.
const DATA_SEPARATOR: &str = " | ";

/// Converts buckets to CSV with semicolon delimiter.
///
/// # Format
/// - Delimiter: `;`
/// - Columns: `Category`, `Timestamp`, `Sender`, `Content`, `Data`;
///   `Timestamp` and `Sender` are dropped when disabled in the config
/// - `Data`: payload values joined with ` | `, empty for personal notes
pub fn to_csv(buckets: &CategoryBuckets, config: &OutputConfig) -> Result<String> {
    let mut writer = csv::WriterBuilder::new()
        .delimiter(b';')
        .from_writer(Vec::new());

    writer.write_record(build_header(config))?;

    let layout = buckets.date_layout();
    for (category, messages) in buckets.iter() {
        if !config.includes(category) {
            continue;
        }
        for msg in messages {
            writer.write_record(build_record(msg, layout, config))?;
        }
    }

    let bytes = writer
        .into_inner()
        .map_err(|e| io::Error::other(e.to_string()))?;
    String::from_utf8(bytes).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e).into())
}

/// Build CSV header based on output configuration.
fn build_header(config: &OutputConfig) -> Vec<&'static str> {
    let mut header = vec!["Category"];
    if config.include_timestamps {
        header.push("Timestamp");
    }
    if config.include_sender {
        header.push("Sender");
    }
    header.push("Content");
    header.push("Data");
    header
}

/// Build CSV record for a single message.
fn build_record(
    msg: &ClassifiedMessage,
    layout: Option<DateLayout>,
    config: &OutputConfig,
) -> Vec<String> {
    let mut record = vec![msg.category().label().to_string()];
    if let Some(timestamp) = rendered_timestamp(msg, layout, config) {
        record.push(timestamp);
    }
    if let Some(sender) = rendered_sender(msg, config) {
        record.push(sender.to_string());
    }
    record.push(msg.content().to_string());
    record.push(msg.values().join(DATA_SEPARATOR));
    record
}
