//! Plain-text report.

use crate::buckets::CategoryBuckets;
use crate::category::Category;
use crate::config::OutputConfig;
use crate::message::ClassifiedMessage;
use crate::timestamp::DateLayout;

use super::{rendered_sender, rendered_timestamp};

const INDENT: &str = "  ";

/// Renders a human-readable report.
///
/// ```text
/// Parsed Chat Results (3 messages)
///
/// Links/URLs (1)
///   1/15/24, 10:30 AM
///   Alice
///   https://example.com
///
/// Quotes/Insights (0)
/// ...
/// ```
///
/// Categories appear in [`Category::ALL`] order, with empty ones listed so
/// the four headings are always present. The count in the first line
/// covers the selected categories only.
pub fn to_text(buckets: &CategoryBuckets, config: &OutputConfig) -> String {
    let total: usize = buckets
        .iter()
        .filter(|(category, _)| config.includes(*category))
        .map(|(_, messages)| messages.len())
        .sum();

    let mut out = format!(
        "Parsed Chat Results ({total} message{})\n",
        if total == 1 { "" } else { "s" }
    );

    let layout = buckets.date_layout();
    for (category, messages) in buckets.iter() {
        if !config.includes(category) {
            continue;
        }
        out.push('\n');
        out.push_str(&format!("{} ({})\n", category.label(), messages.len()));
        for msg in messages {
            push_entry(&mut out, msg, layout, config);
        }
    }

    out
}

fn push_entry(
    out: &mut String,
    msg: &ClassifiedMessage,
    layout: Option<DateLayout>,
    config: &OutputConfig,
) {
    if let Some(timestamp) = rendered_timestamp(msg, layout, config) {
        out.push_str(&format!("{INDENT}{timestamp}\n"));
    }
    if let Some(sender) = rendered_sender(msg, config) {
        out.push_str(&format!("{INDENT}{sender}\n"));
    }
    match msg.category() {
        Category::Links | Category::ReadingList => {
            for value in msg.values() {
                out.push_str(&format!("{INDENT}{value}\n"));
            }
        }
        Category::Quotes => {
            for value in msg.values() {
                out.push_str(&format!("{INDENT}\"{value}\"\n"));
            }
        }
        Category::PersonalNote => {
            out.push_str(&format!("{INDENT}{}\n", msg.content()));
        }
    }
}
