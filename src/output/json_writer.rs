//! JSON output writer.

use serde::ser::{Serialize, SerializeMap, Serializer};

use crate::buckets::CategoryBuckets;
use crate::config::OutputConfig;
use crate::error::Result;

use super::JsonEntry;

/// Map of selected buckets, keyed by label, in [`Category::ALL`] order.
///
/// [`Category::ALL`]: crate::Category::ALL
struct Report<'a> {
    buckets: &'a CategoryBuckets,
    config: &'a OutputConfig,
}

impl Serialize for Report<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(None)?;
        let layout = self.buckets.date_layout();
        for (category, messages) in self.buckets.iter() {
            if !self.config.includes(category) {
                continue;
            }
            let entries: Vec<JsonEntry<'_>> = messages
                .iter()
                .map(|msg| JsonEntry::new(msg, layout, self.config))
                .collect();
            map.serialize_entry(category.label(), &entries)?;
        }
        map.end()
    }
}

/// Converts buckets to a pretty-printed JSON object.
///
/// # Format
/// ```json
/// {
///   "Links/URLs": [
///     {"timestamp": "1/1/24, 9:00 AM", "sender": "Alice",
///      "content": "https://example.com", "category": "Links/URLs",
///      "data": ["https://example.com"]}
///   ],
///   "Quotes/Insights": [],
///   "Reading Lists": [],
///   "Personal Notes": []
/// }
/// ```
pub fn to_json(buckets: &CategoryBuckets, config: &OutputConfig) -> Result<String> {
    Ok(serde_json::to_string_pretty(&Report { buckets, config })?)
}
