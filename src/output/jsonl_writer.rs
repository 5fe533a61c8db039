//! JSON Lines (JSONL) output writer.
//!
//! One message per line, bucket after bucket. Each object carries its
//! `category`, so the lines can be grepped or streamed without the
//! surrounding map.

use crate::buckets::CategoryBuckets;
use crate::config::OutputConfig;
use crate::error::Result;

use super::JsonEntry;

/// Converts buckets to JSONL.
///
/// ```jsonl
/// {"timestamp":"t","sender":"Alice","content":"https://x.example","category":"Links/URLs","data":["https://x.example"]}
/// {"timestamp":"t","sender":"Bob","content":"hi","category":"Personal Notes"}
/// ```
pub fn to_jsonl(buckets: &CategoryBuckets, config: &OutputConfig) -> Result<String> {
    let mut out = String::new();
    let layout = buckets.date_layout();
    for (category, messages) in buckets.iter() {
        if !config.includes(category) {
            continue;
        }
        for msg in messages {
            out.push_str(&serde_json::to_string(&JsonEntry::new(msg, layout, config))?);
            out.push('\n');
        }
    }
    Ok(out)
}
