//! The parse pipeline: raw transcript text in, [`CategoryBuckets`] out.
//!
//! ```text
//! split on '\n' → trim → drop blanks → tokenize → classify → bucket
//! ```
//!
//! Lines the tokenizer rejects are dropped without an error. The pipeline is
//! total: any `&str`, including the empty string, yields four buckets.
//!
//! # Example
//!
//! ```rust
//! use chatsift::{Category, parse};
//!
//! let transcript = "\
//! Messages and calls are end-to-end encrypted.
//! [1/1/24, 9:00 AM] Alice: check \"great read\" at https://example.com
//! [1/1/24, 9:01 AM] Bob: She said \"hello world\" today
//! [1/1/24, 9:02 AM] Carol: Book: Dune by Frank Herbert
//! [1/1/24, 9:03 AM] Dave: just saying hi
//! ";
//!
//! let buckets = parse(transcript);
//! assert_eq!(buckets.len(), 4);
//! assert_eq!(buckets.get(Category::Links)[0].sender(), "Alice");
//! assert_eq!(buckets.get(Category::Quotes)[0].values(), vec!["hello world"]);
//! assert_eq!(buckets.get(Category::ReadingList)[0].values(), vec!["Dune by Frank Herbert"]);
//! assert_eq!(buckets.get(Category::PersonalNote)[0].content(), "just saying hi");
//! ```

use serde::Serialize;
use tracing::debug;

use crate::buckets::CategoryBuckets;
use crate::classifier::classify;
use crate::tokenizer::tokenize;

/// Counters collected while parsing a transcript.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ParseStats {
    /// Lines produced by splitting the input on `'\n'`
    pub total_lines: usize,
    /// Lines that were empty after trimming
    pub blank_lines: usize,
    /// Non-blank lines the tokenizer rejected
    pub skipped_lines: usize,
    /// Messages placed into a bucket
    pub classified: usize,
}

impl ParseStats {
    /// Share of non-blank lines that were skipped, in percent.
    pub fn skip_ratio(&self) -> f64 {
        let candidates = self.skipped_lines + self.classified;
        if candidates == 0 {
            return 0.0;
        }
        self.skipped_lines as f64 / candidates as f64 * 100.0
    }
}

/// Parses a transcript into category buckets.
pub fn parse(raw_text: &str) -> CategoryBuckets {
    parse_with_stats(raw_text).0
}

/// Parses a transcript and reports how many lines were kept or dropped.
///
/// # Example
///
/// ```rust
/// use chatsift::parse_with_stats;
///
/// let (buckets, stats) = parse_with_stats("[t] A: hi\n\nnoise\n");
/// assert_eq!(buckets.len(), 1);
/// assert_eq!(stats.total_lines, 4);
/// assert_eq!(stats.blank_lines, 2);
/// assert_eq!(stats.skipped_lines, 1);
/// assert_eq!(stats.classified, 1);
/// ```
pub fn parse_with_stats(raw_text: &str) -> (CategoryBuckets, ParseStats) {
    let mut buckets = CategoryBuckets::new();
    let mut stats = ParseStats::default();

    for line in raw_text.split('\n') {
        stats.total_lines += 1;

        let line = trim_line(line);
        if line.is_empty() {
            stats.blank_lines += 1;
            continue;
        }

        match tokenize(line) {
            Some(message) => {
                buckets.push(classify(message));
                stats.classified += 1;
            }
            None => stats.skipped_lines += 1,
        }
    }

    buckets.detect_date_layout();

    debug!(
        total = stats.total_lines,
        blank = stats.blank_lines,
        skipped = stats.skipped_lines,
        classified = stats.classified,
        date_layout = ?buckets.date_layout(),
        "parsed transcript"
    );

    (buckets, stats)
}

/// Trims whitespace and a byte-order mark from both ends of a line.
pub(crate) fn trim_line(line: &str) -> &str {
    line.trim_matches(|c: char| c.is_whitespace() || c == '\u{feff}')
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::category::{Category, Payload};

    #[test]
    fn test_parse_empty_string() {
        let buckets = parse("");
        assert!(buckets.is_empty());
        assert_eq!(buckets.iter().count(), 4);
    }

    #[test]
    fn test_parse_only_noise() {
        let (buckets, stats) = parse_with_stats(
            "Messages and calls are end-to-end encrypted.\n   \n\t\nrandom text",
        );
        assert!(buckets.is_empty());
        assert_eq!(stats.skipped_lines, 2);
        assert_eq!(stats.blank_lines, 2);
    }

    #[test]
    fn test_parse_trims_lines() {
        let buckets = parse("   [t] Alice: padded line   \n");
        let notes = buckets.get(Category::PersonalNote);
        assert_eq!(notes.len(), 1);
        assert_eq!(notes[0].content(), "padded line");
    }

    #[test]
    fn test_parse_crlf() {
        let buckets = parse("[t] Alice: one\r\n[t] Bob: two\r\n");
        let notes: Vec<&str> = buckets
            .get(Category::PersonalNote)
            .iter()
            .map(|m| m.content())
            .collect();
        assert_eq!(notes, vec!["one", "two"]);
    }

    #[test]
    fn test_parse_strips_bom() {
        let buckets = parse("\u{feff}[1/1/24, 9:00 AM] Alice: first line");
        assert_eq!(buckets.len(), 1);
        assert_eq!(buckets.get(Category::PersonalNote)[0].timestamp(), "1/1/24, 9:00 AM");
    }

    #[test]
    fn test_parse_routes_each_category() {
        let buckets = parse(
            "[t] A: https://example.com\n\
             [t] B: \"a quote\"\n\
             [t] C: article: Attention Is All You Need\n\
             [t] D: nothing special",
        );
        assert_eq!(
            buckets.get(Category::Links)[0].data(),
            Some(&Payload::Links(vec!["https://example.com".into()]))
        );
        assert_eq!(buckets.get(Category::Quotes)[0].values(), vec!["a quote"]);
        assert_eq!(
            buckets.get(Category::ReadingList)[0].values(),
            vec!["Attention Is All You Need"]
        );
        assert!(buckets.get(Category::PersonalNote)[0].data().is_none());
    }

    #[test]
    fn test_parse_is_deterministic() {
        let input = "[t] A: https://x.io\n[t] B: \"q\"\n[t] C: note";
        assert_eq!(parse(input), parse(input));
    }

    #[test]
    fn test_stats_counts() {
        let (_, stats) = parse_with_stats("[t] A: one\nnoise\n\n[t] B: two");
        assert_eq!(
            stats,
            ParseStats {
                total_lines: 4,
                blank_lines: 1,
                skipped_lines: 1,
                classified: 2,
            }
        );
    }

    #[test]
    fn test_skip_ratio() {
        assert_eq!(ParseStats::default().skip_ratio(), 0.0);
        let stats = ParseStats {
            total_lines: 4,
            blank_lines: 0,
            skipped_lines: 1,
            classified: 3,
        };
        assert!((stats.skip_ratio() - 25.0).abs() < f64::EPSILON);
    }
}
