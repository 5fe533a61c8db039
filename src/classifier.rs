//! Assigns each tokenized message to exactly one [`Category`].
//!
//! Rules are checked in a fixed order and the first one that matches wins:
//!
//! | # | Category | Matches | Payload |
//! |---|----------|---------|---------|
//! | 1 | Links/URLs | `http://` or `https://` followed by non-whitespace | every URL |
//! | 2 | Quotes/Insights | `"..."` pairs, no escaping | every quoted span, quotes stripped |
//! | 3 | Reading Lists | `Book:`, `Books:`, `article:`, `paper:` (any case, optional `s`) | the rest of the line, trimmed |
//! | 4 | Personal Notes | anything else | none |
//!
//! A URL therefore wins over a quote in the same message, and a quoted
//! sentence mentioning a "book" stays a quote.

use std::sync::LazyLock;

use regex::Regex;

use crate::category::{Category, Payload};
use crate::message::{ClassifiedMessage, Message};
use crate::parser::trim_line;

static URL_PATTERN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"https?://\S+").unwrap());

/// Quote characters pair left to right; an unpaired trailing `"` matches nothing.
static QUOTE_PATTERN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r#""([^"]*)""#).unwrap());

/// The word boundary is ASCII-only: `éBook:` still counts as a keyword.
static READING_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)(?-u:\b)(?:Book|Books|article|paper)s?:\s*(.*)").unwrap()
});

/// A single rule: returns the payload when the content belongs to the category.
type Rule = fn(&str) -> Option<Payload>;

/// Rules in priority order. Personal notes are the fallback and have no rule.
const RULES: [Rule; 3] = [extract_links, extract_quotes, extract_reading_item];

/// Classifies a message. Total: every message receives exactly one category.
///
/// # Example
///
/// ```rust
/// use chatsift::{Category, Message, Payload, classify};
///
/// let msg = Message::new("1/1/24, 9:00 AM", "Carol", "Book: Dune by Frank Herbert");
/// let classified = classify(msg);
///
/// assert_eq!(classified.category(), Category::ReadingList);
/// assert_eq!(
///     classified.data(),
///     Some(&Payload::ReadingItem("Dune by Frank Herbert".to_string()))
/// );
/// ```
pub fn classify(message: Message) -> ClassifiedMessage {
    let payload = RULES.iter().find_map(|rule| rule(message.content()));
    let category = payload
        .as_ref()
        .map_or(Category::PersonalNote, Payload::category);
    ClassifiedMessage::new(message, category, payload)
}

/// Returns the category a piece of content would be assigned, without
/// building a [`ClassifiedMessage`].
pub fn categorize(content: &str) -> Category {
    RULES
        .iter()
        .find_map(|rule| rule(content))
        .map_or(Category::PersonalNote, |payload| payload.category())
}

fn extract_links(content: &str) -> Option<Payload> {
    let urls: Vec<String> = URL_PATTERN
        .find_iter(content)
        .map(|m| m.as_str().to_string())
        .collect();
    (!urls.is_empty()).then_some(Payload::Links(urls))
}

fn extract_quotes(content: &str) -> Option<Payload> {
    let quotes: Vec<String> = QUOTE_PATTERN
        .captures_iter(content)
        .filter_map(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
        .collect();
    (!quotes.is_empty()).then_some(Payload::Quotes(quotes))
}

fn extract_reading_item(content: &str) -> Option<Payload> {
    let caps = READING_PATTERN.captures(content)?;
    let item = trim_line(caps.get(1).map_or("", |m| m.as_str()));
    Some(Payload::ReadingItem(item.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn msg(content: &str) -> Message {
        Message::new("1/1/24, 9:00 AM", "Alice", content)
    }

    #[test]
    fn test_links_single() {
        let classified = classify(msg("see https://example.com/a?b=c for details"));
        assert_eq!(classified.category(), Category::Links);
        assert_eq!(
            classified.data(),
            Some(&Payload::Links(vec!["https://example.com/a?b=c".into()]))
        );
    }

    #[test]
    fn test_links_multiple_with_duplicates_in_order() {
        let classified =
            classify(msg("http://b.io then https://a.io and again http://b.io"));
        assert_eq!(
            classified.values(),
            vec!["http://b.io", "https://a.io", "http://b.io"]
        );
    }

    #[test]
    fn test_link_includes_trailing_punctuation() {
        // everything up to whitespace belongs to the URL
        let classified = classify(msg("look (https://example.com)."));
        assert_eq!(classified.values(), vec!["https://example.com)."]);
    }

    #[test]
    fn test_bare_scheme_is_not_a_link() {
        assert_eq!(categorize("the prefix https:// alone"), Category::PersonalNote);
        assert_eq!(categorize("ftp://example.com"), Category::PersonalNote);
    }

    #[test]
    fn test_url_beats_quote() {
        let classified = classify(msg(r#"check "great read" at https://example.com"#));
        assert_eq!(classified.category(), Category::Links);
        assert_eq!(classified.values(), vec!["https://example.com"]);
    }

    #[test]
    fn test_url_beats_reading_list() {
        assert_eq!(
            categorize("article: https://example.com/post"),
            Category::Links
        );
    }

    #[test]
    fn test_quote_extraction() {
        let classified = classify(msg(r#"She said "hello world" today"#));
        assert_eq!(classified.category(), Category::Quotes);
        assert_eq!(
            classified.data(),
            Some(&Payload::Quotes(vec!["hello world".into()]))
        );
    }

    #[test]
    fn test_multiple_quotes() {
        let classified = classify(msg(r#""one" and "two" and "three""#));
        assert_eq!(classified.values(), vec!["one", "two", "three"]);
    }

    #[test]
    fn test_quote_beats_reading_list() {
        let classified = classify(msg(r#""Book: a quoted title" she wrote"#));
        assert_eq!(classified.category(), Category::Quotes);
        assert_eq!(classified.values(), vec!["Book: a quoted title"]);
    }

    #[test]
    fn test_unterminated_quote_is_no_match() {
        assert_eq!(categorize(r#"she said "hello"#), Category::PersonalNote);
    }

    #[test]
    fn test_odd_quote_count_keeps_complete_pairs() {
        let classified = classify(msg(r#""first" and then "dangling"#));
        assert_eq!(classified.category(), Category::Quotes);
        assert_eq!(classified.values(), vec!["first"]);
    }

    #[test]
    fn test_empty_quote_pair_matches() {
        let classified = classify(msg(r#"an empty "" pair"#));
        assert_eq!(classified.category(), Category::Quotes);
        assert_eq!(classified.values(), vec![""]);
    }

    #[test]
    fn test_typographic_quotes_are_not_quotes() {
        assert_eq!(categorize("“curly quotes”"), Category::PersonalNote);
    }

    #[test]
    fn test_reading_list_book() {
        let classified = classify(msg("Book: Dune by Frank Herbert"));
        assert_eq!(classified.category(), Category::ReadingList);
        assert_eq!(
            classified.data(),
            Some(&Payload::ReadingItem("Dune by Frank Herbert".into()))
        );
    }

    #[test]
    fn test_reading_list_keywords_case_insensitive() {
        for content in [
            "books: a few",
            "BOOK: loud",
            "Article: Attention is all you need",
            "articles: several",
            "paper:No space after colon",
            "Papers:   padded   ",
            "Next up, book: Snow Crash",
        ] {
            assert_eq!(categorize(content), Category::ReadingList, "{content}");
        }
    }

    #[test]
    fn test_reading_list_item_trimmed() {
        let classified = classify(msg("Papers:   padded   "));
        assert_eq!(classified.values(), vec!["padded"]);
    }

    #[test]
    fn test_reading_list_needs_word_boundary_and_colon() {
        assert_eq!(categorize("notebook: groceries"), Category::PersonalNote);
        assert_eq!(categorize("I read a book yesterday"), Category::PersonalNote);
        assert_eq!(categorize("paper : spaced colon"), Category::PersonalNote);
    }

    #[test]
    fn test_reading_list_item_strips_byte_order_mark() {
        let classified = classify(msg("Book:\u{feff}Dune\u{feff}"));
        assert_eq!(classified.values(), vec!["Dune"]);
    }

    #[test]
    fn test_reading_list_boundary_is_ascii() {
        assert_eq!(categorize("éBook: Dune"), Category::ReadingList);
        assert_eq!(categorize("КнигаBook: Dune"), Category::ReadingList);
        assert_eq!(categorize("_Book: Dune"), Category::PersonalNote);
    }

    #[test]
    fn test_reading_list_empty_item() {
        let classified = classify(msg("Book:"));
        assert_eq!(classified.category(), Category::ReadingList);
        assert_eq!(classified.values(), vec![""]);
    }

    #[test]
    fn test_fallback_personal_note() {
        let classified = classify(msg("just saying hi"));
        assert_eq!(classified.category(), Category::PersonalNote);
        assert!(classified.data().is_none());
        assert_eq!(classified.content(), "just saying hi");
    }

    #[test]
    fn test_classify_preserves_message() {
        let original = Message::new("15.01.24, 10:30", "Bob", "hello");
        let classified = classify(original.clone());
        assert_eq!(classified.message(), &original);
    }
}
