//! The four fixed buckets and the data extracted for each.
//!
//! [`Category`] is a closed enum. Its declaration order is the classifier's
//! priority order and also the order in which buckets are displayed.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ChatsiftError;

/// Semantic bucket a message is sorted into.
///
/// # Example
///
/// ```rust
/// use chatsift::Category;
///
/// assert_eq!(Category::Links.label(), "Links/URLs");
/// assert_eq!("reading".parse::<Category>().unwrap(), Category::ReadingList);
/// assert_eq!(Category::ALL.len(), 4);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Category {
    /// Messages containing at least one `http(s)://` URL
    #[serde(rename = "Links/URLs")]
    Links,

    /// Messages containing at least one `"double-quoted"` span
    #[serde(rename = "Quotes/Insights")]
    Quotes,

    /// Messages of the form `Book: <title>`, `article: <title>`, ...
    #[serde(rename = "Reading Lists")]
    ReadingList,

    /// Everything else
    #[serde(rename = "Personal Notes")]
    PersonalNote,
}

impl Category {
    /// All categories in priority and display order.
    pub const ALL: [Category; 4] = [
        Category::Links,
        Category::Quotes,
        Category::ReadingList,
        Category::PersonalNote,
    ];

    /// Returns the external label used as the bucket key.
    pub fn label(self) -> &'static str {
        match self {
            Category::Links => "Links/URLs",
            Category::Quotes => "Quotes/Insights",
            Category::ReadingList => "Reading Lists",
            Category::PersonalNote => "Personal Notes",
        }
    }

    /// Position of this category in [`Category::ALL`].
    pub(crate) fn index(self) -> usize {
        match self {
            Category::Links => 0,
            Category::Quotes => 1,
            Category::ReadingList => 2,
            Category::PersonalNote => 3,
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Category {
    type Err = ChatsiftError;

    /// Accepts the external label or a short alias, case-insensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "links/urls" | "links" | "link" | "urls" | "url" => Ok(Category::Links),
            "quotes/insights" | "quotes" | "quote" | "insights" => Ok(Category::Quotes),
            "reading lists" | "reading-lists" | "reading" | "books" | "reading-list" => {
                Ok(Category::ReadingList)
            }
            "personal notes" | "personal-notes" | "notes" | "personal" | "note" => {
                Ok(Category::PersonalNote)
            }
            _ => Err(ChatsiftError::unknown_category(s)),
        }
    }
}

/// Data extracted from a message's content for its category.
///
/// Serializes the way the web viewer consumes it: a list of strings for
/// links and quotes, a single string for a reading-list item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Payload {
    /// Every URL in the content, in order, duplicates kept
    Links(Vec<String>),
    /// Every quoted span with the quote characters removed
    Quotes(Vec<String>),
    /// The title or description following the reading-list keyword
    ReadingItem(String),
}

impl Payload {
    /// Category this payload belongs to.
    pub fn category(&self) -> Category {
        match self {
            Payload::Links(_) => Category::Links,
            Payload::Quotes(_) => Category::Quotes,
            Payload::ReadingItem(_) => Category::ReadingList,
        }
    }

    /// Normalized list view of the payload.
    pub fn values(&self) -> Vec<&str> {
        match self {
            Payload::Links(items) | Payload::Quotes(items) => {
                items.iter().map(String::as_str).collect()
            }
            Payload::ReadingItem(item) => vec![item.as_str()],
        }
    }

    /// Rebuilds a payload from its serialized shape and the owning category.
    ///
    /// Returns `None` for [`Category::PersonalNote`], which carries no data.
    pub(crate) fn from_raw(category: Category, raw: RawPayload) -> Option<Self> {
        let list = |raw: RawPayload| match raw {
            RawPayload::List(items) => items,
            RawPayload::Single(item) => vec![item],
        };
        match category {
            Category::Links => Some(Payload::Links(list(raw))),
            Category::Quotes => Some(Payload::Quotes(list(raw))),
            Category::ReadingList => Some(Payload::ReadingItem(match raw {
                RawPayload::Single(item) => item,
                RawPayload::List(items) => items.join(" "),
            })),
            Category::PersonalNote => None,
        }
    }
}

/// Wire shape of a payload before its category is known.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub(crate) enum RawPayload {
    List(Vec<String>),
    Single(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_in_priority_order() {
        assert_eq!(
            Category::ALL,
            [
                Category::Links,
                Category::Quotes,
                Category::ReadingList,
                Category::PersonalNote
            ]
        );
        for (i, category) in Category::ALL.iter().enumerate() {
            assert_eq!(category.index(), i);
        }
    }

    #[test]
    fn test_labels() {
        let labels: Vec<&str> = Category::ALL.iter().map(|c| c.label()).collect();
        assert_eq!(
            labels,
            vec!["Links/URLs", "Quotes/Insights", "Reading Lists", "Personal Notes"]
        );
        assert_eq!(Category::Quotes.to_string(), "Quotes/Insights");
    }

    #[test]
    fn test_from_str_labels_and_aliases() {
        for category in Category::ALL {
            assert_eq!(category.label().parse::<Category>().unwrap(), category);
        }
        for (alias, category) in ["links", "quotes", "reading", "notes"].into_iter().zip(Category::ALL) {
            assert_eq!(alias.parse::<Category>().unwrap(), category);
        }
        assert_eq!("URLS".parse::<Category>().unwrap(), Category::Links);
        assert_eq!(" Insights ".parse::<Category>().unwrap(), Category::Quotes);
        assert!("videos".parse::<Category>().is_err());
    }

    #[test]
    fn test_serde_uses_labels() {
        let json = serde_json::to_string(&Category::ReadingList).unwrap();
        assert_eq!(json, r#""Reading Lists""#);
        let parsed: Category = serde_json::from_str(r#""Personal Notes""#).unwrap();
        assert_eq!(parsed, Category::PersonalNote);
    }

    #[test]
    fn test_payload_serialization_shape() {
        let links = Payload::Links(vec!["https://a.io".into(), "https://a.io".into()]);
        assert_eq!(
            serde_json::to_string(&links).unwrap(),
            r#"["https://a.io","https://a.io"]"#
        );

        let item = Payload::ReadingItem("Dune".into());
        assert_eq!(serde_json::to_string(&item).unwrap(), r#""Dune""#);
    }

    #[test]
    fn test_payload_values() {
        assert_eq!(Payload::ReadingItem("Dune".into()).values(), vec!["Dune"]);
        assert_eq!(
            Payload::Quotes(vec!["a".into(), "b".into()]).values(),
            vec!["a", "b"]
        );
    }

    #[test]
    fn test_payload_from_raw_follows_category() {
        let quotes = Payload::from_raw(Category::Quotes, RawPayload::List(vec!["hi".into()]));
        assert_eq!(quotes, Some(Payload::Quotes(vec!["hi".into()])));

        let item = Payload::from_raw(Category::ReadingList, RawPayload::Single("Dune".into()));
        assert_eq!(item, Some(Payload::ReadingItem("Dune".into())));

        let note = Payload::from_raw(Category::PersonalNote, RawPayload::Single("x".into()));
        assert_eq!(note, None);
    }
}
