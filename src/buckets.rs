//! The result of a parse: one ordered bucket per category.

use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::category::Category;
use crate::message::ClassifiedMessage;
use crate::timestamp::DateLayout;

/// Classified messages grouped by category.
///
/// All four categories are always present, possibly empty. Within a bucket,
/// messages keep the order of their source lines.
///
/// Serializes as a map keyed by [`Category::label`], in [`Category::ALL`]
/// order:
///
/// ```rust
/// let buckets = chatsift::parse("");
/// let json = serde_json::to_string(&buckets)?;
/// assert_eq!(
///     json,
///     r#"{"Links/URLs":[],"Quotes/Insights":[],"Reading Lists":[],"Personal Notes":[]}"#
/// );
/// # Ok::<(), serde_json::Error>(())
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CategoryBuckets {
    buckets: [Vec<ClassifiedMessage>; 4],
    date_layout: Option<DateLayout>,
}

impl CategoryBuckets {
    /// Creates four empty buckets.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a message to the bucket of its own category.
    pub fn push(&mut self, message: ClassifiedMessage) {
        self.buckets[message.category().index()].push(message);
    }

    /// Returns the messages in one bucket.
    pub fn get(&self, category: Category) -> &[ClassifiedMessage] {
        &self.buckets[category.index()]
    }

    /// Iterates over `(category, messages)` in [`Category::ALL`] order.
    pub fn iter(&self) -> impl Iterator<Item = (Category, &[ClassifiedMessage])> {
        Category::ALL
            .into_iter()
            .map(move |category| (category, self.get(category)))
    }

    /// Iterates over every message, bucket by bucket.
    pub fn messages(&self) -> impl Iterator<Item = &ClassifiedMessage> {
        self.buckets.iter().flatten()
    }

    /// Number of messages per category, in [`Category::ALL`] order.
    pub fn counts(&self) -> [(Category, usize); 4] {
        Category::ALL.map(|category| (category, self.get(category).len()))
    }

    /// Total number of messages across all buckets.
    pub fn len(&self) -> usize {
        self.buckets.iter().map(Vec::len).sum()
    }

    /// Returns `true` if every bucket is empty.
    pub fn is_empty(&self) -> bool {
        self.buckets.iter().all(Vec::is_empty)
    }

    /// Keeps only the messages for which `keep` returns `true`.
    ///
    /// Order within each bucket is preserved.
    pub fn retain(&mut self, mut keep: impl FnMut(&ClassifiedMessage) -> bool) {
        for bucket in &mut self.buckets {
            bucket.retain(&mut keep);
        }
    }

    /// Date layout shared by the timestamps of these messages, if any.
    ///
    /// Fixed when the buckets are built and kept by [`retain`](Self::retain),
    /// so filtering never changes how the remaining timestamps are read.
    pub fn date_layout(&self) -> Option<DateLayout> {
        self.date_layout
    }

    /// Detects the date layout from the timestamps currently held.
    pub fn detect_date_layout(&mut self) {
        self.date_layout = DateLayout::detect(self.messages().map(ClassifiedMessage::timestamp));
    }
}

impl Extend<ClassifiedMessage> for CategoryBuckets {
    fn extend<I: IntoIterator<Item = ClassifiedMessage>>(&mut self, iter: I) {
        for message in iter {
            self.push(message);
        }
    }
}

impl FromIterator<ClassifiedMessage> for CategoryBuckets {
    fn from_iter<I: IntoIterator<Item = ClassifiedMessage>>(iter: I) -> Self {
        let mut buckets = Self::new();
        buckets.extend(iter);
        buckets.detect_date_layout();
        buckets
    }
}

impl Serialize for CategoryBuckets {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(Category::ALL.len()))?;
        for (category, messages) in self.iter() {
            map.serialize_entry(category.label(), messages)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for CategoryBuckets {
    /// Accepts a map keyed by category label. Missing keys become empty
    /// buckets; each message is routed by its own `category` field.
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = std::collections::BTreeMap::<Category, Vec<ClassifiedMessage>>::deserialize(
            deserializer,
        )?;
        Ok(raw.into_values().flatten().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classify;
    use crate::message::Message;

    fn classified(content: &str) -> ClassifiedMessage {
        classify(Message::new("t", "Alice", content))
    }

    #[test]
    fn test_new_has_four_empty_buckets() {
        let buckets = CategoryBuckets::new();
        assert!(buckets.is_empty());
        assert_eq!(buckets.len(), 0);
        assert_eq!(buckets.iter().count(), 4);
        for (_, messages) in buckets.iter() {
            assert!(messages.is_empty());
        }
    }

    #[test]
    fn test_push_routes_by_category() {
        let mut buckets = CategoryBuckets::new();
        buckets.push(classified("https://a.io"));
        buckets.push(classified("plain"));
        buckets.push(classified(r#""q""#));

        assert_eq!(buckets.get(Category::Links).len(), 1);
        assert_eq!(buckets.get(Category::Quotes).len(), 1);
        assert_eq!(buckets.get(Category::ReadingList).len(), 0);
        assert_eq!(buckets.get(Category::PersonalNote).len(), 1);
        assert_eq!(buckets.len(), 3);
    }

    #[test]
    fn test_order_preserved_within_bucket() {
        let buckets: CategoryBuckets = ["first", "https://x.io", "second", "third"]
            .into_iter()
            .map(classified)
            .collect();
        let notes: Vec<&str> = buckets
            .get(Category::PersonalNote)
            .iter()
            .map(|m| m.content())
            .collect();
        assert_eq!(notes, vec!["first", "second", "third"]);
    }

    #[test]
    fn test_counts_in_display_order() {
        let buckets: CategoryBuckets = ["a", "b", "Book: x"].into_iter().map(classified).collect();
        assert_eq!(
            buckets.counts(),
            [
                (Category::Links, 0),
                (Category::Quotes, 0),
                (Category::ReadingList, 1),
                (Category::PersonalNote, 2),
            ]
        );
    }

    #[test]
    fn test_retain() {
        let mut buckets: CategoryBuckets =
            ["keep", "drop", "https://keep.io"].into_iter().map(classified).collect();
        buckets.retain(|m| m.content().contains("keep"));
        assert_eq!(buckets.len(), 2);
        assert_eq!(buckets.get(Category::Links).len(), 1);
    }

    #[test]
    fn test_date_layout_detected_and_kept_by_retain() {
        let mut buckets: CategoryBuckets = [
            Message::new("13/01/24, 10:30", "A", "first"),
            Message::new("05/01/24, 10:30", "B", "second"),
        ]
        .into_iter()
        .map(classify)
        .collect();
        assert_eq!(buckets.date_layout(), Some(DateLayout::EuSlash));

        buckets.retain(|m| m.sender() == "B");
        assert_eq!(buckets.date_layout(), Some(DateLayout::EuSlash));
    }

    #[test]
    fn test_serialize_keys_in_order() {
        let buckets: CategoryBuckets = ["note"].into_iter().map(classified).collect();
        let json = serde_json::to_string(&buckets).unwrap();
        let links = json.find("Links/URLs").unwrap();
        let quotes = json.find("Quotes/Insights").unwrap();
        let reading = json.find("Reading Lists").unwrap();
        let notes = json.find("Personal Notes").unwrap();
        assert!(links < quotes && quotes < reading && reading < notes);
    }

    #[test]
    fn test_serde_roundtrip() {
        let buckets: CategoryBuckets = [
            "https://a.io and https://b.io",
            r#"said "this""#,
            "paper: Attention",
            "hello",
        ]
        .into_iter()
        .map(classified)
        .collect();
        let json = serde_json::to_string(&buckets).unwrap();
        let parsed: CategoryBuckets = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, buckets);
    }

    #[test]
    fn test_deserialize_missing_keys_are_empty() {
        let parsed: CategoryBuckets = serde_json::from_str(r#"{"Reading Lists":[]}"#).unwrap();
        assert!(parsed.is_empty());
        assert_eq!(parsed.iter().count(), 4);
    }
}
