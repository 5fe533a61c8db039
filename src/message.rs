//! Transcript message types.
//!
//! This module provides the two records that flow through the pipeline:
//!
//! - [`Message`] - one tokenized line: `timestamp`, `sender`, `content`
//! - [`ClassifiedMessage`] - a [`Message`] plus its [`Category`] and the
//!   payload extracted for that category
//!
//! # Examples
//!
//! ```
//! use chatsift::Message;
//!
//! let msg = Message::new("1/1/24, 9:00 AM", "Alice", "Hello, world!");
//! assert_eq!(msg.sender(), "Alice");
//! assert_eq!(msg.content(), "Hello, world!");
//! ```
//!
//! A [`ClassifiedMessage`] can only be produced by the classifier, which keeps
//! the category and payload consistent:
//!
//! ```
//! use chatsift::{Category, Message, classify};
//!
//! let classified = classify(Message::new("1/1/24, 9:00 AM", "Bob", "read https://example.com"));
//! assert_eq!(classified.category(), Category::Links);
//! assert_eq!(classified.display_text(), "https://example.com");
//! ```

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::category::{Category, Payload, RawPayload};
use crate::timestamp::DateLayout;

/// One tokenized transcript line.
///
/// All fields are verbatim slices of the source line. The timestamp is kept
/// as text because export formats vary by locale; use [`Message::datetime`]
/// with the layout detected for the whole transcript to interpret it.
///
/// # Serialization
///
/// ```
/// use chatsift::Message;
///
/// let msg = Message::new("1/1/24, 9:00 AM", "Alice", "Hello!");
/// let json = serde_json::to_string(&msg)?;
/// let parsed: Message = serde_json::from_str(&json)?;
/// assert_eq!(msg, parsed);
/// # Ok::<(), serde_json::Error>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    /// Text between the leading `[` and `]` of the line.
    pub timestamp: String,

    /// Text between `] ` and the next `: `.
    pub sender: String,

    /// Everything after the sender separator.
    pub content: String,
}

impl Message {
    /// Creates a message from its three parts.
    pub fn new(
        timestamp: impl Into<String>,
        sender: impl Into<String>,
        content: impl Into<String>,
    ) -> Self {
        Self {
            timestamp: timestamp.into(),
            sender: sender.into(),
            content: content.into(),
        }
    }

    /// Returns the raw timestamp text.
    pub fn timestamp(&self) -> &str {
        &self.timestamp
    }

    /// Returns the sender name.
    pub fn sender(&self) -> &str {
        &self.sender
    }

    /// Returns the message content.
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Interprets the timestamp in the given layout.
    ///
    /// Returns `None` when the text does not fit the layout. This never
    /// influences tokenization or classification.
    ///
    /// # Example
    ///
    /// ```
    /// use chatsift::Message;
    /// use chatsift::timestamp::DateLayout;
    ///
    /// let msg = Message::new("1/15/24, 10:30:45 PM", "Alice", "hi");
    /// let dt = msg.datetime(DateLayout::Us).unwrap();
    /// assert_eq!(dt.format("%Y-%m-%d %H:%M:%S").to_string(), "2024-01-15 22:30:45");
    ///
    /// assert!(Message::new("yesterday", "Alice", "hi").datetime(DateLayout::Us).is_none());
    /// ```
    pub fn datetime(&self, layout: DateLayout) -> Option<NaiveDateTime> {
        layout.parse(&self.timestamp)
    }
}

/// A [`Message`] with its category and extracted payload.
///
/// `data` is `None` exactly when the category is
/// [`PersonalNote`](Category::PersonalNote); otherwise the payload variant
/// always matches the category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawClassified")]
pub struct ClassifiedMessage {
    #[serde(flatten)]
    message: Message,

    category: Category,

    #[serde(skip_serializing_if = "Option::is_none")]
    data: Option<Payload>,
}

/// Deserialization shape; the payload is rebuilt from the category.
#[derive(Deserialize)]
struct RawClassified {
    #[serde(flatten)]
    message: Message,
    category: Category,
    #[serde(default)]
    data: Option<RawPayload>,
}

impl TryFrom<RawClassified> for ClassifiedMessage {
    type Error = String;

    fn try_from(raw: RawClassified) -> Result<Self, Self::Error> {
        let data = match (raw.category, raw.data) {
            (Category::PersonalNote, None) => None,
            (Category::PersonalNote, Some(_)) => {
                return Err("personal notes carry no data".to_string());
            }
            (category, Some(payload)) => Payload::from_raw(category, payload),
            (category, None) => return Err(format!("missing data for {category}")),
        };
        Ok(Self {
            message: raw.message,
            category: raw.category,
            data,
        })
    }
}

impl ClassifiedMessage {
    pub(crate) fn new(message: Message, category: Category, data: Option<Payload>) -> Self {
        debug_assert_eq!(data.as_ref().map(Payload::category), match category {
            Category::PersonalNote => None,
            other => Some(other),
        });
        Self {
            message,
            category,
            data,
        }
    }

    /// Returns the assigned category.
    pub fn category(&self) -> Category {
        self.category
    }

    /// Returns the extracted payload, if the category carries one.
    pub fn data(&self) -> Option<&Payload> {
        self.data.as_ref()
    }

    /// Returns the payload as a list of strings.
    ///
    /// Empty for personal notes; a reading-list item becomes a one-element list.
    pub fn values(&self) -> Vec<&str> {
        self.data.as_ref().map(Payload::values).unwrap_or_default()
    }

    /// Returns the tokenized line.
    pub fn message(&self) -> &Message {
        &self.message
    }

    /// Returns the raw timestamp text.
    pub fn timestamp(&self) -> &str {
        self.message.timestamp()
    }

    /// Returns the sender name.
    pub fn sender(&self) -> &str {
        self.message.sender()
    }

    /// Returns the message content.
    pub fn content(&self) -> &str {
        self.message.content()
    }

    /// Returns the text a viewer would show for this entry: the first URL,
    /// the first quote, the reading-list item, or the content of a note.
    pub fn display_text(&self) -> &str {
        match &self.data {
            Some(payload) => payload.values().first().copied().unwrap_or(""),
            None => self.message.content(),
        }
    }
}
