//! Locale detection for WhatsApp timestamps.
//!
//! Exports use one date layout per file, but `05/01/24` alone cannot tell
//! US month-first from EU day-first. [`DateLayout::detect`] scores
//! every timestamp of a transcript and picks a single layout, which is then
//! used to interpret all of its messages.
//!
//! # Example
//!
//! ```rust
//! use chatsift::timestamp::DateLayout;
//!
//! let layout = DateLayout::detect(["13/01/24, 10:30", "05/01/24, 10:30"]);
//! assert_eq!(layout, Some(DateLayout::EuSlash));
//!
//! let dt = DateLayout::EuSlash.parse("05/01/24, 10:30").unwrap();
//! assert_eq!(dt.to_string(), "2024-01-05 10:30:00");
//! ```

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Detected date layout variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DateLayout {
    /// US format: M/D/YY or M/D/YYYY, 12- or 24-hour clock
    /// Example: [1/15/24, 10:30:45 AM]
    Us,
    /// EU format with dots: DD.MM.YY or DD.MM.YYYY
    /// Example: [15.01.24, 10:30:45]
    EuDot,
    /// EU format with slashes: DD/MM/YY or DD/MM/YYYY
    /// Example: [15/01/2024, 10:30:45]
    EuSlash,
}

impl DateLayout {
    /// All layouts, in tie-break order.
    pub const ALL: [DateLayout; 3] = [DateLayout::Us, DateLayout::EuDot, DateLayout::EuSlash];

    /// chrono patterns accepted for this layout.
    fn patterns(self) -> &'static [&'static str] {
        match self {
            DateLayout::Us => &[
                "%m/%d/%y, %I:%M:%S %p",
                "%m/%d/%y, %I:%M %p",
                "%m/%d/%Y, %I:%M:%S %p",
                "%m/%d/%Y, %I:%M %p",
                "%m/%d/%y, %H:%M:%S",
                "%m/%d/%y, %H:%M",
                "%m/%d/%Y, %H:%M:%S",
                "%m/%d/%Y, %H:%M",
            ],
            DateLayout::EuDot => &[
                "%d.%m.%y, %H:%M:%S",
                "%d.%m.%y, %H:%M",
                "%d.%m.%Y, %H:%M:%S",
                "%d.%m.%Y, %H:%M",
            ],
            DateLayout::EuSlash => &[
                "%d/%m/%y, %H:%M:%S",
                "%d/%m/%y, %H:%M",
                "%d/%m/%Y, %H:%M:%S",
                "%d/%m/%Y, %H:%M",
            ],
        }
    }

    /// Interprets a timestamp in this layout.
    pub fn parse(self, timestamp: &str) -> Option<NaiveDateTime> {
        let text = timestamp.trim();
        self.patterns()
            .iter()
            .find_map(|pattern| NaiveDateTime::parse_from_str(text, pattern).ok())
    }

    /// Picks the layout that interprets the most timestamps.
    ///
    /// Ties go to the earlier entry of [`DateLayout::ALL`]. Returns `None`
    /// when no timestamp matches any layout.
    pub fn detect<'a>(timestamps: impl IntoIterator<Item = &'a str>) -> Option<DateLayout> {
        let mut scores = [0usize; 3];

        for timestamp in timestamps {
            for (i, layout) in Self::ALL.iter().enumerate() {
                if layout.parse(timestamp).is_some() {
                    scores[i] += 1;
                }
            }
        }

        let max_score = *scores.iter().max()?;
        if max_score == 0 {
            return None;
        }

        let winner_idx = scores.iter().position(|&s| s == max_score)?;
        Some(Self::ALL[winner_idx])
    }
}
