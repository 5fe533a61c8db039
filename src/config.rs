//! Configuration types for reading transcripts and rendering results.
//!
//! These are plain builder-style structs without any CLI framework
//! dependencies; the binary maps its flags onto them.
//!
//! - [`UploadLimits`] - which files are accepted before parsing
//! - [`OutputConfig`] - which fields and buckets are rendered
//!
//! # Example
//!
//! ```rust
//! use chatsift::config::{OutputConfig, UploadLimits};
//! use chatsift::Category;
//!
//! let limits = UploadLimits::new().with_max_file_size(2 * 1024 * 1024);
//!
//! let output = OutputConfig::new()
//!     .with_iso_timestamps(true)
//!     .with_categories([Category::Links, Category::ReadingList]);
//! ```

use serde::{Deserialize, Serialize};

use crate::category::Category;

/// Default maximum transcript size: 10 MiB.
pub const DEFAULT_MAX_FILE_SIZE: u64 = 10 * 1024 * 1024;

/// Rules a transcript file must satisfy before it is parsed.
///
/// Defaults match the upload form of the web viewer: a `.txt` file of
/// at least one byte and at most 10 MiB.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UploadLimits {
    /// Required extension without the dot (default: `txt`). Case-sensitive.
    pub allowed_extension: String,

    /// Minimum size in bytes (default: 1)
    pub min_file_size: u64,

    /// Maximum size in bytes, inclusive (default: 10 MiB)
    pub max_file_size: u64,
}

impl Default for UploadLimits {
    fn default() -> Self {
        Self {
            allowed_extension: "txt".to_string(),
            min_file_size: 1,
            max_file_size: DEFAULT_MAX_FILE_SIZE,
        }
    }
}

impl UploadLimits {
    /// Creates limits with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the maximum accepted size in bytes.
    #[must_use]
    pub fn with_max_file_size(mut self, bytes: u64) -> Self {
        self.max_file_size = bytes;
        self
    }

    /// Sets the required extension (a leading dot is ignored).
    #[must_use]
    pub fn with_allowed_extension(mut self, extension: impl Into<String>) -> Self {
        let extension = extension.into();
        self.allowed_extension = extension.trim_start_matches('.').to_string();
        self
    }
}

/// Controls what the presentation layer renders.
///
/// By default every bucket is rendered with timestamp and sender, and
/// timestamps are printed verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Include the timestamp of each message (default: true)
    pub include_timestamps: bool,

    /// Include the sender of each message (default: true)
    pub include_sender: bool,

    /// Rewrite recognizable timestamps as `YYYY-MM-DDTHH:MM:SS` (default: false)
    pub iso_timestamps: bool,

    /// Buckets to render; `None` renders all four (default: `None`)
    pub categories: Option<Vec<Category>>,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            include_timestamps: true,
            include_sender: true,
            iso_timestamps: false,
            categories: None,
        }
    }
}

impl OutputConfig {
    /// Creates a configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Enables or disables timestamps in the output.
    #[must_use]
    pub fn with_timestamps(mut self, enabled: bool) -> Self {
        self.include_timestamps = enabled;
        self
    }

    /// Enables or disables sender names in the output.
    #[must_use]
    pub fn with_sender(mut self, enabled: bool) -> Self {
        self.include_sender = enabled;
        self
    }

    /// Enables or disables ISO 8601 timestamp normalization.
    #[must_use]
    pub fn with_iso_timestamps(mut self, enabled: bool) -> Self {
        self.iso_timestamps = enabled;
        self
    }

    /// Restricts rendering to the given buckets. An empty list renders all.
    #[must_use]
    pub fn with_categories(mut self, categories: impl IntoIterator<Item = Category>) -> Self {
        let mut selected: Vec<Category> = categories.into_iter().collect();
        selected.sort_unstable();
        selected.dedup();
        self.categories = (!selected.is_empty()).then_some(selected);
        self
    }

    /// Returns `true` if the bucket should be rendered.
    pub fn includes(&self, category: Category) -> bool {
        self.categories
            .as_ref()
            .is_none_or(|selected| selected.contains(&category))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_upload_limits_defaults() {
        let limits = UploadLimits::default();
        assert_eq!(limits.allowed_extension, "txt");
        assert_eq!(limits.min_file_size, 1);
        assert_eq!(limits.max_file_size, 10 * 1024 * 1024);
    }

    #[test]
    fn test_upload_limits_builder() {
        let limits = UploadLimits::new()
            .with_max_file_size(1024)
            .with_allowed_extension(".log");
        assert_eq!(limits.max_file_size, 1024);
        assert_eq!(limits.allowed_extension, "log");
    }

    #[test]
    fn test_output_config_defaults() {
        let config = OutputConfig::new();
        assert!(config.include_timestamps);
        assert!(config.include_sender);
        assert!(!config.iso_timestamps);
        for category in Category::ALL {
            assert!(config.includes(category));
        }
    }

    #[test]
    fn test_output_config_categories() {
        let config = OutputConfig::new().with_categories([
            Category::ReadingList,
            Category::Links,
            Category::Links,
        ]);
        assert_eq!(
            config.categories,
            Some(vec![Category::Links, Category::ReadingList])
        );
        assert!(config.includes(Category::Links));
        assert!(!config.includes(Category::PersonalNote));

        let all = OutputConfig::new().with_categories(Vec::new());
        assert!(all.categories.is_none());
    }

    #[test]
    fn test_config_serialization() {
        let config = OutputConfig::new().with_sender(false);
        let json = serde_json::to_string(&config).unwrap();
        let parsed: OutputConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, config);
    }
}
