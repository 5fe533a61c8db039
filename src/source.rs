//! Reading transcript files from disk.
//!
//! A file is checked against [`UploadLimits`] *before* its content is read:
//!
//! 1. the file name must end with `.` + `allowed_extension` (`.txt` by default);
//! 2. the size must be at least `min_file_size` bytes;
//! 3. the size must be at most `max_file_size` bytes (10 MiB by default).
//!
//! Only a file that passes all three checks is read and decoded as UTF-8.
//!
//! # Example
//!
//! ```rust,no_run
//! use chatsift::Category;
//! use chatsift::config::UploadLimits;
//! use chatsift::source::parse_file;
//!
//! let buckets = parse_file("WhatsApp Chat with Alice.txt", &UploadLimits::default())?;
//! println!("{} links", buckets.get(Category::Links).len());
//! # Ok::<(), chatsift::ChatsiftError>(())
//! ```

use std::fs;
use std::path::Path;

use tracing::{debug, warn};

use crate::buckets::CategoryBuckets;
use crate::config::UploadLimits;
use crate::error::{ChatsiftError, Result};
use crate::parser::parse;

/// Checks a file name and size against the limits without touching the disk.
///
/// # Example
///
/// ```rust
/// use chatsift::config::UploadLimits;
/// use chatsift::source::validate_upload;
///
/// let limits = UploadLimits::default();
/// assert!(validate_upload("chat.txt", 42, &limits).is_ok());
/// assert!(validate_upload("chat.json", 42, &limits).is_err());
/// assert!(validate_upload("chat.txt", 0, &limits).is_err());
/// ```
pub fn validate_upload(path: impl AsRef<Path>, size: u64, limits: &UploadLimits) -> Result<()> {
    let path = path.as_ref();

    let suffix = format!(".{}", limits.allowed_extension);
    let has_extension = path
        .file_name()
        .and_then(|name| name.to_str())
        .is_some_and(|name| name.ends_with(&suffix));
    if !has_extension {
        warn!(path = %path.display(), "rejected transcript: wrong extension");
        return Err(ChatsiftError::invalid_extension(
            path,
            limits.allowed_extension.clone(),
        ));
    }

    if size < limits.min_file_size {
        warn!(path = %path.display(), size, "rejected transcript: empty");
        return Err(ChatsiftError::empty_file(path));
    }

    if size > limits.max_file_size {
        warn!(
            path = %path.display(),
            size,
            max_size = limits.max_file_size,
            "rejected transcript: too large"
        );
        return Err(ChatsiftError::file_too_large(
            path,
            size,
            limits.max_file_size,
        ));
    }

    Ok(())
}

/// Validates a transcript file and returns its text.
pub fn read_transcript(path: impl AsRef<Path>, limits: &UploadLimits) -> Result<String> {
    let path = path.as_ref();
    let size = fs::metadata(path)?.len();
    validate_upload(path, size, limits)?;

    let bytes = fs::read(path)?;
    debug!(path = %path.display(), bytes = bytes.len(), "read transcript");
    String::from_utf8(bytes).map_err(|e| ChatsiftError::encoding(path, e))
}

/// Validates, reads and parses a transcript file.
pub fn parse_file(path: impl AsRef<Path>, limits: &UploadLimits) -> Result<CategoryBuckets> {
    let text = read_transcript(path, limits)?;
    Ok(parse(&text))
}
