//! Validated entry text.
//!
//! An [`Entry`] is the trimmed text of a submission that passed the length
//! check. Raw strings never reach the entry list without going through
//! [`Entry::new`].

use std::fmt;
use thiserror::Error;

/// Maximum entry length in characters, measured after trimming.
pub const MAX_ENTRY_CHARS: usize = 255;

/// Strip leading and trailing field whitespace.
///
/// Field whitespace is Unicode `White_Space` minus U+0085 (NEL), plus
/// U+FEFF (zero-width no-break space), the set a browser text field trims.
pub fn trim_field(raw: &str) -> &str {
    raw.trim_matches(is_field_whitespace)
}

fn is_field_whitespace(c: char) -> bool {
    (c.is_whitespace() && c != '\u{85}') || c == '\u{FEFF}'
}

/// Reason a submission was not turned into an entry.
///
/// Rejections are silent in the UI. The value exists so callers can log it
/// and tests can assert on it.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EntryRejection {
    /// Text was empty or whitespace-only.
    #[error("entry text is empty after trimming")]
    Empty,

    /// Text was longer than the configured limit.
    #[error("entry text has {len} characters, limit is {max}")]
    TooLong {
        /// Character count of the trimmed text.
        len: usize,
        /// Configured maximum.
        max: usize,
    },
}

/// Accepted, trimmed entry text. Never empty.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Entry(String);

impl Entry {
    /// Smart constructor: trims `raw` and checks `1 <= chars <= max_chars`.
    ///
    /// Trimming follows [`trim_field`], newlines included. Interior
    /// whitespace is kept verbatim.
    pub fn new(raw: &str, max_chars: usize) -> Result<Self, EntryRejection> {
        let text = trim_field(raw);
        if text.is_empty() {
            return Err(EntryRejection::Empty);
        }

        let len = text.chars().count();
        if len > max_chars {
            return Err(EntryRejection::TooLong {
                len,
                max: max_chars,
            });
        }

        Ok(Self(text.to_string()))
    }

    /// Trimmed text.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Length in characters.
    pub fn char_len(&self) -> usize {
        self.0.chars().count()
    }
}

impl fmt::Display for Entry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
