//! Group identity types.

extern crate alloc;

use alloc::string::String;
use core::fmt;

use serde::{Deserialize, Serialize};

/// A short label identifying a competing group, unique within the roster.
///
/// Labels are trimmed on construction; comparison and hashing use the
/// trimmed text as-is (case sensitive).
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GroupLabel(String);

impl GroupLabel {
    /// Creates a label from the given text, trimming surrounding whitespace.
    #[must_use]
    pub fn new(value: impl AsRef<str>) -> Self {
        Self(String::from(value.as_ref().trim()))
    }

    /// Returns the label text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns whether the label is empty after trimming.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns the `index`-th label of the auto-naming sequence
    /// A, B, ..., Z, AA, AB, ...
    ///
    /// Useful for presenters that add groups without asking for a name.
    #[must_use]
    pub fn nth(index: usize) -> Self {
        let mut letters = [0u8; 16];
        let mut cursor = letters.len();
        let mut n = index;

        loop {
            cursor -= 1;
            letters[cursor] = b'A' + (n % 26) as u8;
            if n < 26 {
                break;
            }
            n = n / 26 - 1;
        }

        // The buffer only ever holds ASCII uppercase letters.
        Self(String::from(
            core::str::from_utf8(&letters[cursor..]).unwrap_or_default(),
        ))
    }
}

impl fmt::Display for GroupLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for GroupLabel {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for GroupLabel {
    fn from(value: String) -> Self {
        Self::new(&value)
    }
}
