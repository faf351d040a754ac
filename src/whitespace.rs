//! Edge trimming over the fixed whitespace set.
//!
//! # Whitespace Definition
//!
//! Exactly four characters are trimmable:
//! - ASCII space (U+0020)
//! - ASCII tab (U+0009)
//! - ASCII newline (U+000A)
//! - ASCII carriage return (U+000D)
//!
//! Nothing else counts. Vertical tab, form feed, non-breaking space and the
//! Unicode space separators survive at the edges. Existing callers depend on
//! the narrow set, so it must not be widened to `char::is_whitespace`.
//!
//! # Algorithm
//!
//! 1. Scan forward for the first byte outside the set
//! 2. If there is none, the result is empty
//! 3. Scan backward for the last byte outside the set
//! 4. Slice the inclusive run between them
//!
//! All four members are single-byte ASCII, so the scan works on raw bytes and
//! the resulting bounds always fall on UTF-8 character boundaries.
//!
//! # Examples
//!
//! ```rust
//! use cstrip::strip;
//!
//! assert_eq!(strip("  hello world  "), "hello world");
//! assert_eq!(strip("\t\nfoo\r\n"), "foo");
//! assert_eq!(strip("   \t\n  "), "");
//! ```

use std::ops::RangeInclusive;

/// The trimmable set: space, tab, line feed, carriage return.
pub const WHITESPACE: [u8; 4] = *b" \t\n\r";

/// Returns true when `byte` belongs to [`WHITESPACE`].
#[inline]
pub fn is_strip_whitespace(byte: u8) -> bool {
    matches!(byte, b' ' | b'\t' | b'\n' | b'\r')
}

/// Inclusive `[start, end]` bounds of the non-whitespace run in `bytes`.
///
/// Returns `None` when `bytes` is empty or made only of [`WHITESPACE`].
///
/// ```rust
/// use cstrip::strip_bounds;
///
/// assert_eq!(strip_bounds(b"  ab c \n"), Some(2..=5));
/// assert_eq!(strip_bounds(b" \t "), None);
/// ```
pub fn strip_bounds(bytes: &[u8]) -> Option<RangeInclusive<usize>> {
    let start = bytes.iter().position(|&b| !is_strip_whitespace(b))?;
    let end = bytes.iter().rposition(|&b| !is_strip_whitespace(b))?;
    Some(start..=end)
}

/// Removes leading and trailing [`WHITESPACE`] from `text`.
///
/// The result borrows from `text`; interior whitespace is untouched.
///
/// # Edge Cases
///
/// ```rust
/// use cstrip::strip;
///
/// // Empty string
/// assert_eq!(strip(""), "");
///
/// // Already stripped
/// assert_eq!(strip("novspace"), "novspace");
///
/// // Form feed and vertical tab are not in the set
/// assert_eq!(strip("\x0c page \x0b"), "\x0c page \x0b");
///
/// // Non-breaking space is not in the set either
/// assert_eq!(strip("\u{00A0}x\u{00A0}"), "\u{00A0}x\u{00A0}");
/// ```
///
/// # Performance
///
/// - Time complexity: O(n) where n is text length
/// - No allocation
pub fn strip(text: &str) -> &str {
    match strip_bounds(text.as_bytes()) {
        Some(bounds) => &text[bounds],
        None => "",
    }
}

/// Byte-level [`strip`]. Works on any bytes, UTF-8 or not.
///
/// ```rust
/// use cstrip::strip_bytes;
///
/// assert_eq!(strip_bytes(b"\r\n\xff\xfe \t"), b"\xff\xfe");
/// ```
pub fn strip_bytes(bytes: &[u8]) -> &[u8] {
    match strip_bounds(bytes) {
        Some(bounds) => &bytes[bounds],
        None => &[],
    }
}

/// Like [`strip`], but returns a fresh owned copy.
pub fn strip_owned(text: &str) -> String {
    strip(text).to_owned()
}
