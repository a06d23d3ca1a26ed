//! Human-readable material codes.
//!
//! A material code looks like `PEN-001`: a three-letter prefix, a dash, and a
//! sequence number zero-padded to at least three digits. Codes are allocated
//! per prefix, one past the highest sequence already in use.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Number of letters in a code prefix.
const PREFIX_LEN: usize = 3;

/// Minimum width of the zero-padded sequence number.
const SEQUENCE_WIDTH: usize = 3;

/// Filler used when a category has fewer than three ASCII letters.
const PREFIX_FILLER: char = 'X';

/// A material code such as `PAP-001`.
///
/// Construction goes through [`MaterialCode::parse`] or
/// [`MaterialCode::new`], so every value matches `^[A-Z]{3}-\d{3,}$`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct MaterialCode {
    prefix: String,
    sequence: u32,
}

impl MaterialCode {
    /// Builds a code from an already-validated prefix and a sequence number.
    ///
    /// Returns `None` if `prefix` is not three uppercase ASCII letters.
    #[must_use]
    pub fn new(prefix: &str, sequence: u32) -> Option<Self> {
        is_valid_prefix(prefix).then(|| Self {
            prefix: prefix.to_string(),
            sequence,
        })
    }

    /// Parses a code string.
    ///
    /// # Examples
    ///
    /// ```
    /// use stok::domain::MaterialCode;
    ///
    /// let code = MaterialCode::parse("PEN-001").unwrap();
    /// assert_eq!(code.prefix(), "PEN");
    /// assert_eq!(code.sequence(), 1);
    /// assert!(MaterialCode::parse("PEN-01").is_none());
    /// assert!(MaterialCode::parse("pen-001").is_none());
    /// ```
    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        let (prefix, digits) = raw.split_once('-')?;
        if digits.len() < SEQUENCE_WIDTH || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
        Self::new(prefix, digits.parse().ok()?)
    }

    /// Three-letter prefix.
    #[must_use]
    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// Sequence number within the prefix.
    #[must_use]
    pub const fn sequence(&self) -> u32 {
        self.sequence
    }

    /// Allocates the next code for `prefix` given the codes already in use.
    ///
    /// The sequence is one past the highest sequence sharing the prefix, or 1
    /// when none do.
    ///
    /// # Examples
    ///
    /// ```
    /// use stok::domain::MaterialCode;
    ///
    /// let existing = [MaterialCode::parse("PAP-001").unwrap()];
    /// let next = MaterialCode::next_in(existing.iter(), "PAP").unwrap();
    /// assert_eq!(next.to_string(), "PAP-002");
    /// ```
    #[must_use]
    pub fn next_in<'a>(existing: impl IntoIterator<Item = &'a Self>, prefix: &str) -> Option<Self> {
        let highest = existing
            .into_iter()
            .filter(|code| code.prefix == prefix)
            .map(|code| code.sequence)
            .max()
            .unwrap_or(0);

        Self::new(prefix, highest.checked_add(1)?)
    }
}

/// Derives a code prefix from a category name.
///
/// Takes the first three ASCII letters, uppercased, padding with `X` when the
/// category is shorter. `"Alat Tulis"` becomes `ALA`.
#[must_use]
pub fn prefix_from_category(category: &str) -> String {
    let mut prefix: String = category
        .chars()
        .filter(char::is_ascii_alphabetic)
        .take(PREFIX_LEN)
        .map(|c| c.to_ascii_uppercase())
        .collect();

    while prefix.len() < PREFIX_LEN {
        prefix.push(PREFIX_FILLER);
    }
    prefix
}

fn is_valid_prefix(prefix: &str) -> bool {
    prefix.len() == PREFIX_LEN && prefix.bytes().all(|b| b.is_ascii_uppercase())
}

impl fmt::Display for MaterialCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{:0width$}", self.prefix, self.sequence, width = SEQUENCE_WIDTH)
    }
}

impl TryFrom<String> for MaterialCode {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value).ok_or_else(|| format!("invalid material code: {value}"))
    }
}

impl From<MaterialCode> for String {
    fn from(code: MaterialCode) -> Self {
        code.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn code(raw: &str) -> MaterialCode {
        MaterialCode::parse(raw).unwrap()
    }

    #[test]
    fn test_prefix_from_category() {
        assert_eq!(prefix_from_category("Alat Tulis"), "ALA");
        assert_eq!(prefix_from_category("Kertas"), "KER");
        assert_eq!(prefix_from_category("elektronik"), "ELE");
        assert_eq!(prefix_from_category("PC"), "PCX");
        assert_eq!(prefix_from_category("3D Printer"), "DPR");
    }

    #[test]
    fn test_next_in_starts_at_one() {
        let next = MaterialCode::next_in(std::iter::empty(), "ELE").unwrap();
        assert_eq!(next.to_string(), "ELE-001");
    }

    #[test]
    fn test_next_in_ignores_other_prefixes() {
        let existing = [code("PEN-001"), code("PEN-007"), code("PAP-001")];
        assert_eq!(MaterialCode::next_in(&existing, "PEN").unwrap().to_string(), "PEN-008");
        assert_eq!(MaterialCode::next_in(&existing, "PAP").unwrap().to_string(), "PAP-002");
    }

    #[test]
    fn test_sequence_grows_past_three_digits() {
        let existing = [code("PEN-999")];
        let next = MaterialCode::next_in(&existing, "PEN").unwrap();
        assert_eq!(next.to_string(), "PEN-1000");
        assert_eq!(MaterialCode::parse("PEN-1000"), Some(next));
    }

    #[test]
    fn test_parse_rejects_malformed_codes() {
        for raw in ["PEN001", "PE-001", "PENN-001", "PEN-0a1", "PEN-", "Pen-001", ""] {
            assert!(MaterialCode::parse(raw).is_none(), "{raw} should be rejected");
        }
    }

    #[test]
    fn test_serde_uses_display_form() {
        let json = serde_json::to_string(&code("STA-001")).unwrap();
        assert_eq!(json, "\"STA-001\"");
        let back: MaterialCode = serde_json::from_str(&json).unwrap();
        assert_eq!(back, code("STA-001"));
        assert!(serde_json::from_str::<MaterialCode>("\"nope\"").is_err());
    }
}
