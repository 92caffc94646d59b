//! Validated Roman numeral value.
//!
//! # Responsibility
//! - Hold canonical numeral text that passed syntax validation.
//! - Re-validate on every construction path, deserialization included.
//!
//! # Invariants
//! - `text` is uppercase, whitespace-free and at most 19 characters.
//! - Values are immutable; "changing" a numeral means building a new one.

use crate::syntax::validator::{split_sign, validate, NumeralSyntaxError, NULLA};
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};
use std::str::FromStr;

/// Canonical, syntax-checked Roman numeral.
///
/// Serialized as the bare canonical string. Deserialization goes through
/// [`RomanNumeral::new`], so stored text is never trusted.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct RomanNumeral {
    text: String,
}

impl RomanNumeral {
    /// Validates `raw` and wraps its canonical form.
    ///
    /// # Errors
    /// - Returns the first syntax rule `raw` violates.
    pub fn new(raw: &str) -> Result<Self, NumeralSyntaxError> {
        validate(raw).map(|text| Self { text })
    }

    /// Returns the zero numeral `NULLA`.
    pub fn nulla() -> Self {
        Self {
            text: NULLA.to_string(),
        }
    }

    /// Canonical text, e.g. `"-XLII"` or `"NULLA"`.
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Returns whether this numeral is the zero sentinel.
    pub fn is_nulla(&self) -> bool {
        self.text == NULLA
    }

    /// Returns whether this numeral carries a leading sign marker.
    ///
    /// Always `false` for `NULLA`; negative zero is canonicalized away.
    pub fn is_negative(&self) -> bool {
        split_sign(&self.text).0
    }

    /// Character count of the canonical text.
    pub fn len(&self) -> usize {
        self.text.len()
    }

    /// Always `false`; kept for API symmetry with `len`.
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}

impl Default for RomanNumeral {
    fn default() -> Self {
        Self::nulla()
    }
}

impl Display for RomanNumeral {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.text)
    }
}

impl AsRef<str> for RomanNumeral {
    fn as_ref(&self) -> &str {
        &self.text
    }
}

impl FromStr for RomanNumeral {
    type Err = NumeralSyntaxError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<String> for RomanNumeral {
    type Error = NumeralSyntaxError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(&value)
    }
}

impl TryFrom<&str> for RomanNumeral {
    type Error = NumeralSyntaxError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<RomanNumeral> for String {
    fn from(value: RomanNumeral) -> Self {
        value.text
    }
}
