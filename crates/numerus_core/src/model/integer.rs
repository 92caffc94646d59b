//! Integer and numeral pair.
//!
//! # Responsibility
//! - Keep an in-range integer together with its canonical numeral.
//!
//! # Invariants
//! - `numeral` is always the encoding of `value`.
//! - Both constructors go through `RomanConverter`.

use crate::convert::converter::{ArabicRangeError, RomanConverter};
use crate::model::numeral::RomanNumeral;
use crate::syntax::validator::NumeralSyntaxError;
use std::cmp::Ordering;
use std::fmt::{Display, Formatter};

/// Integer in `[MIN_ARABIC, MAX_ARABIC]` with its numeral form.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RomanInteger {
    value: i32,
    numeral: RomanNumeral,
}

impl RomanInteger {
    /// Builds the pair from an integer.
    ///
    /// # Errors
    /// - Returns [`ArabicRangeError`] when `value` has no numeral.
    pub fn from_value(value: i32) -> Result<Self, ArabicRangeError> {
        let numeral = RomanConverter::new().to_numeral(value)?;
        Ok(Self { value, numeral })
    }

    /// Builds the pair from an already validated numeral.
    pub fn from_numeral(numeral: RomanNumeral) -> Self {
        let value = RomanConverter::new().to_integer(&numeral);
        Self { value, numeral }
    }

    /// Validates raw numeral text and builds the pair.
    pub fn parse(raw: &str) -> Result<Self, NumeralSyntaxError> {
        RomanNumeral::new(raw).map(Self::from_numeral)
    }

    pub fn value(&self) -> i32 {
        self.value
    }

    pub fn numeral(&self) -> &RomanNumeral {
        &self.numeral
    }
}

impl Default for RomanInteger {
    fn default() -> Self {
        Self {
            value: 0,
            numeral: RomanNumeral::nulla(),
        }
    }
}

impl PartialOrd for RomanInteger {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for RomanInteger {
    fn cmp(&self, other: &Self) -> Ordering {
        self.value.cmp(&other.value)
    }
}

impl Display for RomanInteger {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.numeral, self.value)
    }
}

impl From<RomanNumeral> for RomanInteger {
    fn from(value: RomanNumeral) -> Self {
        Self::from_numeral(value)
    }
}
