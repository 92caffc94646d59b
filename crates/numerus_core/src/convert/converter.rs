//! Numeral <-> integer conversion.
//!
//! # Responsibility
//! - Decode canonical numeral text into a signed integer.
//! - Encode integers in `[MIN_ARABIC, MAX_ARABIC]` as canonical numerals.
//!
//! # Invariants
//! - Conversion is stateless; the converter only borrows the symbol table.
//! - Out-of-range integers are rejected, never clamped.
//! - Encoder output is re-validated before it is returned.
//! - A decode prefix miss or a rejected encoder output is a defect and panics.

use crate::model::numeral::RomanNumeral;
use crate::model::symbol::{symbol_table, SymbolEntry};
use crate::syntax::validator::{split_sign, NULLA, SIGN_MARKER};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Largest integer with a Roman representation.
pub const MAX_ARABIC: i32 = 3999;
/// Smallest integer with a Roman representation.
pub const MIN_ARABIC: i32 = -MAX_ARABIC;

/// Integer outside `[MIN_ARABIC, MAX_ARABIC]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ArabicRangeError {
    /// The rejected value. Wide enough to report unparsed `i64` inputs.
    pub value: i64,
}

impl ArabicRangeError {
    /// Returns an error for `value` when it falls outside the range.
    pub fn check(value: i64) -> Result<i32, Self> {
        if (i64::from(MIN_ARABIC)..=i64::from(MAX_ARABIC)).contains(&value) {
            // In range, so the narrowing cannot truncate.
            Ok(value as i32)
        } else {
            Err(Self { value })
        }
    }

    /// Returns whether the rejected value is above `MAX_ARABIC`.
    pub fn is_too_large(&self) -> bool {
        self.value > i64::from(MAX_ARABIC)
    }

    /// Returns whether the rejected value is below `MIN_ARABIC`.
    pub fn is_too_small(&self) -> bool {
        self.value < i64::from(MIN_ARABIC)
    }
}

impl Display for ArabicRangeError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "arabic value {} is out of range: expected an integer in [{MIN_ARABIC}, {MAX_ARABIC}]",
            self.value
        )
    }
}

impl Error for ArabicRangeError {}

/// Bidirectional converter built on the static symbol table.
#[derive(Debug, Clone, Copy)]
pub struct RomanConverter {
    table: &'static [SymbolEntry],
}

impl RomanConverter {
    /// Creates a converter over the canonical symbol table.
    pub fn new() -> Self {
        Self {
            table: symbol_table(),
        }
    }

    /// Returns the integer value of a validated numeral.
    ///
    /// # Panics
    /// - Panics if some position of the numeral matches no table symbol,
    ///   which means the grammar and the table disagree.
    pub fn to_integer(&self, numeral: &RomanNumeral) -> i32 {
        let (negative, body) = split_sign(numeral.as_str());
        if body == NULLA {
            return 0;
        }

        let mut accumulator = 0_i32;
        let mut cursor = 0_usize;
        while cursor < body.len() {
            let rest = &body[cursor..];
            let entry = self
                .table
                .iter()
                .find(|entry| rest.starts_with(entry.symbol))
                .unwrap_or_else(|| {
                    panic!(
                        "numeral `{numeral}` has no symbol at offset {cursor}; \
                         validator grammar and symbol table disagree"
                    )
                });
            accumulator += i32::from(entry.value);
            cursor += entry.symbol.len();
        }

        if negative {
            -accumulator
        } else {
            accumulator
        }
    }

    /// Encodes `value` as its canonical numeral.
    ///
    /// `0` maps to `NULLA`; negative values get a leading `-`.
    ///
    /// # Errors
    /// - Returns [`ArabicRangeError`] when `value` is outside the range.
    ///
    /// # Panics
    /// - Panics if the encoded text fails syntax validation.
    pub fn to_numeral(&self, value: i32) -> Result<RomanNumeral, ArabicRangeError> {
        let value = ArabicRangeError::check(i64::from(value))?;
        if value == 0 {
            return Ok(RomanNumeral::nulla());
        }

        let encoded = self.encode(value);
        match RomanNumeral::new(&encoded) {
            Ok(numeral) => Ok(numeral),
            Err(err) => panic!("converter produced invalid numeral `{encoded}` for {value}: {err}"),
        }
    }

    fn encode(&self, value: i32) -> String {
        let mut encoded = String::new();
        if value < 0 {
            encoded.push(SIGN_MARKER);
        }

        let mut magnitude = value.unsigned_abs();
        for entry in self.table {
            let entry_value = u32::from(entry.value);
            while magnitude >= entry_value {
                encoded.push_str(entry.symbol);
                magnitude -= entry_value;
            }
        }
        encoded
    }
}

impl Default for RomanConverter {
    fn default() -> Self {
        Self::new()
    }
}
