//! Free-form input interpretation shared by subcommands and the REPL.
//!
//! # Responsibility
//! - Decide whether a line is an integer or a numeral.
//! - Convert it to the other form through `numerus_core`.

use numerus_core::{
    ArabicRangeError, NumeralSyntaxError, RomanConverter, RomanInteger, RomanNumeral,
};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Result of converting one input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Conversion {
    /// Integer input, rendered as its numeral.
    ToNumeral(RomanNumeral),
    /// Numeral input, rendered as its integer.
    ToInteger(i32),
}

impl Display for Conversion {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ToNumeral(numeral) => write!(f, "{numeral}"),
            Self::ToInteger(value) => write!(f, "{value}"),
        }
    }
}

/// Input that is neither an in-range integer nor a valid numeral.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputError {
    Range(ArabicRangeError),
    Syntax(NumeralSyntaxError),
}

impl Display for InputError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Range(err) => write!(f, "{err}"),
            Self::Syntax(err) => write!(f, "{err}"),
        }
    }
}

impl Error for InputError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Range(err) => Some(err),
            Self::Syntax(err) => Some(err),
        }
    }
}

impl From<ArabicRangeError> for InputError {
    fn from(value: ArabicRangeError) -> Self {
        Self::Range(value)
    }
}

impl From<NumeralSyntaxError> for InputError {
    fn from(value: NumeralSyntaxError) -> Self {
        Self::Syntax(value)
    }
}

/// Converts one line to the other representation.
pub fn convert(converter: &RomanConverter, input: &str) -> Result<Conversion, InputError> {
    match parse_arabic(input) {
        Some(value) => {
            let value = ArabicRangeError::check(value)?;
            Ok(Conversion::ToNumeral(converter.to_numeral(value)?))
        }
        None => {
            let numeral = RomanNumeral::new(input)?;
            Ok(Conversion::ToInteger(converter.to_integer(&numeral)))
        }
    }
}

/// Reads one calculator operand, written either as integer or numeral.
pub fn parse_operand(input: &str) -> Result<RomanInteger, InputError> {
    match parse_arabic(input) {
        Some(value) => Ok(RomanInteger::from_value(ArabicRangeError::check(value)?)?),
        None => Ok(RomanInteger::parse(input)?),
    }
}

/// Parses an integer, truncating finite decimals toward zero.
fn parse_arabic(input: &str) -> Option<i64> {
    let trimmed = input.trim();
    if let Ok(value) = trimmed.parse::<i64>() {
        return Some(value);
    }
    match trimmed.parse::<f64>() {
        // `as` saturates, which keeps huge inputs out of range.
        Ok(value) if value.is_finite() => Some(value.trunc() as i64),
        _ => None,
    }
}
