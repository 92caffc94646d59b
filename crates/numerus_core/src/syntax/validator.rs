//! Roman numeral syntax validation.
//!
//! # Responsibility
//! - Normalize raw input (strip whitespace, uppercase).
//! - Decide whether the normalized text is a well-formed numeral.
//! - Classify rejected text by the first rule it violates.
//!
//! # Invariants
//! - Checks run in a fixed order: empty, length, grammar, then the failure
//!   classifiers `NonRomanChars`, `FourConsecutive`, `RepeatedFiveLike`,
//!   `GenericSyntaxError`. The first match wins.
//! - `-NULLA` canonicalizes to `NULLA`.
//! - Validation is pure and never logs.

use once_cell::sync::Lazy;
use regex::Regex;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Zero sentinel token. Classical numerals have no symbol for zero.
pub const NULLA: &str = "NULLA";
/// Leading marker of negative numerals.
pub const SIGN_MARKER: char = '-';
/// Longest accepted normalized numeral, sign included.
pub const MAX_NUMERAL_CHARS: usize = 19;

static ROMAN_SYNTAX_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(?:NULLA|M{0,3}(?:CM|CD|D?C{0,3})(?:XC|XL|L?X{0,3})(?:IX|IV|V?I{0,3}))$")
        .expect("valid roman syntax regex")
});
static NON_ROMAN_CHARS_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[^MDCLXVI]+").expect("valid non roman chars regex"));
static FOUR_CONSECUTIVE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"MMMM|CCCC|XXXX|IIII").expect("valid four consecutive regex"));
static REPEATED_FIVE_LIKE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"D.*D|L.*L|V.*V").expect("valid repeated five-like regex"));

/// Reason why a candidate string is not a Roman numeral.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum NumeralSyntaxError {
    /// Nothing left after whitespace removal.
    EmptyNumeral,
    /// Normalized text has 20 or more characters.
    ImpossiblyLong,
    /// Characters outside `MDCLXVI`, except a leading sign, concatenated.
    NonRomanChars(String),
    /// Runs of four identical ten-family symbols, concatenated.
    FourConsecutive(String),
    /// Span between two equal five-family symbols, concatenated.
    RepeatedFiveLike(String),
    /// Structurally invalid ordering not covered by other variants.
    GenericSyntaxError,
}

impl Display for NumeralSyntaxError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyNumeral => write!(f, "empty roman numeral"),
            Self::ImpossiblyLong => write!(
                f,
                "impossibly long roman numeral (more than {MAX_NUMERAL_CHARS} characters)"
            ),
            Self::NonRomanChars(chars) => write!(f, "non roman characters: {chars}"),
            Self::FourConsecutive(run) => {
                write!(f, "four consecutive ten-like characters: {run}")
            }
            Self::RepeatedFiveLike(chars) => {
                write!(f, "two same D, L or V characters: {chars}")
            }
            Self::GenericSyntaxError => write!(f, "generic roman numeral syntax error"),
        }
    }
}

impl Error for NumeralSyntaxError {}

/// Validates raw input and returns its canonical numeral text.
///
/// Whitespace anywhere in `raw` is dropped and letters are uppercased
/// before any rule is checked. A negative zero is returned unsigned.
///
/// # Errors
/// - Returns the first violated rule as a [`NumeralSyntaxError`].
pub fn validate(raw: &str) -> Result<String, NumeralSyntaxError> {
    let normalized = normalize(raw);
    check_syntax(&normalized)?;

    let (_, body) = split_sign(&normalized);
    if body == NULLA {
        return Ok(NULLA.to_string());
    }
    Ok(normalized)
}

/// Returns whether `raw` would pass [`validate`].
pub fn is_well_formed(raw: &str) -> bool {
    validate(raw).is_ok()
}

/// Splits an optional leading sign marker from numeral text.
///
/// Returns `(is_negative, body)`.
pub(crate) fn split_sign(text: &str) -> (bool, &str) {
    match text.strip_prefix(SIGN_MARKER) {
        Some(body) => (true, body),
        None => (false, text),
    }
}

fn normalize(raw: &str) -> String {
    raw.chars()
        .filter(|c| !c.is_whitespace())
        .flat_map(char::to_uppercase)
        .collect()
}

fn check_syntax(symbols: &str) -> Result<(), NumeralSyntaxError> {
    if symbols.is_empty() {
        return Err(NumeralSyntaxError::EmptyNumeral);
    }
    if symbols.chars().count() > MAX_NUMERAL_CHARS {
        return Err(NumeralSyntaxError::ImpossiblyLong);
    }

    let (_, body) = split_sign(symbols);
    // A bare sign passes the all-optional grammar, so require a body.
    if !body.is_empty() && ROMAN_SYNTAX_RE.is_match(body) {
        return Ok(());
    }
    Err(classify_failure(body))
}

fn classify_failure(body: &str) -> NumeralSyntaxError {
    let illegal = concat_matches(&NON_ROMAN_CHARS_RE, body);
    if !illegal.is_empty() {
        return NumeralSyntaxError::NonRomanChars(illegal);
    }
    let illegal = concat_matches(&FOUR_CONSECUTIVE_RE, body);
    if !illegal.is_empty() {
        return NumeralSyntaxError::FourConsecutive(illegal);
    }
    let illegal = concat_matches(&REPEATED_FIVE_LIKE_RE, body);
    if !illegal.is_empty() {
        return NumeralSyntaxError::RepeatedFiveLike(illegal);
    }
    NumeralSyntaxError::GenericSyntaxError
}

fn concat_matches(re: &Regex, text: &str) -> String {
    re.find_iter(text).map(|found| found.as_str()).collect()
}
