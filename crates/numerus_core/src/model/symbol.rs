//! Roman symbol table.
//!
//! # Responsibility
//! - Own the single ordered list of `(symbol, value)` pairs.
//! - Derive forward and inverse lookups from that list on demand.
//!
//! # Invariants
//! - Exactly 13 entries, strictly descending by `value`.
//! - Greedy encoding and prefix decoding both rely on the descending order.

/// One Roman symbol (single letter or subtractive pair) and its value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SymbolEntry {
    /// One or two uppercase Roman letters.
    pub symbol: &'static str,
    /// Positive integer value of `symbol`.
    pub value: u16,
}

const fn entry(symbol: &'static str, value: u16) -> SymbolEntry {
    SymbolEntry { symbol, value }
}

static SYMBOL_TABLE: [SymbolEntry; 13] = [
    entry("M", 1000),
    entry("CM", 900),
    entry("D", 500),
    entry("CD", 400),
    entry("C", 100),
    entry("XC", 90),
    entry("L", 50),
    entry("XL", 40),
    entry("X", 10),
    entry("IX", 9),
    entry("V", 5),
    entry("IV", 4),
    entry("I", 1),
];

/// Returns the canonical symbol table ordered by descending value.
pub fn symbol_table() -> &'static [SymbolEntry] {
    &SYMBOL_TABLE
}

/// Looks up the value of one table symbol, e.g. `"CM"` -> `900`.
///
/// Only exact table symbols resolve; `"IIII"` or `"ic"` return `None`.
pub fn value_of(symbol: &str) -> Option<u16> {
    SYMBOL_TABLE
        .iter()
        .find(|entry| entry.symbol == symbol)
        .map(|entry| entry.value)
}

/// Looks up the table symbol for one exact value, e.g. `40` -> `"XL"`.
pub fn symbol_for(value: u16) -> Option<&'static str> {
    SYMBOL_TABLE
        .iter()
        .find(|entry| entry.value == value)
        .map(|entry| entry.symbol)
}
