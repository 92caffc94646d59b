//! Core Roman numeral logic for Numerus.
//! This crate is the single source of truth for numeral syntax and conversion.

pub mod convert;
pub mod logging;
pub mod model;
pub mod service;
pub mod syntax;

pub use convert::converter::{ArabicRangeError, RomanConverter, MAX_ARABIC, MIN_ARABIC};
pub use logging::{default_log_level, init_logging, logging_status, LoggingError};
pub use model::integer::RomanInteger;
pub use model::numeral::RomanNumeral;
pub use model::symbol::{symbol_for, symbol_table, value_of, SymbolEntry};
pub use service::calculator::{CalculatorError, CalculatorResult, Operator, UnknownOperator};
pub use syntax::validator::{
    is_well_formed, validate, NumeralSyntaxError, MAX_NUMERAL_CHARS, NULLA,
};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
