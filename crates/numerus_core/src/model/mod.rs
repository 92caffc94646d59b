//! Value types of the numeral domain.
//!
//! # Responsibility
//! - Define the symbol table shared by validation and conversion.
//! - Define value objects that are valid by construction.
//!
//! # Invariants
//! - A `RomanNumeral` can only be obtained through syntax validation.
//! - A `RomanInteger` always pairs a value with its own numeral.

pub mod integer;
pub mod numeral;
pub mod symbol;
