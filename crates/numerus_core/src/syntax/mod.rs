//! Numeral grammar and diagnostics.
//!
//! # Responsibility
//! - Define the strict subtractive-notation grammar.
//! - Report typed, deterministic reasons for rejected input.

pub mod validator;
