//! Conversion between numerals and bounded integers.

pub mod converter;
