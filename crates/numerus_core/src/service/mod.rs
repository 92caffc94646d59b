//! Use-case layer on top of the conversion core.
//!
//! # Responsibility
//! - Provide the calculator entry points used by shells.
//! - Keep presentation out of core; errors stay typed.

pub mod calculator;
