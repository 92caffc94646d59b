//! Four-function arithmetic over Roman integers.
//!
//! # Responsibility
//! - Combine two `RomanInteger` values and re-encode the result.
//! - Name the operation that left the representable range.
//!
//! # Invariants
//! - Every result is built through `RomanInteger::from_value`.
//! - Machine overflow is reported as the operation's range error.
//! - Division and remainder truncate toward zero.

use crate::model::integer::RomanInteger;
use log::debug;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

/// Arithmetic failure of one calculator operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CalculatorError {
    SumOutOfRange,
    DifferenceOutOfRange,
    ProductOutOfRange,
    PowerOutOfRange,
    DivisionByZero,
}

impl Display for CalculatorError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::SumOutOfRange => write!(f, "sum is out of the roman numeral range"),
            Self::DifferenceOutOfRange => {
                write!(f, "difference is out of the roman numeral range")
            }
            Self::ProductOutOfRange => write!(f, "product is out of the roman numeral range"),
            Self::PowerOutOfRange => write!(f, "power is out of the roman numeral range"),
            Self::DivisionByZero => write!(f, "division by NULLA"),
        }
    }
}

impl Error for CalculatorError {}

pub type CalculatorResult = Result<RomanInteger, CalculatorError>;

/// Binary operator accepted by [`apply`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operator {
    Sum,
    Difference,
    Product,
    IntDivision,
    Remainder,
    Power,
}

impl Operator {
    /// Operator symbol as written in expressions.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Sum => "+",
            Self::Difference => "-",
            Self::Product => "*",
            Self::IntDivision => "/",
            Self::Remainder => "%",
            Self::Power => "^",
        }
    }
}

/// Unknown operator symbol.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownOperator(pub String);

impl Display for UnknownOperator {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "unknown operator `{}`; expected one of + - * / % ^", self.0)
    }
}

impl Error for UnknownOperator {}

impl FromStr for Operator {
    type Err = UnknownOperator;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "+" => Ok(Self::Sum),
            "-" => Ok(Self::Difference),
            "*" | "x" => Ok(Self::Product),
            "/" => Ok(Self::IntDivision),
            "%" => Ok(Self::Remainder),
            "^" => Ok(Self::Power),
            other => Err(UnknownOperator(other.to_string())),
        }
    }
}

/// Dispatches `op` on two operands.
pub fn apply(op: Operator, one: &RomanInteger, two: &RomanInteger) -> CalculatorResult {
    match op {
        Operator::Sum => sum(one, two),
        Operator::Difference => difference(one, two),
        Operator::Product => product(one, two),
        Operator::IntDivision => int_division(one, two),
        Operator::Remainder => remainder(one, two),
        Operator::Power => power(one, two),
    }
}

pub fn sum(one: &RomanInteger, two: &RomanInteger) -> CalculatorResult {
    finish(
        Operator::Sum,
        one.value().checked_add(two.value()),
        CalculatorError::SumOutOfRange,
    )
}

pub fn difference(one: &RomanInteger, two: &RomanInteger) -> CalculatorResult {
    finish(
        Operator::Difference,
        one.value().checked_sub(two.value()),
        CalculatorError::DifferenceOutOfRange,
    )
}

pub fn product(one: &RomanInteger, two: &RomanInteger) -> CalculatorResult {
    finish(
        Operator::Product,
        one.value().checked_mul(two.value()),
        CalculatorError::ProductOutOfRange,
    )
}

/// Integer quotient, truncated toward zero.
pub fn int_division(one: &RomanInteger, two: &RomanInteger) -> CalculatorResult {
    if two.value() == 0 {
        return Err(reject(Operator::IntDivision, CalculatorError::DivisionByZero));
    }
    finish(
        Operator::IntDivision,
        one.value().checked_div(two.value()),
        CalculatorError::DivisionByZero,
    )
}

/// Remainder with the sign of the dividend.
pub fn remainder(one: &RomanInteger, two: &RomanInteger) -> CalculatorResult {
    if two.value() == 0 {
        return Err(reject(Operator::Remainder, CalculatorError::DivisionByZero));
    }
    finish(
        Operator::Remainder,
        one.value().checked_rem(two.value()),
        CalculatorError::DivisionByZero,
    )
}

/// `one` raised to `two`.
///
/// Negative exponents truncate toward zero: only bases `1` and `-1` keep a
/// non-zero result, and `NULLA` to a negative power is a division by zero.
pub fn power(one: &RomanInteger, two: &RomanInteger) -> CalculatorResult {
    let base = one.value();
    let exponent = two.value();

    if exponent < 0 {
        let truncated = match base {
            0 => return Err(reject(Operator::Power, CalculatorError::DivisionByZero)),
            1 => 1,
            -1 if exponent % 2 == 0 => 1,
            -1 => -1,
            _ => 0,
        };
        return finish(
            Operator::Power,
            Some(truncated),
            CalculatorError::PowerOutOfRange,
        );
    }

    // Exponent is non-negative here.
    let raised = base.checked_pow(exponent.unsigned_abs());
    finish(Operator::Power, raised, CalculatorError::PowerOutOfRange)
}

fn finish(op: Operator, raw: Option<i32>, out_of_range: CalculatorError) -> CalculatorResult {
    raw.and_then(|value| RomanInteger::from_value(value).ok())
        .ok_or_else(|| reject(op, out_of_range))
}

fn reject(op: Operator, err: CalculatorError) -> CalculatorError {
    debug!(
        "event=calc_rejected module=calculator status=error op={} reason={:?}",
        op.as_str(),
        err
    );
    err
}

#[cfg(test)]
mod tests {
    use super::{apply, power, CalculatorError, Operator, UnknownOperator};
    use crate::model::integer::RomanInteger;

    fn int(value: i32) -> RomanInteger {
        RomanInteger::from_value(value).expect("test value should be in range")
    }

    #[test]
    fn parses_operator_symbols() {
        assert_eq!("+".parse::<Operator>().unwrap(), Operator::Sum);
        assert_eq!(" ^ ".parse::<Operator>().unwrap(), Operator::Power);
        assert_eq!("x".parse::<Operator>().unwrap(), Operator::Product);
        assert_eq!(
            "**".parse::<Operator>().unwrap_err(),
            UnknownOperator("**".to_string())
        );
    }

    #[test]
    fn apply_dispatches_every_operator() {
        let cases = [
            (Operator::Sum, 13),
            (Operator::Difference, 7),
            (Operator::Product, 30),
            (Operator::IntDivision, 3),
            (Operator::Remainder, 1),
            (Operator::Power, 1000),
        ];
        for (op, expected) in cases {
            assert_eq!(apply(op, &int(10), &int(3)).unwrap().value(), expected);
        }
    }

    #[test]
    fn negative_exponents_truncate() {
        assert_eq!(power(&int(1), &int(-3)).unwrap().value(), 1);
        assert_eq!(power(&int(-1), &int(-3)).unwrap().value(), -1);
        assert_eq!(power(&int(-1), &int(-2)).unwrap().value(), 1);
        assert!(power(&int(7), &int(-2)).unwrap().numeral().is_nulla());
        assert_eq!(
            power(&int(0), &int(-1)).unwrap_err(),
            CalculatorError::DivisionByZero
        );
    }

    #[test]
    fn power_overflow_is_out_of_range() {
        assert_eq!(
            power(&int(3999), &int(3999)).unwrap_err(),
            CalculatorError::PowerOutOfRange
        );
        assert_eq!(power(&int(0), &int(0)).unwrap().value(), 1);
    }
}
