use numerus_core::service::calculator::{
    difference, int_division, power, product, remainder, sum,
};
use numerus_core::{CalculatorError, RomanInteger};

fn pair(one: i32, two: i32) -> (RomanInteger, RomanInteger) {
    (
        RomanInteger::from_value(one).unwrap(),
        RomanInteger::from_value(two).unwrap(),
    )
}

#[test]
fn sum_within_range() {
    let (one, two) = pair(3, 4);
    let result = sum(&one, &two).unwrap();
    assert_eq!(result.value(), 7);
    assert_eq!(result.numeral().as_str(), "VII");
}

#[test]
fn sum_out_of_range_in_both_directions() {
    let (one, two) = pair(3999, 30);
    assert_eq!(sum(&one, &two).unwrap_err(), CalculatorError::SumOutOfRange);

    let (one, two) = pair(-3999, -30);
    assert_eq!(sum(&one, &two).unwrap_err(), CalculatorError::SumOutOfRange);
}

#[test]
fn difference_may_go_negative_but_not_out_of_range() {
    let (one, two) = pair(10, 30);
    assert_eq!(difference(&one, &two).unwrap().numeral().as_str(), "-XX");

    let (one, two) = pair(-3999, 100);
    assert_eq!(
        difference(&one, &two).unwrap_err(),
        CalculatorError::DifferenceOutOfRange
    );

    let (one, two) = pair(3999, -100);
    assert_eq!(
        difference(&one, &two).unwrap_err(),
        CalculatorError::DifferenceOutOfRange
    );
}

#[test]
fn product_checks_range() {
    let (one, two) = pair(10, 3);
    assert_eq!(product(&one, &two).unwrap().value(), 30);

    let (one, two) = pair(10, 1000);
    assert_eq!(
        product(&one, &two).unwrap_err(),
        CalculatorError::ProductOutOfRange
    );

    let (one, two) = pair(-10, 3000);
    assert_eq!(
        product(&one, &two).unwrap_err(),
        CalculatorError::ProductOutOfRange
    );
}

#[test]
fn int_division_truncates_toward_zero() {
    let (one, two) = pair(11, 2);
    assert_eq!(int_division(&one, &two).unwrap().value(), 5);

    let (one, two) = pair(1, 100);
    assert!(int_division(&one, &two).unwrap().numeral().is_nulla());

    let (one, two) = pair(10, -2);
    assert_eq!(int_division(&one, &two).unwrap().value(), -5);

    let (one, two) = pair(-7, 2);
    assert_eq!(int_division(&one, &two).unwrap().value(), -3);
}

#[test]
fn remainder_keeps_dividend_sign() {
    let (one, two) = pair(5, 2);
    assert_eq!(remainder(&one, &two).unwrap().value(), 1);

    let (one, two) = pair(5, -2);
    assert_eq!(remainder(&one, &two).unwrap().value(), 1);

    let (one, two) = pair(-5, 2);
    assert_eq!(remainder(&one, &two).unwrap().value(), -1);
}

#[test]
fn division_by_nulla_is_rejected() {
    let (one, zero) = pair(10, 0);
    assert_eq!(
        int_division(&one, &zero).unwrap_err(),
        CalculatorError::DivisionByZero
    );
    assert_eq!(
        remainder(&one, &zero).unwrap_err(),
        CalculatorError::DivisionByZero
    );
}

#[test]
fn power_checks_range() {
    let (one, two) = pair(2, 11);
    assert_eq!(power(&one, &two).unwrap().numeral().as_str(), "MMXLVIII");

    let (one, two) = pair(2, 12);
    assert_eq!(
        power(&one, &two).unwrap_err(),
        CalculatorError::PowerOutOfRange
    );

    let (one, two) = pair(-3, 3);
    assert_eq!(power(&one, &two).unwrap().value(), -27);
}
