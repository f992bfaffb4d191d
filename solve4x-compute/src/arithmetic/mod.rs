//! Addition and multiplication of numeric constants.
//!
//! [`Number`]s are converted to exact [`Decimal`]s, combined exactly, and then rounded according
//! to a [`RoundingPolicy`]. Fractions and mixed numbers are combined part by part, by the explicit
//! case analysis in [`are_combinable`], [`add_constants`] and [`multiply_constants`]. Nothing in
//! this module goes through floating point.

mod constant;
mod decimal;
mod rounding;

pub use constant::{add_constants, are_combinable, multiply_constants};
pub use decimal::Decimal;
pub use rounding::RoundingPolicy;

use crate::{
    algebra::Number,
    error::{kind::TooLarge, Error},
};

/// The most digits that aligning or rescaling a number may add to it. Sums of numbers whose
/// scientific exponents differ by more than this fail with [`TooLarge`].
pub const MAX_DIGITS: u32 = 4096;

fn too_large(a: &Number, b: &Number) -> Error {
    Error::unspanned(TooLarge {
        left: a.to_string(),
        right: b.to_string(),
    })
}

/// Adds two numbers.
///
/// When significant-figure rules apply, the sum is rounded to the fewer decimal places of the two
/// operands; otherwise it is exact. A [`RoundingPolicy::Custom`] policy keeps at most that many
/// decimal places.
///
/// The exponents of the numbers are ignored; callers only pass numbers with exponent 1. Fails
/// with [`TooLarge`] if the sum cannot be represented.
pub fn add_numbers(a: &Number, b: &Number, policy: RoundingPolicy) -> Result<Number, Error> {
    let (lhs, rhs) = (Decimal::from(a), Decimal::from(b));
    let sum = lhs.add(&rhs).ok_or_else(|| too_large(a, b))?;
    let sum = match policy {
        RoundingPolicy::Custom(places) => sum.with_scale(sum.scale().min(i64::from(places))),
        _ if policy.applies_to(a, b) => sum.with_scale(lhs.scale().min(rhs.scale())),
        _ => Some(sum),
    };
    sum.and_then(|sum| sum.to_number(a.uses_scientific_notation() || b.uses_scientific_notation()))
        .ok_or_else(|| too_large(a, b))
}

/// Multiplies two numbers.
///
/// When significant-figure rules apply, the product is rounded to the fewer significant digits
/// of the two operands; otherwise it is exact. A [`RoundingPolicy::Custom`] policy keeps at most
/// that many decimal places.
pub fn multiply_numbers(a: &Number, b: &Number, policy: RoundingPolicy) -> Result<Number, Error> {
    let (lhs, rhs) = (Decimal::from(a), Decimal::from(b));
    let product = lhs.mul(&rhs);
    let product = match policy {
        RoundingPolicy::Custom(places) => product.with_scale(product.scale().min(i64::from(places))),
        _ if policy.applies_to(a, b) => product.with_precision(lhs.precision().min(rhs.precision())),
        _ => Some(product),
    };
    product
        .and_then(|product| product.to_number(a.uses_scientific_notation() || b.uses_scientific_notation()))
        .ok_or_else(|| too_large(a, b))
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use super::*;

    fn num(input: &str) -> Number {
        let (integer, decimal) = match input.split_once('.') {
            Some((integer, decimal)) => (integer, Some(decimal.to_string())),
            None => (input, None),
        };
        let (sign, integer) = match integer.strip_prefix('-') {
            Some(integer) => (false, integer),
            None => (true, integer),
        };
        Number::new(sign, integer, decimal, None, 1)
    }

    fn sci(integer: &str, decimal: &str, exponent: i32) -> Number {
        Number::new(true, integer, Some(decimal.to_string()), Some(exponent), 1)
    }

    #[test]
    fn add_whole_numbers_exactly() {
        let policy = RoundingPolicy::ForScientificNotationAndDecimals;
        assert_eq!(add_numbers(&num("2"), &num("-4"), policy).unwrap().to_string(), "-2");
        assert_eq!(add_numbers(&num("3"), &num("2"), policy).unwrap().to_string(), "5");
    }

    #[test]
    fn add_with_significant_figures() {
        let policy = RoundingPolicy::ForScientificNotationAndDecimals;
        assert_eq!(add_numbers(&num("4"), &num("-2.3"), policy).unwrap().to_string(), "2");
        assert_eq!(add_numbers(&num("1.25"), &num("2.5"), policy).unwrap().to_string(), "3.8");
    }

    #[test]
    fn add_without_significant_figures() {
        let policy = RoundingPolicy::ForScientificNotation;
        assert_eq!(add_numbers(&num("4"), &num("-2.3"), policy).unwrap().to_string(), "1.7");
        assert_eq!(add_numbers(&num("1.25"), &num("2.5"), policy).unwrap().to_string(), "3.75");
    }

    #[test]
    fn add_scientific_notation() {
        let policy = RoundingPolicy::ForScientificNotation;
        assert_eq!(add_numbers(&sci("3", "0", 7), &sci("2", "0", 5), policy).unwrap().to_string(), "3.0*10⁷");
        assert_eq!(add_numbers(&sci("3", "0", 7), &num("2"), policy).unwrap().to_string(), "3.0*10⁷");
    }

    #[test]
    fn add_custom_places() {
        assert_eq!(add_numbers(&num("1.255"), &num("1"), RoundingPolicy::Custom(2)).unwrap().to_string(), "2.26");
        // never padded with zeros
        assert_eq!(add_numbers(&num("1.5"), &num("1"), RoundingPolicy::Custom(3)).unwrap().to_string(), "2.5");
    }

    #[test]
    fn add_to_zero() {
        let policy = RoundingPolicy::Always;
        assert!(add_numbers(&num("2.5"), &num("-2.5"), policy).unwrap().is_zero());
    }

    #[test]
    fn multiply_whole_numbers_exactly() {
        let policy = RoundingPolicy::ForScientificNotationAndDecimals;
        assert_eq!(multiply_numbers(&num("25"), &num("4"), policy).unwrap().to_string(), "100");
        assert_eq!(multiply_numbers(&num("-3"), &num("4"), policy).unwrap().to_string(), "-12");
    }

    #[test]
    fn multiply_with_significant_figures() {
        assert_eq!(multiply_numbers(&num("25"), &num("4"), RoundingPolicy::Always).unwrap().to_string(), "1*10²");
        assert_eq!(
            multiply_numbers(&num("2.5"), &num("1.25"), RoundingPolicy::ForScientificNotationAndDecimals).unwrap().to_string(),
            "3.1",
        );
        assert_eq!(
            multiply_numbers(&sci("3", "0", 7), &num("2"), RoundingPolicy::ForScientificNotation).unwrap().to_string(),
            "6*10⁷",
        );
    }

    #[test]
    fn multiply_custom_places() {
        assert_eq!(multiply_numbers(&num("2.5"), &num("1.25"), RoundingPolicy::Custom(2)).unwrap().to_string(), "3.13");
        assert_eq!(multiply_numbers(&num("2.5"), &num("2"), RoundingPolicy::Custom(4)).unwrap().to_string(), "5.0");
    }

    #[test]
    fn sum_beyond_largest_exponent_fails() {
        let policy = RoundingPolicy::ForScientificNotation;
        let largest = Number::new(true, "5", None, Some(i32::MAX), 1);
        let err = add_numbers(&largest, &largest, policy).unwrap_err();
        assert!(err.is::<TooLarge>());
        let err = multiply_numbers(&largest, &num("2"), policy).unwrap_err();
        assert!(err.is::<TooLarge>());
    }

    #[test]
    fn distant_exponents_fail_quickly() {
        let huge = Number::new(true, "1", None, Some(2_000_000_000), 1);
        for policy in [RoundingPolicy::ForScientificNotation, RoundingPolicy::Always] {
            let err = add_numbers(&huge, &num("1"), policy).unwrap_err();
            assert!(err.is::<TooLarge>());
        }
    }
}
