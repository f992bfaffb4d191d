//! Case analysis for adding and multiplying the numeric constant kinds: [`Number`],
//! [`Fraction`] and [`MixedNumber`].

use crate::{
    algebra::{Fraction, MixedNumber, Number, Particle, ONE, ZERO},
    error::{kind::{NotCombinable, NotMultipliable}, Error},
};
use rug::Integer;
use super::{add_numbers, multiply_numbers, RoundingPolicy};

/// Reads a whole number's digits, applying the given sign.
fn signed_integer(number: &Number, sign: bool) -> Integer {
    let magnitude = Integer::from_str_radix(number.integer(), 10).unwrap_or_default();
    if sign {
        magnitude
    } else {
        -magnitude
    }
}

/// Writes an integer as a whole [`Number`].
fn integer_number(value: &Integer) -> Number {
    if *value == 0 {
        ZERO.clone()
    } else {
        Number::whole(*value > 0, value.clone().abs().to_string())
    }
}

/// The whole parts of a fraction or mixed number, signed: `-2(1)/(4)` is `(-2, -1, 4)`.
struct WholeParts<'a> {
    numeral: Integer,
    top: Integer,
    bottom: &'a Number,
}

impl<'a> WholeParts<'a> {
    fn of_fraction(fraction: &'a Fraction) -> Option<Self> {
        let (top, bottom) = fraction.whole_parts()?;
        Some(Self {
            numeral: Integer::new(),
            top: signed_integer(top, fraction.sign()),
            bottom,
        })
    }

    fn of_mixed(mixed: &'a MixedNumber) -> Option<Self> {
        if !mixed.numeral().is_whole() {
            return None;
        }
        let (top, bottom) = mixed.fraction().whole_parts()?;
        Some(Self {
            numeral: signed_integer(mixed.numeral(), mixed.sign()),
            top: signed_integer(top, mixed.sign()),
            bottom,
        })
    }

    /// Returns true if the two have the same bottom.
    fn is_like(&self, other: &WholeParts) -> bool {
        self.bottom == other.bottom
    }

    /// Builds the fraction `top/bottom` with the sign of `top`, collapsing to `0` or `±1` when
    /// the top is zero or equal to the bottom.
    fn fraction(top: &Integer, bottom: &Number) -> Particle {
        if *top == 0 {
            return ZERO.clone().into();
        }

        let magnitude = integer_number(&top.clone().abs());
        if magnitude == *bottom {
            ONE.with_sign_and_exponent(*top > 0, 1).into()
        } else {
            Fraction::new(*top > 0, magnitude, bottom.clone(), 1).into()
        }
    }

    /// Builds the mixed number `numeral top/bottom` under one sign. The signs of `numeral` and
    /// `top` are discarded.
    fn mixed(sign: bool, numeral: &Integer, top: &Integer, bottom: &Number) -> Particle {
        let fraction = Fraction::new(true, integer_number(&top.clone().abs()), bottom.clone(), 1);
        MixedNumber::new(sign, integer_number(&numeral.clone().abs()), fraction, 1).into()
    }
}

/// Adds two constants of which at least one is a fraction or mixed number. Returns [`None`] if
/// the sum cannot be written without changing a denominator, or without the result flipping the
/// sign of a mixed number.
fn add_exact(a: &Particle, b: &Particle) -> Option<Particle> {
    match (a, b) {
        (Particle::Fraction(a), Particle::Fraction(b)) => {
            let (a, b) = (WholeParts::of_fraction(a)?, WholeParts::of_fraction(b)?);
            a.is_like(&b).then(|| WholeParts::fraction(&(a.top + b.top), a.bottom))
        },

        (Particle::Number(number), Particle::Fraction(fraction))
        | (Particle::Fraction(fraction), Particle::Number(number)) => {
            let parts = WholeParts::of_fraction(fraction)?;
            if !number.is_whole() || number.sign() != fraction.sign() {
                return None;
            }
            if number.is_zero() {
                return Some(fraction.clone().into());
            }
            let numeral = signed_integer(number, true);
            Some(WholeParts::mixed(fraction.sign(), &numeral, &parts.top, parts.bottom))
        },

        (Particle::Number(number), Particle::MixedNumber(mixed))
        | (Particle::MixedNumber(mixed), Particle::Number(number)) => {
            let parts = WholeParts::of_mixed(mixed)?;
            if !number.is_whole() {
                return None;
            }
            let numeral = signed_integer(number, number.sign()) + &parts.numeral;
            if numeral == 0 {
                Some(WholeParts::fraction(&parts.top, parts.bottom))
            } else if (numeral > 0) == mixed.sign() {
                Some(WholeParts::mixed(mixed.sign(), &numeral, &parts.top, parts.bottom))
            } else {
                None
            }
        },

        (Particle::Fraction(fraction), Particle::MixedNumber(mixed))
        | (Particle::MixedNumber(mixed), Particle::Fraction(fraction)) => {
            let (f, m) = (WholeParts::of_fraction(fraction)?, WholeParts::of_mixed(mixed)?);
            if !f.is_like(&m) {
                return None;
            }
            let top = f.top + &m.top;
            if top == 0 {
                Some(integer_number(&m.numeral).into())
            } else if (top > 0) == mixed.sign() {
                Some(WholeParts::mixed(mixed.sign(), &m.numeral, &top, m.bottom))
            } else {
                None
            }
        },

        (Particle::MixedNumber(a), Particle::MixedNumber(b)) => {
            let (pa, pb) = (WholeParts::of_mixed(a)?, WholeParts::of_mixed(b)?);
            if !pa.is_like(&pb) {
                return None;
            }
            let numeral = pa.numeral + &pb.numeral;
            let top = pa.top + &pb.top;

            // the numerals decide the sign of the result, so the fractions must agree with it
            let sign_agrees = a.sign() == b.sign() || numeral == 0 || top == 0 || (top > 0) == (numeral > 0);
            if !sign_agrees {
                return None;
            }

            Some(if top == 0 {
                integer_number(&numeral).into()
            } else if numeral == 0 {
                WholeParts::fraction(&top, pa.bottom)
            } else {
                WholeParts::mixed(numeral > 0, &numeral, &top, pa.bottom)
            })
        },

        _ => None,
    }
}

/// Returns true if the two constants can be added into a single constant.
///
/// Any two numbers can be added. Fractions must have positive whole parts and equal bottoms.
/// A number can be added to a fraction only if it is whole and has the fraction's sign, and to
/// a mixed number only if it is whole and the sum keeps the mixed number's sign. Mixed numbers
/// must agree with the sign the sum will take.
pub fn are_combinable(a: &Particle, b: &Particle) -> bool {
    if !a.is_constant() || !b.is_constant() {
        return false;
    }

    match (a, b) {
        (Particle::Number(_), Particle::Number(_)) => true,
        _ => add_exact(a, b).is_some(),
    }
}

/// Adds two constants.
///
/// Fails with [`NotCombinable`] if [`are_combinable`] is false for them.
pub fn add_constants(a: &Particle, b: &Particle, policy: RoundingPolicy) -> Result<Particle, Error> {
    let not_combinable = || Error::unspanned(NotCombinable {
        left: a.to_string(),
        right: b.to_string(),
    });

    if !a.is_constant() || !b.is_constant() {
        return Err(not_combinable());
    }

    match (a, b) {
        (Particle::Number(a), Particle::Number(b)) => Ok(add_numbers(a, b, policy)?.into()),
        _ => add_exact(a, b).ok_or_else(not_combinable),
    }
}

/// Multiplies two fractions made of numbers: the tops multiply, and the bottoms multiply.
/// Returns [`None`] if either fraction has a part that is not a number.
fn multiply_fractions(a: &Fraction, b: &Fraction, policy: RoundingPolicy) -> Result<Option<Particle>, Error> {
    let (Some((a_top, a_bottom)), Some((b_top, b_bottom))) = (a.numeric_parts(), b.numeric_parts()) else {
        return Ok(None);
    };

    let top = multiply_numbers(a_top, b_top, policy)?;
    if top.is_zero() {
        return Ok(Some(ZERO.clone().into()));
    }
    let bottom = multiply_numbers(a_bottom, b_bottom, policy)?;

    let sign = (a.sign() == b.sign()) == (top.sign() == bottom.sign());
    Ok(Some(Fraction::new(
        sign,
        top.with_sign_and_exponent(true, 1),
        bottom.with_sign_and_exponent(true, 1),
        1,
    ).into()))
}

/// Writes a number as a fraction over one.
fn over_one(number: &Number) -> Fraction {
    Fraction::new(number.sign(), number.with_sign_and_exponent(true, 1), ONE.clone(), 1)
}

/// Multiplies two constants that are numbers or fractions.
///
/// A number multiplied by a fraction is first written as a fraction over one. Mixed numbers
/// cannot be multiplied directly and fail with [`NotMultipliable`].
pub fn multiply_constants(a: &Particle, b: &Particle, policy: RoundingPolicy) -> Result<Particle, Error> {
    let not_multipliable = || Error::unspanned(NotMultipliable {
        left: a.to_string(),
        right: b.to_string(),
    });

    if !a.is_constant() || !b.is_constant() {
        return Err(not_multipliable());
    }

    let product = match (a, b) {
        (Particle::Number(a), Particle::Number(b)) => Some(multiply_numbers(a, b, policy)?.into()),
        (Particle::Fraction(a), Particle::Fraction(b)) => multiply_fractions(a, b, policy)?,
        (Particle::Number(number), Particle::Fraction(fraction)) => {
            multiply_fractions(&over_one(number), fraction, policy)?
        },
        (Particle::Fraction(fraction), Particle::Number(number)) => {
            multiply_fractions(fraction, &over_one(number), policy)?
        },
        _ => None,
    };
    product.ok_or_else(not_multipliable)
}
