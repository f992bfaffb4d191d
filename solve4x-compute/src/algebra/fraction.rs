use std::sync::Arc;
use super::{signed_particle, Number, Particle};

/// A fraction, such as `(1)/(3)` or `(x+1)/(2)`.
///
/// Fractions produced by parsing keep whatever particles were written on each side. The
/// arithmetic layer only works with fractions whose parts are [`Number`]s; see
/// [`Fraction::numeric_parts`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fraction {
    sign: bool,
    top: Arc<Particle>,
    bottom: Arc<Particle>,
    exponent: u32,
}

signed_particle!(Fraction);

impl Fraction {
    pub fn new(sign: bool, top: impl Into<Particle>, bottom: impl Into<Particle>, exponent: u32) -> Self {
        Self {
            sign,
            top: Arc::new(top.into()),
            bottom: Arc::new(bottom.into()),
            exponent,
        }
    }

    /// Returns the numerator.
    pub fn top(&self) -> &Particle {
        &self.top
    }

    /// Returns the denominator.
    pub fn bottom(&self) -> &Particle {
        &self.bottom
    }

    /// Returns the top and bottom as numbers, if both are numbers with no exponent applied.
    pub fn numeric_parts(&self) -> Option<(&Number, &Number)> {
        match (self.top(), self.bottom()) {
            (Particle::Number(top), Particle::Number(bottom))
                if top.exponent() == 1 && bottom.exponent() == 1 => Some((top, bottom)),
            _ => None,
        }
    }

    /// Returns the top and bottom as numbers, if both are positive whole numbers. Only these
    /// fractions can be added to other constants.
    pub fn whole_parts(&self) -> Option<(&Number, &Number)> {
        self.numeric_parts()
            .filter(|(top, bottom)| {
                top.sign() && bottom.sign() && top.is_whole() && bottom.is_whole()
            })
    }

    pub(crate) fn with_parts(&self, top: Particle, bottom: Particle) -> Self {
        Self { top: Arc::new(top), bottom: Arc::new(bottom), ..self.clone() }
    }
}

/// A mixed number, such as `2(1)/(4)`: a whole numeral and a fraction, under one sign.
///
/// The numeral and the fraction are stored as non-negative values; the sign of the mixed number
/// lives on the mixed number itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MixedNumber {
    sign: bool,
    numeral: Number,
    fraction: Fraction,
    exponent: u32,
}

signed_particle!(MixedNumber);

impl MixedNumber {
    /// Creates a mixed number. The signs of the numeral and fraction are discarded.
    pub fn new(sign: bool, numeral: Number, fraction: Fraction, exponent: u32) -> Self {
        Self {
            sign,
            numeral: numeral.with_sign_and_exponent(true, 1),
            fraction: fraction.with_sign_and_exponent(true, 1),
            exponent,
        }
    }

    /// Returns the whole part.
    pub fn numeral(&self) -> &Number {
        &self.numeral
    }

    /// Returns the fractional part.
    pub fn fraction(&self) -> &Fraction {
        &self.fraction
    }
}
