//! Deciding when a solution is finished.

use crate::algebra::{Algebra, Fraction, Number, Particle};
use rug::Integer;
use super::Mode;

/// Returns the value of a whole number, ignoring its sign.
fn magnitude(number: &Number) -> Option<Integer> {
    number.integer().parse::<Integer>().ok()
}

/// Returns the top and bottom of a fraction of positive whole numbers that cannot be reduced
/// any further.
fn reduced_parts(fraction: &Fraction) -> Option<(Integer, Integer)> {
    if fraction.exponent() != 1 {
        return None;
    }

    let (top, bottom) = fraction.whole_parts()?;
    let (top, bottom) = (magnitude(top)?, magnitude(bottom)?);
    let reduced = bottom != 1 && top != 0 && top.clone().gcd(&bottom) == 1;
    reduced.then_some((top, bottom))
}

/// Returns true if the particle is a variable or a number times a variable, with no exponent:
/// `x` or `-2x`.
fn is_monomial(particle: &Particle) -> bool {
    match particle {
        Particle::Variable(variable) => variable.exponent() == 1,
        Particle::Term(term) => term.exponent() == 1 && matches!(
            term.factors(),
            [Particle::Number(coefficient), Particle::Variable(variable)]
                if coefficient.sign() && coefficient.exponent() == 1 && variable.sign() && variable.exponent() == 1
        ),
        _ => false,
    }
}

/// Returns true if the particle is a number with no exponent.
fn is_plain_number(particle: &Particle) -> bool {
    matches!(particle, Particle::Number(number) if number.exponent() == 1)
}

/// Returns true if there is nothing left to simplify in the particle.
///
/// That is the case for numbers, variables, fractions and mixed numbers in lowest terms, a
/// first-degree monomial such as `2x`, and the sum of one such monomial and a number, such as
/// `2x+3`.
pub fn is_simplified(particle: &Particle) -> bool {
    match particle {
        Particle::Number(_) => is_plain_number(particle),
        Particle::Variable(_) => true,
        Particle::Fraction(fraction) => reduced_parts(fraction).is_some(),
        Particle::MixedNumber(mixed) => mixed.exponent() == 1
            && matches!(reduced_parts(mixed.fraction()), Some((top, bottom)) if top < bottom),
        Particle::Term(_) => is_monomial(particle),
        Particle::Expression(expression) => {
            expression.sign() && expression.exponent() == 1 && match expression.terms() {
                [a, b] => (is_monomial(a) && is_plain_number(b)) || (is_plain_number(a) && is_monomial(b)),
                _ => false,
            }
        },
        Particle::Root(_) => false,
    }
}

/// Returns true if a solution whose current value is `algebra` is finished, in the given mode.
pub fn is_terminal(algebra: &Algebra, mode: Mode) -> bool {
    match (mode, algebra) {
        (Mode::Solve, Algebra::Equation(equation)) => {
            equation.left() == equation.right()
                || (is_simplified(equation.left()) && is_simplified(equation.right()))
        },
        (Mode::Simplify, Algebra::Particle(particle)) => is_simplified(particle),
        (Mode::Factor, Algebra::Particle(particle)) => matches!(particle, Particle::Term(_)),
        _ => false,
    }
}
