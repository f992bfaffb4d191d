//! Multiplying the factors of a term.
//!
//! `2xx` becomes `2x²`, and `2*(2)/(3)` becomes `(4)/(3)`.

use crate::{
    algebra::{Algebra, Level, Particle, Term, ZERO},
    arithmetic::{multiply_constants, RoundingPolicy},
    error::{kind::{NotApplicable, NotMultipliable, TooLarge}, Error},
};
use super::{fold_class, partition, Algorithm, Explanation, Step};

/// Returns true if the particle is a constant that can be multiplied directly. Mixed numbers
/// must be written as fractions first.
fn is_multipliable_constant(particle: &Particle) -> bool {
    particle.is_constant() && !matches!(particle, Particle::MixedNumber(_))
}

/// Returns true if the two factors can be multiplied into a single factor: both are constants
/// other than mixed numbers, or they are the same variant and equal apart from sign and
/// exponent.
pub fn are_multipliable(a: &Particle, b: &Particle) -> bool {
    (a.level() == b.level() && a.almost_equals(b))
        || (is_multipliable_constant(a) && is_multipliable_constant(b))
}

/// Multiplies two factors.
///
/// Constants multiply through the arithmetic layer. Otherwise the exponents add, and the product
/// is negative if exactly one factor is: `x·(-x²) = -x³`. Fails with [`TooLarge`] if the
/// exponents add past `u32::MAX`.
pub fn multiply(a: &Particle, b: &Particle, policy: RoundingPolicy) -> Result<Particle, Error> {
    if is_multipliable_constant(a) && is_multipliable_constant(b) {
        return multiply_constants(a, b, policy);
    }

    if a.level() == b.level() && a.almost_equals(b) {
        let exponent = a.exponent().checked_add(b.exponent()).ok_or_else(|| {
            Error::unspanned(TooLarge {
                left: a.to_string(),
                right: b.to_string(),
            })
        })?;
        return Ok(a.with_sign_and_exponent(a.sign() == b.sign(), exponent));
    }

    Err(Error::unspanned(NotMultipliable {
        left: a.to_string(),
        right: b.to_string(),
    }))
}

/// Partitions the factors of a term into groups that multiply into a single factor.
pub fn list_multipliable_factors(term: &Term) -> Vec<Vec<Particle>> {
    partition(term.factors(), are_multipliable)
}

/// The number of factors in the term that would disappear by multiplying.
fn excess(term: &Term) -> usize {
    term.factors().len() - list_multipliable_factors(term).len()
}

/// Multiplies the factors of a term.
///
/// Given an equation or expression instead, it multiplies the factors of the reachable term
/// that has the most to multiply.
#[derive(Debug, Default, Clone, Copy)]
pub struct Multiply;

impl Multiply {
    fn execute_term(&self, term: &Term, policy: RoundingPolicy) -> Result<Step, Error> {
        let groups = list_multipliable_factors(term);
        if groups.len() == term.factors().len() {
            return Err(Error::unspanned(NotApplicable {
                algorithm: self.name(),
                algebra: term.to_string(),
            }));
        }

        let mut explanation = Explanation::new()
            .text("In the term ")
            .algebra(Particle::Term(term.clone()))
            .text(" we need to multiply.\n");

        let mut results = Vec::with_capacity(groups.len());
        for group in groups {
            let product = fold_class(&group, |a, b| multiply(a, b, policy))?;
            if group.len() > 1 {
                explanation = explanation
                    .text("Multiply ")
                    .list(group)
                    .text(" to get ")
                    .algebra(product.clone())
                    .text(".\n");
            }
            results.push(product);
        }

        let result = if results.iter().any(Particle::is_zero) {
            explanation = explanation.text("One of the factors is 0, so the term is 0.\n");
            ZERO.clone().into()
        } else if results.len() == 1 {
            results.remove(0).fold_into(term.sign(), term.exponent())
        } else {
            Particle::Term(term.with_factors(results))
        };

        Ok(Step {
            algorithm: self.name(),
            result: result.into(),
            explanation,
        })
    }
}

impl Algorithm for Multiply {
    fn name(&self) -> &'static str {
        "multiply"
    }

    fn level(&self) -> Level {
        Level::Term
    }

    fn smarts(&self, algebra: &Algebra) -> u8 {
        let excesses = match algebra.as_particle() {
            Some(Particle::Term(term)) => vec![excess(term)],
            _ => algebra
                .resources(Level::Term)
                .iter()
                .filter_map(|(_, resource)| resource.as_particle()?.as_term().map(excess))
                .collect(),
        };

        let total: usize = excesses.iter().sum();
        if excesses.iter().any(|&excess| excess >= 2) || total >= 3 {
            9
        } else if total == 0 {
            0
        } else {
            7
        }
    }

    fn execute(&self, algebra: &Algebra, policy: RoundingPolicy) -> Result<Step, Error> {
        if let Some(Particle::Term(term)) = algebra.as_particle() {
            return self.execute_term(term, policy);
        }

        let mut best: Option<(Vec<usize>, Term, usize)> = None;
        for (path, resource) in algebra.resources(Level::Term) {
            let Some(Particle::Term(term)) = resource.as_particle() else {
                continue;
            };
            let excess = excess(term);
            if excess > best.as_ref().map_or(0, |(_, _, most)| *most) {
                best = Some((path, term.clone(), excess));
            }
        }

        let Some((path, term, _)) = best else {
            return Err(Error::unspanned(NotApplicable {
                algorithm: self.name(),
                algebra: algebra.to_string(),
            }));
        };

        let step = self.execute_term(&term, policy)?;
        Ok(Step {
            result: algebra.replace_at(&path, step.result)?,
            ..step
        })
    }
}

#[cfg(test)]
mod tests {
    use crate::algebra::parse;
    use pretty_assertions::assert_eq;
    use super::*;

    const POLICY: RoundingPolicy = RoundingPolicy::ForScientificNotationAndDecimals;

    fn execute(input: &str) -> Step {
        Multiply.execute(&parse(input).unwrap(), POLICY).unwrap()
    }

    fn smarts(input: &str) -> u8 {
        Multiply.smarts(&parse(input).unwrap())
    }

    #[test]
    fn multiply_like_variables() {
        assert_eq!(execute("2xx").result.to_string(), "2x²");
        assert_eq!(execute("xx²").result.to_string(), "x³");
        assert_eq!(execute("(-x)(-x)").result.to_string(), "x²");
        assert_eq!(execute("x(-x²)").result.to_string(), "-x³");
    }

    #[test]
    fn multiply_constants_in_term() {
        assert_eq!(execute("2*(2)/(3)").result.to_string(), "(4)/(3)");
        assert_eq!(execute("2*3x").result.to_string(), "6x");
        assert_eq!(execute("2*3*4").result.to_string(), "24");
    }

    #[test]
    fn multiply_groups() {
        assert_eq!(execute("(x+1)(x+1)").result.to_string(), "(x+1)²");
        assert_eq!(execute("2xyx3").result.to_string(), "6x²y");
    }

    #[test]
    fn term_keeps_sign_and_exponent() {
        assert_eq!(execute("-2xx").result.to_string(), "-2x²");
        assert_eq!(execute("-(xx)").result.to_string(), "-x²");
        assert_eq!(execute("(xx)²").result.to_string(), "(x²)²");
    }

    #[test]
    fn explanation() {
        let step = execute("2xx");
        assert_eq!(
            step.explanation.to_string(),
            "In the term 2xx we need to multiply.\nMultiply x, x to get x².\n",
        );
    }

    #[test]
    fn multiply_inside_equation() {
        let step = execute("2xx=4");
        assert_eq!(step.result.to_string(), "2x²=4");

        // the term with the most to multiply goes first
        let step = execute("2xx+3*4*yy=1");
        assert_eq!(step.result.to_string(), "2xx+12y²=1");
    }

    #[test]
    fn mixed_numbers_are_left_alone() {
        assert!(!are_multipliable(&parse_particle("2(1)/(4)"), &parse_particle("2")));
        assert_eq!(smarts("2(1)/(4)*2"), 0);
    }

    #[test]
    fn smarts_counts_excess_factors() {
        assert_eq!(smarts("2x"), 0);
        assert_eq!(smarts("2xx"), 7);
        assert_eq!(smarts("2*3*4x"), 9);
        assert_eq!(smarts("2xx+3y=4"), 7);
        assert_eq!(smarts("2xx+3yy+zz"), 9);
        assert_eq!(smarts("2x+3y"), 0);
    }

    #[test]
    fn zero_factor_collapses_term() {
        assert_eq!(execute("0xx").result.to_string(), "0");
        assert_eq!(execute("2*0*x").result.to_string(), "0");
        assert_eq!(execute("0xx+y=1").result.to_string(), "0+y=1");
        assert_eq!(
            execute("0xx").explanation.to_string(),
            "In the term 0xx we need to multiply.\nMultiply x, x to get x².\nOne of the factors is 0, so the term is 0.\n",
        );
    }

    #[test]
    fn exponent_overflow_fails() {
        let x = parse_particle("x");
        let err = multiply(&x.with_exponent(u32::MAX), &x, POLICY).unwrap_err();
        assert!(err.is::<TooLarge>());

        let err = Multiply.execute(&parse("x⁴²⁹⁴⁹⁶⁷²⁹⁵x").unwrap(), POLICY).unwrap_err();
        assert!(err.is::<TooLarge>());
        assert_eq!(smarts("x⁴²⁹⁴⁹⁶⁷²⁹⁵x"), 7);
    }

    #[test]
    fn unlike_factors_fail() {
        let err = multiply(&parse_particle("x"), &parse_particle("y"), POLICY).unwrap_err();
        assert!(err.is::<NotMultipliable>());
    }

    #[test]
    fn nothing_to_multiply_fails() {
        let err = Multiply.execute(&parse("x+y").unwrap(), POLICY).unwrap_err();
        assert!(err.is::<NotApplicable>());
        let err = Multiply.execute(&parse("2x").unwrap(), POLICY).unwrap_err();
        assert!(err.is::<NotApplicable>());
    }

    fn parse_particle(input: &str) -> Particle {
        match parse(input).unwrap() {
            Algebra::Particle(particle) => particle,
            Algebra::Equation(_) => panic!("expected a particle"),
        }
    }
}
