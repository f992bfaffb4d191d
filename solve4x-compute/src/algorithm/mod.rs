//! Rewrite algorithms.
//!
//! An algorithm looks at one kind of sub-tree (its [`Level`]), scores how much it could
//! simplify a particular sub-tree with [`Algorithm::smarts`], and performs the rewrite with
//! [`Algorithm::execute`]. Algorithms are stateless; the rounding policy is passed in on every
//! call.
//!
//! Scores run from 0 to 9. By convention, 0 means the algorithm does not apply, 7 means there is
//! a single opportunity, and 9 means there are several. The solver only executes algorithms that
//! score above its threshold, so `execute` may assume that `smarts` was positive; if it was not,
//! `execute` fails with an internal error instead of producing a wrong result.

pub mod combine_like_terms;
mod explanation;
pub mod multiply;

pub use combine_like_terms::CombineLikeTerms;
pub use explanation::{Explanation, Fragment};
pub use multiply::Multiply;

use crate::{
    algebra::{Algebra, Expression, Level, Particle, ZERO},
    arithmetic::RoundingPolicy,
    error::Error,
};
use std::fmt::Debug;

/// A single application of an algorithm.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Step {
    /// The name of the algorithm that produced this step.
    pub algorithm: &'static str,

    /// The value after the step.
    ///
    /// When returned by [`Algorithm::execute`], this is the rewritten resource. Once the solver
    /// records the step in a solution, it is the whole value after the rewrite.
    pub result: Algebra,

    /// Why the step was taken.
    pub explanation: Explanation,
}

/// A stateless rewrite of one level of the algebraic value tree.
pub trait Algorithm: Debug + Send + Sync {
    /// The name of the algorithm, as shown to the user.
    fn name(&self) -> &'static str;

    /// The level of sub-tree that this algorithm rewrites.
    fn level(&self) -> Level;

    /// Estimates how much this algorithm would simplify the given value, from 0 to 9, without
    /// performing the rewrite.
    fn smarts(&self, algebra: &Algebra) -> u8;

    /// Rewrites the given value.
    fn execute(&self, algebra: &Algebra, policy: RoundingPolicy) -> Result<Step, Error>;
}

/// Partitions the items into classes, keeping their order. Each item joins the first class whose
/// first member it is related to, or starts a new class.
pub(crate) fn partition(items: &[Particle], related: impl Fn(&Particle, &Particle) -> bool) -> Vec<Vec<Particle>> {
    let mut classes: Vec<Vec<Particle>> = Vec::new();
    for item in items {
        match classes.iter_mut().find(|class| related(&class[0], item)) {
            Some(class) => class.push(item.clone()),
            None => classes.push(vec![item.clone()]),
        }
    }
    classes
}

/// Returns the particles, each combined with the next by `combine`, from left to right.
pub(crate) fn fold_class<F>(class: &[Particle], mut combine: F) -> Result<Particle, Error>
where
    F: FnMut(&Particle, &Particle) -> Result<Particle, Error>,
{
    let Some((first, rest)) = class.split_first() else {
        return Ok(ZERO.clone().into());
    };
    rest.iter().try_fold(first.clone(), |acc, next| combine(&acc, next))
}

/// Builds a sum from the given terms, with the sign and exponent of the expression they came
/// from.
///
/// No terms is zero, carrying the exponent if there is one. A single term absorbs the sign and
/// exponent (see [`Particle::fold_into`]).
pub(crate) fn construct_expression(sign: bool, exponent: u32, mut terms: Vec<Particle>) -> Particle {
    match terms.len() {
        0 if exponent == 1 => ZERO.clone().into(),
        0 => ZERO.with_sign_and_exponent(sign, exponent).into(),
        1 => terms.remove(0).fold_into(sign, exponent),
        _ => Expression::new(sign, terms, exponent).into(),
    }
}

/// Returns the algorithms that the solver tries, in order.
pub fn roster() -> Vec<Box<dyn Algorithm>> {
    vec![Box::new(CombineLikeTerms), Box::new(Multiply)]
}

#[cfg(test)]
mod tests {
    use crate::algebra::parse;
    use pretty_assertions::assert_eq;
    use super::*;

    fn terms(input: &str) -> Vec<Particle> {
        match parse(input).unwrap() {
            Algebra::Particle(Particle::Expression(expression)) => expression.terms().to_vec(),
            other => panic!("expected an expression, found {}", other),
        }
    }

    #[test]
    fn partition_is_greedy_and_ordered() {
        let classes = partition(&terms("x+y+x+z+y"), |a, b| a == b);
        let rendered = classes
            .iter()
            .map(|class| class.iter().map(ToString::to_string).collect::<Vec<_>>())
            .collect::<Vec<_>>();
        assert_eq!(rendered, vec![vec!["x", "x"], vec!["y", "y"], vec!["z"]]);
    }

    #[test]
    fn construct_single_term() {
        let x = terms("x+1")[0].clone();
        assert_eq!(construct_expression(false, 1, vec![x.clone()]), x.negate());
        assert_eq!(construct_expression(true, 2, vec![x.clone()]), x.with_exponent(2));
    }

    #[test]
    fn construct_empty() {
        assert_eq!(construct_expression(true, 1, vec![]).to_string(), "0");
        assert_eq!(construct_expression(false, 2, vec![]).to_string(), "-0²");
    }

    #[test]
    fn explanation_display() {
        let explanation = Explanation::new()
            .text("Combine ")
            .list(terms("2x+3x"))
            .text(" to get ")
            .algebra(parse("5x").unwrap())
            .text(".\n");
        assert_eq!(explanation.to_string(), "Combine 2x, 3x to get 5x.\n");
    }
}
