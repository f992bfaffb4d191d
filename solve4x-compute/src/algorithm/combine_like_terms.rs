//! Combining like terms in an expression.
//!
//! `2x+3x` becomes `5x`, `4x+5x-8x` becomes `x`, and `x-x` cancels to `0`.

use crate::{
    algebra::{Algebra, Level, Number, Particle, Term, ONE, ZERO},
    arithmetic::{add_constants, are_combinable, RoundingPolicy},
    error::{kind::{NotApplicable, NotCombinable}, Error},
};
use super::{construct_expression, partition, Algorithm, Explanation, Step};

/// Returns the coefficient of the term with the term's sign applied. A term with no coefficient
/// has a coefficient of `±1`.
fn signed_coefficient(term: &Term) -> Particle {
    match term.coefficient() {
        Some(coefficient) => coefficient.with_sign(coefficient.sign() == term.sign()),
        None => ONE.with_sign_and_exponent(term.sign(), 1).into(),
    }
}

/// Returns `1` or `-1`.
fn unit(sign: bool) -> Particle {
    ONE.with_sign_and_exponent(sign, 1).into()
}

/// Returns true if the term is a coefficient times exactly the given particle, so that the two
/// can be combined by adjusting the coefficient: `2x` and `x`.
fn matches_bare(term: &Term, other: &Particle) -> bool {
    if term.exponent() != 1 || term.coefficient().is_none() {
        return false;
    }

    match term.factors() {
        [_, factor] => factor.sign()
            && factor.exponent() == other.exponent()
            && factor.almost_equals(other)
            && are_combinable(&signed_coefficient(term), &unit(other.sign())),
        _ => false,
    }
}

/// Builds `coefficient × factors`. A coefficient of `1` is left out, and a single remaining
/// factor is returned on its own.
fn with_coefficient(sign: bool, coefficient: Particle, factors: &[Particle]) -> Particle {
    if coefficient.is_one() {
        return match factors {
            [factor] => factor.with_sign(sign == factor.sign()),
            _ => Term::new(sign, factors.to_vec(), 1).into(),
        };
    }

    let mut all = Vec::with_capacity(factors.len() + 1);
    all.push(coefficient);
    all.extend_from_slice(factors);
    Term::new(sign, all, 1).into()
}

/// Returns true if the two like-term candidates are Terms with equal factors and coefficients
/// that can be added.
fn like_terms(a: &Term, b: &Term) -> bool {
    a.exponent() == 1
        && b.exponent() == 1
        && a.variable_factors() == b.variable_factors()
        && are_combinable(&signed_coefficient(a), &signed_coefficient(b))
}

/// Returns true if the two particles are like terms, and can be added into a single particle.
///
/// Particles are like terms if:
///
/// - they are equal apart from their sign, with the same exponent (`x` and `-x`),
/// - they are terms with the same factors and combinable coefficients (`2xy` and `-3xy`),
/// - one is a coefficient times the other (`2x` and `x`), or
/// - they are constants that the arithmetic layer can add (`2` and `3.5`).
pub fn are_combinable_terms(a: &Particle, b: &Particle) -> bool {
    if a.exponent() == b.exponent() && a.almost_equals(b) {
        return true;
    }

    match (a, b) {
        (Particle::Term(a), Particle::Term(b)) if like_terms(a, b) => true,
        (Particle::Term(term), other) | (other, Particle::Term(term)) if matches_bare(term, other) => true,
        _ if a.exponent() != 1 || b.exponent() != 1 => false,
        _ => are_combinable(a, b),
    }
}

/// Adds two like terms.
///
/// Fails with [`NotCombinable`] if [`are_combinable_terms`] is false for them.
pub fn combine_terms(a: &Particle, b: &Particle, policy: RoundingPolicy) -> Result<Particle, Error> {
    if a.is_zero() {
        return Ok(b.clone());
    }
    if b.is_zero() {
        return Ok(a.clone());
    }

    if are_combinable(a, b) {
        return add_constants(a, b, policy);
    }

    match (a, b) {
        (Particle::Term(ta), Particle::Term(tb)) if like_terms(ta, tb) => {
            let sum = add_constants(&signed_coefficient(ta), &signed_coefficient(tb), policy)?;
            if sum.is_zero() {
                return Ok(ZERO.clone().into());
            }
            Ok(with_coefficient(sum.sign(), sum.with_sign(true), ta.variable_factors()))
        },
        (Particle::Term(term), other) | (other, Particle::Term(term)) if matches_bare(term, other) => {
            let sum = add_constants(&signed_coefficient(term), &unit(other.sign()), policy)?;
            if sum.is_zero() {
                return Ok(ZERO.clone().into());
            }
            // the matching factor is positive, so the sum carries the sign of the result
            Ok(with_coefficient(sum.sign(), sum.with_sign(true), &term.factors()[1..]))
        },
        _ if a.exponent() == b.exponent() && a.almost_equals(b) => {
            if a.sign() != b.sign() {
                return Ok(ZERO.clone().into());
            }
            let two = Particle::from(Number::whole(true, "2"));
            Ok(Term::new(a.sign(), vec![two, a.with_sign(true)], 1).into())
        },
        _ => Err(Error::unspanned(NotCombinable {
            left: a.to_string(),
            right: b.to_string(),
        })),
    }
}

/// Partitions the terms of an expression into classes of like terms, keeping their order. Each
/// term joins the first class whose first member it is a like term of.
pub fn list_combinable_terms(terms: &[Particle]) -> Vec<Vec<Particle>> {
    partition(terms, are_combinable_terms)
}

/// Adds up a class of like terms from left to right, returning each sum with the members that
/// went into it.
///
/// Every member is a like term of the first, but not always of the running sum: in
/// `2(1)/(4)-1-2`, the sum `1(1)/(4)` cannot take `-2` without flipping its sign. Such members
/// are set aside and summed the same way afterwards.
fn sum_class(class: Vec<Particle>, policy: RoundingPolicy) -> Result<Vec<(Vec<Particle>, Particle)>, Error> {
    let mut sums = Vec::new();
    let mut pending = class;
    while let Some((first, rest)) = pending.split_first() {
        let mut members = vec![first.clone()];
        let mut sum = first.clone();
        let mut deferred = Vec::new();
        for member in rest {
            if sum.is_zero() || are_combinable_terms(&sum, member) {
                sum = combine_terms(&sum, member, policy)?;
                members.push(member.clone());
            } else {
                deferred.push(member.clone());
            }
        }
        sums.push((members, sum));
        pending = deferred;
    }
    Ok(sums)
}

/// Combines like terms in an expression.
#[derive(Debug, Default, Clone, Copy)]
pub struct CombineLikeTerms;

impl Algorithm for CombineLikeTerms {
    fn name(&self) -> &'static str {
        "combine like terms"
    }

    fn level(&self) -> Level {
        Level::Expression
    }

    fn smarts(&self, algebra: &Algebra) -> u8 {
        let Some(Particle::Expression(expression)) = algebra.as_particle() else {
            return 0;
        };

        let classes = list_combinable_terms(expression.terms());
        match expression.terms().len() - classes.len() {
            0 => 0,
            1 => 7,
            _ => 9,
        }
    }

    fn execute(&self, algebra: &Algebra, policy: RoundingPolicy) -> Result<Step, Error> {
        let Some(Particle::Expression(expression)) = algebra.as_particle() else {
            return Err(Error::unspanned(NotApplicable {
                algorithm: self.name(),
                algebra: algebra.to_string(),
            }));
        };

        let mut explanation = Explanation::new()
            .text("We need to combine like terms here, in the expression ")
            .algebra(algebra.clone())
            .text(".\n");

        let mut terms = Vec::new();
        for class in list_combinable_terms(expression.terms()) {
            for (members, combined) in sum_class(class, policy)? {
                if members.len() > 1 {
                    explanation = explanation
                        .text("Combine ")
                        .list(members)
                        .text(" to get ")
                        .algebra(combined.clone())
                        .text(".\n");
                }
                if !combined.is_zero() {
                    terms.push(combined);
                }
            }
        }

        Ok(Step {
            algorithm: self.name(),
            result: construct_expression(expression.sign(), expression.exponent(), terms).into(),
            explanation,
        })
    }
}

#[cfg(test)]
mod tests {
    use crate::{algebra::{parse, Expression, Fraction}, arithmetic::Decimal};
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;
    use super::*;

    const POLICY: RoundingPolicy = RoundingPolicy::ForScientificNotationAndDecimals;

    fn particle(input: &str) -> Particle {
        match parse(input).unwrap() {
            Algebra::Particle(particle) => particle,
            Algebra::Equation(_) => panic!("expected a particle"),
        }
    }

    fn combine(a: &str, b: &str) -> String {
        let (a, b) = (particle(a), particle(b));
        assert!(are_combinable_terms(&a, &b), "expected {} and {} to be like terms", a, b);
        combine_terms(&a, &b, POLICY).unwrap().to_string()
    }

    fn execute(input: &str, policy: RoundingPolicy) -> Step {
        CombineLikeTerms.execute(&parse(input).unwrap(), policy).unwrap()
    }

    #[test]
    fn classes_of_like_terms() {
        let Particle::Expression(expression) = particle("2x+4y²-6-2.3y²-4x") else {
            panic!("expected an expression");
        };
        let classes = list_combinable_terms(expression.terms());
        let rendered = classes
            .iter()
            .map(|class| class.iter().map(ToString::to_string).collect::<Vec<_>>())
            .collect::<Vec<_>>();
        assert_eq!(rendered, vec![
            vec!["2x", "-4x"],
            vec!["4y²", "-2.3y²"],
            vec!["-6"],
        ]);
    }

    #[test]
    fn like_term_pairs() {
        assert!(are_combinable_terms(&particle("x"), &particle("-x")));
        assert!(are_combinable_terms(&particle("2xy"), &particle("-3xy")));
        assert!(are_combinable_terms(&particle("2x"), &particle("x")));
        assert!(are_combinable_terms(&particle("x"), &particle("-2x")));
        assert!(are_combinable_terms(&particle("xy"), &particle("3xy")));
        assert!(are_combinable_terms(&particle("2"), &particle("3.5")));
        assert!(are_combinable_terms(&particle("(x+1)²"), &particle("-(x+1)²")));
    }

    #[test]
    fn unlike_term_pairs() {
        assert!(!are_combinable_terms(&particle("x"), &particle("y")));
        assert!(!are_combinable_terms(&particle("x"), &particle("x²")));
        assert!(!are_combinable_terms(&particle("2x"), &particle("2y")));
        assert!(!are_combinable_terms(&particle("2xy"), &particle("2yx")));
        assert!(!are_combinable_terms(&particle("2x"), &particle("x²")));
        assert!(!are_combinable_terms(&particle("2x"), &particle("2")));
        assert!(!are_combinable_terms(&particle("2²"), &particle("2")));
    }

    #[test]
    fn combine_variables() {
        assert_eq!(combine("x", "x"), "2x");
        assert_eq!(combine("-x", "-x"), "-2x");
        assert_eq!(combine("x", "-x"), "0");
        assert_eq!(combine("y²", "y²"), "2y²");
    }

    #[test]
    fn combine_terms_by_coefficient() {
        assert_eq!(combine("2x", "-4x"), "-2x");
        assert_eq!(combine("4x", "5x"), "9x");
        assert_eq!(combine("9x", "-8x"), "x");
        assert_eq!(combine("-9x", "8x"), "-x");
        assert_eq!(combine("2xy", "-2xy"), "0");
        assert_eq!(combine("xy", "xy"), "2xy");
        assert_eq!(combine("2xy", "-xy"), "xy");
    }

    #[test]
    fn combine_term_and_bare_factor() {
        assert_eq!(combine("2x", "x"), "3x");
        assert_eq!(combine("x", "-2x"), "-x");
        assert_eq!(combine("2x", "-x"), "x");
        assert_eq!(combine("-2x", "x"), "-x");
        assert_eq!(combine("-x²", "3x²"), "2x²");
    }

    #[test]
    fn combine_powered_groups() {
        assert_eq!(combine("(x+1)²", "(x+1)²"), "2(x+1)²");
        assert_eq!(combine("√(x)", "-√(x)"), "0");
    }

    #[test]
    fn combine_with_zero() {
        assert_eq!(combine_terms(&particle("0"), &particle("2x"), POLICY).unwrap(), particle("2x"));
        assert_eq!(combine_terms(&particle("y"), &particle("0"), POLICY).unwrap(), particle("y"));
    }

    #[test]
    fn combine_unlike_terms_fails() {
        let err = combine_terms(&particle("x"), &particle("y"), POLICY).unwrap_err();
        assert!(err.is::<NotCombinable>());
    }

    #[test]
    fn expression_with_decimals() {
        let step = execute("2x+4y²-6-2.3y²-4x", RoundingPolicy::ForScientificNotation);
        assert_eq!(step.result.to_string(), "-2x+1.7y²-6");
    }

    #[test]
    fn expression_with_significant_figures() {
        let step = execute("2x+4y²-6-2.3y²-4x", RoundingPolicy::ForScientificNotationAndDecimals);
        assert_eq!(step.result.to_string(), "-2x+2y²-6");
    }

    #[test]
    fn expression_to_single_term() {
        let step = execute("4x+5x-8x", POLICY);
        assert_eq!(step.result, parse("x").unwrap());
    }

    #[test]
    fn expression_keeps_sign_and_exponent() {
        let step = execute("-(3+2+x)²", POLICY);
        assert_eq!(step.result.to_string(), "-(5+x)²");
    }

    #[test]
    fn expression_cancels_to_zero() {
        assert_eq!(execute("x-x", POLICY).result.to_string(), "0");
        assert_eq!(execute("(x-x)²", POLICY).result.to_string(), "0²");
    }

    #[test]
    fn single_term_absorbs_sign() {
        assert_eq!(execute("-(x+x)", POLICY).result.to_string(), "-2x");
        assert_eq!(execute("-(2+3)²", POLICY).result.to_string(), "-5²");
    }

    #[test]
    fn sum_that_cannot_take_a_like_term() {
        let input = "2(1)/(4)-1-2";
        assert_eq!(CombineLikeTerms.smarts(&parse(input).unwrap()), 9);

        let step = execute(input, POLICY);
        assert_eq!(step.result.to_string(), "1(1)/(4)-2");
        assert_eq!(
            step.explanation.to_string(),
            "We need to combine like terms here, in the expression 2(1)/(4)-1-2.\nCombine 2(1)/(4), -1 to get 1(1)/(4).\n",
        );
        assert_eq!(CombineLikeTerms.smarts(&step.result), 0);
    }

    #[test]
    fn sum_cancels_before_the_class_ends() {
        assert_eq!(execute("x-x+2x+y", POLICY).result.to_string(), "2x+y");
    }

    #[test]
    fn explanation() {
        let step = execute("2x+3-x", POLICY);
        assert_eq!(step.result.to_string(), "x+3");
        assert_eq!(
            step.explanation.to_string(),
            "We need to combine like terms here, in the expression 2x+3-x.\nCombine 2x, -x to get x.\n",
        );
    }

    #[test]
    fn smarts() {
        let smarts = |input: &str| CombineLikeTerms.smarts(&parse(input).unwrap());
        assert_eq!(smarts("2x+3y"), 0);
        assert_eq!(smarts("2x+3x"), 7);
        assert_eq!(smarts("2x+3x+4x"), 9);
        assert_eq!(smarts("2x+3+3x+4"), 9);
        assert_eq!(smarts("2x"), 0);
        assert_eq!(smarts("x=x"), 0);
    }

    #[test]
    fn execute_on_non_expression_fails() {
        let err = CombineLikeTerms.execute(&parse("2x").unwrap(), POLICY).unwrap_err();
        assert!(err.is::<NotApplicable>());
    }

    /// Small whole number or one-decimal constants.
    fn constant() -> impl Strategy<Value = Particle> {
        (any::<bool>(), 0u32..50, proptest::option::of(0u32..10)).prop_map(|(sign, integer, decimal)| {
            let text = match decimal {
                Some(decimal) => format!("{}{}.{}", if sign { "" } else { "-" }, integer, decimal),
                None => format!("{}{}", if sign { "" } else { "-" }, integer),
            };
            particle(&text)
        })
    }

    /// A like term of `x` or `y`: a variable with an optional coefficient.
    fn term() -> impl Strategy<Value = Particle> {
        (any::<bool>(), 1u32..20, prop_oneof![Just('x'), Just('y')]).prop_map(|(sign, coefficient, name)| {
            let text = match coefficient {
                1 => format!("{}{}", if sign { "" } else { "-" }, name),
                _ => format!("{}{}{}", if sign { "" } else { "-" }, coefficient, name),
            };
            particle(&text)
        })
    }

    /// A whole number, fraction or mixed number over the denominator `d`, with the given sign.
    fn over(d: u32, sign: bool) -> impl Strategy<Value = Particle> {
        let minus = if sign { "" } else { "-" };
        prop_oneof![
            (1u32..5).prop_map(move |n| format!("{}{}", minus, n)),
            (1..d).prop_map(move |t| format!("{}({})/({})", minus, t, d)),
            (1u32..5, 1..d).prop_map(move |(w, t)| format!("{}{}({})/({})", minus, w, t, d)),
        ]
        .prop_map(|text| particle(&text))
    }

    /// Positive summands sharing one denominator, along with the denominator.
    fn positive_summands() -> impl Strategy<Value = (u32, Vec<Particle>)> {
        (2u32..10).prop_flat_map(|d| (Just(d), proptest::collection::vec(over(d, true), 2..6)))
    }

    /// Summands of either sign sharing one denominator, along with the denominator.
    fn signed_summands() -> impl Strategy<Value = (u32, Vec<Particle>)> {
        (2u32..10).prop_flat_map(|d| {
            let summand = any::<bool>().prop_flat_map(move |sign| over(d, sign));
            (Just(d), proptest::collection::vec(summand, 2..6))
        })
    }

    /// The value of a constant over the denominator `d`, times `d`.
    fn scaled_value(particle: &Particle, d: u32) -> i64 {
        let signed = |sign: bool, value: i64| if sign { value } else { -value };
        let whole = |number: &Number| number.integer().parse::<i64>().unwrap();
        let top = |fraction: &Fraction| {
            let (top, bottom) = fraction.whole_parts().unwrap();
            assert_eq!(whole(bottom), i64::from(d));
            whole(top)
        };
        match particle {
            Particle::Number(number) => signed(number.sign(), whole(number) * i64::from(d)),
            Particle::Fraction(fraction) => signed(fraction.sign(), top(fraction)),
            Particle::MixedNumber(mixed) => signed(
                mixed.sign(),
                whole(mixed.numeral()) * i64::from(d) + top(mixed.fraction()),
            ),
            other => panic!("expected a constant, found {}", other),
        }
    }

    /// Adds the summands from left to right.
    fn fold(summands: &[Particle], policy: RoundingPolicy) -> Particle {
        summands.iter().fold(ZERO.clone().into(), |sum, next| combine_terms(&sum, next, policy).unwrap())
    }

    /// One or two decimal place numbers.
    fn decimal() -> impl Strategy<Value = Particle> {
        (any::<bool>(), 0u32..100, 0u32..100).prop_map(|(sign, integer, hundredths)| {
            particle(&format!("{}{}.{:02}", if sign { "" } else { "-" }, integer, hundredths))
        })
    }

    fn hundredths(particle: &Particle) -> Decimal {
        match particle {
            Particle::Number(number) => Decimal::from(number).with_scale(2).unwrap(),
            other => panic!("expected a number, found {}", other),
        }
    }

    proptest! {
        #[test]
        fn zero_identity(x in prop_oneof![constant(), term()]) {
            prop_assert_eq!(combine_terms(&ZERO.clone().into(), &x, POLICY).unwrap(), x.clone());
            prop_assert!(combine_terms(&x, &x.negate(), POLICY).unwrap().is_zero());
        }

        #[test]
        fn whole_numbers_associate(a in -50i32..50, b in -50i32..50, c in -50i32..50) {
            let (a, b, c) = (particle(&a.to_string()), particle(&b.to_string()), particle(&c.to_string()));
            let left = combine_terms(&combine_terms(&a, &b, POLICY).unwrap(), &c, POLICY).unwrap();
            let right = combine_terms(&a, &combine_terms(&b, &c, POLICY).unwrap(), POLICY).unwrap();
            prop_assert_eq!(left, right);
        }

        #[test]
        fn like_denominators_add_in_any_order((d, summands) in positive_summands()) {
            let expected: i64 = summands.iter().map(|summand| scaled_value(summand, d)).sum();
            let forward = fold(&summands, POLICY);
            let reversed = fold(&summands.iter().rev().cloned().collect::<Vec<_>>(), POLICY);
            prop_assert_eq!(scaled_value(&forward, d), expected);
            prop_assert_eq!(scaled_value(&reversed, d), expected);
        }

        #[test]
        fn decimals_add_in_any_order(summands in proptest::collection::vec(decimal(), 2..6)) {
            let policy = RoundingPolicy::ForScientificNotation;
            let forward = fold(&summands, policy);
            let reversed = fold(&summands.iter().rev().cloned().collect::<Vec<_>>(), policy);
            prop_assert_eq!(hundredths(&forward), hundredths(&reversed));
        }

        #[test]
        fn constant_sums_keep_their_value((d, summands) in signed_summands()) {
            let expected: i64 = summands.iter().map(|summand| scaled_value(summand, d)).sum();
            let input = Algebra::from(Particle::from(Expression::new(true, summands, 1)));
            let step = CombineLikeTerms.execute(&input, POLICY).unwrap();
            let actual: i64 = match step.result.as_particle() {
                Some(Particle::Expression(expression)) => {
                    expression.terms().iter().map(|term| scaled_value(term, d)).sum()
                },
                Some(particle) => scaled_value(particle, d),
                None => panic!("expected a particle, found {}", step.result),
            };
            prop_assert_eq!(actual, expected);
        }

        #[test]
        fn like_term_classes_partition(terms in proptest::collection::vec(prop_oneof![constant(), term()], 1..8)) {
            let classes = list_combinable_terms(&terms);
            prop_assert_eq!(classes.iter().map(Vec::len).sum::<usize>(), terms.len());
            for class in &classes {
                for member in class {
                    prop_assert!(are_combinable_terms(&class[0], member));
                }
            }
            for (i, class) in classes.iter().enumerate() {
                for earlier in &classes[..i] {
                    prop_assert!(!are_combinable_terms(&earlier[0], &class[0]));
                }
            }
        }
    }
}
