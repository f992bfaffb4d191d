//! The algebraic value model.
//!
//! Every value the solver works with is a [`Particle`]: a number, fraction, mixed number,
//! variable, term, expression or root. Each particle carries a **sign** (`true` for
//! non-negative) and an **exponent** (`1` when no power is applied), and is immutable once built.
//! Transformations build new particles with [`Particle::with_sign`],
//! [`Particle::with_exponent`] and friends, and replace sub-trees with the path-copying
//! operations in [`Algebra`].
//!
//! Children are stored behind [`Arc`](std::sync::Arc), so rebuilding a tree shares every
//! untouched sibling with the tree it was rebuilt from, and trees can be sent to the worker
//! threads that expand the solver's frontier.
//!
//! # Equality
//!
//! [`PartialEq`] is **structural**: two particles are equal if they are the same variant with the
//! same sign, exponent and children, in the same order. The only exception is zero, which is
//! equal to itself regardless of sign. [`Particle::almost_equals`] ignores the top-level sign and
//! exponent, and is what the algorithms use to find like terms.
//!
//! ```
//! use solve4x_compute::algebra::{parse, Algebra};
//!
//! let algebra = parse("2x+3x").unwrap();
//! assert_eq!(algebra.to_string(), "2x+3x");
//! assert!(matches!(algebra, Algebra::Particle(_)));
//! ```

mod convert;
mod equation;
mod expression;
mod fmt;
mod fraction;
mod number;
mod path;
mod root;
mod term;
mod variable;

pub use convert::{parsable, parse};
pub use equation::Equation;
pub use expression::Expression;
pub use fraction::{Fraction, MixedNumber};
pub use number::{Number, NEGATIVE_ONE, ONE, ZERO};
pub use path::Path;
pub use root::Root;
pub use term::Term;
pub use variable::Variable;

/// The level of an algebraic value: which variant it is. Algorithms declare the level they
/// operate on, and the solver hands them every sub-tree of that level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Level {
    Number,
    Fraction,
    MixedNumber,
    Variable,
    Term,
    Expression,
    Root,
    Equation,
}

/// A single node of the algebraic value tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Particle {
    /// A number, such as `2.68` or `3.0*10⁷`.
    Number(Number),

    /// A fraction, such as `(1)/(3)`.
    Fraction(Fraction),

    /// A mixed number, such as `2(1)/(4)`.
    MixedNumber(MixedNumber),

    /// A single-letter variable, such as `x`.
    Variable(Variable),

    /// Factors that are multiplied together, such as `2xy`.
    Term(Term),

    /// Terms that are added together, such as `2x-4`.
    Expression(Expression),

    /// A radical, such as `√(x)`.
    Root(Root),
}

/// Calls the given macro body with the inner value of every [`Particle`] variant.
macro_rules! each_variant {
    ($particle:expr, $inner:ident => $body:expr) => {
        match $particle {
            Particle::Number($inner) => $body,
            Particle::Fraction($inner) => $body,
            Particle::MixedNumber($inner) => $body,
            Particle::Variable($inner) => $body,
            Particle::Term($inner) => $body,
            Particle::Expression($inner) => $body,
            Particle::Root($inner) => $body,
        }
    };
}

/// Same as [`each_variant!`], but re-wraps the result in the same [`Particle`] variant.
macro_rules! map_variant {
    ($particle:expr, $inner:ident => $body:expr) => {
        match $particle {
            Particle::Number($inner) => Particle::Number($body),
            Particle::Fraction($inner) => Particle::Fraction($body),
            Particle::MixedNumber($inner) => Particle::MixedNumber($body),
            Particle::Variable($inner) => Particle::Variable($body),
            Particle::Term($inner) => Particle::Term($body),
            Particle::Expression($inner) => Particle::Expression($body),
            Particle::Root($inner) => Particle::Root($body),
        }
    };
}

/// Implements the sign and exponent accessors shared by every particle struct.
macro_rules! signed_particle {
    ($($ty:ident),* $(,)?) => {
        $(
            impl $ty {
                /// Returns the sign of this particle: `true` if it is non-negative.
                pub fn sign(&self) -> bool {
                    self.sign
                }

                /// Returns the exponent applied to this particle.
                pub fn exponent(&self) -> u32 {
                    self.exponent
                }

                /// Returns a copy of this particle with the given sign and exponent.
                pub fn with_sign_and_exponent(&self, sign: bool, exponent: u32) -> Self {
                    Self { sign, exponent, ..self.clone() }
                }
            }
        )*
    };
}

pub(crate) use signed_particle;

impl Particle {
    /// Returns the level of this particle.
    pub fn level(&self) -> Level {
        match self {
            Particle::Number(_) => Level::Number,
            Particle::Fraction(_) => Level::Fraction,
            Particle::MixedNumber(_) => Level::MixedNumber,
            Particle::Variable(_) => Level::Variable,
            Particle::Term(_) => Level::Term,
            Particle::Expression(_) => Level::Expression,
            Particle::Root(_) => Level::Root,
        }
    }

    /// Returns the sign of this particle: `true` if it is non-negative.
    pub fn sign(&self) -> bool {
        each_variant!(self, inner => inner.sign())
    }

    /// Returns the exponent applied to this particle.
    pub fn exponent(&self) -> u32 {
        each_variant!(self, inner => inner.exponent())
    }

    /// Returns a copy of this particle with the given sign and exponent.
    pub fn with_sign_and_exponent(&self, sign: bool, exponent: u32) -> Particle {
        map_variant!(self, inner => inner.with_sign_and_exponent(sign, exponent))
    }

    /// Returns a copy of this particle with the given sign.
    pub fn with_sign(&self, sign: bool) -> Particle {
        self.with_sign_and_exponent(sign, self.exponent())
    }

    /// Returns a copy of this particle with the given exponent.
    pub fn with_exponent(&self, exponent: u32) -> Particle {
        self.with_sign_and_exponent(self.sign(), exponent)
    }

    /// Returns this particle with its sign flipped.
    pub fn negate(&self) -> Particle {
        self.with_sign(!self.sign())
    }

    /// Returns true if the two particles are structurally equal once their top-level sign and
    /// exponent are ignored.
    ///
    /// `-2x` and `2x` are almost equal, as are `y` and `y²`. Callers that need matching
    /// exponents compare them separately.
    pub fn almost_equals(&self, other: &Particle) -> bool {
        match (self, other) {
            (Particle::Number(a), Particle::Number(b)) => a.magnitude_eq(b),
            (Particle::Fraction(a), Particle::Fraction(b)) => {
                a.top() == b.top() && a.bottom() == b.bottom()
            },
            (Particle::MixedNumber(a), Particle::MixedNumber(b)) => {
                a.numeral().magnitude_eq(b.numeral()) && a.fraction() == b.fraction()
            },
            (Particle::Variable(a), Particle::Variable(b)) => a.name() == b.name(),
            (Particle::Term(a), Particle::Term(b)) => a.factors() == b.factors(),
            (Particle::Expression(a), Particle::Expression(b)) => a.terms() == b.terms(),
            (Particle::Root(a), Particle::Root(b)) => {
                a.index() == b.index() && a.radicand() == b.radicand()
            },
            _ => false,
        }
    }

    /// Returns true if this particle is a numeric constant that the arithmetic layer can work
    /// with: a [`Number`], a [`Fraction`] whose parts are numbers, or a [`MixedNumber`], with no
    /// exponent applied.
    pub fn is_constant(&self) -> bool {
        if self.exponent() != 1 {
            return false;
        }

        match self {
            Particle::Number(_) | Particle::MixedNumber(_) => true,
            Particle::Fraction(fraction) => fraction.numeric_parts().is_some(),
            _ => false,
        }
    }

    /// Returns true if this particle is the number zero, with any sign or exponent.
    pub fn is_zero(&self) -> bool {
        matches!(self, Particle::Number(number) if number.is_zero())
    }

    /// Returns true if this particle is the number one with no exponent, with any sign.
    pub fn is_one(&self) -> bool {
        matches!(self, Particle::Number(number) if number.is_one())
    }

    /// Returns the number inside this particle, if it is one.
    pub fn as_number(&self) -> Option<&Number> {
        match self {
            Particle::Number(number) => Some(number),
            _ => None,
        }
    }

    /// Returns the term inside this particle, if it is one.
    pub fn as_term(&self) -> Option<&Term> {
        match self {
            Particle::Term(term) => Some(term),
            _ => None,
        }
    }

    /// Folds an outer sign and exponent into a single particle, as if the particle were the only
    /// child of a term or expression that is being collapsed.
    ///
    /// When either side has exponent 1 the exponents multiply and the particle absorbs the
    /// outer sign; otherwise the particle is wrapped in a single-factor [`Term`] that carries the
    /// outer sign and exponent.
    pub fn fold_into(self, sign: bool, exponent: u32) -> Particle {
        if exponent == 1 {
            let inner_sign = self.sign();
            return self.with_sign(sign == inner_sign);
        }

        if self.exponent() == 1 {
            // an odd power keeps the inner sign: (-x)³ = -(x³)
            let inner_negative = !self.sign() && exponent % 2 == 1;
            return self.with_sign_and_exponent(sign != inner_negative, exponent);
        }

        Particle::Term(Term::new(sign, vec![self], exponent))
    }
}

impl From<Number> for Particle {
    fn from(number: Number) -> Self {
        Particle::Number(number)
    }
}

impl From<Fraction> for Particle {
    fn from(fraction: Fraction) -> Self {
        Particle::Fraction(fraction)
    }
}

impl From<MixedNumber> for Particle {
    fn from(mixed: MixedNumber) -> Self {
        Particle::MixedNumber(mixed)
    }
}

impl From<Variable> for Particle {
    fn from(variable: Variable) -> Self {
        Particle::Variable(variable)
    }
}

impl From<Term> for Particle {
    fn from(term: Term) -> Self {
        Particle::Term(term)
    }
}

impl From<Expression> for Particle {
    fn from(expression: Expression) -> Self {
        Particle::Expression(expression)
    }
}

impl From<Root> for Particle {
    fn from(root: Root) -> Self {
        Particle::Root(root)
    }
}

/// A complete algebraic value: the input to the solver and the result of every step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Algebra {
    /// An equation, such as `2x+3=7`.
    Equation(Equation),

    /// A single particle, such as `2x+3`.
    Particle(Particle),
}

impl Algebra {
    /// Returns the level of the top-level value.
    pub fn level(&self) -> Level {
        match self {
            Algebra::Equation(_) => Level::Equation,
            Algebra::Particle(particle) => particle.level(),
        }
    }

    /// Returns the particle, if this is not an equation.
    pub fn as_particle(&self) -> Option<&Particle> {
        match self {
            Algebra::Particle(particle) => Some(particle),
            Algebra::Equation(_) => None,
        }
    }

    /// Returns the equation, if this is one.
    pub fn as_equation(&self) -> Option<&Equation> {
        match self {
            Algebra::Equation(equation) => Some(equation),
            Algebra::Particle(_) => None,
        }
    }

    /// Returns true if this is an equation.
    pub fn is_equation(&self) -> bool {
        matches!(self, Algebra::Equation(_))
    }
}

impl From<Particle> for Algebra {
    fn from(particle: Particle) -> Self {
        Algebra::Particle(particle)
    }
}

impl From<Equation> for Algebra {
    fn from(equation: Equation) -> Self {
        Algebra::Equation(equation)
    }
}
