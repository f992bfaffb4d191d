//! Canonical rendering of the value model.
//!
//! The rendered string of any particle parses back to an equal particle, so this is the form used
//! in step explanations and for display.

use solve4x_parser::parser::ast::literal::to_superscript;
use std::fmt::{self, Display, Formatter, Write};
use super::{
    Algebra,
    Equation,
    Expression,
    Fraction,
    MixedNumber,
    Number,
    Particle,
    Root,
    Term,
    Variable,
};

/// Writes `-` if the sign is negative.
fn write_sign(f: &mut Formatter, sign: bool) -> fmt::Result {
    if sign {
        Ok(())
    } else {
        f.write_char('-')
    }
}

/// Writes the exponent as a superscript, unless it is 1.
fn write_exponent(f: &mut Formatter, exponent: u32) -> fmt::Result {
    if exponent == 1 {
        Ok(())
    } else {
        f.write_str(&to_superscript(exponent))
    }
}

impl Number {
    /// Writes the digits of this number, without its sign or exponent.
    fn fmt_magnitude(&self, f: &mut Formatter) -> fmt::Result {
        f.write_str(self.integer())?;
        if let Some(decimal) = self.decimal() {
            write!(f, ".{}", decimal)?;
        }
        if let Some(sci) = self.sci_exponent() {
            write!(f, "*10{}", to_superscript(sci))?;
        }
        Ok(())
    }
}

impl Display for Number {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        write_sign(f, self.sign())?;
        if self.exponent() != 1 && self.uses_scientific_notation() {
            f.write_char('(')?;
            self.fmt_magnitude(f)?;
            f.write_char(')')?;
        } else {
            self.fmt_magnitude(f)?;
        }
        write_exponent(f, self.exponent())
    }
}

impl Fraction {
    /// Writes `(top)/(bottom)`.
    fn fmt_body(&self, f: &mut Formatter) -> fmt::Result {
        write!(f, "({})/({})", self.top(), self.bottom())
    }
}

impl Display for Fraction {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        write_sign(f, self.sign())?;
        if self.exponent() == 1 {
            self.fmt_body(f)
        } else {
            f.write_char('(')?;
            self.fmt_body(f)?;
            f.write_char(')')?;
            write_exponent(f, self.exponent())
        }
    }
}

impl Display for MixedNumber {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        write_sign(f, self.sign())?;
        if self.exponent() != 1 {
            f.write_char('(')?;
        }
        self.numeral().fmt_magnitude(f)?;
        self.fraction().fmt_body(f)?;
        if self.exponent() != 1 {
            f.write_char(')')?;
        }
        write_exponent(f, self.exponent())
    }
}

impl Display for Variable {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        write_sign(f, self.sign())?;
        f.write_char(self.name())?;
        write_exponent(f, self.exponent())
    }
}

/// Returns true if the factor must be parenthesised when it follows `previous` in a term.
fn factor_needs_parens(previous: Option<&Particle>, factor: &Particle) -> bool {
    if !factor.sign() {
        return true;
    }

    match factor {
        Particle::Fraction(_) | Particle::MixedNumber(_)
            | Particle::Term(_) | Particle::Expression(_) => factor.exponent() == 1,
        // `23` would read as a single number
        Particle::Number(_) => matches!(previous, Some(Particle::Number(_))),
        _ => false,
    }
}

impl Display for Term {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        write_sign(f, self.sign())?;
        if self.exponent() != 1 {
            f.write_char('(')?;
        }

        // a lone factor under an exponent is already wrapped: `(-x)²`
        let wrapped = self.exponent() != 1 && self.factors().len() == 1;
        let mut previous = None;
        for factor in self.factors() {
            if !wrapped && factor_needs_parens(previous, factor) {
                write!(f, "({})", factor)?;
            } else {
                write!(f, "{}", factor)?;
            }
            previous = Some(factor);
        }

        if self.exponent() != 1 {
            f.write_char(')')?;
        }
        write_exponent(f, self.exponent())
    }
}

impl Display for Expression {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        let wrap = !self.sign() || self.exponent() != 1;
        write_sign(f, self.sign())?;
        if wrap {
            f.write_char('(')?;
        }

        for (i, term) in self.terms().iter().enumerate() {
            if i > 0 && term.sign() {
                f.write_char('+')?;
            }

            match term {
                // a nested expression with no sign or exponent would otherwise merge into this one
                Particle::Expression(inner) if inner.sign() && inner.exponent() == 1 => {
                    write!(f, "({})", term)?;
                },
                _ => write!(f, "{}", term)?,
            }
        }

        if wrap {
            f.write_char(')')?;
        }
        write_exponent(f, self.exponent())
    }
}

impl Display for Root {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        write_sign(f, self.sign())?;
        f.write_char('√')?;
        if self.index() != 2 {
            write!(f, "[{}]", self.index())?;
        }
        write!(f, "({})", self.radicand())?;
        write_exponent(f, self.exponent())
    }
}

impl Display for Particle {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match self {
            Particle::Number(number) => number.fmt(f),
            Particle::Fraction(fraction) => fraction.fmt(f),
            Particle::MixedNumber(mixed) => mixed.fmt(f),
            Particle::Variable(variable) => variable.fmt(f),
            Particle::Term(term) => term.fmt(f),
            Particle::Expression(expression) => expression.fmt(f),
            Particle::Root(root) => root.fmt(f),
        }
    }
}

impl Display for Equation {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        write!(f, "{}={}", self.left(), self.right())
    }
}

impl Display for Algebra {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match self {
            Algebra::Equation(equation) => equation.fmt(f),
            Algebra::Particle(particle) => particle.fmt(f),
        }
    }
}
