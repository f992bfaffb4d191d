//! Conversion from the parser's syntax tree into the value model.

use solve4x_parser::parser::{
    ast::{
        equation::Algebra as AstAlgebra,
        expr::Expr as AstExpr,
        literal::LitNum,
        sum::Sign,
    },
    error::Error,
    Parser,
};
use super::{
    Algebra,
    Equation,
    Expression,
    Fraction,
    Level,
    MixedNumber,
    Number,
    Particle,
    Root,
    Term,
    Variable,
};

impl From<&LitNum> for Number {
    fn from(literal: &LitNum) -> Self {
        Number::new(true, literal.integer.clone(), literal.decimal.clone(), literal.sci_exponent, 1)
    }
}

/// Parentheses disappear, a leading `-` negates the particle it applies to, and an exponent
/// written on a negative or already-powered particle wraps it in a single-factor [`Term`], so
/// that `(-x)²` is not confused with `-x²`.
impl From<&AstExpr> for Particle {
    fn from(expr: &AstExpr) -> Self {
        match expr {
            AstExpr::Literal(literal) => Particle::Number(literal.into()),
            AstExpr::Symbol(symbol) => Particle::Variable(Variable::new(true, symbol.name, 1)),
            AstExpr::Fraction(fraction) => Particle::Fraction(Fraction::new(
                true,
                Particle::from(&*fraction.top),
                Particle::from(&*fraction.bottom),
                1,
            )),
            AstExpr::Mixed(mixed) => Particle::MixedNumber(MixedNumber::new(
                true,
                Number::from(&mixed.numeral),
                Fraction::new(
                    true,
                    Particle::from(&*mixed.fraction.top),
                    Particle::from(&*mixed.fraction.bottom),
                    1,
                ),
                1,
            )),
            AstExpr::Root(root) => Particle::Root(Root::new(
                true,
                root.index.unwrap_or(2),
                Particle::from(&*root.radicand),
                1,
            )),
            AstExpr::Paren(paren) => Particle::from(&*paren.expr),
            AstExpr::Power(power) => {
                let base = Particle::from(&*power.base);
                let exponent = power.exponent.value;
                if base.sign() && base.exponent() == 1 {
                    base.with_exponent(exponent)
                } else {
                    Particle::Term(Term::new(true, vec![base], exponent))
                }
            },
            AstExpr::Product(product) => Particle::Term(Term::new(
                true,
                product.factors.iter().map(Particle::from).collect(),
                1,
            )),
            AstExpr::Unary(unary) => {
                let operand = Particle::from(&*unary.operand);
                match unary.sign {
                    Sign::Pos => operand,
                    Sign::Neg => operand.negate(),
                }
            },
            AstExpr::Sum(sum) => Particle::Expression(Expression::new(
                true,
                sum.terms.iter().map(Particle::from).collect(),
                1,
            )),
        }
    }
}

impl From<&AstAlgebra> for Algebra {
    fn from(algebra: &AstAlgebra) -> Self {
        match algebra {
            AstAlgebra::Expr(expr) => Algebra::Particle(expr.into()),
            AstAlgebra::Equation(equation) => Algebra::Equation(Equation::new(
                (&equation.lhs).into(),
                (&equation.rhs).into(),
            )),
        }
    }
}

/// Parses the input into an algebraic value.
pub fn parse(input: &str) -> Result<Algebra, Error> {
    let mut parser = Parser::new(input);
    let ast = parser.try_parse_full::<AstAlgebra>()?;
    Ok(Algebra::from(&ast))
}

/// Returns true if the whole input parses into a value of the given level.
pub fn parsable(input: &str, level: Level) -> bool {
    parse(input).map_or(false, |algebra| algebra.level() == level)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use super::*;

    fn x() -> Particle {
        Particle::Variable(Variable::new(true, 'x', 1))
    }

    fn num(digits: &str) -> Particle {
        Particle::Number(Number::whole(true, digits))
    }

    #[test]
    fn parentheses_are_transparent() {
        assert_eq!(parse("((x))").unwrap(), Algebra::Particle(x()));
    }

    #[test]
    fn exponent_on_plain_particle() {
        assert_eq!(
            parse("x²").unwrap(),
            Algebra::Particle(Particle::Variable(Variable::new(true, 'x', 2))),
        );
    }

    #[test]
    fn exponent_on_negative_particle() {
        assert_eq!(
            parse("(-x)²").unwrap(),
            Algebra::Particle(Particle::Term(Term::new(true, vec![x().negate()], 2))),
        );
    }

    #[test]
    fn sign_outside_exponent() {
        assert_eq!(
            parse("-5²").unwrap(),
            Algebra::Particle(Particle::Number(Number::whole(false, "5").with_sign_and_exponent(false, 2))),
        );
    }

    #[test]
    fn sum_of_products() {
        assert_eq!(
            parse("2x-4").unwrap(),
            Algebra::Particle(Particle::Expression(Expression::new(true, vec![
                Particle::Term(Term::new(true, vec![num("2"), x()], 1)),
                num("4").negate(),
            ], 1))),
        );
    }

    #[test]
    fn equation_sides() {
        assert_eq!(
            parse("x=4").unwrap(),
            Algebra::Equation(Equation::new(x(), num("4"))),
        );
    }

    #[test]
    fn parsable_levels() {
        assert!(parsable("2.5", Level::Number));
        assert!(parsable("(1)/(3)", Level::Fraction));
        assert!(parsable("2(1)/(3)", Level::MixedNumber));
        assert!(parsable("x", Level::Variable));
        assert!(parsable("2x", Level::Term));
        assert!(parsable("2x+1", Level::Expression));
        assert!(parsable("√(x)", Level::Root));
        assert!(parsable("x=1", Level::Equation));
        assert!(!parsable("2x", Level::Expression));
        assert!(!parsable("2x+", Level::Expression));
    }
}
