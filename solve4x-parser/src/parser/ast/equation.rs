use crate::{
    parser::{
        ast::expr::Expr,
        error::{kind, Error},
        token::Eq as EqToken,
        Parse,
        Parser,
    },
    tokenizer::TokenKind,
};
use std::{fmt, ops::Range};

/// An equation, such as `2x+3=7`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Equation {
    /// The left-hand side.
    pub lhs: Expr,

    /// The right-hand side.
    pub rhs: Expr,

    /// The region of the source code that this equation was parsed from.
    pub span: Range<usize>,
}

impl Equation {
    /// Returns the span of the equation.
    pub fn span(&self) -> Range<usize> {
        self.span.clone()
    }
}

impl std::fmt::Display for Equation {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}={}", self.lhs, self.rhs)
    }
}

/// A complete input: either an equation or a single expression.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Algebra {
    /// An expression with no equals sign.
    Expr(Expr),

    /// An equation.
    Equation(Equation),
}

impl Algebra {
    /// Returns the span of the input.
    pub fn span(&self) -> Range<usize> {
        match self {
            Algebra::Expr(expr) => expr.span(),
            Algebra::Equation(equation) => equation.span(),
        }
    }
}

impl Parse for Algebra {
    fn parse(input: &mut Parser) -> Result<Self, Error> {
        let lhs = input.try_parse::<Expr>()?;
        if input.peek_kind() != Some(TokenKind::Eq) {
            return Ok(Self::Expr(lhs));
        }

        let eq = input.try_parse::<EqToken>()?;
        let rhs = input.try_parse::<Expr>()?;
        if input.peek_kind() == Some(TokenKind::Eq) {
            let another = input.span();
            return Err(Error::new(vec![eq.span, another], kind::ChainedEquation));
        }

        let span = lhs.span().start..rhs.span().end;
        Ok(Self::Equation(Equation { lhs, rhs, span }))
    }
}

impl std::fmt::Display for Algebra {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Algebra::Expr(expr) => expr.fmt(f),
            Algebra::Equation(equation) => equation.fmt(f),
        }
    }
}
