use crate::{
    parser::{
        ast::{expr::Expr, literal::Superscript},
        error::Error,
        Parser,
    },
    tokenizer::TokenKind,
};
use std::{fmt, ops::Range};

/// An atom raised to a superscript exponent, such as `x²` or `(5+x)²`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Power {
    /// The base of the power.
    pub base: Box<Expr>,

    /// The exponent.
    pub exponent: Superscript,

    /// The region of the source code that this power was parsed from.
    pub span: Range<usize>,
}

impl Power {
    /// Returns the span of the power.
    pub fn span(&self) -> Range<usize> {
        self.span.clone()
    }

    /// Parses an atom, followed by an optional exponent. If there is no exponent, the atom is
    /// returned as is.
    pub fn parse_or_lower(input: &mut Parser) -> Result<Expr, Error> {
        let base = Expr::parse_atom(input)?;
        if input.peek_kind() != Some(TokenKind::Superscript) {
            return Ok(base);
        }

        let exponent = input.try_parse::<Superscript>()?;
        let span = base.span().start..exponent.span.end;
        Ok(Expr::Power(Self { base: Box::new(base), exponent, span }))
    }
}

impl std::fmt::Display for Power {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}{}", self.base, self.exponent)
    }
}
