use crate::{
    parser::{ast::{expr::Expr, power::Power}, error::Error, Parser},
    tokenizer::TokenKind,
};
use std::{fmt, ops::Range};

/// Factors that are multiplied together, such as `2xy`, `x(y-4)`, or `2*(2)/(3)`.
///
/// Multiplication is usually implicit; an explicit `*` may be written between any two factors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Product {
    /// The factors, in the order they were written. There are always at least two.
    pub factors: Vec<Expr>,

    /// The region of the source code that this product was parsed from.
    pub span: Range<usize>,
}

impl Product {
    /// Returns the span of the product.
    pub fn span(&self) -> Range<usize> {
        self.span.clone()
    }

    /// Parses one or more factors. A single factor is returned as is.
    pub fn parse_or_lower(input: &mut Parser) -> Result<Expr, Error> {
        let mut factors = vec![Power::parse_or_lower(input)?];

        loop {
            match input.peek_kind() {
                Some(TokenKind::Mul) => {
                    input.next_token()?;
                    factors.push(Power::parse_or_lower(input)?);
                },
                Some(kind) if Expr::starts_atom(kind) => factors.push(Power::parse_or_lower(input)?),
                _ => break,
            }
        }

        if factors.len() == 1 {
            return Ok(factors.remove(0));
        }

        let span = factors[0].span().start..factors[factors.len() - 1].span().end;
        Ok(Expr::Product(Self { factors, span }))
    }
}

impl std::fmt::Display for Product {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for (i, factor) in self.factors.iter().enumerate() {
            // `2*2` must not be written as `22`
            if i > 0 && factor.starts_with_digit() {
                write!(f, "*")?;
            }
            write!(f, "{}", factor)?;
        }
        Ok(())
    }
}
