use crate::parser::{
    ast::expr::Expr,
    error::{kind, Error},
    token::{CloseParen, OpenParen},
    Parse,
    Parser,
};
use std::{fmt, ops::Range};

/// A group in parentheses, such as `(x+4)` in `2(x+4)`.
///
/// Groups only affect how the input is read; the value model has no node for them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Paren {
    /// The grouped expression.
    pub expr: Box<Expr>,

    /// The region of the source code covered by the group, parentheses included.
    pub span: Range<usize>,
}

impl Paren {
    pub fn span(&self) -> Range<usize> {
        self.span.clone()
    }
}

impl Parse for Paren {
    fn parse(input: &mut Parser) -> Result<Self, Error> {
        let open = input.try_parse::<OpenParen>()?;
        let expr = input.try_parse::<Expr>()?;

        // point at the opening parenthesis, since the closing one is missing
        let Ok(close) = input.try_parse::<CloseParen>() else {
            return Err(Error::new(vec![open.span], kind::UnclosedParenthesis { opening: true }));
        };

        Ok(Self {
            expr: Box::new(expr),
            span: open.span.start..close.span.end,
        })
    }
}

impl std::fmt::Display for Paren {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "({})", self.expr)
    }
}
