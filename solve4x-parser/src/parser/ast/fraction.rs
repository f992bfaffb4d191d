use crate::parser::{
    ast::{expr::Expr, literal::LitNum, sum::Unary},
    error::{kind, Error},
    token::{CloseParen, Div, Int, OpenParen},
    Parse,
    Parser,
};
use std::{fmt, ops::Range};

/// A fraction, such as `(1)/(3)` or `(x+1)/(2)`. Both parts are always written in parentheses.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fraction {
    /// The numerator.
    pub top: Box<Expr>,

    /// The denominator.
    pub bottom: Box<Expr>,

    /// The region of the source code that this fraction was parsed from.
    pub span: Range<usize>,
}

impl Fraction {
    /// Returns the span of the fraction.
    pub fn span(&self) -> Range<usize> {
        self.span.clone()
    }

    /// Returns true if both parts of the fraction are number literals, optionally negated.
    pub fn is_numeric(&self) -> bool {
        fn numeric(expr: &Expr) -> bool {
            match expr {
                Expr::Literal(_) => true,
                Expr::Unary(Unary { operand, .. }) => matches!(**operand, Expr::Literal(_)),
                _ => false,
            }
        }

        numeric(&self.top) && numeric(&self.bottom)
    }

    /// Parses one parenthesized part of the fraction.
    fn parse_part(input: &mut Parser) -> Result<(Expr, Range<usize>), Error> {
        let open_paren = input.try_parse::<OpenParen>()?;
        let expr = input.try_parse::<Expr>()?;
        let close_paren = input.try_parse::<CloseParen>().map_err(|_| {
            Error::new(vec![open_paren.span.clone()], kind::UnclosedParenthesis { opening: true })
        })?;
        Ok((expr, open_paren.span.start..close_paren.span.end))
    }
}

impl Parse for Fraction {
    fn parse(input: &mut Parser) -> Result<Self, Error> {
        let (top, top_span) = Self::parse_part(input)?;
        input.try_parse::<Div>()?;
        let (bottom, bottom_span) = Self::parse_part(input)?;

        Ok(Self {
            top: Box::new(top),
            bottom: Box::new(bottom),
            span: top_span.start..bottom_span.end,
        })
    }
}

impl std::fmt::Display for Fraction {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "({})/({})", self.top, self.bottom)
    }
}

/// A mixed number, such as `2(1)/(4)`: a whole number immediately followed by a fraction whose
/// parts are number literals.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MixedNumber {
    /// The whole number part.
    pub numeral: LitNum,

    /// The fractional part.
    pub fraction: Fraction,

    /// The region of the source code that this mixed number was parsed from.
    pub span: Range<usize>,
}

impl MixedNumber {
    /// Returns the span of the mixed number.
    pub fn span(&self) -> Range<usize> {
        self.span.clone()
    }
}

impl Parse for MixedNumber {
    fn parse(input: &mut Parser) -> Result<Self, Error> {
        let int = input.try_parse::<Int>()?;
        let fraction = input.try_parse_then::<Fraction, _>(|fraction, input| {
            if fraction.is_numeric() {
                Ok(())
            } else {
                Err(input.error(kind::NonFatal))
            }
        })?;

        let span = int.span.start..fraction.span.end;
        Ok(Self {
            numeral: LitNum { integer: int.lexeme, decimal: None, sci_exponent: None, span: int.span },
            fraction,
            span,
        })
    }
}

impl std::fmt::Display for MixedNumber {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}{}", self.numeral, self.fraction)
    }
}
