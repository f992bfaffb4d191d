use crate::{
    parser::{ast::{expr::Expr, product::Product}, error::Error, Parser},
    tokenizer::TokenKind,
};
use std::{fmt, ops::Range};

/// The sign written in front of a term.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sign {
    /// `+`
    Pos,

    /// `-`
    Neg,
}

impl Sign {
    /// Returns the sign for the given token kind, if it is `+` or `-`.
    fn from_kind(kind: TokenKind) -> Option<Self> {
        match kind {
            TokenKind::Add => Some(Self::Pos),
            TokenKind::Sub => Some(Self::Neg),
            _ => None,
        }
    }
}

impl std::fmt::Display for Sign {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::Pos => write!(f, "+"),
            Self::Neg => write!(f, "-"),
        }
    }
}

/// A term with a sign written in front of it, such as `-x` or `-(3+2)²`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Unary {
    /// The sign.
    pub sign: Sign,

    /// The signed term.
    pub operand: Box<Expr>,

    /// The region of the source code that this term was parsed from.
    pub span: Range<usize>,
}

impl Unary {
    /// Returns the span of the signed term.
    pub fn span(&self) -> Range<usize> {
        self.span.clone()
    }
}

impl std::fmt::Display for Unary {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}{}", self.sign, self.operand)
    }
}

/// Terms that are added together, such as `2x+4y²-6`. Subtracted terms are stored as
/// [`Unary`] terms with a negative sign.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sum {
    /// The terms, in the order they were written. There are always at least two.
    pub terms: Vec<Expr>,

    /// The region of the source code that this sum was parsed from.
    pub span: Range<usize>,
}

impl Sum {
    /// Returns the span of the sum.
    pub fn span(&self) -> Range<usize> {
        self.span.clone()
    }

    /// Parses a term, applying the given sign (if any) to it.
    fn parse_signed_term(input: &mut Parser, sign: Option<(Sign, Range<usize>)>) -> Result<Expr, Error> {
        let term = Product::parse_or_lower(input)?;
        Ok(match sign {
            Some((sign, sign_span)) => {
                let span = sign_span.start..term.span().end;
                Expr::Unary(Unary { sign, operand: Box::new(term), span })
            },
            None => term,
        })
    }

    /// Parses the next `+` or `-` sign, if there is one.
    fn parse_sign(input: &mut Parser) -> Result<Option<(Sign, Range<usize>)>, Error> {
        match input.peek_kind().and_then(Sign::from_kind) {
            Some(sign) => {
                let token = input.next_token()?;
                Ok(Some((sign, token.span)))
            },
            None => Ok(None),
        }
    }

    /// Parses one or more signed terms. A single term is returned as is.
    pub fn parse_or_lower(input: &mut Parser) -> Result<Expr, Error> {
        let sign = Self::parse_sign(input)?;
        let mut terms = vec![Self::parse_signed_term(input, sign)?];

        while let Some((sign, sign_span)) = Self::parse_sign(input)? {
            // a `+` between terms is only a separator
            let sign = (sign == Sign::Neg).then_some((sign, sign_span));
            terms.push(Self::parse_signed_term(input, sign)?);
        }

        if terms.len() == 1 {
            return Ok(terms.remove(0));
        }

        let span = terms[0].span().start..terms[terms.len() - 1].span().end;
        Ok(Expr::Sum(Self { terms, span }))
    }
}

impl std::fmt::Display for Sum {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for (i, term) in self.terms.iter().enumerate() {
            let negated = matches!(term, Expr::Unary(Unary { sign: Sign::Neg, .. }));
            if i > 0 && !negated {
                write!(f, "+")?;
            }
            write!(f, "{}", term)?;
        }
        Ok(())
    }
}
