use crate::{
    parser::{
        ast::{
            fraction::{Fraction, MixedNumber},
            literal::{LitNum, LitSym},
            paren::Paren,
            power::Power,
            product::Product,
            root::Root,
            sum::{Sum, Unary},
        },
        error::{kind, Error},
        Parse,
        Parser,
    },
    tokenizer::TokenKind,
};
use std::{fmt, ops::Range};

/// Represents a general expression in the notation: anything that can appear on one side of an
/// equation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expr {
    /// A number literal, such as `2.68`.
    Literal(LitNum),

    /// A variable, such as `x`.
    Symbol(LitSym),

    /// A fraction, such as `(1)/(3)`.
    Fraction(Fraction),

    /// A mixed number, such as `2(1)/(4)`.
    Mixed(MixedNumber),

    /// A radical, such as `√(x)`.
    Root(Root),

    /// A parenthesized expression, such as `(x+4)`.
    Paren(Paren),

    /// An atom with an exponent, such as `y²`.
    Power(Power),

    /// Implicitly or explicitly multiplied factors, such as `2xy`.
    Product(Product),

    /// A term with a leading sign, such as `-x`.
    Unary(Unary),

    /// Added and subtracted terms, such as `2x-4`.
    Sum(Sum),
}

/// The token kinds that can begin an atom.
const ATOM_START: &[TokenKind] = &[
    TokenKind::Int,
    TokenKind::Float,
    TokenKind::Scientific,
    TokenKind::Name,
    TokenKind::OpenParen,
    TokenKind::Radical,
];

impl Expr {
    /// Returns the span of the expression.
    pub fn span(&self) -> Range<usize> {
        match self {
            Expr::Literal(literal) => literal.span(),
            Expr::Symbol(symbol) => symbol.span(),
            Expr::Fraction(fraction) => fraction.span(),
            Expr::Mixed(mixed) => mixed.span(),
            Expr::Root(root) => root.span(),
            Expr::Paren(paren) => paren.span(),
            Expr::Power(power) => power.span(),
            Expr::Product(product) => product.span(),
            Expr::Unary(unary) => unary.span(),
            Expr::Sum(sum) => sum.span(),
        }
    }

    /// Returns true if a token of the given kind can begin an atom.
    pub fn starts_atom(kind: TokenKind) -> bool {
        ATOM_START.contains(&kind)
    }

    /// Returns true if the expression is written starting with a digit.
    pub fn starts_with_digit(&self) -> bool {
        match self {
            Expr::Literal(_) | Expr::Mixed(_) => true,
            Expr::Power(power) => power.base.starts_with_digit(),
            Expr::Product(product) => product.factors[0].starts_with_digit(),
            _ => false,
        }
    }

    /// Parses an atom: the smallest unit that an exponent can be attached to.
    ///
    /// The alternatives overlap, so they are tried in order: a mixed number before a plain
    /// number, and a fraction before a parenthesized expression.
    pub fn parse_atom(input: &mut Parser) -> Result<Self, Error> {
        match input.peek_kind() {
            None => return Err(input.error(kind::UnexpectedEof)),
            Some(TokenKind::CloseParen) => {
                return Err(input.error(kind::UnclosedParenthesis { opening: false }));
            },
            Some(found) if !Self::starts_atom(found) => {
                return Err(input.error(kind::UnexpectedToken { expected: ATOM_START, found }));
            },
            Some(_) => (),
        }

        input.try_parse::<MixedNumber>().map(Self::Mixed)
            .or_else(|_| input.try_parse::<Fraction>().map(Self::Fraction))
            .or_else(|_| input.try_parse::<LitNum>().map(Self::Literal))
            .or_else(|_| input.try_parse::<LitSym>().map(Self::Symbol))
            .or_else(|_| input.try_parse::<Root>().map(Self::Root))
            .or_else(|_| input.try_parse::<Paren>().map(Self::Paren))
    }
}

impl Parse for Expr {
    fn parse(input: &mut Parser) -> Result<Self, Error> {
        Sum::parse_or_lower(input)
    }
}

impl std::fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Expr::Literal(literal) => literal.fmt(f),
            Expr::Symbol(symbol) => symbol.fmt(f),
            Expr::Fraction(fraction) => fraction.fmt(f),
            Expr::Mixed(mixed) => mixed.fmt(f),
            Expr::Root(root) => root.fmt(f),
            Expr::Paren(paren) => paren.fmt(f),
            Expr::Power(power) => power.fmt(f),
            Expr::Product(product) => product.fmt(f),
            Expr::Unary(unary) => unary.fmt(f),
            Expr::Sum(sum) => sum.fmt(f),
        }
    }
}
