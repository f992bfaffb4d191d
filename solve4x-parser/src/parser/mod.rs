pub mod ast;
pub mod error;
pub(crate) mod token;

use error::{Error, kind};
use solve4x_error::ErrorKind;
use super::tokenizer::{tokenize_complete, Token, TokenKind};
use std::ops::Range;

/// A high-level parser for the notation. This is the type to use to parse an arbitrary piece of
/// input into an abstract syntax tree.
#[derive(Debug, Clone)]
pub struct Parser<'source> {
    /// The tokens that this parser is currently parsing.
    tokens: Box<[Token<'source>]>,

    /// The index of the **next** token to be parsed.
    cursor: usize,
}

impl<'source> Parser<'source> {
    /// Create a new parser for the given source.
    pub fn new(source: &'source str) -> Self {
        Self {
            tokens: tokenize_complete(source),
            cursor: 0,
        }
    }

    /// Creates an error that points at the current token, or the end of the source code if the
    /// cursor is at the end of the stream.
    pub fn error(&self, kind: impl ErrorKind + 'static) -> Error {
        Error::new(vec![self.span()], kind)
    }

    /// Returns a span pointing at the end of the source code.
    pub fn eof_span(&self) -> Range<usize> {
        self.tokens.last().map_or(0..0, |token| token.span.end..token.span.end)
    }

    /// Returns the span of the current token, or the end of the source code if the cursor is at
    /// the end of the stream. Whitespace is skipped.
    pub fn span(&self) -> Range<usize> {
        self.tokens[self.cursor.min(self.tokens.len())..]
            .iter()
            .find(|token| !token.is_whitespace())
            .map_or(self.eof_span(), |token| token.span.clone())
    }

    /// Returns the span of the last consumed token, or an empty span at the start of the source
    /// if nothing has been consumed yet.
    pub fn prev_span(&self) -> Range<usize> {
        self.cursor
            .checked_sub(1)
            .and_then(|index| self.tokens.get(index))
            .map_or(0..0, |token| token.span.clone())
    }

    /// Returns the kind of the next non-whitespace token without moving the cursor. Returns
    /// [`None`] at the end of the stream.
    pub fn peek_kind(&self) -> Option<TokenKind> {
        self.tokens[self.cursor.min(self.tokens.len())..]
            .iter()
            .find(|token| !token.is_whitespace())
            .map(|token| token.kind)
    }

    /// Returns the next token to be parsed, then advances the cursor. Whitespace tokens are
    /// skipped.
    ///
    /// Returns an EOF error if there are no more tokens.
    pub fn next_token(&mut self) -> Result<Token<'source>, Error> {
        while self.cursor < self.tokens.len() {
            let token = &self.tokens[self.cursor];
            self.cursor += 1;
            if token.is_whitespace() {
                continue;
            } else {
                // cloning is cheap: only Range<_> is cloned
                return Ok(token.clone());
            }
        }

        Err(self.error(kind::UnexpectedEof))
    }

    /// Speculatively parses a value from the given stream of tokens. This function can be used
    /// in the [`Parse::parse`] implementation of a type with the given [`Parser`], as it will
    /// automatically backtrack the cursor position if parsing fails.
    ///
    /// If parsing is successful, the stream is advanced past the consumed tokens and the parsed
    /// value is returned. Otherwise, the stream is left unchanged and an error is returned.
    pub fn try_parse<T: Parse>(&mut self) -> Result<T, Error> {
        self.try_parse_with_fn(T::parse)
    }

    /// Speculatively parses a value from the given stream of tokens, using a custom parsing
    /// function to parse the value.
    ///
    /// If parsing is successful, the stream is advanced past the consumed tokens and the parsed
    /// value is returned. Otherwise, the stream is left unchanged and an error is returned.
    pub fn try_parse_with_fn<T, F>(&mut self, f: F) -> Result<T, Error>
    where
        F: FnOnce(&mut Parser<'source>) -> Result<T, Error>,
    {
        let start = self.cursor;
        match f(self) {
            Ok(value) => Ok(value),
            err => {
                self.cursor = start;
                err
            },
        }
    }

    /// Speculatively parses a value from the given stream of tokens, with a validation predicate.
    /// The value must parse successfully, **and** the predicate must return [`Ok`] for this
    /// function to return successfully.
    ///
    /// If parsing is successful, the stream is advanced past the consumed tokens and the parsed
    /// value is returned. Otherwise, the stream is left unchanged and an error is returned.
    pub fn try_parse_then<T: Parse, F>(&mut self, predicate: F) -> Result<T, Error>
    where
        F: FnOnce(&T, &Parser) -> Result<(), Error>,
    {
        self.try_parse_with_fn(|input| {
            let value = T::parse(input)?;
            predicate(&value, input)?;
            Ok(value)
        })
    }

    /// Attempts to parse a value from the given stream of tokens. All the tokens must be consumed
    /// by the parser; if not, an error is returned.
    pub fn try_parse_full<T: Parse>(&mut self) -> Result<T, Error> {
        let value = T::parse(self)?;
        match self.peek_kind() {
            None => Ok(value),
            Some(TokenKind::CloseParen) => Err(self.error(kind::UnclosedParenthesis { opening: false })),
            Some(_) => Err(self.error(kind::ExpectedEof)),
        }
    }
}

/// Any type that can be parsed from a source of tokens.
pub trait Parse: Sized {
    /// Parses a value from the given stream of tokens, advancing the stream past the consumed
    /// tokens if parsing is successful.
    ///
    /// This function should be used by consumers of the library.
    fn parse(input: &mut Parser) -> Result<Self, Error>;
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use super::*;

    use ast::{
        equation::{Algebra, Equation},
        expr::Expr,
        fraction::{Fraction, MixedNumber},
        literal::{LitNum, LitSym, Superscript},
        paren::Paren,
        power::Power,
        product::Product,
        root::Root,
        sum::{Sign, Sum, Unary},
    };

    fn num(value: &str, span: Range<usize>) -> Expr {
        Expr::Literal(lit(value, span))
    }

    fn lit(value: &str, span: Range<usize>) -> LitNum {
        let (integer, decimal) = match value.split_once('.') {
            Some((integer, decimal)) => (integer.to_owned(), Some(decimal.to_owned())),
            None => (value.to_owned(), None),
        };
        LitNum { integer, decimal, sci_exponent: None, span }
    }

    fn sym(name: char, at: usize) -> Expr {
        Expr::Symbol(LitSym { name, span: at..at + 1 })
    }

    #[test]
    fn literal_int() {
        let mut parser = Parser::new("16");
        let expr = parser.try_parse_full::<Expr>().unwrap();

        assert_eq!(expr, num("16", 0..2));
    }

    #[test]
    fn literal_scientific() {
        let mut parser = Parser::new("3.0*10⁷");
        let expr = parser.try_parse_full::<Expr>().unwrap();

        assert_eq!(expr, Expr::Literal(LitNum {
            integer: "3".to_owned(),
            decimal: Some("0".to_owned()),
            sci_exponent: Some(7),
            span: 0..9,
        }));
    }

    #[test]
    fn implicit_product() {
        let mut parser = Parser::new("2xy");
        let expr = parser.try_parse_full::<Expr>().unwrap();

        assert_eq!(expr, Expr::Product(Product {
            factors: vec![num("2", 0..1), sym('x', 1), sym('y', 2)],
            span: 0..3,
        }));
    }

    #[test]
    fn signed_sum() {
        let mut parser = Parser::new("-x+3");
        let expr = parser.try_parse_full::<Expr>().unwrap();

        assert_eq!(expr, Expr::Sum(Sum {
            terms: vec![
                Expr::Unary(Unary {
                    sign: Sign::Neg,
                    operand: Box::new(sym('x', 1)),
                    span: 0..2,
                }),
                num("3", 3..4),
            ],
            span: 0..4,
        }));
    }

    #[test]
    fn power_of_variable() {
        let mut parser = Parser::new("y²");
        let expr = parser.try_parse_full::<Expr>().unwrap();

        assert_eq!(expr, Expr::Power(Power {
            base: Box::new(sym('y', 0)),
            exponent: Superscript { value: 2, span: 1..3 },
            span: 0..3,
        }));
    }

    #[test]
    fn fraction() {
        let mut parser = Parser::new("(1)/(3)");
        let expr = parser.try_parse_full::<Expr>().unwrap();

        assert_eq!(expr, Expr::Fraction(Fraction {
            top: Box::new(num("1", 1..2)),
            bottom: Box::new(num("3", 5..6)),
            span: 0..7,
        }));
    }

    #[test]
    fn mixed_number() {
        let mut parser = Parser::new("2(1)/(4)");
        let expr = parser.try_parse_full::<Expr>().unwrap();

        assert_eq!(expr, Expr::Mixed(MixedNumber {
            numeral: lit("2", 0..1),
            fraction: Fraction {
                top: Box::new(num("1", 2..3)),
                bottom: Box::new(num("4", 6..7)),
                span: 1..8,
            },
            span: 0..8,
        }));
    }

    #[test]
    fn symbolic_fraction_after_number_is_a_product() {
        let mut parser = Parser::new("2(x)/(3)");
        let expr = parser.try_parse_full::<Expr>().unwrap();

        assert_eq!(expr, Expr::Product(Product {
            factors: vec![
                num("2", 0..1),
                Expr::Fraction(Fraction {
                    top: Box::new(sym('x', 2)),
                    bottom: Box::new(num("3", 6..7)),
                    span: 1..8,
                }),
            ],
            span: 0..8,
        }));
    }

    #[test]
    fn parenthesized_number_after_number() {
        let mut parser = Parser::new("2(1)");
        let expr = parser.try_parse_full::<Expr>().unwrap();

        assert_eq!(expr, Expr::Product(Product {
            factors: vec![
                num("2", 0..1),
                Expr::Paren(Paren { expr: Box::new(num("1", 2..3)), span: 1..4 }),
            ],
            span: 0..4,
        }));
    }

    #[test]
    fn explicit_multiplication() {
        let mut parser = Parser::new("2*2");
        let expr = parser.try_parse_full::<Expr>().unwrap();

        assert_eq!(expr, Expr::Product(Product {
            factors: vec![num("2", 0..1), num("2", 2..3)],
            span: 0..3,
        }));
    }

    #[test]
    fn decimal_coefficient() {
        let mut parser = Parser::new("2.3y");
        let expr = parser.try_parse_full::<Expr>().unwrap();

        assert_eq!(expr, Expr::Product(Product {
            factors: vec![num("2.3", 0..3), sym('y', 3)],
            span: 0..4,
        }));
    }

    #[test]
    fn root_with_index() {
        let mut parser = Parser::new("√[3](8)");
        let expr = parser.try_parse_full::<Expr>().unwrap();

        // `√` is three bytes long
        assert_eq!(expr, Expr::Root(Root {
            index: Some(3),
            radicand: Box::new(Expr::Paren(Paren { expr: Box::new(num("8", 7..8)), span: 6..9 })),
            span: 0..9,
        }));
    }

    #[test]
    fn equation() {
        let mut parser = Parser::new("x=4");
        let algebra = parser.try_parse_full::<Algebra>().unwrap();

        assert_eq!(algebra, Algebra::Equation(Equation {
            lhs: sym('x', 0),
            rhs: num("4", 2..3),
            span: 0..3,
        }));
    }

    #[test]
    fn whitespace_is_ignored() {
        let mut parser = Parser::new(" 2 x + 1 ");
        let expr = parser.try_parse_full::<Expr>().unwrap();
        assert_eq!(expr.to_string(), "2x+1");
    }

    #[test]
    fn display_round_trips_source() {
        for source in ["-(3+2+x)²", "2x+4y²-6-2.3y²-4x", "-5(1)/(4)", "2((3)/(xy+2))", "√[3](x)²"] {
            let mut parser = Parser::new(source);
            let expr = parser.try_parse_full::<Expr>().unwrap();
            assert_eq!(expr.to_string(), source);
        }
    }

    #[test]
    fn error_dangling_operator() {
        let mut parser = Parser::new("2x+");
        let err = parser.try_parse_full::<Expr>().unwrap_err();
        assert!(err.is::<kind::UnexpectedEof>());
    }

    #[test]
    fn error_unclosed_parenthesis() {
        let mut parser = Parser::new("2(x+1");
        let err = parser.try_parse_full::<Expr>().unwrap_err();
        assert_eq!(err.downcast_ref(), Some(&kind::UnclosedParenthesis { opening: true }));
        assert_eq!(err.spans, vec![1..2]);
    }

    #[test]
    fn error_extra_close_parenthesis() {
        let mut parser = Parser::new("2x)");
        let err = parser.try_parse_full::<Expr>().unwrap_err();
        assert_eq!(err.downcast_ref(), Some(&kind::UnclosedParenthesis { opening: false }));
    }

    #[test]
    fn error_chained_equation() {
        let mut parser = Parser::new("x=2=3");
        let err = parser.try_parse_full::<Algebra>().unwrap_err();
        assert!(err.is::<kind::ChainedEquation>());
        assert_eq!(err.spans, vec![1..2, 3..4]);
    }

    #[test]
    fn error_unknown_character() {
        let mut parser = Parser::new("2x#");
        let err = parser.try_parse_full::<Expr>().unwrap_err();
        assert!(err.is::<kind::ExpectedEof>());
    }

    #[test]
    fn error_exponent_overflow() {
        let mut parser = Parser::new("x⁹⁹⁹⁹⁹⁹⁹⁹⁹⁹⁹");
        let err = parser.try_parse_full::<Expr>().unwrap_err();
        assert!(err.is::<kind::ExponentTooLarge>());
    }
}
