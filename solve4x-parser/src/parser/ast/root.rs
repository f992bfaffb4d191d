use crate::parser::{
    ast::expr::Expr,
    error::{kind, Error},
    token::{CloseSquare, Int, OpenSquare, Radical},
    Parse,
    Parser,
};
use crate::tokenizer::TokenKind;
use std::{fmt, ops::Range};

/// A radical, such as `√(x)` or `√[3](8)`. The radicand is written directly after the radical
/// sign (or after the index, if there is one).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Root {
    /// The index of the root, if it was written. The square root is assumed otherwise.
    pub index: Option<u32>,

    /// The radicand.
    pub radicand: Box<Expr>,

    /// The region of the source code that this radical was parsed from.
    pub span: Range<usize>,
}

impl Root {
    /// Returns the span of the radical.
    pub fn span(&self) -> Range<usize> {
        self.span.clone()
    }

    /// Parses the `[n]` index following the radical sign.
    fn parse_index(input: &mut Parser) -> Result<u32, Error> {
        input.try_parse::<OpenSquare>()?;
        let int = input.try_parse::<Int>()?;
        let index = int.lexeme.parse::<u32>()
            .ok()
            .filter(|&index| index >= 2)
            .ok_or_else(|| Error::new(vec![int.span.clone()], kind::InvalidRootIndex))?;
        input.try_parse::<CloseSquare>()?;
        Ok(index)
    }
}

impl Parse for Root {
    fn parse(input: &mut Parser) -> Result<Self, Error> {
        let radical = input.try_parse::<Radical>()?;
        let index = if input.peek_kind() == Some(TokenKind::OpenSquare) {
            Some(Self::parse_index(input)?)
        } else {
            None
        };
        let radicand = Expr::parse_atom(input)?;
        let span = radical.span.start..radicand.span().end;

        Ok(Self { index, radicand: Box::new(radicand), span })
    }
}

impl std::fmt::Display for Root {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "√")?;
        if let Some(index) = self.index {
            write!(f, "[{}]", index)?;
        }
        write!(f, "{}", self.radicand)
    }
}
