use crate::{
    parser::{error::{kind, Error}, Parser, Parse},
    tokenizer::TokenKind,
};
use std::ops::Range;

/// Declares a type for each listed token kind, so that the parser can ask for a specific token
/// with [`Parser::try_parse`]. Parsing one consumes the next token and fails if it is of any
/// other kind.
macro_rules! token_kinds {
    ($($name:ident)*) => {
        $(
            #[derive(Clone, Debug, PartialEq)]
            pub(crate) struct $name {
                pub(crate) lexeme: String,
                pub(crate) span: Range<usize>,
            }

            impl Parse for $name {
                fn parse(input: &mut Parser) -> Result<Self, Error> {
                    let token = input.next_token()?;
                    match token.kind {
                        TokenKind::$name => Ok(Self { lexeme: token.lexeme.to_owned(), span: token.span }),
                        found => Err(Error::new(vec![token.span], kind::UnexpectedToken {
                            expected: &[TokenKind::$name],
                            found,
                        })),
                    }
                }
            }
        )*
    };
}

token_kinds!(Eq Div Radical Scientific Float Int Superscript Name OpenParen CloseParen OpenSquare CloseSquare);
