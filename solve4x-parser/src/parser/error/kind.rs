use ariadne::Fmt;
use solve4x_attrs::ErrorKind;
use solve4x_error::EXPR;
use crate::tokenizer::TokenKind;

/// The end of the source code was reached unexpectedly.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "unexpected end of input",
    labels = [format!("you might need to add another {} here", "term".fg(EXPR))],
)]
pub struct UnexpectedEof;

/// The end of the source code was expected, but something else was found.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "expected end of input",
    labels = [format!("I could not understand the remaining {} here", "input".fg(EXPR))],
)]
pub struct ExpectedEof;

/// An unexpected token was encountered.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "unexpected token",
    labels = [format!("expected one of: {}", expected.iter().map(|t| format!("{:?}", t)).collect::<Vec<_>>().join(", "))],
    help = format!("found {:?}", found),
)]
pub struct UnexpectedToken {
    /// The token(s) that were expected.
    pub expected: &'static [TokenKind],

    /// The token that was found.
    pub found: TokenKind,
}

/// A parenthesis was not closed, or a closing parenthesis has no matching opening one.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "unclosed parenthesis",
    labels = ["this parenthesis"],
    help = if *opening {
        "add a closing parenthesis `)` somewhere after this"
    } else {
        "add an opening parenthesis `(` somewhere before this"
    },
)]
pub struct UnclosedParenthesis {
    /// Whether the parenthesis was an opening parenthesis `(`. Otherwise, the parenthesis was a
    /// closing parenthesis `)`.
    pub opening: bool,
}

/// An exponent or power of ten does not fit in the supported range.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "exponent is too large",
    labels = ["this exponent"],
    help = format!("exponents can be at most {}", u32::MAX.to_string().fg(EXPR)),
)]
pub struct ExponentTooLarge;

/// The index of a radical is not a whole number greater than one.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "invalid index for a radical",
    labels = ["this index"],
    help = format!("the index must be a whole number of at least {}", "2".fg(EXPR)),
)]
pub struct InvalidRootIndex;

/// An equation contained more than one `=`.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "too many equals signs",
    labels = ["the first `=`", "another `=`"],
    help = "an equation has exactly two sides",
)]
pub struct ChainedEquation;

/// An intentionally useless error. This should only be used for errors that another parsing
/// alternative is expected to recover from, as it contains no useful information.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "an internal non-fatal error occurred while parsing",
    labels = ["here"],
    help = "you should never see this error; please report this as a bug"
)]
pub struct NonFatal;
