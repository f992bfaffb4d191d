use logos::Logos;
use std::ops::Range;

/// The different kinds of tokens that can be produced by the tokenizer.
#[derive(Logos, Clone, Copy, Debug, PartialEq, Eq)]
pub enum TokenKind {
    #[regex(r"[ \t\n\r]+")]
    Whitespace,

    #[token("=")]
    Eq,

    #[token("+")]
    Add,

    #[token("-")]
    #[token("−")]
    Sub,

    #[token("*")]
    #[token("·")]
    #[token("×")]
    Mul,

    #[token("/")]
    Div,

    #[token("√")]
    Radical,

    /// A number in scientific notation, such as `3.0*10⁷` or `4*10⁻²`.
    #[regex(r"[0-9]+(\.[0-9]+)?\*10⁻?[⁰¹²³⁴⁵⁶⁷⁸⁹]+")]
    Scientific,

    #[regex(r"[0-9]+\.[0-9]+")]
    Float,

    #[regex(r"[0-9]+")]
    Int,

    #[regex(r"[⁰¹²³⁴⁵⁶⁷⁸⁹]+")]
    Superscript,

    /// A variable. Variables are always a single letter, so `xy` is two variables.
    #[regex(r"[a-zA-Z]")]
    Name,

    #[token("(")]
    OpenParen,

    #[token(")")]
    CloseParen,

    #[token("[")]
    OpenSquare,

    #[token("]")]
    CloseSquare,

    /// A character that is not part of the notation. This is never produced by the lexer itself;
    /// [`tokenize_complete`](super::tokenize_complete) emits it for unrecognized input so that
    /// the parser can report it.
    Unknown,
}

/// A token produced by the tokenizer.
#[derive(Debug, Clone, PartialEq)]
pub struct Token<'source> {
    /// The region of the source code that this token originated from.
    pub span: Range<usize>,

    /// The kind of token.
    pub kind: TokenKind,

    /// The raw lexeme that was parsed into this token.
    pub lexeme: &'source str,
}

impl Token<'_> {
    /// Returns true if the token represents whitespace.
    pub fn is_whitespace(&self) -> bool {
        self.kind == TokenKind::Whitespace
    }
}
