use crate::{
    parser::{
        error::{kind, Error},
        token::{Float, Int, Name, Scientific, Superscript as SuperscriptToken},
        Parse,
        Parser,
    },
    tokenizer::TokenKind,
};
use std::{fmt, ops::Range};

/// The superscript digits, in order of increasing value.
pub const SUPERSCRIPT_DIGITS: [char; 10] = ['⁰', '¹', '²', '³', '⁴', '⁵', '⁶', '⁷', '⁸', '⁹'];

/// The superscript minus sign, used in negative powers of ten.
pub const SUPERSCRIPT_MINUS: char = '⁻';

/// Converts a string of superscript digits into its value. Returns [`None`] if the string
/// contains anything other than superscript digits, or if the value does not fit in a [`u32`].
pub fn from_superscript(s: &str) -> Option<u32> {
    if s.is_empty() {
        return None;
    }

    s.chars().try_fold(0u32, |acc, c| {
        let digit = SUPERSCRIPT_DIGITS.iter().position(|&d| d == c)?;
        acc.checked_mul(10)?.checked_add(digit as u32)
    })
}

/// Writes the given integer using superscript digits.
pub fn to_superscript(n: impl fmt::Display) -> String {
    n.to_string()
        .chars()
        .map(|c| match c.to_digit(10) {
            Some(digit) => SUPERSCRIPT_DIGITS[digit as usize],
            None if c == '-' => SUPERSCRIPT_MINUS,
            None => c,
        })
        .collect()
}

/// A number literal, such as `16`, `2.68`, or `3.0*10⁷`.
///
/// The digits are kept as strings so that the literal can be reproduced exactly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LitNum {
    /// The digits before the decimal point.
    pub integer: String,

    /// The digits after the decimal point, if there is one.
    pub decimal: Option<String>,

    /// The power of ten, if the literal is written in scientific notation.
    pub sci_exponent: Option<i32>,

    /// The region of the source code that this literal was parsed from.
    pub span: Range<usize>,
}

impl LitNum {
    /// Returns the span of the number literal.
    pub fn span(&self) -> Range<usize> {
        self.span.clone()
    }

    /// Returns true if the literal is written without a decimal point or a power of ten.
    pub fn is_whole(&self) -> bool {
        self.decimal.is_none() && self.sci_exponent.is_none()
    }

    /// Splits a plain decimal lexeme, such as `2.68`, into its integer and decimal digits.
    fn split_decimal(lexeme: &str) -> (String, Option<String>) {
        match lexeme.split_once('.') {
            Some((integer, decimal)) => (integer.to_owned(), Some(decimal.to_owned())),
            None => (lexeme.to_owned(), None),
        }
    }
}

impl Parse for LitNum {
    fn parse(input: &mut Parser) -> Result<Self, Error> {
        if let Ok(int) = input.try_parse::<Int>() {
            return Ok(Self { integer: int.lexeme, decimal: None, sci_exponent: None, span: int.span });
        }

        if let Ok(float) = input.try_parse::<Float>() {
            let (integer, decimal) = Self::split_decimal(&float.lexeme);
            return Ok(Self { integer, decimal, sci_exponent: None, span: float.span });
        }

        let sci = input.try_parse::<Scientific>().map_err(|_| {
            input.error(kind::UnexpectedToken {
                expected: &[TokenKind::Int, TokenKind::Float, TokenKind::Scientific],
                found: input.peek_kind().unwrap_or(TokenKind::Unknown),
            })
        })?;

        // the lexeme is guaranteed to look like `<mantissa>*10<superscript>` by the tokenizer
        let (mantissa, power) = sci.lexeme.split_once("*10").unwrap_or((sci.lexeme.as_str(), ""));
        let (negative, digits) = match power.strip_prefix(SUPERSCRIPT_MINUS) {
            Some(digits) => (true, digits),
            None => (false, power),
        };
        let sci_exponent = from_superscript(digits)
            .and_then(|value| i32::try_from(value).ok())
            .map(|value| if negative { -value } else { value })
            .ok_or_else(|| Error::new(vec![sci.span.clone()], kind::ExponentTooLarge))?;

        let (integer, decimal) = Self::split_decimal(mantissa);
        Ok(Self { integer, decimal, sci_exponent: Some(sci_exponent), span: sci.span })
    }
}

impl std::fmt::Display for LitNum {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.integer)?;
        if let Some(decimal) = &self.decimal {
            write!(f, ".{}", decimal)?;
        }
        if let Some(power) = self.sci_exponent {
            write!(f, "*10{}", to_superscript(power))?;
        }
        Ok(())
    }
}

/// A variable, such as `x`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LitSym {
    /// The letter naming the variable.
    pub name: char,

    /// The region of the source code that this literal was parsed from.
    pub span: Range<usize>,
}

impl LitSym {
    /// Returns the span of the variable.
    pub fn span(&self) -> Range<usize> {
        self.span.clone()
    }
}

impl Parse for LitSym {
    fn parse(input: &mut Parser) -> Result<Self, Error> {
        let name = input.try_parse::<Name>()?;
        let letter = name.lexeme.chars().next().ok_or_else(|| {
            Error::new(vec![name.span.clone()], kind::UnexpectedToken {
                expected: &[TokenKind::Name],
                found: TokenKind::Unknown,
            })
        })?;
        Ok(Self { name: letter, span: name.span })
    }
}

impl std::fmt::Display for LitSym {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

/// An exponent written in superscript digits, such as the `²` in `x²`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Superscript {
    /// The value of the exponent.
    pub value: u32,

    /// The region of the source code that this exponent was parsed from.
    pub span: Range<usize>,
}

impl Parse for Superscript {
    fn parse(input: &mut Parser) -> Result<Self, Error> {
        let token = input.try_parse::<SuperscriptToken>()?;
        let value = from_superscript(&token.lexeme)
            .ok_or_else(|| Error::new(vec![token.span.clone()], kind::ExponentTooLarge))?;
        Ok(Self { value, span: token.span })
    }
}

impl std::fmt::Display for Superscript {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", to_superscript(self.value))
    }
}
