//! Tokenizer and parser for the textual algebra notation used by solve4x.
//!
//! The notation is designed to be typed and read by students:
//!
//! - implicit multiplication (`2xy`), with an optional explicit `*` (`2*(2)/(3)`)
//! - fractions with both parts in parentheses (`(1)/(3)`)
//! - mixed numbers written as a whole number followed by a fraction (`2(1)/(4)`)
//! - superscript exponents (`y²`, `(5+x)²`) and scientific notation (`3.0*10⁷`)
//! - radicals with an optional index (`√(x)`, `√[3](8)`)
//!
//! The [`parser::Parser`] produces the abstract syntax tree found in [`parser::ast`], which keeps
//! the source spans of every node for error reporting.

pub mod parser;
pub mod tokenizer;
