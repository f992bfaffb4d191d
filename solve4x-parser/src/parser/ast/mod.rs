//! The abstract syntax tree produced by the [`Parser`](super::Parser).
//!
//! The tree mirrors the source closely: parentheses are kept as [`paren::Paren`] nodes and every
//! node records the span it was parsed from. Converting the tree into a form suitable for
//! algebraic manipulation is left to the consumer.

pub mod equation;
pub mod expr;
pub mod fraction;
pub mod literal;
pub mod paren;
pub mod power;
pub mod product;
pub mod root;
pub mod sum;
