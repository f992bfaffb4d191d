use ariadne::Fmt;
use solve4x_attrs::ErrorKind;
use solve4x_error::EXPR;

/// The requested mode does not accept the shape of the input.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = format!("cannot {} this input", mode),
    labels = [if *equation {
        format!("this is an {}", "equation".fg(EXPR))
    } else {
        format!("this has no {} sign", "=".fg(EXPR))
    }],
    help = if *equation {
        "only `solve` accepts an equation; use `--mode solve`"
    } else {
        "`solve` needs an equation such as `2x=4`"
    },
)]
pub struct ModeMismatch {
    /// The name of the requested mode.
    pub mode: &'static str,

    /// Whether the input was an equation.
    pub equation: bool,
}

/// An algorithm tried to add two particles that are not like terms.
///
/// This is never caused by the user's input. It means an algorithm was executed on a resource
/// that its own `smarts` should have rejected.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = format!("internal error: `{}` and `{}` cannot be combined", left, right),
    labels = [""],
    help = "this is a bug; please report it along with your input",
)]
pub struct NotCombinable {
    /// The rendered left operand.
    pub left: String,

    /// The rendered right operand.
    pub right: String,
}

/// An algorithm tried to multiply two particles that cannot be multiplied directly.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = format!("internal error: `{}` and `{}` cannot be multiplied", left, right),
    labels = [""],
    help = "this is a bug; please report it along with your input",
)]
pub struct NotMultipliable {
    /// The rendered left operand.
    pub left: String,

    /// The rendered right operand.
    pub right: String,
}

/// A rewritten sub-tree could not be spliced back into the tree it came from.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = format!("internal error: nothing to replace at path {:?} in `{}`", path, algebra),
    labels = [""],
    help = "this is a bug; please report it along with your input",
)]
pub struct InvalidSplice {
    /// The child-index path that was followed.
    pub path: Vec<usize>,

    /// The rendered tree that the path was followed into.
    pub algebra: String,
}

/// An algorithm was executed on a value it has nothing to do with.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = format!("internal error: `{}` does not apply to `{}`", algorithm, algebra),
    labels = [""],
    help = "this is a bug; please report it along with your input",
)]
pub struct NotApplicable {
    /// The name of the algorithm.
    pub algorithm: &'static str,

    /// The rendered value it was executed on.
    pub algebra: String,
}

/// Two operands combine into a value that is too large to represent: an exponent beyond
/// `u32::MAX`, a scientific exponent outside the range of `i32`, or a number with more digits
/// than [`MAX_DIGITS`](crate::arithmetic::MAX_DIGITS).
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = format!("`{}` and `{}` combine into a value too large to represent", left, right),
    labels = [""],
    help = "try the input with smaller exponents",
)]
pub struct TooLarge {
    /// The rendered left operand.
    pub left: String,

    /// The rendered right operand.
    pub right: String,
}
