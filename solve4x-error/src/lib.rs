//! Contains the common [`ErrorKind`] trait used by all errors to display user-facing error
//! messages, and the [`Error`] type that associates an [`ErrorKind`] with regions of the input.

// lets the `ErrorKind` derive refer to this crate by name, including in this crate's own tests
extern crate self as solve4x_error;

use ariadne::{Color, Report, Source};
use std::{any::Any, fmt::Debug, io, ops::Range};

/// The color to use to highlight expressions.
pub const EXPR: Color = Color::RGB(52, 235, 152);

/// Represents any kind of error that can occur during some operation.
pub trait ErrorKind: Debug + Send {
    /// Returns the error kind as [`Any`], so that callers can recover the concrete kind.
    fn as_any(&self) -> &dyn Any;

    /// Builds the report for this error.
    fn build_report<'a>(
        &self,
        src_id: &'a str,
        spans: &[Range<usize>],
    ) -> Report<(&'a str, Range<usize>)>;
}

/// An error associated with regions of source code that can be highlighted.
///
/// Errors raised while searching for a solution may have no spans, since the algebra they refer
/// to may no longer resemble the user's input. Their reports point at the start of the input.
#[derive(Debug)]
pub struct Error {
    /// The regions of the source code that this error originated from.
    pub spans: Vec<Range<usize>>,

    /// The kind of error that occurred.
    pub kind: Box<dyn ErrorKind>,
}

impl Error {
    /// Creates a new error with the given spans and kind.
    pub fn new(spans: Vec<Range<usize>>, kind: impl ErrorKind + 'static) -> Self {
        Self { spans, kind: Box::new(kind) }
    }

    /// Creates a new error that is not associated with any region of the input.
    pub fn unspanned(kind: impl ErrorKind + 'static) -> Self {
        Self::new(Vec::new(), kind)
    }

    /// Returns the kind of this error as `K`, if it is one.
    pub fn downcast_ref<K: ErrorKind + 'static>(&self) -> Option<&K> {
        self.kind.as_any().downcast_ref::<K>()
    }

    /// Returns true if the kind of this error is `K`.
    pub fn is<K: ErrorKind + 'static>(&self) -> bool {
        self.downcast_ref::<K>().is_some()
    }

    /// Build a report from this error kind.
    pub fn build_report<'a>(&self, src_id: &'a str) -> Report<(&'a str, Range<usize>)> {
        self.kind.build_report(src_id, &self.spans)
    }

    /// Report this error to stderr, highlighting the given input.
    ///
    /// The `ariadne` crate's [`Report`] type does not have a `Display` implementation, so we can
    /// only use its `eprint` method to print to stderr.
    pub fn report_to_stderr(&self, src_id: &str, input: &str) -> io::Result<()> {
        self.build_report(src_id).eprint((src_id, Source::from(input)))
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use solve4x_attrs::ErrorKind;
    use super::*;

    #[derive(Debug, Clone, ErrorKind, PartialEq)]
    #[error(
        message = format!("cannot divide {} by zero", numerator),
        labels = ["this division", "this zero"],
        help = "remove the zero",
    )]
    struct DivideByZero {
        numerator: i32,
    }

    #[derive(Debug, Clone, ErrorKind, PartialEq)]
    #[error(message = "no spans", labels = ["never shown"])]
    struct NoSpans;

    /// Renders the report to a string without colors.
    fn render(err: &Error, input: &str) -> String {
        let mut out = Vec::new();
        err.build_report("input")
            .write(("input", Source::from(input)), &mut out)
            .unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn downcast() {
        let err = Error::new(vec![0..3, 4..5], DivideByZero { numerator: 3 });
        assert_eq!(err.downcast_ref::<DivideByZero>(), Some(&DivideByZero { numerator: 3 }));
        assert!(!err.is::<NoSpans>());
    }

    #[test]
    fn report_contains_message_and_help() {
        let err = Error::new(vec![0..1, 4..5], DivideByZero { numerator: 3 });
        let report = render(&err, "3 / 0");
        assert!(report.contains("cannot divide 3 by zero"));
        assert!(report.contains("remove the zero"));
    }

    #[test]
    fn unspanned_report_does_not_panic() {
        let err = Error::unspanned(NoSpans);
        let report = render(&err, "2x+3");
        assert!(report.contains("no spans"));
        assert!(!report.contains("never shown"));
    }
}
