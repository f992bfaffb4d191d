use solve4x_error::Error as SolveError;
use std::io;

/// Utility enum to package errors that can occur while reading and solving input.
#[derive(Debug)]
pub enum Error {
    /// The input could not be parsed, or does not fit the requested mode.
    Solve(SolveError),

    /// The input could not be read.
    Io(io::Error),
}

impl Error {
    /// Report this [`Error`] to stderr.
    ///
    /// Solve errors are rendered as `ariadne` reports highlighting the input.
    pub fn report_to_stderr(&self, input: &str) {
        match self {
            Self::Solve(err) => {
                if let Err(io) = err.report_to_stderr("input", input) {
                    eprintln!("{}", io);
                }
            },
            Self::Io(err) => eprintln!("error: {}", err),
        }
    }
}

impl From<SolveError> for Error {
    fn from(err: SolveError) -> Self {
        Self::Solve(err)
    }
}

impl From<io::Error> for Error {
    fn from(err: io::Error) -> Self {
        Self::Io(err)
    }
}
