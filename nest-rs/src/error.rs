use nest_error::Error as PlanError;
use std::io;

/// Utility enum to package errors that can occur while loading or planning an expression.
#[derive(Debug)]
pub enum Error {
    /// The expression could not be read.
    Io(io::Error),

    /// The expression could not be decomposed.
    Plan(PlanError),
}

impl Error {
    /// Report this error to stderr.
    ///
    /// Planning errors are rendered as a report against the given input; if the report cannot
    /// be written, the short form of the error is printed instead.
    pub fn report_to_stderr(&self, input: &str) {
        match self {
            Self::Io(err) => eprintln!("error: {}", err),
            Self::Plan(err) => {
                if err.report_to_stderr("input", input).is_err() {
                    eprintln!("error: {}", err);
                }
            },
        }
    }
}

impl From<io::Error> for Error {
    fn from(err: io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<PlanError> for Error {
    fn from(err: PlanError) -> Self {
        Self::Plan(err)
    }
}
