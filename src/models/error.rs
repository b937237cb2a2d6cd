use thiserror::Error as ThisError;

/// Errors produced while sniffing numbers out of a document.
#[derive(Debug, ThisError)]
pub enum Error {
    /// A scanned candidate could not be parsed after stripping it down to
    /// digits and the decimal point. Recovered per candidate.
    #[error("Malformed Candidate: {0}")]
    MalformedCandidate(String),

    /// Nothing in the whole document produced a valid number.
    #[error("No numeric data found")]
    NoNumericDataFound,

    #[error("Invalid Configuration: {0}")]
    InvalidConfiguration(String),

    #[error("Pattern Error: {0}")]
    PatternError(#[from] regex::Error),

    /// Raised by an `AnswerModel` implementation.
    #[error("Answer Model Error: {0}")]
    AnswerModelError(String),

    #[error("Parser Error: {0}")]
    ParserError(String),

    #[error("IO Error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<csv::Error> for Error {
    fn from(err: csv::Error) -> Error {
        Error::ParserError(format!("Failed to read CSV: {}", err))
    }
}
