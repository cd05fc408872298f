use std::io;

/// Input-format failures raised while reading a pack README.
#[derive(thiserror::Error, Debug)]
pub enum ParseError {
    #[error("no \"Released to CN\" line found; the CN release date is required")]
    MissingCnRelease,

    #[error("no \"Features\" line found; the featured list is required")]
    MissingFeatures,

    #[error("no `<Month> <day>, <year>` date found on line {line}: {text:?}")]
    MissingDate { line: usize, text: String },

    #[error("{word:?} on line {line} is not a full English month name")]
    UnknownMonth { line: usize, word: String },

    #[error("invalid calendar date {year}-{month:02}-{day:02} on line {line}")]
    InvalidDate {
        line: usize,
        year: i32,
        month: u32,
        day: u32,
    },

    #[error("input ended while waiting for {expected} after line {line}")]
    UnexpectedEnd { line: usize, expected: &'static str },
}

/// Failures while talking to the operator.
#[derive(thiserror::Error, Debug)]
pub enum CollectError {
    #[error("error occurred during prompt I/O: {0}")]
    Io(#[from] io::Error),

    #[error("input closed while waiting for an answer to: {0}")]
    InputClosed(String),
}
