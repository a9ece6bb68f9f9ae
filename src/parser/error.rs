use crate::parser::ContentLineError;

/// Errors of the strict entry point. The lenient parser never fails.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ParserError {
    #[error("empty input")]
    EmptyInput,
    #[error("missing header, expected BEGIN:VCALENDAR")]
    MissingHeader,
    #[error("content line error: {0}")]
    ContentLineError(#[from] ContentLineError),
}
