//! Split the result of `LineReader` into content lines.
//!
//! A content line is made of:
//! - A name, kept as written.
//! - An optional parameter segment, everything between the first `;` and the
//!   first `:`. It is not split any further.
//! - A value, everything after the first `:`. Later colons stay in the value.
//!
//! All three parts are trimmed of surrounding whitespace.
//!
//! #### Warning
//!   No checks are made on the validity of names, parameters or values. Lines
//!   without a colon or without a name are reported as errors so the caller
//!   can skip them.
//!
//! # Examples
//!
//! ```rust
//! let mut reader = caldata_lite::ContentLineParser::from_str("DTSTART;VALUE=DATE:20240101");
//! let line = reader.next().unwrap().unwrap();
//! assert_eq!(line.name, "DTSTART");
//! assert_eq!(line.parameter, "VALUE=DATE");
//! assert_eq!(line.value, "20240101");
//! ```

use lazy_static::lazy_static;
use regex::Regex;
use std::fmt;

use super::{Line, LineReader};
use crate::VALUE_DELIMITER;

lazy_static! {
    // name, optional `;parameter`, then everything after the first colon
    static ref CONTENT_LINE: Regex =
        Regex::new(r"^([^:;]*)(?:;([^:]*))?:(.*)$").expect("content line pattern is valid");
}

/// Error arising when trying to parse a content line
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ContentLineError {
    #[error("Line {0}: Missing property name.")]
    MissingName(usize),
    #[error("Line {0}: Missing a \"{1}\" delimiter.")]
    MissingDelimiter(usize, char),
}

/// One tokenized content line.
#[derive(Debug, Clone, Default, Eq, PartialEq, Hash)]
pub struct ContentLine {
    /// Property name.
    pub name: String,
    /// Raw parameter segment, empty when absent.
    pub parameter: String,
    /// Raw property value.
    pub value: String,
}

impl ContentLine {
    #[inline]
    pub fn is_begin(&self) -> bool {
        self.name.eq_ignore_ascii_case("BEGIN")
    }

    #[inline]
    pub fn is_end(&self) -> bool {
        self.name.eq_ignore_ascii_case("END")
    }
}

impl fmt::Display for ContentLine {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "name: {}\nparameter: {:?}\nvalue: {:?}",
            self.name, self.parameter, self.value
        )
    }
}

pub struct ContentLineParser<'a>(LineReader<'a>);

impl<'a> ContentLineParser<'a> {
    pub fn new(line_reader: LineReader<'a>) -> Self {
        ContentLineParser(line_reader)
    }

    #[allow(clippy::should_implement_trait)]
    pub fn from_str(input: &'a str) -> Self {
        ContentLineParser(LineReader::new(input))
    }

    /// Tokenize a single logical line.
    pub fn parse_line(line: &Line) -> Result<ContentLine, ContentLineError> {
        let Some(caps) = CONTENT_LINE.captures(line.as_str()) else {
            return Err(ContentLineError::MissingDelimiter(
                line.number(),
                VALUE_DELIMITER,
            ));
        };
        let segment = |idx: usize| caps.get(idx).map_or("", |m| m.as_str().trim());

        let name = segment(1);
        if name.is_empty() {
            return Err(ContentLineError::MissingName(line.number()));
        }
        Ok(ContentLine {
            name: name.to_owned(),
            parameter: segment(2).to_owned(),
            value: segment(3).to_owned(),
        })
    }
}

impl Iterator for ContentLineParser<'_> {
    type Item = Result<ContentLine, ContentLineError>;

    fn next(&mut self) -> Option<Self::Item> {
        self.0.next().map(|line| Self::parse_line(&line))
    }
}
