//! Unfold the physical lines of a document into logical lines.
//!
//! A physical line starting with a single space continues the previous logical
//! line. The space itself is removed, any further indentation is kept.
//!
//! # Examples
//!
//! ```rust
//! let reader = caldata_lite::LineReader::new("SUMMARY:Hello\r\n World\r\nUID:1");
//! let lines: Vec<_> = reader.map(|line| line.to_string()).collect();
//! assert_eq!(lines, ["SUMMARY:Hello World", "UID:1"]);
//! ```

use std::{borrow::Cow, fmt, iter::Peekable, str::Lines};

use crate::{BYTE_ORDER_MARK, FOLD_MARKER};

/// A logical line and the number of the physical line it starts on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Line<'a> {
    pub inner: Cow<'a, str>,
    number: usize,
}

impl<'a> Line<'a> {
    pub fn new(inner: impl Into<Cow<'a, str>>, number: usize) -> Self {
        Self {
            inner: inner.into(),
            number,
        }
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.inner
    }

    /// 1-based number of the first physical line.
    #[inline]
    pub fn number(&self) -> usize {
        self.number
    }
}

impl fmt::Display for Line<'_> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(&self.inner)
    }
}

/// Lazy iterator over the logical lines of a document.
///
/// Both `\n` and `\r\n` terminate a physical line. Nothing is read ahead
/// except the single physical line needed to detect a continuation.
/// A leading byte order mark is dropped.
pub struct LineReader<'a> {
    lines: Peekable<Lines<'a>>,
    number: usize,
}

impl<'a> LineReader<'a> {
    pub fn new(input: &'a str) -> Self {
        Self {
            lines: input
                .strip_prefix(BYTE_ORDER_MARK)
                .unwrap_or(input)
                .lines()
                .peekable(),
            number: 0,
        }
    }
}

#[inline]
fn strip_fold(line: &str) -> &str {
    line.strip_prefix(FOLD_MARKER).unwrap_or(line)
}

impl<'a> Iterator for LineReader<'a> {
    type Item = Line<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let first = self.lines.next()?;
        self.number += 1;
        let start = self.number;

        // Most lines are not folded, borrow until a continuation shows up
        let mut acc = Cow::Borrowed(strip_fold(first));
        while let Some(continuation) = self.lines.next_if(|next| next.starts_with(FOLD_MARKER)) {
            self.number += 1;
            acc.to_mut().push_str(strip_fold(continuation));
        }

        Some(Line::new(acc, start))
    }
}
