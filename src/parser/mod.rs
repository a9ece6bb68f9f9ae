mod error;
pub use error::ParserError;

mod line;
pub use line::{Line, LineReader};

mod content_line;
pub use content_line::{ContentLine, ContentLineError, ContentLineParser};

mod calendar;
pub use calendar::{CalendarParser, parse, parse_strict, parse_with_options};

/// Settings for [`parse_with_options`].
///
/// The options are kept on the returned [`crate::CalendarRoot`] and apply to
/// every view taken from it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct ParserOptions {
    /// Pair `BEGIN` and `END` lines with a stack.
    /// By default every `BEGIN` opens a new item that receives all following
    /// lines until the next `BEGIN`, and `END` lines are kept as ordinary
    /// `END` properties of the open item.
    pub nested: bool,
    /// Reject date-time values whose time digits are not a valid `HHMMSS`,
    /// `HHMM` or `HH` instead of decoding them without a time.
    pub strict_time: bool,
}
