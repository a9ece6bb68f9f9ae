//! Build a [`CalendarRoot`] from the content lines of a document.
//!
//! Every `BEGIN` line opens a new item that receives all following lines.
//! In the default flat mode an item is never closed explicitly, it just stops
//! receiving lines when the next `BEGIN` shows up. `END` lines are not special
//! and land in the open item as an `END` property. Blocks nested two levels
//! deep therefore leak their trailing lines into the inner item. Set
//! [`ParserOptions::nested`] to pair `BEGIN` and `END` with a stack instead.
//!
//! Malformed lines never fail the parse, they are logged and skipped.
//!
//! # Examples
//!
//! ```rust
//! let cal = caldata_lite::parse(
//!     "BEGIN:VCALENDAR\r\nBEGIN:VEVENT\r\nSUMMARY:Test\r\nEND:VEVENT\r\nEND:VCALENDAR\r\n",
//! );
//! let event = cal.events().next().unwrap();
//! assert_eq!(event.summary().unwrap(), "Test");
//! ```

use crate::{
    ContentLineParser, LineReader, ParserError, ParserOptions,
    component::{CalendarItem, CalendarRoot, ItemStore},
    parser::{ContentLine, Line},
};

/// Write target of the following lines.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Target {
    Root,
    Item { type_name: String, index: usize },
}

/// Incremental builder behind [`parse`], fed one logical line at a time.
#[derive(Debug, Default)]
pub struct CalendarParser {
    options: ParserOptions,
    root: Option<CalendarItem>,
    items: ItemStore,
    // Flat mode keeps at most one entry
    open: Vec<Target>,
}

impl CalendarParser {
    pub fn new(options: ParserOptions) -> Self {
        Self {
            options,
            ..Default::default()
        }
    }

    /// Tokenize and apply one logical line.
    pub fn feed(&mut self, line: &Line) {
        match ContentLineParser::parse_line(line) {
            Ok(content_line) => self.apply(content_line, line.number()),
            Err(err) => tracing::trace!(%err, "Skipping unrecognised line"),
        }
    }

    fn apply(&mut self, line: ContentLine, number: usize) {
        if line.is_begin() {
            self.begin(line.value, number);
        } else if line.is_end() && self.options.nested {
            self.end(&line.value, number);
        } else {
            self.push(line, number);
        }
    }

    fn begin(&mut self, type_name: String, number: usize) {
        if type_name.is_empty() {
            tracing::trace!(line = number, "Skipping BEGIN without a block name");
            return;
        }
        tracing::trace!(line = number, %type_name, "Opening item");

        let target = if self.root.is_none() {
            self.root = Some(CalendarItem::new(type_name));
            Target::Root
        } else {
            let index = self.items.open(&type_name);
            Target::Item { type_name, index }
        };

        if !self.options.nested {
            self.open.clear();
        }
        self.open.push(target);
    }

    /// Close the innermost open item named `type_name` and everything opened
    /// inside it. An `END` matching no open item is dropped.
    fn end(&mut self, type_name: &str, number: usize) {
        let position = self.open.iter().rposition(|target| {
            let open_name = match target {
                Target::Root => self.root.as_ref().map_or("", CalendarItem::type_name),
                Target::Item { type_name: name, .. } => name.as_str(),
            };
            open_name.eq_ignore_ascii_case(type_name)
        });
        match position {
            Some(position) => {
                let unclosed = self.open.len() - position - 1;
                if unclosed > 0 {
                    tracing::trace!(
                        line = number,
                        %type_name,
                        unclosed,
                        "END closes unterminated items"
                    );
                }
                self.open.truncate(position);
            }
            None => tracing::trace!(
                line = number,
                %type_name,
                "Skipping END that does not match any open item"
            ),
        }
    }

    fn push(&mut self, line: ContentLine, number: usize) {
        let item = match self.open.last() {
            Some(Target::Root) => self.root.as_mut(),
            Some(Target::Item { type_name, index }) => self.items.get_mut(type_name, *index),
            None => None,
        };
        let Some(item) = item else {
            tracing::trace!(line = number, name = %line.name, "Skipping line outside of any item");
            return;
        };
        item.push(line.name, line.parameter, line.value);
    }

    pub fn finish(self) -> CalendarRoot {
        CalendarRoot::new(self.root.unwrap_or_default(), self.items, self.options)
    }
}

/// Parse a document with the default options. Never fails.
pub fn parse(input: &str) -> CalendarRoot {
    parse_with_options(input, &ParserOptions::default())
}

#[tracing::instrument(skip(input), fields(input_len = input.len()))]
pub fn parse_with_options(input: &str, options: &ParserOptions) -> CalendarRoot {
    tracing::debug!("Parsing calendar document");

    let mut parser = CalendarParser::new(*options);
    for line in LineReader::new(input) {
        parser.feed(&line);
    }
    let root = parser.finish();

    tracing::debug!(
        root = root.type_name(),
        item_types = root.items().len(),
        "Calendar document parsed"
    );
    root
}

/// Like [`parse`], but reject input that does not start with a calendar.
///
/// Only the first line is checked, the rest is parsed as leniently as ever.
pub fn parse_strict(input: &str) -> Result<CalendarRoot, ParserError> {
    let mut lines = ContentLineParser::from_str(input);
    let header = lines.next().ok_or(ParserError::EmptyInput)??;
    if !header.is_begin() || !header.value.eq_ignore_ascii_case("VCALENDAR") {
        return Err(ParserError::MissingHeader);
    }
    Ok(parse(input))
}
