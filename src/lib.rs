const VALUE_DELIMITER: char = ':';
const PARAM_DELIMITER: char = ';';
const PARAM_NAME_DELIMITER: char = '=';
const FOLD_MARKER: char = ' ';
const BYTE_ORDER_MARK: char = '\u{feff}';

pub mod component;
pub use component::{CalendarItem, CalendarRoot, Event, ItemError, ItemView, Todo};

pub mod parser;
pub use parser::{
    ContentLineParser, LineReader, ParserError, ParserOptions, parse, parse_strict,
    parse_with_options,
};

pub mod property;
pub use property::{Property, unescape};

pub mod types;
pub use types::CalDateTime;
