use crate::{PARAM_DELIMITER, PARAM_NAME_DELIMITER, types::CalDateTime};

/// The undecoded value and parameter segment of one content line.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Property {
    pub raw_value: String,
    pub parameter: String,
}

impl Property {
    pub fn new(parameter: impl Into<String>, raw_value: impl Into<String>) -> Self {
        Self {
            raw_value: raw_value.into(),
            parameter: parameter.into(),
        }
    }

    /// The value with text escapes resolved.
    #[inline]
    pub fn text(&self) -> String {
        unescape(self.raw_value.as_str())
    }

    #[inline]
    pub fn date_time(&self, strict_time: bool) -> Option<CalDateTime> {
        CalDateTime::parse(&self.raw_value, strict_time).ok()
    }

    /// Value of the first parameter if it is called `name`.
    /// Further parameters are not looked at.
    pub fn param(&self, name: &str) -> Option<&str> {
        let first = self
            .parameter
            .split(PARAM_DELIMITER)
            .next()
            .unwrap_or_default();
        let (key, value) = first.split_once(PARAM_NAME_DELIMITER)?;
        key.trim()
            .eq_ignore_ascii_case(name)
            .then_some(value.trim_matches('"'))
    }
}

/// Resolve the text escapes of a property value.
///
/// The replacements run one after the other over the whole string, in this
/// order: `\,`, `\;`, `\n` and `\N`, then `\\`. A missing value decodes to
/// the empty string.
pub fn unescape<'a>(value: impl Into<Option<&'a str>>) -> String {
    let Some(value) = value.into() else {
        return String::new();
    };
    value
        .replace("\\,", ",")
        .replace("\\;", ";")
        .replace("\\n", "\n")
        .replace("\\N", "\n")
        .replace("\\\\", "\\")
}
