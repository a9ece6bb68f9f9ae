use std::collections::HashMap;

use crate::{ParserOptions, component::ItemError, property::Property, types::CalDateTime};

/// A block of the document and its properties.
///
/// Property names are kept as written and are unique: a later line with the
/// same name replaces the earlier one. Values are stored raw and decoded on
/// every read.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CalendarItem {
    type_name: String,
    properties: HashMap<String, Property>,
}

impl CalendarItem {
    pub fn new(type_name: impl Into<String>) -> Self {
        Self {
            type_name: type_name.into(),
            properties: HashMap::new(),
        }
    }

    /// Name of the `BEGIN` block, as written.
    #[inline]
    pub fn type_name(&self) -> &str {
        &self.type_name
    }

    #[inline]
    pub fn properties(&self) -> &HashMap<String, Property> {
        &self.properties
    }

    pub(crate) fn push(
        &mut self,
        key: impl Into<String>,
        parameter: impl Into<String>,
        value: impl Into<String>,
    ) {
        self.properties
            .insert(key.into(), Property::new(parameter, value));
    }

    pub fn get_property(&self, key: &str) -> Result<&Property, ItemError> {
        self.properties
            .get(key)
            .ok_or_else(|| ItemError::MissingProperty(key.to_owned()))
    }

    #[inline]
    pub fn has_property(&self, key: &str) -> bool {
        self.properties.contains_key(key)
    }

    /// The unescaped text of a property.
    pub fn get_text(&self, key: &str) -> Result<String, ItemError> {
        self.get_property(key).map(Property::text)
    }

    /// The decoded date of a property, `Ok(None)` if the value is not a date.
    pub fn get_date_time(&self, key: &str) -> Result<Option<CalDateTime>, ItemError> {
        self.get_date_time_with(key, &ParserOptions::default())
    }

    pub fn get_date_time_with(
        &self,
        key: &str,
        options: &ParserOptions,
    ) -> Result<Option<CalDateTime>, ItemError> {
        self.get_property(key)
            .map(|prop| prop.date_time(options.strict_time))
    }
}
