use chrono::NaiveDate;
use derive_more::Deref;

use crate::{
    ParserOptions,
    component::{CalendarItem, ItemError, ItemView, date_of},
};

/// Read-only view of a `VEVENT` item.
///
/// Every accessor decodes the underlying property again, nothing is cached.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deref)]
pub struct Event<'a> {
    #[deref]
    item: &'a CalendarItem,
    options: ParserOptions,
}

impl<'a> ItemView<'a> for Event<'a> {
    const NAME: &'static str = "VEVENT";

    #[inline]
    fn from_item(item: &'a CalendarItem, options: ParserOptions) -> Self {
        Self { item, options }
    }
}

impl<'a> Event<'a> {
    #[inline]
    pub fn item(&self) -> &'a CalendarItem {
        self.item
    }

    pub fn summary(&self) -> Result<String, ItemError> {
        self.item.get_text("SUMMARY")
    }

    pub fn description(&self) -> Result<String, ItemError> {
        self.item.get_text("DESCRIPTION")
    }

    pub fn location(&self) -> Result<String, ItemError> {
        self.item.get_text("LOCATION")
    }

    pub fn uid(&self) -> Result<String, ItemError> {
        self.item.get_text("UID")
    }

    /// Date of `DTSTART`, `None` if it is missing or not a date.
    pub fn start_date(&self) -> Option<NaiveDate> {
        date_of(self.item, "DTSTART", &self.options)
    }

    pub fn end_date(&self) -> Option<NaiveDate> {
        date_of(self.item, "DTEND", &self.options)
    }

    /// Whether `DTSTART` is a bare date. `false` if it cannot be decoded.
    pub fn is_all_day(&self) -> bool {
        matches!(
            self.item.get_date_time_with("DTSTART", &self.options),
            Ok(Some(dt)) if dt.is_all_day()
        )
    }
}
