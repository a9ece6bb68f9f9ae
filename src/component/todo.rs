use chrono::NaiveDate;
use derive_more::Deref;

use crate::{
    ParserOptions,
    component::{CalendarItem, ItemError, ItemView, date_of},
};

/// Read-only view of a `VTODO` item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deref)]
pub struct Todo<'a> {
    #[deref]
    item: &'a CalendarItem,
    options: ParserOptions,
}

impl<'a> ItemView<'a> for Todo<'a> {
    const NAME: &'static str = "VTODO";

    #[inline]
    fn from_item(item: &'a CalendarItem, options: ParserOptions) -> Self {
        Self { item, options }
    }
}

impl<'a> Todo<'a> {
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

    pub fn start_date(&self) -> Option<NaiveDate> {
        date_of(self.item, "DTSTART", &self.options)
    }

    pub fn due_date(&self) -> Option<NaiveDate> {
        date_of(self.item, "DUE", &self.options)
    }
}
