use derive_more::Deref;
use itertools::Itertools;
use std::collections::HashMap;

use crate::{
    ParserOptions,
    component::{CalendarItem, Event, ItemView, Todo, Views},
};

/// All items of a document except the root, by type name in document order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deref)]
pub struct ItemStore(HashMap<String, Vec<CalendarItem>>);

impl ItemStore {
    /// Append a new item and return its position among items of its type.
    pub(crate) fn open(&mut self, type_name: &str) -> usize {
        let items = self.0.entry(type_name.to_owned()).or_default();
        items.push(CalendarItem::new(type_name));
        items.len() - 1
    }

    pub(crate) fn get_mut(&mut self, type_name: &str, index: usize) -> Option<&mut CalendarItem> {
        self.0.get_mut(type_name)?.get_mut(index)
    }

    /// Items of one type, empty if there are none.
    pub fn of_type(&self, type_name: &str) -> &[CalendarItem] {
        self.0
            .get(type_name)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }
}

/// The outermost block of a document, owning every nested item.
///
/// Dereferences to its own [`CalendarItem`] for the calendar-level
/// properties such as `PRODID` or `VERSION`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deref)]
pub struct CalendarRoot {
    #[deref]
    item: CalendarItem,
    items: ItemStore,
    options: ParserOptions,
}

impl CalendarRoot {
    pub(crate) fn new(item: CalendarItem, items: ItemStore, options: ParserOptions) -> Self {
        Self {
            item,
            items,
            options,
        }
    }

    /// Options the document was parsed with, used by every view.
    #[inline]
    pub fn options(&self) -> &ParserOptions {
        &self.options
    }

    #[inline]
    pub fn item(&self) -> &CalendarItem {
        &self.item
    }

    #[inline]
    pub fn items(&self) -> &ItemStore {
        &self.items
    }

    #[inline]
    pub fn items_of(&self, type_name: &str) -> &[CalendarItem] {
        self.items.of_type(type_name)
    }

    /// Type names present in the store, sorted.
    pub fn type_names(&self) -> impl Iterator<Item = &str> {
        self.items.keys().map(String::as_str).sorted()
    }

    /// A fresh lazy sequence over all items matching `V`.
    pub fn views<'a, V: ItemView<'a>>(&'a self) -> Views<'a, V> {
        Views::new(self.items_of(V::NAME), self.options)
    }

    /// A fresh lazy sequence over the `VEVENT` items.
    #[inline]
    pub fn events(&self) -> Views<'_, Event<'_>> {
        self.views()
    }

    #[inline]
    pub fn todos(&self) -> Views<'_, Todo<'_>> {
        self.views()
    }
}
