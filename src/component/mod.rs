mod item;
pub use item::CalendarItem;
mod calendar;
pub use calendar::{CalendarRoot, ItemStore};
mod event;
pub use event::Event;
mod todo;
pub use todo::Todo;

use chrono::NaiveDate;
use std::{marker::PhantomData, slice};

use crate::ParserOptions;

#[derive(Debug, Clone, thiserror::Error, PartialEq, Eq)]
pub enum ItemError {
    #[error("missing property: {0}")]
    MissingProperty(String),
}

/// A typed, read-only projection over items of one type.
pub trait ItemView<'a>: Sized {
    /// Type name of the items this view applies to.
    const NAME: &'static str;

    /// Wrap `item`, decoding its values with `options`.
    fn from_item(item: &'a CalendarItem, options: ParserOptions) -> Self;
}

/// Lazy iterator over the items of one type, in document order.
pub struct Views<'a, V> {
    items: slice::Iter<'a, CalendarItem>,
    options: ParserOptions,
    _v: PhantomData<V>,
}

impl<'a, V: ItemView<'a>> Views<'a, V> {
    pub(crate) fn new(items: &'a [CalendarItem], options: ParserOptions) -> Self {
        Self {
            items: items.iter(),
            options,
            _v: PhantomData,
        }
    }
}

impl<'a, V: ItemView<'a>> Iterator for Views<'a, V> {
    type Item = V;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        let options = self.options;
        self.items.next().map(|item| V::from_item(item, options))
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.items.size_hint()
    }
}

impl<'a, V: ItemView<'a>> ExactSizeIterator for Views<'a, V> {}

/// Date part of a date property, `None` if it is missing or undecodable.
#[inline]
fn date_of(item: &CalendarItem, key: &str, options: &ParserOptions) -> Option<NaiveDate> {
    item.get_date_time_with(key, options)
        .ok()
        .flatten()
        .map(|dt| dt.date())
}
