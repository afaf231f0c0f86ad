//! Debug formatting helpers for large buffers held by descriptors and images.

use std::fmt;

const FIRST_N_ELEMENTS: usize = 3;

/// Collections that can be printed in trimmed form.
pub trait Trimmable {
    /// Element type of the collection
    type Item: fmt::Debug;

    /// Every element of the collection as a slice
    fn items(&self) -> &[Self::Item];
}

impl<T: fmt::Debug> Trimmable for Vec<T> {
    type Item = T;

    fn items(&self) -> &[T] {
        self
    }
}

impl<T: fmt::Debug> Trimmable for Box<[T]> {
    type Item = T;

    fn items(&self) -> &[T] {
        self
    }
}

/// Formats a collection by printing the first few elements and the count of the rest.
///
/// Palettes carry 256 entries and pixel buffers can hold millions, so `{:?}` on
/// a descriptor would otherwise flood logs. Enable the `debug-print-all`
/// feature to get the full collection.
#[cfg(not(feature = "debug-print-all"))]
pub fn trimmed_collection_fmt<C: Trimmable>(collection: &C, f: &mut fmt::Formatter) -> fmt::Result {
    let items = collection.items();
    let shown = &items[..items.len().min(FIRST_N_ELEMENTS)];
    let remaining = items.len() - shown.len();

    if remaining == 0 {
        write!(f, "{shown:?}")
    } else {
        write!(f, "{shown:?} + {remaining} elements")
    }
}

/// Formats the whole collection.
#[cfg(feature = "debug-print-all")]
pub fn trimmed_collection_fmt<C: Trimmable>(collection: &C, f: &mut fmt::Formatter) -> fmt::Result {
    write!(f, "{:?}", collection.items())
}
