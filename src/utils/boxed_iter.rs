//! Utility functions to get rid of explicit casts to BoxedIter which are
//! tedious

use std::iter;

/// A type-erased iterator. Every cursor handed out by a sequence has this type.
pub type BoxedIter<'a, T> = Box<dyn Iterator<Item = T> + 'a>;

/// BoxedIter of a single element
pub fn box_once<'a, T: 'a>(t: T) -> BoxedIter<'a, T> { Box::new(iter::once(t)) }

/// Box anything that can be iterated
pub fn into_boxed_iter<'a, T>(t: T) -> BoxedIter<'a, T::Item>
where
  T: IntoIterator,
  T::IntoIter: 'a,
{
  Box::new(t.into_iter())
}
