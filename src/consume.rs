//! Terminal operations. Each one takes a single fresh cursor and drives it to
//! the end or to the first decisive element.
//!
//! The draining consumers ([Seq::to_vec], [Seq::reduce], [Seq::count],
//! [Seq::for_each]) never return on an endless sequence, and the searching
//! ones never return if nothing matches. Bounding the sequence is up to the
//! caller; [Seq::try_to_vec] refuses the cases that are evident from the
//! construction.

use itertools::Itertools;

use crate::error::{SeqError, SeqResult, Unbounded};
use crate::extent::Extent;
use crate::seq::Seq;
use crate::utils::never::{always, unwrap_always};

impl<'a, T: 'a> Seq<'a, T> {
  /// Call a function on every element and its index
  pub fn for_each(&self, mut visit: impl FnMut(T, usize)) {
    unwrap_always(self.try_for_each(|t, i| always(visit(t, i))))
  }

  /// Call a fallible function on every element and its index, stop at the
  /// first error
  pub fn try_for_each<E>(&self, mut visit: impl FnMut(T, usize) -> Result<(), E>) -> Result<(), E> {
    for (i, t) in self.iter().enumerate() {
      visit(t, i)?;
    }
    Ok(())
  }

  /// Collect every element. Also known as `to_array`.
  #[doc(alias = "to_array")]
  pub fn to_vec(&self) -> Vec<T> { self.iter().collect_vec() }

  /// Collect every element, unless the sequence is known to never end
  pub fn try_to_vec(&self) -> SeqResult<Vec<T>> {
    if self.extent() == Extent::Unbounded {
      let err = Unbounded { history: self.history() };
      tracing::debug!(error = %err.message(), "refusing to drain");
      return Err(err.pack());
    }
    Ok(self.to_vec())
  }

  /// Left fold, `combine` also receives the index of the element
  pub fn reduce<S>(&self, init: S, mut combine: impl FnMut(S, T, usize) -> S) -> S {
    unwrap_always(self.try_reduce(init, |acc, t, i| always(combine(acc, t, i))))
  }

  /// Left fold that stops at the first error
  pub fn try_reduce<S, E>(
    &self,
    init: S,
    mut combine: impl FnMut(S, T, usize) -> Result<S, E>,
  ) -> Result<S, E> {
    let mut acc = init;
    for (i, t) in self.iter().enumerate() {
      acc = combine(acc, t, i)?;
    }
    Ok(acc)
  }

  /// Number of elements
  pub fn count(&self) -> usize { self.iter().count() }

  /// Number of elements that satisfy the predicate
  pub fn count_if(&self, mut pred: impl FnMut(&T) -> bool) -> usize {
    self.iter().filter(|t| pred(t)).count()
  }

  /// The element at a zero-based position, [None] if the sequence is shorter
  pub fn nth(&self, n: usize) -> Option<T> { self.iter().nth(n) }

  /// The first element that satisfies the predicate
  pub fn find(&self, mut pred: impl FnMut(&T) -> bool) -> Option<T> {
    self.iter().find(|t| pred(t))
  }

  /// The position of the first element that satisfies the predicate
  pub fn find_index(&self, mut pred: impl FnMut(&T) -> bool) -> Option<usize> {
    self.iter().position(|t| pred(&t))
  }

  /// Whether every element satisfies the predicate. Stops at the first one
  /// that doesn't.
  pub fn every(&self, mut pred: impl FnMut(&T) -> bool) -> bool { self.iter().all(|t| pred(&t)) }

  /// Whether any element satisfies the predicate. Stops at the first one that
  /// does.
  pub fn some(&self, mut pred: impl FnMut(&T) -> bool) -> bool { self.iter().any(|t| pred(&t)) }
}
