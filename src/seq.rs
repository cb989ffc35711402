//! An alternative to `Iterable` in many languages, a [Fn] that returns an
//! iterator, bundled with the record of how it was built.

use std::fmt;
use std::rc::Rc;

use trait_set::trait_set;

use crate::extent::Extent;
use crate::history::{chain_fmt, ops, Derived, History, Op, Origin};
use crate::utils::boxed_iter::BoxedIter;

trait_set! {
  pub(crate) trait Producer<'a, T> = Fn() -> BoxedIter<'a, T> + 'a;
}

/// Shared cursor building callback. Every call returns a fresh cursor.
pub(crate) type Factory<'a, T> = Rc<dyn Producer<'a, T>>;

/// Wrap a cursor building closure
pub(crate) fn factory<'a, T: 'a>(f: impl Fn() -> BoxedIter<'a, T> + 'a) -> Factory<'a, T> {
  Rc::new(f)
}

/// A lazy, possibly infinite sequence.
///
/// Nothing is computed until a consumer such as [Seq::to_vec] or [Seq::iter]
/// asks for elements, and every consumer starts from the first element with
/// its own cursor. Transformations borrow the sequence and return a new one,
/// the original stays usable.
///
/// [Clone] does not copy the sequence, it replays the steps that built it
/// starting from the generator. Steps that took other sequences replay those
/// as well. [Seq::inspect] is not replayed, so its side effects are not
/// duplicated by a clone. Because a clone repeats the recipe rather than the
/// outcome, a clone of a sequence built with impure callbacks may yield
/// different elements.
pub struct Seq<'a, T: 'a> {
  factory: Factory<'a, T>,
  history: History<'a, T>,
  extent: Extent,
}

impl<'a, T: 'a> Seq<'a, T> {
  /// Start a new record with a generator or static combinator. `build` must
  /// produce an equivalent sequence from `args` alone.
  pub(crate) fn origin<A: 'a>(
    op: Op,
    args: A,
    build: fn(&A) -> Seq<'a, T>,
    extent: Extent,
    factory: Factory<'a, T>,
  ) -> Self {
    Self { factory, extent, history: Rc::new(Origin { op, args, build }) }
  }

  /// Extend the record of this sequence with a step. `apply` must produce an
  /// equivalent sequence from a replay of `self` and `args`.
  pub(crate) fn derive<A: 'a, U: 'a>(
    &self,
    op: Op,
    args: A,
    apply: fn(&Seq<'a, T>, &A) -> Seq<'a, U>,
    extent: Extent,
    factory: Factory<'a, U>,
  ) -> Seq<'a, U> {
    let history = Rc::new(Derived { op, parent: self.history.clone(), args, apply });
    Seq { factory, extent, history }
  }

  /// A transformation that is left out of the record, so replays skip it
  pub(crate) fn unrecorded(&self, factory: Factory<'a, T>) -> Self {
    Self { factory, extent: self.extent, history: self.history.clone() }
  }

  pub(crate) fn factory(&self) -> Factory<'a, T> { self.factory.clone() }
  pub(crate) fn record(&self) -> History<'a, T> { self.history.clone() }

  /// Get a fresh cursor. Also known as `exec`.
  pub fn iter(&self) -> BoxedIter<'a, T> { (self.factory)() }

  /// The recorded construction steps, generator first
  pub fn history(&self) -> Vec<Op> { ops(&self.history) }

  /// What is known about the length of the sequence
  pub fn extent(&self) -> Extent { self.extent }
}

impl<'a, T: 'a> Clone for Seq<'a, T> {
  fn clone(&self) -> Self {
    tracing::trace!(history = %chain_fmt(&self.history()), "replaying sequence");
    self.history.replay()
  }
}

impl<'a, T: 'a> fmt::Debug for Seq<'a, T> {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "Seq[{}]", chain_fmt(&self.history()))
  }
}

impl<'a, 'b, T: 'a> IntoIterator for &'b Seq<'a, T> {
  type IntoIter = BoxedIter<'a, T>;
  type Item = T;
  fn into_iter(self) -> Self::IntoIter { self.iter() }
}

#[cfg(test)]
mod test {
  use std::cell::Cell;

  use itertools::Itertools;

  use crate::generate::RangeOpts;
  use crate::Seq;

  #[test]
  fn cursors_are_independent() {
    let seq = Seq::range(RangeOpts::default().end(4));
    let mut a = seq.iter();
    let mut b = seq.iter();
    assert_eq!(a.next(), Some(0));
    assert_eq!(a.next(), Some(1));
    assert_eq!(b.next(), Some(0));
    assert_eq!(a.collect_vec(), vec![2, 3]);
    assert_eq!(b.collect_vec(), vec![1, 2, 3]);
  }

  #[test]
  fn nothing_runs_before_a_pull() {
    let calls = Cell::new(0);
    let seq = Seq::tabulate(|i| i, None).map(|i| {
      calls.set(calls.get() + 1);
      i
    });
    let doubled = seq.map(|i| i * 2).skip(3);
    assert_eq!(calls.get(), 0);
    assert_eq!(doubled.nth(0), Some(6));
    assert_eq!(calls.get(), 4);
  }

  #[test]
  fn clone_ignores_consumption_of_the_original() {
    let seq = Seq::range(RangeOpts::default().start(1)).map(|n: u64| n * n).take(5);
    let before = seq.clone();
    let mut cursor = seq.iter();
    cursor.next();
    cursor.next();
    let after = seq.clone();
    assert_eq!(before.to_vec(), vec![1, 4, 9, 16, 25]);
    assert_eq!(after.to_vec(), before.to_vec());
    assert_eq!(cursor.collect_vec(), vec![9, 16, 25]);
  }

  #[test]
  fn debug_shows_the_record() {
    let seq = Seq::from_items([1, 2, 3]).map(|n| n + 1).take(2);
    assert_eq!(format!("{seq:?}"), "Seq[from_items(3) -> map -> take(2)]");
  }

  #[test]
  fn borrowing_iteration() {
    let seq = Seq::repeat("hi", 2);
    let mut seen = Vec::new();
    for s in &seq {
      seen.push(s);
    }
    assert_eq!(seen, vec!["hi", "hi"]);
  }
}
