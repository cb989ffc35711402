//! Generators, the steps every construction record starts with

use std::cmp::Ordering;
use std::rc::Rc;

use itertools::repeat_n;
use num_traits::{Bounded, Num};

use crate::cursor::{step_direction, RangeCursor};
use crate::extent::Extent;
use crate::history::Op;
use crate::seq::{factory, Factory, Seq};
use crate::utils::boxed_iter::into_boxed_iter;
use crate::utils::clone;

/// Parameters of [Seq::range]. The default counts up from zero by one
/// forever.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RangeOpts<N> {
  /// First element
  pub start: N,
  /// Exclusive bound. [None] means the range never ends, whichever direction
  /// it goes
  pub end: Option<N>,
  /// Difference between consecutive elements. Zero repeats `start` forever
  /// and ignores `end`.
  pub step: N,
}
impl<N: Num> Default for RangeOpts<N> {
  fn default() -> Self { Self { start: N::zero(), end: None, step: N::one() } }
}
impl<N> RangeOpts<N> {
  /// Set the first element
  pub fn start(self, start: N) -> Self { Self { start, ..self } }
  /// Set the exclusive bound
  pub fn end(self, end: N) -> Self { Self { end: Some(end), ..self } }
  /// Set the difference between consecutive elements
  pub fn step(self, step: N) -> Self { Self { step, ..self } }
}

impl<'a, N: Num + Bounded + PartialOrd + Copy + 'a> Seq<'a, N> {
  /// Arithmetic progression from `start` by `step` while the elements are
  /// below `end`, or above it for a negative step. The progression also ends
  /// at the last element before it would leave the range of `N`.
  pub fn range(opts: RangeOpts<N>) -> Self {
    let RangeOpts { start, end, step } = opts;
    let extent = Extent::bounded_if(end.is_some() && step_direction(&step) != Ordering::Equal);
    let factory = factory(move || into_boxed_iter(RangeCursor::new(start, end, step)));
    Seq::origin(Op::Range, opts, |opts| Seq::range(*opts), extent, factory)
  }
}

impl<'a, T: 'a> Seq<'a, T> {
  /// `f(0), f(1), ...` for `count` elements, forever if the count is [None]
  pub fn tabulate(f: impl Fn(usize) -> T + 'a, count: impl Into<Option<usize>>) -> Self {
    Self::tabulate_rc(Rc::new(f), count.into())
  }

  fn tabulate_rc(f: Rc<dyn Fn(usize) -> T + 'a>, count: Option<usize>) -> Self {
    let factory = factory(clone!(f; move || {
      let indices = match count {
        Some(n) => into_boxed_iter(0..n),
        None => into_boxed_iter(0..),
      };
      into_boxed_iter(indices.map(clone!(f; move |i| f(i))))
    }));
    let (op, extent) = (Op::Tabulate(count), Extent::bounded_if(count.is_some()));
    Seq::origin(op, (f, count), |(f, n)| Seq::tabulate_rc(f.clone(), *n), extent, factory)
  }

  /// A sequence of whatever the iterables returned by `f` yield. `f` is
  /// called once for every cursor.
  pub fn from_fn<I>(f: impl Fn() -> I + 'a) -> Self
  where
    I: IntoIterator<Item = T>,
    I::IntoIter: 'a,
  {
    Self::from_factory(factory(move || into_boxed_iter(f())))
  }

  fn from_factory(f: Factory<'a, T>) -> Self {
    Seq::origin(Op::FromFn, f.clone(), |f| Seq::from_factory(f.clone()), Extent::Unknown, f)
  }
}

impl<'a, T: Clone + 'a> Seq<'a, T> {
  /// `value`, `count` times or forever if the count is [None]
  pub fn repeat(value: T, count: impl Into<Option<usize>>) -> Self {
    let count = count.into();
    let factory = factory(clone!(value; move || match count {
      Some(n) => into_boxed_iter(repeat_n(value.clone(), n)),
      None => into_boxed_iter(std::iter::repeat(value.clone())),
    }));
    let extent = Extent::bounded_if(count.is_some());
    let args = (value, count);
    Seq::origin(Op::Repeat(count), args, |(v, n)| Seq::repeat(v.clone(), *n), extent, factory)
  }

  /// The elements of a collection in order. The collection is read once,
  /// here, and every cursor yields clones of its elements.
  pub fn from_items(items: impl IntoIterator<Item = T>) -> Self {
    Self::from_rc(items.into_iter().collect())
  }

  fn from_rc(items: Rc<[T]>) -> Self {
    let factory = factory(clone!(items; move || {
      let items = items.clone();
      into_boxed_iter((0..items.len()).map(move |i| items[i].clone()))
    }));
    let op = Op::FromItems(items.len());
    Seq::origin(op, items, |items| Seq::from_rc(items.clone()), Extent::Bounded, factory)
  }
}

impl<'a, T: Clone + 'a> FromIterator<T> for Seq<'a, T> {
  fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self { Self::from_items(iter) }
}
