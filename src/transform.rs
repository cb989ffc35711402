//! Lazy transformations. Each one wraps the factory of its parent and records
//! itself, except [Seq::inspect].

use std::rc::Rc;

use crate::cursor::{Append, Cycle, Scan};
use crate::extent::Extent;
use crate::history::Op;
use crate::seq::{factory, Seq};
use crate::utils::boxed_iter::into_boxed_iter;
use crate::utils::clone;

impl<'a, T: 'a> Seq<'a, T> {
  /// Apply a function to every element and its index
  pub fn map_indexed<S: 'a>(&self, f: impl Fn(T, usize) -> S + 'a) -> Seq<'a, S> {
    self.map_rc(Rc::new(f))
  }

  /// Apply a function to every element
  pub fn map<S: 'a>(&self, f: impl Fn(T) -> S + 'a) -> Seq<'a, S> {
    self.map_indexed(move |t, _| f(t))
  }

  fn map_rc<S: 'a>(&self, f: Rc<dyn Fn(T, usize) -> S + 'a>) -> Seq<'a, S> {
    let parent = self.factory();
    let factory = factory(clone!(f; move || {
      into_boxed_iter(parent().enumerate().map(clone!(f; move |(i, t)| f(t, i))))
    }));
    self.derive(Op::Map, f, |seq, f| seq.map_rc(f.clone()), self.extent(), factory)
  }

  /// Keep the elements that satisfy the predicate
  pub fn filter(&self, pred: impl Fn(&T) -> bool + 'a) -> Self { self.filter_rc(Rc::new(pred)) }

  fn filter_rc(&self, pred: Rc<dyn Fn(&T) -> bool + 'a>) -> Self {
    let parent = self.factory();
    let factory = factory(clone!(pred; move || {
      into_boxed_iter(parent().filter(clone!(pred; move |t| pred(t))))
    }));
    self.derive(Op::Filter, pred, |seq, p| seq.filter_rc(p.clone()), self.extent(), factory)
  }

  /// End the sequence right before the first element that satisfies the
  /// predicate. Unlike [Seq::filter], nothing after that element is looked at.
  pub fn until(&self, pred: impl Fn(&T) -> bool + 'a) -> Self { self.until_rc(Rc::new(pred)) }

  fn until_rc(&self, pred: Rc<dyn Fn(&T) -> bool + 'a>) -> Self {
    let parent = self.factory();
    let factory = factory(clone!(pred; move || {
      into_boxed_iter(parent().take_while(clone!(pred; move |t| !pred(t))))
    }));
    self.derive(Op::Until, pred, |seq, p| seq.until_rc(p.clone()), self.extent().until(), factory)
  }

  /// The first `n` elements, or all of them if there are fewer
  pub fn take(&self, n: usize) -> Self {
    let parent = self.factory();
    let factory = factory(move || into_boxed_iter(parent().take(n)));
    self.derive(Op::Take(n), n, |seq, n| seq.take(*n), Extent::Bounded, factory)
  }

  /// Everything after the first `n` elements
  #[doc(alias = "drop")]
  pub fn skip(&self, n: usize) -> Self {
    let parent = self.factory();
    let factory = factory(move || into_boxed_iter(parent().skip(n)));
    self.derive(Op::Skip(n), n, |seq, n| seq.skip(*n), self.extent(), factory)
  }

  /// Pair every element with its index
  pub fn enumerate(&self) -> Seq<'a, (T, usize)> {
    let parent = self.factory();
    let factory = factory(move || into_boxed_iter(parent().enumerate().map(|(i, t)| (t, i))));
    self.derive(Op::Enumerate, (), |seq, ()| seq.enumerate(), self.extent(), factory)
  }

  /// Running fold. Yields the accumulator after every element, so the output
  /// is as long as the input and never contains `init` itself.
  pub fn scan<S: Clone + 'a>(&self, init: S, combine: impl Fn(S, T) -> S + 'a) -> Seq<'a, S> {
    self.scan_rc(init, Rc::new(combine))
  }

  fn scan_rc<S: Clone + 'a>(&self, init: S, combine: Rc<dyn Fn(S, T) -> S + 'a>) -> Seq<'a, S> {
    let parent = self.factory();
    let factory = factory(clone!(init, combine; move || {
      into_boxed_iter(Scan::new(parent(), init.clone(), combine.clone()))
    }));
    let (args, extent) = ((init, combine), self.extent());
    self.derive(Op::Scan, args, |seq, (i, f)| seq.scan_rc(i.clone(), f.clone()), extent, factory)
  }

  /// Call a function on every element as it passes through.
  ///
  /// This step is not recorded, a clone of the result or of anything built
  /// on it will not call `visit`.
  pub fn inspect(&self, visit: impl Fn(&T) + 'a) -> Self {
    let parent = self.factory();
    let visit = Rc::new(visit);
    self.unrecorded(factory(move || {
      into_boxed_iter(parent().inspect(clone!(visit; move |t| visit(t))))
    }))
  }

  /// All elements of this sequence followed by all elements of `other`.
  /// A clone replays `other` as well.
  pub fn append(&self, other: &Self) -> Self {
    let (parent, back) = (self.factory(), other.factory());
    let factory = factory(move || into_boxed_iter(Append::new(parent(), back.clone())));
    let extent = self.extent().append(other.extent());
    let op = Op::Append(other.history());
    self.derive(op, other.record(), |seq, o| seq.append(&o.replay()), extent, factory)
  }

  /// Repeat the whole sequence forever. Every lap starts a fresh cursor on
  /// this sequence; if a lap yields nothing, the cycle ends.
  #[doc(alias = "loop")]
  pub fn cycle(&self) -> Self {
    let parent = self.factory();
    let factory = factory(move || into_boxed_iter(Cycle::new(parent.clone())));
    self.derive(Op::Cycle, (), |seq, ()| seq.cycle(), self.extent().cycle(), factory)
  }
}
