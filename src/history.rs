//! The construction record of a sequence and the machinery that replays it.
//!
//! Every sequence remembers how it was built as a chain of steps leading back
//! to a generator. Replaying the chain calls the same constructors again with
//! the same captured arguments, which yields a sequence that shares no cursor
//! with the original. Arguments that are themselves sequences are stored as
//! their own chains and replayed along with the outer one.

use std::fmt;
use std::rc::Rc;

use itertools::Itertools;

use crate::seq::Seq;

/// The name and scalar arguments of a recorded construction step. Closures
/// are not shown, nested sequences are shown as their own history.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Op {
  /// [Seq::range]
  Range,
  /// [Seq::tabulate] with its element count
  Tabulate(Option<usize>),
  /// [Seq::repeat] with its element count
  Repeat(Option<usize>),
  /// [Seq::from_items] with the length of the collection
  FromItems(usize),
  /// [Seq::from_fn]
  FromFn,
  /// [Seq::map] and [Seq::map_indexed]
  Map,
  /// [Seq::filter]
  Filter,
  /// [Seq::until]
  Until,
  /// [Seq::take]
  Take(usize),
  /// [Seq::skip]
  Skip(usize),
  /// [Seq::enumerate]
  Enumerate,
  /// [Seq::scan]
  Scan,
  /// [Seq::append] with the history of the appended sequence
  Append(Vec<Op>),
  /// [Seq::cycle]
  Cycle,
  /// [Seq::flatten]
  Flatten,
  /// [Seq::deep_flatten]
  DeepFlatten,
  /// [Seq::zip_long] with the history of each operand
  ZipLong(Vec<Vec<Op>>),
  /// [Seq::zip_short] with the history of each operand
  ZipShort(Vec<Vec<Op>>),
  /// [Seq::zip] with the history of the other operand
  Zip(Vec<Op>),
  /// [Seq::zip_longest] with the history of the other operand
  ZipLongest(Vec<Op>),
}

fn count_fmt(count: &Option<usize>) -> String {
  count.map_or_else(|| "∞".to_string(), |n| n.to_string())
}

/// Format a history the way [Seq]'s [fmt::Debug] shows it
pub(crate) fn chain_fmt(ops: &[Op]) -> String { ops.iter().join(" -> ") }

impl fmt::Display for Op {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      Self::Range => write!(f, "range"),
      Self::Tabulate(count) => write!(f, "tabulate({})", count_fmt(count)),
      Self::Repeat(count) => write!(f, "repeat({})", count_fmt(count)),
      Self::FromItems(len) => write!(f, "from_items({len})"),
      Self::FromFn => write!(f, "from_fn"),
      Self::Map => write!(f, "map"),
      Self::Filter => write!(f, "filter"),
      Self::Until => write!(f, "until"),
      Self::Take(n) => write!(f, "take({n})"),
      Self::Skip(n) => write!(f, "skip({n})"),
      Self::Enumerate => write!(f, "enumerate"),
      Self::Scan => write!(f, "scan"),
      Self::Append(other) => write!(f, "append[{}]", chain_fmt(other)),
      Self::Cycle => write!(f, "cycle"),
      Self::Flatten => write!(f, "flatten"),
      Self::DeepFlatten => write!(f, "deep_flatten"),
      Self::ZipLong(ops) =>
        write!(f, "zip_long[{}]", ops.iter().map(|o| chain_fmt(o)).join(", ")),
      Self::ZipShort(ops) =>
        write!(f, "zip_short[{}]", ops.iter().map(|o| chain_fmt(o)).join(", ")),
      Self::Zip(other) => write!(f, "zip[{}]", chain_fmt(other)),
      Self::ZipLongest(other) => write!(f, "zip_longest[{}]", chain_fmt(other)),
    }
  }
}

/// One link of a construction record
pub(crate) trait Step<'a, T: 'a>: 'a {
  /// Push the ops of every step up to and including this one, oldest first
  fn record(&self, log: &mut Vec<Op>);
  /// Build a fresh sequence by calling every constructor in the chain again
  fn replay(&self) -> Seq<'a, T>;
}

/// Shared handle to the last step of a construction record
pub(crate) type History<'a, T> = Rc<dyn Step<'a, T> + 'a>;

/// Collect the ops of a record
pub(crate) fn ops<'a, T: 'a>(history: &History<'a, T>) -> Vec<Op> {
  let mut log = Vec::new();
  history.record(&mut log);
  log
}

/// A step with no parent: a generator or a static combinator
pub(crate) struct Origin<'a, A, T: 'a> {
  pub op: Op,
  pub args: A,
  pub build: fn(&A) -> Seq<'a, T>,
}
impl<'a, A: 'a, T: 'a> Step<'a, T> for Origin<'a, A, T> {
  fn record(&self, log: &mut Vec<Op>) { log.push(self.op.clone()) }
  fn replay(&self) -> Seq<'a, T> { (self.build)(&self.args) }
}

/// A step applied to the output of another step
pub(crate) struct Derived<'a, P: 'a, A, T: 'a> {
  pub op: Op,
  pub parent: History<'a, P>,
  pub args: A,
  pub apply: fn(&Seq<'a, P>, &A) -> Seq<'a, T>,
}
impl<'a, P: 'a, A: 'a, T: 'a> Step<'a, T> for Derived<'a, P, A, T> {
  fn record(&self, log: &mut Vec<Op>) {
    self.parent.record(log);
    log.push(self.op.clone())
  }
  fn replay(&self) -> Seq<'a, T> { (self.apply)(&self.parent.replay(), &self.args) }
}
