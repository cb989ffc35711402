#![warn(missing_docs)]
//! Lazy, possibly infinite sequences that remember how they were built.
//!
//! A [Seq] is a cursor factory: every consumer gets a fresh cursor, so one
//! sequence can be traversed any number of times without the traversals
//! interfering. Transformations wrap the factory of their parent and nothing
//! is computed until a consumer pulls.
//!
//! Every sequence also carries the record of the steps that built it.
//! Cloning replays that record from the generator, including the records of
//! any sequences passed to [Seq::append] or the zips, so a clone shares no
//! state with the original. [Seq::inspect] is deliberately missing from the
//! record.
//!
//! ```
//! use infiniseq::{RangeOpts, Seq};
//!
//! let evens = Seq::range(RangeOpts::default()).map(|n: u64| n * 2);
//! let odds = evens.clone().map(|n| n + 1);
//! let pairs = evens.zip(&odds).take(3);
//! assert_eq!(pairs.to_vec(), vec![(0, 1), (2, 3), (4, 5)]);
//! ```
pub mod consume;
mod cursor;
pub mod error;
pub mod extent;
pub mod generate;
pub mod history;
pub mod nested;
pub mod seq;
pub mod transform;
pub mod utils;
pub mod zip;

pub use error::{SeqError, SeqErrorObj, SeqResult, Unbounded};
pub use extent::Extent;
pub use generate::RangeOpts;
pub use history::Op;
pub use nested::{Flat, Node};
pub use seq::Seq;
pub use utils::boxed_iter::BoxedIter;

#[cfg(test)]
mod test {
  use crate::{Flat, Op, RangeOpts, Seq};

  /// Cloning before or after partially consuming the original must not
  /// matter for any step of the record
  #[test]
  fn clone_is_consumption_independent() {
    let base = Seq::range(RangeOpts::default().start(1)).map(|n: u64| n * 3);
    let other = Seq::tabulate(|i| i as u64, 4);
    let seq = base
      .filter(|n| n % 2 == 1)
      .until(|n| *n > 100)
      .skip(1)
      .scan(0, |a, n| a + n)
      .append(&other)
      .enumerate()
      .map(|(n, i)| n * 1000 + i as u64)
      .take(12);
    let fresh = seq.clone().to_vec();
    let mut cursor = seq.iter();
    cursor.nth(5);
    assert_eq!(seq.clone().to_vec(), fresh);
    assert_eq!(seq.to_vec(), fresh);
    assert_eq!(fresh.len(), 12);
  }

  #[test]
  fn nested_arguments_are_replayed() {
    let tail = Seq::range(RangeOpts::default().end(2)).map(|n: u8| n + 10);
    let seq = Seq::repeat(Flat::Many(tail.clone()), 2).flatten().append(&tail).cycle().take(8);
    assert_eq!(seq.to_vec(), vec![10, 11, 10, 11, 10, 11, 10, 11]);
    assert_eq!(seq.clone().to_vec(), seq.to_vec());
    assert_eq!(seq.history(), vec![
      Op::Repeat(Some(2)),
      Op::Flatten,
      Op::Append(vec![Op::Range, Op::Map]),
      Op::Cycle,
      Op::Take(8),
    ]);
  }
}
