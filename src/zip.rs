//! Positional combination of several sequences

use itertools::{EitherOrBoth, Itertools};

use crate::cursor::{ZipLong, ZipShort};
use crate::extent::Extent;
use crate::history::{History, Op};
use crate::seq::{factory, Seq};
use crate::utils::boxed_iter::into_boxed_iter;

/// Clone each operand of a static combinator
fn replay_all<'a, T: 'a>(records: &[History<'a, T>]) -> Vec<Seq<'a, T>> {
  records.iter().map(|r| r.replay()).collect()
}

impl<'a, T: 'a> Seq<'a, T> {
  /// Rows with one slot per operand until every operand is exhausted.
  /// Operands that ran out read as [None]. With no operands the result is
  /// empty.
  pub fn zip_long<'b>(operands: impl IntoIterator<Item = &'b Seq<'a, T>>) -> Seq<'a, Vec<Option<T>>>
  where 'a: 'b {
    let operands = operands.into_iter().collect_vec();
    let factories = operands.iter().map(|s| s.factory()).collect_vec();
    let factory = factory(move || into_boxed_iter(ZipLong::new(factories.iter().map(|f| f()))));
    let extent = Extent::zip_long(operands.iter().map(|s| s.extent()));
    let op = Op::ZipLong(operands.iter().map(|s| s.history()).collect());
    let records = operands.iter().map(|s| s.record()).collect_vec();
    Seq::origin(op, records, |r| Seq::zip_long(&replay_all(r)), extent, factory)
  }

  /// Rows with one element from each operand until any operand is exhausted.
  /// With no operands the result is empty.
  pub fn zip_short<'b>(operands: impl IntoIterator<Item = &'b Seq<'a, T>>) -> Seq<'a, Vec<T>>
  where 'a: 'b {
    let operands = operands.into_iter().collect_vec();
    let factories = operands.iter().map(|s| s.factory()).collect_vec();
    let factory = factory(move || into_boxed_iter(ZipShort::new(factories.iter().map(|f| f()))));
    let extent = Extent::zip_short(operands.iter().map(|s| s.extent()));
    let op = Op::ZipShort(operands.iter().map(|s| s.history()).collect());
    let records = operands.iter().map(|s| s.record()).collect_vec();
    Seq::origin(op, records, |r| Seq::zip_short(&replay_all(r)), extent, factory)
  }

  /// Pairs of elements from this and the other sequence, until either ends
  pub fn zip<U: 'a>(&self, other: &Seq<'a, U>) -> Seq<'a, (T, U)> {
    let (parent, right) = (self.factory(), other.factory());
    let factory = factory(move || into_boxed_iter(parent().zip(right())));
    let extent = Extent::zip_short([self.extent(), other.extent()]);
    let op = Op::Zip(other.history());
    self.derive(op, other.record(), |seq, o| seq.zip(&o.replay()), extent, factory)
  }

  /// Pairs of elements from this and the other sequence until both end. Once
  /// one side is over, the other continues alone.
  pub fn zip_longest<U: 'a>(&self, other: &Seq<'a, U>) -> Seq<'a, EitherOrBoth<T, U>> {
    let (parent, right) = (self.factory(), other.factory());
    let factory = factory(move || into_boxed_iter(parent().zip_longest(right())));
    let extent = Extent::zip_long([self.extent(), other.extent()]);
    let op = Op::ZipLongest(other.history());
    self.derive(op, other.record(), |seq, o| seq.zip_longest(&o.replay()), extent, factory)
  }
}

#[cfg(test)]
mod test {
  use itertools::EitherOrBoth;

  use crate::generate::RangeOpts;
  use crate::history::Op;
  use crate::Seq;

  fn naturals<'a>() -> Seq<'a, usize> { Seq::range(RangeOpts::default()) }

  #[test]
  fn zip_long_pads_with_none() {
    let a = Seq::from_items([1, 2, 3]);
    let b = Seq::from_items([10]);
    let c = Seq::from_items([100, 200]);
    assert_eq!(Seq::zip_long([&a, &b, &c]).to_vec(), vec![
      vec![Some(1), Some(10), Some(100)],
      vec![Some(2), None, Some(200)],
      vec![Some(3), None, None],
    ]);
  }

  #[test]
  fn zip_short_never_pads() {
    let a = Seq::from_items([1, 2, 3]);
    let b = naturals().map(|n| -(n as i32));
    assert_eq!(Seq::zip_short([&a, &b]).to_vec(), vec![vec![1, 0], vec![2, -1], vec![3, -2]]);
    assert_eq!(Seq::zip_short([&a, &Seq::from_items([])]).count(), 0);
  }

  #[test]
  fn no_operands() {
    assert_eq!(Seq::<u8>::zip_long([]).count(), 0);
    assert_eq!(Seq::<u8>::zip_short([]).count(), 0);
  }

  #[test]
  fn an_operand_zipped_with_itself_is_not_shared() {
    let seq = naturals().take(3);
    assert_eq!(Seq::zip_short([&seq, &seq]).to_vec(), vec![vec![0, 0], vec![1, 1], vec![2, 2]]);
  }

  #[test]
  fn three_ways_to_enumerate() {
    let seq = naturals().map(|n| n * 7).take(6);
    let enumerated = seq.enumerate().to_vec();
    let indexed = seq.map_indexed(|x, i| (x, i)).to_vec();
    let zipped = Seq::zip_short([&seq, &naturals()]).map(|row| (row[0], row[1])).to_vec();
    assert_eq!(enumerated, indexed);
    assert_eq!(enumerated, zipped);
    assert_eq!(enumerated.len(), 6);
  }

  #[test]
  fn clones_share_nothing() {
    let evens = naturals().map(|n| n * 2);
    let odds = evens.clone().map(|n| n + 1);
    let zipped = Seq::zip_long([&evens, &odds]).take(20);
    let first = zipped.clone().take(10);
    let second = zipped.clone().skip(10);
    let row = |n: usize| vec![Some(2 * n), Some(2 * n + 1)];
    assert_eq!(first.to_vec(), (0..10).map(row).collect::<Vec<_>>());
    assert_eq!(second.to_vec(), (10..20).map(row).collect::<Vec<_>>());
    assert_eq!(zipped.history(), vec![
      Op::ZipLong(vec![vec![Op::Range, Op::Map], vec![Op::Range, Op::Map, Op::Map]]),
      Op::Take(20),
    ]);
  }

  #[test]
  fn binary_zips() {
    let letters = Seq::from_items(['a', 'b', 'c']);
    let pairs = letters.zip(&naturals());
    assert_eq!(pairs.to_vec(), vec![('a', 0), ('b', 1), ('c', 2)]);
    let long = letters.zip_longest(&naturals().take(1));
    assert_eq!(long.to_vec(), vec![
      EitherOrBoth::Both('a', 0),
      EitherOrBoth::Left('b'),
      EitherOrBoth::Left('c'),
    ]);
    assert_eq!(long.clone().to_vec(), long.to_vec());
  }
}
