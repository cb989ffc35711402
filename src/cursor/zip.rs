use itertools::Itertools;

use crate::utils::boxed_iter::BoxedIter;

/// Rows of one element per operand until every operand is exhausted. An
/// exhausted operand is dropped and reads as [None] from then on.
pub(crate) struct ZipLong<'a, T>(Vec<Option<BoxedIter<'a, T>>>);
impl<'a, T> ZipLong<'a, T> {
  pub fn new(operands: impl IntoIterator<Item = BoxedIter<'a, T>>) -> Self {
    Self(operands.into_iter().map(Some).collect())
  }
}
impl<'a, T> Iterator for ZipLong<'a, T> {
  type Item = Vec<Option<T>>;
  fn next(&mut self) -> Option<Self::Item> {
    let row = (self.0.iter_mut())
      .map(|slot| {
        let item = slot.as_mut().and_then(|cursor| cursor.next());
        if item.is_none() {
          *slot = None;
        }
        item
      })
      .collect_vec();
    row.iter().any(Option::is_some).then_some(row)
  }
}

/// Rows of one element per operand until any operand is exhausted
pub(crate) struct ZipShort<'a, T> {
  operands: Vec<BoxedIter<'a, T>>,
  done: bool,
}
impl<'a, T> ZipShort<'a, T> {
  pub fn new(operands: impl IntoIterator<Item = BoxedIter<'a, T>>) -> Self {
    let operands = operands.into_iter().collect_vec();
    Self { done: operands.is_empty(), operands }
  }
}
impl<'a, T> Iterator for ZipShort<'a, T> {
  type Item = Vec<T>;
  fn next(&mut self) -> Option<Self::Item> {
    if self.done {
      return None;
    }
    let row = self.operands.iter_mut().map(|cursor| cursor.next()).collect::<Option<Vec<_>>>();
    self.done = row.is_none();
    row
  }
}

#[cfg(test)]
mod test {
  use itertools::Itertools;

  use super::{ZipLong, ZipShort};
  use crate::utils::boxed_iter::{into_boxed_iter, BoxedIter};

  fn cursors(lens: &[usize]) -> Vec<BoxedIter<'static, usize>> {
    lens.iter().map(|len| into_boxed_iter(0..*len)).collect()
  }

  #[test]
  fn long_pads_exhausted_operands() {
    let rows = ZipLong::new(cursors(&[1, 3])).collect_vec();
    assert_eq!(rows, vec![vec![Some(0), Some(0)], vec![None, Some(1)], vec![None, Some(2)]]);
  }

  #[test]
  fn short_stops_at_the_first_gap() {
    let rows = ZipShort::new(cursors(&[2, 5, 3])).collect_vec();
    assert_eq!(rows, vec![vec![0, 0, 0], vec![1, 1, 1]]);
  }

  #[test]
  fn no_operands_no_rows() {
    assert_eq!(ZipLong::new(cursors(&[])).count(), 0);
    assert_eq!(ZipShort::new(cursors(&[])).count(), 0);
  }
}
