use std::rc::Rc;

use crate::utils::boxed_iter::BoxedIter;

/// Running fold that yields every intermediate accumulator. If `combine`
/// unwinds, the accumulator is gone and the cursor is exhausted.
pub(crate) struct Scan<'a, T, S> {
  source: BoxedIter<'a, T>,
  acc: Option<S>,
  combine: Rc<dyn Fn(S, T) -> S + 'a>,
}
impl<'a, T, S> Scan<'a, T, S> {
  pub fn new(source: BoxedIter<'a, T>, init: S, combine: Rc<dyn Fn(S, T) -> S + 'a>) -> Self {
    Self { source, acc: Some(init), combine }
  }
}
impl<'a, T, S: Clone> Iterator for Scan<'a, T, S> {
  type Item = S;
  fn next(&mut self) -> Option<Self::Item> {
    let item = self.source.next()?;
    let acc = self.acc.take()?;
    let next = (self.combine)(acc, item);
    self.acc = Some(next.clone());
    Some(next)
  }
}

#[cfg(test)]
mod test {
  use std::panic::{catch_unwind, AssertUnwindSafe};
  use std::rc::Rc;

  use itertools::Itertools;

  use super::Scan;
  use crate::utils::boxed_iter::into_boxed_iter;

  #[test]
  fn moves_the_accumulator() {
    let words = into_boxed_iter(["a", "b", "c"]);
    let scan = Scan::new(words, String::new(), Rc::new(|mut acc: String, s: &str| {
      acc.push_str(s);
      acc
    }));
    assert_eq!(scan.collect_vec(), vec!["a", "ab", "abc"]);
  }

  #[test]
  fn unwinding_combine_exhausts_the_cursor() {
    let combine: Rc<dyn Fn(i32, i32) -> i32> =
      Rc::new(|acc, n| if n == 2 { panic!("two") } else { acc + n });
    let mut scan = Scan::new(into_boxed_iter(1..5), 0, combine);
    assert_eq!(scan.next(), Some(1));
    assert!(catch_unwind(AssertUnwindSafe(|| scan.next())).is_err());
    assert_eq!(scan.next(), None);
  }
}
