use std::cmp::Ordering;

use num_traits::{Bounded, Num};

/// Sign of a range step. A step that doesn't compare to zero, such as NaN,
/// counts as zero.
pub(crate) fn step_direction<N: Num + PartialOrd>(step: &N) -> Ordering {
  step.partial_cmp(&N::zero()).unwrap_or(Ordering::Equal)
}

/// Arithmetic progression with an optional exclusive bound. Stops at the
/// limits of the numeric type instead of overflowing.
pub(crate) struct RangeCursor<N> {
  next: Option<N>,
  end: Option<N>,
  step: N,
  direction: Ordering,
}
impl<N: Num + Bounded + PartialOrd + Copy> RangeCursor<N> {
  pub fn new(start: N, end: Option<N>, step: N) -> Self {
    Self { next: Some(start), end, step, direction: step_direction(&step) }
  }

  /// The element after `value`, [None] if it doesn't fit the type
  fn advance(&self, value: N) -> Option<N> {
    let fits = match self.direction {
      Ordering::Equal => return Some(value),
      Ordering::Greater => value <= N::max_value() - self.step,
      Ordering::Less => value >= N::min_value() - self.step,
    };
    fits.then(|| value + self.step)
  }
}
impl<N: Num + Bounded + PartialOrd + Copy> Iterator for RangeCursor<N> {
  type Item = N;
  fn next(&mut self) -> Option<Self::Item> {
    let value = self.next?;
    let inside = match (self.direction, self.end) {
      // a zero step never moves, the bound is not consulted
      (Ordering::Equal, _) | (_, None) => true,
      (Ordering::Greater, Some(end)) => value < end,
      (Ordering::Less, Some(end)) => value > end,
    };
    self.next = if inside { self.advance(value) } else { None };
    inside.then_some(value)
  }
}
