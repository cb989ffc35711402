//! Length information derived from the way a sequence was built

/// Whether draining a sequence is known to terminate. Derived from the
/// construction steps alone, no element is ever computed to find it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Extent {
  /// Draining the sequence terminates
  Bounded,
  /// Draining the sequence never terminates
  Unbounded,
  /// Depends on the elements or on callbacks
  Unknown,
}

impl Extent {
  /// [Extent::Bounded] when true, [Extent::Unbounded] otherwise
  pub fn bounded_if(bounded: bool) -> Self { if bounded { Self::Bounded } else { Self::Unbounded } }

  /// Stopping at a predicate can turn an endless sequence into a finite one,
  /// but only the elements can tell
  pub fn until(self) -> Self {
    match self {
      Self::Bounded => Self::Bounded,
      Self::Unbounded | Self::Unknown => Self::Unknown,
    }
  }

  /// The whole of self, then the whole of other
  pub fn append(self, other: Self) -> Self {
    match (self, other) {
      (Self::Unbounded, _) | (_, Self::Unbounded) => Self::Unbounded,
      (Self::Bounded, Self::Bounded) => Self::Bounded,
      _ => Self::Unknown,
    }
  }

  /// Repeating the source forever. An empty source cycles into an empty
  /// sequence, which this conservatively reports as unbounded.
  pub fn cycle(self) -> Self {
    match self {
      Self::Unknown => Self::Unknown,
      Self::Bounded | Self::Unbounded => Self::Unbounded,
    }
  }

  /// Splicing in elements that may be endless themselves
  pub fn flatten(self) -> Self {
    match self {
      Self::Unbounded => Self::Unbounded,
      Self::Bounded | Self::Unknown => Self::Unknown,
    }
  }

  /// Running until every operand ends
  pub fn zip_long(operands: impl IntoIterator<Item = Self>) -> Self {
    operands.into_iter().fold(Self::Bounded, |acc, ext| match (acc, ext) {
      (Self::Unbounded, _) | (_, Self::Unbounded) => Self::Unbounded,
      (Self::Unknown, _) | (_, Self::Unknown) => Self::Unknown,
      (Self::Bounded, Self::Bounded) => Self::Bounded,
    })
  }

  /// Running until any operand ends. No operands at all yield nothing.
  pub fn zip_short(operands: impl IntoIterator<Item = Self>) -> Self {
    let mut operands = operands.into_iter().peekable();
    if operands.peek().is_none() {
      return Self::Bounded;
    }
    operands.fold(Self::Unbounded, |acc, ext| match (acc, ext) {
      (Self::Bounded, _) | (_, Self::Bounded) => Self::Bounded,
      (Self::Unknown, _) | (_, Self::Unknown) => Self::Unknown,
      (Self::Unbounded, Self::Unbounded) => Self::Unbounded,
    })
  }
}

#[cfg(test)]
mod test {
  use super::Extent::{self, *};

  #[test]
  fn zip_long_waits_for_the_longest() {
    assert_eq!(Extent::zip_long([Bounded, Bounded]), Bounded);
    assert_eq!(Extent::zip_long([Bounded, Unknown]), Unknown);
    assert_eq!(Extent::zip_long([Unknown, Unbounded, Bounded]), Unbounded);
    assert_eq!(Extent::zip_long([]), Bounded);
  }

  #[test]
  fn zip_short_stops_at_the_shortest() {
    assert_eq!(Extent::zip_short([Unbounded, Unbounded]), Unbounded);
    assert_eq!(Extent::zip_short([Unbounded, Unknown]), Unknown);
    assert_eq!(Extent::zip_short([Unknown, Unbounded, Bounded]), Bounded);
    assert_eq!(Extent::zip_short([]), Bounded);
  }

  #[test]
  fn append_and_cycle() {
    assert_eq!(Bounded.append(Bounded), Bounded);
    assert_eq!(Bounded.append(Unknown), Unknown);
    assert_eq!(Unknown.append(Unbounded), Unbounded);
    assert_eq!(Bounded.cycle(), Unbounded);
    assert_eq!(Unknown.cycle(), Unknown);
    assert_eq!(Unbounded.until(), Unknown);
    assert_eq!(Bounded.flatten(), Unknown);
  }
}
