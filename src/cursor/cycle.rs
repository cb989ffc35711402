use crate::seq::Factory;
use crate::utils::boxed_iter::BoxedIter;

/// Restarts its source with a fresh cursor whenever the current one runs out.
/// Ends if an entire lap produced nothing.
pub(crate) struct Cycle<'a, T> {
  source: Factory<'a, T>,
  current: BoxedIter<'a, T>,
  lap: usize,
  lap_empty: bool,
}
impl<'a, T> Cycle<'a, T> {
  pub fn new(source: Factory<'a, T>) -> Self {
    let current = source();
    Self { source, current, lap: 0, lap_empty: true }
  }
}
impl<'a, T> Iterator for Cycle<'a, T> {
  type Item = T;
  fn next(&mut self) -> Option<Self::Item> {
    loop {
      if let Some(item) = self.current.next() {
        self.lap_empty = false;
        return Some(item);
      }
      if self.lap_empty {
        return None;
      }
      self.lap += 1;
      tracing::trace!(lap = self.lap, "cycle restarting its source");
      self.current = (self.source)();
      self.lap_empty = true;
    }
  }
}
