use crate::seq::Factory;
use crate::utils::boxed_iter::BoxedIter;

enum State<'a, T> {
  Front(BoxedIter<'a, T>, Factory<'a, T>),
  Back(BoxedIter<'a, T>),
}

/// Drains one cursor, then asks the second factory for a cursor. The second
/// factory isn't invoked until the first cursor runs out.
pub(crate) struct Append<'a, T>(State<'a, T>);
impl<'a, T> Append<'a, T> {
  pub fn new(front: BoxedIter<'a, T>, back: Factory<'a, T>) -> Self {
    Self(State::Front(front, back))
  }
}
impl<'a, T> Iterator for Append<'a, T> {
  type Item = T;
  fn next(&mut self) -> Option<Self::Item> {
    match &mut self.0 {
      State::Back(back) => back.next(),
      State::Front(front, back) => match front.next() {
        Some(item) => Some(item),
        None => {
          let back = back();
          self.0 = State::Back(back);
          self.next()
        },
      },
    }
  }
}
