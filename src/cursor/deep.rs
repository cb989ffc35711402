use crate::nested::Node;
use crate::utils::boxed_iter::BoxedIter;

/// Depth-first walk over nested sequences. Every nested sequence met on the
/// way gets its own cursor pushed on the stack, so depth is only limited by
/// memory.
pub(crate) struct DeepFlatten<'a, T>(Vec<BoxedIter<'a, Node<'a, T>>>);
impl<'a, T> DeepFlatten<'a, T> {
  pub fn new(root: BoxedIter<'a, Node<'a, T>>) -> Self { Self(vec![root]) }
}
impl<'a, T> Iterator for DeepFlatten<'a, T> {
  type Item = T;
  fn next(&mut self) -> Option<Self::Item> {
    loop {
      let next = self.0.last_mut()?.next();
      match next {
        None => {
          self.0.pop();
        },
        Some(Node::Leaf(item)) => return Some(item),
        Some(Node::Nested(seq)) => self.0.push(seq.iter()),
      }
    }
  }
}
