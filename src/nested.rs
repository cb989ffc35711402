//! Sequences of sequences

use crate::cursor::DeepFlatten;
use crate::history::Op;
use crate::seq::{factory, Seq};
use crate::utils::boxed_iter::{box_once, into_boxed_iter};

/// Element of a sequence that may splice in a whole sequence in its place.
/// See [Seq::flatten]
#[derive(Clone, Debug)]
pub enum Flat<'a, T: 'a> {
  /// A plain element
  One(T),
  /// A sequence whose elements take the place of this one
  Many(Seq<'a, T>),
}

/// Element of an arbitrarily deep tree of sequences. See [Seq::deep_flatten]
#[derive(Clone, Debug)]
pub enum Node<'a, T: 'a> {
  /// A plain element
  Leaf(T),
  /// A sequence of further nodes
  Nested(Seq<'a, Node<'a, T>>),
}

impl<'a, T: 'a> Seq<'a, Flat<'a, T>> {
  /// Splice in the elements of every [Flat::Many] in place, pass
  /// [Flat::One] through. Only one level is flattened.
  pub fn flatten(&self) -> Seq<'a, T> {
    let parent = self.factory();
    let factory = factory(move || {
      into_boxed_iter(parent().flat_map(|item| match item {
        Flat::One(t) => box_once(t),
        Flat::Many(seq) => seq.iter(),
      }))
    });
    self.derive(Op::Flatten, (), |seq, ()| seq.flatten(), self.extent().flatten(), factory)
  }
}

impl<'a, T: 'a> Seq<'a, Node<'a, T>> {
  /// Splice in nested sequences recursively until only leaves remain
  pub fn deep_flatten(&self) -> Seq<'a, T> {
    let parent = self.factory();
    let factory = factory(move || into_boxed_iter(DeepFlatten::new(parent())));
    self.derive(Op::DeepFlatten, (), |seq, ()| seq.deep_flatten(), self.extent().flatten(), factory)
  }
}

#[cfg(test)]
mod test {
  use super::{Flat, Node};
  use crate::extent::Extent;
  use crate::generate::RangeOpts;
  use crate::Seq;

  #[test]
  fn flatten_of_plain_elements_is_identity() {
    let seq = Seq::from_items([3, 1, 2]).map(Flat::One).flatten();
    assert_eq!(seq.to_vec(), vec![3, 1, 2]);
  }

  #[test]
  fn flatten_splices_in_order() {
    let seq = Seq::tabulate(|i| i, 4).map(|i| match i % 2 {
      0 => Flat::Many(Seq::repeat(i, i + 1)),
      _ => Flat::One(i * 100),
    });
    assert_eq!(seq.flatten().to_vec(), vec![0, 100, 2, 2, 2, 300]);
  }

  #[test]
  fn flatten_is_one_level() {
    let inner = Seq::from_items([1, 2]).map(Flat::One);
    let seq = Seq::from_items([Flat::Many(inner.clone()), Flat::Many(inner)]);
    let once = seq.flatten();
    assert_eq!(once.count(), 4);
    assert_eq!(once.flatten().to_vec(), vec![1, 2, 1, 2]);
  }

  #[test]
  fn flatten_of_endless_inner_sequences() {
    let rows = Seq::range(RangeOpts::default()).map(|n: u32| Flat::Many(Seq::repeat(n, None)));
    assert_eq!(rows.flatten().take(3).to_vec(), vec![0, 0, 0]);
    assert_eq!(rows.flatten().extent(), Extent::Unbounded);
  }

  fn leaves<'a>(items: &[u8]) -> Node<'a, u8> {
    Node::Nested(Seq::from_items(items.to_vec()).map(Node::Leaf))
  }

  #[test]
  fn deep_flatten_any_depth() {
    let mut tree = leaves(&[9]);
    for depth in 0..50 {
      tree = Node::Nested(Seq::from_items([Node::Leaf(depth), tree]));
    }
    let flat = Seq::from_items([tree, Node::Leaf(200)]).deep_flatten();
    let expected = (0..50).rev().chain([9, 200]).collect::<Vec<u8>>();
    assert_eq!(flat.to_vec(), expected);
  }

  #[test]
  fn deep_flatten_mixed() {
    let tree = Seq::from_items([
      Node::Leaf(1),
      leaves(&[2, 3]),
      Node::Nested(Seq::from_items([leaves(&[]), leaves(&[4]), Node::Leaf(5)])),
      Node::Leaf(6),
    ]);
    assert_eq!(tree.deep_flatten().to_vec(), vec![1, 2, 3, 4, 5, 6]);
    assert_eq!(tree.deep_flatten().clone().to_vec(), vec![1, 2, 3, 4, 5, 6]);
  }
}
