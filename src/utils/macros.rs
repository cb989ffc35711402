/// Shadow each listed binding with a clone of itself, then evaluate the body.
/// Used in front of `move` closures that must leave the originals usable.
macro_rules! clone {
  ($($n:ident),+ $(,)?; $body:expr) => {{
    $( let $n = $n.clone(); )+
    $body
  }};
}
pub(crate) use clone;
