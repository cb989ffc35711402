//! Errors raised by sequence consumers, under a common trait object.
//!
//! Absence is not an error here, consumers like [crate::Seq::nth] return
//! [None] for that.

use std::any::Any;
use std::fmt;

use dyn_clone::{clone_box, DynClone};

use crate::history::{chain_fmt, Op};

/// A failure condition of a sequence operation. Implement this, use
/// [DynSeqError] through [SeqErrorObj] to handle several of them together.
pub trait SeqError: Clone + Sized + 'static {
  /// General description of the error condition
  const DESCRIPTION: &'static str;
  /// Specific description of the error including concrete data if possible
  fn message(&self) -> String { Self::DESCRIPTION.to_string() }
  /// Convert the error to a type-erased structure
  fn pack(self) -> SeqErrorObj { Box::new(self) }
}

/// Object-safe equivalent to [SeqError]. Implement that one instead of this.
pub trait DynSeqError: Any + DynClone {
  /// Allow to downcast the base object to distinguish between various errors
  fn as_any_ref(&self) -> &dyn Any;
  /// Generic description of the error condition
  fn description(&self) -> &str;
  /// Specific description of this particular error
  fn message(&self) -> String;
}

impl<T: SeqError> DynSeqError for T {
  fn as_any_ref(&self) -> &dyn Any { self }
  fn description(&self) -> &str { T::DESCRIPTION }
  fn message(&self) -> String { SeqError::message(self) }
}

/// Type-erased [SeqError] implementor through the object-trait [DynSeqError]
pub type SeqErrorObj = Box<dyn DynSeqError>;
/// Result of a fallible sequence operation
pub type SeqResult<T> = Result<T, SeqErrorObj>;

impl Clone for SeqErrorObj {
  fn clone(&self) -> Self { clone_box(&**self) }
}
impl fmt::Display for SeqErrorObj {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{}: {}", self.description(), self.message())
  }
}
impl fmt::Debug for SeqErrorObj {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { write!(f, "{self}") }
}
impl std::error::Error for SeqErrorObj {}

/// A sequence was about to be drained, but the way it was built shows that it
/// never ends
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Unbounded {
  /// The construction record of the sequence
  pub history: Vec<Op>,
}
impl SeqError for Unbounded {
  const DESCRIPTION: &'static str = "Draining an endless sequence would never terminate";
  fn message(&self) -> String {
    format!("{} has no end, bound it with take or until first", chain_fmt(&self.history))
  }
}
