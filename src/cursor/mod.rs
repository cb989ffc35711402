//! Explicit state machines behind the cursors of the less trivial steps. The
//! single-upstream steps use the adapters of [Iterator] instead.

mod append;
mod cycle;
mod deep;
mod range;
mod scan;
mod zip;

pub(crate) use append::Append;
pub(crate) use cycle::Cycle;
pub(crate) use deep::DeepFlatten;
pub(crate) use range::{step_direction, RangeCursor};
pub(crate) use scan::Scan;
pub(crate) use zip::{ZipLong, ZipShort};
