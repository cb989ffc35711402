//! Small helpers that don't belong to any one part of the sequence engine

pub mod boxed_iter;
mod macros;
pub(crate) mod never;

pub(crate) use macros::clone;
