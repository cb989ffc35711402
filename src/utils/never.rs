//! Helpers for results that cannot fail

use never::Never;

/// Wrap value in a result with an impossible failure mode
pub fn always<T>(t: T) -> Result<T, Never> { Ok(t) }

/// Take success value out of a result with an impossible failure mode
pub fn unwrap_always<T>(result: Result<T, Never>) -> T { result.unwrap_or_else(|e| match e {}) }
