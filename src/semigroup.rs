//! Semigroup trait for merging failure sets
//!
//! A Semigroup is a type with an associative binary operation. Failure
//! collections are semigroups: combining two of them concatenates their
//! reasons, keeping the left-hand reasons first.
//!
//! # Examples
//!
//! ```
//! use sluice::Semigroup;
//!
//! let v1 = vec![1, 2, 3];
//! let v2 = vec![4, 5, 6];
//! assert_eq!(v1.combine(v2), vec![1, 2, 3, 4, 5, 6]);
//! ```
//!
//! ```
//! use sluice::{AggregateError, Semigroup};
//!
//! let first = AggregateError::single("too short");
//! let second = AggregateError::single("not a number");
//! let merged = first.combine(second);
//! assert_eq!(merged.as_slice(), &["too short", "not a number"]);
//! ```

/// A type that supports an associative binary operation
///
/// # Laws
///
/// Implementations must satisfy the associativity law:
/// ```text
/// a.combine(b).combine(c) == a.combine(b.combine(c))
/// ```
///
/// `combine` takes `self` by value. Clone first if the originals are still needed.
pub trait Semigroup: Sized {
    /// Combine this value with another value associatively
    fn combine(self, other: Self) -> Self;
}

impl<T> Semigroup for Vec<T> {
    #[inline]
    fn combine(mut self, other: Self) -> Self {
        self.extend(other);
        self
    }
}
