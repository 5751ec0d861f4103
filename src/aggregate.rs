//! Ordered collection of failure reasons
//!
//! [`AggregateError`] gathers every reason produced while a list of rules runs
//! against one value. It is the error half of every validation call: the
//! engine creates one empty per call, appends to it while rules run, and
//! surfaces it whole when at least one rule failed.
//!
//! # Examples
//!
//! ```
//! use sluice::AggregateError;
//!
//! let mut errors = AggregateError::new();
//! assert!(errors.is_empty());
//!
//! errors.add("too short");
//! errors.add("not numeric");
//! errors.add("too short");
//!
//! assert_eq!(errors.len(), 3);
//! assert_eq!(errors.first(), Some(&"too short"));
//! assert_eq!(errors.iter().copied().collect::<Vec<_>>(), vec!["too short", "not numeric", "too short"]);
//! ```

use std::fmt;

use crate::Semigroup;

/// An ordered, append-only list of failure reasons.
///
/// Insertion order is preserved and duplicates are kept. Nothing is ever
/// removed once added; the only way to shrink one is to consume it with
/// [`AggregateError::into_vec`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(transparent)
)]
pub struct AggregateError<E> {
    errors: Vec<E>,
}

impl<E> AggregateError<E> {
    /// Create an empty collection.
    pub fn new() -> Self {
        Self { errors: Vec::new() }
    }

    /// Create a collection holding exactly one reason.
    ///
    /// # Example
    ///
    /// ```
    /// use sluice::AggregateError;
    ///
    /// let errors = AggregateError::single("value is missing");
    /// assert_eq!(errors.len(), 1);
    /// ```
    pub fn single(error: E) -> Self {
        Self {
            errors: vec![error],
        }
    }

    /// Append a reason to the end of the collection.
    #[inline]
    pub fn add(&mut self, error: E) {
        self.errors.push(error);
    }

    /// Returns `true` when no reason has been added.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// Number of reasons collected.
    #[inline]
    pub fn len(&self) -> usize {
        self.errors.len()
    }

    /// Get the reason at `index`, in insertion order.
    pub fn get(&self, index: usize) -> Option<&E> {
        self.errors.get(index)
    }

    /// The first reason added, if any.
    pub fn first(&self) -> Option<&E> {
        self.errors.first()
    }

    /// Iterate over the reasons in insertion order.
    ///
    /// The iterator borrows the collection, so it can be restarted any number
    /// of times and always yields the same sequence.
    pub fn iter(&self) -> std::slice::Iter<'_, E> {
        self.errors.iter()
    }

    /// View the reasons as a slice.
    pub fn as_slice(&self) -> &[E] {
        &self.errors
    }

    /// Consume the collection, returning the reasons in insertion order.
    pub fn into_vec(self) -> Vec<E> {
        self.errors
    }

    /// Turn the collection into the outcome of a validation call.
    ///
    /// Returns `Ok(value)` when no reason was collected and `Err(self)`
    /// otherwise, so an empty collection is never surfaced as an error.
    ///
    /// # Example
    ///
    /// ```
    /// use sluice::AggregateError;
    ///
    /// let empty: AggregateError<&str> = AggregateError::new();
    /// assert_eq!(empty.into_result(42), Ok(42));
    ///
    /// let failed = AggregateError::single("below minimum");
    /// assert!(failed.into_result(42).is_err());
    /// ```
    pub fn into_result<T>(self, value: T) -> Result<T, Self> {
        if self.is_empty() {
            Ok(value)
        } else {
            Err(self)
        }
    }

    /// Transform every reason, keeping their order.
    pub fn map<F, E2>(self, f: F) -> AggregateError<E2>
    where
        F: FnMut(E) -> E2,
    {
        AggregateError {
            errors: self.errors.into_iter().map(f).collect(),
        }
    }
}

impl<E> Default for AggregateError<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E> Semigroup for AggregateError<E> {
    #[inline]
    fn combine(self, other: Self) -> Self {
        Self {
            errors: self.errors.combine(other.errors),
        }
    }
}

impl<E> Extend<E> for AggregateError<E> {
    fn extend<I: IntoIterator<Item = E>>(&mut self, iter: I) {
        self.errors.extend(iter);
    }
}

impl<E> FromIterator<E> for AggregateError<E> {
    fn from_iter<I: IntoIterator<Item = E>>(iter: I) -> Self {
        Self {
            errors: iter.into_iter().collect(),
        }
    }
}

impl<E> IntoIterator for AggregateError<E> {
    type Item = E;
    type IntoIter = std::vec::IntoIter<E>;

    fn into_iter(self) -> Self::IntoIter {
        self.errors.into_iter()
    }
}

impl<'a, E> IntoIterator for &'a AggregateError<E> {
    type Item = &'a E;
    type IntoIter = std::slice::Iter<'a, E>;

    fn into_iter(self) -> Self::IntoIter {
        self.errors.iter()
    }
}

impl<E: fmt::Display> fmt::Display for AggregateError<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.errors.len() {
            0 => return write!(f, "no validation failures"),
            1 => write!(f, "1 validation failure: ")?,
            n => write!(f, "{} validation failures: ", n)?,
        }
        for (i, error) in self.errors.iter().enumerate() {
            if i > 0 {
                write!(f, "; ")?;
            }
            write!(f, "{}", error)?;
        }
        Ok(())
    }
}

impl<E: std::error::Error> std::error::Error for AggregateError<E> {}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    struct MockError(u32);

    #[test]
    fn test_new_is_empty() {
        let errors: AggregateError<MockError> = AggregateError::new();
        assert!(errors.is_empty());
        assert_eq!(errors.len(), 0);
        assert_eq!(errors.first(), None);
    }

    #[test]
    fn test_add_makes_non_empty() {
        let mut errors = AggregateError::new();
        errors.add(MockError(1));
        assert!(!errors.is_empty());
        assert_eq!(errors.get(0), Some(&MockError(1)));
    }

    #[test]
    fn test_iteration_preserves_insertion_order() {
        let mut errors = AggregateError::new();
        errors.add(MockError(1));
        errors.add(MockError(2));
        errors.add(MockError(3));

        let collected: Vec<_> = errors.iter().cloned().collect();
        assert_eq!(collected, vec![MockError(1), MockError(2), MockError(3)]);
    }

    #[test]
    fn test_iteration_is_restartable() {
        let errors: AggregateError<_> = vec![MockError(7), MockError(8)].into_iter().collect();

        let first_pass: Vec<_> = (&errors).into_iter().collect();
        let second_pass: Vec<_> = errors.iter().collect();
        assert_eq!(first_pass, second_pass);
    }

    #[test]
    fn test_duplicates_are_kept() {
        let mut errors = AggregateError::new();
        errors.add(MockError(1));
        errors.add(MockError(1));
        assert_eq!(errors.len(), 2);
    }

    #[test]
    fn test_into_result() {
        let empty: AggregateError<MockError> = AggregateError::new();
        assert_eq!(empty.into_result("ok"), Ok("ok"));

        let failed = AggregateError::single(MockError(9));
        assert_eq!(failed.clone().into_result("ok"), Err(failed));
    }

    #[test]
    fn test_combine_keeps_left_first() {
        let left = AggregateError::single(MockError(1));
        let right: AggregateError<_> = vec![MockError(2), MockError(3)].into_iter().collect();
        assert_eq!(
            left.combine(right).into_vec(),
            vec![MockError(1), MockError(2), MockError(3)]
        );
    }

    #[test]
    fn test_extend_and_map() {
        let mut errors = AggregateError::single(MockError(1));
        errors.extend(vec![MockError(2)]);
        let codes = errors.map(|e| e.0);
        assert_eq!(codes.as_slice(), &[1, 2]);
    }

    #[test]
    fn test_display() {
        let single = AggregateError::single("string is empty");
        assert_eq!(single.to_string(), "1 validation failure: string is empty");

        let many: AggregateError<_> = vec!["a", "b"].into_iter().collect();
        assert_eq!(many.to_string(), "2 validation failures: a; b");

        let none: AggregateError<&str> = AggregateError::new();
        assert_eq!(none.to_string(), "no validation failures");
    }
}
