//! The rule contract
//!
//! A [`Rule`] inspects one value and either accepts it or explains why it
//! rejects it. Rules never mutate the value and never panic: a rule whose own
//! parameters make no sense reports that as a failure reason too.
//!
//! The built-in catalogs ([`StringRule`](crate::StringRule),
//! [`BoundRule`](crate::BoundRule)) are closed enums. Anything else can
//! implement the trait directly or go through [`rule_fn`].
//!
//! # Example
//!
//! ```rust
//! use sluice::{rule_fn, validate, Rule};
//!
//! let even = rule_fn(|n: &i32| if n % 2 == 0 { Ok(()) } else { Err("odd") });
//! assert_eq!(even.check(&4), Ok(()));
//! assert_eq!(even.check(&3), Err("odd"));
//!
//! assert_eq!(validate(8, [&even]), Ok(8));
//! ```

use std::marker::PhantomData;
use std::sync::Arc;

/// A check over values of type `T`.
///
/// Implementations must be deterministic and free of side effects, so that
/// running the same rules against the same value always yields the same
/// failures in the same order.
pub trait Rule<T: ?Sized> {
    /// The reason reported when a value is rejected.
    type Error;

    /// Accept `value`, or return the reason it is rejected.
    fn check(&self, value: &T) -> Result<(), Self::Error>;
}

impl<T: ?Sized, R: Rule<T> + ?Sized> Rule<T> for &R {
    type Error = R::Error;

    #[inline]
    fn check(&self, value: &T) -> Result<(), Self::Error> {
        (**self).check(value)
    }
}

impl<T: ?Sized, R: Rule<T> + ?Sized> Rule<T> for Box<R> {
    type Error = R::Error;

    #[inline]
    fn check(&self, value: &T) -> Result<(), Self::Error> {
        (**self).check(value)
    }
}

impl<T: ?Sized, R: Rule<T> + ?Sized> Rule<T> for Arc<R> {
    type Error = R::Error;

    #[inline]
    fn check(&self, value: &T) -> Result<(), Self::Error> {
        (**self).check(value)
    }
}

/// A rule backed by a closure.
///
/// Created by [`rule_fn`].
pub struct FnRule<F, E> {
    f: F,
    _error: PhantomData<fn() -> E>,
}

impl<F: Clone, E> Clone for FnRule<F, E> {
    fn clone(&self) -> Self {
        Self {
            f: self.f.clone(),
            _error: PhantomData,
        }
    }
}

impl<F, E> std::fmt::Debug for FnRule<F, E> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FnRule").finish_non_exhaustive()
    }
}

impl<T: ?Sized, F, E> Rule<T> for FnRule<F, E>
where
    F: Fn(&T) -> Result<(), E>,
{
    type Error = E;

    #[inline]
    fn check(&self, value: &T) -> Result<(), E> {
        (self.f)(value)
    }
}

/// Wrap a closure as a [`Rule`].
///
/// # Example
///
/// ```rust
/// use sluice::{rule_fn, Rule};
///
/// let no_spaces = rule_fn(|s: &str| {
///     if s.contains(' ') {
///         Err(format!("'{}' contains a space", s))
///     } else {
///         Ok(())
///     }
/// });
///
/// assert!(no_spaces.check("alice").is_ok());
/// assert_eq!(no_spaces.check("a b"), Err("'a b' contains a space".to_string()));
/// ```
pub fn rule_fn<T, F, E>(f: F) -> FnRule<F, E>
where
    T: ?Sized,
    F: Fn(&T) -> Result<(), E>,
{
    FnRule {
        f,
        _error: PhantomData,
    }
}
