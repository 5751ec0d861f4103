//! Testing utilities
//!
//! Assertion macros for validation outcomes and, behind the `proptest`
//! feature, [`Arbitrary`](proptest::arbitrary::Arbitrary) implementations for
//! the rule catalogs and [`AggregateError`](crate::AggregateError).
//!
//! # Examples
//!
//! ```rust
//! use sluice::{assert_failures, assert_invalid, assert_valid};
//! use sluice::{validate, StringError, StringRule};
//!
//! assert_valid!(validate("abc", [StringRule::NonEmpty]));
//! assert_invalid!(validate("", [StringRule::NonEmpty]));
//! assert_failures!(
//!     validate("", [StringRule::NonEmpty, StringRule::MinLength(2)]),
//!     vec![StringError::Empty, StringError::TooShort(2)]
//! );
//! ```

/// Assert that a validation call succeeded.
///
/// Panics with the collected failures otherwise.
///
/// # Example
///
/// ```rust
/// use sluice::{assert_valid, validate, BoundRule};
///
/// assert_valid!(validate(5, [BoundRule::MaximumValue(10)]));
/// ```
#[macro_export]
macro_rules! assert_valid {
    ($result:expr) => {
        match $result {
            Ok(_) => {}
            Err(errors) => {
                panic!("Expected valid value, got failures: {:?}", errors);
            }
        }
    };
}

/// Assert that a validation call failed.
///
/// Panics with the returned value otherwise.
///
/// # Example
///
/// ```rust
/// use sluice::{assert_invalid, validate, BoundRule};
///
/// assert_invalid!(validate(50, [BoundRule::MaximumValue(10)]));
/// ```
#[macro_export]
macro_rules! assert_invalid {
    ($result:expr) => {
        match $result {
            Err(_) => {}
            Ok(value) => {
                panic!("Expected failures, got valid value: {:?}", value);
            }
        }
    };
}

/// Assert that a validation call failed with exactly these reasons, in order.
///
/// # Example
///
/// ```rust
/// use sluice::{assert_failures, validate, BoundError, BoundRule};
///
/// assert_failures!(
///     validate(50, [BoundRule::MaximumValue(10)]),
///     vec![BoundError::AboveMaximum(10)]
/// );
/// ```
#[macro_export]
macro_rules! assert_failures {
    ($result:expr, $expected:expr) => {
        match $result {
            Err(errors) => {
                assert_eq!($crate::AggregateError::into_vec(errors), $expected);
            }
            Ok(value) => {
                panic!("Expected failures, got valid value: {:?}", value);
            }
        }
    };
}

#[cfg(feature = "proptest")]
mod arbitrary {
    use proptest::prelude::*;

    use crate::pattern::StringPattern;
    use crate::{AggregateError, BoundRule, StringRule};

    impl<E: Arbitrary + 'static> Arbitrary for AggregateError<E> {
        type Parameters = ();
        type Strategy = BoxedStrategy<Self>;

        fn arbitrary_with(_: Self::Parameters) -> Self::Strategy {
            prop::collection::vec(any::<E>(), 0..8)
                .prop_map(|errors| errors.into_iter().collect::<AggregateError<E>>())
                .boxed()
        }
    }

    impl Arbitrary for StringPattern {
        type Parameters = ();
        type Strategy = BoxedStrategy<Self>;

        fn arbitrary_with(_: Self::Parameters) -> Self::Strategy {
            prop_oneof![
                Just(StringPattern::AlphaOnly),
                Just(StringPattern::NumericOnly),
                Just(StringPattern::AlphanumericOnly),
                Just(StringPattern::Email),
            ]
            .boxed()
        }
    }

    impl Arbitrary for StringRule {
        type Parameters = ();
        type Strategy = BoxedStrategy<Self>;

        fn arbitrary_with(_: Self::Parameters) -> Self::Strategy {
            prop_oneof![
                Just(StringRule::NonEmpty),
                any::<StringPattern>().prop_map(StringRule::regex),
                "[a-c]{0,3}".prop_map(StringRule::Match),
                (0usize..8).prop_map(StringRule::MinLength),
                (0usize..8).prop_map(StringRule::MaxLength),
                (0usize..8, 0usize..8).prop_map(|(min, max)| StringRule::LengthWithinRange(min, max)),
                prop::collection::vec("[a-c]{1,2}", 0..4).prop_map(StringRule::OneOf),
            ]
            .boxed()
        }
    }

    impl<T: Arbitrary + Clone + 'static> Arbitrary for BoundRule<T> {
        type Parameters = ();
        type Strategy = BoxedStrategy<Self>;

        fn arbitrary_with(_: Self::Parameters) -> Self::Strategy {
            prop_oneof![
                any::<T>().prop_map(BoundRule::MinimumValue),
                any::<T>().prop_map(BoundRule::MaximumValue),
                (any::<T>(), any::<T>()).prop_map(|(min, max)| BoundRule::Range(min, max)),
            ]
            .boxed()
        }
    }
}
