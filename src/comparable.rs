//! Bound rules for ordered values
//!
//! [`BoundRule`] checks a value against inclusive lower and upper bounds.
//! It works for any `PartialOrd + Clone` type; the crate wires it up as the
//! [`Validateable`] catalog of every primitive integer and float.
//!
//! # Example
//!
//! ```rust
//! use sluice::{validate, BoundError, BoundRule};
//!
//! assert_eq!(validate(15, [BoundRule::Range(10, 20)]), Ok(15));
//! assert_eq!(validate(10, [BoundRule::Range(10, 20)]), Ok(10));
//!
//! let errors = validate(2.5, [BoundRule::MinimumValue(3.0), BoundRule::MaximumValue(2.0)])
//!     .unwrap_err();
//! assert_eq!(
//!     errors.into_vec(),
//!     vec![BoundError::BelowMinimum(3.0), BoundError::AboveMaximum(2.0)]
//! );
//! ```

use std::cmp::Ordering;

use crate::{Rule, Validateable, ValueMissing};

/// Why a value was rejected by a [`BoundRule`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, thiserror::Error)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "snake_case")
)]
pub enum BoundError<T> {
    /// There was no value to check.
    #[error(transparent)]
    Missing(#[from] ValueMissing),
    /// The value is below the carried minimum.
    #[error("value is below the minimum of {0}")]
    BelowMinimum(T),
    /// The value is above the carried maximum.
    #[error("value is above the maximum of {0}")]
    AboveMaximum(T),
    /// The rule's range has its minimum above its maximum.
    #[error("invalid rule: minimum {min} is greater than maximum {max}")]
    InvalidRange {
        /// Configured minimum.
        min: T,
        /// Configured maximum.
        max: T,
    },
}

/// Inclusive bound checks.
///
/// `Range(min, max)` with `min > max` never accepts anything: it fails with
/// [`BoundError::InvalidRange`] before looking at the value. A value that is
/// unordered with respect to a bound (a float `NaN`) is reported as out of
/// that bound.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "snake_case")
)]
pub enum BoundRule<T> {
    /// Require `value >= min`.
    MinimumValue(T),
    /// Require `value <= max`.
    MaximumValue(T),
    /// Require `min <= value <= max`.
    Range(T, T),
}

impl<T: PartialOrd + Clone> Rule<T> for BoundRule<T> {
    type Error = BoundError<T>;

    fn check(&self, value: &T) -> Result<(), BoundError<T>> {
        let (min, max) = match self {
            BoundRule::MinimumValue(min) => (Some(min), None),
            BoundRule::MaximumValue(max) => (None, Some(max)),
            BoundRule::Range(min, max) => {
                if min.partial_cmp(max) == Some(Ordering::Greater) {
                    return Err(BoundError::InvalidRange {
                        min: min.clone(),
                        max: max.clone(),
                    });
                }
                (Some(min), Some(max))
            }
        };

        if let Some(min) = min {
            if !matches!(
                value.partial_cmp(min),
                Some(Ordering::Greater | Ordering::Equal)
            ) {
                return Err(BoundError::BelowMinimum(min.clone()));
            }
        }

        if let Some(max) = max {
            if !matches!(
                value.partial_cmp(max),
                Some(Ordering::Less | Ordering::Equal)
            ) {
                return Err(BoundError::AboveMaximum(max.clone()));
            }
        }

        Ok(())
    }
}

macro_rules! impl_validateable_bounded {
    ($($t:ty),+ $(,)?) => {
        $(
            impl Validateable for $t {
                type Rule = BoundRule<$t>;
            }
        )+
    };
}

impl_validateable_bounded!(
    i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_minimum_value() {
        let rule = BoundRule::MinimumValue(10);
        assert_eq!(rule.check(&20), Ok(()));
        assert_eq!(rule.check(&10), Ok(()));
        assert_eq!(rule.check(&5), Err(BoundError::BelowMinimum(10)));
    }

    #[test]
    fn test_maximum_value() {
        let rule = BoundRule::MaximumValue(10);
        assert_eq!(rule.check(&5), Ok(()));
        assert_eq!(rule.check(&10), Ok(()));
        assert_eq!(rule.check(&20), Err(BoundError::AboveMaximum(10)));
    }

    #[test]
    fn test_range() {
        let rule = BoundRule::Range(10, 20);
        assert_eq!(rule.check(&15), Ok(()));
        assert_eq!(rule.check(&9), Err(BoundError::BelowMinimum(10)));
        assert_eq!(rule.check(&21), Err(BoundError::AboveMaximum(20)));
    }

    #[test]
    fn test_degenerate_range() {
        let rule = BoundRule::Range(7, 7);
        assert_eq!(rule.check(&7), Ok(()));
        assert_eq!(rule.check(&8), Err(BoundError::AboveMaximum(7)));
    }

    #[test]
    fn test_inverted_range_is_rejected_for_every_value() {
        let rule = BoundRule::Range(20, 10);
        for value in [0, 10, 15, 20, 30] {
            assert_eq!(
                rule.check(&value),
                Err(BoundError::InvalidRange { min: 20, max: 10 })
            );
        }
    }

    #[test]
    fn test_nan_is_out_of_bounds() {
        assert_eq!(
            BoundRule::MinimumValue(0.0).check(&f64::NAN),
            Err(BoundError::BelowMinimum(0.0))
        );
        assert_eq!(
            BoundRule::MaximumValue(1.0).check(&f64::NAN),
            Err(BoundError::AboveMaximum(1.0))
        );
    }

    #[test]
    fn test_works_for_any_ordered_type() {
        let rule = BoundRule::Range("b".to_string(), "d".to_string());
        assert_eq!(rule.check(&"c".to_string()), Ok(()));
        assert_eq!(
            rule.check(&"a".to_string()),
            Err(BoundError::BelowMinimum("b".to_string()))
        );
    }

    #[test]
    fn test_validateable_numbers() {
        assert_eq!(42u8.valid_value(&[BoundRule::MaximumValue(100)]), Ok(42));
        assert_eq!(
            1.5f32.valid_value(&[BoundRule::MinimumValue(2.0)]),
            Err(crate::AggregateError::single(BoundError::BelowMinimum(2.0)))
        );
    }

    #[test]
    fn test_display() {
        assert_eq!(
            BoundError::BelowMinimum(10).to_string(),
            "value is below the minimum of 10"
        );
        assert_eq!(
            BoundError::InvalidRange { min: 3, max: 1 }.to_string(),
            "invalid rule: minimum 3 is greater than maximum 1"
        );
        assert_eq!(
            BoundError::<i32>::Missing(ValueMissing).to_string(),
            "value is missing"
        );
    }
}
