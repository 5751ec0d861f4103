//! Running rule lists against values
//!
//! [`validate`] is the composition engine: it runs every rule, never stopping
//! at the first failure, and hands back either the untouched value or every
//! reason that was collected. [`validate_option`] does the same for a value
//! that may be absent.
//!
//! # Example
//!
//! ```rust
//! use sluice::{validate, StringError, StringRule};
//!
//! let rules = [
//!     StringRule::NonEmpty,
//!     StringRule::MinLength(8),
//!     StringRule::MaxLength(3),
//! ];
//!
//! let errors = validate("abcde", &rules).unwrap_err();
//! assert_eq!(
//!     errors.into_vec(),
//!     vec![StringError::TooShort(8), StringError::TooLong(3)]
//! );
//! ```

use crate::{AggregateError, Rule};

/// Reason reported when there is no value to validate.
///
/// Injected by [`validate_option`] in place of running any rule. Every
/// built-in failure enum embeds it as its own `Missing` variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[error("value is missing")]
pub struct ValueMissing;

/// Run every rule against `value`.
///
/// Rules run in iteration order. A failing rule does not stop the ones after
/// it; its reason is appended and the next rule runs. With no failures the
/// value comes back unchanged, otherwise the collected reasons are returned in
/// the order their rules appeared.
///
/// An empty rule list always succeeds.
///
/// # Example
///
/// ```rust
/// use sluice::{validate, BoundError, BoundRule};
///
/// assert_eq!(validate(15, [BoundRule::Range(10, 20)]), Ok(15));
///
/// let errors = validate(5, [BoundRule::MinimumValue(10)]).unwrap_err();
/// assert_eq!(errors.as_slice(), &[BoundError::BelowMinimum(10)]);
/// ```
pub fn validate<T, I>(value: T, rules: I) -> Result<T, AggregateError<<I::Item as Rule<T>>::Error>>
where
    I: IntoIterator,
    I::Item: Rule<T>,
{
    let mut errors = AggregateError::new();
    #[cfg(feature = "tracing")]
    let mut checked = 0usize;

    for rule in rules {
        if let Err(reason) = rule.check(&value) {
            errors.add(reason);
        }
        #[cfg(feature = "tracing")]
        {
            checked += 1;
        }
    }

    #[cfg(feature = "tracing")]
    {
        if errors.is_empty() {
            tracing::trace!(rules = checked, "value passed validation");
        } else {
            tracing::debug!(rules = checked, failures = errors.len(), "value failed validation");
        }
    }

    errors.into_result(value)
}

/// Run every rule against a value that may be absent.
///
/// `None` fails straight away with a single [`ValueMissing`] reason and no
/// rule is consulted. `Some(value)` behaves exactly like [`validate`].
///
/// # Example
///
/// ```rust
/// use sluice::{validate_option, StringError, StringRule, ValueMissing};
///
/// let errors = validate_option(None::<String>, [StringRule::NonEmpty]).unwrap_err();
/// assert_eq!(errors.as_slice(), &[StringError::Missing(ValueMissing)]);
///
/// let name = validate_option(Some("ada".to_string()), [StringRule::NonEmpty]);
/// assert_eq!(name, Ok("ada".to_string()));
/// ```
pub fn validate_option<T, I>(
    value: Option<T>,
    rules: I,
) -> Result<T, AggregateError<<I::Item as Rule<T>>::Error>>
where
    I: IntoIterator,
    I::Item: Rule<T>,
    <I::Item as Rule<T>>::Error: From<ValueMissing>,
{
    match value {
        Some(value) => validate(value, rules),
        None => {
            #[cfg(feature = "tracing")]
            tracing::debug!("no value present, skipping rules");
            Err(AggregateError::single(ValueMissing.into()))
        }
    }
}

/// Values that know which rule catalog applies to them.
///
/// Gives a method-call style on top of [`validate`]. The crate implements it
/// for `String`, `&str` and every primitive integer and float type.
///
/// # Example
///
/// ```rust
/// use sluice::{BoundRule, StringRule, Validateable};
///
/// let age = 42i32.valid_value(&[BoundRule::MinimumValue(18), BoundRule::MaximumValue(130)]);
/// assert_eq!(age, Ok(42));
///
/// let name = "".valid_value(&[StringRule::NonEmpty]);
/// assert!(name.is_err());
/// ```
pub trait Validateable: Sized {
    /// The rule catalog for this type.
    type Rule: Rule<Self>;

    /// Validate `self` against `rules`, returning it on success.
    fn valid_value(
        self,
        rules: &[Self::Rule],
    ) -> Result<Self, AggregateError<<Self::Rule as Rule<Self>>::Error>> {
        validate(self, rules)
    }
}

/// [`Validateable`] for values that may be absent.
///
/// # Example
///
/// ```rust
/// use sluice::{BoundError, BoundRule, ValidateableOption, ValueMissing};
///
/// let missing: Option<u32> = None;
/// let errors = missing.valid_value(&[BoundRule::MaximumValue(10)]).unwrap_err();
/// assert_eq!(errors.as_slice(), &[BoundError::Missing(ValueMissing)]);
///
/// assert_eq!(Some(7u32).valid_value(&[BoundRule::MaximumValue(10)]), Ok(7));
/// ```
pub trait ValidateableOption<T: Validateable> {
    /// Unwrap and validate, failing with [`ValueMissing`] when absent.
    fn valid_value(
        self,
        rules: &[T::Rule],
    ) -> Result<T, AggregateError<<T::Rule as Rule<T>>::Error>>
    where
        <T::Rule as Rule<T>>::Error: From<ValueMissing>;
}

impl<T: Validateable> ValidateableOption<T> for Option<T> {
    fn valid_value(
        self,
        rules: &[T::Rule],
    ) -> Result<T, AggregateError<<T::Rule as Rule<T>>::Error>>
    where
        <T::Rule as Rule<T>>::Error: From<ValueMissing>,
    {
        validate_option(self, rules)
    }
}
