//! Validating user-editable text inputs
//!
//! Any widget, form field or prompt that can report its current text
//! implements [`TextInput`] and gains [`TextInput::valid_value`]. An input
//! with no text at all fails with [`ValueMissing`]; otherwise the text is run
//! through the rules. Failures come back as a [`UserInputError`] that points
//! at the input they came from, so a caller can highlight it.
//!
//! # Example
//!
//! ```rust
//! use sluice::input::TextInput;
//! use sluice::{StringError, StringRule};
//!
//! struct Field {
//!     text: Option<String>,
//! }
//!
//! impl TextInput for Field {
//!     fn text(&self) -> Option<String> {
//!         self.text.clone()
//!     }
//! }
//!
//! let field = Field { text: Some("non matching string".into()) };
//! let error = field.valid_value([StringRule::matching("abc")]).unwrap_err();
//!
//! assert!(std::ptr::eq(error.element, &field));
//! assert_eq!(error.errors.as_slice(), &[StringError::Mismatch]);
//! ```

use std::fmt;

use crate::{validate_option, AggregateError, Rule, ValueMissing};

/// A source of user-entered text.
pub trait TextInput {
    /// The current text, or `None` when the input holds no text at all.
    fn text(&self) -> Option<String>;

    /// Validate the current text against `rules`.
    ///
    /// On success the text is returned. On failure the collected reasons are
    /// wrapped together with a reference to `self`.
    fn valid_value<I>(
        &self,
        rules: I,
    ) -> Result<String, UserInputError<'_, Self, <I::Item as Rule<String>>::Error>>
    where
        I: IntoIterator,
        I::Item: Rule<String>,
        <I::Item as Rule<String>>::Error: From<ValueMissing>,
    {
        validate_option(self.text(), rules).map_err(|errors| UserInputError::new(self, errors))
    }
}

/// Failures from validating a [`TextInput`], tied to the input itself.
pub struct UserInputError<'a, I: ?Sized, E> {
    /// The input whose text was rejected.
    pub element: &'a I,
    /// Every reason the text was rejected, in rule order.
    pub errors: AggregateError<E>,
}

impl<'a, I: ?Sized, E> UserInputError<'a, I, E> {
    /// Pair `errors` with the input they came from.
    pub fn new(element: &'a I, errors: AggregateError<E>) -> Self {
        Self { element, errors }
    }

    /// Drop the input reference, keeping the reasons.
    pub fn into_errors(self) -> AggregateError<E> {
        self.errors
    }
}

impl<I: ?Sized, E: fmt::Debug> fmt::Debug for UserInputError<'_, I, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UserInputError")
            .field("element", &(self.element as *const I))
            .field("errors", &self.errors)
            .finish()
    }
}

impl<I: ?Sized, E: fmt::Display> fmt::Display for UserInputError<'_, I, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid input: {}", self.errors)
    }
}

impl<I: ?Sized, E: std::error::Error + 'static> std::error::Error for UserInputError<'_, I, E> {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.errors)
    }
}
