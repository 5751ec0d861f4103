//! String rules
//!
//! [`StringRule`] is the catalog of checks for text values and [`StringError`]
//! the reasons they report. Lengths are counted in `char`s, so `"héllo"` has
//! length 5.
//!
//! # Example
//!
//! ```rust
//! use sluice::{validate, StringError, StringRule};
//! use sluice::pattern::StringPattern;
//!
//! let rules = vec![
//!     StringRule::NonEmpty,
//!     StringRule::regex(StringPattern::AlphanumericOnly),
//!     StringRule::LengthWithinRange(3, 16),
//! ];
//!
//! assert_eq!(validate("ada99", &rules), Ok("ada99"));
//!
//! let errors = validate("a!", &rules).unwrap_err();
//! assert_eq!(
//!     errors.into_vec(),
//!     vec![StringError::NonAlphanumeric, StringError::TooShort(3)]
//! );
//! ```

use crate::pattern::{Pattern, PatternError};
use crate::{Rule, Validateable, ValueMissing};

/// Why a string was rejected.
#[derive(Debug, Clone, PartialEq, Eq, Hash, thiserror::Error)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "snake_case")
)]
pub enum StringError {
    /// There was no string to check.
    #[error(transparent)]
    Missing(#[from] ValueMissing),
    /// The string is empty.
    #[error("string is empty")]
    Empty,
    /// The string has characters outside `a-z` and `A-Z`.
    #[error("string contains non-alphabetic characters")]
    NonAlphabetic,
    /// The string has characters outside `0-9`.
    #[error("string contains non-numeric characters")]
    NonNumeric,
    /// The string has characters outside `a-z`, `A-Z` and `0-9`.
    #[error("string contains non-alphanumeric characters")]
    NonAlphanumeric,
    /// The string is not an e-mail address.
    #[error("string is not a valid email address")]
    InvalidEmail,
    /// The string differs from the one it must equal.
    #[error("strings do not match")]
    Mismatch,
    /// The string is shorter than the carried minimum.
    #[error("string is shorter than the minimum length of {0}")]
    TooShort(usize),
    /// The string is longer than the carried maximum.
    #[error("string is longer than the maximum length of {0}")]
    TooLong(usize),
    /// The string is not in the carried set.
    #[error("string is not one of the allowed values {0:?}")]
    NotOneOf(Vec<String>),
    /// The string does not match the carried regex source.
    #[error("string does not match pattern `{pattern}`")]
    PatternMismatch {
        /// Regex source the string was checked against.
        pattern: String,
    },
    /// The rule's regex could not be compiled.
    #[error("invalid rule: {0}")]
    InvalidPattern(#[from] PatternError),
    /// The rule's length range has its minimum above its maximum.
    #[error("invalid rule: minimum length {min} is greater than maximum length {max}")]
    InvalidLengthRange {
        /// Configured minimum.
        min: usize,
        /// Configured maximum.
        max: usize,
    },
}

/// Checks over string values.
///
/// Implements [`Rule`] for anything that can be viewed as a `str`.
/// Each variant reports at most one reason per check.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "snake_case")
)]
pub enum StringRule {
    /// Reject the empty string.
    NonEmpty,
    /// Require a regex match.
    Regex(Pattern),
    /// Require equality with the given string.
    Match(String),
    /// Require at least this many characters.
    MinLength(usize),
    /// Allow at most this many characters.
    MaxLength(usize),
    /// Require a length in `min..=max`.
    LengthWithinRange(usize, usize),
    /// Require one of the given strings.
    OneOf(Vec<String>),
}

impl StringRule {
    /// Require a match against `pattern`.
    ///
    /// Accepts a regex source, a [`Pattern`] or a
    /// [`StringPattern`](crate::pattern::StringPattern).
    pub fn regex(pattern: impl Into<Pattern>) -> Self {
        StringRule::Regex(pattern.into())
    }

    /// Require equality with `expected`.
    pub fn matching(expected: impl Into<String>) -> Self {
        StringRule::Match(expected.into())
    }

    /// Require one of `allowed`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use sluice::{Rule, StringError, StringRule};
    ///
    /// let rule = StringRule::one_of(["a", "b", "c"]);
    /// assert_eq!(rule.check("a"), Ok(()));
    /// assert_eq!(
    ///     rule.check("x"),
    ///     Err(StringError::NotOneOf(vec!["a".into(), "b".into(), "c".into()]))
    /// );
    /// ```
    pub fn one_of<I, S>(allowed: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        StringRule::OneOf(allowed.into_iter().map(Into::into).collect())
    }

    fn check_str(&self, value: &str) -> Result<(), StringError> {
        match self {
            StringRule::NonEmpty => {
                if value.is_empty() {
                    return Err(StringError::Empty);
                }
            }
            StringRule::Regex(pattern) => pattern.check(value)?,
            StringRule::Match(expected) => {
                if value != expected {
                    return Err(StringError::Mismatch);
                }
            }
            StringRule::MinLength(min) => check_length(value, Some(*min), None)?,
            StringRule::MaxLength(max) => check_length(value, None, Some(*max))?,
            StringRule::LengthWithinRange(min, max) => {
                if min > max {
                    return Err(StringError::InvalidLengthRange {
                        min: *min,
                        max: *max,
                    });
                }
                check_length(value, Some(*min), Some(*max))?
            }
            StringRule::OneOf(allowed) => {
                if !allowed.iter().any(|candidate| candidate == value) {
                    return Err(StringError::NotOneOf(allowed.clone()));
                }
            }
        }
        Ok(())
    }
}

fn check_length(value: &str, min: Option<usize>, max: Option<usize>) -> Result<(), StringError> {
    let len = value.chars().count();
    if let Some(min) = min {
        if len < min {
            return Err(StringError::TooShort(min));
        }
    }
    if let Some(max) = max {
        if len > max {
            return Err(StringError::TooLong(max));
        }
    }
    Ok(())
}

impl<S: AsRef<str> + ?Sized> Rule<S> for StringRule {
    type Error = StringError;

    #[inline]
    fn check(&self, value: &S) -> Result<(), StringError> {
        self.check_str(value.as_ref())
    }
}

impl Validateable for String {
    type Rule = StringRule;
}

impl Validateable for &str {
    type Rule = StringRule;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pattern::StringPattern;

    #[test]
    fn test_non_empty() {
        assert_eq!(StringRule::NonEmpty.check("non empty string"), Ok(()));
        assert_eq!(StringRule::NonEmpty.check(""), Err(StringError::Empty));
    }

    #[test]
    fn test_non_empty_accepts_whitespace() {
        assert_eq!(StringRule::NonEmpty.check(" "), Ok(()));
    }

    #[test]
    fn test_regex() {
        assert_eq!(StringRule::regex("^.*$").check("a string"), Ok(()));
        assert_eq!(
            StringRule::regex("^a$").check("b"),
            Err(StringError::PatternMismatch {
                pattern: "^a$".to_string()
            })
        );
    }

    #[test]
    fn test_regex_with_named_pattern() {
        let rule = StringRule::regex(StringPattern::AlphaOnly);
        assert_eq!(rule.check("abc"), Ok(()));
        assert_eq!(rule.check("abc1"), Err(StringError::NonAlphabetic));
    }

    #[test]
    fn test_regex_with_bad_pattern_is_a_rule_failure() {
        assert_eq!(
            StringRule::regex("").check("whatever"),
            Err(StringError::InvalidPattern(PatternError::Empty))
        );
    }

    #[test]
    fn test_match() {
        assert_eq!(StringRule::matching("a").check("a"), Ok(()));
        assert_eq!(StringRule::matching("a").check("b"), Err(StringError::Mismatch));
    }

    #[test]
    fn test_min_length() {
        assert_eq!(StringRule::MinLength(5).check("a long string"), Ok(()));
        assert_eq!(StringRule::MinLength(5).check("abcde"), Ok(()));
        assert_eq!(
            StringRule::MinLength(5).check("a"),
            Err(StringError::TooShort(5))
        );
    }

    #[test]
    fn test_max_length() {
        assert_eq!(StringRule::MaxLength(5).check("a"), Ok(()));
        assert_eq!(StringRule::MaxLength(5).check("abcde"), Ok(()));
        assert_eq!(
            StringRule::MaxLength(5).check("a long string"),
            Err(StringError::TooLong(5))
        );
    }

    #[test]
    fn test_length_counts_chars_not_bytes() {
        assert_eq!(StringRule::MaxLength(5).check("héllo"), Ok(()));
        assert_eq!(StringRule::MinLength(2).check("日本"), Ok(()));
    }

    #[test]
    fn test_length_within_range() {
        let rule = StringRule::LengthWithinRange(1, 5);
        assert_eq!(rule.check("abc"), Ok(()));
        assert_eq!(rule.check(""), Err(StringError::TooShort(1)));
        assert_eq!(rule.check("abcdef"), Err(StringError::TooLong(5)));
    }

    #[test]
    fn test_length_within_degenerate_range() {
        let rule = StringRule::LengthWithinRange(3, 3);
        assert_eq!(rule.check("abc"), Ok(()));
        assert_eq!(rule.check("ab"), Err(StringError::TooShort(3)));
    }

    #[test]
    fn test_length_within_inverted_range_is_rejected() {
        let rule = StringRule::LengthWithinRange(5, 1);
        assert_eq!(
            rule.check("abc"),
            Err(StringError::InvalidLengthRange { min: 5, max: 1 })
        );
    }

    #[test]
    fn test_one_of() {
        let rule = StringRule::one_of(["a", "b", "c"]);
        assert_eq!(rule.check("a"), Ok(()));
        assert_eq!(
            rule.check("x"),
            Err(StringError::NotOneOf(vec![
                "a".to_string(),
                "b".to_string(),
                "c".to_string()
            ]))
        );
    }

    #[test]
    fn test_rule_applies_to_owned_and_borrowed() {
        let owned = String::from("");
        assert_eq!(StringRule::NonEmpty.check(&owned), Err(StringError::Empty));
        assert_eq!(StringRule::NonEmpty.check("x"), Ok(()));
    }

    #[test]
    fn test_validateable_string() {
        let value = String::from("hello").valid_value(&[StringRule::NonEmpty]);
        assert_eq!(value, Ok(String::from("hello")));
    }

    #[test]
    fn test_display() {
        assert_eq!(StringError::Empty.to_string(), "string is empty");
        assert_eq!(
            StringError::TooShort(5).to_string(),
            "string is shorter than the minimum length of 5"
        );
        assert_eq!(
            StringError::Missing(ValueMissing).to_string(),
            "value is missing"
        );
        assert_eq!(
            StringError::InvalidLengthRange { min: 5, max: 1 }.to_string(),
            "invalid rule: minimum length 5 is greater than maximum length 1"
        );
    }
}
