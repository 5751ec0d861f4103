//! Regular expression helpers and named patterns
//!
//! [`matches`] is the plain "does this text match" helper. [`Pattern`] pairs a
//! regex source with the reason to report when text does not match, and is
//! what [`StringRule::Regex`](crate::StringRule::Regex) holds.
//! [`StringPattern`] lists the built-in patterns.
//!
//! Expressions are compiled with `.` matching line breaks, and a match may
//! occur anywhere in the text unless the pattern is anchored.
//!
//! # Example
//!
//! ```rust
//! use sluice::pattern::{matches, Pattern, StringPattern};
//! use sluice::StringError;
//!
//! assert!(matches("abc123", "^[a-z0-9]+$"));
//! assert!(!matches("abc123", "^[a-z]+$"));
//!
//! let digits = Pattern::from(StringPattern::NumericOnly);
//! assert_eq!(digits.check("12345"), Ok(()));
//! assert_eq!(digits.check("12a45"), Err(StringError::NonNumeric));
//! ```

use std::fmt;
use std::sync::{LazyLock, OnceLock};

use regex::{Regex, RegexBuilder};

use crate::StringError;

/// Failure to turn a pattern source into a regular expression.
#[derive(Debug, Clone, PartialEq, Eq, Hash, thiserror::Error)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "snake_case")
)]
pub enum PatternError {
    /// The pattern source was the empty string.
    #[error("pattern is empty")]
    Empty,
    /// The pattern source is not a valid regular expression.
    #[error("pattern `{pattern}` is invalid: {message}")]
    Invalid {
        /// The offending source.
        pattern: String,
        /// What the regex engine reported.
        message: String,
    },
}

/// Compile `pattern` with the options every helper in this module uses.
///
/// An empty pattern is rejected rather than treated as "match everything".
pub fn compile(pattern: &str) -> Result<Regex, PatternError> {
    if pattern.is_empty() {
        return Err(PatternError::Empty);
    }
    RegexBuilder::new(pattern)
        .dot_matches_new_line(true)
        .build()
        .map_err(|e| PatternError::Invalid {
            pattern: pattern.to_string(),
            message: e.to_string(),
        })
}

/// Test whether `text` matches `pattern`, reporting a bad pattern as an error.
///
/// # Example
///
/// ```rust
/// use sluice::pattern::{try_matches, PatternError};
///
/// assert_eq!(try_matches("b", "^a$"), Ok(false));
/// assert_eq!(try_matches("anything", ""), Err(PatternError::Empty));
/// ```
pub fn try_matches(text: &str, pattern: &str) -> Result<bool, PatternError> {
    compile(pattern).map(|regex| regex.is_match(text))
}

/// Test whether `text` matches `pattern`.
///
/// A pattern that cannot be compiled never matches.
pub fn matches(text: &str, pattern: &str) -> bool {
    try_matches(text, pattern).unwrap_or(false)
}

/// A regex source together with the reason reported on mismatch.
///
/// Without an override, a mismatch is reported as
/// [`StringError::PatternMismatch`] carrying the source. The expression is
/// compiled on first use and cached for the life of the pattern.
///
/// # Example
///
/// ```rust
/// use sluice::pattern::Pattern;
/// use sluice::StringError;
///
/// let hex = Pattern::new("^[0-9a-f]+$");
/// assert_eq!(
///     hex.check("xyz"),
///     Err(StringError::PatternMismatch { pattern: "^[0-9a-f]+$".to_string() })
/// );
///
/// let hex = hex.with_mismatch_error(StringError::NonAlphanumeric);
/// assert_eq!(hex.check("xyz"), Err(StringError::NonAlphanumeric));
/// ```
#[derive(Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Pattern {
    source: String,
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    mismatch: Option<StringError>,
    #[cfg_attr(feature = "serde", serde(skip))]
    compiled: OnceLock<Result<Regex, PatternError>>,
}

impl Pattern {
    /// Create a pattern from a regex source.
    pub fn new(source: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            mismatch: None,
            compiled: OnceLock::new(),
        }
    }

    /// Report `error` instead of the generic mismatch reason.
    pub fn with_mismatch_error(mut self, error: StringError) -> Self {
        self.mismatch = Some(error);
        self
    }

    /// The regex source.
    pub fn source(&self) -> &str {
        &self.source
    }

    /// The reason reported when text does not match.
    pub fn mismatch_error(&self) -> StringError {
        match &self.mismatch {
            Some(error) => error.clone(),
            None => StringError::PatternMismatch {
                pattern: self.source.clone(),
            },
        }
    }

    /// The compiled expression.
    pub fn regex(&self) -> Result<&Regex, PatternError> {
        self.compiled
            .get_or_init(|| {
                let compiled = compile(&self.source);
                #[cfg(feature = "tracing")]
                {
                    if let Err(error) = &compiled {
                        tracing::warn!(pattern = %self.source, %error, "pattern failed to compile");
                    }
                }
                compiled
            })
            .as_ref()
            .map_err(Clone::clone)
    }

    /// Accept `text` if it matches, otherwise return the mismatch reason.
    ///
    /// A pattern that cannot be compiled fails with
    /// [`StringError::InvalidPattern`] whatever the text.
    pub fn check(&self, text: &str) -> Result<(), StringError> {
        let regex = self.regex()?;
        if regex.is_match(text) {
            Ok(())
        } else {
            Err(self.mismatch_error())
        }
    }
}

impl fmt::Debug for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Pattern")
            .field("source", &self.source)
            .field("mismatch", &self.mismatch)
            .finish()
    }
}

impl PartialEq for Pattern {
    fn eq(&self, other: &Self) -> bool {
        self.source == other.source && self.mismatch == other.mismatch
    }
}

impl Eq for Pattern {}

impl From<&str> for Pattern {
    fn from(source: &str) -> Self {
        Pattern::new(source)
    }
}

impl From<String> for Pattern {
    fn from(source: String) -> Self {
        Pattern::new(source)
    }
}

const ALPHA_ONLY: &str = r"^[a-zA-Z]*$";
const NUMERIC_ONLY: &str = r"^[0-9]*$";
const ALPHANUMERIC_ONLY: &str = r"^[a-zA-Z0-9]*$";
const EMAIL: &str = r"^[a-zA-Z0-9.!#$%&'*+/=?^_`{|}~-]+@[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?(?:\.[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?)*$";

static ALPHA_ONLY_REGEX: LazyLock<Result<Regex, PatternError>> =
    LazyLock::new(|| compile(ALPHA_ONLY));
static NUMERIC_ONLY_REGEX: LazyLock<Result<Regex, PatternError>> =
    LazyLock::new(|| compile(NUMERIC_ONLY));
static ALPHANUMERIC_ONLY_REGEX: LazyLock<Result<Regex, PatternError>> =
    LazyLock::new(|| compile(ALPHANUMERIC_ONLY));
static EMAIL_REGEX: LazyLock<Result<Regex, PatternError>> = LazyLock::new(|| compile(EMAIL));

/// Built-in patterns, each with its own mismatch reason.
///
/// The empty string satisfies the three character-class patterns; pair them
/// with [`StringRule::NonEmpty`](crate::StringRule::NonEmpty) to reject it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "snake_case")
)]
pub enum StringPattern {
    /// ASCII letters only. Fails with [`StringError::NonAlphabetic`].
    AlphaOnly,
    /// ASCII digits only. Fails with [`StringError::NonNumeric`].
    NumericOnly,
    /// ASCII letters and digits only. Fails with [`StringError::NonAlphanumeric`].
    AlphanumericOnly,
    /// An e-mail address. Fails with [`StringError::InvalidEmail`].
    Email,
}

impl StringPattern {
    /// The regex source of this pattern.
    pub fn source(self) -> &'static str {
        match self {
            StringPattern::AlphaOnly => ALPHA_ONLY,
            StringPattern::NumericOnly => NUMERIC_ONLY,
            StringPattern::AlphanumericOnly => ALPHANUMERIC_ONLY,
            StringPattern::Email => EMAIL,
        }
    }

    /// The reason reported when text does not match.
    pub fn mismatch_error(self) -> StringError {
        match self {
            StringPattern::AlphaOnly => StringError::NonAlphabetic,
            StringPattern::NumericOnly => StringError::NonNumeric,
            StringPattern::AlphanumericOnly => StringError::NonAlphanumeric,
            StringPattern::Email => StringError::InvalidEmail,
        }
    }

    fn compiled(self) -> &'static Result<Regex, PatternError> {
        match self {
            StringPattern::AlphaOnly => &ALPHA_ONLY_REGEX,
            StringPattern::NumericOnly => &NUMERIC_ONLY_REGEX,
            StringPattern::AlphanumericOnly => &ALPHANUMERIC_ONLY_REGEX,
            StringPattern::Email => &EMAIL_REGEX,
        }
    }

    /// Accept `text` if it matches, otherwise return this pattern's reason.
    ///
    /// # Example
    ///
    /// ```rust
    /// use sluice::pattern::StringPattern;
    /// use sluice::StringError;
    ///
    /// assert_eq!(StringPattern::Email.check("ada@example.com"), Ok(()));
    /// assert_eq!(StringPattern::Email.check("G*b.c"), Err(StringError::InvalidEmail));
    /// ```
    pub fn check(self, text: &str) -> Result<(), StringError> {
        match self.compiled() {
            Ok(regex) if regex.is_match(text) => Ok(()),
            Ok(_) => Err(self.mismatch_error()),
            Err(error) => Err(StringError::InvalidPattern(error.clone())),
        }
    }
}

impl From<StringPattern> for Pattern {
    fn from(pattern: StringPattern) -> Self {
        Pattern {
            source: pattern.source().to_string(),
            mismatch: Some(pattern.mismatch_error()),
            compiled: OnceLock::from(pattern.compiled().clone()),
        }
    }
}
