//! # Sluice
//!
//! Composable value validation that reports every failure at once.
//!
//! ## Philosophy
//!
//! A value passes through a list of [`Rule`]s. Every rule runs, even after
//! one has already rejected the value, and every rejection is kept in order
//! inside an [`AggregateError`]. A caller gets either the value back,
//! untouched, or the full list of reasons it was refused.
//!
//! - **Rules** are small, pure checks with their own error type.
//! - **Catalogs** ([`StringRule`], [`BoundRule`]) cover common checks.
//! - **Absence** of an optional value is its own failure, [`ValueMissing`],
//!   reported without running any rule.
//!
//! ## Quick Example
//!
//! ```rust
//! use sluice::{validate, validate_option, StringError, StringRule, ValueMissing};
//!
//! let rules = [StringRule::NonEmpty, StringRule::MinLength(3)];
//!
//! assert_eq!(validate("ada", &rules), Ok("ada"));
//!
//! // Both rules fail and both reasons are reported.
//! let errors = validate("", &rules).unwrap_err();
//! assert_eq!(
//!     errors.into_vec(),
//!     vec![StringError::Empty, StringError::TooShort(3)]
//! );
//!
//! // No value: no rule runs.
//! let errors = validate_option(None::<&str>, &rules).unwrap_err();
//! assert_eq!(errors.into_vec(), vec![StringError::Missing(ValueMissing)]);
//! ```
//!
//! ## Custom rules
//!
//! ```rust
//! use sluice::{rule_fn, validate, Rule};
//!
//! let rules: Vec<Box<dyn Rule<u32, Error = &str>>> = vec![
//!     Box::new(rule_fn(|n: &u32| if n % 2 == 0 { Ok(()) } else { Err("odd") })),
//!     Box::new(rule_fn(|n: &u32| if *n < 10 { Ok(()) } else { Err("too big") })),
//! ];
//!
//! assert_eq!(validate(4, &rules), Ok(4));
//! assert_eq!(validate(13, &rules).unwrap_err().into_vec(), vec!["odd", "too big"]);
//! ```

#![warn(missing_docs)]
#![warn(missing_debug_implementations)]

pub mod aggregate;
pub mod comparable;
pub mod input;
pub mod pattern;
pub mod rule;
pub mod semigroup;
pub mod string;
pub mod testing;
pub mod validate;

// Re-exports
pub use aggregate::AggregateError;
pub use comparable::{BoundError, BoundRule};
pub use input::{TextInput, UserInputError};
pub use pattern::{Pattern, PatternError, StringPattern};
pub use rule::{rule_fn, FnRule, Rule};
pub use semigroup::Semigroup;
pub use string::{StringError, StringRule};
pub use validate::{validate, validate_option, Validateable, ValidateableOption, ValueMissing};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::aggregate::AggregateError;
    pub use crate::comparable::{BoundError, BoundRule};
    pub use crate::input::{TextInput, UserInputError};
    pub use crate::rule::{rule_fn, Rule};
    pub use crate::semigroup::Semigroup;
    pub use crate::string::{StringError, StringRule};
    pub use crate::validate::{
        validate, validate_option, Validateable, ValidateableOption, ValueMissing,
    };
}
