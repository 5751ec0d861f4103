//! Tests and examples for the assertion macros
//!
//! This test suite shows the patterns for testing code built on sluice rules.

use sluice::prelude::*;
use sluice::{assert_failures, assert_invalid, assert_valid, StringPattern};

// Example domain types for testing
#[derive(Debug, Clone, PartialEq)]
struct User {
    email: String,
    age: u8,
}

#[derive(Debug, Clone, PartialEq)]
enum UserError {
    Email(StringError),
    Age(BoundError<u8>),
}

fn email_rules() -> Vec<StringRule> {
    vec![StringRule::NonEmpty, StringRule::regex(StringPattern::Email)]
}

fn age_rules() -> [BoundRule<u8>; 1] {
    [BoundRule::MinimumValue(18)]
}

fn validate_user(email: &str, age: u8) -> Result<User, AggregateError<UserError>> {
    let email = validate(email, email_rules()).map_err(|e| e.map(UserError::Email));
    let age = validate(age, age_rules()).map_err(|e| e.map(UserError::Age));

    match (email, age) {
        (Ok(email), Ok(age)) => Ok(User {
            email: email.to_string(),
            age,
        }),
        (email, age) => Err(email
            .err()
            .unwrap_or_default()
            .combine(age.err().unwrap_or_default())),
    }
}

#[test]
fn test_assert_valid_with_email() {
    assert_valid!(validate("user@example.com", email_rules()));
}

#[test]
fn test_assert_invalid_with_email() {
    assert_invalid!(validate("invalid", email_rules()));
}

#[test]
fn test_assert_failures_with_specific_reasons() {
    assert_failures!(
        validate("", email_rules()),
        vec![StringError::Empty, StringError::InvalidEmail]
    );
}

#[test]
fn test_assert_valid_with_age() {
    assert_valid!(validate(25u8, age_rules()));
}

#[test]
fn test_assert_invalid_with_underage() {
    assert_invalid!(validate(15u8, age_rules()));
}

#[test]
fn test_accumulating_across_fields() {
    assert_failures!(
        validate_user("invalid", 15),
        vec![
            UserError::Email(StringError::InvalidEmail),
            UserError::Age(BoundError::BelowMinimum(18))
        ]
    );
}

#[test]
fn test_successful_user_validation() {
    let user = validate_user("user@example.com", 25).unwrap();
    assert_eq!(user.email, "user@example.com");
    assert_eq!(user.age, 25);
}

#[test]
fn test_macros_accept_fluent_calls() {
    assert_valid!("ada".valid_value(&[StringRule::MinLength(3)]));
    assert_invalid!(Some(200u8).valid_value(&[BoundRule::MaximumValue(100)]));
    assert_failures!(
        None::<u8>.valid_value(&[BoundRule::MaximumValue(100)]),
        vec![BoundError::<u8>::Missing(ValueMissing)]
    );
}

#[test]
fn test_assert_failures_infers_reason_type_from_result() {
    assert_failures!(
        validate_option(None::<u16>, [BoundRule::MinimumValue(1)]),
        vec![BoundError::Missing(ValueMissing)]
    );
    assert_failures!(
        validate_option(None::<String>, [StringRule::NonEmpty]),
        vec![StringError::Missing(ValueMissing)]
    );
}
