//! Text input validation example
//!
//! Simulates a signup form whose fields report their text through
//! `TextInput`, and shows every failure collected for each field.
//!
//! Run with `cargo run --example text_input` (add `--features tracing` to see
//! the validation events).

use sluice::prelude::*;
use sluice::StringPattern;

// A form field as a UI toolkit might expose it
#[derive(Debug)]
struct Field {
    label: &'static str,
    text: Option<String>,
}

impl Field {
    fn new(label: &'static str, text: Option<&str>) -> Self {
        Self {
            label,
            text: text.map(str::to_string),
        }
    }
}

impl TextInput for Field {
    fn text(&self) -> Option<String> {
        self.text.clone()
    }
}

struct SignupForm {
    username: Field,
    email: Field,
    password: Field,
    password_confirm: Field,
    plan: Field,
}

fn check_form(form: &SignupForm) -> usize {
    let password = form.password.text().unwrap_or_default();

    let checks = [
        form.username.valid_value(vec![
            StringRule::NonEmpty,
            StringRule::regex(StringPattern::AlphanumericOnly),
            StringRule::LengthWithinRange(3, 16),
        ]),
        form.email.valid_value(vec![
            StringRule::NonEmpty,
            StringRule::regex(StringPattern::Email),
        ]),
        form.password.valid_value(vec![StringRule::MinLength(8)]),
        form.password_confirm
            .valid_value(vec![StringRule::matching(password)]),
        form.plan
            .valid_value(vec![StringRule::one_of(["free", "team", "enterprise"])]),
    ];

    let mut failed = 0;
    for check in checks {
        match check {
            Ok(text) => println!("  ✓ {:?}", text),
            Err(error) => {
                failed += 1;
                println!("  ✗ {}: {}", error.element.label, error.errors);
                for (i, reason) in error.errors.iter().enumerate() {
                    println!("      {}. {}", i + 1, reason);
                }
            }
        }
    }
    failed
}

fn main() {
    println!("=== Text Input Validation ===\n");

    println!("Form 1: all fields valid");
    let valid = SignupForm {
        username: Field::new("username", Some("ada99")),
        email: Field::new("email", Some("ada@example.com")),
        password: Field::new("password", Some("analytical")),
        password_confirm: Field::new("password confirmation", Some("analytical")),
        plan: Field::new("plan", Some("team")),
    };
    println!("  {} field(s) rejected", check_form(&valid));

    println!("\n---\n");

    println!("Form 2: several fields rejected at once");
    let invalid = SignupForm {
        username: Field::new("username", Some("a!")),
        email: Field::new("email", Some("not-an-email")),
        password: Field::new("password", Some("short")),
        password_confirm: Field::new("password confirmation", Some("shorter")),
        plan: Field::new("plan", Some("platinum")),
    };
    println!("  {} field(s) rejected", check_form(&invalid));

    println!("\n---\n");

    println!("Form 3: fields left blank");
    let blank = SignupForm {
        username: Field::new("username", None),
        email: Field::new("email", Some("")),
        password: Field::new("password", None),
        password_confirm: Field::new("password confirmation", None),
        plan: Field::new("plan", None),
    };
    println!("  {} field(s) rejected", check_form(&blank));

    println!("\n---\n");

    println!("Numbers use the same engine:");
    for age in [25u8, 12, 140] {
        match age.valid_value(&[BoundRule::Range(18, 120)]) {
            Ok(age) => println!("  ✓ age {}", age),
            Err(errors) => println!("  ✗ age {}: {}", age, errors),
        }
    }
}
