//! # Validation
//!
//! The validator is the only gate between raw form input and the record store.
//! Checks run in a fixed order and stop at the first failure:
//!
//! 1. Required text fields are present and non-blank after trimming
//!    (`fullName`, `email`, `gender`, `goal`, `startDate`, in that order).
//! 2. `age` parses as an integer in `1..=150`.
//! 3. `email` has a `local@domain.tld` shape.
//!
//! Nothing in this module touches storage.

use crate::model::{ClientFields, ClientForm};
use once_cell::sync::Lazy;
use regex::Regex;
use std::fmt;

pub const MIN_AGE: i64 = 1;
pub const MAX_AGE: i64 = 150;

static EMAIL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email regex should compile"));

/// Names of the required text fields, as they appear in storage.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequiredField {
    FullName,
    Email,
    Gender,
    Goal,
    StartDate,
}

impl RequiredField {
    pub fn as_str(&self) -> &'static str {
        match self {
            RequiredField::FullName => "fullName",
            RequiredField::Email => "email",
            RequiredField::Gender => "gender",
            RequiredField::Goal => "goal",
            RequiredField::StartDate => "startDate",
        }
    }
}

impl fmt::Display for RequiredField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationFailure {
    MissingRequiredField(RequiredField),
    InvalidAge,
    InvalidEmailFormat,
}

impl fmt::Display for ValidationFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationFailure::MissingRequiredField(field) => write!(
                f,
                "Please fill in all required fields (Name, Email, Gender, Fitness Goal, and Start Date): {} is missing",
                field
            ),
            ValidationFailure::InvalidAge => write!(
                f,
                "Please enter a valid age (a whole number from {} to {})",
                MIN_AGE, MAX_AGE
            ),
            ValidationFailure::InvalidEmailFormat => write!(
                f,
                "Please enter a valid email address format (e.g., user@domain.com)"
            ),
        }
    }
}

impl std::error::Error for ValidationFailure {}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationResult {
    Valid,
    Invalid(ValidationFailure),
}

impl ValidationResult {
    pub fn is_valid(&self) -> bool {
        matches!(self, ValidationResult::Valid)
    }
}

pub fn validate(form: &ClientForm) -> ValidationResult {
    match check(form) {
        Ok(_) => ValidationResult::Valid,
        Err(failure) => ValidationResult::Invalid(failure),
    }
}

/// Runs the checks and, on success, returns the parsed age.
fn check(form: &ClientForm) -> Result<u8, ValidationFailure> {
    let required = [
        (RequiredField::FullName, &form.full_name),
        (RequiredField::Email, &form.email),
        (RequiredField::Gender, &form.gender),
        (RequiredField::Goal, &form.goal),
        (RequiredField::StartDate, &form.start_date),
    ];
    if let Some((field, _)) = required.iter().find(|(_, value)| value.trim().is_empty()) {
        return Err(ValidationFailure::MissingRequiredField(*field));
    }

    let age = parse_age(&form.age).ok_or(ValidationFailure::InvalidAge)?;

    if !is_valid_email(form.email.trim()) {
        return Err(ValidationFailure::InvalidEmailFormat);
    }

    Ok(age)
}

/// Parses an age from text. Anything that is not a whole number in range
/// (including "abc", "", "30.5") yields `None`.
///
/// Unlike a leading-digits parse, "30.5" and "30abc" are rejected rather
/// than stored as 30.
pub fn parse_age(input: &str) -> Option<u8> {
    let age: i64 = input.trim().parse().ok()?;
    if (MIN_AGE..=MAX_AGE).contains(&age) {
        u8::try_from(age).ok()
    } else {
        None
    }
}

pub fn is_valid_email(email: &str) -> bool {
    EMAIL_RE.is_match(email)
}

impl ClientForm {
    /// Validates the form and converts it into trimmed [`ClientFields`].
    pub fn into_fields(self) -> Result<ClientFields, ValidationFailure> {
        let age = check(&self)?;
        Ok(ClientFields {
            full_name: self.full_name.trim().to_string(),
            age,
            gender: self.gender.trim().to_string(),
            email: self.email.trim().to_string(),
            phone: self.phone.trim().to_string(),
            goal: self.goal.trim().to_string(),
            start_date: self.start_date.trim().to_string(),
        })
    }
}
