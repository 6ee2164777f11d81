//! Per-field text rules
//!
//! Each declared field has exactly one anchored pattern. Rules are pure:
//! `(text) -> bool`, no state, no side effects.

use regex::Regex;
use std::sync::LazyLock;

use crate::core::entity::Field;

/// Digit, dash, seven digits, pipe, nonzero check digit: `1-2423535|1`
static ID_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]-[0-9]{7}\|[1-9]$").unwrap());

static NAME_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[A-Z][a-z]+$").unwrap());

/// Capitalised parts, each optionally followed by `'` or `-`: `Avrahami-O'Mally`
static SURNAME_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([A-Z][a-z]*['-]?)+$").unwrap());

/// `+(country)area-number`, no group may start with zero
static TEL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\+\([1-9][0-9]{0,2}\)[1-9][0-9]{0,2}-[1-9][0-9]{6}$").unwrap()
});

static PERSONAL_NUMBER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[ROC]/[1-9][0-9]{6}$").unwrap());

static STUDENT_ID_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Z]{3}[1-9][0-9]{4}$").unwrap());

/// The pattern a field's text must match in full
pub fn rule(field: Field) -> &'static Regex {
    match field {
        Field::Id => &ID_RE,
        Field::Name => &NAME_RE,
        Field::Surname => &SURNAME_RE,
        Field::Tel => &TEL_RE,
        Field::PersonalNumber => &PERSONAL_NUMBER_RE,
        Field::StudentId => &STUDENT_ID_RE,
    }
}

/// Check one field's text against its rule
pub fn is_valid(field: Field, text: &str) -> bool {
    rule(field).is_match(text)
}

/// Outcome of validating a member's draft
///
/// Validation stops at the first failing field, so `failed` holds at most
/// one entry today; it stays a list so callers can mark every flagged input.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Validation {
    failed: Vec<Field>,
}

impl Validation {
    /// A passing result
    pub fn ok() -> Self {
        Self::default()
    }

    /// A result flagging the given fields
    pub fn failed_on(fields: impl IntoIterator<Item = Field>) -> Self {
        Self {
            failed: fields.into_iter().collect(),
        }
    }

    pub fn is_ok(&self) -> bool {
        self.failed.is_empty()
    }

    /// Fields that did not match their rule
    pub fn failed(&self) -> &[Field] {
        &self.failed
    }
}
