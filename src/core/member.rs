//! Member - a record with separate committed and draft field groups
//!
//! The committed group is authoritative: it is what the registry matches
//! against, what gets displayed, and what the snapshot persists. The draft
//! group is the live edit buffer. After construction and after every
//! commit or rollback the two are equal.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::core::entity::{Entity, EntityKind, Field};
use crate::core::rules::Validation;
use crate::entities::Record;

/// A club member with draft and committed state
///
/// Serializes as its committed [`Record`] only; drafts never reach disk.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Record", into = "Record")]
pub struct Member {
    committed: Record,
    draft: Record,
    /// Fields flagged by the most recent validation
    failed: Vec<Field>,
    /// Most recent validation passed and the draft is unchanged since
    validated: bool,
}

impl Member {
    /// Create a blank member of the given kind
    pub fn new(kind: EntityKind) -> Self {
        Self::from_record(Record::empty(kind))
    }

    /// Create a member pre-filled with committed values
    pub fn from_record(record: impl Into<Record>) -> Self {
        let committed = record.into();
        Self {
            draft: committed.clone(),
            committed,
            failed: Vec::new(),
            validated: false,
        }
    }

    pub fn kind(&self) -> EntityKind {
        self.committed.kind()
    }

    /// The committed record
    pub fn record(&self) -> &Record {
        &self.committed
    }

    /// The primary key of the committed state
    pub fn id(&self) -> &str {
        self.committed.primary_key()
    }

    /// Read a committed field
    pub fn committed(&self, field: Field) -> Option<&str> {
        self.committed.get(field)
    }

    /// Read a draft field
    pub fn draft(&self, field: Field) -> Option<&str> {
        self.draft.get(field)
    }

    /// Write a draft field
    pub fn set_draft(&mut self, field: Field, value: impl Into<String>) -> Result<(), EntityError> {
        let kind = self.kind();
        let slot = self
            .draft
            .slot(field)
            .ok_or(EntityError::UndeclaredField { kind, field })?;
        *slot = value.into();
        self.validated = false;
        Ok(())
    }

    /// Fields flagged by the most recent validation
    pub fn failed_fields(&self) -> &[Field] {
        &self.failed
    }

    /// Whether the draft differs from the committed state
    pub fn is_dirty(&self) -> bool {
        self.draft != self.committed
    }

    /// Check the draft against the field rules
    ///
    /// Person fields are checked first, then the kind's own field; the first
    /// failure stops the check. Only the failure flags change.
    pub fn validate(&mut self) -> Validation {
        let validation = match self.draft.first_invalid() {
            Some(field) => Validation::failed_on([field]),
            None => Validation::ok(),
        };
        self.failed = validation.failed().to_vec();
        self.validated = validation.is_ok();
        validation
    }

    /// Copy the draft into the committed state
    ///
    /// Requires the most recent [`validate`](Self::validate) to have passed
    /// with no draft edits since; the rules are not re-run here.
    pub fn commit(&mut self) -> Result<(), CommitError> {
        if !self.validated {
            return Err(CommitError::NotValidated);
        }
        self.committed = self.draft.clone();
        self.validated = false;
        tracing::debug!(kind = %self.kind(), id = %self.id(), "committed member");
        Ok(())
    }

    /// Discard the draft and clear all failure flags
    pub fn rollback(&mut self) {
        self.draft = self.committed.clone();
        self.failed.clear();
        self.validated = false;
    }

    /// True if any committed field is blank
    pub fn is_empty(&self) -> bool {
        self.committed.is_empty()
    }

    /// Whether `key` identifies this member by its committed state
    pub fn matches(&self, key: &str) -> bool {
        self.committed.matches(key)
    }
}

impl From<Record> for Member {
    fn from(record: Record) -> Self {
        Self::from_record(record)
    }
}

impl From<Member> for Record {
    fn from(member: Member) -> Self {
        member.committed
    }
}

impl std::fmt::Display for Member {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.committed)
    }
}

/// Errors raised by draft access
#[derive(Debug, Error, PartialEq, Eq)]
pub enum EntityError {
    #[error("a {kind} has no '{field}' field")]
    UndeclaredField { kind: EntityKind, field: Field },
}

/// Errors raised by commit
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CommitError {
    #[error("commit requires a passing validation of the current draft")]
    NotValidated,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::{Person, Student};

    fn fill_person(m: &mut Member) {
        m.set_draft(Field::Id, "1-2423535|1").unwrap();
        m.set_draft(Field::Name, "Mark").unwrap();
        m.set_draft(Field::Surname, "O'Mally").unwrap();
        m.set_draft(Field::Tel, "+(972)50-6663210").unwrap();
    }

    #[test]
    fn test_new_member_is_blank_and_clean() {
        let m = Member::new(EntityKind::Soldier);
        assert!(m.is_empty());
        assert!(!m.is_dirty());
        assert_eq!(m.draft(Field::PersonalNumber), Some(""));
    }

    #[test]
    fn test_draft_edits_do_not_touch_committed() {
        let mut m = Member::new(EntityKind::Person);
        fill_person(&mut m);
        assert!(m.is_dirty());
        assert_eq!(m.committed(Field::Id), Some(""));
        assert_eq!(m.draft(Field::Id), Some("1-2423535|1"));
        assert!(!m.matches("1-2423535|1"));
    }

    #[test]
    fn test_set_undeclared_field_fails() {
        let mut m = Member::new(EntityKind::Person);
        let err = m.set_draft(Field::StudentId, "SCE12345").unwrap_err();
        assert_eq!(
            err,
            EntityError::UndeclaredField {
                kind: EntityKind::Person,
                field: Field::StudentId
            }
        );
    }

    #[test]
    fn test_validate_then_commit() {
        let mut m = Member::new(EntityKind::Person);
        fill_person(&mut m);
        assert!(m.validate().is_ok());
        m.commit().unwrap();
        assert!(!m.is_dirty());
        assert!(!m.is_empty());
        assert_eq!(m.id(), "1-2423535|1");
        assert!(m.matches("1-2423535|1"));
    }

    #[test]
    fn test_validate_flags_exactly_the_bad_field() {
        let mut m = Member::new(EntityKind::Person);
        fill_person(&mut m);
        m.set_draft(Field::Surname, "o'mally").unwrap();
        let v = m.validate();
        assert!(!v.is_ok());
        assert_eq!(v.failed(), &[Field::Surname]);
        assert_eq!(m.failed_fields(), &[Field::Surname]);
    }

    #[test]
    fn test_validate_short_circuits_on_first_failure() {
        let mut m = Member::new(EntityKind::Student);
        fill_person(&mut m);
        m.set_draft(Field::Name, "mark").unwrap();
        m.set_draft(Field::StudentId, "bad").unwrap();
        assert_eq!(m.validate().failed(), &[Field::Name]);
    }

    #[test]
    fn test_commit_after_failed_validate_leaves_committed_unchanged() {
        let mut m = Member::new(EntityKind::Person);
        fill_person(&mut m);
        m.set_draft(Field::Tel, "972-50").unwrap();
        assert!(!m.validate().is_ok());
        assert_eq!(m.commit(), Err(CommitError::NotValidated));
        assert!(m.is_empty());
    }

    #[test]
    fn test_edit_after_validate_requires_revalidation() {
        let mut m = Member::new(EntityKind::Person);
        fill_person(&mut m);
        assert!(m.validate().is_ok());
        m.set_draft(Field::Name, "x").unwrap();
        assert_eq!(m.commit(), Err(CommitError::NotValidated));
    }

    #[test]
    fn test_rollback_restores_committed_and_clears_flags() {
        let mut m = Member::from_record(Student::new(
            Person::new("1-2423535|1", "Mark", "O'Mally", "+(972)50-6663210"),
            "SCE12345",
        ));
        m.set_draft(Field::StudentId, "nope").unwrap();
        assert!(!m.validate().is_ok());
        m.rollback();
        assert!(!m.is_dirty());
        assert!(m.failed_fields().is_empty());
        assert_eq!(m.draft(Field::StudentId), Some("SCE12345"));
        // committed state was valid, so it still is
        assert!(m.validate().is_ok());
    }

    #[test]
    fn test_serializes_committed_state_only() {
        let mut m = Member::from_record(Person::new(
            "1-2423535|1",
            "Mark",
            "O'Mally",
            "+(972)50-6663210",
        ));
        m.set_draft(Field::Name, "Draft").unwrap();
        let yaml = serde_yml::to_string(&m).unwrap();
        assert!(yaml.contains("name: Mark"));
        assert!(!yaml.contains("Draft"));

        let back: Member = serde_yml::from_str(&yaml).unwrap();
        assert!(!back.is_dirty());
        assert_eq!(back.record(), m.record());
    }
}
