//! Two-phase edit protocol over a [`Member`]
//!
//! ```text
//! Editing --submit/commit (valid)--> Committed --set--> Editing
//!    |  \--submit (invalid)--> Editing (failed fields flagged)
//!    \--cancel--> RolledBack (terminal)
//! ```
//!
//! A session holds the member mutably for its whole life, so nothing else
//! can touch that member until the session ends. Dropping a session that
//! is still `Editing` rolls the draft back.

use thiserror::Error;

use crate::core::entity::Field;
use crate::core::member::{CommitError, EntityError, Member};
use crate::core::rules::Validation;

/// Where a session is in the edit protocol
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    /// Draft is open for changes
    Editing,
    /// Last submit succeeded; further edits reopen the session
    Committed,
    /// Draft discarded; the session accepts no more operations
    RolledBack,
}

/// An open edit on one member
#[derive(Debug)]
pub struct EditSession<'a> {
    member: &'a mut Member,
    state: SessionState,
}

impl<'a> EditSession<'a> {
    /// Open a session; the draft starts equal to the committed state
    pub fn open(member: &'a mut Member) -> Self {
        Self {
            member,
            state: SessionState::Editing,
        }
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    /// The member under edit
    pub fn member(&self) -> &Member {
        self.member
    }

    /// Read a draft field
    pub fn get(&self, field: Field) -> Option<&str> {
        self.member.draft(field)
    }

    /// Write a draft field
    pub fn set(&mut self, field: Field, value: impl Into<String>) -> Result<(), SessionError> {
        self.ensure_open()?;
        self.member.set_draft(field, value)?;
        self.state = SessionState::Editing;
        Ok(())
    }

    /// Run the field rules over the draft
    pub fn validate(&mut self) -> Result<Validation, SessionError> {
        self.ensure_open()?;
        Ok(self.member.validate())
    }

    /// Commit a draft that just passed [`validate`](Self::validate)
    pub fn commit(&mut self) -> Result<(), SessionError> {
        self.ensure_open()?;
        self.member.commit()?;
        self.state = SessionState::Committed;
        Ok(())
    }

    /// Validate, and commit if the draft passes
    ///
    /// A failing draft is left untouched with its fields flagged, and the
    /// session stays `Editing` so the caller can correct and resubmit.
    pub fn submit(&mut self) -> Result<Validation, SessionError> {
        let validation = self.validate()?;
        if validation.is_ok() {
            self.commit()?;
        }
        Ok(validation)
    }

    /// Discard the draft and close the session
    pub fn cancel(&mut self) -> Result<(), SessionError> {
        self.ensure_open()?;
        self.member.rollback();
        self.state = SessionState::RolledBack;
        Ok(())
    }

    fn ensure_open(&self) -> Result<(), SessionError> {
        match self.state {
            SessionState::RolledBack => Err(SessionError::Closed),
            _ => Ok(()),
        }
    }
}

impl Drop for EditSession<'_> {
    fn drop(&mut self) {
        if self.state == SessionState::Editing && self.member.is_dirty() {
            tracing::debug!(id = %self.member.id(), "edit session dropped, rolling back draft");
            self.member.rollback();
        }
    }
}

/// Errors raised by an edit session
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SessionError {
    #[error("edit session was cancelled")]
    Closed,

    #[error(transparent)]
    Entity(#[from] EntityError),

    #[error(transparent)]
    Commit(#[from] CommitError),
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::entity::EntityKind;

    fn fill(session: &mut EditSession<'_>) {
        session.set(Field::Id, "2-5554445|3").unwrap();
        session.set(Field::Name, "Bo").unwrap();
        session.set(Field::Surname, "Sabri").unwrap();
        session.set(Field::Tel, "+(44)206-8208167").unwrap();
        session.set(Field::PersonalNumber, "O/5044109").unwrap();
    }

    #[test]
    fn test_submit_valid_draft_commits() {
        let mut member = Member::new(EntityKind::Soldier);
        {
            let mut session = EditSession::open(&mut member);
            fill(&mut session);
            let v = session.submit().unwrap();
            assert!(v.is_ok());
            assert_eq!(session.state(), SessionState::Committed);
        }
        assert!(member.matches("O/5044109"));
        assert!(!member.is_empty());
    }

    #[test]
    fn test_submit_invalid_draft_stays_editing() {
        let mut member = Member::new(EntityKind::Soldier);
        let mut session = EditSession::open(&mut member);
        fill(&mut session);
        session.set(Field::PersonalNumber, "Z/5044109").unwrap();
        let v = session.submit().unwrap();
        assert_eq!(v.failed(), &[Field::PersonalNumber]);
        assert_eq!(session.state(), SessionState::Editing);
        assert_eq!(session.get(Field::PersonalNumber), Some("Z/5044109"));
        assert!(session.member().is_empty());
    }

    #[test]
    fn test_commit_without_validate_is_rejected() {
        let mut member = Member::new(EntityKind::Soldier);
        let mut session = EditSession::open(&mut member);
        fill(&mut session);
        assert_eq!(
            session.commit(),
            Err(SessionError::Commit(CommitError::NotValidated))
        );
    }

    #[test]
    fn test_cancel_rolls_back_and_closes() {
        let mut member = Member::new(EntityKind::Person);
        let mut session = EditSession::open(&mut member);
        session.set(Field::Name, "Mark").unwrap();
        session.cancel().unwrap();
        assert_eq!(session.state(), SessionState::RolledBack);
        assert_eq!(session.get(Field::Name), Some(""));
        assert_eq!(session.set(Field::Name, "Bo"), Err(SessionError::Closed));
        assert_eq!(session.submit(), Err(SessionError::Closed));
    }

    #[test]
    fn test_committed_session_reopens_on_edit() {
        let mut member = Member::new(EntityKind::Soldier);
        let mut session = EditSession::open(&mut member);
        fill(&mut session);
        session.submit().unwrap();
        session.set(Field::Name, "Mark").unwrap();
        assert_eq!(session.state(), SessionState::Editing);
        assert!(session.submit().unwrap().is_ok());
        assert_eq!(session.member().committed(Field::Name), Some("Mark"));
    }

    #[test]
    fn test_commit_rollback_commit_round_trip() {
        let mut member = Member::new(EntityKind::Soldier);
        let mut session = EditSession::open(&mut member);
        fill(&mut session);
        assert!(session.submit().unwrap().is_ok());
        session.set(Field::Tel, "garbage").unwrap();
        session.cancel().unwrap();
        drop(session);

        let mut session = EditSession::open(&mut member);
        assert!(session.submit().unwrap().is_ok());
        assert_eq!(session.member().committed(Field::Tel), Some("+(44)206-8208167"));
    }

    #[test]
    fn test_dropping_open_session_discards_draft() {
        let mut member = Member::new(EntityKind::Person);
        {
            let mut session = EditSession::open(&mut member);
            session.set(Field::Name, "Mark").unwrap();
        }
        assert!(!member.is_dirty());
        assert_eq!(member.draft(Field::Name), Some(""));
    }

    #[test]
    fn test_set_undeclared_field_surfaces_entity_error() {
        let mut member = Member::new(EntityKind::Person);
        let mut session = EditSession::open(&mut member);
        let err = session.set(Field::StudentId, "SCE12345").unwrap_err();
        assert!(matches!(err, SessionError::Entity(_)));
    }
}
