//! Registry - the ordered collection of committed members
//!
//! Lookups are linear scans in insertion order. Uniqueness is checked only
//! when a member is added, and only against its primary key: a secondary
//! key edited after insertion is not re-checked.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::core::member::Member;

/// Ordered set of club members
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Registry {
    members: Vec<Member>,
}

impl Registry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Wrap members as-is, without the add-time checks
    ///
    /// Used when restoring a snapshot; the order is preserved.
    pub fn from_members(members: Vec<Member>) -> Self {
        Self { members }
    }

    /// First member, in insertion order, that `key` identifies
    pub fn find(&self, key: &str) -> Option<&Member> {
        self.members.iter().find(|m| m.matches(key))
    }

    /// Mutable access to the member [`find`](Self::find) would return
    pub fn find_mut(&mut self, key: &str) -> Option<&mut Member> {
        self.members.iter_mut().find(|m| m.matches(key))
    }

    /// Append a committed member
    ///
    /// Rejected if any committed field is blank, or if an existing member
    /// already matches the new member's primary key.
    pub fn add(&mut self, member: Member) -> Result<(), RegistryError> {
        if member.is_empty() {
            return Err(RegistryError::Incomplete {
                kind: member.kind().to_string(),
            });
        }

        if self.find(member.id()).is_some() {
            return Err(RegistryError::DuplicateKey {
                key: member.id().to_string(),
            });
        }

        tracing::debug!(kind = %member.kind(), id = %member.id(), "added member");
        self.members.push(member);
        Ok(())
    }

    /// Remove the member [`find`](Self::find) would return for `key`
    pub fn remove(&mut self, key: &str) -> Option<Member> {
        let index = self.members.iter().position(|m| m.matches(key))?;
        let removed = self.members.remove(index);
        tracing::debug!(kind = %removed.kind(), id = %removed.id(), "removed member");
        Some(removed)
    }

    /// All members in committed order
    pub fn list(&self) -> &[Member] {
        &self.members
    }

    pub fn iter(&self) -> impl Iterator<Item = &Member> {
        self.members.iter()
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }
}

impl std::fmt::Display for Registry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Number of Clubbers: {}", self.members.len())?;
        for member in &self.members {
            writeln!(f)?;
            write!(f, "{}", member)?;
        }
        Ok(())
    }
}

/// Errors raised when adding a member
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RegistryError {
    #[error("{kind} record has blank fields")]
    Incomplete { kind: String },

    #[error("ID already exists: {key}")]
    DuplicateKey { key: String },
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::entity::EntityKind;
    use crate::entities::{Person, Soldier, Student};

    fn person(id: &str) -> Member {
        Member::from_record(Person::new(id, "Mark", "O'Mally", "+(972)50-6663210"))
    }

    fn student(id: &str, student_id: &str) -> Member {
        Member::from_record(Student::new(
            Person::new(id, "Bo", "Sabri", "+(1)4-9520205"),
            student_id,
        ))
    }

    #[test]
    fn test_add_find_remove() {
        let mut registry = Registry::new();
        registry.add(person("1-2423535|1")).unwrap();

        let found = registry.find("1-2423535|1").unwrap();
        assert_eq!(found.id(), "1-2423535|1");

        let removed = registry.remove("1-2423535|1").unwrap();
        assert_eq!(removed.id(), "1-2423535|1");
        assert!(registry.find("1-2423535|1").is_none());
        assert!(registry.is_empty());
    }

    #[test]
    fn test_add_rejects_empty_member_of_any_kind() {
        let mut registry = Registry::new();
        for kind in EntityKind::all() {
            let err = registry.add(Member::new(*kind)).unwrap_err();
            assert!(matches!(err, RegistryError::Incomplete { .. }));
        }

        let half = Member::from_record(Soldier::new(
            Person::new("1-2423535|1", "Mark", "O'Mally", "+(972)50-6663210"),
            "",
        ));
        assert!(matches!(
            registry.add(half),
            Err(RegistryError::Incomplete { .. })
        ));
        assert!(registry.is_empty());
    }

    #[test]
    fn test_add_rejects_duplicate_primary_key() {
        let mut registry = Registry::new();
        registry.add(person("1-2423535|1")).unwrap();

        let other = student("1-2423535|1", "SCE12345");
        assert_eq!(
            registry.add(other),
            Err(RegistryError::DuplicateKey {
                key: "1-2423535|1".to_string()
            })
        );
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_secondary_keys_do_not_block_insertion() {
        let mut registry = Registry::new();
        registry.add(student("1-2423535|1", "SCE12345")).unwrap();
        // same numeric suffix, different primary key
        registry.add(student("2-5554445|3", "HIT12345")).unwrap();
        assert_eq!(registry.len(), 2);
        // lookup returns the first in insertion order
        assert_eq!(registry.find("12345").unwrap().id(), "1-2423535|1");
    }

    #[test]
    fn test_remove_missing_key_is_noop() {
        let mut registry = Registry::new();
        registry.add(person("1-2423535|1")).unwrap();
        assert!(registry.remove("9-9999999|9").is_none());
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_list_preserves_insertion_order() {
        let mut registry = Registry::new();
        registry.add(person("2-5554445|3")).unwrap();
        registry.add(person("1-2423535|1")).unwrap();
        let ids: Vec<&str> = registry.list().iter().map(|m| m.id()).collect();
        assert_eq!(ids, vec!["2-5554445|3", "1-2423535|1"]);
    }

    #[test]
    fn test_find_mut_edits_in_place() {
        use crate::core::entity::Field;
        use crate::core::session::EditSession;

        let mut registry = Registry::new();
        registry.add(person("1-2423535|1")).unwrap();
        {
            let member = registry.find_mut("1-2423535|1").unwrap();
            let mut session = EditSession::open(member);
            session.set(Field::Name, "Bo").unwrap();
            assert!(session.submit().unwrap().is_ok());
        }
        assert_eq!(
            registry.find("1-2423535|1").unwrap().committed(Field::Name),
            Some("Bo")
        );
    }

    #[test]
    fn test_display_counts_members() {
        let mut registry = Registry::new();
        registry.add(person("1-2423535|1")).unwrap();
        let text = registry.to_string();
        assert!(text.starts_with("Number of Clubbers: 1\n"));
        assert!(text.contains("ID: 1-2423535|1"));
    }
}
