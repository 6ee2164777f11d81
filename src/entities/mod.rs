//! Entity type definitions
//!
//! clubreg supports the following member kinds:
//!
//! - [`Person`] - Base record: ID, name, surname, phone
//! - [`Soldier`] - Person plus a service personal number (secondary key)
//! - [`Student`] - Person plus a student ID whose numeric suffix is a secondary key
//!
//! [`Record`] is the tagged variant stored in the registry and the snapshot.

pub mod person;
pub mod soldier;
pub mod student;

pub use person::Person;
pub use soldier::Soldier;
pub use student::Student;

use serde::{Deserialize, Serialize};

use crate::core::entity::{Entity, EntityKind, Field};

/// One member record in any of the supported kinds
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Record {
    Person(Person),
    Soldier(Soldier),
    Student(Student),
}

impl Record {
    /// A record of the given kind with every field blank
    pub fn empty(kind: EntityKind) -> Self {
        match kind {
            EntityKind::Person => Record::Person(Person::default()),
            EntityKind::Soldier => Record::Soldier(Soldier::default()),
            EntityKind::Student => Record::Student(Student::default()),
        }
    }

    /// The shared person fields
    pub fn person(&self) -> &Person {
        match self {
            Record::Person(p) => p,
            Record::Soldier(s) => &s.person,
            Record::Student(s) => &s.person,
        }
    }

    /// The kind-specific secondary key, if the kind has one
    pub fn secondary_key(&self) -> Option<&str> {
        match self {
            Record::Person(_) => None,
            Record::Soldier(s) => Some(&s.personal_number),
            Record::Student(s) => Some(&s.student_id),
        }
    }

    fn as_entity(&self) -> &dyn Entity {
        match self {
            Record::Person(p) => p,
            Record::Soldier(s) => s,
            Record::Student(s) => s,
        }
    }

    fn as_entity_mut(&mut self) -> &mut dyn Entity {
        match self {
            Record::Person(p) => p,
            Record::Soldier(s) => s,
            Record::Student(s) => s,
        }
    }
}

impl Entity for Record {
    fn kind(&self) -> EntityKind {
        self.as_entity().kind()
    }

    fn fields(&self) -> &'static [Field] {
        self.as_entity().fields()
    }

    fn get(&self, field: Field) -> Option<&str> {
        self.as_entity().get(field)
    }

    fn slot(&mut self, field: Field) -> Option<&mut String> {
        self.as_entity_mut().slot(field)
    }

    fn primary_key(&self) -> &str {
        self.as_entity().primary_key()
    }

    fn matches(&self, key: &str) -> bool {
        self.as_entity().matches(key)
    }
}

impl From<Person> for Record {
    fn from(p: Person) -> Self {
        Record::Person(p)
    }
}

impl From<Soldier> for Record {
    fn from(s: Soldier) -> Self {
        Record::Soldier(s)
    }
}

impl From<Student> for Record {
    fn from(s: Student) -> Self {
        Record::Student(s)
    }
}

impl std::fmt::Display for Record {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Record::Person(p) => write!(f, "{}", p),
            Record::Soldier(s) => write!(f, "{}", s),
            Record::Student(s) => write!(f, "{}", s),
        }
    }
}
