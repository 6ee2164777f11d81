//! Soldier entity type

use serde::{Deserialize, Serialize};

use crate::core::entity::{Entity, EntityKind, Field};
use crate::entities::person::Person;

/// A member on military service, also reachable by personal number
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Soldier {
    #[serde(flatten)]
    pub person: Person,

    /// Service number, e.g. `O/5044109`
    #[serde(default)]
    pub personal_number: String,
}

impl Soldier {
    pub const FIELDS: &'static [Field] = &[
        Field::Id,
        Field::Name,
        Field::Surname,
        Field::Tel,
        Field::PersonalNumber,
    ];

    pub fn new(person: Person, personal_number: impl Into<String>) -> Self {
        Self {
            person,
            personal_number: personal_number.into(),
        }
    }
}

impl Entity for Soldier {
    fn kind(&self) -> EntityKind {
        EntityKind::Soldier
    }

    fn fields(&self) -> &'static [Field] {
        Self::FIELDS
    }

    fn get(&self, field: Field) -> Option<&str> {
        match field {
            Field::PersonalNumber => Some(&self.personal_number),
            _ => self.person.get(field),
        }
    }

    fn slot(&mut self, field: Field) -> Option<&mut String> {
        match field {
            Field::PersonalNumber => Some(&mut self.personal_number),
            _ => self.person.slot(field),
        }
    }

    fn primary_key(&self) -> &str {
        self.person.primary_key()
    }

    fn matches(&self, key: &str) -> bool {
        self.person.matches(key) || self.personal_number == key
    }
}

impl std::fmt::Display for Soldier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.person)?;
        writeln!(f, "Personal Number: {}", self.personal_number)
    }
}
