//! Person field group - the base every member kind carries

use serde::{Deserialize, Serialize};

use crate::core::entity::{Entity, EntityKind, Field};

/// A plain club member
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Person {
    /// National ID, e.g. `1-2423535|1`
    pub id: String,

    /// Given name
    pub name: String,

    /// Family name
    pub surname: String,

    /// Phone number, e.g. `+(972)50-6663210`
    pub tel: String,
}

impl Person {
    pub const FIELDS: &'static [Field] = &[Field::Id, Field::Name, Field::Surname, Field::Tel];

    /// Create a person with all fields set
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        surname: impl Into<String>,
        tel: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            surname: surname.into(),
            tel: tel.into(),
        }
    }
}

impl Entity for Person {
    fn kind(&self) -> EntityKind {
        EntityKind::Person
    }

    fn fields(&self) -> &'static [Field] {
        Self::FIELDS
    }

    fn get(&self, field: Field) -> Option<&str> {
        match field {
            Field::Id => Some(&self.id),
            Field::Name => Some(&self.name),
            Field::Surname => Some(&self.surname),
            Field::Tel => Some(&self.tel),
            _ => None,
        }
    }

    fn slot(&mut self, field: Field) -> Option<&mut String> {
        match field {
            Field::Id => Some(&mut self.id),
            Field::Name => Some(&mut self.name),
            Field::Surname => Some(&mut self.surname),
            Field::Tel => Some(&mut self.tel),
            _ => None,
        }
    }

    fn primary_key(&self) -> &str {
        &self.id
    }

    fn matches(&self, key: &str) -> bool {
        self.id == key
    }
}

impl std::fmt::Display for Person {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "ID: {}", self.id)?;
        writeln!(f, "Name: {}", self.name)?;
        writeln!(f, "Surname: {}", self.surname)?;
        writeln!(f, "Tel: {}", self.tel)
    }
}
