//! Entity trait - common interface for all member field groups

use crate::core::rules;

/// Common trait for the field groups a member record is built from
///
/// Implemented by each concrete kind (`Person`, `Soldier`, `Student`) and by
/// the tagged [`Record`](crate::entities::Record) that dispatches over them.
pub trait Entity {
    /// The member kind this group belongs to
    fn kind(&self) -> EntityKind;

    /// Declared fields, inherited (person) fields first
    fn fields(&self) -> &'static [Field];

    /// Read a declared field; `None` if this kind does not declare it
    fn get(&self, field: Field) -> Option<&str>;

    /// Mutable access to a declared field
    fn slot(&mut self, field: Field) -> Option<&mut String>;

    /// The primary key (`id`), used for the duplicate-insertion check
    fn primary_key(&self) -> &str;

    /// Whether `key` identifies this record (primary or secondary key)
    fn matches(&self, key: &str) -> bool;

    /// True if any declared field is blank
    fn is_empty(&self) -> bool {
        self.fields()
            .iter()
            .any(|f| self.get(*f).map_or(true, str::is_empty))
    }

    /// First declared field whose value breaks its rule, in declaration order
    fn first_invalid(&self) -> Option<Field> {
        self.fields()
            .iter()
            .copied()
            .find(|f| !rules::is_valid(*f, self.get(*f).unwrap_or_default()))
    }

    /// Every declared field whose value breaks its rule
    fn invalid_fields(&self) -> Vec<Field> {
        self.fields()
            .iter()
            .copied()
            .filter(|f| !rules::is_valid(*f, self.get(*f).unwrap_or_default()))
            .collect()
    }
}

/// Member kinds
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(rename_all = "lowercase")]
#[derive(Default)]
pub enum EntityKind {
    #[default]
    Person,
    Soldier,
    Student,
}

impl EntityKind {
    /// Get all kinds
    pub fn all() -> &'static [EntityKind] {
        &[EntityKind::Person, EntityKind::Soldier, EntityKind::Student]
    }

    /// Title used when presenting a member of this kind
    pub fn title(&self) -> &'static str {
        match self {
            EntityKind::Person => "Person Clubber's Data",
            EntityKind::Soldier => "Soldier Clubber's Data",
            EntityKind::Student => "Student Clubber's Data",
        }
    }
}

impl std::fmt::Display for EntityKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EntityKind::Person => write!(f, "person"),
            EntityKind::Soldier => write!(f, "soldier"),
            EntityKind::Student => write!(f, "student"),
        }
    }
}

impl std::str::FromStr for EntityKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "person" => Ok(EntityKind::Person),
            "soldier" => Ok(EntityKind::Soldier),
            "student" => Ok(EntityKind::Student),
            _ => Err(format!("Unknown kind: {}", s)),
        }
    }
}

/// Every field any kind can declare
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(rename_all = "kebab-case")]
pub enum Field {
    Id,
    Name,
    Surname,
    Tel,
    PersonalNumber,
    StudentId,
}

impl Field {
    /// Machine name, as accepted on the command line
    pub fn as_str(&self) -> &'static str {
        match self {
            Field::Id => "id",
            Field::Name => "name",
            Field::Surname => "surname",
            Field::Tel => "tel",
            Field::PersonalNumber => "personal-number",
            Field::StudentId => "student-id",
        }
    }

    /// Human label
    pub fn label(&self) -> &'static str {
        match self {
            Field::Id => "ID",
            Field::Name => "Name",
            Field::Surname => "Surname",
            Field::Tel => "Tel",
            Field::PersonalNumber => "Personal No.",
            Field::StudentId => "Student ID",
        }
    }

    /// Sample values accepted by the field's rule
    pub fn example(&self) -> &'static str {
        match self {
            Field::Id => "0-2423535|1, 2-5554445|3",
            Field::Name => "Mark, Bo",
            Field::Surname => "Avrahami-O'Mally, Sabri",
            Field::Tel => "+(972)50-6663210, +(44)206-8208167, +(1)4-9520205",
            Field::PersonalNumber => "R/4684109, O/5044109, C/4684109",
            Field::StudentId => "SCE12345, RUP56098, HIT14606",
        }
    }
}

impl std::fmt::Display for Field {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for Field {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().replace('_', "-").as_str() {
            "id" => Ok(Field::Id),
            "name" => Ok(Field::Name),
            "surname" => Ok(Field::Surname),
            "tel" => Ok(Field::Tel),
            "personal-number" => Ok(Field::PersonalNumber),
            "student-id" => Ok(Field::StudentId),
            _ => Err(format!("Unknown field: {}", s)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_roundtrip_through_str() {
        for kind in EntityKind::all() {
            let parsed: EntityKind = kind.to_string().parse().unwrap();
            assert_eq!(parsed, *kind);
        }
        assert!("pilot".parse::<EntityKind>().is_err());
    }

    #[test]
    fn test_field_parse_accepts_snake_case() {
        assert_eq!("student_id".parse::<Field>().unwrap(), Field::StudentId);
        assert_eq!("Personal-Number".parse::<Field>().unwrap(), Field::PersonalNumber);
        assert!("email".parse::<Field>().is_err());
    }

    #[test]
    fn test_field_serializes_kebab_case() {
        let json = serde_json::to_string(&Field::PersonalNumber).unwrap();
        assert_eq!(json, "\"personal-number\"");
    }
}
