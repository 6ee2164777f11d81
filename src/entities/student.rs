//! Student entity type

use serde::{Deserialize, Serialize};

use crate::core::entity::{Entity, EntityKind, Field};
use crate::entities::person::Person;

/// Offset of the numeric suffix inside a student ID (`SCE12345` -> `12345`)
const SUFFIX_OFFSET: usize = 3;

/// Length of the numeric suffix
const SUFFIX_LEN: usize = 5;

/// A member enrolled at a college, also reachable by the numeric part of
/// their student ID
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Student {
    #[serde(flatten)]
    pub person: Person,

    /// Institution code plus number, e.g. `SCE12345`
    #[serde(default)]
    pub student_id: String,
}

impl Student {
    pub const FIELDS: &'static [Field] = &[
        Field::Id,
        Field::Name,
        Field::Surname,
        Field::Tel,
        Field::StudentId,
    ];

    pub fn new(person: Person, student_id: impl Into<String>) -> Self {
        Self {
            person,
            student_id: student_id.into(),
        }
    }
}

/// Compare the first `len` chars of `key` with `len` chars of `text` starting
/// at `offset`. Either side being too short is a mismatch.
fn region_matches(key: &str, text: &str, offset: usize, len: usize) -> bool {
    let mut lhs = key.chars();
    let mut rhs = text.chars().skip(offset);
    (0..len).all(|_| match (lhs.next(), rhs.next()) {
        (Some(a), Some(b)) => a == b,
        _ => false,
    })
}

impl Entity for Student {
    fn kind(&self) -> EntityKind {
        EntityKind::Student
    }

    fn fields(&self) -> &'static [Field] {
        Self::FIELDS
    }

    fn get(&self, field: Field) -> Option<&str> {
        match field {
            Field::StudentId => Some(&self.student_id),
            _ => self.person.get(field),
        }
    }

    fn slot(&mut self, field: Field) -> Option<&mut String> {
        match field {
            Field::StudentId => Some(&mut self.student_id),
            _ => self.person.slot(field),
        }
    }

    fn primary_key(&self) -> &str {
        self.person.primary_key()
    }

    fn matches(&self, key: &str) -> bool {
        self.person.matches(key)
            || region_matches(key, &self.student_id, SUFFIX_OFFSET, SUFFIX_LEN)
    }
}

impl std::fmt::Display for Student {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.person)?;
        writeln!(f, "Student ID: {}", self.student_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn student(student_id: &str) -> Student {
        Student::new(
            Person::new("2-5554445|3", "Bo", "Sabri", "+(1)4-9520205"),
            student_id,
        )
    }

    #[test]
    fn test_student_matches_numeric_suffix() {
        assert!(student("SCE12345").matches("12345"));
        assert!(!student("SCE99999").matches("12345"));
        assert!(student("SCE12345").matches("2-5554445|3"));
    }

    #[test]
    fn test_student_suffix_compares_only_first_five_key_chars() {
        assert!(student("SCE12345").matches("123456"));
        assert!(!student("SCE12345").matches("1234"));
    }

    #[test]
    fn test_student_short_values_never_match() {
        assert!(!student("SCE12").matches("12"));
        assert!(!student("").matches("12345"));
        assert!(!student("SCE12345").matches(""));
    }

    #[test]
    fn test_region_matches_counts_chars_not_bytes() {
        assert!(region_matches("éabcd", "XYZéabcd", 3, 5));
        assert!(!region_matches("éabc", "XYZéabcd", 3, 5));
    }

    #[test]
    fn test_student_display_appends_student_id() {
        assert!(student("SCE12345").to_string().ends_with("Student ID: SCE12345\n"));
    }
}
