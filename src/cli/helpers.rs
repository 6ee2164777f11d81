//! Shared helper functions for CLI commands
//!
//! This module contains formatting and reporting helpers used across
//! multiple command modules.

use console::style;

use crate::core::entity::{Entity, Field};
use crate::core::member::Member;
use crate::core::rules::Validation;

/// Truncate a string to max_len chars, adding "..." if truncated
///
/// Useful for table columns that need fixed-width output.
pub fn truncate_str(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let kept: String = s.chars().take(max_len.saturating_sub(3)).collect();
        format!("{}...", kept)
    }
}

/// Escape a string for CSV output
///
/// Handles commas, quotes, and newlines according to RFC 4180.
pub fn escape_csv(s: &str) -> String {
    if s.contains(',') || s.contains('"') || s.contains('\n') {
        format!("\"{}\"", s.replace('"', "\"\""))
    } else {
        s.to_string()
    }
}

/// The kind-specific key of a member, or "-" for plain persons
pub fn secondary_key(member: &Member) -> &str {
    member.record().secondary_key().unwrap_or("-")
}

/// One line describing a field that failed its rule
pub fn describe_failure(field: Field) -> String {
    format!("{} is invalid (e.g: {})", field.label(), field.example())
}

/// Turn a failed validation into a reportable error
pub fn validation_report(validation: &Validation) -> miette::Report {
    let fields: Vec<&str> = validation.failed().iter().map(|f| f.label()).collect();
    let help: Vec<String> = validation
        .failed()
        .iter()
        .map(|f| format!("{}: e.g: {}", f.label(), f.example()))
        .collect();
    miette::miette!(
        help = help.join("\n"),
        "Invalid value for {}",
        fields.join(", ")
    )
}

/// Print a member as a labelled block
pub fn print_member(member: &Member) {
    let record = member.record();
    println!("{}", style("─".repeat(60)).dim());
    println!("{}", style(record.kind().title()).bold());
    println!("{}", style("─".repeat(60)).dim());
    for field in record.fields() {
        let value = record.get(*field).unwrap_or_default();
        let value = if *field == Field::Id {
            style(value).cyan()
        } else {
            style(value).yellow()
        };
        println!("{:<14} {}", style(format!("{}:", field.label())).bold(), value);
    }
    println!("{}", style("─".repeat(60)).dim());
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::{Person, Soldier};

    #[test]
    fn test_truncate_str() {
        assert_eq!(truncate_str("hello", 10), "hello");
        assert_eq!(truncate_str("hello world", 8), "hello...");
        assert_eq!(truncate_str("hi", 2), "hi");
        assert_eq!(truncate_str("Avrahami-O'Mally", 10), "Avraham...");
    }

    #[test]
    fn test_escape_csv() {
        assert_eq!(escape_csv("simple"), "simple");
        assert_eq!(escape_csv("with,comma"), "\"with,comma\"");
        assert_eq!(escape_csv("with\"quote"), "\"with\"\"quote\"");
        assert_eq!(escape_csv("O'Mally"), "O'Mally");
    }

    #[test]
    fn test_secondary_key() {
        let person = Member::from_record(Person::new("1-2423535|1", "Mark", "Sabri", "+(1)4-9520205"));
        assert_eq!(secondary_key(&person), "-");

        let soldier = Member::from_record(Soldier::new(
            Person::new("1-2423535|1", "Mark", "Sabri", "+(1)4-9520205"),
            "R/4684109",
        ));
        assert_eq!(secondary_key(&soldier), "R/4684109");
    }

    #[test]
    fn test_validation_report_names_field() {
        let report = validation_report(&Validation::failed_on([Field::Tel]));
        assert_eq!(report.to_string(), "Invalid value for Tel");
    }

    #[test]
    fn test_describe_failure_includes_example() {
        let line = describe_failure(Field::StudentId);
        assert!(line.starts_with("Student ID is invalid"));
        assert!(line.contains("SCE12345"));
    }
}
