//! Snapshot parse errors rendered as source diagnostics

use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

use crate::core::store::StoreError;

/// A snapshot that could not be parsed, pointing at the offending line
#[derive(Debug, Error, Diagnostic)]
#[error("snapshot is unreadable: {message}")]
#[diagnostic(code(clubreg::snapshot::unreadable))]
pub struct SnapshotSyntaxError {
    #[source_code]
    src: NamedSource<String>,

    #[label("here")]
    span: SourceSpan,

    #[help]
    help: Option<String>,

    message: String,
}

impl SnapshotSyntaxError {
    /// Build a diagnostic from a parse failure of `source`
    pub fn from_store_error(err: &StoreError, source: &str, filename: &str) -> Self {
        let location = match err {
            StoreError::Parse(e) => e.location().map(|loc| (loc.line(), loc.column())),
            _ => None,
        };
        let (line, column) = location.unwrap_or((1, 1));
        let offset = line_col_to_offset(source, line, column);
        let message = err.to_string();

        Self {
            src: NamedSource::new(filename, source.to_string()),
            span: SourceSpan::from(offset..offset.saturating_add(1).min(source.len().max(1))),
            help: generate_help(&message),
            message,
        }
    }
}

/// Convert a 1-based line/column to a byte offset, clamped to the source
fn line_col_to_offset(source: &str, line: usize, column: usize) -> usize {
    let line_start = if line <= 1 {
        0
    } else {
        source
            .match_indices('\n')
            .nth(line - 2)
            .map(|(i, _)| i + 1)
            .unwrap_or(source.len())
    };

    let rest = &source[line_start..];
    let line_len = rest.find('\n').unwrap_or(rest.len());
    let col_offset = rest[..line_len]
        .char_indices()
        .nth(column.saturating_sub(1))
        .map(|(i, _)| i)
        .unwrap_or(line_len);

    line_start + col_offset
}

/// Suggest a fix for the common ways a hand-edited snapshot breaks
fn generate_help(message: &str) -> Option<String> {
    let msg_lower = message.to_lowercase();

    if msg_lower.contains("unknown variant") {
        return Some("Each member needs `kind: person`, `kind: soldier` or `kind: student`.".to_string());
    }

    if msg_lower.contains("missing field `kind`") {
        return Some("Add a `kind:` line to every entry under `members:`.".to_string());
    }

    if msg_lower.contains("newer than supported") {
        return Some("This snapshot was written by a newer clubreg; upgrade before editing it.".to_string());
    }

    if msg_lower.contains("tab") {
        return Some(
            "YAML requires spaces for indentation, not tabs. Replace tabs with spaces.".to_string(),
        );
    }

    if msg_lower.contains("mapping values are not allowed") {
        return Some("You may be missing a space after ':' or have incorrect indentation.".to_string());
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::store::SnapshotStore;

    #[test]
    fn test_line_col_to_offset() {
        let source = "line1\nline2\nline3";
        assert_eq!(line_col_to_offset(source, 1, 1), 0);
        assert_eq!(line_col_to_offset(source, 2, 1), 6);
        assert_eq!(line_col_to_offset(source, 3, 3), 14);
        assert_eq!(line_col_to_offset(source, 9, 1), source.len());
    }

    #[test]
    fn test_help_generation() {
        assert!(generate_help("members[0]: unknown variant `pilot`").is_some());
        assert!(generate_help("found tab character").is_some());
        assert!(generate_help("some random error").is_none());
    }

    #[test]
    fn test_diagnostic_from_bad_kind() {
        let source = "members:\n  - kind: pilot\n";
        let err = SnapshotStore::parse(source).unwrap_err();
        let diag = SnapshotSyntaxError::from_store_error(&err, source, "members.yaml");
        assert!(diag.to_string().starts_with("snapshot is unreadable"));
        assert!(diag.help.is_some());
    }
}
