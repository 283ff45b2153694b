//! Id and display-name rules, and case-insensitive duplicate tracking.

use std::collections::HashSet;
use std::sync::LazyLock;

use cfmeta_core::SourcePosition;
use regex::Regex;

use super::diagnostics::DiagnosticLog;

const MAX_LENGTH: usize = 128;

static ID_CHARSET: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9._]*$").expect("valid regex"));
static NAME_START: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\p{L}").expect("valid regex"));
static NAME_CHARSET: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\p{L}[\p{L}0-9._]*$").expect("valid regex"));

/// Upper-case a registered id.
pub(crate) fn normalize_id(id: &str) -> String {
    id.to_uppercase()
}

pub(crate) fn validate_id(id: &str, position: SourcePosition, log: &mut DiagnosticLog) {
    if !ID_CHARSET.is_match(id) {
        log.push(
            format!(
                "The custom function id contains invalid characters. Allowed characters are ('A-Z','a-z','0-9','.','_'):{id}"
            ),
            position,
        );
    }
    if id.chars().count() > MAX_LENGTH {
        log.push(
            "The custom function id exceeds the maximum of 128 characters allowed.",
            position,
        );
    }
}

/// Every failed rule reports, so an empty name yields three diagnostics.
pub(crate) fn validate_name(name: &str, position: SourcePosition, log: &mut DiagnosticLog) {
    if name.is_empty() {
        log.push("You need to provide a custom function name.", position);
    }
    if !NAME_START.is_match(name) {
        log.push(
            format!("The custom function name \"{name}\" should start with an alphabetic character."),
            position,
        );
    }
    if !NAME_CHARSET.is_match(name) {
        log.push(
            format!(
                "The custom function name \"{name}\" should contain only alphabetic characters, numbers (0-9), period (.), and underscore (_)."
            ),
            position,
        );
    }
    if name.chars().count() > MAX_LENGTH {
        log.push(
            "The custom function name is too long. It must be 128 characters or less.",
            position,
        );
    }
}

/// A namespace in which names must be unique, ignoring case.
#[derive(Debug, Default)]
pub(crate) struct UniqueNames {
    seen: HashSet<String>,
}

impl UniqueNames {
    /// Record `name`; `false` when it was already present.
    pub fn insert(&mut self, name: &str) -> bool {
        self.seen.insert(name.to_lowercase())
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    const AT: SourcePosition = SourcePosition { line: 4, column: 1 };

    fn id_messages(id: &str) -> Vec<String> {
        let mut log = DiagnosticLog::default();
        validate_id(id, AT, &mut log);
        log.into_vec().into_iter().map(|d| d.message).collect()
    }

    fn name_messages(name: &str) -> Vec<String> {
        let mut log = DiagnosticLog::default();
        validate_name(name, AT, &mut log);
        log.into_vec().into_iter().map(|d| d.message).collect()
    }

    #[rstest]
    #[case("ADD")]
    #[case("CONTOSO.ADD_2")]
    #[case("")]
    fn valid_ids(#[case] id: &str) {
        assert!(id_messages(id).is_empty());
    }

    #[test]
    fn id_with_invalid_characters() {
        assert_eq!(
            id_messages("ADD-2"),
            vec![
                "The custom function id contains invalid characters. Allowed characters are ('A-Z','a-z','0-9','.','_'):ADD-2"
                    .to_string()
            ]
        );
    }

    #[test]
    fn id_length_limit() {
        assert!(id_messages(&"A".repeat(128)).is_empty());
        assert_eq!(
            id_messages(&"A".repeat(129)),
            vec!["The custom function id exceeds the maximum of 128 characters allowed.".to_string()]
        );
    }

    #[rstest]
    #[case("Add")]
    #[case("add.two_3")]
    #[case("Ünïcode")]
    #[case("合計")]
    fn valid_names(#[case] name: &str) {
        assert!(name_messages(name).is_empty(), "{name}");
    }

    #[test]
    fn name_starting_with_digit() {
        assert_eq!(
            name_messages("2Add"),
            vec![
                "The custom function name \"2Add\" should start with an alphabetic character."
                    .to_string(),
                "The custom function name \"2Add\" should contain only alphabetic characters, numbers (0-9), period (.), and underscore (_)."
                    .to_string(),
            ]
        );
    }

    #[test]
    fn empty_name_reports_every_rule() {
        let messages = name_messages("");
        assert_eq!(messages.len(), 3);
        assert_eq!(messages[0], "You need to provide a custom function name.");
    }

    #[test]
    fn name_length_counts_characters() {
        assert!(name_messages(&"é".repeat(128)).is_empty());
        assert_eq!(
            name_messages(&"é".repeat(129)),
            vec!["The custom function name is too long. It must be 128 characters or less.".to_string()]
        );
    }

    #[test]
    fn ids_are_upper_cased() {
        assert_eq!(normalize_id("getStarCount"), "GETSTARCOUNT");
    }

    #[test]
    fn unique_names_ignore_case() {
        let mut names = UniqueNames::default();
        assert!(names.insert("Foo"));
        assert!(!names.insert("FOO"));
        assert!(names.insert("bar"));
    }
}
