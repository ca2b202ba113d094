//! # Placeholder Extraction
//!
//! Finds vault key references of the form `{{ .Name }}` inside secret values.
//!
//! Each `{{ ... }}` occurrence is scanned on its own. Its interior is split on
//! whitespace and the first word starting with `.` is the reference; an
//! occurrence with no such word (e.g. `{{ VALUE }}`) contributes nothing.

use crate::constants::REFERENCE_SIGIL;
use regex::Regex;
use std::sync::LazyLock;

/// Non-greedy: the interior may not contain `}`, so adjacent occurrences never merge
static PLACEHOLDER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\{\{([^}]+)\}\}").expect("placeholder pattern is valid")
});

/// Extract every vault key reference in a single value.
///
/// References are returned with their sigil, in order of appearance.
pub fn extract_references(value: &str) -> Vec<String> {
    PLACEHOLDER
        .captures_iter(value)
        .filter_map(|caps| {
            caps.get(1)?
                .as_str()
                .split_whitespace()
                .find(|word| word.starts_with(REFERENCE_SIGIL))
                .map(str::to_string)
        })
        .collect()
}

/// Extract references from an optional value; `None` (explicit null) yields nothing
pub fn extract_from_optional(value: Option<&str>) -> Vec<String> {
    value.map(extract_references).unwrap_or_default()
}

/// Strip the sigil from a reference, `None` if it is missing
pub fn strip_sigil(reference: &str) -> Option<&str> {
    reference.strip_prefix(REFERENCE_SIGIL)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_reference() {
        assert_eq!(extract_references("{{ .VALUE }}"), vec![".VALUE"]);
    }

    #[test]
    fn test_reference_without_spaces() {
        assert_eq!(extract_references("{{.VALUE}}"), vec![".VALUE"]);
    }

    #[test]
    fn test_multiple_references_in_one_value() {
        let value = "postgres://{{ .DB_USER }}:{{ .DB_PASSWORD }}@db:5432/app";
        assert_eq!(
            extract_references(value),
            vec![".DB_USER", ".DB_PASSWORD"],
            "Each occurrence should be scanned independently"
        );
    }

    #[test]
    fn test_reference_without_sigil_is_ignored() {
        assert!(extract_references("{{ VALUE }}").is_empty());
    }

    #[test]
    fn test_first_sigil_word_wins() {
        // Template pipelines such as `{{ .A | b64dec }}` keep the reference word only
        assert_eq!(extract_references("{{ .A | b64dec }}"), vec![".A"]);
        assert_eq!(extract_references("{{ index .Map \"k\" }}"), vec![".Map"]);
        assert_eq!(extract_references("{{ .A .B }}"), vec![".A"]);
    }

    #[test]
    fn test_punctuation_is_kept() {
        assert_eq!(extract_references("{{ .KEY, }}"), vec![".KEY,"]);
    }

    #[test]
    fn test_plain_values_have_no_references() {
        let values = vec!["", "plain-password", "{ .NOT }", "{{}}", "{{ }}", "}} .X {{"];

        for value in values {
            assert!(
                extract_references(value).is_empty(),
                "Value '{}' should contain no references",
                value
            );
        }
    }

    #[test]
    fn test_optional_null_value() {
        assert!(extract_from_optional(None).is_empty());
        assert_eq!(extract_from_optional(Some("{{ .X }}")), vec![".X"]);
    }

    #[test]
    fn test_strip_sigil() {
        assert_eq!(strip_sigil(".VALUE"), Some("VALUE"));
        assert_eq!(strip_sigil("VALUE"), None);
    }
}
