//! Structural checks on identifiers supplied by clients and operators.

use std::sync::LazyLock;

use regex::Regex;

/// `<scheme>://<authority>/<path>` with ASCII word characters. The search is
/// unanchored, so trailing punctuation after the path does not disqualify a
/// candidate.
static URI_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[0-9A-Za-z_]{3,}://[0-9A-Za-z_]{2,}/[0-9A-Za-z_]*").expect("valid URI pattern")
});

static COLLECTION_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z_][A-Za-z0-9_]*$").expect("valid collection pattern"));

/// Returns true if `candidate` contains a structurally valid asset URI.
pub fn is_valid_uri(candidate: &str) -> bool {
    URI_PATTERN.is_match(candidate)
}

/// Returns true if `name` can be used verbatim as a collection (table) name.
pub fn is_valid_collection(name: &str) -> bool {
    COLLECTION_PATTERN.is_match(name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_scheme_authority_path() {
        assert!(is_valid_uri("myorg://users/test-user"));
        assert!(is_valid_uri("abc://de/"));
        assert!(is_valid_uri("http://example/path_1"));
    }

    #[test]
    fn rejects_urn_style_identifiers() {
        assert!(!is_valid_uri("urn:invalid:org:test-user"));
    }

    #[test]
    fn rejects_short_scheme_or_authority() {
        assert!(!is_valid_uri("ab://users/x"));
        assert!(!is_valid_uri("myorg://u/x"));
    }

    #[test]
    fn rejects_missing_separator_or_path_slash() {
        assert!(!is_valid_uri("myorg:/users/x"));
        assert!(!is_valid_uri("myorg://users"));
        assert!(!is_valid_uri(""));
    }

    #[test]
    fn word_class_is_ascii_only() {
        assert!(!is_valid_uri("ürg://üsers/x"));
    }

    #[test]
    fn collection_names_are_plain_identifiers() {
        assert!(is_valid_collection("assets"));
        assert!(is_valid_collection("_assets_v2"));
        assert!(!is_valid_collection("2assets"));
        assert!(!is_valid_collection("assets; DROP TABLE x"));
        assert!(!is_valid_collection(""));
    }
}
