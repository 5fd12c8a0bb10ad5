use std::sync::OnceLock;

use regex::Regex;

/// Feature-identifier inline type owning the `word__word` pattern.
///
/// Identifiers reference engineered model feature names such as
/// `num_adults__log`. Detection is structural: a maximal run of word
/// characters, a literal double underscore, another maximal run, as a whole
/// word. Backticks around the token are gone by the time inline parsing
/// runs.
pub struct Identifier;

impl Identifier {
    /// The compiled whole-word identifier pattern.
    pub fn pattern() -> &'static Regex {
        static IDENTIFIER: OnceLock<Regex> = OnceLock::new();
        IDENTIFIER
            .get_or_init(|| Regex::new(r"\b\w+__\w+\b").expect("invalid feature-identifier regex"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn matches_feature_identifier() {
        let m = Identifier::pattern().find("see num_adults__log here");
        assert_eq!(m.map(|m| m.as_str()), Some("num_adults__log"));
    }

    #[test]
    fn matches_against_punctuation_boundaries() {
        let m = Identifier::pattern().find("(price__scaled).");
        assert_eq!(m.map(|m| m.as_str()), Some("price__scaled"));
    }

    #[test]
    fn single_underscore_is_not_an_identifier() {
        assert!(Identifier::pattern().find("num_adults is plain").is_none());
    }

    #[test]
    fn finds_every_identifier_in_a_line() {
        let found: Vec<&str> = Identifier::pattern()
            .find_iter("price__scaled beats lead_time__log")
            .map(|m| m.as_str())
            .collect();
        assert_eq!(found, vec!["price__scaled", "lead_time__log"]);
    }
}
