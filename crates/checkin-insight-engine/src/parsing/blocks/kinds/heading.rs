use crate::parsing::blocks::types::HeadingCategory;

use super::list_item::BulletItem;

/// Heading block type owning the heading heuristics.
///
/// Two shapes qualify: an explicit `###` marker, or a short line ending in a
/// colon that does not open a list or numbered item. The colon form is
/// deliberately loose and can claim a short prose sentence ending in `:`;
/// that tolerance is inherited behavior and kept as-is.
pub struct Heading;

impl Heading {
    /// Explicit heading marker.
    pub const MARKER: &'static str = "###";
    /// The hash character stripped from marker headings.
    pub const HASH: char = '#';
    /// Colon-form headings must stay under this many characters.
    pub const MAX_COLON_FORM_LEN: usize = 80;
    /// Keywords that flag a heading as strategic (case-insensitive).
    pub const STRATEGIC_KEYWORDS: [&'static str; 3] = ["strategy", "action", "recommendation"];

    /// Attempts to open a heading from the trimmed line, returning the
    /// heading text.
    ///
    /// Marker headings keep their text minus every hash and surrounding
    /// whitespace; colon-form headings keep the trimmed line verbatim,
    /// trailing colon included.
    pub fn open(trimmed: &str) -> Option<String> {
        if trimmed.starts_with(Self::MARKER) {
            return Some(trimmed.replace(Self::HASH, "").trim().to_string());
        }

        let opens_list = trimmed
            .chars()
            .next()
            .is_some_and(|c| BulletItem::MARKERS.contains(&c) || c.is_ascii_digit());
        if trimmed.ends_with(':')
            && trimmed.chars().count() < Self::MAX_COLON_FORM_LEN
            && !opens_list
        {
            return Some(trimmed.to_string());
        }

        None
    }

    /// Classifies heading text as strategic or normal.
    pub fn category(text: &str) -> HeadingCategory {
        let lower = text.to_lowercase();
        if Self::STRATEGIC_KEYWORDS.iter().any(|kw| lower.contains(kw)) {
            HeadingCategory::Strategic
        } else {
            HeadingCategory::Normal
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn marker_heading_strips_hashes() {
        assert_eq!(Heading::open("### Risk Factors"), Some("Risk Factors".into()));
        assert_eq!(Heading::open("####Deep"), Some("Deep".into()));
    }

    #[test]
    fn colon_form_heading() {
        assert_eq!(Heading::open("Key Factors:"), Some("Key Factors:".into()));
    }

    #[test]
    fn list_markers_block_the_colon_form() {
        assert_eq!(Heading::open("- Deposit:"), None);
        assert_eq!(Heading::open("* Deposit:"), None);
        assert_eq!(Heading::open("1. Deposit:"), None);
        assert_eq!(Heading::open("0 risk factors noted:"), None);
    }

    #[test]
    fn long_colon_lines_are_not_headings() {
        let long = format!("{}:", "x".repeat(90));
        assert_eq!(Heading::open(&long), None);
    }

    #[test]
    fn plain_prose_is_not_a_heading() {
        assert_eq!(Heading::open("No colon here"), None);
    }

    #[test]
    fn strategic_keywords_match_case_insensitively() {
        assert_eq!(Heading::category("ACTION PLAN"), HeadingCategory::Strategic);
        assert_eq!(
            Heading::category("Recommendations for August"),
            HeadingCategory::Strategic
        );
        assert_eq!(Heading::category("Pricing Strategy"), HeadingCategory::Strategic);
    }

    #[test]
    fn other_headings_are_normal() {
        assert_eq!(Heading::category("Risk Factors:"), HeadingCategory::Normal);
    }
}
