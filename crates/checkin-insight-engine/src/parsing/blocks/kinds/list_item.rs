use std::sync::OnceLock;

use regex::Regex;

use crate::parsing::inline::kinds::Emphasis;

/// Numbered-step kind owning the `1. text` pattern.
pub struct NumberedItem;

impl NumberedItem {
    fn pattern() -> &'static Regex {
        static NUMBERED: OnceLock<Regex> = OnceLock::new();
        NUMBERED
            .get_or_init(|| Regex::new(r"^(\d+)\.\s+(.*)$").expect("invalid numbered-item regex"))
    }

    /// Attempts to open a numbered item from the trimmed line, returning the
    /// literal digit sequence and the payload after the separator.
    pub fn open(trimmed: &str) -> Option<(&str, &str)> {
        let (_, [number, rest]) = Self::pattern().captures(trimmed)?.extract();
        Some((number, rest))
    }
}

/// Bulleted-item kind owning markers and the nesting threshold.
pub struct BulletItem;

impl BulletItem {
    /// Characters that open a bullet when followed by whitespace.
    pub const MARKERS: [char; 2] = ['-', '*'];
    /// Leading whitespace at or past this count on the original line nests
    /// the bullet.
    pub const NEST_INDENT: usize = 2;

    /// Attempts to open a bullet from the trimmed line, returning the content
    /// with the marker and following whitespace stripped.
    pub fn open(trimmed: &str) -> Option<&str> {
        let rest = Self::MARKERS.iter().find_map(|&m| trimmed.strip_prefix(m))?;
        if !rest.starts_with(char::is_whitespace) {
            return None;
        }
        Some(rest.trim_start())
    }

    /// Counts leading whitespace characters on the original (untrimmed)
    /// line. This is the nesting signal; it must be taken before any trim.
    pub fn indent_of(line: &str) -> usize {
        line.chars().take_while(|c| c.is_whitespace()).count()
    }

    /// Splits a `**Key**: value` bullet content into key text and tail.
    ///
    /// The key is the leading emphasized run with an optional colon glued to
    /// the closing marker. The colon is dropped from the key text whether it
    /// sat inside or outside the markers; the tail is returned untrimmed.
    pub fn split_key(content: &str) -> Option<(&str, &str)> {
        let (inner, rest) = Emphasis::leading_run(content)?;
        let tail = rest.strip_prefix(':').unwrap_or(rest);
        Some((inner.strip_suffix(':').unwrap_or(inner), tail))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn open_numbered_item() {
        assert_eq!(NumberedItem::open("1. Check the deposit"), Some(("1", "Check the deposit")));
        assert_eq!(NumberedItem::open("12.  Spaced"), Some(("12", "Spaced")));
    }

    #[test]
    fn numbered_item_needs_separator_space() {
        assert_eq!(NumberedItem::open("1.Check"), None);
        assert_eq!(NumberedItem::open("1."), None);
    }

    #[test]
    fn open_dash_and_star_bullets() {
        assert_eq!(BulletItem::open("- item"), Some("item"));
        assert_eq!(BulletItem::open("* item"), Some("item"));
    }

    #[test]
    fn bullet_needs_whitespace_after_marker() {
        assert_eq!(BulletItem::open("-item"), None);
        assert_eq!(BulletItem::open("-"), None);
        assert_eq!(BulletItem::open("*bold* start"), None);
    }

    #[test]
    fn indent_counts_leading_whitespace() {
        assert_eq!(BulletItem::indent_of("- top"), 0);
        assert_eq!(BulletItem::indent_of("  - nested"), 2);
        assert_eq!(BulletItem::indent_of("\t- tabbed"), 1);
    }

    #[test]
    fn split_key_with_colon_outside_markers() {
        assert_eq!(
            BulletItem::split_key("**Cancellation Risk**: High due to late booking"),
            Some(("Cancellation Risk", " High due to late booking"))
        );
    }

    #[test]
    fn split_key_with_colon_inside_markers() {
        assert_eq!(
            BulletItem::split_key("**Platform:** Website"),
            Some(("Platform", " Website"))
        );
    }

    #[test]
    fn split_key_without_colon() {
        assert_eq!(BulletItem::split_key("**Note** nothing else"), Some(("Note", " nothing else")));
    }

    #[test]
    fn no_key_without_leading_emphasis() {
        assert_eq!(BulletItem::split_key("plain content"), None);
        assert_eq!(BulletItem::split_key("tail **emphasis** later"), None);
    }

    #[test]
    fn no_key_when_emphasis_is_unclosed() {
        assert_eq!(BulletItem::split_key("**unclosed: value"), None);
    }
}
