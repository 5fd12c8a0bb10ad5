/// Emphasis inline type with owned delimiter constant.
///
/// Emphasized runs are matched lazily: the run closes at the nearest
/// following marker, and the inner text is never re-parsed, so emphasis
/// cannot nest.
pub struct Emphasis;

impl Emphasis {
    /// The marker pair delimiting an emphasized run.
    pub const MARKER: &'static str = "**";

    /// Splits a leading emphasized run off `s`, returning the inner text and
    /// the remainder after the closing marker.
    ///
    /// Returns `None` when `s` does not start with a marker or the run never
    /// closes; an unmatched opener is literal text to the caller.
    pub fn leading_run(s: &str) -> Option<(&str, &str)> {
        let body = s.strip_prefix(Self::MARKER)?;
        let close = body.find(Self::MARKER)?;
        Some((&body[..close], &body[close + Self::MARKER.len()..]))
    }
}
