use serde::Serialize;

/// One semantic run of rendered text within a block payload.
///
/// Spans own their text; concatenating [`Span::rendered_text`] over a
/// payload's spans reproduces the payload with only the matched emphasis
/// markers removed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum Span {
    /// Plain text between special constructs.
    Text(String),
    /// Text that sat inside a matched pair of emphasis markers; the markers
    /// themselves are gone and the inner text is never re-parsed.
    Emphasis(String),
    /// A whole-word `word__word` feature reference found in plain text.
    Identifier(String),
}

impl Span {
    /// The text a renderer shows for this span.
    #[must_use]
    pub fn rendered_text(&self) -> &str {
        match self {
            Span::Text(s) | Span::Emphasis(s) | Span::Identifier(s) => s,
        }
    }
}
