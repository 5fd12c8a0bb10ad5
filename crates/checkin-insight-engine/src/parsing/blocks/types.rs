use serde::Serialize;

use crate::parsing::inline::Span;

/// Whether a heading carries actionable advice or plain structure.
///
/// The classifier flags any heading whose text mentions strategy, action, or
/// recommendation; renderers give those distinct emphasis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum HeadingCategory {
    Normal,
    Strategic,
}

/// One semantic unit of a parsed report, in input order.
///
/// Every line of the cleaned report maps to exactly one block; blank lines
/// become [`Block::Spacer`] so vertical rhythm survives into the renderer.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum Block {
    /// A blank line.
    Spacer,
    /// A horizontal rule (`---` / `___`).
    Divider,
    /// A section heading.
    Heading {
        category: HeadingCategory,
        spans: Vec<Span>,
    },
    /// A numbered step. `number` keeps the literal digit sequence from the
    /// source so renderers echo exactly what the analyst wrote.
    NumberedItem { number: String, spans: Vec<Span> },
    /// A bulleted item, nested when the source line was indented.
    ///
    /// `key` is present when the content opened with an emphasized run
    /// (optionally colon-terminated): it holds the de-emphasized key spans
    /// and `spans` holds the tail. Otherwise `spans` holds the whole content.
    BulletItem {
        nested: bool,
        key: Option<Vec<Span>>,
        spans: Vec<Span>,
    },
    /// Catch-all for ordinary prose lines.
    Paragraph { spans: Vec<Span> },
}
