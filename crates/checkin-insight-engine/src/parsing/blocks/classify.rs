use super::kinds::{BulletItem, Divider, Heading, NumberedItem};
use super::types::HeadingCategory;

/// Classification of a single physical line, containing only local facts.
///
/// Each line is classified independently, without reference to surrounding
/// lines, and the rules apply in strict precedence order: first match wins,
/// so no line can carry more than one terminal kind.
#[derive(Debug, Clone, PartialEq)]
pub enum LineClass<'a> {
    /// Whitespace-only line.
    Blank,
    /// Horizontal-rule line.
    Divider,
    /// Section heading with its extracted text.
    Heading {
        category: HeadingCategory,
        text: String,
    },
    /// Numbered step; `number` borrows the literal digits before the period.
    Numbered { number: &'a str, rest: &'a str },
    /// Bulleted item with marker and surrounding whitespace stripped.
    Bullet { nested: bool, content: &'a str },
    /// Fallback; the payload is the untouched original line so intentional
    /// inline spacing survives.
    Paragraph { text: &'a str },
}

/// Classifies individual report lines.
pub struct ReportLineClassifier;

impl ReportLineClassifier {
    /// Classifies one line of the cleaned report.
    ///
    /// `line` is the full original line including leading whitespace, which
    /// is the nesting signal for bullets and must survive until here.
    pub fn classify<'a>(&self, line: &'a str) -> LineClass<'a> {
        let trimmed = line.trim();

        if trimmed.is_empty() {
            return LineClass::Blank;
        }
        if Divider::opens(trimmed) {
            return LineClass::Divider;
        }
        if let Some(text) = Heading::open(trimmed) {
            let category = Heading::category(&text);
            return LineClass::Heading { category, text };
        }
        if let Some((number, rest)) = NumberedItem::open(trimmed) {
            return LineClass::Numbered { number, rest };
        }
        if let Some(content) = BulletItem::open(trimmed) {
            return LineClass::Bullet {
                nested: BulletItem::indent_of(line) >= BulletItem::NEST_INDENT,
                content,
            };
        }

        LineClass::Paragraph { text: line }
    }
}
