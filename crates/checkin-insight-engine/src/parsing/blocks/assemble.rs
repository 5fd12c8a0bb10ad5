use super::classify::LineClass;
use super::kinds::BulletItem;
use super::types::Block;
use crate::parsing::inline::parse_inline;

/// Builds the ordered block sequence from classified lines.
///
/// One line in, exactly one block out; blanks become spacers. The assembler
/// holds no state between lines beyond the output buffer, so block order is
/// input line order by construction.
pub struct BlockAssembler {
    out: Vec<Block>,
}

impl BlockAssembler {
    pub fn new() -> Self {
        Self { out: vec![] }
    }

    /// Converts one classified line into its block, running inline parsing
    /// on every textual payload (key and tail separately for keyed bullets).
    pub fn push(&mut self, class: &LineClass<'_>) {
        let block = match class {
            LineClass::Blank => Block::Spacer,
            LineClass::Divider => Block::Divider,
            LineClass::Heading { category, text } => Block::Heading {
                category: *category,
                spans: parse_inline(text),
            },
            LineClass::Numbered { number, rest } => Block::NumberedItem {
                number: (*number).to_string(),
                spans: parse_inline(rest),
            },
            LineClass::Bullet { nested, content } => match BulletItem::split_key(content) {
                Some((key, tail)) => Block::BulletItem {
                    nested: *nested,
                    key: Some(parse_inline(key)),
                    spans: parse_inline(tail),
                },
                None => Block::BulletItem {
                    nested: *nested,
                    key: None,
                    spans: parse_inline(content),
                },
            },
            LineClass::Paragraph { text } => Block::Paragraph {
                spans: parse_inline(text),
            },
        };
        self.out.push(block);
    }

    pub fn finish(self) -> Vec<Block> {
        self.out
    }
}

impl Default for BlockAssembler {
    fn default() -> Self {
        Self::new()
    }
}
