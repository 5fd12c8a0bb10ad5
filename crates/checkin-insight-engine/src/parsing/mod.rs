pub mod blocks;
pub mod inline;

use serde::Serialize;

use blocks::{Block, BlockAssembler, ReportLineClassifier};

/// The backtick character stripped globally before any line processing.
const TICK: char = '`';

/// A fully parsed analyst report: the ordered block sequence handed to a
/// renderer.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ParsedReport {
    pub blocks: Vec<Block>,
}

/// Parses one analyst report into its renderable block sequence.
///
/// Backticks are removed from the whole input first: feature identifiers get
/// their distinct styling from the `word__word` shape, never from code-fence
/// markers the report author happened to emit. Classification then runs per
/// physical line, each line independent of its neighbors.
///
/// Every input has a defined parse; the empty report produces an empty block
/// sequence.
pub fn parse_report(text: &str) -> ParsedReport {
    let cleaned = strip_ticks(text);
    if cleaned.is_empty() {
        return ParsedReport { blocks: vec![] };
    }

    let classifier = ReportLineClassifier;
    let mut assembler = BlockAssembler::new();

    for line in cleaned.split('\n') {
        assembler.push(&classifier.classify(line));
    }

    ParsedReport {
        blocks: assembler.finish(),
    }
}

fn strip_ticks(text: &str) -> String {
    text.replace(TICK, "")
}
