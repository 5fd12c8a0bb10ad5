pub mod io;
pub mod parsing;

#[cfg(test)]
pub mod tests;

// Re-export key types for easier usage
pub use io::*;
pub use parsing::blocks::{Block, HeadingCategory};
pub use parsing::inline::Span;
pub use parsing::{ParsedReport, parse_report};
