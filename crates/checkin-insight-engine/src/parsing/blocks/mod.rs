//! Line classification and block assembly.
//!
//! Phase 1 classifies each physical line independently ([`classify`]);
//! phase 2 maps each classification onto a renderable block ([`assemble`]).
//! Kind-specific syntax knowledge (markers, thresholds, patterns) lives in
//! [`kinds`].

pub mod assemble;
pub mod classify;
pub mod kinds;
pub mod types;

pub use assemble::BlockAssembler;
pub use classify::{LineClass, ReportLineClassifier};
pub use types::{Block, HeadingCategory};
