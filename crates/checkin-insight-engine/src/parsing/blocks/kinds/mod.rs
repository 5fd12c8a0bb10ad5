//! Block-kind syntax knowledge.
//!
//! Every delimiter, threshold, keyword list, and pattern lives with its
//! kind. The classifier calls these; it never hardcodes `---`, `###`, or a
//! bullet marker.

pub mod divider;
pub mod heading;
pub mod list_item;

pub use divider::Divider;
pub use heading::Heading;
pub use list_item::{BulletItem, NumberedItem};
