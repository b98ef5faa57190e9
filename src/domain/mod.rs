//! Domain logic - pure version and tag rules independent of git operations

pub mod tag;
pub mod version;

pub use tag::{Tag, TagPattern};
pub use version::{compare, is_greater, BumpKind, SemanticVersion};
