//! Version tag parsing and increment strategies.

pub mod hotfix;
pub mod segment;
pub mod strategy;

pub use hotfix::create_hotfix_tag;
pub use segment::{separate, PatchSegment};
pub use strategy::{
    increment_alphanumeric, increment_numeric, ConfigurationError, VersioningStrategy,
};
