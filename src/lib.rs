//! # release-prep
//!
//! Release preparation toolkit for CI pipelines.
//!
//! ## Features
//!
//! - Next-tag derivation with numeric and alphanumeric patch strategies
//! - Release-note compilation from an issue tracker's fix version
//! - Rich-text release notes flattened into plain Markdown entries
//!
//! ## Quick Start
//!
//! ```rust
//! use release_prep::version::{create_hotfix_tag, VersioningStrategy};
//!
//! assert_eq!(
//!     create_hotfix_tag("v1.0.3", VersioningStrategy::Numeric),
//!     "v1.0.4"
//! );
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(unsafe_code)]

pub mod cli;
pub mod git;
pub mod tracker;
pub mod utils;
pub mod version;

pub use crate::cli::Cli;

/// The current version of release-prep.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
