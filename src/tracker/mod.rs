//! Issue tracker integration: version resolution and release-note compilation.

pub mod client;
pub mod error;
pub mod notes;

pub use client::{IssueRecord, ReleaseCompilation, ReleaseCompilationResult, TrackerClient};
pub use error::TrackerError;
pub use notes::{flatten, NoteEntry};
