//! Tracker-specific error handling.

use thiserror::Error;

/// Errors surfaced by the issue tracker pipeline.
///
/// These are returned as values from the compilation boundary so the caller
/// can fall back to an unenriched release body instead of aborting the run.
#[derive(Error, Debug)]
pub enum TrackerError {
    /// The tracker has no release version for the project.
    #[error("no release version found for project")]
    VersionNotFound,

    /// The tracker was unreachable or answered with a non-success status.
    #[error("tracker request failed: {0}")]
    Network(String),

    /// The tracker response could not be decoded into the expected shape.
    #[error("malformed tracker response: {0}")]
    MalformedResponse(String),
}

// Note: anyhow already has a blanket impl for thiserror::Error types
