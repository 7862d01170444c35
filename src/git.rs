//! Git repository operations.

use anyhow::{Context, Result};
use git2::Repository;

/// Git repository wrapper.
pub struct GitRepository {
    repo: Repository,
}

impl GitRepository {
    /// Open repository at specified path.
    pub fn open_at<P: AsRef<std::path::Path>>(path: P) -> Result<Self> {
        let repo = Repository::open(path).context("Failed to open git repository")?;

        Ok(Self { repo })
    }

    /// Returns the most recent release tag in the repository.
    ///
    /// Tags are compared by the commit time of the commit they point to, so
    /// lightweight and annotated tags are handled uniformly. A repository
    /// with no tags at all is an error: without a prior tag there is nothing
    /// to derive the next release from, and the run must stop.
    pub fn latest_tag(&self) -> Result<String> {
        let names = self
            .repo
            .tag_names(None)
            .context("Failed to list repository tags")?;

        let mut latest: Option<(i64, String)> = None;

        for name in names.iter().flatten() {
            let object = self
                .repo
                .revparse_single(name)
                .with_context(|| format!("Failed to resolve tag: {name}"))?;
            let commit = object
                .peel_to_commit()
                .with_context(|| format!("Failed to peel tag to commit: {name}"))?;

            let time = commit.time().seconds();
            // Ties go to the later tag name in iteration order.
            if latest.as_ref().map_or(true, |(t, _)| time >= *t) {
                latest = Some((time, name.to_string()));
            }
        }

        latest
            .map(|(_, name)| name)
            .context("No existing tags found in repository")
    }
}
