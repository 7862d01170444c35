//! Release body compilation commands.

use std::fmt::Write as _;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::warn;

use crate::tracker::{ReleaseCompilation, TrackerClient};
use crate::utils;

/// Release operations.
#[derive(Parser)]
pub struct ReleaseCommand {
    /// Release subcommand to execute.
    #[command(subcommand)]
    pub command: ReleaseSubcommands,
}

/// Release subcommands.
#[derive(Subcommand)]
pub enum ReleaseSubcommands {
    /// Compiles the release notes body from the issue tracker.
    Notes(NotesCommand),
}

/// Release-notes options.
#[derive(Parser)]
pub struct NotesCommand {
    /// Tracker base URL, e.g. https://example.atlassian.net.
    #[arg(long)]
    pub url: String,

    /// Tracker project key.
    #[arg(long)]
    pub project: String,

    /// Tracker user; falls back to TRACKER_USER.
    #[arg(long)]
    pub user: Option<String>,

    /// Tracker API key; falls back to TRACKER_API_KEY.
    #[arg(long)]
    pub api_key: Option<String>,
}

impl ReleaseCommand {
    /// Executes the release command.
    pub async fn execute(self) -> Result<()> {
        match self.command {
            ReleaseSubcommands::Notes(notes_cmd) => notes_cmd.execute().await,
        }
    }
}

impl NotesCommand {
    /// Executes the release-notes command.
    ///
    /// Tracker failures do not abort the run: the release can still ship
    /// without an enriched body, so they are reported and an empty body is
    /// emitted instead.
    pub async fn execute(self) -> Result<()> {
        let user = self
            .user
            .map_or_else(|| utils::get_env_var("TRACKER_USER"), Ok)
            .context("Tracker user not provided (use --user or TRACKER_USER)")?;
        let api_key = self
            .api_key
            .map_or_else(|| utils::get_env_var("TRACKER_API_KEY"), Ok)
            .context("Tracker API key not provided (use --api-key or TRACKER_API_KEY)")?;

        let client = TrackerClient::new(&self.url, &user, &api_key)?;

        match client.compile_release(&self.project).await {
            Ok(compilation) => print!("{}", render_release_body(&compilation)),
            Err(e) => {
                warn!("Release compilation failed, emitting empty body: {e}");
                println!();
            }
        }

        Ok(())
    }
}

/// Renders a compiled release into a Markdown body.
///
/// One section per issue, with its flattened note entries as bullets.
pub fn render_release_body(compilation: &ReleaseCompilation) -> String {
    let mut body = String::new();

    for issue in &compilation.issues {
        let _ = writeln!(
            body,
            "## [{}] {} ({})",
            issue.external_key, issue.title, issue.issue_type
        );
        for note in &issue.release_notes {
            let _ = writeln!(body, "- {}", note.text);
        }
        body.push('\n');
    }

    body
}

#[cfg(test)]
mod tests {
    use crate::tracker::{IssueRecord, NoteEntry, ReleaseCompilation};

    use super::*;

    #[test]
    fn renders_one_section_per_issue() {
        let compilation = ReleaseCompilation {
            version_id: 10010,
            issues: vec![
                IssueRecord {
                    title: "Fix login redirect".to_string(),
                    external_key: "DEMO-1".to_string(),
                    issue_type: "Bug".to_string(),
                    release_notes: vec![NoteEntry {
                        text: "Login now redirects to the requested page".to_string(),
                    }],
                },
                IssueRecord {
                    title: "Add audit log".to_string(),
                    external_key: "DEMO-2".to_string(),
                    issue_type: "Story".to_string(),
                    release_notes: vec![],
                },
            ],
        };

        let body = render_release_body(&compilation);
        assert!(body.contains("## [DEMO-1] Fix login redirect (Bug)"));
        assert!(body.contains("- Login now redirects to the requested page"));
        assert!(body.contains("## [DEMO-2] Add audit log (Story)"));
    }

    #[test]
    fn empty_compilation_renders_empty_body() {
        let compilation = ReleaseCompilation {
            version_id: 1,
            issues: vec![],
        };
        assert!(render_release_body(&compilation).is_empty());
    }
}
