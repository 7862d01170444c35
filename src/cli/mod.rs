//! CLI interface for release-prep.

use anyhow::Result;
use clap::{Parser, Subcommand};

pub mod release;
pub mod tag;

pub use release::ReleaseCommand;
pub use tag::TagCommand;

/// release-prep: release preparation toolkit for CI pipelines.
#[derive(Parser)]
#[command(name = "release-prep")]
#[command(about = "Derive the next release tag and compile tracker release notes", long_about = None)]
#[command(version)]
pub struct Cli {
    /// The main command to execute.
    #[command(subcommand)]
    pub command: Commands,
}

/// Main command categories.
#[derive(Subcommand)]
pub enum Commands {
    /// Tag derivation operations.
    Tag(TagCommand),
    /// Release body compilation.
    Release(ReleaseCommand),
}

impl Cli {
    /// Execute the CLI command.
    pub async fn execute(self) -> Result<()> {
        match self.command {
            Commands::Tag(tag_cmd) => tag_cmd.execute(),
            Commands::Release(release_cmd) => release_cmd.execute().await,
        }
    }
}
