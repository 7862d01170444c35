//! Next-tag derivation commands.

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

use crate::git::GitRepository;
use crate::version::{create_hotfix_tag, VersioningStrategy};

/// Tag operations.
#[derive(Parser)]
pub struct TagCommand {
    /// Tag subcommand to execute.
    #[command(subcommand)]
    pub command: TagSubcommands,
}

/// Tag subcommands.
#[derive(Subcommand)]
pub enum TagSubcommands {
    /// Prints the next release tag derived from the latest one.
    Next(NextCommand),
}

/// Next-tag options.
#[derive(Parser)]
pub struct NextCommand {
    /// Latest existing tag; discovered from the repository when omitted.
    #[arg(long)]
    pub latest: Option<String>,

    /// Repository to discover the latest tag from.
    #[arg(long, default_value = ".")]
    pub repo: PathBuf,

    /// Versioning strategy: 'numeric' or 'alphanumeric'.
    #[arg(long)]
    pub strategy: VersioningStrategy,
}

impl TagCommand {
    /// Executes the tag command.
    pub fn execute(self) -> Result<()> {
        match self.command {
            TagSubcommands::Next(next_cmd) => next_cmd.execute(),
        }
    }
}

impl NextCommand {
    /// Executes the next-tag command.
    pub fn execute(self) -> Result<()> {
        println!("{}", self.next_tag()?);
        Ok(())
    }

    /// Derives the next tag without printing it.
    ///
    /// A missing prior tag is fatal: with nothing to increment there is no
    /// meaningful release to prepare.
    pub fn next_tag(&self) -> Result<String> {
        let latest = match &self.latest {
            Some(tag) => tag.clone(),
            None => GitRepository::open_at(&self.repo)?.latest_tag()?,
        };

        Ok(create_hotfix_tag(&latest, self.strategy))
    }
}
