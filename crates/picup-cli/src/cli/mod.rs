//! CLI for picup.

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use clap_complete::Shell;
use picup_core::config;
use std::path::PathBuf;

use commands::{run_completions, run_config, run_man, run_scan, run_upload};

/// Top-level CLI for picup.
#[derive(Debug, Parser)]
#[command(name = "picup")]
#[command(about = "picup: upload images referenced in a note and rewrite their links", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Upload all images in the active document and replace their URLs.
    Upload {
        /// Document to process (defaults to $PICUP_ACTIVE_DOCUMENT).
        path: Option<PathBuf>,
    },

    /// List image references and whether each would be uploaded, without uploading.
    Scan {
        /// Document to scan (defaults to $PICUP_ACTIVE_DOCUMENT).
        path: Option<PathBuf>,
    },

    /// Show or edit settings.
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },

    /// Print shell completions to stdout.
    Completions {
        /// Target shell.
        shell: Shell,
    },

    /// Print the man page (roff) to stdout.
    Man,
}

#[derive(Debug, Subcommand)]
pub enum ConfigAction {
    /// Print current settings.
    Show,

    /// Print the config file path.
    Path,

    /// Set the PicGo upload endpoint.
    SetServer {
        /// HTTP/HTTPS URL, e.g. http://127.0.0.1:36677/upload.
        url: String,
    },

    /// Edit the domain blacklist.
    Blacklist {
        #[command(subcommand)]
        action: BlacklistAction,
    },
}

#[derive(Debug, Subcommand)]
pub enum BlacklistAction {
    /// Add a domain (subdomains are blocked too).
    Add { domain: String },

    /// Remove every entry equal to the domain.
    Remove { domain: String },

    /// Replace the whole blacklist.
    Set { domains: Vec<String> },

    /// Empty the blacklist.
    Clear,
}

impl CliCommand {
    pub async fn run_from_args() -> Result<()> {
        let cli = Cli::parse();

        match cli.command {
            CliCommand::Upload { path } => {
                let cfg = config::load_or_init()?;
                tracing::debug!("loaded config: {:?}", cfg);
                run_upload(path.as_deref(), &cfg).await?;
            }
            CliCommand::Scan { path } => {
                let cfg = config::load_or_init()?;
                run_scan(path.as_deref(), &cfg).await?;
            }
            CliCommand::Config { action } => run_config(action)?,
            CliCommand::Completions { shell } => run_completions(shell),
            CliCommand::Man => run_man()?,
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests;
