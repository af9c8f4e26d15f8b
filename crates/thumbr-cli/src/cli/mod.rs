//! CLI for the thumbr image URL rewriter.

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;
use thumbr_core::config::{self, RewriterConfig};

use commands::{run_classify, run_completions, run_config_path, run_config_show, run_rewrite};

/// Top-level CLI for thumbr.
#[derive(Debug, Parser)]
#[command(name = "thumbr")]
#[command(about = "thumbr: route remote image URLs through a resizing proxy", long_about = None)]
pub struct Cli {
    /// Config file to use instead of ~/.config/thumbr/config.toml.
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Print the URL to render for each image reference.
    Rewrite {
        /// Image references. If none are given, references are read from stdin, one per line.
        urls: Vec<String>,
        /// Read a JSON value (or array of values) from stdin; non-strings map to the placeholder.
        #[arg(long, conflicts_with = "urls")]
        json: bool,
    },

    /// Show which branch each reference takes (placeholder, proxied, local, rewrite).
    Classify {
        /// Image references to classify.
        #[arg(required = true)]
        urls: Vec<String>,
    },

    /// Inspect the configuration file.
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },

    /// Print shell completions to stdout.
    Completions {
        /// Target shell.
        shell: Shell,
    },
}

#[derive(Debug, Subcommand)]
pub enum ConfigAction {
    /// Print the config file path.
    Path,
    /// Print the effective config as TOML (creates the default file if missing).
    Show,
}

impl Cli {
    pub fn run_from_args() -> Result<()> {
        let cli = Cli::parse();

        match cli.command {
            CliCommand::Rewrite { ref urls, json } => {
                let cfg = cli.load_config()?;
                run_rewrite(cfg, urls, json)?;
            }
            CliCommand::Classify { ref urls } => {
                let cfg = cli.load_config()?;
                run_classify(cfg, urls)?;
            }
            CliCommand::Config { ref action } => match action {
                ConfigAction::Path => run_config_path(cli.config.as_deref())?,
                ConfigAction::Show => run_config_show(&cli.load_config()?)?,
            },
            CliCommand::Completions { shell } => run_completions(shell),
        }

        Ok(())
    }

    fn load_config(&self) -> Result<RewriterConfig> {
        let cfg = match &self.config {
            Some(path) => config::load_or_init_at(path)?,
            None => config::load_or_init()?,
        };
        tracing::debug!("loaded config: {:?}", cfg);
        Ok(cfg)
    }
}

#[cfg(test)]
mod tests;
