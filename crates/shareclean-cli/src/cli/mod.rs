//! CLI for the shareclean URL cleaner.

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use clap_complete::Shell;
use shareclean_core::config;

use commands::{run_clean, run_completions, run_man, run_rules, CleanArgs};

/// Top-level CLI for shareclean.
#[derive(Debug, Parser)]
#[command(name = "shareclean")]
#[command(about = "shareclean: strip tracking parameters and expand share links", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Clean URLs and print one result per line.
    Clean {
        /// URLs to clean. Reads one URL per line from stdin when omitted.
        urls: Vec<String>,

        /// Never touch the network; share links are cleaned like any other URL.
        #[arg(long)]
        offline: bool,

        /// Drop the `#fragment` from every result.
        #[arg(long)]
        strip_fragment: bool,
    },

    /// List the built-in host rules, or show the rule that applies to a URL.
    Rules {
        /// URL to look up.
        url: Option<String>,
    },

    /// Print a shell completion script.
    Completions {
        /// Target shell.
        #[arg(value_enum)]
        shell: Shell,
    },

    /// Print the man page (roff) to stdout.
    Man,
}

impl CliCommand {
    pub async fn run_from_args() -> Result<()> {
        let cli = Cli::parse();

        match cli.command {
            CliCommand::Clean {
                urls,
                offline,
                strip_fragment,
            } => {
                let cfg = config::load_or_init()?;
                tracing::debug!("loaded config: {:?}", cfg);
                let args = CleanArgs {
                    urls,
                    offline,
                    strip_fragment,
                };
                run_clean(&cfg, args).await?;
            }
            CliCommand::Rules { url } => run_rules(url.as_deref())?,
            CliCommand::Completions { shell } => run_completions::<Cli>(shell)?,
            CliCommand::Man => run_man::<Cli>()?,
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests;
