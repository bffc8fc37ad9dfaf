//! CLI for exercising stashed redirects against a file-backed session.

mod commands;

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use stashed_redirects_core::config::{self, StashConfig};
use stashed_redirects_core::session::MemorySession;
use std::path::PathBuf;

use commands::{run_consume, run_discard, run_forward, run_key, run_stash};

/// Top-level CLI for stashed redirects.
#[derive(Debug, Parser)]
#[command(name = "stashctl")]
#[command(about = "Stash a redirect per purpose in a session and resume it later", long_about = None)]
pub struct Cli {
    /// Session file to read and update (default: ~/.local/state/stashed-redirects/session.json).
    #[arg(long, global = true, value_name = "FILE")]
    pub session: Option<PathBuf>,

    #[command(subcommand)]
    pub command: CliCommand,
}

/// Simulated request the stash is derived from.
#[derive(Debug, Clone, Args)]
pub struct RequestOpts {
    /// HTTP method of the simulated request.
    #[arg(long, default_value = "GET")]
    pub method: String,

    /// Value of the redirect parameter.
    #[arg(long, value_name = "URL")]
    pub param: Option<String>,

    /// Value of the Referer header.
    #[arg(long, value_name = "URL")]
    pub referer: Option<String>,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Print the session key a purpose is stored under.
    Key {
        purpose: String,
    },

    /// Stash a redirect URL for a purpose.
    Stash {
        purpose: String,

        /// "default", "param", "referer", or an explicit URL.
        #[arg(long, default_value = "default", value_name = "SOURCE")]
        from: String,

        #[command(flatten)]
        request: RequestOpts,
    },

    /// Remove and print the validated URL stashed for a purpose; fails if there is none.
    Consume {
        purpose: String,
    },

    /// Remove and print the raw stashed value for a purpose, if any.
    Discard {
        purpose: String,
    },

    /// Print the stashed URL for a purpose (consuming it), or the fallback.
    Forward {
        purpose: String,

        /// URL to print when nothing valid is stashed.
        #[arg(long, value_name = "URL")]
        fallback: String,
    },
}

impl Cli {
    /// Run the parsed command and return the text to print.
    ///
    /// `default_session` is only consulted by commands that touch a session
    /// and were not given `--session`.
    pub fn execute(
        self,
        cfg: &StashConfig,
        default_session: impl FnOnce() -> Result<PathBuf>,
    ) -> Result<String> {
        let explicit = self.session;
        let session_path = move || match explicit {
            Some(path) => Ok(path),
            None => default_session(),
        };

        Ok(match self.command {
            CliCommand::Key { purpose } => run_key(cfg, &purpose),
            CliCommand::Stash {
                purpose,
                from,
                request,
            } => run_stash(cfg, &session_path()?, &purpose, &from, &request)?,
            CliCommand::Consume { purpose } => run_consume(cfg, &session_path()?, &purpose)?,
            CliCommand::Discard { purpose } => {
                run_discard(cfg, &session_path()?, &purpose)?.unwrap_or_default()
            }
            CliCommand::Forward { purpose, fallback } => {
                run_forward(cfg, &session_path()?, &purpose, &fallback)?
            }
        })
    }
}

impl CliCommand {
    pub fn run_from_args() -> Result<()> {
        let cli = Cli::parse();
        let cfg = config::load_or_init()?;
        tracing::debug!("loaded config: {:?}", cfg);

        let output = cli.execute(&cfg, MemorySession::default_path)?;
        if !output.is_empty() {
            println!("{output}");
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests;
