//! CLI argument parsing and subcommand handlers.

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

pub mod check;
pub mod provider;
pub mod review;
pub mod send;

/// PyFixer AI code review tool.
#[derive(Parser, Debug)]
#[command(name = "pyfixer", about = "Route code reviews across AI providers")]
pub struct Cli {
    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Command,

    /// Config file path override.
    #[arg(long, global = true)]
    pub config: Option<String>,
}

/// Top-level subcommands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Verify the provider roster and configuration.
    Check,
    /// Send a one-shot prompt to the active provider.
    Send {
        /// Prompt text.
        prompt: String,
        /// Route to this provider instead of the active one.
        #[arg(long)]
        provider: Option<String>,
    },
    /// Manage providers and credentials.
    Provider {
        /// Provider subcommand.
        #[command(subcommand)]
        action: ProviderCommand,
    },
    /// Analyze source files and report issues.
    Analyze {
        /// Files to analyze.
        #[arg(required = true)]
        files: Vec<PathBuf>,
        /// Print the raw report as JSON.
        #[arg(long)]
        json: bool,
    },
    /// Rewrite a file to fix one reported issue.
    Fix {
        /// File to fix.
        file: PathBuf,
        /// Line the issue was reported on.
        #[arg(long)]
        line: u32,
        /// The reported issue message.
        #[arg(long)]
        message: String,
        /// Extra instruction for the fix.
        #[arg(long)]
        direction: Option<String>,
    },
    /// Reformat a file without changing behavior.
    Format {
        /// File to format.
        file: PathBuf,
    },
}

/// Provider management subcommands.
#[derive(Subcommand, Debug)]
pub enum ProviderCommand {
    /// List all providers with their status.
    List,
    /// Switch the active provider.
    Switch {
        /// Provider identifier.
        id: String,
    },
    /// Store the API credential for a provider.
    SetKey {
        /// Provider identifier.
        id: String,
        /// API key.
        key: String,
    },
    /// Remove the stored credential for a provider.
    ClearKey {
        /// Provider identifier.
        id: String,
    },
}

impl Cli {
    /// Dispatch to the subcommand handler.
    pub async fn run(self) -> Result<()> {
        let config_flag = self.config.as_deref();
        match self.command {
            Command::Check => check::run(config_flag),
            Command::Send { prompt, provider } => {
                send::run(config_flag, provider.as_deref(), &prompt).await
            }
            Command::Provider { action } => provider::run(&action, config_flag),
            Command::Analyze { files, json } => review::analyze(config_flag, &files, json).await,
            Command::Fix {
                file,
                line,
                message,
                direction,
            } => review::fix(config_flag, &file, line, &message, direction.as_deref()).await,
            Command::Format { file } => review::format(config_flag, &file).await,
        }
    }
}
