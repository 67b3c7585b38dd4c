//! Clap argument types and file resolution.

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

use twurlrc::env::Env;

/// Inspect the OAuth credentials stored in a Twurl `~/.twurlrc` file.
#[derive(Parser, Debug)]
#[command(name = twurlrc::constants::APP_NAME, version = twurlrc::constants::VERSION)]
pub struct Cli {
    /// Path to the twurlrc file (default: $HOME/.twurlrc).
    #[arg(long, short, global = true, env = twurlrc::constants::ENV_FILE)]
    pub file: Option<PathBuf>,

    /// Output format.
    #[arg(long, global = true, value_enum, default_value_t = OutputFormat::Terminal)]
    pub format: OutputFormat,

    /// Log debug information to stderr.
    #[arg(long, short, global = true, default_value_t = false)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

impl Cli {
    /// The file to read: `--file`/`TWURLRC_FILE`, else the default location.
    pub fn resolve_file(&self, env: &Env) -> PathBuf {
        self.file
            .clone()
            .unwrap_or_else(|| twurlrc::default_path(env))
    }
}

/// Available commands.
#[derive(clap::Subcommand, Debug)]
pub enum Command {
    /// List the profiles in the file.
    Profiles,

    /// List the consumer keys authorized for a profile.
    Keys {
        /// Profile (user) name.
        profile: String,
    },

    /// Show the credentials for a profile and consumer key.
    Show(ShowArgs),

    /// Show the default credentials.
    Default(RevealArgs),

    /// Print the default twurlrc path.
    Path,
}

/// Arguments for the `show` subcommand.
#[derive(Parser, Debug)]
pub struct ShowArgs {
    /// Profile (user) name.
    pub profile: String,

    /// Consumer key.
    pub key: String,

    #[command(flatten)]
    pub reveal: RevealArgs,
}

/// Shared flag for commands that print secrets.
#[derive(Parser, Debug)]
pub struct RevealArgs {
    /// Print token and secrets in full instead of masking them.
    #[arg(long, default_value_t = false)]
    pub reveal: bool,
}

/// Output format for lookups.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Colored human-readable output.
    Terminal,
    /// Pretty-printed JSON.
    Json,
}
