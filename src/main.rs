//! twurlrc — inspect Twurl OAuth credentials from the command line.
//!
//! Entry point and error handling boundary. Uses `anyhow` for
//! ergonomic error propagation and user-facing messages.

mod cli;

use std::path::Path;
use std::process;

use anyhow::{Context, Result};
use clap::Parser;

use cli::args::{Cli, Command, OutputFormat};
use twurlrc::Twurlrc;
use twurlrc::env::Env;
use twurlrc::output::OutputRenderer;
use twurlrc::output::json::JsonRenderer;
use twurlrc::output::terminal::TerminalRenderer;

fn main() {
    if let Err(err) = run() {
        eprintln!("Error: {err:#}");
        process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    cli::init_tracing(cli.verbose);

    let env = Env::real();
    let path = cli.resolve_file(&env);

    match &cli.command {
        Command::Path => {
            println!("{}", path.display());
            Ok(())
        }
        Command::Profiles => {
            let rc = open(&path)?;
            let profiles = rc.profiles().context("failed to list profiles")?;
            let default = rc.default_profile().ok();
            let default = default.as_ref().map(|(p, k)| (p.as_str(), k.as_str()));
            print!("{}", renderer(cli.format, false).render_profiles(&profiles, default));
            Ok(())
        }
        Command::Keys { profile } => {
            let rc = open(&path)?;
            let keys = rc
                .keys(profile)
                .with_context(|| format!("failed to list keys for profile '{profile}'"))?;
            let default = rc.default_profile().ok();
            let default = default.as_ref().map(|(p, k)| (p.as_str(), k.as_str()));
            print!("{}", renderer(cli.format, false).render_keys(profile, &keys, default));
            Ok(())
        }
        Command::Show(args) => {
            let rc = open(&path)?;
            let credentials = rc.credentials(&args.profile, &args.key).with_context(|| {
                format!(
                    "failed to read credentials for '{}' / '{}'",
                    args.profile, args.key
                )
            })?;
            let output = renderer(cli.format, args.reveal.reveal)
                .render_credentials(&args.profile, &credentials);
            print!("{output}");
            Ok(())
        }
        Command::Default(args) => {
            let rc = open(&path)?;
            let (profile, key) = rc
                .default_profile()
                .context("failed to resolve the default profile")?;
            tracing::debug!(%profile, %key, "resolved default profile");
            let credentials = rc
                .credentials(&profile, &key)
                .context("failed to read the default credentials")?;
            let output =
                renderer(cli.format, args.reveal).render_credentials(&profile, &credentials);
            print!("{output}");
            Ok(())
        }
    }
}

fn open(path: &Path) -> Result<Twurlrc> {
    twurlrc::load(path).context("could not open twurlrc file")
}

fn renderer(format: OutputFormat, reveal: bool) -> Box<dyn OutputRenderer> {
    match format {
        OutputFormat::Terminal => Box::new(TerminalRenderer::new(reveal)),
        OutputFormat::Json => Box::new(JsonRenderer),
    }
}
