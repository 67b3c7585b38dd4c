//! Decoding and loading twurlrc files.
//!
//! Only YAML syntax is checked here. Whether the document has the
//! expected shape is left to the store's accessors.

use std::path::{Path, PathBuf};

use serde_yaml_ng::Value;
use thiserror::Error;

use super::Twurlrc;
use crate::constants::{ENV_HOME, TWURLRC_FILENAME};
use crate::env::Env;

/// Errors while reading or decoding a twurlrc file.
#[derive(Error, Debug)]
pub enum TwurlrcError {
    #[error("failed to read twurlrc file {path}: {source}")]
    ReadFile {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse twurlrc file {path}: {source}")]
    ParseFile {
        path: PathBuf,
        source: serde_yaml_ng::Error,
    },

    #[error("failed to parse twurlrc data: {source}")]
    Parse { source: serde_yaml_ng::Error },
}

/// Given the contents of a twurlrc file, return the parsed store.
pub fn parse(text: &str) -> Result<Twurlrc, TwurlrcError> {
    let data = decode(text).map_err(|source| TwurlrcError::Parse { source })?;
    Ok(Twurlrc::from_value(data))
}

/// Given a path to a twurlrc file, return the parsed store.
pub fn load(path: impl AsRef<Path>) -> Result<Twurlrc, TwurlrcError> {
    let path = path.as_ref();
    let text = std::fs::read_to_string(path).map_err(|source| TwurlrcError::ReadFile {
        path: path.to_path_buf(),
        source,
    })?;
    tracing::debug!(path = %path.display(), bytes = text.len(), "read twurlrc file");

    let data = decode(&text).map_err(|source| TwurlrcError::ParseFile {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(Twurlrc::from_value(data))
}

fn decode(text: &str) -> Result<Value, serde_yaml_ng::Error> {
    let mut data: Value = serde_yaml_ng::from_str(text)?;
    // `<<` merge keys are not resolved by the decoder itself.
    data.apply_merge()?;
    tracing::trace!(root = %super::NodeKind::of(&data), "decoded twurlrc document");
    Ok(data)
}

/// Default twurlrc location: `$HOME/.twurlrc`.
///
/// Falls back to the platform home directory when `HOME` is unset or
/// empty. The file is not checked for existence.
pub fn default_path(env: &Env) -> PathBuf {
    let home = env
        .var(ENV_HOME)
        .ok()
        .filter(|h| !h.is_empty())
        .map(PathBuf::from)
        .or_else(dirs::home_dir)
        .unwrap_or_else(|| PathBuf::from("/"));

    home.join(TWURLRC_FILENAME)
}
