//! Environment variable abstraction for testability.
//!
//! [`Env::real()`] reads the process environment. Unit tests build an
//! [`Env::mock()`] instead, so resolving `$HOME` never needs `unsafe`
//! calls to [`std::env::set_var`].

use std::collections::HashMap;
use std::env::VarError;

/// Environment variable reader.
#[derive(Clone, Debug, Default)]
pub struct Env {
    overrides: Option<HashMap<String, String>>,
}

impl Env {
    /// Create an `Env` that reads from the real process environment.
    pub fn real() -> Self {
        Self { overrides: None }
    }

    /// Create an `Env` backed by explicit key-value pairs only.
    #[cfg(test)]
    pub fn mock(vars: impl IntoIterator<Item = (impl Into<String>, impl Into<String>)>) -> Self {
        Self {
            overrides: Some(
                vars.into_iter()
                    .map(|(k, v)| (k.into(), v.into()))
                    .collect(),
            ),
        }
    }

    /// Look up an environment variable by name.
    pub fn var(&self, name: &str) -> Result<String, VarError> {
        match &self.overrides {
            Some(map) => map.get(name).cloned().ok_or(VarError::NotPresent),
            None => std::env::var(name),
        }
    }
}
