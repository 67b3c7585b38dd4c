//! App-wide constants.
//!
//! Centralises the tool name, file names, environment variable names,
//! and the fixed document keys of a twurlrc file.

/// Display name of the tool (lowercase).
pub const APP_NAME: &str = "twurlrc";

/// Crate version, baked in at compile time.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// File name Twurl writes its credentials to, relative to `$HOME`.
pub const TWURLRC_FILENAME: &str = ".twurlrc";

// ── Environment variable names ──────────────────────────────────────

pub const ENV_HOME: &str = "HOME";
pub const ENV_FILE: &str = "TWURLRC_FILE";
pub const ENV_LOG: &str = "TWURLRC_LOG";

// ── Document keys ───────────────────────────────────────────────────

pub const KEY_CONFIGURATION: &str = "configuration";
pub const KEY_DEFAULT_PROFILE: &str = "default_profile";
pub const KEY_PROFILES: &str = "profiles";

pub const FIELD_TOKEN: &str = "token";
pub const FIELD_USERNAME: &str = "username";
pub const FIELD_CONSUMER_KEY: &str = "consumer_key";
pub const FIELD_CONSUMER_SECRET: &str = "consumer_secret";
pub const FIELD_SECRET: &str = "secret";
