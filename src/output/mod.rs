//! Output renderers: terminal and JSON.

pub mod json;
pub mod terminal;

use std::collections::BTreeSet;

use crate::models::Credentials;

/// The `(profile, consumer key)` pair a listing should mark as default.
pub type DefaultPair<'a> = Option<(&'a str, &'a str)>;

/// Trait for rendering twurlrc lookups to an output format.
pub trait OutputRenderer {
    /// Render the profile names of a file.
    fn render_profiles(&self, profiles: &BTreeSet<String>, default: DefaultPair<'_>) -> String;

    /// Render the consumer keys of one profile.
    fn render_keys(
        &self,
        profile: &str,
        keys: &BTreeSet<String>,
        default: DefaultPair<'_>,
    ) -> String;

    /// Render one credential record.
    fn render_credentials(&self, profile: &str, credentials: &Credentials) -> String;
}
