//! JSON output renderer.
//!
//! Emits full, unmasked records: this format is meant for scripts.

use std::collections::BTreeSet;

use crate::models::Credentials;
use crate::output::{DefaultPair, OutputRenderer};

/// JSON output renderer.
pub struct JsonRenderer;

impl OutputRenderer for JsonRenderer {
    fn render_profiles(&self, profiles: &BTreeSet<String>, default: DefaultPair<'_>) -> String {
        let output = serde_json::json!({
            "profiles": profiles,
            "default_profile": default.map(|(profile, _)| profile),
        });
        to_pretty(&output)
    }

    fn render_keys(
        &self,
        profile: &str,
        keys: &BTreeSet<String>,
        default: DefaultPair<'_>,
    ) -> String {
        let default_key = default
            .filter(|(p, _)| *p == profile)
            .map(|(_, key)| key);
        let output = serde_json::json!({
            "profile": profile,
            "keys": keys,
            "default_key": default_key,
        });
        to_pretty(&output)
    }

    fn render_credentials(&self, profile: &str, credentials: &Credentials) -> String {
        let output = serde_json::json!({
            "profile": profile,
            "credentials": credentials,
        });
        to_pretty(&output)
    }
}

fn to_pretty(value: &serde_json::Value) -> String {
    serde_json::to_string_pretty(value).unwrap_or_else(|_| "{}".to_string())
}
