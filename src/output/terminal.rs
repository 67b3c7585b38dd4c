//! Terminal renderer: styled listings and credential cards.
//!
//! Secret values are masked unless the renderer is built with `reveal`.

use std::collections::BTreeSet;

use colored::Colorize;

use crate::models::Credentials;
use crate::output::{DefaultPair, OutputRenderer};

/// Number of trailing characters left visible in a masked secret.
const VISIBLE_SUFFIX: usize = 4;

/// Terminal output renderer with colored text.
pub struct TerminalRenderer {
    pub reveal: bool,
}

impl TerminalRenderer {
    pub fn new(reveal: bool) -> Self {
        Self { reveal }
    }

    fn secret(&self, value: &str) -> String {
        if self.reveal {
            value.to_string()
        } else {
            mask(value)
        }
    }
}

impl OutputRenderer for TerminalRenderer {
    fn render_profiles(&self, profiles: &BTreeSet<String>, default: DefaultPair<'_>) -> String {
        if profiles.is_empty() {
            return format!("{}\n", "  No profiles found.".dimmed());
        }

        let mut output = String::new();
        for profile in profiles {
            if default.is_some_and(|(p, _)| p == profile.as_str()) {
                output.push_str(&format!("  {} {}\n", profile.bold(), "(default)".green()));
            } else {
                output.push_str(&format!("  {profile}\n"));
            }
        }
        output
    }

    fn render_keys(
        &self,
        profile: &str,
        keys: &BTreeSet<String>,
        default: DefaultPair<'_>,
    ) -> String {
        let mut output = format!("  {}\n", profile.bold());
        if keys.is_empty() {
            output.push_str(&format!("    {}\n", "no consumer keys".dimmed()));
            return output;
        }

        for key in keys {
            if default == Some((profile, key.as_str())) {
                output.push_str(&format!("    {} {}\n", key, "(default)".green()));
            } else {
                output.push_str(&format!("    {key}\n"));
            }
        }
        output
    }

    fn render_credentials(&self, profile: &str, credentials: &Credentials) -> String {
        let rows = [
            ("username:", credentials.username.clone()),
            ("consumer_key:", credentials.consumer_key.clone()),
            ("consumer_secret:", self.secret(&credentials.consumer_secret)),
            ("token:", self.secret(&credentials.token)),
            ("secret:", self.secret(&credentials.secret)),
        ];

        let mut output = format!("  {}\n", profile.bold());
        for (label, value) in rows {
            let label = format!("{label:<17}");
            output.push_str(&format!("    {}{}\n", label.cyan(), value));
        }
        output
    }
}

/// Replace all but the last few characters with bullets.
///
/// Short values are masked entirely so the suffix never gives most of
/// the secret away.
fn mask(value: &str) -> String {
    let len = value.chars().count();
    if len <= VISIBLE_SUFFIX * 2 {
        return "•".repeat(len.max(1));
    }
    let suffix: String = value.chars().skip(len - VISIBLE_SUFFIX).collect();
    format!("{}{suffix}", "•".repeat(len - VISIBLE_SUFFIX))
}
