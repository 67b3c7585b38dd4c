//! Parsed twurlrc document and its typed accessors.
//!
//! The document is decoded once into a generic YAML tree and kept
//! immutable. Each accessor walks the part of the tree it needs and
//! fails with a [`ShapeError`] if that part does not look like a
//! twurlrc file. Nothing is validated up front.
//!
//! ```yaml
//! configuration:
//!   default_profile: [userA, CONSUMERKEYA]
//! profiles:
//!   userA:
//!     CONSUMERKEYA:
//!       token: ...
//!       username: userA
//!       consumer_key: CONSUMERKEYA
//!       consumer_secret: ...
//!       secret: ...
//! ```

pub mod loader;
pub mod node;

use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use serde_yaml_ng::Value;

use crate::constants::{
    FIELD_CONSUMER_KEY, FIELD_CONSUMER_SECRET, FIELD_SECRET, FIELD_TOKEN, FIELD_USERNAME,
    KEY_CONFIGURATION, KEY_DEFAULT_PROFILE, KEY_PROFILES,
};
use crate::models::Credentials;

pub use loader::{TwurlrcError, default_path, load, parse};
pub use node::{Node, NodeKind, ShapeError};

/// A parsed `~/.twurlrc` file.
#[derive(Clone)]
pub struct Twurlrc {
    data: Value,
}

impl Twurlrc {
    pub(crate) fn from_value(data: Value) -> Self {
        Self { data }
    }

    fn root(&self) -> Node<'_> {
        Node::root(&self.data)
    }

    fn profile(&self, profile: &str) -> Result<Node<'_>, ShapeError> {
        self.root().get(KEY_PROFILES)?.get(profile)
    }

    /// Credentials for the given user profile and consumer key.
    pub fn credentials(&self, profile: &str, key: &str) -> Result<Credentials, ShapeError> {
        let entry = self.profile(profile)?.get(key)?;
        let field = |name: &str| -> Result<String, ShapeError> {
            entry.get(name)?.as_str().map(str::to_owned)
        };

        Ok(Credentials {
            token: field(FIELD_TOKEN)?,
            username: field(FIELD_USERNAME)?,
            consumer_key: field(FIELD_CONSUMER_KEY)?,
            consumer_secret: field(FIELD_CONSUMER_SECRET)?,
            secret: field(FIELD_SECRET)?,
        })
    }

    /// The `(profile, consumer key)` pair named by
    /// `configuration.default_profile`.
    pub fn default_profile(&self) -> Result<(String, String), ShapeError> {
        let parts = self
            .root()
            .get(KEY_CONFIGURATION)?
            .get(KEY_DEFAULT_PROFILE)?
            .items(2)?;

        Ok((parts[0].as_str()?.to_owned(), parts[1].as_str()?.to_owned()))
    }

    /// Credentials for the default profile.
    pub fn default_credentials(&self) -> Result<Credentials, ShapeError> {
        let (profile, key) = self.default_profile()?;
        self.credentials(&profile, &key)
    }

    /// Consumer keys authorized under `profile`.
    pub fn keys(&self, profile: &str) -> Result<BTreeSet<String>, ShapeError> {
        self.profile(profile)?.keys()
    }

    /// Every profile listed in the file.
    pub fn profiles(&self) -> Result<BTreeSet<String>, ShapeError> {
        self.root().get(KEY_PROFILES)?.keys()
    }
}

impl FromStr for Twurlrc {
    type Err = TwurlrcError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse(s)
    }
}

// The tree holds secrets, so only its top-level kind is shown.
impl fmt::Debug for Twurlrc {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Twurlrc")
            .field("root", &NodeKind::of(&self.data))
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "
configuration:
  default_profile: [alice, KEY1]
profiles:
  alice:
    KEY1:
      token: T1
      username: alice
      consumer_key: KEY1
      consumer_secret: CS1
      secret: S1
";

    fn store(yaml: &str) -> Twurlrc {
        parse(yaml).unwrap()
    }

    #[test]
    fn credentials_reads_all_fields() {
        let creds = store(SAMPLE).credentials("alice", "KEY1").unwrap();
        assert_eq!(creds.token, "T1");
        assert_eq!(creds.username, "alice");
        assert_eq!(creds.consumer_key, "KEY1");
        assert_eq!(creds.consumer_secret, "CS1");
        assert_eq!(creds.secret, "S1");
    }

    #[test]
    fn credentials_unknown_profile() {
        let err = store(SAMPLE).credentials("bob", "KEY1").unwrap_err();
        assert_eq!(err, ShapeError::Missing { path: "profiles.bob".into() });
    }

    #[test]
    fn credentials_unknown_key() {
        let err = store(SAMPLE).credentials("alice", "NOPE").unwrap_err();
        assert_eq!(err, ShapeError::Missing { path: "profiles.alice.NOPE".into() });
    }

    #[test]
    fn credentials_missing_field() {
        let yaml = "
profiles:
  alice:
    KEY1:
      token: T1
      username: alice
      consumer_key: KEY1
      consumer_secret: CS1
";
        let err = store(yaml).credentials("alice", "KEY1").unwrap_err();
        assert_eq!(err, ShapeError::Missing { path: "profiles.alice.KEY1.secret".into() });
    }

    #[test]
    fn credentials_non_string_field() {
        let yaml = "
profiles:
  alice:
    KEY1:
      token: [not, a, scalar]
      username: alice
      consumer_key: KEY1
      consumer_secret: CS1
      secret: S1
";
        let err = store(yaml).credentials("alice", "KEY1").unwrap_err();
        assert_eq!(
            err,
            ShapeError::WrongKind {
                path: "profiles.alice.KEY1.token".into(),
                expected: NodeKind::String,
                found: NodeKind::Sequence,
            }
        );
    }

    #[test]
    fn credentials_from_merged_anchor() {
        let yaml = "
shared: &shared
  username: alice
  consumer_key: KEY1
  consumer_secret: CS1
profiles:
  alice:
    KEY1:
      <<: *shared
      token: T1
      secret: S1
";
        let creds = store(yaml).credentials("alice", "KEY1").unwrap();
        assert_eq!(creds.username, "alice");
        assert_eq!(creds.consumer_key, "KEY1");
        assert_eq!(creds.consumer_secret, "CS1");
        assert_eq!(creds.token, "T1");
        assert_eq!(store(yaml).keys("alice").unwrap().len(), 1);
    }

    #[test]
    fn default_profile_pair() {
        let pair = store(SAMPLE).default_profile().unwrap();
        assert_eq!(pair, ("alice".to_string(), "KEY1".to_string()));
    }

    #[test]
    fn default_profile_with_one_element() {
        let yaml = "configuration:\n  default_profile: [alice]\nprofiles: {}\n";
        let err = store(yaml).default_credentials().unwrap_err();
        assert_eq!(
            err,
            ShapeError::Length {
                path: "configuration.default_profile".into(),
                expected: 2,
                found: 1,
            }
        );
    }

    #[test]
    fn default_profile_with_three_elements() {
        let yaml = "configuration:\n  default_profile: [a, b, c]\n";
        let err = store(yaml).default_profile().unwrap_err();
        assert!(matches!(err, ShapeError::Length { found: 3, .. }));
    }

    #[test]
    fn default_profile_as_string() {
        let yaml = "configuration:\n  default_profile: alice\n";
        let err = store(yaml).default_profile().unwrap_err();
        assert!(matches!(
            err,
            ShapeError::WrongKind { expected: NodeKind::Sequence, found: NodeKind::String, .. }
        ));
    }

    #[test]
    fn default_profile_missing_configuration() {
        let yaml = "profiles: {}\n";
        let err = store(yaml).default_credentials().unwrap_err();
        assert_eq!(err, ShapeError::Missing { path: "configuration".into() });
    }

    #[test]
    fn default_credentials_pointing_nowhere() {
        let yaml = "configuration:\n  default_profile: [ghost, KEY]\nprofiles: {}\n";
        let err = store(yaml).default_credentials().unwrap_err();
        assert_eq!(err, ShapeError::Missing { path: "profiles.ghost".into() });
    }

    #[test]
    fn profiles_missing() {
        let err = store("configuration: {}\n").profiles().unwrap_err();
        assert_eq!(err, ShapeError::Missing { path: "profiles".into() });
    }

    #[test]
    fn profiles_not_a_mapping() {
        let err = store("profiles: [alice, bob]\n").profiles().unwrap_err();
        assert!(matches!(err, ShapeError::WrongKind { found: NodeKind::Sequence, .. }));
    }

    #[test]
    fn keys_of_empty_profile_is_wrong_kind() {
        let err = store("profiles:\n  alice:\n").keys("alice").unwrap_err();
        assert_eq!(
            err,
            ShapeError::WrongKind {
                path: "profiles.alice".into(),
                expected: NodeKind::Mapping,
                found: NodeKind::Null,
            }
        );
    }

    #[test]
    fn scalar_root_fails_every_accessor() {
        let rc = store("just a string");
        assert!(rc.profiles().is_err());
        assert!(rc.keys("alice").is_err());
        assert!(rc.default_profile().is_err());
        assert!(rc.credentials("alice", "KEY1").is_err());
    }

    #[test]
    fn from_str_delegates_to_parse() {
        let rc: Twurlrc = SAMPLE.parse().unwrap();
        assert_eq!(rc.profiles().unwrap().len(), 1);
        assert!("key: [unclosed".parse::<Twurlrc>().is_err());
    }

    #[test]
    fn debug_hides_document() {
        let out = format!("{:?}", store(SAMPLE));
        assert!(out.contains("Twurlrc"));
        assert!(!out.contains("CS1"));
    }

    #[test]
    fn store_is_shareable_across_threads() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Twurlrc>();
    }
}
