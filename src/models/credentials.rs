//! OAuth credential record.

use std::fmt;

use serde::{Deserialize, Serialize};

/// OAuth credentials to make requests on behalf of a user.
///
/// Built fresh by every store lookup; values are copied verbatim from the
/// document with no trimming or coercion.
#[derive(Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Credentials {
    pub token: String,
    pub username: String,
    pub consumer_key: String,
    pub consumer_secret: String,
    pub secret: String,
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("token", &"[REDACTED]")
            .field("username", &self.username)
            .field("consumer_key", &self.consumer_key)
            .field("consumer_secret", &"[REDACTED]")
            .field("secret", &"[REDACTED]")
            .finish()
    }
}
