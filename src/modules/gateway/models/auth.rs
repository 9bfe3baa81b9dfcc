use serde::{Deserialize, Serialize};
use std::fmt;

use super::Payload;

/// Merchant consumer key and secret, fixed for the lifetime of a client
#[derive(Clone, PartialEq, Eq, Serialize)]
pub struct Credentials {
    pub consumer_key: String,
    pub consumer_secret: String,
}

impl Credentials {
    pub fn new(consumer_key: impl Into<String>, consumer_secret: impl Into<String>) -> Self {
        Self {
            consumer_key: consumer_key.into(),
            consumer_secret: consumer_secret.into(),
        }
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("consumer_key", &self.consumer_key)
            .field("consumer_secret", &"[REDACTED]")
            .finish()
    }
}

/// Bearer token issued by `Auth/RequestToken`.
///
/// The client does not cache it; callers keep it until `expiry_date`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct AuthToken {
    pub token: String,

    #[serde(rename = "expiryDate", default)]
    pub expiry_date: Option<String>,

    #[serde(flatten)]
    pub extra: Payload,
}
