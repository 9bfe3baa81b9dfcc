pub mod auth;
pub mod ipn;
pub mod order;
pub mod transaction;

use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

pub use auth::{AuthToken, Credentials};
pub use ipn::{IpnRegistration, IpnRegistrationRequest, NotificationType};
pub use order::{BillingAddress, PaymentOptions, PaymentOrder, DEFAULT_DESCRIPTION};
pub use transaction::{PaymentStatusCode, TransactionStatus};

/// Decoded JSON object returned by the gateway, passed through untouched
pub type Payload = Map<String, Value>;

/// Typed view over a raw gateway payload.
///
/// The client never needs these; they exist for callers who prefer named
/// fields over map lookups. Unknown keys land in each type's `extra` bucket.
pub trait FromPayload: DeserializeOwned {
    fn from_payload(payload: &Payload) -> serde_json::Result<Self> {
        serde_json::from_value(Value::Object(payload.clone()))
    }
}

impl FromPayload for AuthToken {}
impl FromPayload for IpnRegistration {}
impl FromPayload for TransactionStatus {}
