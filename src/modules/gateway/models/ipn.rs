use serde::{Deserialize, Serialize};
use std::fmt;

use super::Payload;

/// HTTP method the gateway uses when calling the IPN URL
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum NotificationType {
    Get,
    Post,
}

impl fmt::Display for NotificationType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NotificationType::Get => write!(f, "GET"),
            NotificationType::Post => write!(f, "POST"),
        }
    }
}

/// Body of `URLSetup/RegisterIPN`
#[derive(Debug, Clone, Serialize)]
pub struct IpnRegistrationRequest<'a> {
    pub url: &'a str,
    pub ipn_notification_type: NotificationType,
}

impl<'a> IpnRegistrationRequest<'a> {
    /// Registrations from this client always ask for POSTed notifications
    pub fn post(url: &'a str) -> Self {
        Self {
            url,
            ipn_notification_type: NotificationType::Post,
        }
    }
}

/// A registered IPN endpoint as reported by the gateway
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct IpnRegistration {
    pub ipn_id: String,
    pub url: String,

    #[serde(rename = "ipn_notification_type_description", default)]
    pub notification_type: Option<NotificationType>,

    #[serde(flatten)]
    pub extra: Payload,
}
