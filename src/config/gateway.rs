use crate::core::{GatewayError, Result};
use crate::modules::gateway::models::Credentials;

/// Default whole-request timeout in seconds
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Gateway endpoint and merchant credentials
#[derive(Clone)]
pub struct GatewayConfig {
    pub api_base_url: String,
    pub consumer_key: String,
    pub consumer_secret: String,
    pub timeout_secs: u64,
}

impl GatewayConfig {
    pub fn from_lookup<F>(lookup: &F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        Ok(GatewayConfig {
            api_base_url: required(lookup, "GATEWAY_API_BASE_URL")?,
            consumer_key: required(lookup, "GATEWAY_CONSUMER_KEY")?,
            consumer_secret: required(lookup, "GATEWAY_CONSUMER_SECRET")?,
            timeout_secs: lookup("GATEWAY_TIMEOUT_SECS")
                .unwrap_or_else(|| DEFAULT_TIMEOUT_SECS.to_string())
                .parse()
                .map_err(|_| {
                    GatewayError::configuration("Invalid GATEWAY_TIMEOUT_SECS")
                })?,
        })
    }

    pub fn credentials(&self) -> Credentials {
        Credentials::new(self.consumer_key.clone(), self.consumer_secret.clone())
    }

    pub fn validate(&self) -> Result<()> {
        for (name, value) in [
            ("GATEWAY_API_BASE_URL", &self.api_base_url),
            ("GATEWAY_CONSUMER_KEY", &self.consumer_key),
            ("GATEWAY_CONSUMER_SECRET", &self.consumer_secret),
        ] {
            if value.trim().is_empty() {
                return Err(GatewayError::configuration(format!("{} is empty", name)));
            }
        }

        if self.timeout_secs == 0 {
            return Err(GatewayError::configuration(
                "Gateway timeout must be greater than 0",
            ));
        }

        Ok(())
    }
}

impl std::fmt::Debug for GatewayConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GatewayConfig")
            .field("api_base_url", &self.api_base_url)
            .field("consumer_key", &self.consumer_key)
            .field("consumer_secret", &"[REDACTED]")
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}

fn required<F>(lookup: &F, name: &str) -> Result<String>
where
    F: Fn(&str) -> Option<String>,
{
    lookup(name).ok_or_else(|| GatewayError::configuration(format!("{} not set", name)))
}
