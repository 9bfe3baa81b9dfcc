use std::error::Error as StdError;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::{header, Client, Method, RequestBuilder};
use rust_decimal::Decimal;
use serde::Serialize;
use serde_json::Value;
use tracing::debug;

use super::gateway_trait::PaymentGateway;
use crate::config::gateway::{GatewayConfig, DEFAULT_TIMEOUT_SECS};
use crate::core::error::{describe_chain, extract_error_message, GatewayError, Result};
use crate::core::generate_order_id;
use crate::modules::gateway::models::{
    BillingAddress, Credentials, IpnRegistrationRequest, Payload, PaymentOptions, PaymentOrder,
    DEFAULT_DESCRIPTION,
};

const REQUEST_TOKEN_PATH: &str = "/Auth/RequestToken";
const REGISTER_IPN_PATH: &str = "/URLSetup/RegisterIPN";
const IPN_LIST_PATH: &str = "/URLSetup/GetIpnList";
const SUBMIT_ORDER_PATH: &str = "/Transactions/SubmitOrderRequest";
const TRANSACTION_STATUS_PATH: &str = "/Transactions/GetTransactionStatus";

/// Transport settings for [`GatewayClient`]
#[derive(Debug, Clone)]
pub struct ClientOptions {
    /// Whole-request timeout; `None` waits indefinitely
    pub timeout: Option<Duration>,
}

impl Default for ClientOptions {
    fn default() -> Self {
        Self {
            timeout: Some(Duration::from_secs(DEFAULT_TIMEOUT_SECS)),
        }
    }
}

/// Payment gateway REST client
///
/// Holds the API base URL, the merchant credentials and a pooled HTTP client.
/// Holds no other state, so one instance can be shared across tasks.
#[derive(Debug, Clone)]
pub struct GatewayClient {
    client: Client,
    base_url: String,
    credentials: Credentials,
}

impl GatewayClient {
    /// Create a client with the default transport settings
    pub fn new(base_url: impl Into<String>, credentials: Credentials) -> Result<Self> {
        Self::with_options(base_url, credentials, ClientOptions::default())
    }

    pub fn with_options(
        base_url: impl Into<String>,
        credentials: Credentials,
        options: ClientOptions,
    ) -> Result<Self> {
        let mut builder = Client::builder();
        if let Some(timeout) = options.timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder
            .build()
            .map_err(|e| GatewayError::configuration(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            credentials,
        })
    }

    pub fn from_config(config: &GatewayConfig) -> Result<Self> {
        Self::with_options(
            config.api_base_url.clone(),
            config.credentials(),
            ClientOptions {
                timeout: Some(Duration::from_secs(config.timeout_secs)),
            },
        )
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn request(&self, method: Method, path: &str, token: Option<&str>) -> RequestBuilder {
        let url = format!("{}{}", self.base_url, path);
        debug!(
            method = %method,
            url = %url,
            bearer = token.is_some(),
            "Sending gateway request"
        );

        let builder = self
            .client
            .request(method, url)
            .header(header::CONTENT_TYPE, "application/json")
            .header(header::ACCEPT, "application/json");

        match token {
            Some(token) => builder.bearer_auth(token),
            None => builder,
        }
    }

    async fn do_get(
        &self,
        path: &str,
        query: &[(&str, &str)],
        token: Option<&str>,
    ) -> Result<Payload> {
        let mut builder = self.request(Method::GET, path, token);
        if !query.is_empty() {
            builder = builder.query(query);
        }
        self.execute(builder).await
    }

    async fn do_post<B>(&self, path: &str, body: &B, token: Option<&str>) -> Result<Payload>
    where
        B: Serialize + ?Sized,
    {
        let builder = self.request(Method::POST, path, token).json(body);
        self.execute(builder).await
    }

    async fn execute(&self, builder: RequestBuilder) -> Result<Payload> {
        let response = builder.send().await?;
        let status = response.status().as_u16();
        let body = match response.bytes().await {
            Ok(body) => body,
            Err(e) => return Err(body_read_failure(status, &e)),
        };

        debug!(status, body_len = body.len(), "Gateway responded");
        normalize_response(status, &body)
    }
}

fn is_success(status: u16) -> bool {
    (200..=299).contains(&status)
}

/// The status line arrived but the body could not be read to the end
pub(crate) fn body_read_failure(status: u16, err: &(dyn StdError + 'static)) -> GatewayError {
    let reason = format!("failed to read response body: {}", describe_chain(err));
    if is_success(status) {
        GatewayError::malformed(status, reason)
    } else {
        GatewayError::http_status(status, reason)
    }
}

/// Collapse a received response into the uniform result shape
pub(crate) fn normalize_response(status: u16, body: &[u8]) -> Result<Payload> {
    if !is_success(status) {
        let text = String::from_utf8_lossy(body);
        return Err(GatewayError::http_status(status, extract_error_message(&text)));
    }

    match serde_json::from_slice::<Value>(body) {
        Ok(Value::Object(payload)) => Ok(payload),
        Ok(other) => Err(GatewayError::malformed(
            status,
            format!("expected a JSON object, got {}", json_kind(&other)),
        )),
        Err(e) => Err(GatewayError::malformed(status, e.to_string())),
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[async_trait]
impl PaymentGateway for GatewayClient {
    async fn authenticate(&self) -> Result<Payload> {
        self.do_post(REQUEST_TOKEN_PATH, &self.credentials, None).await
    }

    async fn register_webhook(&self, webhook_url: &str, token: &str) -> Result<Payload> {
        let body = IpnRegistrationRequest::post(webhook_url);
        self.do_post(REGISTER_IPN_PATH, &body, Some(token)).await
    }

    async fn list_webhooks(&self, token: &str) -> Result<Payload> {
        self.do_get(IPN_LIST_PATH, &[], Some(token)).await
    }

    async fn initiate_payment(
        &self,
        amount: Decimal,
        email: &str,
        currency: &str,
        ipn_id: &str,
        callback_url: &str,
        token: &str,
        options: PaymentOptions,
    ) -> Result<Payload> {
        let id = generate_order_id();
        if let Some(requested) = options.order_id.as_deref() {
            debug!(requested, generated = %id, "Ignoring order_id override");
        }

        let order = PaymentOrder {
            id,
            currency: currency.to_string(),
            amount,
            description: options
                .description
                .unwrap_or_else(|| DEFAULT_DESCRIPTION.to_string()),
            callback_url: callback_url.to_string(),
            notification_id: ipn_id.to_string(),
            billing_address: BillingAddress {
                email_address: email.to_string(),
            },
        };

        self.do_post(SUBMIT_ORDER_PATH, &order, Some(token)).await
    }

    async fn check_transaction_status(
        &self,
        order_tracking_id: &str,
        token: &str,
    ) -> Result<Payload> {
        self.do_get(
            TRANSACTION_STATUS_PATH,
            &[("orderTrackingId", order_tracking_id)],
            Some(token),
        )
        .await
    }
}
