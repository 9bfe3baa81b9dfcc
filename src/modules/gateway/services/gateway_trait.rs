use async_trait::async_trait;
use rust_decimal::Decimal;

use crate::core::Result;
use crate::modules::gateway::models::{Payload, PaymentOptions};

/// Payment gateway operations.
///
/// Every call is a single request/response round trip. Successful calls
/// return the gateway's JSON object untouched.
#[async_trait]
pub trait PaymentGateway: Send + Sync {
    /// Exchange the consumer key and secret for a bearer token
    async fn authenticate(&self) -> Result<Payload>;

    /// Register a URL that receives POSTed payment notifications
    async fn register_webhook(&self, webhook_url: &str, token: &str) -> Result<Payload>;

    /// List IPN URLs already registered for this merchant
    async fn list_webhooks(&self, token: &str) -> Result<Payload>;

    /// Submit a payment order under a freshly generated merchant order id
    #[allow(clippy::too_many_arguments)]
    async fn initiate_payment(
        &self,
        amount: Decimal,
        email: &str,
        currency: &str,
        ipn_id: &str,
        callback_url: &str,
        token: &str,
        options: PaymentOptions,
    ) -> Result<Payload>;

    /// Poll the status of an order by its tracking id
    async fn check_transaction_status(&self, order_tracking_id: &str, token: &str)
        -> Result<Payload>;
}
