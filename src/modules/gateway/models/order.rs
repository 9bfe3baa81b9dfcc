use rust_decimal::Decimal;
use serde::Serialize;

/// Description sent when the caller supplies none
pub const DEFAULT_DESCRIPTION: &str = "Payment";

/// Optional knobs for `initiate_payment`
#[derive(Debug, Clone, Default)]
pub struct PaymentOptions {
    /// Order description, defaults to [`DEFAULT_DESCRIPTION`]
    pub description: Option<String>,

    /// Accepted for compatibility but never sent. The generated id is always
    /// used until the gateway's override semantics are confirmed.
    pub order_id: Option<String>,
}

impl PaymentOptions {
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_order_id(mut self, order_id: impl Into<String>) -> Self {
        self.order_id = Some(order_id.into());
        self
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BillingAddress {
    pub email_address: String,
}

/// Body of `Transactions/SubmitOrderRequest`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PaymentOrder {
    pub id: String,
    pub currency: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub amount: Decimal,
    pub description: String,
    pub callback_url: String,
    pub notification_id: String,
    pub billing_address: BillingAddress,
}
