use serde::{Deserialize, Serialize};
use std::fmt;

use super::Payload;

/// Numeric `status_code` reported by `GetTransactionStatus`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum PaymentStatusCode {
    Invalid = 0,
    Completed = 1,
    Failed = 2,
    Reversed = 3,
}

impl PaymentStatusCode {
    pub fn from_code(code: u8) -> Option<Self> {
        match code {
            0 => Some(PaymentStatusCode::Invalid),
            1 => Some(PaymentStatusCode::Completed),
            2 => Some(PaymentStatusCode::Failed),
            3 => Some(PaymentStatusCode::Reversed),
            _ => None,
        }
    }

    pub fn code(self) -> u8 {
        self as u8
    }

    /// No further state change is expected from the gateway
    pub fn is_final(self) -> bool {
        !matches!(self, PaymentStatusCode::Invalid)
    }
}

impl TryFrom<u8> for PaymentStatusCode {
    type Error = String;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        Self::from_code(code).ok_or_else(|| format!("Invalid payment status code: {}", code))
    }
}

impl From<PaymentStatusCode> for u8 {
    fn from(status: PaymentStatusCode) -> Self {
        status.code()
    }
}

impl fmt::Display for PaymentStatusCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PaymentStatusCode::Invalid => write!(f, "INVALID"),
            PaymentStatusCode::Completed => write!(f, "COMPLETED"),
            PaymentStatusCode::Failed => write!(f, "FAILED"),
            PaymentStatusCode::Reversed => write!(f, "REVERSED"),
        }
    }
}

/// Partially typed view of a transaction status payload
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct TransactionStatus {
    #[serde(default, alias = "orderTrackingId")]
    pub order_tracking_id: Option<String>,

    pub status_code: PaymentStatusCode,

    #[serde(default)]
    pub payment_method: Option<String>,

    #[serde(flatten)]
    pub extra: Payload,
}
