pub mod models;
pub mod services;

pub use models::{
    AuthToken, BillingAddress, Credentials, FromPayload, IpnRegistration, NotificationType,
    Payload, PaymentOptions, PaymentOrder, PaymentStatusCode, TransactionStatus,
};
pub use services::{ClientOptions, GatewayClient, PaymentGateway};
