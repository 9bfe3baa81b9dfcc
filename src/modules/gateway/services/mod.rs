pub mod client;
pub mod gateway_trait;

pub use client::{ClientOptions, GatewayClient};
pub use gateway_trait::PaymentGateway;
