//! Paygate payment gateway client
//!
//! Thin async client for an IPN-style payment gateway REST API: request a
//! bearer token, register an IPN URL, submit an order and poll its status.
//! Every operation returns the gateway's JSON object as-is, or a
//! [`GatewayError`] describing a transport failure, a non-2xx status or a
//! malformed body.

pub mod config;
pub mod core;
pub mod modules;

// Re-export commonly used types
pub use crate::core::{GatewayError, Result};
pub use modules::gateway;
pub use modules::gateway::{
    ClientOptions, Credentials, FromPayload, GatewayClient, Payload, PaymentGateway,
    PaymentOptions,
};
