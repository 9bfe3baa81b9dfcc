pub mod error;
pub mod order_id;

pub use error::{GatewayError, Result};
pub use order_id::{generate_order_id, order_id_at};
