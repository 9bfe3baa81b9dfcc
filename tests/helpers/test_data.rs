// Test Data
//
// Realistic gateway payloads used as mock responses.

use serde_json::{json, Value};

pub const IPN_ID: &str = "e32182ca-0983-4fa0-91bc-c3bb813ba750";
pub const ORDER_TRACKING_ID: &str = "b945e4af-80a5-4ec1-8706-e03f8332fb04";
pub const WEBHOOK_URL: &str = "https://shop.test/payments/ipn";
pub const CALLBACK_URL: &str = "https://shop.test/payments/return";
pub const BUYER_EMAIL: &str = "buyer@shop.test";

pub fn token_payload() -> Value {
    json!({
        "token": "eyJhbGciOiJIUzI1NiJ9.payload.signature",
        "expiryDate": "2025-11-03T10:35:45.5177702Z",
        "error": null,
        "status": "200",
        "message": "Request processed successfully"
    })
}

pub fn ipn_payload() -> Value {
    json!({
        "url": WEBHOOK_URL,
        "created_date": "2025-11-03T10:30:45.887Z",
        "ipn_id": IPN_ID,
        "notification_type": 1,
        "ipn_notification_type_description": "POST",
        "ipn_status": 1,
        "ipn_status_description": "Active",
        "error": null,
        "status": "200"
    })
}

pub fn ipn_list_payload() -> Value {
    json!({
        "ipns": [ipn_payload()],
        "status": "200"
    })
}

pub fn order_payload() -> Value {
    json!({
        "order_tracking_id": ORDER_TRACKING_ID,
        "merchant_reference": "20251103103045",
        "redirect_url": "https://pay.gateway.test/iframe?OrderTrackingId=b945e4af",
        "error": null,
        "status": "200"
    })
}

pub fn status_payload(status_code: u8) -> Value {
    json!({
        "payment_method": "Visa",
        "amount": 1500.5,
        "created_date": "2025-11-03T10:31:02.12Z",
        "confirmation_code": "6513008693186320103009",
        "payment_status_description": "Completed",
        "description": null,
        "message": "Request processed successfully",
        "payment_account": "476173**0010",
        "call_back_url": CALLBACK_URL,
        "status_code": status_code,
        "merchant_reference": "20251103103045",
        "currency": "KES",
        "status": "200"
    })
}
