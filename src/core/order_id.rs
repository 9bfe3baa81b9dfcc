use chrono::{DateTime, SecondsFormat, Utc};

/// Maximum length of a generated merchant order id
pub const ORDER_ID_LEN: usize = 14;

/// Merchant order id for the given instant.
///
/// The RFC 3339 rendering of the UTC timestamp is reduced to its digits and
/// cut to the first 14, which yields `YYYYMMDDhhmmss`. Two orders submitted
/// within the same second get the same id.
pub fn order_id_at(timestamp: DateTime<Utc>) -> String {
    timestamp
        .to_rfc3339_opts(SecondsFormat::AutoSi, true)
        .chars()
        .filter(char::is_ascii_digit)
        .take(ORDER_ID_LEN)
        .collect()
}

/// Merchant order id for the current instant
pub fn generate_order_id() -> String {
    order_id_at(Utc::now())
}
