// Property-based tests for merchant order id generation
//
// The id is the first 14 digits of the RFC 3339 UTC timestamp, so for any
// instant it must be deterministic, all-digit and YYYYMMDDhhmmss.

use chrono::{DateTime, Datelike, TimeZone, Timelike, Utc};
use paygate::core::order_id::{order_id_at, ORDER_ID_LEN};
use proptest::prelude::*;

// 1970-01-01 through 9999-12-31
const MAX_SECS: i64 = 253_402_300_799;

fn instant(secs: i64, nanos: u32) -> DateTime<Utc> {
    Utc.timestamp_opt(secs, nanos).unwrap()
}

proptest! {
    #[test]
    fn test_order_id_is_deterministic(secs in 0i64..MAX_SECS, nanos in 0u32..1_000_000_000u32) {
        let ts = instant(secs, nanos);
        prop_assert_eq!(order_id_at(ts), order_id_at(ts));
    }

    #[test]
    fn test_order_id_is_fourteen_digits(secs in 0i64..MAX_SECS, nanos in 0u32..1_000_000_000u32) {
        let id = order_id_at(instant(secs, nanos));

        prop_assert!(id.len() <= ORDER_ID_LEN);
        prop_assert_eq!(id.len(), 14);
        prop_assert!(id.chars().all(|c| c.is_ascii_digit()), "non-digit in {}", id);
    }

    #[test]
    fn test_order_id_encodes_calendar_fields(secs in 0i64..MAX_SECS) {
        let ts = instant(secs, 0);
        let expected = format!(
            "{:04}{:02}{:02}{:02}{:02}{:02}",
            ts.year(),
            ts.month(),
            ts.day(),
            ts.hour(),
            ts.minute(),
            ts.second()
        );
        prop_assert_eq!(order_id_at(ts), expected);
    }

    #[test]
    fn test_ids_within_one_second_collide(secs in 0i64..MAX_SECS, a in 0u32..1_000_000_000u32, b in 0u32..1_000_000_000u32) {
        prop_assert_eq!(order_id_at(instant(secs, a)), order_id_at(instant(secs, b)));
    }
}

#[test]
fn test_known_instant() {
    let ts = Utc.with_ymd_and_hms(2024, 2, 29, 23, 59, 59).unwrap();
    assert_eq!(order_id_at(ts), "20240229235959");
}
