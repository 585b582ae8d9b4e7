//! Fallback-chain field extraction from loose JSON records.

use chrono::NaiveDate;
use serde_json::Value;

/// First string value found under `keys`, in order.
pub fn string_field(value: &Value, keys: &[&str]) -> Option<String> {
    keys.iter()
        .find_map(|key| value.get(*key).and_then(Value::as_str))
        .map(ToOwned::to_owned)
}

/// Like [`string_field`], with a default for records missing every alias.
pub fn string_or(value: &Value, keys: &[&str], default: &str) -> String {
    string_field(value, keys).unwrap_or_else(|| default.to_owned())
}

/// First numeric value found under `keys`, in order.
pub fn number_field(value: &Value, keys: &[&str]) -> Option<f64> {
    keys.iter()
        .find_map(|key| value.get(*key).and_then(Value::as_f64))
}

/// First value under `keys` rendered as a display amount.
///
/// Amounts arrive either as numbers or as preformatted strings ("$4,200");
/// both are kept render-ready. Records missing every alias display "0".
pub fn amount_field(value: &Value, keys: &[&str]) -> String {
    keys.iter()
        .find_map(|key| {
            value.get(*key).and_then(|v| match v {
                Value::String(s) => Some(s.clone()),
                Value::Number(n) => Some(n.to_string()),
                _ => None,
            })
        })
        .unwrap_or_else(|| "0".to_owned())
}

/// First `%Y-%m-%d` date found under `keys`, in order.
///
/// Unparseable dates normalize to `None` so they fall out of calendar
/// aggregation instead of failing the record.
pub fn date_field(value: &Value, keys: &[&str]) -> Option<NaiveDate> {
    string_field(value, keys).and_then(|raw| NaiveDate::parse_from_str(&raw, "%Y-%m-%d").ok())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_string_field_fallback_order() {
        let value = json!({"guest": "Leo", "guestName": "Leo Chen"});
        assert_eq!(
            string_field(&value, &["guestName", "guest"]).as_deref(),
            Some("Leo Chen")
        );
        assert_eq!(
            string_field(&json!({"guest": "Leo"}), &["guestName", "guest"]).as_deref(),
            Some("Leo")
        );
        assert_eq!(string_field(&json!({}), &["guestName", "guest"]), None);
    }

    #[test]
    fn test_amount_field_tolerates_shapes() {
        assert_eq!(amount_field(&json!({"total": "$4,200"}), &["total", "amount"]), "$4,200");
        assert_eq!(amount_field(&json!({"amount": 1980}), &["total", "amount"]), "1980");
        assert_eq!(amount_field(&json!({}), &["total", "amount"]), "0");
        assert_eq!(amount_field(&json!({"total": null, "amount": 5}), &["total", "amount"]), "5");
    }

    #[test]
    fn test_date_field_parses_and_tolerates() {
        let value = json!({"checkIn": "2025-11-24"});
        assert_eq!(
            date_field(&value, &["checkIn", "startDate"]),
            Some(NaiveDate::from_ymd_opt(2025, 11, 24).unwrap())
        );
        assert_eq!(date_field(&json!({"checkIn": "soon"}), &["checkIn"]), None);
        assert_eq!(date_field(&json!({}), &["checkIn"]), None);
    }
}
