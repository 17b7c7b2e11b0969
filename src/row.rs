//! Defensive field access over loosely-typed data-store rows.
//!
//! Rows arrive as JSON objects whose field names drifted over time (legacy
//! Portuguese columns, joined relations, renamed fields). The helpers here
//! read the first populated field among an ordered list of candidate keys
//! and treat missing or mistyped values as absent. Keys beginning with `/`
//! are resolved as JSON pointers so that joined relations such as
//! `/profiles/nome` can be addressed directly.

use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime, Utc};
use serde_json::Value;

fn field<'a>(row: &'a Value, key: &str) -> Option<&'a Value> {
    if key.starts_with('/') {
        row.pointer(key)
    } else {
        row.get(key)
    }
}

fn as_text(value: &Value) -> Option<String> {
    match value {
        Value::String(text) if !text.trim().is_empty() => Some(text.trim().to_owned()),
        Value::Number(number) => Some(number.to_string()),
        Value::Bool(flag) => Some(flag.to_string()),
        _ => None,
    }
}

#[expect(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    reason = "values are checked to be finite and non-negative before rounding"
)]
fn as_count(value: &Value) -> Option<u64> {
    match value {
        Value::Number(number) => number.as_u64().or_else(|| {
            number
                .as_f64()
                .filter(|float| float.is_finite() && *float >= 0.0)
                .map(|float| float.round() as u64)
        }),
        Value::String(text) => text.trim().parse().ok(),
        _ => None,
    }
}

/// Returns the first non-blank textual value among `keys`, trimmed.
///
/// Numbers and booleans are rendered with their JSON spelling so that
/// numeric identifiers survive the trip.
#[must_use]
pub fn text(row: &Value, keys: &[&str]) -> Option<String> {
    keys.iter()
        .find_map(|key| field(row, key).and_then(as_text))
}

/// Returns the first value among `keys` that reads as a non-negative count.
#[must_use]
pub fn count(row: &Value, keys: &[&str]) -> Option<u64> {
    keys.iter()
        .find_map(|key| field(row, key).and_then(as_count))
}

/// Returns whether any of `keys` holds a truthy flag.
///
/// Accepts JSON booleans, non-zero numbers and the strings `true`, `1`,
/// `sim` and `yes` (case-insensitive).
#[must_use]
pub fn flag(row: &Value, keys: &[&str]) -> bool {
    keys.iter().any(|key| match field(row, key) {
        Some(Value::Bool(flag)) => *flag,
        Some(Value::Number(number)) => number.as_f64().is_some_and(|value| value != 0.0),
        Some(Value::String(text)) => matches!(
            text.trim().to_lowercase().as_str(),
            "true" | "1" | "sim" | "yes"
        ),
        _ => false,
    })
}

/// Returns the first value among `keys` that parses as a timestamp.
#[must_use]
pub fn timestamp(row: &Value, keys: &[&str]) -> Option<DateTime<Utc>> {
    stamped(row, keys).map(|stamp| stamp.with_timezone(&Utc))
}

/// Like [`timestamp`], but keeps the offset the row was written with so
/// that the calendar date matches the stored text.
#[must_use]
pub fn stamped(row: &Value, keys: &[&str]) -> Option<DateTime<FixedOffset>> {
    keys.iter().find_map(|key| {
        field(row, key)
            .and_then(as_text)
            .and_then(|raw| parse_stamped(&raw))
    })
}

/// Returns the first JSON object among `keys`.
///
/// String values holding serialised JSON objects are decoded, since some
/// webhook producers store payloads as text.
#[must_use]
pub fn object(row: &Value, keys: &[&str]) -> Option<Value> {
    keys.iter().find_map(|key| match field(row, key) {
        Some(value @ Value::Object(_)) => Some(value.clone()),
        Some(Value::String(text)) => serde_json::from_str::<Value>(text)
            .ok()
            .filter(Value::is_object),
        _ => None,
    })
}

/// Returns the first JSON array among `keys`, or an empty slice.
#[must_use]
pub fn array<'a>(row: &'a Value, keys: &[&str]) -> &'a [Value] {
    keys.iter()
        .find_map(|key| field(row, key).and_then(Value::as_array))
        .map(Vec::as_slice)
        .unwrap_or_default()
}

/// Parses the timestamp spellings produced by the data store.
///
/// Accepts RFC 3339, `YYYY-MM-DD HH:MM:SS[.f]±HH[:MM]`, offset-less date
/// times (read as UTC) and bare dates (midnight UTC).
#[must_use]
pub fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    parse_stamped(raw).map(|stamp| stamp.with_timezone(&Utc))
}

/// Parses the same spellings as [`parse_timestamp`], keeping the written
/// offset. Offset-less values get `+00:00`.
#[must_use]
pub fn parse_stamped(raw: &str) -> Option<DateTime<FixedOffset>> {
    let trimmed = raw.trim();
    if let Ok(parsed) = DateTime::parse_from_rfc3339(trimmed) {
        return Some(parsed);
    }
    if let Ok(parsed) = DateTime::parse_from_str(trimmed, "%Y-%m-%d %H:%M:%S%.f%#z") {
        return Some(parsed);
    }
    for format in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"] {
        if let Ok(naive) = NaiveDateTime::parse_from_str(trimmed, format) {
            return Some(naive.and_utc().fixed_offset());
        }
    }
    NaiveDate::parse_from_str(trimmed, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc().fixed_offset())
}

#[cfg(test)]
mod tests {
    use super::{array, count, flag, object, parse_timestamp, stamped, text, timestamp};
    use rstest::rstest;
    use serde_json::json;

    #[rstest]
    fn text_prefers_first_populated_key() {
        let row = json!({"numero": "", "case_number": "0001234-55.2024.8.26.0100"});
        assert_eq!(
            text(&row, &["numero", "case_number"]).as_deref(),
            Some("0001234-55.2024.8.26.0100")
        );
    }

    #[rstest]
    fn text_resolves_json_pointers() {
        let row = json!({"profiles": {"nome": "Ana"}});
        assert_eq!(text(&row, &["actor_name", "/profiles/nome"]).as_deref(), Some("Ana"));
    }

    #[rstest]
    fn text_ignores_objects_and_nulls() {
        let row = json!({"a": null, "b": {"x": 1}});
        assert_eq!(text(&row, &["a", "b"]), None);
    }

    #[rstest]
    #[case(json!({"n": 4}), Some(4))]
    #[case(json!({"n": "12"}), Some(12))]
    #[case(json!({"n": 1500.4}), Some(1500))]
    #[case(json!({"n": -3}), None)]
    #[case(json!({"n": "abc"}), None)]
    fn count_reads_numbers_and_numeric_strings(
        #[case] row: serde_json::Value,
        #[case] expected: Option<u64>,
    ) {
        assert_eq!(count(&row, &["n"]), expected);
    }

    #[rstest]
    #[case(json!({"f": true}), true)]
    #[case(json!({"f": "sim"}), true)]
    #[case(json!({"f": 0}), false)]
    #[case(json!({}), false)]
    fn flag_accepts_truthy_spellings(#[case] row: serde_json::Value, #[case] expected: bool) {
        assert_eq!(flag(&row, &["f"]), expected);
    }

    #[rstest]
    #[case("2024-03-01T10:30:00Z", "2024-03-01T10:30:00+00:00")]
    #[case("2024-03-01T10:30:00.123456+00:00", "2024-03-01T10:30:00.123456+00:00")]
    #[case("2024-03-01 10:30:00+00", "2024-03-01T10:30:00+00:00")]
    #[case("2024-03-01T10:30:00", "2024-03-01T10:30:00+00:00")]
    #[case("2024-03-01", "2024-03-01T00:00:00+00:00")]
    fn parse_timestamp_accepts_store_spellings(#[case] raw: &str, #[case] expected: &str) {
        let parsed = parse_timestamp(raw).expect("timestamp should parse");
        assert_eq!(parsed.to_rfc3339(), expected);
    }

    #[rstest]
    fn timestamp_skips_unparseable_candidates() {
        let row = json!({"created": "ontem", "created_at": "2024-03-01"});
        assert!(timestamp(&row, &["created", "created_at"]).is_some());
    }

    #[rstest]
    fn stamped_keeps_the_written_offset() {
        let row = json!({"created_at": "2024-08-05T22:00:00-03:00"});
        let local = stamped(&row, &["created_at"]).expect("timestamp should parse");
        assert_eq!(local.date_naive().to_string(), "2024-08-05");
        let utc = timestamp(&row, &["created_at"]).expect("timestamp should parse");
        assert_eq!(utc.date_naive().to_string(), "2024-08-06");
    }

    #[rstest]
    fn object_decodes_serialised_payloads() {
        let row = json!({"payload": "{\"processo_id\": \"42\"}"});
        let payload = object(&row, &["payload"]).expect("payload should decode");
        assert_eq!(payload["processo_id"], "42");
    }

    #[rstest]
    fn array_defaults_to_empty() {
        let row = json!({"movimentacoes": "n/a"});
        assert!(array(&row, &["movimentacoes"]).is_empty());
    }
}
